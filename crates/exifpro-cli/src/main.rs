mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "exifpro", about = "Image metadata viewer and landing-site builder")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show grouped metadata of one or more images
    Info(commands::info::InfoArgs),
    /// Explain a single metadata tag
    Explain(commands::explain::ExplainArgs),
    /// Build the localized landing site
    #[command(subcommand)]
    Site(commands::site::SiteCommand),
    /// Print or save a default site config
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Explain(args) => commands::explain::run(args),
        Commands::Site(cmd) => commands::site::run(cmd),
        Commands::Config(args) => commands::config::run(args),
    }
}
