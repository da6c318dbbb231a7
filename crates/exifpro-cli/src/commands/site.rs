use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use exifpro_core::consts::CROSS_LINK_BASE;
use exifpro_core::site::locale::{is_supported, supported_codes};
use exifpro_core::site::{
    build_site, resolve_root_locale, sync_locale_bundle, SiteConfig, DEFAULT_LANGUAGE,
    SUPPORTED_LANGUAGES,
};
use indicatif::{ProgressBar, ProgressStyle};

use crate::summary;

#[derive(Subcommand)]
pub enum SiteCommand {
    /// Render one landing page per locale, plus sitemap.xml and robots.txt
    Build(BuildArgs),
    /// Split a translation bundle into per-locale JSON files
    Locales(LocalesArgs),
    /// List supported languages with their native names
    Languages,
}

#[derive(Args)]
pub struct BuildArgs {
    /// Site config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output directory (overrides config)
    #[arg(long)]
    pub dist: Option<PathBuf>,

    /// Directory of <locale>.json files (overrides config)
    #[arg(long)]
    pub locales: Option<PathBuf>,

    /// Placeholder template (overrides config)
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Public origin used in links and the sitemap (overrides config)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Locale that also becomes the site root (preferred over config when a
    /// locale file exists for it)
    #[arg(long)]
    pub default_locale: Option<String>,
}

#[derive(Args)]
pub struct LocalesArgs {
    /// JSON bundle of the form {"<lang>": {...}, ...}
    pub bundle: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "locales/landing")]
    pub output: PathBuf,

    /// Comma-separated languages to write (default: all supported)
    #[arg(long, value_delimiter = ',')]
    pub languages: Vec<String>,

    /// Base URL of the cross-linked sister site
    #[arg(long, default_value = CROSS_LINK_BASE)]
    pub cross_link_base: String,
}

pub fn run(cmd: &SiteCommand) -> Result<()> {
    match cmd {
        SiteCommand::Build(args) => run_build(args),
        SiteCommand::Locales(args) => run_locales(args),
        SiteCommand::Languages => {
            summary::print_languages(&SUPPORTED_LANGUAGES, DEFAULT_LANGUAGE);
            Ok(())
        }
    }
}

fn load_config(args: &BuildArgs) -> Result<SiteConfig> {
    let mut config = if let Some(ref config_path) = args.config {
        SiteConfig::load(config_path)
            .with_context(|| format!("Invalid site config {}", config_path.display()))?
    } else {
        SiteConfig::default()
    };

    if let Some(ref dist) = args.dist {
        config.dist_dir = dist.clone();
    }
    if let Some(ref locales) = args.locales {
        config.locales_dir = locales.clone();
    }
    if let Some(ref template) = args.template {
        config.template = template.clone();
    }
    if let Some(ref base_url) = args.base_url {
        config.base_url = base_url.clone();
    }
    config.default_locale = resolve_root_locale(&config, args.default_locale.as_deref())?;
    Ok(config)
}

fn run_build(args: &BuildArgs) -> Result<()> {
    let config = load_config(args)?;
    summary::print_site_summary(&config);

    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg:20} [{bar:40}] {pos}%")?
            .progress_chars("=> "),
    );

    let report = build_site(&config, |stage, progress| {
        pb.set_message(stage.to_string());
        pb.set_position((progress * 100.0) as u64);
    })
    .with_context(|| format!("Site build into {} failed", config.dist_dir.display()))?;

    pb.finish_with_message("Done");
    summary::print_build_report(&report);
    Ok(())
}

fn run_locales(args: &LocalesArgs) -> Result<()> {
    let text = std::fs::read_to_string(&args.bundle)
        .with_context(|| format!("Failed to read bundle {}", args.bundle.display()))?;
    let bundle: serde_json::Value =
        serde_json::from_str(&text).context("Bundle is not valid JSON")?;

    let languages: Vec<&str> = if args.languages.is_empty() {
        supported_codes()
    } else {
        args.languages.iter().map(String::as_str).collect()
    };
    if let Some(unknown) = languages.iter().find(|l| !is_supported(l)) {
        bail!("Unsupported language: {unknown}");
    }

    let written = sync_locale_bundle(&bundle, &args.output, &languages, &args.cross_link_base)?;
    println!(
        "Wrote {} of {} locale files to {}",
        written.len(),
        languages.len(),
        args.output.display()
    );
    Ok(())
}
