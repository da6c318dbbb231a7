use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use exifpro_core::meta::{build_table, extract_many};
use exifpro_core::session::ImageEntry;
use tracing::debug;

use crate::summary;

#[derive(Args)]
pub struct InfoArgs {
    /// Image files
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Only show tags whose name or value contains this text
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Print the raw extracted records as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    // Extraction runs on the rayon pool; results come back in input order.
    let results = extract_many(&args.files);

    if args.json {
        let map: BTreeMap<String, _> = results
            .iter()
            .map(|(path, record)| (path.display().to_string(), record))
            .collect();
        let text = serde_json::to_string_pretty(&map).context("Failed to serialize metadata")?;
        println!("{text}");
        return Ok(());
    }

    for (path, record) in &results {
        let entry = match ImageEntry::probe(path) {
            Ok(e) => Some(e),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Could not read image header");
                None
            }
        };
        let table = build_table(record, &args.search);
        summary::print_image_header(path, entry.as_ref(), record.tag_count());
        summary::print_table(&table, &args.search);
    }

    Ok(())
}
