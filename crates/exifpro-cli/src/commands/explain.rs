use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use exifpro_core::meta::guide::{display_title, explanation, tag_name, NO_DESCRIPTION};
use exifpro_core::meta::{extract_metadata, TagDetail};

use crate::summary;

#[derive(Args)]
pub struct ExplainArgs {
    /// Tag to explain, either `Group:Tag` (e.g. `EXIF:FNumber`) or a bare name
    pub tag: String,

    /// Image to read the current value from
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

pub fn run(args: &ExplainArgs) -> Result<()> {
    let detail = match args.file {
        Some(ref path) => TagDetail::new(&extract_metadata(path), &args.tag),
        None => TagDetail {
            title: display_title(&args.tag),
            hex: None,
            value: String::new(),
            description: explanation(tag_name(&args.tag)).unwrap_or(NO_DESCRIPTION),
        },
    };
    summary::print_tag_detail(&detail, args.file.is_some());
    Ok(())
}
