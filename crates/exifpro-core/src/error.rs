use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExifProError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Metadata error: {0}")]
    Exif(#[from] exif::Error),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Template not found: {}", .0.display())]
    MissingTemplate(PathBuf),

    #[error("No locale files found in {}", .0.display())]
    NoLocales(PathBuf),

    #[error("Invalid locale file {}: {reason}", .path.display())]
    InvalidLocale { path: PathBuf, reason: String },

    #[error("Unknown image: {0}")]
    UnknownImage(String),
}

pub type Result<T> = std::result::Result<T, ExifProError>;
