//! The set of opened images and which one is active.

use std::fmt;
use std::path::{Path, PathBuf};

use image::ImageFormat;
use tracing::{debug, info};
use uuid::Uuid;

use crate::compare::ImageDims;
use crate::error::{ExifProError, Result};

/// Stable identity of an opened image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageId(Uuid);

impl ImageId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ImageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One opened image file.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageEntry {
    pub id: ImageId,
    pub name: String,
    pub path: PathBuf,
    pub natural: ImageDims,
    pub file_size: u64,
    pub format: Option<ImageFormat>,
}

impl ImageEntry {
    /// Read dimensions and size of an image without decoding its pixels.
    pub fn probe(path: &Path) -> Result<Self> {
        let (width, height) = image::image_dimensions(path)?;
        if width == 0 || height == 0 {
            return Err(ExifProError::InvalidDimensions { width, height });
        }
        let file_size = std::fs::metadata(path)?.len();
        let format = ImageFormat::from_path(path).ok();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        debug!(path = %path.display(), width, height, "Probed image");
        Ok(Self {
            id: ImageId::new(),
            name,
            path: path.to_path_buf(),
            natural: ImageDims::new(width, height),
            file_size,
            format,
        })
    }

    /// Entry for an image whose header was already read elsewhere.
    pub fn from_parts(path: impl Into<PathBuf>, natural: ImageDims, file_size: u64) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            id: ImageId::new(),
            format: ImageFormat::from_path(&path).ok(),
            name,
            path,
            natural,
            file_size,
        }
    }

    pub fn format_name(&self) -> &'static str {
        self.format
            .and_then(|f| f.extensions_str().first().copied())
            .unwrap_or("unknown")
    }
}

/// Ordered image list with at most one active image.
#[derive(Debug, Default)]
pub struct ImageLibrary {
    images: Vec<ImageEntry>,
    active: Option<ImageId>,
}

impl ImageLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append entries; the last one added becomes active.
    pub fn add_many(&mut self, entries: impl IntoIterator<Item = ImageEntry>) -> Vec<ImageId> {
        let ids: Vec<ImageId> = entries
            .into_iter()
            .map(|entry| {
                let id = entry.id;
                self.images.push(entry);
                id
            })
            .collect();
        if let Some(last) = ids.last() {
            self.active = Some(*last);
        }
        info!(added = ids.len(), total = self.images.len(), "Images added");
        ids
    }

    pub fn add(&mut self, entry: ImageEntry) -> ImageId {
        let id = entry.id;
        self.add_many([entry]);
        id
    }

    /// Remove an image. If it was active, the image that slides into its
    /// position (or the new last one) becomes active.
    pub fn remove(&mut self, id: ImageId) -> Result<ImageEntry> {
        let index = self
            .index_of(id)
            .ok_or_else(|| ExifProError::UnknownImage(id.to_string()))?;
        let removed = self.images.remove(index);

        if self.active == Some(id) {
            self.active = if self.images.is_empty() {
                None
            } else {
                Some(self.images[index.min(self.images.len() - 1)].id)
            };
        }
        debug!(name = %removed.name, "Image removed");
        Ok(removed)
    }

    pub fn clear(&mut self) {
        self.images.clear();
        self.active = None;
    }

    pub fn select(&mut self, id: ImageId) -> Result<()> {
        if self.index_of(id).is_none() {
            return Err(ExifProError::UnknownImage(id.to_string()));
        }
        self.active = Some(id);
        Ok(())
    }

    pub fn active_id(&self) -> Option<ImageId> {
        self.active
    }

    pub fn active(&self) -> Option<&ImageEntry> {
        self.active.and_then(|id| self.get(id))
    }

    pub fn get(&self, id: ImageId) -> Option<&ImageEntry> {
        self.images.iter().find(|e| e.id == id)
    }

    pub fn index_of(&self, id: ImageId) -> Option<usize> {
        self.images.iter().position(|e| e.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageEntry> {
        self.images.iter()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
