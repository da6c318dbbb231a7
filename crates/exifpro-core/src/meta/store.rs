use std::collections::HashMap;

use crate::session::ImageId;

use super::value::MetadataRecord;

/// Extraction results keyed by image.
///
/// Filled asynchronously; a missing key means extraction is still pending
/// (or was never requested).
#[derive(Debug, Default)]
pub struct MetadataStore {
    records: HashMap<ImageId, MetadataRecord>,
}

impl MetadataStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: ImageId, record: MetadataRecord) {
        self.records.insert(id, record);
    }

    pub fn get(&self, id: &ImageId) -> Option<&MetadataRecord> {
        self.records.get(id)
    }

    pub fn contains(&self, id: &ImageId) -> bool {
        self.records.contains_key(id)
    }

    pub fn remove(&mut self, id: &ImageId) -> Option<MetadataRecord> {
        self.records.remove(id)
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
