//! Grouped, searchable view of a [`MetadataRecord`] for table display.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::consts::{GENERAL_GROUP, GROUP_ORDER};

use super::format::display_value;
use super::text::repair_mojibake;
use super::value::{MetadataRecord, TagEntry};

const THUMBNAIL: &str = "thumbnail";

/// One table row.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    pub tag: String,
    /// `"<GROUP>:<tag>"`, the key used for selection and guide lookup.
    pub composite_key: String,
    pub hex: Option<String>,
    pub value: String,
}

/// One collapsible section of the table.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupView {
    /// Upper-cased group key (`EXIF`, `GPS`, `General`, ...).
    pub key: String,
    pub display_name: String,
    pub description: Option<&'static str>,
    pub rows: Vec<Row>,
}

impl GroupView {
    /// Row label as shown in the tag column, e.g. `XMP-DC:creator`.
    pub fn row_label(&self, row: &Row) -> String {
        format!("{}:{}", self.display_name, row.tag)
    }
}

/// Build the table for a record, keeping only rows matching `query`.
///
/// Binary values and thumbnail data never appear. Groups without rows are
/// dropped and the rest are ordered by the canonical metadata group order.
pub fn build_table(record: &MetadataRecord, query: &str) -> Vec<GroupView> {
    let needle = query.trim().to_lowercase();

    let mut groups: Vec<GroupView> = match record {
        MetadataRecord::Grouped(groups) => groups
            .iter()
            .filter(|g| g.name != THUMBNAIL)
            .filter_map(|g| group_view(g.name.to_uppercase(), &g.entries, &needle))
            .collect(),
        MetadataRecord::Flat(entries) => group_view(GENERAL_GROUP.to_string(), entries, &needle)
            .into_iter()
            .collect(),
    };

    groups.sort_by(|a, b| compare_groups(&a.key, &b.key));
    groups
}

fn group_view(key: String, entries: &[TagEntry], needle: &str) -> Option<GroupView> {
    let rows: Vec<Row> = entries
        .iter()
        .filter(|e| e.name != THUMBNAIL && !e.value.is_binary())
        .filter(|e| matches_query(e, needle))
        .map(|e| Row {
            tag: e.name.clone(),
            composite_key: format!("{key}:{}", e.name),
            hex: e.hex_id(),
            value: display_value(&e.name, &e.value),
        })
        .collect();

    if rows.is_empty() {
        return None;
    }

    let display_name = group_display_name(&key);
    let description = group_description(&key);
    Some(GroupView {
        display_name,
        description,
        key,
        rows,
    })
}

/// Values match on their raw form or on the repaired text the table shows.
fn matches_query(entry: &TagEntry, needle: &str) -> bool {
    if needle.is_empty() || entry.name.to_lowercase().contains(needle) {
        return true;
    }
    let raw = entry.value.raw_string();
    raw.to_lowercase().contains(needle) || repair_mojibake(&raw).to_lowercase().contains(needle)
}

fn compare_groups(a: &str, b: &str) -> Ordering {
    let rank = |name: &str| GROUP_ORDER.iter().position(|g| *g == name);
    match (rank(a), rank(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Display name for an upper-cased group key.
pub fn group_display_name(key: &str) -> String {
    match key {
        "DC" => "XMP-DC".to_string(),
        "PHOTOSHOP" => "XMP-Photoshop".to_string(),
        other => other.to_string(),
    }
}

/// Short description shown next to a group header.
pub fn group_description(key: &str) -> Option<&'static str> {
    Some(match key {
        "IFD0" => "Main Image Metadata",
        "IFD1" => "Thumbnail Metadata",
        "EXIF" => "Photo Capture Parameters",
        "GPS" => "Location Data",
        "INTEROP" => "Interoperability",
        "XMP" => "Extensible Metadata",
        "IPTC" => "IPTC Metadata",
        "ICC" => "Color Profile",
        "THUMBNAIL" => "Thumbnail Data",
        "DC" => "Dublin Core (XMP)",
        "PHOTOSHOP" => "Photoshop (XMP)",
        "TIFF" => "TIFF Tags",
        _ => return None,
    })
}

/// Search, collapse and selection state of the metadata table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableState {
    pub query: String,
    pub collapsed: BTreeSet<String>,
    pub selected: Option<String>,
}

impl TableState {
    pub fn is_collapsed(&self, group: &str) -> bool {
        self.collapsed.contains(group)
    }

    pub fn toggle_group(&mut self, group: &str) {
        if !self.collapsed.remove(group) {
            self.collapsed.insert(group.to_string());
        }
    }

    pub fn collapse_all(&mut self, groups: &[GroupView]) {
        self.collapsed = groups.iter().map(|g| g.key.clone()).collect();
    }

    pub fn expand_all(&mut self) {
        self.collapsed.clear();
    }

    /// True when every listed group is collapsed (and there is at least one).
    pub fn all_collapsed(&self, groups: &[GroupView]) -> bool {
        !groups.is_empty() && groups.iter().all(|g| self.is_collapsed(&g.key))
    }

    pub fn select(&mut self, composite_key: impl Into<String>) {
        self.selected = Some(composite_key.into());
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Forget selection and collapse state, e.g. when the active image changes.
    pub fn reset(&mut self) {
        self.collapsed.clear();
        self.selected = None;
    }
}
