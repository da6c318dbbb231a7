//! Explanations for the tag selected in the metadata table.

use super::format::display_value;
use super::value::{MetadataRecord, TagEntry, TagValue};

pub const NO_DESCRIPTION: &str = "No standard description available for this tag.";

/// Find the entry a composite `Group:Tag` key (or a bare tag name) refers to.
///
/// The group part is matched case-insensitively; when it does not resolve,
/// the bare tag name is searched across all groups.
pub fn lookup_entry<'a>(record: &'a MetadataRecord, key: &str) -> Option<&'a TagEntry> {
    match record {
        MetadataRecord::Grouped(groups) => {
            if let Some((group, tag)) = key.split_once(':') {
                let hit = groups
                    .iter()
                    .find(|g| g.name.eq_ignore_ascii_case(group))
                    .and_then(|g| g.get(tag));
                if hit.is_some() {
                    return hit;
                }
            }
            let tag = tag_name(key);
            groups.iter().find_map(|g| g.get(tag))
        }
        MetadataRecord::Flat(entries) => {
            let tag = tag_name(key);
            entries.iter().find(|e| e.name == tag)
        }
    }
}

pub fn lookup_value<'a>(record: &'a MetadataRecord, key: &str) -> Option<&'a TagValue> {
    lookup_entry(record, key).map(|e| &e.value)
}

/// `"EXIF:FNumber"` becomes `"FNumber (EXIF)"`; bare names pass through.
pub fn display_title(key: &str) -> String {
    match key.split_once(':') {
        Some((group, tag)) => format!("{tag} ({group})"),
        None => key.to_string(),
    }
}

pub fn tag_name(key: &str) -> &str {
    key.split_once(':').map_or(key, |(_, tag)| tag)
}

pub fn explanation(tag: &str) -> Option<&'static str> {
    Some(match tag {
        "Make" => "The manufacturer of the camera.",
        "Model" => "The model number of the camera.",
        "ExposureTime" => {
            "The length of time when the film or digital sensor inside the camera is exposed to light."
        }
        "FNumber" => "The ratio of the lens's focal length to the diameter of the entrance pupil.",
        // kamadak-exif names the ISO tag by its Exif 2.3 name.
        "ISO" | "PhotographicSensitivity" | "ISOSpeedRatings" => {
            "The level of sensitivity of your camera to available light."
        }
        "DateTimeOriginal" => "The date and time when the original image data was generated.",
        "FocalLength" => {
            "The distance between the lens and the image sensor when the subject is in focus."
        }
        "GPSLatitude" => "The latitude of the location where the photo was taken.",
        "GPSLongitude" => "The longitude of the location where the photo was taken.",
        _ => return None,
    })
}

/// Everything the guide panel shows for one selected tag.
#[derive(Clone, Debug, PartialEq)]
pub struct TagDetail {
    pub title: String,
    pub hex: Option<String>,
    pub value: String,
    pub description: &'static str,
}

impl TagDetail {
    pub fn new(record: &MetadataRecord, key: &str) -> Self {
        let tag = tag_name(key);
        let entry = lookup_entry(record, key);
        Self {
            title: display_title(key),
            hex: entry.and_then(TagEntry::hex_id),
            value: entry
                .map(|e| display_value(tag, &e.value))
                .unwrap_or_else(|| "N/A".to_string()),
            description: explanation(tag).unwrap_or(NO_DESCRIPTION),
        }
    }
}
