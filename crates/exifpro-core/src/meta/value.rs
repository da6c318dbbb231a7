use chrono::NaiveDateTime;
use serde::ser::{Serialize, SerializeSeq, Serializer};

/// Display format for revived date-time tags.
pub const DATETIME_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A raw tag value as handed over by the extraction collaborator.
#[derive(Clone, Debug, PartialEq)]
pub enum TagValue {
    Integer(i64),
    Float(f64),
    Rational { num: i64, denom: i64 },
    Text(String),
    DateTime(NaiveDateTime),
    List(Vec<TagValue>),
    Binary(Vec<u8>),
}

impl TagValue {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, Self::Binary(_))
    }

    /// Numeric value for plain numbers and rationals with a non-zero denominator.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(n) => Some(*n as f64),
            Self::Float(f) => Some(*f),
            Self::Rational { num, denom } if *denom != 0 => Some(*num as f64 / *denom as f64),
            _ => None,
        }
    }

    /// Integral code usable as an enumeration key.
    pub fn as_code(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => self
                .as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .map(|f| f as i64),
        }
    }

    /// Unformatted string form, used for searching: compact JSON for lists,
    /// the plain value otherwise.
    pub fn raw_string(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::DateTime(dt) => dt.format(DATETIME_DISPLAY_FORMAT).to_string(),
            Self::List(_) | Self::Binary(_) => {
                serde_json::to_string(self).unwrap_or_else(|_| format!("{self:?}"))
            }
            Self::Rational { num, denom } if *denom == 0 => format!("{num}/{denom}"),
            _ => self.as_f64().map(|f| f.to_string()).unwrap_or_default(),
        }
    }
}

impl Serialize for TagValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Integer(n) => serializer.serialize_i64(*n),
            Self::Float(f) => serializer.serialize_f64(*f),
            Self::Rational { num, denom } => match self.as_f64() {
                Some(f) => serializer.serialize_f64(f),
                None => serializer.collect_str(&format_args!("{num}/{denom}")),
            },
            Self::Text(s) => serializer.serialize_str(s),
            Self::DateTime(dt) => serializer.collect_str(&dt.format(DATETIME_DISPLAY_FORMAT)),
            Self::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Binary(bytes) => serializer.collect_seq(bytes),
        }
    }
}

/// One tag inside a group.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TagEntry {
    pub name: String,
    /// Numeric tag id, when the source format has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u16>,
    pub value: TagValue,
}

impl TagEntry {
    pub fn new(name: impl Into<String>, id: Option<u16>, value: TagValue) -> Self {
        Self {
            name: name.into(),
            id,
            value,
        }
    }

    /// `0x%04x` form of the tag id.
    pub fn hex_id(&self) -> Option<String> {
        self.id.map(|id| format!("0x{id:04x}"))
    }
}

/// Named group of tags (`ifd0`, `exif`, `gps`, ...), in source order.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct TagGroup {
    pub name: String,
    pub entries: Vec<TagEntry>,
}

impl TagGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn get(&self, tag: &str) -> Option<&TagEntry> {
        self.entries.iter().find(|e| e.name == tag)
    }

    pub fn push(&mut self, entry: TagEntry) {
        self.entries.push(entry);
    }
}

/// Result of metadata extraction for one image.
///
/// `Flat` holds ungrouped entries; the "nothing found" and "failed"
/// sentinels are flat records so they show up in place of data.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum MetadataRecord {
    Grouped(Vec<TagGroup>),
    Flat(Vec<TagEntry>),
}

impl MetadataRecord {
    pub fn not_found() -> Self {
        Self::Flat(vec![TagEntry::new(
            "Message",
            None,
            TagValue::text("No EXIF found"),
        )])
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        let mut entries = vec![TagEntry::new(
            "Error",
            None,
            TagValue::text("Failed to parse EXIF"),
        )];
        if !reason.is_empty() {
            entries.push(TagEntry::new("Reason", None, TagValue::Text(reason)));
        }
        Self::Flat(entries)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Flat(entries) if entries.iter().any(|e| e.name == "Error"))
    }

    /// Total number of entries across all groups.
    pub fn tag_count(&self) -> usize {
        match self {
            Self::Grouped(groups) => groups.iter().map(|g| g.entries.len()).sum(),
            Self::Flat(entries) => entries.len(),
        }
    }
}
