use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use image::ImageDecoder;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::error::Result;

use super::text::latin1_to_string;
use super::value::{MetadataRecord, TagEntry, TagGroup, TagValue};
use super::xmp;

/// Tags whose text value is an Exif date-time and is revived as one.
const DATETIME_TAGS: &[&str] = &["DateTime", "DateTimeOriginal", "DateTimeDigitized"];

const EXIF_DATETIME_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

/// Extract all metadata groups from an image file.
///
/// Never fails: a file without metadata yields the "No EXIF found" record,
/// and any read/parse error yields the "Failed to parse EXIF" record.
pub fn extract_metadata(path: &Path) -> MetadataRecord {
    match read_groups(path) {
        Ok(groups) if groups.is_empty() => {
            debug!(path = %path.display(), "No metadata found");
            MetadataRecord::not_found()
        }
        Ok(groups) => {
            let record = MetadataRecord::Grouped(groups);
            info!(path = %path.display(), tags = record.tag_count(), "Metadata extracted");
            record
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Metadata extraction failed");
            MetadataRecord::failed(e.to_string())
        }
    }
}

/// Extract several files in parallel, preserving input order.
pub fn extract_many(paths: &[PathBuf]) -> Vec<(PathBuf, MetadataRecord)> {
    paths
        .par_iter()
        .map(|p| (p.clone(), extract_metadata(p)))
        .collect()
}

/// Read Exif groups, then XMP namespace groups, then the ICC group. An
/// empty vec means the file has no metadata at all.
pub fn read_groups(path: &Path) -> Result<Vec<TagGroup>> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let mut groups = match exif::Reader::new().read_from_container(&mut reader) {
        Ok(exif) => groups_from_exif(&exif),
        Err(exif::Error::NotFound(_)) => Vec::new(),
        Err(e) => return Err(e.into()),
    };

    groups.extend(read_decoder_groups(path));
    Ok(groups)
}

/// Group parsed Exif fields by IFD/context, using the lowercase group keys
/// `ifd0`, `ifd1`, `exif`, `gps` and `interop`.
pub fn groups_from_exif(exif: &exif::Exif) -> Vec<TagGroup> {
    let mut groups: Vec<TagGroup> = Vec::new();

    for field in exif.fields() {
        let group_name = match field.tag.context() {
            exif::Context::Exif => "exif".to_string(),
            exif::Context::Gps => "gps".to_string(),
            exif::Context::Interop => "interop".to_string(),
            _ => format!("ifd{}", field.ifd_num.index()),
        };
        let name = field.tag.to_string();
        let value = revive(&name, convert_value(&field.value));
        let entry = TagEntry::new(name, Some(field.tag.number()), value);

        match groups.iter_mut().find(|g| g.name == group_name) {
            Some(group) => group.push(entry),
            None => {
                let mut group = TagGroup::new(group_name);
                group.push(entry);
                groups.push(group);
            }
        }
    }
    groups
}

/// XMP and ICC groups, read through the image decoder.
fn read_decoder_groups(path: &Path) -> Vec<TagGroup> {
    let decoder = image::ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(image::ImageError::from)
        .and_then(|r| r.into_decoder());
    let mut decoder = match decoder {
        Ok(d) => d,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "No decoder for XMP/ICC lookup");
            return Vec::new();
        }
    };

    let mut groups = match decoder.xmp_metadata() {
        Ok(Some(packet)) => xmp::parse_xmp(&packet),
        Ok(None) => Vec::new(),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "XMP packet unreadable");
            Vec::new()
        }
    };

    match decoder.icc_profile() {
        Ok(Some(profile)) => {
            let mut group = TagGroup::new("icc");
            group.push(TagEntry::new(
                "ProfileSize",
                None,
                TagValue::Integer(profile.len() as i64),
            ));
            groups.push(group);
        }
        Ok(None) => {}
        Err(e) => debug!(path = %path.display(), error = %e, "ICC profile unreadable"),
    }
    groups
}

fn collapse(mut values: Vec<TagValue>) -> TagValue {
    if values.len() == 1 {
        values.remove(0)
    } else {
        TagValue::List(values)
    }
}

fn convert_value(value: &exif::Value) -> TagValue {
    use exif::Value;

    match value {
        Value::Byte(v) => collapse(v.iter().map(|&n| TagValue::Integer(n.into())).collect()),
        Value::Short(v) => collapse(v.iter().map(|&n| TagValue::Integer(n.into())).collect()),
        Value::Long(v) => collapse(v.iter().map(|&n| TagValue::Integer(n.into())).collect()),
        Value::SByte(v) => collapse(v.iter().map(|&n| TagValue::Integer(n.into())).collect()),
        Value::SShort(v) => collapse(v.iter().map(|&n| TagValue::Integer(n.into())).collect()),
        Value::SLong(v) => collapse(v.iter().map(|&n| TagValue::Integer(n.into())).collect()),
        Value::Rational(v) => collapse(
            v.iter()
                .map(|r| TagValue::Rational {
                    num: r.num.into(),
                    denom: r.denom.into(),
                })
                .collect(),
        ),
        Value::SRational(v) => collapse(
            v.iter()
                .map(|r| TagValue::Rational {
                    num: r.num.into(),
                    denom: r.denom.into(),
                })
                .collect(),
        ),
        Value::Float(v) => collapse(v.iter().map(|&f| TagValue::Float(f.into())).collect()),
        Value::Double(v) => collapse(v.iter().map(|&f| TagValue::Float(f)).collect()),
        Value::Ascii(v) => collapse(
            v.iter()
                .map(|s| TagValue::Text(latin1_to_string(s)))
                .collect(),
        ),
        Value::Undefined(bytes, _) => undefined_to_value(bytes),
        _ => TagValue::Binary(Vec::new()),
    }
}

/// Undefined-typed payloads that are really short text (ExifVersion "0232",
/// ASCII user comments) become text; everything else stays binary.
fn undefined_to_value(bytes: &[u8]) -> TagValue {
    const ASCII_PREFIX: &[u8] = b"ASCII\0\0\0";

    if let Some(rest) = bytes.strip_prefix(ASCII_PREFIX) {
        let text = latin1_to_string(rest);
        return TagValue::Text(text.trim_end_matches(['\0', ' ']).to_string());
    }
    let printable = !bytes.is_empty()
        && bytes.len() <= 64
        && bytes.iter().all(|b| b.is_ascii_graphic() || *b == b' ');
    if printable {
        TagValue::Text(latin1_to_string(bytes))
    } else {
        TagValue::Binary(bytes.to_vec())
    }
}

fn revive(tag: &str, value: TagValue) -> TagValue {
    match value {
        TagValue::Text(ref s) if DATETIME_TAGS.contains(&tag) => {
            match NaiveDateTime::parse_from_str(s.trim(), EXIF_DATETIME_FORMAT) {
                Ok(dt) => TagValue::DateTime(dt),
                Err(_) => value,
            }
        }
        other => other,
    }
}
