mod common;

use exifpro_core::meta::table::group_description;
use exifpro_core::meta::{build_table, MetadataRecord, TableState, TagEntry, TagValue};

use common::camera_record;

#[test]
fn test_groups_sorted_in_canonical_order() {
    let table = build_table(&camera_record(), "");
    let keys: Vec<&str> = table.iter().map(|g| g.key.as_str()).collect();
    assert_eq!(keys, ["IFD0", "EXIF", "GPS", "DC"]);
}

#[test]
fn test_thumbnail_and_binary_dropped() {
    let table = build_table(&camera_record(), "");
    assert!(table.iter().all(|g| g.key != "THUMBNAIL"));
    let exif = table.iter().find(|g| g.key == "EXIF").unwrap();
    assert!(exif.rows.iter().all(|r| r.tag != "MakerNote"));
    assert_eq!(exif.rows.len(), 3);
}

#[test]
fn test_rows_carry_key_hex_and_display_value() {
    let table = build_table(&camera_record(), "");
    let ifd0 = &table[0];
    let orientation = ifd0.rows.iter().find(|r| r.tag == "Orientation").unwrap();
    assert_eq!(orientation.composite_key, "IFD0:Orientation");
    assert_eq!(orientation.hex.as_deref(), Some("0x0112"));
    assert_eq!(orientation.value, "6 (Rotate 90 CW)");

    let artist = ifd0.rows.iter().find(|r| r.tag == "Artist").unwrap();
    assert_eq!(artist.value, "café");
}

#[test]
fn test_group_display_names_and_descriptions() {
    let table = build_table(&camera_record(), "");
    let dc = table.iter().find(|g| g.key == "DC").unwrap();
    assert_eq!(dc.display_name, "XMP-DC");
    assert_eq!(dc.description, Some("Dublin Core (XMP)"));
    assert_eq!(dc.row_label(&dc.rows[0]), "XMP-DC:creator");
    assert_eq!(table[1].description, Some("Photo Capture Parameters"));
    assert_eq!(group_description("PHOTOSHOP"), Some("Photoshop (XMP)"));
    assert_eq!(group_description("MAKERNOTES"), None);
}

#[test]
fn test_search_matches_tag_or_value_case_insensitively() {
    let table = build_table(&camera_record(), "eos r5");
    assert_eq!(table.len(), 1);
    assert_eq!(table[0].rows.len(), 1);
    assert_eq!(table[0].rows[0].tag, "Model");

    let table = build_table(&camera_record(), "FNUM");
    assert_eq!(table.len(), 1);
    assert_eq!(table[0].rows[0].composite_key, "EXIF:FNumber");
}

#[test]
fn test_search_matches_repaired_text() {
    for query in ["café", "CAFÉ", "cafÃ©"] {
        let table = build_table(&camera_record(), query);
        assert_eq!(table.len(), 1, "query {query}");
        assert_eq!(table[0].rows[0].composite_key, "IFD0:Artist");
        assert_eq!(table[0].rows[0].value, "café");
    }
}

#[test]
fn test_search_covers_list_json() {
    let table = build_table(&camera_record(), "41");
    assert_eq!(table.len(), 1);
    assert_eq!(table[0].key, "GPS");
}

#[test]
fn test_no_match_gives_empty_table() {
    assert!(build_table(&camera_record(), "zzz-no-such-tag").is_empty());
}

#[test]
fn test_sentinels_become_general_group() {
    let table = build_table(&MetadataRecord::not_found(), "");
    assert_eq!(table.len(), 1);
    assert_eq!(table[0].key, "General");
    assert_eq!(table[0].rows[0].tag, "Message");
    assert_eq!(table[0].rows[0].value, "No EXIF found");

    let table = build_table(&MetadataRecord::failed("bad marker"), "");
    let rows = &table[0].rows;
    assert_eq!(rows[0].tag, "Error");
    assert_eq!(rows[0].value, "Failed to parse EXIF");
    assert_eq!(rows[1].value, "bad marker");
}

#[test]
fn test_unknown_groups_after_known_alphabetically() {
    use exifpro_core::meta::TagGroup;

    let mut groups = Vec::new();
    for name in ["zeta", "iptc", "alpha", "ifd1"] {
        let mut g = TagGroup::new(name);
        g.push(TagEntry::new("X", None, TagValue::Integer(1)));
        groups.push(g);
    }
    let table = build_table(&MetadataRecord::Grouped(groups), "");
    let keys: Vec<&str> = table.iter().map(|g| g.key.as_str()).collect();
    assert_eq!(keys, ["IFD1", "IPTC", "ALPHA", "ZETA"]);
}

#[test]
fn test_table_state_collapse_and_select() {
    let table = build_table(&camera_record(), "");
    let mut state = TableState::default();

    state.toggle_group("EXIF");
    assert!(state.is_collapsed("EXIF"));
    state.toggle_group("EXIF");
    assert!(!state.is_collapsed("EXIF"));

    state.collapse_all(&table);
    assert!(state.all_collapsed(&table));
    state.expand_all();
    assert!(state.collapsed.is_empty());

    state.select("EXIF:FNumber");
    assert_eq!(state.selected.as_deref(), Some("EXIF:FNumber"));

    state.query = "canon".to_string();
    state.clear_query();
    assert!(state.query.is_empty());

    state.reset();
    assert!(state.selected.is_none());
}
