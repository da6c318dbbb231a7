//! Metadata collaborators: extraction, value formatting, table and guide views.

pub mod extract;
pub mod format;
pub mod guide;
pub mod store;
pub mod table;
pub mod text;
pub mod value;
pub mod value_map;
pub mod xmp;

pub use extract::{extract_many, extract_metadata};
pub use format::display_value;
pub use guide::TagDetail;
pub use store::MetadataStore;
pub use table::{build_table, GroupView, Row, TableState};
pub use text::repair_mojibake;
pub use value::{MetadataRecord, TagEntry, TagGroup, TagValue};
