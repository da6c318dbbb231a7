use std::path::PathBuf;
use std::time::Duration;

use exifpro_core::meta::MetadataRecord;
use exifpro_core::session::{ImageEntry, ImageId};

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Decode each file for display, then extract its metadata.
    LoadImages { paths: Vec<PathBuf> },
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    /// Pixels are ready; the entry can join the library.
    ImageDecoded {
        entry: ImageEntry,
        pixels: egui::ColorImage,
    },

    /// Metadata for an image decoded earlier. Dropped by the UI if the image
    /// has been removed in the meantime.
    MetadataReady {
        id: ImageId,
        record: MetadataRecord,
        elapsed: Duration,
    },

    /// A batch started or finished; `pending` is the number of files left.
    Progress { pending: usize },

    Error {
        message: String,
    },
}
