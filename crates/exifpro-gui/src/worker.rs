use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Instant;

use exifpro_core::meta::extract_metadata;
use exifpro_core::session::ImageEntry;
use tracing::{debug, warn};

use crate::convert::dynamic_to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};

/// Spawn the worker thread. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("exifpro-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn send_error(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Error { message: msg.into() });
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::LoadImages { paths } => {
                handle_load_images(&paths, &tx, &ctx);
            }
        }
    }
    debug!("Worker channel closed");
}

fn handle_load_images(paths: &[PathBuf], tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context) {
    for (i, path) in paths.iter().enumerate() {
        send(tx, ctx, WorkerResult::Progress {
            pending: paths.len() - i,
        });
        handle_load_image(path, tx, ctx);
    }
    send(tx, ctx, WorkerResult::Progress { pending: 0 });
}

/// Decode first so the image shows up immediately, then extract metadata.
/// The two results travel separately and are matched by image id.
fn handle_load_image(path: &Path, tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context) {
    let entry = match ImageEntry::probe(path) {
        Ok(e) => e,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Not a readable image");
            send_error(tx, ctx, format!("Failed to open {}: {e}", path.display()));
            return;
        }
    };

    let decoded = match image::open(path) {
        Ok(img) => img,
        Err(e) => {
            send_error(tx, ctx, format!("Failed to decode {}: {e}", path.display()));
            return;
        }
    };
    let pixels = dynamic_to_color_image(&decoded);
    drop(decoded);

    let id = entry.id;
    send(tx, ctx, WorkerResult::ImageDecoded { entry, pixels });

    let start = Instant::now();
    let record = extract_metadata(path);
    send(tx, ctx, WorkerResult::MetadataReady {
        id,
        record,
        elapsed: start.elapsed(),
    });
}
