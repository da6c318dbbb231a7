use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::mpsc;

use exifpro_core::meta::MetadataStore;
use exifpro_core::session::{ImageId, ImageLibrary};
use tracing::debug;

use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{CompareState, UIState, ViewMode};
use crate::worker;

pub struct ExifProApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub ui_state: UIState,
    pub library: ImageLibrary,
    pub metadata: MetadataStore,
    pub textures: HashMap<ImageId, egui::TextureHandle>,
    pub compare: CompareState,
}

impl ExifProApp {
    pub fn new(ctx: &egui::Context) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx, ctx.clone());

        Self {
            cmd_tx,
            result_rx,
            ui_state: UIState::default(),
            library: ImageLibrary::new(),
            metadata: MetadataStore::new(),
            textures: HashMap::new(),
            compare: CompareState::default(),
        }
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::ImageDecoded { entry, pixels } => {
                    let id = entry.id;
                    let texture = ctx.load_texture(
                        format!("image-{id}"),
                        pixels,
                        egui::TextureOptions::LINEAR,
                    );
                    self.ui_state.add_log(format!(
                        "Opened: {} ({}, {})",
                        entry.name,
                        entry.natural,
                        entry.format_name()
                    ));
                    self.textures.insert(id, texture);
                    self.library.add(entry);
                    self.ui_state.table.reset();
                    self.compare.autofill(&self.library, &self.textures);
                }
                WorkerResult::MetadataReady {
                    id,
                    record,
                    elapsed,
                } => {
                    if self.library.get(id).is_none() {
                        debug!(%id, "Discarding metadata of a removed image");
                        continue;
                    }
                    self.ui_state.add_log(format!(
                        "{} tags read in {}",
                        record.tag_count(),
                        format_duration(elapsed)
                    ));
                    self.metadata.insert(id, record);
                }
                WorkerResult::Progress { pending } => {
                    self.ui_state.pending = pending;
                }
                WorkerResult::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
            }
        }
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }

    pub fn open_paths(&mut self, paths: Vec<PathBuf>) {
        if paths.is_empty() {
            return;
        }
        self.ui_state.pending += paths.len();
        self.send_command(WorkerCommand::LoadImages { paths });
    }

    pub fn select_image(&mut self, id: ImageId) {
        if self.library.select(id).is_ok() {
            self.ui_state.table.reset();
        }
    }

    /// Remove one image with its texture, metadata and comparison slot.
    pub fn remove_image(&mut self, id: ImageId) {
        match self.library.remove(id) {
            Ok(entry) => {
                self.metadata.remove(&id);
                self.compare.forget(id, &self.library, &self.textures);
                self.textures.remove(&id);
                self.ui_state.table.reset();
                self.ui_state.add_log(format!("Removed: {}", entry.name));
            }
            Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
        }
    }

    pub fn clear_images(&mut self) {
        self.compare.clear();
        self.library.clear();
        self.metadata.clear();
        self.textures.clear();
        self.ui_state.table.reset();
        self.ui_state.add_log("Cleared all images".into());
    }

    fn accept_dropped_files(&mut self, ctx: &egui::Context) {
        let paths: Vec<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.clone())
                .collect()
        });
        self.open_paths(paths);
    }
}

impl eframe::App for ExifProApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);
        self.accept_dropped_files(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::library::show(ctx, self);
        match self.ui_state.view {
            ViewMode::Metadata => {
                panels::guide::show(ctx, self);
                panels::metadata::show(ctx, self);
            }
            ViewMode::Compare => panels::compare::show(ctx, self),
        }

        // About dialog
        if self.ui_state.show_about {
            egui::Window::new("About Exif Pro")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Exif Pro");
                        ui.label("Image Metadata Viewer");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.ui_state.show_about = false;
                        }
                    });
                });
        }
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs_f32();
    if secs < 1.0 {
        format!("{:.0}ms", d.as_millis())
    } else {
        format!("{secs:.1}s")
    }
}
