use crate::app::ExifProApp;
use crate::messages::WorkerCommand;
use crate::states::ViewMode;

const IMAGE_EXTENSIONS: [&str; 9] = [
    "jpg", "jpeg", "png", "tif", "tiff", "webp", "heic", "heif", "avif",
];

pub fn show(ctx: &egui::Context, app: &mut ExifProApp) {
    let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
    let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui
                    .add(egui::Button::new("Open...").shortcut_text(ctx.format_shortcut(&open_shortcut)))
                    .clicked()
                {
                    ui.close();
                    open_files(app);
                }

                ui.separator();

                let has_active = app.library.active_id().is_some();
                if ui
                    .add_enabled(has_active, egui::Button::new("Remove Image"))
                    .clicked()
                {
                    ui.close();
                    if let Some(id) = app.library.active_id() {
                        app.remove_image(id);
                    }
                }
                if ui
                    .add_enabled(!app.library.is_empty(), egui::Button::new("Clear All"))
                    .clicked()
                {
                    ui.close();
                    app.clear_images();
                }

                ui.separator();

                if ui
                    .add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut)))
                    .clicked()
                {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                for mode in [ViewMode::Metadata, ViewMode::Compare] {
                    if ui
                        .selectable_label(app.ui_state.view == mode, mode.to_string())
                        .clicked()
                    {
                        ui.close();
                        app.compare.viewport.end_interaction();
                        app.ui_state.view = mode;
                    }
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.ui_state.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&open_shortcut)) {
            open_files(app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&quit_shortcut)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

/// The dialog blocks, so it runs on its own thread and hands the picked
/// files straight to the worker.
fn open_files(app: &mut ExifProApp) {
    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(paths) = rfd::FileDialog::new()
            .add_filter("Images", &IMAGE_EXTENSIONS)
            .add_filter("All files", &["*"])
            .pick_files()
        {
            let _ = cmd_tx.send(WorkerCommand::LoadImages { paths });
        }
    });
}
