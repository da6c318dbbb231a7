use exifpro_core::session::ImageId;

use crate::app::ExifProApp;
use crate::panels::helpers::section_header;

enum Action {
    Select(ImageId),
    Remove(ImageId),
    Clear,
}

pub fn show(ctx: &egui::Context, app: &mut ExifProApp) {
    egui::SidePanel::left("library")
        .resizable(true)
        .default_width(220.0)
        .min_width(160.0)
        .show(ctx, |ui| {
            let count = app.library.len().to_string();
            section_header(ui, "Images", Some(&count), None);
            ui.separator();

            if app.library.is_empty() {
                ui.weak("Drop images here or use File > Open");
                return;
            }

            let mut action = None;
            let active = app.library.active_id();

            egui::ScrollArea::vertical()
                .auto_shrink([false, true])
                .show(ui, |ui| {
                    for entry in app.library.iter() {
                        ui.horizontal(|ui| {
                            if ui
                                .small_button("\u{2715}")
                                .on_hover_text("Remove")
                                .clicked()
                            {
                                action = Some(Action::Remove(entry.id));
                            }
                            let loaded = app.metadata.contains(&entry.id);
                            let label = if loaded {
                                entry.name.clone()
                            } else {
                                format!("{} \u{2026}", entry.name)
                            };
                            if ui
                                .selectable_label(active == Some(entry.id), label)
                                .on_hover_text(format!(
                                    "{}\n{} \u{b7} {}",
                                    entry.path.display(),
                                    entry.natural,
                                    entry.format_name()
                                ))
                                .clicked()
                            {
                                action = Some(Action::Select(entry.id));
                            }
                        });
                    }
                });

            ui.separator();
            if ui.button("Clear All").clicked() {
                action = Some(Action::Clear);
            }

            match action {
                Some(Action::Select(id)) => app.select_image(id),
                Some(Action::Remove(id)) => app.remove_image(id),
                Some(Action::Clear) => app.clear_images(),
                None => {}
            }
        });
}
