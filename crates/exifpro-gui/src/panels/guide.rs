use exifpro_core::meta::TagDetail;

use crate::app::ExifProApp;
use crate::panels::helpers::section_header;

const HEADER_FILL: egui::Color32 = egui::Color32::from_rgb(40, 60, 90);

pub fn show(ctx: &egui::Context, app: &mut ExifProApp) {
    egui::SidePanel::right("guide")
        .resizable(true)
        .default_width(280.0)
        .min_width(200.0)
        .show(ctx, |ui| {
            section_header(ui, "EXIF Guide", None, Some(HEADER_FILL));
            ui.add_space(4.0);

            let record = app.library.active_id().and_then(|id| app.metadata.get(&id));
            let (Some(record), Some(key)) = (record, app.ui_state.table.selected.as_deref()) else {
                ui.weak("Select a tag to see what it means.");
                return;
            };

            let detail = TagDetail::new(record, key);
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.heading(&detail.title);
                    if let Some(ref hex) = detail.hex {
                        ui.label(egui::RichText::new(hex).monospace().weak());
                    }
                });
                ui.add_space(8.0);

                ui.strong("Current Value");
                ui.label(egui::RichText::new(&detail.value).monospace());
                ui.add_space(8.0);

                ui.strong("Description");
                ui.label(detail.description);
            });
        });
}
