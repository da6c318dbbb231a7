use crate::app::ExifProApp;
use crate::states::ViewMode;

pub fn show(ctx: &egui::Context, app: &mut ExifProApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        if app.ui_state.is_busy() {
            let text = format!("Loading {} image(s)...", app.ui_state.pending);
            ui.add(egui::ProgressBar::new(0.0).text(text).animate(true));
        } else {
            // Invisible placeholder, same height, no animation
            ui.add(egui::ProgressBar::new(0.0).text(""));
        }

        // Log area, fixed height for 3 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 3.0 + spacing * 2.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..3 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        ui.horizontal(|ui| {
            ui.label(format!("{} image(s)", app.library.len()));
            if let Some(entry) = app.library.active() {
                ui.separator();
                ui.label(&entry.name);
                ui.separator();
                ui.label(entry.natural.to_string());
                if let Some(record) = app.metadata.get(&entry.id) {
                    ui.separator();
                    ui.label(format!("{} tags", record.tag_count()));
                }
            }
            if app.ui_state.view == ViewMode::Compare {
                ui.separator();
                ui.label(format!(
                    "Zoom: {}%",
                    app.compare.viewport.transform().zoom_percent()
                ));
            }
        });

        ui.add_space(2.0);
    });
}
