use exifpro_core::session::{ImageId, ImageLibrary};

/// Show a ComboBox for enum selection. Returns `true` if the value changed.
pub(crate) fn enum_combo<T: PartialEq + Copy + ToString>(
    ui: &mut egui::Ui,
    label: &str,
    current: &mut T,
    options: &[T],
) -> bool {
    let resp = egui::ComboBox::from_label(label)
        .selected_text(current.to_string())
        .show_ui(ui, |ui| {
            let mut changed = false;
            for &choice in options {
                if ui
                    .selectable_value(current, choice, choice.to_string())
                    .changed()
                {
                    changed = true;
                }
            }
            changed
        });
    resp.inner == Some(true)
}

/// ComboBox over the library's images, with a "None" entry.
/// Returns `true` if the selection changed.
pub(crate) fn image_combo(
    ui: &mut egui::Ui,
    label: &str,
    current: &mut Option<ImageId>,
    library: &ImageLibrary,
) -> bool {
    let selected_text = current
        .and_then(|id| library.get(id))
        .map_or("None", |e| e.name.as_str());
    let resp = egui::ComboBox::from_label(label)
        .selected_text(selected_text)
        .width(180.0)
        .show_ui(ui, |ui| {
            let mut changed = ui.selectable_value(current, None, "None").changed();
            for entry in library.iter() {
                if ui
                    .selectable_value(current, Some(entry.id), &entry.name)
                    .changed()
                {
                    changed = true;
                }
            }
            changed
        });
    resp.inner == Some(true)
}

pub(crate) fn section_header(
    ui: &mut egui::Ui,
    label: &str,
    status: Option<&str>,
    color: Option<egui::Color32>,
) {
    let frame = if let Some(c) = color {
        egui::Frame::NONE
            .fill(c)
            .inner_margin(4.0)
            .corner_radius(2.0)
    } else {
        egui::Frame::NONE.inner_margin(4.0)
    };
    frame.show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.strong(label);
            if let Some(s) = status {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.small(s);
                });
            }
        });
    });
}

pub(crate) fn placeholder(ui: &mut egui::Ui, text: &str) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new(text)
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
