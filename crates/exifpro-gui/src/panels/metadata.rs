use exifpro_core::meta::{build_table, GroupView, TableState};

use crate::app::ExifProApp;
use crate::panels::helpers::placeholder;

pub fn show(ctx: &egui::Context, app: &mut ExifProApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let Some(active) = app.library.active() else {
            placeholder(ui, "Open or drop images to view their metadata");
            return;
        };
        let Some(record) = app.metadata.get(&active.id) else {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(format!("Reading metadata of {}", active.name));
            });
            return;
        };

        let table = &mut app.ui_state.table;
        let groups = build_table(record, &table.query);

        show_toolbar(ui, table, &groups);
        ui.separator();

        if groups.is_empty() {
            let msg = if table.query.trim().is_empty() {
                "No metadata found"
            } else {
                "No matching tags found"
            };
            placeholder(ui, msg);
            return;
        }

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for group in &groups {
                    show_group(ui, table, group);
                }
            });
    });
}

fn show_toolbar(ui: &mut egui::Ui, table: &mut TableState, groups: &[GroupView]) {
    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(&mut table.query)
                .hint_text("Search tags or values")
                .desired_width(260.0),
        );
        if !table.query.is_empty() && ui.small_button("\u{2715}").clicked() {
            table.clear_query();
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if table.all_collapsed(groups) {
                if ui.button("Expand all").clicked() {
                    table.expand_all();
                }
            } else if ui.button("Collapse all").clicked() {
                table.collapse_all(groups);
            }
        });
    });
}

fn show_group(ui: &mut egui::Ui, table: &mut TableState, group: &GroupView) {
    let title = egui::RichText::new(format!("{} ({})", group.display_name, group.rows.len())).strong();
    let collapsing = egui::CollapsingHeader::new(title)
        .id_salt(&group.key)
        .open(Some(!table.is_collapsed(&group.key)))
        .show(ui, |ui| {
            if let Some(desc) = group.description {
                ui.weak(desc);
            }
            egui::Grid::new(("rows", &group.key))
                .num_columns(3)
                .striped(true)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    for row in &group.rows {
                        ui.label(
                            egui::RichText::new(row.hex.as_deref().unwrap_or(""))
                                .monospace()
                                .weak(),
                        );
                        let selected = table.selected.as_deref() == Some(row.composite_key.as_str());
                        if ui.selectable_label(selected, group.row_label(row)).clicked() {
                            table.select(row.composite_key.clone());
                        }
                        ui.label(&row.value);
                        ui.end_row();
                    }
                });
        });

    if collapsing.header_response.clicked() {
        table.toggle_group(&group.key);
    }
}
