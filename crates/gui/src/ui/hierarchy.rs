//! Hierarchy panel: the object list in insertion order

use egui::Ui;
use shared::ObjectKind;

use crate::state::scene::{kind_icon, object_display_name};
use crate::state::EditorState;

enum RowAction {
    Select(String),
    ToggleVisibility(String),
    Delete(String),
}

pub fn show(ui: &mut Ui, state: &mut EditorState) {
    ui.horizontal(|ui| {
        ui.heading("Scene");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak(format!("({})", state.scene.len()));
        });
    });
    ui.separator();

    if state.scene.is_empty() {
        ui.add_space(20.0);
        ui.vertical_centered(|ui| {
            ui.weak("No objects yet");
            ui.add_space(4.0);
            if ui.button("Add a box").clicked() {
                state.add_object(ObjectKind::Box);
            }
        });
        return;
    }

    // Collect row data first so mutations can run after the borrow ends
    let rows: Vec<_> = state
        .scene
        .objects()
        .iter()
        .map(|obj| {
            (
                obj.id.clone(),
                object_display_name(obj),
                kind_icon(obj.kind),
                obj.visible,
                state.selection.is_selected(&obj.id),
            )
        })
        .collect();

    let mut action = None;

    egui::ScrollArea::vertical()
        .id_salt("hierarchy_scroll")
        .show(ui, |ui| {
            for (id, name, icon, visible, selected) in &rows {
                ui.horizontal(|ui| {
                    let eye = if *visible { "👁" } else { "―" };
                    if ui
                        .small_button(eye)
                        .on_hover_text("Toggle visibility")
                        .clicked()
                    {
                        action = Some(RowAction::ToggleVisibility(id.clone()));
                    }

                    let text = if *visible {
                        egui::RichText::new(format!("{icon} {name}"))
                    } else {
                        egui::RichText::new(format!("{icon} {name}"))
                            .color(egui::Color32::from_gray(100))
                    };
                    if ui.selectable_label(*selected, text).clicked() {
                        action = Some(RowAction::Select(id.clone()));
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("✖").on_hover_text("Delete").clicked() {
                            action = Some(RowAction::Delete(id.clone()));
                        }
                    });
                });
            }
        });

    match action {
        Some(RowAction::Select(id)) => state.select(id),
        Some(RowAction::ToggleVisibility(id)) => {
            state.scene.toggle_visibility(&id);
            state.commit_history();
        }
        Some(RowAction::Delete(id)) => state.delete(&id),
        None => {}
    }
}
