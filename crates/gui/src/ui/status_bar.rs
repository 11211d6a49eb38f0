use egui::Ui;

use crate::state::scene::object_display_name;
use crate::state::EditorState;

pub fn show(ui: &mut Ui, state: &EditorState) {
    ui.horizontal(|ui| {
        ui.weak(format!("Objects: {}", state.scene.len()));

        ui.separator();

        match state.selection.selected().and_then(|id| state.scene.get(id)) {
            Some(obj) => {
                ui.label(format!("Selected: {}", object_display_name(obj)));
                ui.separator();
                ui.weak(format!("Mode: {}", state.selection.mode.label()));
            }
            None => {
                ui.weak("Ready");
            }
        }

        if state.pending_commit.is_pending() {
            ui.separator();
            ui.colored_label(egui::Color32::from_rgb(255, 200, 100), "editing…");
        }

        // Right-aligned version
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak("scenelab v0.1");
        });
    });
}
