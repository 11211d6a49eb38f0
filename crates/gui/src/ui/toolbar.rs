//! Main toolbar: object creation, gizmo mode, undo/redo

use egui::Ui;
use shared::ObjectKind;

use crate::state::scene::kind_icon;
use crate::state::{EditorState, TransformMode};

pub fn show(ui: &mut Ui, state: &mut EditorState) {
    ui.horizontal(|ui| {
        for &kind in ObjectKind::all() {
            let label = format!("{} {}", kind_icon(kind), kind.label());
            if ui
                .button(label)
                .on_hover_text(format!("Add a {} to the scene", kind.label().to_lowercase()))
                .clicked()
            {
                state.add_object(kind);
            }
        }

        ui.separator();

        let has_selection = state.selection.selected().is_some();
        for &mode in TransformMode::all() {
            let active = state.selection.mode == mode;
            let response = ui.add_enabled(
                has_selection,
                egui::SelectableLabel::new(active, mode.label()),
            );
            if response.clicked() {
                state.set_transform_mode(mode);
            }
        }

        ui.separator();

        if ui
            .add_enabled(state.history.can_undo(), egui::Button::new("⟲ Undo"))
            .clicked()
        {
            state.undo();
        }
        if ui
            .add_enabled(state.history.can_redo(), egui::Button::new("⟳ Redo"))
            .clicked()
        {
            state.redo();
        }
    });
}
