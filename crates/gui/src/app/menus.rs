//! Application menu bar

use eframe::egui;

use crate::state::scene::default_save_filename;
use crate::state::EditorState;

/// Show the file menu
pub fn file_menu(ui: &mut egui::Ui, state: &mut EditorState) {
    ui.menu_button("File", |ui| {
        if ui.button("New Scene").clicked() {
            state.clear_scene();
            ui.close_menu();
        }
        if ui.button("Open…").clicked() {
            ui.close_menu();
            open_scene_dialog(state);
        }
        if ui.button("Save…").clicked() {
            ui.close_menu();
            save_scene_dialog(state);
        }
        ui.separator();
        if ui.button("Quit").clicked() {
            std::process::exit(0);
        }
    });
}

/// Show the edit menu
pub fn edit_menu(ui: &mut egui::Ui, state: &mut EditorState) {
    ui.menu_button("Edit", |ui| {
        if ui
            .add_enabled(state.history.can_undo(), egui::Button::new("Undo"))
            .clicked()
        {
            state.undo();
            ui.close_menu();
        }
        if ui
            .add_enabled(state.history.can_redo(), egui::Button::new("Redo"))
            .clicked()
        {
            state.redo();
            ui.close_menu();
        }
        ui.separator();
        let has_selection = state.selection.selected().is_some();
        if ui
            .add_enabled(has_selection, egui::Button::new("Duplicate"))
            .clicked()
        {
            if let Some(id) = state.selection.selected().cloned() {
                state.duplicate(&id);
            }
            ui.close_menu();
        }
        if ui
            .add_enabled(has_selection, egui::Button::new("Delete"))
            .clicked()
        {
            state.delete_selected();
            ui.close_menu();
        }
    });
}

/// Show the view menu
pub fn view_menu(ui: &mut egui::Ui, state: &mut EditorState) {
    ui.menu_button("View", |ui| {
        ui.checkbox(&mut state.panels.hierarchy, "Hierarchy panel");
        ui.checkbox(&mut state.panels.properties, "Properties panel");
    });
}

/// Save the scene through a native file dialog
pub fn save_scene_dialog(state: &mut EditorState) {
    if let Some(path) = rfd::FileDialog::new()
        .set_title("Save scene")
        .add_filter("JSON", &["json"])
        .set_file_name(default_save_filename())
        .save_file()
    {
        match state.scene.document().to_json() {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    tracing::error!("Failed to write scene: {e}");
                } else {
                    tracing::info!("Saved scene to {}", path.display());
                }
            }
            Err(e) => tracing::error!("Failed to serialize scene: {e}"),
        }
    }
}

/// Load a scene through a native file dialog.
///
/// The dialog is modal, so a second load cannot start while one is open;
/// on any failure the current scene is left untouched.
pub fn open_scene_dialog(state: &mut EditorState) {
    if let Some(path) = rfd::FileDialog::new()
        .set_title("Open scene")
        .add_filter("JSON", &["json"])
        .pick_file()
    {
        match std::fs::read_to_string(&path) {
            Ok(json) => match state.load_document(&json) {
                Ok(count) => {
                    tracing::info!("Loaded {count} objects from {}", path.display());
                }
                Err(e) => tracing::error!("Failed to load scene: {e}"),
            },
            Err(e) => tracing::error!("Failed to read file: {e}"),
        }
    }
}
