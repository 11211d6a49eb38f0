//! Keyboard shortcut handling

use eframe::egui;

use crate::state::{EditorState, TransformMode};

use super::menus;

/// Handle keyboard shortcuts for the editor
pub fn handle_keyboard(ctx: &egui::Context, state: &mut EditorState) {
    // Don't handle shortcuts when a text field is focused
    if ctx.memory(|m| m.focused().is_some()) {
        return;
    }

    // File dialogs block, so they run outside the input lock
    let mut save_requested = false;

    ctx.input(|i| {
        // Ctrl+Z — undo
        if i.modifiers.command && i.key_pressed(egui::Key::Z) && !i.modifiers.shift {
            state.undo();
        }
        // Ctrl+Shift+Z or Ctrl+Y — redo
        if (i.modifiers.command && i.modifiers.shift && i.key_pressed(egui::Key::Z))
            || (i.modifiers.command && i.key_pressed(egui::Key::Y))
        {
            state.redo();
        }
        // Escape — clear selection
        if i.key_pressed(egui::Key::Escape) {
            state.deselect();
        }
        // Delete / Backspace — remove the selected object
        if i.key_pressed(egui::Key::Delete) || i.key_pressed(egui::Key::Backspace) {
            state.delete_selected();
        }
        // Ctrl+D — duplicate
        if i.modifiers.command && i.key_pressed(egui::Key::D) {
            if let Some(id) = state.selection.selected().cloned() {
                state.duplicate(&id);
            }
        }
        // Ctrl+S — save
        if i.modifiers.command && i.key_pressed(egui::Key::S) {
            save_requested = true;
        }
        // G / R / S — gizmo mode
        if !i.modifiers.command {
            if i.key_pressed(egui::Key::G) {
                state.set_transform_mode(TransformMode::Translate);
            }
            if i.key_pressed(egui::Key::R) {
                state.set_transform_mode(TransformMode::Rotate);
            }
            if i.key_pressed(egui::Key::S) {
                state.set_transform_mode(TransformMode::Scale);
            }
        }
    });

    if save_requested {
        menus::save_scene_dialog(state);
    }
}
