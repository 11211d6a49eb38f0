//! Main application module

mod keyboard;
mod menus;
mod styles;

use std::time::Instant;

use eframe::egui;

use crate::state::scene::SceneState;
use crate::state::EditorState;
use crate::ui::{hierarchy, properties, status_bar, toolbar};

/// Main application
pub struct StudioApp {
    state: EditorState,
    /// Last applied font size (to detect changes)
    last_font_size: f32,
    /// Last saved scene version (for autosave)
    last_saved_version: u64,
}

impl StudioApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        initial_objects: Option<Vec<shared::SceneObject>>,
    ) -> Self {
        let mut state = EditorState::default();

        // Load initial scene: CLI argument takes priority, then autosave
        if let Some(objects) = initial_objects {
            state.load_objects(objects);
        } else if let Some(objects) = SceneState::load_autosave() {
            state.load_objects(objects);
            tracing::info!("Restored autosaved scene");
        }

        styles::configure_styles(&cc.egui_ctx, state.settings.ui.font_size);

        let last_font_size = state.settings.ui.font_size;
        let last_saved_version = state.scene.version();

        Self {
            state,
            last_font_size,
            last_saved_version,
        }
    }
}

impl eframe::App for StudioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Fire any debounced history commit whose quiet period has elapsed
        self.state.tick(Instant::now());

        // Apply font size if changed
        if self.state.settings.ui.font_size != self.last_font_size {
            styles::apply_font_size(ctx, self.state.settings.ui.font_size);
            self.last_font_size = self.state.settings.ui.font_size;
        }

        // Autosave scene if changed
        let current_version = self.state.scene.version();
        if current_version != self.last_saved_version {
            self.state.scene.autosave();
            self.state.settings.save();
            self.last_saved_version = current_version;
        }

        keyboard::handle_keyboard(ctx, &mut self.state);

        // ── Menu bar ──────────────────────────────────────────
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                menus::file_menu(ui, &mut self.state);
                menus::edit_menu(ui, &mut self.state);
                menus::view_menu(ui, &mut self.state);
            });
        });

        // ── Toolbar ───────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .frame(
                egui::Frame::side_top_panel(&ctx.style())
                    .inner_margin(egui::Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                toolbar::show(ui, &mut self.state);
            });

        // ── Status bar ────────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            status_bar::show(ui, &self.state);
        });

        // ── Side panels ───────────────────────────────────────
        if self.state.panels.hierarchy {
            egui::SidePanel::left("hierarchy")
                .default_width(240.0)
                .show(ctx, |ui| {
                    hierarchy::show(ui, &mut self.state);
                });
        }
        if self.state.panels.properties {
            egui::SidePanel::right("properties")
                .default_width(300.0)
                .show(ctx, |ui| {
                    properties::show(ui, &mut self.state);
                });
        }

        // ── Viewport ──────────────────────────────────────────
        // Stand-in for the external rendering surface: it reads the store
        // each frame and owns hit-testing and gizmos. Clicking the empty
        // surface clears the selection.
        egui::CentralPanel::default().show(ctx, |ui| {
            let rect = ui.max_rect();
            let bg = self.state.settings.viewport.background_color;
            ui.painter().rect_filled(
                rect,
                egui::CornerRadius::ZERO,
                egui::Color32::from_rgb(bg[0], bg[1], bg[2]),
            );
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "Viewport",
                egui::FontId::proportional(16.0),
                egui::Color32::from_gray(90),
            );
            let response = ui.allocate_rect(rect, egui::Sense::click());
            if response.clicked() {
                self.state.deselect();
            }
        });

        // A pending commit needs a frame soon after its deadline to fire
        if self.state.pending_commit.is_pending() {
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        }
    }
}
