//! Editor state management
//!
//! [`EditorState`] coordinates the scene store, selection, and history.
//! Discrete actions (add, delete, duplicate, clear, load) commit to history
//! immediately; continuous edits (panel fields, gizmo drags) go through
//! [`EditorState::update_object`] and commit after a debounce quiet period.

pub mod scene;
pub mod selection;
pub mod settings;

use std::time::Instant;

pub use scene::history::{CommitDebounce, HistoryLog, SceneSnapshot, COMMIT_DEBOUNCE, MAX_HISTORY};
pub use scene::{SceneState, TransformProperty};
pub use selection::{SelectionState, TransformMode};
pub use settings::AppSettings;

use shared::{ObjectId, ObjectKind, ObjectPatch};

/// Panel visibility flags
pub struct PanelVisibility {
    pub hierarchy: bool,
    pub properties: bool,
}

impl Default for PanelVisibility {
    fn default() -> Self {
        Self {
            hierarchy: true,
            properties: true,
        }
    }
}

/// Combined editor state
pub struct EditorState {
    pub scene: SceneState,
    pub selection: SelectionState,
    pub history: HistoryLog,
    pub pending_commit: CommitDebounce,
    pub panels: PanelVisibility,
    pub settings: AppSettings,
}

impl Default for EditorState {
    fn default() -> Self {
        let mut state = Self {
            scene: SceneState::default(),
            selection: SelectionState::default(),
            history: HistoryLog::default(),
            pending_commit: CommitDebounce::default(),
            panels: PanelVisibility::default(),
            settings: AppSettings::load(),
        };
        // Baseline entry so the very first action can be undone back to
        // the empty scene
        state.commit_history();
        state
    }
}

impl EditorState {
    /// Create an object, select it, and commit
    pub fn add_object(&mut self, kind: ObjectKind) -> ObjectId {
        self.flush_pending_commit();
        let id = self.scene.add(kind);
        self.selection.select(id.clone());
        self.commit_history();
        tracing::info!("Added {} ({})", kind.label(), scene::short_id(&id));
        id
    }

    /// Delete an object.
    ///
    /// Selection is cleared only if it pointed at the deleted id; deleting
    /// a non-selected object leaves the selection alone. Unknown ids are
    /// silent no-ops.
    pub fn delete(&mut self, id: &str) {
        self.flush_pending_commit();
        if self.scene.remove(id) {
            self.selection.deselect_if(id);
            self.commit_history();
        }
    }

    /// Delete whatever is selected
    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selection.selected().cloned() {
            self.delete(&id);
        }
    }

    /// Clone an object, select the copy, and commit
    pub fn duplicate(&mut self, id: &str) -> Option<ObjectId> {
        self.flush_pending_commit();
        let new_id = self.scene.duplicate(id)?;
        self.selection.select(new_id.clone());
        self.commit_history();
        Some(new_id)
    }

    /// Empty the scene and commit
    pub fn clear_scene(&mut self) {
        self.flush_pending_commit();
        self.scene.clear();
        self.selection.clear();
        self.commit_history();
    }

    /// Continuous edit path: mutate now, commit after a quiet period
    pub fn update_object(&mut self, id: &str, patch: &ObjectPatch) {
        let before = self.scene.version();
        self.scene.update(id, patch);
        if self.scene.version() != before {
            self.pending_commit.schedule(Instant::now());
        }
    }

    /// Select an object; unknown ids are ignored
    pub fn select(&mut self, id: ObjectId) {
        if self.scene.get(&id).is_some() {
            self.selection.select(id);
        }
    }

    /// Clear the selection
    pub fn deselect(&mut self) {
        self.selection.clear();
    }

    /// Step back one history entry and restore it; returns false at the
    /// earliest entry. Pending edits are committed first so they become
    /// the state being undone rather than silently vanishing.
    pub fn undo(&mut self) -> bool {
        self.flush_pending_commit();
        let Some(snap) = self.history.undo() else {
            return false;
        };
        let objects = snap.objects.clone();
        let selected = snap.selected.clone();
        self.restore(objects, selected);
        true
    }

    /// Step forward one history entry and restore it
    pub fn redo(&mut self) -> bool {
        self.flush_pending_commit();
        let Some(snap) = self.history.redo() else {
            return false;
        };
        let objects = snap.objects.clone();
        let selected = snap.selected.clone();
        self.restore(objects, selected);
        true
    }

    fn restore(&mut self, objects: Vec<shared::SceneObject>, selected: Option<ObjectId>) {
        self.scene.set_objects(objects);
        match selected {
            Some(id) => self.selection.select(id),
            None => self.selection.clear(),
        }
    }

    /// Commit the current scene and selection to history immediately,
    /// cancelling any pending debounced commit
    pub fn commit_history(&mut self) {
        self.pending_commit.cancel();
        self.history
            .commit(self.scene.objects(), self.selection.selected());
    }

    /// Commit now if edits are still waiting out the debounce window
    pub fn flush_pending_commit(&mut self) {
        if self.pending_commit.is_pending() {
            self.commit_history();
        }
    }

    /// Per-frame driver: fires the debounced commit once its deadline passes
    pub fn tick(&mut self, now: Instant) {
        if self.pending_commit.fire_if_due(now) {
            self.history
                .commit(self.scene.objects(), self.selection.selected());
        }
    }

    /// Replace the whole scene (document load); clears the selection and
    /// commits the loaded state as a fresh baseline. Incoming scales are
    /// clamped here so every load path normalizes them, not just
    /// [`shared::SceneDocument::from_json`].
    pub fn load_objects(&mut self, mut objects: Vec<shared::SceneObject>) {
        for obj in &mut objects {
            obj.transform.clamp_scale();
        }
        self.flush_pending_commit();
        self.selection.clear();
        self.scene.set_objects(objects);
        self.commit_history();
    }
}
