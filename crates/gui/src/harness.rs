//! Headless harness for programmatic scene editing.
//!
//! Wraps [`EditorState`] with kind-specific constructors and a manual
//! debounce clock so tests can drive the editor without a UI.

use std::time::Instant;

use shared::{DocumentError, ObjectId, ObjectKind, ObjectPatch};

use crate::state::{EditorState, COMMIT_DEBOUNCE};

/// Headless editor harness
pub struct EditorHarness {
    pub state: EditorState,
}

impl EditorHarness {
    /// Create a new empty harness
    pub fn new() -> Self {
        Self {
            state: EditorState::default(),
        }
    }

    // ── Scene manipulation ────────────────────────────────────

    /// Create an object of the given kind and return its id
    pub fn add(&mut self, kind: ObjectKind) -> ObjectId {
        self.state.add_object(kind)
    }

    pub fn add_box(&mut self) -> ObjectId {
        self.add(ObjectKind::Box)
    }

    pub fn add_sphere(&mut self) -> ObjectId {
        self.add(ObjectKind::Sphere)
    }

    pub fn add_cylinder(&mut self) -> ObjectId {
        self.add(ObjectKind::Cylinder)
    }

    pub fn add_cone(&mut self) -> ObjectId {
        self.add(ObjectKind::Cone)
    }

    /// Merge a partial update (debounced history commit)
    pub fn update(&mut self, id: &str, patch: &ObjectPatch) {
        self.state.update_object(id, patch);
    }

    /// Let the debounce window elapse so pending edits commit
    pub fn settle(&mut self) {
        self.state.tick(Instant::now() + COMMIT_DEBOUNCE);
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn object_count(&self) -> usize {
        self.state.scene.len()
    }

    pub fn selected(&self) -> Option<ObjectId> {
        self.state.selection.selected().cloned()
    }

    pub fn history_len(&self) -> usize {
        self.state.history.len()
    }

    // ── History ───────────────────────────────────────────────

    pub fn undo(&mut self) -> bool {
        self.state.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.state.redo()
    }

    // ── Persistence ───────────────────────────────────────────

    /// Export the scene as a JSON document
    pub fn export_json(&self) -> String {
        self.state
            .scene
            .document()
            .to_json()
            .unwrap_or_else(|e| panic!("scene export failed: {e}"))
    }

    /// Load a scene from a JSON document
    pub fn load_json(&mut self, json: &str) -> Result<usize, DocumentError> {
        self.state.load_document(json)
    }
}

impl Default for EditorHarness {
    fn default() -> Self {
        Self::new()
    }
}
