//! Selection and gizmo mode state

use serde::{Deserialize, Serialize};
use shared::ObjectId;

/// Which gizmo widget the viewport attaches to the selected object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformMode {
    #[default]
    Translate,
    Rotate,
    Scale,
}

impl TransformMode {
    pub fn label(&self) -> &'static str {
        match self {
            TransformMode::Translate => "Translate",
            TransformMode::Rotate => "Rotate",
            TransformMode::Scale => "Scale",
        }
    }

    pub fn all() -> &'static [TransformMode] {
        &[
            TransformMode::Translate,
            TransformMode::Rotate,
            TransformMode::Scale,
        ]
    }
}

/// Single-object selection state
#[derive(Default)]
pub struct SelectionState {
    selected: Option<ObjectId>,
    /// Active gizmo mode
    pub mode: TransformMode,
}

impl SelectionState {
    /// Currently selected object, if any
    pub fn selected(&self) -> Option<&ObjectId> {
        self.selected.as_ref()
    }

    /// Check if an object is selected
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }

    /// Select an object; re-selecting the same id is a no-op
    pub fn select(&mut self, id: ObjectId) {
        self.selected = Some(id);
    }

    /// Clear the selection
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Drop the selection only if it points at `id`
    pub fn deselect_if(&mut self, id: &str) {
        if self.is_selected(id) {
            self.selected = None;
        }
    }
}
