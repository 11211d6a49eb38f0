//! Gizmo-driven transform edits

use serde::{Deserialize, Serialize};
use shared::ObjectPatch;

use crate::state::{EditorState, TransformMode};

/// Which transform vector a gizmo edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformProperty {
    Position,
    Rotation,
    Scale,
}

impl EditorState {
    /// Route a gizmo value onto an object.
    ///
    /// The history commit is debounced: successive deltas from one drag
    /// coalesce into a single entry once the drag goes quiet.
    pub fn apply_transform_delta(&mut self, id: &str, property: TransformProperty, value: [f64; 3]) {
        let patch = match property {
            TransformProperty::Position => ObjectPatch {
                position: Some(value),
                ..Default::default()
            },
            TransformProperty::Rotation => ObjectPatch {
                rotation: Some(value),
                ..Default::default()
            },
            TransformProperty::Scale => ObjectPatch {
                scale: Some(value),
                ..Default::default()
            },
        };
        self.update_object(id, &patch);
    }

    /// Switch the gizmo widget; meaningless without a selection
    pub fn set_transform_mode(&mut self, mode: TransformMode) {
        if self.selection.selected().is_some() {
            self.selection.mode = mode;
        }
    }
}
