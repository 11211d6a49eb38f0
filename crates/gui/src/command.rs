//! JSON command protocol for headless and scripted editing.
//!
//! Commands drive the same [`EditorState`] operations as the GUI, so a
//! scripted session observes the same history and selection semantics.

use serde::{Deserialize, Serialize};
use shared::{ObjectKind, ObjectPatch, SceneDocument};

use crate::state::{EditorState, TransformMode, TransformProperty};

/// A command that can be executed against the editor state
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum EditorCommand {
    /// Create an object and select it
    AddObject { kind: ObjectKind },
    /// Merge a partial update into an object
    Update {
        id: String,
        #[serde(default)]
        patch: ObjectPatch,
    },
    /// Delete an object by id
    Delete { id: String },
    /// Clone an object and select the copy
    Duplicate { id: String },
    /// Select an object by id
    Select { id: String },
    /// Clear the selection
    ClearSelection,
    /// Switch the gizmo mode
    SetTransformMode { mode: TransformMode },
    /// Set one transform vector of an object
    SetTransform {
        id: String,
        property: TransformProperty,
        value: [f64; 3],
    },
    /// Undo the last committed change
    Undo,
    /// Redo the last undone change
    Redo,
    /// Clear the entire scene
    Clear,
    /// List all objects
    Inspect,
    /// Export the scene as a JSON document
    ExportScene,
    /// Replace the scene from a document
    LoadScene { document: SceneDocument },
}

/// Response from executing a command
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl CommandResponse {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
            data: None,
        }
    }

    fn ok_with_data(data: serde_json::Value) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(msg.into()),
            data: None,
        }
    }
}

/// Execute a single command against the editor state
pub fn execute_command(state: &mut EditorState, cmd: EditorCommand) -> CommandResponse {
    match cmd {
        EditorCommand::AddObject { kind } => {
            let id = state.add_object(kind);
            CommandResponse::ok_with_data(serde_json::json!({ "id": id }))
        }

        EditorCommand::Update { id, patch } => {
            state.update_object(&id, &patch);
            // Scripted edits are discrete actions; commit without waiting
            // out the debounce window
            state.flush_pending_commit();
            CommandResponse::ok()
        }

        EditorCommand::Delete { id } => {
            state.delete(&id);
            CommandResponse::ok()
        }

        EditorCommand::Duplicate { id } => match state.duplicate(&id) {
            Some(new_id) => CommandResponse::ok_with_data(serde_json::json!({ "id": new_id })),
            None => CommandResponse::err(format!("no object with id {id}")),
        },

        EditorCommand::Select { id } => {
            state.select(id);
            CommandResponse::ok_with_data(
                serde_json::json!({ "selected": state.selection.selected() }),
            )
        }

        EditorCommand::ClearSelection => {
            state.deselect();
            CommandResponse::ok()
        }

        EditorCommand::SetTransformMode { mode } => {
            state.set_transform_mode(mode);
            CommandResponse::ok_with_data(serde_json::json!({ "mode": state.selection.mode }))
        }

        EditorCommand::SetTransform {
            id,
            property,
            value,
        } => {
            state.apply_transform_delta(&id, property, value);
            state.flush_pending_commit();
            CommandResponse::ok()
        }

        EditorCommand::Undo => {
            CommandResponse::ok_with_data(serde_json::json!({ "undone": state.undo() }))
        }

        EditorCommand::Redo => {
            CommandResponse::ok_with_data(serde_json::json!({ "redone": state.redo() }))
        }

        EditorCommand::Clear => {
            state.clear_scene();
            CommandResponse::ok()
        }

        EditorCommand::Inspect => match serde_json::to_value(state.scene.objects()) {
            Ok(objects) => CommandResponse::ok_with_data(objects),
            Err(e) => CommandResponse::err(e.to_string()),
        },

        EditorCommand::ExportScene => match state.scene.document().to_json() {
            Ok(json) => CommandResponse::ok_with_data(serde_json::json!({ "json": json })),
            Err(e) => CommandResponse::err(e.to_string()),
        },

        EditorCommand::LoadScene { document } => {
            let count = document.objects.len();
            state.load_objects(document.objects);
            CommandResponse::ok_with_data(serde_json::json!({ "objects": count }))
        }
    }
}
