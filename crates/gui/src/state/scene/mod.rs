//! Scene object store.
//!
//! This module is the sole mutable owner of the object collection. History
//! commits are explicit and owned by the coordinator in [`crate::state`],
//! never a side effect of individual store mutations.

mod display;
pub mod history;
mod object_ops;
mod persistence;
mod transform_ops;

pub use display::{kind_icon, object_display_name, short_id};
pub use persistence::{default_save_filename, epoch_millis, iso8601_utc};
pub use transform_ops::TransformProperty;

use shared::SceneObject;

/// Mutable owner of the scene's object collection
#[derive(Default)]
pub struct SceneState {
    /// Objects in insertion order
    pub(crate) objects: Vec<SceneObject>,
    /// Monotonically increasing version counter for change detection;
    /// consumers poll this once per frame instead of subscribing
    pub(crate) version: u64,
    /// Total objects ever created; drives auto-generated display names and
    /// is never decremented on deletion
    pub(crate) spawned: u64,
}

impl SceneState {
    /// Current scene version (increments on every mutation)
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Objects in insertion order
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Get an object by id
    pub fn get(&self, id: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut SceneObject> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Replace the whole collection (undo/redo restore, document load)
    pub fn set_objects(&mut self, objects: Vec<SceneObject>) {
        self.objects = objects;
        // Keep the name counter ahead of the collection so future adds do
        // not immediately collide with loaded names
        self.spawned = self.spawned.max(self.objects.len() as u64);
        self.version += 1;
    }
}
