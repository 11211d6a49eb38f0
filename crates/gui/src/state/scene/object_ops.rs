//! Object CRUD operations

use shared::{ObjectId, ObjectKind, ObjectPatch, SceneObject};

use super::SceneState;

impl SceneState {
    /// Create an object with defaults and an auto-generated display name.
    /// Returns the new id.
    pub fn add(&mut self, kind: ObjectKind) -> ObjectId {
        let id = uuid::Uuid::new_v4().to_string();
        self.spawned += 1;
        let name = format!("{} {}", kind.label(), self.spawned);
        self.objects.push(SceneObject::new(id.clone(), kind, name));
        self.version += 1;
        id
    }

    /// Merge a partial update into an object.
    ///
    /// A missing id is a silent no-op: panel edits can race against
    /// deletion and that race is tolerated, not an error.
    pub fn update(&mut self, id: &str, patch: &ObjectPatch) {
        if let Some(obj) = self.get_mut(id) {
            patch.apply_to(obj);
            self.version += 1;
        }
    }

    /// Remove an object by id; returns whether anything was removed
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.objects.len();
        self.objects.retain(|o| o.id != id);
        let removed = self.objects.len() != before;
        if removed {
            self.version += 1;
        }
        removed
    }

    /// Deep-copy an object under a fresh id.
    ///
    /// The copy is offset one unit along X so it does not sit exactly on
    /// top of the source. Returns None if the source id is unknown.
    pub fn duplicate(&mut self, id: &str) -> Option<ObjectId> {
        let mut copy = self.get(id)?.clone();
        copy.id = uuid::Uuid::new_v4().to_string();
        copy.name.push_str(" Copy");
        copy.transform.position[0] += 1.0;
        let new_id = copy.id.clone();
        self.objects.push(copy);
        self.version += 1;
        Some(new_id)
    }

    /// Toggle object visibility
    pub fn toggle_visibility(&mut self, id: &str) {
        if let Some(obj) = self.get_mut(id) {
            obj.visible = !obj.visible;
            self.version += 1;
        }
    }

    /// Empty the collection
    pub fn clear(&mut self) {
        self.objects.clear();
        self.version += 1;
    }
}
