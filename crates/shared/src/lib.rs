//! Shared scene data model for the scenelab editor.
//!
//! Pure data plus serde: object schema, partial-update patches, and the
//! persisted document format. Id generation and editing logic live in the
//! GUI crate.

mod document;

pub use document::{DocumentError, DocumentMetadata, SceneDocument, FORMAT_VERSION};

use serde::{Deserialize, Serialize};

/// Unique identifier of an object in the scene
pub type ObjectId = String;

/// Smallest allowed scale component; anything below is clamped up so a
/// transform can never become degenerate
pub const MIN_SCALE: f64 = 0.1;

/// Primitive kind; the rendering surface decides what geometry to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    Box,
    Sphere,
    Cylinder,
    Cone,
}

impl ObjectKind {
    /// Display label for panels and auto-generated names
    pub fn label(&self) -> &'static str {
        match self {
            ObjectKind::Box => "Box",
            ObjectKind::Sphere => "Sphere",
            ObjectKind::Cylinder => "Cylinder",
            ObjectKind::Cone => "Cone",
        }
    }

    /// All available kinds
    pub fn all() -> &'static [ObjectKind] {
        &[
            ObjectKind::Box,
            ObjectKind::Sphere,
            ObjectKind::Cylinder,
            ObjectKind::Cone,
        ]
    }
}

/// Object transform: position, per-axis Euler rotation in radians, scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: [f64; 3],
    pub rotation: [f64; 3],
    pub scale: [f64; 3],
}

impl Transform {
    pub fn new() -> Self {
        Self {
            position: [0.0, 0.0, 0.0],
            rotation: [0.0, 0.0, 0.0],
            scale: [1.0, 1.0, 1.0],
        }
    }

    /// Force every scale component to at least [`MIN_SCALE`]
    pub fn clamp_scale(&mut self) {
        for c in &mut self.scale {
            if *c < MIN_SCALE {
                *c = MIN_SCALE;
            }
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

/// Surface material; scalar channels are 0..1
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub color: [f32; 3],
    pub emissive: [f32; 3],
    pub emissive_intensity: f32,
    pub opacity: f32,
    pub metalness: f32,
    pub roughness: f32,
    pub wireframe: bool,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: [0.55, 0.55, 0.6],
            emissive: [0.0, 0.0, 0.0],
            emissive_intensity: 0.0,
            opacity: 1.0,
            metalness: 0.1,
            roughness: 0.5,
            wireframe: false,
        }
    }
}

/// One editable primitive in the scene.
///
/// Transform and material are flattened so the serialized shape is a single
/// flat record (`position`, `color`, `emissiveIntensity`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub id: ObjectId,
    pub kind: ObjectKind,
    #[serde(flatten)]
    pub transform: Transform,
    #[serde(flatten)]
    pub material: Material,
    pub visible: bool,
    pub name: String,
}

impl SceneObject {
    /// New object with default transform and material
    pub fn new(id: ObjectId, kind: ObjectKind, name: String) -> Self {
        Self {
            id,
            kind,
            transform: Transform::new(),
            material: Material::default(),
            visible: true,
            name,
        }
    }
}

/// Partial update for a [`SceneObject`]; unset fields are left untouched.
///
/// The object id and kind are not patchable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectPatch {
    pub name: Option<String>,
    pub visible: Option<bool>,
    pub position: Option<[f64; 3]>,
    pub rotation: Option<[f64; 3]>,
    pub scale: Option<[f64; 3]>,
    pub color: Option<[f32; 3]>,
    pub emissive: Option<[f32; 3]>,
    pub emissive_intensity: Option<f32>,
    pub opacity: Option<f32>,
    pub metalness: Option<f32>,
    pub roughness: Option<f32>,
    pub wireframe: Option<bool>,
}

impl ObjectPatch {
    /// Merge the set fields into `obj`, normalizing out-of-range values
    pub fn apply_to(&self, obj: &mut SceneObject) {
        if let Some(name) = &self.name {
            obj.name = name.clone();
        }
        if let Some(visible) = self.visible {
            obj.visible = visible;
        }
        if let Some(position) = self.position {
            obj.transform.position = position;
        }
        if let Some(rotation) = self.rotation {
            obj.transform.rotation = rotation;
        }
        if let Some(scale) = self.scale {
            obj.transform.scale = scale;
            obj.transform.clamp_scale();
        }
        if let Some(color) = self.color {
            obj.material.color = color;
        }
        if let Some(emissive) = self.emissive {
            obj.material.emissive = emissive;
        }
        if let Some(v) = self.emissive_intensity {
            obj.material.emissive_intensity = clamp01(v);
        }
        if let Some(v) = self.opacity {
            obj.material.opacity = clamp01(v);
        }
        if let Some(v) = self.metalness {
            obj.material.metalness = clamp01(v);
        }
        if let Some(v) = self.roughness {
            obj.material.roughness = clamp01(v);
        }
        if let Some(wireframe) = self.wireframe {
            obj.material.wireframe = wireframe;
        }
    }
}

fn clamp01(v: f32) -> f32 {
    v.clamp(0.0, 1.0)
}
