//! Persisted scene document format.
//!
//! A document is the full object collection plus metadata; history and
//! selection are never persisted.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::SceneObject;

/// Current document format version
pub const FORMAT_VERSION: &str = "1.0";

/// Failures surfaced by document load/save
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Structurally wrong document (e.g. `objects` is not an array)
    #[error("malformed scene document: {0}")]
    Malformed(&'static str),
    /// Invalid JSON or field shapes that do not match the schema
    #[error("invalid scene JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Document metadata block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetadata {
    pub version: String,
    /// ISO-8601 UTC creation timestamp
    pub created: String,
    pub object_count: usize,
}

impl Default for DocumentMetadata {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION.to_string(),
            created: String::new(),
            object_count: 0,
        }
    }
}

/// Versioned interchange document for a scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDocument {
    pub objects: Vec<SceneObject>,
    #[serde(default)]
    pub metadata: DocumentMetadata,
}

impl SceneDocument {
    pub fn new(objects: Vec<SceneObject>, created: String) -> Self {
        let object_count = objects.len();
        Self {
            objects,
            metadata: DocumentMetadata {
                version: FORMAT_VERSION.to_string(),
                created,
                object_count,
            },
        }
    }

    /// Parse a document, rejecting anything without an `objects` array.
    ///
    /// Loaded scales are clamped so a hand-edited file cannot smuggle in a
    /// degenerate transform. Missing metadata is tolerated.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let Some(map) = value.as_object() else {
            return Err(DocumentError::Malformed("top level is not an object"));
        };
        match map.get("objects") {
            Some(v) if v.is_array() => {}
            Some(_) => return Err(DocumentError::Malformed("`objects` is not an array")),
            None => return Err(DocumentError::Malformed("missing `objects` array")),
        }
        let mut doc: SceneDocument = serde_json::from_value(value)?;
        for obj in &mut doc.objects {
            obj.transform.clamp_scale();
        }
        Ok(doc)
    }

    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
