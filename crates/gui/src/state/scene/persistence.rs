//! Scene document save/load and autosave

use std::time::{SystemTime, UNIX_EPOCH};

use shared::{DocumentError, SceneDocument, SceneObject};

use super::SceneState;
use crate::state::EditorState;

impl SceneState {
    /// Snapshot the store as a versioned scene document
    pub fn document(&self) -> SceneDocument {
        SceneDocument::new(self.objects.clone(), iso8601_utc(epoch_seconds()))
    }

    /// Get autosave file path
    fn autosave_path() -> Option<std::path::PathBuf> {
        directories::ProjectDirs::from("com", "scenelab", "scenelab")
            .map(|dirs| dirs.data_dir().join("autosave.json"))
    }

    /// Save the scene to the autosave file
    pub fn autosave(&self) {
        if let Some(path) = Self::autosave_path() {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            if let Ok(json) = self.document().to_json() {
                let _ = std::fs::write(&path, json);
            }
        }
    }

    /// Load objects from the autosave file
    pub fn load_autosave() -> Option<Vec<SceneObject>> {
        let path = Self::autosave_path()?;
        let json = std::fs::read_to_string(&path).ok()?;
        SceneDocument::from_json(&json).ok().map(|doc| doc.objects)
    }

    /// Check if an autosave file exists
    pub fn has_autosave() -> bool {
        Self::autosave_path().map(|p| p.exists()).unwrap_or(false)
    }
}

impl EditorState {
    /// Replace the scene from a JSON document.
    ///
    /// On error the store is left exactly as it was; on success the loaded
    /// state becomes a fresh undoable baseline. Returns the object count.
    pub fn load_document(&mut self, json: &str) -> Result<usize, DocumentError> {
        let doc = SceneDocument::from_json(json)?;
        let count = doc.objects.len();
        self.load_objects(doc.objects);
        Ok(count)
    }
}

/// Default download-style file name for a scene save
pub fn default_save_filename() -> String {
    format!("scene_{}.json", epoch_millis())
}

/// Milliseconds since the Unix epoch
pub fn epoch_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn epoch_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// ISO-8601 UTC timestamp ("2026-08-29T12:34:56Z") for document metadata.
///
/// There is no time crate in the dependency tree, so the civil-date
/// conversion (days-from-civil inverse) is done inline.
pub fn iso8601_utc(epoch_secs: u64) -> String {
    let days = (epoch_secs / 86_400) as i64;
    let secs = epoch_secs % 86_400;

    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);

    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
        year,
        month,
        day,
        secs / 3_600,
        (secs / 60) % 60,
        secs % 60
    )
}
