//! Display helpers for the hierarchy and properties panels

use shared::{ObjectKind, SceneObject};

/// Human-readable label for an object
pub fn object_display_name(obj: &SceneObject) -> String {
    if obj.name.is_empty() {
        format!("{} {}", obj.kind.label(), short_id(&obj.id))
    } else {
        obj.name.clone()
    }
}

/// First eight characters of an id, for compact display.
///
/// Ids are opaque strings, so the cut must land on a char boundary, not
/// at byte eight.
pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(8) {
        Some((i, _)) => &id[..i],
        None => id,
    }
}

/// Icon for an object kind
pub fn kind_icon(kind: ObjectKind) -> &'static str {
    match kind {
        ObjectKind::Box => "⬛",
        ObjectKind::Sphere => "⚫",
        ObjectKind::Cylinder => "⬮",
        ObjectKind::Cone => "▲",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_id_truncates_long_ids() {
        assert_eq!(short_id("0123456789abcdef"), "01234567");
        assert_eq!(short_id("short"), "short");
        assert_eq!(short_id(""), "");
    }

    #[test]
    fn test_short_id_multibyte_ids() {
        // Loaded documents can carry arbitrary ids; the cut must not land
        // mid-character
        assert_eq!(short_id("aαααα"), "aαααα");
        assert_eq!(short_id("ααααααααα"), "αααααααα");
        assert_eq!(short_id("⬛⬛⬛⬛⬛⬛⬛⬛⬛⬛"), "⬛⬛⬛⬛⬛⬛⬛⬛");
    }

    #[test]
    fn test_display_name_falls_back_to_kind_and_id() {
        let mut obj = SceneObject::new(
            "deadbeef-0000".to_string(),
            ObjectKind::Sphere,
            String::new(),
        );
        assert_eq!(object_display_name(&obj), "Sphere deadbeef");
        obj.name = "Orb".to_string();
        assert_eq!(object_display_name(&obj), "Orb");
    }
}
