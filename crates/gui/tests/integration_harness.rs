//! Integration tests for the headless editor harness.
//!
//! Drives scene, selection, and history through the same coordinator the
//! GUI uses.

use std::collections::HashSet;

use scenelab_gui_lib::harness::EditorHarness;
use shared::{ObjectKind, ObjectPatch, MIN_SCALE};

#[test]
fn test_harness_add_names_and_selects() {
    let mut h = EditorHarness::new();

    let box_id = h.add_box();
    assert_eq!(h.object_count(), 1);
    assert_eq!(h.state.scene.objects()[0].name, "Box 1");
    assert_eq!(h.selected(), Some(box_id.clone()));

    let sphere_id = h.add_sphere();
    assert_eq!(h.object_count(), 2);
    assert_eq!(h.state.scene.objects()[1].name, "Sphere 2");
    // A new add always selects the new object
    assert_eq!(h.selected(), Some(sphere_id.clone()));

    // Deleting a non-selected object must not change the selection
    h.state.delete(&box_id);
    assert_eq!(h.object_count(), 1);
    assert_eq!(h.state.scene.objects()[0].name, "Sphere 2");
    assert_eq!(h.selected(), Some(sphere_id));
}

#[test]
fn test_harness_delete_selected_clears_selection() {
    let mut h = EditorHarness::new();
    let id = h.add_cone();
    assert_eq!(h.selected(), Some(id.clone()));

    h.state.delete(&id);
    assert_eq!(h.object_count(), 0);
    assert!(h.selected().is_none());
}

#[test]
fn test_harness_delete_unknown_id_is_noop() {
    let mut h = EditorHarness::new();
    h.add_box();
    let history_before = h.history_len();

    h.state.delete("no-such-id");
    assert_eq!(h.object_count(), 1);
    assert_eq!(h.history_len(), history_before);
}

#[test]
fn test_harness_ids_stay_unique() {
    let mut h = EditorHarness::new();
    let a = h.add_box();
    let b = h.add_sphere();
    h.state.delete(&a);
    let c = h.add_cylinder();
    let d = h.state.duplicate(&b).unwrap();
    h.state.duplicate(&c).unwrap();

    let ids: HashSet<_> = h
        .state
        .scene
        .objects()
        .iter()
        .map(|o| o.id.clone())
        .collect();
    assert_eq!(ids.len(), h.object_count());
    assert_ne!(b, d);
}

#[test]
fn test_harness_duplicate_copies_fields() {
    let mut h = EditorHarness::new();
    let id = h.add_box();
    h.update(
        &id,
        &ObjectPatch {
            color: Some([0.9, 0.1, 0.2]),
            rotation: Some([0.0, 1.0, 0.0]),
            ..Default::default()
        },
    );
    h.settle();

    let copy_id = h.state.duplicate(&id).unwrap();
    assert_eq!(h.selected(), Some(copy_id.clone()));

    let source = h.state.scene.get(&id).unwrap().clone();
    let copy = h.state.scene.get(&copy_id).unwrap().clone();
    assert_eq!(copy.name, format!("{} Copy", source.name));
    assert_eq!(copy.material, source.material);
    assert_eq!(copy.transform.rotation, source.transform.rotation);
    // Offset one unit along X so the clone is visible next to the source
    assert_eq!(
        copy.transform.position[0],
        source.transform.position[0] + 1.0
    );
}

#[test]
fn test_harness_duplicate_unknown_id() {
    let mut h = EditorHarness::new();
    assert!(h.state.duplicate("missing").is_none());
}

#[test]
fn test_harness_undo_redo_cycle() {
    let mut h = EditorHarness::new();
    h.add_box();
    h.add_box();
    assert_eq!(h.object_count(), 2);

    assert!(h.undo());
    assert_eq!(h.object_count(), 1);

    assert!(h.undo());
    assert_eq!(h.object_count(), 0);

    assert!(!h.undo()); // nothing to undo
    assert_eq!(h.object_count(), 0);

    assert!(h.redo());
    assert_eq!(h.object_count(), 1);

    assert!(h.redo());
    assert_eq!(h.object_count(), 2);

    assert!(!h.redo()); // nothing to redo
}

#[test]
fn test_harness_undo_redo_roundtrip_exact() {
    let mut h = EditorHarness::new();
    let id = h.add_box();
    h.update(
        &id,
        &ObjectPatch {
            position: Some([3.0, 4.0, 5.0]),
            ..Default::default()
        },
    );
    h.settle();

    let committed = h.state.scene.objects().to_vec();
    assert!(h.undo());
    assert_ne!(h.state.scene.objects(), committed.as_slice());
    assert!(h.redo());
    assert_eq!(h.state.scene.objects(), committed.as_slice());
}

#[test]
fn test_harness_undo_returns_last_committed_state() {
    let mut h = EditorHarness::new();
    let id = h.add_box();

    // Mutate to state B without letting the debounce fire
    h.update(
        &id,
        &ObjectPatch {
            position: Some([5.0, 0.0, 0.0]),
            ..Default::default()
        },
    );

    // Undo must land on committed state A, then redo restores B
    assert!(h.undo());
    assert_eq!(
        h.state.scene.get(&id).unwrap().transform.position,
        [0.0, 0.0, 0.0]
    );
    assert!(h.redo());
    assert_eq!(
        h.state.scene.get(&id).unwrap().transform.position,
        [5.0, 0.0, 0.0]
    );
}

#[test]
fn test_harness_debounce_coalesces_drag() {
    let mut h = EditorHarness::new();
    let id = h.add_box();
    let history_before = h.history_len();

    // A burst of deltas, as a gizmo drag produces
    for i in 1..=20 {
        h.update(
            &id,
            &ObjectPatch {
                position: Some([f64::from(i), 0.0, 0.0]),
                ..Default::default()
            },
        );
    }
    assert_eq!(h.history_len(), history_before);

    h.settle();
    assert_eq!(h.history_len(), history_before + 1);

    // One undo rolls the whole drag back
    assert!(h.undo());
    assert_eq!(
        h.state.scene.get(&id).unwrap().transform.position,
        [0.0, 0.0, 0.0]
    );
}

#[test]
fn test_harness_history_capped() {
    let mut h = EditorHarness::new();
    for _ in 0..60 {
        h.add_box();
    }
    assert_eq!(h.history_len(), scenelab_gui_lib::state::MAX_HISTORY);

    // Undo bottoms out at the earliest retained snapshot, not the empty scene
    let mut undone = 0;
    while h.undo() {
        undone += 1;
    }
    assert_eq!(undone, scenelab_gui_lib::state::MAX_HISTORY - 1);
    assert!(h.object_count() > 0);
}

#[test]
fn test_harness_scale_clamped() {
    let mut h = EditorHarness::new();
    let id = h.add_sphere();
    h.update(
        &id,
        &ObjectPatch {
            scale: Some([-1.0, 0.0, 2.0]),
            ..Default::default()
        },
    );
    h.settle();

    let obj = h.state.scene.get(&id).unwrap();
    assert_eq!(obj.transform.scale, [MIN_SCALE, MIN_SCALE, 2.0]);
}

#[test]
fn test_harness_clear_scene() {
    let mut h = EditorHarness::new();
    h.add_box();
    h.add_cone();
    h.state.clear_scene();
    assert_eq!(h.object_count(), 0);
    assert!(h.selected().is_none());

    // Clearing is itself undoable
    assert!(h.undo());
    assert_eq!(h.object_count(), 2);
}

#[test]
fn test_harness_update_unknown_id_schedules_nothing() {
    let mut h = EditorHarness::new();
    h.add(ObjectKind::Cylinder);
    h.update(
        "missing",
        &ObjectPatch {
            visible: Some(false),
            ..Default::default()
        },
    );
    assert!(!h.state.pending_commit.is_pending());
}
