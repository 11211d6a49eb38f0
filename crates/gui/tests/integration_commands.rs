//! Integration tests for the JSON command protocol.

use scenelab_gui_lib::command::{execute_command, EditorCommand};
use scenelab_gui_lib::harness::EditorHarness;
use scenelab_gui_lib::state::TransformMode;
use shared::SceneDocument;

fn run_json(h: &mut EditorHarness, json: &str) -> scenelab_gui_lib::command::CommandResponse {
    let cmd: EditorCommand = serde_json::from_str(json).expect("command should parse");
    execute_command(&mut h.state, cmd)
}

#[test]
fn test_command_add_object() {
    let mut h = EditorHarness::new();
    let resp = run_json(&mut h, r#"{"command": "add_object", "kind": "box"}"#);
    assert!(resp.success);
    let id = resp.data.unwrap()["id"].as_str().unwrap().to_string();
    assert!(h.state.scene.get(&id).is_some());
    assert_eq!(h.selected(), Some(id));
}

#[test]
fn test_command_update_with_patch() {
    let mut h = EditorHarness::new();
    let id = h.add_box();
    let json = format!(
        r#"{{"command": "update", "id": "{id}", "patch": {{"name": "Hero", "scale": [-1, 0.5, 2]}}}}"#
    );
    let resp = run_json(&mut h, &json);
    assert!(resp.success);

    let obj = h.state.scene.get(&id).unwrap();
    assert_eq!(obj.name, "Hero");
    // Scripted updates commit immediately, no debounce wait
    assert!(!h.state.pending_commit.is_pending());
    assert_eq!(obj.transform.scale, [0.1, 0.5, 2.0]);
}

#[test]
fn test_command_delete_and_duplicate() {
    let mut h = EditorHarness::new();
    let id = h.add_sphere();

    let resp = run_json(
        &mut h,
        &format!(r#"{{"command": "duplicate", "id": "{id}"}}"#),
    );
    assert!(resp.success);
    assert_eq!(h.object_count(), 2);

    let resp = run_json(&mut h, &format!(r#"{{"command": "delete", "id": "{id}"}}"#));
    assert!(resp.success);
    assert_eq!(h.object_count(), 1);

    // Duplicating a deleted id fails cleanly
    let resp = run_json(
        &mut h,
        &format!(r#"{{"command": "duplicate", "id": "{id}"}}"#),
    );
    assert!(!resp.success);
    assert!(resp.error.is_some());
}

#[test]
fn test_command_undo_redo() {
    let mut h = EditorHarness::new();
    run_json(&mut h, r#"{"command": "add_object", "kind": "cone"}"#);
    run_json(&mut h, r#"{"command": "add_object", "kind": "cylinder"}"#);

    let resp = run_json(&mut h, r#"{"command": "undo"}"#);
    assert_eq!(resp.data.unwrap()["undone"], true);
    assert_eq!(h.object_count(), 1);

    let resp = run_json(&mut h, r#"{"command": "redo"}"#);
    assert_eq!(resp.data.unwrap()["redone"], true);
    assert_eq!(h.object_count(), 2);
}

#[test]
fn test_command_selection() {
    let mut h = EditorHarness::new();
    let a = h.add_box();
    h.add_sphere();

    let resp = run_json(&mut h, &format!(r#"{{"command": "select", "id": "{a}"}}"#));
    assert!(resp.success);
    assert_eq!(h.selected(), Some(a));

    run_json(&mut h, r#"{"command": "clear_selection"}"#);
    assert!(h.selected().is_none());

    // Selecting an unknown id is ignored
    run_json(&mut h, r#"{"command": "select", "id": "ghost"}"#);
    assert!(h.selected().is_none());
}

#[test]
fn test_command_transform_mode_requires_selection() {
    let mut h = EditorHarness::new();

    run_json(&mut h, r#"{"command": "set_transform_mode", "mode": "scale"}"#);
    assert_eq!(h.state.selection.mode, TransformMode::Translate);

    h.add_box();
    run_json(&mut h, r#"{"command": "set_transform_mode", "mode": "scale"}"#);
    assert_eq!(h.state.selection.mode, TransformMode::Scale);
}

#[test]
fn test_command_set_transform() {
    let mut h = EditorHarness::new();
    let id = h.add_box();
    let json = format!(
        r#"{{"command": "set_transform", "id": "{id}", "property": "position", "value": [1, 2, 3]}}"#
    );
    assert!(run_json(&mut h, &json).success);
    assert_eq!(
        h.state.scene.get(&id).unwrap().transform.position,
        [1.0, 2.0, 3.0]
    );
}

#[test]
fn test_command_export_and_load_scene() {
    let mut h = EditorHarness::new();
    h.add_box();
    h.add_cone();

    let resp = run_json(&mut h, r#"{"command": "export_scene"}"#);
    let json = resp.data.unwrap()["json"].as_str().unwrap().to_string();
    let doc = SceneDocument::from_json(&json).unwrap();
    assert_eq!(doc.objects.len(), 2);

    let mut other = EditorHarness::new();
    let cmd = EditorCommand::LoadScene { document: doc };
    let resp = execute_command(&mut other.state, cmd);
    assert!(resp.success);
    assert_eq!(other.object_count(), 2);
    assert!(other.selected().is_none());
    assert_eq!(
        other.state.scene.objects(),
        h.state.scene.objects()
    );
}

#[test]
fn test_command_load_scene_clamps_scale() {
    let mut h = EditorHarness::new();
    let id = h.add_box();
    run_json(
        &mut h,
        &format!(r#"{{"command": "update", "id": "{id}", "patch": {{"position": [2, 0, 0]}}}}"#),
    );

    // Build a document whose objects carry degenerate scales, bypassing
    // the JSON-string parse path entirely
    let mut doc = SceneDocument::from_json(&h.export_json()).unwrap();
    doc.objects[0].transform.scale = [0.0, -3.0, 1.0];

    let mut other = EditorHarness::new();
    let resp = execute_command(&mut other.state, EditorCommand::LoadScene { document: doc });
    assert!(resp.success);
    assert_eq!(
        other.state.scene.objects()[0].transform.scale,
        [0.1, 0.1, 1.0]
    );
}

#[test]
fn test_command_inspect_and_clear() {
    let mut h = EditorHarness::new();
    h.add_box();
    h.add_sphere();

    let resp = run_json(&mut h, r#"{"command": "inspect"}"#);
    let listed = resp.data.unwrap();
    assert_eq!(listed.as_array().unwrap().len(), 2);

    run_json(&mut h, r#"{"command": "clear"}"#);
    assert_eq!(h.object_count(), 0);
}
