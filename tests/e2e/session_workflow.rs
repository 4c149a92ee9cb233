//! E2E Scenario: editor sessions over the on-disk store
//!
//! Each test opens a fresh SQLite database, drives the `Editor` the way a
//! front-end would and reopens the database to check what survived.

use skillmap::editor::{AssumeNo, AssumeYes, Edit, EditOutcome, Editor};
use skillmap::persistence::{SELECTION_KEY, SNAPSHOT_KEY};
use skillmap::storage::{Database, KeyValueStore};
use skillmap::transfer::FilenamePolicy;
use tempfile::TempDir;

use super::common::SAMPLE_JSON;

fn open(dir: &TempDir) -> Editor<Database> {
    let db = Database::open(dir.path().join("skillmap.db")).unwrap();
    Editor::restore(db, FilenamePolicy::Preserve)
}

#[test]
fn test_sample_file_edit_and_export() {
    let dir = TempDir::new().unwrap();
    let mut editor = open(&dir);
    let document = editor.load_file(SAMPLE_JSON, "course.json").unwrap();
    assert_eq!(document.modules[0].title, "M1");
    assert_eq!(document.modules[0].objectives[0].goal, "G");
    assert_eq!(editor.selected_module(), 0);

    editor
        .apply(
            Edit::AddSkill {
                module: None,
                objective: 0,
                value: Some("S2".to_string()),
            },
            &mut AssumeYes,
        )
        .unwrap();

    let payload = editor.export().unwrap();
    let exported: serde_json::Value = serde_json::from_slice(&payload.bytes).unwrap();
    assert_eq!(
        exported["modules"][0]["objectives"][0]["skills"],
        serde_json::json!(["S1", "S2"])
    );
    assert_eq!(payload.filename, "course.json");
}

#[test]
fn test_session_survives_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let mut editor = open(&dir);
        editor.load_file(SAMPLE_JSON, "course.json").unwrap();
        editor.apply(Edit::AddModule { title: None }, &mut AssumeYes).unwrap();
        editor
            .apply(
                Edit::RenameModule {
                    index: 1,
                    title: "Advanced".to_string(),
                },
                &mut AssumeYes,
            )
            .unwrap();
    }

    let editor = open(&dir);
    let document = editor.document().unwrap();
    assert_eq!(document.modules[1].title, "Advanced");
    assert_eq!(editor.selected_module(), 1);
    assert_eq!(editor.file_name(), "course.json");
}

#[test]
fn test_corrupt_snapshot_is_discarded_on_startup() {
    let dir = TempDir::new().unwrap();
    {
        let db = Database::open(dir.path().join("skillmap.db")).unwrap();
        db.set(SNAPSHOT_KEY, "not json").unwrap();
        db.set(SELECTION_KEY, "3").unwrap();
    }

    let editor = open(&dir);
    assert!(editor.document().is_none());

    let db = Database::open(dir.path().join("skillmap.db")).unwrap();
    assert_eq!(db.get(SNAPSHOT_KEY).unwrap(), None);
    assert_eq!(db.get(SELECTION_KEY).unwrap(), None);
}

#[test]
fn test_stale_selection_is_clamped() {
    let dir = TempDir::new().unwrap();
    {
        let mut editor = open(&dir);
        editor.load_file(SAMPLE_JSON, "course.json").unwrap();
    }
    {
        let db = Database::open(dir.path().join("skillmap.db")).unwrap();
        db.set(SELECTION_KEY, "9").unwrap();
    }
    assert_eq!(open(&dir).selected_module(), 0);
}

#[test]
fn test_declined_removal_changes_nothing_on_disk() {
    let dir = TempDir::new().unwrap();
    {
        let mut editor = open(&dir);
        editor.load_file(SAMPLE_JSON, "course.json").unwrap();
        editor.apply(Edit::AddObjective { module: None }, &mut AssumeYes).unwrap();
        let outcome = editor
            .apply(
                Edit::RemoveObjective {
                    module: None,
                    objective: 0,
                },
                &mut AssumeNo,
            )
            .unwrap();
        assert_eq!(outcome, EditOutcome::Declined);
    }
    assert_eq!(open(&dir).document().unwrap().modules[0].objectives.len(), 2);
}

#[test]
fn test_clear_after_edits_removes_snapshot() {
    let dir = TempDir::new().unwrap();
    {
        let mut editor = open(&dir);
        editor.load_file(SAMPLE_JSON, "course.json").unwrap();
        editor.apply(Edit::AddModule { title: None }, &mut AssumeYes).unwrap();
        assert!(editor.clear(&mut AssumeYes).unwrap());
        assert!(editor.snapshots().load().is_none());
    }
    assert!(open(&dir).document().is_none());
}

#[test]
fn test_quota_failure_keeps_edit_in_session() {
    let dir = TempDir::new().unwrap();
    let db = Database::open(dir.path().join("skillmap.db"))
        .unwrap()
        .with_quota(200);
    let mut editor = Editor::restore(db, FilenamePolicy::Preserve);
    editor.load_file(SAMPLE_JSON, "course.json").unwrap();
    for _ in 0..5 {
        editor.apply(Edit::AddModule { title: None }, &mut AssumeYes).unwrap();
    }
    assert_eq!(editor.document().unwrap().modules.len(), 6);

    let reopened = open(&dir);
    assert!(reopened.document().unwrap().modules.len() < 6);
}
