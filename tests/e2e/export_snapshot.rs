//! Snapshot of the exported file layout.

use skillmap::editor::{AssumeYes, Edit, Editor};
use skillmap::storage::MemoryStore;
use skillmap::transfer::FilenamePolicy;

use super::common::SAMPLE_JSON;

#[test]
fn test_export_layout() {
    let store = MemoryStore::new();
    let mut editor = Editor::restore(&store, FilenamePolicy::Preserve);
    editor.load_file(SAMPLE_JSON, "course.json").unwrap();
    editor.apply(Edit::AddModule { title: None }, &mut AssumeYes).unwrap();
    editor
        .apply(Edit::AddObjective { module: None }, &mut AssumeYes)
        .unwrap();

    let payload = editor.export().unwrap();
    let text = String::from_utf8(payload.bytes).unwrap();
    insta::assert_snapshot!(text, @r#"
    {
      "title": "T",
      "description": "D",
      "modules": [
        {
          "title": "M1",
          "objectives": [
            {
              "goal": "G",
              "skills": [
                "S1"
              ]
            }
          ]
        },
        {
          "title": "New Module",
          "objectives": [
            {
              "goal": "New objective",
              "skills": []
            }
          ]
        }
      ]
    }
    "#);
}
