//! Snapshot tests using the insta crate.
//!
//! These pin the JSON shapes hosts persist and exchange: note snapshots,
//! active modes and settings files.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use crate::helpers::{TestCanvasBuilder, press};
use notecanvas::{ActiveMode, EngineSettings, NoteId, ResizeDirection};

#[test]
fn snapshot_note() {
    let (canvas, ids) = TestCanvasBuilder::new()
        .with_note((100.0, 100.0), (200.0, 150.0), "Hello")
        .build();
    let snapshot = canvas.note(ids[0]).unwrap().snapshot();

    insta::assert_snapshot!(serde_json::to_string_pretty(&snapshot).unwrap(), @r#"
    {
      "id": 1,
      "position": {
        "x": 100.0,
        "y": 100.0
      },
      "size": {
        "width": 200.0,
        "height": 150.0
      },
      "content": "Hello",
      "editing": false,
      "caret_offset": 0,
      "z_order": 1,
      "style": "default"
    }
    "#);
}

#[test]
fn snapshot_active_modes() {
    let modes = [
        ActiveMode::Idle,
        ActiveMode::Panning,
        ActiveMode::Dragging { note_id: NoteId(2) },
        ActiveMode::Resizing {
            note_id: NoteId(3),
            direction: ResizeDirection::Se,
        },
        ActiveMode::Editing { note_id: NoteId(4) },
    ];
    let lines: Vec<String> = modes
        .iter()
        .map(|m| serde_json::to_string(m).unwrap())
        .collect();

    insta::assert_snapshot!(lines.join("\n"), @r#"
    {"mode":"idle"}
    {"mode":"panning"}
    {"mode":"dragging","note_id":2}
    {"mode":"resizing","note_id":3,"direction":"se"}
    {"mode":"editing","note_id":4}
    "#);
}

#[test]
fn snapshot_canvas_mode_during_resize() {
    let (mut canvas, _) = TestCanvasBuilder::new()
        .with_default_note((100.0, 100.0))
        .build();
    press(&mut canvas, 298.0, 248.0);

    let snapshot = canvas.snapshot();
    insta::assert_snapshot!(serde_json::to_string(&snapshot.mode).unwrap(), @r#"{"mode":"resizing","note_id":1,"direction":"se"}"#);
    assert_eq!(snapshot.focused, Some(NoteId(1)));
}

#[test]
fn snapshot_default_settings() {
    insta::assert_snapshot!(serde_json::to_string_pretty(&EngineSettings::default()).unwrap(), @r#"
    {
      "min_note_width": 150.0,
      "min_note_height": 100.0,
      "default_note_size": {
        "width": 200.0,
        "height": 150.0
      },
      "default_note_position": {
        "x": 100.0,
        "y": 100.0
      },
      "text_padding": 12.0,
      "min_zoom": 0.2,
      "max_zoom": 3.0,
      "wheel_pixel_zoom_divisor": 500.0,
      "wheel_line_zoom_divisor": 50.0,
      "wheel_line_pan_px": 20.0,
      "resize_handle_px": 8.0,
      "click_slop_px": 3.0,
      "char_width": 8.0,
      "line_height": 20.0
    }
    "#);
}
