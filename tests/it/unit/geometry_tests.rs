//! Unit tests for note geometry gestures.

use notecanvas::note::{GeometryGesture, NoteGeometry, NoteGeometryController, SizeLimits};
use notecanvas::{Bounds, EngineError, Point, ResizeDirection, Size};

fn controller(x: f32, y: f32, w: f32, h: f32) -> NoteGeometryController {
    NoteGeometryController::new(
        NoteGeometry::new(Point::new(x, y), Size::new(w, h)),
        SizeLimits::new(150.0, 100.0),
    )
}

#[test]
fn test_drag_keeps_grab_offset() {
    let mut note = controller(100.0, 100.0, 200.0, 150.0);

    assert!(note.begin_drag(Point::new(150.0, 120.0)));
    assert!(note.gesture().is_dragging());
    assert_eq!(note.pointer_move(Point::new(200.0, 170.0)), Ok(true));
    assert_eq!(note.position(), Point::new(150.0, 150.0));

    let end = note.finish().unwrap();
    assert!(end.changed);
    assert_eq!(end.geometry.position, Point::new(150.0, 150.0));
    assert!(note.gesture().is_idle());
    assert!(note.finish().is_none());
}

#[test]
fn test_pointer_move_when_idle_is_noop() {
    let mut note = controller(0.0, 0.0, 200.0, 150.0);
    assert_eq!(note.pointer_move(Point::new(50.0, 50.0)), Ok(false));
    assert_eq!(note.position(), Point::ZERO);
}

#[test]
fn test_every_direction_respects_minimum() {
    for direction in ResizeDirection::ALL {
        let mut note = controller(100.0, 100.0, 200.0, 150.0);
        let start = Point::new(200.0, 175.0);
        assert!(note.begin_resize(direction, start));
        assert_eq!(note.gesture().resize_direction(), Some(direction));

        // Shrink as hard as possible along every axis this handle controls.
        let crush = Point::new(
            if direction.moves_west() { 10_000.0 } else { -10_000.0 },
            if direction.moves_north() { 10_000.0 } else { -10_000.0 },
        );
        note.pointer_move(start + crush).unwrap();

        let size = note.size();
        assert!(size.width >= 150.0, "{direction:?} width {}", size.width);
        assert!(size.height >= 100.0, "{direction:?} height {}", size.height);
        note.finish();
    }
}

#[test]
fn test_north_west_pins_south_east_corner() {
    let mut note = controller(100.0, 100.0, 200.0, 150.0);
    note.begin_resize(ResizeDirection::Nw, Point::new(100.0, 100.0));
    note.pointer_move(Point::new(400.0, 400.0)).unwrap();

    let bounds = note.bounds();
    assert_eq!(note.size(), Size::new(150.0, 100.0));
    assert_eq!(bounds.right(), 300.0);
    assert_eq!(bounds.bottom(), 250.0);
}

#[test]
fn test_resize_is_relative_to_gesture_start() {
    let mut note = controller(100.0, 100.0, 200.0, 150.0);
    note.begin_resize(ResizeDirection::E, Point::new(300.0, 150.0));
    note.pointer_move(Point::new(250.0, 150.0)).unwrap();
    assert_eq!(note.size().width, 150.0);

    // Growing again undoes the clamp exactly.
    note.pointer_move(Point::new(340.0, 150.0)).unwrap();
    assert_eq!(note.size().width, 240.0);
}

#[test]
fn test_non_finite_move_is_rejected() {
    let mut note = controller(100.0, 100.0, 200.0, 150.0);
    note.begin_resize(ResizeDirection::S, Point::new(200.0, 250.0));
    assert_eq!(
        note.pointer_move(Point::new(200.0, f32::INFINITY)),
        Err(EngineError::NonFiniteGeometry)
    );
    assert_eq!(note.size(), Size::new(200.0, 150.0));
    assert!(matches!(note.gesture(), GeometryGesture::Resizing { .. }));
}

#[test]
fn test_hit_test_edges_and_interior() {
    let bounds = Bounds::new(Point::new(100.0, 100.0), Size::new(200.0, 150.0));

    assert_eq!(ResizeDirection::hit_test(bounds, Point::new(102.0, 175.0), 8.0), Some(ResizeDirection::W));
    assert_eq!(ResizeDirection::hit_test(bounds, Point::new(200.0, 101.0), 8.0), Some(ResizeDirection::N));
    assert_eq!(ResizeDirection::hit_test(bounds, Point::new(200.0, 249.0), 8.0), Some(ResizeDirection::S));
    assert_eq!(ResizeDirection::hit_test(bounds, Point::new(299.0, 101.0), 8.0), Some(ResizeDirection::Ne));
    assert_eq!(ResizeDirection::hit_test(bounds, Point::new(101.0, 249.0), 8.0), Some(ResizeDirection::Sw));
    assert_eq!(ResizeDirection::hit_test(bounds, Point::new(200.0, 175.0), 8.0), None);
    assert_eq!(ResizeDirection::hit_test(bounds, Point::new(90.0, 175.0), 8.0), None);
}

#[test]
fn test_set_limits_refloors() {
    let mut note = controller(100.0, 100.0, 200.0, 150.0);
    assert!(!note.set_limits(SizeLimits::new(100.0, 100.0)));
    assert!(note.set_limits(SizeLimits::new(250.0, 200.0)));
    assert_eq!(note.size(), Size::new(250.0, 200.0));
    assert_eq!(note.position(), Point::new(100.0, 100.0));
    assert_eq!(note.limits(), SizeLimits::new(250.0, 200.0));
}

#[test]
fn test_size_floor_holds_after_every_move() {
    let deltas = [
        (-30.0, 12.0),
        (-400.0, -90.0),
        (55.0, -300.0),
        (-1.0, 1.0),
        (800.0, 800.0),
        (-799.0, -640.0),
    ];
    for direction in ResizeDirection::ALL {
        let mut note = controller(0.0, 0.0, 180.0, 120.0);
        let start = Point::new(90.0, 60.0);
        note.begin_resize(direction, start);

        let mut pointer = start;
        for (dx, dy) in deltas {
            pointer = pointer + Point::new(dx, dy);
            note.pointer_move(pointer).unwrap();
            let size = note.size();
            assert!(size.width >= 150.0 && size.height >= 100.0, "{direction:?} at {pointer:?}");
        }
    }
}
