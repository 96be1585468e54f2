//! Unit tests for screen/canvas coordinate conversion.

use notecanvas::input::coords::validate_zoom;
use notecanvas::{CoordinateContext, CoordinateConverter, EngineError, Point, Viewport};

fn ctx(pan: (f32, f32), zoom: f32) -> CoordinateContext {
    CoordinateContext::new(pan.into(), zoom)
}

#[test]
fn test_to_canvas_and_back() {
    let ctx = ctx((60.0, 40.0), 2.0);

    let canvas = CoordinateConverter::to_canvas(Point::new(300.0, 200.0), &ctx).unwrap();
    assert_eq!(canvas, Point::new(120.0, 80.0));

    let screen = CoordinateConverter::to_screen(canvas, &ctx).unwrap();
    assert_eq!(screen, Point::new(300.0, 200.0));
}

#[test]
fn test_deltas_scale_by_zoom() {
    assert_eq!(
        CoordinateConverter::delta_to_canvas(Point::new(40.0, -20.0), 2.0).unwrap(),
        Point::new(20.0, -10.0)
    );
    assert_eq!(
        CoordinateConverter::delta_to_screen(Point::new(20.0, -10.0), 2.0).unwrap(),
        Point::new(40.0, -20.0)
    );
}

#[test]
fn test_invalid_zoom_is_rejected_everywhere() {
    let bad = ctx((0.0, 0.0), 0.0);
    assert_eq!(
        CoordinateConverter::to_canvas(Point::ZERO, &bad),
        Err(EngineError::InvalidZoom { zoom: 0.0 })
    );
    assert!(CoordinateConverter::to_screen(Point::ZERO, &bad).is_err());
    assert!(CoordinateConverter::delta_to_canvas(Point::ZERO, -1.0).is_err());
    assert!(validate_zoom(f32::INFINITY).is_err());
    assert!(validate_zoom(f32::NAN).is_err());
    assert!(validate_zoom(0.5).is_ok());
}

#[test]
fn test_pan_for_zoom_around_keeps_anchor() {
    let before = ctx((60.0, 40.0), 2.0);
    let anchor = Point::new(300.0, 200.0);

    let pan = CoordinateConverter::pan_for_zoom_around(anchor, &before, 2.5).unwrap();
    let after = CoordinateContext::new(pan, 2.5);

    let canvas = CoordinateConverter::to_canvas(anchor, &after).unwrap();
    assert!((canvas.x - 120.0).abs() < 1e-4);
    assert!((canvas.y - 80.0).abs() < 1e-4);
}

#[test]
fn test_viewport_range_reclamps() {
    let mut viewport = Viewport::new(0.2, 3.0);
    viewport.set_zoom(2.5).unwrap();
    viewport.set_zoom_range(0.5, 2.0);

    assert_eq!(viewport.zoom(), 2.0);
    assert_eq!(viewport.zoom_range(), (0.5, 2.0));
    assert_eq!(viewport.screen_len_to_canvas(8.0), 4.0);
}

#[test]
fn test_viewport_zoom_around_rejects_bad_anchor() {
    let mut viewport = Viewport::new(0.2, 3.0);
    assert_eq!(
        viewport.zoom_around(1.5, Point::new(f32::NAN, 0.0)),
        Err(EngineError::NonFiniteGeometry)
    );
    assert_eq!(viewport.zoom(), 1.0);
}

#[test]
fn test_round_trip_over_sample_grid() {
    let pans = [(0.0, 0.0), (60.0, 40.0), (-350.5, 1200.25)];
    let zooms = [0.2, 0.75, 1.0, 2.0, 3.0];
    let points = [(0.0, 0.0), (120.0, 80.0), (-999.5, 42.125), (1.0e4, -3.5e3)];

    for pan in pans {
        for zoom in zooms {
            let ctx = ctx(pan, zoom);
            for p in points {
                let p = Point::from(p);
                let screen = CoordinateConverter::to_screen(p, &ctx).unwrap();
                let back = CoordinateConverter::to_canvas(screen, &ctx).unwrap();
                let tolerance = 1e-3 * (1.0 + p.x.abs().max(p.y.abs()));
                assert!(
                    back.distance(p) <= tolerance,
                    "pan {pan:?} zoom {zoom}: {p:?} -> {back:?}"
                );
            }
        }
    }
}
