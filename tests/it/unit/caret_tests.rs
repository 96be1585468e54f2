//! Unit tests for caret location.

use notecanvas::caret::locate;
use notecanvas::{EngineError, MonospaceMeasure, Point, Size, TextMeasure};

const WIDE: f32 = 1000.0;

fn mono() -> MonospaceMeasure {
    MonospaceMeasure::new(8.0, 20.0)
}

#[test]
fn test_click_at_end_of_first_line() {
    let offset = locate("Hello\nWorld", WIDE, &mono(), Point::new(40.0, 20.0)).unwrap();
    assert_eq!(offset, 5);
}

#[test]
fn test_click_between_characters_picks_nearest() {
    // Corners of "Hel" and "Hell" are at x=24 and x=32.
    let m = mono();
    assert_eq!(locate("Hello", WIDE, &m, Point::new(27.0, 20.0)).unwrap(), 3);
    assert_eq!(locate("Hello", WIDE, &m, Point::new(29.0, 20.0)).unwrap(), 4);
}

#[test]
fn test_tie_prefers_smaller_offset() {
    assert_eq!(locate("Hello", WIDE, &mono(), Point::new(28.0, 20.0)).unwrap(), 3);
}

#[test]
fn test_click_past_text_returns_len() {
    let m = mono();
    assert_eq!(locate("Hello", WIDE, &m, Point::new(500.0, 500.0)).unwrap(), 5);
    assert_eq!(locate("héllo", WIDE, &m, Point::new(500.0, 500.0)).unwrap(), 5);
}

#[test]
fn test_click_before_text_returns_zero() {
    assert_eq!(locate("Hello", WIDE, &mono(), Point::new(-10.0, -10.0)).unwrap(), 0);
}

#[test]
fn test_empty_text_is_zero_without_measuring() {
    let panicking = |_: &str, _: usize, _: f32| -> Size { panic!("measured empty text") };
    assert_eq!(locate("", WIDE, &panicking, Point::new(50.0, 50.0)).unwrap(), 0);
}

#[test]
fn test_degenerate_measurement_is_an_error() {
    let broken = |_: &str, end: usize, _: f32| Size::new(end as f32 * 8.0, f32::NAN);
    assert!(matches!(
        locate("Hello", WIDE, &broken, Point::new(10.0, 10.0)),
        Err(EngineError::DegenerateMeasurement { .. })
    ));
}

#[test]
fn test_non_finite_click_is_an_error() {
    assert_eq!(
        locate("Hello", WIDE, &mono(), Point::new(f32::NAN, 0.0)),
        Err(EngineError::NonFiniteGeometry)
    );
}

#[test]
fn test_click_mid_first_line() {
    // Local y=10 is inside the first line, not on its bottom edge.
    let offset = locate("Hello\nWorld", WIDE, &mono(), Point::new(27.0, 10.0)).unwrap();
    assert_eq!(offset, 3);
}

#[test]
fn test_click_mid_second_line() {
    let offset = locate("Hello\nWorld", WIDE, &mono(), Point::new(27.0, 30.0)).unwrap();
    assert_eq!(offset, 9);
}

#[test]
fn test_second_hard_line() {
    let offset = locate("Hello\nWorld", WIDE, &mono(), Point::new(16.0, 30.0)).unwrap();
    assert_eq!(offset, 8);
}

#[test]
fn test_click_right_of_shorter_line_stays_on_it() {
    // "Hi" is narrower than "World"; the caret must not jump to line two.
    let offset = locate("Hi\nWorld", WIDE, &mono(), Point::new(35.0, 10.0)).unwrap();
    assert_eq!(offset, 2);
}

#[test]
fn test_soft_wrapped_line() {
    let m = MonospaceMeasure::new(10.0, 20.0);

    // Four columns: "abcd" / "efgh". Local x=20 on line two is after "ef".
    let offset = locate("abcdefgh", 40.0, &m, Point::new(20.0, 30.0)).unwrap();
    assert_eq!(offset, 6);

    let line_end = locate("abcdefgh", 40.0, &m, Point::new(200.0, 30.0)).unwrap();
    assert_eq!(line_end, 8);
}

#[test]
fn test_first_line_start() {
    let offset = locate("Hello\nWorld", WIDE, &mono(), Point::new(2.0, 10.0)).unwrap();
    assert_eq!(offset, 0);
}

#[test]
fn test_monospace_newline_and_wrap() {
    let m = mono();
    assert_eq!(m.measure_substring("ab\ncd", 2, WIDE), Size::new(16.0, 20.0));
    assert_eq!(m.measure_substring("ab\ncd", 3, WIDE), Size::new(16.0, 40.0));
    assert_eq!(m.measure_substring("ab\ncd", 5, WIDE), Size::new(16.0, 40.0));
    assert_eq!(m.measure_substring("abc", 3, 16.0), Size::new(16.0, 40.0));
}

#[test]
fn test_measurement_is_monotonic_for_sample() {
    let m = mono();
    let text = "The quick brown\nfox jumps over the lazy dog";
    let len = text.chars().count();
    let mut last = Size::new(0.0, 0.0);
    for end in 0..=len {
        let size = m.measure_substring(text, end, 80.0);
        assert!(size.height >= last.height, "height shrank at {end}");
        if size.height == last.height {
            assert!(size.width >= last.width, "width shrank at {end}");
        }
        last = size;
    }
}
