//! Caret hit testing: maps a click inside a note's text box to a character offset.
//!
//! Text layout is not done here. The host supplies a [`TextMeasure`] that
//! reports the bounding box of `text[0..end]` wrapped at a given width, and the
//! locator binary-searches over `end` in two passes:
//!
//! 1. The clicked line is the band between the first prefix whose height
//!    reaches the click and the last prefix of that same height.
//! 2. Inside the band, the column is found by measuring the line's own
//!    substring and comparing end corners with the click. Widths of earlier
//!    (longer) lines never leak into the column search.
//!
//! Measurement must be monotonic in `end` for height, and for width within
//! one line.
//!
//! Offsets are character offsets, not byte offsets.

use crate::constants::{DEFAULT_CHAR_WIDTH, DEFAULT_LINE_HEIGHT};
use crate::error::{EngineError, EngineResult};
use crate::types::{Point, Size};
use tracing::{trace, warn};

/// Text measurement collaborator.
///
/// `measure_substring(text, end, wrap_width)` returns the size occupied by the
/// first `end` characters of `text` when wrapped at `wrap_width`. Both
/// dimensions must be non-decreasing in `end`.
pub trait TextMeasure {
    fn measure_substring(&self, text: &str, end: usize, wrap_width: f32) -> Size;
}

impl<F> TextMeasure for F
where
    F: Fn(&str, usize, f32) -> Size,
{
    fn measure_substring(&self, text: &str, end: usize, wrap_width: f32) -> Size {
        self(text, end, wrap_width)
    }
}

/// Fixed-advance measurement: every character is `char_width` wide, lines are
/// `line_height` tall, `\n` forces a break and lines wrap per character once
/// they would exceed `wrap_width`.
///
/// An empty prefix still occupies one (empty) line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonospaceMeasure {
    pub char_width: f32,
    pub line_height: f32,
}

impl MonospaceMeasure {
    pub fn new(char_width: f32, line_height: f32) -> Self {
        Self {
            char_width,
            line_height,
        }
    }

    fn columns(&self, wrap_width: f32) -> usize {
        if !(self.char_width > 0.0) || !wrap_width.is_finite() {
            return usize::MAX;
        }
        ((wrap_width / self.char_width).floor() as usize).max(1)
    }
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self::new(DEFAULT_CHAR_WIDTH, DEFAULT_LINE_HEIGHT)
    }
}

impl TextMeasure for MonospaceMeasure {
    fn measure_substring(&self, text: &str, end: usize, wrap_width: f32) -> Size {
        let columns = self.columns(wrap_width);
        let mut lines = 1usize;
        let mut col = 0usize;
        let mut widest = 0usize;

        for ch in text.chars().take(end) {
            if ch == '\n' {
                lines += 1;
                col = 0;
                continue;
            }
            if col == columns {
                lines += 1;
                col = 0;
            }
            col += 1;
            widest = widest.max(col);
        }

        Size::new(
            widest as f32 * self.char_width,
            lines as f32 * self.line_height,
        )
    }
}

/// Offset whose rendered end position is nearest to `click`, in
/// `[0, char count]`.
///
/// `click` is in the text box's local coordinates. A click below the last
/// line returns the text length. Fails only when the measurement returns a
/// non-finite size.
pub fn locate(
    text: &str,
    wrap_width: f32,
    measure: &dyn TextMeasure,
    click: Point,
) -> EngineResult<usize> {
    let len = text.chars().count();
    if len == 0 {
        return Ok(0);
    }
    if !click.is_finite() {
        return Err(EngineError::NonFiniteGeometry);
    }

    let offset = locate_in_line_band(text, len, wrap_width, measure, click)?;
    trace!(offset, len, ?click, "caret located");
    Ok(offset.min(len))
}

fn measure_checked(
    measure: &dyn TextMeasure,
    text: &str,
    end: usize,
    wrap_width: f32,
) -> EngineResult<Size> {
    let size = measure.measure_substring(text, end, wrap_width);
    if size.is_finite() {
        Ok(size)
    } else {
        warn!(end, width = size.width, height = size.height, "degenerate text measurement");
        Err(EngineError::DegenerateMeasurement {
            end,
            width: size.width,
            height: size.height,
        })
    }
}

/// Smallest `end` in `[lo, hi]` for which `pred` holds, or `hi + 1` if none.
/// `pred` must be monotonic (false...false true...true).
fn first_true<F>(lo: usize, hi: usize, mut pred: F) -> EngineResult<usize>
where
    F: FnMut(usize) -> EngineResult<bool>,
{
    let (mut lo, mut hi) = (lo, hi + 1);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if pred(mid)? {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    Ok(lo)
}

fn locate_in_line_band(
    text: &str,
    len: usize,
    wrap_width: f32,
    measure: &dyn TextMeasure,
    click: Point,
) -> EngineResult<usize> {
    let height_at = |end: usize| -> EngineResult<f32> {
        Ok(measure_checked(measure, text, end, wrap_width)?.height)
    };

    // First prefix whose box reaches down to the click: the clicked line.
    let line_start = first_true(0, len, |end| Ok(height_at(end)? >= click.y))?;
    if line_start > len {
        return Ok(len);
    }

    let band = height_at(line_start)?;
    let next_line = first_true(line_start, len, |end| Ok(height_at(end)? > band))?;
    let line_end = next_line - 1;

    // A soft-wrapped line's first prefix already holds one of its characters.
    let line_begin = match line_start.checked_sub(1).and_then(|i| text.chars().nth(i)) {
        Some(ch) if ch != '\n' => line_start - 1,
        _ => line_start,
    };

    // Measure the line on its own so earlier lines do not widen it.
    let line_text = &text[byte_offset(text, line_begin)..];
    let width_at = |end: usize| -> EngineResult<f32> {
        Ok(measure_checked(measure, line_text, end - line_begin, wrap_width)?.width)
    };

    let column = first_true(line_begin, line_end, |end| Ok(width_at(end)? >= click.x))?;
    if column > line_end {
        return Ok(line_end);
    }
    if column == line_begin {
        return Ok(line_begin);
    }

    // Both candidate end corners sit on the band's bottom edge.
    let corner = |end: usize| -> EngineResult<Point> { Ok(Point::new(width_at(end)?, band)) };
    let d_before = corner(column - 1)?.distance(click);
    let d_at = corner(column)?.distance(click);
    Ok(if d_before <= d_at { column - 1 } else { column })
}

/// Byte index of the `chars`-th character, or the string length past the end.
pub(crate) fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}
