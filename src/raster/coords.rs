use crate::{foundation::core::CanvasSize, strokes::model::Stroke};

/// Largest absolute pixel coordinate a stroke may resolve to.
///
/// Past `2^53` an `f64` no longer tells neighbouring pixels apart. Lines below the limit are
/// drawn however far they reach off-canvas; [`crate::LineSteps::within`] keeps the walk short.
pub const COORD_LIMIT: i64 = 1 << 53;

/// An integer pixel point. May lie outside the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PixelPoint {
    /// Column.
    pub x: i64,
    /// Row.
    pub y: i64,
}

impl PixelPoint {
    /// Construct a point.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// A segment with both endpoints resolved to pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PixelLine {
    /// First endpoint.
    pub from: PixelPoint,
    /// Last endpoint (inclusive).
    pub to: PixelPoint,
}

impl PixelLine {
    /// Construct a segment from raw coordinates.
    pub const fn new(x1: i64, y1: i64, x2: i64, y2: i64) -> Self {
        Self {
            from: PixelPoint::new(x1, y1),
            to: PixelPoint::new(x2, y2),
        }
    }
}

/// Map one dual-mode coordinate onto an axis of `extent` pixels.
///
/// `value <= 1` is a fraction of the extent (so `1` is the far edge, never pixel 1);
/// anything larger is already in pixels. The result is not clamped.
pub fn resolve(value: f64, extent: u32) -> i64 {
    if value <= 1.0 {
        (value * f64::from(extent)).round() as i64
    } else {
        value.round() as i64
    }
}

/// Resolve the four coordinates of a stroke against a canvas.
///
/// x-fields resolve against the width, y-fields against the height, each one independently.
/// Returns `None` when a coordinate is missing, not finite, or resolves beyond
/// [`COORD_LIMIT`].
pub fn resolve_line(stroke: &Stroke, size: CanvasSize) -> Option<PixelLine> {
    let start = stroke.start()?;
    let end = stroke.end()?;
    if ![start.x, start.y, end.x, end.y]
        .iter()
        .all(|v| v.is_finite())
    {
        return None;
    }
    let line = PixelLine::new(
        resolve(start.x, size.width),
        resolve(start.y, size.height),
        resolve(end.x, size.width),
        resolve(end.y, size.height),
    );
    [line.from.x, line.from.y, line.to.x, line.to.y]
        .iter()
        .all(|v| v.unsigned_abs() <= COORD_LIMIT as u64)
        .then_some(line)
}

#[cfg(test)]
#[path = "../../tests/unit/raster/coords.rs"]
mod tests;
