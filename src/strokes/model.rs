use serde_json::Value;

use crate::foundation::{core::Point, json};

/// The only stroke kind the rasterizer draws.
pub const LINE_KIND: &str = "line";

/// One annotation element as sent by the caller (or produced by the default builder).
///
/// A stroke is the caller's JSON value, kept as it arrived so the descriptor can echo it back
/// unchanged. Any JSON value is accepted; the drawable reading is derived on demand: `type` must
/// be the string `"line"` and `x1`, `y1`, `x2`, `y2` must read as numbers (numeric strings
/// included). Anything else is carried along and skipped when drawing.
///
/// Coordinates are dual-mode per field: a value `<= 1` is a fraction of the canvas extent on
/// that axis, anything larger is an absolute pixel coordinate. See [`crate::resolve`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Stroke(Value);

impl Stroke {
    /// A line stroke between two points.
    pub fn line(x1: f64, y1: f64, x2: f64, y2: f64, label: impl Into<String>) -> Self {
        let label: String = label.into();
        Self(serde_json::json!({
            "type": LINE_KIND,
            "x1": x1,
            "y1": y1,
            "x2": x2,
            "y2": y2,
            "label": label,
        }))
    }

    /// Wrap a caller value.
    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    /// The stroke exactly as received.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Unwrap into the raw value.
    pub fn into_value(self) -> Value {
        self.0
    }

    /// The `type` field, when it is a string.
    pub fn kind(&self) -> Option<&str> {
        self.0.get("type")?.as_str()
    }

    /// Whether the rasterizer should draw this stroke.
    pub fn is_line(&self) -> bool {
        self.kind() == Some(LINE_KIND)
    }

    /// A coordinate field read as a number, if present and numeric.
    pub fn coord(&self, field: &str) -> Option<f64> {
        json::number(self.0.get(field)?)
    }

    /// Start point in stroke units, if both coordinates are present.
    pub fn start(&self) -> Option<Point> {
        Some(Point::new(self.coord("x1")?, self.coord("y1")?))
    }

    /// End point in stroke units, if both coordinates are present.
    pub fn end(&self) -> Option<Point> {
        Some(Point::new(self.coord("x2")?, self.coord("y2")?))
    }

    /// Free-form label. Metadata only, never rendered.
    pub fn label(&self) -> Option<&str> {
        self.0.get("label")?.as_str()
    }
}

impl From<Value> for Stroke {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/strokes/model.rs"]
mod tests;
