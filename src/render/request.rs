use serde::Deserialize as _;
use serde_json::Value;

use crate::{foundation::json, strokes::model::Stroke};

/// One overlay render as described by the caller.
///
/// Missing or `null` fields fall back to defaults: width/height come from
/// [`crate::OverlayConfig`], `show_thirds` is `true`, `strokes` is empty. Unknown top-level
/// fields (for example a reference image URL) are ignored.
///
/// Scalars are read loosely: `"800"` is a width of 800 and `"show_thirds": 0` turns the grid
/// off. A width or height that cannot be read as a number is kept as `NaN` and rejected when
/// the size is resolved.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RenderRequest {
    /// Requested width, floored and clamped before use.
    #[serde(
        default,
        deserialize_with = "loose_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub width: Option<f64>,
    /// Requested height, floored and clamped before use.
    #[serde(
        default,
        deserialize_with = "loose_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub height: Option<f64>,
    /// Add the rule-of-thirds grid when no strokes are supplied. `None` means `true`.
    #[serde(
        default,
        deserialize_with = "loose_flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub show_thirds: Option<bool>,
    /// Caller strokes. A non-empty list replaces the default stroke set entirely.
    #[serde(default, deserialize_with = "strokes_or_empty")]
    pub strokes: Vec<Stroke>,
}

fn loose_number<'de, D>(de: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match Value::deserialize(de)? {
        Value::Null => None,
        v => Some(json::number(&v).unwrap_or(f64::NAN)),
    })
}

fn loose_flag<'de, D>(de: D) -> Result<Option<bool>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match Value::deserialize(de)? {
        Value::Null => None,
        v => Some(json::truthy(&v)),
    })
}

// Anything other than an array (null, a string, ...) is treated as "no strokes". Array
// elements are kept whatever their shape.
fn strokes_or_empty<'de, D>(de: D) -> Result<Vec<Stroke>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Value::deserialize(de)? {
        Value::Array(items) => Ok(items.into_iter().map(Stroke::from).collect()),
        _ => Ok(Vec::new()),
    }
}

impl RenderRequest {
    /// Request for a `width`×`height` overlay with default strokes.
    pub fn sized(width: u32, height: u32) -> Self {
        Self {
            width: Some(f64::from(width)),
            height: Some(f64::from(height)),
            ..Self::default()
        }
    }

    /// Whether the thirds grid is requested (defaults to `true`).
    pub fn show_thirds(&self) -> bool {
        self.show_thirds.unwrap_or(true)
    }

    /// Builder-style setter for [`Self::show_thirds`].
    pub fn with_thirds(mut self, show: bool) -> Self {
        self.show_thirds = Some(show);
        self
    }

    /// Builder-style setter for caller strokes.
    pub fn with_strokes(mut self, strokes: Vec<Stroke>) -> Self {
        self.strokes = strokes;
        self
    }

    /// Take width/height from a reference image, e.g. from [`crate::probe_dimensions`].
    pub fn with_reference_size(mut self, (width, height): (u32, u32)) -> Self {
        self.width = Some(f64::from(width));
        self.height = Some(f64::from(height));
        self
    }
}

/// What was drawn: the size actually used and the stroke list that was resolved.
///
/// `normalized` is always `true`; it tells the caller the echoed strokes are in the same units
/// it sent, not that any conversion took place.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OverlayDescriptor {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Always `true`.
    pub normalized: bool,
    /// Caller strokes exactly as received, or the default set.
    pub strokes: Vec<Stroke>,
}

#[cfg(test)]
#[path = "../../tests/unit/render/request.rs"]
mod tests;
