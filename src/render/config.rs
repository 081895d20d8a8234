use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;

use crate::{
    foundation::core::{CanvasSize, Rgba8},
    foundation::error::{OverlayError, OverlayResult},
    raster::line::{half_thickness, line_thickness},
    render::request::RenderRequest,
};

/// Rendering parameters that are constant across requests.
///
/// Every field has a default, so `{}` is a valid config file. Unknown keys are rejected.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OverlayConfig {
    /// Ink used for every stroke.
    pub color: Rgba8,
    /// Lower bound on stroke thickness in pixels.
    pub min_thickness: u32,
    /// Stroke thickness as a fraction of canvas width.
    pub thickness_ratio: f64,
    /// Smallest canvas side after clamping.
    pub min_dimension: u32,
    /// Largest canvas side after clamping; also the allocation limit.
    pub max_dimension: u32,
    /// Width used when the request omits one.
    pub default_width: u32,
    /// Height used when the request omits one.
    pub default_height: u32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            color: Rgba8::GUIDE_INK,
            min_thickness: 3,
            thickness_ratio: 0.003,
            min_dimension: 16,
            max_dimension: 8192,
            default_width: 1920,
            default_height: 1080,
        }
    }
}

impl OverlayConfig {
    /// Load and validate a JSON config file.
    pub fn from_json_file(path: &Path) -> OverlayResult<Self> {
        let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f))
            .with_context(|| format!("parse config '{}'", path.display()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check that the clamp range and thickness formula are usable.
    pub fn validate(&self) -> OverlayResult<()> {
        if self.min_dimension == 0 {
            return Err(OverlayError::config("min_dimension must be >= 1"));
        }
        if self.min_dimension > self.max_dimension {
            return Err(OverlayError::config(format!(
                "min_dimension ({}) must be <= max_dimension ({})",
                self.min_dimension, self.max_dimension
            )));
        }
        if !self.thickness_ratio.is_finite() || !(0.0..=1.0).contains(&self.thickness_ratio) {
            return Err(OverlayError::config(
                "thickness_ratio must be a finite value in [0, 1]",
            ));
        }
        if self.min_thickness > self.max_dimension {
            return Err(OverlayError::config(
                "min_thickness must not exceed max_dimension",
            ));
        }
        Ok(())
    }

    /// Floor and clamp one requested side into `[min_dimension, max_dimension]`.
    ///
    /// Non-finite input cannot be clamped meaningfully and is rejected.
    pub fn clamp_dimension(&self, value: f64) -> Option<u32> {
        if !value.is_finite() {
            return None;
        }
        let lo = f64::from(self.min_dimension);
        let hi = f64::from(self.max_dimension);
        Some(value.floor().clamp(lo, hi) as u32)
    }

    /// Canvas size for a request: defaults for missing sides, then [`Self::clamp_dimension`].
    pub fn resolve_size(&self, request: &RenderRequest) -> OverlayResult<CanvasSize> {
        let w = request.width.unwrap_or(f64::from(self.default_width));
        let h = request.height.unwrap_or(f64::from(self.default_height));
        match (self.clamp_dimension(w), self.clamp_dimension(h)) {
            (Some(width), Some(height)) => Ok(CanvasSize { width, height }),
            _ => Err(OverlayError::invalid_dimension(w, h)),
        }
    }

    /// Full stroke thickness for a canvas width.
    pub fn thickness_for(&self, width: u32) -> u32 {
        line_thickness(width, self.min_thickness, self.thickness_ratio)
    }

    /// Brush radius for a canvas width.
    pub fn half_thickness_for(&self, width: u32) -> u32 {
        half_thickness(self.thickness_for(width))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/config.rs"]
mod tests;
