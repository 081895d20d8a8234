//! framelines renders transparent composition-guide overlays.
//!
//! An overlay is a set of line strokes (a rule-of-thirds grid and a couple of compositional
//! guides by default, or whatever the caller sends) rasterized onto a fully transparent RGBA8
//! canvas and encoded as PNG.
//!
//! # Pipeline overview
//!
//! 1. **Size**: clamp the requested width/height ([`OverlayConfig::resolve_size`])
//! 2. **Strokes**: caller strokes, or the default set ([`build_strokes`])
//! 3. **Resolve**: dual-mode coordinates to pixels ([`resolve`], [`resolve_line`])
//! 4. **Rasterize**: square-brush Bresenham lines into a [`CanvasBuffer`] ([`draw_line`])
//! 5. **Encode**: PNG bytes, optionally base64 ([`encode_png`], [`encode_png_base64`])
//!
//! [`render`] runs steps 1-4, [`render_png`] adds step 5, and [`handle`] wraps everything in
//! the JSON request/response contract used by the HTTP endpoint.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure renders**: a render depends only on its request and config; no global state.
//! - **Clip, don't fail**: out-of-canvas pixels are dropped silently, unknown stroke kinds are
//!   skipped. Only unusable dimensions or config abort a render, and they do so before
//!   allocation.
//!
//! ```rust,no_run
//! use framelines::{OverlayConfig, RenderRequest, render_png};
//!
//! # fn main() -> framelines::OverlayResult<()> {
//! let out = render_png(&RenderRequest::sized(1920, 1080), &OverlayConfig::default())?;
//! std::fs::write("overlay.png", &out.png).map_err(anyhow::Error::from)?;
//! # Ok(())
//! # }
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod api;
mod assets;
mod canvas;
mod encode;
mod foundation;
mod raster;
mod render;
mod strokes;

pub use api::handler::{ApiBody, ApiResponse, handle, parse_body};
pub use assets::probe::{probe_dimensions, probe_dimensions_path};
pub use canvas::buffer::CanvasBuffer;
pub use encode::png::{encode_png, encode_png_base64, png_to_base64, write_png};
pub use foundation::core::{CanvasSize, Point, Rgba8};
pub use foundation::error::{OverlayError, OverlayResult};
pub use raster::coords::{COORD_LIMIT, PixelLine, PixelPoint, resolve, resolve_line};
pub use raster::line::{LineSteps, draw_line, half_thickness, line_thickness};
pub use render::config::OverlayConfig;
pub use render::pipeline::{
    EncodedOverlay, RenderOutput, RenderStats, RenderThreading, render, render_batch, render_png,
};
pub use render::request::{OverlayDescriptor, RenderRequest};
pub use strokes::builder::{build_strokes, default_guides, thirds_grid};
pub use strokes::model::{LINE_KIND, Stroke};
