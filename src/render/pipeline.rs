use rayon::prelude::*;

use crate::{
    canvas::buffer::CanvasBuffer,
    encode::png::encode_png,
    foundation::error::{OverlayError, OverlayResult},
    raster::{coords::resolve_line, line::draw_line},
    render::{
        config::OverlayConfig,
        request::{OverlayDescriptor, RenderRequest},
    },
    strokes::builder::build_strokes,
};

/// Counters for one render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Line strokes rasterized.
    pub lines_drawn: usize,
    /// Strokes skipped: non-line kinds, or lines with missing/unusable coordinates.
    pub strokes_skipped: usize,
    /// Brush radius used for every line.
    pub half_thickness: u32,
}

/// A rendered, not yet encoded overlay.
#[derive(Clone, Debug)]
pub struct RenderOutput {
    /// Straight-alpha RGBA8 pixels.
    pub canvas: CanvasBuffer,
    /// What was drawn.
    pub descriptor: OverlayDescriptor,
    /// Per-render counters.
    pub stats: RenderStats,
}

/// A rendered overlay encoded as PNG.
#[derive(Clone, Debug)]
pub struct EncodedOverlay {
    /// PNG file bytes.
    pub png: Vec<u8>,
    /// What was drawn.
    pub descriptor: OverlayDescriptor,
}

/// Render one overlay.
///
/// Dimensions are resolved and clamped before anything is allocated; the only failure past that
/// point is an [`OverlayError::InvalidDimension`] from the canvas itself. Strokes whose kind is
/// not `"line"` are skipped. The descriptor carries the stroke list as resolved (caller's or
/// default), not pixel coordinates.
#[tracing::instrument(skip_all, fields(width = ?request.width, height = ?request.height))]
pub fn render(request: &RenderRequest, config: &OverlayConfig) -> OverlayResult<RenderOutput> {
    config.validate()?;
    let size = config.resolve_size(request)?;
    let mut canvas = CanvasBuffer::new(size.width, size.height, config.max_dimension)?;

    let strokes = build_strokes(request);
    let half = config.half_thickness_for(size.width);
    let mut stats = RenderStats {
        half_thickness: half,
        ..RenderStats::default()
    };

    for (idx, stroke) in strokes.iter().enumerate() {
        if !stroke.is_line() {
            stats.strokes_skipped += 1;
            continue;
        }
        let Some(line) = resolve_line(stroke, size) else {
            tracing::warn!(idx, "skipping line stroke with missing or unusable coordinates");
            stats.strokes_skipped += 1;
            continue;
        };
        draw_line(&mut canvas, line, half, config.color);
        stats.lines_drawn += 1;
    }

    tracing::debug!(
        width = size.width,
        height = size.height,
        half_thickness = half,
        drawn = stats.lines_drawn,
        skipped = stats.strokes_skipped,
        "overlay rendered"
    );

    Ok(RenderOutput {
        canvas,
        descriptor: OverlayDescriptor {
            width: size.width,
            height: size.height,
            normalized: true,
            strokes,
        },
        stats,
    })
}

/// [`render`] followed by PNG encoding.
pub fn render_png(request: &RenderRequest, config: &OverlayConfig) -> OverlayResult<EncodedOverlay> {
    let out = render(request, config)?;
    let png = encode_png(&out.canvas)?;
    Ok(EncodedOverlay {
        png,
        descriptor: out.descriptor,
    })
}

/// How [`render_batch`] schedules work.
#[derive(Clone, Debug, Default)]
pub struct RenderThreading {
    /// Render requests concurrently on a rayon pool.
    pub parallel: bool,
    /// Worker count; `None` lets rayon decide.
    pub threads: Option<usize>,
}

/// Render and encode independent requests.
///
/// Results are in input order and each one succeeds or fails on its own. Every job owns its
/// canvas, so parallel output is byte-identical to sequential output.
#[tracing::instrument(skip_all, fields(count = requests.len(), parallel = threading.parallel))]
pub fn render_batch(
    requests: &[RenderRequest],
    config: &OverlayConfig,
    threading: &RenderThreading,
) -> OverlayResult<Vec<OverlayResult<EncodedOverlay>>> {
    if !threading.parallel {
        return Ok(requests.iter().map(|r| render_png(r, config)).collect());
    }

    let pool = build_thread_pool(threading.threads)?;
    Ok(pool.install(|| {
        requests
            .par_iter()
            .map(|r| render_png(r, config))
            .collect::<Vec<_>>()
    }))
}

fn build_thread_pool(threads: Option<usize>) -> OverlayResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(OverlayError::config(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| OverlayError::config(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
