use std::{io::Cursor, path::Path};

use anyhow::Context as _;
use base64::Engine as _;

use crate::{
    canvas::buffer::CanvasBuffer,
    foundation::error::{OverlayError, OverlayResult},
};

/// Encode a canvas as an RGBA8 PNG.
pub fn encode_png(canvas: &CanvasBuffer) -> OverlayResult<Vec<u8>> {
    let img = canvas.to_image()?;
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| OverlayError::encode(format!("png: {e}")))?;
    Ok(buf)
}

/// Encode a canvas as PNG, then base64 (standard alphabet, padded).
pub fn encode_png_base64(canvas: &CanvasBuffer) -> OverlayResult<String> {
    encode_png(canvas).map(|png| png_to_base64(&png))
}

/// Base64 for already-encoded PNG bytes.
pub fn png_to_base64(png: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(png)
}

/// Write a canvas to `path` as PNG, creating parent directories.
pub fn write_png(canvas: &CanvasBuffer, path: &Path) -> OverlayResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        path,
        canvas.data(),
        canvas.width(),
        canvas.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| OverlayError::encode(format!("write png '{}': {e}", path.display())))
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
