use std::{io::Cursor, path::Path};

use anyhow::Context as _;

use crate::foundation::error::{OverlayError, OverlayResult};

/// Read `(width, height)` from encoded image bytes without decoding pixels.
pub fn probe_dimensions(bytes: &[u8]) -> OverlayResult<(u32, u32)> {
    let reader = image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .context("guess reference image format")?;
    if reader.format().is_none() {
        return Err(OverlayError::probe("unrecognized image format"));
    }
    reader
        .into_dimensions()
        .map_err(|e| OverlayError::probe(format!("read image header: {e}")))
}

/// [`probe_dimensions`] for a file on disk.
pub fn probe_dimensions_path(path: &Path) -> OverlayResult<(u32, u32)> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read reference '{}'", path.display()))?;
    probe_dimensions(&bytes)
        .map_err(|e| OverlayError::probe(format!("'{}': {e}", path.display())))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/probe.rs"]
mod tests;
