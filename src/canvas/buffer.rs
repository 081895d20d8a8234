use crate::foundation::{
    core::{CanvasSize, Rgba8},
    error::{OverlayError, OverlayResult},
};

/// A width×height RGBA8 pixel buffer, row-major, origin top-left, straight alpha.
///
/// Buffers start fully transparent. Writes outside the canvas are clipped silently so the
/// rasterizer can stamp brushes without pre-clipping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanvasBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl CanvasBuffer {
    /// Allocate a zeroed buffer.
    ///
    /// Fails with [`OverlayError::InvalidDimension`] when either side is zero or larger than
    /// `max_dimension`; nothing is allocated in that case.
    pub fn new(width: u32, height: u32, max_dimension: u32) -> OverlayResult<Self> {
        if width == 0 || height == 0 || width > max_dimension || height > max_dimension {
            return Err(OverlayError::invalid_dimension(width, height));
        }
        let size = CanvasSize { width, height };
        Ok(Self {
            width,
            height,
            data: vec![0u8; size.byte_len()],
        })
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Canvas dimensions.
    pub fn size(&self) -> CanvasSize {
        CanvasSize {
            width: self.width,
            height: self.height,
        }
    }

    /// Raw RGBA8 bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the canvas, returning its raw RGBA8 bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    fn offset(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        Some(((y as usize) * (self.width as usize) + (x as usize)) * 4)
    }

    /// Overwrite one pixel. Out-of-bounds coordinates are a no-op.
    pub fn set_pixel(&mut self, x: i64, y: i64, color: Rgba8) {
        if let Some(i) = self.offset(x, y) {
            self.data[i..i + 4].copy_from_slice(&color.to_array());
        }
    }

    /// Read one pixel, `None` outside the canvas.
    pub fn pixel(&self, x: i64, y: i64) -> Option<Rgba8> {
        let i = self.offset(x, y)?;
        Some(Rgba8::from_array([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]))
    }

    /// True while every byte is still zero.
    pub fn is_transparent(&self) -> bool {
        self.data.iter().all(|&b| b == 0)
    }

    /// Count of pixels with any non-zero channel.
    pub fn painted_pixels(&self) -> usize {
        self.data
            .chunks_exact(4)
            .filter(|px| px.iter().any(|&c| c != 0))
            .count()
    }

    /// Copy into an [`image::RgbaImage`] for encoding.
    pub fn to_image(&self) -> OverlayResult<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.data.clone())
            .ok_or_else(|| OverlayError::encode("canvas buffer length does not match its size"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/canvas/buffer.rs"]
mod tests;
