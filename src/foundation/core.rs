pub use kurbo::Point;

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 = opaque).
    pub a: u8,
}

impl Rgba8 {
    /// Fully transparent black, the initial state of every canvas pixel.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Near-opaque black used for guide strokes.
    pub const GUIDE_INK: Self = Self::new(0, 0, 0, 230);

    /// Construct a color from its four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Channels in buffer order.
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Inverse of [`Rgba8::to_array`].
    pub const fn from_array(px: [u8; 4]) -> Self {
        Self::new(px[0], px[1], px[2], px[3])
    }
}

impl Default for Rgba8 {
    fn default() -> Self {
        Self::GUIDE_INK
    }
}

/// Integer canvas dimensions after clamping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CanvasSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl CanvasSize {
    /// Number of bytes an RGBA8 buffer of this size occupies.
    pub fn byte_len(self) -> usize {
        (self.width as usize) * (self.height as usize) * 4
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
