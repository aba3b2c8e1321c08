use crate::foundation::error::{TextGifError, TextGifResult};

pub use kurbo::{Affine, Rect, Vec2};

/// Output canvas dimensions in pixels, shared read-only by every frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    /// Largest edge the CPU rasterizer can allocate a surface for.
    pub const MAX_EDGE: u32 = u16::MAX as u32;

    pub fn new(width: u32, height: u32) -> TextGifResult<Self> {
        if width == 0 || height == 0 {
            return Err(TextGifError::validation(
                "canvas width/height must be non-zero",
            ));
        }
        if width > Self::MAX_EDGE || height > Self::MAX_EDGE {
            return Err(TextGifError::validation(format!(
                "canvas {width}x{height} exceeds the {max}px surface limit",
                max = Self::MAX_EDGE
            )));
        }
        Ok(Self { width, height })
    }

    pub fn pixel_count(self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    pub fn center(self) -> Vec2 {
        Vec2::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    pub(crate) fn as_u16(self) -> (u16, u16) {
        // `new` guarantees both edges fit.
        (self.width as u16, self.height as u16)
    }
}
