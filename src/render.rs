pub(crate) mod cpu;
pub(crate) mod sizer;

use crate::foundation::{
    color::Rgba8,
    core::CanvasSize,
    error::{TextGifError, TextGifResult},
};

/// One rendered, fully opaque RGBA8 frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterFrame {
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA8. Every pixel is opaque, so premultiplied and straight alpha coincide.
    pub data: Vec<u8>,
}

impl RasterFrame {
    pub fn new(size: CanvasSize, data: Vec<u8>) -> TextGifResult<Self> {
        if data.len() != size.pixel_count() * 4 {
            return Err(TextGifError::render(format!(
                "frame buffer holds {} bytes, expected {} for {}x{}",
                data.len(),
                size.pixel_count() * 4,
                size.width,
                size.height
            )));
        }
        Ok(Self {
            width: size.width,
            height: size.height,
            data,
        })
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some(Rgba8 {
            r: px[0],
            g: px[1],
            b: px[2],
            a: px[3],
        })
    }

    pub fn pixels(&self) -> impl Iterator<Item = Rgba8> + '_ {
        self.data.chunks_exact(4).map(|px| Rgba8 {
            r: px[0],
            g: px[1],
            b: px[2],
            a: px[3],
        })
    }

    pub fn into_rgba_image(self) -> TextGifResult<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.data)
            .ok_or_else(|| TextGifError::encoding("frame buffer does not match its dimensions"))
    }
}
