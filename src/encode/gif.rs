use image::codecs::gif::{GifEncoder, Repeat};

use crate::{
    foundation::{
        core::CanvasSize,
        error::{TextGifError, TextGifResult},
    },
    render::RasterFrame,
    style,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GifOptions {
    /// Display time of every frame, in hundredths of a second.
    pub frame_delay_cs: u16,
    /// Palette quantizer speed, 1 (best) to 30 (fastest).
    pub speed: i32,
}

impl Default for GifOptions {
    fn default() -> Self {
        Self {
            frame_delay_cs: style::FRAME_DELAY_CS,
            speed: 10,
        }
    }
}

impl GifOptions {
    pub fn validate(&self) -> TextGifResult<()> {
        if self.frame_delay_cs == 0 {
            return Err(TextGifError::validation("gif frame delay must be non-zero"));
        }
        if !(1..=30).contains(&self.speed) {
            return Err(TextGifError::validation(format!(
                "gif quantizer speed must be in 1..=30 (got {})",
                self.speed
            )));
        }
        Ok(())
    }

    fn delay(&self) -> image::Delay {
        image::Delay::from_numer_denom_ms(u32::from(self.frame_delay_cs) * 10, 1)
    }
}

/// Append-only, order-preserving frame accumulator that encodes to an
/// infinitely looping GIF.
#[derive(Debug)]
pub struct GifAssembler {
    canvas: CanvasSize,
    options: GifOptions,
    frames: Vec<image::RgbaImage>,
}

impl GifAssembler {
    pub fn new(canvas: CanvasSize, options: GifOptions) -> TextGifResult<Self> {
        options.validate()?;
        Ok(Self {
            canvas,
            options,
            frames: Vec::new(),
        })
    }

    pub fn with_capacity(
        canvas: CanvasSize,
        options: GifOptions,
        frames: usize,
    ) -> TextGifResult<Self> {
        let mut out = Self::new(canvas, options)?;
        out.frames.reserve_exact(frames);
        Ok(out)
    }

    pub fn push(&mut self, frame: RasterFrame) -> TextGifResult<()> {
        if frame.width != self.canvas.width || frame.height != self.canvas.height {
            return Err(TextGifError::encoding(format!(
                "frame {} is {}x{}, expected {}x{}",
                self.frames.len(),
                frame.width,
                frame.height,
                self.canvas.width,
                self.canvas.height
            )));
        }
        self.frames.push(frame.into_rgba_image()?);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Encode every accumulated frame, in order, into GIF bytes.
    pub fn encode(self) -> TextGifResult<Vec<u8>> {
        if self.frames.is_empty() {
            return Err(TextGifError::encoding("cannot encode a GIF with no frames"));
        }

        let delay = self.options.delay();
        let frame_count = self.frames.len();
        let frames = self
            .frames
            .into_iter()
            .map(|buf| image::Frame::from_parts(buf, 0, 0, delay));

        let mut out = Vec::new();
        {
            let mut encoder = GifEncoder::new_with_speed(&mut out, self.options.speed);
            encoder
                .set_repeat(Repeat::Infinite)
                .map_err(|e| TextGifError::encoding(format!("set loop count: {e}")))?;
            encoder
                .encode_frames(frames)
                .map_err(|e| TextGifError::encoding(format!("encode frames: {e}")))?;
            // The trailer is written when the encoder is dropped.
        }

        tracing::debug!(frames = frame_count, bytes = out.len(), "encoded gif");
        Ok(out)
    }
}
