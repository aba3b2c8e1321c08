use crate::{
    animation::ease::Ease,
    foundation::color::Rgba8,
    foundation::error::{TextGifError, TextGifResult},
    style,
};

/// Everything that varies between frames, derived from the frame index alone.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FrameParams {
    pub index: u32,
    /// Linear normalized time in `[0, 1]`; first frame 0, last frame 1.
    pub t: f64,
    /// Ping-pong phase 0 -> 1 -> 0 over the loop.
    pub cycle: f64,
    pub scale: f64,
    pub rotation_deg: f64,
    /// Linear sweep over `[0, 360)`; it does not wrap back to 0 on the last frame.
    pub hue_deg: f32,
    pub face_color: Rgba8,
    pub side_color: Rgba8,
}

impl FrameParams {
    pub fn at(index: u32, frame_count: u32) -> TextGifResult<Self> {
        if frame_count < 2 {
            return Err(TextGifError::validation(format!(
                "frame count must be >= 2 (got {frame_count})"
            )));
        }
        if index >= frame_count {
            return Err(TextGifError::validation(format!(
                "frame index {index} out of range for {frame_count} frames"
            )));
        }

        let t = f64::from(index) / f64::from(frame_count - 1);
        let cycle = 0.5 * (1.0 - (std::f64::consts::TAU * t).cos());

        let zoom = Ease::InOutSine.apply(cycle);
        let rotate = Ease::InOutQuad.apply(cycle);

        let hue_deg = (index as f32 / frame_count as f32) * 360.0;

        Ok(Self {
            index,
            t,
            cycle,
            scale: style::SCALE_MIN + style::SCALE_SPAN * zoom,
            rotation_deg: style::ROTATION_MIN_DEG + style::ROTATION_SPAN_DEG * rotate,
            hue_deg,
            face_color: Rgba8::from_hsv(hue_deg, 1.0, 1.0),
            side_color: Rgba8::from_hsv(
                (hue_deg + style::SIDE_HUE_OFFSET_DEG) % 360.0,
                1.0,
                style::SIDE_VALUE,
            ),
        })
    }

    /// Color of extrusion layer `layer` (1 = nearest the face) out of `depth`.
    pub fn extrusion_color(&self, layer: u32, depth: u32) -> Rgba8 {
        if depth == 0 {
            return self.side_color;
        }
        let tt = layer as f32 / depth as f32;
        self.side_color.lerp(Rgba8::BLACK, style::EXTRUSION_DARKEN * tt)
    }
}

/// Parameters for every frame of a `frame_count`-long loop, in order.
pub fn frame_schedule(frame_count: u32) -> TextGifResult<Vec<FrameParams>> {
    (0..frame_count)
        .map(|i| FrameParams::at(i, frame_count))
        .collect()
}
