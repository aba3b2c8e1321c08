//! Fixed look-and-feel constants shared by the sizer, renderer and encoder.

use crate::foundation::color::Rgba8;

/// Text size in pixels.
pub const FONT_SIZE_PX: f32 = 72.0;

/// Canvas fill ("ghost white").
pub const BACKGROUND: Rgba8 = Rgba8::opaque(248, 248, 255);

/// Extra downward offset of the text anchor from the canvas center, in pixels.
pub const VERTICAL_NUDGE_PX: f64 = 10.0;

/// Horizontal padding: `FONT_SIZE_PX * PAD_X_PER_FONT_PX + depth * PAD_X_PER_DEPTH_PX`.
pub const PAD_X_PER_FONT_PX: f32 = 1.2;
pub const PAD_X_PER_DEPTH_PX: f32 = 2.0;

/// Vertical padding: `FONT_SIZE_PX * PAD_Y_PER_FONT_PX + depth * PAD_Y_PER_DEPTH_PX`.
pub const PAD_Y_PER_FONT_PX: f32 = 2.0;
pub const PAD_Y_PER_DEPTH_PX: f32 = 3.0;

/// How far the deepest extrusion layer is pulled toward black.
pub const EXTRUSION_DARKEN: f32 = 0.25;

/// Hue offset of the extrusion color relative to the face, in degrees.
pub const SIDE_HUE_OFFSET_DEG: f32 = 300.0;

/// Brightness (HSV value) of the extrusion color before darkening.
pub const SIDE_VALUE: f32 = 0.6;

/// Scale oscillates in `[SCALE_MIN, SCALE_MIN + SCALE_SPAN]`.
pub const SCALE_MIN: f64 = 0.9;
pub const SCALE_SPAN: f64 = 0.2;

/// Rotation oscillates in `[ROTATION_MIN_DEG, ROTATION_MIN_DEG + ROTATION_SPAN_DEG]`.
pub const ROTATION_MIN_DEG: f64 = -10.0;
pub const ROTATION_SPAN_DEG: f64 = 20.0;

/// Per-frame display time in GIF units (hundredths of a second).
pub const FRAME_DELAY_CS: u16 = 6;
