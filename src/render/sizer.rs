use crate::{
    foundation::core::{CanvasSize, Rect},
    foundation::error::TextGifResult,
    style,
};

/// Padding added around the measured text, in whole pixels.
pub fn padding_for_depth(depth: u32) -> (u32, u32) {
    let depth = depth as f32;
    let x = style::FONT_SIZE_PX * style::PAD_X_PER_FONT_PX + depth * style::PAD_X_PER_DEPTH_PX;
    let y = style::FONT_SIZE_PX * style::PAD_Y_PER_FONT_PX + depth * style::PAD_Y_PER_DEPTH_PX;
    (x as u32, y as u32)
}

/// Canvas large enough for the text under the full extrusion offset and the
/// scale/rotation swing.
pub fn canvas_size(text_bounds: Rect, depth: u32) -> TextGifResult<CanvasSize> {
    let (pad_x, pad_y) = padding_for_depth(depth);
    let text_w = text_bounds.width().max(0.0).ceil() as u32;
    let text_h = text_bounds.height().max(0.0).ceil() as u32;
    CanvasSize::new(
        text_w.saturating_add(pad_x),
        text_h.saturating_add(pad_y),
    )
}
