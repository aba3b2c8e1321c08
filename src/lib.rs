//! textgif renders a single line of text as a looping, pseudo-3D extruded GIF.
//!
//! Every frame draws the text with a stack of offset, darkened copies behind a
//! hue-cycling face, while scale and rotation swing smoothly and return to their
//! starting values on the last frame.
//!
//! # Pipeline overview
//!
//! 1. **Resolve font**: find a bold sans-serif face ([`FontResolver`])
//! 2. **Size**: shape and measure the text once, derive the [`CanvasSize`] ([`prepare_renderer`])
//! 3. **Render**: for each frame index compute [`FrameParams`] and rasterize a [`RasterFrame`]
//!    on the CPU ([`ExtrudedTextRenderer`])
//! 4. **Encode**: accumulate frames in a [`GifAssembler`] and encode with a 60 ms delay and
//!    infinite looping
//! 5. **Write**: replace the output file atomically ([`write_atomic`])
//!
//! [`generate_gif`] runs all of the above for an [`AnimationConfig`].
#![forbid(unsafe_code)]

mod animation;
mod assets;
mod config;
mod encode;
mod foundation;
mod pipeline;
mod render;

pub mod style;

pub use animation::ease::Ease;
pub use animation::params::{FrameParams, frame_schedule};
pub use assets::font::{FONT_DIR_ENV, FontResolver, PREFERRED_FAMILIES, ResolvedFont};
pub use assets::text::{PreparedText, TextLayoutEngine};
pub use config::{AnimationConfig, DEFAULT_DEPTH, DEFAULT_FRAME_COUNT, DEFAULT_OUTPUT, DEFAULT_TEXT};
pub use encode::gif::{GifAssembler, GifOptions};
pub use encode::sink::{ensure_parent_dir, write_atomic};
pub use foundation::color::Rgba8;
pub use foundation::core::{Affine, CanvasSize, Rect, Vec2};
pub use foundation::error::{TextGifError, TextGifResult};
pub use pipeline::{
    GifSummary, encode_animation, generate_gif, generate_gif_with_font, prepare_renderer,
};
pub use render::RasterFrame;
pub use render::cpu::ExtrudedTextRenderer;
pub use render::sizer::{canvas_size, padding_for_depth};
