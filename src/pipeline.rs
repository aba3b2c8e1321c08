use std::path::PathBuf;

use crate::{
    animation::params::FrameParams,
    assets::{
        font::{FontResolver, ResolvedFont},
        text::TextLayoutEngine,
    },
    config::AnimationConfig,
    encode::{
        gif::{GifAssembler, GifOptions},
        sink::write_atomic,
    },
    foundation::{core::CanvasSize, error::TextGifResult},
    render::{cpu::ExtrudedTextRenderer, sizer::canvas_size},
    style,
};

/// What a finished generation produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GifSummary {
    pub output_path: PathBuf,
    pub canvas: CanvasSize,
    pub frames: u32,
    pub bytes: usize,
    pub font_family: String,
}

/// Shape the text once and size the canvas for it.
pub fn prepare_renderer(
    config: &AnimationConfig,
    font: &ResolvedFont,
) -> TextGifResult<ExtrudedTextRenderer> {
    config.validate()?;
    let text = TextLayoutEngine::new().prepare(&config.text, font, style::FONT_SIZE_PX)?;
    let canvas = canvas_size(text.bounds, config.depth)?;
    tracing::debug!(
        width = canvas.width,
        height = canvas.height,
        "sized canvas"
    );
    Ok(ExtrudedTextRenderer::new(text, canvas, config.depth))
}

/// Render `frame_count` frames in order and encode them as one looping GIF.
pub fn encode_animation(
    renderer: &ExtrudedTextRenderer,
    frame_count: u32,
    options: GifOptions,
) -> TextGifResult<Vec<u8>> {
    let mut gif = GifAssembler::with_capacity(renderer.canvas(), options, frame_count as usize)?;
    for index in 0..frame_count {
        let params = FrameParams::at(index, frame_count)?;
        tracing::debug!(
            frame = index,
            scale = params.scale,
            rotation_deg = params.rotation_deg,
            hue_deg = params.hue_deg,
            "render frame"
        );
        gif.push(renderer.render(&params)?)?;
    }
    gif.encode()
}

/// Generate the GIF described by `config` using the system bold sans-serif font.
pub fn generate_gif(config: &AnimationConfig) -> TextGifResult<GifSummary> {
    config.validate()?;
    let font = FontResolver::new().resolve()?;
    generate_gif_with_font(config, &font, GifOptions::default())
}

/// Generate with an already resolved font.
///
/// Either the complete GIF lands at `config.output_path` or nothing is written.
#[tracing::instrument(
    skip(config, font),
    fields(
        text = %config.text,
        frames = config.frame_count,
        depth = config.depth,
        out = %config.output_path.display()
    )
)]
pub fn generate_gif_with_font(
    config: &AnimationConfig,
    font: &ResolvedFont,
    options: GifOptions,
) -> TextGifResult<GifSummary> {
    let renderer = prepare_renderer(config, font)?;
    let bytes = encode_animation(&renderer, config.frame_count, options)?;
    write_atomic(&config.output_path, &bytes)?;

    let summary = GifSummary {
        output_path: config.output_path.clone(),
        canvas: renderer.canvas(),
        frames: config.frame_count,
        bytes: bytes.len(),
        font_family: font.family.clone(),
    };
    tracing::info!(
        width = summary.canvas.width,
        height = summary.canvas.height,
        frames = summary.frames,
        bytes = summary.bytes,
        "wrote gif"
    );
    Ok(summary)
}
