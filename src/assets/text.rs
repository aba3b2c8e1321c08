use std::sync::Arc;

use crate::{
    assets::font::ResolvedFont,
    foundation::core::Rect,
    foundation::error::{TextGifError, TextGifResult},
};

/// Shaped single-line text plus the font that outlines its glyphs.
///
/// `bounds` is the union of the glyph outline boxes in layout coordinates
/// (y down, glyph origins on the baseline). Blank glyphs contribute nothing, so
/// text without any ink measures as [`Rect::ZERO`].
#[derive(Clone)]
pub struct PreparedText {
    pub layout: Arc<parley::Layout<()>>,
    pub font: vello_cpu::peniko::FontData,
    pub family: String,
    pub bounds: Rect,
}

impl std::fmt::Debug for PreparedText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreparedText")
            .field("layout_ptr", &Arc::as_ptr(&self.layout))
            .field("family", &self.family)
            .field("bounds", &self.bounds)
            .finish()
    }
}

impl PreparedText {
    /// Offset that moves the center of the inked area onto the origin.
    pub fn centering_offset(&self) -> kurbo::Vec2 {
        -self.bounds.center().to_vec2()
    }

    pub fn glyph_count(&self) -> usize {
        self.layout
            .lines()
            .flat_map(|line| line.items())
            .map(|item| match item {
                parley::layout::PositionedLayoutItem::GlyphRun(run) => run.glyphs().count(),
                parley::layout::PositionedLayoutItem::InlineBox(_) => 0,
            })
            .sum()
    }
}

/// Stateful helper for building Parley text layouts from raw font bytes.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Shape `text` as one unwrapped line in `font` at `size_px`, and measure it.
    pub fn prepare(
        &mut self,
        text: &str,
        font: &ResolvedFont,
        size_px: f32,
    ) -> TextGifResult<PreparedText> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(TextGifError::validation(
                "text size_px must be finite and > 0",
            ));
        }

        let families = self.font_ctx.collection.register_fonts(
            parley::fontique::Blob::from(font.bytes.as_ref().clone()),
            None,
        );
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            TextGifError::font_resolution(format!(
                "no font families registered from '{}'",
                font.family
            ))
        })?;
        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| TextGifError::font_resolution("registered font family has no name"))?
            .to_string();

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));

        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(None);

        let bounds = ink_bounds(&layout, font)?;
        if !bounds.width().is_finite() || !bounds.height().is_finite() {
            return Err(TextGifError::render("text layout produced non-finite bounds"));
        }

        let font_data = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(font.bytes.as_ref().clone()),
            font.index,
        );

        tracing::debug!(
            family = %family_name,
            width = bounds.width(),
            height = bounds.height(),
            "measured text"
        );

        Ok(PreparedText {
            layout: Arc::new(layout),
            font: font_data,
            family: family_name,
            bounds,
        })
    }
}

fn ink_bounds(layout: &parley::Layout<()>, font: &ResolvedFont) -> TextGifResult<Rect> {
    use skrifa::MetadataProvider as _;

    let face = skrifa::FontRef::from_index(font.bytes.as_slice(), font.index).map_err(|e| {
        TextGifError::font_resolution(format!("failed to parse font '{}': {e}", font.family))
    })?;

    let mut ink: Option<Rect> = None;
    for line in layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };
            let metrics = face.glyph_metrics(
                skrifa::instance::Size::new(run.run().font_size()),
                skrifa::instance::LocationRef::default(),
            );
            for glyph in run.positioned_glyphs() {
                let Some(b) = metrics.bounds(skrifa::GlyphId::new(glyph.id)) else {
                    continue;
                };
                if b.x_max <= b.x_min || b.y_max <= b.y_min {
                    continue;
                }
                // Font boxes are y-up around the glyph origin.
                let rect = Rect::new(
                    f64::from(glyph.x + b.x_min),
                    f64::from(glyph.y - b.y_max),
                    f64::from(glyph.x + b.x_max),
                    f64::from(glyph.y - b.y_min),
                );
                ink = Some(ink.map_or(rect, |acc| acc.union(rect)));
            }
        }
    }
    Ok(ink.unwrap_or(Rect::ZERO))
}
