use crate::{
    animation::params::FrameParams,
    assets::text::PreparedText,
    foundation::{
        color::Rgba8,
        core::{Affine, CanvasSize, Vec2},
        error::TextGifResult,
    },
    render::RasterFrame,
    style,
};

/// Rasterizes extruded text frames on the CPU.
///
/// The text layout and font are shared by every frame; the render context and
/// pixmap live only for the duration of a single [`render`](Self::render) call.
pub struct ExtrudedTextRenderer {
    text: PreparedText,
    canvas: CanvasSize,
    depth: u32,
}

impl ExtrudedTextRenderer {
    pub fn new(text: PreparedText, canvas: CanvasSize, depth: u32) -> Self {
        Self {
            text,
            canvas,
            depth,
        }
    }

    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Canvas center (nudged down), then uniform scale, then rotation.
    pub fn frame_transform(&self, params: &FrameParams) -> Affine {
        let center = self.canvas.center();
        Affine::translate(Vec2::new(center.x, center.y + style::VERTICAL_NUDGE_PX))
            * Affine::scale(params.scale)
            * Affine::rotate(params.rotation_deg.to_radians())
    }

    pub fn render(&self, params: &FrameParams) -> TextGifResult<RasterFrame> {
        let (width, height) = self.canvas.as_u16();
        let mut ctx = vello_cpu::RenderContext::new(width, height);

        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(style::BACKGROUND.to_cpu());
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(width),
            f64::from(height),
        ));

        let base = self.frame_transform(params);
        let origin = self.text.centering_offset();

        // Back to front: the deepest, darkest layer first.
        for layer in (1..=self.depth).rev() {
            let d = f64::from(layer);
            let color = params.extrusion_color(layer, self.depth);
            self.draw_text(&mut ctx, base * Affine::translate(origin + Vec2::new(d, d)), color);
        }
        self.draw_text(&mut ctx, base * Affine::translate(origin), params.face_color);

        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        ctx.render_to_pixmap(&mut pixmap);

        tracing::trace!(frame = params.index, "rasterized frame");
        RasterFrame::new(self.canvas, pixmap.data_as_u8_slice().to_vec())
    }

    fn draw_text(&self, ctx: &mut vello_cpu::RenderContext, transform: Affine, color: Rgba8) {
        ctx.set_transform(affine_to_cpu(transform));
        ctx.set_paint(color.to_cpu());

        for line in self.text.layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };

                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&self.text.font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        assets::{font::FontResolver, text::TextLayoutEngine},
        render::sizer::canvas_size,
    };

    fn renderer(text: &str, depth: u32) -> Option<ExtrudedTextRenderer> {
        let font = match FontResolver::new().resolve() {
            Ok(font) => font,
            Err(e) => {
                eprintln!("skipping: {e}");
                return None;
            }
        };
        let prepared = TextLayoutEngine::new()
            .prepare(text, &font, style::FONT_SIZE_PX)
            .unwrap();
        let canvas = canvas_size(prepared.bounds, depth).unwrap();
        Some(ExtrudedTextRenderer::new(prepared, canvas, depth))
    }

    #[test]
    fn transform_maps_origin_to_nudged_center() {
        let Some(r) = renderer("Hi", 2) else {
            return;
        };
        let params = FrameParams::at(0, 4).unwrap();
        let p = r.frame_transform(&params) * kurbo::Point::ORIGIN;
        let c = r.canvas().center();
        assert!((p.x - c.x).abs() < 1e-9);
        assert!((p.y - (c.y + 10.0)).abs() < 1e-9);
    }

    fn ink_box(frame: &RasterFrame) -> Option<(u32, u32, u32, u32)> {
        let mut ink: Option<(u32, u32, u32, u32)> = None;
        for y in 0..frame.height {
            for x in 0..frame.width {
                if frame.pixel(x, y) == Some(style::BACKGROUND) {
                    continue;
                }
                ink = Some(match ink {
                    None => (x, y, x, y),
                    Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
                });
            }
        }
        ink
    }

    #[test]
    fn inked_text_is_centered_on_the_nudged_anchor() {
        let Some(r) = renderer("Hi", 0) else {
            return;
        };
        let mut params = FrameParams::at(0, 4).unwrap();
        params.scale = 1.0;
        params.rotation_deg = 0.0;
        let frame = r.render(&params).unwrap();

        let (x0, y0, x1, y1) = ink_box(&frame).unwrap();
        let ink_w = f64::from(x1 - x0 + 1);
        let ink_h = f64::from(y1 - y0 + 1);
        let cx = f64::from(x0) + ink_w / 2.0;
        let cy = f64::from(y0) + ink_h / 2.0;

        let anchor = r.canvas().center();
        assert!((cx - anchor.x).abs() <= 1.0, "ink center x {cx} vs {}", anchor.x);
        assert!(
            (cy - (anchor.y + style::VERTICAL_NUDGE_PX)).abs() <= 1.0,
            "ink center y {cy} vs {}",
            anchor.y + style::VERTICAL_NUDGE_PX
        );

        // The canvas is sized from the same ink box plus padding.
        let bounds = r.text.bounds;
        assert!((ink_w - bounds.width()).abs() <= 2.0);
        assert!((ink_h - bounds.height()).abs() <= 2.0);
    }

    #[test]
    fn frame_matches_canvas_and_keeps_background_corners() {
        let Some(r) = renderer("Hi", 2) else {
            return;
        };
        let frame = r.render(&FrameParams::at(1, 4).unwrap()).unwrap();
        let canvas = r.canvas();
        assert_eq!((frame.width, frame.height), (canvas.width, canvas.height));
        assert_eq!(frame.data.len(), canvas.pixel_count() * 4);
        assert!(frame.pixels().all(|px| px.a == 255));
        for (x, y) in [
            (0, 0),
            (canvas.width - 1, 0),
            (0, canvas.height - 1),
            (canvas.width - 1, canvas.height - 1),
        ] {
            assert_eq!(frame.pixel(x, y), Some(style::BACKGROUND));
        }
    }

    #[test]
    fn flat_text_draws_only_the_face_color() {
        let Some(r) = renderer("Hi", 0) else {
            return;
        };
        // Frame 0: red face over ghost white; any extrusion pixel would pull red well below 240.
        let frame = r.render(&FrameParams::at(0, 4).unwrap()).unwrap();
        assert!(frame.pixels().all(|px| px.r >= 240));
        assert!(frame.pixels().any(|px| px.g < 32 && px.b < 32));
    }

    #[test]
    fn extruded_text_shows_darkened_side_layers() {
        let Some(r) = renderer("Hi", 16) else {
            return;
        };
        let frame = r.render(&FrameParams::at(0, 4).unwrap()).unwrap();
        // Side color at hue 0 is a dim magenta (<= 153 red) and darkens further with depth.
        assert!(frame.pixels().any(|px| px.r <= 160 && px.g < 32 && px.b > 80));
        assert!(frame.pixels().any(|px| px.r >= 250 && px.g < 32 && px.b < 32));
    }

    #[test]
    fn rendering_is_deterministic() {
        let Some(r) = renderer("Hello!", 4) else {
            return;
        };
        let params = FrameParams::at(5, 12).unwrap();
        let a = r.render(&params).unwrap();
        let b = r.render(&params).unwrap();
        assert_eq!(a, b);
    }
}
