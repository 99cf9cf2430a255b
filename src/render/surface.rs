use crate::foundation::core::{Affine, BezPath, Point, Rect};
use crate::foundation::error::{NexusError, NexusResult};

/// A rendered frame as RGBA8 pixels.
///
/// Frames are **premultiplied alpha**; the `premultiplied` flag makes this
/// explicit at API boundaries.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

/// Immediate-mode wrapper around a square `vello_cpu` render context.
///
/// Every primitive re-applies transform and blend state before drawing, so
/// no graphics state leaks from one layer into the next regardless of layer
/// order. Layers compose by painting in sequence; `finish` rasterizes and
/// reads the pixels back.
pub(crate) struct Scene {
    ctx: vello_cpu::RenderContext,
    side: u16,
    transform: Affine,
    blend: vello_cpu::peniko::BlendMode,
}

impl Scene {
    /// Create a square scene of `size` pixels per side.
    pub(crate) fn new(size: u32) -> NexusResult<Self> {
        if size == 0 {
            return Err(NexusError::validation("canvas size must be > 0"));
        }
        let side: u16 = size
            .try_into()
            .map_err(|_| NexusError::validation("canvas size exceeds u16"))?;
        Ok(Self {
            ctx: vello_cpu::RenderContext::new(side, side),
            side,
            transform: Affine::IDENTITY,
            blend: vello_cpu::peniko::BlendMode::default(),
        })
    }

    fn apply_state(&mut self) {
        self.ctx.set_transform(affine_to_cpu(self.transform));
        self.ctx
            .set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_blend_mode(self.blend);
    }

    /// Run `f` with the scene transform replaced by `transform`.
    pub(crate) fn with_transform(&mut self, transform: Affine, f: impl FnOnce(&mut Self)) {
        let saved = self.transform;
        self.transform = transform;
        f(self);
        self.transform = saved;
    }

    /// Switch the scene between screen and normal blending.
    pub(crate) fn set_screen_blend(&mut self, enabled: bool) {
        self.blend = if enabled {
            vello_cpu::peniko::BlendMode::new(
                vello_cpu::peniko::Mix::Screen,
                vello_cpu::peniko::Compose::SrcOver,
            )
        } else {
            vello_cpu::peniko::BlendMode::default()
        };
    }

    /// Fill `path` with a solid color.
    pub(crate) fn fill_path(&mut self, path: &BezPath, color: vello_cpu::peniko::Color) {
        self.apply_state();
        self.ctx.set_paint(color);
        self.ctx.fill_path(&bezpath_to_cpu(path));
    }

    /// Fill any `kurbo` shape with a solid color.
    pub(crate) fn fill_shape(
        &mut self,
        shape: &impl kurbo::Shape,
        color: vello_cpu::peniko::Color,
    ) {
        self.fill_path(&shape_to_path(shape), color);
    }

    /// Stroke `path` with a solid color at `width`.
    pub(crate) fn stroke_path(
        &mut self,
        path: &BezPath,
        color: vello_cpu::peniko::Color,
        width: f64,
    ) {
        self.apply_state();
        self.ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width));
        self.ctx.set_paint(color);
        self.ctx.stroke_path(&bezpath_to_cpu(path));
    }

    /// Stroke any `kurbo` shape with a solid color at `width`.
    pub(crate) fn stroke_shape(
        &mut self,
        shape: &impl kurbo::Shape,
        color: vello_cpu::peniko::Color,
        width: f64,
    ) {
        self.stroke_path(&shape_to_path(shape), color, width);
    }

    /// Fill an axis-aligned rectangle with a solid color.
    pub(crate) fn fill_rect(&mut self, rect: Rect, color: vello_cpu::peniko::Color) {
        self.apply_state();
        self.ctx.set_paint(color);
        self.ctx
            .fill_rect(&vello_cpu::kurbo::Rect::new(rect.x0, rect.y0, rect.x1, rect.y1));
    }

    /// Draw an image paint with its top-left corner at `(x, y)`, stretched
    /// over `w` x `h`.
    pub(crate) fn draw_image(&mut self, image: vello_cpu::Image, x: f64, y: f64, w: f64, h: f64) {
        let saved = self.transform;
        self.transform = saved * Affine::translate((x, y));
        self.apply_state();
        self.ctx.set_paint(image);
        self.ctx
            .fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, w, h));
        self.transform = saved;
    }

    /// Clip subsequent drawing to `path` until the matching `pop_layer`.
    pub(crate) fn push_clip(&mut self, path: &BezPath) {
        self.apply_state();
        self.ctx.push_clip_layer(&bezpath_to_cpu(path));
    }

    /// Pop the innermost clip/opacity layer.
    pub(crate) fn pop_layer(&mut self) {
        self.ctx.pop_layer();
    }

    /// Draw a positioned glyph run with `origin` as its local origin.
    pub(crate) fn fill_glyphs(
        &mut self,
        font: &vello_cpu::peniko::FontData,
        font_size: f32,
        color: vello_cpu::peniko::Color,
        origin: Point,
        glyphs: impl Iterator<Item = vello_cpu::Glyph>,
    ) {
        let saved = self.transform;
        self.transform = saved * Affine::translate((origin.x, origin.y));
        self.apply_state();
        self.ctx.set_paint(color);
        self.ctx.glyph_run(font).font_size(font_size).fill_glyphs(glyphs);
        self.transform = saved;
    }

    /// Rasterize and read the frame back as premultiplied RGBA8.
    pub(crate) fn finish(mut self) -> FrameRGBA {
        self.ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(self.side, self.side);
        self.ctx.render_to_pixmap(&mut pixmap);
        FrameRGBA {
            width: u32::from(self.side),
            height: u32::from(self.side),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }
}

pub(crate) fn shape_to_path(shape: &impl kurbo::Shape) -> BezPath {
    let mut p = BezPath::new();
    for el in shape.path_elements(0.1) {
        p.push(el);
    }
    p
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}
