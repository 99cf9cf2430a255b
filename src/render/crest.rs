//! The crest compositor: a deterministic heraldic badge derived from a
//! display name.
//!
//! All visual parameters come from [`CrestConfig::derive`]; this module only
//! turns them into pixels. The shield silhouette clips the gradient
//! background, sigil and species glyph; the border and label draw unclipped
//! on top.

use std::f64::consts::{PI, TAU};

use crate::assets::color::hex_to_rgb;
use crate::assets::text::{TextBrushRgba8, TextLayoutEngine};
use crate::config::crest::{BorderStyle, CrestConfig, ShieldShape};
use crate::config::model::{AvatarConfig, Species};
use crate::foundation::core::{BezPath, Point, Rect};
use crate::foundation::error::NexusResult;
use crate::render::paint::{diagonal_gradient_image, solid, solid_alpha};
use crate::render::surface::{FrameRGBA, Scene, shape_to_path};

/// Options for crest rendering.
///
/// Fonts are external assets: the username label is shaped from the bytes
/// supplied here. With no font the label is skipped silently and the rest
/// of the crest renders normally.
#[derive(Clone, Copy, Debug, Default)]
pub struct CrestOptions<'a> {
    /// Raw bytes of the font used for the username label.
    pub label_font: Option<&'a [u8]>,
}

/// Render the crest for `username` onto a square canvas of `size` pixels,
/// optionally borrowing colors and species from an avatar config.
///
/// Fully deterministic for a fixed `(username, avatar, size, font)`.
#[tracing::instrument(skip(avatar, opts))]
pub fn render_crest(
    username: &str,
    avatar: Option<&AvatarConfig>,
    size: u32,
    opts: &CrestOptions<'_>,
) -> NexusResult<FrameRGBA> {
    let crest = CrestConfig::derive(username, avatar);
    let mut scene = Scene::new(size)?;
    let s = f64::from(size);
    let cx = s / 2.0;
    let cy = s / 2.0;
    let w = s * 0.78;
    let h = s * 0.88;

    scene.fill_rect(Rect::new(0.0, 0.0, s, s), solid("#0a0a0a"));

    let shield = shield_path(crest.shield_shape, cx, cy, w, h);
    scene.push_clip(&shield);

    let gradient = diagonal_gradient_image(
        w.ceil() as u32,
        h.ceil() as u32,
        (&crest.primary_color, f64::from(0x33u8) / 255.0),
        ("#0a0a1a", 1.0),
        (&crest.secondary_color, f64::from(0x22u8) / 255.0),
    )?;
    scene.draw_image(gradient, cx - w / 2.0, cy - h / 2.0, w, h);

    draw_sigil(&mut scene, cx, cy, s * 0.28, &crest);
    draw_species_glyph(
        &mut scene,
        crest.species_symbol,
        cx,
        cy - s * 0.06,
        s * 0.14,
        &crest.secondary_color,
    );

    scene.pop_layer();

    draw_border(
        &mut scene,
        crest.shield_shape,
        crest.border_style,
        cx,
        cy,
        w,
        h,
        &crest.primary_color,
    );

    if let Some(font_bytes) = opts.label_font {
        draw_label(
            &mut scene,
            username,
            font_bytes,
            s,
            cx,
            cy + h * 0.42,
            &crest.primary_color,
        )?;
    }

    Ok(scene.finish())
}

/// Build the shield silhouette centered at `(cx, cy)` spanning `w` x `h`.
fn shield_path(shape: ShieldShape, cx: f64, cy: f64, w: f64, h: f64) -> BezPath {
    let mut p = BezPath::new();
    match shape {
        ShieldShape::Heater => {
            p.move_to((cx, cy - h * 0.5));
            p.line_to((cx + w * 0.5, cy - h * 0.5));
            p.line_to((cx + w * 0.5, cy + h * 0.1));
            p.quad_to((cx + w * 0.5, cy + h * 0.5), (cx, cy + h * 0.5));
            p.quad_to((cx - w * 0.5, cy + h * 0.5), (cx - w * 0.5, cy + h * 0.1));
            p.line_to((cx - w * 0.5, cy - h * 0.5));
            p.close_path();
        }
        ShieldShape::Kite => {
            p.move_to((cx, cy - h * 0.5));
            p.line_to((cx + w * 0.5, cy - h * 0.1));
            p.quad_to((cx + w * 0.45, cy + h * 0.25), (cx, cy + h * 0.5));
            p.quad_to((cx - w * 0.45, cy + h * 0.25), (cx - w * 0.5, cy - h * 0.1));
            p.close_path();
        }
        ShieldShape::Oval => {
            p = shape_to_path(&kurbo::Ellipse::new((cx, cy), (w * 0.5, h * 0.5), 0.0));
        }
        ShieldShape::Baroque => {
            p.move_to((cx, cy - h * 0.5));
            p.curve_to(
                (cx + w * 0.6, cy - h * 0.5),
                (cx + w * 0.55, cy),
                (cx + w * 0.5, cy + h * 0.1),
            );
            p.curve_to(
                (cx + w * 0.5, cy + h * 0.35),
                (cx + w * 0.25, cy + h * 0.5),
                (cx, cy + h * 0.5),
            );
            p.curve_to(
                (cx - w * 0.25, cy + h * 0.5),
                (cx - w * 0.5, cy + h * 0.35),
                (cx - w * 0.5, cy + h * 0.1),
            );
            p.curve_to(
                (cx - w * 0.55, cy),
                (cx - w * 0.6, cy - h * 0.5),
                (cx, cy - h * 0.5),
            );
            p.close_path();
        }
        ShieldShape::Cartouche => {
            p = shape_to_path(&kurbo::RoundedRect::new(
                cx - w * 0.5,
                cy - h * 0.5,
                cx + w * 0.5,
                cy + h * 0.5,
                h * 0.2,
            ));
        }
    }
    p
}

/// The 8-point star polygon plus faint spokes. Vertex angles come from the
/// derived config; radius alternates by vertex parity.
fn draw_sigil(scene: &mut Scene, cx: f64, cy: f64, radius: f64, crest: &CrestConfig) {
    let color = solid(&crest.primary_color);
    let glow = |alpha: f64| solid_alpha(&crest.primary_color, alpha);

    let points: Vec<(f64, f64)> = crest
        .sigil_angles
        .iter()
        .enumerate()
        .map(|(i, &angle)| {
            let r = if i % 2 == 0 { radius * 0.9 } else { radius * 0.45 };
            (cx + angle.cos() * r, cy + angle.sin() * r)
        })
        .collect();

    let mut star = BezPath::new();
    star.move_to(points[0]);
    for &pt in &points[1..] {
        star.line_to(pt);
    }
    star.close_path();

    // Halo strokes stand in for the canvas shadow glow.
    scene.stroke_path(&star, glow(0.12), 5.5);
    scene.stroke_path(&star, glow(0.25), 3.0);
    scene.stroke_path(&star, color, 1.5);

    for &pt in &points {
        let mut spoke = BezPath::new();
        spoke.move_to((cx, cy));
        spoke.line_to(pt);
        scene.stroke_path(&spoke, glow(0.4), 1.5);
    }
}

/// Species glyph at a fixed offset above the shield center.
fn draw_species_glyph(
    scene: &mut Scene,
    species: Species,
    cx: f64,
    cy: f64,
    r: f64,
    hex: &str,
) {
    let color = solid(hex);

    match species {
        Species::Human => {
            // Circle-and-cross stick figure.
            scene.stroke_shape(&kurbo::Circle::new((cx, cy - r * 0.2), r * 0.35), color, 1.5);
            let mut body = BezPath::new();
            body.move_to((cx, cy));
            body.line_to((cx, cy + r * 0.5));
            body.move_to((cx - r * 0.3, cy + r * 0.2));
            body.line_to((cx + r * 0.3, cy + r * 0.2));
            scene.stroke_path(&body, color, 1.5);
        }
        Species::Minotaur => {
            scene.stroke_shape(&kurbo::Circle::new((cx - r * 0.25, cy - r * 0.1), r * 0.2), color, 1.5);
            scene.stroke_shape(&kurbo::Circle::new((cx + r * 0.25, cy - r * 0.1), r * 0.2), color, 1.5);
            let mut horns = BezPath::new();
            horns.move_to((cx - r * 0.15, cy - r * 0.3));
            horns.curve_to(
                (cx - r * 0.4, cy - r * 0.7),
                (cx - r * 0.55, cy - r * 0.4),
                (cx - r * 0.5, cy - r * 0.1),
            );
            horns.move_to((cx + r * 0.15, cy - r * 0.3));
            horns.curve_to(
                (cx + r * 0.4, cy - r * 0.7),
                (cx + r * 0.55, cy - r * 0.4),
                (cx + r * 0.5, cy - r * 0.1),
            );
            scene.stroke_path(&horns, color, 1.5);
        }
        Species::Phoenixkin => {
            let mut flame = BezPath::new();
            flame.move_to((cx, cy - r * 0.5));
            flame.curve_to(
                (cx + r * 0.3, cy - r * 0.2),
                (cx + r * 0.5, cy + r * 0.1),
                (cx, cy + r * 0.5),
            );
            flame.curve_to(
                (cx - r * 0.5, cy + r * 0.1),
                (cx - r * 0.3, cy - r * 0.2),
                (cx, cy - r * 0.5),
            );
            scene.fill_path(&flame, color);
        }
        Species::Kitsune => {
            // Three tail strokes fanned from a shared anchor.
            for t in 0..3 {
                let a = (-0.3 + f64::from(t) * 0.3) + PI * 1.5;
                let mut tail = BezPath::new();
                tail.move_to((cx, cy + r * 0.2));
                tail.curve_to(
                    (cx + (a - 0.3).cos() * r * 0.6, cy + (a - 0.3).sin() * r * 0.6),
                    (cx + (a + 0.3).cos() * r * 0.6, cy + (a + 0.3).sin() * r * 0.6),
                    (cx, cy + r * 0.2),
                );
                scene.stroke_path(&tail, color, 1.5);
            }
        }
        Species::Dragonkin => {
            // Five-pointed star.
            let mut star = BezPath::new();
            star.move_to((cx, cy - r * 0.5));
            for i in 0..5 {
                let a = f64::from(i) / 5.0 * TAU - PI / 2.0;
                let ra = (f64::from(i) + 0.5) / 5.0 * TAU - PI / 2.0;
                star.line_to((cx + a.cos() * r * 0.5, cy + a.sin() * r * 0.5));
                star.line_to((cx + ra.cos() * r * 0.22, cy + ra.sin() * r * 0.22));
            }
            star.close_path();
            scene.fill_path(&star, color);
        }
        _ => {
            scene.stroke_shape(&kurbo::Circle::new((cx, cy), r * 0.35), color, 1.5);
        }
    }
}

/// Border stroke at full shield scale, decorated per style.
#[allow(clippy::too_many_arguments)]
fn draw_border(
    scene: &mut Scene,
    shape: ShieldShape,
    style: BorderStyle,
    cx: f64,
    cy: f64,
    w: f64,
    h: f64,
    hex: &str,
) {
    let color = solid(hex);
    let outline = shield_path(shape, cx, cy, w, h);

    match style {
        BorderStyle::Plain => {
            scene.stroke_path(&outline, color, 2.0);
        }
        BorderStyle::Double => {
            scene.stroke_path(&outline, color, 2.0);
            let inner = shield_path(shape, cx, cy, w * 0.88, h * 0.88);
            scene.stroke_path(&inner, color, 1.0);
        }
        BorderStyle::Thorned => {
            scene.stroke_path(&outline, color, 2.0);
            for i in 0..12 {
                let angle = f64::from(i) / 12.0 * TAU;
                let rx = cx + angle.cos() * w * 0.48;
                let ry = cy + angle.sin() * h * 0.44;
                let mut spike = BezPath::new();
                spike.move_to((rx, ry));
                spike.line_to((rx + angle.cos() * 6.0, ry + angle.sin() * 6.0));
                scene.stroke_path(&spike, color, 2.0);
            }
        }
        BorderStyle::Circuit => {
            scene.stroke_path(&outline, color, 2.0);
            let ticks = solid_alpha(hex, 0.5);
            let steps = 8;
            for i in 0..steps {
                let y = cy - h * 0.4 + f64::from(i) / f64::from(steps) * h * 0.8;
                let mut pair = BezPath::new();
                pair.move_to((cx - w * 0.4, y));
                pair.line_to((cx - w * 0.25, y));
                pair.move_to((cx + w * 0.4, y));
                pair.line_to((cx + w * 0.25, y));
                scene.stroke_path(&pair, ticks, 0.8);
            }
        }
    }
}

/// Uppercase the display name and truncate it to 12 characters for the
/// label.
pub(crate) fn label_text(username: &str) -> String {
    username.to_uppercase().chars().take(12).collect()
}

fn draw_label(
    scene: &mut Scene,
    username: &str,
    font_bytes: &[u8],
    s: f64,
    cx: f64,
    baseline_y: f64,
    hex: &str,
) -> NexusResult<()> {
    let text = label_text(username);
    if text.is_empty() {
        return Ok(());
    }
    let size_px = (s * 0.065).floor() as f32;
    let (r, g, b) = hex_to_rgb(hex);
    let brush = TextBrushRgba8 { r, g, b, a: 255 };

    let mut engine = TextLayoutEngine::new();
    let layout = engine.layout_label(&text, font_bytes, size_px, brush)?;
    let Some(first_line) = layout.lines().next() else {
        return Ok(());
    };
    let baseline = f64::from(first_line.metrics().baseline);
    let origin_x = cx - f64::from(layout.width()) / 2.0;
    let origin_y = baseline_y - baseline;

    let font =
        vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(font_bytes.to_vec()), 0);

    // Offset passes approximate the glow, then the label itself.
    let passes: [(f64, f64, f64); 5] = [
        (-1.0, 0.0, 0.25),
        (1.0, 0.0, 0.25),
        (0.0, -1.0, 0.25),
        (0.0, 1.0, 0.25),
        (0.0, 0.0, 1.0),
    ];
    for (dx, dy, alpha) in passes {
        let color = solid_alpha(hex, alpha);
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let glyphs = run.glyphs().map(|glyph| vello_cpu::Glyph {
                    id: glyph.id,
                    x: glyph.x,
                    y: glyph.y,
                });
                scene.fill_glyphs(
                    &font,
                    run.run().font_size(),
                    color,
                    Point::new(origin_x + dx, origin_y + dy),
                    glyphs,
                );
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/crest.rs"]
mod tests;
