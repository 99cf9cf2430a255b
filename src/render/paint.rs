//! Solid and gradient paints.
//!
//! Gradients are generated as premultiplied RGBA8 image paints and drawn as
//! image fills. Two-stop fades interpolate color and alpha in straight space
//! before premultiplying, matching the canvas gradients the editor previews
//! with.

use std::sync::Arc;

use crate::assets::color::hex_to_rgb;
use crate::foundation::core::Rgba8Premul;
use crate::foundation::error::{NexusError, NexusResult};

/// Opaque solid paint from `#rrggbb`.
pub(crate) fn solid(hex: &str) -> vello_cpu::peniko::Color {
    let (r, g, b) = hex_to_rgb(hex);
    vello_cpu::peniko::Color::from_rgba8(r, g, b, 255)
}

/// Solid paint from `#rrggbb` with `alpha` in `[0, 1]`.
pub(crate) fn solid_alpha(hex: &str, alpha: f64) -> vello_cpu::peniko::Color {
    let (r, g, b) = hex_to_rgb(hex);
    vello_cpu::peniko::Color::from_rgba8(r, g, b, alpha_to_u8(alpha))
}

/// White paint with `alpha` in `[0, 1]`.
pub(crate) fn white_alpha(alpha: f64) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(255, 255, 255, alpha_to_u8(alpha))
}

fn alpha_to_u8(alpha: f64) -> u8 {
    (alpha.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// A square radial fade from `hex` at `max_alpha` in the center to fully
/// transparent at `radius_px`, as an image paint.
///
/// Returns the image and its side length in pixels; the caller positions it
/// so the fade center lands where the gradient center should be.
pub(crate) fn radial_fade_image(
    hex: &str,
    max_alpha: f64,
    radius_px: f64,
) -> NexusResult<(vello_cpu::Image, f64)> {
    let radius = radius_px.max(1.0);
    let side = (radius * 2.0).ceil() as u32;
    let (r, g, b) = hex_to_rgb(hex);
    let center = f64::from(side) / 2.0;

    let mut bytes = vec![0u8; (side as usize) * (side as usize) * 4];
    for y in 0..side {
        for x in 0..side {
            let dx = f64::from(x) + 0.5 - center;
            let dy = f64::from(y) + 0.5 - center;
            let t = ((dx * dx + dy * dy).sqrt() / radius).min(1.0);
            let f = 1.0 - t;
            let px = Rgba8Premul::from_straight_rgba(
                (f64::from(r) * f).round() as u8,
                (f64::from(g) * f).round() as u8,
                (f64::from(b) * f).round() as u8,
                alpha_to_u8(max_alpha * f),
            );
            let i = ((y as usize) * (side as usize) + (x as usize)) * 4;
            bytes[i..i + 4].copy_from_slice(&[px.r, px.g, px.b, px.a]);
        }
    }

    Ok((premul_image(&bytes, side, side)?, f64::from(side)))
}

/// A three-stop linear gradient running along the diagonal of a `w` x `h`
/// box, as an image paint. Stops are `(hex, alpha)` at positions 0, 0.5
/// and 1.
pub(crate) fn diagonal_gradient_image(
    w: u32,
    h: u32,
    start: (&str, f64),
    mid: (&str, f64),
    end: (&str, f64),
) -> NexusResult<vello_cpu::Image> {
    let w = w.max(1);
    let h = h.max(1);
    let stops = [rgba_of(start), rgba_of(mid), rgba_of(end)];
    let len_sq = f64::from(w) * f64::from(w) + f64::from(h) * f64::from(h);

    let mut bytes = vec![0u8; (w as usize) * (h as usize) * 4];
    for y in 0..h {
        for x in 0..w {
            let t = ((f64::from(x) + 0.5) * f64::from(w) + (f64::from(y) + 0.5) * f64::from(h))
                / len_sq;
            let t = t.clamp(0.0, 1.0);
            let [r, g, b, a] = if t < 0.5 {
                mix(stops[0], stops[1], t * 2.0)
            } else {
                mix(stops[1], stops[2], (t - 0.5) * 2.0)
            };
            let px = Rgba8Premul::from_straight_rgba(
                r.round() as u8,
                g.round() as u8,
                b.round() as u8,
                a.round() as u8,
            );
            let i = ((y as usize) * (w as usize) + (x as usize)) * 4;
            bytes[i..i + 4].copy_from_slice(&[px.r, px.g, px.b, px.a]);
        }
    }

    premul_image(&bytes, w, h)
}

fn rgba_of((hex, alpha): (&str, f64)) -> [f64; 4] {
    let (r, g, b) = hex_to_rgb(hex);
    [
        f64::from(r),
        f64::from(g),
        f64::from(b),
        alpha.clamp(0.0, 1.0) * 255.0,
    ]
}

fn mix(a: [f64; 4], b: [f64; 4], t: f64) -> [f64; 4] {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
        a[3] + (b[3] - a[3]) * t,
    ]
}

fn premul_image(bytes_premul: &[u8], width: u32, height: u32) -> NexusResult<vello_cpu::Image> {
    let w: u16 = width
        .try_into()
        .map_err(|_| NexusError::render("paint width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| NexusError::render("paint height exceeds u16"))?;
    if bytes_premul.len() != (width as usize) * (height as usize) * 4 {
        return Err(NexusError::render("paint byte length mismatch"));
    }

    let mut pixels = Vec::<vello_cpu::peniko::color::PremulRgba8>::with_capacity(
        (width as usize) * (height as usize),
    );
    for px in bytes_premul.chunks_exact(4) {
        pixels.push(vello_cpu::peniko::color::PremulRgba8::from_u8_array([
            px[0], px[1], px[2], px[3],
        ]));
    }
    let pixmap = vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, true);

    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}
