//! Hex color utilities shared by the avatar and crest compositors.
//!
//! All colors at rest are `#rrggbb` strings (no alpha channel); alpha is
//! applied ad hoc at draw time. Conversions here are deliberately simple:
//! lighten/darken shift channels uniformly and are not perceptually uniform.
//! A malformed hex string is tolerated, not validated — the parse falls back
//! to zeroed channels, matching the "undefined but harmless" contract of the
//! platform's editor payloads.

/// Parse `#rrggbb` into `(r, g, b)` channels in 0–255.
pub fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
    let n = u32::from_str_radix(hex.trim_start_matches('#'), 16).unwrap_or(0);
    (
        ((n >> 16) & 255) as u8,
        ((n >> 8) & 255) as u8,
        (n & 255) as u8,
    )
}

/// Encode channels as `#rrggbb`, rounding and clamping each to 0–255.
///
/// Round-trip stable: any triple already in range encodes and re-parses to
/// itself.
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    fn ch(v: f64) -> u32 {
        v.round().clamp(0.0, 255.0) as u32
    }
    format!("#{:02x}{:02x}{:02x}", ch(r), ch(g), ch(b))
}

/// Add `amt` to every channel, clamping on encode.
pub fn lighten(hex: &str, amt: f64) -> String {
    let (r, g, b) = hex_to_rgb(hex);
    rgb_to_hex(
        f64::from(r) + amt,
        f64::from(g) + amt,
        f64::from(b) + amt,
    )
}

/// Subtract `amt` from every channel, clamping on encode.
pub fn darken(hex: &str, amt: f64) -> String {
    lighten(hex, -amt)
}

/// Convert `#rrggbb` to HSL with hue in turns `[0, 1)` and
/// saturation/lightness in `[0, 1]`.
pub fn hex_to_hsl(hex: &str) -> (f64, f64, f64) {
    let (r8, g8, b8) = hex_to_rgb(hex);
    let r = f64::from(r8) / 255.0;
    let g = f64::from(g8) / 255.0;
    let b = f64::from(b8) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    if max == min {
        return (0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    (h / 6.0, s, l)
}

/// Convert HSL (hue in turns, s/l in `[0, 1]`) to `#rrggbb`.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        if t < 1.0 / 6.0 {
            return p + (q - p) * 6.0 * t;
        }
        if t < 1.0 / 2.0 {
            return q;
        }
        if t < 2.0 / 3.0 {
            return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
        }
        p
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;
    rgb_to_hex(
        hue_to_rgb(p, q, h + 1.0 / 3.0) * 255.0,
        hue_to_rgb(p, q, h) * 255.0,
        hue_to_rgb(p, q, h - 1.0 / 3.0) * 255.0,
    )
}

/// Raise HSL saturation by `amt` (capped at 1), keeping hue and lightness.
pub fn saturate(hex: &str, amt: f64) -> String {
    let (h, s, l) = hex_to_hsl(hex);
    hsl_to_hex(h, (s + amt).min(1.0), l)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/color.rs"]
mod tests;
