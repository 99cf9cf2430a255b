use super::*;

#[test]
fn hex_parses_channels() {
    assert_eq!(hex_to_rgb("#c8a882"), (200, 168, 130));
    assert_eq!(hex_to_rgb("#000000"), (0, 0, 0));
    assert_eq!(hex_to_rgb("#ffffff"), (255, 255, 255));
    // Leading '#' is optional.
    assert_eq!(hex_to_rgb("ff0080"), (255, 0, 128));
}

#[test]
fn malformed_hex_falls_back_to_black() {
    assert_eq!(hex_to_rgb("not-a-color"), (0, 0, 0));
    assert_eq!(hex_to_rgb(""), (0, 0, 0));
}

#[test]
fn rgb_hex_round_trip_is_exact() {
    for r in (0u16..=255).step_by(17) {
        for g in (0u16..=255).step_by(17) {
            for b in (0u16..=255).step_by(17) {
                let hex = rgb_to_hex(f64::from(r), f64::from(g), f64::from(b));
                assert_eq!(hex_to_rgb(&hex), (r as u8, g as u8, b as u8), "via {hex}");
            }
        }
    }
}

#[test]
fn rgb_to_hex_rounds_and_clamps() {
    assert_eq!(rgb_to_hex(-5.0, 260.0, 128.4), "#00ff80");
    assert_eq!(rgb_to_hex(127.5, 127.49, 0.0), "#807f00");
}

#[test]
fn lighten_and_darken_shift_channels() {
    assert_eq!(lighten("#101010", 16.0), "#202020");
    assert_eq!(darken("#202020", 16.0), "#101010");
    // Clamped at the channel bounds.
    assert_eq!(lighten("#f0f0f0", 100.0), "#ffffff");
    assert_eq!(darken("#101010", 100.0), "#000000");
}

#[test]
fn gray_has_zero_saturation() {
    let (h, s, _l) = hex_to_hsl("#808080");
    assert_eq!(h, 0.0);
    assert_eq!(s, 0.0);
}

#[test]
fn hsl_round_trip_within_rounding_tolerance() {
    let samples = [
        "#c8a882", "#1a1a1a", "#4a7c59", "#ff9999", "#00ffd5", "#8b7355",
        "#0a0a1a", "#d4b4b4", "#336699", "#ffd700",
    ];
    for hex in samples {
        let (h, s, l) = hex_to_hsl(hex);
        let back = hsl_to_hex(h, s, l);
        let (r0, g0, b0) = hex_to_rgb(hex);
        let (r1, g1, b1) = hex_to_rgb(&back);
        for (a, b) in [(r0, r1), (g0, g1), (b0, b1)] {
            assert!(
                (i16::from(a) - i16::from(b)).abs() <= 1,
                "{hex} -> {back} drifted more than 1/channel"
            );
        }
    }
}

#[test]
fn saturate_raises_saturation_and_caps_at_one() {
    let (_, s0, l0) = hex_to_hsl("#996655");
    let boosted = saturate("#996655", 0.2);
    let (_, s1, l1) = hex_to_hsl(&boosted);
    assert!(s1 > s0, "saturation did not increase: {s0} -> {s1}");
    assert!((l1 - l0).abs() < 0.02, "lightness drifted: {l0} -> {l1}");

    let maxed = saturate("#996655", 5.0);
    let (_, s2, _) = hex_to_hsl(&maxed);
    assert!(s2 > 0.95, "saturation should cap near 1, got {s2}");
}
