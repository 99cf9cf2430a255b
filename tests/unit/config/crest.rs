use super::*;
use crate::assets::color::hex_to_hsl;
use crate::config::model::AvatarConfig;

#[test]
fn derivation_is_deterministic() {
    let a = CrestConfig::derive("alice", None);
    let b = CrestConfig::derive("alice", None);
    assert_eq!(a, b);
}

#[test]
fn alice_selects_known_shape_and_border() {
    // fnv1a("alice") = 2267157479, % 5 = 4; fnv1a("aliceborder") % 4 = 1.
    let crest = CrestConfig::derive("alice", None);
    assert_eq!(crest.shield_shape, ShieldShape::Cartouche);
    assert_eq!(crest.border_style, BorderStyle::Thorned);
}

#[test]
fn hash_mod_five_zero_selects_heater() {
    // fnv1a("a") = 3826002220, which is divisible by 5.
    assert_eq!(fnv1a("a") % 5, 0);
    let crest = CrestConfig::derive("a", None);
    assert_eq!(crest.shield_shape, ShieldShape::Heater);
}

#[test]
fn selection_tables_have_contractual_order() {
    assert_eq!(
        SHIELD_SHAPE_ORDER,
        [
            ShieldShape::Heater,
            ShieldShape::Kite,
            ShieldShape::Oval,
            ShieldShape::Baroque,
            ShieldShape::Cartouche,
        ]
    );
    assert_eq!(
        BORDER_STYLE_ORDER,
        [
            BorderStyle::Double,
            BorderStyle::Thorned,
            BorderStyle::Circuit,
            BorderStyle::Plain,
        ]
    );
}

#[test]
fn sigil_angles_come_from_hash_nibbles() {
    let hash = fnv1a("alice");
    let crest = CrestConfig::derive("alice", None);
    for (i, &angle) in crest.sigil_angles.iter().enumerate() {
        let nibble = (hash >> (i * 4)) & 0xF;
        let expected = f64::from(nibble) / 16.0 * std::f64::consts::TAU;
        assert_eq!(angle, expected, "vertex {i}");
    }
}

#[test]
fn case_sensitive_names_derive_different_sigils() {
    let lower = CrestConfig::derive("alice", None);
    let upper = CrestConfig::derive("Alice", None);
    // Different hashes differ in at least one nibble, so the angle arrays
    // cannot be equal.
    assert_ne!(lower.sigil_angles, upper.sigil_angles);
}

#[test]
fn avatar_colors_are_borrowed_when_present() {
    let avatar = AvatarConfig::default();
    let crest = CrestConfig::derive("alice", Some(&avatar));
    assert_eq!(crest.primary_color, saturate(&avatar.skin_color, 0.3));
    assert_eq!(crest.secondary_color, avatar.hair.color);
    assert_eq!(crest.species_symbol, avatar.species);
}

#[test]
fn seeded_colors_stay_in_the_documented_hsl_band() {
    let crest = CrestConfig::derive("bob", None);
    for hex in [&crest.primary_color, &crest.secondary_color] {
        assert_eq!(hex.len(), 7, "expected #rrggbb, got {hex}");
        let (_h, s, l) = hex_to_hsl(hex);
        // Saturation drawn from [0.5, 0.9], lightness from [0.35, 0.55];
        // allow slack for hex rounding.
        assert!((0.45..=0.95).contains(&s), "saturation {s} out of band");
        assert!((0.3..=0.6).contains(&l), "lightness {l} out of band");
    }
}

#[test]
fn species_symbol_defaults_to_human_without_avatar() {
    let crest = CrestConfig::derive("bob", None);
    assert_eq!(crest.species_symbol, crate::config::model::Species::Human);
}
