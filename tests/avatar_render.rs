use nexus_avatar::{AvatarConfig, Species, render_avatar};
use nexus_avatar::config::model::{ScarConfig, ScarPlacement, ScarType};

const SIZE: u32 = 400;

/// Span of clearly skin-lit opaque pixels in one row, as (min_x, max_x).
fn lit_row_span(frame: &nexus_avatar::FrameRGBA, y: u32) -> Option<(u32, u32)> {
    let row = (y * frame.width * 4) as usize;
    let mut min_x = None;
    let mut max_x = None;
    for x in 0..frame.width {
        let i = row + (x * 4) as usize;
        let r = frame.data[i];
        let a = frame.data[i + 3];
        if a == 255 && r > 120 {
            if min_x.is_none() {
                min_x = Some(x);
            }
            max_x = Some(x);
        }
    }
    Some((min_x?, max_x?))
}

#[test]
fn renders_are_bit_identical() {
    let config = AvatarConfig::default();
    let a = render_avatar(&config, SIZE).unwrap();
    let b = render_avatar(&config, SIZE).unwrap();
    assert_eq!(a.width, SIZE);
    assert_eq!(a.height, SIZE);
    assert!(a.premultiplied);
    assert_eq!(a.data, b.data);
}

#[test]
fn default_human_has_opaque_skin_at_center() {
    let frame = render_avatar(&AvatarConfig::default(), SIZE).unwrap();
    let center = ((SIZE / 2) * SIZE * 4 + (SIZE / 2) * 4) as usize;
    let r = frame.data[center];
    let a = frame.data[center + 3];
    assert_eq!(a, 255, "center pixel must be opaque");
    assert!(r > 100, "center pixel should carry skin tone, red = {r}");
}

#[test]
fn centaur_shoulder_span_grows_with_the_slider() {
    let mut wide = AvatarConfig::default();
    wide.species = Species::Centaur;
    wide.hair.length = 0.0;
    wide.body.shoulder_width = 1.0;

    let mut narrow = wide.clone();
    narrow.body.shoulder_width = -1.0;

    // Just below the torso top, above the hindquarters ellipse.
    let row = (f64::from(SIZE) * 0.45) as u32 + 4;
    let wide_frame = render_avatar(&wide, SIZE).unwrap();
    let narrow_frame = render_avatar(&narrow, SIZE).unwrap();

    let (w0, w1) = lit_row_span(&wide_frame, row).expect("wide torso row empty");
    let (n0, n1) = lit_row_span(&narrow_frame, row).expect("narrow torso row empty");
    let wide_span = w1 - w0;
    let narrow_span = n1 - n0;
    assert!(
        wide_span > narrow_span,
        "shoulderWidth=1 span {wide_span} must exceed shoulderWidth=-1 span {narrow_span}"
    );
}

#[test]
fn disabled_cybernetics_ignore_intensity() {
    let mut off_high = AvatarConfig::default();
    off_high.cybernetics.arms = false;
    off_high.cybernetics.arms_intensity = 3;

    let mut off_zero = off_high.clone();
    off_zero.cybernetics.arms_intensity = 0;

    let a = render_avatar(&off_high, SIZE).unwrap();
    let b = render_avatar(&off_zero, SIZE).unwrap();
    assert_eq!(a.data, b.data);
}

#[test]
fn enabled_cybernetics_change_the_raster() {
    let mut on = AvatarConfig::default();
    on.cybernetics.arms = true;
    on.cybernetics.arms_intensity = 3;

    let base = render_avatar(&AvatarConfig::default(), SIZE).unwrap();
    let glowing = render_avatar(&on, SIZE).unwrap();
    assert_ne!(base.data, glowing.data);
}

#[test]
fn lip_index_wraps_modulo_palette() {
    let mut wrapped = AvatarConfig::default();
    wrapped.lip_type = 18;
    let mut base = AvatarConfig::default();
    base.lip_type = 0;

    let a = render_avatar(&wrapped, SIZE).unwrap();
    let b = render_avatar(&base, SIZE).unwrap();
    assert_eq!(a.data, b.data);

    let mut other = AvatarConfig::default();
    other.lip_type = 1;
    let c = render_avatar(&other, SIZE).unwrap();
    assert_ne!(a.data, c.data, "adjacent palette entries must differ");
}

#[test]
fn inert_scar_placement_is_a_no_op() {
    let mut chest_scar = AvatarConfig::default();
    chest_scar.scars.push(ScarConfig {
        kind: ScarType::Slash,
        placement: ScarPlacement::Chest,
    });

    let a = render_avatar(&chest_scar, SIZE).unwrap();
    let b = render_avatar(&AvatarConfig::default(), SIZE).unwrap();
    assert_eq!(a.data, b.data);
}

#[test]
fn rendered_scar_placement_changes_the_raster() {
    let mut cheek_scar = AvatarConfig::default();
    cheek_scar.scars.push(ScarConfig {
        kind: ScarType::Slash,
        placement: ScarPlacement::LeftCheek,
    });

    let a = render_avatar(&cheek_scar, SIZE).unwrap();
    let b = render_avatar(&AvatarConfig::default(), SIZE).unwrap();
    assert_ne!(a.data, b.data);
}

#[test]
fn skin_shine_is_gated_below_threshold() {
    let mut off = AvatarConfig::default();
    off.skin_shine = 0.0;
    let mut sub_threshold = AvatarConfig::default();
    sub_threshold.skin_shine = 0.04;
    let mut on = AvatarConfig::default();
    on.skin_shine = 0.5;

    let a = render_avatar(&off, SIZE).unwrap();
    let b = render_avatar(&sub_threshold, SIZE).unwrap();
    let c = render_avatar(&on, SIZE).unwrap();
    assert_eq!(a.data, b.data, "shine below 0.05 must be suppressed");
    assert_ne!(a.data, c.data, "shine above threshold must draw");
}

#[test]
fn every_species_renders_without_feature_sub_records() {
    let species = [
        Species::Human,
        Species::Minotaur,
        Species::Phoenixkin,
        Species::Kitsune,
        Species::Dragonkin,
        Species::Dogpeople,
        Species::Catpeople,
        Species::Lizardpeople,
        Species::Birdpeople,
        Species::Fishpeople,
        Species::Centaur,
    ];
    for sp in species {
        let mut config = AvatarConfig::default();
        config.species = sp;
        // No sub-records supplied: neutral defaults must apply.
        let frame = render_avatar(&config, 128).unwrap();
        assert_eq!(frame.data.len(), 128 * 128 * 4);
    }
}

#[test]
fn zero_size_surface_is_rejected() {
    assert!(render_avatar(&AvatarConfig::default(), 0).is_err());
}
