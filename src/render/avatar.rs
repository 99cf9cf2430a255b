//! The avatar compositor: a fixed stack of layers painted onto a square
//! surface.
//!
//! Layer order is part of the visual contract:
//! background, hair (back), body, species features, face, skin shine,
//! makeup, tattoos, scars, piercings, cybernetics. Each layer is a free
//! function over `(scene, size, config)` with no knowledge of the other
//! layers; the compositor only sequences them. There is no randomness
//! anywhere in this pipeline — a fixed `(config, size)` renders
//! bit-identically every time.

use crate::assets::color::{darken, lighten};
use crate::config::model::{AvatarConfig, FacialMorphs, PupilType, ScarPlacement, Species};
use crate::config::palette::LIP_COLORS;
use crate::foundation::core::{Affine, BezPath, Rect};
use crate::foundation::error::NexusResult;
use crate::foundation::math::{lerp, morph};
use crate::render::paint::{radial_fade_image, solid, solid_alpha, white_alpha};
use crate::render::surface::{FrameRGBA, Scene, shape_to_path};

/// Vertical center of the face, as a fraction of the canvas side.
const FACE_CY: f64 = 0.32;

/// Glow tint for cybernetic overlays.
const CYBER_GLOW: &str = "#00ffd5";

/// Render `config` onto a square canvas of `size` pixels per side.
///
/// Total over any structurally valid config: the only error path is an
/// unusable surface size (0, or larger than the backend's u16 limit).
#[tracing::instrument(skip(config))]
pub fn render_avatar(config: &AvatarConfig, size: u32) -> NexusResult<FrameRGBA> {
    let mut scene = Scene::new(size)?;
    let s = f64::from(size);

    draw_background(&mut scene, s, &config.skin_color)?;
    draw_hair(&mut scene, s, config)?;
    draw_body(&mut scene, s, config)?;
    draw_species_features(&mut scene, s, config)?;
    draw_face(&mut scene, s, config)?;
    draw_skin_shine(&mut scene, s, config)?;
    draw_makeup(&mut scene, s, config)?;
    draw_tattoos(&mut scene, s, config)?;
    draw_scars(&mut scene, s, config)?;
    draw_piercings(&mut scene, s, config)?;
    draw_cybernetics(&mut scene, s, config)?;

    Ok(scene.finish())
}

// Shared face measurements. Several layers anchor to the head, so the
// mapping from sliders to head metrics lives in one place.

fn head_width(m: &FacialMorphs, s: f64) -> f64 {
    morph(m.face_width_at_cheeks, s * 0.22, s * 0.26, s * 0.31)
}

fn head_height(m: &FacialMorphs, s: f64) -> f64 {
    morph(m.forehead_height, s * 0.28, s * 0.32, s * 0.38)
}

fn eye_spacing(m: &FacialMorphs, head_w: f64) -> f64 {
    morph(m.eye_spacing, head_w * 0.12, head_w * 0.2, head_w * 0.3)
}

fn eye_size(m: &FacialMorphs, s: f64) -> f64 {
    morph(m.eye_size, s * 0.022, s * 0.03, s * 0.042)
}

fn draw_background(scene: &mut Scene, s: f64, skin_color: &str) -> NexusResult<()> {
    scene.fill_rect(Rect::new(0.0, 0.0, s, s), solid("#0a0a0a"));

    // Soft radial tint behind the figure, in the skin color.
    let radius = s * 0.5;
    let (image, side) = radial_fade_image(skin_color, f64::from(0x18u8) / 255.0, radius)?;
    let (cx, cy) = (s / 2.0, s * 0.4);
    scene.draw_image(image, cx - side / 2.0, cy - side / 2.0, side, side);
    Ok(())
}

fn draw_hair(scene: &mut Scene, s: f64, config: &AvatarConfig) -> NexusResult<()> {
    let cx = s / 2.0;
    let cy = s * FACE_CY;
    let m = &config.facial_morphs;
    let head_w = head_width(m, s);
    let head_h = head_height(m, s);
    let hair_l = config.hair.length;
    let color = solid(&config.hair.color);

    // Base hair mass behind the head.
    let hair_h = lerp(s * 0.05, s * 0.55, hair_l);
    scene.fill_shape(
        &kurbo::Ellipse::new(
            (cx, cy - head_h * 0.35),
            (head_w * 0.55, head_h * 0.45),
            0.0,
        ),
        color,
    );

    if hair_l > 0.2 {
        // Long hair falls in two side locks scaled by length.
        let mut left = BezPath::new();
        left.move_to((cx - head_w / 2.0, cy - head_h * 0.2));
        left.curve_to(
            (cx - head_w * 0.7, cy + hair_h * 0.3),
            (cx - head_w * 0.65, cy + hair_h * 0.7),
            (cx - head_w * 0.5, cy + hair_h),
        );
        left.line_to((cx - head_w * 0.3, cy + hair_h));
        left.curve_to(
            (cx - head_w * 0.4, cy + hair_h * 0.6),
            (cx - head_w * 0.45, cy + hair_h * 0.2),
            (cx - head_w * 0.4, cy),
        );
        left.close_path();
        scene.fill_path(&left, color);

        let mut right = BezPath::new();
        right.move_to((cx + head_w / 2.0, cy - head_h * 0.2));
        right.curve_to(
            (cx + head_w * 0.7, cy + hair_h * 0.3),
            (cx + head_w * 0.65, cy + hair_h * 0.7),
            (cx + head_w * 0.5, cy + hair_h),
        );
        right.line_to((cx + head_w * 0.3, cy + hair_h));
        right.curve_to(
            (cx + head_w * 0.4, cy + hair_h * 0.6),
            (cx + head_w * 0.45, cy + hair_h * 0.2),
            (cx + head_w * 0.4, cy),
        );
        right.close_path();
        scene.fill_path(&right, color);
    }

    // Alpha-blended highlight streak over the crown.
    scene.fill_shape(
        &kurbo::Ellipse::new(
            (cx - head_w * 0.12, cy - head_h * 0.42),
            (head_w * 0.08, head_h * 0.3),
            -0.2,
        ),
        solid_alpha(&config.hair.highlight_color, f64::from(0x60u8) / 255.0),
    );
    Ok(())
}

fn draw_body(scene: &mut Scene, s: f64, config: &AvatarConfig) -> NexusResult<()> {
    let cx = s / 2.0;
    let cy = s / 2.0;
    let body = &config.body;
    let skin = &config.skin_color;

    let height_mod = lerp(0.85, 1.15, body.height);
    let weight_mod = lerp(0.8, 1.2, body.weight);
    let muscle_mod = 1.0 + body.muscle_mass * 0.1;
    let shoulder_w =
        morph(body.shoulder_width, s * 0.28, s * 0.32, s * 0.38) * weight_mod * muscle_mod;
    let waist_w = morph(body.waist, s * 0.18, s * 0.22, s * 0.28) * weight_mod;
    let hip_w = morph(body.hips, s * 0.24, s * 0.28, s * 0.36) * weight_mod;
    let torso_h = s * 0.28 * height_mod;
    let leg_h = s * 0.30 * height_mod;
    let torso_top = cy - s * 0.05;

    match config.species {
        Species::Centaur => {
            // Equine hindquarters below a human upper torso.
            scene.fill_shape(
                &kurbo::Ellipse::new((cx, cy + s * 0.15), (hip_w * 1.4, leg_h * 0.6), 0.0),
                solid(&darken(skin, 20.0)),
            );
            scene.fill_path(&torso_quad(cx, torso_top, torso_h, shoulder_w, waist_w), solid(skin));
        }
        Species::Fishpeople => {
            scene.fill_path(&torso_quad(cx, torso_top, torso_h, shoulder_w, waist_w), solid(skin));

            // Tail fin continues the torso below the waist.
            let base = torso_top + torso_h;
            let mut tail = BezPath::new();
            tail.move_to((cx - waist_w / 2.0, base));
            tail.curve_to(
                (cx - waist_w, base + leg_h * 0.5),
                (cx - hip_w * 0.8, base + leg_h * 0.9),
                (cx, base + leg_h),
            );
            tail.curve_to(
                (cx + hip_w * 0.8, base + leg_h * 0.9),
                (cx + waist_w, base + leg_h * 0.5),
                (cx + waist_w / 2.0, base),
            );
            tail.close_path();
            scene.fill_path(&tail, solid(&darken(skin, 15.0)));
        }
        _ => {
            // Standard bipedal silhouette: shoulder -> waist -> hip taper.
            let mut torso = BezPath::new();
            torso.move_to((cx - shoulder_w / 2.0, torso_top));
            torso.line_to((cx + shoulder_w / 2.0, torso_top));
            torso.line_to((cx + waist_w / 2.0, torso_top + torso_h * 0.5));
            torso.line_to((cx + hip_w / 2.0, torso_top + torso_h));
            torso.line_to((cx - hip_w / 2.0, torso_top + torso_h));
            torso.line_to((cx - waist_w / 2.0, torso_top + torso_h * 0.5));
            torso.close_path();
            scene.fill_path(&torso, solid(skin));

            let bust_mod = morph(body.bust, s * 0.06, s * 0.07, s * 0.10);
            let thigh_w = morph(body.thigh, s * 0.09, s * 0.11, s * 0.15) * weight_mod;

            let legs = solid(&darken(skin, 10.0));
            scene.fill_rect(
                Rect::new(
                    cx - hip_w / 2.0,
                    torso_top + torso_h,
                    cx - hip_w / 2.0 + thigh_w,
                    torso_top + torso_h + leg_h,
                ),
                legs,
            );
            scene.fill_rect(
                Rect::new(
                    cx + hip_w / 2.0 - thigh_w,
                    torso_top + torso_h,
                    cx + hip_w / 2.0,
                    torso_top + torso_h + leg_h,
                ),
                legs,
            );

            let arms = solid(&darken(skin, 5.0));
            scene.fill_rect(
                Rect::new(
                    cx - shoulder_w / 2.0 - s * 0.06,
                    torso_top,
                    cx - shoulder_w / 2.0 - s * 0.06 + s * 0.07,
                    torso_top + torso_h * 0.85,
                ),
                arms,
            );
            scene.fill_rect(
                Rect::new(
                    cx + shoulder_w / 2.0 - s * 0.01,
                    torso_top,
                    cx + shoulder_w / 2.0 - s * 0.01 + s * 0.07,
                    torso_top + torso_h * 0.85,
                ),
                arms,
            );

            if body.bust > 0.1 {
                let bust = solid(&darken(skin, 8.0));
                scene.fill_shape(
                    &kurbo::Ellipse::new(
                        (cx - shoulder_w * 0.18, torso_top + torso_h * 0.3),
                        (bust_mod, bust_mod * 0.8),
                        0.0,
                    ),
                    bust,
                );
                scene.fill_shape(
                    &kurbo::Ellipse::new(
                        (cx + shoulder_w * 0.18, torso_top + torso_h * 0.3),
                        (bust_mod, bust_mod * 0.8),
                        0.0,
                    ),
                    bust,
                );
            }
        }
    }
    Ok(())
}

fn torso_quad(cx: f64, torso_top: f64, torso_h: f64, shoulder_w: f64, waist_w: f64) -> BezPath {
    let mut p = BezPath::new();
    p.move_to((cx - shoulder_w / 2.0, torso_top));
    p.line_to((cx + shoulder_w / 2.0, torso_top));
    p.line_to((cx + waist_w / 2.0, torso_top + torso_h));
    p.line_to((cx - waist_w / 2.0, torso_top + torso_h));
    p.close_path();
    p
}

fn draw_species_features(scene: &mut Scene, s: f64, config: &AvatarConfig) -> NexusResult<()> {
    let cx = s / 2.0;
    let cy = s / 2.0;
    let sf = &config.species_features;
    let skin = &config.skin_color;

    match config.species {
        Species::Phoenixkin | Species::Birdpeople => {
            // Absent sub-records fall back to the bundle's neutral defaults.
            let avian = sf.avian.clone().unwrap_or_default();
            let wing_size = lerp(0.3, 0.9, avian.wing_size);
            let wing_color = solid_alpha(&darken(skin, 30.0), f64::from(0x99u8) / 255.0);

            let mut left = BezPath::new();
            left.move_to((cx - s * 0.18, cy - s * 0.05));
            left.curve_to(
                (cx - s * wing_size, cy - s * 0.25),
                (cx - s * wing_size * 0.9, cy + s * 0.2),
                (cx - s * 0.15, cy + s * 0.1),
            );
            scene.fill_path(&left, wing_color);

            let mut right = BezPath::new();
            right.move_to((cx + s * 0.18, cy - s * 0.05));
            right.curve_to(
                (cx + s * wing_size, cy - s * 0.25),
                (cx + s * wing_size * 0.9, cy + s * 0.2),
                (cx + s * 0.15, cy + s * 0.1),
            );
            scene.fill_path(&right, wing_color);
        }
        Species::Catpeople | Species::Dogpeople | Species::Kitsune => {
            let fc = sf.felid_canid.clone().unwrap_or_default();
            let tail_color = if fc.fur_color.is_empty() {
                darken(skin, 20.0)
            } else {
                fc.fur_color.clone()
            };
            let tail_length = lerp(0.2, 0.5, 0.7);
            let mut tail = BezPath::new();
            tail.move_to((cx + s * 0.1, cy + s * 0.2));
            tail.curve_to(
                (cx + s * 0.35, cy + s * 0.15),
                (cx + s * tail_length, cy - s * 0.1),
                (cx + s * (tail_length - 0.05), cy - s * 0.2),
            );
            let width = if fc.fur_density > 0.5 { 10.0 } else { 6.0 };
            scene.stroke_path(&tail, solid(&tail_color), width);
        }
        Species::Dragonkin | Species::Lizardpeople => {
            let rp = sf.reptilian.clone().unwrap_or_default();
            let tail_color = if rp.scale_color.is_empty() {
                darken(skin, 20.0)
            } else {
                rp.scale_color.clone()
            };
            let mut tail = BezPath::new();
            tail.move_to((cx + s * 0.1, cy + s * 0.22));
            tail.curve_to(
                (cx + s * 0.35, cy + s * 0.28),
                (cx + s * 0.45, cy + s * 0.05),
                (cx + s * 0.4, cy - s * 0.1),
            );
            scene.stroke_path(&tail, solid(&tail_color), 8.0);
        }
        Species::Minotaur => {
            let mt = sf.minotaur.clone().unwrap_or_default();
            let horn_h = lerp(0.05, 0.18, mt.horn_size);
            let horn_curve = mt.horn_curve * s * 0.08;
            let horn = solid("#8b7355");
            let base_y = cy - s * 0.38;

            let mut left = BezPath::new();
            left.move_to((cx - s * 0.12, base_y));
            left.curve_to(
                (cx - s * 0.18 + horn_curve, base_y - s * horn_h),
                (cx - s * 0.22 + horn_curve, base_y - s * horn_h * 0.8),
                (cx - s * 0.2 + horn_curve, base_y - s * horn_h * 1.2),
            );
            scene.stroke_path(&left, horn, 6.0);

            let mut right = BezPath::new();
            right.move_to((cx + s * 0.12, base_y));
            right.curve_to(
                (cx + s * 0.18 - horn_curve, base_y - s * horn_h),
                (cx + s * 0.22 - horn_curve, base_y - s * horn_h * 0.8),
                (cx + s * 0.2 - horn_curve, base_y - s * horn_h * 1.2),
            );
            scene.stroke_path(&right, horn, 6.0);
        }
        // Aquatic and centaur bundles carry no feature-layer geometry:
        // the fish tail and hindquarters belong to the body layer.
        _ => {}
    }
    Ok(())
}

fn draw_face(scene: &mut Scene, s: f64, config: &AvatarConfig) -> NexusResult<()> {
    let cx = s / 2.0;
    let cy = s * FACE_CY;
    let m = &config.facial_morphs;
    let skin = &config.skin_color;

    let head_w = head_width(m, s);
    let head_h = head_height(m, s);
    let jaw_w = morph(m.jaw_width, s * 0.17, s * 0.22, s * 0.28);
    let chin_y = cy + head_h * 0.55;

    // Head silhouette through brow/cheek/jaw/chin anchors.
    let mut head = BezPath::new();
    head.move_to((cx - head_w / 2.0, cy - head_h * 0.3));
    head.curve_to(
        (cx - head_w / 2.0, cy - head_h * 0.7),
        (cx + head_w / 2.0, cy - head_h * 0.7),
        (cx + head_w / 2.0, cy - head_h * 0.3),
    );
    head.curve_to(
        (cx + head_w / 2.0, cy + head_h * 0.1),
        (cx + jaw_w / 2.0, cy + head_h * 0.4),
        (cx, chin_y),
    );
    head.curve_to(
        (cx - jaw_w / 2.0, cy + head_h * 0.4),
        (cx - head_w / 2.0, cy + head_h * 0.1),
        (cx - head_w / 2.0, cy - head_h * 0.3),
    );
    scene.fill_path(&head, solid(skin));
    scene.stroke_path(&head, solid(&darken(skin, 15.0)), 0.5);

    // Neck block under the chin.
    let neck_w = head_w * 0.35;
    scene.fill_rect(
        Rect::new(
            cx - neck_w / 2.0,
            chin_y - 2.0,
            cx + neck_w / 2.0,
            chin_y - 2.0 + s * 0.1,
        ),
        solid(&darken(skin, 8.0)),
    );

    // Ears.
    let ear_size = morph(m.ear_size, s * 0.04, s * 0.055, s * 0.075);
    let ear_pos_y = morph(m.ear_position, cy, cy - head_h * 0.1, cy - head_h * 0.2);
    let ear_color = solid(&darken(skin, 10.0));
    scene.fill_shape(
        &kurbo::Ellipse::new(
            (cx - head_w / 2.0 - ear_size * 0.4, ear_pos_y),
            (ear_size * 0.5, ear_size),
            0.0,
        ),
        ear_color,
    );
    scene.fill_shape(
        &kurbo::Ellipse::new(
            (cx + head_w / 2.0 + ear_size * 0.4, ear_pos_y),
            (ear_size * 0.5, ear_size),
            0.0,
        ),
        ear_color,
    );

    // Pointed-ear override for felid/canid species.
    if matches!(
        config.species,
        Species::Catpeople | Species::Dogpeople | Species::Kitsune
    ) {
        let mut left = BezPath::new();
        left.move_to((cx - head_w / 2.0 + head_w * 0.1, cy - head_h * 0.25));
        left.line_to((cx - head_w / 2.0 - head_w * 0.05, cy - head_h * 0.55));
        left.line_to((cx - head_w / 2.0 + head_w * 0.25, cy - head_h * 0.3));
        left.close_path();
        scene.fill_path(&left, ear_color);

        let mut right = BezPath::new();
        right.move_to((cx + head_w / 2.0 - head_w * 0.1, cy - head_h * 0.25));
        right.line_to((cx + head_w / 2.0 + head_w * 0.05, cy - head_h * 0.55));
        right.line_to((cx + head_w / 2.0 - head_w * 0.25, cy - head_h * 0.3));
        right.close_path();
        scene.fill_path(&right, ear_color);
    }

    // Brows.
    let brow_y = cy - head_h * 0.1;
    let brow_w = morph(m.brow_width, head_w * 0.22, head_w * 0.28, head_w * 0.36);
    let brow_h = morph(m.brow_height, -8.0, 0.0, 8.0);
    let brow_arch = morph(m.brow_arch, -4.0, 0.0, 8.0);
    let brow_color = solid(&darken(&config.hair.color, -10.0));
    let brow_width = morph(m.brow_width, 1.5, 2.0, 3.0).max(1.0);

    let mut left_brow = BezPath::new();
    left_brow.move_to((cx - head_w * 0.38, brow_y + brow_h));
    left_brow.quad_to(
        (cx - head_w * 0.2, brow_y + brow_h - brow_arch),
        (cx - head_w * 0.38 + brow_w, brow_y + brow_h + 3.0),
    );
    scene.stroke_path(&left_brow, brow_color, brow_width);

    let mut right_brow = BezPath::new();
    right_brow.move_to((cx + head_w * 0.38, brow_y + brow_h));
    right_brow.quad_to(
        (cx + head_w * 0.2, brow_y + brow_h - brow_arch),
        (cx + head_w * 0.38 - brow_w, brow_y + brow_h + 3.0),
    );
    scene.stroke_path(&right_brow, brow_color, brow_width);

    // Eyes.
    let spacing = eye_spacing(m, head_w);
    let e = eye_size(m, s);
    let tilt = morph(m.eye_tilt, -0.3, 0.0, 0.3);
    let eye_y = cy - head_h * 0.03;

    for side in [-1.0f64, 1.0] {
        let ex = cx + side * spacing;
        let local = Affine::translate((ex, eye_y)) * Affine::rotate(side * tilt);
        let iris_color = solid(&config.eyes.color);
        let crease_color = solid(&darken(skin, 20.0));
        let pupil_type = config.eyes.pupil_type;
        scene.with_transform(local, |sc| {
            sc.fill_shape(
                &kurbo::Ellipse::new((0.0, 0.0), (e * 1.4, e), 0.0),
                solid("#f8f8f0"),
            );
            sc.fill_shape(
                &kurbo::Ellipse::new((0.0, 0.0), (e * 0.85, e * 0.85), 0.0),
                iris_color,
            );

            // Pupil aspect ratio selects the silhouette.
            let pupil = solid("#111111");
            let (prx, pry) = match pupil_type {
                PupilType::Slit | PupilType::Goat => (e * 0.18, e * 0.65),
                PupilType::Void => (e * 0.8, e * 0.8),
                PupilType::Round | PupilType::Compound => (e * 0.45, e * 0.45),
            };
            sc.fill_shape(&kurbo::Ellipse::new((0.0, 0.0), (prx, pry), 0.0), pupil);

            sc.fill_shape(
                &kurbo::Circle::new((-e * 0.2, -e * 0.2), e * 0.15),
                white_alpha(0.7),
            );

            // Eyelid crease along the upper half.
            let crease = kurbo::Arc::new(
                (0.0, -e * 0.1),
                (e * 1.4, e),
                std::f64::consts::PI,
                std::f64::consts::PI,
                0.0,
            );
            sc.stroke_shape(&crease, crease_color, 0.8);
        });
    }

    // Nose.
    let nose_w = morph(m.nose_width, head_w * 0.08, head_w * 0.12, head_w * 0.18);
    let nose_l = morph(m.nose_length, s * 0.04, s * 0.055, s * 0.07);
    let nose_y = cy + head_h * 0.08;
    let mut nose = BezPath::new();
    nose.move_to((cx - nose_w * 0.3, nose_y));
    nose.curve_to(
        (cx - nose_w * 0.5, nose_y + nose_l * 0.5),
        (cx - nose_w * 0.5, nose_y + nose_l),
        (cx - nose_w * 0.4, nose_y + nose_l),
    );
    nose.curve_to(
        (cx - nose_w * 0.1, nose_y + nose_l * 1.05),
        (cx + nose_w * 0.1, nose_y + nose_l * 1.05),
        (cx + nose_w * 0.4, nose_y + nose_l),
    );
    nose.curve_to(
        (cx + nose_w * 0.5, nose_y + nose_l),
        (cx + nose_w * 0.5, nose_y + nose_l * 0.5),
        (cx + nose_w * 0.3, nose_y),
    );
    scene.stroke_path(&nose, solid(&darken(skin, 25.0)), 1.0);

    // Lips; color comes from the fixed palette, index modulo table length.
    let lip_y = cy + head_h * 0.22;
    let lip_full = morph(m.lip_fullness_upper, 3.0, 6.0, 11.0);
    let lip_bot = morph(m.lip_fullness_lower, 3.0, 7.0, 12.0);
    let lip_w = head_w * 0.38;
    let lip_color = solid(LIP_COLORS[(config.lip_type as usize) % LIP_COLORS.len()]);

    let mut upper = BezPath::new();
    upper.move_to((cx - lip_w / 2.0, lip_y));
    upper.curve_to(
        (cx - lip_w * 0.25, lip_y - lip_full),
        (cx - lip_w * 0.05, lip_y - lip_full * 1.2),
        (cx, lip_y - lip_full * 0.6),
    );
    upper.curve_to(
        (cx + lip_w * 0.05, lip_y - lip_full * 1.2),
        (cx + lip_w * 0.25, lip_y - lip_full),
        (cx + lip_w / 2.0, lip_y),
    );
    upper.close_path();
    scene.fill_path(&upper, lip_color);

    let mut lower = BezPath::new();
    lower.move_to((cx - lip_w / 2.0, lip_y));
    lower.curve_to(
        (cx - lip_w * 0.3, lip_y + lip_bot),
        (cx + lip_w * 0.3, lip_y + lip_bot),
        (cx + lip_w / 2.0, lip_y),
    );
    lower.close_path();
    scene.fill_path(&lower, lip_color);

    Ok(())
}

fn draw_skin_shine(scene: &mut Scene, s: f64, config: &AvatarConfig) -> NexusResult<()> {
    if config.skin_shine < 0.05 {
        return Ok(());
    }
    let cx = s / 2.0;
    let cy = s * 0.28;
    let radius = s * 0.25;
    let (image, side) = radial_fade_image("#ffffff", config.skin_shine * 0.35, radius)?;
    scene.draw_image(
        image,
        cx - s * 0.08 - side / 2.0,
        cy - s * 0.12 - side / 2.0,
        side,
        side,
    );
    Ok(())
}

fn draw_makeup(scene: &mut Scene, s: f64, config: &AvatarConfig) -> NexusResult<()> {
    let cx = s / 2.0;
    let cy = s * FACE_CY;
    let m = &config.facial_morphs;
    let mk = &config.makeup;
    let head_w = head_width(m, s);
    let spacing = eye_spacing(m, head_w);
    let e = eye_size(m, s);
    let eye_y = cy - s * 0.032 * 0.1;

    if mk.eyeshadow_density > 0.0 {
        let (image, side) =
            radial_fade_image(&mk.eyeshadow_color, mk.eyeshadow_density * 0.7, e * 2.5)?;
        for side_sign in [-1.0f64, 1.0] {
            let ex = cx + side_sign * spacing;
            let lid = shape_to_path(&kurbo::Ellipse::new(
                (ex, eye_y - e * 0.5),
                (e * 2.0, e * 1.5),
                0.0,
            ));
            scene.push_clip(&lid);
            scene.draw_image(
                image.clone(),
                ex - side / 2.0,
                eye_y - e - side / 2.0,
                side,
                side,
            );
            scene.pop_layer();
        }
    }

    if mk.blush_density > 0.0 {
        let (image, side) = radial_fade_image(&mk.blush_color, mk.blush_density * 0.5, e * 3.0)?;
        for side_sign in [-1.0f64, 1.0] {
            let bx = cx + side_sign * head_w * 0.32;
            let by = cy + s * 0.04;
            let cheek = shape_to_path(&kurbo::Ellipse::new((bx, by), (e * 2.5, e * 2.0), 0.0));
            scene.push_clip(&cheek);
            scene.draw_image(image.clone(), bx - side / 2.0, by - side / 2.0, side, side);
            scene.pop_layer();
        }
    }

    Ok(())
}

fn draw_tattoos(scene: &mut Scene, s: f64, config: &AvatarConfig) -> NexusResult<()> {
    // Body tattoos are flag-only: no geometry exists for them yet.
    if !config.tattoos.face {
        return Ok(());
    }
    let cx = s / 2.0;
    let cy = s * FACE_CY;

    // Tribal line under the left eye.
    let mut line = BezPath::new();
    line.move_to((cx - s * 0.08, cy + s * 0.02));
    line.line_to((cx - s * 0.12, cy + s * 0.06));
    line.line_to((cx - s * 0.1, cy + s * 0.09));
    scene.stroke_path(&line, solid_alpha("#1a1a2e", 0.35), 1.0);
    Ok(())
}

fn draw_scars(scene: &mut Scene, s: f64, config: &AvatarConfig) -> NexusResult<()> {
    if config.scars.is_empty() {
        return Ok(());
    }
    let cx = s / 2.0;
    let cy = s * FACE_CY;
    let color = solid_alpha(&lighten("#c0a0a0", 20.0), 0.5);

    for scar in &config.scars {
        // Only three placements have geometry; the rest are accepted but
        // render nothing.
        let mut stroke = BezPath::new();
        match scar.placement {
            ScarPlacement::LeftCheek => {
                stroke.move_to((cx - s * 0.12, cy + s * 0.01));
                stroke.line_to((cx - s * 0.06, cy + s * 0.07));
            }
            ScarPlacement::RightCheek => {
                stroke.move_to((cx + s * 0.12, cy + s * 0.01));
                stroke.line_to((cx + s * 0.06, cy + s * 0.07));
            }
            ScarPlacement::Forehead => {
                stroke.move_to((cx - s * 0.02, cy - s * 0.12));
                stroke.line_to((cx + s * 0.04, cy - s * 0.06));
            }
            _ => continue,
        }
        scene.stroke_path(&stroke, color, 1.5);
    }
    Ok(())
}

fn draw_piercings(scene: &mut Scene, s: f64, config: &AvatarConfig) -> NexusResult<()> {
    let cx = s / 2.0;
    let cy = s * FACE_CY;
    let m = &config.facial_morphs;
    let head_w = head_width(m, s);
    let p = &config.piercings;

    let metal = solid("#d0d0d0");
    let rim = solid("#a0a0a0");
    let stud = |scene: &mut Scene, x: f64, y: f64, r: f64| {
        let dot = kurbo::Circle::new((x, y), r);
        scene.fill_shape(&dot, metal);
        scene.stroke_shape(&dot, rim, 0.5);
    };

    if p.ears {
        let ear_h = morph(m.ear_position, cy, cy - head_w * 0.1, cy - head_w * 0.2);
        stud(scene, cx - head_w / 2.0 - s * 0.02, ear_h + s * 0.03, 3.0);
        stud(scene, cx + head_w / 2.0 + s * 0.02, ear_h + s * 0.03, 3.0);
    }
    if p.nose {
        stud(scene, cx + head_w * 0.08, cy + head_w * 0.2, 2.5);
    }
    if p.lip {
        stud(scene, cx - head_w * 0.05, cy + head_w * 0.32, 2.5);
    }
    if p.brow {
        stud(scene, cx + head_w * 0.22, cy - head_w * 0.14, 2.0);
    }
    Ok(())
}

fn draw_cybernetics(scene: &mut Scene, s: f64, config: &AvatarConfig) -> NexusResult<()> {
    let cx = s / 2.0;
    let cy = s / 2.0;
    let cyber = &config.cybernetics;
    let m = &config.facial_morphs;
    let body = &config.body;

    // The whole layer composites additively over the figure.
    scene.set_screen_blend(true);

    if cyber.eyes && cyber.eyes_intensity > 0 {
        let head_w = head_width(m, s);
        let spacing = eye_spacing(m, head_w);
        let e = eye_size(m, s);
        let eye_y = s * FACE_CY - s * 0.032 * 0.1;
        let alpha = f64::from(cyber.eyes_intensity.min(3)) / 3.0;

        for side in [-1.0f64, 1.0] {
            let ex = cx + side * spacing;
            // Glow halo, then the replacement pupil disk.
            scene.fill_shape(
                &kurbo::Circle::new((ex, eye_y), e * 1.2),
                solid_alpha("#00ffff", alpha * 0.15),
            );
            scene.fill_shape(
                &kurbo::Circle::new((ex, eye_y), e * 0.8),
                solid_alpha("#00ffff", alpha * 0.3),
            );
            scene.fill_shape(
                &kurbo::Circle::new((ex, eye_y), e * 0.4),
                solid_alpha("#00ffff", alpha),
            );
        }
    }

    let height_mod = lerp(0.85, 1.15, body.height);
    let weight_mod = lerp(0.8, 1.2, body.weight);
    let torso_top = cy - s * 0.05;
    let torso_h = s * 0.28 * height_mod;
    let leg_h = s * 0.30 * height_mod;
    let shoulder_w = morph(body.shoulder_width, s * 0.28, s * 0.32, s * 0.38);
    let hip_w = morph(body.hips, s * 0.24, s * 0.28, s * 0.36) * weight_mod;
    let thigh_w = morph(body.thigh, s * 0.09, s * 0.11, s * 0.15) * weight_mod;
    let head_w = head_width(m, s);
    let head_h = head_height(m, s);
    let face_cy = s * FACE_CY;

    let left_arm_x = cx - shoulder_w / 2.0 - s * 0.06;
    let right_arm_x = cx + shoulder_w / 2.0 - s * 0.01;

    if cyber.arms && cyber.arms_intensity > 0 {
        cyber_part(scene, left_arm_x, torso_top, s * 0.07, s * 0.22, cyber.arms_intensity);
        cyber_part(scene, right_arm_x, torso_top, s * 0.07, s * 0.22, cyber.arms_intensity);
    }

    if cyber.torso && cyber.torso_intensity > 0 {
        cyber_part(scene, cx - s * 0.14, cy - s * 0.08, s * 0.28, s * 0.22, cyber.torso_intensity);
    }

    if cyber.head && cyber.head_intensity > 0 {
        cyber_part(
            scene,
            cx - head_w / 2.0,
            face_cy - head_h * 0.7,
            head_w,
            head_h * 0.5,
            cyber.head_intensity,
        );
    }

    if cyber.ears && cyber.ears_intensity > 0 {
        let ear_y = morph(m.ear_position, face_cy, face_cy - head_h * 0.1, face_cy - head_h * 0.2);
        cyber_part(
            scene,
            cx - head_w / 2.0 - s * 0.05,
            ear_y - s * 0.03,
            s * 0.04,
            s * 0.06,
            cyber.ears_intensity,
        );
        cyber_part(
            scene,
            cx + head_w / 2.0 + s * 0.01,
            ear_y - s * 0.03,
            s * 0.04,
            s * 0.06,
            cyber.ears_intensity,
        );
    }

    if cyber.hands && cyber.hands_intensity > 0 {
        cyber_part(scene, left_arm_x, torso_top + s * 0.22, s * 0.07, s * 0.05, cyber.hands_intensity);
        cyber_part(scene, right_arm_x, torso_top + s * 0.22, s * 0.07, s * 0.05, cyber.hands_intensity);
    }

    if cyber.legs && cyber.legs_intensity > 0 {
        cyber_part(
            scene,
            cx - hip_w / 2.0,
            torso_top + torso_h,
            thigh_w,
            leg_h,
            cyber.legs_intensity,
        );
        cyber_part(
            scene,
            cx + hip_w / 2.0 - thigh_w,
            torso_top + torso_h,
            thigh_w,
            leg_h,
            cyber.legs_intensity,
        );
    }

    if cyber.feet && cyber.feet_intensity > 0 {
        cyber_part(
            scene,
            cx - hip_w / 2.0,
            torso_top + torso_h + leg_h,
            thigh_w,
            s * 0.04,
            cyber.feet_intensity,
        );
        cyber_part(
            scene,
            cx + hip_w / 2.0 - thigh_w,
            torso_top + torso_h + leg_h,
            thigh_w,
            s * 0.04,
            cyber.feet_intensity,
        );
    }

    scene.set_screen_blend(false);
    Ok(())
}

/// One glowing augment: a stroked rectangle plus an L-shaped circuit trace,
/// strength proportional to intensity / 3. Glow is layered low-alpha
/// strokes widening with intensity.
fn cyber_part(scene: &mut Scene, x: f64, y: f64, w: f64, h: f64, intensity: u8) {
    let intensity = intensity.min(3);
    if intensity == 0 {
        return;
    }
    let alpha = f64::from(intensity) / 3.0;
    let blur = f64::from(intensity) * 2.0;

    let frame = kurbo::Rect::new(x, y, x + w, y + h);
    scene.stroke_shape(&frame, solid_alpha(CYBER_GLOW, alpha * 0.12), 1.5 + blur * 2.0);
    scene.stroke_shape(&frame, solid_alpha(CYBER_GLOW, alpha * 0.25), 1.5 + blur);
    scene.stroke_shape(&frame, solid_alpha(CYBER_GLOW, alpha), 1.5);

    let mut trace = BezPath::new();
    trace.move_to((x + w * 0.2, y));
    trace.line_to((x + w * 0.2, y + h * 0.4));
    trace.line_to((x + w * 0.5, y + h * 0.4));
    scene.stroke_path(&trace, solid_alpha(CYBER_GLOW, alpha * 0.25), 1.5 + blur);
    scene.stroke_path(&trace, solid_alpha(CYBER_GLOW, alpha), 1.5);
}
