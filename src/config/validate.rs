//! Boundary validation for [`AvatarConfig`] values arriving as JSON.
//!
//! The render path never requires this: the compositors are total over any
//! structurally valid config. Validation exists for callers that ingest
//! untrusted payloads and want shape errors before persisting them.

use crate::config::model::AvatarConfig;

pub(crate) fn validate_config(config: &AvatarConfig) -> Result<(), String> {
    if config.version != 2 {
        return Err(format!(
            "unsupported avatar config version {} (expected 2)",
            config.version
        ));
    }

    check_hex("skinColor", &config.skin_color)?;
    check_hex("hair.color", &config.hair.color)?;
    check_hex("hair.highlightColor", &config.hair.highlight_color)?;
    check_hex("hair.beardColor", &config.hair.beard_color)?;
    check_hex("eyes.color", &config.eyes.color)?;
    check_hex("makeup.eyeshadowColor", &config.makeup.eyeshadow_color)?;
    check_hex("makeup.blushColor", &config.makeup.blush_color)?;

    check_unit("skinShine", config.skin_shine)?;
    check_unit("body.height", config.body.height)?;
    check_unit("body.weight", config.body.weight)?;
    check_unit("hair.length", config.hair.length)?;
    check_unit("makeup.eyeshadowDensity", config.makeup.eyeshadow_density)?;
    check_unit("makeup.blushDensity", config.makeup.blush_density)?;

    for (name, v) in signed_sliders(config) {
        if !v.is_finite() {
            return Err(format!("slider '{name}' must be finite"));
        }
    }

    let cyber = &config.cybernetics;
    for (name, level) in [
        ("armsIntensity", cyber.arms_intensity),
        ("eyesIntensity", cyber.eyes_intensity),
        ("earsIntensity", cyber.ears_intensity),
        ("handsIntensity", cyber.hands_intensity),
        ("legsIntensity", cyber.legs_intensity),
        ("feetIntensity", cyber.feet_intensity),
        ("torsoIntensity", cyber.torso_intensity),
        ("headIntensity", cyber.head_intensity),
    ] {
        if level > 3 {
            return Err(format!("cybernetics.{name} must be 0-3, got {level}"));
        }
    }

    for (slot, item) in [
        ("head", &config.accessories.head),
        ("face", &config.accessories.face),
        ("neck", &config.accessories.neck),
        ("torso", &config.accessories.torso),
        ("waist", &config.accessories.waist),
        ("legs", &config.accessories.legs),
        ("feet", &config.accessories.feet),
        ("leftHand", &config.accessories.left_hand),
        ("rightHand", &config.accessories.right_hand),
        ("back", &config.accessories.back),
    ] {
        check_hex(&format!("accessories.{slot}.color"), &item.color)?;
    }

    Ok(())
}

fn check_hex(field: &str, hex: &str) -> Result<(), String> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() == 6 && digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        Ok(())
    } else {
        Err(format!("field '{field}' must be a #rrggbb hex color, got '{hex}'"))
    }
}

fn check_unit(field: &str, v: f64) -> Result<(), String> {
    if v.is_finite() && (0.0..=1.0).contains(&v) {
        Ok(())
    } else {
        Err(format!("field '{field}' must be in [0, 1], got {v}"))
    }
}

fn signed_sliders(config: &AvatarConfig) -> Vec<(&'static str, f64)> {
    let m = &config.facial_morphs;
    let b = &config.body;
    vec![
        ("browHeight", m.brow_height),
        ("browWidth", m.brow_width),
        ("browArch", m.brow_arch),
        ("browInnerAngle", m.brow_inner_angle),
        ("browOuterAngle", m.brow_outer_angle),
        ("eyeSize", m.eye_size),
        ("eyeSpacing", m.eye_spacing),
        ("eyeTilt", m.eye_tilt),
        ("eyeDepth", m.eye_depth),
        ("upperEyelidCurve", m.upper_eyelid_curve),
        ("lowerEyelidCurve", m.lower_eyelid_curve),
        ("infraorbitalPuff", m.infraorbital_puff),
        ("orbitalRim", m.orbital_rim),
        ("noseWidth", m.nose_width),
        ("noseLength", m.nose_length),
        ("noseBridge", m.nose_bridge),
        ("nasalTipProjection", m.nasal_tip_projection),
        ("alaWidth", m.ala_width),
        ("jawWidth", m.jaw_width),
        ("jawRoundness", m.jaw_roundness),
        ("mandibleAngle", m.mandible_angle),
        ("chinProjection", m.chin_projection),
        ("mentalProjection", m.mental_projection),
        ("cheekboneProminence", m.cheekbone_prominence),
        ("zygomaticArch", m.zygomatic_arch),
        ("templeWidth", m.temple_width),
        ("lipFullnessUpper", m.lip_fullness_upper),
        ("lipFullnessLower", m.lip_fullness_lower),
        ("foreheadHeight", m.forehead_height),
        ("philtrumLength", m.philtrum_length),
        ("earSize", m.ear_size),
        ("earPosition", m.ear_position),
        ("faceWidthAtEyes", m.face_width_at_eyes),
        ("faceWidthAtCheeks", m.face_width_at_cheeks),
        ("faceWidthAtJaw", m.face_width_at_jaw),
        ("muscleMass", b.muscle_mass),
        ("bust", b.bust),
        ("waist", b.waist),
        ("hips", b.hips),
        ("shoulderWidth", b.shoulder_width),
        ("thigh", b.thigh),
        ("butt", b.butt),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/config/validate.rs"]
mod tests;
