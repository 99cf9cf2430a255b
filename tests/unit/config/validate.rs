use super::*;

#[test]
fn default_config_validates() {
    assert!(validate_config(&AvatarConfig::default()).is_ok());
}

#[test]
fn rejects_wrong_version() {
    let config = AvatarConfig {
        version: 3,
        ..AvatarConfig::default()
    };
    let err = validate_config(&config).unwrap_err();
    assert!(err.contains("version"));
}

#[test]
fn rejects_malformed_hex() {
    let config = AvatarConfig {
        skin_color: "tan".to_owned(),
        ..AvatarConfig::default()
    };
    let err = validate_config(&config).unwrap_err();
    assert!(err.contains("skinColor"));
}

#[test]
fn rejects_out_of_range_unit_slider() {
    let mut config = AvatarConfig::default();
    config.skin_shine = 1.5;
    assert!(validate_config(&config).is_err());

    let mut config = AvatarConfig::default();
    config.body.weight = -0.1;
    assert!(validate_config(&config).is_err());
}

#[test]
fn rejects_non_finite_signed_slider() {
    let mut config = AvatarConfig::default();
    config.facial_morphs.jaw_width = f64::NAN;
    assert!(validate_config(&config).is_err());
}

#[test]
fn rejects_intensity_above_three() {
    let mut config = AvatarConfig::default();
    config.cybernetics.torso_intensity = 4;
    let err = validate_config(&config).unwrap_err();
    assert!(err.contains("torsoIntensity"));
}
