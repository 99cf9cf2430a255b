use super::*;
use crate::config::palette::{EYE_COLORS, LIP_COLORS, LIP_TYPES, NAIL_TYPES, SKIN_PALETTE};

#[test]
fn default_config_matches_editor_defaults() {
    let config = AvatarConfig::default();
    assert_eq!(config.version, 2);
    assert_eq!(config.species, Species::Human);
    assert_eq!(config.gender, Gender::Androgynous);
    assert_eq!(config.skin_color, "#c8a882");
    assert_eq!(config.skin_shine, 0.3);
    assert_eq!(config.body.height, 0.5);
    assert_eq!(config.body.weight, 0.5);
    assert_eq!(config.facial_morphs, FacialMorphs::default());
    assert_eq!(config.facial_morphs.jaw_width, 0.0);
    assert_eq!(config.hair.length, 0.5);
    assert_eq!(config.hair.color, "#1a1a1a");
    assert_eq!(config.eyes.pupil_type, PupilType::Round);
    assert_eq!(config.lip_type, 0);
    assert!(config.scars.is_empty());
    assert!(!config.cybernetics.arms);
    assert!(config.species_features.avian.is_none());
    assert!(!config.accessories.head.enabled);
    assert_eq!(config.accessories.head.id, "none");
}

#[test]
fn palette_sizes_are_contractual() {
    assert_eq!(SKIN_PALETTE.len(), 80);
    assert_eq!(EYE_COLORS.len(), 32);
    assert_eq!(LIP_COLORS.len(), 18);
    assert_eq!(LIP_TYPES.len(), 18);
    assert_eq!(NAIL_TYPES.len(), 18);
}

#[test]
fn json_round_trip_preserves_config() {
    let mut config = AvatarConfig::default();
    config.species = Species::Kitsune;
    config.scars.push(ScarConfig {
        kind: ScarType::Slash,
        placement: ScarPlacement::LeftCheek,
    });
    config.species_features.felid_canid = Some(FelidCanidFeatures::default());
    config.cybernetics.arms = true;
    config.cybernetics.arms_intensity = 2;

    let json = config.to_json().unwrap();
    let parsed = AvatarConfig::from_json(&json).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn wire_shape_is_camel_case() {
    let mut config = AvatarConfig::default();
    config.scars.push(ScarConfig {
        kind: ScarType::Ritual,
        placement: ScarPlacement::Forehead,
    });
    let value: serde_json::Value =
        serde_json::from_str(&config.to_json().unwrap()).unwrap();

    assert_eq!(value["species"], "human");
    assert_eq!(value["gender"], "androgynous");
    assert!(value["facialMorphs"]["browHeight"].is_number());
    assert!(value["facialMorphs"]["faceWidthAtCheeks"].is_number());
    assert_eq!(value["skinColor"], "#c8a882");
    assert!(value["lipType"].is_number());
    assert_eq!(value["scars"][0]["type"], "ritual");
    assert_eq!(value["scars"][0]["placement"], "forehead");
    assert!(value["cybernetics"]["armsIntensity"].is_number());
    assert!(value["accessories"]["leftHand"]["enabled"].is_boolean());
    // Absent sub-records stay off the wire entirely.
    assert!(value["speciesFeatures"].get("avian").is_none());
}

#[test]
fn missing_morph_field_is_an_error() {
    let mut value: serde_json::Value =
        serde_json::from_str(&AvatarConfig::default().to_json().unwrap()).unwrap();
    value["facialMorphs"]
        .as_object_mut()
        .unwrap()
        .remove("jawWidth");
    let err = AvatarConfig::from_json(&value.to_string());
    assert!(err.is_err(), "config without jawWidth must not parse");
}

#[test]
fn partial_species_features_object_parses() {
    let mut value: serde_json::Value =
        serde_json::from_str(&AvatarConfig::default().to_json().unwrap()).unwrap();
    value["speciesFeatures"] = serde_json::json!({
        "minotaur": {
            "hornSize": 0.8,
            "hornCurve": -0.2,
            "maneLength": 0.4,
            "maneColor": "#3a2a1a",
            "hoofType": "cloven",
            "furDensity": 0.6,
            "furColor": "#8b7355",
            "tail": true,
            "fangSize": 0.1,
            "snoutProminence": 0.7,
            "cyberHorns": false,
            "cyberHooves": false
        }
    });
    let parsed = AvatarConfig::from_json(&value.to_string()).unwrap();
    let mt = parsed.species_features.minotaur.unwrap();
    assert_eq!(mt.horn_size, 0.8);
    assert_eq!(mt.horn_curve, -0.2);
    assert!(parsed.species_features.avian.is_none());
}
