//! Wire-shape tests for the `avatar_config` JSON contract: the profile API
//! returns it on GET and accepts `{"avatar_config": ...}` on save.

use nexus_avatar::AvatarConfig;
use serde::Deserialize;

#[derive(Deserialize)]
struct SaveBody {
    avatar_config: AvatarConfig,
}

#[derive(Deserialize)]
struct ProfileResponse {
    username: String,
    #[serde(default)]
    avatar_config: Option<AvatarConfig>,
}

#[test]
fn save_body_shape_parses() {
    let body = format!(
        r#"{{"avatar_config": {}}}"#,
        AvatarConfig::default().to_json().unwrap()
    );
    let parsed: SaveBody = serde_json::from_str(&body).unwrap();
    assert_eq!(parsed.avatar_config, AvatarConfig::default());
}

#[test]
fn profile_response_with_and_without_config() {
    let with = format!(
        r#"{{"username": "alice", "avatar_config": {}}}"#,
        AvatarConfig::default().to_json().unwrap()
    );
    let parsed: ProfileResponse = serde_json::from_str(&with).unwrap();
    assert_eq!(parsed.username, "alice");
    assert!(parsed.avatar_config.is_some());

    let without = r#"{"username": "bob"}"#;
    let parsed: ProfileResponse = serde_json::from_str(without).unwrap();
    assert!(parsed.avatar_config.is_none());
}

#[test]
fn editor_authored_literal_parses() {
    // A hand-written payload in the editor's exact camelCase shape, with a
    // species sub-record, scars and cybernetics present.
    let json = r##"{
        "version": 2,
        "species": "kitsune",
        "gender": "feminine",
        "facialMorphs": {
            "browHeight": 0.1, "browWidth": 0.0, "browArch": -0.2,
            "browInnerAngle": 0.0, "browOuterAngle": 0.0,
            "eyeSize": 0.3, "eyeSpacing": 0.0, "eyeTilt": 0.4,
            "eyeDepth": 0.0, "upperEyelidCurve": 0.0, "lowerEyelidCurve": 0.0,
            "infraorbitalPuff": 0.0, "orbitalRim": 0.0,
            "noseWidth": -0.1, "noseLength": 0.0, "noseBridge": 0.0,
            "nasalTipProjection": 0.0, "alaWidth": 0.0,
            "jawWidth": -0.3, "jawRoundness": 0.0, "mandibleAngle": 0.0,
            "chinProjection": 0.0, "mentalProjection": 0.0,
            "cheekboneProminence": 0.5, "zygomaticArch": 0.0, "templeWidth": 0.0,
            "lipFullnessUpper": 0.2, "lipFullnessLower": 0.1,
            "foreheadHeight": 0.0, "philtrumLength": 0.0,
            "earSize": 0.2, "earPosition": 0.0,
            "faceWidthAtEyes": 0.0, "faceWidthAtCheeks": -0.1, "faceWidthAtJaw": 0.0
        },
        "body": {
            "height": 0.6, "weight": 0.4, "muscleMass": 0.2,
            "bust": 0.3, "waist": -0.2, "hips": 0.1,
            "shoulderWidth": -0.1, "thigh": 0.0, "butt": 0.0
        },
        "skinColor": "#e8b89a",
        "skinShine": 0.4,
        "hair": {
            "length": 0.8, "shape": "wavy", "color": "#d46a9f",
            "highlightColor": "#ffb7d9", "beardLength": 0.0, "beardColor": "#1a1a1a"
        },
        "eyes": { "color": "#ffd700", "pupilType": "slit" },
        "lipType": 14,
        "nailType": 4,
        "makeup": {
            "eyeshadowColor": "#8060a0", "eyeshadowDensity": 0.6,
            "blushColor": "#ff9999", "blushDensity": 0.3,
            "contour": 0.0, "highlight": 0.0, "linerStyle": "dramatic"
        },
        "tattoos": {
            "face": true, "faceStyle": "tribal", "body": false,
            "bodyStyle": "", "gangMarking": false, "gangMarkingStyle": ""
        },
        "scars": [
            { "type": "slash", "placement": "left_cheek" },
            { "type": "ritual", "placement": "chest" }
        ],
        "piercings": { "ears": true, "nose": false, "lip": false, "brow": true },
        "cybernetics": {
            "arms": true, "armsIntensity": 2,
            "eyes": false, "eyesIntensity": 0,
            "ears": false, "earsIntensity": 0,
            "hands": false, "handsIntensity": 0,
            "legs": false, "legsIntensity": 0,
            "feet": false, "feetIntensity": 0,
            "torso": false, "torsoIntensity": 0,
            "head": false, "headIntensity": 0
        },
        "speciesFeatures": {
            "felidCanid": {
                "furDensity": 0.7, "furColor": "#d4915f", "whiskers": true,
                "clawLength": 0.4, "tailType": "bushy", "tailLength": 0.9,
                "earPosition": 0.2, "cyberClaws": false, "cyberTail": false
            }
        },
        "accessories": {
            "head": { "id": "none", "color": "#888888", "style": "default", "enabled": false },
            "face": { "id": "visor", "color": "#22ffcc", "style": "wrap", "enabled": true },
            "neck": { "id": "none", "color": "#888888", "style": "default", "enabled": false },
            "torso": { "id": "none", "color": "#888888", "style": "default", "enabled": false },
            "waist": { "id": "none", "color": "#888888", "style": "default", "enabled": false },
            "legs": { "id": "none", "color": "#888888", "style": "default", "enabled": false },
            "feet": { "id": "none", "color": "#888888", "style": "default", "enabled": false },
            "leftHand": { "id": "none", "color": "#888888", "style": "default", "enabled": false },
            "rightHand": { "id": "none", "color": "#888888", "style": "default", "enabled": false },
            "back": { "id": "none", "color": "#888888", "style": "default", "enabled": false }
        }
    }"##;

    let config = AvatarConfig::from_json(json).unwrap();
    config.validate().unwrap();
    assert_eq!(config.species, nexus_avatar::Species::Kitsune);
    assert_eq!(config.lip_type, 14);
    assert_eq!(config.scars.len(), 2);
    assert!(config.tattoos.face);
    let fc = config.species_features.felid_canid.as_ref().unwrap();
    assert_eq!(fc.fur_color, "#d4915f");
    assert!(config.accessories.face.enabled);

    // The parsed config renders like any other.
    let frame = nexus_avatar::render_avatar(&config, 128).unwrap();
    assert_eq!(frame.data.len(), 128 * 128 * 4);
}

#[test]
fn round_trip_preserves_the_wire_value() {
    let json = AvatarConfig::default().to_json().unwrap();
    let a: serde_json::Value = serde_json::from_str(&json).unwrap();
    let reparsed = AvatarConfig::from_json(&json).unwrap();
    let b: serde_json::Value = serde_json::from_str(&reparsed.to_json().unwrap()).unwrap();
    assert_eq!(a, b);
}
