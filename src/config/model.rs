use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::validate::validate_config;
use crate::foundation::error::{NexusError, NexusResult};

/// The closed set of playable species.
///
/// The variant selects the body-plan branch and which optional
/// species-feature sub-record the renderers consult.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    /// Baseline bipedal body plan.
    Human,
    /// Bipedal with horns; consults [`MinotaurFeatures`].
    Minotaur,
    /// Avian; consults [`AvianFeatures`].
    Phoenixkin,
    /// Felid/canid; consults [`FelidCanidFeatures`].
    Kitsune,
    /// Reptilian; consults [`ReptilianFeatures`].
    Dragonkin,
    /// Felid/canid; consults [`FelidCanidFeatures`].
    Dogpeople,
    /// Felid/canid; consults [`FelidCanidFeatures`].
    Catpeople,
    /// Reptilian; consults [`ReptilianFeatures`].
    Lizardpeople,
    /// Avian; consults [`AvianFeatures`].
    Birdpeople,
    /// Finned body plan; consults [`AquaticFeatures`].
    Fishpeople,
    /// Equine lower body; consults [`CentaurFeatures`].
    Centaur,
}

/// Cosmetic gender classification; does not affect geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Masculine presentation.
    Masculine,
    /// Feminine presentation.
    Feminine,
    /// Androgynous presentation.
    Androgynous,
    /// Any other presentation.
    Other,
}

/// Hair shape variants (data-only in the current renderer).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HairShape {
    /// Straight strands.
    Straight,
    /// Loose waves.
    Wavy,
    /// Tight curls.
    Curly,
    /// Coiled texture.
    Coils,
    /// Locs.
    Locs,
}

/// Pupil silhouette drawn inside the iris.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PupilType {
    /// Circular pupil.
    Round,
    /// Vertical slit.
    Slit,
    /// Horizontal goat pupil (drawn with the slit silhouette).
    Goat,
    /// Compound eye (drawn with the round silhouette).
    Compound,
    /// Near-total void covering most of the iris.
    Void,
}

/// Eyeliner style (data-only in the current renderer).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinerStyle {
    /// No liner.
    None,
    /// Thin line.
    Thin,
    /// Dramatic wing.
    Dramatic,
    /// Lower lid only.
    Lower,
    /// Full wrap.
    Full,
}

/// Scar variety.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScarType {
    /// A straight slash.
    Slash,
    /// A burn mark.
    Burn,
    /// A deliberate ritual cut.
    Ritual,
}

/// Where a scar sits. Only `left_cheek`, `right_cheek` and `forehead`
/// currently have geometry; the remaining placements are accepted but
/// render nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScarPlacement {
    /// Left cheek (rendered).
    LeftCheek,
    /// Right cheek (rendered).
    RightCheek,
    /// Forehead (rendered).
    Forehead,
    /// Chin (inert).
    Chin,
    /// Neck (inert).
    Neck,
    /// Chest (inert).
    Chest,
    /// Left arm (inert).
    LeftArm,
    /// Right arm (inert).
    RightArm,
    /// Abdomen (inert).
    Abdomen,
    /// Back (inert).
    Back,
}

/// Talon shape for avian species (data-only).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TalonType {
    /// Sharp points.
    Sharp,
    /// Curved hooks.
    Curved,
    /// Blunt nails.
    Blunt,
}

/// Beak silhouette for avian species (data-only).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BeakShape {
    /// Hooked raptor beak.
    Hooked,
    /// Straight beak.
    Straight,
    /// Wide beak.
    Wide,
}

/// Tail variety for felid/canid species (data-only).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TailType {
    /// Long and thin.
    Long,
    /// Bushy.
    Bushy,
    /// Short stub.
    Stub,
    /// Ringed pattern.
    Ringed,
}

/// Scale texture for reptilian/aquatic species (data-only).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalePattern {
    /// Smooth scales.
    Smooth,
    /// Keeled ridges.
    Keeled,
    /// Large plates.
    Plated,
    /// Diamond pattern.
    Diamond,
    /// Iridescent sheen.
    Iridescent,
    /// Spotted.
    Spotted,
    /// Striped.
    Striped,
}

/// Claw variety for reptilian species (data-only).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClawType {
    /// Sharp claws.
    Sharp,
    /// Blunt claws.
    Blunt,
    /// Retractile claws.
    Retractile,
}

/// Fin placement for aquatic species (data-only).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FinType {
    /// Pectoral fins only.
    Pectoral,
    /// Caudal fin only.
    Caudal,
    /// Both.
    Both,
}

/// Tail fin silhouette for aquatic species (data-only).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TailShape {
    /// Fan-shaped.
    Fan,
    /// Forked.
    Forked,
    /// Pointed.
    Pointed,
}

/// Hoof variety for minotaur/centaur species (data-only).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HoofType {
    /// Cloven hooves.
    Cloven,
    /// Solid hooves.
    Solid,
    /// Feathered fetlocks.
    Feathered,
}

/// The 35 facial sliders, each a signed normalized value in `[-1, 1]`.
///
/// Every field is required on deserialization — the renderer has no
/// fallback for missing morphs. Each slider maps through
/// [`morph`](crate::morph) to a pixel-space measurement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacialMorphs {
    /// Brow vertical offset.
    pub brow_height: f64,
    /// Brow length.
    pub brow_width: f64,
    /// Brow arch depth.
    pub brow_arch: f64,
    /// Inner brow angle (data-only).
    pub brow_inner_angle: f64,
    /// Outer brow angle (data-only).
    pub brow_outer_angle: f64,
    /// Eye size.
    pub eye_size: f64,
    /// Distance between eyes.
    pub eye_spacing: f64,
    /// Eye rotation.
    pub eye_tilt: f64,
    /// Eye depth (data-only).
    pub eye_depth: f64,
    /// Upper eyelid curve (data-only).
    pub upper_eyelid_curve: f64,
    /// Lower eyelid curve (data-only).
    pub lower_eyelid_curve: f64,
    /// Infraorbital puffiness (data-only).
    pub infraorbital_puff: f64,
    /// Orbital rim prominence (data-only).
    pub orbital_rim: f64,
    /// Nose width.
    pub nose_width: f64,
    /// Nose length.
    pub nose_length: f64,
    /// Nose bridge height (data-only).
    pub nose_bridge: f64,
    /// Nasal tip projection (data-only).
    pub nasal_tip_projection: f64,
    /// Ala width (data-only).
    pub ala_width: f64,
    /// Jaw width.
    pub jaw_width: f64,
    /// Jaw roundness (data-only).
    pub jaw_roundness: f64,
    /// Mandible angle (data-only).
    pub mandible_angle: f64,
    /// Chin projection (data-only).
    pub chin_projection: f64,
    /// Mental protuberance projection (data-only).
    pub mental_projection: f64,
    /// Cheekbone prominence (data-only).
    pub cheekbone_prominence: f64,
    /// Zygomatic arch width (data-only).
    pub zygomatic_arch: f64,
    /// Temple width (data-only).
    pub temple_width: f64,
    /// Upper lip fullness.
    pub lip_fullness_upper: f64,
    /// Lower lip fullness.
    pub lip_fullness_lower: f64,
    /// Forehead height; drives overall head height.
    pub forehead_height: f64,
    /// Philtrum length (data-only).
    pub philtrum_length: f64,
    /// Ear size.
    pub ear_size: f64,
    /// Ear vertical position.
    pub ear_position: f64,
    /// Face width at eye level (data-only).
    pub face_width_at_eyes: f64,
    /// Face width at the cheeks; drives overall head width.
    pub face_width_at_cheeks: f64,
    /// Face width at the jaw (data-only).
    pub face_width_at_jaw: f64,
}

/// Body sliders. `height` and `weight` are unsigned `[0, 1]` multiplicative
/// modifiers; the rest are signed `[-1, 1]` morphs.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyMorphs {
    /// Overall height modifier in `[0, 1]`.
    pub height: f64,
    /// Overall weight modifier in `[0, 1]`.
    pub weight: f64,
    /// Muscle mass in `[-1, 1]`.
    pub muscle_mass: f64,
    /// Bust size in `[-1, 1]`; geometry appears above `0.1`.
    pub bust: f64,
    /// Waist width in `[-1, 1]` (negative narrows).
    pub waist: f64,
    /// Hip width in `[-1, 1]`.
    pub hips: f64,
    /// Shoulder width in `[-1, 1]`.
    pub shoulder_width: f64,
    /// Thigh width in `[-1, 1]`.
    pub thigh: f64,
    /// Glute size in `[-1, 1]` (data-only).
    pub butt: f64,
}

impl Default for BodyMorphs {
    fn default() -> Self {
        Self {
            height: 0.5,
            weight: 0.5,
            muscle_mass: 0.0,
            bust: 0.0,
            waist: 0.0,
            hips: 0.0,
            shoulder_width: 0.0,
            thigh: 0.0,
            butt: 0.0,
        }
    }
}

/// Hair configuration. Beard fields are data-only in the current renderer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HairConfig {
    /// Hair length in `[0, 1]`; side locks appear above `0.2`.
    pub length: f64,
    /// Hair shape variant.
    pub shape: HairShape,
    /// Hair color hex.
    pub color: String,
    /// Highlight streak color hex.
    pub highlight_color: String,
    /// Beard length in `[0, 1]` (0 = none).
    pub beard_length: f64,
    /// Beard color hex.
    pub beard_color: String,
}

impl Default for HairConfig {
    fn default() -> Self {
        Self {
            length: 0.5,
            shape: HairShape::Straight,
            color: "#1a1a1a".to_owned(),
            highlight_color: "#333333".to_owned(),
            beard_length: 0.0,
            beard_color: "#1a1a1a".to_owned(),
        }
    }
}

/// Eye configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EyeConfig {
    /// Iris color hex.
    pub color: String,
    /// Pupil silhouette.
    pub pupil_type: PupilType,
}

impl Default for EyeConfig {
    fn default() -> Self {
        Self {
            color: "#4a7c59".to_owned(),
            pupil_type: PupilType::Round,
        }
    }
}

/// Makeup configuration. `contour`, `highlight` and `linerStyle` are
/// data-only in the current renderer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MakeupConfig {
    /// Eyeshadow color hex.
    pub eyeshadow_color: String,
    /// Eyeshadow opacity driver in `[0, 1]`; 0 disables the layer.
    pub eyeshadow_density: f64,
    /// Blush color hex.
    pub blush_color: String,
    /// Blush opacity driver in `[0, 1]`; 0 disables the layer.
    pub blush_density: f64,
    /// Contour strength in `[0, 1]` (data-only).
    pub contour: f64,
    /// Highlight strength in `[0, 1]` (data-only).
    pub highlight: f64,
    /// Liner style (data-only).
    pub liner_style: LinerStyle,
}

impl Default for MakeupConfig {
    fn default() -> Self {
        Self {
            eyeshadow_color: "#000000".to_owned(),
            eyeshadow_density: 0.0,
            blush_color: "#ff9999".to_owned(),
            blush_density: 0.0,
            contour: 0.0,
            highlight: 0.0,
            liner_style: LinerStyle::None,
        }
    }
}

/// Tattoo flags. Only `face` has geometry; `body` and `gangMarking` are
/// flag-only by design.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TattooConfig {
    /// Draw the fixed face tattoo stroke.
    pub face: bool,
    /// Face tattoo style name.
    pub face_style: String,
    /// Body tattoo flag (no geometry).
    pub body: bool,
    /// Body tattoo style name.
    pub body_style: String,
    /// Gang marking flag (no geometry).
    pub gang_marking: bool,
    /// Gang marking style name.
    pub gang_marking_style: String,
}

/// A single scar entry; order in the list is draw order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScarConfig {
    /// Scar variety.
    #[serde(rename = "type")]
    pub kind: ScarType,
    /// Scar placement.
    pub placement: ScarPlacement,
}

/// Piercing flags, each a fixed-position metallic dot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PiercingConfig {
    /// Ear studs.
    pub ears: bool,
    /// Nose stud.
    pub nose: bool,
    /// Lip stud.
    pub lip: bool,
    /// Brow stud.
    pub brow: bool,
}

/// Cybernetic augmentation per body region.
///
/// Intensity levels are 0–3 and are meaningless when the matching boolean
/// is false: the renderer must ignore them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CyberneticsConfig {
    /// Arm augments present.
    pub arms: bool,
    /// Arm glow intensity 0–3.
    pub arms_intensity: u8,
    /// Eye augments present.
    pub eyes: bool,
    /// Eye glow intensity 0–3.
    pub eyes_intensity: u8,
    /// Ear augments present.
    pub ears: bool,
    /// Ear glow intensity 0–3.
    pub ears_intensity: u8,
    /// Hand augments present.
    pub hands: bool,
    /// Hand glow intensity 0–3.
    pub hands_intensity: u8,
    /// Leg augments present.
    pub legs: bool,
    /// Leg glow intensity 0–3.
    pub legs_intensity: u8,
    /// Foot augments present.
    pub feet: bool,
    /// Foot glow intensity 0–3.
    pub feet_intensity: u8,
    /// Torso augments present.
    pub torso: bool,
    /// Torso glow intensity 0–3.
    pub torso_intensity: u8,
    /// Head augments present.
    pub head: bool,
    /// Head glow intensity 0–3.
    pub head_intensity: u8,
}

/// Avian feature bundle (phoenixkin, birdpeople).
///
/// `Default` supplies the documented neutral values used when the
/// sub-record is absent for an avian species.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvianFeatures {
    /// Wing size in `[0, 1]`.
    pub wing_size: f64,
    /// Wingspan in `[0, 1]` (data-only).
    pub wingspan: f64,
    /// Tail feather volume in `[0, 1]` (data-only).
    pub tail_feathers: f64,
    /// Head crest size in `[0, 1]` (data-only).
    pub crest: f64,
    /// Talon variety (data-only).
    pub talon_type: TalonType,
    /// Beak silhouette (data-only).
    pub beak_shape: BeakShape,
    /// Cybernetic wings flag.
    pub cyber_wings: bool,
    /// Cybernetic talons flag.
    pub cyber_talons: bool,
    /// Cybernetic beak flag.
    pub cyber_beak: bool,
}

impl Default for AvianFeatures {
    fn default() -> Self {
        Self {
            wing_size: 0.5,
            wingspan: 0.5,
            tail_feathers: 0.5,
            crest: 0.0,
            talon_type: TalonType::Sharp,
            beak_shape: BeakShape::Straight,
            cyber_wings: false,
            cyber_talons: false,
            cyber_beak: false,
        }
    }
}

/// Felid/canid feature bundle (catpeople, dogpeople, kitsune).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FelidCanidFeatures {
    /// Fur density in `[0, 1]`; thickens the tail stroke above `0.5`.
    pub fur_density: f64,
    /// Fur color hex; empty means "derive from skin color".
    pub fur_color: String,
    /// Whiskers flag (data-only).
    pub whiskers: bool,
    /// Claw length in `[0, 1]` (data-only).
    pub claw_length: f64,
    /// Tail variety (data-only).
    pub tail_type: TailType,
    /// Tail length in `[0, 1]` (data-only).
    pub tail_length: f64,
    /// Ear position in `[-1, 1]`, forward to flat (data-only).
    pub ear_position: f64,
    /// Cybernetic claws flag.
    pub cyber_claws: bool,
    /// Cybernetic tail flag.
    pub cyber_tail: bool,
}

impl Default for FelidCanidFeatures {
    fn default() -> Self {
        Self {
            fur_density: 0.5,
            fur_color: String::new(),
            whiskers: false,
            claw_length: 0.5,
            tail_type: TailType::Long,
            tail_length: 0.5,
            ear_position: 0.0,
            cyber_claws: false,
            cyber_tail: false,
        }
    }
}

/// Reptilian feature bundle (dragonkin, lizardpeople).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReptilianFeatures {
    /// Scale texture (data-only).
    pub scale_pattern: ScalePattern,
    /// Scale color hex; empty means "derive from skin color".
    pub scale_color: String,
    /// Claw variety (data-only).
    pub claw_type: ClawType,
    /// Tail length in `[0, 1]` (data-only).
    pub tail_length: f64,
    /// Head crest flag (data-only).
    pub crest: bool,
    /// Neck frills flag (data-only).
    pub frills: bool,
    /// Cybernetic scales flag.
    pub cyber_scales: bool,
    /// Cybernetic claws flag.
    pub cyber_claws: bool,
    /// Cybernetic tail flag.
    pub cyber_tail: bool,
    /// Cybernetic crest flag.
    pub cyber_crest: bool,
}

impl Default for ReptilianFeatures {
    fn default() -> Self {
        Self {
            scale_pattern: ScalePattern::Smooth,
            scale_color: String::new(),
            claw_type: ClawType::Sharp,
            tail_length: 0.5,
            crest: false,
            frills: false,
            cyber_scales: false,
            cyber_claws: false,
            cyber_tail: false,
            cyber_crest: false,
        }
    }
}

/// Aquatic feature bundle (fishpeople). Entirely data-only today: the fish
/// tail itself is part of the body layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AquaticFeatures {
    /// Scale texture.
    pub scale_pattern: ScalePattern,
    /// Scale color hex.
    pub scale_color: String,
    /// Fin placement.
    pub fin_type: FinType,
    /// Tail fin silhouette.
    pub tail_shape: TailShape,
    /// Gill visibility in `[0, 1]`.
    pub gill_visibility: f64,
    /// Dorsal fin flag.
    pub dorsal_fin: bool,
    /// Cybernetic fins flag.
    pub cyber_fins: bool,
    /// Cybernetic tail flag.
    pub cyber_tail: bool,
    /// Cybernetic gills flag.
    pub cyber_gills: bool,
    /// Cybernetic dorsal fin flag.
    pub cyber_dorsal: bool,
}

impl Default for AquaticFeatures {
    fn default() -> Self {
        Self {
            scale_pattern: ScalePattern::Smooth,
            scale_color: String::new(),
            fin_type: FinType::Both,
            tail_shape: TailShape::Fan,
            gill_visibility: 0.5,
            dorsal_fin: false,
            cyber_fins: false,
            cyber_tail: false,
            cyber_gills: false,
            cyber_dorsal: false,
        }
    }
}

/// Minotaur feature bundle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinotaurFeatures {
    /// Horn size in `[0, 1]`.
    pub horn_size: f64,
    /// Horn curve in `[-1, 1]`.
    pub horn_curve: f64,
    /// Mane length in `[0, 1]` (data-only).
    pub mane_length: f64,
    /// Mane color hex (data-only).
    pub mane_color: String,
    /// Hoof variety (data-only).
    pub hoof_type: HoofType,
    /// Fur density in `[0, 1]` (data-only).
    pub fur_density: f64,
    /// Fur color hex (data-only).
    pub fur_color: String,
    /// Tail flag (data-only).
    pub tail: bool,
    /// Fang size in `[0, 1]` (data-only).
    pub fang_size: f64,
    /// Snout prominence in `[0, 1]` (data-only).
    pub snout_prominence: f64,
    /// Cybernetic horns flag.
    pub cyber_horns: bool,
    /// Cybernetic hooves flag.
    pub cyber_hooves: bool,
}

impl Default for MinotaurFeatures {
    fn default() -> Self {
        Self {
            horn_size: 0.5,
            horn_curve: 0.0,
            mane_length: 0.5,
            mane_color: "#3a2a1a".to_owned(),
            hoof_type: HoofType::Cloven,
            fur_density: 0.5,
            fur_color: "#8b7355".to_owned(),
            tail: true,
            fang_size: 0.0,
            snout_prominence: 0.5,
            cyber_horns: false,
            cyber_hooves: false,
        }
    }
}

/// Centaur feature bundle. Entirely data-only today: the hindquarters are
/// part of the body layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CentaurFeatures {
    /// Horse body color hex.
    pub horse_body_color: String,
    /// Mane length in `[0, 1]`.
    pub mane_length: f64,
    /// Mane color hex.
    pub mane_color: String,
    /// Hoof variety.
    pub hoof_type: HoofType,
    /// Withers prominence in `[0, 1]`.
    pub withers: f64,
    /// Crest prominence in `[0, 1]`.
    pub crest: f64,
    /// Tail length in `[0, 1]`.
    pub tail_length: f64,
    /// Cybernetic hooves flag.
    pub cyber_hooves: bool,
    /// Cybernetic withers flag.
    pub cyber_withers: bool,
}

impl Default for CentaurFeatures {
    fn default() -> Self {
        Self {
            horse_body_color: "#6b4a2a".to_owned(),
            mane_length: 0.5,
            mane_color: "#3a2a1a".to_owned(),
            hoof_type: HoofType::Solid,
            withers: 0.5,
            crest: 0.0,
            tail_length: 0.5,
            cyber_hooves: false,
            cyber_withers: false,
        }
    }
}

/// The six optional species-feature sub-records. At most one is
/// semantically relevant at a time, selected by [`AvatarConfig::species`];
/// an absent sub-record for the active species means "use the bundle's
/// `Default` values", never an error.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesFeatures {
    /// Avian bundle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avian: Option<AvianFeatures>,
    /// Felid/canid bundle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub felid_canid: Option<FelidCanidFeatures>,
    /// Reptilian bundle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reptilian: Option<ReptilianFeatures>,
    /// Aquatic bundle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aquatic: Option<AquaticFeatures>,
    /// Minotaur bundle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minotaur: Option<MinotaurFeatures>,
    /// Centaur bundle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub centaur: Option<CentaurFeatures>,
}

/// One equipment slot. Slots are independent; there are no cross-slot
/// constraints. All slots are data-only in the current renderer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessoryItem {
    /// Item identifier.
    pub id: String,
    /// Item color hex.
    pub color: String,
    /// Style variant name.
    pub style: String,
    /// Whether the slot is equipped.
    pub enabled: bool,
}

impl Default for AccessoryItem {
    fn default() -> Self {
        Self {
            id: "none".to_owned(),
            color: "#888888".to_owned(),
            style: "default".to_owned(),
            enabled: false,
        }
    }
}

/// The ten fixed equipment slots.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessoriesConfig {
    /// Hat / helmet / crown.
    pub head: AccessoryItem,
    /// Mask / glasses / visor.
    pub face: AccessoryItem,
    /// Collar / necklace / choker.
    pub neck: AccessoryItem,
    /// Shirt / jacket / armour.
    pub torso: AccessoryItem,
    /// Belt / sash / skirt.
    pub waist: AccessoryItem,
    /// Pants / shorts / leggings.
    pub legs: AccessoryItem,
    /// Boots / sandals / greaves.
    pub feet: AccessoryItem,
    /// Left glove / gauntlet / ring.
    pub left_hand: AccessoryItem,
    /// Right glove / gauntlet / ring.
    pub right_hand: AccessoryItem,
    /// Cape / wings overlay / backpack.
    pub back: AccessoryItem,
}

/// The single serializable value driving avatar rendering.
///
/// Immutable from the renderer's perspective: it is authored by an external
/// editor, persisted by the backend as the `avatar_config` JSON field
/// (camelCase), and passed read-only into [`crate::render_avatar`] on
/// every draw.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarConfig {
    /// Schema version; currently 2.
    pub version: u32,
    /// Active species.
    pub species: Species,
    /// Cosmetic gender.
    pub gender: Gender,
    /// The 35 facial sliders.
    pub facial_morphs: FacialMorphs,
    /// The 9 body sliders.
    pub body: BodyMorphs,
    /// Skin color hex.
    pub skin_color: String,
    /// Skin shine in `[0, 1]`; the highlight is suppressed below `0.05`.
    pub skin_shine: f64,
    /// Hair configuration.
    pub hair: HairConfig,
    /// Eye configuration.
    pub eyes: EyeConfig,
    /// Index into the 18-entry lip palette; taken modulo the palette length.
    pub lip_type: u32,
    /// Index into the 18-entry nail palette; taken modulo the palette
    /// length (data-only).
    pub nail_type: u32,
    /// Makeup configuration.
    pub makeup: MakeupConfig,
    /// Tattoo flags.
    pub tattoos: TattooConfig,
    /// Ordered scar list; append order, unbounded.
    pub scars: Vec<ScarConfig>,
    /// Piercing flags.
    pub piercings: PiercingConfig,
    /// Cybernetic augments.
    pub cybernetics: CyberneticsConfig,
    /// Optional species-feature sub-records.
    #[serde(default)]
    pub species_features: SpeciesFeatures,
    /// Equipment slots.
    pub accessories: AccessoriesConfig,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            version: 2,
            species: Species::Human,
            gender: Gender::Androgynous,
            facial_morphs: FacialMorphs::default(),
            body: BodyMorphs::default(),
            skin_color: "#c8a882".to_owned(),
            skin_shine: 0.3,
            hair: HairConfig::default(),
            eyes: EyeConfig::default(),
            lip_type: 0,
            nail_type: 0,
            makeup: MakeupConfig::default(),
            tattoos: TattooConfig::default(),
            scars: Vec::new(),
            piercings: PiercingConfig::default(),
            cybernetics: CyberneticsConfig::default(),
            species_features: SpeciesFeatures::default(),
            accessories: AccessoriesConfig::default(),
        }
    }
}

impl AvatarConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> NexusResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| NexusError::serde(format!("parse avatar config JSON: {e}")))
    }

    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> NexusResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| NexusError::serde(format!("parse avatar config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> NexusResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            NexusError::validation(format!("open avatar config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Serialize the config to the wire JSON shape.
    pub fn to_json(&self) -> NexusResult<String> {
        serde_json::to_string(self)
            .map_err(|e| NexusError::serde(format!("serialize avatar config: {e}")))
    }

    /// Validate boundary invariants (hex shapes, slider finiteness, version).
    ///
    /// The renderers do not require this — they are total over any
    /// structurally valid config — but callers ingesting untrusted JSON
    /// should run it before persisting.
    pub fn validate(&self) -> NexusResult<()> {
        validate_config(self).map_err(NexusError::validation)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
