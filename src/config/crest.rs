use serde::{Deserialize, Serialize};

use crate::assets::color::{hsl_to_hex, saturate};
use crate::config::model::{AvatarConfig, Species};
use crate::foundation::math::{Lcg32, fnv1a};

/// Shield silhouette variants, in their fixed selection order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShieldShape {
    /// Pointed-bottom rectangle with quadratic shoulders.
    Heater,
    /// Diamond with curved sides.
    Kite,
    /// Plain ellipse.
    Oval,
    /// Four-bezier ornamental outline.
    Baroque,
    /// Rounded rectangle.
    Cartouche,
}

/// Border decoration variants, in their fixed selection order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// Outer stroke plus a 0.88x inner stroke.
    Double,
    /// Base stroke plus 12 radial spikes.
    Thorned,
    /// Base stroke plus 8 horizontal tick-mark pairs at half opacity.
    Circuit,
    /// Single stroke.
    Plain,
}

/// Shape selection table: `hash % 5` indexes this array.
///
/// Order and modulus are a persisted-identity contract — changing either
/// changes which shield an existing username resolves to.
pub const SHIELD_SHAPE_ORDER: [ShieldShape; 5] = [
    ShieldShape::Heater,
    ShieldShape::Kite,
    ShieldShape::Oval,
    ShieldShape::Baroque,
    ShieldShape::Cartouche,
];

/// Border selection table: `fnv1a(username + "border") % 4` indexes this
/// array. The second hash decorrelates border choice from shape choice.
pub const BORDER_STYLE_ORDER: [BorderStyle; 4] = [
    BorderStyle::Double,
    BorderStyle::Thorned,
    BorderStyle::Circuit,
    BorderStyle::Plain,
];

/// Derived crest parameters.
///
/// Never persisted: fully reconstructible from
/// `(username, avatar config or none)`, and recomputed on every render.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrestConfig {
    /// Shield silhouette.
    pub shield_shape: ShieldShape,
    /// Border decoration.
    pub border_style: BorderStyle,
    /// Primary color hex (sigil, border, label).
    pub primary_color: String,
    /// Secondary color hex (species glyph, gradient tail).
    pub secondary_color: String,
    /// The 8 sigil vertex angles in radians, one per hash nibble.
    pub sigil_angles: [f64; 8],
    /// Species whose glyph is drawn above the sigil.
    pub species_symbol: Species,
}

impl CrestConfig {
    /// Derive the crest for `username`, optionally borrowing colors and
    /// species from an avatar config.
    ///
    /// Deterministic: the same inputs always produce the same crest. When
    /// no avatar is supplied both colors are drawn from an LCG seeded by
    /// the username hash, primary first.
    pub fn derive(username: &str, avatar: Option<&AvatarConfig>) -> Self {
        let hash = fnv1a(username);
        let mut rng = Lcg32::new(hash);

        let shield_shape = SHIELD_SHAPE_ORDER[(hash % 5) as usize];
        let border_style =
            BORDER_STYLE_ORDER[(fnv1a(&format!("{username}border")) % 4) as usize];
        let species_symbol = avatar.map_or(Species::Human, |a| a.species);

        let (primary_color, secondary_color) = match avatar {
            Some(a) => (saturate(&a.skin_color, 0.3), a.hair.color.clone()),
            None => {
                let primary = hsl_from_seed(&mut rng);
                let secondary = hsl_from_seed(&mut rng);
                (primary, secondary)
            }
        };

        let mut sigil_angles = [0.0f64; 8];
        for (i, angle) in sigil_angles.iter_mut().enumerate() {
            let nibble = (hash >> (i * 4)) & 0xF;
            *angle = f64::from(nibble) / 16.0 * std::f64::consts::TAU;
        }

        Self {
            shield_shape,
            border_style,
            primary_color,
            secondary_color,
            sigil_angles,
            species_symbol,
        }
    }
}

fn hsl_from_seed(rng: &mut Lcg32) -> String {
    let h = rng.next_f64();
    let s = 0.5 + rng.next_f64() * 0.4;
    let l = 0.35 + rng.next_f64() * 0.2;
    hsl_to_hex(h, s, l)
}

#[cfg(test)]
#[path = "../../tests/unit/config/crest.rs"]
mod tests;
