//! Deterministic procedural avatar and crest rendering for the Nexus
//! platform.
//!
//! Two independent compositors share one configuration schema and the same
//! math utilities:
//!
//! - [`render_avatar`] draws a layered 2D character portrait from an
//!   [`AvatarConfig`].
//! - [`render_crest`] draws a heraldic badge derived from a display name
//!   (via [`CrestConfig::derive`]), optionally borrowing colors from an
//!   avatar config.
//!
//! Both are pure with respect to their inputs: a fixed configuration and
//! canvas size produce a bit-identical [`FrameRGBA`] on every call. There
//! is no I/O, no shared state between renders, and no randomness beyond
//! the explicitly seeded crest derivation.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod foundation;

pub mod config;
pub mod render;

pub use crate::assets::color::{
    darken, hex_to_hsl, hex_to_rgb, hsl_to_hex, lighten, rgb_to_hex, saturate,
};
pub use crate::config::crest::{
    BORDER_STYLE_ORDER, BorderStyle, CrestConfig, SHIELD_SHAPE_ORDER, ShieldShape,
};
pub use crate::config::model::{AvatarConfig, Species};
pub use crate::foundation::core::Rgba8Premul;
pub use crate::foundation::error::{NexusError, NexusResult};
pub use crate::foundation::math::{Lcg32, fnv1a, lerp, morph};
pub use crate::render::{CrestOptions, FrameRGBA, render_avatar, render_crest};
