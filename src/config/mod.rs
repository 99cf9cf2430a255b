//! Serializable configuration model for avatars and derived crests.
//!
//! [`model::AvatarConfig`] is the JSON-facing value the platform stores in
//! profile records (`avatar_config`, camelCase fields). It is validated at
//! the boundary and passed read-only into the renderers.

/// Derived crest parameters and their selection tables.
pub mod crest;
/// The avatar configuration tree.
pub mod model;
/// Fixed index-addressed palettes.
pub mod palette;

pub(crate) mod validate;
