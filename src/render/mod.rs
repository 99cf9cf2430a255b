//! CPU rendering of avatar portraits and crest badges.
//!
//! Both compositors are synchronous, single-threaded, and deterministic:
//! a fixed input always produces a bit-identical [`FrameRGBA`]. Each render
//! fully clears and redraws its surface; nothing persists between draws.

pub(crate) mod paint;
pub(crate) mod surface;

mod avatar;
mod crest;

pub use avatar::render_avatar;
pub use crest::{CrestOptions, render_crest};
pub use surface::FrameRGBA;
