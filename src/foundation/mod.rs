//! Crate-wide primitives: error type, geometry re-exports, deterministic math.

pub(crate) mod core;
pub(crate) mod error;
pub(crate) mod math;
