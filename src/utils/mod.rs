//! Shared rendering utilities.

pub mod minify;
pub mod xml;
