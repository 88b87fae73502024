//! Layout algorithms for the tag sphere.
//!
//! This module provides the pure functions behind every frame: font sizing
//! from popularity, the spiral sphere placement with its perspective
//! approximation, and the index-based color palette. None of them hold
//! state; callers pass the rotation angle and radius in.

pub mod color;
pub mod font;
pub mod sphere;

pub use font::FontScale;
pub use sphere::{Projection, SphereLayout, tag_weights};
