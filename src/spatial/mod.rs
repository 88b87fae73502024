//! Spatial indexing for pointer hit testing.
//!
//! This module provides an R-tree over the projected tag positions so a
//! pointer location can be resolved to a tag without scanning every tag.

mod rtree;

pub use rtree::{SpatialIndex, TagPoint};
