//! R-tree based spatial index using the rstar crate.
//!
//! Holds the projected (x, y) of every tag for the current frame and
//! answers point-in-radius queries for hit testing.

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use crate::tag::TagId;

/// A projected tag position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TagPoint {
    pub id: TagId,
    pub x: f64,
    pub y: f64,
}

impl TagPoint {
    pub fn new(id: TagId, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }
}

impl RTreeObject for TagPoint {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point([self.x, self.y])
    }
}

impl PointDistance for TagPoint {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.x - point[0];
        let dy = self.y - point[1];
        dx * dx + dy * dy
    }
}

/// Spatial index for projected tags.
pub struct SpatialIndex {
    tree: RTree<TagPoint>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self { tree: RTree::new() }
    }

    /// Find all tags within `radius` of a point, with their squared distance.
    pub fn in_radius(&self, x: f64, y: f64, radius: f64) -> Vec<(TagId, f64)> {
        let point = [x, y];
        self.tree
            .locate_within_distance(point, radius * radius)
            .map(|p| (p.id, p.distance_2(&point)))
            .collect()
    }

    /// Replace the index contents with a fresh set of points.
    pub fn rebuild(&mut self, points: Vec<TagPoint>) {
        self.tree = RTree::bulk_load(points);
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
