//! Spiral sphere placement with a cheap perspective approximation.
//!
//! Points are spread over the sphere by cumulative area: tag `i` of `N` gets
//! polar angle `phi = acos(-1 + 2i/N)`, and the azimuth advances by
//! `sqrt(N * pi)` per radian of `phi`, offset by the global rotation angle.
//! Each point is pulled toward the center by the tag's weight, and the
//! vertical axis is squashed so the cloud reads as an oblate band.
//!
//! # Projection
//!
//! - **Scale:** `1 + (z / R) * 0.5`, so the near pole grows toward 1.5x and the
//!   far pole shrinks toward 0.5x.
//! - **Opacity:** `0.3 + (1 - |z| / R) * 0.7`. Both poles fade; points on the
//!   depth equator stay fully opaque.
//! - **Stack order:** `z` rounded half-up, so nearer tags draw on top.

use std::f64::consts::PI;

use crate::tag::{Tag, TagVisual};

/// Vertical squash applied to the y axis.
pub const Y_SQUASH: f64 = 0.3;

/// Scale swing between the sphere's center and either pole.
pub const DEPTH_SCALE: f64 = 0.5;

/// Opacity at either pole.
pub const MIN_OPACITY: f64 = 0.3;

/// Weight given to zero-count tags so they stay off the center.
pub const MIN_WEIGHT: f64 = 0.05;

/// Projected pose of one tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub scale: f64,
    pub opacity: f64,
    pub stack_order: i32,
}

/// Normalized popularity per tag: `count / max_count`, capped at 1.
///
/// Only a zero count is lifted, to `MIN_WEIGHT`; small positive weights are
/// kept as they are. A set whose largest count is zero weighs every tag 1.
pub fn tag_weights(tags: &[Tag]) -> Vec<f64> {
    let max_count = tags.iter().map(|t| t.count).fold(0.0_f64, f64::max);
    tags.iter()
        .map(|t| {
            if max_count <= 0.0 {
                1.0
            } else {
                let weight = (t.count / max_count).min(1.0);
                if weight > 0.0 {
                    weight
                } else {
                    MIN_WEIGHT
                }
            }
        })
        .collect()
}

/// The sphere layout engine.
///
/// Holds only the radius; the angle is supplied per call so that the same
/// inputs always produce the same poses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereLayout {
    radius: f64,
}

impl SphereLayout {
    /// Create a layout over a sphere of `radius` pixels.
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Polar and azimuthal angles for tag `index` of `count`.
    pub fn angles(index: usize, count: usize, angle: f64) -> (f64, f64) {
        let n = count as f64;
        let phi = (-1.0 + (2.0 * index as f64) / n).acos();
        let theta = (n * PI).sqrt() * phi + angle;
        (phi, theta)
    }

    /// Pose of tag `index` of `count` with the given weight and rotation.
    pub fn project(&self, index: usize, count: usize, weight: f64, angle: f64) -> Projection {
        let r = self.radius;
        let (phi, theta) = Self::angles(index, count, angle);

        let x = r * theta.cos() * phi.sin() * weight;
        let y = r * theta.sin() * phi.sin() * weight * Y_SQUASH;
        let z = r * phi.cos() * weight;

        let scale = 1.0 + (z / r) * DEPTH_SCALE;
        let opacity = MIN_OPACITY + (1.0 - z.abs() / r) * (1.0 - MIN_OPACITY);
        let stack_order = (z + 0.5).floor() as i32;

        Projection {
            x,
            y,
            z,
            scale,
            opacity,
            stack_order,
        }
    }

    /// Lay out every tag, overwriting the pose fields of `visuals` in place.
    ///
    /// `weights` and `visuals` must have one entry per tag, in tag order.
    /// Font size and hue are left untouched.
    pub fn apply(&self, weights: &[f64], angle: f64, visuals: &mut [TagVisual]) {
        let count = weights.len();
        debug_assert_eq!(count, visuals.len());

        for (index, (visual, &weight)) in visuals.iter_mut().zip(weights).enumerate() {
            let p = self.project(index, count, weight, angle);
            visual.x = p.x;
            visual.y = p.y;
            visual.z = p.z;
            visual.scale = p.scale;
            visual.opacity = p.opacity;
            visual.stack_order = p.stack_order;
        }
    }

    /// Lay out every tag into a fresh vector of projections.
    pub fn compute(&self, weights: &[f64], angle: f64) -> Vec<Projection> {
        let count = weights.len();
        weights
            .iter()
            .enumerate()
            .map(|(index, &weight)| self.project(index, count, weight, angle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_single_tag() {
        let (phi, theta) = SphereLayout::angles(0, 1, 0.25);
        assert!((phi - PI).abs() < EPS);
        assert!((theta - (PI.sqrt() * PI + 0.25)).abs() < EPS);

        let p = SphereLayout::new(200.0).project(0, 1, 1.0, 0.25);
        assert!(p.x.is_finite() && p.y.is_finite());
        // phi = pi puts the only tag on the far pole
        assert!((p.z + 200.0).abs() < EPS);
        assert!((p.scale - 0.5).abs() < EPS);
        assert!((p.opacity - MIN_OPACITY).abs() < EPS);
        assert_eq!(p.stack_order, -200);
    }

    #[test]
    fn test_empty_layout_is_noop() {
        let layout = SphereLayout::new(200.0);
        assert!(layout.compute(&[], 1.0).is_empty());
        let mut visuals: Vec<TagVisual> = Vec::new();
        layout.apply(&[], 1.0, &mut visuals);
    }

    #[test]
    fn test_weight_pulls_toward_center() {
        let layout = SphereLayout::new(100.0);
        let full = layout.project(0, 4, 1.0, 0.0);
        let half = layout.project(0, 4, 0.5, 0.0);
        assert!((half.z - full.z * 0.5).abs() < EPS);
        assert!((half.x - full.x * 0.5).abs() < EPS);
    }

    #[test]
    fn test_vertical_squash() {
        let layout = SphereLayout::new(100.0);
        // theta = pi/2 points straight down the y axis
        let (phi, _) = SphereLayout::angles(1, 2, 0.0);
        let angle = PI / 2.0 - (2.0 * PI).sqrt() * phi;
        let p = layout.project(1, 2, 1.0, angle);
        assert!((p.y - 100.0 * phi.sin() * Y_SQUASH).abs() < 1e-6);
        assert!(p.x.abs() < 1e-6);
    }

    #[test]
    fn test_stack_order_tracks_depth() {
        let layout = SphereLayout::new(10.0);
        // i = 1 of 4: phi = acos(-0.5), z = -5 * weight
        let back = layout.project(1, 4, 0.44, 0.0);
        assert!((back.z + 2.2).abs() < EPS);
        assert_eq!(back.stack_order, -2);

        // i = 3 of 4: phi = acos(0.5), z = 5 * weight
        let front = layout.project(3, 4, 0.74, 0.0);
        assert!((front.z - 3.7).abs() < EPS);
        assert_eq!(front.stack_order, 4);
    }

    #[test]
    fn test_apply_matches_compute_and_keeps_fixed_fields() {
        let layout = SphereLayout::new(150.0);
        let weights = [1.0, 0.4, 0.8, 0.1];
        let mut visuals: Vec<TagVisual> = (0..4)
            .map(|i| TagVisual::new(12.0 + i as f64, 90.0 * i as f64))
            .collect();

        layout.apply(&weights, 0.7, &mut visuals);
        let projections = layout.compute(&weights, 0.7);

        for (i, (v, p)) in visuals.iter().zip(&projections).enumerate() {
            assert_eq!((v.x, v.y, v.z), (p.x, p.y, p.z));
            assert_eq!(v.stack_order, p.stack_order);
            assert_eq!(v.font_size, 12.0 + i as f64);
            assert_eq!(v.hue, 90.0 * i as f64);
        }
    }

    #[test]
    fn test_rotation_changes_azimuth_only() {
        let layout = SphereLayout::new(120.0);
        let a = layout.project(2, 5, 1.0, 0.0);
        let b = layout.project(2, 5, 1.0, 1.0);
        assert_eq!(a.z, b.z);
        assert_eq!(a.opacity, b.opacity);
        assert!((a.x - b.x).abs() > EPS || (a.y - b.y).abs() > EPS);
    }

    #[test]
    fn test_tag_weights() {
        let tags = vec![
            Tag::new("a", "", 10.0),
            Tag::new("b", "", 5.0),
            Tag::new("c", "", 0.0),
        ];
        assert_eq!(tag_weights(&tags), vec![1.0, 0.5, MIN_WEIGHT]);
    }

    #[test]
    fn test_small_weights_are_not_floored() {
        let tags = vec![Tag::new("big", "", 100.0), Tag::new("small", "", 1.0)];
        assert_eq!(tag_weights(&tags), vec![1.0, 0.01]);
    }

    #[test]
    fn test_tag_weights_all_zero() {
        let tags = vec![Tag::new("a", "", 0.0), Tag::new("b", "", 0.0)];
        assert_eq!(tag_weights(&tags), vec![1.0, 1.0]);
    }

    proptest! {
        #[test]
        fn layout_is_deterministic(
            weights in prop::collection::vec(0.05f64..=1.0, 1..60),
            angle in -100.0f64..100.0,
            radius in 1.0f64..2000.0,
        ) {
            let layout = SphereLayout::new(radius);
            prop_assert_eq!(layout.compute(&weights, angle), layout.compute(&weights, angle));
        }

        #[test]
        fn projection_stays_in_bounds(
            weights in prop::collection::vec(0.05f64..=1.0, 1..60),
            angle in -100.0f64..100.0,
            radius in 1.0f64..2000.0,
        ) {
            let layout = SphereLayout::new(radius);
            for (p, &w) in layout.compute(&weights, angle).iter().zip(&weights) {
                prop_assert!(p.z.abs() <= radius * w + 1e-6);
                prop_assert!(p.scale >= 1.0 - DEPTH_SCALE * w - 1e-9);
                prop_assert!(p.scale <= 1.0 + DEPTH_SCALE * w + 1e-9);
                prop_assert!(p.opacity >= MIN_OPACITY - 1e-9);
                prop_assert!(p.opacity <= 1.0 + 1e-9);
            }
        }
    }
}
