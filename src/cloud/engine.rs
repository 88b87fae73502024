//! CloudEngine - Core tag cloud state.
//!
//! The CloudEngine owns everything one tag cloud needs between frames and
//! exposes the three operations the widget performs: advance a frame,
//! hover a tag, leave a tag. Rendering surfaces read the results through
//! [`CloudEngine::visuals`] or [`CloudEngine::style`].

use crate::cloud::{
    AnimationDriver, CloudState, HOVER_SCALE, HoverChange, HoverController, TagStyle,
    hover_stack_order,
};
use crate::config::CloudConfig;
use crate::error::{CloudError, CloudResult};
use crate::layout::color::hue_for_index;
use crate::layout::{FontScale, SphereLayout, tag_weights};
use crate::spatial::{SpatialIndex, TagPoint};
use crate::tag::{Tag, TagId, TagState, TagVisual};

/// The core tag cloud engine.
///
/// This struct manages:
/// - The immutable tag records and their normalized weights
/// - One visual per tag, overwritten on every layout pass
/// - Rotation state, the animation driver, and hover bookkeeping
/// - A spatial index over projected positions for hit testing
pub struct CloudEngine {
    config: CloudConfig,
    tags: Vec<Tag>,
    weights: Vec<f64>,
    visuals: Vec<TagVisual>,
    states: Vec<TagState>,
    state: CloudState,
    layout: SphereLayout,
    driver: AnimationDriver,
    hover: HoverController,
    spatial: SpatialIndex,
}

impl CloudEngine {
    /// Build a cloud from tags in display order and compute the first layout.
    pub fn new(tags: Vec<Tag>, config: CloudConfig) -> CloudResult<Self> {
        config.validate()?;
        for tag in &tags {
            tag.validate()?;
        }

        let font_scale = FontScale::from_tags(&tags, config.min_font, config.max_font);
        let count = tags.len();
        let visuals = tags
            .iter()
            .enumerate()
            .map(|(i, tag)| {
                TagVisual::new(font_scale.size_for(tag.count), hue_for_index(i, count))
            })
            .collect();

        let mut engine = Self {
            weights: tag_weights(&tags),
            visuals,
            states: vec![TagState::new(); count],
            state: CloudState::new(config.radius, config.speed),
            layout: SphereLayout::new(config.radius),
            driver: AnimationDriver::new(),
            hover: HoverController::new(),
            spatial: SpatialIndex::new(),
            tags,
            config,
        };

        log::debug!(
            "tag cloud built: {} tags, radius {}, speed {}",
            count,
            engine.state.radius,
            engine.state.speed
        );

        engine.update_layout();
        Ok(engine)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn visuals(&self) -> &[TagVisual] {
        &self.visuals
    }

    pub fn visual(&self, id: TagId) -> Option<&TagVisual> {
        self.visuals.get(id.index())
    }

    pub fn tag_state(&self, id: TagId) -> Option<TagState> {
        self.states.get(id.index()).copied()
    }

    pub fn state(&self) -> &CloudState {
        &self.state
    }

    pub fn config(&self) -> &CloudConfig {
        &self.config
    }

    pub fn driver(&self) -> &AnimationDriver {
        &self.driver
    }

    pub fn is_running(&self) -> bool {
        self.driver.is_running()
    }

    pub fn hovered(&self) -> Option<TagId> {
        self.hover.hovered()
    }

    /// Style for one tag from its current visual and hover state.
    pub fn style(&self, id: TagId) -> Option<TagStyle> {
        let visual = self.visuals.get(id.index())?;
        let state = self.states[id.index()];
        Some(TagStyle::from_visual(visual, state, &self.config.hover_color))
    }

    // =========================================================================
    // Frame Operations
    // =========================================================================

    /// Recompute every visual for the current angle.
    ///
    /// The hovered tag, if any, is lifted above all others.
    pub fn update_layout(&mut self) {
        self.layout
            .apply(&self.weights, self.state.angle, &mut self.visuals);

        if let Some(id) = self.hover.hovered() {
            self.visuals[id.index()].stack_order = hover_stack_order(self.state.radius);
        }

        let points = self
            .visuals
            .iter()
            .enumerate()
            .map(|(i, v)| TagPoint::new(TagId(i as u32), v.x, v.y))
            .collect();
        self.spatial.rebuild(points);
    }

    /// Advance one animation frame and relayout.
    ///
    /// Returns false once the animation has been stopped.
    pub fn tick(&mut self) -> bool {
        if !self.driver.tick(&mut self.state) {
            return false;
        }
        log::trace!("frame {} angle {:.4}", self.driver.frames(), self.state.angle);
        self.update_layout();
        true
    }

    /// Advance up to `frames` frames, stopping early if the driver stops.
    pub fn run_frames(&mut self, frames: u32) -> u32 {
        let mut advanced = 0;
        for _ in 0..frames {
            if !self.tick() {
                break;
            }
            advanced += 1;
        }
        advanced
    }

    /// Stop the animation. The layout stays at its last pose.
    pub fn stop(&mut self) {
        self.driver.stop();
    }

    // =========================================================================
    // Interaction
    // =========================================================================

    fn checked_id(&self, index: usize) -> CloudResult<TagId> {
        if index >= self.tags.len() {
            return Err(CloudError::IndexOutOfRange {
                index,
                len: self.tags.len(),
            });
        }
        Ok(TagId(index as u32))
    }

    /// Highlight tag `index` and slow the cloud.
    ///
    /// The highlight applies to this tag's visual immediately; the slowdown
    /// shows from the next frame.
    pub fn hover(&mut self, index: usize) -> CloudResult<HoverChange> {
        let id = self.checked_id(index)?;
        let change = self.hover.hover(id, &mut self.state);

        if let HoverChange::Moved { from } = change {
            let i = from.index();
            self.states[i].set_hovered(false);
            let depth = self
                .layout
                .project(i, self.tags.len(), self.weights[i], self.state.angle);
            self.visuals[i].stack_order = depth.stack_order;
        }
        self.states[id.index()].set_hovered(true);
        self.visuals[id.index()].stack_order = hover_stack_order(self.state.radius);

        Ok(change)
    }

    /// Clear the highlight on tag `index`, restore speed, and relayout now.
    pub fn leave(&mut self, index: usize) -> CloudResult<bool> {
        let id = self.checked_id(index)?;
        let restored = self.hover.leave(id, &mut self.state);
        self.states[id.index()].set_hovered(false);
        self.update_layout();
        Ok(restored)
    }

    // =========================================================================
    // Hit Testing
    // =========================================================================

    /// Radius around a tag's projected center that counts as a hit.
    ///
    /// The hovered tag is drawn larger, so its reach grows with it.
    fn hit_radius(&self, index: usize) -> f64 {
        let visual = &self.visuals[index];
        let radius = visual.font_size * visual.scale;
        if self.states[index].is_hovered() {
            radius * HOVER_SCALE
        } else {
            radius
        }
    }

    /// Find the topmost tag under a point, in container-center coordinates.
    pub fn tag_at(&self, x: f64, y: f64) -> Option<TagId> {
        if self.spatial.is_empty() {
            return None;
        }
        let reach = (0..self.visuals.len())
            .map(|i| self.hit_radius(i))
            .fold(0.0_f64, f64::max);

        self.spatial
            .in_radius(x, y, reach)
            .into_iter()
            .filter(|&(id, dist_2)| {
                let r = self.hit_radius(id.index());
                dist_2 <= r * r
            })
            .max_by_key(|&(id, _)| (self.visuals[id.index()].stack_order, std::cmp::Reverse(id)))
            .map(|(id, _)| id)
    }

    /// Translate pointer motion into hover and leave events.
    ///
    /// Returns the tag hovered after the move.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> CloudResult<Option<TagId>> {
        let target = self.tag_at(x, y);
        let current = self.hover.hovered();
        if target == current {
            return Ok(current);
        }
        if let Some(id) = current {
            self.leave(id.index())?;
        }
        if let Some(id) = target {
            self.hover(id.index())?;
        }
        Ok(target)
    }

    /// Pointer left the cloud entirely.
    pub fn pointer_leave(&mut self) -> CloudResult<()> {
        if let Some(id) = self.hover.hovered() {
            self.leave(id.index())?;
        }
        Ok(())
    }

    // =========================================================================
    // Buffer Access
    // =========================================================================

    /// Poses as `[x, y, z, scale, opacity, stack_order]` per tag.
    pub fn pose_buffer(&self) -> Vec<f32> {
        let mut buffer = Vec::with_capacity(self.visuals.len() * 6);
        for v in &self.visuals {
            buffer.push(v.x as f32);
            buffer.push(v.y as f32);
            buffer.push(v.z as f32);
            buffer.push(v.scale as f32);
            buffer.push(v.opacity as f32);
            buffer.push(v.stack_order as f32);
        }
        buffer
    }

    pub fn font_sizes(&self) -> Vec<f32> {
        self.visuals.iter().map(|v| v.font_size as f32).collect()
    }

    pub fn hues(&self) -> Vec<f32> {
        self.visuals.iter().map(|v| v.hue as f32).collect()
    }
}
