//! Font sizing from tag popularity.
//!
//! Counts are mapped linearly from `[min_count, max_count]` onto
//! `[min_font, max_font]`. When every count is equal the midpoint of the
//! font range is used.

use crate::tag::Tag;

/// Linear count-to-pixels mapping for one tag set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontScale {
    min_count: f64,
    max_count: f64,
    min_font: f64,
    max_font: f64,
}

impl FontScale {
    /// Create a scale over an explicit count range.
    pub fn new(min_count: f64, max_count: f64, min_font: f64, max_font: f64) -> Self {
        Self {
            min_count,
            max_count,
            min_font,
            max_font,
        }
    }

    /// Create a scale spanning the counts of `tags`.
    ///
    /// An empty tag set yields a degenerate scale that always returns the
    /// midpoint.
    pub fn from_tags(tags: &[Tag], min_font: f64, max_font: f64) -> Self {
        let (min_count, max_count) = count_range(tags).unwrap_or((0.0, 0.0));
        Self::new(min_count, max_count, min_font, max_font)
    }

    /// Font size in pixels for a tag with `count`.
    pub fn size_for(&self, count: f64) -> f64 {
        let count_span = self.max_count - self.min_count;
        if count_span == 0.0 {
            return (self.min_font + self.max_font) / 2.0;
        }
        self.min_font + (count - self.min_count) / count_span * (self.max_font - self.min_font)
    }
}

/// Smallest and largest count, or `None` for an empty slice.
pub fn count_range(tags: &[Tag]) -> Option<(f64, f64)> {
    tags.iter().map(|t| t.count).fold(None, |range, c| match range {
        None => Some((c, c)),
        Some((lo, hi)) => Some((lo.min(c), hi.max(c))),
    })
}
