//! Tag record and identifier.
//!
//! A tag has:
//! - A name shown as the element text
//! - A link target
//! - A popularity count that drives font size and radial distance

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CloudError, CloudResult};

/// Tag identifier: the tag's index in the input sequence.
///
/// Insertion order matters, since the index seeds the spiral placement and
/// the hue of the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TagId(pub u32);

impl TagId {
    /// Create a new TagId from a raw u32.
    #[inline]
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw u32 value.
    #[inline]
    pub fn raw(self) -> u32 {
        self.0
    }

    /// Index into per-tag arrays.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag({})", self.0)
    }
}

impl From<u32> for TagId {
    #[inline]
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<TagId> for u32 {
    #[inline]
    fn from(id: TagId) -> Self {
        id.0
    }
}

/// Immutable input record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_count")]
    pub count: f64,
}

fn default_count() -> f64 {
    1.0
}

impl Tag {
    pub fn new(name: impl Into<String>, url: impl Into<String>, count: f64) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            count,
        }
    }

    /// Reject blank names and counts that would poison the font and weight math.
    pub fn validate(&self) -> CloudResult<()> {
        if self.name.trim().is_empty() {
            return Err(CloudError::InvalidTag(format!(
                "tag linking to '{}' has an empty name",
                self.url
            )));
        }
        if !self.count.is_finite() || self.count < 0.0 {
            return Err(CloudError::InvalidTag(format!(
                "count for '{}' must be a non-negative finite number, got {}",
                self.name, self.count
            )));
        }
        Ok(())
    }
}
