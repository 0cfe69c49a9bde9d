//! Scroll notifications published to dependent widgets.

use desplazar_core::Point;
use serde::{Deserialize, Serialize};

/// Which axis changed in a completed recomputation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisChange {
    /// Only the horizontal offset changed
    Horizontal,
    /// Only the vertical offset changed
    Vertical,
    /// Both offsets changed
    Both,
}

impl AxisChange {
    /// Classify the change between two offsets, `None` if they are equal.
    #[must_use]
    pub fn between(old: Point, new: Point) -> Option<Self> {
        match (old.x != new.x, old.y != new.y) {
            (true, true) => Some(Self::Both),
            (true, false) => Some(Self::Horizontal),
            (false, true) => Some(Self::Vertical),
            (false, false) => None,
        }
    }
}

/// Fired once per completed recomputation pass that changed the scroll
/// position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollEvent {
    /// Offset before the pass
    pub old: Point,
    /// Offset after the pass
    pub new: Point,
    /// Which axis changed
    pub axis: AxisChange,
}
