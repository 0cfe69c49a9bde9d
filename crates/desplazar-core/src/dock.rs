//! Dock and anchor constraints for child layout.
//!
//! The set of dock kinds is closed and stable, so the canvas-size
//! calculator consumes it through a plain `match` rather than dynamic
//! dispatch.

use serde::{Deserialize, Serialize};

/// Docking behavior of a child within its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Dock {
    /// Not docked; positioned freely and governed by [`Anchors`].
    #[default]
    None,
    /// Pinned to the left edge, full container height.
    Left,
    /// Pinned to the top edge, full container width.
    Top,
    /// Pinned to the right edge, full container height.
    Right,
    /// Pinned to the bottom edge, full container width.
    Bottom,
    /// Fills the remaining container area.
    Fill,
}

impl Dock {
    /// Whether a child with this dock can grow the virtual canvas.
    ///
    /// Left/top-docked children push the document's far edges out;
    /// right/bottom/fill-docked children resize to the space left over
    /// and never force growth.
    #[must_use]
    pub const fn grows_canvas(self) -> bool {
        matches!(self, Self::Left | Self::Top)
    }
}

/// Edge-anchoring flags for non-docked children.
///
/// A child anchored to an edge keeps its distance to that edge as the
/// container resizes. Anchoring to both edges of an axis means the child
/// stretches instead of forcing the canvas to grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anchors {
    /// Anchored to the left edge
    pub left: bool,
    /// Anchored to the top edge
    pub top: bool,
    /// Anchored to the right edge
    pub right: bool,
    /// Anchored to the bottom edge
    pub bottom: bool,
}

impl Anchors {
    /// The default anchoring: top-left.
    pub const TOP_LEFT: Self = Self {
        left: true,
        top: true,
        right: false,
        bottom: false,
    };

    /// Anchored to all four edges (stretches with the container).
    pub const ALL: Self = Self {
        left: true,
        top: true,
        right: true,
        bottom: true,
    };

    /// Create anchors from individual edge flags.
    #[must_use]
    pub const fn new(left: bool, top: bool, right: bool, bottom: bool) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }
}

impl Default for Anchors {
    fn default() -> Self {
        Self::TOP_LEFT
    }
}

/// A child's full layout constraint: dock kind plus anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChildConstraint {
    /// Docking behavior
    pub dock: Dock,
    /// Edge anchors (used when `dock` is [`Dock::None`])
    pub anchors: Anchors,
}

impl ChildConstraint {
    /// A free-floating child anchored top-left.
    #[must_use]
    pub const fn floating() -> Self {
        Self {
            dock: Dock::None,
            anchors: Anchors::TOP_LEFT,
        }
    }

    /// A docked child.
    #[must_use]
    pub const fn docked(dock: Dock) -> Self {
        Self {
            dock,
            anchors: Anchors::TOP_LEFT,
        }
    }

    /// A free-floating child with explicit anchors.
    #[must_use]
    pub const fn anchored(anchors: Anchors) -> Self {
        Self {
            dock: Dock::None,
            anchors,
        }
    }
}
