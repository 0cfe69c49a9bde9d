//! Virtual canvas (document) size calculation.

use crate::host::ChildCollection;
use desplazar_core::{Dock, Point, Size};

/// Compute the minimal virtual canvas size containing the given children.
///
/// Per axis, a child contributes its far edge to a running maximum when
/// it can push the document out in that direction:
///
/// - left/top-docked children contribute their right and bottom edges
/// - right/bottom/fill-docked children resize to the space left over and
///   are excluded
/// - non-docked children contribute unless anchored to the far edge of
///   the axis (such a child tracks the client edge instead of growing
///   the document)
///
/// `offset` is the scroll shift already applied to stored child bounds;
/// adding it back recovers document-space edges. `margin` pads each
/// counted contribution, so an empty child set yields `min_size` alone.
///
/// Pure function of the current child geometry; an empty result of
/// `(0, 0)` is valid.
#[must_use]
pub fn canvas_size(
    children: &dyn ChildCollection,
    offset: Point,
    margin: Size,
    min_size: Size,
) -> Size {
    let mut extent = Size::ZERO;

    for index in 0..children.len() {
        let bounds = children.bounds(index);
        let constraint = children.constraint(index);

        let counts_x = match constraint.dock {
            Dock::None => !constraint.anchors.right,
            other => other.grows_canvas(),
        };
        let counts_y = match constraint.dock {
            Dock::None => !constraint.anchors.bottom,
            other => other.grows_canvas(),
        };

        if counts_x {
            extent.width = extent.width.max(bounds.right() + offset.x + margin.width);
        }
        if counts_y {
            extent.height = extent
                .height
                .max(bounds.bottom() + offset.y + margin.height);
        }
    }

    extent.max(min_size).clamp_non_negative()
}
