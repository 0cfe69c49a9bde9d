//! Application of scroll deltas to children and the host surface.

use crate::axis::ScrollAxis;
use crate::host::{ChildCollection, HostSurface};
use desplazar_core::{Point, Rect};

/// Applies a resolved scroll delta: moves every direct child and issues a
/// single blit-scroll to the host.
///
/// Borrows the two collaborator capabilities for the duration of one
/// application, so all side effects of a pass land together.
pub struct ViewportScroller<'a> {
    host: &'a mut dyn HostSurface,
    children: &'a mut dyn ChildCollection,
}

impl<'a> ViewportScroller<'a> {
    /// Create a scroller over the given collaborators.
    pub fn new(host: &'a mut dyn HostSurface, children: &'a mut dyn ChildCollection) -> Self {
        Self { host, children }
    }

    /// Apply a delta to the scroll offset.
    ///
    /// Every direct child moves by `(-dx, -dy)` (content moves up/left as
    /// the offset grows), `offset` advances by `(dx, dy)`, and the host
    /// receives one `blit_scroll` of `(-dx, -dy)` over the visible
    /// rectangle. Children repaint themselves; grandchildren are never
    /// touched. Strict no-op when both deltas are zero.
    pub fn scroll_by(&mut self, offset: &mut Point, view: Rect, dx: i32, dy: i32) {
        if dx == 0 && dy == 0 {
            return;
        }

        for index in 0..self.children.len() {
            let bounds = self.children.bounds(index);
            self.children
                .set_origin(index, Point::new(bounds.x - dx, bounds.y - dy));
        }

        *offset = Point::new(offset.x + dx, offset.y + dy);
        self.host.blit_scroll(view, -dx, -dy);
    }

    /// Scroll to an absolute target position.
    ///
    /// Each axis's visibility is re-checked here: a hidden axis's target
    /// is treated as 0 rather than producing a partial scroll. The deltas
    /// from the axes' current values are delegated to [`scroll_by`].
    ///
    /// [`scroll_by`]: ViewportScroller::scroll_by
    pub fn set_position(
        &mut self,
        horizontal: &ScrollAxis,
        vertical: &ScrollAxis,
        offset: &mut Point,
        view: Rect,
        target: Point,
    ) {
        let target_x = if horizontal.is_visible() { target.x } else { 0 };
        let target_y = if vertical.is_visible() { target.y } else { 0 };

        let dx = target_x - horizontal.value();
        let dy = target_y - vertical.value();
        self.scroll_by(offset, view, dx, dy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{RecordingSurface, SlotChildren, SurfaceCall};
    use desplazar_core::{ChildConstraint, Size};

    fn fixture() -> (RecordingSurface, SlotChildren) {
        let mut children = SlotChildren::new();
        children.push(Rect::new(0, 0, 300, 50), ChildConstraint::floating());
        children.push(Rect::new(10, 60, 40, 40), ChildConstraint::floating());
        (RecordingSurface::new(Size::new(200, 100)), children)
    }

    #[test]
    fn test_scroll_by_moves_children_and_blits() {
        let (mut surface, mut children) = fixture();
        let mut offset = Point::ORIGIN;
        let view = Rect::new(0, 0, 200, 100);

        ViewportScroller::new(&mut surface, &mut children).scroll_by(&mut offset, view, 30, 0);

        assert_eq!(offset, Point::new(30, 0));
        assert_eq!(children.bounds(0), Rect::new(-30, 0, 300, 50));
        assert_eq!(children.bounds(1), Rect::new(-20, 60, 40, 40));
        assert_eq!(
            surface.calls(),
            &[SurfaceCall::BlitScroll {
                rect: view,
                dx: -30,
                dy: 0
            }]
        );
    }

    #[test]
    fn test_zero_delta_is_strict_noop() {
        let (mut surface, mut children) = fixture();
        let mut offset = Point::new(5, 5);
        let before = children.bounds(0);

        ViewportScroller::new(&mut surface, &mut children).scroll_by(
            &mut offset,
            Rect::new(0, 0, 200, 100),
            0,
            0,
        );

        assert_eq!(offset, Point::new(5, 5));
        assert_eq!(children.bounds(0), before);
        assert!(surface.calls().is_empty());
    }

    #[test]
    fn test_set_position_ignores_hidden_axis() {
        let (mut surface, mut children) = fixture();
        let mut offset = Point::ORIGIN;
        let view = Rect::new(0, 0, 200, 100);

        let mut horizontal = ScrollAxis::default();
        horizontal.show(300, 200);
        let vertical = ScrollAxis::default(); // hidden

        ViewportScroller::new(&mut surface, &mut children).set_position(
            &horizontal,
            &vertical,
            &mut offset,
            view,
            Point::new(50, 80),
        );

        // vertical target dropped entirely, not partially applied
        assert_eq!(offset, Point::new(50, 0));
    }

    #[test]
    fn test_set_position_removes_offset_when_axis_hides() {
        let (mut surface, mut children) = fixture();
        let view = Rect::new(0, 0, 200, 100);

        // axis previously visible at value 30, now hidden
        let mut horizontal = ScrollAxis::default();
        horizontal.show(300, 200);
        horizontal.set_value(30);
        horizontal.hide();
        let vertical = ScrollAxis::default();
        let mut offset = Point::new(30, 0);

        ViewportScroller::new(&mut surface, &mut children).set_position(
            &horizontal,
            &vertical,
            &mut offset,
            view,
            Point::new(30, 0),
        );

        assert_eq!(offset, Point::ORIGIN);
        assert_eq!(surface.blit_count(), 1);
    }
}
