//! The scroll container: owns viewport state and drives the
//! recomputation pass.

use crate::axis::ScrollAxis;
use crate::canvas_size::canvas_size;
use crate::error::ScrollError;
use crate::event::{AxisChange, ScrollEvent};
use crate::host::{ChildCollection, HostSurface};
use crate::resolver::{resolve, ScrollbarMetrics};
use crate::scroller::ViewportScroller;
use desplazar_core::{Point, Rect, Size};

/// Observer invoked after a pass that changed the scroll position.
pub type ScrollCallback = Box<dyn FnMut(&ScrollEvent) + Send + Sync>;

/// Scroll state and recomputation driver for one auto-scrolling
/// container.
///
/// The container owns the viewport (margin, minimum canvas size, the two
/// [`ScrollAxis`] values, the current offset) and recomputes it on every
/// layout-affecting event through [`perform_layout`]. A pass runs the
/// fixed order: canvas-size calculation, scrollbar visibility
/// resolution, then one batched scroller correction. Requests arriving
/// while a pass is running are coalesced into a single follow-up pass.
///
/// [`perform_layout`]: ScrollContainer::perform_layout
pub struct ScrollContainer {
    auto_scroll: bool,
    margin: Size,
    min_size: Size,
    force_horizontal: bool,
    force_vertical: bool,
    metrics: ScrollbarMetrics,
    horizontal: ScrollAxis,
    vertical: ScrollAxis,
    offset: Point,
    canvas: Size,
    client: Size,
    effective: Size,
    in_pass: bool,
    pending_pass: bool,
    pending_target: Option<Point>,
    passes: u64,
    on_scroll: Option<ScrollCallback>,
}

impl Default for ScrollContainer {
    fn default() -> Self {
        Self {
            auto_scroll: false,
            margin: Size::ZERO,
            min_size: Size::ZERO,
            force_horizontal: false,
            force_vertical: false,
            metrics: ScrollbarMetrics::default(),
            horizontal: ScrollAxis::default(),
            vertical: ScrollAxis::default(),
            offset: Point::ORIGIN,
            canvas: Size::ZERO,
            client: Size::ZERO,
            effective: Size::ZERO,
            in_pass: false,
            pending_pass: false,
            pending_target: None,
            passes: 0,
            on_scroll: None,
        }
    }
}

impl std::fmt::Debug for ScrollContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollContainer")
            .field("auto_scroll", &self.auto_scroll)
            .field("margin", &self.margin)
            .field("min_size", &self.min_size)
            .field("horizontal", &self.horizontal)
            .field("vertical", &self.vertical)
            .field("offset", &self.offset)
            .field("canvas", &self.canvas)
            .field("effective", &self.effective)
            .field("on_scroll", &self.on_scroll.is_some())
            .finish_non_exhaustive()
    }
}

impl ScrollContainer {
    /// Create a container with auto-scroll disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether size-driven scrollbar logic is enabled.
    #[must_use]
    pub const fn auto_scroll(&self) -> bool {
        self.auto_scroll
    }

    /// Enable or disable size-driven scrollbar logic. When disabled,
    /// visibility is driven solely by the explicit force-flags.
    pub fn set_auto_scroll(&mut self, enabled: bool) {
        self.auto_scroll = enabled;
    }

    /// Extra space reserved around counted children.
    #[must_use]
    pub const fn auto_scroll_margin(&self) -> Size {
        self.margin
    }

    /// Set the auto-scroll margin. Negative components are rejected and
    /// the previous value is retained.
    pub fn set_auto_scroll_margin(&mut self, margin: Size) -> Result<(), ScrollError> {
        if margin.width < 0 || margin.height < 0 {
            return Err(ScrollError::NegativeMargin {
                width: margin.width,
                height: margin.height,
            });
        }
        self.margin = margin;
        Ok(())
    }

    /// Explicit floor on the canvas size.
    #[must_use]
    pub const fn auto_scroll_min_size(&self) -> Size {
        self.min_size
    }

    /// Set the minimum canvas size. Negative components are rejected and
    /// the previous value is retained.
    pub fn set_auto_scroll_min_size(&mut self, min_size: Size) -> Result<(), ScrollError> {
        if min_size.width < 0 || min_size.height < 0 {
            return Err(ScrollError::NegativeMinSize {
                width: min_size.width,
                height: min_size.height,
            });
        }
        self.min_size = min_size;
        Ok(())
    }

    /// Force the horizontal scrollbar regardless of canvas size.
    pub fn set_force_horizontal(&mut self, force: bool) {
        self.force_horizontal = force;
    }

    /// Force the vertical scrollbar regardless of canvas size.
    pub fn set_force_vertical(&mut self, force: bool) {
        self.force_vertical = force;
    }

    /// Scrollbar strip thickness in use.
    #[must_use]
    pub const fn metrics(&self) -> ScrollbarMetrics {
        self.metrics
    }

    /// Override the scrollbar strip thickness.
    pub fn set_metrics(&mut self, metrics: ScrollbarMetrics) {
        self.metrics = metrics;
    }

    /// Read-only view of the horizontal axis.
    #[must_use]
    pub const fn horizontal(&self) -> &ScrollAxis {
        &self.horizontal
    }

    /// Read-only view of the vertical axis.
    #[must_use]
    pub const fn vertical(&self) -> &ScrollAxis {
        &self.vertical
    }

    /// Current scroll position.
    #[must_use]
    pub const fn scroll_position(&self) -> Point {
        Point {
            x: self.horizontal.value(),
            y: self.vertical.value(),
        }
    }

    /// Last computed virtual canvas size.
    #[must_use]
    pub const fn canvas_size(&self) -> Size {
        self.canvas
    }

    /// Last observed host client size.
    #[must_use]
    pub const fn client_size(&self) -> Size {
        self.client
    }

    /// Client rectangle minus the strips of currently visible
    /// scrollbars.
    #[must_use]
    pub const fn visible_rect(&self) -> Rect {
        Rect::from_size(self.effective)
    }

    /// Number of completed recomputation passes (diagnostic).
    #[must_use]
    pub const fn passes(&self) -> u64 {
        self.passes
    }

    /// Register the scroll observer, replacing any previous one.
    pub fn on_scroll(&mut self, callback: impl FnMut(&ScrollEvent) + Send + Sync + 'static) {
        self.on_scroll = Some(Box::new(callback));
    }

    /// Queue a recomputation without running one now. The next
    /// [`perform_layout`] call picks it up; repeated requests coalesce.
    ///
    /// [`perform_layout`]: ScrollContainer::perform_layout
    pub fn request_layout(&mut self) {
        self.pending_pass = true;
    }

    /// Set the scroll position. Each component is clamped to the axis
    /// range (or pinned to 0 on a hidden axis); out-of-range input is
    /// never an error. Runs a full recomputation pass so side effects
    /// stay batched.
    pub fn set_scroll_position(
        &mut self,
        target: Point,
        host: &mut dyn HostSurface,
        children: &mut dyn ChildCollection,
    ) {
        self.pending_target = Some(target);
        self.pending_pass = true;
        self.perform_layout(host, children);
    }

    /// Scroll the minimal amount so `bounds` (in document space) is
    /// fully visible. No-op when it already is: no position change, no
    /// blit, no pass.
    pub fn scroll_into_view(
        &mut self,
        bounds: Rect,
        host: &mut dyn HostSurface,
        children: &mut dyn ChildCollection,
    ) {
        let target = self.into_view_target(bounds);
        if target == self.scroll_position() {
            return;
        }
        self.set_scroll_position(target, host, children);
    }

    /// The recomputation pass entry point. Call on resize, child
    /// add/remove/move, or after changing margin, minimum size, or the
    /// force/auto flags.
    ///
    /// Re-entrant calls are deferred: a request arriving while a pass is
    /// running marks a pending pass, and the outermost call drains
    /// pending work before returning.
    pub fn perform_layout(
        &mut self,
        host: &mut dyn HostSurface,
        children: &mut dyn ChildCollection,
    ) {
        if self.in_pass {
            self.pending_pass = true;
            return;
        }

        self.in_pass = true;
        loop {
            self.pending_pass = false;
            self.run_pass(host, children);
            if !self.pending_pass {
                break;
            }
        }
        self.in_pass = false;
    }

    /// One complete pass: canvas size, then visibility resolution, then
    /// one batched scroller correction, then state publication.
    fn run_pass(&mut self, host: &mut dyn HostSurface, children: &mut dyn ChildCollection) {
        let client = host.client_size();
        let canvas = canvas_size(children, self.offset, self.margin, self.min_size);
        let resolution = resolve(
            canvas,
            client,
            self.force_horizontal,
            self.force_vertical,
            self.auto_scroll,
            self.metrics,
        );

        let shown_before = (self.horizontal.is_visible(), self.vertical.is_visible());
        let old = self.scroll_position();

        self.client = client;
        self.canvas = canvas;
        self.effective = resolution.effective;

        if resolution.show_horizontal {
            self.horizontal.show(canvas.width, resolution.effective.width);
        } else {
            self.horizontal.hide();
        }
        if resolution.show_vertical {
            self.vertical.show(canvas.height, resolution.effective.height);
        } else {
            self.vertical.hide();
        }

        // a queued explicit target wins over holding the current position
        let desired = self.pending_target.take().unwrap_or(old);
        let target = Point::new(
            self.horizontal.clamp(desired.x),
            self.vertical.clamp(desired.y),
        );

        let view = Rect::from_size(resolution.effective);
        let mut offset = self.offset;
        ViewportScroller::new(host, children).set_position(
            &self.horizontal,
            &self.vertical,
            &mut offset,
            view,
            target,
        );
        self.offset = offset;
        self.horizontal.set_value(offset.x);
        self.vertical.set_value(offset.y);

        let shown_after = (
            resolution.show_horizontal,
            resolution.show_vertical,
        );
        if shown_before != shown_after {
            // a strip appeared or disappeared; the exposed area needs a
            // repaint beyond what the blit covered
            host.invalidate(Rect::from_size(client));
        }

        self.passes += 1;
        let new = self.scroll_position();
        log::debug!(
            "layout pass {}: canvas {}x{}, client {}x{}, bars h={} v={}, position ({}, {})",
            self.passes,
            canvas.width,
            canvas.height,
            client.width,
            client.height,
            resolution.show_horizontal,
            resolution.show_vertical,
            new.x,
            new.y,
        );

        if let Some(axis) = AxisChange::between(old, new) {
            if let Some(callback) = self.on_scroll.as_mut() {
                callback(&ScrollEvent { old, new, axis });
            }
        }
    }

    fn into_view_target(&self, bounds: Rect) -> Point {
        let offset = self.scroll_position();
        let view = self.effective;
        let mut target = offset;

        // near edge wins when the child cannot fit
        let left = bounds.x - offset.x;
        if left < 0 || bounds.width > view.width {
            target.x = bounds.x;
        } else if left + bounds.width > view.width {
            target.x = bounds.right() - view.width;
        }

        let top = bounds.y - offset.y;
        if top < 0 || bounds.height > view.height {
            target.y = bounds.y;
        } else if top + bounds.height > view.height {
            target.y = bounds.bottom() - view.height;
        }

        target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{RecordingSurface, SlotChildren, SurfaceCall};
    use desplazar_core::ChildConstraint;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn auto_container() -> ScrollContainer {
        let mut container = ScrollContainer::new();
        container.set_auto_scroll(true);
        container
    }

    fn overflowing_fixture() -> (ScrollContainer, RecordingSurface, SlotChildren) {
        let container = auto_container();
        let surface = RecordingSurface::new(Size::new(200, 100));
        let mut children = SlotChildren::new();
        children.push(Rect::new(0, 0, 300, 50), ChildConstraint::floating());
        (container, surface, children)
    }

    #[test]
    fn test_pass_shows_bars_for_overflow() {
        let (mut container, mut surface, mut children) = overflowing_fixture();
        container.perform_layout(&mut surface, &mut children);

        assert!(container.horizontal().is_visible());
        assert!(!container.vertical().is_visible());
        assert_eq!(container.canvas_size(), Size::new(300, 50));
        assert_eq!(container.visible_rect(), Rect::new(0, 0, 200, 84));
        assert_eq!(container.horizontal().maximum(), 299);
        assert_eq!(container.horizontal().large_change(), 200);
    }

    #[test]
    fn test_idempotent_pass() {
        let (mut container, mut surface, mut children) = overflowing_fixture();
        container.perform_layout(&mut surface, &mut children);
        let position = container.scroll_position();
        let visible = (
            container.horizontal().is_visible(),
            container.vertical().is_visible(),
        );

        surface.clear();
        container.perform_layout(&mut surface, &mut children);

        assert_eq!(container.scroll_position(), position);
        assert_eq!(
            (
                container.horizontal().is_visible(),
                container.vertical().is_visible(),
            ),
            visible
        );
        // the second pass changed nothing, so it touched nothing
        assert!(surface.calls().is_empty());
    }

    #[test]
    fn test_set_scroll_position_clamps() {
        let (mut container, mut surface, mut children) = overflowing_fixture();
        container.perform_layout(&mut surface, &mut children);

        container.set_scroll_position(Point::new(1000, 1000), &mut surface, &mut children);

        // horizontal: maximum 299, large_change 200 -> ceiling 100
        assert_eq!(container.scroll_position(), Point::new(100, 0));
        assert_eq!(children.bounds(0).x, -100);
    }

    #[test]
    fn test_hidden_axis_zeroed_on_shrink() {
        let (mut container, mut surface, mut children) = overflowing_fixture();
        container.perform_layout(&mut surface, &mut children);
        container.set_scroll_position(Point::new(50, 0), &mut surface, &mut children);
        assert_eq!(container.scroll_position(), Point::new(50, 0));

        // grow the client so nothing overflows any more
        surface.set_client_size(Size::new(400, 200));
        surface.clear();
        container.perform_layout(&mut surface, &mut children);

        assert!(!container.horizontal().is_visible());
        assert_eq!(container.scroll_position(), Point::ORIGIN);
        // children returned to their unscrolled layout via one blit
        assert_eq!(children.bounds(0).x, 0);
        assert_eq!(surface.blit_count(), 1);
    }

    #[test]
    fn test_min_size_drives_bars_without_children() {
        let mut container = auto_container();
        container
            .set_auto_scroll_min_size(Size::new(500, 500))
            .unwrap();
        let mut surface = RecordingSurface::new(Size::new(200, 200));
        let mut children = SlotChildren::new();

        container.perform_layout(&mut surface, &mut children);

        assert!(container.horizontal().is_visible());
        assert!(container.vertical().is_visible());
        assert_eq!(container.horizontal().maximum(), 499);
        assert_eq!(container.vertical().maximum(), 499);
    }

    #[test]
    fn test_negative_margin_rejected_and_retained() {
        let mut container = ScrollContainer::new();
        container.set_auto_scroll_margin(Size::new(4, 4)).unwrap();

        let err = container
            .set_auto_scroll_margin(Size::new(-1, 2))
            .unwrap_err();
        assert_eq!(
            err,
            ScrollError::NegativeMargin {
                width: -1,
                height: 2
            }
        );
        assert_eq!(container.auto_scroll_margin(), Size::new(4, 4));

        assert!(container
            .set_auto_scroll_min_size(Size::new(0, -5))
            .is_err());
        assert_eq!(container.auto_scroll_min_size(), Size::ZERO);
    }

    #[test]
    fn test_scroll_into_view_noop_when_visible() {
        let (mut container, mut surface, mut children) = overflowing_fixture();
        container.perform_layout(&mut surface, &mut children);
        surface.clear();
        let passes = container.passes();

        container.scroll_into_view(Rect::new(10, 10, 50, 30), &mut surface, &mut children);

        assert_eq!(container.scroll_position(), Point::ORIGIN);
        assert!(surface.calls().is_empty());
        assert_eq!(container.passes(), passes);
    }

    #[test]
    fn test_scroll_into_view_right_edge() {
        let (mut container, mut surface, mut children) = overflowing_fixture();
        container.perform_layout(&mut surface, &mut children);

        // child at x 250..290, view width 200: align right edge
        container.scroll_into_view(Rect::new(250, 0, 40, 30), &mut surface, &mut children);
        assert_eq!(container.scroll_position().x, 90);

        // and scrolling back left aligns the near edge
        container.scroll_into_view(Rect::new(10, 0, 40, 30), &mut surface, &mut children);
        assert_eq!(container.scroll_position().x, 10);
    }

    #[test]
    fn test_scroll_into_view_oversized_child_prefers_near_edge() {
        let (mut container, mut surface, mut children) = overflowing_fixture();
        container.perform_layout(&mut surface, &mut children);
        container.set_scroll_position(Point::new(80, 0), &mut surface, &mut children);

        // wider than the viewport: left edge wins
        container.scroll_into_view(Rect::new(20, 0, 260, 30), &mut surface, &mut children);
        assert_eq!(container.scroll_position().x, 20);
    }

    #[test]
    fn test_scroll_event_reports_old_new_axis() {
        let (mut container, mut surface, mut children) = overflowing_fixture();
        let seen = Arc::new(AtomicUsize::new(0));
        let seen_in_callback = Arc::clone(&seen);
        container.on_scroll(move |event| {
            assert_eq!(event.old, Point::ORIGIN);
            assert_eq!(event.new, Point::new(40, 0));
            assert_eq!(event.axis, AxisChange::Horizontal);
            seen_in_callback.fetch_add(1, Ordering::SeqCst);
        });

        container.perform_layout(&mut surface, &mut children);
        container.set_scroll_position(Point::new(40, 0), &mut surface, &mut children);

        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_queued_requests_coalesce() {
        let (mut container, mut surface, mut children) = overflowing_fixture();
        container.perform_layout(&mut surface, &mut children);
        let passes = container.passes();

        container.request_layout();
        container.request_layout();
        container.perform_layout(&mut surface, &mut children);

        assert_eq!(container.passes(), passes + 1);
    }

    #[test]
    fn test_forced_bar_without_auto_scroll() {
        let mut container = ScrollContainer::new();
        container.set_force_vertical(true);
        let mut surface = RecordingSurface::new(Size::new(200, 200));
        let mut children = SlotChildren::new();

        container.perform_layout(&mut surface, &mut children);

        assert!(container.vertical().is_visible());
        assert!(!container.horizontal().is_visible());
        assert_eq!(container.visible_rect(), Rect::new(0, 0, 184, 200));
    }

    #[test]
    fn test_visibility_change_invalidates() {
        let (mut container, mut surface, mut children) = overflowing_fixture();
        container.perform_layout(&mut surface, &mut children);

        assert!(surface
            .calls()
            .iter()
            .any(|c| matches!(c, SurfaceCall::Invalidate { .. })));
    }

    #[test]
    fn test_zero_client_collapsed_container() {
        let mut container = auto_container();
        let mut surface = RecordingSurface::new(Size::ZERO);
        let mut children = SlotChildren::new();
        children.push(Rect::new(0, 0, 300, 300), ChildConstraint::floating());

        container.perform_layout(&mut surface, &mut children);

        assert!(!container.horizontal().is_visible());
        assert!(!container.vertical().is_visible());
        assert_eq!(container.visible_rect(), Rect::new(0, 0, 0, 0));
    }
}
