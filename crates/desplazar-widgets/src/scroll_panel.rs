//! Auto-scrolling container widget.
//!
//! `ScrollPanel` owns child widgets with per-child dock/anchor
//! constraints and drives the viewport engine for them: it is its own
//! host surface (blits are recorded as damage for the embedding window)
//! and its own child collection.

use desplazar_core::{
    widget::{AccessibleRole, LayoutResult},
    Anchors, Canvas, ChildConstraint, Color, Dock, Event, Point, Rect, Size, TypeId, Widget,
};
use desplazar_scroll::{
    ChildCollection, HostSurface, ScrollContainer, ScrollError, ScrollEvent, SlotChildren,
};
use std::any::Any;

/// Smallest scrollbar thumb length in pixels.
const MIN_THUMB_LENGTH: i32 = 24;

/// Message emitted when the panel's scroll position changes from user
/// input.
#[derive(Debug, Clone)]
pub struct PanelScrolled {
    /// Offset before the scroll
    pub old: Point,
    /// Offset after the scroll
    pub new: Point,
}

/// The panel's host-surface face: there is no pixel buffer here, so
/// blits and invalidations are recorded as damage for the embedding
/// window to repaint.
struct PanelSurface<'a> {
    client: Size,
    damage: &'a mut Vec<Rect>,
}

impl HostSurface for PanelSurface<'_> {
    fn client_size(&self) -> Size {
        self.client
    }

    fn blit_scroll(&mut self, rect: Rect, _dx: i32, _dy: i32) {
        self.damage.push(rect);
    }

    fn invalidate(&mut self, rect: Rect) {
        self.damage.push(rect);
    }
}

/// Auto-scrolling container widget.
pub struct ScrollPanel {
    widgets: Vec<Box<dyn Widget>>,
    /// Constraint plus unscrolled document origin per child (the origin
    /// is only meaningful for non-docked children)
    constraints: Vec<(ChildConstraint, Point)>,
    /// Panel-local, scroll-shifted child bounds fed to the engine
    slots: SlotChildren,
    viewport: ScrollContainer,
    background: Color,
    track_color: Color,
    thumb_color: Color,
    damage: Vec<Rect>,
    test_id_value: Option<String>,
    accessible_name_value: Option<String>,
    bounds: Rect,
}

impl Default for ScrollPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollPanel {
    /// Create an empty panel with auto-scroll enabled.
    #[must_use]
    pub fn new() -> Self {
        let mut viewport = ScrollContainer::new();
        viewport.set_auto_scroll(true);
        Self {
            widgets: Vec::new(),
            constraints: Vec::new(),
            slots: SlotChildren::new(),
            viewport,
            background: Color::WHITE,
            track_color: Color::new(0.93, 0.93, 0.93, 1.0),
            thumb_color: Color::new(0.62, 0.62, 0.62, 1.0),
            damage: Vec::new(),
            test_id_value: None,
            accessible_name_value: None,
            bounds: Rect::default(),
        }
    }

    /// Add a docked child.
    #[must_use]
    pub fn with_child(mut self, widget: Box<dyn Widget>, dock: Dock) -> Self {
        self.add_child(widget, ChildConstraint::docked(dock), Point::ORIGIN);
        self
    }

    /// Add a free-floating child at a document-space position.
    #[must_use]
    pub fn with_child_at(mut self, widget: Box<dyn Widget>, origin: Point) -> Self {
        self.add_child(widget, ChildConstraint::floating(), origin);
        self
    }

    /// Add an anchored child at a document-space position.
    #[must_use]
    pub fn with_child_anchored(
        mut self,
        widget: Box<dyn Widget>,
        anchors: Anchors,
        origin: Point,
    ) -> Self {
        self.add_child(widget, ChildConstraint::anchored(anchors), origin);
        self
    }

    /// Set the background color.
    #[must_use]
    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Set the accessible name.
    #[must_use]
    pub fn with_accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    /// Add a child at runtime.
    pub fn add_child(
        &mut self,
        widget: Box<dyn Widget>,
        constraint: ChildConstraint,
        origin: Point,
    ) {
        self.widgets.push(widget);
        self.constraints.push((constraint, origin));
        self.viewport.request_layout();
    }

    /// Number of children.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.widgets.len()
    }

    /// Read-only view of the scroll state.
    #[must_use]
    pub fn viewport(&self) -> &ScrollContainer {
        &self.viewport
    }

    /// Current scroll position.
    #[must_use]
    pub fn scroll_position(&self) -> Point {
        self.viewport.scroll_position()
    }

    /// Damage rectangles accumulated by engine passes since the last
    /// call; the embedding window repaints these.
    pub fn take_damage(&mut self) -> Vec<Rect> {
        std::mem::take(&mut self.damage)
    }

    /// Register the scroll observer.
    pub fn on_scroll(&mut self, callback: impl FnMut(&ScrollEvent) + Send + Sync + 'static) {
        self.viewport.on_scroll(callback);
    }

    /// Set the extra space reserved around children.
    pub fn set_auto_scroll_margin(&mut self, margin: Size) -> Result<(), ScrollError> {
        self.viewport.set_auto_scroll_margin(margin)?;
        self.viewport.request_layout();
        Ok(())
    }

    /// Set the explicit floor on the canvas size.
    pub fn set_auto_scroll_min_size(&mut self, min_size: Size) -> Result<(), ScrollError> {
        self.viewport.set_auto_scroll_min_size(min_size)?;
        self.viewport.request_layout();
        Ok(())
    }

    /// Scroll to an absolute position (clamped by the engine).
    pub fn set_scroll_position(&mut self, target: Point) {
        let mut surface = PanelSurface {
            client: self.bounds.size(),
            damage: &mut self.damage,
        };
        self.viewport
            .set_scroll_position(target, &mut surface, &mut self.slots);
        self.sync_children();
    }

    /// Scroll the minimal amount to make the child at `index` fully
    /// visible.
    pub fn scroll_into_view_child(&mut self, index: usize) {
        // slots mirror widgets only after the first layout
        if index >= self.slots.len() {
            return;
        }
        let offset = self.viewport.scroll_position();
        let document_bounds = self.slots.bounds(index).translate(offset.x, offset.y);

        let mut surface = PanelSurface {
            client: self.bounds.size(),
            damage: &mut self.damage,
        };
        self.viewport
            .scroll_into_view(document_bounds, &mut surface, &mut self.slots);
        self.sync_children();
    }

    /// Recompute child placement from dock/anchor constraints and push
    /// the results into the engine's slots and the child widgets.
    fn dock_children(&mut self) {
        let offset = self.viewport.scroll_position();
        let area = self.bounds.size();
        let view = {
            let v = self.viewport.visible_rect().size();
            // before the first pass the effective size is unknown
            if v.is_empty() {
                area
            } else {
                v
            }
        };

        let mut top = 0;
        let mut left = 0;
        let mut slots = SlotChildren::new();

        for index in 0..self.widgets.len() {
            let (constraint, home) = self.constraints[index];
            // docked children fit the panel; free children keep their
            // intrinsic size and may overflow into the scrollable canvas
            let measured = match constraint.dock {
                Dock::None => self.widgets[index].measure(Size::new(i32::MAX, i32::MAX)),
                _ => self.widgets[index].measure(area),
            };

            // Top/Left/floating children live in document space and get
            // shifted by the scroll offset; far-docked and fill children
            // are placed directly against the visible area
            let local = match constraint.dock {
                Dock::Top => {
                    let rect = Rect::new(0, top, view.width, measured.height);
                    top += measured.height;
                    rect.translate(-offset.x, -offset.y)
                }
                Dock::Left => {
                    let rect = Rect::new(left, 0, measured.width, view.height);
                    left += measured.width;
                    rect.translate(-offset.x, -offset.y)
                }
                Dock::Bottom => Rect::new(
                    0,
                    view.height - measured.height,
                    view.width,
                    measured.height,
                ),
                Dock::Right => Rect::new(
                    view.width - measured.width,
                    0,
                    measured.width,
                    view.height,
                ),
                Dock::Fill => Rect::new(
                    left,
                    top,
                    (view.width - left).max(0),
                    (view.height - top).max(0),
                ),
                Dock::None => Rect::new(home.x, home.y, measured.width, measured.height)
                    .translate(-offset.x, -offset.y),
            };

            slots.push(local, constraint);
        }

        self.slots = slots;
        self.sync_children();
    }

    /// Propagate current slot bounds into the child widgets' layout.
    fn sync_children(&mut self) {
        for index in 0..self.widgets.len() {
            let absolute = self
                .slots
                .bounds(index)
                .translate(self.bounds.x, self.bounds.y);
            self.widgets[index].layout(absolute);
        }
    }

    fn paint_scrollbars(&self, canvas: &mut dyn Canvas) {
        let metrics = self.viewport.metrics();
        let view = self.viewport.visible_rect().size();
        let horizontal = self.viewport.horizontal();
        let vertical = self.viewport.vertical();

        if horizontal.is_visible() {
            let track = Rect::new(
                self.bounds.x,
                self.bounds.bottom() - metrics.horizontal_thickness,
                view.width,
                metrics.horizontal_thickness,
            );
            canvas.fill_rect(track, self.track_color);
            canvas.fill_rect(
                thumb_rect(
                    track,
                    true,
                    horizontal.value(),
                    horizontal.max_value(),
                    view.width,
                    self.viewport.canvas_size().width,
                ),
                self.thumb_color,
            );
        }

        if vertical.is_visible() {
            let track = Rect::new(
                self.bounds.right() - metrics.vertical_thickness,
                self.bounds.y,
                metrics.vertical_thickness,
                view.height,
            );
            canvas.fill_rect(track, self.track_color);
            canvas.fill_rect(
                thumb_rect(
                    track,
                    false,
                    vertical.value(),
                    vertical.max_value(),
                    view.height,
                    self.viewport.canvas_size().height,
                ),
                self.thumb_color,
            );
        }

        if horizontal.is_visible() && vertical.is_visible() {
            // dead corner between the two strips
            canvas.fill_rect(
                Rect::new(
                    self.bounds.right() - metrics.vertical_thickness,
                    self.bounds.bottom() - metrics.horizontal_thickness,
                    metrics.vertical_thickness,
                    metrics.horizontal_thickness,
                ),
                self.track_color,
            );
        }
    }

    fn forward_to_children(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        for widget in &mut self.widgets {
            if let Some(message) = widget.event(event) {
                return Some(message);
            }
        }
        None
    }
}

/// Proportional thumb geometry for one scrollbar track.
fn thumb_rect(
    track: Rect,
    horizontal: bool,
    value: i32,
    max_value: i32,
    view_extent: i32,
    canvas_extent: i32,
) -> Rect {
    let track_len = if horizontal {
        track.width
    } else {
        track.height
    };
    let length = if canvas_extent > 0 {
        ((i64::from(view_extent) * i64::from(track_len)) / i64::from(canvas_extent)) as i32
    } else {
        track_len
    }
    .clamp(MIN_THUMB_LENGTH.min(track_len), track_len.max(1));

    let travel = (track_len - length).max(0);
    let position = if max_value > 0 {
        ((i64::from(value) * i64::from(travel)) / i64::from(max_value)) as i32
    } else {
        0
    };

    if horizontal {
        Rect::new(track.x + position, track.y + 2, length, track.height - 4)
    } else {
        Rect::new(track.x + 2, track.y + position, track.width - 4, length)
    }
}

impl Widget for ScrollPanel {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, available: Size) -> Size {
        available
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        self.dock_children();

        let mut surface = PanelSurface {
            client: bounds.size(),
            damage: &mut self.damage,
        };
        self.viewport.perform_layout(&mut surface, &mut self.slots);

        // the pass may have moved children or changed the effective
        // area; re-dock against the published state
        self.dock_children();

        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rect(self.bounds, self.background);

        let view = self.viewport.visible_rect().size();
        let clip = Rect::new(self.bounds.x, self.bounds.y, view.width, view.height);
        canvas.push_clip(clip);
        for widget in &self.widgets {
            widget.paint(canvas);
        }
        canvas.pop_clip();

        self.paint_scrollbars(canvas);
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        if let Event::Wheel {
            position,
            delta_x,
            delta_y,
        } = event
        {
            if self.bounds.contains_point(*position) {
                let horizontal = self.viewport.horizontal();
                let vertical = self.viewport.vertical();
                let old = self.viewport.scroll_position();
                let target = Point::new(
                    old.x + delta_x * horizontal.small_change(),
                    old.y + delta_y * vertical.small_change(),
                );

                if target != old {
                    self.set_scroll_position(target);
                    let new = self.viewport.scroll_position();
                    if new != old {
                        return Some(Box::new(PanelScrolled { old, new }));
                    }
                }
                return None;
            }
        }

        self.forward_to_children(event)
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &self.widgets
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut self.widgets
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::ScrollArea
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }
}
