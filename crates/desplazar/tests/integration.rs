//! Integration tests for the Desplazar toolkit: the viewport engine
//! driven through its public surface, plus widgets consuming it.

use desplazar::{
    AxisChange, Button, ChildCollection, ChildConstraint, Dock, Point, ProgressBar, Rect, RecordingCanvas,
    RecordingSurface, ScrollContainer, ScrollPanel, Size, SlotChildren, SurfaceCall, Widget,
};

fn auto_container() -> ScrollContainer {
    let mut container = ScrollContainer::new();
    container.set_auto_scroll(true);
    container
}

#[test]
fn test_top_docked_overflow_drives_horizontal_bar() {
    // client 200x100, one 300-wide top-docked child
    let mut container = auto_container();
    let mut surface = RecordingSurface::new(Size::new(200, 100));
    let mut children = SlotChildren::new();
    children.push(Rect::new(0, 0, 300, 50), ChildConstraint::docked(Dock::Top));

    container.perform_layout(&mut surface, &mut children);

    assert_eq!(container.canvas_size(), Size::new(300, 50));
    assert!(container.horizontal().is_visible());
    // the horizontal strip eats 16px of height; 50 still fits
    assert!(!container.vertical().is_visible());
    assert_eq!(container.visible_rect(), Rect::new(0, 0, 200, 84));
}

#[test]
fn test_min_size_alone_shows_both_bars() {
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
fn test_out_of_range_position_clamped() {
    // maximum 300 with large_change 50 on both axes: ceiling is 251
    let mut container = auto_container();
    container
        .set_auto_scroll_min_size(Size::new(301, 301))
        .unwrap();
    let mut surface = RecordingSurface::new(Size::new(66, 66));
    let mut children = SlotChildren::new();

    container.perform_layout(&mut surface, &mut children);
    assert_eq!(container.horizontal().maximum(), 300);
    assert_eq!(container.horizontal().large_change(), 50);

    container.set_scroll_position(Point::new(1000, 1000), &mut surface, &mut children);

    assert_eq!(container.scroll_position(), Point::new(251, 251));
}

#[test]
fn test_resize_restores_unshifted_layout() {
    let mut container = auto_container();
    let mut surface = RecordingSurface::new(Size::new(200, 100));
    let mut children = SlotChildren::new();
    let child = children.push(Rect::new(0, 0, 300, 50), ChildConstraint::floating());

    container.perform_layout(&mut surface, &mut children);
    container.set_scroll_position(Point::new(80, 0), &mut surface, &mut children);
    assert_eq!(children.bounds(child).x, -80);

    surface.set_client_size(Size::new(320, 120));
    surface.clear();
    container.perform_layout(&mut surface, &mut children);

    assert!(!container.horizontal().is_visible());
    assert_eq!(container.scroll_position(), Point::ORIGIN);
    assert_eq!(children.bounds(child).x, 0);
    assert!(surface
        .calls()
        .iter()
        .any(|c| matches!(c, SurfaceCall::BlitScroll { dx: 80, dy: 0, .. })));
}

#[test]
fn test_scroll_events_fire_once_per_changing_pass() {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    let mut container = auto_container();
    let events = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&events);
    container.on_scroll(move |event| {
        assert_eq!(event.axis, AxisChange::Both);
        seen.fetch_add(1, Ordering::SeqCst);
    });

    container
        .set_auto_scroll_min_size(Size::new(500, 500))
        .unwrap();
    let mut surface = RecordingSurface::new(Size::new(200, 200));
    let mut children = SlotChildren::new();
    container.perform_layout(&mut surface, &mut children);

    container.set_scroll_position(Point::new(20, 30), &mut surface, &mut children);
    // repeating the same target changes nothing and fires nothing
    container.set_scroll_position(Point::new(20, 30), &mut surface, &mut children);

    assert_eq!(events.load(Ordering::SeqCst), 1);
}

#[test]
fn test_panel_with_toolkit_widgets_scrolls() {
    let mut panel = ScrollPanel::new()
        .with_child(Box::new(ProgressBar::new()), Dock::Top)
        .with_child_at(Box::new(Button::new("Run")), Point::new(0, 30))
        .with_child_at(Box::new(Button::new("Further down")), Point::new(0, 400));
    panel.layout(Rect::new(0, 0, 150, 120));

    assert!(panel.viewport().vertical().is_visible());

    panel.scroll_into_view_child(2);
    assert!(panel.scroll_position().y > 0);

    let mut canvas = RecordingCanvas::new();
    panel.paint(&mut canvas);
    assert!(canvas.command_count() > 0);
    assert_eq!(canvas.clip_depth(), 0);
}

#[test]
fn test_engine_state_is_plain_data() {
    // axis state serializes, so hosts can persist scroll positions
    let mut container = auto_container();
    container
        .set_auto_scroll_min_size(Size::new(400, 400))
        .unwrap();
    let mut surface = RecordingSurface::new(Size::new(100, 100));
    let mut children = SlotChildren::new();
    container.perform_layout(&mut surface, &mut children);

    let json = serde_json::to_string(container.horizontal()).unwrap();
    let back: desplazar::ScrollAxis = serde_json::from_str(&json).unwrap();
    assert_eq!(&back, container.horizontal());
}
