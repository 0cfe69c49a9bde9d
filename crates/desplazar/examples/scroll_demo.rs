//! Drives a scroll container against a recording host surface and
//! prints what the engine did.
//!
//! Run with `cargo run --example scroll_demo`.

use desplazar::{
    ChildConstraint, Dock, Point, Rect, RecordingSurface, ScrollContainer, Size, SlotChildren,
};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

fn main() {
    TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .expect("logger init");

    let mut container = ScrollContainer::new();
    container.set_auto_scroll(true);
    container.on_scroll(|event| {
        log::info!(
            "scrolled {:?} -> {:?} ({:?})",
            event.old,
            event.new,
            event.axis
        );
    });

    let mut surface = RecordingSurface::new(Size::new(200, 100));
    let mut children = SlotChildren::new();
    children.push(Rect::new(0, 0, 320, 40), ChildConstraint::docked(Dock::Top));
    children.push(Rect::new(0, 48, 80, 200), ChildConstraint::floating());

    container.perform_layout(&mut surface, &mut children);
    println!(
        "canvas {:?}, bars: horizontal={} vertical={}",
        container.canvas_size(),
        container.horizontal().is_visible(),
        container.vertical().is_visible(),
    );

    container.set_scroll_position(Point::new(60, 40), &mut surface, &mut children);
    println!("position {:?}", container.scroll_position());

    // grow the host so nothing overflows; the engine unwinds the offset
    surface.set_client_size(Size::new(400, 300));
    container.perform_layout(&mut surface, &mut children);
    println!(
        "after resize: position {:?}, bars: horizontal={} vertical={}",
        container.scroll_position(),
        container.horizontal().is_visible(),
        container.vertical().is_visible(),
    );

    for call in surface.take_calls() {
        println!("host call: {call:?}");
    }
}
