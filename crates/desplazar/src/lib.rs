//! Desplazar: a desktop widget toolkit built around an auto-scrolling
//! viewport engine.
//!
//! The toolkit splits into three layers, re-exported here:
//!
//! - [`desplazar_core`]: geometry, colors, dock/anchor constraints, the
//!   [`Widget`] trait and the [`Canvas`] draw abstraction
//! - [`desplazar_scroll`]: the viewport engine: canvas-size
//!   calculation, scrollbar visibility resolution, and the scroll
//!   container state machine
//! - [`desplazar_widgets`]: buttons, progress bars, tool strips, and
//!   the auto-scrolling [`ScrollPanel`]
//!
//! # Example
//!
//! ```
//! use desplazar::{Point, ProgressBar, Rect, ScrollPanel, Widget};
//!
//! let mut panel = ScrollPanel::new()
//!     .with_child_at(Box::new(ProgressBar::new().min_width(600)), Point::ORIGIN);
//! panel.layout(Rect::new(0, 0, 200, 100));
//!
//! assert!(panel.viewport().horizontal().is_visible());
//! ```

pub use desplazar_core::{
    AccessibleRole, Anchors, Canvas, ChildConstraint, Color, ColorParseError, Dock, DrawCommand,
    Event, FontWeight, Key, LayoutResult, MouseButton, Point, Rect, RecordingCanvas, Size,
    TextStyle, TypeId, Widget, WidgetId,
};
pub use desplazar_scroll::{
    canvas_size, resolve, AxisChange, ChildCollection, ChildSlot, HostSurface, RecordingSurface,
    Resolution, ScrollAxis, ScrollCallback, ScrollContainer, ScrollError, ScrollEvent,
    ScrollbarMetrics, SlotChildren, SurfaceCall, ViewportScroller, DEFAULT_SCROLLBAR_THICKNESS,
};
pub use desplazar_widgets::{
    Button, ButtonClicked, PanelScrolled, ProgressBar, ProgressMode, ScrollPanel, ToolItem,
    ToolItemActivated, ToolStrip,
};
