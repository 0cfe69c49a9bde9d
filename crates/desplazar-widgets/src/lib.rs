//! Widget implementations for the Desplazar widget toolkit.
//!
//! Widgets here are thin paint/event wrappers; the scrolling behavior of
//! [`ScrollPanel`] is provided entirely by the `desplazar-scroll`
//! engine.

pub mod button;
pub mod progress_bar;
pub mod scroll_panel;
pub mod tool_strip;

pub use button::{Button, ButtonClicked};
pub use progress_bar::{ProgressBar, ProgressMode};
pub use scroll_panel::{PanelScrolled, ScrollPanel};
pub use tool_strip::{ToolItem, ToolItemActivated, ToolStrip};
