//! Auto-scrolling viewport engine for the Desplazar widget toolkit.
//!
//! Any container hosting children larger than its visible area drives
//! its scrolling through this crate:
//!
//! - [`canvas_size`] computes the virtual document size from child
//!   dock/anchor constraints
//! - [`resolve`] reconciles scrollbar visibility across both axes (a
//!   fixed-point computation: showing one bar shrinks the other axis's
//!   budget)
//! - [`ViewportScroller`] turns a position change into child moves plus
//!   one host blit-scroll
//! - [`ScrollContainer`] owns the per-container state and runs the
//!   recomputation pass
//!
//! The engine is single-threaded and synchronous; a pass is atomic from
//! the caller's point of view.

mod axis;
mod canvas_size;
mod container;
mod error;
mod event;
mod host;
mod resolver;
mod scroller;

pub use axis::ScrollAxis;
pub use canvas_size::canvas_size;
pub use container::{ScrollCallback, ScrollContainer};
pub use error::ScrollError;
pub use event::{AxisChange, ScrollEvent};
pub use host::{
    ChildCollection, ChildSlot, HostSurface, RecordingSurface, SlotChildren, SurfaceCall,
};
pub use resolver::{resolve, Resolution, ScrollbarMetrics, DEFAULT_SCROLLBAR_THICKNESS};
pub use scroller::ViewportScroller;
