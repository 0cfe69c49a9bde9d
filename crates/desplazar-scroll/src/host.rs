//! Collaborator capabilities consumed by the engine.
//!
//! The engine never owns a window or a widget tree; it works through two
//! narrow traits. `HostSurface` is whatever can report a client size and
//! shift already-rendered pixels; `ChildCollection` is whatever owns the
//! child elements and their dock/anchor constraints.

use desplazar_core::{ChildConstraint, Point, Rect, Size};

/// A surface the container scrolls: reports the visible client size and
/// accepts blit/invalidate instructions.
pub trait HostSurface {
    /// Current visible client size.
    fn client_size(&self) -> Size;

    /// Shift the already-rendered pixels of `rect` by `(dx, dy)`.
    fn blit_scroll(&mut self, rect: Rect, dx: i32, dy: i32);

    /// Mark `rect` as needing a repaint.
    fn invalidate(&mut self, rect: Rect);
}

/// Indexed access to a container's child elements.
///
/// The engine reads bounds and constraints during canvas-size
/// calculation and repositions children through [`set_origin`] when
/// scrolling. It never recurses into grandchildren.
///
/// [`set_origin`]: ChildCollection::set_origin
pub trait ChildCollection {
    /// Number of children.
    fn len(&self) -> usize;

    /// Whether the collection is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current bounds of the child at `index`.
    fn bounds(&self, index: usize) -> Rect;

    /// Dock/anchor constraint of the child at `index`.
    fn constraint(&self, index: usize) -> ChildConstraint;

    /// Move the child at `index` to a new origin, keeping its size.
    fn set_origin(&mut self, index: usize, origin: Point);
}

/// A recorded host-surface call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceCall {
    /// Recorded [`HostSurface::blit_scroll`]
    BlitScroll {
        /// Blitted rectangle
        rect: Rect,
        /// Horizontal pixel shift
        dx: i32,
        /// Vertical pixel shift
        dy: i32,
    },
    /// Recorded [`HostSurface::invalidate`]
    Invalidate {
        /// Invalidated rectangle
        rect: Rect,
    },
}

/// A [`HostSurface`] that records every call, for tests and demos.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    client: Size,
    calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    /// Create a surface with the given client size.
    #[must_use]
    pub fn new(client: Size) -> Self {
        Self {
            client,
            calls: Vec::new(),
        }
    }

    /// Change the reported client size (simulates a host resize).
    pub fn set_client_size(&mut self, client: Size) {
        self.client = client;
    }

    /// Recorded calls in order.
    #[must_use]
    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// Take ownership of the recorded calls, clearing the surface.
    pub fn take_calls(&mut self) -> Vec<SurfaceCall> {
        std::mem::take(&mut self.calls)
    }

    /// Number of recorded blit-scrolls.
    #[must_use]
    pub fn blit_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, SurfaceCall::BlitScroll { .. }))
            .count()
    }

    /// Clear all recorded calls.
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl HostSurface for RecordingSurface {
    fn client_size(&self) -> Size {
        self.client
    }

    fn blit_scroll(&mut self, rect: Rect, dx: i32, dy: i32) {
        self.calls.push(SurfaceCall::BlitScroll { rect, dx, dy });
    }

    fn invalidate(&mut self, rect: Rect) {
        self.calls.push(SurfaceCall::Invalidate { rect });
    }
}

/// A child entry in a [`SlotChildren`] collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildSlot {
    /// Current bounds
    pub bounds: Rect,
    /// Dock/anchor constraint
    pub constraint: ChildConstraint,
}

/// A plain `Vec`-backed [`ChildCollection`].
///
/// Container widgets implement [`ChildCollection`] over their own child
/// storage; this one serves tests, demos, and hosts without a widget
/// tree.
#[derive(Debug, Default)]
pub struct SlotChildren {
    slots: Vec<ChildSlot>,
}

impl SlotChildren {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a child; returns its index.
    pub fn push(&mut self, bounds: Rect, constraint: ChildConstraint) -> usize {
        self.slots.push(ChildSlot { bounds, constraint });
        self.slots.len() - 1
    }

    /// Remove the child at `index`.
    pub fn remove(&mut self, index: usize) -> ChildSlot {
        self.slots.remove(index)
    }

    /// All slots in order.
    #[must_use]
    pub fn slots(&self) -> &[ChildSlot] {
        &self.slots
    }
}

impl ChildCollection for SlotChildren {
    fn len(&self) -> usize {
        self.slots.len()
    }

    fn bounds(&self, index: usize) -> Rect {
        self.slots[index].bounds
    }

    fn constraint(&self, index: usize) -> ChildConstraint {
        self.slots[index].constraint
    }

    fn set_origin(&mut self, index: usize, origin: Point) {
        let slot = &mut self.slots[index];
        slot.bounds = slot.bounds.with_origin(origin);
    }
}
