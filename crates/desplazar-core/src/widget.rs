//! Widget trait and related types.
//!
//! Widgets follow a measure-layout-paint cycle:
//!
//! 1. **Measure**: compute intrinsic size given constraints
//! 2. **Layout**: position self and children within allocated bounds
//! 3. **Paint**: generate draw commands for rendering

use crate::color::Color;
use crate::event::Event;
use crate::geometry::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Unique identifier for a widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WidgetId(pub u64);

impl WidgetId {
    /// Create a new widget ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

/// Type identifier for widget types (used for diffing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(std::any::TypeId);

impl TypeId {
    /// Get the type ID for a type.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self(std::any::TypeId::of::<T>())
    }
}

/// Result of laying out a widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutResult {
    /// Computed size after layout
    pub size: Size,
}

/// Accessibility role exposed by a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessibleRole {
    /// Generic container
    Group,
    /// Push button
    Button,
    /// Progress indicator
    ProgressIndicator,
    /// Tool bar
    ToolBar,
    /// Scrollable area
    ScrollArea,
    /// Scroll bar
    ScrollBar,
    /// Static text
    Text,
}

/// Font weight for text painting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontWeight {
    /// Normal weight
    #[default]
    Normal,
    /// Medium weight
    Medium,
    /// Bold weight
    Bold,
}

/// Style for text painting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub size: f32,
    /// Text color
    pub color: Color,
    /// Font weight
    pub weight: FontWeight,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 14.0,
            color: Color::BLACK,
            weight: FontWeight::Normal,
        }
    }
}

/// Drawing surface abstraction that widgets paint into.
pub trait Canvas {
    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Stroke a rectangle outline.
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32);

    /// Draw a text run at the given position.
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle);

    /// Push a clip rectangle; subsequent drawing is clipped to it.
    fn push_clip(&mut self, rect: Rect);

    /// Pop the most recent clip rectangle.
    fn pop_clip(&mut self);
}

/// Core widget trait that all UI elements implement.
pub trait Widget: Send + Sync {
    /// Get the type identifier for this widget type.
    fn type_id(&self) -> TypeId;

    /// Compute intrinsic size within the given maximum.
    fn measure(&self, available: Size) -> Size;

    /// Position self and children within allocated bounds.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Generate draw commands for rendering.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// Handle an input event; may emit a message for the application.
    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>>;

    /// Immutable access to child widgets.
    fn children(&self) -> &[Box<dyn Widget>] {
        &[]
    }

    /// Mutable access to child widgets.
    fn children_mut(&mut self) -> &mut [Box<dyn Widget>] {
        &mut []
    }

    /// Whether the widget currently responds to input.
    fn is_interactive(&self) -> bool {
        false
    }

    /// Whether the widget can take keyboard focus.
    fn is_focusable(&self) -> bool {
        false
    }

    /// Accessible name for assistive technology.
    fn accessible_name(&self) -> Option<&str> {
        None
    }

    /// Accessible role for assistive technology.
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Group
    }

    /// Stable identifier for UI tests.
    fn test_id(&self) -> Option<&str> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_id() {
        assert_eq!(WidgetId::new(42).0, 42);
    }

    #[test]
    fn test_type_id_distinct() {
        assert_ne!(TypeId::of::<String>(), TypeId::of::<i32>());
        assert_eq!(TypeId::of::<String>(), TypeId::of::<String>());
    }

    #[test]
    fn test_text_style_default() {
        let s = TextStyle::default();
        assert_eq!(s.weight, FontWeight::Normal);
        assert_eq!(s.color, Color::BLACK);
    }
}
