//! Tool strip: a horizontal row of labelled tool items.

use desplazar_core::{
    widget::{AccessibleRole, LayoutResult, TextStyle},
    Canvas, Color, Event, MouseButton, Point, Rect, Size, TypeId, Widget,
};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// A single item in a [`ToolStrip`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolItem {
    /// Item label
    pub label: String,
    /// Whether the item responds to clicks
    pub enabled: bool,
}

impl ToolItem {
    /// Create an enabled item.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            enabled: true,
        }
    }

    /// Set the enabled state.
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// Message emitted when a tool item is activated.
#[derive(Debug, Clone)]
pub struct ToolItemActivated {
    /// Index of the activated item
    pub index: usize,
}

/// Horizontal strip of tool items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolStrip {
    items: Vec<ToolItem>,
    background: Color,
    item_padding: i32,
    font_size: f32,
    text_color: Color,
    highlight: Color,
    test_id_value: Option<String>,
    /// Index currently under the pointer
    #[serde(skip)]
    hovered: Option<usize>,
    #[serde(skip)]
    bounds: Rect,
}

impl Default for ToolStrip {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolStrip {
    /// Create an empty tool strip.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            background: Color::new(0.95, 0.95, 0.95, 1.0),
            item_padding: 8,
            font_size: 13.0,
            text_color: Color::BLACK,
            highlight: Color::new(0.85, 0.88, 0.95, 1.0),
            test_id_value: None,
            hovered: None,
            bounds: Rect::default(),
        }
    }

    /// Add an item.
    #[must_use]
    pub fn item(mut self, item: ToolItem) -> Self {
        self.items.push(item);
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

    /// Number of items.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    fn item_width(&self, item: &ToolItem) -> i32 {
        let char_width = self.font_size * 0.6;
        (item.label.chars().count() as f32 * char_width).ceil() as i32 + self.item_padding * 2
    }

    fn strip_height(&self) -> i32 {
        (self.font_size * 1.2).ceil() as i32 + self.item_padding * 2
    }

    /// Bounds of the item at `index`, in the strip's coordinates.
    fn item_bounds(&self, index: usize) -> Rect {
        let mut x = self.bounds.x;
        for (i, item) in self.items.iter().enumerate() {
            let width = self.item_width(item);
            if i == index {
                return Rect::new(x, self.bounds.y, width, self.bounds.height);
            }
            x += width;
        }
        Rect::default()
    }

    fn item_at(&self, position: Point) -> Option<usize> {
        (0..self.items.len()).find(|&i| self.item_bounds(i).contains_point(position))
    }
}

impl Widget for ToolStrip {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, available: Size) -> Size {
        let width: i32 = self.items.iter().map(|i| self.item_width(i)).sum();
        Size::new(
            width.min(available.width.max(0)),
            self.strip_height().min(available.height.max(0)),
        )
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rect(self.bounds, self.background);

        let style = TextStyle {
            size: self.font_size,
            color: self.text_color,
            ..Default::default()
        };
        let disabled_style = TextStyle {
            color: Color::new(0.6, 0.6, 0.6, 1.0),
            ..style.clone()
        };

        for (i, item) in self.items.iter().enumerate() {
            let bounds = self.item_bounds(i);
            if self.hovered == Some(i) && item.enabled {
                canvas.fill_rect(bounds, self.highlight);
            }
            let text_pos = Point::new(bounds.x + self.item_padding, bounds.y + self.item_padding);
            let text_style = if item.enabled { &style } else { &disabled_style };
            canvas.draw_text(&item.label, text_pos, text_style);
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        match event {
            Event::MouseMove { position } => {
                self.hovered = self.item_at(*position);
                None
            }
            Event::MouseLeave => {
                self.hovered = None;
                None
            }
            Event::MouseUp {
                position,
                button: MouseButton::Left,
            } => {
                let index = self.item_at(*position)?;
                if self.items[index].enabled {
                    Some(Box::new(ToolItemActivated { index }))
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    fn is_interactive(&self) -> bool {
        self.items.iter().any(|i| i.enabled)
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::ToolBar
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }
}
