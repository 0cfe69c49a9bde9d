//! Progress bar widget.

use desplazar_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Color, Event, Rect, Size, TypeId, Widget,
};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Mode of the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProgressMode {
    /// Determinate progress (known percentage).
    #[default]
    Determinate,
    /// Indeterminate progress (unknown percentage, animated by the host).
    Indeterminate,
}

/// Progress bar widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressBar {
    /// Current progress value (0.0 to 1.0)
    value: f32,
    /// Progress mode
    mode: ProgressMode,
    /// Minimum width
    min_width: i32,
    /// Height of the bar
    height: i32,
    /// Track color (background)
    track_color: Color,
    /// Fill color (progress)
    fill_color: Color,
    /// Accessible name
    accessible_name_value: Option<String>,
    /// Test ID
    test_id_value: Option<String>,
    /// Current layout bounds
    #[serde(skip)]
    bounds: Rect,
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self {
            value: 0.0,
            mode: ProgressMode::Determinate,
            min_width: 100,
            height: 8,
            track_color: Color::new(0.88, 0.88, 0.88, 1.0),
            fill_color: Color::new(0.13, 0.59, 0.95, 1.0),
            accessible_name_value: None,
            test_id_value: None,
            bounds: Rect::default(),
        }
    }
}

impl ProgressBar {
    /// Create a new progress bar.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a progress bar with the given value.
    #[must_use]
    pub fn with_value(value: f32) -> Self {
        Self::default().value(value)
    }

    /// Set the progress value (clamped to 0.0..=1.0).
    #[must_use]
    pub fn value(mut self, value: f32) -> Self {
        self.value = value.clamp(0.0, 1.0);
        self
    }

    /// Set the progress mode.
    #[must_use]
    pub fn mode(mut self, mode: ProgressMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the minimum width.
    #[must_use]
    pub fn min_width(mut self, width: i32) -> Self {
        self.min_width = width.max(20);
        self
    }

    /// Set the height.
    #[must_use]
    pub fn height(mut self, height: i32) -> Self {
        self.height = height.max(4);
        self
    }

    /// Set the track color.
    #[must_use]
    pub fn track_color(mut self, color: Color) -> Self {
        self.track_color = color;
        self
    }

    /// Set the fill color.
    #[must_use]
    pub fn fill_color(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    /// Set the accessible name.
    #[must_use]
    pub fn accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Get the current value.
    #[must_use]
    pub fn get_value(&self) -> f32 {
        self.value
    }

    /// Get the percentage (0-100).
    #[must_use]
    pub fn percentage(&self) -> u8 {
        (self.value * 100.0).round() as u8
    }

    /// Check if progress is complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.mode == ProgressMode::Determinate && self.value >= 1.0
    }

    /// Set the value directly (mutable).
    pub fn set_value(&mut self, value: f32) {
        self.value = value.clamp(0.0, 1.0);
    }

    /// Increment the value by a delta.
    pub fn increment(&mut self, delta: f32) {
        self.value = (self.value + delta).clamp(0.0, 1.0);
    }

    fn fill_width(&self, total_width: i32) -> i32 {
        (total_width as f32 * self.value).round() as i32
    }
}

impl Widget for ProgressBar {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, available: Size) -> Size {
        Size::new(
            self.min_width.min(available.width.max(0)),
            self.height.min(available.height.max(0)),
        )
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rect(self.bounds, self.track_color);

        let fill = match self.mode {
            ProgressMode::Determinate => self.fill_width(self.bounds.width),
            // painted as a fixed-width sweep; the host animates its origin
            ProgressMode::Indeterminate => self.bounds.width / 3,
        };
        if fill > 0 {
            canvas.fill_rect(
                Rect::new(self.bounds.x, self.bounds.y, fill, self.bounds.height),
                self.fill_color,
            );
        }
    }

    fn event(&mut self, _event: &Event) -> Option<Box<dyn Any + Send>> {
        None
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::ProgressIndicator
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }
}
