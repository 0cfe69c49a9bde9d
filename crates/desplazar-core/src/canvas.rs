//! Canvas implementations for rendering.

use crate::color::Color;
use crate::geometry::{Point, Rect};
use crate::widget::{Canvas, TextStyle};
use serde::{Deserialize, Serialize};

/// A single recorded draw operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Filled rectangle
    FillRect {
        /// Target rectangle
        rect: Rect,
        /// Fill color
        color: Color,
    },
    /// Stroked rectangle outline
    StrokeRect {
        /// Target rectangle
        rect: Rect,
        /// Stroke color
        color: Color,
        /// Stroke width
        width: f32,
    },
    /// Text run
    Text {
        /// Text content
        text: String,
        /// Baseline position
        position: Point,
        /// Text style
        style: TextStyle,
    },
    /// Clip push
    PushClip {
        /// Clip rectangle
        rect: Rect,
    },
    /// Clip pop
    PopClip,
}

/// A [`Canvas`] implementation that records draw operations.
///
/// Useful for testing (verify what was painted), serialization (send
/// commands to a backend), and diffing render outputs.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    clip_stack: Vec<Rect>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Clear all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.clip_stack.clear();
    }

    /// Get the current clip bounds (None if no clips pushed).
    #[must_use]
    pub fn current_clip(&self) -> Option<Rect> {
        self.clip_stack.last().copied()
    }

    /// Get the clip stack depth.
    #[must_use]
    pub fn clip_depth(&self) -> usize {
        self.clip_stack.len()
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        self.commands
            .push(DrawCommand::StrokeRect { rect, color, width });
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            position,
            style: style.clone(),
        });
    }

    fn push_clip(&mut self, rect: Rect) {
        self.clip_stack.push(rect);
        self.commands.push(DrawCommand::PushClip { rect });
    }

    fn pop_clip(&mut self) {
        self.clip_stack.pop();
        self.commands.push(DrawCommand::PopClip);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_canvas_records() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rect(Rect::new(0, 0, 10, 10), Color::BLACK);
        canvas.fill_rect(Rect::new(5, 5, 10, 10), Color::WHITE);
        assert_eq!(canvas.command_count(), 2);
        assert!(!canvas.is_empty());
    }

    #[test]
    fn test_recording_canvas_clip_stack() {
        let mut canvas = RecordingCanvas::new();
        assert_eq!(canvas.current_clip(), None);

        canvas.push_clip(Rect::new(0, 0, 100, 100));
        assert_eq!(canvas.current_clip(), Some(Rect::new(0, 0, 100, 100)));
        assert_eq!(canvas.clip_depth(), 1);

        canvas.pop_clip();
        assert_eq!(canvas.current_clip(), None);
    }

    #[test]
    fn test_take_commands_clears() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rect(Rect::new(0, 0, 1, 1), Color::BLACK);
        let cmds = canvas.take_commands();
        assert_eq!(cmds.len(), 1);
        assert!(canvas.is_empty());
    }
}
