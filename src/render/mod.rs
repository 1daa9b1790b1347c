//! Draw sinks that consume a frame's display list.

mod software;

pub use software::SoftwareCanvas;

use serde::Serialize;

use crate::display_list::DrawSink;
use crate::geometry::{Color, Rect};

/// One call received by a [`RecordingSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Fill { rect: Rect, color: Color },
    Glyph { rect: Rect, glyph: char, color: Color },
}

impl DrawCommand {
    pub fn rect(&self) -> Rect {
        match *self {
            DrawCommand::Fill { rect, .. } | DrawCommand::Glyph { rect, .. } => rect,
        }
    }
}

/// Records draw calls in the order they arrive.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Glyphs in paint order as a string.
    pub fn glyphs(&self) -> String {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Glyph { glyph, .. } => Some(*glyph),
                DrawCommand::Fill { .. } => None,
            })
            .collect()
    }
}

impl DrawSink for RecordingSink {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Fill { rect, color });
    }

    fn draw_glyph(&mut self, rect: Rect, glyph: char, color: Color) {
        self.commands.push(DrawCommand::Glyph { rect, glyph, color });
    }
}
