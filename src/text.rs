//! Fixed-cell bitmap text.
//!
//! Glyphs are emitted as display primitives carrying the character; the
//! backend owns the font bitmap and decides how a character is drawn.

use serde::{Deserialize, Serialize};

use crate::geometry::{Color, Point, Rect};
use crate::group::Target;
use crate::state::UiState;

/// Cell size of a monospaced bitmap font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Font {
    pub char_width: i32,
    pub char_height: i32,
}

impl Default for Font {
    fn default() -> Self {
        Self { char_width: 8, char_height: 8 }
    }
}

/// Resolved text style. `scale` is an exponent: 0 is 1x, 1 is 2x, 2 is 4x.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    /// Overrides the session font when set.
    pub font: Option<Font>,
    pub color: Color,
    pub scale: u32,
}

pub const TEXT: TextStyle = TextStyle {
    font: None,
    color: Color::rgb(45, 72, 106),
    scale: 0,
};

impl Default for TextStyle {
    fn default() -> Self {
        TEXT
    }
}

impl TextStyle {
    pub const fn with_color(self, color: Color) -> Self {
        Self { color, ..self }
    }

    pub const fn with_scale(self, scale: u32) -> Self {
        Self { scale, ..self }
    }

    pub const fn with_font(self, font: Font) -> Self {
        Self { font: Some(font), ..self }
    }
}

/// Size of one character cell.
pub fn measure_char(font: &Font, scale: u32) -> Point {
    Point::new(font.char_width << scale, font.char_height << scale)
}

/// Size of a single line of text.
pub fn measure(text: &str, font: &Font, scale: u32) -> Point {
    let cell = measure_char(font, scale);
    Point::new(cell.x * text.chars().count() as i32, cell.y)
}

/// Emit one glyph at `p` relative to the target's caret.
pub fn character(target: &mut dyn Target, ch: char, p: Point, style: &TextStyle) {
    let font = style.font.unwrap_or_else(|| target.state().font());
    let cell = measure_char(&font, style.scale);
    target.insert(Rect::new(p.x, p.y, cell.x, cell.y), style.color, Some(ch));
    target.advance(p + cell);
}

/// Emit a line of glyphs at `p` relative to the target's caret without
/// moving the caret. Returns the position just past the last glyph.
pub fn draw_text(target: &mut dyn Target, s: &str, p: Point, style: &TextStyle) -> Point {
    let font = style.font.unwrap_or_else(|| target.state().font());
    let cell = measure_char(&font, style.scale);
    let mut dst = Rect::new(p.x, p.y, cell.x, cell.y);
    for ch in s.chars() {
        target.insert(dst, style.color, Some(ch));
        dst.x += cell.x;
    }
    Point::new(dst.x, p.y)
}

/// Emit a line of glyphs at absolute `p` straight into the session, for
/// decorations added after a group has closed.
pub fn push_text(state: &mut UiState, s: &str, p: Point, style: &TextStyle) {
    let font = style.font.unwrap_or_else(|| state.font());
    let cell = measure_char(&font, style.scale);
    for (i, ch) in s.chars().enumerate() {
        let x = p.x + cell.x * i as i32;
        state.display(Rect::new(x, p.y, cell.x, cell.y), style.color, Some(ch));
    }
}

/// Emit a line of glyphs at `p` relative to the target's caret and advance
/// past it.
pub fn text(target: &mut dyn Target, s: &str, p: Point, style: &TextStyle) {
    let font = style.font.unwrap_or_else(|| target.state().font());
    let height = measure_char(&font, style.scale).y;
    let end = draw_text(target, s, p, style);
    target.advance(Point::new(end.x, p.y + height));
}
