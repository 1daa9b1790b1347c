//! Raw input events fed to the UI session.

use serde::{Deserialize, Serialize};

/// Size of the text input buffer in bytes, including the terminator slot.
/// At most `TEXT_INPUT_CAPACITY - 1` bytes of one text event are decoded.
pub const TEXT_INPUT_CAPACITY: usize = 32;

/// Glyph substituted for every character outside the single-byte range.
/// Cell 0x0f of the bundled 16x16 bitmap font.
pub const PLACEHOLDER_GLYPH: char = '\x0f';

/// Pointer buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// Keys the UI reacts to. Everything else is `Other` with a host keycode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Backspace,
    Other(u32),
}

/// A raw input event, in host window coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    PointerMove { x: i32, y: i32 },
    PointerDown { x: i32, y: i32, button: MouseButton },
    PointerUp { x: i32, y: i32, button: MouseButton },
    /// Wheel movement in notches; positive `dy` scrolls up.
    Wheel { dx: i32, dy: i32 },
    TextInput { text: String },
    KeyDown { key: Key },
}

impl InputEvent {
    pub fn press(x: i32, y: i32) -> Self {
        Self::PointerDown { x, y, button: MouseButton::Left }
    }

    pub fn release(x: i32, y: i32) -> Self {
        Self::PointerUp { x, y, button: MouseButton::Left }
    }

    pub fn motion(x: i32, y: i32) -> Self {
        Self::PointerMove { x, y }
    }

    pub fn wheel(dx: i32, dy: i32) -> Self {
        Self::Wheel { dx, dy }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::TextInput { text: text.into() }
    }
}

/// Events collected from the host's event pump between frames.
#[derive(Debug, Default)]
pub struct EventQueue {
    pending: Vec<InputEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.pending.push(event);
    }

    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.pending)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Decode text input into the single-byte glyph range of the bitmap font.
///
/// This is not a UTF-8 decoder: ASCII bytes are kept, continuation bytes are
/// skipped and every other lead byte becomes one [`PLACEHOLDER_GLYPH`]. Input
/// stops at the first NUL or after `TEXT_INPUT_CAPACITY - 1` bytes.
pub fn decode_text_input(raw: &[u8]) -> String {
    let mut out = String::new();
    for &byte in raw.iter().take(TEXT_INPUT_CAPACITY - 1) {
        if byte == 0 {
            break;
        }
        if byte & 0xc0 == 0x80 {
            continue;
        }
        if byte & 0x80 != 0 {
            out.push(PLACEHOLDER_GLYPH);
        } else {
            out.push(byte as char);
        }
    }
    out
}
