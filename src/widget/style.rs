//! Resolved widget styles and the default look.

use crate::geometry::{Color, EdgeSize};
use crate::text::{TEXT, TextStyle};

/// One color per box edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderColor {
    pub left: Color,
    pub top: Color,
    pub right: Color,
    pub bottom: Color,
}

impl BorderColor {
    pub const fn all(c: Color) -> Self {
        Self { left: c, top: c, right: c, bottom: c }
    }

    /// Swap opposite edges, turning a raised bevel into a sunken one.
    pub const fn inverted(self) -> Self {
        Self { left: self.right, top: self.bottom, right: self.left, bottom: self.top }
    }
}

/// A filled box with a one pixel border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxStyle {
    pub background: Color,
    pub border: BorderColor,
}

impl BoxStyle {
    pub const fn with_background(self, background: Color) -> Self {
        Self { background, ..self }
    }

    pub const fn with_border(self, border: BorderColor) -> Self {
        Self { border, ..self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelStyle {
    pub border: BoxStyle,
    /// Space between the border and the content.
    pub padding: EdgeSize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowStyle {
    pub panel: PanelStyle,
    pub title: TextStyle,
    pub title_bar: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonStyle {
    pub text: TextStyle,
    pub padding: EdgeSize,
    pub normal: BoxStyle,
    pub grabbed: BoxStyle,
    pub pressed: BoxStyle,
    pub pressed_grabbed: BoxStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextFieldStyle {
    pub text: TextStyle,
    pub padding: EdgeSize,
    pub normal: BoxStyle,
    pub active: BoxStyle,
    pub caret: Color,
    /// Visible width in characters.
    pub width_chars: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderStyle {
    pub text: TextStyle,
    pub track: BoxStyle,
    pub handle: BoxStyle,
    pub width: i32,
    pub height: i32,
    pub handle_width: i32,
}

const RAISED: BorderColor = BorderColor {
    left: Color::WHITE,
    top: Color::WHITE,
    right: Color::BLACK,
    bottom: Color::BLACK,
};

pub const PANEL_BOX: BoxStyle = BoxStyle {
    background: Color::rgb(219, 228, 240),
    border: RAISED,
};

pub const PANEL: PanelStyle = PanelStyle {
    border: PANEL_BOX,
    padding: EdgeSize::all(2),
};

pub const WINDOW: WindowStyle = WindowStyle {
    panel: PANEL,
    title: TEXT.with_color(Color::WHITE),
    title_bar: Color::rgb(45, 72, 106),
};

pub const BUTTON_BOX: BoxStyle = BoxStyle {
    background: Color::rgb(176, 195, 222),
    border: RAISED,
};

pub const BUTTON_BOX_GRABBED: BoxStyle = BUTTON_BOX.with_background(Color::rgb(147, 173, 210));
pub const BUTTON_BOX_PRESSED: BoxStyle = BUTTON_BOX.with_border(RAISED.inverted());
pub const BUTTON_BOX_PRESSED_GRABBED: BoxStyle =
    BUTTON_BOX_PRESSED.with_background(BUTTON_BOX_GRABBED.background);

pub const BUTTON: ButtonStyle = ButtonStyle {
    text: TEXT,
    padding: EdgeSize::all(3),
    normal: BUTTON_BOX,
    grabbed: BUTTON_BOX_GRABBED,
    pressed: BUTTON_BOX_PRESSED,
    pressed_grabbed: BUTTON_BOX_PRESSED_GRABBED,
};

pub const TEXT_FIELD: TextFieldStyle = TextFieldStyle {
    text: TEXT,
    padding: EdgeSize::all(2),
    normal: BoxStyle {
        background: Color::rgb(240, 244, 250),
        border: RAISED.inverted(),
    },
    active: BoxStyle {
        background: Color::WHITE,
        border: RAISED.inverted(),
    },
    caret: Color::rgb(45, 72, 106),
    width_chars: 16,
};

pub const SLIDER: SliderStyle = SliderStyle {
    text: TEXT,
    track: BoxStyle {
        background: Color::rgb(240, 244, 250),
        border: RAISED.inverted(),
    },
    handle: BUTTON_BOX,
    width: 128,
    height: 14,
    handle_width: 8,
};
