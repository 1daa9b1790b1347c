//! Boxes and labels.

use crate::geometry::{Color, Point, Rect};
use crate::group::Target;
use crate::state::UiState;
use crate::text::{TextStyle, draw_text, measure};

use super::style::BoxStyle;

/// A filled rect relative to the target's caret. Does not advance.
pub fn colored_box(target: &mut dyn Target, rect: Rect, color: Color) {
    target.insert(rect, color, None);
}

/// A bordered box relative to the target's caret. Does not advance.
pub fn bordered_box(target: &mut dyn Target, rect: Rect, style: &BoxStyle) {
    let rect = target.absolute(rect);
    push_bordered_box(target.state_mut(), rect, style);
}

/// A bordered box in absolute coordinates. Borders go in before the fill so
/// they paint over it.
pub fn push_bordered_box(state: &mut UiState, r: Rect, style: &BoxStyle) {
    let b = &style.border;
    state.display(Rect::new(r.x + 1, r.y, r.w - 2, 1), b.top, None);
    state.display(Rect::new(r.x, r.y + 1, 1, r.h - 2), b.left, None);
    state.display(Rect::new(r.x + 1, r.y + r.h - 1, r.w - 2, 1), b.bottom, None);
    state.display(Rect::new(r.x + r.w - 1, r.y + 1, 1, r.h - 2), b.right, None);
    state.display(r.inset(1, 1, 1, 1), style.background, None);
}

/// A line of text with a one pixel margin.
pub fn label(target: &mut dyn Target, s: &str, p: Point, style: &TextStyle) {
    let font = style.font.unwrap_or_else(|| target.state().font());
    let size = measure(s, &font, style.scale);
    draw_text(target, s, p.offset(1, 1), style);
    target.advance(Point::new(p.x + size.x + 2, p.y + size.y + 2));
}
