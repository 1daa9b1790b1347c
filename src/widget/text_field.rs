use crate::geometry::{EdgeSize, Point, Rect};
use crate::group::{Layout, Target};
use crate::state::TextAction;
use crate::text::{draw_text, measure_char};

use super::panel::panel;
use super::style::{PanelStyle, TextFieldStyle};

const CARET_BLINK_MS: u128 = 500;

/// Single line text input. Clicking it takes the keyboard focus; while it has
/// focus typed text is appended and backspace erases the last character.
/// Only the tail that fits is shown. Returns true when `value` changed.
pub fn text_field(
    target: &mut dyn Target,
    id: &str,
    value: &mut String,
    p: Point,
    style: &TextFieldStyle,
) -> bool {
    let font = style.text.font.unwrap_or_else(|| target.state().font());
    let cell = measure_char(&font, style.text.scale);
    let inner = Point::new(cell.x * style.width_chars + 1, cell.y);
    let size = style.padding.add(EdgeSize::all(1)).outer(inner);
    let r = Rect::new(p.x, p.y, size.x, size.y);
    target.check_mouse(id, r);

    let changed = match target.check_text(id) {
        TextAction::Input => {
            let typed = target.state().text();
            value.push_str(typed);
            !typed.is_empty()
        }
        TextAction::Backspace => value.pop().is_some(),
        TextAction::None => false,
    };

    let active = target.is_active(id);
    let blink_on = (target.state().frame_time().as_millis() / CARET_BLINK_MS) % 2 == 0;
    let panel_style = PanelStyle {
        border: if active { style.active } else { style.normal },
        padding: style.padding,
    };

    let skip = value.chars().count().saturating_sub(style.width_chars.max(0) as usize);
    let start = value.char_indices().nth(skip).map_or(value.len(), |(i, _)| i);

    let mut g = panel(target, id, r, Layout::None, &panel_style);
    let end = draw_text(&mut g, &value[start..], Point::ZERO, &style.text);
    if active && blink_on {
        g.insert(Rect::new(end.x, 0, 1, cell.y), style.caret, None);
    }
    g.end();
    changed
}
