//! Push, toggle and choice buttons.

use crate::geometry::{EdgeSize, Point, Rect};
use crate::group::{Layout, Target};
use crate::state::MouseAction;
use crate::text::{measure, text};

use super::panel::panel;
use super::style::{ButtonStyle, PanelStyle};

/// Common button behavior. `label` defaults to `id` when empty; `pushed`
/// draws the button sunken. Returns true when the button was clicked.
pub fn button_base(
    target: &mut dyn Target,
    id: &str,
    label: &str,
    pushed: bool,
    p: Point,
    style: &ButtonStyle,
) -> bool {
    let label = if label.is_empty() { id } else { label };
    let font = style.text.font.unwrap_or_else(|| target.state().font());
    let size = style
        .padding
        .add(EdgeSize::all(1))
        .outer(measure(label, &font, style.text.scale));
    let r = Rect::new(p.x, p.y, size.x, size.y);
    let action = target.check_mouse(id, r);
    let grabbing = matches!(action, MouseAction::Grab | MouseAction::Hold);

    let border = match (grabbing == pushed, grabbing) {
        (true, true) => style.grabbed,
        (true, false) => style.normal,
        (false, true) => style.pressed_grabbed,
        (false, false) => style.pressed,
    };
    let panel_style = PanelStyle { border, padding: style.padding };
    let mut g = panel(target, id, r, Layout::None, &panel_style);
    text(&mut g, label, Point::ZERO, &style.text);
    g.end();
    action == MouseAction::Action
}

/// A push button. Returns true on the frame it is clicked.
pub fn button(target: &mut dyn Target, id: &str, p: Point, style: &ButtonStyle) -> bool {
    button_base(target, id, id, false, p, style)
}

/// A push button showing `label` instead of its id.
pub fn labeled_button(
    target: &mut dyn Target,
    id: &str,
    label: &str,
    p: Point,
    style: &ButtonStyle,
) -> bool {
    button_base(target, id, label, false, p, style)
}

/// A button reflecting `value`, negating it when clicked.
pub fn toggle_button(
    target: &mut dyn Target,
    id: &str,
    value: &mut bool,
    p: Point,
    style: &ButtonStyle,
) -> bool {
    if button_base(target, id, id, *value, p, style) {
        *value = !*value;
        return true;
    }
    false
}

/// One option of a multiple choice. Appears pushed while `value` equals
/// `option`; clicking it selects `option`. Returns true only on a change.
pub fn choice_button<T: PartialEq>(
    target: &mut dyn Target,
    id: &str,
    value: &mut T,
    option: T,
    p: Point,
    style: &ButtonStyle,
) -> bool {
    let selected = *value == option;
    if button_base(target, id, id, selected, p, style) && !selected {
        *value = option;
        return true;
    }
    false
}
