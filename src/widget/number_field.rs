use std::fmt::Display;
use std::str::FromStr;

use crate::geometry::Point;
use crate::group::Target;

use super::style::TextFieldStyle;
use super::text_field::text_field;

/// Text field editing a number. While focused the typed text is kept as is,
/// so partial input like `-` or `1.` survives between frames; `value` is
/// updated whenever the text parses. Empty text counts as zero. When the
/// field loses focus it shows `value` again. Returns true when `value`
/// changed.
pub fn number_field<T>(
    target: &mut dyn Target,
    id: &str,
    value: &mut T,
    p: Point,
    style: &TextFieldStyle,
) -> bool
where
    T: Copy + PartialEq + Default + FromStr + Display,
{
    let mut text = target
        .state_mut()
        .take_edit_text(id)
        .unwrap_or_else(|| value.to_string());

    let mut changed = false;
    if text_field(target, id, &mut text, p, style) {
        let parsed = if text.is_empty() { Some(T::default()) } else { text.parse().ok() };
        if let Some(v) = parsed {
            if v != *value {
                *value = v;
                changed = true;
            }
        }
    }

    if target.is_active(id) {
        target.state_mut().store_edit_text(id, text);
    }
    changed
}
