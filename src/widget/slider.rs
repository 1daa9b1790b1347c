use crate::geometry::{Point, Rect};
use crate::group::{Layout, Target, group};
use crate::state::MouseAction;
use crate::text::{draw_text, measure};

use super::basic::bordered_box;
use super::style::SliderStyle;

/// Horizontal slider over `min..=max`. While grabbed the value follows the
/// pointer, even outside the track. Returns true when `value` changed.
pub fn slider(
    target: &mut dyn Target,
    id: &str,
    value: &mut i32,
    min: i32,
    max: i32,
    p: Point,
    style: &SliderStyle,
) -> bool {
    let (min, max) = if min <= max { (min, max) } else { (max, min) };
    let r = Rect::new(p.x, p.y, style.width, style.height);
    let travel = i64::from((style.width - style.handle_width).max(0));
    let range = i64::from(max) - i64::from(min);

    let old = *value;
    *value = (*value).clamp(min, max);
    let action = target.check_mouse(id, r);
    if matches!(action, MouseAction::Grab | MouseAction::Hold | MouseAction::Drag) && travel > 0 {
        let origin = target.absolute(r);
        let pointer = i64::from(target.state().mouse_position().x);
        let x = (pointer - i64::from(origin.x) - i64::from(style.handle_width / 2)).clamp(0, travel);
        *value = from_offset(min, (x * range + travel / 2) / travel);
    }

    let handle_x = if range == 0 {
        0
    } else {
        from_offset(0, (i64::from(*value) - i64::from(min)) * travel / range)
    };
    let font = style.text.font.unwrap_or_else(|| target.state().font());
    let label = value.to_string();
    let label_size = measure(&label, &font, style.text.scale);

    let mut g = group(target, id, r, Layout::None);
    draw_text(
        &mut g,
        &label,
        Point::new((style.width - label_size.x) / 2, (style.height - label_size.y) / 2),
        &style.text,
    );
    bordered_box(&mut g, Rect::new(handle_x, 0, style.handle_width, style.height), &style.handle);
    bordered_box(&mut g, Rect::new(0, 0, style.width, style.height), &style.track);
    g.end();
    *value != old
}

/// `base + offset` for an offset known to land inside the slider's range.
fn from_offset(base: i32, offset: i64) -> i32 {
    let v = i64::from(base) + offset;
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
