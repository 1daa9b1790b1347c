use crate::geometry::{EdgeSize, Point, Rect};
use crate::group::{Group, Layout, Target};
use crate::state::UiState;

use super::basic::push_bordered_box;
use super::style::PanelStyle;

/// Pixels scrolled per wheel notch.
pub const SCROLL_STEP: i32 = 8;

/// A group drawn as a bordered box. The box is emitted when the group
/// closes, after its content, so it renders beneath it.
pub fn panel<'p>(
    target: &'p mut dyn Target,
    id: &str,
    rect: Rect,
    layout: Layout,
    style: &PanelStyle,
) -> Group<'p> {
    let border = style.border;
    Group::new(target, id, Point::ZERO, rect, layout)
        .with_padding(style.padding.add(EdgeSize::all(1)))
        .on_close(move |state, area, _| push_bordered_box(state, area, &border))
}

/// A panel whose content is shifted by `offset`. Wheel movement over the
/// panel updates `offset`, kept between zero and the hidden part of the
/// content; the new offset applies from the next frame.
pub fn scrollable_panel<'p>(
    target: &'p mut dyn Target,
    id: &str,
    offset: &'p mut Point,
    rect: Rect,
    layout: Layout,
    style: &PanelStyle,
) -> Group<'p> {
    let border = style.border;
    let padding = style.padding.add(EdgeSize::all(1));
    Group::new(target, id, *offset, rect, layout)
        .with_padding(padding)
        .on_close(move |state, area, content| {
            scroll_by_wheel(state, offset, area, content, padding);
            push_bordered_box(state, area, &border);
        })
}

/// Apply pending wheel movement to `offset` when the pointer is over `area`
/// and clamp it to the scrollable range. Takes the wheel so enclosing scroll
/// areas, which close later, do not scroll as well.
pub(super) fn scroll_by_wheel(
    state: &mut UiState,
    offset: &mut Point,
    area: Rect,
    content: Point,
    padding: EdgeSize,
) {
    if area.contains(state.mouse_position()) && state.wheel() != Point::ZERO {
        let wheel = state.take_wheel();
        *offset = offset.offset(-wheel.x * SCROLL_STEP, -wheel.y * SCROLL_STEP);
    }
    let max_x = (content.x - (area.w - padding.horizontal())).max(0);
    let max_y = (content.y - (area.h - padding.vertical())).max(0);
    offset.x = offset.x.clamp(0, max_x);
    offset.y = offset.y.clamp(0, max_y);
}
