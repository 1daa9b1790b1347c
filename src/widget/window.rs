//! Top-level panels with a title bar.

use crate::geometry::{EdgeSize, Point, Rect};
use crate::group::{Group, Layout, Target};
use crate::text::{measure, measure_char, push_text};

use super::basic::push_bordered_box;
use super::panel::scroll_by_wheel;
use super::style::WindowStyle;

/// A vertical panel titled with its id. A zero width or height is computed
/// from the content, the title included.
pub fn window<'p>(
    target: &'p mut dyn Target,
    title: &str,
    rect: Rect,
    style: &WindowStyle,
) -> Group<'p> {
    open_window(target, title, None, rect, style)
}

/// A window whose content scrolls with the wheel. The title bar stays put.
pub fn scrollable_window<'p>(
    target: &'p mut dyn Target,
    title: &str,
    offset: &'p mut Point,
    rect: Rect,
    style: &WindowStyle,
) -> Group<'p> {
    open_window(target, title, Some(offset), rect, style)
}

fn open_window<'p>(
    target: &'p mut dyn Target,
    title: &str,
    offset: Option<&'p mut Point>,
    rect: Rect,
    style: &WindowStyle,
) -> Group<'p> {
    let font = style.title.font.unwrap_or_else(|| target.state().font());
    let title_size = measure(title, &font, style.title.scale);
    let bar_height = measure_char(&font, style.title.scale).y + 2;
    let pad = style.panel.padding;
    let padding = EdgeSize {
        left: pad.left + 1,
        top: pad.top + 1 + bar_height,
        right: pad.right + 1,
        bottom: pad.bottom + 1,
    };
    let border = style.panel.border;
    let bar = style.title_bar;
    let title_style = style.title;
    let title_text = title.to_string();
    let scroll = offset.as_deref().copied().unwrap_or(Point::ZERO);

    let mut g = Group::new(target, title, scroll, rect, Layout::Vertical)
        .with_padding(padding)
        .on_close(move |state, area, content| {
            if let Some(offset) = offset {
                scroll_by_wheel(state, offset, area, content, padding);
            }
            push_text(state, &title_text, area.top_left().offset(padding.left, 2), &title_style);
            state.display(Rect::new(area.x + 1, area.y + 1, area.w - 2, bar_height), bar, None);
            push_bordered_box(state, area, &border);
        });
    g.advance(Point::new(title_size.x, 0));
    g
}
