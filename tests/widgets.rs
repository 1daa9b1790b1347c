//! Stock widgets driven through whole frames.

mod common;

use common::{record, step};
use dui::event::{InputEvent, Key};
use dui::geometry::{Point, Rect};
use dui::group::{Layout, Target};
use dui::render::DrawCommand;
use dui::state::UiState;
use dui::text::TEXT;
use dui::widget::{self, style};

/// Press and release at `p`, building `ui` each frame. Returns what `ui`
/// returned on the release frame.
fn click<R>(state: &mut UiState, p: Point, mut ui: impl FnMut(&mut dyn Target) -> R) -> R {
    step(state, &[InputEvent::press(p.x, p.y)], |f| ui(f));
    step(state, &[InputEvent::release(p.x, p.y)], |f| ui(f))
}

// ============================================================================
// Buttons
// ============================================================================

#[test]
fn button_fires_once_on_release() {
    let mut state = UiState::default();
    let ui = |t: &mut dyn Target| widget::button(t, "ok", Point::ZERO, &style::BUTTON);

    assert!(!step(&mut state, &[InputEvent::press(5, 5)], |f| ui(f)));
    assert!(step(&mut state, &[InputEvent::release(5, 5)], |f| ui(f)));
    assert!(!step(&mut state, &[], |f| ui(f)));
}

#[test]
fn button_released_outside_does_not_fire() {
    let mut state = UiState::default();
    let ui = |t: &mut dyn Target| widget::button(t, "ok", Point::ZERO, &style::BUTTON);
    step(&mut state, &[InputEvent::press(5, 5)], |f| ui(f));
    assert!(!step(&mut state, &[InputEvent::release(300, 300)], |f| ui(f)));
}

#[test]
fn button_size_follows_label() {
    let mut state = UiState::default();
    let caret = step(&mut state, &[], |f| {
        let mut row = dui::group::group(f, "row", Rect::default(), Layout::Horizontal);
        widget::button(&mut row, "ok", Point::ZERO, &style::BUTTON);
        row.caret()
    });
    // Two 8px glyphs, 3px padding and a 1px border on each side.
    assert_eq!(caret, Point::new(24, 0));
}

#[test]
fn held_button_looks_pressed() {
    let mut state = UiState::default();
    step(&mut state, &[InputEvent::press(5, 5)], |f| {
        widget::button(f, "ok", Point::ZERO, &style::BUTTON)
    });
    let sink = record(&state);
    let held = style::BUTTON.pressed_grabbed;
    assert!(sink.commands.iter().any(|c| matches!(c, DrawCommand::Fill { color, .. } if *color == held.background)));
    assert!(sink.commands.iter().any(|c| matches!(c, DrawCommand::Fill { color, .. } if *color == held.border.top)));
}

#[test]
fn button_label_paints_over_background() {
    let mut state = UiState::default();
    step(&mut state, &[], |f| widget::button(f, "ok", Point::ZERO, &style::BUTTON));
    let sink = record(&state);
    assert!(matches!(sink.commands.first(), Some(DrawCommand::Fill { .. })));
    assert_eq!(sink.glyphs(), "ko");
    assert!(matches!(sink.commands.last(), Some(DrawCommand::Glyph { glyph: 'o', .. })));
}

#[test]
fn toggle_button_flips_value() {
    let mut state = UiState::default();
    let mut on = false;
    let changed = click(&mut state, Point::new(2, 2), |t| {
        widget::toggle_button(t, "on", &mut on, Point::ZERO, &style::BUTTON)
    });
    assert!(changed);
    assert!(on);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pick {
    First,
    Second,
}

fn picker(t: &mut dyn Target, value: &mut Pick) -> bool {
    let a = widget::choice_button(t, "first", value, Pick::First, Point::new(0, 0), &style::BUTTON);
    let b = widget::choice_button(t, "second", value, Pick::Second, Point::new(0, 30), &style::BUTTON);
    a || b
}

#[test]
fn choice_button_selects_option() {
    let mut state = UiState::default();
    let mut value = Pick::First;
    assert!(click(&mut state, Point::new(4, 34), |t| picker(t, &mut value)));
    assert_eq!(value, Pick::Second);
}

#[test]
fn choosing_selected_option_is_not_a_change() {
    let mut state = UiState::default();
    let mut value = Pick::First;
    assert!(!click(&mut state, Point::new(4, 4), |t| picker(t, &mut value)));
    assert_eq!(value, Pick::First);
}

// ============================================================================
// Text field
// ============================================================================

#[test]
fn text_field_takes_typing_after_click() {
    let mut state = UiState::default();
    let mut name = String::new();
    let mut ui = |t: &mut dyn Target| {
        widget::text_field(t, "name", &mut name, Point::ZERO, &style::TEXT_FIELD)
    };

    assert!(!step(&mut state, &[InputEvent::text("x")], |f| ui(f)), "no focus yet");
    click(&mut state, Point::new(3, 3), &mut ui);
    assert!(step(&mut state, &[InputEvent::text("hi")], |f| ui(f)));
    assert!(step(&mut state, &[InputEvent::KeyDown { key: Key::Backspace }], |f| ui(f)));
    assert!(!step(&mut state, &[], |f| ui(f)));
    drop(ui);
    assert_eq!(name, "h");
}

#[test]
fn backspace_on_empty_field_is_not_a_change() {
    let mut state = UiState::default();
    let mut name = String::new();
    let mut ui = |t: &mut dyn Target| {
        widget::text_field(t, "name", &mut name, Point::ZERO, &style::TEXT_FIELD)
    };
    click(&mut state, Point::new(3, 3), &mut ui);
    assert!(!step(&mut state, &[InputEvent::KeyDown { key: Key::Backspace }], |f| ui(f)));
}

#[test]
fn text_field_shows_only_the_tail() {
    let mut state = UiState::default();
    let mut value = "abcdefghijklmnopqrstuvwxyz".to_string();
    step(&mut state, &[], |f| {
        widget::text_field(f, "long", &mut value, Point::ZERO, &style::TEXT_FIELD)
    });
    let shown: String = record(&state).glyphs().chars().rev().collect();
    assert_eq!(shown, "klmnopqrstuvwxyz");
}

// ============================================================================
// Number fields
// ============================================================================

fn shown_text(state: &UiState) -> String {
    record(state).glyphs().chars().rev().collect()
}

#[test]
fn number_field_parses_while_typing() {
    let mut state = UiState::default();
    let mut count = 42;
    let mut ui = |t: &mut dyn Target| {
        widget::number_field(t, "count", &mut count, Point::ZERO, &style::TEXT_FIELD)
    };

    click(&mut state, Point::new(3, 3), &mut ui);
    assert_eq!(shown_text(&state), "42");
    assert!(step(&mut state, &[InputEvent::KeyDown { key: Key::Backspace }], |f| ui(f)));
    assert!(!step(&mut state, &[InputEvent::text("x")], |f| ui(f)), "unparsable text");
    step(&mut state, &[], |f| ui(f));
    assert_eq!(shown_text(&state), "4x", "invalid text is kept while focused");

    // Focus moves away: the next frame shows the value again.
    step(&mut state, &[InputEvent::press(300, 300)], |f| ui(f));
    step(&mut state, &[InputEvent::release(300, 300)], |f| ui(f));
    assert_eq!(shown_text(&state), "4");
    drop(ui);
    assert_eq!(count, 4);
}

#[test]
fn number_field_keeps_partial_float_input() {
    let mut state = UiState::default();
    let mut ratio = 1.0_f64;
    let mut ui = |t: &mut dyn Target| {
        widget::number_field(t, "ratio", &mut ratio, Point::ZERO, &style::TEXT_FIELD)
    };

    click(&mut state, Point::new(3, 3), &mut ui);
    assert!(step(&mut state, &[InputEvent::KeyDown { key: Key::Backspace }], |f| ui(f)), "empty is zero");
    assert!(step(&mut state, &[InputEvent::text("11.")], |f| ui(f)));
    assert_eq!(shown_text(&state), "11.");
    assert!(step(&mut state, &[InputEvent::text("5")], |f| ui(f)));
    assert_eq!(shown_text(&state), "11.5");
    drop(ui);
    assert_eq!(ratio, 11.5);
}

// ============================================================================
// Slider
// ============================================================================

#[test]
fn slider_follows_pointer_while_grabbed() {
    let mut state = UiState::default();
    let mut volume = 50;
    let mut ui = |t: &mut dyn Target| {
        widget::slider(t, "volume", &mut volume, 0, 100, Point::ZERO, &style::SLIDER)
    };

    assert!(step(&mut state, &[InputEvent::press(4, 5)], |f| ui(f)));
    assert!(step(&mut state, &[InputEvent::motion(500, 5)], |f| ui(f)), "drag past the end");
    assert!(!step(&mut state, &[InputEvent::release(500, 5)], |f| ui(f)));
    assert!(!step(&mut state, &[InputEvent::motion(10, 5)], |f| ui(f)));
    drop(ui);
    assert_eq!(volume, 100);
}

#[test]
fn slider_press_in_middle_keeps_middle_value() {
    let mut state = UiState::default();
    let mut volume = 50;
    let changed = step(&mut state, &[InputEvent::press(64, 5)], |f| {
        widget::slider(f, "volume", &mut volume, 0, 100, Point::ZERO, &style::SLIDER)
    });
    assert!(!changed);
    assert_eq!(volume, 50);
}

#[test]
fn slider_spans_full_i32_range() {
    let mut state = UiState::default();
    let mut value = 0;
    let mut ui = |t: &mut dyn Target| {
        widget::slider(t, "wide", &mut value, 0, i32::MAX, Point::ZERO, &style::SLIDER)
    };
    assert!(step(&mut state, &[InputEvent::press(64, 5)], |f| ui(f)));
    drop(ui);
    assert_eq!(value, 1 << 30, "middle of the track");

    step(&mut state, &[InputEvent::motion(500, 5)], |f| {
        widget::slider(f, "wide", &mut value, 0, i32::MAX, Point::ZERO, &style::SLIDER)
    });
    assert_eq!(value, i32::MAX);
}

// ============================================================================
// Panels and labels
// ============================================================================

#[test]
fn panel_background_renders_beneath_children() {
    let mut state = UiState::default();
    step(&mut state, &[], |f| {
        let mut p = widget::panel(f, "p", Rect::new(0, 0, 0, 0), Layout::Vertical, &style::PANEL);
        widget::label(&mut p, "x", Point::ZERO, &TEXT);
    });
    let sink = record(&state);
    assert_eq!(
        sink.commands.first(),
        Some(&DrawCommand::Fill { rect: Rect::new(1, 1, 14, 14), color: style::PANEL_BOX.background })
    );
    assert!(matches!(sink.commands.last(), Some(DrawCommand::Glyph { glyph: 'x', .. })));
}

#[test]
fn label_advances_past_its_margin() {
    let mut state = UiState::default();
    let caret = step(&mut state, &[], |f| {
        let mut col = dui::group::group(f, "col", Rect::default(), Layout::Vertical);
        widget::label(&mut col, "ab", Point::ZERO, &TEXT);
        col.caret()
    });
    assert_eq!(caret, Point::new(0, 10));
}

// ============================================================================
// Scrolling
// ============================================================================

const LIST_ROWS: usize = 10;

/// A 60x40 scrollable panel holding ten 10px rows.
fn list(t: &mut dyn Target, offset: &mut Point) {
    let mut p = widget::scrollable_panel(
        t,
        "list",
        offset,
        Rect::new(0, 0, 60, 40),
        Layout::Vertical,
        &style::PANEL,
    );
    for i in 0..LIST_ROWS {
        widget::label(&mut p, &i.to_string(), Point::ZERO, &TEXT);
    }
    p.end();
}

#[test]
fn wheel_over_panel_scrolls_by_steps() {
    let mut state = UiState::default();
    let mut offset = Point::ZERO;
    let over = InputEvent::motion(10, 10);

    step(&mut state, &[over.clone(), InputEvent::wheel(0, -1)], |f| list(f, &mut offset));
    assert_eq!(offset, Point::new(0, widget::SCROLL_STEP));

    step(&mut state, &[InputEvent::wheel(0, -2)], |f| list(f, &mut offset));
    assert_eq!(offset, Point::new(0, 3 * widget::SCROLL_STEP));

    step(&mut state, &[], |f| list(f, &mut offset));
    assert_eq!(offset.y, 3 * widget::SCROLL_STEP, "wheel is consumed by the frame");
}

#[test]
fn panel_scroll_is_clamped_to_content() {
    let mut state = UiState::default();
    let mut offset = Point::ZERO;
    state.feed_event(&InputEvent::motion(10, 10));

    step(&mut state, &[InputEvent::wheel(0, 5)], |f| list(f, &mut offset));
    assert_eq!(offset, Point::ZERO);

    // 100px of rows in a 34px tall inner area.
    step(&mut state, &[InputEvent::wheel(0, -50)], |f| list(f, &mut offset));
    assert_eq!(offset, Point::new(0, 66));
}

#[test]
fn wheel_outside_panel_is_ignored() {
    let mut state = UiState::default();
    let mut offset = Point::new(0, 16);
    step(&mut state, &[InputEvent::motion(200, 200), InputEvent::wheel(0, -1)], |f| {
        list(f, &mut offset)
    });
    assert_eq!(offset, Point::new(0, 16));
}

#[test]
fn scrolled_rows_are_clipped_away() {
    let mut state = UiState::default();
    let mut offset = Point::new(0, 30);
    step(&mut state, &[], |f| list(f, &mut offset));
    let shown = shown_text(&state);
    assert!(!shown.contains('0') && !shown.contains('1'), "got {shown:?}");
    assert!(shown.contains('3'), "got {shown:?}");
}

// ============================================================================
// Windows
// ============================================================================

#[test]
fn window_title_bar_renders_beneath_content() {
    let mut state = UiState::default();
    step(&mut state, &[], |f| {
        let mut w = widget::window(f, "Settings", Rect::new(0, 0, 0, 0), &style::WINDOW);
        widget::label(&mut w, "x", Point::ZERO, &TEXT);
    });
    let sink = record(&state);

    // Auto width covers the 64px title plus padding and border.
    assert_eq!(
        sink.commands.first(),
        Some(&DrawCommand::Fill { rect: Rect::new(1, 1, 68, 24), color: style::PANEL_BOX.background })
    );
    let bar = DrawCommand::Fill { rect: Rect::new(1, 1, 68, 10), color: style::WINDOW.title_bar };
    let bar_at = sink.commands.iter().position(|c| *c == bar).unwrap();
    let first_glyph = sink
        .commands
        .iter()
        .position(|c| matches!(c, DrawCommand::Glyph { .. }))
        .unwrap();
    assert!(bar_at < first_glyph);
    assert_eq!(shown_text(&state), "xSettings");
}

#[test]
fn window_scopes_its_children_by_title() {
    let mut state = UiState::default();
    let mut name = String::new();
    let mut ui = |t: &mut dyn Target| {
        let mut w = widget::window(t, "Settings", Rect::new(0, 0, 0, 0), &style::WINDOW);
        widget::text_field(&mut w, "name", &mut name, Point::ZERO, &style::TEXT_FIELD);
    };
    // Content starts below the 10px title bar.
    click(&mut state, Point::new(6, 16), &mut ui);
    assert_eq!(state.active_id().as_deref(), Some("Settings/name"));
    assert!(state.is_hovering());
}

#[test]
fn inner_scroll_area_takes_the_wheel_first() {
    let mut state = UiState::default();
    let mut outer = Point::ZERO;
    let mut inner = Point::ZERO;
    let events = [InputEvent::motion(10, 20), InputEvent::wheel(0, -1)];
    step(&mut state, &events, |f| {
        let mut w =
            widget::scrollable_window(f, "Log", &mut outer, Rect::new(0, 0, 100, 60), &style::WINDOW);
        list(&mut w, &mut inner);
        for i in 0..5 {
            widget::label(&mut w, &i.to_string(), Point::ZERO, &TEXT);
        }
    });
    assert_eq!(inner, Point::new(0, widget::SCROLL_STEP));
    assert_eq!(outer, Point::ZERO);

    // Over the window but below the list: the window scrolls.
    step(&mut state, &[InputEvent::motion(10, 56), InputEvent::wheel(0, -1)], |f| {
        let mut w =
            widget::scrollable_window(f, "Log", &mut outer, Rect::new(0, 0, 100, 60), &style::WINDOW);
        list(&mut w, &mut inner);
        for i in 0..5 {
            widget::label(&mut w, &i.to_string(), Point::ZERO, &TEXT);
        }
    });
    assert_eq!(outer, Point::new(0, widget::SCROLL_STEP));
    assert_eq!(inner, Point::new(0, widget::SCROLL_STEP));
}
