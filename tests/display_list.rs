//! Display list building, clipping and paint order.

mod common;

use common::{record, step};
use dui::display_list::DisplayList;
use dui::geometry::{Color, Point, Rect};
use dui::group::{Layout, Target, group};
use dui::render::{DrawCommand, RecordingSink};
use dui::state::UiState;
use dui::text::{TEXT, text};

const RED: Color = Color::rgb(255, 0, 0);
const BLUE: Color = Color::rgb(0, 0, 255);

#[test]
fn transparent_primitives_are_dropped() {
    let mut list = DisplayList::new();
    list.insert(Rect::new(0, 0, 4, 4), Color::TRANSPARENT, None);
    list.insert(Rect::new(0, 0, 4, 4), RED.with_alpha(0), Some('x'));
    assert!(list.is_empty());
    list.insert(Rect::new(0, 0, 4, 4), RED.with_alpha(1), None);
    assert_eq!(list.len(), 1);
}

#[test]
fn closing_a_clip_culls_only_its_own_items() {
    let mut list = DisplayList::new();
    list.insert(Rect::new(500, 500, 4, 4), RED, None);
    list.push_clip();
    list.insert(Rect::new(5, 5, 4, 4), RED, None);
    list.insert(Rect::new(8, 8, 10, 10), BLUE, None);
    list.insert(Rect::new(50, 50, 4, 4), BLUE, None);
    list.pop_clip(Rect::new(0, 0, 10, 10));

    let rects: Vec<Rect> = list.items().iter().map(|p| p.rect).collect();
    assert_eq!(
        rects,
        vec![Rect::new(500, 500, 4, 4), Rect::new(5, 5, 4, 4), Rect::new(8, 8, 10, 10)],
        "items before the clip stay, partially visible items are kept whole"
    );
}

#[test]
fn nested_identical_clip_changes_nothing() {
    let clip = Rect::new(0, 0, 10, 10);
    let build = |nested: bool| {
        let mut list = DisplayList::new();
        list.push_clip();
        list.insert(Rect::new(1, 1, 2, 2), RED, None);
        if nested {
            list.push_clip();
        }
        list.insert(Rect::new(3, 3, 2, 2), BLUE, None);
        list.insert(Rect::new(30, 3, 2, 2), BLUE, None);
        if nested {
            list.pop_clip(clip);
        }
        list.pop_clip(clip);
        list.items().to_vec()
    };
    assert_eq!(build(true), build(false));
}

#[test]
fn clip_with_empty_rect_removes_everything_inside() {
    let mut list = DisplayList::new();
    list.push_clip();
    list.insert(Rect::new(0, 0, 4, 4), RED, None);
    list.pop_clip(Rect::new(0, 0, 0, 0));
    assert!(list.is_empty());
    assert_eq!(list.clip_depth(), 0);
}

#[test]
#[should_panic(expected = "pop_clip without matching push_clip")]
fn unbalanced_pop_clip_panics() {
    DisplayList::new().pop_clip(Rect::new(0, 0, 1, 1));
}

#[test]
fn first_inserted_is_painted_last() {
    let mut list = DisplayList::new();
    list.insert(Rect::new(0, 0, 1, 1), RED, None);
    list.insert(Rect::new(0, 0, 1, 1), BLUE, Some('b'));
    let mut sink = RecordingSink::new();
    list.render(&mut sink);
    assert_eq!(
        sink.commands,
        vec![
            DrawCommand::Glyph { rect: Rect::new(0, 0, 1, 1), glyph: 'b', color: BLUE },
            DrawCommand::Fill { rect: Rect::new(0, 0, 1, 1), color: RED },
        ]
    );
}

#[test]
fn group_clips_content_outside_its_rect() {
    let mut state = UiState::default();
    step(&mut state, &[], |f| {
        let mut g = group(f, "box", Rect::new(10, 10, 20, 20), Layout::None);
        g.insert(Rect::new(0, 0, 5, 5), RED, None);
        g.insert(Rect::new(40, 40, 5, 5), BLUE, None);
    });
    let sink = record(&state);
    assert_eq!(sink.commands.len(), 1);
    assert_eq!(sink.commands[0].rect(), Rect::new(10, 10, 5, 5));
}

#[test]
fn text_renders_in_reverse_emission_order() {
    let mut state = UiState::default();
    step(&mut state, &[], |f| text(f, "abc", Point::new(2, 2), &TEXT));
    let sink = record(&state);
    assert_eq!(sink.glyphs(), "cba");
    assert_eq!(sink.commands.last().map(DrawCommand::rect), Some(Rect::new(2, 2, 8, 8)));
}

#[test]
fn new_frame_starts_with_empty_list() {
    let mut state = UiState::default();
    step(&mut state, &[], |f| f.insert(Rect::new(0, 0, 2, 2), RED, None));
    assert_eq!(state.display_list().len(), 1);
    step(&mut state, &[], |_| {});
    assert!(state.display_list().is_empty());
}
