//! Shared test helpers.

use dui::event::InputEvent;
use dui::group::Frame;
use dui::render::RecordingSink;
use dui::state::UiState;

/// Feed `events`, then build one frame with `build`.
#[allow(dead_code)]
pub fn step<R>(
    state: &mut UiState,
    events: &[InputEvent],
    build: impl FnOnce(&mut Frame<'_>) -> R,
) -> R {
    for event in events {
        state.feed_event(event);
    }
    let mut frame = Frame::new(state);
    let result = build(&mut frame);
    frame.end();
    result
}

/// Render the last frame into a recording sink.
#[allow(dead_code)]
pub fn record(state: &UiState) -> RecordingSink {
    let mut sink = RecordingSink::new();
    state.render(&mut sink);
    sink
}
