//! Elements demo and scripted headless replay.
//!
//! A script is JSON of the form
//! `{"frames": [{"events": [{"type": "pointer_down", "x": 20, "y": 30, "button": "left"}]}]}`.
//! Each entry feeds its events and then builds one frame.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::event::{EventQueue, InputEvent};
use crate::geometry::{Point, Rect};
use crate::group::{Frame, Layout, Target, group};
use crate::state::UiState;
use crate::widget::{self, style};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScriptFrame {
    #[serde(default)]
    pub events: Vec<InputEvent>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DemoScript {
    pub frames: Vec<ScriptFrame>,
}

impl DemoScript {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(json: &str) -> Result<Self> {
        let script: DemoScript = serde_json::from_str(json)?;
        if script.frames.is_empty() {
            return Err(Error::InvalidScript("script has no frames".into()));
        }
        Ok(script)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Size {
    Small,
    #[default]
    Medium,
    Large,
}

/// State edited by the elements demo.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Demo {
    pub clicks: u32,
    pub enabled: bool,
    pub size: Size,
    pub name: String,
    pub count: i32,
    pub ratio: f64,
    pub volume: i32,
    /// Scroll offset of the item list.
    pub scroll: Point,
}

impl Default for Demo {
    fn default() -> Self {
        Self {
            clicks: 0,
            enabled: true,
            size: Size::Medium,
            name: String::new(),
            count: 3,
            ratio: 0.5,
            volume: 50,
            scroll: Point::ZERO,
        }
    }
}

const LIST_ITEMS: usize = 12;

impl Demo {
    /// Build the demo window at the frame's caret.
    pub fn ui(&mut self, frame: &mut dyn Target) {
        let mut window = widget::window(frame, "Elements", Rect::new(16, 16, 0, 0), &style::WINDOW);

        let mut row = group(&mut window, "", Rect::new(0, 2, 0, 0), Layout::Horizontal);
        if widget::button(&mut row, "click", Point::ZERO, &style::BUTTON) {
            self.clicks += 1;
            debug!(clicks = self.clicks, "clicked");
        }
        widget::label(&mut row, &self.clicks.to_string(), Point::new(4, 3), &style::TEXT_FIELD.text);
        row.end();

        widget::toggle_button(&mut window, "enabled", &mut self.enabled, Point::new(0, 2), &style::BUTTON);

        let mut sizes = group(&mut window, "size", Rect::new(0, 2, 0, 0), Layout::Horizontal);
        for (id, option) in [("small", Size::Small), ("medium", Size::Medium), ("large", Size::Large)] {
            widget::choice_button(&mut sizes, id, &mut self.size, option, Point::new(2, 0), &style::BUTTON);
        }
        sizes.end();

        widget::text_field(&mut window, "name", &mut self.name, Point::new(0, 2), &style::TEXT_FIELD);

        let numbers = style::TextFieldStyle { width_chars: 6, ..style::TEXT_FIELD };
        let mut row = group(&mut window, "numbers", Rect::new(0, 2, 0, 0), Layout::Horizontal);
        if widget::number_field(&mut row, "count", &mut self.count, Point::ZERO, &numbers) {
            debug!(count = self.count, "count edited");
        }
        if widget::number_field(&mut row, "ratio", &mut self.ratio, Point::new(4, 0), &numbers) {
            debug!(ratio = self.ratio, "ratio edited");
        }
        row.end();

        widget::slider(&mut window, "volume", &mut self.volume, 0, 100, Point::new(0, 2), &style::SLIDER);

        let mut list = widget::scrollable_panel(
            &mut window,
            "list",
            &mut self.scroll,
            Rect::new(0, 2, 128, 40),
            Layout::Vertical,
            &style::PANEL,
        );
        for i in 1..=LIST_ITEMS {
            widget::label(&mut list, &format!("item {i}"), Point::ZERO, &style::TEXT_FIELD.text);
        }
        list.end();
        window.end();
    }
}

/// Feed every scripted frame through `state`, building the demo each time.
/// The last frame's display list is left in `state` for rendering.
pub fn run_script(script: &DemoScript, state: &mut UiState, demo: &mut Demo) {
    let mut queue = EventQueue::new();
    for (i, scripted) in script.frames.iter().enumerate() {
        for event in &scripted.events {
            queue.push(event.clone());
        }
        for event in queue.drain() {
            state.feed_event(&event);
        }
        let mut frame = Frame::new(state);
        demo.ui(&mut frame);
        frame.end();
        debug!(
            frame = i,
            grabbed = ?state.grabbed_id(),
            active = ?state.active_id(),
            primitives = state.display_list().len(),
            "frame built"
        );
    }
    info!(frames = script.frames.len(), "script finished");
}
