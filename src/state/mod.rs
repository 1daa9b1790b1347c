//! The UI session: latched input, scoped identity and grab/focus arbitration.
//!
//! One `UiState` lives for the whole application. Between frames it receives
//! raw events through [`UiState::feed_event`]; during a frame widgets query it
//! through [`UiState::check_mouse`] and [`UiState::check_text`] while scopes
//! are entered and exited around them.

pub mod path;

use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::display_list::{DisplayList, DrawSink};
use crate::event::{InputEvent, Key, MouseButton, decode_text_input};
use crate::geometry::{Color, Point, Rect};
use crate::text::Font;
use path::{GroupPath, QualifiedId, SegmentId, SegmentInterner};

/// Mouse status of one element in the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseAction {
    /// Nothing relevant for this element.
    #[default]
    None,
    /// The button was just pressed on this element; it now owns the grab.
    Grab,
    /// Owner of the grab, button held, pointer inside its rect.
    Hold,
    /// Released inside the rect: the element was clicked.
    Action,
    /// Released outside the rect.
    Cancel,
    /// Owner of the grab, button held, pointer outside its rect.
    Drag,
}

/// Text status of one element in the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAction {
    #[default]
    None,
    /// New text is available in [`UiState::text`].
    Input,
    /// The last character should be erased.
    Backspace,
}

#[derive(Debug)]
pub struct UiState {
    in_frame: bool,
    display_list: DisplayList,
    font: Font,

    mouse_pos: Point,
    left_pressed: bool,
    hovering: bool,
    grabbed: Option<QualifiedId>,
    /// Grab was taken during the current frame.
    grabbing: bool,
    /// The grab owner saw the release; clear the grab at frame end.
    releasing: bool,
    active: Option<QualifiedId>,
    /// Wheel notches received since the last frame and not yet consumed.
    wheel: Point,

    text: String,
    /// In-progress text of the active element when it differs from the
    /// value it edits (see `number_field`).
    edit_text: Option<(QualifiedId, String)>,
    text_changed: bool,
    text_action: TextAction,

    interner: SegmentInterner,
    path: GroupPath,
    /// Every open scope, anonymous ones as `None`.
    scopes: Vec<Option<SegmentId>>,
    /// The grabbed element is somewhere below the current path.
    grab_under: bool,
    /// The active element is somewhere below the current path.
    active_under: bool,

    started: Instant,
    frame_time: Duration,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(Font::default())
    }
}

impl UiState {
    pub fn new(font: Font) -> Self {
        Self {
            in_frame: false,
            display_list: DisplayList::new(),
            font,
            mouse_pos: Point::ZERO,
            left_pressed: false,
            hovering: false,
            grabbed: None,
            grabbing: false,
            releasing: false,
            active: None,
            wheel: Point::ZERO,
            text: String::new(),
            edit_text: None,
            text_changed: false,
            text_action: TextAction::None,
            interner: SegmentInterner::new(),
            path: GroupPath::default(),
            scopes: Vec::new(),
            grab_under: false,
            active_under: false,
            started: Instant::now(),
            frame_time: Duration::ZERO,
        }
    }

    /// Latch one raw input event. Must not be called while a frame is built.
    pub fn feed_event(&mut self, event: &InputEvent) {
        debug_assert!(!self.in_frame, "feed_event called during a frame");
        match *event {
            InputEvent::PointerDown { x, y, button } => {
                self.mouse_pos = Point::new(x, y);
                if button == MouseButton::Left {
                    self.left_pressed = true;
                }
            }
            InputEvent::PointerMove { x, y } => {
                // An unclaimed press keeps its position so the pointer
                // cannot slide onto a widget and grab it.
                if !(self.grabbed.is_none() && self.left_pressed) {
                    self.mouse_pos = Point::new(x, y);
                }
            }
            InputEvent::PointerUp { x, y, button } => {
                self.mouse_pos = Point::new(x, y);
                if button == MouseButton::Left {
                    self.left_pressed = false;
                }
            }
            InputEvent::Wheel { dx, dy } => {
                self.wheel = self.wheel.offset(dx, dy);
            }
            InputEvent::TextInput { ref text } => {
                if self.active.is_none() {
                    return;
                }
                self.text = decode_text_input(text.as_bytes());
                self.text_changed = true;
                self.text_action = TextAction::Input;
            }
            InputEvent::KeyDown { key: Key::Backspace } => {
                self.text_changed = true;
                self.text_action = TextAction::Backspace;
            }
            InputEvent::KeyDown { key: Key::Other(_) } => {}
        }
    }

    pub fn begin_frame(&mut self) {
        assert!(!self.in_frame, "begin_frame called while a frame is in progress");
        self.in_frame = true;
        self.display_list.clear();
        self.hovering = false;
        self.frame_time = self.started.elapsed();
        trace!(time_ms = self.frame_time.as_millis() as u64, "frame begin");
    }

    pub fn end_frame(&mut self) {
        assert!(self.in_frame, "end_frame called outside of a frame");
        assert!(
            self.scopes.is_empty(),
            "frame ended inside {} unclosed scope(s) at {:?}",
            self.scopes.len(),
            self.path.display(&self.interner)
        );
        self.in_frame = false;
        self.text_changed = false;
        self.grabbing = false;
        self.wheel = Point::ZERO;
        if self.releasing {
            if let Some(id) = self.grabbed.take() {
                debug!(id = %id.display(&self.interner), "grab cleared");
            }
            self.releasing = false;
        }
        trace!(primitives = self.display_list.len(), "frame end");
    }

    /// Open a scope. An empty id opens an anonymous scope that clips but
    /// adds no path segment.
    pub fn enter_scope(&mut self, id: &str) {
        assert!(self.in_frame, "enter_scope({id:?}) outside of a frame");
        self.display_list.push_clip();
        if id.is_empty() {
            self.scopes.push(None);
            return;
        }
        let segment = self.interner.intern(id);
        let depth = self.path.depth();
        let top_level = depth == 0;
        self.grab_under =
            (top_level || self.grab_under) && child_under(self.grabbed.as_ref(), depth, segment);
        self.active_under =
            (top_level || self.active_under) && child_under(self.active.as_ref(), depth, segment);
        self.path.push(segment);
        self.scopes.push(Some(segment));
    }

    /// Close the innermost scope. `rect` is its final absolute area; content
    /// drawn inside the scope is clipped against it.
    pub fn exit_scope(&mut self, id: &str, rect: Rect) {
        assert!(self.in_frame, "exit_scope({id:?}) outside of a frame");
        let Some(scope) = self.scopes.pop() else {
            panic!("exit_scope({id:?}) without matching enter_scope");
        };
        match scope {
            None => assert!(id.is_empty(), "exit_scope({id:?}) closes an anonymous scope"),
            Some(segment) => {
                assert!(
                    self.interner.name(segment) == id,
                    "exit_scope({id:?}) does not match open scope {:?}",
                    self.interner.name(segment)
                );
                self.path.pop();
                if self.path.is_empty() {
                    self.grab_under = false;
                    self.active_under = false;
                    if !self.hovering && rect.contains(self.mouse_pos) {
                        self.hovering = true;
                    }
                } else {
                    let path = self.path.as_slice();
                    self.grab_under = self.grabbed.as_ref().is_some_and(|g| g.is_under(path));
                    self.active_under = self.active.as_ref().is_some_and(|a| a.is_under(path));
                }
            }
        }
        self.display_list.pop_clip(rect);
    }

    /// Resolve the mouse status of element `id` in the current scope.
    ///
    /// With nothing grabbed, the first element checked whose `rect` holds the
    /// pointer on a press wins the grab; the check order is the emission order
    /// chosen by the host. Once grabbed, only the owner receives anything but
    /// [`MouseAction::None`] until the grab is cleared at a frame end.
    pub fn check_mouse(&mut self, id: &str, rect: Rect) -> MouseAction {
        assert!(self.in_frame, "check_mouse({id:?}) outside of a frame");
        let hit = rect.contains(self.mouse_pos);
        if self.grabbed.is_none() {
            if !self.left_pressed {
                return MouseAction::None;
            }
            if hit && !self.grabbing {
                let leaf = self.interner.intern(id);
                let qid = self.path.qualify(leaf);
                debug!(id = %qid.display(&self.interner), "grab");
                if self.active.as_ref() != Some(&qid) {
                    self.edit_text = None;
                }
                self.active = Some(qid.clone());
                self.grabbed = Some(qid);
                self.grab_under = true;
                self.active_under = true;
                self.grabbing = true;
                return MouseAction::Grab;
            }
            if self.is_active(id) {
                debug!(id = %self.qualified_id(id), "focus lost");
                self.active = None;
                self.edit_text = None;
                self.active_under = false;
            }
            return MouseAction::None;
        }
        if !self.is_grabbed(id) {
            return MouseAction::None;
        }
        self.grab_under = true;
        if self.left_pressed {
            if self.grabbing {
                return MouseAction::Grab;
            }
            return if hit { MouseAction::Hold } else { MouseAction::Drag };
        }
        if !self.releasing {
            debug!(id = %self.qualified_id(id), inside = hit, "release");
        }
        self.releasing = true;
        if hit { MouseAction::Action } else { MouseAction::Cancel }
    }

    /// Text status of element `id`: only the active element sees input.
    pub fn check_text(&self, id: &str) -> TextAction {
        if !self.text_changed || !self.is_active(id) {
            return TextAction::None;
        }
        self.text_action
    }

    /// True if `id` in the current scope holds the keyboard focus.
    pub fn is_active(&self, id: &str) -> bool {
        if !(self.path.is_empty() || self.active_under) {
            return false;
        }
        self.active.as_ref().is_some_and(|a| self.is_current(a, id))
    }

    /// True if `id` in the current scope owns the grab.
    pub fn is_grabbed(&self, id: &str) -> bool {
        if !(self.path.is_empty() || self.grab_under) {
            return false;
        }
        self.grabbed.as_ref().is_some_and(|g| self.is_current(g, id))
    }

    fn is_current(&self, qid: &QualifiedId, id: &str) -> bool {
        self.interner
            .lookup(id)
            .is_some_and(|leaf| qid.is_leaf_of(self.path.as_slice(), leaf))
    }

    /// Consume the pending wheel movement. The first caller in a frame gets
    /// it, so nested scroll areas should ask innermost first.
    pub fn take_wheel(&mut self) -> Point {
        std::mem::take(&mut self.wheel)
    }

    /// Pending wheel movement without consuming it.
    pub fn wheel(&self) -> Point {
        self.wheel
    }

    /// Take the stored edit text if it belongs to `id` in the current scope.
    pub fn take_edit_text(&mut self, id: &str) -> Option<String> {
        let owned = self.edit_text.as_ref().is_some_and(|(qid, _)| self.is_current(qid, id));
        if !owned {
            return None;
        }
        self.edit_text.take().map(|(_, text)| text)
    }

    /// Keep `text` as the edit text of `id` in the current scope until the
    /// next frame.
    pub fn store_edit_text(&mut self, id: &str, text: String) {
        let leaf = self.interner.intern(id);
        self.edit_text = Some((self.path.qualify(leaf), text));
    }

    /// Append a primitive in absolute coordinates.
    pub fn display(&mut self, rect: Rect, color: Color, glyph: Option<char>) {
        assert!(self.in_frame, "display outside of a frame");
        self.display_list.insert(rect, color, glyph);
    }

    /// Send the last frame's primitives to `sink`.
    pub fn render(&self, sink: &mut dyn DrawSink) {
        assert!(!self.in_frame, "render called while a frame is in progress");
        self.display_list.render(sink);
    }

    /// Drop the keyboard focus.
    pub fn reset_focus(&mut self) {
        if let Some(id) = self.active.take() {
            debug!(id = %id.display(&self.interner), "focus reset");
        }
        self.active_under = false;
        self.edit_text = None;
    }

    /// The pointer is over a top-level named scope, or something is grabbed.
    pub fn wants_mouse(&self) -> bool {
        self.hovering || self.grabbed.is_some()
    }

    /// Something holds the keyboard focus.
    pub fn wants_keyboard(&self) -> bool {
        self.active.is_some()
    }

    pub fn is_in_frame(&self) -> bool {
        self.in_frame
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn mouse_position(&self) -> Point {
        self.mouse_pos
    }

    pub fn is_left_pressed(&self) -> bool {
        self.left_pressed
    }

    /// Last decoded text input. Use [`UiState::check_text`] to know whether
    /// it belongs to an element in this frame.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Time since the session was created, sampled when the frame began.
    pub fn frame_time(&self) -> Duration {
        self.frame_time
    }

    pub fn font(&self) -> Font {
        self.font
    }

    pub fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    pub fn display_list(&self) -> &DisplayList {
        &self.display_list
    }

    /// Textual path of the current scope, e.g. `window/panel`.
    pub fn current_path(&self) -> String {
        self.path.display(&self.interner)
    }

    /// Textual qualified id `id` would get in the current scope.
    pub fn qualified_id(&self, id: &str) -> String {
        let path = self.path.display(&self.interner);
        format!("{path}{}{id}", path::SEPARATOR)
    }

    pub fn grabbed_id(&self) -> Option<String> {
        self.grabbed.as_ref().map(|g| g.display(&self.interner))
    }

    pub fn active_id(&self) -> Option<String> {
        self.active.as_ref().map(|a| a.display(&self.interner))
    }

    /// Cached: the grabbed element lies below the current scope.
    pub fn grab_under_scope(&self) -> bool {
        self.grab_under
    }

    /// Cached: the active element lies below the current scope.
    pub fn active_under_scope(&self) -> bool {
        self.active_under
    }
}

/// Whether `target`, known to be under the first `depth` segments of the
/// path, continues with `segment` and has something below it.
fn child_under(target: Option<&QualifiedId>, depth: usize, segment: SegmentId) -> bool {
    target.is_some_and(|t| {
        let segments = t.segments();
        segments.len() > depth + 1 && segments[depth] == segment
    })
}
