//! Frames and groups: the caret/bounds tracking regions widgets live in.
//!
//! A [`Group`] mutably borrows its parent for as long as it is open, so
//! nothing can be added to the parent until the group is closed, either by
//! [`Group::end`] or when it goes out of scope.

use crate::display_list::DrawSink;
use crate::geometry::{Color, EdgeSize, Point, Rect};
use crate::state::{MouseAction, TextAction, UiState};

/// How the caret moves as children are added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Children are positioned explicitly from the top-left corner.
    None,
    /// Children stack downwards.
    #[default]
    Vertical,
    /// Children stack to the right.
    Horizontal,
}

/// Something widgets can be placed into: the frame or an open group.
///
/// Rects passed to the provided methods are relative to [`Target::caret`].
pub trait Target {
    fn state(&self) -> &UiState;
    fn state_mut(&mut self) -> &mut UiState;

    /// Absolute position where the next child goes.
    fn caret(&self) -> Point;

    /// Grow the bounds by a child ending at `p`, relative to the caret.
    fn advance(&mut self, p: Point);

    fn absolute(&self, rect: Rect) -> Rect {
        rect.translate(self.caret())
    }

    fn check_mouse(&mut self, id: &str, rect: Rect) -> MouseAction {
        let rect = self.absolute(rect);
        self.state_mut().check_mouse(id, rect)
    }

    fn check_text(&self, id: &str) -> TextAction {
        self.state().check_text(id)
    }

    fn is_active(&self, id: &str) -> bool {
        self.state().is_active(id)
    }

    fn insert(&mut self, rect: Rect, color: Color, glyph: Option<char>) {
        let rect = self.absolute(rect);
        self.state_mut().display(rect, color, glyph);
    }
}

/// Caret and accumulated bounds of a region.
#[derive(Debug, Clone, Copy)]
struct Cursor {
    top_left: Point,
    bottom_right: Point,
    layout: Layout,
}

impl Cursor {
    fn new(top_left: Point, layout: Layout) -> Self {
        Self { top_left, bottom_right: top_left, layout }
    }

    fn caret(&self) -> Point {
        match self.layout {
            Layout::None => self.top_left,
            Layout::Vertical => Point::new(self.top_left.x, self.bottom_right.y),
            Layout::Horizontal => Point::new(self.bottom_right.x, self.top_left.y),
        }
    }

    fn advance(&mut self, p: Point) {
        let end = self.caret() + p;
        self.bottom_right.x = self.bottom_right.x.max(end.x);
        self.bottom_right.y = self.bottom_right.y.max(end.y);
    }

    fn extent(&self) -> Point {
        self.bottom_right - self.top_left
    }
}

/// Runs when a group closes, after its scope is exited and before the parent
/// advances. Receives the group's final absolute area and the size of its
/// content without padding.
pub type CloseHook<'p> = Box<dyn FnOnce(&mut UiState, Rect, Point) + 'p>;

/// A nested region with its own id segment and clip.
pub struct Group<'p> {
    parent: &'p mut dyn Target,
    id: String,
    /// Declared rect relative to the parent's caret. Zero width or height
    /// is computed from the content when the group closes.
    rect: Rect,
    /// Absolute top-left of the visible area.
    origin: Point,
    padding: EdgeSize,
    cursor: Cursor,
    on_close: Option<CloseHook<'p>>,
    ended: bool,
}

impl<'p> Group<'p> {
    /// Open a group. `scroll` shifts the content up/left inside the visible
    /// area without moving the area itself.
    pub fn new(
        parent: &'p mut dyn Target,
        id: &str,
        scroll: Point,
        rect: Rect,
        layout: Layout,
    ) -> Self {
        let origin = parent.caret() + rect.top_left();
        parent.state_mut().enter_scope(id);
        Self {
            parent,
            id: id.to_string(),
            rect,
            origin,
            padding: EdgeSize::ZERO,
            cursor: Cursor::new(origin - scroll, layout),
            on_close: None,
            ended: false,
        }
    }

    /// Inset the content by `padding`. Only valid before any child is added.
    pub fn with_padding(mut self, padding: EdgeSize) -> Self {
        assert!(
            self.cursor.extent() == Point::ZERO,
            "padding set on group {:?} after content was added",
            self.id
        );
        let top_left = self.cursor.top_left.offset(
            padding.left - self.padding.left,
            padding.top - self.padding.top,
        );
        self.cursor = Cursor::new(top_left, self.cursor.layout);
        self.padding = padding;
        self
    }

    pub fn on_close(mut self, hook: impl FnOnce(&mut UiState, Rect, Point) + 'p) -> Self {
        self.on_close = Some(Box::new(hook));
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn layout(&self) -> Layout {
        self.cursor.layout
    }

    pub fn is_open(&self) -> bool {
        !self.ended
    }

    pub fn width(&self) -> i32 {
        if self.rect.w != 0 {
            return self.rect.w;
        }
        self.cursor.extent().x + self.padding.horizontal()
    }

    pub fn set_width(&mut self, w: i32) {
        self.rect.w = w;
    }

    pub fn height(&self) -> i32 {
        if self.rect.h != 0 {
            return self.rect.h;
        }
        self.cursor.extent().y + self.padding.vertical()
    }

    pub fn set_height(&mut self, h: i32) {
        self.rect.h = h;
    }

    /// Absolute area the group covers with its current size.
    pub fn area(&self) -> Rect {
        Rect::new(self.origin.x, self.origin.y, self.width(), self.height())
    }

    /// Close the group, propagating its size to the parent.
    pub fn end(mut self) {
        self.finish();
    }

    fn finish(&mut self) {
        assert!(!self.ended, "group {:?} ended twice", self.id);
        self.ended = true;
        self.rect.w = self.width();
        self.rect.h = self.height();
        let area = Rect::new(self.origin.x, self.origin.y, self.rect.w, self.rect.h);
        let content = self.cursor.extent();
        let state = self.parent.state_mut();
        state.exit_scope(&self.id, area);
        if let Some(hook) = self.on_close.take() {
            hook(state, area, content);
        }
        self.parent.advance(self.rect.bottom_right());
    }
}

impl Drop for Group<'_> {
    fn drop(&mut self) {
        if !self.ended && !std::thread::panicking() {
            self.finish();
        }
    }
}

impl Target for Group<'_> {
    fn state(&self) -> &UiState {
        self.parent.state()
    }

    fn state_mut(&mut self) -> &mut UiState {
        self.parent.state_mut()
    }

    fn caret(&self) -> Point {
        self.cursor.caret()
    }

    fn advance(&mut self, p: Point) {
        self.cursor.advance(p);
    }
}

impl std::fmt::Debug for Group<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Group")
            .field("id", &self.id)
            .field("rect", &self.rect)
            .field("origin", &self.origin)
            .field("cursor", &self.cursor)
            .field("ended", &self.ended)
            .finish_non_exhaustive()
    }
}

/// Open a group at `rect` relative to the target's caret.
pub fn group<'p>(target: &'p mut dyn Target, id: &str, rect: Rect, layout: Layout) -> Group<'p> {
    Group::new(target, id, Point::ZERO, rect, layout)
}

/// Open a group whose content is shifted by `offset` (a scrolled view).
pub fn offset_group<'p>(
    target: &'p mut dyn Target,
    id: &str,
    offset: Point,
    rect: Rect,
    layout: Layout,
) -> Group<'p> {
    Group::new(target, id, offset, rect, layout)
}

/// One frame of UI. Creating it begins the frame; ending, rendering or
/// dropping it ends the frame.
pub struct Frame<'s> {
    state: &'s mut UiState,
    cursor: Cursor,
    ended: bool,
}

impl<'s> Frame<'s> {
    pub fn new(state: &'s mut UiState) -> Self {
        state.begin_frame();
        Self {
            state,
            cursor: Cursor::new(Point::ZERO, Layout::None),
            ended: false,
        }
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.cursor.layout = layout;
        self
    }

    pub fn end(mut self) {
        self.finish();
    }

    /// End the frame and send its display list to `sink`.
    pub fn render(mut self, sink: &mut dyn DrawSink) {
        self.finish();
        self.state.render(sink);
    }

    fn finish(&mut self) {
        if !self.ended {
            self.ended = true;
            self.state.end_frame();
        }
    }
}

impl Drop for Frame<'_> {
    fn drop(&mut self) {
        if !std::thread::panicking() {
            self.finish();
        }
    }
}

impl Target for Frame<'_> {
    fn state(&self) -> &UiState {
        &*self.state
    }

    fn state_mut(&mut self) -> &mut UiState {
        &mut *self.state
    }

    fn caret(&self) -> Point {
        self.cursor.caret()
    }

    fn advance(&mut self, p: Point) {
        self.cursor.advance(p);
    }
}

/// Begin a frame on `state`.
pub fn frame(state: &mut UiState) -> Frame<'_> {
    Frame::new(state)
}
