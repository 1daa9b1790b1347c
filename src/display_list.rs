//! The per-frame list of draw primitives.
//!
//! Clipping happens on the CPU while the list is built: closing a clip region
//! removes every primitive appended inside it that falls completely outside
//! the region's rect. Removed primitives are gone for good, so a scope that
//! shrinks its clip below what its children drew cannot recover them.

use crate::geometry::{Color, Rect};

/// One draw command: a filled rect, or a glyph cell when `glyph` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Primitive {
    pub rect: Rect,
    pub color: Color,
    pub glyph: Option<char>,
}

/// Receiver of rendered primitives (the 2D backend).
pub trait DrawSink {
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn draw_glyph(&mut self, rect: Rect, glyph: char, color: Color);
}

#[derive(Debug, Default)]
pub struct DisplayList {
    items: Vec<Primitive>,
    /// Start index of every open clip region, innermost last.
    clip_starts: Vec<usize>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.clip_starts.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Primitive] {
        &self.items
    }

    /// Number of clip regions currently open.
    pub fn clip_depth(&self) -> usize {
        self.clip_starts.len()
    }

    /// Append a primitive. Fully transparent ones are dropped.
    pub fn insert(&mut self, rect: Rect, color: Color, glyph: Option<char>) {
        if color.is_visible() {
            self.items.push(Primitive { rect, color, glyph });
        }
    }

    /// Open a clip region starting at the current end of the list.
    pub fn push_clip(&mut self) {
        self.clip_starts.push(self.items.len());
    }

    /// Close the innermost clip region, culling its primitives against `rect`.
    pub fn pop_clip(&mut self, rect: Rect) {
        let Some(start) = self.clip_starts.pop() else {
            panic!("pop_clip without matching push_clip");
        };
        self.clip(rect, start);
    }

    /// Remove every primitive at or after `pos` that does not intersect `rect`.
    pub fn clip(&mut self, rect: Rect, pos: usize) {
        if pos >= self.items.len() {
            return;
        }
        let mut index = 0;
        self.items.retain(|item| {
            let keep = index < pos || rect.intersects(&item.rect);
            index += 1;
            keep
        });
    }

    /// Feed the primitives to `sink`, last inserted first. The first
    /// inserted primitive is painted last and ends up on top.
    pub fn render(&self, sink: &mut dyn DrawSink) {
        for item in self.items.iter().rev() {
            match item.glyph {
                None => sink.fill_rect(item.rect, item.color),
                Some(ch) => sink.draw_glyph(item.rect, ch, item.color),
            }
        }
    }
}
