//! Scoped element identity.
//!
//! Segments are interned once per session so paths compare as small integer
//! slices. The textual form (`outer/inner/leaf`) only exists for logging.

use std::collections::HashMap;

/// Separator between path segments in the textual form of an id.
pub const SEPARATOR: char = '/';

/// Interned id segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SegmentId(u32);

#[derive(Debug, Default)]
pub struct SegmentInterner {
    ids: HashMap<String, SegmentId>,
    names: Vec<String>,
}

impl SegmentInterner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intern(&mut self, segment: &str) -> SegmentId {
        debug_assert!(
            !segment.contains(SEPARATOR),
            "id segment {segment:?} contains the separator"
        );
        if let Some(&id) = self.ids.get(segment) {
            return id;
        }
        let id = SegmentId(self.names.len() as u32);
        self.names.push(segment.to_string());
        self.ids.insert(segment.to_string(), id);
        id
    }

    /// Look a segment up without interning it. A segment that was never
    /// interned cannot be part of any stored id.
    pub fn lookup(&self, segment: &str) -> Option<SegmentId> {
        self.ids.get(segment).copied()
    }

    pub fn name(&self, id: SegmentId) -> &str {
        &self.names[id.0 as usize]
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Group path followed by the element's own segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedId {
    segments: Vec<SegmentId>,
}

impl QualifiedId {
    pub fn new(path: &[SegmentId], leaf: SegmentId) -> Self {
        let mut segments = Vec::with_capacity(path.len() + 1);
        segments.extend_from_slice(path);
        segments.push(leaf);
        Self { segments }
    }

    pub fn segments(&self) -> &[SegmentId] {
        &self.segments
    }

    /// True if this id lives somewhere below `prefix`.
    pub fn is_under(&self, prefix: &[SegmentId]) -> bool {
        self.segments.len() > prefix.len() && self.segments.starts_with(prefix)
    }

    /// True if this id is `leaf` directly inside `path`.
    pub fn is_leaf_of(&self, path: &[SegmentId], leaf: SegmentId) -> bool {
        self.segments.len() == path.len() + 1
            && self.segments.starts_with(path)
            && self.segments.last() == Some(&leaf)
    }

    /// Textual form: the group path, the separator, then the leaf. Root level
    /// elements therefore render as `/leaf`.
    pub fn display(&self, interner: &SegmentInterner) -> String {
        let Some((leaf, path)) = self.segments.split_last() else {
            return String::new();
        };
        let mut out = join(path, interner);
        out.push(SEPARATOR);
        out.push_str(interner.name(*leaf));
        out
    }
}

/// The stack of named scopes currently open.
#[derive(Debug, Default)]
pub struct GroupPath {
    segments: Vec<SegmentId>,
}

impl GroupPath {
    pub fn push(&mut self, segment: SegmentId) {
        self.segments.push(segment);
    }

    pub fn pop(&mut self) -> Option<SegmentId> {
        self.segments.pop()
    }

    pub fn top(&self) -> Option<SegmentId> {
        self.segments.last().copied()
    }

    pub fn as_slice(&self) -> &[SegmentId] {
        &self.segments
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn clear(&mut self) {
        self.segments.clear();
    }

    pub fn qualify(&self, leaf: SegmentId) -> QualifiedId {
        QualifiedId::new(&self.segments, leaf)
    }

    pub fn display(&self, interner: &SegmentInterner) -> String {
        join(&self.segments, interner)
    }
}

fn join(segments: &[SegmentId], interner: &SegmentInterner) -> String {
    let mut out = String::new();
    for (i, seg) in segments.iter().enumerate() {
        if i > 0 {
            out.push(SEPARATOR);
        }
        out.push_str(interner.name(*seg));
    }
    out
}
