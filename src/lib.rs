//! dui: a small immediate-mode UI core.
//!
//! The application rebuilds its whole interface every frame. Widgets are
//! identified by string ids scoped by the groups they are nested in, and
//! query a long-lived [`UiState`] for mouse and keyboard ownership while
//! appending primitives to a clipped display list.

pub mod config;
pub mod demo;
pub mod display_list;
pub mod error;
pub mod event;
pub mod geometry;
pub mod group;
pub mod render;
pub mod state;
pub mod text;
pub mod widget;

pub use display_list::{DisplayList, DrawSink, Primitive};
pub use error::{Error, Result};
pub use event::{InputEvent, Key, MouseButton};
pub use geometry::{Color, EdgeSize, Point, Rect};
pub use group::{Frame, Group, Layout, Target, frame, group};
pub use state::{MouseAction, TextAction, UiState};
pub use text::{Font, TextStyle};
