//! Stock widgets built on the interaction core.
//!
//! Every widget takes a [`Target`](crate::group::Target), a string id that
//! is unique among its siblings, a position relative to the target's caret
//! and a resolved style.

mod basic;
mod button;
mod number_field;
mod panel;
mod slider;
pub mod style;
mod text_field;
mod window;

pub use basic::{bordered_box, colored_box, label, push_bordered_box};
pub use button::{button, button_base, choice_button, labeled_button, toggle_button};
pub use number_field::number_field;
pub use panel::{SCROLL_STEP, panel, scrollable_panel};
pub use slider::slider;
pub use style::{
    BorderColor, BoxStyle, ButtonStyle, PanelStyle, SliderStyle, TextFieldStyle, WindowStyle,
};
pub use text_field::text_field;
pub use window::{scrollable_window, window};
