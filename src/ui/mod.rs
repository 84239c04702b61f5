//! World-space immediate-mode UI
//!
//! No retained widget tree: buttons are rects hit-tested against the
//! frame's pointer state and drawn in the same pass. All coordinates are
//! in the fixed 1920x1080 world space; the view converts the pointer
//! before any of this runs.

mod button;
mod input;
mod rect;
pub mod theme;

pub use button::{draw_rect_button, hit_test, ButtonResponse, HoverTracker};
pub use input::MouseState;
pub use rect::Rect;
