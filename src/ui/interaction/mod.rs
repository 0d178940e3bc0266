//! Pointer interaction for the Marquee TUI.
//!
//! Renderers register [`HitArea`]s each frame; `App::handle_mouse` resolves
//! clicks and hovers against them.

pub mod hit_area;

pub use hit_area::{ClickAction, HitArea, HitAreaRegistry};
