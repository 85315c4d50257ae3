//! Event handling for valbar.
//!
//! Terminal input, focus changes and redraw ticks are turned into
//! [`Action`](crate::state::Action)s here.

mod handler;
mod input;

pub use handler::EventHandler;
pub use input::KeyBinding;
