//! Input handling for keyboard, mouse and image-selection events.

pub mod handler;
pub mod keys;

pub use handler::{AppEvent, InputHandler};
pub use keys::InputEvent;
