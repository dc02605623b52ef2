//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameCommand`] values.
//! This is a pure translation layer: the engine applies its own direction
//! guards regardless of what arrives from here.

pub mod map;

pub use tui_snake_types as types;

pub use map::{map_key_event, should_quit};
