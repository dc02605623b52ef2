//! Terminal presentation layer.
//!
//! Split in two: [`GameView`] is the pure projection from a tick report to a
//! tile [`Frame`], and [`TerminalRenderer`] is the I/O half that puts a frame
//! on the screen with `crossterm`.

pub mod game_view;
pub mod renderer;

pub use tui_snake_types as types;

pub use game_view::{Frame, GameView, Hud, Tile};
pub use renderer::TerminalRenderer;
