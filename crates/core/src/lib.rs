//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the authoritative game state, the per-tick simulation
//! algorithm, and the event bus that exposes state transitions to the outside
//! world. It has no dependencies on UI, timing, or I/O, making it:
//!
//! - **Deterministic**: the same seed and input sequence replay identically
//! - **Testable**: every rule is covered by unit tests against plain data
//! - **Portable**: runs in any host (terminal, headless, benchmarks)
//!
//! # Module Structure
//!
//! - [`bus`]: typed synchronous publish/subscribe keyed by event kind
//! - [`state`]: sole owner of the game state; one event per mutation
//! - [`engine`]: the tick algorithm - movement, collision, consumption
//! - [`rng`]: small LCG for reproducible apple placement
//!
//! # Game Rules
//!
//! - The grid is toroidal: leaving one edge re-enters the opposite edge
//! - The snake's length is tied to the score: `initial_segment_count + score`
//! - Eating the apple scores one point and grows the snake by one segment
//!   over the following tick
//! - Every `level_step` points the level increases (the host typically
//!   listens for this to speed up the tick cadence)
//! - Moving onto any body cell ends the session; when the same cell also
//!   holds the apple, the collision wins and the apple is not consumed
//! - Game over is terminal: only an explicit reset starts a new session
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use tui_snake_core::{Engine, EventBus};
//! use tui_snake_types::GameConfig;
//!
//! let bus = Rc::new(EventBus::new());
//! let mut engine = Engine::new(GameConfig::default(), Rc::clone(&bus), 7);
//!
//! // The first tick seeds the board; the snake idles until a direction
//! // is commanded.
//! let report = engine.tick();
//! assert_eq!(report.score, 0);
//!
//! engine.set_direction(1, 0);
//! let moved = engine.tick();
//! assert_ne!(moved.segments[0], report.segments[0]);
//! ```

pub mod bus;
pub mod engine;
pub mod rng;
pub mod state;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use bus::{EventBus, HandlerId};
pub use engine::Engine;
pub use rng::SimpleRng;
pub use state::StateManager;
