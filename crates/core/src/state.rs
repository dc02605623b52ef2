//! State manager - sole owner and mutator of the game state.
//!
//! Every mutation publishes exactly one event on the bus. External reads go
//! through [`StateManager::snapshot`], which returns an owned copy; nothing
//! outside this module can alias the internal aggregate.
//!
//! Inputs are pre-validated by the caller except where noted: direction
//! vectors are validated (and ignored while paused) here, everything else is
//! the engine's responsibility.

use std::collections::VecDeque;
use std::rc::Rc;

use crate::bus::EventBus;
use crate::types::{Direction, GameConfig, GameEvent, GridPosition, StateSnapshot};

/// The mutable aggregate. Private: only `StateManager` touches it.
#[derive(Debug, Clone)]
struct GameState {
    paused: bool,
    score: u32,
    level: u32,
    segments: VecDeque<GridPosition>,
    direction: Direction,
    previous_direction: Direction,
    apple: GridPosition,
}

impl GameState {
    fn empty() -> Self {
        Self {
            paused: false,
            score: 0,
            level: 0,
            segments: VecDeque::new(),
            direction: Direction::STILL,
            previous_direction: Direction::STILL,
            apple: GridPosition::new(0, 0),
        }
    }
}

/// Owns the game state and publishes one event per logical change.
pub struct StateManager {
    config: GameConfig,
    bus: Rc<EventBus>,
    state: GameState,
}

impl StateManager {
    /// Create a manager with an empty, un-seeded state.
    ///
    /// Call [`StateManager::set_default`] before the first tick; the engine
    /// does this lazily.
    pub fn new(config: GameConfig, bus: Rc<EventBus>) -> Self {
        Self {
            config,
            bus,
            state: GameState::empty(),
        }
    }

    /// Return an owned copy of the current state.
    ///
    /// Pure; no events are published.
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            paused: self.state.paused,
            score: self.state.score,
            level: self.state.level,
            segments: self.state.segments.iter().copied().collect(),
            apple: self.state.apple,
            direction: self.state.direction,
            previous_direction: self.state.previous_direction,
        }
    }

    /// Re-seed the state: centered snake, zero direction, score and level 0,
    /// deterministic apple. Publishes `Reset`. Valid from any state.
    pub fn set_default(&mut self) {
        let grid = self.config.grid_count as i16;
        let start = grid / 2;

        self.state.paused = false;
        self.state.score = 0;
        self.state.level = 0;
        self.state.segments = (0..self.config.initial_segment_count)
            .map(|i| GridPosition::new(start - i as i16, start))
            .collect();
        self.state.direction = Direction::STILL;
        self.state.previous_direction = Direction::STILL;
        // Fixed offset from center, wrapped so small grids stay in bounds.
        let offset = (start + 5).rem_euclid(grid);
        self.state.apple = GridPosition::new(offset, offset);

        self.bus.publish(&GameEvent::Reset(self.snapshot()));
    }

    /// Set the movement direction.
    ///
    /// Ignored (no event) while paused or when either component is outside
    /// `{-1, 0, 1}`. A non-zero vector first saves the current direction as
    /// the previous one. Direct-reversal policy lives in the engine, not here.
    pub fn set_direction(&mut self, dx: i16, dy: i16) {
        if self.state.paused {
            return;
        }

        let direction = Direction::new(dx, dy);
        if !direction.is_valid() {
            return;
        }

        if !direction.is_still() {
            self.state.previous_direction = self.state.direction;
        }
        self.state.direction = direction;

        self.bus.publish(&GameEvent::Direction(direction));
    }

    /// Flip the pause flag.
    ///
    /// Pausing saves the current direction and zeroes it, freezing motion;
    /// resuming restores the saved direction. Publishes `Pause` only when
    /// `emit_event` is set, so administrative pauses stay silent.
    pub fn toggle_pause(&mut self, emit_event: bool) {
        self.state.paused = !self.state.paused;

        if self.state.paused {
            self.state.previous_direction = self.state.direction;
            self.state.direction = Direction::STILL;
        } else {
            self.state.direction = self.state.previous_direction;
        }

        if emit_event {
            self.bus.publish(&GameEvent::Pause(self.state.paused));
        }
    }

    /// Prepend a new head segment. Publishes `Segments`.
    pub fn add_head(&mut self, x: i16, y: i16) {
        self.state.segments.push_front(GridPosition::new(x, y));
        self.bus.publish(&GameEvent::Segments(self.snapshot()));
    }

    /// Remove the tail segment. Publishes `Segments`.
    ///
    /// The engine's length-invariant loop guarantees this is never called on
    /// a snake that would drop below one segment.
    pub fn remove_tail(&mut self) {
        self.state.segments.pop_back();
        self.bus.publish(&GameEvent::Segments(self.snapshot()));
    }

    /// Move the apple. Publishes `Apple`.
    pub fn set_apple(&mut self, x: i16, y: i16) {
        self.state.apple = GridPosition::new(x, y);
        self.bus.publish(&GameEvent::Apple(self.state.apple));
    }

    /// Increment the score by one. Publishes `Score` with the new value.
    pub fn increase_score(&mut self) {
        self.state.score += 1;
        self.bus.publish(&GameEvent::Score(self.state.score));
    }

    /// Increment the level by one. Publishes `LevelUp` with the new value.
    pub fn increase_level(&mut self) {
        self.state.level += 1;
        self.bus.publish(&GameEvent::LevelUp(self.state.level));
    }

    /// Mark the session as over: paused, zero direction.
    ///
    /// Does not reset - the terminal score and level stay inspectable until
    /// an external restart triggers [`StateManager::set_default`]. Publishes
    /// `GameOver` with the terminal snapshot.
    pub fn game_over(&mut self) {
        self.state.paused = true;
        self.state.direction = Direction::STILL;
        self.bus.publish(&GameEvent::GameOver(self.snapshot()));
    }
}
