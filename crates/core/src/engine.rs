//! Engine - the per-tick simulation step.
//!
//! One `tick()` advances the snake by one cell and resolves the consequences
//! in a fixed order: movement (with toroidal wrapping and length-invariant
//! enforcement), then collision, then consumption. Collision wins when both
//! hold in the same tick; the apple is not consumed on the final move.
//!
//! The engine never errors. Its only terminal transition is game over, which
//! freezes the session until an external collaborator calls
//! [`Engine::set_default`].

use std::rc::Rc;

use crate::bus::EventBus;
use crate::rng::SimpleRng;
use crate::state::StateManager;
use crate::types::{Direction, GameConfig, StateSnapshot, TickReport};

/// Orchestrates tick execution against the state manager.
pub struct Engine {
    config: GameConfig,
    state: StateManager,
    rng: SimpleRng,
    /// State is seeded lazily on the first tick, so subscribers registered
    /// after construction still observe the initial `Reset` event.
    initialized: bool,
    game_over: bool,
}

impl Engine {
    pub fn new(config: GameConfig, bus: Rc<EventBus>, seed: u32) -> Self {
        Self {
            config,
            state: StateManager::new(config, bus),
            rng: SimpleRng::new(seed),
            initialized: false,
            game_over: false,
        }
    }

    /// True once a self-collision has ended the current session.
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// An owned copy of the current state, for external inspection.
    pub fn snapshot(&self) -> StateSnapshot {
        self.state.snapshot()
    }

    /// Execute one simulation step and return the render projection.
    pub fn tick(&mut self) -> TickReport {
        if !self.initialized {
            self.set_default();
        }
        if self.game_over {
            // Terminal until an explicit restart; no reprocessing.
            return project(self.state.snapshot());
        }

        let mut snapshot = self.state.snapshot();
        if !snapshot.direction.is_still() {
            snapshot = self.advance(snapshot);
        }

        // Both checks run against the same post-movement snapshot.
        let Some(head) = snapshot.head() else {
            return project(snapshot);
        };
        let collision = snapshot.segments[1..].iter().any(|segment| *segment == head);
        let consumption = head == snapshot.apple;

        if collision {
            // Collision takes precedence; the apple is not consumed.
            self.game_over = true;
            self.state.game_over();
            return project(self.state.snapshot());
        }
        if consumption {
            snapshot = self.consume();
        }

        project(snapshot)
    }

    /// Update the heading, rejecting a vector that cancels the current one.
    ///
    /// This blocks reversing into the neck in a single frame while moving
    /// (the input translator may guard too; neither side assumes the other
    /// suffices). Ignored entirely once the session is over.
    pub fn set_direction(&mut self, dx: i16, dy: i16) {
        if self.game_over {
            return;
        }
        let current = self.state.snapshot().direction;
        if current.cancels(Direction::new(dx, dy)) {
            return;
        }
        self.state.set_direction(dx, dy);
    }

    /// Toggle pause, optionally publishing the `Pause` event.
    ///
    /// Ignored while game over - the terminal freeze is not a pause.
    pub fn toggle_pause(&mut self, emit_event: bool) {
        if self.game_over {
            return;
        }
        self.state.toggle_pause(emit_event);
    }

    /// Re-seed the state and return to the idle-active sub-state.
    pub fn set_default(&mut self) {
        self.initialized = true;
        self.game_over = false;
        self.state.set_default();
    }

    /// Apply one cell of movement with toroidal wrapping, then trim the tail
    /// until the length invariant `len == initial_segment_count + score`
    /// holds again.
    fn advance(&mut self, snapshot: StateSnapshot) -> StateSnapshot {
        let grid = self.config.grid_count as i16;
        let head = snapshot.segments[0];
        let new_x = (head.x + snapshot.direction.x).rem_euclid(grid);
        let new_y = (head.y + snapshot.direction.y).rem_euclid(grid);

        self.state.add_head(new_x, new_y);

        let mut snapshot = self.state.snapshot();
        let target = self.config.initial_segment_count + snapshot.score as usize;
        while snapshot.segments.len() > target {
            self.state.remove_tail();
            snapshot = self.state.snapshot();
        }
        snapshot
    }

    /// Respawn the apple uniformly over the grid (occupied cells are not
    /// excluded), bump the score, and level up on exact `level_step`
    /// multiples.
    fn consume(&mut self) -> StateSnapshot {
        let grid = self.config.grid_count as u32;
        let x = self.rng.next_below(grid) as i16;
        let y = self.rng.next_below(grid) as i16;
        self.state.set_apple(x, y);

        self.state.increase_score();

        let snapshot = self.state.snapshot();
        if self.config.level_step > 0 && snapshot.score % self.config.level_step == 0 {
            self.state.increase_level();
        }
        self.state.snapshot()
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut StateManager {
        &mut self.state
    }
}

fn project(snapshot: StateSnapshot) -> TickReport {
    TickReport {
        segments: snapshot.segments,
        apple: snapshot.apple,
        score: snapshot.score,
        level: snapshot.level,
    }
}
