//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (core logic, terminal rendering, tests).
//!
//! # Grid Model
//!
//! The playfield is a square toroidal grid: `grid_count` cells per side,
//! coordinates in `0..grid_count` on both axes, and movement off one edge
//! re-enters from the opposite edge.
//!
//! # Default Configuration
//!
//! | Field | Value | Description |
//! |-------|-------|-------------|
//! | `grid_count` | 29 | Cells per grid side |
//! | `initial_segment_count` | 5 | Snake length at reset |
//! | `level_step` | 5 | Score required per level |
//! | `initial_speed_ms` | 100 | Starting tick interval |
//! | `max_speed_ms` | 30 | Smallest allowed tick interval |
//! | `speed_step_ms` | 5 | Interval decrease per level |
//!
//! # Event Vocabulary
//!
//! State changes are announced as [`GameEvent`] values on the event bus.
//! [`EventKind`] is the closed set of subscription keys; every event maps to
//! exactly one kind via [`GameEvent::kind`].

/// Default cells per grid side (29x29).
pub const DEFAULT_GRID_COUNT: u16 = 29;

/// Default snake length at reset.
pub const DEFAULT_INITIAL_SEGMENT_COUNT: usize = 5;

/// Default score required to advance one level.
pub const DEFAULT_LEVEL_STEP: u32 = 5;

/// Default tick interval at game start, in milliseconds.
pub const DEFAULT_INITIAL_SPEED_MS: u64 = 100;

/// Smallest allowed tick interval (fastest cadence), in milliseconds.
pub const DEFAULT_MAX_SPEED_MS: u64 = 30;

/// Interval decrease applied per level-up, in milliseconds.
pub const DEFAULT_SPEED_STEP_MS: u64 = 5;

/// A cell coordinate on the grid.
///
/// Always within `0..grid_count` on both axes for any position held by the
/// state manager. Value type, copied on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPosition {
    pub x: i16,
    pub y: i16,
}

impl GridPosition {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }
}

/// A unit step vector with components in `{-1, 0, 1}`.
///
/// `{0, 0}` means "not moving" - the idle state before the first input and
/// the frozen state while paused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Direction {
    pub x: i16,
    pub y: i16,
}

impl Direction {
    pub const STILL: Direction = Direction { x: 0, y: 0 };
    pub const UP: Direction = Direction { x: 0, y: -1 };
    pub const DOWN: Direction = Direction { x: 0, y: 1 };
    pub const LEFT: Direction = Direction { x: -1, y: 0 };
    pub const RIGHT: Direction = Direction { x: 1, y: 0 };

    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// True when both components are zero.
    pub fn is_still(&self) -> bool {
        self.x == 0 && self.y == 0
    }

    /// True when each component is in `{-1, 0, 1}`.
    pub fn is_valid(&self) -> bool {
        (-1..=1).contains(&self.x) && (-1..=1).contains(&self.y)
    }

    /// True when `other` added to `self` yields the zero vector.
    ///
    /// This is the reversal predicate: a moving snake may not turn into the
    /// exact opposite heading, and a still snake may not be commanded still.
    pub fn cancels(&self, other: Direction) -> bool {
        self.x + other.x == 0 && self.y + other.y == 0
    }
}

/// Configuration consumed by the core and its collaborators.
///
/// Supplied at construction; the core never mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Cells per grid side.
    pub grid_count: u16,
    /// Snake length at reset.
    pub initial_segment_count: usize,
    /// Score required to advance one level.
    pub level_step: u32,
    /// Tick interval at game start, in milliseconds.
    pub initial_speed_ms: u64,
    /// Smallest allowed tick interval, in milliseconds.
    pub max_speed_ms: u64,
    /// Interval decrease per level-up, in milliseconds.
    pub speed_step_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_count: DEFAULT_GRID_COUNT,
            initial_segment_count: DEFAULT_INITIAL_SEGMENT_COUNT,
            level_step: DEFAULT_LEVEL_STEP,
            initial_speed_ms: DEFAULT_INITIAL_SPEED_MS,
            max_speed_ms: DEFAULT_MAX_SPEED_MS,
            speed_step_ms: DEFAULT_SPEED_STEP_MS,
        }
    }
}

/// An isolated copy of the game state, safe for external inspection.
///
/// Snapshots are owned values; holding one never aliases the state manager's
/// internal aggregate, so consumers cannot mutate engine state through it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSnapshot {
    pub paused: bool,
    pub score: u32,
    pub level: u32,
    pub segments: Vec<GridPosition>,
    pub apple: GridPosition,
    pub direction: Direction,
    pub previous_direction: Direction,
}

impl StateSnapshot {
    /// The head segment, if any segments exist.
    pub fn head(&self) -> Option<GridPosition> {
        self.segments.first().copied()
    }
}

/// The read-only projection returned by `Engine::tick` - everything the
/// renderer needs, nothing more.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    pub segments: Vec<GridPosition>,
    pub apple: GridPosition,
    pub score: u32,
    pub level: u32,
}

/// Subscription keys for the event bus - one per logical state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// State was re-seeded to defaults.
    Reset,
    /// The segment chain changed (head added or tail removed).
    Segments,
    /// The movement direction changed.
    Direction,
    /// The pause flag flipped (only published on user-visible toggles).
    Pause,
    /// The apple moved.
    Apple,
    /// The score increased.
    Score,
    /// The level increased.
    LevelUp,
    /// The session ended on self-collision.
    GameOver,
}

/// An event published by the state manager, carrying its payload.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    Reset(StateSnapshot),
    Segments(StateSnapshot),
    Direction(Direction),
    Pause(bool),
    Apple(GridPosition),
    Score(u32),
    LevelUp(u32),
    GameOver(StateSnapshot),
}

impl GameEvent {
    /// The subscription key this event is delivered under.
    pub fn kind(&self) -> EventKind {
        match self {
            GameEvent::Reset(_) => EventKind::Reset,
            GameEvent::Segments(_) => EventKind::Segments,
            GameEvent::Direction(_) => EventKind::Direction,
            GameEvent::Pause(_) => EventKind::Pause,
            GameEvent::Apple(_) => EventKind::Apple,
            GameEvent::Score(_) => EventKind::Score,
            GameEvent::LevelUp(_) => EventKind::LevelUp,
            GameEvent::GameOver(_) => EventKind::GameOver,
        }
    }
}

/// A user command produced by the input translator.
///
/// Commands are plain data; the engine applies its own guards (direction
/// validation, reversal rejection) regardless of what the translator emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    /// Change the snake's heading.
    Turn(Direction),
    /// Toggle the user-visible pause state.
    TogglePause,
    /// Re-seed the game state and start over.
    Restart,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_validity() {
        assert!(Direction::STILL.is_valid());
        assert!(Direction::UP.is_valid());
        assert!(Direction::new(-1, 1).is_valid());
        assert!(!Direction::new(2, 0).is_valid());
        assert!(!Direction::new(0, -3).is_valid());
    }

    #[test]
    fn test_direction_cancels() {
        assert!(Direction::RIGHT.cancels(Direction::LEFT));
        assert!(Direction::UP.cancels(Direction::DOWN));
        // A still snake commanded still also cancels.
        assert!(Direction::STILL.cancels(Direction::STILL));

        assert!(!Direction::RIGHT.cancels(Direction::UP));
        assert!(!Direction::RIGHT.cancels(Direction::RIGHT));
        assert!(!Direction::RIGHT.cancels(Direction::STILL));
    }

    #[test]
    fn test_config_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.grid_count, 29);
        assert_eq!(config.initial_segment_count, 5);
        assert_eq!(config.level_step, 5);
        assert_eq!(config.initial_speed_ms, 100);
        assert_eq!(config.max_speed_ms, 30);
        assert_eq!(config.speed_step_ms, 5);
    }

    #[test]
    fn test_event_kind_mapping() {
        assert_eq!(GameEvent::Score(3).kind(), EventKind::Score);
        assert_eq!(GameEvent::LevelUp(1).kind(), EventKind::LevelUp);
        assert_eq!(
            GameEvent::Direction(Direction::LEFT).kind(),
            EventKind::Direction
        );
        assert_eq!(
            GameEvent::Apple(GridPosition::new(2, 3)).kind(),
            EventKind::Apple
        );
        assert_eq!(GameEvent::Pause(true).kind(), EventKind::Pause);
    }

    #[test]
    fn test_snapshot_head() {
        let snapshot = StateSnapshot {
            paused: false,
            score: 0,
            level: 0,
            segments: vec![GridPosition::new(5, 5), GridPosition::new(4, 5)],
            apple: GridPosition::new(10, 10),
            direction: Direction::RIGHT,
            previous_direction: Direction::STILL,
        };
        assert_eq!(snapshot.head(), Some(GridPosition::new(5, 5)));

        let empty = StateSnapshot {
            segments: Vec::new(),
            ..snapshot
        };
        assert_eq!(empty.head(), None);
    }
}
