//! GameView: maps a tick report into a tile frame.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::types::{GameConfig, TickReport};

/// What occupies one grid cell, from the renderer's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Empty,
    Head,
    Body,
    Apple,
}

/// Overlay-relevant session flags, tracked by the host from bus events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hud {
    pub paused: bool,
    pub game_over: bool,
}

/// A renderable frame: the tile grid plus HUD text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    grid_count: u16,
    tiles: Vec<Tile>,
    pub status: String,
    pub overlay: Option<String>,
}

impl Frame {
    pub fn grid_count(&self) -> u16 {
        self.grid_count
    }

    /// Tile at `(x, y)`; out-of-range coordinates read as empty.
    pub fn tile(&self, x: u16, y: u16) -> Tile {
        if x >= self.grid_count || y >= self.grid_count {
            return Tile::Empty;
        }
        self.tiles[y as usize * self.grid_count as usize + x as usize]
    }
}

/// A lightweight view over the engine's tick projection.
pub struct GameView {
    grid_count: u16,
}

impl GameView {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            grid_count: config.grid_count,
        }
    }

    /// Build a frame from the latest tick report and HUD flags.
    pub fn render(&self, report: &TickReport, hud: Hud) -> Frame {
        let side = self.grid_count as usize;
        let mut tiles = vec![Tile::Empty; side * side];

        let mut put = |x: i16, y: i16, tile: Tile| {
            if (0..self.grid_count as i16).contains(&x) && (0..self.grid_count as i16).contains(&y)
            {
                tiles[y as usize * side + x as usize] = tile;
            }
        };

        put(report.apple.x, report.apple.y, Tile::Apple);
        for (i, segment) in report.segments.iter().enumerate() {
            let tile = if i == 0 { Tile::Head } else { Tile::Body };
            put(segment.x, segment.y, tile);
        }

        let overlay = if hud.game_over {
            Some(format!(
                " GAME OVER - score {} - press r to restart ",
                report.score
            ))
        } else if hud.paused {
            Some(" PAUSED - space to resume ".to_string())
        } else {
            None
        };

        Frame {
            grid_count: self.grid_count,
            tiles,
            status: format!("score {:>3}   level {:>2}", report.score, report.level),
            overlay,
        }
    }
}
