//! Terminal Snake runner (default binary).
//!
//! Wires the deterministic core to the terminal: crossterm events feed the
//! engine, the scheduler paces ticks, and bus subscriptions carry level-ups
//! back into the tick cadence.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_snake::core::{Engine, EventBus};
use tui_snake::game_loop::GameLoop;
use tui_snake::input::{map_key_event, should_quit};
use tui_snake::term::{GameView, Hud, TerminalRenderer};
use tui_snake::types::{EventKind, GameCommand, GameConfig, GameEvent};

/// Poll timeout used while the scheduler is stopped.
const IDLE_POLL_MS: u64 = 50;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let config = GameConfig::default();
    let bus = Rc::new(EventBus::new());
    let mut engine = Engine::new(config, Rc::clone(&bus), seed_from_clock());
    let view = GameView::new(&config);

    let game_loop = Rc::new(RefCell::new(GameLoop::new(config.initial_speed_ms)));
    let paused = Rc::new(Cell::new(false));
    let game_over = Rc::new(Cell::new(false));

    // Level-ups tighten the tick cadence down to the configured floor.
    {
        let game_loop = Rc::clone(&game_loop);
        bus.subscribe(EventKind::LevelUp, move |_| {
            let mut game_loop = game_loop.borrow_mut();
            let current = game_loop.snapshot().speed_ms;
            let faster = current
                .saturating_sub(config.speed_step_ms)
                .max(config.max_speed_ms);
            game_loop.set_speed(faster);
        });
    }
    {
        let paused = Rc::clone(&paused);
        bus.subscribe(EventKind::Pause, move |event| {
            if let GameEvent::Pause(value) = event {
                paused.set(*value);
            }
        });
    }
    {
        let game_over = Rc::clone(&game_over);
        bus.subscribe(EventKind::GameOver, move |_| game_over.set(true));
    }
    {
        let paused = Rc::clone(&paused);
        let game_over = Rc::clone(&game_over);
        bus.subscribe(EventKind::Reset, move |_| {
            paused.set(false);
            game_over.set(false);
        });
    }

    // The first tick seeds the board and yields the initial frame.
    let mut report = engine.tick();
    game_loop.borrow_mut().start();

    loop {
        let frame = view.render(
            &report,
            Hud {
                paused: paused.get(),
                game_over: game_over.get(),
            },
        );
        term.draw(&frame)?;

        // Input with timeout until the next tick deadline.
        let timeout = game_loop
            .borrow()
            .until_next_tick(Instant::now())
            .unwrap_or(Duration::from_millis(IDLE_POLL_MS));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = map_key_event(key) {
                        match command {
                            GameCommand::Turn(direction) => {
                                engine.set_direction(direction.x, direction.y);
                            }
                            GameCommand::TogglePause => engine.toggle_pause(true),
                            GameCommand::Restart => {
                                engine.set_default();
                                game_loop.borrow_mut().set_speed(config.initial_speed_ms);
                            }
                        }
                    }
                }
            }
        }

        // The borrow ends before tick() so bus handlers can re-arm the loop.
        let due = game_loop.borrow_mut().tick_due(Instant::now());
        if due {
            report = engine.tick();
        }
    }
}

fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.subsec_nanos())
        .unwrap_or(1)
}
