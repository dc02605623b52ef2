//! Scheduler behavior through the facade crate, including the level-up
//! speed policy the binary installs.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use tui_snake::core::{Engine, EventBus};
use tui_snake::game_loop::GameLoop;
use tui_snake::types::{EventKind, GameConfig, GameEvent};

#[test]
fn test_pump_fires_once_per_interval() {
    let mut game_loop = GameLoop::new(100);
    game_loop.start();

    // Walk a synthetic clock forward in interval-sized steps.
    let mut now = Instant::now() + Duration::from_secs(1);
    let mut fired = 0;
    for _ in 0..5 {
        if game_loop.tick_due(now) {
            fired += 1;
        }
        // A probe between deadlines must not fire.
        assert!(!game_loop.tick_due(now + Duration::from_millis(10)));
        now += Duration::from_secs(1);
    }
    assert_eq!(fired, 5);
}

#[test]
fn test_level_up_tightens_cadence_to_floor() {
    let config = GameConfig {
        initial_speed_ms: 40,
        max_speed_ms: 30,
        speed_step_ms: 5,
        ..GameConfig::default()
    };
    let bus = Rc::new(EventBus::new());
    let game_loop = Rc::new(RefCell::new(GameLoop::new(config.initial_speed_ms)));

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

    bus.publish(&GameEvent::LevelUp(1));
    assert_eq!(game_loop.borrow().snapshot().speed_ms, 35);

    bus.publish(&GameEvent::LevelUp(2));
    assert_eq!(game_loop.borrow().snapshot().speed_ms, 30);

    // Clamped at the floor from here on.
    bus.publish(&GameEvent::LevelUp(3));
    assert_eq!(game_loop.borrow().snapshot().speed_ms, 30);
}

#[test]
fn test_scheduler_paces_engine_ticks() {
    let bus = Rc::new(EventBus::new());
    let mut engine = Engine::new(
        GameConfig {
            grid_count: 10,
            initial_segment_count: 3,
            ..GameConfig::default()
        },
        bus,
        7,
    );
    let mut game_loop = GameLoop::new(100);

    let mut report = engine.tick();
    engine.set_direction(1, 0);
    game_loop.start();

    // Three deadline crossings on a synthetic clock drive three ticks.
    let mut now = Instant::now() + Duration::from_secs(1);
    for _ in 0..3 {
        assert!(game_loop.until_next_tick(now).is_some());
        if game_loop.tick_due(now) {
            report = engine.tick();
        }
        now += Duration::from_secs(1);
    }

    assert_eq!(report.segments[0].x, 8);
    assert_eq!(report.segments[0].y, 5);
}

#[test]
fn test_stopped_scheduler_reports_no_timeout() {
    let game_loop = GameLoop::new(100);
    assert!(game_loop.until_next_tick(Instant::now()).is_none());
    assert!(!game_loop.is_running());
}
