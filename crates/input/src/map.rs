//! Key mapping from terminal events to game commands.

use crate::types::{Direction, GameCommand};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game commands.
pub fn map_key_event(key: KeyEvent) -> Option<GameCommand> {
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameCommand::Turn(Direction::LEFT))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameCommand::Turn(Direction::RIGHT))
        }
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(GameCommand::Turn(Direction::UP))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameCommand::Turn(Direction::DOWN))
        }

        // Actions
        KeyCode::Char(' ') => Some(GameCommand::TogglePause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameCommand::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Left)),
            Some(GameCommand::Turn(Direction::LEFT))
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Right)),
            Some(GameCommand::Turn(Direction::RIGHT))
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Up)),
            Some(GameCommand::Turn(Direction::UP))
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Down)),
            Some(GameCommand::Turn(Direction::DOWN))
        );

        // WASD, both cases.
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('a'))),
            Some(GameCommand::Turn(Direction::LEFT))
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('W'))),
            Some(GameCommand::Turn(Direction::UP))
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('S'))),
            Some(GameCommand::Turn(Direction::DOWN))
        );
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(GameCommand::TogglePause)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(GameCommand::Restart)
        );
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Enter)), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('Q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));

        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Left)));
    }
}
