//! Key mapping from terminal events to game commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gridfall_types::Command;

/// Map keyboard input to a game command.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Command::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Command::MoveRight)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Command::MoveDown)
        }

        // Rotation
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(Command::Rotate),

        // Session control
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Command::TogglePause),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(Command::NewGame),

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
    fn movement_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Left)),
            Some(Command::MoveLeft)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Right)),
            Some(Command::MoveRight)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Down)),
            Some(Command::MoveDown)
        );

        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('H'))),
            Some(Command::MoveLeft)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('d'))),
            Some(Command::MoveRight)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('j'))),
            Some(Command::MoveDown)
        );
    }

    #[test]
    fn rotation_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Up)), Some(Command::Rotate));
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('w'))),
            Some(Command::Rotate)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('K'))),
            Some(Command::Rotate)
        );
    }

    #[test]
    fn session_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('p'))),
            Some(Command::TogglePause)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('n'))),
            Some(Command::NewGame)
        );
    }

    #[test]
    fn unmapped_keys_do_nothing() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(map_key(KeyEvent::from(KeyCode::Tab)), None);
    }

    #[test]
    fn quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
