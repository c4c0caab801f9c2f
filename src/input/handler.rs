use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Direction, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Steer(Player, Direction),
    Restart,
    Quit,
    None,
}

/// Maps keys to game actions. Player one steers with the arrow keys and
/// player two with WASD.
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Player one - Arrow keys
            KeyCode::Up => KeyAction::Steer(Player::One, Direction::Up),
            KeyCode::Down => KeyAction::Steer(Player::One, Direction::Down),
            KeyCode::Left => KeyAction::Steer(Player::One, Direction::Left),
            KeyCode::Right => KeyAction::Steer(Player::One, Direction::Right),

            // Player two - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => KeyAction::Steer(Player::Two, Direction::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => {
                KeyAction::Steer(Player::Two, Direction::Down)
            }
            KeyCode::Char('a') | KeyCode::Char('A') => {
                KeyAction::Steer(Player::Two, Direction::Left)
            }
            KeyCode::Char('d') | KeyCode::Char('D') => {
                KeyAction::Steer(Player::Two, Direction::Right)
            }

            // Controls
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Restart,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys_steer_player_one() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(key(KeyCode::Up)),
            KeyAction::Steer(Player::One, Direction::Up)
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Down)),
            KeyAction::Steer(Player::One, Direction::Down)
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Left)),
            KeyAction::Steer(Player::One, Direction::Left)
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Right)),
            KeyAction::Steer(Player::One, Direction::Right)
        );
    }

    #[test]
    fn test_wasd_steers_player_two() {
        let handler = InputHandler::new();

        assert_eq!(
            handler.handle_key_event(key(KeyCode::Char('w'))),
            KeyAction::Steer(Player::Two, Direction::Up)
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Char('a'))),
            KeyAction::Steer(Player::Two, Direction::Left)
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Char('s'))),
            KeyAction::Steer(Player::Two, Direction::Down)
        );
        assert_eq!(
            handler.handle_key_event(key(KeyCode::Char('d'))),
            KeyAction::Steer(Player::Two, Direction::Right)
        );
    }

    #[test]
    fn test_wasd_uppercase() {
        let handler = InputHandler::new();

        let w_upper = KeyEvent::new(KeyCode::Char('W'), KeyModifiers::SHIFT);
        assert_eq!(
            handler.handle_key_event(w_upper),
            KeyAction::Steer(Player::Two, Direction::Up)
        );
    }

    #[test]
    fn test_quit_keys() {
        let handler = InputHandler::new();

        assert_eq!(handler.handle_key_event(key(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(handler.handle_key_event(key(KeyCode::Esc)), KeyAction::Quit);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key_event(ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn test_restart_key() {
        let handler = InputHandler::new();

        let r_upper = KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT);
        assert_eq!(handler.handle_key_event(r_upper), KeyAction::Restart);
    }

    #[test]
    fn test_unknown_key() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key_event(key(KeyCode::Char('x'))), KeyAction::None);
    }
}
