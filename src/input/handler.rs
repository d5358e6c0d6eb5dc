use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::InputMode;
use crate::game::Direction;

/// What a key press asks the play loop to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Steer(Direction),
    Restart,
    Quit,
    None,
}

/// Direction bound to a key: arrows, plus WASD in either case
pub fn steering_key(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('s' | 'S') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('a' | 'A') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('d' | 'D') => Some(Direction::Right),
        _ => None,
    }
}

/// Maps key events to actions for one input mode
///
/// Steering keys are dropped when the keyboard may not steer; restart and
/// quit always work since they drive the round, not the snake.
pub struct InputHandler {
    input_mode: InputMode,
}

impl InputHandler {
    pub fn new(input_mode: InputMode) -> Self {
        Self { input_mode }
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        if key.kind != KeyEventKind::Press {
            return KeyAction::None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        if let Some(direction) = steering_key(key.code) {
            return if self.input_mode.accepts_keyboard() {
                KeyAction::Steer(direction)
            } else {
                KeyAction::None
            };
        }

        match key.code {
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('r' | 'R') => KeyAction::Restart,
            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(InputMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_steering_keys() {
        assert_eq!(steering_key(KeyCode::Up), Some(Direction::Up));
        assert_eq!(steering_key(KeyCode::Down), Some(Direction::Down));
        assert_eq!(steering_key(KeyCode::Left), Some(Direction::Left));
        assert_eq!(steering_key(KeyCode::Right), Some(Direction::Right));
        assert_eq!(steering_key(KeyCode::Char('w')), Some(Direction::Up));
        assert_eq!(steering_key(KeyCode::Char('A')), Some(Direction::Left));
        assert_eq!(steering_key(KeyCode::Char('s')), Some(Direction::Down));
        assert_eq!(steering_key(KeyCode::Char('D')), Some(Direction::Right));
        assert_eq!(steering_key(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_keyboard_mode_steers() {
        let handler = InputHandler::new(InputMode::Both);
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Right)),
            KeyAction::Steer(Direction::Right)
        );

        let handler = InputHandler::new(InputMode::Keyboard);
        let w_upper = KeyEvent::new(KeyCode::Char('W'), KeyModifiers::SHIFT);
        assert_eq!(
            handler.handle_key_event(w_upper),
            KeyAction::Steer(Direction::Up)
        );
    }

    #[test]
    fn test_pose_mode_drops_steering_but_keeps_controls() {
        let handler = InputHandler::new(InputMode::Pose);

        assert_eq!(handler.handle_key_event(press(KeyCode::Up)), KeyAction::None);
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('d'))),
            KeyAction::None
        );
        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('r'))),
            KeyAction::Restart
        );
        assert_eq!(handler.handle_key_event(press(KeyCode::Esc)), KeyAction::Quit);
    }

    #[test]
    fn test_quit_keys() {
        let handler = InputHandler::default();

        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('q'))),
            KeyAction::Quit
        );
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key_event(ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn test_restart_key() {
        let handler = InputHandler::default();
        let r_upper = KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT);
        assert_eq!(handler.handle_key_event(r_upper), KeyAction::Restart);
    }

    #[test]
    fn test_release_and_unknown_keys_ignored() {
        let handler = InputHandler::default();

        let mut release = press(KeyCode::Left);
        release.kind = KeyEventKind::Release;
        release.state = KeyEventState::NONE;
        assert_eq!(handler.handle_key_event(release), KeyAction::None);

        assert_eq!(
            handler.handle_key_event(press(KeyCode::Char('x'))),
            KeyAction::None
        );
    }
}
