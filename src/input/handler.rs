use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Direction;

/// What a key press means to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Steer(Direction),
    Quit,
    /// Any key with no binding; still counts as "press any key" on the
    /// game-over screen
    Other,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyCommand {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyCommand::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => KeyCommand::Steer(Direction::Up),
            KeyCode::Down => KeyCommand::Steer(Direction::Down),
            KeyCode::Left => KeyCommand::Steer(Direction::Left),
            KeyCode::Right => KeyCommand::Steer(Direction::Right),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => KeyCommand::Steer(Direction::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => KeyCommand::Steer(Direction::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => KeyCommand::Steer(Direction::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => KeyCommand::Steer(Direction::Right),

            // Controls
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyCommand::Quit,

            _ => KeyCommand::Other,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
