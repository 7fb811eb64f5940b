//! Keyboard mapping for the game screen.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Input actions for the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Flap, or restart after a crash (Space, Up, Enter or k).
    Tap,
    /// Leave the game (q, Esc or Ctrl+C).
    Quit,
    /// Any other key.
    Other,
}

impl GameInput {
    /// Keys bound to this input, as shown in on-screen hints.
    pub fn keys(self) -> &'static str {
        match self {
            GameInput::Tap => "Space/Up/Enter/k",
            GameInput::Quit => "q/Esc",
            GameInput::Other => "",
        }
    }
}

/// Map a key event to a game input. Key releases and repeats count as `Other`
/// so one physical press is one tap.
pub fn map_key(key: KeyEvent) -> GameInput {
    if key.kind != KeyEventKind::Press {
        return GameInput::Other;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => GameInput::Quit,
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter | KeyCode::Char('k') => GameInput::Tap,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => GameInput::Quit,
        _ => GameInput::Other,
    }
}
