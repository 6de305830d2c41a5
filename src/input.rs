use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// High-level commands consumed by the game session and runtime loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameCommand {
    Turn(Direction),
    TogglePause,
    Restart,
    Quit,
}

/// Waits up to `timeout` for one terminal event and maps it to a command.
///
/// Events that carry no meaning for the game (unmapped keys, resizes, key
/// releases) yield `Ok(None)` and are thereby silently ignored.
pub fn poll_command(timeout: Duration) -> io::Result<Option<GameCommand>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(command_for_key(key)),
        _ => Ok(None),
    }
}

/// Maps a single key press to a game command.
#[must_use]
pub fn command_for_key(key: KeyEvent) -> Option<GameCommand> {
    match key.code {
        KeyCode::Up | KeyCode::Char('w') => Some(GameCommand::Turn(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s') => Some(GameCommand::Turn(Direction::Down)),
        KeyCode::Left | KeyCode::Char('a') => Some(GameCommand::Turn(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d') => Some(GameCommand::Turn(Direction::Right)),
        KeyCode::Char(' ') | KeyCode::Char('p') => Some(GameCommand::TogglePause),
        KeyCode::Char('r') | KeyCode::Enter => Some(GameCommand::Restart),
        KeyCode::Char('q') | KeyCode::Esc => Some(GameCommand::Quit),
        _ => None,
    }
}
