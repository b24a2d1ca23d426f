//! Keyboard mapping
//!
//! Keys map to commands; commands fold into the `TickInput` for the next
//! frame. Only the latest move survives until the frame consumes it.

use crate::sim::{Direction, TickInput};

/// A logical request from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Restart,
}

impl Command {
    /// Map a `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "Left" | "a" | "A" => Some(Command::Move(Direction::Left)),
            "ArrowUp" | "Up" | "w" | "W" => Some(Command::Move(Direction::Up)),
            "ArrowRight" | "Right" | "d" | "D" => Some(Command::Move(Direction::Right)),
            "ArrowDown" | "Down" | "s" | "S" => Some(Command::Move(Direction::Down)),
            "Enter" | " " | "r" | "R" => Some(Command::Restart),
            _ => None,
        }
    }

    /// Map a legacy `KeyboardEvent.keyCode`
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            37 => Some(Command::Move(Direction::Left)),
            38 => Some(Command::Move(Direction::Up)),
            39 => Some(Command::Move(Direction::Right)),
            40 => Some(Command::Move(Direction::Down)),
            13 | 32 | 82 => Some(Command::Restart),
            _ => None,
        }
    }

    /// Fold this command into the pending input
    pub fn apply(self, input: &mut TickInput) {
        match self {
            Command::Move(direction) => input.step = Some(direction),
            Command::Restart => input.restart = true,
        }
    }
}
