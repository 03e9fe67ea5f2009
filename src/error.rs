use ggez::GameError;
use std::fmt::{Debug, Display, Formatter};
use std::{fmt, result};

use crate::basic::Cell;

#[derive(Debug)]
pub enum ErrorType {
    GameError(GameError),
    /// Every cell is covered by the snake or an item
    BoardFull { occupied: usize },
}

/// The second member contains a trace in reverse order
#[must_use]
pub struct Error(ErrorType, Vec<String>);

impl Display for ErrorType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ErrorType::GameError(e) => write!(f, "ggez failed: {}", e),
            ErrorType::BoardFull { occupied } => write!(
                f,
                "no free cell to place an item, {} of {} cells occupied",
                occupied,
                Cell::board_len(),
            ),
        }
    }
}

impl From<GameError> for Error {
    fn from(e: GameError) -> Self {
        Self(ErrorType::GameError(e), vec![])
    }
}

impl From<ErrorType> for Error {
    fn from(e: ErrorType) -> Self {
        Self(e, vec![])
    }
}

impl Error {
    pub fn with_trace_step<S: ToString>(mut self, s: S) -> Self {
        self.1.push(s.to_string());
        self
    }

    pub fn is_board_full(&self) -> bool {
        matches!(self.0, ErrorType::BoardFull { .. })
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.0)?;
        for t in (self.1).iter().rev() {
            writeln!(f, " in {}", t)?;
        }
        Ok(())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

impl std::error::Error for Error {}

pub type Result<T = ()> = result::Result<T, Error>;

pub trait ErrorConversion {
    fn with_trace_step<S: ToString>(self, s: S) -> Self;
}

impl<T> ErrorConversion for Result<T> {
    fn with_trace_step<S: ToString>(self, s: S) -> Self {
        self.map_err(|e| e.with_trace_step(s.to_string()))
    }
}

#[test]
fn test_trace_is_printed_outermost_first() {
    let res: Result = Err(Error::from(ErrorType::BoardFull { occupied: 768 }));
    let err = res
        .with_trace_step("respawn")
        .with_trace_step("Game::tick")
        .unwrap_err();

    assert!(err.is_board_full());
    let text = err.to_string();
    assert!(text.starts_with("no free cell to place an item, 768 of 768 cells occupied\n"));
    let respawn = text.find(" in respawn").unwrap();
    let tick = text.find(" in Game::tick").unwrap();
    assert!(tick < respawn);
}
