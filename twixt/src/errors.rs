use crate::{Move, PlayerColor};

/// The error type for accessing a cell outside of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutOfBounds {
    pub x: i8,
    pub y: i8,
}

impl std::error::Error for OutOfBounds {}

impl std::fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cell ({}, {}) is outside of the board", self.x, self.y)
    }
}

/// Why a piece cannot be placed on a cell that is on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllegalPlacement {
    CellOccupied { owner: PlayerColor },
    Swamp,
    ReservedEdge { reserved_for: PlayerColor },
}

impl std::error::Error for IllegalPlacement {}

impl std::fmt::Display for IllegalPlacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalPlacement::CellOccupied { owner } => {
                write!(f, "The cell is already occupied by {}", owner)
            }
            IllegalPlacement::Swamp => write!(f, "The cell is a swamp"),
            IllegalPlacement::ReservedEdge { reserved_for } => {
                write!(f, "The cell is an edge reserved for {}", reserved_for)
            }
        }
    }
}

/// The error type for applying one move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveError {
    OutOfBounds(OutOfBounds),
    IllegalMove {
        mv: Move,
        color: PlayerColor,
        err: IllegalPlacement,
    },
    TurnMismatch {
        mv: Move,
        expected: PlayerColor,
        actual: PlayerColor,
    },
    GameEnded,
}

impl From<OutOfBounds> for MoveError {
    fn from(err: OutOfBounds) -> Self {
        MoveError::OutOfBounds(err)
    }
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::OutOfBounds(err) => Some(err),
            MoveError::IllegalMove { err, .. } => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::OutOfBounds(err) => write!(f, "Piece was placed out of bounds: {}", err),
            MoveError::IllegalMove { mv, color, err: _ } => write!(
                f,
                "{} may not place a piece on ({}, {})",
                color, mv.x, mv.y
            ),
            MoveError::TurnMismatch {
                mv,
                expected,
                actual,
            } => write!(
                f,
                "{} tried to play ({}, {}), but it is {}'s turn",
                actual, mv.x, mv.y, expected
            ),
            MoveError::GameEnded => write!(f, "The game has already ended"),
        }
    }
}
