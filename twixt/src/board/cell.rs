use serde::{Deserialize, Serialize};

/// One of the two players.
///
/// Red connects the top and bottom rows, Blue connects the left and right columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerColor {
    Red,
    Blue,
}

impl PlayerColor {
    pub fn opponent(self) -> Self {
        match self {
            PlayerColor::Red => PlayerColor::Blue,
            PlayerColor::Blue => PlayerColor::Red,
        }
    }

    /// The border cells only this color may occupy.
    pub fn reserved_edge(self) -> CellType {
        match self {
            PlayerColor::Red => CellType::RedEdge,
            PlayerColor::Blue => CellType::BlueEdge,
        }
    }
}

impl std::fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerColor::Red => write!(f, "red"),
            PlayerColor::Blue => write!(f, "blue"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellType {
    Normal,
    /// Can never be owned, and therefore never be linked through.
    Swamp,
    /// Top and bottom rows, reserved for red.
    RedEdge,
    /// Left and right columns, reserved for blue.
    BlueEdge,
}

/// A single cell on the board, including coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub x: i8,
    pub y: i8,
    pub cell_type: CellType,
    pub owner: Option<PlayerColor>,
}

impl Cell {
    pub fn new(x: i8, y: i8, cell_type: CellType) -> Self {
        Self {
            x,
            y,
            cell_type,
            owner: None,
        }
    }

    pub fn coordinates(&self) -> (i8, i8) {
        (self.x, self.y)
    }

    pub fn is_owned_by(&self, color: PlayerColor) -> bool {
        self.owner == Some(color)
    }
}
