use std::fmt;

use crate::{Board, Cell, CellType, PlayerColor};

/// The character a cell is drawn as.
///
/// Owned cells show their owner in upper case, edges show the color they
/// are reserved for in lower case.
pub fn cell_char(cell: &Cell) -> char {
    match (cell.owner, cell.cell_type) {
        (Some(PlayerColor::Red), _) => 'R',
        (Some(PlayerColor::Blue), _) => 'B',
        (None, CellType::Swamp) => 'S',
        (None, CellType::RedEdge) => 'r',
        (None, CellType::BlueEdge) => 'b',
        (None, CellType::Normal) => ' ',
    }
}

/// Draws the board one row per line, without a trailing newline.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_idx, row) in self.chunks(usize::from(self.size().unsigned_abs())).enumerate() {
            if row_idx > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell_char(cell))?;
            }
        }
        Ok(())
    }
}
