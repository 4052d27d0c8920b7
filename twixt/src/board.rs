mod bbox;
mod cell;
mod link;

use std::ops::Deref;

pub use bbox::*;
pub use cell::*;
pub use link::*;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{form_links, IllegalPlacement, Move, MoveError, OutOfBounds};

/// The default side length of the board.
pub const BOARD_SIZE: i8 = 24;

/// The largest supported side length, so that link offsets never overflow.
pub const MAX_BOARD_SIZE: i8 = 100;

/// Side lengths of the square swamp regions placed on a fresh board.
pub const SWAMP_REGIONS: [i8; 4] = [3, 2, 2, 1];

/// A square grid of cells plus the links between them.
///
/// Cells are stored in row-major order. Links are only ever added, and the
/// only other mutation after setup is assigning an owner to a cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: i8,
    /// There is exactly one entry in this list for every cell, at index `y * size + x`.
    cells: Vec<Cell>,
    links: Vec<Link>,
}

impl Board {
    /// Creates a board with the fixed edge layout and no swamps besides the corners.
    ///
    /// Panics if `size` is not in `3..=MAX_BOARD_SIZE`.
    pub fn new(size: i8) -> Self {
        assert!(
            (3..=MAX_BOARD_SIZE).contains(&size),
            "Board size {} is not supported",
            size
        );
        let last = size - 1;
        let mut cells = Vec::with_capacity(usize::from(size.unsigned_abs()).pow(2));
        for y in 0..size {
            for x in 0..size {
                let on_top_or_bottom = y == 0 || y == last;
                let on_left_or_right = x == 0 || x == last;
                let cell_type = match (on_top_or_bottom, on_left_or_right) {
                    (true, true) => CellType::Swamp,
                    (true, false) => CellType::RedEdge,
                    (false, true) => CellType::BlueEdge,
                    (false, false) => CellType::Normal,
                };
                cells.push(Cell::new(x, y, cell_type));
            }
        }
        Self {
            size,
            cells,
            links: Vec::new(),
        }
    }

    /// Creates a board with the edge layout and randomly placed swamp regions.
    ///
    /// Every region of [`SWAMP_REGIONS`] is placed uniformly at random so that
    /// it lies fully inside the interior. Regions may overlap each other. A
    /// region that does not fit into the interior at all is skipped.
    pub fn initialize<R: Rng + ?Sized>(size: i8, rng: &mut R) -> Self {
        let mut board = Self::new(size);
        for region in SWAMP_REGIONS {
            let max_start = size - 1 - region;
            if max_start < 1 {
                trace!(region, size, "Swamp region does not fit into the interior");
                continue;
            }
            let x0 = rng.gen_range(1..=max_start);
            let y0 = rng.gen_range(1..=max_start);
            for y in y0..y0 + region {
                for x in x0..x0 + region {
                    let idx = board.index(x, y);
                    board.cells[idx].cell_type = CellType::Swamp;
                }
            }
        }
        board
    }

    pub fn size(&self) -> i8 {
        self.size
    }

    pub fn is_in_bounds(&self, x: i8, y: i8) -> bool {
        (0..self.size).contains(&x) && (0..self.size).contains(&y)
    }

    pub fn field(&self, x: i8, y: i8) -> Result<&Cell, OutOfBounds> {
        if self.is_in_bounds(x, y) {
            Ok(&self.cells[self.index(x, y)])
        } else {
            Err(OutOfBounds { x, y })
        }
    }

    /// Overrides the type of a cell. Only meant for setting up a board.
    pub fn set_cell_type(&mut self, x: i8, y: i8, cell_type: CellType) -> Result<(), OutOfBounds> {
        self.field(x, y)?;
        let idx = self.index(x, y);
        self.cells[idx].cell_type = cell_type;
        Ok(())
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// All links that have `(x, y)` as one of their endpoints.
    pub fn links_at(&self, x: i8, y: i8) -> impl Iterator<Item = &Link> + '_ {
        self.links.iter().filter(move |link| link.touches(x, y))
    }

    pub fn has_link(&self, link: &Link) -> bool {
        self.links.contains(link)
    }

    /// Checks whether `color` may place a piece on `(x, y)`.
    ///
    /// The cell must be unowned, must not be a swamp and must not be the
    /// edge reserved for the opponent.
    pub fn check_placement(&self, x: i8, y: i8, color: PlayerColor) -> Result<(), MoveError> {
        let cell = self.field(x, y)?;
        let illegal = |err| MoveError::IllegalMove {
            mv: Move { x, y },
            color,
            err,
        };
        if let Some(owner) = cell.owner {
            return Err(illegal(IllegalPlacement::CellOccupied { owner }));
        }
        if cell.cell_type == CellType::Swamp {
            return Err(illegal(IllegalPlacement::Swamp));
        }
        let reserved_for = color.opponent();
        if cell.cell_type == reserved_for.reserved_edge() {
            return Err(illegal(IllegalPlacement::ReservedEdge { reserved_for }));
        }
        Ok(())
    }

    /// Places a piece of `color` on `(x, y)` and forms all links from it.
    ///
    /// Returns the links that were created, in the order they were formed.
    pub fn put(&mut self, x: i8, y: i8, color: PlayerColor) -> Result<Vec<Link>, MoveError> {
        self.check_placement(x, y, color)?;
        let idx = self.index(x, y);
        self.cells[idx].owner = Some(color);
        Ok(form_links(self, x, y))
    }

    pub(crate) fn add_link(&mut self, link: Link) {
        debug_assert!(!self.has_link(&link));
        self.links.push(link);
    }

    fn index(&self, x: i8, y: i8) -> usize {
        debug_assert!(self.is_in_bounds(x, y));
        // Both casts are lossless since the coordinates are in bounds
        y as usize * self.size as usize + x as usize
    }
}

impl Deref for Board {
    type Target = [Cell];

    fn deref(&self) -> &Self::Target {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn count(board: &Board, cell_type: CellType) -> usize {
        board.iter().filter(|c| c.cell_type == cell_type).count()
    }

    #[test]
    fn edge_layout_for_all_sizes() {
        for size in 3..=30 {
            let board = Board::new(size);
            let inner = usize::try_from(size - 2).unwrap();
            assert_eq!(count(&board, CellType::Swamp), 4);
            assert_eq!(count(&board, CellType::RedEdge), 2 * inner);
            assert_eq!(count(&board, CellType::BlueEdge), 2 * inner);
            assert_eq!(count(&board, CellType::Normal), inner * inner);
            for (x, y) in [(0, 0), (0, size - 1), (size - 1, 0), (size - 1, size - 1)] {
                assert_eq!(board.field(x, y).unwrap().cell_type, CellType::Swamp);
            }
        }
    }

    #[test]
    fn field_is_bounds_checked() {
        let board = Board::new(10);
        assert_eq!(board.field(10, 0), Err(OutOfBounds { x: 10, y: 0 }));
        assert_eq!(board.field(0, -1), Err(OutOfBounds { x: 0, y: -1 }));
        let cell = board.field(9, 5).unwrap();
        assert_eq!((cell.x, cell.y), (9, 5));
        assert_eq!(cell.cell_type, CellType::BlueEdge);
    }

    #[test]
    fn swamps_stay_in_the_interior() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let board = Board::initialize(10, &mut rng);
            let plain = Board::new(10);
            let swamps = count(&board, CellType::Swamp) - 4;
            // Overlapping regions reduce the area, but never below the largest region
            assert!((9..=9 + 4 + 4 + 1).contains(&swamps));
            for (cell, plain_cell) in board.iter().zip(plain.iter()) {
                if plain_cell.cell_type != CellType::Normal {
                    assert_eq!(cell.cell_type, plain_cell.cell_type);
                }
            }
        }
    }

    #[test]
    fn regions_that_do_not_fit_are_skipped() {
        let mut rng = StdRng::seed_from_u64(1);
        // The interior is 2 x 2, so only the 2 x 2 and 1 x 1 regions fit
        let board = Board::initialize(4, &mut rng);
        assert_eq!(count(&board, CellType::Swamp), 8);
    }

    #[test]
    fn same_seed_same_board() {
        for seed in [0, 1, 42] {
            let a = Board::initialize(24, &mut StdRng::seed_from_u64(seed));
            let b = Board::initialize(24, &mut StdRng::seed_from_u64(seed));
            assert_eq!(a, b);
        }
        let boards: Vec<Board> = (0..10)
            .map(|seed| Board::initialize(24, &mut StdRng::seed_from_u64(seed)))
            .collect();
        assert!(boards.iter().any(|board| *board != boards[0]));
    }

    #[test]
    fn overlapping_regions_cover_the_interior_once() {
        // The 3 x 3 region fills the whole interior, so every later region
        // lands on top of it
        for seed in 0..20 {
            let board = Board::initialize(5, &mut StdRng::seed_from_u64(seed));
            assert_eq!(count(&board, CellType::Swamp), 4 + 9);
            assert_eq!(count(&board, CellType::Normal), 0);
            assert_eq!(count(&board, CellType::RedEdge), 6);
            assert_eq!(count(&board, CellType::BlueEdge), 6);
        }
    }

    #[test]
    fn placement_rules() {
        let mut board = Board::new(10);
        assert!(board.check_placement(4, 0, PlayerColor::Red).is_ok());
        assert!(matches!(
            board.check_placement(4, 0, PlayerColor::Blue),
            Err(MoveError::IllegalMove {
                err: IllegalPlacement::ReservedEdge {
                    reserved_for: PlayerColor::Red
                },
                ..
            })
        ));
        assert!(matches!(
            board.check_placement(0, 0, PlayerColor::Red),
            Err(MoveError::IllegalMove {
                err: IllegalPlacement::Swamp,
                ..
            })
        ));
        board.put(4, 4, PlayerColor::Blue).unwrap();
        assert!(matches!(
            board.put(4, 4, PlayerColor::Red),
            Err(MoveError::IllegalMove {
                err: IllegalPlacement::CellOccupied {
                    owner: PlayerColor::Blue
                },
                ..
            })
        ));
        assert_eq!(
            board.put(-1, 4, PlayerColor::Red),
            Err(MoveError::OutOfBounds(OutOfBounds { x: -1, y: 4 }))
        );
    }
}
