use std::collections::{BTreeSet, VecDeque};
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::{Board, BoundingBox, OutOfBounds, PlayerColor};

/// A maximal set of same-owner cells that are connected through links.
///
/// Circuits are derived from the board and never stored on it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Circuit {
    cells: BTreeSet<(i8, i8)>,
}

impl Circuit {
    /// The extent of the circuit along the scoring axis of `color`.
    ///
    /// That is the difference between the largest and smallest y coordinate
    /// for red, and between the largest and smallest x coordinate for blue.
    pub fn span(&self, color: PlayerColor) -> u8 {
        match BoundingBox::from_coordinates_iter(self.cells.iter().copied()) {
            Some(bbox) => match color {
                PlayerColor::Red => bbox.height(),
                PlayerColor::Blue => bbox.width(),
            },
            None => 0,
        }
    }
}

impl Deref for Circuit {
    type Target = BTreeSet<(i8, i8)>;

    fn deref(&self) -> &Self::Target {
        &self.cells
    }
}

impl FromIterator<(i8, i8)> for Circuit {
    fn from_iter<T: IntoIterator<Item = (i8, i8)>>(iter: T) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

/// Computes the circuit that the cell at `(x, y)` belongs to.
///
/// For an unowned cell this is just the cell itself.
pub fn circuit_containing(board: &Board, x: i8, y: i8) -> Result<Circuit, OutOfBounds> {
    let owner = board.field(x, y)?.owner;
    let mut cells = BTreeSet::from([(x, y)]);
    let mut queue = VecDeque::from([(x, y)]);

    while let Some((cx, cy)) = queue.pop_front() {
        for link in board.links_at(cx, cy) {
            let Some(next) = link.other_end(cx, cy) else {
                continue;
            };
            let same_owner = board
                .field(next.0, next.1)
                .is_ok_and(|cell| cell.owner.is_some() && cell.owner == owner);
            // Every cell enters the queue at most once
            if same_owner && cells.insert(next) {
                queue.push_back(next);
            }
        }
    }

    Ok(Circuit { cells })
}

/// Partitions all cells owned by `color` into circuits.
///
/// The circuits are ordered by their first cell in row-major order.
pub fn all_circuits(board: &Board, color: PlayerColor) -> Vec<Circuit> {
    let mut visited = BTreeSet::new();
    let mut circuits = Vec::new();
    for cell in board.iter().filter(|cell| cell.is_owned_by(color)) {
        if visited.contains(&cell.coordinates()) {
            continue;
        }
        // The coordinates come from the board, so they are in bounds
        if let Ok(circuit) = circuit_containing(board, cell.x, cell.y) {
            visited.extend(circuit.iter().copied());
            circuits.push(circuit);
        }
    }
    circuits
}
