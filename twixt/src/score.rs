use crate::{all_circuits, Board, PlayerColor};

/// The score of `color`: the largest span of any of its circuits.
///
/// A player without pieces on the board has zero points.
pub fn points_for_player(board: &Board, color: PlayerColor) -> u8 {
    all_circuits(board, color)
        .iter()
        .map(|circuit| circuit.span(color))
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlayerColor::{Blue, Red};

    #[test]
    fn no_pieces_no_points() {
        let board = Board::new(10);
        assert_eq!(points_for_player(&board, Red), 0);
        assert_eq!(points_for_player(&board, Blue), 0);
    }

    #[test]
    fn single_link_scores_along_the_axis() {
        let mut board = Board::new(10);
        board.put(3, 3, Red).unwrap();
        board.put(5, 4, Red).unwrap();
        assert_eq!(points_for_player(&board, Red), 1);

        board.put(3, 6, Blue).unwrap();
        board.put(5, 7, Blue).unwrap();
        assert_eq!(points_for_player(&board, Blue), 2);
    }

    #[test]
    fn unlinked_pieces_do_not_add_up() {
        let mut board = Board::new(10);
        board.put(4, 1, Red).unwrap();
        board.put(4, 8, Red).unwrap();
        assert_eq!(points_for_player(&board, Red), 0);
    }

    #[test]
    fn best_circuit_counts() {
        let mut board = Board::new(10);
        for (x, y) in [(2, 1), (3, 3), (4, 5)] {
            board.put(x, y, Red).unwrap();
        }
        // A second, shorter circuit
        board.put(6, 7, Red).unwrap();
        board.put(8, 8, Red).unwrap();
        assert_eq!(points_for_player(&board, Red), 4);
    }

    #[test]
    fn edge_to_edge() {
        let mut board = Board::new(10);
        for (x, y) in [(4, 0), (5, 2), (4, 4), (5, 6), (4, 8), (6, 9)] {
            board.put(x, y, Red).unwrap();
        }
        assert_eq!(points_for_player(&board, Red), 9);
    }
}
