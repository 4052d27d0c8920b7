use quickcheck::{Arbitrary, Gen};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::{GameState, Rules};

/// Two segments with endpoints in a small area, so that crossings and
/// collinear overlaps are frequent.
#[derive(Clone, Debug)]
pub struct SegmentPair {
    pub a: ((i8, i8), (i8, i8)),
    pub b: ((i8, i8), (i8, i8)),
}

fn small_point(g: &mut Gen) -> (i8, i8) {
    (i8::arbitrary(g) % 7, i8::arbitrary(g) % 7)
}

impl Arbitrary for SegmentPair {
    fn arbitrary(g: &mut Gen) -> Self {
        SegmentPair {
            a: (small_point(g), small_point(g)),
            b: (small_point(g), small_point(g)),
        }
    }
}

/// A game in progress, reached by playing random legal moves on a small board.
#[derive(Clone, Debug)]
pub struct PlayedGame {
    pub state: GameState,
}

impl Arbitrary for PlayedGame {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut rng = StdRng::seed_from_u64(u64::arbitrary(g));
        let board_size = 5 + (u8::arbitrary(g) % 8) as i8;
        let rules = Rules {
            board_size,
            round_limit: 100,
        };
        let mut state = GameState::new(rules, &mut rng);

        let num_cells = usize::from(board_size.unsigned_abs()).pow(2);
        let num_moves = usize::arbitrary(g) % num_cells;
        for _ in 0..num_moves {
            let moves = state.possible_moves();
            let Some(&mv) = g.choose(&moves) else {
                break;
            };
            state
                .perform_move(mv)
                .expect("Move from possible_moves() was rejected");
        }

        PlayedGame { state }
    }
}
