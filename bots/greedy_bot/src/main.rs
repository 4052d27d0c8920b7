use clap::Parser;
use rand::rngs::StdRng;
use rand::{seq::SliceRandom, SeedableRng};
use twixt::{GameState, Move, PlayerColor};
use twixt_bot_utils::{best_moves, greedy_value, Bot};

#[derive(Parser)]
struct Args {
    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    let rng = StdRng::seed_from_u64(seed);

    GreedyBot { rng }.run()
}

/// Plays the move that raises its own score the most, breaking ties randomly.
struct GreedyBot {
    rng: StdRng,
}

impl Bot for GreedyBot {
    fn new_game(&mut self, _color: PlayerColor) {}

    fn play_turn(&mut self, state: GameState) -> Move {
        best_moves(&state, greedy_value)
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(Move { x: -1, y: -1 })
    }
}
