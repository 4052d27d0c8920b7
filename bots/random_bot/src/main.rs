use clap::Parser;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use twixt::{GameState, Move, PlayerColor};
use twixt_bot_utils::Bot;

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

    RandomBot { rng }.run()
}

struct RandomBot {
    rng: StdRng,
}

impl Bot for RandomBot {
    fn new_game(&mut self, _color: PlayerColor) {}

    fn play_turn(&mut self, state: GameState) -> Move {
        // The judge only asks while there are moves left; answering with an
        // illegal move just forfeits the game.
        state
            .possible_moves()
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(Move { x: -1, y: -1 })
    }
}
