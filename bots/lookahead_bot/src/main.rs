use clap::Parser;
use rand::rngs::StdRng;
use rand::{seq::SliceRandom, SeedableRng};
use tracing::debug;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use twixt::{GameState, Move, PlayerColor};
use twixt_bot_utils::{best_moves, lookahead_value, Bot};

#[derive(Parser)]
struct Args {
    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

/// Maximizes its score lead after the opponent's best reply.
struct LookaheadBot {
    rng: StdRng,
    color: PlayerColor,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    initialize_logging(args.log_level);
    let seed = args.seed.unwrap_or_else(rand::random);
    debug!(seed);
    LookaheadBot {
        rng: StdRng::seed_from_u64(seed),
        color: PlayerColor::Red,
    }
    .run()
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

impl Bot for LookaheadBot {
    fn new_game(&mut self, color: PlayerColor) {
        self.color = color;
    }

    fn play_turn(&mut self, state: GameState) -> Move {
        let candidates = best_moves(&state, lookahead_value);
        debug!(
            color = %self.color,
            turn = state.turn(),
            num_candidates = candidates.len(),
            "Best moves after lookahead"
        );
        candidates
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(Move { x: -1, y: -1 })
    }
}
