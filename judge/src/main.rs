use std::collections::BTreeMap;
use std::fmt::Write;
use std::path::PathBuf;

use clap::Parser;
use itertools::Itertools;
use judge::{play_game, Config, GameResult, Player, PlayerConfig, Recorder};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use twixt::{Rules, BOARD_SIZE, MAX_BOARD_SIZE, ROUND_LIMIT};

#[derive(Parser)]
struct Args {
    /// Path to the config JSON files of players
    #[clap(num_args(2..), value_delimiter = ' ')]
    player_configs: Vec<PathBuf>,

    /// How many games each pair of players plays
    #[arg(short, long, default_value_t = 100)]
    num_games: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Stop a matchup as soon as one player makes an illegal move
    #[arg(short, long, default_value_t = false)]
    stop_on_illegal_move: bool,

    /// Record the game's interactions as JSON files into this directory
    #[arg(short, long)]
    record_games_to_directory: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,

    /// Side length of the board
    #[arg(long, default_value_t = BOARD_SIZE)]
    board_size: i8,

    /// Rounds before a game is decided on points
    #[arg(long, default_value_t = ROUND_LIMIT)]
    round_limit: u32,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct MatchScore {
    wins: [usize; 2],
    illegal_moves: [usize; 2],
    ties: usize,
}

impl MatchScore {
    fn record(&mut self, result: &GameResult) {
        match result {
            GameResult::WonByPlayer { player_idx } => self.wins[*player_idx] += 1,
            GameResult::Tie => self.ties += 1,
            GameResult::IllegalMoveByPlayer { player_idx, .. } => {
                self.wins[1 - player_idx] += 1;
                self.illegal_moves[*player_idx] += 1;
            }
        }
    }

    fn num_games(&self) -> usize {
        self.wins[0] + self.wins[1] + self.ties
    }
}

fn play_matchup(
    player_1: &mut Player,
    player_2: &mut Player,
    num_games: usize,
    stop_on_illegal_move: bool,
    config: &mut Config,
) -> anyhow::Result<MatchScore> {
    let player_names = [player_1.name.clone(), player_2.name.clone()];
    let mut match_score = MatchScore::default();

    for game_idx in 0..num_games {
        let result = play_game(config, player_1, player_2)?;
        match &result {
            GameResult::WonByPlayer { player_idx } => {
                debug!(winner = player_names[*player_idx], game_idx);
            }
            GameResult::Tie => {
                debug!(game_idx, "Draw");
            }
            GameResult::IllegalMoveByPlayer { player_idx, err } => {
                warn!(
                    player = player_names[*player_idx],
                    game_idx, "Illegal move by player"
                );
                let mut err_dyn = err as &dyn std::error::Error;
                while let Some(src_err) = err_dyn.source() {
                    info!("{}", err_dyn);
                    err_dyn = src_err;
                }
                info!("{}", err_dyn);
                if stop_on_illegal_move {
                    break;
                }
            }
        }
        match_score.record(&result);
    }

    eprintln!(
        "{} vs {}:\n- {} wins by {}{}\n- {} wins by {}{}\n- {} draws",
        player_names[0],
        player_names[1],
        match_score.wins[0],
        player_names[0],
        forfeits_by(&match_score, 1),
        match_score.wins[1],
        player_names[1],
        forfeits_by(&match_score, 0),
        match_score.ties
    );

    Ok(match_score)
}

fn forfeits_by(score: &MatchScore, player_idx: usize) -> String {
    match score.illegal_moves[player_idx] {
        0 => String::new(),
        n => format!(" ({} through illegal moves by the other side)", n),
    }
}

/// One row per player: games, wins, draws, losses, and win percentage over
/// all of its matchups.
fn standings(
    player_configs: &[PlayerConfig],
    match_results: &BTreeMap<(usize, usize), MatchScore>,
) -> String {
    let mut totals = vec![MatchScore::default(); player_configs.len()];
    for (&(i, j), score) in match_results {
        totals[i].wins[0] += score.wins[0];
        totals[i].wins[1] += score.wins[1];
        totals[i].ties += score.ties;
        totals[j].wins[0] += score.wins[1];
        totals[j].wins[1] += score.wins[0];
        totals[j].ties += score.ties;
    }

    let mut table = String::new();
    let _ = writeln!(
        table,
        " {:19} | {:>6} | {:>6} | {:>6} | {:>6} | {:>6}",
        "player", "games", "wins", "draws", "losses", "win %"
    );
    let _ = writeln!(table, "{}", "-".repeat(67));
    let ranked = totals
        .iter()
        .enumerate()
        .sorted_by_key(|(_, total)| std::cmp::Reverse(total.wins[0]));
    for (idx, total) in ranked {
        let games = total.num_games();
        let win_percentage = if games == 0 {
            0.0
        } else {
            total.wins[0] as f32 / games as f32 * 100.0
        };
        let _ = writeln!(
            table,
            " {:19} | {:>6} | {:>6} | {:>6} | {:>6} | {:>5.1}%",
            player_configs[idx].nick,
            games,
            total.wins[0],
            total.ties,
            total.wins[1],
            win_percentage
        );
    }
    table
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    if !(3..=MAX_BOARD_SIZE).contains(&args.board_size) {
        anyhow::bail!(
            "Board size must be between 3 and {}, got {}",
            MAX_BOARD_SIZE,
            args.board_size
        );
    }

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);

    let recorder = if let Some(dir_path) = args.record_games_to_directory {
        Some(Recorder::new(dir_path)?)
    } else {
        None
    };
    let mut config = Config {
        rng: StdRng::seed_from_u64(seed),
        recorder,
        rules: Rules {
            board_size: args.board_size,
            round_limit: args.round_limit,
        },
    };

    let player_configs = args
        .player_configs
        .iter()
        .map(|path| PlayerConfig::load(path))
        .collect::<Result<Vec<PlayerConfig>, anyhow::Error>>()?;

    let mut match_results = BTreeMap::new();
    for (i1, i2) in (0..player_configs.len()).tuple_combinations() {
        let mut player_1 = Player::from_config(&player_configs[i1])?;
        let mut player_2 = Player::from_config(&player_configs[i2])?;

        let match_score = play_matchup(
            &mut player_1,
            &mut player_2,
            args.num_games,
            args.stop_on_illegal_move,
            &mut config,
        )?;

        match_results.insert((i1, i2), match_score);
    }

    if player_configs.len() > 2 {
        println!("\nTournament standings:\n");
        print!("{}", standings(&player_configs, &match_results));
    }

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format))
        .with(filter)
        .init();
}
