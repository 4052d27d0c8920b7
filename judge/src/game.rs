use rand::seq::SliceRandom;
use tracing::{debug, trace};
use twixt::{Condition, EndReason, GameState, Move, MoveError, Okay, PlayerColor, Request};

use crate::player::Player;
use crate::Config;

#[derive(Debug)]
pub enum GameResult {
    WonByPlayer { player_idx: usize },
    Tie,
    IllegalMoveByPlayer { player_idx: usize, err: MoveError },
}

/// Returns an error only on communication failure, not when an
/// illegal move is played. The traffic of a failed game is not recorded.
pub fn play_game(
    config: &mut Config,
    player_1: &mut Player,
    player_2: &mut Player,
) -> anyhow::Result<GameResult> {
    let result = run_game(config, player_1, player_2);
    if result.is_err() {
        if let Some(rec) = &mut config.recorder {
            rec.discard_game();
        }
    }
    result
}

fn run_game(
    config: &mut Config,
    player_1: &mut Player,
    player_2: &mut Player,
) -> anyhow::Result<GameResult> {
    // Assign one bot red and the other blue randomly
    let colors = {
        let mut arr = [PlayerColor::Red, PlayerColor::Blue];
        arr.shuffle(&mut config.rng);
        arr
    };
    let player_idx_of = |color: PlayerColor| if colors[0] == color { 0 } else { 1 };

    let mut players = [player_1, player_2];
    let mut state = GameState::new(config.rules, &mut config.rng);

    // Inform the players about the new game, so that they can reset their state
    for (player, color) in players.iter_mut().zip(colors) {
        let _: Okay = player.perform_request(&mut config.recorder, &Request::NewGame { color })?;
    }

    let mut illegal_move = None;
    while !state.is_ended() {
        if let Some(Condition { winner, reason }) = state.evaluate_end() {
            state.end_game(winner, reason);
            break;
        }
        let color = state.current_color();
        let player_idx = player_idx_of(color);
        let req = Request::PlayTurn {
            state: state.clone(),
        };
        let mv: Move = players[player_idx].perform_request(&mut config.recorder, &req)?;
        match state.perform_move_for(color, mv) {
            Ok(outcome) => {
                trace!(%color, ?mv, score = outcome.score, links = outcome.links.len());
            }
            Err(err) => {
                state.end_game(Some(color.opponent()), EndReason::IllegalMove);
                illegal_move = Some((player_idx, err));
            }
        }
    }
    debug!("Final board:\n{}", state.board());

    if let Some(rec) = &mut config.recorder {
        rec.write_game_recording(state.condition())?;
    }

    Ok(game_result(&state, colors, illegal_move))
}

/// Reports an ended game from the perspective of the players, where
/// `colors[i]` is the color of player `i`.
pub fn game_result(
    state: &GameState,
    colors: [PlayerColor; 2],
    illegal_move: Option<(usize, MoveError)>,
) -> GameResult {
    if let Some((player_idx, err)) = illegal_move {
        return GameResult::IllegalMoveByPlayer { player_idx, err };
    }
    match state.winner() {
        Some(color) => GameResult::WonByPlayer {
            player_idx: if colors[0] == color { 0 } else { 1 },
        },
        None => GameResult::Tie,
    }
}
