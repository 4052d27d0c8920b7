use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{points_for_player, Board, Link, MoveError, PlayerColor, BOARD_SIZE};

/// The default number of rounds, i.e. moves per player, before the game ends.
pub const ROUND_LIMIT: u32 = 30;

/// The parameters of one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub board_size: i8,
    pub round_limit: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            round_limit: ROUND_LIMIT,
        }
    }
}

/// Placing a piece on the cell `(x, y)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub x: i8,
    pub y: i8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub color: PlayerColor,
    pub score: u8,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    /// A circuit reaches from one of the player's edges to the other.
    CircuitComplete,
    RoundLimitReached,
    /// The player to move has nowhere to place a piece.
    NoMovesLeft,
    /// The loser attempted an illegal move.
    IllegalMove,
    Other(String),
}

impl std::fmt::Display for EndReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EndReason::CircuitComplete => write!(f, "A circuit connects both edges"),
            EndReason::RoundLimitReached => write!(f, "The round limit was reached"),
            EndReason::NoMovesLeft => write!(f, "No moves are left"),
            EndReason::IllegalMove => write!(f, "An illegal move was attempted"),
            EndReason::Other(reason) => write!(f, "{}", reason),
        }
    }
}

/// How the game ended. A missing winner means a draw.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub winner: Option<PlayerColor>,
    pub reason: EndReason,
}

/// Summarizes the outcome of applying a move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The links formed by the new piece.
    pub links: Vec<Link>,
    /// The mover's score after the move.
    pub score: u8,
}

/// The complete state of one game.
///
/// Red moves first and the colors strictly alternate with every applied move.
/// There is no way to undo a move, so evaluating a hypothetical move means
/// applying it to a clone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    /// Red first, then blue.
    players: [Player; 2],
    rules: Rules,
    turn: u32,
    current_color: PlayerColor,
    /// Set at most once, after which the state no longer changes.
    condition: Option<Condition>,
}

impl GameState {
    /// Starts a game on a freshly initialized board.
    pub fn new<R: Rng + ?Sized>(rules: Rules, rng: &mut R) -> Self {
        Self::with_board(Board::initialize(rules.board_size, rng), rules)
    }

    /// Starts a game on the given board.
    ///
    /// The scores are computed from the pieces already on the board.
    pub fn with_board(board: Board, rules: Rules) -> Self {
        let players = [PlayerColor::Red, PlayerColor::Blue].map(|color| Player {
            color,
            score: points_for_player(&board, color),
        });
        Self {
            board,
            players,
            rules,
            turn: 0,
            current_color: PlayerColor::Red,
            condition: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The number of moves applied so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn current_color(&self) -> PlayerColor {
        self.current_color
    }

    pub fn player(&self, color: PlayerColor) -> &Player {
        &self.players[color as usize]
    }

    pub fn score(&self, color: PlayerColor) -> u8 {
        self.player(color).score
    }

    pub fn condition(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }

    pub fn is_ended(&self) -> bool {
        self.condition.is_some()
    }

    /// The winner of an ended game, or `None` for a draw or a running game.
    pub fn winner(&self) -> Option<PlayerColor> {
        self.condition.as_ref().and_then(|c| c.winner)
    }

    pub fn winning_reason(&self) -> Option<&EndReason> {
        self.condition.as_ref().map(|c| &c.reason)
    }

    /// All moves the current color may make, in row-major order.
    ///
    /// Empty once the game has ended.
    pub fn possible_moves(&self) -> Vec<Move> {
        if self.is_ended() {
            return Vec::new();
        }
        self.board
            .iter()
            .filter(|cell| {
                self.board
                    .check_placement(cell.x, cell.y, self.current_color)
                    .is_ok()
            })
            .map(|cell| Move {
                x: cell.x,
                y: cell.y,
            })
            .collect()
    }

    /// Places a piece of the current color.
    ///
    /// A move is accepted exactly if it is one of [`Self::possible_moves()`].
    /// On error, the state is unchanged.
    pub fn perform_move(&mut self, mv: Move) -> Result<MoveOutcome, MoveError> {
        if self.is_ended() {
            return Err(MoveError::GameEnded);
        }
        let color = self.current_color;
        let links = self.board.put(mv.x, mv.y, color)?;
        // Links are never removed, so the opponent's score cannot change
        let score = points_for_player(&self.board, color);
        self.players[color as usize].score = score;
        self.turn += 1;
        self.current_color = color.opponent();
        Ok(MoveOutcome { links, score })
    }

    /// Like [`Self::perform_move()`], but first checks that it is `color`'s turn.
    pub fn perform_move_for(
        &mut self,
        color: PlayerColor,
        mv: Move,
    ) -> Result<MoveOutcome, MoveError> {
        if self.is_ended() {
            return Err(MoveError::GameEnded);
        }
        if color != self.current_color {
            return Err(MoveError::TurnMismatch {
                mv,
                expected: self.current_color,
                actual: color,
            });
        }
        self.perform_move(mv)
    }

    /// Ends the game, unless it has already ended.
    ///
    /// Returns whether the condition was set by this call.
    pub fn end_game(&mut self, winner: Option<PlayerColor>, reason: EndReason) -> bool {
        if self.is_ended() {
            return false;
        }
        let condition = self.condition.insert(Condition { winner, reason });
        debug!(
            turn = self.turn,
            winner = ?condition.winner,
            reason = %condition.reason,
            "Game ended"
        );
        true
    }

    /// Checks whether the rules end the game in the current position.
    ///
    /// This does not modify the state; pass the result to [`Self::end_game()`].
    pub fn evaluate_end(&self) -> Option<Condition> {
        let edge_to_edge = (self.board.size() - 1).unsigned_abs();
        if let Some(player) = self.players.iter().find(|p| p.score >= edge_to_edge) {
            return Some(Condition {
                winner: Some(player.color),
                reason: EndReason::CircuitComplete,
            });
        }
        if self.turn >= 2 * self.rules.round_limit {
            return Some(Condition {
                winner: self.leader(),
                reason: EndReason::RoundLimitReached,
            });
        }
        if self.possible_moves().is_empty() {
            return Some(Condition {
                winner: self.leader(),
                reason: EndReason::NoMovesLeft,
            });
        }
        None
    }

    /// The color with the higher score, if any.
    fn leader(&self) -> Option<PlayerColor> {
        let [red, blue] = self.players;
        match red.score.cmp(&blue.score) {
            std::cmp::Ordering::Less => Some(PlayerColor::Blue),
            std::cmp::Ordering::Equal => None,
            std::cmp::Ordering::Greater => Some(PlayerColor::Red),
        }
    }
}
