use serde::{Deserialize, Serialize};

use crate::{GameState, PlayerColor};

/// Request for a bot to do something.
///
/// Requests and responses are exchanged as one JSON document per line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    /// Request to reset the bot's state for a new game.
    ///
    /// The response should be an [`Okay`].
    NewGame { color: PlayerColor },
    /// Request to play the next move.
    ///
    /// The response should be a [`Move`](crate::Move) that is one of
    /// `state.possible_moves()`. It is always the bot's own color's turn.
    PlayTurn { state: GameState },
    /// The bot should shut down.
    Bye,
}

/// Dummy struct for use in bot communication.
///
/// Used to signal an acknowledgement without data.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Okay();

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::{Move, Rules};

    #[test]
    fn requests_are_tagged() {
        let json = serde_json::to_string(&Request::NewGame {
            color: PlayerColor::Blue,
        })
        .unwrap();
        assert_eq!(json, r#"{"type":"NewGame","color":"blue"}"#);
        assert_eq!(serde_json::to_string(&Move { x: 3, y: 4 }).unwrap(), r#"{"x":3,"y":4}"#);
    }

    #[test]
    fn game_state_survives_the_wire() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut state = GameState::new(Rules::default(), &mut rng);
        let mv = state.possible_moves()[40];
        state.perform_move(mv).unwrap();
        let req = Request::PlayTurn { state };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(serde_json::from_str::<Request>(&json).unwrap(), req);
    }
}
