use twixt::{Board, GameState, Move, MoveOutcome, PlayerColor, LINK_OFFSETS};

/// Applies `mv` to a copy of the state, leaving the original untouched.
///
/// Returns `None` if the move is illegal.
pub fn trial_move(state: &GameState, mv: Move) -> Option<(GameState, MoveOutcome)> {
    let mut trial = state.clone();
    let outcome = trial.perform_move(mv).ok()?;
    Some((trial, outcome))
}

/// Rates a move by the mover's resulting score, with the number of newly
/// formed links as a tie breaker.
pub fn greedy_value(state: &GameState, mv: Move) -> Option<i32> {
    let (_, outcome) = trial_move(state, mv)?;
    let links = i32::try_from(outcome.links.len()).unwrap_or(i32::MAX);
    Some(i32::from(outcome.score) * 16 + links)
}

/// Rates a move by the mover's score lead after the opponent's best reply.
///
/// Only the opponent's score is considered for the reply, so this is a
/// cheap two-ply search. Replies that cannot form a link cannot raise the
/// opponent's score and are skipped.
pub fn lookahead_value(state: &GameState, mv: Move) -> Option<i32> {
    let opponent = state.current_color().opponent();
    let (after, outcome) = trial_move(state, mv)?;
    let own = i32::from(outcome.score);
    let best_reply = after
        .possible_moves()
        .into_iter()
        .filter(|reply| could_link(after.board(), *reply, opponent))
        .filter_map(|reply| trial_move(&after, reply))
        .map(|(_, reply_outcome)| i32::from(reply_outcome.score))
        .max()
        .unwrap_or(0)
        .max(i32::from(after.score(opponent)));
    Some(own * 16 - best_reply * 16 + i32::try_from(outcome.links.len()).unwrap_or(0))
}

/// Is there a piece of `color` a link offset away from `mv`?
pub fn could_link(board: &Board, mv: Move, color: PlayerColor) -> bool {
    LINK_OFFSETS.iter().any(|&(dx, dy)| {
        board
            .field(mv.x + dx, mv.y + dy)
            .is_ok_and(|cell| cell.is_owned_by(color))
    })
}

/// All legal moves that share the highest value according to `value`.
///
/// Returns an empty list if there are no legal moves.
pub fn best_moves(state: &GameState, value: impl Fn(&GameState, Move) -> Option<i32>) -> Vec<Move> {
    let mut top_choices = Vec::new();
    let mut top_value = i32::MIN;
    for mv in state.possible_moves() {
        let Some(v) = value(state, mv) else {
            continue;
        };
        match v.cmp(&top_value) {
            std::cmp::Ordering::Less => {}
            std::cmp::Ordering::Equal => top_choices.push(mv),
            std::cmp::Ordering::Greater => {
                top_choices = vec![mv];
                top_value = v;
            }
        }
    }
    top_choices
}
