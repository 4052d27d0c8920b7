mod game;
mod player;
mod recording;
pub use game::*;
pub use player::*;
pub use recording::*;

use twixt::Rules;

/// Everything that stays the same across the games of a tournament.
pub struct Config {
    pub rng: rand::rngs::StdRng,
    pub recorder: Option<recording::Recorder>,
    pub rules: Rules,
}
