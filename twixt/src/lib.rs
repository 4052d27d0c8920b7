pub use board::*;
pub use circuits::*;
pub use errors::*;
pub use game::*;
pub use geometry::*;
pub use links::*;
pub use protocol::*;
pub use score::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod circuits;
mod errors;
mod game;
mod geometry;
mod links;
mod protocol;
mod score;
mod visualization;
