//! Red-Blue Nim, the reference game for the search engine.
//!
//! - Two piles, red and blue; a move removes one or two marbles from one pile
//! - The game ends as soon as either pile is empty
//! - The terminal state is worth `2 * red + 3 * blue` to the winner
//! - `Standard` awards it to the player left to move, `Misere` to the
//!   player who emptied the pile

mod eval;
mod game;
mod scoring;

pub use eval::MarbleCountEval;
pub use game::{
    parse_count, NimAction, NimConfig, NimState, Pile, RedBlueNim, BLUE_WEIGHT, RED_WEIGHT,
};
pub use scoring::{Misere, ScoringRule, Standard, Variant};
