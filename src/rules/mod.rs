//! Game abstraction consumed by the search engine.
//!
//! Games implement `Game` to define:
//! - The player to move and the legal actions of each state
//! - How actions produce successor states
//! - Terminal states and their utility
//!
//! The search engine calls into `Game` but never interprets
//! game-specific concepts directly.

pub mod game;

pub use game::{ActionList, Evaluator, Game};
