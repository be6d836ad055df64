//! Adversarial search over any [`crate::rules::Game`].
//!
//! ## Overview
//!
//! Three interchangeable procedures, each returning the best action for the
//! player to move (or `None` at a terminal state):
//!
//! - **Minimax**: exhaustive evaluation of the game tree
//! - **Alpha-beta**: the same result with pruning of irrelevant branches
//! - **Depth-limited alpha-beta**: stops after a fixed number of plies and
//!   scores the horizon with an [`crate::rules::Evaluator`]
//!
//! Every call owns its state on the stack; nothing is shared between calls,
//! so independent searches may run concurrently.
//!
//! ## Usage
//!
//! ```rust
//! use rust_minimax::games::nim::{RedBlueNim, Variant};
//! use rust_minimax::rules::Game;
//! use rust_minimax::search::{alpha_beta_search, minimax_search};
//!
//! let game = RedBlueNim::builder().red(3).blue(4).variant(Variant::Standard).build();
//! let state = game.initial_state();
//!
//! let action = alpha_beta_search(&game, &state);
//! assert_eq!(action, minimax_search(&game, &state));
//! ```

pub mod alpha_beta;
pub mod config;
pub mod depth_limited;
pub mod minimax;
pub mod outcome;
pub mod stats;
pub mod strategy;

#[cfg(test)]
pub(crate) mod testing;

// Re-export main types
pub use alpha_beta::{alpha_beta_search, alpha_beta_search_with_stats};
pub use config::{Algorithm, SearchConfig, TerminalScoring};
pub use depth_limited::{depth_limited_alpha_beta, depth_limited_alpha_beta_with_stats};
pub use minimax::{minimax_search, minimax_search_with_stats};
pub use outcome::SearchOutcome;
pub use stats::SearchStats;
pub use strategy::{RandomStrategy, SearchStrategy, Strategy};
