//! # rust-minimax
//!
//! Adversarial search for two-player, zero-sum, perfect-information games,
//! demonstrated on Red-Blue Nim.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic**: The search engine only sees the `Game` trait:
//!    player to move, legal actions, successor, terminal test, utility.
//!
//! 2. **Pure Searches**: Each search is a function of its inputs. No state
//!    survives between calls, so independent searches can run in parallel.
//!
//! 3. **Deterministic Ties**: Equal-valued actions resolve to the first one
//!    in the game's enumeration order.
//!
//! ## Modules
//!
//! - `core`: Players and seeded randomness
//! - `rules`: The `Game` and `Evaluator` traits
//! - `search`: Minimax, alpha-beta and depth-limited alpha-beta
//! - `games`: Concrete games (Red-Blue Nim)
//! - `play`: Controllers, human prompting and the game loop

pub mod core;
pub mod error;
pub mod games;
pub mod play;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{GameRng, Player};

pub use crate::error::{Error, Result};

pub use crate::rules::{ActionList, Evaluator, Game};

pub use crate::search::{
    alpha_beta_search, alpha_beta_search_with_stats, depth_limited_alpha_beta,
    depth_limited_alpha_beta_with_stats, minimax_search, minimax_search_with_stats, Algorithm,
    RandomStrategy, SearchConfig, SearchOutcome, SearchStats, SearchStrategy, Strategy,
    TerminalScoring,
};

pub use crate::games::nim::{
    MarbleCountEval, NimAction, NimConfig, NimState, Pile, RedBlueNim, ScoringRule, Variant,
};

pub use crate::play::{Controller, GameRecord, HumanPlayer, Match, Seat};
