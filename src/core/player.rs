//! Player identification for two-player games.
//!
//! ## Player
//!
//! A two-valued label: `First` moves first from the initial state unless the
//! game is configured otherwise. Every transition hands the move to the
//! `opponent()`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::Error;

/// One of the two players of a zero-sum game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    First,
    Second,
}

impl Player {
    /// Both players, in turn order.
    pub const ALL: [Player; 2] = [Player::First, Player::Second];

    /// The other player.
    ///
    /// ```
    /// use rust_minimax::core::Player;
    ///
    /// assert_eq!(Player::First.opponent(), Player::Second);
    /// assert_eq!(Player::Second.opponent(), Player::First);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::First => 0,
            Player::Second => 1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::First => write!(f, "first"),
            Player::Second => write!(f, "second"),
        }
    }
}

impl FromStr for Player {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" | "1" => Ok(Player::First),
            "second" | "2" => Ok(Player::Second),
            other => Err(Error::UnknownPlayer(other.to_string())),
        }
    }
}
