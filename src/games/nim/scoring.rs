//! Scoring rules for Red-Blue Nim.
//!
//! Both rules score a terminal state by `2 * red + 3 * blue` and award it
//! to one of the two players. They differ only in who that is:
//!
//! - `Standard`: the player to move at the terminal state wins; the
//!   previous mover emptied a pile and loses.
//! - `Misere`: the player who emptied the pile wins.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::Player;
use crate::error::Error;

use super::game::NimState;

/// Policy deciding who a terminal state is awarded to.
pub trait ScoringRule: std::fmt::Debug + Send + Sync {
    /// Rule name for display.
    fn name(&self) -> &'static str;

    /// The player who receives the positive score at `terminal`.
    fn winner(&self, terminal: &NimState) -> Player;
}

/// The player left to move at the terminal state wins.
#[derive(Clone, Copy, Debug, Default)]
pub struct Standard;

impl ScoringRule for Standard {
    fn name(&self) -> &'static str {
        "standard"
    }

    fn winner(&self, terminal: &NimState) -> Player {
        terminal.to_move
    }
}

/// The player who emptied a pile wins.
#[derive(Clone, Copy, Debug, Default)]
pub struct Misere;

impl ScoringRule for Misere {
    fn name(&self) -> &'static str {
        "misere"
    }

    fn winner(&self, terminal: &NimState) -> Player {
        terminal.to_move.opponent()
    }
}

/// Rule selector for configuration and the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Standard,
    Misere,
}

impl Variant {
    /// The scoring rule this variant selects.
    #[must_use]
    pub fn rule(self) -> &'static dyn ScoringRule {
        match self {
            Variant::Standard => &Standard,
            Variant::Misere => &Misere,
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.rule().name())
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(Variant::Standard),
            "misere" | "misère" => Ok(Variant::Misere),
            other => Err(Error::UnknownVariant(other.to_string())),
        }
    }
}
