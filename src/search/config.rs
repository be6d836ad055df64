//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Which search procedure a [`super::SearchStrategy`] runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Algorithm {
    /// Exhaustive minimax.
    Minimax,
    /// Exhaustive alpha-beta.
    AlphaBeta,
    /// Alpha-beta cut off `depth` plies below the root.
    DepthLimited { depth: u32 },
}

/// How the depth-limited search scores states that are already terminal.
///
/// The historical behavior scores every stopping state with the evaluator,
/// so exact utilities and heuristic estimates are mixed at the horizon.
/// `Utility` keeps the evaluator for depth-exhausted non-terminal states
/// only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminalScoring {
    /// Evaluator at every stopping state, terminal or not.
    #[default]
    Evaluator,
    /// Exact utility at terminal states.
    Utility,
}

/// Search configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Search procedure (default: exhaustive alpha-beta).
    pub algorithm: Algorithm,

    /// Terminal scoring for the depth-limited procedure.
    /// Ignored by the exhaustive ones.
    #[serde(default)]
    pub terminal_scoring: TerminalScoring,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::AlphaBeta,
            terminal_scoring: TerminalScoring::default(),
        }
    }
}

impl SearchConfig {
    /// Exhaustive minimax without pruning.
    pub fn minimax() -> Self {
        Self {
            algorithm: Algorithm::Minimax,
            ..Self::default()
        }
    }

    /// Create a new config with a ply limit, switching to depth-limited
    /// alpha-beta. `None` switches back to exhaustive alpha-beta.
    pub fn with_depth_limit(mut self, depth: Option<u32>) -> Self {
        self.algorithm = match depth {
            Some(depth) => Algorithm::DepthLimited { depth },
            None => Algorithm::AlphaBeta,
        };
        self
    }

    /// Create a new config with custom terminal scoring.
    pub fn with_terminal_scoring(mut self, scoring: TerminalScoring) -> Self {
        self.terminal_scoring = scoring;
        self
    }

    /// The ply limit, if the search is depth-limited.
    #[must_use]
    pub fn depth_limit(&self) -> Option<u32> {
        match self.algorithm {
            Algorithm::DepthLimited { depth } => Some(depth),
            _ => None,
        }
    }
}
