//! Search statistics for diagnostics and pruning comparisons.

use serde::{Deserialize, Serialize};

/// Statistics collected during one search call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// States entered, including the root.
    pub nodes: u64,

    /// States scored by utility or evaluator instead of being expanded.
    pub leaves: u64,

    /// Times a bound check ended a node's action loop early.
    pub cutoffs: u64,

    /// Deepest ply reached below the root.
    pub max_depth: u32,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record entry into a state `ply` plies below the root.
    pub(crate) fn enter(&mut self, ply: u32) {
        self.nodes += 1;
        if ply > self.max_depth {
            self.max_depth = ply;
        }
    }

    /// Fraction of visited nodes that were leaves.
    #[must_use]
    pub fn leaf_ratio(&self) -> f64 {
        if self.nodes == 0 {
            0.0
        } else {
            self.leaves as f64 / self.nodes as f64
        }
    }
}

impl std::fmt::Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "nodes={} leaves={} cutoffs={} depth={}",
            self.nodes, self.leaves, self.cutoffs, self.max_depth
        )
    }
}
