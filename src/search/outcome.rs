//! Result of a single search call.

use super::stats::SearchStats;

/// The chosen action together with its backed-up value.
///
/// `action` is `None` when the root is terminal, when the depth limit is
/// exhausted at the root, or when the root has no legal actions.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchOutcome<A> {
    /// Best action for the player to move at the root.
    pub action: Option<A>,

    /// Value of the root from the root mover's point of view.
    pub value: f64,

    /// Work done by this call.
    pub stats: SearchStats,
}

impl<A> SearchOutcome<A> {
    /// Discard value and statistics.
    pub fn into_action(self) -> Option<A> {
        self.action
    }
}
