//! Controllers decide the move for one seat of a match.

use crate::error::{Error, Result};
use crate::rules::{Evaluator, Game};
use crate::search::{RandomStrategy, SearchStrategy, Strategy};

/// Source of actions for one player: a search, a baseline or a person.
pub trait Controller<G: Game> {
    /// Produce the action to play in `state`.
    fn choose(&mut self, game: &G, state: &G::State) -> Result<G::Action>;

    /// Whether this controller is a program (shown as "thinking").
    fn is_automatic(&self) -> bool {
        true
    }
}

fn require_action<G: Game>(state: &G::State, action: Option<G::Action>) -> Result<G::Action> {
    action.ok_or_else(|| Error::NoAction(format!("{state:?}")))
}

impl<G, E> Controller<G> for SearchStrategy<E>
where
    G: Game,
    E: Evaluator<G::State>,
{
    fn choose(&mut self, game: &G, state: &G::State) -> Result<G::Action> {
        let action = self.choose_action(game, state);
        let stats = self.last_stats();
        log::debug!(
            "{} searched {} (leaf ratio {:.2})",
            Strategy::<G>::name(self),
            stats,
            stats.leaf_ratio()
        );
        require_action::<G>(state, action)
    }
}

impl<G: Game> Controller<G> for RandomStrategy {
    fn choose(&mut self, game: &G, state: &G::State) -> Result<G::Action> {
        let action = self.choose_action(game, state);
        require_action::<G>(state, action)
    }
}
