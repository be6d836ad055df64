//! Move choosers the driver can swap between.
//!
//! - `SearchStrategy`: runs one of the search procedures per `SearchConfig`
//! - `RandomStrategy`: uniform choice among legal actions, a baseline
//!   opponent

use crate::core::GameRng;
use crate::rules::{Evaluator, Game};

use super::alpha_beta::alpha_beta_search_with_stats;
use super::config::{Algorithm, SearchConfig};
use super::depth_limited::depth_limited_alpha_beta_with_stats;
use super::minimax::minimax_search_with_stats;
use super::outcome::SearchOutcome;
use super::stats::SearchStats;

/// Something that picks an action for the player to move.
pub trait Strategy<G: Game> {
    /// Choose an action in `state`, or `None` if there is nothing to play.
    fn choose_action(&mut self, game: &G, state: &G::State) -> Option<G::Action>;

    /// Short label for logs.
    fn name(&self) -> &str;
}

/// Runs the configured search procedure on every call.
#[derive(Clone, Debug)]
pub struct SearchStrategy<E> {
    config: SearchConfig,
    evaluator: E,
    last_stats: SearchStats,
}

impl<E> SearchStrategy<E> {
    /// Create a strategy. `evaluator` is only used by depth-limited search.
    pub fn new(config: SearchConfig, evaluator: E) -> Self {
        Self {
            config,
            evaluator,
            last_stats: SearchStats::default(),
        }
    }

    /// Statistics of the most recent search.
    #[must_use]
    pub fn last_stats(&self) -> &SearchStats {
        &self.last_stats
    }

    /// Run the configured search once.
    pub fn search<G>(&self, game: &G, state: &G::State) -> SearchOutcome<G::Action>
    where
        G: Game,
        E: Evaluator<G::State>,
    {
        match self.config.algorithm {
            Algorithm::Minimax => minimax_search_with_stats(game, state),
            Algorithm::AlphaBeta => alpha_beta_search_with_stats(game, state),
            Algorithm::DepthLimited { depth } => depth_limited_alpha_beta_with_stats(
                game,
                state,
                depth,
                &self.evaluator,
                self.config.terminal_scoring,
            ),
        }
    }
}

impl<G, E> Strategy<G> for SearchStrategy<E>
where
    G: Game,
    E: Evaluator<G::State>,
{
    fn choose_action(&mut self, game: &G, state: &G::State) -> Option<G::Action> {
        let outcome = self.search(game, state);
        self.last_stats = outcome.stats;
        outcome.action
    }

    fn name(&self) -> &str {
        match self.config.algorithm {
            Algorithm::Minimax => "minimax",
            Algorithm::AlphaBeta => "alpha-beta",
            Algorithm::DepthLimited { .. } => "depth-limited alpha-beta",
        }
    }
}

/// Uniform random choice among legal actions.
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    rng: GameRng,
}

impl RandomStrategy {
    /// Create a random strategy. Same seed produces the same choices.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl<G: Game> Strategy<G> for RandomStrategy {
    fn choose_action(&mut self, game: &G, state: &G::State) -> Option<G::Action> {
        if game.is_terminal(state) {
            return None;
        }
        let actions = game.actions(state);
        self.rng.choose(&actions).cloned()
    }

    fn name(&self) -> &str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Player;
    use crate::search::testing::Tree;

    fn no_eval(_: &(usize, Player), _: Player) -> f64 {
        0.0
    }

    #[test]
    fn test_search_strategy_dispatches() {
        let tree = Tree::two_ply(&[&[3.0, 12.0, 8.0], &[2.0, 4.0, 6.0], &[14.0, 5.0, 2.0]]);
        let root = tree.root();

        let mut minimax = SearchStrategy::new(SearchConfig::minimax(), no_eval);
        assert_eq!(minimax.choose_action(&tree, &root), Some(0));
        assert_eq!(minimax.last_stats().nodes, 13);
        assert_eq!(Strategy::<Tree>::name(&minimax), "minimax");

        let mut alpha_beta = SearchStrategy::new(SearchConfig::default(), no_eval);
        assert_eq!(alpha_beta.choose_action(&tree, &root), Some(0));
        assert_eq!(alpha_beta.last_stats().nodes, 11);

        let mut limited =
            SearchStrategy::new(SearchConfig::default().with_depth_limit(Some(0)), no_eval);
        assert_eq!(limited.choose_action(&tree, &root), None);
        assert_eq!(limited.last_stats().nodes, 1);
    }

    #[test]
    fn test_random_strategy_is_legal_and_deterministic() {
        let tree = Tree::two_ply(&[&[1.0], &[2.0], &[3.0], &[4.0]]);
        let root = tree.root();

        let mut a = RandomStrategy::new(7);
        let mut b = RandomStrategy::new(7);
        for _ in 0..20 {
            let choice = a.choose_action(&tree, &root);
            assert_eq!(choice, b.choose_action(&tree, &root));
            assert!(tree.is_legal(&root, &choice.unwrap()));
        }
    }

    #[test]
    fn test_random_strategy_passes_at_terminal() {
        let tree = Tree::leaf(0.0);
        let mut random = RandomStrategy::new(1);
        assert_eq!(random.choose_action(&tree, &tree.root()), None);
    }
}
