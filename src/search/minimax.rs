//! Exhaustive minimax search.
//!
//! Evaluates every reachable state below the root. The root is a MAX node
//! for the player to move there; MIN nodes are the opponent's replies.

use log::{debug, trace};

use crate::core::Player;
use crate::rules::Game;

use super::outcome::SearchOutcome;
use super::stats::SearchStats;

/// Best action for the player to move in `state`, or `None` if terminal.
///
/// Ties keep the first action in `Game::actions` order.
pub fn minimax_search<G: Game>(game: &G, state: &G::State) -> Option<G::Action> {
    minimax_search_with_stats(game, state).into_action()
}

/// Like [`minimax_search`], also returning the root value and statistics.
pub fn minimax_search_with_stats<G: Game>(game: &G, state: &G::State) -> SearchOutcome<G::Action> {
    let player = game.to_move(state);
    let mut search = Minimax {
        game,
        player,
        stats: SearchStats::new(),
    };

    let (value, action) = search.max_value(state, 0);

    debug!(
        "minimax for {}: {:?} value {} ({})",
        player, action, value, search.stats
    );

    SearchOutcome {
        action,
        value,
        stats: search.stats,
    }
}

/// Per-call search context. Lives on the caller's stack.
struct Minimax<'a, G: Game> {
    game: &'a G,
    player: Player,
    stats: SearchStats,
}

impl<G: Game> Minimax<'_, G> {
    fn max_value(&mut self, state: &G::State, ply: u32) -> (f64, Option<G::Action>) {
        self.stats.enter(ply);
        if self.game.is_terminal(state) {
            self.stats.leaves += 1;
            return (self.game.utility(state, self.player), None);
        }

        let mut value = f64::NEG_INFINITY;
        let mut best = None;
        for action in self.game.actions(state) {
            let child = self.game.result(state, &action);
            let (child_value, _) = self.min_value(&child, ply + 1);
            if ply == 0 {
                trace!("root {:?} -> {}", action, child_value);
            }
            if child_value > value {
                value = child_value;
                best = Some(action);
            }
        }
        (value, best)
    }

    fn min_value(&mut self, state: &G::State, ply: u32) -> (f64, Option<G::Action>) {
        self.stats.enter(ply);
        if self.game.is_terminal(state) {
            self.stats.leaves += 1;
            return (self.game.utility(state, self.player), None);
        }

        let mut value = f64::INFINITY;
        let mut best = None;
        for action in self.game.actions(state) {
            let child = self.game.result(state, &action);
            let (child_value, _) = self.max_value(&child, ply + 1);
            if child_value < value {
                value = child_value;
                best = Some(action);
            }
        }
        (value, best)
    }
}
