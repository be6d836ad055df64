//! Minimax with alpha-beta pruning.
//!
//! `alpha` is the value MAX can already guarantee on the current path,
//! `beta` the value MIN can. Both are threaded down into children. A MAX
//! node stops enumerating once its value reaches `beta`, a MIN node once
//! its value falls to `alpha`. Pruning never changes the chosen root action.
//!
//! Where the recursion stops is decided by a [`Horizon`]; the exhaustive
//! search stops only at terminal states, the depth-limited search in
//! [`super::depth_limited`] also stops when its ply budget runs out.

use log::{debug, trace};

use crate::core::Player;
use crate::rules::Game;

use super::outcome::SearchOutcome;
use super::stats::SearchStats;

/// Best action for the player to move in `state`, or `None` if terminal.
///
/// Returns the same action as [`super::minimax_search`] while visiting at
/// most as many states.
pub fn alpha_beta_search<G: Game>(game: &G, state: &G::State) -> Option<G::Action> {
    alpha_beta_search_with_stats(game, state).into_action()
}

/// Like [`alpha_beta_search`], also returning the root value and statistics.
pub fn alpha_beta_search_with_stats<G: Game>(
    game: &G,
    state: &G::State,
) -> SearchOutcome<G::Action> {
    run(game, state, &Exhaustive)
}

/// Decides where the search stops descending and what the stopping state is
/// worth.
pub(crate) trait Horizon<G: Game> {
    /// Value of `state` for `player` if the search stops `ply` plies below
    /// the root, or `None` to keep expanding.
    fn leaf_value(&self, game: &G, state: &G::State, player: Player, ply: u32) -> Option<f64>;
}

/// Stops only at terminal states, scoring them by utility.
struct Exhaustive;

impl<G: Game> Horizon<G> for Exhaustive {
    fn leaf_value(&self, game: &G, state: &G::State, player: Player, _ply: u32) -> Option<f64> {
        if game.is_terminal(state) {
            Some(game.utility(state, player))
        } else {
            None
        }
    }
}

/// Run an alpha-beta search from `state` with the given horizon.
pub(crate) fn run<G, H>(game: &G, state: &G::State, horizon: &H) -> SearchOutcome<G::Action>
where
    G: Game,
    H: Horizon<G>,
{
    let player = game.to_move(state);
    let mut search = AlphaBeta {
        game,
        horizon,
        player,
        stats: SearchStats::new(),
    };

    let (value, action) = search.max_value(state, f64::NEG_INFINITY, f64::INFINITY, 0);

    debug!(
        "alpha-beta for {}: {:?} value {} ({})",
        player, action, value, search.stats
    );

    SearchOutcome {
        action,
        value,
        stats: search.stats,
    }
}

/// Per-call search context. Lives on the caller's stack.
struct AlphaBeta<'a, G: Game, H> {
    game: &'a G,
    horizon: &'a H,
    player: Player,
    stats: SearchStats,
}

impl<G: Game, H: Horizon<G>> AlphaBeta<'_, G, H> {
    fn leaf(&mut self, state: &G::State, ply: u32) -> Option<f64> {
        self.stats.enter(ply);
        let value = self.horizon.leaf_value(self.game, state, self.player, ply);
        if value.is_some() {
            self.stats.leaves += 1;
        }
        value
    }

    fn max_value(
        &mut self,
        state: &G::State,
        mut alpha: f64,
        beta: f64,
        ply: u32,
    ) -> (f64, Option<G::Action>) {
        if let Some(value) = self.leaf(state, ply) {
            return (value, None);
        }

        let mut value = f64::NEG_INFINITY;
        let mut best = None;
        for action in self.game.actions(state) {
            let child = self.game.result(state, &action);
            let (child_value, _) = self.min_value(&child, alpha, beta, ply + 1);
            if ply == 0 {
                trace!("root {:?} -> {} (alpha {})", action, child_value, alpha);
            }
            if child_value > value {
                value = child_value;
                best = Some(action);
            }
            alpha = alpha.max(value);
            if value >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }
        (value, best)
    }

    fn min_value(
        &mut self,
        state: &G::State,
        alpha: f64,
        mut beta: f64,
        ply: u32,
    ) -> (f64, Option<G::Action>) {
        if let Some(value) = self.leaf(state, ply) {
            return (value, None);
        }

        let mut value = f64::INFINITY;
        let mut best = None;
        for action in self.game.actions(state) {
            let child = self.game.result(state, &action);
            let (child_value, _) = self.max_value(&child, alpha, beta, ply + 1);
            if child_value < value {
                value = child_value;
                best = Some(action);
            }
            beta = beta.min(value);
            if value <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }
        (value, best)
    }
}
