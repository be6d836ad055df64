//! Depth-limited alpha-beta with static evaluation.
//!
//! Identical to [`super::alpha_beta`] except that recursion also stops once
//! the ply budget is spent. Each ply costs exactly one unit, whatever action
//! was taken. Stopping states are scored by the supplied evaluator; see
//! [`TerminalScoring`] for how terminal states are treated.
//!
//! The result is only optimal with respect to the evaluator.

use crate::core::Player;
use crate::rules::{Evaluator, Game};

use super::alpha_beta::{self, Horizon};
use super::config::TerminalScoring;
use super::outcome::SearchOutcome;

/// Best action found within `depth_limit` plies, using the historical
/// [`TerminalScoring::Evaluator`] policy.
///
/// With `depth_limit == 0` the evaluator is applied to `state` itself, no
/// action is examined and `None` is returned.
pub fn depth_limited_alpha_beta<G, E>(
    game: &G,
    state: &G::State,
    depth_limit: u32,
    evaluator: &E,
) -> Option<G::Action>
where
    G: Game,
    E: Evaluator<G::State> + ?Sized,
{
    depth_limited_alpha_beta_with_stats(
        game,
        state,
        depth_limit,
        evaluator,
        TerminalScoring::Evaluator,
    )
    .into_action()
}

/// Depth-limited alpha-beta with an explicit terminal scoring policy,
/// returning the root value and statistics.
pub fn depth_limited_alpha_beta_with_stats<G, E>(
    game: &G,
    state: &G::State,
    depth_limit: u32,
    evaluator: &E,
    terminal_scoring: TerminalScoring,
) -> SearchOutcome<G::Action>
where
    G: Game,
    E: Evaluator<G::State> + ?Sized,
{
    let horizon = DepthHorizon {
        depth_limit,
        evaluator,
        terminal_scoring,
    };
    alpha_beta::run(game, state, &horizon)
}

struct DepthHorizon<'a, E: ?Sized> {
    depth_limit: u32,
    evaluator: &'a E,
    terminal_scoring: TerminalScoring,
}

impl<G, E> Horizon<G> for DepthHorizon<'_, E>
where
    G: Game,
    E: Evaluator<G::State> + ?Sized,
{
    fn leaf_value(&self, game: &G, state: &G::State, player: Player, ply: u32) -> Option<f64> {
        let terminal = game.is_terminal(state);
        let exhausted = ply >= self.depth_limit;
        if !terminal && !exhausted {
            return None;
        }

        Some(match self.terminal_scoring {
            TerminalScoring::Utility if terminal => game.utility(state, player),
            _ => self.evaluator.evaluate(state, player),
        })
    }
}
