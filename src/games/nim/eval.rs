//! Static evaluation for depth-limited Red-Blue Nim search.

use crate::core::Player;
use crate::rules::Evaluator;

use super::game::NimState;

/// Weighted marble count, signed against the player to move.
///
/// A state is worth `-(2 * red + 3 * blue)` to the player who must move in
/// it and the positive value to the other player: facing a large table is
/// bad for the mover.
#[derive(Clone, Copy, Debug, Default)]
pub struct MarbleCountEval;

impl Evaluator<NimState> for MarbleCountEval {
    fn evaluate(&self, state: &NimState, player: Player) -> f64 {
        let value = state.score();
        if player == state.to_move {
            -value
        } else {
            value
        }
    }
}
