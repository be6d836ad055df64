//! Game trait for two-player, zero-sum, perfect-information games.
//!
//! Games implement `Game` to define their rules:
//! - Who moves in a state
//! - What actions are legal, in a fixed order
//! - How an action produces the next state
//! - When the game is over and what it is worth to each player
//!
//! The search engine only talks to games through this trait.

use smallvec::SmallVec;
use std::fmt::Debug;

use crate::core::Player;

/// Legal actions of a state, in enumeration order.
///
/// Inline capacity covers the branching factor of small pile games without
/// heap allocation.
pub type ActionList<A> = SmallVec<[A; 4]>;

/// Rules of a sequential two-player game.
///
/// ## Implementation Notes
///
/// - `actions`: order matters, the search keeps the first of equally
///   valued actions
/// - `result`: must be deterministic and must hand the move to the opponent;
///   only actions returned by `actions` for the same state may be passed in
/// - `utility`: only meaningful when `is_terminal` holds
pub trait Game {
    /// A complete, immutable position including the player to move.
    type State: Clone + Debug;

    /// An opaque transition token produced by `actions`.
    type Action: Clone + PartialEq + Debug;

    /// The starting position.
    fn initial_state(&self) -> Self::State;

    /// The player who must choose the next action.
    fn to_move(&self, state: &Self::State) -> Player;

    /// Every legal action in `state`, in enumeration order.
    fn actions(&self, state: &Self::State) -> ActionList<Self::Action>;

    /// The successor of `state` after `action`.
    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Whether the game is over.
    fn is_terminal(&self, state: &Self::State) -> bool;

    /// Signed outcome of a terminal state; positive favors `player`.
    fn utility(&self, state: &Self::State, player: Player) -> f64;

    // === Convenience Methods ===

    /// Check whether `action` is one of the legal actions of `state`.
    fn is_legal(&self, state: &Self::State, action: &Self::Action) -> bool {
        self.actions(state).iter().any(|a| a == action)
    }
}

/// Static evaluation used where a depth-limited search stops descending.
///
/// Any `Fn(&S, Player) -> f64` is an evaluator:
///
/// ```
/// use rust_minimax::core::Player;
/// use rust_minimax::rules::Evaluator;
///
/// let eval = |depth: &u32, _player: Player| f64::from(*depth);
/// assert_eq!(eval.evaluate(&3, Player::First), 3.0);
/// ```
pub trait Evaluator<S> {
    /// Heuristic value of `state` from `player`'s point of view.
    fn evaluate(&self, state: &S, player: Player) -> f64;
}

impl<S, F> Evaluator<S> for F
where
    F: Fn(&S, Player) -> f64,
{
    fn evaluate(&self, state: &S, player: Player) -> f64 {
        self(state, player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts down from `n`; whoever faces zero has lost one point.
    struct Countdown;

    impl Game for Countdown {
        type State = (u32, Player);
        type Action = u32;

        fn initial_state(&self) -> Self::State {
            (3, Player::First)
        }

        fn to_move(&self, state: &Self::State) -> Player {
            state.1
        }

        fn actions(&self, state: &Self::State) -> ActionList<u32> {
            (1..=state.0.min(2)).collect()
        }

        fn result(&self, state: &Self::State, action: &u32) -> Self::State {
            (state.0 - action, state.1.opponent())
        }

        fn is_terminal(&self, state: &Self::State) -> bool {
            state.0 == 0
        }

        fn utility(&self, state: &Self::State, player: Player) -> f64 {
            if player == state.1 {
                -1.0
            } else {
                1.0
            }
        }
    }

    #[test]
    fn test_is_legal_uses_actions() {
        let game = Countdown;
        let state = game.initial_state();

        assert!(game.is_legal(&state, &1));
        assert!(game.is_legal(&state, &2));
        assert!(!game.is_legal(&state, &3));
        assert!(!game.is_legal(&(0, Player::First), &1));
    }

    #[test]
    fn test_closure_is_evaluator() {
        let eval = |state: &(u32, Player), player: Player| {
            if state.1 == player {
                f64::from(state.0)
            } else {
                -f64::from(state.0)
            }
        };

        assert_eq!(eval.evaluate(&(4, Player::First), Player::First), 4.0);
        assert_eq!(eval.evaluate(&(4, Player::First), Player::Second), -4.0);
    }
}
