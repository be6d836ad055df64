//! Red-Blue Nim rules.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::Player;
use crate::error::Error;
use crate::rules::{ActionList, Game};

use super::scoring::{ScoringRule, Variant};

/// Score weight of a red marble left on the table.
pub const RED_WEIGHT: u32 = 2;
/// Score weight of a blue marble left on the table.
pub const BLUE_WEIGHT: u32 = 3;

/// A position: both pile counts and the player to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NimState {
    pub red: u32,
    pub blue: u32,
    pub to_move: Player,
}

impl NimState {
    /// Create a state.
    #[must_use]
    pub const fn new(red: u32, blue: u32, to_move: Player) -> Self {
        Self { red, blue, to_move }
    }

    /// Marbles left in both piles. Bounds the number of remaining plies.
    #[must_use]
    pub fn total(&self) -> u64 {
        u64::from(self.red) + u64::from(self.blue)
    }

    /// Weighted marble count, `2 * red + 3 * blue`.
    #[must_use]
    pub fn score(&self) -> f64 {
        let red = f64::from(RED_WEIGHT) * f64::from(self.red);
        let blue = f64::from(BLUE_WEIGHT) * f64::from(self.blue);
        red + blue
    }

    /// Marbles in one pile.
    #[must_use]
    pub const fn pile(&self, pile: Pile) -> u32 {
        match pile {
            Pile::Red => self.red,
            Pile::Blue => self.blue,
        }
    }
}

impl std::fmt::Display for NimState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Red marbles: {} | Blue marbles: {} | To move: {}",
            self.red, self.blue, self.to_move
        )
    }
}

/// Pile selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pile {
    Red,
    Blue,
}

impl std::fmt::Display for Pile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pile::Red => f.write_str("red"),
            Pile::Blue => f.write_str("blue"),
        }
    }
}

impl FromStr for Pile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" | "r" => Ok(Pile::Red),
            "blue" | "b" => Ok(Pile::Blue),
            other => Err(Error::UnknownPile(other.to_string())),
        }
    }
}

/// Remove `count` (1 or 2) marbles from `pile`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NimAction {
    pub pile: Pile,
    pub count: u32,
}

impl NimAction {
    /// Create an action.
    #[must_use]
    pub const fn new(pile: Pile, count: u32) -> Self {
        Self { pile, count }
    }
}

impl std::fmt::Display for NimAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.pile, self.count)
    }
}

impl FromStr for NimAction {
    type Err = Error;

    /// Parse `<pile> <count>`, e.g. `red 2`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let pile = parts.next().unwrap_or_default().parse::<Pile>()?;
        let count = parse_count(parts.next().unwrap_or_default())?;
        if let Some(extra) = parts.next() {
            return Err(Error::InvalidCount(extra.to_string()));
        }
        Ok(NimAction::new(pile, count))
    }
}

/// Parse a removal count, accepting only 1 and 2.
pub fn parse_count(s: &str) -> Result<u32, Error> {
    match s.trim().parse::<u32>() {
        Ok(count @ 1..=2) => Ok(count),
        _ => Err(Error::InvalidCount(s.trim().to_string())),
    }
}

/// Game setup. Doubles as the builder for [`RedBlueNim`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NimConfig {
    pub red: u32,
    pub blue: u32,
    #[serde(default)]
    pub variant: Variant,
    #[serde(default = "default_first_player")]
    pub first_player: Player,
}

fn default_first_player() -> Player {
    Player::First
}

impl Default for NimConfig {
    fn default() -> Self {
        Self {
            red: 3,
            blue: 3,
            variant: Variant::default(),
            first_player: default_first_player(),
        }
    }
}

impl NimConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn red(mut self, red: u32) -> Self {
        self.red = red;
        self
    }

    pub fn blue(mut self, blue: u32) -> Self {
        self.blue = blue;
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }

    /// Build the game.
    pub fn build(self) -> RedBlueNim {
        RedBlueNim::new(self)
    }
}

/// Red-Blue Nim.
///
/// A move removes one or two marbles from either pile. The game ends as
/// soon as either pile is empty; the terminal state is scored by the
/// configured [`ScoringRule`].
#[derive(Clone, Debug)]
pub struct RedBlueNim {
    config: NimConfig,
    rule: &'static dyn ScoringRule,
}

impl RedBlueNim {
    /// Create a game from its configuration.
    pub fn new(config: NimConfig) -> Self {
        let rule = config.variant.rule();
        Self { config, rule }
    }

    /// Start configuring a game.
    pub fn builder() -> NimConfig {
        NimConfig::new()
    }

    /// Replace the scoring rule, e.g. with a custom one.
    pub fn with_rule(mut self, rule: &'static dyn ScoringRule) -> Self {
        self.rule = rule;
        self
    }

    /// Get the game configuration.
    pub fn config(&self) -> &NimConfig {
        &self.config
    }

    /// Get the scoring rule.
    pub fn rule(&self) -> &'static dyn ScoringRule {
        self.rule
    }

    /// The player awarded a terminal state, `None` while the game continues.
    pub fn winner(&self, state: &NimState) -> Option<Player> {
        self.is_terminal(state).then(|| self.rule.winner(state))
    }

    /// Every state reachable from `from`, `from` included, each once.
    ///
    /// Terminal states are included but not expanded.
    pub fn reachable_states(&self, from: &NimState) -> Vec<NimState> {
        let mut seen = FxHashSet::default();
        let mut order = Vec::new();
        let mut stack = vec![*from];

        while let Some(state) = stack.pop() {
            if !seen.insert(state) {
                continue;
            }
            order.push(state);
            if self.is_terminal(&state) {
                continue;
            }
            for action in self.actions(&state) {
                stack.push(self.result(&state, &action));
            }
        }

        order
    }
}

impl Game for RedBlueNim {
    type State = NimState;
    type Action = NimAction;

    fn initial_state(&self) -> NimState {
        NimState::new(self.config.red, self.config.blue, self.config.first_player)
    }

    fn to_move(&self, state: &NimState) -> Player {
        state.to_move
    }

    /// Red 1, red 2, blue 1, blue 2, each if the pile holds enough marbles.
    ///
    /// Looks only at pile sizes, so a terminal state may still list moves
    /// for its non-empty pile.
    fn actions(&self, state: &NimState) -> ActionList<NimAction> {
        let mut actions = ActionList::new();
        for pile in [Pile::Red, Pile::Blue] {
            for count in 1..=2 {
                if state.pile(pile) >= count {
                    actions.push(NimAction::new(pile, count));
                }
            }
        }
        actions
    }

    fn result(&self, state: &NimState, action: &NimAction) -> NimState {
        let mut next = *state;
        match action.pile {
            Pile::Red => next.red = next.red.saturating_sub(action.count),
            Pile::Blue => next.blue = next.blue.saturating_sub(action.count),
        }
        next.to_move = state.to_move.opponent();
        next
    }

    fn is_terminal(&self, state: &NimState) -> bool {
        state.red == 0 || state.blue == 0
    }

    fn utility(&self, state: &NimState, player: Player) -> f64 {
        let score = state.score();
        if player == self.rule.winner(state) {
            score
        } else {
            -score
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard() -> RedBlueNim {
        RedBlueNim::builder().red(3).blue(3).build()
    }

    fn actions(game: &RedBlueNim, red: u32, blue: u32) -> Vec<NimAction> {
        game.actions(&NimState::new(red, blue, Player::First)).into_vec()
    }

    #[test]
    fn test_game_creation() {
        let game = RedBlueNim::builder()
            .red(5)
            .blue(7)
            .variant(Variant::Misere)
            .first_player(Player::Second)
            .build();

        assert_eq!(game.initial_state(), NimState::new(5, 7, Player::Second));
        assert_eq!(game.rule().name(), "misere");
        assert_eq!(game.config().variant, Variant::Misere);
    }

    #[test]
    fn test_action_enumeration_order() {
        let game = standard();

        assert_eq!(
            actions(&game, 2, 2),
            vec![
                NimAction::new(Pile::Red, 1),
                NimAction::new(Pile::Red, 2),
                NimAction::new(Pile::Blue, 1),
                NimAction::new(Pile::Blue, 2),
            ]
        );
        assert_eq!(
            actions(&game, 1, 5),
            vec![
                NimAction::new(Pile::Red, 1),
                NimAction::new(Pile::Blue, 1),
                NimAction::new(Pile::Blue, 2),
            ]
        );
        assert!(actions(&game, 0, 0).is_empty());
    }

    #[test]
    fn test_result_removes_and_flips() {
        let game = standard();
        let state = NimState::new(3, 4, Player::First);

        let next = game.result(&state, &NimAction::new(Pile::Blue, 2));
        assert_eq!(next, NimState::new(3, 2, Player::Second));

        let next = game.result(&next, &NimAction::new(Pile::Red, 1));
        assert_eq!(next, NimState::new(2, 2, Player::First));
    }

    #[test]
    fn test_result_never_underflows() {
        let game = standard();
        let state = NimState::new(1, 4, Player::First);

        // Not a legal action here; counts still stay non-negative.
        let next = game.result(&state, &NimAction::new(Pile::Red, 2));
        assert_eq!(next.red, 0);
    }

    #[test]
    fn test_terminal_when_either_pile_empty() {
        let game = standard();

        assert!(!game.is_terminal(&NimState::new(1, 1, Player::First)));
        assert!(game.is_terminal(&NimState::new(0, 3, Player::First)));
        assert!(game.is_terminal(&NimState::new(3, 0, Player::Second)));
        assert!(game.is_terminal(&NimState::new(0, 0, Player::Second)));
    }

    #[test]
    fn test_standard_utility() {
        let game = standard();
        let terminal = NimState::new(1, 0, Player::Second);

        assert_eq!(game.utility(&terminal, Player::Second), 2.0);
        assert_eq!(game.utility(&terminal, Player::First), -2.0);
        assert_eq!(game.winner(&terminal), Some(Player::Second));
        assert_eq!(game.winner(&NimState::new(1, 1, Player::First)), None);
    }

    #[test]
    fn test_score_of_full_piles_does_not_wrap() {
        let game = standard();
        let terminal = NimState::new(u32::MAX, 0, Player::Second);
        let full = NimState::new(u32::MAX, u32::MAX, Player::First);

        assert_eq!(full.total(), 2 * u64::from(u32::MAX));
        assert_eq!(full.score(), 5.0 * f64::from(u32::MAX));
        assert_eq!(game.utility(&terminal, Player::Second), 2.0 * f64::from(u32::MAX));
        assert_eq!(game.utility(&terminal, Player::First), -2.0 * f64::from(u32::MAX));
    }

    #[test]
    fn test_misere_utility() {
        let game = RedBlueNim::builder().variant(Variant::Misere).build();
        let terminal = NimState::new(0, 2, Player::Second);

        assert_eq!(game.utility(&terminal, Player::Second), -6.0);
        assert_eq!(game.utility(&terminal, Player::First), 6.0);
    }

    #[test]
    fn test_custom_rule() {
        #[derive(Debug)]
        struct AlwaysFirst;

        impl ScoringRule for AlwaysFirst {
            fn name(&self) -> &'static str {
                "always-first"
            }

            fn winner(&self, _terminal: &NimState) -> Player {
                Player::First
            }
        }

        let game = standard().with_rule(&AlwaysFirst);
        let terminal = NimState::new(0, 1, Player::Second);
        assert_eq!(game.utility(&terminal, Player::First), 3.0);
    }

    #[test]
    fn test_reachable_states() {
        let game = standard();
        let states = game.reachable_states(&NimState::new(2, 1, Player::First));

        // (2,1,F) -> (1,1,S), (0,1,S), (2,0,S); (1,1,S) -> (0,1,F), (1,0,F)
        assert_eq!(states.len(), 6);
        assert_eq!(states[0], NimState::new(2, 1, Player::First));

        let unique: FxHashSet<_> = states.iter().copied().collect();
        assert_eq!(unique.len(), states.len());
    }

    #[test]
    fn test_action_parsing() {
        assert_eq!(
            "red 2".parse::<NimAction>().unwrap(),
            NimAction::new(Pile::Red, 2)
        );
        assert_eq!(
            "  BLUE   1 ".parse::<NimAction>().unwrap(),
            NimAction::new(Pile::Blue, 1)
        );
        assert!("green 1".parse::<NimAction>().is_err());
        assert!("red 3".parse::<NimAction>().is_err());
        assert!("red".parse::<NimAction>().is_err());
        assert!("red 1 1".parse::<NimAction>().is_err());
        assert_eq!(NimAction::new(Pile::Blue, 2).to_string(), "blue 2");
    }

    #[test]
    fn test_config_serialization() {
        let config = RedBlueNim::builder().red(10).blue(4).variant(Variant::Misere);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: NimConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);

        let minimal: NimConfig = serde_json::from_str(r#"{"red":1,"blue":2}"#).unwrap();
        assert_eq!(minimal.variant, Variant::Standard);
        assert_eq!(minimal.first_player, Player::First);
    }

    #[test]
    fn test_state_display() {
        let state = NimState::new(3, 4, Player::First);
        assert_eq!(
            state.to_string(),
            "Red marbles: 3 | Blue marbles: 4 | To move: first"
        );
    }
}
