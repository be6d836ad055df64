//! Game loop: alternate controllers until a terminal state is reached.

use std::fmt::Display;
use std::io::Write;

use log::info;

use crate::core::Player;
use crate::error::{Error, Result};
use crate::rules::Game;

use super::controller::Controller;

/// One side of a match: a display label and who picks its moves.
pub struct Seat<'a, G: Game> {
    pub label: String,
    pub controller: Box<dyn Controller<G> + 'a>,
}

impl<'a, G: Game> Seat<'a, G> {
    pub fn new(label: impl Into<String>, controller: impl Controller<G> + 'a) -> Self {
        Self {
            label: label.into(),
            controller: Box::new(controller),
        }
    }
}

/// A finished game.
#[derive(Clone, Debug)]
pub struct GameRecord<G: Game> {
    /// Every move in order, with the player who made it.
    pub moves: Vec<(Player, G::Action)>,

    /// The terminal state.
    pub final_state: G::State,
}

impl<G: Game> GameRecord<G> {
    /// Utility of the final state for `player`.
    pub fn utility(&self, game: &G, player: Player) -> f64 {
        game.utility(&self.final_state, player)
    }
}

/// Two seats playing one game, writing progress to `out`.
pub struct Match<'a, G: Game, W> {
    game: &'a G,
    seats: [Seat<'a, G>; 2],
    out: W,
}

impl<'a, G, W> Match<'a, G, W>
where
    G: Game,
    G::State: Display,
    G::Action: Display,
    W: Write,
{
    /// `first` plays as [`Player::First`], `second` as [`Player::Second`].
    pub fn new(game: &'a G, first: Seat<'a, G>, second: Seat<'a, G>, out: W) -> Self {
        Self {
            game,
            seats: [first, second],
            out,
        }
    }

    /// Label of the seat playing `player`.
    pub fn label(&self, player: Player) -> &str {
        &self.seats[player.index()].label
    }

    /// Play from `state` until the game is over.
    ///
    /// Moves are checked against the legal actions before being applied.
    pub fn play_from(&mut self, mut state: G::State) -> Result<GameRecord<G>> {
        let mut moves = Vec::new();

        while !self.game.is_terminal(&state) {
            self.line(format_args!("{state}"))?;

            let player = self.game.to_move(&state);
            let seat = &mut self.seats[player.index()];
            if seat.controller.is_automatic() {
                writeln!(self.out, "\n{} thinking...\n", seat.label)
                    .map_err(|e| Error::io("write progress", e))?;
            }

            let action = seat.controller.choose(self.game, &state)?;
            if !self.game.is_legal(&state, &action) {
                return Err(Error::IllegalMove {
                    action: action.to_string(),
                    state: state.to_string(),
                });
            }

            info!("{} ({}) plays {}", seat.label, player, action);
            if seat.controller.is_automatic() {
                let message = format!("{} chooses: {}\n", seat.label, action);
                self.line(format_args!("{message}"))?;
            }

            state = self.game.result(&state, &action);
            moves.push((player, action));
        }

        self.line(format_args!("{state}"))?;
        info!("game over after {} moves: {}", moves.len(), state);

        Ok(GameRecord {
            moves,
            final_state: state,
        })
    }

    /// Play a whole game from the initial state.
    pub fn play(&mut self) -> Result<GameRecord<G>> {
        self.play_from(self.game.initial_state())
    }

    fn line(&mut self, args: std::fmt::Arguments<'_>) -> Result<()> {
        writeln!(self.out, "{args}").map_err(|e| Error::io("write progress", e))
    }
}
