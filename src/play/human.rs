//! Interactive move entry for Red-Blue Nim.

use std::io::{BufRead, Write};

use crate::error::{Error, Result};
use crate::games::nim::{NimAction, NimState, Pile, RedBlueNim};
use crate::rules::Game;

use super::controller::Controller;

/// Prompts a person for pile and count until a legal action is entered.
pub struct HumanPlayer<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask for a move, re-prompting on malformed or illegal input.
    ///
    /// Fails with [`Error::InputClosed`] if input ends first.
    pub fn prompt_action(&mut self, game: &RedBlueNim, state: &NimState) -> Result<NimAction> {
        loop {
            let pile = self.ask("Choose pile (red/blue): ")?;
            let count = self.ask("How many marbles to remove (1 or 2)? ")?;

            match parse_move(&pile, &count) {
                Ok(action) if game.is_legal(state, &action) => return Ok(action),
                Ok(action) => {
                    log::debug!("rejected illegal move {action} in {state}");
                    self.say("Invalid move! Try again.\n")?;
                }
                Err(err) => {
                    log::debug!("rejected input: {err}");
                    self.say("Invalid input! Try again.\n")?;
                }
            }
        }
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}").map_err(|e| Error::io("write prompt", e))?;
        self.output.flush().map_err(|e| Error::io("flush prompt", e))?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| Error::io("read move", e))?;
        if read == 0 {
            return Err(Error::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}").map_err(|e| Error::io("write message", e))
    }
}

/// Any whole number is accepted as a count; legality is checked against
/// the state afterwards.
fn parse_move(pile: &str, count: &str) -> Result<NimAction> {
    let pile = pile.parse::<Pile>()?;
    let count = count
        .parse::<u32>()
        .map_err(|_| Error::InvalidCount(count.to_string()))?;
    Ok(NimAction::new(pile, count))
}

impl<R: BufRead, W: Write> Controller<RedBlueNim> for HumanPlayer<R, W> {
    fn choose(&mut self, game: &RedBlueNim, state: &NimState) -> Result<NimAction> {
        self.prompt_action(game, state)
    }

    fn is_automatic(&self) -> bool {
        false
    }
}
