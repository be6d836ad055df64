//! Driver layer: who picks moves, human prompting and the game loop.
//!
//! Nothing here is needed to run a search; it wires searches and people
//! to a game for the `red_blue_nim` binary.

pub mod controller;
pub mod human;
pub mod session;

pub use controller::Controller;
pub use human::HumanPlayer;
pub use session::{GameRecord, Match, Seat};
