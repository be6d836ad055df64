//! Core types shared by every game: players and seeded randomness.

pub mod player;
pub mod rng;

pub use player::Player;
pub use rng::GameRng;
