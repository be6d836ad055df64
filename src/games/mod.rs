//! Concrete games implementing [`crate::rules::Game`].

pub mod nim;
