//! Asteroids: a wrapping rock field, a thrusting ship, and a saucer that
//! shoots back on the hardest ruleset.
//!
//! Large rocks split into mediums and smalls under fire; the board is
//! cleared when no rocks remain and lost when the hearts run out.

pub mod state;
pub mod tick;

pub use state::{
    Alien, AlienShot, Bullet, Difficulty, GameState, Heart, Phase, Rock, RockSize, SCREEN, Ship,
};
pub use tick::{TickInput, tick};
