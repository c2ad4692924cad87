//! Pong: one ball, one paddle on the right edge, and a signed score.
//!
//! The ball bounces off the left, top and bottom edges; slipping past the
//! right edge costs points and re-serves the ball. The game is endless.

pub mod state;
pub mod tick;

pub use state::{Ball, GameState, Paddle, SCREEN};
pub use tick::{TickInput, tick};
