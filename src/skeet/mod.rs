//! Skeet: targets launched from the left edge, shot down by a rifle
//! anchored in the lower-left corner.
//!
//! Standard targets pay a point, Safe targets cost ten, Strong targets
//! soak three hits. The game is endless; only the score accumulates.

pub mod state;
pub mod tick;

pub use state::{Bullet, GameState, Rifle, SCREEN, Target, TargetKind};
pub use tick::{TickInput, tick};
