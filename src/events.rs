//! Discrete effects the simulation asks the presentation layer to perform
//!
//! The cores never touch audio or video. Gameplay rules queue events on
//! the game state; the caller drains the queue once per frame and plays or
//! draws whatever the events name.

use serde::{Deserialize, Serialize};

/// Sound effects triggered by gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundCue {
    /// The player fired a shot
    Fire,
    /// The ship was rammed by a rock or hit by saucer fire
    Impact,
    /// The board was cleared
    Victory,
}

/// One request for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Sound(SoundCue),
}
