//! Simulation cores for three retro arcade games.
//!
//! Core modules:
//! - `entity`: shared kinematic body, screen bounds, boundary policies
//! - `collision`: the proximity test all three games share
//! - `events`: discrete effects queued for the presentation layer
//! - `asteroids`, `pong`, `skeet`: per-game state and tick logic
//!
//! All gameplay logic here is pure and deterministic:
//! - One tick per rendered frame, all timers are frame counters
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies
//!
//! The presentation layer (window, textures, sound, menu screens) drives
//! one `tick` per frame with an input snapshot, then reads back the public
//! entity pools, score/lives and terminal queries, and drains the event
//! queue for sound cues.

pub mod asteroids;
pub mod collision;
pub mod entity;
pub mod events;
pub mod pong;
pub mod skeet;

pub use collision::{Hitbox, overlaps};
pub use entity::{Body, Bounds};
pub use events::{GameEvent, SoundCue};

use glam::Vec2;

/// Unit vector for an angle in degrees, measured counterclockwise from +x
#[inline]
pub fn unit_from_degrees(angle: f32) -> Vec2 {
    let r = angle.to_radians();
    Vec2::new(r.cos(), r.sin())
}

/// Unit vector along the facing of a sprite whose neutral pose points up.
///
/// The ship art points along +y at angle 0, so the facing is the
/// unit-circle direction a quarter turn ahead of the stored angle.
#[inline]
pub fn facing_from_degrees(angle: f32) -> Vec2 {
    unit_from_degrees(angle + 90.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_from_degrees_cardinals() {
        assert!((unit_from_degrees(0.0) - Vec2::X).length() < 1e-6);
        assert!((unit_from_degrees(90.0) - Vec2::Y).length() < 1e-6);
        assert!((unit_from_degrees(180.0) + Vec2::X).length() < 1e-6);
    }

    #[test]
    fn test_facing_is_quarter_turn_ahead() {
        // At angle 0 the sprite points straight up
        assert!((facing_from_degrees(0.0) - Vec2::Y).length() < 1e-6);
        // Turning left (positive degrees) swings the facing toward -x
        let turned = facing_from_degrees(90.0);
        assert!((turned + Vec2::X).length() < 1e-6);
    }
}
