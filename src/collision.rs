//! Pairwise proximity test shared by all three games
//!
//! Two entities collide when they are within the sum of their radii on
//! each axis independently — a cheap bounding-box test, not a
//! circular-distance one. Diagonal near-misses register as hits that a
//! Euclidean test would reject, which changes gameplay, so the test must
//! stay exactly as written.

use glam::Vec2;

/// Capability view of an entity for collision purposes: position, radius
/// and liveness are all the detector ever needs.
#[derive(Debug, Clone, Copy)]
pub struct Hitbox {
    pub pos: Vec2,
    pub radius: f32,
    pub alive: bool,
}

/// True iff both entities are alive and closer than the sum of their radii
/// on both axes.
///
/// Dead entities never collide, which is what lets a pool-major scan skip
/// a bullet or rock consumed earlier in the same pass.
pub fn overlaps(a: Hitbox, b: Hitbox) -> bool {
    debug_assert!(a.radius >= 0.0 && b.radius >= 0.0);
    debug_assert!(a.pos.is_finite() && b.pos.is_finite());
    if !a.alive || !b.alive {
        return false;
    }
    let reach = a.radius + b.radius;
    (a.pos.x - b.pos.x).abs() < reach && (a.pos.y - b.pos.y).abs() < reach
}
