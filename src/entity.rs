//! Shared kinematic entity and screen-boundary policies
//!
//! Every simulated object in the three games moves the same way: velocity
//! added to position once per tick, a fixed angular increment, and one of
//! two boundary policies — wrap to the opposite edge, or die on leaving
//! the screen. Per-game behavior lives in the game modules; this is the
//! common base.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::collision::Hitbox;

/// Screen extent for one game, injected rather than read from a display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Middle of the screen
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Kinematic state shared by every entity: ships, rocks, bullets, targets,
/// the ball and the paddle all carry one of these.
///
/// The alive flag is the sole deletion signal. Rules flip it to false; the
/// owning pool removes the entity in a cleanup pass after the collision
/// pass, never while the pool is still being scanned.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Orientation in degrees
    pub angle: f32,
    /// Degrees added every tick, independent of the velocity direction
    pub spin: f32,
    /// Collision half-extent; `None` for decorative entities that never
    /// take part in collision (hearts, the saucer itself)
    pub radius: Option<f32>,
    pub alive: bool,
}

impl Body {
    pub fn new(pos: Vec2, radius: Option<f32>) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            angle: 0.0,
            spin: 0.0,
            radius,
            alive: true,
        }
    }

    /// Advance with the wrap policy: spin, the wrap chain, then velocity.
    ///
    /// The wrap check runs before integration, so a body can end a tick
    /// just off-screen and is re-injected at the start of the next one.
    pub fn advance_wrapping(&mut self, bounds: Bounds) {
        self.angle += self.spin;
        self.wrap(bounds);
        self.integrate();
    }

    /// Advance with no boundary policy at all
    pub fn advance_free(&mut self) {
        self.angle += self.spin;
        self.integrate();
    }

    fn integrate(&mut self) {
        debug_assert!(self.pos.is_finite() && self.vel.is_finite());
        self.pos += self.vel;
    }

    /// Re-inject a body that left the screen on the opposite edge.
    ///
    /// Strictly one correction per call, x checked before y: a body
    /// off-screen on both axes is corrected on x this tick and on y the
    /// next. The branch order is load-bearing and must not be replaced
    /// with independent per-axis corrections.
    pub fn wrap(&mut self, bounds: Bounds) {
        if self.pos.x > bounds.width {
            self.pos.x -= bounds.width;
        } else if self.pos.x < 0.0 {
            self.pos.x += bounds.width;
        } else if self.pos.y > bounds.height {
            self.pos.y -= bounds.height;
        } else if self.pos.y < 0.0 {
            self.pos.y += bounds.height;
        }
    }

    /// Kill a body once any coordinate leaves the screen, with no position
    /// correction (saucer shots)
    pub fn cull_outside(&mut self, bounds: Bounds) {
        if self.pos.x > bounds.width
            || self.pos.x < 0.0
            || self.pos.y > bounds.height
            || self.pos.y < 0.0
        {
            self.alive = false;
        }
    }

    /// Kill a body past the right or top edge only.
    ///
    /// Skeet's off-screen test watches just these two edges; targets that
    /// drift out left or bottom are left in play.
    pub fn cull_past_far_edges(&mut self, bounds: Bounds) {
        if self.pos.x > bounds.width || self.pos.y > bounds.height {
            self.alive = false;
        }
    }

    /// Collision view of this body; `None` when it carries no radius
    pub fn hitbox(&self) -> Option<Hitbox> {
        self.radius.map(|radius| Hitbox {
            pos: self.pos,
            radius,
            alive: self.alive,
        })
    }
}
