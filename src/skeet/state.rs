//! Targets, bullets and the rifle for the shooting range

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::entity::{Body, Bounds};
use crate::unit_from_degrees;

/// Canonical screen extent for this game
pub const SCREEN: Bounds = Bounds::new(600.0, 500.0);

pub const BULLET_RADIUS: f32 = 3.0;
pub const BULLET_SPEED: f32 = 10.0;

/// Every target kind collides at this radius, including the Safe square,
/// which is drawn smaller than it collides
pub const TARGET_RADIUS: f32 = 20.0;

/// One spawn roll in this many ticks launches a target
pub const SPAWN_ODDS: u32 = 50;

const STRONG_HITS: u8 = 3;

/// Closed set of target kinds; spawn velocity and hit policy key off this
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetKind {
    /// Dies on the first hit, pays one point
    Standard,
    /// Never meant to be shot; dies on the first hit, costs ten points
    Safe,
    /// Soaks three hits: a point each for the first two, five for the kill
    Strong,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    pub kind: TargetKind,
    pub body: Body,
    /// Hits left before this target dies
    pub hits_left: u8,
}

impl Target {
    /// Launch a fresh target from the top half of the left edge.
    ///
    /// Strong targets drift more slowly than the other two kinds.
    pub fn launch(kind: TargetKind, rng: &mut Pcg32, bounds: Bounds) -> Self {
        let pos = Vec2::new(0.0, rng.random_range(bounds.height / 2.0..bounds.height));
        let mut body = Body::new(pos, Some(TARGET_RADIUS));
        body.vel = match kind {
            TargetKind::Strong => Vec2::new(
                rng.random_range(-2.0..3.0),
                rng.random_range(1.0..3.0),
            ),
            _ => Vec2::new(
                rng.random_range(1.0..5.0),
                rng.random_range(-2.0..5.0),
            ),
        };
        let hits_left = match kind {
            TargetKind::Strong => STRONG_HITS,
            _ => 1,
        };
        Self {
            kind,
            body,
            hits_left,
        }
    }

    /// Score for one hit; also settles whether the target survives it
    pub fn on_hit(&mut self) -> i32 {
        match self.kind {
            TargetKind::Standard => {
                self.body.alive = false;
                1
            }
            TargetKind::Safe => {
                self.body.alive = false;
                -10
            }
            TargetKind::Strong => {
                self.hits_left -= 1;
                if self.hits_left > 0 {
                    1
                } else {
                    self.body.alive = false;
                    5
                }
            }
        }
    }
}

/// Rifle shot: spawned at the corner of the screen, inside the rifle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub body: Body,
}

impl Bullet {
    pub fn fired(angle: f32) -> Self {
        let mut body = Body::new(Vec2::ZERO, Some(BULLET_RADIUS));
        body.angle = angle;
        body.vel = unit_from_degrees(angle) * BULLET_SPEED;
        Self { body }
    }
}

/// Mouse-tracking rifle anchored at the origin; never moves, only turns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rifle {
    /// Degrees counterclockwise from +x
    pub angle: f32,
}

impl Default for Rifle {
    fn default() -> Self {
        Self { angle: 45.0 }
    }
}

/// Complete simulation state for one endless round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub bounds: Bounds,
    pub rifle: Rifle,
    /// Penalties can push this negative
    pub score: i32,
    pub bullets: Vec<Bullet>,
    pub targets: Vec<Target>,
    rng: Pcg32,
}

impl GameState {
    pub fn new(seed: u64, bounds: Bounds) -> Self {
        Self {
            bounds,
            rifle: Rifle::default(),
            score: 0,
            bullets: Vec::new(),
            targets: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Point the rifle at a spot on the screen
    pub fn aim_at(&mut self, point: Vec2) {
        self.rifle.angle = point.y.atan2(point.x).to_degrees();
    }

    /// Roll the per-tick spawn chance; one in fifty launches a target of a
    /// uniformly random kind
    pub fn roll_spawn(&mut self) {
        if self.rng.random_range(0..SPAWN_ODDS) == 0 {
            let kind = match self.rng.random_range(0..3) {
                0 => TargetKind::Standard,
                1 => TargetKind::Strong,
                _ => TargetKind::Safe,
            };
            let target = Target::launch(kind, &mut self.rng, self.bounds);
            log::debug!("launching {:?} target", target.kind);
            self.targets.push(target);
        }
    }
}
