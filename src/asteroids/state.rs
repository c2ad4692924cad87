//! Entities and game state for the rock field

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::entity::{Body, Bounds};
use crate::events::GameEvent;
use crate::{facing_from_degrees, unit_from_degrees};

/// Canonical screen extent for this game
pub const SCREEN: Bounds = Bounds::new(800.0, 600.0);

pub const BULLET_RADIUS: f32 = 30.0;
pub const BULLET_SPEED: f32 = 10.0;
/// Ticks a player bullet stays in flight
pub const BULLET_LIFE: u32 = 60;

/// Degrees of rotation per held turn key per tick
pub const SHIP_TURN_AMOUNT: f32 = 3.0;
/// Velocity gained per held thrust key per tick
pub const SHIP_THRUST_AMOUNT: f32 = 0.25;
pub const SHIP_RADIUS: f32 = 30.0;

pub const INITIAL_ROCK_COUNT: usize = 5;

/// Ticks between saucer shots
pub const ALIEN_FIRE_INTERVAL: u64 = 60;

const BIG_ROCK_SPIN: f32 = 1.0;
const BIG_ROCK_SPEED: f32 = 1.5;
const BIG_ROCK_RADIUS: f32 = 15.0;
// Every large rock drifts along this same shallow heading; only the spawn
// position is random.
const BIG_ROCK_HEADING: f32 = 1.0;

const MEDIUM_ROCK_SPIN: f32 = -2.0;
const MEDIUM_ROCK_RADIUS: f32 = 5.0;

const SMALL_ROCK_SPIN: f32 = 5.0;
const SMALL_ROCK_RADIUS: f32 = 2.0;

/// Size class of a rock; fixes its radius, spin and split outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RockSize {
    Large,
    Medium,
    Small,
}

impl RockSize {
    /// Degrees of rotation added every tick
    pub fn spin(self) -> f32 {
        match self {
            RockSize::Large => BIG_ROCK_SPIN,
            RockSize::Medium => MEDIUM_ROCK_SPIN,
            RockSize::Small => SMALL_ROCK_SPIN,
        }
    }

    pub fn radius(self) -> f32 {
        match self {
            RockSize::Large => BIG_ROCK_RADIUS,
            RockSize::Medium => MEDIUM_ROCK_RADIUS,
            RockSize::Small => SMALL_ROCK_RADIUS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rock {
    pub size: RockSize,
    pub body: Body,
}

impl Rock {
    /// Large rock at a random point on the screen, drifting at the fixed
    /// speed and heading
    pub fn large(rng: &mut Pcg32, bounds: Bounds) -> Self {
        let pos = Vec2::new(
            rng.random_range(0.0..bounds.width),
            rng.random_range(0.0..bounds.height),
        );
        let mut body = Body::new(pos, Some(BIG_ROCK_RADIUS));
        body.vel = unit_from_degrees(BIG_ROCK_HEADING) * BIG_ROCK_SPEED;
        body.spin = BIG_ROCK_SPIN;
        Self {
            size: RockSize::Large,
            body,
        }
    }

    fn offspring(size: RockSize, pos: Vec2, vel: Vec2) -> Self {
        let mut body = Body::new(pos, Some(size.radius()));
        body.vel = vel;
        body.spin = size.spin();
        Self { size, body }
    }

    /// Break this rock apart: it dies and its offspring are returned for
    /// the caller to buffer until the collision pass is over.
    ///
    /// Offspring start from a zero velocity and take only the documented
    /// offset component; the parent's other component is not inherited.
    pub fn split(&mut self) -> Vec<Rock> {
        self.body.alive = false;
        let pos = self.body.pos;
        let vel = self.body.vel;
        match self.size {
            RockSize::Large => vec![
                Rock::offspring(RockSize::Medium, pos, Vec2::new(0.0, vel.y + 2.0)),
                Rock::offspring(RockSize::Medium, pos, Vec2::new(0.0, vel.y - 2.0)),
                Rock::offspring(RockSize::Small, pos, Vec2::new(vel.x + 5.0, 0.0)),
            ],
            RockSize::Medium => vec![
                Rock::offspring(RockSize::Small, pos, vel + Vec2::splat(1.5)),
                Rock::offspring(RockSize::Small, pos, vel - Vec2::splat(1.5)),
            ],
            RockSize::Small => Vec::new(),
        }
    }
}

/// The player's ship; wraps at the edges like the rocks do
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub body: Body,
}

impl Ship {
    pub fn new(bounds: Bounds) -> Self {
        let mut body = Body::new(bounds.center(), Some(SHIP_RADIUS));
        body.angle = 1.0;
        Self { body }
    }

    pub fn turn_left(&mut self) {
        self.body.angle += SHIP_TURN_AMOUNT;
    }

    pub fn turn_right(&mut self) {
        self.body.angle -= SHIP_TURN_AMOUNT;
    }

    /// Accelerate along the current facing
    pub fn thrust(&mut self) {
        self.body.vel += facing_from_degrees(self.body.angle) * SHIP_THRUST_AMOUNT;
    }

    /// Accelerate against the current facing
    pub fn reverse_thrust(&mut self) {
        self.body.vel -= facing_from_degrees(self.body.angle) * SHIP_THRUST_AMOUNT;
    }
}

/// Player bullet: wraps like the ship and burns out after a fixed number
/// of ticks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub body: Body,
    /// Remaining ticks of flight
    pub ttl: u32,
}

impl Bullet {
    /// Fired from the ship: starts on the ship and flies along its facing
    pub fn fired_from(ship: &Ship) -> Self {
        let mut body = Body::new(ship.body.pos, Some(BULLET_RADIUS));
        // The laser sprite is drawn sideways relative to the ship art
        body.angle = ship.body.angle - 90.0;
        body.vel = facing_from_degrees(ship.body.angle) * BULLET_SPEED;
        Self {
            body,
            ttl: BULLET_LIFE,
        }
    }

    /// Wrap-advance, then burn one tick of lifetime
    pub fn advance(&mut self, bounds: Bounds) {
        self.body.advance_wrapping(bounds);
        self.ttl = self.ttl.saturating_sub(1);
        if self.ttl == 0 {
            self.body.alive = false;
        }
    }
}

/// The saucer: decorative (never collides itself), parked in the upper
/// left, re-aimed at the ship every tick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alien {
    pub body: Body,
}

impl Alien {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            body: Body::new(Self::station(bounds), None),
        }
    }

    /// Parked position near the upper-left corner
    pub fn station(bounds: Bounds) -> Vec2 {
        Vec2::new(bounds.width / 8.0, bounds.height - 80.0)
    }
}

/// Saucer fire: wrap-advances like everything else, then dies the moment
/// any coordinate leaves the screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlienShot {
    pub body: Body,
}

impl AlienShot {
    /// Fired from the saucer along the aim angle (degrees)
    pub fn fired(pos: Vec2, aim: f32) -> Self {
        let mut body = Body::new(pos, Some(BULLET_RADIUS));
        body.angle = aim;
        body.vel = unit_from_degrees(aim) * BULLET_SPEED;
        Self { body }
    }

    pub fn advance(&mut self, bounds: Bounds) {
        self.body.advance_wrapping(bounds);
        self.body.cull_outside(bounds);
    }
}

/// Decorative lives marker; one is consumed per ship hit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Heart {
    pub body: Body,
}

impl Heart {
    /// The three markers sit in a row along the top-right edge
    pub fn row(bounds: Bounds) -> Vec<Heart> {
        [1.3f32, 1.2, 1.1]
            .iter()
            .map(|divisor| Heart {
                body: Body::new(
                    Vec2::new(bounds.width / divisor, bounds.height - 30.0),
                    None,
                ),
            })
            .collect()
    }
}

/// Ruleset selected on the start screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    /// Endless respawns, no lives, no defeat
    Easy,
    /// Three hearts; losing them all ends the game
    Normal,
    /// Normal plus the saucer shooting back
    Hard,
}

impl Difficulty {
    pub fn has_hearts(self) -> bool {
        !matches!(self, Difficulty::Easy)
    }

    pub fn has_alien(self) -> bool {
        matches!(self, Difficulty::Hard)
    }
}

/// Terminal status reported to the presentation layer, which owns the
/// victory and game-over screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Playing,
    Cleared,
    Defeated,
}

/// Complete simulation state for one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub bounds: Bounds,
    pub difficulty: Difficulty,
    pub phase: Phase,
    pub rocks: Vec<Rock>,
    pub bullets: Vec<Bullet>,
    pub ships: Vec<Ship>,
    pub hearts: Vec<Heart>,
    pub alien: Option<Alien>,
    pub alien_shots: Vec<AlienShot>,
    /// Tick counter driving the saucer's fire cadence
    pub frame: u64,
    rng: Pcg32,
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(seed: u64, bounds: Bounds, difficulty: Difficulty) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let rocks = (0..INITIAL_ROCK_COUNT)
            .map(|_| Rock::large(&mut rng, bounds))
            .collect();
        let hearts = if difficulty.has_hearts() {
            Heart::row(bounds)
        } else {
            Vec::new()
        };
        let alien = if difficulty.has_alien() {
            Some(Alien::new(bounds))
        } else {
            None
        };
        Self {
            bounds,
            difficulty,
            phase: Phase::Playing,
            rocks,
            bullets: Vec::new(),
            ships: vec![Ship::new(bounds)],
            hearts,
            alien,
            alien_shots: Vec::new(),
            frame: 0,
            rng,
            events: Vec::new(),
        }
    }

    /// Remaining lives, as shown by the heart row
    pub fn lives(&self) -> usize {
        self.hearts.len()
    }

    pub fn is_cleared(&self) -> bool {
        matches!(self.phase, Phase::Cleared)
    }

    pub fn is_defeated(&self) -> bool {
        matches!(self.phase, Phase::Defeated)
    }

    /// Take every event queued since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}
