//! Ball, paddle and score for the Pong court

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::entity::{Body, Bounds};

/// Canonical screen extent for this game
pub const SCREEN: Bounds = Bounds::new(400.0, 300.0);

pub const BALL_RADIUS: f32 = 10.0;

pub const PADDLE_WIDTH: f32 = 10.0;
pub const PADDLE_HEIGHT: f32 = 50.0;
/// Pixels the paddle moves per held key per tick
pub const MOVE_AMOUNT: f32 = 5.0;

pub const SCORE_HIT: i32 = 1;
pub const SCORE_MISS: i32 = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub body: Body,
}

impl Ball {
    /// Serve from along the left edge with a fresh random drift.
    ///
    /// The vertical range deliberately overshoots the screen top so a
    /// serve can start just above the visible court.
    pub fn serve(rng: &mut Pcg32, bounds: Bounds) -> Self {
        let pos = Vec2::new(
            rng.random_range(1.0..10.0),
            rng.random_range(1.0..bounds.height + 30.0),
        );
        let mut body = Body::new(pos, Some(BALL_RADIUS));
        body.vel = Vec2::new(rng.random_range(1.0..5.0), rng.random_range(1.0..5.0));
        Self { body }
    }

    pub fn bounce_horizontal(&mut self) {
        self.body.vel.x = -self.body.vel.x;
    }

    pub fn bounce_vertical(&mut self) {
        self.body.vel.y = -self.body.vel.y;
    }
}

/// Vertical-only paddle hugging the right edge.
///
/// It collides through its own box test in the tick, not the shared
/// radius test, so its body carries no radius.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub body: Body,
}

impl Paddle {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            body: Body::new(
                Vec2::new(bounds.width - 10.0, bounds.height / 2.0),
                None,
            ),
        }
    }

    /// Step up, stopping where the body would start to leave the screen
    pub fn move_up(&mut self, bounds: Bounds) {
        if self.body.pos.y < bounds.height - 20.0 {
            self.body.pos.y += MOVE_AMOUNT;
        }
    }

    /// Step down, with the matching stop at the bottom
    pub fn move_down(&mut self, bounds: Bounds) {
        if self.body.pos.y > bounds.height - 280.0 {
            self.body.pos.y -= MOVE_AMOUNT;
        }
    }
}

/// Complete simulation state for one endless rally
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub bounds: Bounds,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Hits add a point, misses take five; goes negative freely
    pub score: i32,
    rng: Pcg32,
}

impl GameState {
    pub fn new(seed: u64, bounds: Bounds) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let ball = Ball::serve(&mut rng, bounds);
        Self {
            bounds,
            ball,
            paddle: Paddle::new(bounds),
            score: 0,
            rng,
        }
    }

    /// Put a fresh ball in play (after every miss)
    pub fn serve_ball(&mut self) {
        self.ball = Ball::serve(&mut self.rng, self.bounds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_ranges() {
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..100 {
            let ball = Ball::serve(&mut rng, SCREEN);
            assert!(ball.body.pos.x >= 1.0 && ball.body.pos.x < 10.0);
            assert!(ball.body.pos.y >= 1.0 && ball.body.pos.y < 330.0);
            assert!(ball.body.vel.x >= 1.0 && ball.body.vel.x < 5.0);
            assert!(ball.body.vel.y >= 1.0 && ball.body.vel.y < 5.0);
        }
    }

    #[test]
    fn test_bounces_flip_one_component() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut ball = Ball::serve(&mut rng, SCREEN);
        let vel = ball.body.vel;
        ball.bounce_horizontal();
        assert_eq!(ball.body.vel, Vec2::new(-vel.x, vel.y));
        ball.bounce_vertical();
        assert_eq!(ball.body.vel, Vec2::new(-vel.x, -vel.y));
    }

    #[test]
    fn test_paddle_starts_on_the_right_edge() {
        let paddle = Paddle::new(SCREEN);
        assert_eq!(paddle.body.pos, Vec2::new(390.0, 150.0));
        assert!(paddle.body.hitbox().is_none());
    }

    #[test]
    fn test_paddle_stops_at_travel_limits() {
        let mut paddle = Paddle::new(SCREEN);
        // Ride the top stop
        for _ in 0..100 {
            paddle.move_up(SCREEN);
        }
        let top = paddle.body.pos.y;
        paddle.move_up(SCREEN);
        assert_eq!(paddle.body.pos.y, top);
        assert!(top >= SCREEN.height - 20.0);

        // And the bottom stop
        for _ in 0..200 {
            paddle.move_down(SCREEN);
        }
        let bottom = paddle.body.pos.y;
        paddle.move_down(SCREEN);
        assert_eq!(paddle.body.pos.y, bottom);
        assert!(bottom <= SCREEN.height - 280.0);
    }
}
