//! Per-frame simulation step for the rally

use super::state::{BALL_RADIUS, GameState, PADDLE_HEIGHT, PADDLE_WIDTH, SCORE_HIT, SCORE_MISS};

/// Input snapshot for one tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Held: move the paddle up
    pub move_up: bool,
    /// Held: move the paddle down
    pub move_down: bool,
}

/// Advance the rally by one frame: paddle input, ball movement, then the
/// miss, paddle-hit and wall-bounce checks, in that order.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.move_up {
        state.paddle.move_up(state.bounds);
    }
    if input.move_down {
        state.paddle.move_down(state.bounds);
    }

    state.ball.body.advance_free();

    check_miss(state);
    check_hit(state);
    check_bounce(state);
}

/// A ball past the right edge costs points and re-serves
fn check_miss(state: &mut GameState) {
    if state.ball.body.pos.x > state.bounds.width {
        state.score -= SCORE_MISS;
        state.serve_ball();
        log::debug!("miss, score {}", state.score);
    }
}

/// The paddle box is asymmetric (half-extent plus ball radius per axis)
/// and only a ball moving rightward counts as a hit, so a ball that just
/// bounced cannot be hit twice.
fn check_hit(state: &mut GameState) {
    let ball = &state.ball.body;
    let paddle = &state.paddle.body;
    let too_close_x = PADDLE_WIDTH / 2.0 + BALL_RADIUS;
    let too_close_y = PADDLE_HEIGHT / 2.0 + BALL_RADIUS;

    if (ball.pos.x - paddle.pos.x).abs() < too_close_x
        && (ball.pos.y - paddle.pos.y).abs() < too_close_y
        && ball.vel.x > 0.0
    {
        state.ball.bounce_horizontal();
        state.score += SCORE_HIT;
    }
}

/// Left, top and bottom edges reflect the ball, and only when the
/// velocity still points further out
fn check_bounce(state: &mut GameState) {
    let bounds = state.bounds;
    let body = &mut state.ball.body;
    if body.pos.x < 0.0 && body.vel.x < 0.0 {
        body.vel.x = -body.vel.x;
    }
    if body.pos.y < 0.0 && body.vel.y < 0.0 {
        body.vel.y = -body.vel.y;
    }
    if body.pos.y > bounds.height && body.vel.y > 0.0 {
        body.vel.y = -body.vel.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pong::state::SCREEN;
    use glam::Vec2;

    fn quiet_state() -> GameState {
        // Park the ball mid-court so only the scenario under test fires
        let mut state = GameState::new(11, SCREEN);
        state.ball.body.pos = Vec2::new(200.0, 150.0);
        state.ball.body.vel = Vec2::new(1.0, 1.0);
        state
    }

    #[test]
    fn test_miss_costs_five_and_reserves() {
        let mut state = quiet_state();
        state.ball.body.pos = Vec2::new(SCREEN.width + 5.0, 150.0);
        state.ball.body.vel = Vec2::ZERO;

        tick(&mut state, &TickInput::default());

        assert_eq!(state.score, -SCORE_MISS);
        // Ball came back from the serve distribution, not from where it died
        assert!(state.ball.body.pos.x < 10.0);
        assert!(state.ball.body.vel.x >= 1.0);
    }

    #[test]
    fn test_paddle_hit_flips_and_scores() {
        let mut state = quiet_state();
        state.ball.body.pos = state.paddle.body.pos - Vec2::new(12.0, 1.0);
        state.ball.body.vel = Vec2::new(2.0, 0.0);

        tick(&mut state, &TickInput::default());

        assert_eq!(state.score, SCORE_HIT);
        assert!(state.ball.body.vel.x < 0.0);
    }

    #[test]
    fn test_ball_moving_away_is_not_a_hit() {
        let mut state = quiet_state();
        state.ball.body.pos = state.paddle.body.pos - Vec2::new(5.0, 0.0);
        state.ball.body.vel = Vec2::new(-2.0, 0.0);

        tick(&mut state, &TickInput::default());

        assert_eq!(state.score, 0);
        assert!(state.ball.body.vel.x < 0.0);
    }

    #[test]
    fn test_left_wall_bounce() {
        let mut state = quiet_state();
        state.ball.body.pos = Vec2::new(1.0, 150.0);
        state.ball.body.vel = Vec2::new(-3.0, 1.0);

        tick(&mut state, &TickInput::default());

        assert!(state.ball.body.vel.x > 0.0);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_top_and_bottom_bounces() {
        let mut state = quiet_state();
        state.ball.body.pos = Vec2::new(200.0, SCREEN.height - 1.0);
        state.ball.body.vel = Vec2::new(1.0, 3.0);
        tick(&mut state, &TickInput::default());
        assert!(state.ball.body.vel.y < 0.0);

        state.ball.body.pos = Vec2::new(200.0, 1.0);
        state.ball.body.vel = Vec2::new(1.0, -3.0);
        tick(&mut state, &TickInput::default());
        assert!(state.ball.body.vel.y > 0.0);
    }

    #[test]
    fn test_held_keys_move_the_paddle() {
        let mut state = quiet_state();
        let start = state.paddle.body.pos.y;
        tick(
            &mut state,
            &TickInput {
                move_up: true,
                move_down: false,
            },
        );
        assert_eq!(state.paddle.body.pos.y, start + 5.0);
        tick(
            &mut state,
            &TickInput {
                move_up: false,
                move_down: true,
            },
        );
        assert_eq!(state.paddle.body.pos.y, start);
    }

    #[test]
    fn test_determinism_under_fixed_seed() {
        let mut a = GameState::new(21, SCREEN);
        let mut b = GameState::new(21, SCREEN);
        let input = TickInput {
            move_up: true,
            move_down: false,
        };
        for _ in 0..500 {
            tick(&mut a, &input);
            tick(&mut b, &input);
        }
        assert_eq!(a.score, b.score);
        assert_eq!(a.ball.body.pos, b.ball.body.pos);
        assert_eq!(a.ball.body.vel, b.ball.body.vel);
    }
}
