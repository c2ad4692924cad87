//! Headless demo runner
//!
//! Seeds each game, scripts a few seconds of input, and logs what the
//! cores do. The real presentation layer owns windows, sound and menu
//! screens; this binary exists to watch the simulations tick without one.

use glam::Vec2;

use arcade_trio::{GameEvent, asteroids, pong, skeet};

fn main() {
    env_logger::init();

    run_asteroids();
    run_pong();
    run_skeet();
}

fn run_asteroids() {
    let mut state = asteroids::GameState::new(7, asteroids::SCREEN, asteroids::Difficulty::Hard);
    let input = asteroids::TickInput {
        thrust: true,
        fire: true,
        ..Default::default()
    };

    let mut sounds = 0usize;
    for _ in 0..3600 {
        asteroids::tick(&mut state, &input);
        for event in state.drain_events() {
            let GameEvent::Sound(cue) = event;
            log::info!("asteroids sound cue: {cue:?}");
            sounds += 1;
        }
        if state.is_cleared() || state.is_defeated() {
            break;
        }
    }

    println!(
        "asteroids: tick {}, {} rocks left, {} lives, cleared={}, defeated={}, {} sound cues",
        state.frame,
        state.rocks.len(),
        state.lives(),
        state.is_cleared(),
        state.is_defeated(),
        sounds,
    );
}

fn run_pong() {
    let mut state = pong::GameState::new(7, pong::SCREEN);

    for _ in 0..3600 {
        // Chase the ball, the same way a bored human would
        let input = pong::TickInput {
            move_up: state.ball.body.pos.y > state.paddle.body.pos.y,
            move_down: state.ball.body.pos.y < state.paddle.body.pos.y,
        };
        pong::tick(&mut state, &input);
    }

    println!("pong: score {} after 3600 ticks", state.score);
}

fn run_skeet() {
    let mut state = skeet::GameState::new(7, skeet::SCREEN);

    for i in 0..3600u32 {
        let input = skeet::TickInput {
            aim: Some(Vec2::new(300.0, 250.0)),
            fire: i % 5 == 0,
        };
        skeet::tick(&mut state, &input);
    }

    println!(
        "skeet: score {}, {} targets in flight",
        state.score,
        state.targets.len()
    );

    // The state is plain data; a save is one serialize away
    let snapshot = serde_json::to_string(&state).expect("state serializes");
    log::debug!("skeet state snapshot: {} bytes", snapshot.len());
}
