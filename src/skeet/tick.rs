//! Per-frame simulation step for the shooting range

use glam::Vec2;

use crate::collision::overlaps;

use super::state::{Bullet, GameState};

/// Input snapshot for one tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Where the pointer is aiming this frame, if it moved
    pub aim: Option<Vec2>,
    /// Pressed this frame: fire one bullet along the rifle angle
    pub fire: bool,
}

/// Advance the range by one frame: aim and fire, maybe launch a target,
/// move everything, mark what left the screen, then resolve hits and
/// sweep the dead.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if let Some(point) = input.aim {
        state.aim_at(point);
    }
    if input.fire {
        let bullet = Bullet::fired(state.rifle.angle);
        state.bullets.push(bullet);
    }

    state.roll_spawn();

    let bounds = state.bounds;
    for bullet in &mut state.bullets {
        bullet.body.advance_free();
        bullet.body.cull_past_far_edges(bounds);
    }
    for target in &mut state.targets {
        target.body.advance_free();
        target.body.cull_past_far_edges(bounds);
    }

    resolve_collisions(state);

    state.bullets.retain(|bullet| bullet.body.alive);
    state.targets.retain(|target| target.body.alive);
}

/// Every live bullet against every live target; a bullet spends itself on
/// its first match and the alive checks keep it from scoring twice
fn resolve_collisions(state: &mut GameState) {
    let mut scored = 0;
    for bullet in &mut state.bullets {
        for target in &mut state.targets {
            if let (Some(a), Some(b)) = (bullet.body.hitbox(), target.body.hitbox()) {
                if overlaps(a, b) {
                    bullet.body.alive = false;
                    scored += target.on_hit();
                }
            }
        }
    }
    if scored != 0 {
        state.score += scored;
        log::debug!("score now {}", state.score);
    }
}
