//! Per-frame simulation step for the rock field

use crate::collision::overlaps;
use crate::entity::Body;
use crate::events::{GameEvent, SoundCue};

use super::state::{
    ALIEN_FIRE_INTERVAL, Alien, AlienShot, Bullet, GameState, Phase, Ship,
};

/// Input snapshot for one tick: held keys plus the discrete fire press
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Held: rotate the ship counterclockwise
    pub turn_left: bool,
    /// Held: rotate the ship clockwise
    pub turn_right: bool,
    /// Held: accelerate along the facing
    pub thrust: bool,
    /// Held: accelerate against the facing
    pub reverse_thrust: bool,
    /// Pressed this frame: fire one shot
    pub fire: bool,
}

/// Advance the game by one frame: inputs, movement, collisions, cleanup,
/// terminal check — in that order. No-op once the run has ended.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if !matches!(state.phase, Phase::Playing) {
        return;
    }
    state.frame += 1;

    apply_input(state, input);
    advance_all(state);
    resolve_collisions(state);
    sweep_dead(state);
    check_terminal(state);
}

fn apply_input(state: &mut GameState, input: &TickInput) {
    for ship in &mut state.ships {
        if input.turn_left {
            ship.turn_left();
        }
        if input.turn_right {
            ship.turn_right();
        }
        if input.thrust {
            ship.thrust();
        }
        if input.reverse_thrust {
            ship.reverse_thrust();
        }
    }

    if input.fire {
        // Firing with no ship in play is a no-op
        if let Some(bullet) = state.ships.first().map(Bullet::fired_from) {
            state.bullets.push(bullet);
            state.push_event(GameEvent::Sound(SoundCue::Fire));
        }
    }
}

fn advance_all(state: &mut GameState) {
    let bounds = state.bounds;
    for rock in &mut state.rocks {
        rock.body.advance_wrapping(bounds);
    }
    for bullet in &mut state.bullets {
        bullet.advance(bounds);
    }
    for ship in &mut state.ships {
        ship.body.advance_wrapping(bounds);
    }
    for shot in &mut state.alien_shots {
        shot.advance(bounds);
    }
    drive_alien(state);
}

/// Keep the saucer parked, aimed at the ship, and firing on its cadence
fn drive_alien(state: &mut GameState) {
    let Some(alien) = &mut state.alien else {
        return;
    };
    alien.body.pos = Alien::station(state.bounds);

    let Some(ship) = state.ships.first() else {
        return;
    };
    let to_ship = ship.body.pos - alien.body.pos;
    let aim = to_ship.y.atan2(to_ship.x).to_degrees();
    // The saucer sprite faces the ship; its art is drawn rotated
    alien.body.angle = aim - 270.0;

    if state.frame % ALIEN_FIRE_INTERVAL == 0 {
        state.alien_shots.push(AlienShot::fired(alien.body.pos, aim));
        log::debug!("saucer fired at tick {}", state.frame);
    }
}

fn resolve_collisions(state: &mut GameState) {
    // Offspring and respawns are buffered during the pass and applied
    // after it, so nothing joins a pool that is still being scanned.
    let mut hatched = Vec::new();
    let mut lost_ships = 0usize;

    // Bullets consume rocks; each bullet spends itself on its first match
    // and the alive checks keep it from awarding twice.
    for bullet in &mut state.bullets {
        for rock in &mut state.rocks {
            if hit(&bullet.body, &rock.body) {
                bullet.body.alive = false;
                hatched.extend(rock.split());
            }
        }
    }

    // Rocks ram the ship: both die
    for rock in &mut state.rocks {
        for ship in &mut state.ships {
            if hit(&rock.body, &ship.body) {
                ship.body.alive = false;
                rock.body.alive = false;
                lost_ships += 1;
            }
        }
    }

    // Hard ruleset: player bullets knock down saucer fire, and saucer fire
    // kills the ship like a rock does
    for bullet in &mut state.bullets {
        for shot in &mut state.alien_shots {
            if hit(&bullet.body, &shot.body) {
                bullet.body.alive = false;
                shot.body.alive = false;
            }
        }
    }
    for shot in &mut state.alien_shots {
        for ship in &mut state.ships {
            if hit(&shot.body, &ship.body) {
                ship.body.alive = false;
                shot.body.alive = false;
                lost_ships += 1;
            }
        }
    }

    // A split rock's children must not collide in the tick that spawned
    // them, so they join the field only now.
    state.rocks.extend(hatched);

    for _ in 0..lost_ships {
        state.push_event(GameEvent::Sound(SoundCue::Impact));
        if state.difficulty.has_hearts() {
            if let Some(heart) = state.hearts.iter_mut().find(|h| h.body.alive) {
                heart.body.alive = false;
            }
        }
        // A fresh ship appears at center the same tick the old one dies
        let replacement = Ship::new(state.bounds);
        state.ships.push(replacement);
        log::debug!("ship destroyed at tick {}, respawning", state.frame);
    }
}

/// Pool-major pair test through the shared detector; bodies without a
/// radius never register
fn hit(a: &Body, b: &Body) -> bool {
    match (a.hitbox(), b.hitbox()) {
        (Some(a), Some(b)) => overlaps(a, b),
        _ => false,
    }
}

fn sweep_dead(state: &mut GameState) {
    state.rocks.retain(|rock| rock.body.alive);
    state.bullets.retain(|bullet| bullet.body.alive);
    state.ships.retain(|ship| ship.body.alive);
    state.hearts.retain(|heart| heart.body.alive);
    state.alien_shots.retain(|shot| shot.body.alive);
}

fn check_terminal(state: &mut GameState) {
    if state.rocks.is_empty() {
        state.phase = Phase::Cleared;
        state.push_event(GameEvent::Sound(SoundCue::Victory));
        log::info!("field cleared after {} ticks", state.frame);
        return;
    }
    if state.difficulty.has_hearts() && state.hearts.is_empty() {
        state.phase = Phase::Defeated;
        log::info!("out of lives after {} ticks", state.frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asteroids::state::{Difficulty, Rock, RockSize, SCREEN};
    use glam::Vec2;

    /// A state with the random field replaced by one parked rock, so tests
    /// control exactly what collides
    fn state_with_parked_rock(difficulty: Difficulty) -> GameState {
        let mut state = GameState::new(7, SCREEN, difficulty);
        state.rocks.clear();
        state.rocks.push(parked_rock(Vec2::new(700.0, 500.0)));
        state
    }

    fn parked_rock(pos: Vec2) -> Rock {
        use rand::SeedableRng;
        let mut rng = rand_pcg::Pcg32::seed_from_u64(0);
        let mut rock = Rock::large(&mut rng, SCREEN);
        rock.body.pos = pos;
        rock.body.vel = Vec2::ZERO;
        rock
    }

    fn parked_small_rock(pos: Vec2) -> Rock {
        Rock {
            size: RockSize::Small,
            body: Body::new(pos, Some(2.0)),
        }
    }

    fn fire_only() -> TickInput {
        TickInput {
            fire: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_fire_spawns_bullet_and_sound() {
        let mut state = state_with_parked_rock(Difficulty::Easy);
        tick(&mut state, &fire_only());
        assert_eq!(state.bullets.len(), 1);
        let events = state.drain_events();
        assert!(events.contains(&GameEvent::Sound(SoundCue::Fire)));
    }

    #[test]
    fn test_fire_without_ship_is_noop() {
        let mut state = state_with_parked_rock(Difficulty::Easy);
        state.ships.clear();
        tick(&mut state, &fire_only());
        assert!(state.bullets.is_empty());
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_split_offspring_join_after_the_pass() {
        let mut state = state_with_parked_rock(Difficulty::Easy);
        // Park a spent-velocity bullet on top of the rock
        let mut bullet = Bullet::fired_from(&state.ships[0]);
        bullet.body.pos = state.rocks[0].body.pos;
        bullet.body.vel = Vec2::ZERO;
        state.bullets.push(bullet);

        tick(&mut state, &TickInput::default());

        // Parent gone, exactly three offspring, bullet consumed
        assert_eq!(state.rocks.len(), 3);
        assert!(state.rocks.iter().all(|r| r.size != RockSize::Large));
        assert!(state.bullets.is_empty());
    }

    #[test]
    fn test_one_bullet_never_splits_two_rocks() {
        let mut state = state_with_parked_rock(Difficulty::Easy);
        state.rocks.push(parked_rock(Vec2::new(700.0, 500.0)));
        let mut bullet = Bullet::fired_from(&state.ships[0]);
        bullet.body.pos = Vec2::new(700.0, 500.0);
        bullet.body.vel = Vec2::ZERO;
        state.bullets.push(bullet);

        tick(&mut state, &TickInput::default());

        // One large rock split (3 offspring), the other untouched
        assert_eq!(state.rocks.len(), 4);
        assert_eq!(
            state
                .rocks
                .iter()
                .filter(|r| r.size == RockSize::Large)
                .count(),
            1
        );
    }

    #[test]
    fn test_ship_hit_respawns_at_center_and_costs_a_heart() {
        let mut state = state_with_parked_rock(Difficulty::Normal);
        state.rocks[0].body.pos = state.ships[0].body.pos;
        // A far-off second rock keeps the kill from also clearing the field
        state.rocks.push(parked_rock(Vec2::new(50.0, 50.0)));

        tick(&mut state, &TickInput::default());

        assert_eq!(state.ships.len(), 1);
        assert_eq!(state.ships[0].body.pos, SCREEN.center());
        assert_eq!(state.lives(), 2);
        assert_eq!(state.phase, Phase::Playing);
        assert!(
            state
                .drain_events()
                .contains(&GameEvent::Sound(SoundCue::Impact))
        );
        // The ramming rock died outright, no split
        assert_eq!(state.rocks.len(), 1);
    }

    #[test]
    fn test_easy_never_defeated() {
        let mut state = state_with_parked_rock(Difficulty::Easy);
        state.rocks[0].body.pos = state.ships[0].body.pos;
        state.rocks.push(parked_rock(Vec2::new(50.0, 50.0)));
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, Phase::Playing);
        assert_eq!(state.ships.len(), 1);
        assert_eq!(state.lives(), 0);
    }

    #[test]
    fn test_clearing_the_field_wins() {
        let mut state = state_with_parked_rock(Difficulty::Normal);
        state.rocks[0] = parked_small_rock(Vec2::new(700.0, 500.0));
        let mut bullet = Bullet::fired_from(&state.ships[0]);
        bullet.body.pos = Vec2::new(700.0, 500.0);
        bullet.body.vel = Vec2::ZERO;
        state.bullets.push(bullet);

        tick(&mut state, &TickInput::default());

        assert!(state.is_cleared());
        assert!(
            state
                .drain_events()
                .contains(&GameEvent::Sound(SoundCue::Victory))
        );

        // Terminal phases freeze the simulation
        let frame = state.frame;
        tick(&mut state, &fire_only());
        assert_eq!(state.frame, frame);
        assert!(state.bullets.is_empty());
    }

    #[test]
    fn test_losing_the_last_heart_defeats() {
        let mut state = state_with_parked_rock(Difficulty::Normal);
        state.hearts.truncate(1);
        state.rocks[0].body.pos = state.ships[0].body.pos;
        // Keep a second rock so the kill does not also clear the field
        state.rocks.push(parked_rock(Vec2::new(50.0, 50.0)));

        tick(&mut state, &TickInput::default());

        assert!(state.is_defeated());
        assert_eq!(state.lives(), 0);
    }

    #[test]
    fn test_saucer_fires_every_sixtieth_tick() {
        let mut state = state_with_parked_rock(Difficulty::Hard);
        for _ in 0..59 {
            tick(&mut state, &TickInput::default());
        }
        assert!(state.alien_shots.is_empty());
        tick(&mut state, &TickInput::default());
        assert_eq!(state.alien_shots.len(), 1);

        // The shot heads toward the ship at bullet speed
        let shot = &state.alien_shots[0];
        let to_ship = state.ships[0].body.pos - Alien::station(SCREEN);
        let expected = to_ship.normalize() * crate::asteroids::state::BULLET_SPEED;
        assert!((shot.body.vel - expected).length() < 1e-3);
    }

    #[test]
    fn test_determinism_under_fixed_seed_and_script() {
        let mut a = GameState::new(99, SCREEN, Difficulty::Hard);
        let mut b = GameState::new(99, SCREEN, Difficulty::Hard);
        let script = [
            TickInput {
                thrust: true,
                ..Default::default()
            },
            fire_only(),
            TickInput {
                turn_left: true,
                ..Default::default()
            },
            TickInput::default(),
        ];
        for _ in 0..30 {
            for input in &script {
                tick(&mut a, input);
                tick(&mut b, input);
            }
        }
        assert_eq!(a.frame, b.frame);
        assert_eq!(a.rocks.len(), b.rocks.len());
        for (ra, rb) in a.rocks.iter().zip(&b.rocks) {
            assert_eq!(ra.body.pos, rb.body.pos);
        }
        assert_eq!(a.ships[0].body.pos, b.ships[0].body.pos);
    }
}
