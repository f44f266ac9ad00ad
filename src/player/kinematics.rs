//! Movement integration, roll FSM, jump/coyote/buffer, collision resolution
//! (spec §4.B). Grounded on the teacher's accel/friction integration shape
//! (`systems/movement.rs::movement_system`).

use crate::constants::*;
use crate::grids::obstacles::Obstacle;
use crate::math::{clamp01, normalize};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RollPhase {
    Idle,
    Active,
    Sliding,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollState {
    pub state: RollPhase,
    pub start_time: f32,
    pub dir: (f32, f32),
    pub last_roll_time: f32,
}

impl Default for RollState {
    fn default() -> Self {
        RollState { state: RollPhase::Idle, start_time: TIME_SENTINEL, dir: (1.0, 0.0), last_roll_time: TIME_SENTINEL }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct JumpState {
    pub buffered: bool,
}

/// Attempts to start a roll. Requires `stamina >= 0.50` and the cooldown
/// since the last roll (spec §4.B). Returns `true` on success and consumes
/// the stamina cost.
pub fn try_start_roll(roll: &mut RollState, stamina: &mut f32, facing: (f32, f32), now: f32) -> bool {
    if *stamina < ROLL_STAMINA_COST || now - roll.last_roll_time < ROLL_COOLDOWN {
        return false;
    }
    *stamina -= ROLL_STAMINA_COST;
    roll.state = RollPhase::Active;
    roll.start_time = now;
    roll.dir = facing;
    roll.last_roll_time = now;
    true
}

pub fn advance_roll(roll: &mut RollState, now: f32) {
    match roll.state {
        RollPhase::Active if now - roll.start_time >= ROLL_IFRAME_DURATION => {
            roll.state = RollPhase::Sliding;
        }
        RollPhase::Sliding if now - roll.start_time >= ROLL_IFRAME_DURATION + ROLL_SLIDE_DURATION => {
            roll.state = RollPhase::Idle;
        }
        _ => {}
    }
}

/// Computes desired velocity for this tick, honoring roll/blocking/latch
/// overrides (spec §4.B).
#[allow(clippy::too_many_arguments)]
pub fn desired_velocity(
    input: (f32, f32),
    roll: &RollState,
    speed_mult: f32,
    status_movement_mod: f32,
    blocking: bool,
    latched: bool,
) -> (f32, f32) {
    if blocking || latched {
        return (0.0, 0.0);
    }
    match roll.state {
        RollPhase::Active => {
            let (dx, dy) = roll.dir;
            (dx * BASE_SPEED * ROLL_SPEED_MULT, dy * BASE_SPEED * ROLL_SPEED_MULT)
        }
        RollPhase::Sliding => {
            let len = (input.0 * input.0 + input.1 * input.1).sqrt();
            let (ix, iy) = if len > 1.0 { normalize(input.0, input.1) } else { input };
            let speed = BASE_SPEED * speed_mult * status_movement_mod * ROLL_SLIDE_INPUT_MULT;
            (ix * speed, iy * speed)
        }
        RollPhase::Idle => {
            let len = (input.0 * input.0 + input.1 * input.1).sqrt();
            let (ix, iy) = if len > 1.0 { normalize(input.0, input.1) } else { input };
            let speed = BASE_SPEED * speed_mult * status_movement_mod;
            (ix * speed, iy * speed)
        }
    }
}

pub fn friction_mult(roll: &RollState) -> f32 {
    match roll.state {
        RollPhase::Sliding => FRICTION * ROLL_SLIDE_FRICTION_MULT,
        _ => FRICTION,
    }
}

/// Integrates velocity toward `desired` and applies friction, in place.
pub fn integrate(vx: &mut f32, vy: &mut f32, desired: (f32, f32), friction: f32, dt: f32) {
    *vx += (desired.0 - *vx) * ACCEL * dt;
    *vy += (desired.1 - *vy) * ACCEL * dt;
    let decay = (1.0 - friction * dt).max(0.0);
    *vx *= decay;
    *vy *= decay;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlapKind {
    Landing,
    Ceiling,
    Wall,
    General,
}

fn classify_overlap(dx: f32, dy: f32, d: f32, vy: f32) -> OverlapKind {
    if d < 1e-8 {
        return OverlapKind::General;
    }
    if dy < 0.0 && vy > 0.0 {
        return OverlapKind::Landing;
    }
    if dy > 0.0 && vy < 0.0 {
        return OverlapKind::Ceiling;
    }
    if (dx / d).abs() > 0.6 {
        return OverlapKind::Wall;
    }
    OverlapKind::General
}

/// Resolves player-vs-obstacle collisions in place; returns `(grounded,
/// wall_sliding)` flags for this tick.
pub fn resolve_obstacle_collisions(
    x: &mut f32,
    y: &mut f32,
    vx: &mut f32,
    vy: &mut f32,
    player_radius: f32,
    obstacles: &[Obstacle],
    input_into_wall: bool,
) -> (bool, bool) {
    let mut grounded = false;
    let mut wall_sliding = false;
    for obstacle in obstacles {
        let dx = *x - obstacle.x;
        let dy = *y - obstacle.y;
        let d = (dx * dx + dy * dy).sqrt();
        let min_dist = player_radius + obstacle.r;
        if d >= min_dist {
            continue;
        }
        let kind = classify_overlap(dx, dy, d, *vy);
        let (nx, ny) = normalize(dx, dy);
        let push = min_dist - d;
        *x += nx * push;
        *y += ny * push;
        match kind {
            OverlapKind::Landing => {
                grounded = true;
                *vy = 0.0;
            }
            OverlapKind::Ceiling => {
                *vy = 0.0;
            }
            OverlapKind::Wall => {
                *vx = 0.0;
                if !grounded && *vy > 0.1 && input_into_wall {
                    wall_sliding = true;
                    *vy *= WALL_SLIDE_DAMPING;
                }
            }
            OverlapKind::General => {
                let into_surface = (*vx * nx + *vy * ny).min(0.0);
                *vx -= into_surface * nx;
                *vy -= into_surface * ny;
            }
        }
    }
    (grounded, wall_sliding)
}

pub fn clamp_to_world(x: &mut f32, y: &mut f32) {
    *x = clamp01(*x);
    *y = clamp01(*y);
}

/// Two relaxation passes of disc-disc resolution between the player and
/// enemies (spec §4.B "two relaxation passes").
pub fn resolve_enemy_overlaps(
    px: &mut f32,
    py: &mut f32,
    player_radius: f32,
    enemies: &mut [(f32, f32, f32)],
) {
    for _ in 0..2 {
        for enemy in enemies.iter_mut() {
            let (dx1, dy1, dx2, dy2) =
                crate::math::resolve_disc_overlap(*px, *py, player_radius, enemy.0, enemy.1, enemy.2);
            *px += dx1;
            *py += dy1;
            enemy.0 += dx2;
            enemy.1 += dy2;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roll_succeeds_at_threshold_stamina() {
        let mut roll = RollState::default();
        let mut stamina = 0.50;
        assert!(try_start_roll(&mut roll, &mut stamina, (1.0, 0.0), 10.0));
    }

    #[test]
    fn roll_fails_just_below_threshold() {
        let mut roll = RollState::default();
        let mut stamina = 0.4999;
        assert!(!try_start_roll(&mut roll, &mut stamina, (1.0, 0.0), 10.0));
    }

    #[test]
    fn roll_phase_advances_on_schedule() {
        let mut roll = RollState::default();
        let mut stamina = 1.0;
        try_start_roll(&mut roll, &mut stamina, (1.0, 0.0), 0.0);
        advance_roll(&mut roll, 0.30);
        assert_eq!(roll.state, RollPhase::Sliding);
        advance_roll(&mut roll, 0.50 + 1e-4);
        assert_eq!(roll.state, RollPhase::Idle);
    }
}
