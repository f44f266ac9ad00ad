//! Escalate phase (spec §4.H): global escalation level, density/modifier/
//! mini-boss/frenzy/swarm events.

use crate::constants::ESCALATION_RATE_PER_SEC;
use crate::rng::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EscalateEvent {
    Density,
    Modifiers,
    MiniBoss,
    Frenzy,
    Swarm,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MiniBoss {
    pub active: bool,
    pub x: f32,
    pub y: f32,
    pub health: f32,
    pub last_attack_time: f32,
}

impl Default for MiniBoss {
    fn default() -> Self {
        MiniBoss { active: false, x: 0.5, y: 0.5, health: 0.0, last_attack_time: crate::constants::TIME_SENTINEL }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EscalateState {
    pub level: f32,
    pub spawn_rate_mult: f32,
    pub enemy_speed_mult: f32,
    pub enemy_damage_mult: f32,
    pub enemy_modifier_bits: u32,
    pub miniboss: MiniBoss,
}

impl Default for EscalateState {
    fn default() -> Self {
        EscalateState {
            level: 0.0,
            spawn_rate_mult: 1.0,
            enemy_speed_mult: 1.0,
            enemy_damage_mult: 1.0,
            enemy_modifier_bits: 0,
            miniboss: MiniBoss::default(),
        }
    }
}

pub fn tick_level(state: &mut EscalateState, dt: f32) {
    state.level = (state.level + ESCALATION_RATE_PER_SEC * dt).min(1.0);
}

pub fn apply_event(state: &mut EscalateState, event: EscalateEvent, rng: &mut Rng, player_pos: (f32, f32)) {
    match event {
        EscalateEvent::Density => state.spawn_rate_mult += 0.2 * state.level,
        EscalateEvent::Modifiers => state.enemy_modifier_bits |= 1 << rng.below(8),
        EscalateEvent::Frenzy => state.enemy_speed_mult += 0.15 * state.level,
        EscalateEvent::Swarm => state.spawn_rate_mult += 0.35 * state.level,
        EscalateEvent::MiniBoss => {
            state.miniboss = MiniBoss {
                active: true,
                x: (player_pos.0 + rng.range(-0.3, 0.3)).clamp(0.0, 1.0),
                y: (player_pos.1 + rng.range(-0.3, 0.3)).clamp(0.0, 1.0),
                health: rng.range(50.0, 100.0),
                last_attack_time: crate::constants::TIME_SENTINEL,
            };
        }
    }
}

/// MiniBoss chase/attack logic; attacks when within 0.1 on a cooldown that
/// shrinks with intensity (spec §4.H).
pub fn update_miniboss(miniboss: &mut MiniBoss, player_pos: (f32, f32), intensity: f32, now: f32, dt: f32) -> Option<f32> {
    if !miniboss.active {
        return None;
    }
    let dx = player_pos.0 - miniboss.x;
    let dy = player_pos.1 - miniboss.y;
    let dist = (dx * dx + dy * dy).sqrt();
    let speed = 0.2 * dt;
    if dist > 1e-4 {
        miniboss.x += dx / dist * speed;
        miniboss.y += dy / dist * speed;
    }
    if dist <= 0.1 {
        let cooldown = 2.0 - intensity * 0.5;
        if now - miniboss.last_attack_time >= cooldown {
            miniboss.last_attack_time = now;
            return Some(0.1 + intensity * 0.1);
        }
    }
    None
}

pub fn damage_miniboss(miniboss: &mut MiniBoss, amount: f32) {
    miniboss.health = (miniboss.health - amount).max(0.0);
    if miniboss.health <= 0.0 {
        miniboss.active = false;
    }
}
