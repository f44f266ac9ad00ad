//! Risk phase (spec §4.H): random event with intensity, curses, timed
//! challenges, gambles, traps.

use crate::constants::RISK_ENTRY_MIN_CHOICES;
use crate::grids::danger::DangerZones;
use crate::rng::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskEvent {
    Curse,
    Elite,
    TimedChallenge,
    Gamble,
    Trap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurseType {
    Weakness,
    Fragility,
    Exhaustion,
    Slowness,
    Blindness,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Curse {
    pub kind: CurseType,
    pub multiplier: f32,
    pub remaining: f32,
    pub permanent: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RiskState {
    pub active: bool,
    pub event: Option<RiskEvent>,
    pub intensity: f32,
    pub curses: Vec<Curse>,
    pub target_kills: u32,
    pub kills_so_far: u32,
    pub challenge_end_time: f32,
    pub risk_multiplier: f32,
    pub elite_active: bool,
}

impl RiskState {
    pub fn new() -> Self {
        RiskState { risk_multiplier: 1.0, ..Default::default() }
    }
}

pub fn should_enter_risk(total_choices_offered: u32, rng: &mut Rng) -> bool {
    total_choices_offered >= RISK_ENTRY_MIN_CHOICES && rng.f01() < crate::constants::RISK_ENTRY_PROB
}

pub fn begin_risk(state: &mut RiskState, danger_zones: &mut DangerZones, now: f32, player_pos: (f32, f32), rng: &mut Rng) {
    let intensity = rng.range(0.3, 1.0);
    let event = match rng.below(5) {
        0 => RiskEvent::Curse,
        1 => RiskEvent::Elite,
        2 => RiskEvent::TimedChallenge,
        3 => RiskEvent::Gamble,
        _ => RiskEvent::Trap,
    };
    state.active = true;
    state.event = Some(event);
    state.intensity = intensity;
    match event {
        RiskEvent::Curse => {
            let kind = match rng.below(5) {
                0 => CurseType::Weakness,
                1 => CurseType::Fragility,
                2 => CurseType::Exhaustion,
                3 => CurseType::Slowness,
                _ => CurseType::Blindness,
            };
            state.curses.push(Curse { kind, multiplier: 1.0 - 0.3 * intensity, remaining: 20.0 + intensity * 20.0, permanent: false });
        }
        RiskEvent::Elite => {
            state.elite_active = true;
        }
        RiskEvent::TimedChallenge => {
            state.target_kills = (3.0 + intensity * 5.0) as u32;
            state.kills_so_far = 0;
            state.challenge_end_time = now + 30.0 + intensity * 30.0;
        }
        RiskEvent::Gamble => {
            state.risk_multiplier *= 1.0 + intensity * 0.5;
        }
        RiskEvent::Trap => {
            for i in 0..3 {
                let angle = i as f32 * std::f32::consts::TAU / 3.0;
                danger_zones.post(
                    (player_pos.0 + angle.cos() * 0.1).clamp(0.0, 1.0),
                    (player_pos.1 + angle.sin() * 0.1).clamp(0.0, 1.0),
                    0.06,
                    intensity,
                    60.0,
                    now,
                );
            }
        }
    }
}

pub fn tick_curses(state: &mut RiskState, dt: f32) {
    for curse in state.curses.iter_mut() {
        if !curse.permanent {
            curse.remaining -= dt;
        }
    }
    state.curses.retain(|c| c.permanent || c.remaining > 0.0);
}

/// Escape requires the stamina threshold (spec §4.H); clears non-permanent
/// curses and risk state on success.
pub fn try_escape(state: &mut RiskState, stamina: f32) -> bool {
    let required = 0.3 + (state.risk_multiplier - 1.0) * 0.2;
    if stamina < required {
        return false;
    }
    state.curses.retain(|c| c.permanent);
    state.active = false;
    state.event = None;
    state.elite_active = false;
    true
}

pub fn curse_damage_mult(state: &RiskState) -> f32 {
    state
        .curses
        .iter()
        .filter(|c| matches!(c.kind, CurseType::Weakness))
        .map(|c| c.multiplier)
        .product::<f32>()
        .max(0.0)
        .min(1.0)
}
