//! Animation overlay outputs (spec §3, §6): 22 scalars computed from
//! player kinematics/combat state each tick, write-only from the core's
//! perspective. Grounded on `godot_bridge.rs`'s flat-buffer-with-
//! documented-stride convention.

use crate::player::Player;
use serde::{Deserialize, Serialize};

/// Stable field order matching the getters in spec §6.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AnimationOverlay {
    pub scale_x: f32,
    pub scale_y: f32,
    pub rotation: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    pub pelvis_y: f32,
    pub spine_curve: f32,
    pub shoulder_rotation: f32,
    pub head_bob_x: f32,
    pub head_bob_y: f32,
    pub arm_swing_l: f32,
    pub arm_swing_r: f32,
    pub leg_lift_l: f32,
    pub leg_lift_r: f32,
    pub torso_twist: f32,
    pub breathing_intensity: f32,
    pub fatigue_factor: f32,
    pub momentum_x: f32,
    pub momentum_y: f32,
    pub cloth_sway: f32,
    pub hair_bounce: f32,
    pub equipment_jiggle: f32,
    pub wind_response: f32,
    pub ground_adapt: f32,
    pub temperature_shiver: f32,
}

pub fn compute(overlay: &mut AnimationOverlay, player: &Player, sim_time: f32, wind: (f32, f32)) {
    let speed = (player.vx * player.vx + player.vy * player.vy).sqrt();
    overlay.scale_x = 1.0;
    overlay.scale_y = 1.0;
    overlay.rotation = player.fy.atan2(player.fx);
    overlay.offset_x = 0.0;
    overlay.offset_y = 0.0;
    overlay.pelvis_y = (sim_time * 6.0).sin() * 0.01 * speed.min(1.0);
    overlay.spine_curve = if player.blocking { 0.2 } else { 0.0 };
    overlay.shoulder_rotation = if player.combat.attack_state != crate::player::combat::AttackPhase::Idle { 0.3 } else { 0.0 };
    overlay.head_bob_x = (sim_time * 8.0).sin() * 0.005 * speed.min(1.0);
    overlay.head_bob_y = (sim_time * 8.0).cos() * 0.005 * speed.min(1.0);
    overlay.arm_swing_l = (sim_time * 6.0).sin() * speed.min(1.0);
    overlay.arm_swing_r = -(sim_time * 6.0).sin() * speed.min(1.0);
    overlay.leg_lift_l = (sim_time * 6.0 + std::f32::consts::PI).sin().max(0.0) * speed.min(1.0);
    overlay.leg_lift_r = (sim_time * 6.0).sin().max(0.0) * speed.min(1.0);
    overlay.torso_twist = player.vx.atan2(1.0) * 0.1;
    overlay.breathing_intensity = 0.4 + 0.3 * (1.0 - player.stamina / player.max_stamina.max(1e-4));
    overlay.fatigue_factor = 1.0 - player.stamina / player.max_stamina.max(1e-4);
    overlay.momentum_x = player.vx;
    overlay.momentum_y = player.vy;
    overlay.cloth_sway = wind.0 * 0.3;
    overlay.hair_bounce = (sim_time * 4.0).sin() * 0.05;
    overlay.equipment_jiggle = speed.min(1.0) * 0.1;
    overlay.wind_response = (wind.0 * wind.0 + wind.1 * wind.1).sqrt();
    overlay.ground_adapt = if player.grounded { 0.0 } else { 0.1 };
    overlay.temperature_shiver = if player.status.slots().iter().any(|s| matches!(s.kind, crate::player::status::StatusKind::Chilled | crate::player::status::StatusKind::Frozen)) {
        0.3
    } else {
        0.0
    };
}
