//! Per-wolf perception, emotion, steering, lunge/feint decision, movement
//! and collision (spec §4.D). Grounded on the teacher's threat-awareness →
//! behavior-state → flocking pipeline (`systems/ai.rs`), retargeted from
//! squads to wolves.

use crate::constants::*;
use crate::grids::danger::DangerZone;
use crate::grids::scent::ScentField;
use crate::grids::sound::SoundPings;
use crate::math::{clamp, dot, normalize};
use crate::rng::Rng;
use crate::wolf::{Emotion, PackPlan, Wolf, WolfRole};

/// Perception sample computed once per wolf per tick.
pub struct Perception {
    pub to_player: (f32, f32),
    pub dist_to_player: f32,
    pub sees_player: bool,
    pub heard_ping: Option<(f32, f32)>,
    pub scent_gradient: (f32, f32),
}

pub fn perceive(wolf: &mut Wolf, player_pos: (f32, f32), sounds: &SoundPings, scent: &ScentField, now: f32) -> Perception {
    let dx = player_pos.0 - wolf.x;
    let dy = player_pos.1 - wolf.y;
    let dist = (dx * dx + dy * dy).sqrt();
    let sees_player = dist < ENEMY_SEEK_RANGE;
    if sees_player {
        wolf.memory.last_seen_x = player_pos.0;
        wolf.memory.last_seen_y = player_pos.1;
        wolf.memory.last_seen_confidence = 1.0;
        if !wolf.memory.noticed {
            wolf.memory.noticed = true;
            wolf.memory.notice_time = now;
        }
    }

    let heard_ping = sounds
        .loudest_audible((wolf.x, wolf.y), now, 1.0)
        .filter(|p| p.intensity <= SOUND_MAX_AUDIBLE)
        .map(|p| (p.x, p.y));

    let scent_gradient = scent.gradient_at(wolf.x, wolf.y);

    Perception { to_player: normalize(dx, dy), dist_to_player: dist, sees_player, heard_ping, scent_gradient }
}

pub fn decay_memory(wolf: &mut Wolf, dt: f32) {
    wolf.memory.last_seen_confidence = (wolf.memory.last_seen_confidence - MEMORY_DECAY_PER_SEC * dt).max(0.0);
    wolf.memory.last_scent_confidence = (wolf.memory.last_scent_confidence - MEMORY_DECAY_PER_SEC * dt).max(0.0);
}

/// Emotional transition (spec §4.D); first matching rule wins.
pub fn update_emotion(wolf: &mut Wolf, pack_morale: f32, now: f32, rng: &mut Rng) {
    let hit_rate = if wolf.successful_attacks + wolf.failed_attacks > 0 {
        wolf.successful_attacks as f32 / (wolf.successful_attacks + wolf.failed_attacks) as f32
    } else {
        0.0
    };
    let (emotion, intensity) = if wolf.health < 0.3 && wolf.fatigue > 0.7 {
        (Emotion::Fearful, 0.8)
    } else if pack_morale > 0.7 && hit_rate > 0.6 {
        (Emotion::Confident, 0.7)
    } else if wolf.failed_attacks > 3 && wolf.successful_attacks == 0 {
        (Emotion::Frustrated, 0.9)
    } else if wolf.health < 0.5 && pack_morale < 0.4 {
        (Emotion::Desperate, 0.85)
    } else if now - wolf.last_damage_time < 2.0 {
        (Emotion::Aggressive, 0.75)
    } else {
        (Emotion::Calm, (wolf.emotion_intensity * 0.98).max(0.3))
    };
    wolf.emotion = emotion;
    wolf.emotion_intensity = intensity;

    if matches!(emotion, Emotion::Frustrated) {
        wolf.aggression = clamp(wolf.aggression + rng.f01() * 0.1, 0.0, 1.0);
    }
}

pub fn emotion_speed_mult(emotion: Emotion) -> f32 {
    match emotion {
        Emotion::Aggressive | Emotion::Desperate => 1.15,
        Emotion::Fearful => 0.8,
        Emotion::Confident => 1.1,
        _ => 1.0,
    }
}

pub fn emotion_range_bonus(emotion: Emotion) -> f32 {
    match emotion {
        Emotion::Aggressive | Emotion::Desperate => 0.04,
        Emotion::Confident => 0.02,
        _ => 0.0,
    }
}

pub fn emotion_cooldown_mod(emotion: Emotion) -> f32 {
    match emotion {
        Emotion::Aggressive | Emotion::Desperate => 0.8,
        Emotion::Fearful => 1.3,
        _ => 1.0,
    }
}

pub fn emotion_fatigue_threshold(emotion: Emotion) -> f32 {
    match emotion {
        Emotion::Desperate | Emotion::Aggressive => 0.9,
        Emotion::Fearful => 0.5,
        _ => 0.7,
    }
}

/// Steering target direction (spec §4.D). `wind` used only as the scent
/// drift bias.
#[allow(clippy::too_many_arguments)]
pub fn steering_target(
    wolf: &Wolf,
    perception: &Perception,
    player_pos: (f32, f32),
    player_facing: (f32, f32),
    den: (f32, f32),
    wind: (f32, f32),
    now: f32,
) -> (f32, f32) {
    let base = if perception.sees_player {
        perception.to_player
    } else if let Some(ping) = perception.heard_ping {
        normalize(ping.0 - wolf.x, ping.1 - wolf.y)
    } else if wolf.memory.last_seen_confidence > 0.1 {
        normalize(wolf.memory.last_seen_x - wolf.x, wolf.memory.last_seen_y - wolf.y)
    } else {
        let (gx, gy) = perception.scent_gradient;
        normalize(gx - wind.0 * 0.25, gy - wind.1 * 0.25)
    };

    let with_role = match wolf.role {
        WolfRole::FlankL => {
            let tangent = (-base.1, base.0);
            normalize(base.0 + tangent.0, base.1 + tangent.1)
        }
        WolfRole::FlankR => {
            let tangent = (base.1, -base.0);
            normalize(base.0 + tangent.0, base.1 + tangent.1)
        }
        WolfRole::Ambusher => {
            let ahead = (player_pos.0 + player_facing.0 * 0.3, player_pos.1 + player_facing.1 * 0.3);
            normalize(ahead.0 - wolf.x, ahead.1 - wolf.y)
        }
        WolfRole::Scout => {
            let angle = 1.2;
            let (c, s) = (angle.cos(), angle.sin());
            (base.0 * c - base.1 * s, base.0 * s + base.1 * c)
        }
        _ => base,
    };

    if matches!(wolf.state, crate::wolf::WolfState::Retreat) || now < wolf.retreat_until_time {
        let away = normalize(wolf.x - player_pos.0, wolf.y - player_pos.1);
        let to_den = normalize(den.0 - wolf.x, den.1 - wolf.y);
        return normalize(away.0 + to_den.0 * 0.5, away.1 + to_den.1 * 0.5);
    }

    with_role
}

/// Terrain-advantage sampling: if intelligent and local advantage is low,
/// sample 8 offsets and blend 30% toward the best (spec §4.D).
pub fn terrain_advantage_blend(wolf: &Wolf, steering: (f32, f32), local_advantage: f32, danger_zones: &[DangerZone]) -> (f32, f32) {
    if wolf.intelligence <= 0.5 || local_advantage >= 0.6 {
        return steering;
    }
    let radius = 0.15;
    let mut best_dir = steering;
    let mut best_score = f32::MIN;
    for i in 0..8 {
        let angle = i as f32 * std::f32::consts::TAU / 8.0;
        let ox = wolf.x + angle.cos() * radius;
        let oy = wolf.y + angle.sin() * radius;
        let danger_penalty: f32 = danger_zones
            .iter()
            .map(|z| {
                let dx = ox - z.x;
                let dy = oy - z.y;
                let d = (dx * dx + dy * dy).sqrt();
                if d < z.r {
                    z.strength * (1.0 - d / z.r)
                } else {
                    0.0
                }
            })
            .sum();
        let score = -danger_penalty;
        if score > best_score {
            best_score = score;
            best_dir = normalize(angle.cos(), angle.sin());
        }
    }
    normalize(steering.0 * 0.7 + best_dir.0 * 0.3, steering.1 * 0.7 + best_dir.1 * 0.3)
}

/// Separation from other wolves + danger-zone + player-cone avoidance
/// (spec §4.D).
pub fn compute_avoidance(
    idx: usize,
    wolves: &[Wolf],
    danger_zones: &[DangerZone],
    player_pos: (f32, f32),
    player_facing: (f32, f32),
) -> (f32, f32) {
    let me = &wolves[idx];
    let mut ax = 0.0;
    let mut ay = 0.0;

    for (j, other) in wolves.iter().enumerate() {
        if j == idx || !other.active {
            continue;
        }
        let dx = me.x - other.x;
        let dy = me.y - other.y;
        let d2 = (dx * dx + dy * dy).max(1e-6);
        let d = d2.sqrt();
        if d < SEPARATION_RADIUS {
            let strength = 1.0 / d2;
            let (nx, ny) = normalize(dx, dy);
            ax += nx * strength;
            ay += ny * strength;
        }
    }

    for zone in danger_zones {
        let dx = me.x - zone.x;
        let dy = me.y - zone.y;
        let d = (dx * dx + dy * dy).sqrt();
        if d < zone.r {
            let weight = zone.strength * (1.0 - d / zone.r);
            let (nx, ny) = normalize(dx, dy);
            ax += nx * weight;
            ay += ny * weight;
        }
    }

    let to_wolf = normalize(me.x - player_pos.0, me.y - player_pos.1);
    if dot(-to_wolf.0, -to_wolf.1, player_facing.0, player_facing.1) >= 0.5 {
        ax += player_facing.0 * 0.5;
        ay += player_facing.1 * 0.5;
    }

    (ax, ay)
}

pub struct LungeGate<'a> {
    pub noticed: bool,
    pub notice_time: f32,
    pub dist: f32,
    pub plan: PackPlan,
    pub anyone_attacking: u32,
    pub is_lead: bool,
    pub rng: &'a mut Rng,
}

/// Decides whether the wolf should begin a lunge or feint this tick
/// (spec §4.D). Returns `Some(true)` for lunge, `Some(false)` for feint,
/// `None` for no action.
pub fn decide_lunge(wolf: &Wolf, gate: LungeGate, now: f32, player_skill_estimate: f32) -> Option<bool> {
    if wolf.is_lunging(now) || wolf.is_feinting(now) {
        return None;
    }
    if !gate.noticed || now - gate.notice_time < NOTICE_REACTION_DELAY {
        return None;
    }
    let range_bonus = emotion_range_bonus(wolf.emotion);
    if gate.dist >= LUNGE_RANGE + range_bonus {
        return None;
    }
    let cooldown_mod = emotion_cooldown_mod(wolf.emotion);
    if now - wolf.last_lunge_time <= LUNGE_COOLDOWN * cooldown_mod {
        return None;
    }
    let fatigue_threshold = emotion_fatigue_threshold(wolf.emotion);
    if wolf.fatigue >= fatigue_threshold {
        return None;
    }

    if gate.plan == PackPlan::Commit {
        if gate.anyone_attacking == 0 {
            if !gate.is_lead {
                return None;
            }
        } else if gate.anyone_attacking <= 2 {
            // others may join
        } else {
            return None;
        }
    }

    let mut feint_prob = BASE_FEINT_PROB * (0.5 + player_skill_estimate);
    if gate.plan == PackPlan::Commit {
        feint_prob *= 0.4;
    }
    if gate.rng.f01() < feint_prob {
        Some(false)
    } else {
        Some(true)
    }
}

pub fn predicted_lunge_target(wolf: &Wolf, player_pos: (f32, f32)) -> (f32, f32) {
    (
        player_pos.0 + (player_pos.0 - wolf.memory.last_seen_x) * 0.2,
        player_pos.1 + (player_pos.1 - wolf.memory.last_seen_y) * 0.2,
    )
}

pub fn plan_speed_mult(plan: PackPlan) -> f32 {
    match plan {
        PackPlan::Harass => 0.85,
        PackPlan::Commit => 1.35,
        _ => 1.0,
    }
}

#[allow(clippy::too_many_arguments)]
pub fn desired_velocity(
    steering: (f32, f32),
    emotion: Emotion,
    plan: PackPlan,
    cautious_factor: f32,
    skill_estimate: f32,
    intelligence: f32,
    wind: (f32, f32),
) -> (f32, f32) {
    let adaptive = 0.8 + skill_estimate * 0.4;
    let intel_factor = 0.9 + intelligence * 0.2;
    let speed = WOLF_MAX_SPEED
        * emotion_speed_mult(emotion)
        * plan_speed_mult(plan)
        * cautious_factor
        * adaptive
        * intel_factor;
    (steering.0 * speed + wind.0 * 0.02, steering.1 * speed + wind.1 * 0.02)
}

pub fn integrate(vx: &mut f32, vy: &mut f32, desired: (f32, f32), dt: f32) {
    *vx += (desired.0 - *vx) * WOLF_ACCEL * dt;
    *vy += (desired.1 - *vy) * WOLF_ACCEL * dt;
    let decay = (1.0 - WOLF_FRICTION * dt).max(0.0);
    *vx *= decay;
    *vy *= decay;
    let speed = (*vx * *vx + *vy * *vy).sqrt();
    if speed > WOLF_MAX_SPEED {
        let scale = WOLF_MAX_SPEED / speed;
        *vx *= scale;
        *vy *= scale;
    }
}

pub fn update_fatigue(fatigue: &mut f32, exertion: f32, dt: f32) {
    *fatigue = (*fatigue + (exertion * 0.3 - 0.2) * dt).clamp(0.0, 1.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emotion_fearful_when_low_hp_and_fatigued() {
        let mut wolf = Wolf::default();
        wolf.health = 0.2;
        wolf.fatigue = 0.8;
        let mut rng = Rng::new(1);
        update_emotion(&mut wolf, 0.5, 0.0, &mut rng);
        assert!(matches!(wolf.emotion, Emotion::Fearful));
    }

    #[test]
    fn lunge_requires_notice_delay() {
        let mut wolf = Wolf::default();
        wolf.memory.noticed = true;
        wolf.memory.notice_time = 0.0;
        let mut rng = Rng::new(1);
        let gate = LungeGate {
            noticed: true,
            notice_time: 0.0,
            dist: 0.05,
            plan: PackPlan::Stalk,
            anyone_attacking: 0,
            is_lead: true,
            rng: &mut rng,
        };
        assert!(decide_lunge(&wolf, gate, 0.1, 0.5).is_none());
    }
}
