//! Pack controller (spec §4.E): plan selection, role assignment, morale,
//! skill estimate, message broadcast, respawn timers. Grounded on the
//! teacher's accumulator+clamp shape (`systems/morale.rs`) and its
//! ordered if-chain plan selection (`systems/ai.rs::determine_behavior_state`).

use crate::constants::*;
use crate::math::cross;
use crate::rng::Rng;
use crate::wolf::{PackController, PackPlan, Wolf, WolfRole};

pub struct PackAggregate {
    pub avg_health: f32,
    pub avg_fatigue: f32,
    pub avg_dist: f32,
    pub healthy_fraction: f32,
    pub n: usize,
}

pub fn aggregate(wolves: &[Wolf], player_pos: (f32, f32)) -> PackAggregate {
    let active: Vec<&Wolf> = wolves.iter().filter(|w| w.active).collect();
    let n = active.len();
    if n == 0 {
        return PackAggregate { avg_health: 0.0, avg_fatigue: 0.0, avg_dist: 0.0, healthy_fraction: 0.0, n: 0 };
    }
    let avg_health = active.iter().map(|w| w.health).sum::<f32>() / n as f32;
    let avg_fatigue = active.iter().map(|w| w.fatigue).sum::<f32>() / n as f32;
    let avg_dist = active
        .iter()
        .map(|w| {
            let dx = w.x - player_pos.0;
            let dy = w.y - player_pos.1;
            (dx * dx + dy * dy).sqrt()
        })
        .sum::<f32>()
        / n as f32;
    let healthy_fraction = active.iter().filter(|w| w.health > 0.5).count() as f32 / n as f32;
    PackAggregate { avg_health, avg_fatigue, avg_dist, healthy_fraction, n }
}

pub fn update_skill_estimate(controller: &mut PackController, recent_success: bool, recent_failure: bool) {
    if recent_success {
        controller.player_skill_estimate *= 0.98;
    }
    if recent_failure {
        controller.player_skill_estimate = (controller.player_skill_estimate * 1.02).min(1.0);
    }
}

pub fn update_morale(controller: &mut PackController, agg: &PackAggregate) {
    let success_bonus = if controller.successes > controller.failures { 0.1 } else { 0.0 };
    controller.morale = (0.4 * agg.avg_health
        + 0.3 * (1.0 - agg.avg_fatigue)
        + 0.3 * agg.healthy_fraction
        + success_bonus)
        .clamp(0.0, 1.0);
}

/// Plan selection (spec §4.E table).
pub fn select_plan(agg: &PackAggregate, morale: f32, skill_estimate: f32) -> PackPlan {
    if agg.avg_health < 0.3 || agg.avg_fatigue > 0.8 {
        PackPlan::Retreat
    } else if agg.avg_dist > 0.35 && skill_estimate < 0.4 && agg.n >= 3 {
        PackPlan::Ambush
    } else if agg.avg_dist > 0.35 {
        PackPlan::Stalk
    } else if agg.avg_dist > 0.16 && agg.n >= 4 && morale > 0.6 {
        PackPlan::Pincer
    } else if agg.avg_dist > 0.16 {
        PackPlan::Encircle
    } else if morale > 0.65 && agg.avg_fatigue < 0.5 {
        PackPlan::Commit
    } else {
        PackPlan::Harass
    }
}

/// Assigns roles to active wolves this tick (spec §4.E). Returns the lead's
/// index, the source for this tick's `broadcast`.
pub fn assign_roles(wolves: &mut [Wolf], plan: PackPlan, player_pos: (f32, f32)) -> Option<usize> {
    for w in wolves.iter_mut() {
        if w.active {
            w.role = WolfRole::None;
        }
    }

    let lead_idx = wolves
        .iter()
        .enumerate()
        .filter(|(_, w)| w.active)
        .max_by(|(_, a), (_, b)| score_lead(a, player_pos).total_cmp(&score_lead(b, player_pos)))
        .map(|(i, _)| i);

    let Some(lead_idx) = lead_idx else { return None };
    wolves[lead_idx].role = WolfRole::Lead;
    let (lx, ly) = (wolves[lead_idx].x, wolves[lead_idx].y);

    let mut flankers: Vec<(usize, f32)> = wolves
        .iter()
        .enumerate()
        .filter(|(i, w)| w.active && *i != lead_idx)
        .map(|(i, w)| {
            let side = cross(lx - player_pos.0, ly - player_pos.1, w.x - player_pos.0, w.y - player_pos.1);
            (i, side)
        })
        .collect();
    flankers.sort_by(|a, b| a.1.total_cmp(&b.1));
    if let Some((left_idx, side)) = flankers.first() {
        if *side < 0.0 {
            wolves[*left_idx].role = WolfRole::FlankL;
        }
    }
    if let Some((right_idx, side)) = flankers.last() {
        if *side > 0.0 {
            wolves[*right_idx].role = WolfRole::FlankR;
        }
    }

    match plan {
        PackPlan::Ambush => {
            if let Some((idx, _)) = wolves
                .iter()
                .enumerate()
                .filter(|(i, w)| w.active && *i != lead_idx && w.health > 0.5)
                .max_by(|(_, a), (_, b)| {
                    let da = (a.x - player_pos.0).hypot(a.y - player_pos.1);
                    let db = (b.x - player_pos.0).hypot(b.y - player_pos.1);
                    da.total_cmp(&db)
                })
            {
                wolves[idx].role = WolfRole::Ambusher;
            }
        }
        PackPlan::Pincer => {
            if let Some((idx, _)) = wolves.iter().enumerate().filter(|(i, w)| w.active && *i != lead_idx).next() {
                wolves[idx].role = WolfRole::Scout;
            }
        }
        _ => {}
    }

    if let Some((idx, _)) = wolves
        .iter()
        .enumerate()
        .filter(|(i, w)| w.active && *i != lead_idx)
        .max_by(|(_, a), (_, b)| {
            let da = (a.x - player_pos.0).hypot(a.y - player_pos.1);
            let db = (b.x - player_pos.0).hypot(b.y - player_pos.1);
            da.total_cmp(&db)
        })
    {
        if matches!(wolves[idx].role, WolfRole::None) {
            wolves[idx].role = WolfRole::PupGuard;
        }
    }

    Some(lead_idx)
}

fn score_lead(w: &Wolf, player_pos: (f32, f32)) -> f32 {
    let dx = w.x - player_pos.0;
    let dy = w.y - player_pos.1;
    let d2 = dx * dx + dy * dy;
    (1.0 / (d2 + 1e-4)) * w.health * (1.0 - w.fatigue)
}

/// Pack comms broadcast within range 0.4 (spec §4.E): sets `target_locked`
/// under an aggressive plan, `retreat_until_time` under `Retreat`, and
/// otherwise just bumps memory confidence.
pub fn broadcast(wolves: &mut [Wolf], source_idx: usize, range: f32, plan: PackPlan, now: f32) {
    let (sx, sy) = (wolves[source_idx].x, wolves[source_idx].y);
    for (i, w) in wolves.iter_mut().enumerate() {
        if i == source_idx || !w.active {
            continue;
        }
        let dx = w.x - sx;
        let dy = w.y - sy;
        if (dx * dx + dy * dy).sqrt() <= range {
            match plan {
                PackPlan::Retreat => {
                    w.retreat_until_time = now + PACK_RETREAT_BROADCAST_DURATION;
                }
                PackPlan::Commit | PackPlan::Pincer | PackPlan::Ambush => {
                    w.target_locked = true;
                }
                _ => {
                    w.memory.last_seen_confidence = (w.memory.last_seen_confidence + 0.2).min(1.0);
                }
            }
        }
    }
}

/// Howl reinforcement / escalation (spec §4.E periodic work).
pub fn maybe_reinforce(
    controller: &mut PackController,
    player_hp_deficit: f32,
    now: f32,
    rng: &mut Rng,
) -> Option<(f32, f32)> {
    if controller.morale > 0.75 && player_hp_deficit > 0.35 && now >= controller.howl_cooldown_end {
        controller.howl_cooldown_end = now + PACK_HOWL_COOLDOWN;
        let angle = rng.range(0.0, std::f32::consts::TAU);
        let dist = rng.range(0.55, 0.85);
        Some((0.5 + angle.cos() * dist * 0.5, 0.5 + angle.sin() * dist * 0.5))
    } else if now >= controller.escalate_cooldown_end {
        controller.escalate_cooldown_end = now + PACK_ESCALATE_COOLDOWN;
        controller.plan = PackPlan::Encircle;
        None
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_retreat_when_low_health() {
        let agg = PackAggregate { avg_health: 0.2, avg_fatigue: 0.3, avg_dist: 0.1, healthy_fraction: 0.1, n: 3 };
        assert_eq!(select_plan(&agg, 0.5, 0.5), PackPlan::Retreat);
    }

    #[test]
    fn plan_commit_on_high_morale_low_fatigue() {
        let agg = PackAggregate { avg_health: 0.8, avg_fatigue: 0.2, avg_dist: 0.1, healthy_fraction: 0.9, n: 3 };
        assert_eq!(select_plan(&agg, 0.7, 0.5), PackPlan::Commit);
    }
}
