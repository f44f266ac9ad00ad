//! Attack state machine, combo chaining, hyperarmor, block/parry (spec
//! §4.C). Grounded on the teacher's attacker-collect/apply-results
//! two-phase shape (`systems/combat.rs`) and the `AttackPhase` windup/
//! active/recovery enum idiom from `other_examples/.../combat-components.rs`.

use crate::constants::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackPhase {
    Idle,
    Windup,
    Active,
    Recovery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackType {
    Light,
    Heavy,
    Special,
}

impl AttackType {
    pub fn timings(self) -> (f32, f32, f32, f32) {
        match self {
            AttackType::Light => (LIGHT_WINDUP, LIGHT_ACTIVE, LIGHT_RECOVERY, LIGHT_DAMAGE),
            AttackType::Heavy => (HEAVY_WINDUP, HEAVY_ACTIVE, HEAVY_RECOVERY, HEAVY_DAMAGE),
            AttackType::Special => (SPECIAL_WINDUP, SPECIAL_ACTIVE, SPECIAL_RECOVERY, SPECIAL_DAMAGE),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatState {
    pub attack_state: AttackPhase,
    pub attack_type: AttackType,
    pub state_entered: f32,
    pub attack_dir: (f32, f32),
    pub last_attack_time: f32,
    pub hit_enemies_this_swing: Vec<u32>,

    pub combo_count: u32,
    pub combo_window_end: f32,
    pub last_attack_type: Option<AttackType>,

    pub has_hyperarmor_tag: bool,
}

impl Default for CombatState {
    fn default() -> Self {
        CombatState {
            attack_state: AttackPhase::Idle,
            attack_type: AttackType::Light,
            state_entered: TIME_SENTINEL,
            attack_dir: (1.0, 0.0),
            last_attack_time: TIME_SENTINEL,
            hit_enemies_this_swing: Vec::new(),
            combo_count: 0,
            combo_window_end: TIME_SENTINEL,
            last_attack_type: None,
            has_hyperarmor_tag: false,
        }
    }
}

fn cooldown_mult(combat: &CombatState, attack_type: AttackType, now: f32) -> f32 {
    if now >= combat.combo_window_end {
        return 1.0;
    }
    match (combat.last_attack_type, attack_type) {
        (Some(AttackType::Light), AttackType::Heavy) => COMBO_LIGHT_HEAVY_MULT,
        (Some(_), AttackType::Special) => COMBO_SPECIAL_FINISHER_MULT,
        (Some(_), _) => COMBO_COOLDOWN_MULT,
        (None, _) => 1.0,
    }
}

/// Attempts to fire an attack. Returns `true` on success (spec §4.C).
/// `silenced` blocks `AttackType::Special` (spec §4.C Silenced status).
#[allow(clippy::too_many_arguments)]
pub fn try_attack(
    combat: &mut CombatState,
    attack_type: AttackType,
    stamina: &mut f32,
    stamina_cost: f32,
    facing: (f32, f32),
    silenced: bool,
    now: f32,
) -> bool {
    if !matches!(combat.attack_state, AttackPhase::Idle) {
        return false;
    }
    if silenced && matches!(attack_type, AttackType::Special) {
        return false;
    }
    let mult = cooldown_mult(combat, attack_type, now);
    if now - combat.last_attack_time < ATTACK_COOLDOWN_SEC * mult {
        return false;
    }
    if *stamina < stamina_cost * mult {
        return false;
    }
    *stamina -= stamina_cost * mult;
    combat.attack_type = attack_type;
    combat.attack_dir = facing;
    combat.attack_state = AttackPhase::Windup;
    combat.state_entered = now;
    combat.last_attack_time = now;
    combat.hit_enemies_this_swing.clear();

    if now < combat.combo_window_end {
        combat.combo_count = (combat.combo_count + 1).min(MAX_COMBO);
    } else {
        combat.combo_count = 1;
    }
    let (windup, active, _recovery, _damage) = attack_type.timings();
    combat.combo_window_end = match attack_type {
        AttackType::Special => now, // finisher closes the window immediately
        _ => now + windup + active + 0.5,
    };
    combat.last_attack_type = Some(attack_type);
    true
}

/// Advances windup → active → recovery → idle on schedule (spec §4.C).
pub fn advance_attack(combat: &mut CombatState, now: f32) {
    let (windup, active, recovery, _damage) = combat.attack_type.timings();
    let elapsed = now - combat.state_entered;
    match combat.attack_state {
        AttackPhase::Windup if elapsed >= windup => {
            combat.attack_state = AttackPhase::Active;
            combat.state_entered = combat.state_entered + windup;
        }
        AttackPhase::Active if elapsed >= windup + active => {
            combat.attack_state = AttackPhase::Recovery;
            combat.state_entered = combat.state_entered + windup + active;
        }
        AttackPhase::Recovery if elapsed >= windup + active + recovery => {
            combat.attack_state = AttackPhase::Idle;
        }
        _ => {}
    }
}

/// Feinting a heavy attack: pressing block during Heavy→Windup cancels to
/// Idle (spec §4.C).
pub fn try_feint_cancel(combat: &mut CombatState, block_pressed: bool) -> bool {
    if block_pressed
        && combat.attack_type == AttackType::Heavy
        && matches!(combat.attack_state, AttackPhase::Windup)
    {
        combat.attack_state = AttackPhase::Idle;
        true
    } else {
        false
    }
}

pub fn hyperarmor_active(combat: &CombatState, now: f32, hyperarmor_end_time: f32) -> bool {
    combat.has_hyperarmor_tag
        && matches!(combat.attack_state, AttackPhase::Windup | AttackPhase::Active)
        && now < hyperarmor_end_time
}

/// Hit test: range + arc cone (spec §4.C). `accuracy_mod` narrows the cone
/// below 1.0 (Blinded status); pass 1.0 for unaffected attackers.
pub fn hit_test(attacker_pos: (f32, f32), attack_dir: (f32, f32), target_pos: (f32, f32), accuracy_mod: f32) -> bool {
    let dx = target_pos.0 - attacker_pos.0;
    let dy = target_pos.1 - attacker_pos.1;
    let dist = (dx * dx + dy * dy).sqrt();
    if dist > ATTACK_RANGE {
        return false;
    }
    let (ndx, ndy) = crate::math::normalize(dx, dy);
    let cos = crate::math::dot(ndx, ndy, attack_dir.0, attack_dir.1);
    let threshold = ATTACK_ARC_COS_THRESHOLD + (1.0 - ATTACK_ARC_COS_THRESHOLD) * (1.0 - accuracy_mod).max(0.0);
    cos >= threshold
}

pub struct DamageResult {
    pub damage: f32,
    pub is_crit: bool,
    pub lifesteal: f32,
}

/// `can_counter` applies the post-parry counter-window bonus (spec §4.C,
/// consumed by the caller once the attack that used it lands).
#[allow(clippy::too_many_arguments)]
pub fn compute_damage(
    attack_type: AttackType,
    attack_damage_mult: f32,
    weapon_damage: f32,
    curse_weakness: f32,
    is_wolf: bool,
    wolf_bonus: f32,
    crit_chance: f32,
    weapon_crit: f32,
    lifesteal_fraction: f32,
    can_counter: bool,
    rng: &mut crate::rng::Rng,
) -> DamageResult {
    let (_, _, _, base) = attack_type.timings();
    let is_crit = rng.f01() < (crit_chance + weapon_crit);
    let crit_mult = if is_crit { 2.0 } else { 1.0 };
    let bonus = if is_wolf { wolf_bonus } else { 1.0 };
    let counter_mult = if can_counter { COUNTER_DAMAGE_MULT } else { 1.0 };
    let damage = base * attack_damage_mult * weapon_damage * curse_weakness * bonus * crit_mult * counter_mult;
    DamageResult { damage, is_crit, lifesteal: damage * lifesteal_fraction }
}

/// `handle_incoming_attack` (spec §4.C, §6). Returns the block-result code.
#[allow(clippy::too_many_arguments)]
pub fn handle_incoming_attack(
    attacker_pos: (f32, f32),
    self_pos: (f32, f32),
    is_rolling_invulnerable: bool,
    is_hyperarmor_active: bool,
    blocking: bool,
    block_face: (f32, f32),
    block_start_time: f32,
    now: f32,
) -> i32 {
    let dx = self_pos.0 - attacker_pos.0;
    let dy = self_pos.1 - attacker_pos.1;
    let dist = (dx * dx + dy * dy).sqrt();
    if dist > ATTACK_RANGE || is_rolling_invulnerable || is_hyperarmor_active {
        return -1;
    }
    if blocking {
        let (ndx, ndy) = crate::math::normalize(dx, dy);
        let facing_ok = crate::math::dot(block_face.0, block_face.1, ndx, ndy) >= 0.5;
        if facing_ok && now - block_start_time <= PARRY_WINDOW {
            return 2;
        }
        if facing_ok {
            return 1;
        }
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_test_boundary_inclusive() {
        assert!(hit_test((0.0, 0.0), (1.0, 0.0), (ATTACK_RANGE, 0.0), 1.0));
    }

    #[test]
    fn parry_at_exact_window_succeeds() {
        let result = handle_incoming_attack(
            (-0.04, 0.0),
            (0.0, 0.0),
            false,
            false,
            true,
            (1.0, 0.0),
            0.0,
            PARRY_WINDOW,
        );
        assert_eq!(result, 2);
    }

    #[test]
    fn roll_grants_invulnerability() {
        let result = handle_incoming_attack((-0.03, 0.0), (0.0, 0.0), true, false, false, (1.0, 0.0), 0.0, 0.0);
        assert_eq!(result, -1);
    }
}
