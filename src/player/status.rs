//! Status effect table (spec §3, §4.C): 22 kinds, ≤16 slots, aggregate
//! modifiers as the product of per-effect contributions. Grounded on the
//! teacher's clamped-accumulator component style (`Morale`, `Suppression`).

use crate::constants::{MAX_STATUS_SLOTS, TIME_SENTINEL};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusKind {
    Burning,
    Poisoned,
    Bleeding,
    Stunned,
    Hitstun,
    Knockdown,
    Slowed,
    Rooted,
    Blinded,
    Silenced,
    Weakened,
    Fragile,
    Exhausted,
    Chilled,
    Frozen,
    DamageBoost,
    SpeedBoost,
    DefenseBoost,
    Regenerating,
    StaminaBoost,
    LifestealBoost,
    CritBoost,
}

impl StatusKind {
    pub fn can_stack(self) -> bool {
        matches!(self, StatusKind::Burning | StatusKind::Poisoned | StatusKind::Bleeding)
    }

    pub fn max_stacks(self) -> u32 {
        if self.can_stack() {
            5
        } else {
            1
        }
    }

    pub fn tick_rate(self) -> Option<f32> {
        match self {
            StatusKind::Burning => Some(0.5),
            StatusKind::Poisoned => Some(1.0),
            StatusKind::Bleeding => Some(0.75),
            StatusKind::Regenerating => Some(1.0),
            _ => None,
        }
    }

    fn movement_contribution(self, intensity: f32) -> f32 {
        match self {
            StatusKind::Slowed | StatusKind::Chilled => 1.0 - 0.4 * intensity,
            StatusKind::Frozen | StatusKind::Rooted | StatusKind::Knockdown => 0.0,
            StatusKind::SpeedBoost => 1.0 + 0.3 * intensity,
            _ => 1.0,
        }
    }

    fn damage_contribution(self, intensity: f32) -> f32 {
        match self {
            StatusKind::Weakened => 1.0 - 0.3 * intensity,
            StatusKind::DamageBoost => 1.0 + 0.5 * intensity,
            _ => 1.0,
        }
    }

    fn defense_contribution(self, intensity: f32) -> f32 {
        match self {
            StatusKind::Fragile => 1.0 - 0.3 * intensity,
            StatusKind::DefenseBoost => 1.0 + 0.3 * intensity,
            _ => 1.0,
        }
    }

    fn stamina_regen_contribution(self, intensity: f32) -> f32 {
        match self {
            StatusKind::Exhausted => 1.0 - 0.5 * intensity,
            StatusKind::StaminaBoost => 1.0 + 0.5 * intensity,
            _ => 1.0,
        }
    }

    fn accuracy_contribution(self, intensity: f32) -> f32 {
        match self {
            StatusKind::Blinded => 1.0 - 0.5 * intensity,
            _ => 1.0,
        }
    }

    fn lifesteal_contribution(self, intensity: f32) -> f32 {
        match self {
            StatusKind::LifestealBoost => 0.15 * intensity,
            _ => 0.0,
        }
    }

    fn crit_contribution(self, intensity: f32) -> f32 {
        match self {
            StatusKind::CritBoost => 0.25 * intensity,
            _ => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StatusSlot {
    pub kind: StatusKind,
    pub duration_remaining: f32,
    pub intensity: f32,
    pub tick_rate: f32,
    pub last_tick_time: f32,
    pub stacks: u32,
    pub max_stacks: u32,
    pub can_stack: bool,
    pub source_id: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusTable {
    slots: Vec<StatusSlot>,
}

pub struct TickEvent {
    pub kind: StatusKind,
    pub intensity: f32,
}

impl StatusTable {
    /// Applies a new effect of `kind`. If stackable and below `max_stacks`,
    /// increments the stack and additively combines intensity; otherwise
    /// refreshes duration/intensity to the max of old/new (spec §4.C).
    pub fn apply(&mut self, kind: StatusKind, duration: f32, intensity: f32, source_id: i32, now: f32) -> bool {
        if let Some(slot) = self.slots.iter_mut().find(|s| s.kind == kind) {
            if slot.can_stack && slot.stacks < slot.max_stacks {
                slot.stacks += 1;
                slot.intensity = (slot.intensity + intensity).min(1.0);
                slot.duration_remaining = slot.duration_remaining.max(duration);
            } else {
                slot.duration_remaining = slot.duration_remaining.max(duration);
                slot.intensity = slot.intensity.max(intensity);
            }
            slot.source_id = source_id;
            return true;
        }
        if self.slots.len() >= MAX_STATUS_SLOTS {
            return false;
        }
        self.slots.push(StatusSlot {
            kind,
            duration_remaining: duration,
            intensity,
            tick_rate: kind.tick_rate().unwrap_or(0.0),
            last_tick_time: now,
            stacks: 1,
            max_stacks: kind.max_stacks(),
            can_stack: kind.can_stack(),
            source_id,
        });
        true
    }

    pub fn remove(&mut self, kind: StatusKind) {
        self.slots.retain(|s| s.kind != kind);
    }

    /// Decrements durations, drops expired slots, and returns the DoT/HoT
    /// events scheduled to fire this tick.
    pub fn tick(&mut self, dt: f32, now: f32) -> Vec<TickEvent> {
        let mut events = Vec::new();
        for slot in self.slots.iter_mut() {
            slot.duration_remaining -= dt;
            if let Some(rate) = slot.kind.tick_rate() {
                if now - slot.last_tick_time >= rate {
                    slot.last_tick_time = now;
                    events.push(TickEvent { kind: slot.kind, intensity: slot.intensity * slot.stacks as f32 });
                }
            }
        }
        self.slots.retain(|s| s.duration_remaining > 0.0);
        events
    }

    pub fn movement_mod(&self) -> f32 {
        self.slots.iter().map(|s| s.kind.movement_contribution(s.intensity)).product()
    }

    pub fn damage_mod(&self) -> f32 {
        self.slots.iter().map(|s| s.kind.damage_contribution(s.intensity)).product()
    }

    pub fn defense_mod(&self) -> f32 {
        self.slots.iter().map(|s| s.kind.defense_contribution(s.intensity)).product()
    }

    pub fn stunned(&self) -> bool {
        self.slots.iter().any(|s| matches!(s.kind, StatusKind::Stunned | StatusKind::Hitstun | StatusKind::Knockdown))
    }

    pub fn silenced(&self) -> bool {
        self.slots.iter().any(|s| s.kind == StatusKind::Silenced)
    }

    pub fn stamina_regen_mod(&self) -> f32 {
        self.slots.iter().map(|s| s.kind.stamina_regen_contribution(s.intensity)).product()
    }

    pub fn accuracy_mod(&self) -> f32 {
        self.slots.iter().map(|s| s.kind.accuracy_contribution(s.intensity)).product()
    }

    /// Additive lifesteal-fraction bonus from buffs (spec §4.C).
    pub fn lifesteal_bonus(&self) -> f32 {
        self.slots.iter().map(|s| s.kind.lifesteal_contribution(s.intensity)).sum()
    }

    /// Additive crit-chance bonus from buffs (spec §4.C).
    pub fn crit_bonus(&self) -> f32 {
        self.slots.iter().map(|s| s.kind.crit_contribution(s.intensity)).sum()
    }

    pub fn slots(&self) -> &[StatusSlot] {
        &self.slots
    }
}

impl Default for StatusSlot {
    fn default() -> Self {
        StatusSlot {
            kind: StatusKind::Burning,
            duration_remaining: 0.0,
            intensity: 0.0,
            tick_rate: 0.0,
            last_tick_time: TIME_SENTINEL,
            stacks: 0,
            max_stacks: 1,
            can_stack: false,
            source_id: -1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_then_remove_restores_prior_modifiers() {
        let mut table = StatusTable::default();
        let before = table.movement_mod();
        table.apply(StatusKind::Slowed, 5.0, 0.5, -1, 0.0);
        assert!(table.movement_mod() < before);
        table.remove(StatusKind::Slowed);
        assert_eq!(table.movement_mod(), before);
    }

    #[test]
    fn stacking_respects_max_stacks() {
        let mut table = StatusTable::default();
        for _ in 0..10 {
            table.apply(StatusKind::Burning, 5.0, 0.1, -1, 0.0);
        }
        let slot = table.slots().iter().find(|s| s.kind == StatusKind::Burning).unwrap();
        assert!(slot.stacks <= slot.max_stacks);
    }

    #[test]
    fn expired_slots_are_pruned() {
        let mut table = StatusTable::default();
        table.apply(StatusKind::Slowed, 1.0, 0.5, -1, 0.0);
        table.tick(2.0, 2.0);
        assert!(table.slots().is_empty());
    }
}
