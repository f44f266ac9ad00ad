//! Hazards (spec §3, §5): ≤24 entries, type, radius, damage, cooldown,
//! triggered-once flag.

use crate::constants::MAX_HAZARDS;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HazardType {
    Fire,
    Ice,
    Poison,
    Spikes,
    Pit,
}

impl HazardType {
    /// Whether this hazard re-triggers every `cooldown` once off cooldown,
    /// or only once ever. Grounded on `terrain_hazards.h`: `Spike_Trap`
    /// (and the other DoT zones) check only the cooldown, while
    /// `Pit_Hole`/`Bear_Trap` latch `triggered` after the first hit.
    fn repeats(self) -> bool {
        !matches!(self, HazardType::Pit)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hazard {
    pub kind: HazardType,
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub damage: f32,
    pub cooldown: f32,
    pub last_trigger: f32,
    pub triggered_once: bool,
    pub duration: f32,
    pub activation_time: f32,
    pub active: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Hazards {
    entries: Vec<Hazard>,
}

impl Hazards {
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn push(&mut self, hazard: Hazard) {
        if self.entries.len() >= MAX_HAZARDS {
            self.entries.remove(0);
        }
        self.entries.push(hazard);
    }

    pub fn as_slice(&self) -> &[Hazard] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Updates activation windows and returns `(damage, dot_effect)` applied
    /// to the player this tick, if any hazard is in range and off cooldown.
    pub fn update(&mut self, now: f32, player_pos: (f32, f32)) -> Vec<(HazardType, f32)> {
        let mut effects = Vec::new();
        for hazard in self.entries.iter_mut() {
            hazard.active = now >= hazard.activation_time
                && (hazard.duration <= 0.0 || now < hazard.activation_time + hazard.duration);
            if !hazard.active {
                continue;
            }
            let dx = player_pos.0 - hazard.x;
            let dy = player_pos.1 - hazard.y;
            let in_range = (dx * dx + dy * dy).sqrt() <= hazard.radius;
            if !in_range {
                continue;
            }
            let off_cooldown = now - hazard.last_trigger >= hazard.cooldown;
            if !off_cooldown {
                continue;
            }
            if !hazard.kind.repeats() && hazard.triggered_once {
                continue;
            }
            hazard.last_trigger = now;
            if !hazard.kind.repeats() {
                hazard.triggered_once = true;
            }
            effects.push((hazard.kind, hazard.damage));
        }
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflow_drops_oldest() {
        let mut hazards = Hazards::default();
        for i in 0..MAX_HAZARDS + 1 {
            hazards.push(Hazard {
                kind: HazardType::Fire,
                x: 0.1,
                y: 0.1,
                radius: 0.05,
                damage: 0.1,
                cooldown: 1.0,
                last_trigger: crate::constants::TIME_SENTINEL,
                triggered_once: false,
                duration: 0.0,
                activation_time: 0.0,
                active: false,
            });
            let _ = i;
        }
        assert_eq!(hazards.len(), MAX_HAZARDS);
    }

    #[test]
    fn in_range_off_cooldown_triggers() {
        let mut hazards = Hazards::default();
        hazards.push(Hazard {
            kind: HazardType::Spikes,
            x: 0.5,
            y: 0.5,
            radius: 0.1,
            damage: 0.2,
            cooldown: 1.0,
            last_trigger: crate::constants::TIME_SENTINEL,
            triggered_once: false,
            duration: 0.0,
            activation_time: 0.0,
            active: false,
        });
        let effects = hazards.update(0.0, (0.5, 0.5));
        assert_eq!(effects.len(), 1);
    }
}
