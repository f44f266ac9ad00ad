//! Vocalizations (spec §4.F): 12 kinds, ring buffer ≤16, per-wolf
//! cooldowns, reactions. Grounded on `original_source/_INDEX.md`'s
//! `wolf_vocalization.h`.

use crate::constants::{MAX_VOCALIZATIONS, VOCALIZATION_LIFETIME};
use crate::wolf::{Emotion, Wolf, WolfRole, WolfState};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VocalizationKind {
    Howl,
    Bark,
    Growl,
    Whine,
    Snarl,
    Yip,
    Rally,
    Hunt,
    BarkAlert,
    BarkCommand,
    WhineDistress,
    GrowlWarning,
}

impl VocalizationKind {
    pub fn range(self) -> f32 {
        match self {
            VocalizationKind::Howl | VocalizationKind::Rally => 0.6,
            VocalizationKind::Hunt | VocalizationKind::BarkCommand => 0.45,
            VocalizationKind::BarkAlert | VocalizationKind::GrowlWarning => 0.35,
            VocalizationKind::WhineDistress => 0.3,
            _ => 0.25,
        }
    }

    pub fn cooldown(self) -> f32 {
        match self {
            VocalizationKind::Howl => 8.0,
            VocalizationKind::Rally | VocalizationKind::Hunt => 5.0,
            _ => 3.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Vocalization {
    pub kind: VocalizationKind,
    pub x: f32,
    pub y: f32,
    pub emitted_at: f32,
    pub emitter_idx: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VocalizationBuffer {
    ring: Vec<Vocalization>,
    next: usize,
}

impl VocalizationBuffer {
    pub fn clear(&mut self) {
        self.ring.clear();
        self.next = 0;
    }

    /// Ring-overwrites the oldest entry on overflow (spec §5 clarification
    /// of the original's discard-all behavior; see DESIGN.md decision 2).
    pub fn emit(&mut self, v: Vocalization) {
        if self.ring.len() < MAX_VOCALIZATIONS {
            self.ring.push(v);
        } else {
            self.ring[self.next] = v;
            self.next = (self.next + 1) % MAX_VOCALIZATIONS;
        }
    }

    pub fn decay(&mut self, now: f32) {
        self.ring.retain(|v| now - v.emitted_at < VOCALIZATION_LIFETIME);
    }

    pub fn as_slice(&self) -> &[Vocalization] {
        &self.ring
    }
}

/// Picks the appropriate vocalization for a wolf given state/emotion/role,
/// returning `None` if nothing fits or the per-kind cooldown hasn't
/// elapsed.
pub fn choose_vocalization(wolf: &Wolf, is_alpha: bool, last_emitted: &mut [f32; 12], now: f32) -> Option<VocalizationKind> {
    let candidate = if is_alpha && matches!(wolf.state, WolfState::Howl) {
        VocalizationKind::Howl
    } else if matches!(wolf.role, WolfRole::Lead) && wolf.target_locked {
        VocalizationKind::BarkCommand
    } else if matches!(wolf.emotion, Emotion::Fearful) {
        VocalizationKind::WhineDistress
    } else if matches!(wolf.emotion, Emotion::Aggressive) {
        VocalizationKind::GrowlWarning
    } else if wolf.memory.noticed && now - wolf.memory.notice_time < 0.2 {
        VocalizationKind::BarkAlert
    } else {
        return None;
    };
    let idx = candidate as usize;
    if now - last_emitted[idx] < candidate.cooldown() {
        return None;
    }
    last_emitted[idx] = now;
    Some(candidate)
}

/// Applies the reaction of a nearby wolf hearing `kind` (spec §4.F).
pub fn apply_reaction(wolf: &mut Wolf, kind: VocalizationKind, source_pos: (f32, f32)) {
    match kind {
        VocalizationKind::Rally => {
            wolf.state = WolfState::Seek;
            wolf.memory.last_seen_x = source_pos.0;
            wolf.memory.last_seen_y = source_pos.1;
        }
        VocalizationKind::Hunt => {
            wolf.aggression = (wolf.aggression + 0.1).min(1.0);
            wolf.coordination = (wolf.coordination + 0.1).min(1.0);
        }
        VocalizationKind::BarkAlert => {
            wolf.state = WolfState::Seek;
            wolf.memory.noticed = true;
        }
        VocalizationKind::BarkCommand => {
            wolf.coordination = (wolf.coordination + 0.1).min(1.0);
            wolf.target_locked = true;
        }
        VocalizationKind::WhineDistress => {
            wolf.state = WolfState::Seek;
        }
        VocalizationKind::GrowlWarning => {
            wolf.aggression = (wolf.aggression + 0.05).min(1.0);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_overwrites_oldest_on_overflow() {
        let mut buf = VocalizationBuffer::default();
        for i in 0..MAX_VOCALIZATIONS {
            buf.emit(Vocalization { kind: VocalizationKind::Bark, x: 0.0, y: 0.0, emitted_at: i as f32, emitter_idx: 0 });
        }
        buf.emit(Vocalization { kind: VocalizationKind::Howl, x: 0.0, y: 0.0, emitted_at: 999.0, emitter_idx: 1 });
        assert_eq!(buf.as_slice().len(), MAX_VOCALIZATIONS);
        assert!(buf.as_slice().iter().any(|v| v.emitted_at == 999.0));
    }
}
