//! Danger zones: ≤16 entries, oldest evicted by `expires_at` on overflow
//! (spec §3, §5, §7).

use crate::constants::MAX_DANGER_ZONES;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DangerZone {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub strength: f32,
    pub expires_at: f32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DangerZones {
    entries: Vec<DangerZone>,
}

impl DangerZones {
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn post(&mut self, x: f32, y: f32, r: f32, strength: f32, ttl: f32, now: f32) {
        let zone = DangerZone { x, y, r, strength, expires_at: now + ttl };
        if self.entries.len() >= MAX_DANGER_ZONES {
            if let Some((idx, _)) = self
                .entries
                .iter()
                .enumerate()
                .min_by(|a, b| a.1.expires_at.total_cmp(&b.1.expires_at))
            {
                self.entries[idx] = zone;
                return;
            }
        }
        self.entries.push(zone);
    }

    pub fn expire(&mut self, now: f32) {
        self.entries.retain(|z| z.expires_at > now);
    }

    pub fn as_slice(&self) -> &[DangerZone] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflow_evicts_soonest_to_expire() {
        let mut zones = DangerZones::default();
        for i in 0..MAX_DANGER_ZONES {
            zones.post(0.1, 0.1, 0.05, 1.0, i as f32 + 1.0, 0.0);
        }
        assert_eq!(zones.len(), MAX_DANGER_ZONES);
        zones.post(0.2, 0.2, 0.05, 1.0, 100.0, 0.0);
        assert_eq!(zones.len(), MAX_DANGER_ZONES);
        assert!(zones.as_slice().iter().any(|z| z.expires_at == 100.0));
        assert!(!zones.as_slice().iter().any(|z| z.expires_at == 1.0));
    }

    #[test]
    fn expire_removes_past_zones() {
        let mut zones = DangerZones::default();
        zones.post(0.1, 0.1, 0.05, 1.0, 1.0, 0.0);
        zones.expire(2.0);
        assert!(zones.is_empty());
    }
}
