//! Sound pings: ring buffer ≤32 `(x,y,intensity,time)` (spec §3, §5).

use crate::constants::MAX_SOUND_PINGS;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoundPing {
    pub x: f32,
    pub y: f32,
    pub intensity: f32,
    pub time: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundPings {
    ring: Vec<SoundPing>,
    next: usize,
}

impl Default for SoundPings {
    fn default() -> Self {
        SoundPings { ring: Vec::with_capacity(MAX_SOUND_PINGS), next: 0 }
    }
}

impl SoundPings {
    pub fn clear(&mut self) {
        self.ring.clear();
        self.next = 0;
    }

    /// Ring-overwrites the oldest entry on overflow (spec §5).
    pub fn post(&mut self, x: f32, y: f32, intensity: f32, time: f32) {
        let ping = SoundPing { x, y, intensity, time };
        if self.ring.len() < MAX_SOUND_PINGS {
            self.ring.push(ping);
        } else {
            self.ring[self.next] = ping;
            self.next = (self.next + 1) % MAX_SOUND_PINGS;
        }
    }

    pub fn as_slice(&self) -> &[SoundPing] {
        &self.ring
    }

    /// Loudest ping within `max_age` seconds, weighted by `intensity / (1+age) / distance`.
    pub fn loudest_audible(&self, listener: (f32, f32), now: f32, max_age: f32) -> Option<&SoundPing> {
        self.ring
            .iter()
            .filter(|p| now - p.time <= max_age)
            .max_by(|a, b| {
                weight(a, listener, now).total_cmp(&weight(b, listener, now))
            })
    }
}

fn weight(ping: &SoundPing, listener: (f32, f32), now: f32) -> f32 {
    let age = (now - ping.time).max(0.0);
    let dx = listener.0 - ping.x;
    let dy = listener.1 - ping.y;
    let dist = (dx * dx + dy * dy).sqrt().max(1e-4);
    ping.intensity / (1.0 + age) / dist
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_overwrites_oldest_on_overflow() {
        let mut pings = SoundPings::default();
        for i in 0..MAX_SOUND_PINGS {
            pings.post(0.1, 0.1, 1.0, i as f32);
        }
        pings.post(0.9, 0.9, 1.0, 999.0);
        assert_eq!(pings.as_slice().len(), MAX_SOUND_PINGS);
        assert!(pings.as_slice().iter().any(|p| p.time == 999.0));
        assert!(!pings.as_slice().iter().any(|p| p.time == 0.0));
    }
}
