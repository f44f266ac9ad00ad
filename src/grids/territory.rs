//! Territorial scent marking (spec §4.F): ≤64 scent markers + ≤4
//! territories `(center,radius,pack_id,strength,last_marked)`.

use crate::constants::{MAX_SCENT_MARKERS, MAX_TERRITORIES, TERRITORY_DECAY_TIMEOUT};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScentMarker {
    pub x: f32,
    pub y: f32,
    pub owner_id: i32,
    pub deposited_at: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Territory {
    pub cx: f32,
    pub cy: f32,
    pub radius: f32,
    pub pack_id: i32,
    pub strength: f32,
    pub last_marked: f32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TerritoryState {
    markers: Vec<ScentMarker>,
    next_marker: usize,
    territories: Vec<Territory>,
}

impl TerritoryState {
    pub fn clear(&mut self) {
        self.markers.clear();
        self.next_marker = 0;
        self.territories.clear();
    }

    pub fn deposit_marker(&mut self, x: f32, y: f32, owner_id: i32, now: f32) {
        let marker = ScentMarker { x, y, owner_id, deposited_at: now };
        if self.markers.len() < MAX_SCENT_MARKERS {
            self.markers.push(marker);
        } else {
            self.markers[self.next_marker] = marker;
            self.next_marker = (self.next_marker + 1) % MAX_SCENT_MARKERS;
        }
    }

    pub fn decay_markers(&mut self, now: f32, lifetime: f32) {
        self.markers.retain(|m| now - m.deposited_at < lifetime);
    }

    pub fn markers(&self) -> &[ScentMarker] {
        &self.markers
    }

    pub fn strongest_marker_near(&self, pos: (f32, f32), radius: f32) -> Option<&ScentMarker> {
        self.markers
            .iter()
            .filter(|m| {
                let dx = pos.0 - m.x;
                let dy = pos.1 - m.y;
                (dx * dx + dy * dy).sqrt() <= radius
            })
            .min_by(|a, b| {
                let da = (pos.0 - a.x).hypot(pos.1 - a.y);
                let db = (pos.0 - b.x).hypot(pos.1 - b.y);
                da.total_cmp(&db)
            })
    }

    pub fn mark_territory(&mut self, cx: f32, cy: f32, radius: f32, pack_id: i32, now: f32) {
        if let Some(t) = self.territories.iter_mut().find(|t| t.pack_id == pack_id) {
            t.cx = cx;
            t.cy = cy;
            t.radius = radius;
            t.strength = 1.0;
            t.last_marked = now;
            return;
        }
        if self.territories.len() >= MAX_TERRITORIES {
            return;
        }
        self.territories.push(Territory { cx, cy, radius, pack_id, strength: 1.0, last_marked: now });
    }

    pub fn decay_territories(&mut self, now: f32, dt: f32) {
        for t in self.territories.iter_mut() {
            if now - t.last_marked > TERRITORY_DECAY_TIMEOUT {
                t.strength = (t.strength - 0.1 * dt).max(0.0);
            }
        }
        self.territories.retain(|t| t.strength > 0.0);
    }

    pub fn territories(&self) -> &[Territory] {
        &self.territories
    }

    pub fn is_inside_own_territory(&self, pos: (f32, f32), pack_id: i32) -> bool {
        self.territories.iter().any(|t| {
            t.pack_id == pack_id && {
                let dx = pos.0 - t.cx;
                let dy = pos.1 - t.cy;
                (dx * dx + dy * dy).sqrt() <= t.radius
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_decay_after_lifetime() {
        let mut state = TerritoryState::default();
        state.deposit_marker(0.1, 0.1, 0, 0.0);
        state.decay_markers(31.0, 30.0);
        assert!(state.markers().is_empty());
    }

    #[test]
    fn territory_capacity_respected() {
        let mut state = TerritoryState::default();
        for i in 0..(MAX_TERRITORIES as i32 + 2) {
            state.mark_territory(0.5, 0.5, 0.2, i, 0.0);
        }
        assert_eq!(state.territories().len(), MAX_TERRITORIES);
    }
}
