//! Scent tracking (spec §4.F): player scent markers, alpha territory
//! marking, and wolf following behavior. Distinct from the decaying scent
//! *field* of `grids/scent.rs` — grounded on `original_source/_INDEX.md`'s
//! separate `scent_tracking.h` vs `scent.h`.

use crate::constants::{SCENT_MARKER_INTERVAL, SCENT_MARKER_LIFETIME, TERRITORY_MARK_INTERVAL};
use crate::grids::territory::TerritoryState;
use crate::wolf::{Emotion, Wolf, WolfState};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScentTrackingTimers {
    pub last_player_mark: f32,
    pub last_territory_mark: f32,
}

impl Default for ScentTrackingTimers {
    fn default() -> Self {
        ScentTrackingTimers { last_player_mark: crate::constants::TIME_SENTINEL, last_territory_mark: crate::constants::TIME_SENTINEL }
    }
}

pub fn tick_player_marker(timers: &mut ScentTrackingTimers, territory: &mut TerritoryState, player_pos: (f32, f32), now: f32) {
    if now - timers.last_player_mark >= SCENT_MARKER_INTERVAL {
        timers.last_player_mark = now;
        territory.deposit_marker(player_pos.0, player_pos.1, -1, now);
    }
    territory.decay_markers(now, SCENT_MARKER_LIFETIME);
}

pub fn tick_alpha_territory(
    timers: &mut ScentTrackingTimers,
    territory: &mut TerritoryState,
    alpha_pos: (f32, f32),
    radius: f32,
    pack_id: i32,
    now: f32,
    dt: f32,
) {
    if now - timers.last_territory_mark >= TERRITORY_MARK_INTERVAL {
        timers.last_territory_mark = now;
        territory.mark_territory(alpha_pos.0, alpha_pos.1, radius, pack_id, now);
    }
    territory.decay_territories(now, dt);
}

/// Wolves in Seek/Prowl follow the strongest nearby marker within 0.5; in
/// their own territory they gain morale and shift Calm→Confident.
pub fn apply_tracking(wolf: &mut Wolf, territory: &TerritoryState, pack_id: i32) -> Option<(f32, f32)> {
    let following = matches!(wolf.state, WolfState::Seek | WolfState::Prowl);
    let target = if following {
        territory
            .strongest_marker_near((wolf.x, wolf.y), 0.5)
            .map(|m| (m.x, m.y))
    } else {
        None
    };

    if territory.is_inside_own_territory((wolf.x, wolf.y), pack_id) {
        wolf.morale = (wolf.morale + 0.02).min(1.0);
        if matches!(wolf.emotion, Emotion::Calm) {
            wolf.emotion = Emotion::Confident;
        }
    }

    target
}
