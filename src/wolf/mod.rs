//! Wolf pack AI (spec §3, §4.D-§4.F): per-wolf perception/emotion/steering,
//! pack controller, alpha/vocalization/scent-tracking/adaptive subsystems.

pub mod adaptive;
pub mod ai;
pub mod alpha;
pub mod pack;
pub mod scent_tracking;
pub mod vocalization;

use crate::constants::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WolfType {
    Scout,
    Hunter,
    Brute,
    Alpha,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WolfState {
    Idle,
    Seek,
    Circle,
    Harass,
    Recover,
    Ambush,
    Flank,
    Retreat,
    Prowl,
    Howl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Emotion {
    Calm,
    Aggressive,
    Fearful,
    Desperate,
    Confident,
    Frustrated,
    Hurt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WolfRole {
    None,
    Lead,
    FlankL,
    FlankR,
    Ambusher,
    Scout,
    PupGuard,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WolfMemory {
    pub last_seen_x: f32,
    pub last_seen_y: f32,
    pub last_seen_confidence: f32,
    pub last_scent_x: f32,
    pub last_scent_y: f32,
    pub last_scent_confidence: f32,
    pub noticed: bool,
    pub notice_time: f32,
}

impl Default for WolfMemory {
    fn default() -> Self {
        WolfMemory {
            last_seen_x: 0.0,
            last_seen_y: 0.0,
            last_seen_confidence: 0.0,
            last_scent_x: 0.0,
            last_scent_y: 0.0,
            last_scent_confidence: 0.0,
            noticed: false,
            notice_time: TIME_SENTINEL,
        }
    }
}

/// 12-scalar procedural animation output, write-only from the core's
/// perspective (spec §3).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WolfAnimOutput {
    pub values: [f32; 12],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wolf {
    pub active: bool,
    pub kind: WolfType,
    pub state: WolfState,
    pub pack_slot: u32,

    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub fx: f32,
    pub fy: f32,
    pub stamina: f32,
    pub health: f32,
    pub fatigue: f32,

    pub memory: WolfMemory,

    pub last_lunge_time: f32,
    pub lunge_end_time: f32,
    pub feint_end_time: f32,
    pub stun_end_time: f32,
    pub lunge_dir: (f32, f32),

    pub aggression: f32,
    pub intelligence: f32,
    pub coordination: f32,
    pub morale: f32,
    pub target_locked: bool,
    pub ambush_ready_time: f32,
    pub retreat_until_time: f32,

    pub emotion: Emotion,
    pub emotion_intensity: f32,
    pub last_damage_time: f32,
    pub successful_attacks: u32,
    pub failed_attacks: u32,

    pub role: WolfRole,

    pub anim: WolfAnimOutput,
}

impl Default for Wolf {
    fn default() -> Self {
        Wolf {
            active: false,
            kind: WolfType::Hunter,
            state: WolfState::Idle,
            pack_slot: 0,
            x: 0.0,
            y: 0.0,
            vx: 0.0,
            vy: 0.0,
            fx: 1.0,
            fy: 0.0,
            stamina: 1.0,
            health: 1.0,
            fatigue: 0.0,
            memory: WolfMemory::default(),
            last_lunge_time: TIME_SENTINEL,
            lunge_end_time: TIME_SENTINEL,
            feint_end_time: TIME_SENTINEL,
            stun_end_time: TIME_SENTINEL,
            lunge_dir: (1.0, 0.0),
            aggression: 0.5,
            intelligence: 0.5,
            coordination: 0.5,
            morale: 0.5,
            target_locked: false,
            ambush_ready_time: TIME_SENTINEL,
            retreat_until_time: TIME_SENTINEL,
            emotion: Emotion::Calm,
            emotion_intensity: 0.3,
            last_damage_time: TIME_SENTINEL,
            successful_attacks: 0,
            failed_attacks: 0,
            role: WolfRole::None,
            anim: WolfAnimOutput::default(),
        }
    }
}

impl Wolf {
    pub fn is_lunging(&self, now: f32) -> bool {
        now < self.lunge_end_time
    }

    pub fn is_feinting(&self, now: f32) -> bool {
        now < self.feint_end_time
    }

    /// Parry-stunned, same time-sentinel convention as `is_lunging`
    /// (spec §4.C perfect parry).
    pub fn is_stunned(&self, now: f32) -> bool {
        now < self.stun_end_time
    }
}

/// Up to 3 independent wolf packs tracked as slots (spec §3).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PackSlot {
    pub alive: bool,
    pub death_time: f32,
    pub respawn_timer: f32,
    pub member_indices: [i32; MAX_ENEMIES],
    pub member_count: u32,
}

impl Default for PackSlot {
    fn default() -> Self {
        PackSlot {
            alive: true,
            death_time: TIME_SENTINEL,
            respawn_timer: 0.0,
            member_indices: [NO_INDEX; MAX_ENEMIES],
            member_count: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PackPlan {
    Stalk,
    Encircle,
    Harass,
    Commit,
    Ambush,
    Pincer,
    Retreat,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackController {
    pub plan: PackPlan,
    pub morale: f32,
    pub sync_timer: f32,
    pub successes: u32,
    pub failures: u32,
    pub player_skill_estimate: f32,
    pub peak_wolves: u32,
    pub howl_cooldown_end: f32,
    pub escalate_cooldown_end: f32,

    pub alpha_wolf_index: i32,
    pub alpha_ability_cooldowns: [f32; 5],
    pub enrage: bool,
    pub enrage_end_time: f32,

    pub slots: [PackSlot; MAX_PACKS],
}

impl Default for PackController {
    fn default() -> Self {
        PackController {
            plan: PackPlan::Stalk,
            morale: 0.5,
            sync_timer: 0.0,
            successes: 0,
            failures: 0,
            player_skill_estimate: 0.5,
            peak_wolves: 0,
            howl_cooldown_end: TIME_SENTINEL,
            escalate_cooldown_end: TIME_SENTINEL,
            alpha_wolf_index: NO_INDEX,
            alpha_ability_cooldowns: [TIME_SENTINEL; 5],
            enrage: false,
            enrage_end_time: TIME_SENTINEL,
            slots: [PackSlot::default(); MAX_PACKS],
        }
    }
}
