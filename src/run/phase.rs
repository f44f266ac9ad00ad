//! Run-phase FSM: Explore → Fight → Choose → PowerUp → Risk → Escalate →
//! CashOut → Reset (spec §1, §4.H). Grounded on the teacher's
//! order-driven FSM transition style (`systems/morale.rs::rout_system`).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Explore,
    Fight,
    Choose,
    PowerUp,
    Risk,
    Escalate,
    CashOut,
    Reset,
}

impl Default for Phase {
    fn default() -> Self {
        Phase::Explore
    }
}

/// Forces an immediate phase transition (spec §6 `force_phase_transition`).
/// `id` maps to the `Phase` discriminant order declared above.
pub fn phase_from_id(id: u32) -> Option<Phase> {
    match id {
        0 => Some(Phase::Explore),
        1 => Some(Phase::Fight),
        2 => Some(Phase::Choose),
        3 => Some(Phase::PowerUp),
        4 => Some(Phase::Risk),
        5 => Some(Phase::Escalate),
        6 => Some(Phase::CashOut),
        7 => Some(Phase::Reset),
        _ => None,
    }
}

pub fn phase_id(phase: Phase) -> u32 {
    match phase {
        Phase::Explore => 0,
        Phase::Fight => 1,
        Phase::Choose => 2,
        Phase::PowerUp => 3,
        Phase::Risk => 4,
        Phase::Escalate => 5,
        Phase::CashOut => 6,
        Phase::Reset => 7,
    }
}
