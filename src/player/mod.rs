//! Player entity (spec §3, §4.B, §4.C): kinematics, combat resolver,
//! status effect table.

pub mod combat;
pub mod kinematics;
pub mod status;

use crate::constants::*;
use combat::CombatState;
use kinematics::{JumpState, RollState};
use serde::{Deserialize, Serialize};
use status::StatusTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockResult {
    OutOfRange = -1,
    Hit = 0,
    Blocked = 1,
    PerfectParry = 2,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerInput {
    pub ix: f32,
    pub iy: f32,
    pub rolling: bool,
    pub jumping: bool,
    pub light: bool,
    pub heavy: bool,
    pub block: bool,
    pub special: bool,
}

impl Default for PlayerInput {
    fn default() -> Self {
        PlayerInput { ix: 0.0, iy: 0.0, rolling: false, jumping: false, light: false, heavy: false, block: false, special: false }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub fx: f32,
    pub fy: f32,
    pub grounded: bool,
    pub jump_count: u32,
    pub last_grounded_time: f32,
    pub jump_buffered_until: f32,

    pub hp: f32,
    pub stamina: f32,
    pub max_stamina: f32,

    pub attack_damage_mult: f32,
    pub defense_mult: f32,
    pub speed_mult: f32,
    pub stamina_regen_mult: f32,
    pub lifesteal_fraction: f32,
    pub crit_chance: f32,
    pub wolf_damage_mult: f32,
    pub hp_regen_per_sec: f32,
    pub treasure_mult: f32,
    pub weapon_damage: f32,
    pub weapon_crit: f32,
    pub curse_weakness: f32,

    pub combat: CombatState,
    pub roll: RollState,
    pub jump: JumpState,

    pub blocking: bool,
    pub block_face: (f32, f32),
    pub block_start_time: f32,

    pub stunned: bool,
    pub stun_end_time: f32,
    pub hyperarmor: bool,
    pub hyperarmor_end_time: f32,
    pub can_counter: bool,
    pub counter_end_time: f32,

    pub latched: bool,
    pub latch_end_time: f32,
    pub latch_enemy_idx: i32,

    pub near_wall: bool,
    pub wall_distance: f32,
    pub near_ledge: bool,
    pub ledge_distance: f32,
    pub wall_sliding: bool,

    pub status: StatusTable,
}

impl Default for Player {
    fn default() -> Self {
        Player {
            x: 0.5,
            y: 0.5,
            vx: 0.0,
            vy: 0.0,
            fx: 1.0,
            fy: 0.0,
            grounded: true,
            jump_count: 0,
            last_grounded_time: TIME_SENTINEL,
            jump_buffered_until: TIME_SENTINEL,
            hp: 1.0,
            stamina: 1.0,
            max_stamina: 1.0,
            attack_damage_mult: 1.0,
            defense_mult: 1.0,
            speed_mult: 1.0,
            stamina_regen_mult: 1.0,
            lifesteal_fraction: 0.0,
            crit_chance: 0.05,
            wolf_damage_mult: 1.0,
            hp_regen_per_sec: 0.0,
            treasure_mult: 1.0,
            weapon_damage: 1.0,
            weapon_crit: 0.0,
            curse_weakness: 1.0,
            combat: CombatState::default(),
            roll: RollState::default(),
            jump: JumpState::default(),
            blocking: false,
            block_face: (1.0, 0.0),
            block_start_time: TIME_SENTINEL,
            stunned: false,
            stun_end_time: TIME_SENTINEL,
            hyperarmor: false,
            hyperarmor_end_time: TIME_SENTINEL,
            can_counter: false,
            counter_end_time: TIME_SENTINEL,
            latched: false,
            latch_end_time: TIME_SENTINEL,
            latch_enemy_idx: NO_INDEX,
            near_wall: false,
            wall_distance: 0.0,
            near_ledge: false,
            ledge_distance: 0.0,
            wall_sliding: false,
            status: StatusTable::default(),
        }
    }
}

impl Player {
    /// Soft reset (`start()`, spec §6): position, velocity, stamina, hp,
    /// clock-relative timers — does not rebuild the world and leaves
    /// accumulated multipliers/choices untouched.
    pub fn soft_reset(&mut self, spawn: (f32, f32)) {
        self.x = spawn.0;
        self.y = spawn.1;
        self.vx = 0.0;
        self.vy = 0.0;
        self.hp = 1.0;
        self.stamina = self.max_stamina;
        self.grounded = true;
        self.jump_count = 0;
        self.last_grounded_time = TIME_SENTINEL;
        self.jump_buffered_until = TIME_SENTINEL;
        self.combat = CombatState::default();
        self.roll = RollState::default();
        self.blocking = false;
        self.block_start_time = TIME_SENTINEL;
        self.stunned = false;
        self.stun_end_time = TIME_SENTINEL;
        self.hyperarmor = false;
        self.hyperarmor_end_time = TIME_SENTINEL;
        self.can_counter = false;
        self.counter_end_time = TIME_SENTINEL;
        self.latched = false;
        self.latch_end_time = TIME_SENTINEL;
        self.latch_enemy_idx = NO_INDEX;
    }

    pub fn is_invulnerable(&self) -> bool {
        self.roll.state == kinematics::RollPhase::Active
    }

    pub fn is_stunned(&self) -> bool {
        self.stunned || self.status.stunned()
    }
}
