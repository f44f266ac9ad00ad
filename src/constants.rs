//! Centralized tunables, transcribed from spec values rather than scattered
//! through each module (see DESIGN.md's note on `internal_core.h`).

// ----- Capacities (§5) -----
pub const MAX_ENEMIES: usize = 16;
pub const MAX_OBSTACLES: usize = 16;
pub const MAX_HAZARDS: usize = 24;
pub const MAX_DANGER_ZONES: usize = 16;
pub const MAX_SOUND_PINGS: usize = 32;
pub const MAX_VOCALIZATIONS: usize = 16;
pub const MAX_SCENT_MARKERS: usize = 64;
pub const MAX_CHOICE_POOL: usize = 64;
pub const MAX_TAKEN_CHOICES: usize = 32;
pub const MAX_TERRITORIES: usize = 4;
pub const MAX_PACKS: usize = 3;
pub const MAX_COMBO: u32 = 99;
pub const MAX_STATUS_SLOTS: usize = 16;
pub const MAX_LANDMARKS: usize = 3;
pub const MAX_EXITS: usize = 1;

// ----- Scent grid -----
pub const SCENT_W: usize = 48;
pub const SCENT_H: usize = 27;

// ----- Walkability grid -----
pub const WALK_W: usize = 41;
pub const WALK_H: usize = 23;

// ----- Player kinematics (§4.B) -----
pub const BASE_SPEED: f32 = 0.3;
pub const ACCEL: f32 = 12.0;
pub const FRICTION: f32 = 9.0;
pub const ROLL_IFRAME_DURATION: f32 = 0.30;
pub const ROLL_SLIDE_DURATION: f32 = 0.20;
pub const ROLL_STAMINA_COST: f32 = 0.50;
pub const ROLL_COOLDOWN: f32 = 0.80;
pub const ROLL_SPEED_MULT: f32 = 2.6;
pub const ROLL_SLIDE_FRICTION_MULT: f32 = 0.3;
pub const ROLL_SLIDE_INPUT_MULT: f32 = 0.5;
pub const MAX_JUMPS: u32 = 2;
pub const COYOTE_TIME: f32 = 0.15;
pub const JUMP_BUFFER: f32 = 0.10;
pub const JUMP_POWER: f32 = -0.45;
pub const SECOND_JUMP_MULT: f32 = 0.85;
pub const GRAVITY: f32 = 1.2;
pub const WALL_SLIDE_DAMPING: f32 = 0.6;
pub const LATCH_DRAG_SPEED: f32 = 0.22;
pub const LATCH_DURATION: f32 = 1.0;
pub const STAMINA_BLOCK_DRAIN: f32 = 0.10;
pub const STAMINA_REGEN: f32 = 0.10;
pub const BLOCK_START_COST: f32 = 0.10;

// ----- Combat (§4.C) -----
pub const ATTACK_RANGE: f32 = 0.055;
pub const ATTACK_ARC_COS_THRESHOLD: f32 = 0.34;
pub const ATTACK_KNOCKBACK: f32 = 0.12;
pub const ATTACK_COOLDOWN_SEC: f32 = 0.35;
pub const PARRY_WINDOW: f32 = 0.12;
pub const COUNTER_WINDOW: f32 = 0.5;
pub const COUNTER_DAMAGE_MULT: f32 = 1.5;
pub const PARRY_STUN_DURATION: f32 = 0.30;

pub const LIGHT_WINDUP: f32 = 0.05;
pub const LIGHT_ACTIVE: f32 = 0.08;
pub const LIGHT_RECOVERY: f32 = 0.15;
pub const LIGHT_DAMAGE: f32 = 0.20;

pub const HEAVY_WINDUP: f32 = 0.15;
pub const HEAVY_ACTIVE: f32 = 0.12;
pub const HEAVY_RECOVERY: f32 = 0.25;
pub const HEAVY_DAMAGE: f32 = 0.45;

pub const SPECIAL_WINDUP: f32 = 0.20;
pub const SPECIAL_ACTIVE: f32 = 0.15;
pub const SPECIAL_RECOVERY: f32 = 0.30;
pub const SPECIAL_DAMAGE: f32 = 0.60;

pub const COMBO_COOLDOWN_MULT: f32 = 0.7;
pub const COMBO_LIGHT_HEAVY_MULT: f32 = 0.8;
pub const COMBO_SPECIAL_FINISHER_MULT: f32 = 0.6;

// ----- Wolf AI (§4.D) -----
pub const ENEMY_SEEK_RANGE: f32 = 0.45;
pub const MEMORY_DECAY_PER_SEC: f32 = 0.8;
pub const SOUND_MAX_AUDIBLE: f32 = 0.5;
pub const LUNGE_RANGE: f32 = 0.12;
pub const LUNGE_COOLDOWN: f32 = 1.2;
pub const LUNGE_SPEED: f32 = 0.42;
pub const LUNGE_DURATION: f32 = 0.16;
pub const FEINT_DURATION: f32 = 0.10;
pub const BASE_FEINT_PROB: f32 = 0.25;
pub const WOLF_MAX_SPEED: f32 = 0.26;
pub const WOLF_ACCEL: f32 = 12.0;
pub const WOLF_FRICTION: f32 = 9.0;
pub const NOTICE_REACTION_DELAY: f32 = 0.75;
pub const SEPARATION_RADIUS: f32 = 0.03;

// ----- Pack controller (§4.E) -----
pub const PACK_HOWL_COOLDOWN: f32 = 8.0;
pub const PACK_ESCALATE_COOLDOWN: f32 = 5.0;
pub const PACK_RESPAWN_TIMER: f32 = 30.0;
pub const PACK_RETREAT_BROADCAST_DURATION: f32 = 3.0;

// ----- Alpha / vocalization / scent tracking (§4.F) -----
pub const SCENT_MARKER_INTERVAL: f32 = 2.0;
pub const SCENT_MARKER_LIFETIME: f32 = 30.0;
pub const TERRITORY_MARK_INTERVAL: f32 = 5.0;
pub const TERRITORY_DECAY_TIMEOUT: f32 = 60.0;
pub const VOCALIZATION_LIFETIME: f32 = 2.0;
pub const ALPHA_AURA_RADIUS: f32 = 0.4;
pub const INTIMIDATE_RANGE: f32 = 0.15;
pub const INTIMIDATE_DURATION: f32 = 3.0;
pub const BERSERK_RAGE_DURATION: f32 = 10.0;
pub const BERSERK_SPEED_MULT: f32 = 1.5;
pub const BERSERK_DAMAGE_MULT: f32 = 2.0;
pub const ADAPTIVE_RETARGET_INTERVAL: f32 = 10.0;
pub const ADAPTIVE_BLEND: f32 = 0.1;

// ----- Scent field (§4.G) -----
pub const SCENT_ADVECT_CELLS_PER_SEC: f32 = 6.0;
pub const SCENT_DECAY_PER_SEC: f32 = 0.35;
pub const SCENT_DEPOSIT_PER_SEC: f32 = 2.2;

// ----- Run loop (§4.H) -----
pub const PITY_RARE_ROUNDS: u32 = 3;
pub const PITY_LEGENDARY_ROUND: u32 = 10;
pub const RISK_ENTRY_MIN_CHOICES: u32 = 9;
pub const RISK_ENTRY_PROB: f32 = 0.3;
pub const ESCALATION_RATE_PER_SEC: f32 = 0.01;
pub const WOLF_KILLS_PER_CHOICE: u32 = 3;
pub const EXIT_CASHOUT_GOLD: u32 = 20;
pub const EXIT_CASHOUT_ESSENCE: u32 = 3;

// ----- Sentinels -----
pub const NO_INDEX: i32 = -1;
pub const TIME_SENTINEL: f32 = -1000.0;
