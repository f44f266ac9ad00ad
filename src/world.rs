//! Top-level simulation state (spec §3, §5): owns the player, wolf pack,
//! world grids, and run-loop state, and drives the fixed per-tick order
//! through [`World::step`]. Grounded on the teacher's `SimWorld` container
//! shape (`api.rs`) but holding plain owned data instead of a `bevy_ecs`
//! world.

use crate::animation::{self, AnimationOverlay};
use crate::constants::*;
use crate::grids::danger::{DangerZone, DangerZones};
use crate::grids::hazards::{Hazard, HazardType, Hazards};
use crate::grids::obstacles::{self, Obstacle};
use crate::grids::scent::ScentField;
use crate::grids::sound::SoundPings;
use crate::grids::territory::TerritoryState;
use crate::player::combat::{self, AttackType, DamageResult};
use crate::player::kinematics;
use crate::player::status::StatusKind;
use crate::player::{Player, PlayerInput};
use crate::rng::Rng;
use crate::run::cashout::CashOutState;
use crate::run::choices::ChoiceState;
use crate::run::escalate::{self, EscalateState};
use crate::run::phase::Phase;
use crate::run::risk::{self, RiskState};
use crate::wolf::adaptive::{self, AdaptiveStats, DifficultyConfig};
use crate::wolf::alpha;
use crate::wolf::pack;
use crate::wolf::scent_tracking::{self, ScentTrackingTimers};
use crate::wolf::vocalization::{self, VocalizationBuffer};
use crate::wolf::{PackController, Wolf, WolfType};
use serde::{Deserialize, Serialize};

const PLAYER_RADIUS: f32 = 0.018;
const WOLF_RADIUS: f32 = 0.02;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Biome {
    Forest,
    Swamp,
    Mountains,
    Plains,
}

impl Biome {
    fn from_roll(r: f32) -> Self {
        if r < 0.25 {
            Biome::Forest
        } else if r < 0.5 {
            Biome::Swamp
        } else if r < 0.75 {
            Biome::Mountains
        } else {
            Biome::Plains
        }
    }

    fn wind(self) -> (f32, f32) {
        match self {
            Biome::Forest => (0.1, 0.0),
            Biome::Swamp => (0.0, 0.05),
            Biome::Mountains => (0.3, 0.1),
            Biome::Plains => (0.2, 0.2),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Exit {
    pub x: f32,
    pub y: f32,
}

const SPAWN_CORNERS: [(f32, f32); 4] = [(0.06, 0.06), (0.94, 0.06), (0.06, 0.94), (0.94, 0.94)];

/// The owned simulation state. Every field is plain data so the whole
/// struct derives `Clone`/`Serialize` for snapshotting and deterministic
/// replay (spec §7).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub sim_time: f32,
    pub rng: Rng,
    pub phase: Phase,
    pub biome: Biome,

    pub obstacle_count: u32,
    pub wolf_kills_since_choice: u32,
    pub total_choices_offered: u32,

    pub player: Player,
    pub input: PlayerInput,
    pub player_elemental_tag: u32,

    pub wolves: Vec<Wolf>,
    pub pack: PackController,

    pub obstacles: Vec<Obstacle>,
    pub scent: ScentField,
    pub danger_zones: DangerZones,
    pub hazards: Hazards,
    pub sound_pings: SoundPings,
    pub territory: TerritoryState,
    pub vocalizations: VocalizationBuffer,
    pub scent_timers: ScentTrackingTimers,
    pub vocalization_cooldowns: [[f32; 12]; MAX_ENEMIES],

    pub wind: (f32, f32),
    pub den: (f32, f32),
    pub den_radius: f32,
    pub landmarks: Vec<Landmark>,
    pub exits: Vec<Exit>,

    pub choices: ChoiceState,
    pub risk: RiskState,
    pub escalate: EscalateState,
    pub cashout: CashOutState,

    pub difficulty: DifficultyConfig,
    pub adaptive_stats: AdaptiveStats,

    /// Alpha Intimidate aura window (spec §4.D alpha abilities).
    pub intimidate_active: bool,
    pub intimidate_end_time: f32,

    pub overlay: AnimationOverlay,
}

impl Default for World {
    fn default() -> Self {
        World {
            sim_time: 0.0,
            rng: Rng::new(1),
            phase: Phase::default(),
            biome: Biome::Forest,
            obstacle_count: 0,
            wolf_kills_since_choice: 0,
            total_choices_offered: 0,
            player: Player::default(),
            input: PlayerInput::default(),
            player_elemental_tag: 0,
            wolves: Vec::with_capacity(MAX_ENEMIES),
            pack: PackController::default(),
            obstacles: Vec::with_capacity(MAX_OBSTACLES),
            scent: ScentField::default(),
            danger_zones: DangerZones::default(),
            hazards: Hazards::default(),
            sound_pings: SoundPings::default(),
            territory: TerritoryState::default(),
            vocalizations: VocalizationBuffer::default(),
            scent_timers: ScentTrackingTimers::default(),
            vocalization_cooldowns: [[TIME_SENTINEL; 12]; MAX_ENEMIES],
            wind: (0.0, 0.0),
            den: (0.5, 0.5),
            den_radius: 0.2,
            landmarks: Vec::with_capacity(MAX_LANDMARKS),
            exits: Vec::with_capacity(MAX_EXITS),
            choices: ChoiceState::default(),
            risk: RiskState::new(),
            escalate: EscalateState::default(),
            cashout: CashOutState::default(),
            difficulty: DifficultyConfig::default(),
            adaptive_stats: AdaptiveStats::default(),
            intimidate_active: false,
            intimidate_end_time: TIME_SENTINEL,
            overlay: AnimationOverlay::default(),
        }
    }
}

impl World {
    /// Full run setup (spec §6 `init_run`): reseeds the RNG, rolls the
    /// biome, places the player at one of four spawn corners, generates
    /// obstacles guaranteed walkable to center, seeds hazards/landmarks/
    /// exits, and spawns the starting pack.
    pub fn init_run(&mut self, seed: u64, start_weapon_damage: f32) {
        *self = World::default();
        self.rng = Rng::new(seed);
        self.biome = Biome::from_roll(self.rng.f01());
        self.wind = self.biome.wind();

        let corner_idx = self.rng.below(4) as usize;
        let spawn = SPAWN_CORNERS[corner_idx];
        self.player.x = spawn.0;
        self.player.y = spawn.1;
        // start_weapon_damage is a bonus over the base multiplier of 1.0,
        // not a replacement — a fresh run with 0 bonus still deals full
        // base damage.
        self.player.weapon_damage = 1.0 + start_weapon_damage;

        let (obstacles, count) = obstacles::generate(&mut self.rng, spawn);
        self.obstacles = obstacles;
        self.obstacle_count = count;

        self.den = (1.0 - spawn.0, 1.0 - spawn.1);

        for i in 0..MAX_LANDMARKS {
            let angle = i as f32 * std::f32::consts::TAU / MAX_LANDMARKS as f32 + self.rng.f01();
            self.landmarks.push(Landmark {
                x: (0.5 + angle.cos() * 0.35).clamp(0.05, 0.95),
                y: (0.5 + angle.sin() * 0.35).clamp(0.05, 0.95),
            });
        }
        for _ in 0..MAX_EXITS {
            self.exits.push(Exit { x: 1.0 - spawn.0, y: 1.0 - spawn.1 });
        }

        self.seed_hazards();
        self.spawn_wolves(5);
    }

    fn seed_hazards(&mut self) {
        let kinds = match self.biome {
            Biome::Forest => [HazardType::Spikes, HazardType::Pit],
            Biome::Swamp => [HazardType::Poison, HazardType::Pit],
            Biome::Mountains => [HazardType::Ice, HazardType::Spikes],
            Biome::Plains => [HazardType::Fire, HazardType::Spikes],
        };
        let count = 3 + self.rng.below(4);
        for i in 0..count {
            let kind = kinds[i as usize % kinds.len()];
            self.hazards.push(Hazard {
                kind,
                x: self.rng.range(0.1, 0.9),
                y: self.rng.range(0.1, 0.9),
                radius: self.rng.range(0.02, 0.05),
                damage: self.rng.range(0.03, 0.08),
                cooldown: self.rng.range(0.5, 1.5),
                last_trigger: TIME_SENTINEL,
                triggered_once: false,
                duration: 0.0,
                activation_time: 0.0,
                active: false,
            });
        }
    }

    /// Spawns `n` wolves (capped at [`MAX_ENEMIES`]) ringed around the den,
    /// returning the number actually spawned.
    pub fn spawn_wolves(&mut self, n: u32) -> u32 {
        let mut spawned = 0;
        for i in 0..n {
            if self.wolves.len() >= MAX_ENEMIES {
                break;
            }
            let angle = i as f32 * std::f32::consts::TAU / n.max(1) as f32;
            let kind = match i % 4 {
                0 => WolfType::Scout,
                1 => WolfType::Hunter,
                2 => WolfType::Brute,
                _ => WolfType::Hunter,
            };
            let mut wolf = Wolf::default();
            wolf.active = true;
            wolf.kind = kind;
            wolf.x = (self.den.0 + angle.cos() * 0.1).clamp(0.05, 0.95);
            wolf.y = (self.den.1 + angle.sin() * 0.1).clamp(0.05, 0.95);
            wolf.pack_slot = 0;
            self.wolves.push(wolf);
            spawned += 1;
        }
        if let Some(slot) = self.pack.slots.get_mut(0) {
            slot.alive = true;
            slot.member_count = self.wolves.len().min(MAX_ENEMIES) as u32;
            for (i, idx) in slot.member_indices.iter_mut().enumerate() {
                *idx = if i < self.wolves.len() { i as i32 } else { NO_INDEX };
            }
        }
        self.pack.peak_wolves = self.pack.peak_wolves.max(self.wolves.len() as u32);
        spawned
    }

    pub fn clear_enemies(&mut self) {
        self.wolves.clear();
    }

    /// Soft reset (spec §6 `start`): does not regenerate the world, only
    /// restores the player's position/vitals for a fresh attempt.
    pub fn start(&mut self) {
        let spawn = (self.player.x, self.player.y);
        self.player.soft_reset(spawn);
    }

    /// Full reset with a new seed, equivalent to `init_run(seed, 0)` (spec
    /// §6): the starting weapon damage resets to the base value, it is not
    /// carried over from the run being abandoned.
    pub fn reset_run(&mut self, seed: u64) {
        self.init_run(seed, 0.0);
    }

    fn tick_jump(&mut self, dt: f32) {
        let now = self.sim_time;
        if self.player.grounded {
            self.player.last_grounded_time = now;
            self.player.jump_count = 0;
        }
        let coyote_ok = now - self.player.last_grounded_time <= COYOTE_TIME;

        if self.input.jumping {
            self.player.jump_buffered_until = now + JUMP_BUFFER;
            self.player.jump.buffered = true;
        }

        let buffered_ok = self.player.jump.buffered && now <= self.player.jump_buffered_until;
        let can_ground_jump = self.player.jump_count == 0 && (self.player.grounded || coyote_ok);
        let can_air_jump = self.player.jump_count > 0 && self.player.jump_count < MAX_JUMPS;

        if buffered_ok && (can_ground_jump || can_air_jump) {
            let mult = if self.player.jump_count == 0 { 1.0 } else { SECOND_JUMP_MULT };
            self.player.vy = JUMP_POWER * mult;
            self.player.jump_count += 1;
            self.player.grounded = false;
            self.player.jump.buffered = false;
            self.player.jump_buffered_until = TIME_SENTINEL;
        }

        if !self.player.grounded {
            self.player.vy += GRAVITY * dt;
        }
    }

    fn tick_combat_timers(&mut self) {
        let now = self.sim_time;
        combat::advance_attack(&mut self.player.combat, now);
        if self.player.stunned && now >= self.player.stun_end_time {
            self.player.stunned = false;
        }
        if self.player.hyperarmor && now >= self.player.hyperarmor_end_time {
            self.player.hyperarmor = false;
        }
        if self.player.can_counter && now >= self.player.counter_end_time {
            self.player.can_counter = false;
        }
        if self.player.latched && now >= self.player.latch_end_time {
            self.player.latched = false;
            self.player.latch_enemy_idx = NO_INDEX;
        }
    }

    fn apply_status_events(&mut self, dt: f32) {
        let now = self.sim_time;
        let events = self.player.status.tick(dt, now);
        for event in events {
            match event.kind {
                StatusKind::Burning | StatusKind::Poisoned | StatusKind::Bleeding => {
                    self.player.hp = (self.player.hp - 0.04 * event.intensity).max(0.0);
                }
                StatusKind::Regenerating => {
                    self.player.hp = (self.player.hp + 0.04 * event.intensity).min(1.0);
                }
                _ => {}
            }
        }
    }

    fn tick_movement(&mut self, dt: f32) {
        if self.player.is_stunned() {
            self.player.vx *= (1.0 - FRICTION * dt).max(0.0);
            self.player.vy *= (1.0 - FRICTION * dt).max(0.0);
        } else {
            if self.input.rolling {
                kinematics::try_start_roll(&mut self.player.roll, &mut self.player.stamina, (self.player.fx, self.player.fy), self.sim_time);
            }
            kinematics::advance_roll(&mut self.player.roll, self.sim_time);
            let desired = kinematics::desired_velocity(
                (self.input.ix, self.input.iy),
                &self.player.roll,
                self.player.speed_mult,
                self.player.status.movement_mod(),
                self.player.blocking,
                self.player.latched,
            );
            let friction = kinematics::friction_mult(&self.player.roll);
            kinematics::integrate(&mut self.player.vx, &mut self.player.vy, desired, friction, dt);
        }

        let input_into_wall = self.input.ix != 0.0 || self.input.iy != 0.0;
        let (grounded, wall_sliding) = kinematics::resolve_obstacle_collisions(
            &mut self.player.x,
            &mut self.player.y,
            &mut self.player.vx,
            &mut self.player.vy,
            PLAYER_RADIUS,
            &self.obstacles,
            input_into_wall,
        );
        self.player.grounded = grounded || self.player.y >= 0.999;
        self.player.wall_sliding = wall_sliding;
        if self.player.grounded {
            self.player.vy = 0.0;
        }

        self.player.x += self.player.vx * dt;
        self.player.y += self.player.vy * dt;

        let mut enemy_discs: Vec<(f32, f32, f32)> =
            self.wolves.iter().filter(|w| w.active).map(|w| (w.x, w.y, WOLF_RADIUS)).collect();
        kinematics::resolve_enemy_overlaps(&mut self.player.x, &mut self.player.y, PLAYER_RADIUS, &mut enemy_discs);
        let mut disc_iter = enemy_discs.into_iter();
        for wolf in self.wolves.iter_mut().filter(|w| w.active) {
            if let Some((x, y, _)) = disc_iter.next() {
                wolf.x = x;
                wolf.y = y;
            }
        }

        kinematics::clamp_to_world(&mut self.player.x, &mut self.player.y);

        if self.player.latched {
            if let Some(enemy) = usize::try_from(self.player.latch_enemy_idx).ok().and_then(|i| self.wolves.get(i)) {
                let dx = enemy.x - self.player.x;
                let dy = enemy.y - self.player.y;
                let dist = (dx * dx + dy * dy).sqrt();
                if dist > 1e-4 {
                    self.player.x += dx / dist * LATCH_DRAG_SPEED * dt;
                    self.player.y += dy / dist * LATCH_DRAG_SPEED * dt;
                }
            }
        }

        if self.input.ix != 0.0 || self.input.iy != 0.0 {
            let (fx, fy) = crate::math::normalize(self.input.ix, self.input.iy);
            self.player.fx = fx;
            self.player.fy = fy;
        }
    }

    fn tick_resources(&mut self, dt: f32) {
        if self.input.block && !self.player.blocking && self.player.stamina >= BLOCK_START_COST {
            self.player.blocking = true;
            self.player.block_start_time = self.sim_time;
            self.player.block_face = (self.player.fx, self.player.fy);
            self.player.stamina -= BLOCK_START_COST;
        } else if !self.input.block {
            self.player.blocking = false;
        }

        if self.player.blocking {
            self.player.stamina = (self.player.stamina - STAMINA_BLOCK_DRAIN * dt).max(0.0);
            if self.player.stamina <= 0.0 {
                self.player.blocking = false;
            }
        } else if matches!(self.player.combat.attack_state, combat::AttackPhase::Idle) {
            let regen_mod = self.player.stamina_regen_mult * self.player.status.stamina_regen_mod();
            self.player.stamina = (self.player.stamina + STAMINA_REGEN * regen_mod * dt).min(self.player.max_stamina);
        }

        if self.player.hp_regen_per_sec > 0.0 && self.player.hp > 0.0 {
            self.player.hp = (self.player.hp + self.player.hp_regen_per_sec * dt).min(1.0);
        }
    }

    fn tick_hazards(&mut self) {
        let effects = self.hazards.update(self.sim_time, (self.player.x, self.player.y));
        for (kind, damage) in effects {
            self.player.hp = (self.player.hp - damage * self.player.defense_mult * self.player.status.defense_mod()).max(0.0);
            match kind {
                HazardType::Fire => {
                    self.player.status.apply(StatusKind::Burning, 4.0, 0.5, NO_INDEX, self.sim_time);
                }
                HazardType::Ice => {
                    self.player.status.apply(StatusKind::Chilled, 3.0, 0.5, NO_INDEX, self.sim_time);
                }
                HazardType::Poison => {
                    self.player.status.apply(StatusKind::Poisoned, 5.0, 0.5, NO_INDEX, self.sim_time);
                }
                HazardType::Spikes | HazardType::Pit => {}
            }
        }
    }

    fn try_player_attack(&mut self) {
        let now = self.sim_time;
        if self.player.is_stunned() || self.player.blocking {
            return;
        }
        let silenced = self.player.status.silenced();
        if self.input.light {
            combat::try_attack(&mut self.player.combat, AttackType::Light, &mut self.player.stamina, 0.1, (self.player.fx, self.player.fy), silenced, now);
        } else if self.input.heavy {
            if combat::try_feint_cancel(&mut self.player.combat, self.input.block) {
                return;
            }
            combat::try_attack(&mut self.player.combat, AttackType::Heavy, &mut self.player.stamina, 0.2, (self.player.fx, self.player.fy), silenced, now);
        } else if self.input.special {
            combat::try_attack(&mut self.player.combat, AttackType::Special, &mut self.player.stamina, 0.35, (self.player.fx, self.player.fy), silenced, now);
        }
    }

    fn combat_hit_sweep(&mut self) {
        let now = self.sim_time;
        if !matches!(self.player.combat.attack_state, combat::AttackPhase::Active) {
            return;
        }
        let attacker_pos = (self.player.x, self.player.y);
        let attack_dir = self.player.combat.attack_dir;
        let curse_mult = risk::curse_damage_mult(&self.risk);
        let accuracy_mod = self.player.status.accuracy_mod();
        let lifesteal_bonus = self.player.status.lifesteal_bonus();
        let crit_bonus = self.player.status.crit_bonus();

        for idx in 0..self.wolves.len() {
            if !self.wolves[idx].active {
                continue;
            }
            if self.player.combat.hit_enemies_this_swing.contains(&(idx as u32)) {
                continue;
            }
            let wolf_pos = (self.wolves[idx].x, self.wolves[idx].y);
            if !combat::hit_test(attacker_pos, attack_dir, wolf_pos, accuracy_mod) {
                continue;
            }
            self.player.combat.hit_enemies_this_swing.push(idx as u32);

            let can_counter = self.player.can_counter && now < self.player.counter_end_time;
            let DamageResult { damage, lifesteal, .. } = combat::compute_damage(
                self.player.combat.attack_type,
                self.player.attack_damage_mult,
                self.player.weapon_damage,
                self.player.curse_weakness * curse_mult,
                true,
                self.player.wolf_damage_mult,
                self.player.crit_chance + crit_bonus,
                self.player.weapon_crit,
                self.player.lifesteal_fraction + lifesteal_bonus,
                can_counter,
                &mut self.rng,
            );
            self.player.can_counter = false;

            self.wolves[idx].health = (self.wolves[idx].health - damage).max(0.0);
            self.wolves[idx].last_damage_time = now;
            self.player.hp = (self.player.hp + lifesteal).min(1.0);

            if self.wolves[idx].health <= 0.0 {
                self.wolves[idx].active = false;
                self.pack.successes += 1;
                self.adaptive_stats.record_kill();
                self.wolf_kills_since_choice += 1;

                let (gold, essence) = crate::run::cashout::kill_reward(
                    self.risk.risk_multiplier * self.player.treasure_mult,
                    self.risk.elite_active,
                    &mut self.rng,
                );
                self.cashout.gold += gold as u32;
                self.cashout.essence += essence as u32;

                if self.wolf_kills_since_choice >= WOLF_KILLS_PER_CHOICE {
                    self.wolf_kills_since_choice = 0;
                    self.total_choices_offered += 1;
                    crate::run::choices::generate_choices(&mut self.choices, self.player_elemental_tag, &mut self.rng);
                    self.phase = Phase::Choose;
                }
            }
        }

        if self.escalate.miniboss.active {
            let miniboss_pos = (self.escalate.miniboss.x, self.escalate.miniboss.y);
            if combat::hit_test(attacker_pos, attack_dir, miniboss_pos, accuracy_mod) {
                let can_counter = self.player.can_counter && now < self.player.counter_end_time;
                let DamageResult { damage, .. } = combat::compute_damage(
                    self.player.combat.attack_type,
                    self.player.attack_damage_mult,
                    self.player.weapon_damage,
                    self.player.curse_weakness * curse_mult,
                    false,
                    1.0,
                    self.player.crit_chance + crit_bonus,
                    self.player.weapon_crit,
                    0.0,
                    can_counter,
                    &mut self.rng,
                );
                self.player.can_counter = false;
                escalate::damage_miniboss(&mut self.escalate.miniboss, damage);
            }
        }
    }

    fn update_pack_controller(&mut self, dt: f32) {
        let now = self.sim_time;
        let player_pos = (self.player.x, self.player.y);
        let agg = pack::aggregate(&self.wolves, player_pos);
        let recent_success = self.pack.successes > 0;
        let recent_failure = self.pack.failures > 0;
        pack::update_skill_estimate(&mut self.pack, recent_success, recent_failure);
        pack::update_morale(&mut self.pack, &agg);
        self.pack.plan = pack::select_plan(&agg, self.pack.morale, self.pack.player_skill_estimate);
        if let Some(lead_idx) = pack::assign_roles(&mut self.wolves, self.pack.plan, player_pos) {
            pack::broadcast(&mut self.wolves, lead_idx, 0.4, self.pack.plan, now);
        }

        let deficit = 1.0 - self.player.hp;
        if let Some(howl_at) = pack::maybe_reinforce(&mut self.pack, deficit, now, &mut self.rng) {
            let remaining = MAX_ENEMIES.saturating_sub(self.wolves.len()) as u32;
            let n = remaining.min(2);
            if n > 0 {
                self.den = howl_at;
                self.spawn_wolves(n);
            }
        }

        for slot in self.pack.slots.iter_mut() {
            if !slot.alive {
                slot.respawn_timer -= dt;
                if slot.respawn_timer <= 0.0 {
                    slot.alive = true;
                }
            }
        }
    }

    fn update_wolves(&mut self, dt: f32) {
        let now = self.sim_time;
        let player_pos = (self.player.x, self.player.y);
        let player_facing = (self.player.fx, self.player.fy);
        let danger_zones: Vec<DangerZone> = self.danger_zones.as_slice().to_vec();
        let plan = self.pack.plan;
        let skill_estimate = self.pack.player_skill_estimate;

        let anyone_attacking = self.wolves.iter().filter(|w| w.is_lunging(now)).count() as u32;

        for idx in 0..self.wolves.len() {
            if !self.wolves[idx].active {
                continue;
            }

            let perception = {
                let wolf = &mut self.wolves[idx];
                crate::wolf::ai::perceive(wolf, player_pos, &self.sound_pings, &self.scent, now)
            };
            crate::wolf::ai::decay_memory(&mut self.wolves[idx], dt);
            crate::wolf::ai::update_emotion(&mut self.wolves[idx], self.pack.morale, now, &mut self.rng);

            let stunned = self.wolves[idx].is_stunned(now);
            let is_lead = matches!(self.wolves[idx].role, crate::wolf::WolfRole::Lead);
            let steering = crate::wolf::ai::steering_target(&self.wolves[idx], &perception, player_pos, player_facing, self.den, self.wind, now);
            let steering = crate::wolf::ai::terrain_advantage_blend(&self.wolves[idx], steering, 1.0 - perception.dist_to_player, &danger_zones);
            let avoidance = crate::wolf::ai::compute_avoidance(idx, &self.wolves, &danger_zones, player_pos, player_facing);
            let combined = crate::math::normalize(steering.0 + avoidance.0, steering.1 + avoidance.1);

            if !stunned && !self.wolves[idx].is_lunging(now) && !self.wolves[idx].is_feinting(now) {
                let noticed = self.wolves[idx].memory.noticed;
                let notice_time = self.wolves[idx].memory.notice_time;
                let gate = crate::wolf::ai::LungeGate {
                    noticed,
                    notice_time,
                    dist: perception.dist_to_player,
                    plan,
                    anyone_attacking,
                    is_lead,
                    rng: &mut self.rng,
                };
                if let Some(is_lunge) = crate::wolf::ai::decide_lunge(&self.wolves[idx], gate, now, skill_estimate) {
                    self.wolves[idx].last_lunge_time = now;
                    if is_lunge {
                        self.wolves[idx].lunge_end_time = now + LUNGE_DURATION;
                        self.wolves[idx].lunge_dir = perception.to_player;
                    } else {
                        self.wolves[idx].feint_end_time = now + FEINT_DURATION;
                    }
                }
            }

            let berserk = self.pack.enrage && now < self.pack.enrage_end_time;
            let desired = if stunned {
                (0.0, 0.0)
            } else if self.wolves[idx].is_lunging(now) {
                (self.wolves[idx].lunge_dir.0 * LUNGE_SPEED, self.wolves[idx].lunge_dir.1 * LUNGE_SPEED)
            } else {
                let (dvx, dvy) = crate::wolf::ai::desired_velocity(
                    combined,
                    self.wolves[idx].emotion,
                    plan,
                    1.0,
                    skill_estimate,
                    self.wolves[idx].intelligence,
                    self.wind,
                );
                if berserk {
                    (dvx * BERSERK_SPEED_MULT, dvy * BERSERK_SPEED_MULT)
                } else {
                    (dvx, dvy)
                }
            };

            let mut vx = self.wolves[idx].vx;
            let mut vy = self.wolves[idx].vy;
            crate::wolf::ai::integrate(&mut vx, &mut vy, desired, dt);
            self.wolves[idx].vx = vx;
            self.wolves[idx].vy = vy;
            self.wolves[idx].x = (self.wolves[idx].x + vx * dt).clamp(0.02, 0.98);
            self.wolves[idx].y = (self.wolves[idx].y + vy * dt).clamp(0.02, 0.98);
            if vx != 0.0 || vy != 0.0 {
                let (fx, fy) = crate::math::normalize(vx, vy);
                self.wolves[idx].fx = fx;
                self.wolves[idx].fy = fy;
            }

            let exertion = if self.wolves[idx].is_lunging(now) { 1.0 } else { (vx * vx + vy * vy).sqrt() / WOLF_MAX_SPEED };
            crate::wolf::ai::update_fatigue(&mut self.wolves[idx].fatigue, exertion, dt);
            self.compute_wolf_anim(idx);

            if !stunned && perception.dist_to_player <= ATTACK_RANGE + WOLF_RADIUS && self.wolves[idx].is_lunging(now) {
                self.resolve_wolf_attack(idx);
            }
        }
    }

    /// 12-scalar procedural animation output for a wolf (spec §3), kept
    /// minimal like the player overlay: a function of speed, lunge state,
    /// and emotion intensity rather than a full skeleton rig.
    fn compute_wolf_anim(&mut self, idx: usize) {
        let now = self.sim_time;
        let wolf = &mut self.wolves[idx];
        let speed = (wolf.vx * wolf.vx + wolf.vy * wolf.vy).sqrt() / WOLF_MAX_SPEED.max(1e-4);
        let lunging = if wolf.is_lunging(now) { 1.0 } else { 0.0 };
        let v = &mut wolf.anim.values;
        v[0] = speed.min(1.0);
        v[1] = (now * 8.0).sin() * speed.min(1.0);
        v[2] = (now * 8.0).cos() * speed.min(1.0);
        v[3] = lunging;
        v[4] = wolf.emotion_intensity;
        v[5] = wolf.fatigue;
        v[6] = (now * 5.0 + wolf.x).sin() * 0.1;
        v[7] = wolf.vx;
        v[8] = wolf.vy;
        v[9] = wolf.health;
        v[10] = if wolf.target_locked { 1.0 } else { 0.0 };
        v[11] = wolf.coordination;
    }

    fn resolve_wolf_attack(&mut self, idx: usize) {
        let now = self.sim_time;
        let wolf_pos = (self.wolves[idx].x, self.wolves[idx].y);
        let is_rolling = self.player.is_invulnerable();
        let is_hyperarmor = combat::hyperarmor_active(&self.player.combat, now, self.player.hyperarmor_end_time);
        let result = combat::handle_incoming_attack(
            wolf_pos,
            (self.player.x, self.player.y),
            is_rolling,
            is_hyperarmor,
            self.player.blocking,
            self.player.block_face,
            self.player.block_start_time,
            now,
        );
        match result {
            -1 => {
                self.adaptive_stats.record_dodge();
            }
            2 => {
                self.adaptive_stats.record_block();
                self.player.can_counter = true;
                self.player.counter_end_time = now + COUNTER_WINDOW;
                self.player.stamina = self.player.max_stamina;
                self.wolves[idx].stamina = (self.wolves[idx].stamina - 0.4).max(0.0);
                self.wolves[idx].stun_end_time = now + PARRY_STUN_DURATION;
                self.wolves[idx].failed_attacks += 1;
                self.pack.failures += 1;
            }
            1 => {
                self.adaptive_stats.record_block();
                self.player.stamina = (self.player.stamina - 0.15).max(0.0);
                self.wolves[idx].successful_attacks += 1;
            }
            _ => {
                self.adaptive_stats.record_hit_taken();
                let berserk_mult = if self.pack.enrage && now < self.pack.enrage_end_time { BERSERK_DAMAGE_MULT } else { 1.0 };
                let damage =
                    0.12 * self.player.defense_mult * self.player.status.defense_mod() * self.escalate.enemy_damage_mult * berserk_mult;
                self.player.hp = (self.player.hp - damage).max(0.0);
                self.wolves[idx].successful_attacks += 1;
                self.pack.successes += 1;
                self.player.stunned = true;
                self.player.stun_end_time = now + 0.2;
            }
        }
    }

    fn update_alpha_and_vocalizations(&mut self, dt: f32) {
        let now = self.sim_time;
        let player_pos = (self.player.x, self.player.y);

        let previous_alpha = self.pack.alpha_wolf_index;
        self.pack.alpha_wolf_index = alpha::select_alpha(&self.wolves);
        if previous_alpha >= 0 && self.pack.alpha_wolf_index < 0 {
            if let Some(idx) = alpha::mourning_candidate(&self.wolves) {
                self.emit_vocalization(idx, vocalization::VocalizationKind::Howl);
            }
        }
        if self.pack.alpha_wolf_index >= 0 {
            alpha::apply_aura(&mut self.wolves, self.pack.alpha_wolf_index);

            let alpha_idx = self.pack.alpha_wolf_index as usize;
            let alpha_snapshot = self.wolves[alpha_idx].clone();
            let dist_to_player = {
                let dx = alpha_snapshot.x - player_pos.0;
                let dy = alpha_snapshot.y - player_pos.1;
                (dx * dx + dy * dy).sqrt()
            };
            self.intimidate_active = self.intimidate_active && now < self.intimidate_end_time;
            if let Some(ability) = alpha::choose_ability(&mut self.pack, &alpha_snapshot, player_pos, self.wolves.len() as u32, now) {
                let vocal = match ability {
                    alpha::AlphaAbility::RallyPack => {
                        self.pack.morale = (self.pack.morale + 0.2).min(1.0);
                        vocalization::VocalizationKind::Rally
                    }
                    alpha::AlphaAbility::CoordinatedStrike => {
                        for w in self.wolves.iter_mut().filter(|w| w.active) {
                            w.coordination = (w.coordination + 0.2).min(1.0);
                        }
                        vocalization::VocalizationKind::Hunt
                    }
                    alpha::AlphaAbility::Intimidate => {
                        self.intimidate_active = true;
                        self.intimidate_end_time = now + INTIMIDATE_DURATION;
                        vocalization::VocalizationKind::GrowlWarning
                    }
                    alpha::AlphaAbility::CallReinforcements => {
                        let remaining = MAX_ENEMIES.saturating_sub(self.wolves.len()) as u32;
                        self.den = (alpha_snapshot.x, alpha_snapshot.y);
                        self.spawn_wolves(remaining.min(1));
                        vocalization::VocalizationKind::Howl
                    }
                    alpha::AlphaAbility::BerserkRage => {
                        self.pack.enrage = true;
                        self.pack.enrage_end_time = now + BERSERK_RAGE_DURATION;
                        vocalization::VocalizationKind::Snarl
                    }
                };
                self.emit_vocalization(alpha_idx, vocal);
            }
            self.player.stamina_regen_mult = alpha::intimidate_stamina_mult(self.intimidate_active && dist_to_player <= INTIMIDATE_RANGE);

            scent_tracking::tick_alpha_territory(
                &mut self.scent_timers,
                &mut self.territory,
                (alpha_snapshot.x, alpha_snapshot.y),
                self.den_radius,
                alpha_snapshot.pack_slot as i32,
                now,
                dt,
            );
        } else {
            self.intimidate_active = false;
            self.player.stamina_regen_mult = 1.0;
        }

        scent_tracking::tick_player_marker(&mut self.scent_timers, &mut self.territory, player_pos, now);

        for idx in 0..self.wolves.len() {
            if !self.wolves[idx].active {
                continue;
            }
            let is_alpha = self.pack.alpha_wolf_index == idx as i32;
            let pack_id = self.wolves[idx].pack_slot as i32;
            let _ = scent_tracking::apply_tracking(&mut self.wolves[idx], &self.territory, pack_id);

            let wolf_snapshot = self.wolves[idx].clone();
            if let Some(kind) = vocalization::choose_vocalization(&wolf_snapshot, is_alpha, &mut self.vocalization_cooldowns[idx], now) {
                self.emit_vocalization(idx, kind);
            }
        }

        self.vocalizations.decay(now);
        let heard: Vec<(i32, vocalization::VocalizationKind, (f32, f32))> = self
            .vocalizations
            .as_slice()
            .iter()
            .filter(|v| now - v.emitted_at < 0.05)
            .map(|v| (v.emitter_idx, v.kind, (v.x, v.y)))
            .collect();
        for (emitter, kind, pos) in heard {
            for (i, wolf) in self.wolves.iter_mut().enumerate() {
                if i as i32 == emitter || !wolf.active {
                    continue;
                }
                let dx = wolf.x - pos.0;
                let dy = wolf.y - pos.1;
                if (dx * dx + dy * dy).sqrt() <= kind.range() {
                    vocalization::apply_reaction(wolf, kind, pos);
                }
            }
        }
    }

    fn emit_vocalization(&mut self, idx: usize, kind: vocalization::VocalizationKind) {
        let wolf = &self.wolves[idx];
        self.vocalizations.emit(vocalization::Vocalization {
            kind,
            x: wolf.x,
            y: wolf.y,
            emitted_at: self.sim_time,
            emitter_idx: idx as i32,
        });
    }

    fn tick_run_phases(&mut self, dt: f32) {
        let now = self.sim_time;
        risk::tick_curses(&mut self.risk, dt);
        escalate::tick_level(&mut self.escalate, dt);

        if let Some(damage) =
            escalate::update_miniboss(&mut self.escalate.miniboss, (self.player.x, self.player.y), self.escalate.level, now, dt)
        {
            self.player.hp = (self.player.hp - damage).max(0.0);
        }

        match self.phase {
            Phase::Explore | Phase::Fight => {
                if self.risk.active {
                    self.phase = Phase::Risk;
                } else if risk::should_enter_risk(self.total_choices_offered, &mut self.rng) {
                    risk::begin_risk(&mut self.risk, &mut self.danger_zones, now, (self.player.x, self.player.y), &mut self.rng);
                    self.phase = Phase::Risk;
                } else if !self.wolves.iter().any(|w| w.active) {
                    self.phase = Phase::Escalate;
                }
            }
            Phase::Risk => {
                if !self.risk.active {
                    self.phase = Phase::Explore;
                }
            }
            Phase::Escalate => {
                let event = match self.rng.below(5) {
                    0 => escalate::EscalateEvent::Density,
                    1 => escalate::EscalateEvent::Modifiers,
                    2 => escalate::EscalateEvent::MiniBoss,
                    3 => escalate::EscalateEvent::Frenzy,
                    _ => escalate::EscalateEvent::Swarm,
                };
                escalate::apply_event(&mut self.escalate, event, &mut self.rng, (self.player.x, self.player.y));
                let remaining = MAX_ENEMIES.saturating_sub(self.wolves.len()) as u32;
                self.spawn_wolves(remaining.min(5));
                self.phase = Phase::Explore;
            }
            Phase::Choose => {}
            Phase::PowerUp => {
                self.phase = Phase::Explore;
            }
            Phase::CashOut => {
                if crate::run::cashout::should_exit(&self.cashout) {
                    self.phase = Phase::Explore;
                }
            }
            Phase::Reset => {}
        }
    }

    /// Advances the simulation by `dt` seconds of CPU-bound, purely
    /// deterministic work (spec §5's fixed 14-step tick order).
    pub fn step(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        self.sim_time += dt;

        self.tick_combat_timers();
        self.apply_status_events(dt);
        self.try_player_attack();
        self.tick_jump(dt);
        self.tick_movement(dt);
        self.tick_resources(dt);
        self.tick_hazards();
        self.combat_hit_sweep();

        self.scent.step(dt, self.wind, (self.player.x, self.player.y));
        self.update_pack_controller(dt);
        self.update_wolves(dt);
        self.update_alpha_and_vocalizations(dt);

        self.danger_zones.expire(self.sim_time);
        self.tick_run_phases(dt);

        animation::compute(&mut self.overlay, &self.player, self.sim_time, self.wind);

        adaptive::maybe_retarget(&mut self.difficulty, &mut self.adaptive_stats, self.sim_time);
    }

    pub fn is_player_burning(&self) -> bool {
        self.player.status.slots().iter().any(|s| matches!(s.kind, StatusKind::Burning))
    }

    pub fn is_player_poisoned(&self) -> bool {
        self.player.status.slots().iter().any(|s| matches!(s.kind, StatusKind::Poisoned))
    }

    pub fn is_player_slowed(&self) -> bool {
        self.player.status.slots().iter().any(|s| matches!(s.kind, StatusKind::Slowed | StatusKind::Chilled))
    }

    pub fn is_player_trapped(&self) -> bool {
        self.player.latched || self.player.status.slots().iter().any(|s| matches!(s.kind, StatusKind::Rooted | StatusKind::Frozen))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_then_reset_matches_fresh_reset() {
        let mut a = World::default();
        a.init_run(42, 1.0);
        for _ in 0..30 {
            a.step(1.0 / 60.0);
        }
        a.reset_run(7);

        let mut b = World::default();
        b.init_run(7, 1.0);

        assert_eq!(a.biome, b.biome);
        assert_eq!(a.obstacles.len(), b.obstacles.len());
        assert_eq!(a.wolves.len(), b.wolves.len());
    }

    #[test]
    fn deterministic_replay() {
        let mut a = World::default();
        a.init_run(99, 1.0);
        let mut b = World::default();
        b.init_run(99, 1.0);

        a.input.ix = 1.0;
        b.input.ix = 1.0;
        for _ in 0..120 {
            a.step(1.0 / 60.0);
            b.step(1.0 / 60.0);
        }

        assert_eq!(a.player.x, b.player.x);
        assert_eq!(a.player.y, b.player.y);
        assert_eq!(a.wolves.len(), b.wolves.len());
        for (wa, wb) in a.wolves.iter().zip(b.wolves.iter()) {
            assert_eq!(wa.x, wb.x);
            assert_eq!(wa.y, wb.y);
        }
    }

    #[test]
    fn spawn_lands_on_a_known_corner() {
        let mut w = World::default();
        w.init_run(5, 1.0);
        assert!(SPAWN_CORNERS.iter().any(|c| (c.0 - w.player.x).abs() < 1e-5 && (c.1 - w.player.y).abs() < 1e-5));
    }

    #[test]
    fn positions_stay_in_unit_square() {
        let mut w = World::default();
        w.init_run(5, 1.0);
        w.input.ix = 1.0;
        w.input.iy = 1.0;
        for _ in 0..600 {
            w.step(1.0 / 60.0);
        }
        assert!((0.0..=1.0).contains(&w.player.x));
        assert!((0.0..=1.0).contains(&w.player.y));
    }
}
