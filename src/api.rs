//! Public flat interface (spec §6): a single wrapper struct around
//! [`World`] exposing lifecycle calls, input setters and read-only getters.
//! No call here ever panics; fallible actions return the documented integer
//! status codes (spec §7) instead of `Result`, matching the teacher's
//! `SimWorld` shape (`api.rs`) as the precedent for a flat method surface
//! over an owned simulation struct.

use crate::constants::*;
use crate::grids::hazards::HazardType;
use crate::player::combat::{self, AttackPhase, AttackType};
use crate::player::kinematics::RollPhase;
use crate::player::status::StatusKind;
use crate::run::cashout::{self, ForgeOption, ShopItemType};
use crate::run::choices::{self, EffectKind};
use crate::run::escalate;
use crate::run::phase::{self, Phase};
use crate::run::risk;
use crate::world::{Biome, World};
use crate::wolf::{PackPlan, WolfRole, WolfState, WolfType};

/// Maps an external status-kind id to its [`StatusKind`], in the order the
/// variants are declared in `player::status`.
fn status_kind_from_id(id: u32) -> Option<StatusKind> {
    use StatusKind::*;
    const TABLE: [StatusKind; 22] = [
        Burning, Poisoned, Bleeding, Stunned, Hitstun, Knockdown, Slowed, Rooted, Blinded, Silenced, Weakened,
        Fragile, Exhausted, Chilled, Frozen, DamageBoost, SpeedBoost, DefenseBoost, Regenerating, StaminaBoost,
        LifestealBoost, CritBoost,
    ];
    TABLE.get(id as usize).copied()
}

fn attack_type_from_id(id: u32) -> AttackType {
    match id {
        1 => AttackType::Heavy,
        2 => AttackType::Special,
        _ => AttackType::Light,
    }
}

/// Applies a choice's payload or a shop/forge reward to the player's stat
/// block (spec §3 choice catalogue, §4.H economy).
fn apply_effect(player: &mut crate::player::Player, effect: EffectKind) {
    match effect {
        EffectKind::StaminaCap(v) => player.max_stamina += v,
        EffectKind::Speed(v) => player.speed_mult += v,
        EffectKind::Damage(v) => player.attack_damage_mult += v,
        EffectKind::Defense(v) => player.defense_mult += v,
        EffectKind::Lifesteal(v) => player.lifesteal_fraction += v,
        EffectKind::Treasure(v) => player.treasure_mult += v,
    }
}

pub struct SimWorld {
    world: World,
}

impl Default for SimWorld {
    fn default() -> Self {
        SimWorld { world: World::default() }
    }
}

impl SimWorld {
    pub fn new() -> Self {
        SimWorld::default()
    }

    // ----- Lifecycle -----

    pub fn init_run(&mut self, seed: u64, start_weapon: f32) {
        self.world.init_run(seed, start_weapon);
    }

    pub fn reset_run(&mut self, seed: u64) {
        self.world.reset_run(seed);
    }

    pub fn start(&mut self) {
        self.world.start();
    }

    pub fn step(&mut self, dt: f32) {
        self.world.step(dt);
    }

    // ----- Input setters -----

    #[allow(clippy::too_many_arguments)]
    pub fn set_player_input(&mut self, ix: f32, iy: f32, rolling: bool, jumping: bool, light: bool, heavy: bool, block: bool, special: bool) {
        self.world.input.ix = ix;
        self.world.input.iy = iy;
        self.world.input.rolling = rolling;
        self.world.input.jumping = jumping;
        self.world.input.light = light;
        self.world.input.heavy = heavy;
        self.world.input.block = block;
        self.world.input.special = special;
    }

    fn try_attack_now(&mut self, attack_type: AttackType, stamina_cost: f32) -> i32 {
        let now = self.world.sim_time;
        let player = &mut self.world.player;
        if player.is_stunned() || player.blocking {
            return 0;
        }
        let facing = (player.fx, player.fy);
        let silenced = player.status.silenced();
        combat::try_attack(&mut player.combat, attack_type, &mut player.stamina, stamina_cost, facing, silenced, now) as i32
    }

    pub fn on_light_attack(&mut self) -> i32 {
        self.try_attack_now(AttackType::Light, 0.1)
    }

    pub fn on_heavy_attack(&mut self) -> i32 {
        self.try_attack_now(AttackType::Heavy, 0.2)
    }

    pub fn on_special_attack(&mut self) -> i32 {
        self.try_attack_now(AttackType::Special, 0.35)
    }

    pub fn on_roll_start(&mut self) -> i32 {
        let now = self.world.sim_time;
        let player = &mut self.world.player;
        let facing = (player.fx, player.fy);
        crate::player::kinematics::try_start_roll(&mut player.roll, &mut player.stamina, facing, now) as i32
    }

    pub fn set_blocking(&mut self, on: bool, face_x: f32, face_y: f32) -> i32 {
        let now = self.world.sim_time;
        let player = &mut self.world.player;
        if !on {
            player.blocking = false;
            return 1;
        }
        if player.blocking {
            return 1;
        }
        if player.stamina < BLOCK_START_COST {
            return 0;
        }
        player.blocking = true;
        player.block_start_time = now;
        player.block_face = (face_x, face_y);
        player.stamina -= BLOCK_START_COST;
        1
    }

    /// A parry is just a block timed to land within `PARRY_WINDOW` of
    /// `block_start_time` (spec §6 `on_parry`, §4.C).
    pub fn on_parry(&mut self) -> i32 {
        let (fx, fy) = (self.world.player.fx, self.world.player.fy);
        self.set_blocking(true, fx, fy)
    }

    /// Re-runs the range/arc test before delegating to the block/parry
    /// resolver, since the resolver itself only checks range. This is the
    /// same callback `resolve_wolf_attack` uses internally for wolves, so
    /// it applies the same parry/block/hit side effects (spec §6 "also the
    /// callback wolves use").
    pub fn handle_incoming_attack(&mut self, attacker_x: f32, attacker_y: f32, dir_x: f32, dir_y: f32) -> i32 {
        let now = self.world.sim_time;
        let player = &self.world.player;
        let self_pos = (player.x, player.y);
        let attacker_pos = (attacker_x, attacker_y);
        let dir = crate::math::normalize(dir_x, dir_y);
        if !combat::hit_test(attacker_pos, dir, self_pos, 1.0) {
            return -1;
        }
        let is_rolling = player.is_invulnerable();
        let is_hyperarmor = combat::hyperarmor_active(&player.combat, now, player.hyperarmor_end_time);
        let result = combat::handle_incoming_attack(
            attacker_pos,
            self_pos,
            is_rolling,
            is_hyperarmor,
            player.blocking,
            player.block_face,
            player.block_start_time,
            now,
        );
        let player = &mut self.world.player;
        match result {
            2 => {
                player.can_counter = true;
                player.counter_end_time = now + COUNTER_WINDOW;
                player.stamina = player.max_stamina;
            }
            1 => {
                player.stamina = (player.stamina - 0.15).max(0.0);
            }
            0 => {
                let damage = 0.12 * player.defense_mult * player.status.defense_mod();
                player.hp = (player.hp - damage).max(0.0);
                player.stunned = true;
                player.stun_end_time = now + 0.2;
            }
            _ => {}
        }
        result
    }

    pub fn set_wind(&mut self, wx: f32, wy: f32) {
        self.world.wind = (wx, wy);
    }

    pub fn post_sound(&mut self, x: f32, y: f32, intensity: f32) {
        let now = self.world.sim_time;
        self.world.sound_pings.post(x, y, intensity, now);
    }

    pub fn post_danger(&mut self, x: f32, y: f32, r: f32, strength: f32, ttl: f32) {
        let now = self.world.sim_time;
        self.world.danger_zones.post(x, y, r, strength, ttl, now);
    }

    pub fn set_den(&mut self, x: f32, y: f32, r: f32) {
        self.world.den = (x, y);
        self.world.den_radius = r;
    }

    pub fn clear_enemies(&mut self) {
        self.world.clear_enemies();
    }

    pub fn spawn_wolves(&mut self, n: u32) -> u32 {
        self.world.spawn_wolves(n)
    }

    pub fn force_phase_transition(&mut self, phase_id: u32) -> i32 {
        match phase::phase_from_id(phase_id) {
            Some(p) => {
                self.world.phase = p;
                1
            }
            None => 0,
        }
    }

    /// Commits an offered choice and applies its payload to the player's
    /// stat block (spec §3 catalogue, §8 idempotency property).
    pub fn commit_choice(&mut self, id: u32) -> i32 {
        match choices::commit_choice(&mut self.world.choices, id) {
            Some(choice) => {
                apply_effect(&mut self.world.player, choice.effect);
                1
            }
            None => 0,
        }
    }

    pub fn escape_risk(&mut self) -> i32 {
        risk::try_escape(&mut self.world.risk, self.world.player.stamina) as i32
    }

    pub fn exit_cashout(&mut self) -> i32 {
        if matches!(self.world.phase, Phase::CashOut) {
            self.world.phase = Phase::Explore;
            1
        } else {
            0
        }
    }

    pub fn buy_shop_item(&mut self, i: u32) -> i32 {
        match cashout::buy_item(&mut self.world.cashout, i as usize) {
            Some(item) => {
                let player = &mut self.world.player;
                match item.kind {
                    ShopItemType::Weapon => player.weapon_damage += item.power * 0.5,
                    ShopItemType::Armor => player.defense_mult += item.power * 0.3,
                    ShopItemType::Consumable => player.hp = (player.hp + item.power * 0.5).min(1.0),
                    ShopItemType::Blessing => player.attack_damage_mult += item.power * 0.2,
                    ShopItemType::Mystery => {
                        if item.mystery_roll < 0.34 {
                            player.weapon_damage += item.power * 0.5;
                        } else if item.mystery_roll < 0.67 {
                            player.lifesteal_fraction += item.power * 0.15;
                        } else {
                            player.treasure_mult += item.power * 0.3;
                        }
                    }
                }
                1
            }
            None => 0,
        }
    }

    pub fn buy_heal(&mut self) -> i32 {
        if cashout::buy_heal(&mut self.world.cashout) {
            self.world.player.hp = 1.0;
            1
        } else {
            0
        }
    }

    pub fn reroll_shop(&mut self) -> i32 {
        cashout::reroll_shop(&mut self.world.cashout, &mut self.world.rng) as i32
    }

    pub fn use_forge_option(&mut self, i: u32) -> i32 {
        let option = match i {
            1 => ForgeOption::Reinforce,
            2 => ForgeOption::Enchant,
            3 => ForgeOption::Reroll,
            _ => ForgeOption::Sharpen,
        };
        let success = cashout::use_forge_option(option, &mut self.world.rng);
        if success {
            let player = &mut self.world.player;
            match option {
                ForgeOption::Sharpen => player.weapon_damage += 0.1,
                ForgeOption::Reinforce => player.defense_mult += 0.1,
                ForgeOption::Enchant => player.weapon_crit += 0.05,
                ForgeOption::Reroll => {
                    cashout::reroll_shop(&mut self.world.cashout, &mut self.world.rng);
                }
            }
        }
        success as i32
    }

    pub fn apply_burning(&mut self, duration: f32, intensity: f32) -> i32 {
        let now = self.world.sim_time;
        self.world.player.status.apply(StatusKind::Burning, duration, intensity, NO_INDEX, now) as i32
    }

    pub fn apply_stun(&mut self, duration: f32, intensity: f32) -> i32 {
        let now = self.world.sim_time;
        self.world.player.status.apply(StatusKind::Stunned, duration, intensity, NO_INDEX, now) as i32
    }

    pub fn apply_slow(&mut self, duration: f32, intensity: f32) -> i32 {
        let now = self.world.sim_time;
        self.world.player.status.apply(StatusKind::Slowed, duration, intensity, NO_INDEX, now) as i32
    }

    pub fn apply_damage_boost(&mut self, duration: f32, intensity: f32) -> i32 {
        let now = self.world.sim_time;
        self.world.player.status.apply(StatusKind::DamageBoost, duration, intensity, NO_INDEX, now) as i32
    }

    pub fn remove_status_effect(&mut self, kind: u32) {
        if let Some(k) = status_kind_from_id(kind) {
            self.world.player.status.remove(k);
        }
    }

    // ----- Getters: player -----

    pub fn get_x(&self) -> f32 {
        self.world.player.x
    }

    pub fn get_y(&self) -> f32 {
        self.world.player.y
    }

    pub fn get_vel_x(&self) -> f32 {
        self.world.player.vx
    }

    pub fn get_vel_y(&self) -> f32 {
        self.world.player.vy
    }

    pub fn get_hp(&self) -> f32 {
        self.world.player.hp
    }

    pub fn get_stamina(&self) -> f32 {
        self.world.player.stamina
    }

    pub fn get_player_anim_state(&self) -> u32 {
        match self.world.player.combat.attack_state {
            AttackPhase::Idle => 0,
            AttackPhase::Windup => 1,
            AttackPhase::Active => 2,
            AttackPhase::Recovery => 3,
        }
    }

    pub fn get_is_grounded(&self) -> bool {
        self.world.player.grounded
    }

    pub fn get_jump_count(&self) -> u32 {
        self.world.player.jump_count
    }

    pub fn get_is_wall_sliding(&self) -> bool {
        self.world.player.wall_sliding
    }

    pub fn get_is_rolling(&self) -> bool {
        !matches!(self.world.player.roll.state, RollPhase::Idle)
    }

    pub fn get_is_invulnerable(&self) -> bool {
        self.world.player.is_invulnerable()
    }

    pub fn get_is_stunned(&self) -> bool {
        self.world.player.is_stunned()
    }

    pub fn get_stun_remaining(&self) -> f32 {
        (self.world.player.stun_end_time - self.world.sim_time).max(0.0)
    }

    pub fn get_block_state(&self) -> bool {
        self.world.player.blocking
    }

    pub fn get_combo_count(&self) -> u32 {
        self.world.player.combat.combo_count
    }

    pub fn get_can_counter(&self) -> bool {
        self.world.player.can_counter
    }

    pub fn get_has_hyperarmor(&self) -> bool {
        let now = self.world.sim_time;
        combat::hyperarmor_active(&self.world.player.combat, now, self.world.player.hyperarmor_end_time)
    }

    pub fn get_armor_value(&self) -> f32 {
        self.world.player.defense_mult
    }

    pub fn get_near_wall(&self) -> bool {
        self.world.player.near_wall
    }

    pub fn get_wall_distance(&self) -> f32 {
        self.world.player.wall_distance
    }

    pub fn get_near_ledge(&self) -> bool {
        self.world.player.near_ledge
    }

    pub fn get_ledge_distance(&self) -> f32 {
        self.world.player.ledge_distance
    }

    pub fn get_roll_state(&self) -> u32 {
        match self.world.player.roll.state {
            RollPhase::Idle => 0,
            RollPhase::Active => 1,
            RollPhase::Sliding => 2,
        }
    }

    pub fn get_roll_time(&self) -> f32 {
        if matches!(self.world.player.roll.state, RollPhase::Idle) {
            0.0
        } else {
            self.world.sim_time - self.world.player.roll.start_time
        }
    }

    pub fn get_speed(&self) -> f32 {
        crate::math::length(self.world.player.vx, self.world.player.vy)
    }

    pub fn get_time_seconds(&self) -> f32 {
        self.world.sim_time
    }

    pub fn get_phase(&self) -> u32 {
        phase::phase_id(self.world.phase)
    }

    pub fn get_room_count(&self) -> u32 {
        self.world.obstacle_count
    }

    pub fn get_current_biome(&self) -> u32 {
        match self.world.biome {
            Biome::Forest => 0,
            Biome::Swamp => 1,
            Biome::Mountains => 2,
            Biome::Plains => 3,
        }
    }

    // ----- Getters: attack timing constants -----

    pub fn get_attack_windup_sec(&self, attack_type: u32) -> f32 {
        attack_type_from_id(attack_type).timings().0
    }

    pub fn get_attack_active_sec(&self, attack_type: u32) -> f32 {
        attack_type_from_id(attack_type).timings().1
    }

    pub fn get_attack_recovery_sec(&self, attack_type: u32) -> f32 {
        attack_type_from_id(attack_type).timings().2
    }

    pub fn get_attack_cooldown(&self) -> f32 {
        ATTACK_COOLDOWN_SEC
    }

    pub fn get_roll_duration(&self) -> f32 {
        ROLL_IFRAME_DURATION + ROLL_SLIDE_DURATION
    }

    pub fn get_roll_cooldown(&self) -> f32 {
        ROLL_COOLDOWN
    }

    pub fn get_parry_window(&self) -> f32 {
        PARRY_WINDOW
    }

    // ----- Getters: enemies -----

    pub fn get_enemy_count(&self) -> u32 {
        self.world.wolves.len() as u32
    }

    pub fn get_enemy_x(&self, i: u32) -> f32 {
        self.world.wolves.get(i as usize).map(|w| w.x).unwrap_or(0.0)
    }

    pub fn get_enemy_y(&self, i: u32) -> f32 {
        self.world.wolves.get(i as usize).map(|w| w.y).unwrap_or(0.0)
    }

    pub fn get_enemy_type(&self, i: u32) -> u32 {
        match self.world.wolves.get(i as usize).map(|w| w.kind) {
            Some(WolfType::Scout) => 0,
            Some(WolfType::Hunter) => 1,
            Some(WolfType::Brute) => 2,
            Some(WolfType::Alpha) => 3,
            None => 0,
        }
    }

    pub fn get_enemy_state(&self, i: u32) -> u32 {
        match self.world.wolves.get(i as usize).map(|w| w.state) {
            Some(WolfState::Idle) => 0,
            Some(WolfState::Seek) => 1,
            Some(WolfState::Circle) => 2,
            Some(WolfState::Harass) => 3,
            Some(WolfState::Recover) => 4,
            Some(WolfState::Ambush) => 5,
            Some(WolfState::Flank) => 6,
            Some(WolfState::Retreat) => 7,
            Some(WolfState::Prowl) => 8,
            Some(WolfState::Howl) => 9,
            None => 0,
        }
    }

    pub fn get_enemy_role(&self, i: u32) -> u32 {
        match self.world.wolves.get(i as usize).map(|w| w.role) {
            Some(WolfRole::None) => 0,
            Some(WolfRole::Lead) => 1,
            Some(WolfRole::FlankL) => 2,
            Some(WolfRole::FlankR) => 3,
            Some(WolfRole::Ambusher) => 4,
            Some(WolfRole::Scout) => 5,
            Some(WolfRole::PupGuard) => 6,
            None => 0,
        }
    }

    pub fn get_enemy_fatigue(&self, i: u32) -> f32 {
        self.world.wolves.get(i as usize).map(|w| w.fatigue).unwrap_or(0.0)
    }

    pub fn get_enemy_health(&self, i: u32) -> f32 {
        self.world.wolves.get(i as usize).map(|w| w.health).unwrap_or(0.0)
    }

    pub fn get_pack_morale(&self) -> f32 {
        self.world.pack.morale
    }

    pub fn get_pack_plan(&self) -> u32 {
        match self.world.pack.plan {
            PackPlan::Stalk => 0,
            PackPlan::Encircle => 1,
            PackPlan::Harass => 2,
            PackPlan::Commit => 3,
            PackPlan::Ambush => 4,
            PackPlan::Pincer => 5,
            PackPlan::Retreat => 6,
        }
    }

    pub fn get_player_latched(&self) -> bool {
        self.world.player.latched
    }

    pub fn get_enemy_anim(&self, i: u32, field: u32) -> f32 {
        self.world
            .wolves
            .get(i as usize)
            .and_then(|w| w.anim.values.get(field as usize))
            .copied()
            .unwrap_or(0.0)
    }

    // ----- Getters: world -----

    pub fn get_obstacle_count(&self) -> u32 {
        self.world.obstacles.len() as u32
    }

    pub fn get_obstacle_x(&self, i: u32) -> f32 {
        self.world.obstacles.get(i as usize).map(|o| o.x).unwrap_or(0.0)
    }

    pub fn get_obstacle_y(&self, i: u32) -> f32 {
        self.world.obstacles.get(i as usize).map(|o| o.y).unwrap_or(0.0)
    }

    pub fn get_obstacle_r(&self, i: u32) -> f32 {
        self.world.obstacles.get(i as usize).map(|o| o.r).unwrap_or(0.0)
    }

    pub fn get_landmark_count(&self) -> u32 {
        self.world.landmarks.len() as u32
    }

    pub fn get_landmark_x(&self, i: u32) -> f32 {
        self.world.landmarks.get(i as usize).map(|l| l.x).unwrap_or(0.0)
    }

    pub fn get_landmark_y(&self, i: u32) -> f32 {
        self.world.landmarks.get(i as usize).map(|l| l.y).unwrap_or(0.0)
    }

    pub fn get_exit_count(&self) -> u32 {
        self.world.exits.len() as u32
    }

    pub fn get_exit_x(&self, i: u32) -> f32 {
        self.world.exits.get(i as usize).map(|e| e.x).unwrap_or(0.0)
    }

    pub fn get_exit_y(&self, i: u32) -> f32 {
        self.world.exits.get(i as usize).map(|e| e.y).unwrap_or(0.0)
    }

    pub fn get_hazard_count(&self) -> u32 {
        self.world.hazards.as_slice().len() as u32
    }

    pub fn get_hazard_x(&self, i: u32) -> f32 {
        self.world.hazards.as_slice().get(i as usize).map(|h| h.x).unwrap_or(0.0)
    }

    pub fn get_hazard_y(&self, i: u32) -> f32 {
        self.world.hazards.as_slice().get(i as usize).map(|h| h.y).unwrap_or(0.0)
    }

    pub fn get_hazard_type(&self, i: u32) -> u32 {
        match self.world.hazards.as_slice().get(i as usize).map(|h| h.kind) {
            Some(HazardType::Fire) => 0,
            Some(HazardType::Ice) => 1,
            Some(HazardType::Poison) => 2,
            Some(HazardType::Spikes) => 3,
            Some(HazardType::Pit) => 4,
            None => 0,
        }
    }

    pub fn get_hazard_radius(&self, i: u32) -> f32 {
        self.world.hazards.as_slice().get(i as usize).map(|h| h.radius).unwrap_or(0.0)
    }

    pub fn get_hazard_active(&self, i: u32) -> bool {
        self.world.hazards.as_slice().get(i as usize).map(|h| h.active).unwrap_or(false)
    }

    pub fn get_danger_zone_count(&self) -> u32 {
        self.world.danger_zones.as_slice().len() as u32
    }

    pub fn get_danger_zone_x(&self, i: u32) -> f32 {
        self.world.danger_zones.as_slice().get(i as usize).map(|z| z.x).unwrap_or(0.0)
    }

    pub fn get_danger_zone_y(&self, i: u32) -> f32 {
        self.world.danger_zones.as_slice().get(i as usize).map(|z| z.y).unwrap_or(0.0)
    }

    pub fn get_danger_zone_radius(&self, i: u32) -> f32 {
        self.world.danger_zones.as_slice().get(i as usize).map(|z| z.r).unwrap_or(0.0)
    }

    pub fn get_danger_zone_strength(&self, i: u32) -> f32 {
        self.world.danger_zones.as_slice().get(i as usize).map(|z| z.strength).unwrap_or(0.0)
    }

    pub fn is_player_trapped(&self) -> bool {
        self.world.is_player_trapped()
    }

    pub fn is_player_burning(&self) -> bool {
        self.world.is_player_burning()
    }

    pub fn is_player_poisoned(&self) -> bool {
        self.world.is_player_poisoned()
    }

    pub fn is_player_slowed(&self) -> bool {
        self.world.is_player_slowed()
    }

    // ----- Getters: choices & economy -----

    pub fn get_choice_count(&self) -> u32 {
        self.world.choices.offers.iter().filter(|o| o.is_some()).count() as u32
    }

    fn offered_choice(&self, i: u32) -> Option<crate::run::choices::Choice> {
        let id = (*self.world.choices.offers.get(i as usize)?)?;
        choices::catalogue().into_iter().find(|c| c.id == id)
    }

    pub fn get_choice_id(&self, i: u32) -> u32 {
        self.offered_choice(i).map(|c| c.id).unwrap_or(0)
    }

    pub fn get_choice_type(&self, i: u32) -> u32 {
        use crate::run::choices::ChoiceType::*;
        match self.offered_choice(i).map(|c| c.choice_type) {
            Some(Passive) => 0,
            Some(Defensive) => 1,
            Some(Active) => 2,
            Some(Offensive) => 3,
            Some(Economy) => 4,
            Some(Utility) => 5,
            None => 0,
        }
    }

    pub fn get_choice_rarity(&self, i: u32) -> u32 {
        use crate::run::choices::Rarity::*;
        match self.offered_choice(i).map(|c| c.rarity) {
            Some(Common) => 0,
            Some(Uncommon) => 1,
            Some(Rare) => 2,
            Some(Legendary) => 3,
            None => 0,
        }
    }

    pub fn get_choice_tags(&self, i: u32) -> u32 {
        self.offered_choice(i).map(|c| c.tags).unwrap_or(0)
    }

    pub fn get_gold(&self) -> u32 {
        self.world.cashout.gold
    }

    pub fn get_essence(&self) -> u32 {
        self.world.cashout.essence
    }

    pub fn get_shop_item_count(&self) -> u32 {
        self.world.cashout.shop_items.len() as u32
    }

    pub fn get_shop_item_type(&self, i: u32) -> u32 {
        match self.world.cashout.shop_items.get(i as usize).map(|s| s.kind) {
            Some(ShopItemType::Weapon) => 0,
            Some(ShopItemType::Armor) => 1,
            Some(ShopItemType::Consumable) => 2,
            Some(ShopItemType::Blessing) => 3,
            Some(ShopItemType::Mystery) => 4,
            None => 0,
        }
    }

    pub fn get_shop_item_cost_gold(&self, i: u32) -> u32 {
        self.world.cashout.shop_items.get(i as usize).map(|s| s.cost_gold).unwrap_or(0)
    }

    pub fn get_shop_item_cost_essence(&self, i: u32) -> u32 {
        self.world.cashout.shop_items.get(i as usize).map(|s| s.cost_essence).unwrap_or(0)
    }

    // ----- Getters: risk & escalate -----

    pub fn get_curse_count(&self) -> u32 {
        self.world.risk.curses.len() as u32
    }

    pub fn get_curse_type(&self, i: u32) -> u32 {
        use crate::run::risk::CurseType::*;
        match self.world.risk.curses.get(i as usize).map(|c| c.kind) {
            Some(Weakness) => 0,
            Some(Fragility) => 1,
            Some(Exhaustion) => 2,
            Some(Slowness) => 3,
            Some(Blindness) => 4,
            None => 0,
        }
    }

    pub fn get_curse_intensity(&self, i: u32) -> f32 {
        self.world.risk.curses.get(i as usize).map(|c| c.multiplier).unwrap_or(1.0)
    }

    pub fn get_risk_multiplier(&self) -> f32 {
        self.world.risk.risk_multiplier
    }

    pub fn get_timed_challenge_progress(&self) -> f32 {
        if self.world.risk.target_kills == 0 {
            0.0
        } else {
            self.world.risk.kills_so_far as f32 / self.world.risk.target_kills as f32
        }
    }

    pub fn get_timed_challenge_target(&self) -> u32 {
        self.world.risk.target_kills
    }

    pub fn get_timed_challenge_remaining(&self) -> f32 {
        (self.world.risk.challenge_end_time - self.world.sim_time).max(0.0)
    }

    pub fn get_elite_active(&self) -> bool {
        self.world.risk.elite_active
    }

    pub fn get_escalation_level(&self) -> f32 {
        self.world.escalate.level
    }

    pub fn get_miniboss_active(&self) -> bool {
        self.world.escalate.miniboss.active
    }

    pub fn get_miniboss_x(&self) -> f32 {
        self.world.escalate.miniboss.x
    }

    pub fn get_miniboss_y(&self) -> f32 {
        self.world.escalate.miniboss.y
    }

    pub fn get_miniboss_health(&self) -> f32 {
        self.world.escalate.miniboss.health
    }

    pub fn damage_miniboss(&mut self, d: f32) {
        escalate::damage_miniboss(&mut self.world.escalate.miniboss, d);
    }

    // ----- Getters: animation overlay -----

    pub fn get_overlay_scale_x(&self) -> f32 {
        self.world.overlay.scale_x
    }

    pub fn get_overlay_scale_y(&self) -> f32 {
        self.world.overlay.scale_y
    }

    pub fn get_overlay_rotation(&self) -> f32 {
        self.world.overlay.rotation
    }

    pub fn get_overlay_offset_x(&self) -> f32 {
        self.world.overlay.offset_x
    }

    pub fn get_overlay_offset_y(&self) -> f32 {
        self.world.overlay.offset_y
    }

    pub fn get_overlay_pelvis_y(&self) -> f32 {
        self.world.overlay.pelvis_y
    }

    pub fn get_overlay_spine_curve(&self) -> f32 {
        self.world.overlay.spine_curve
    }

    pub fn get_overlay_shoulder_rotation(&self) -> f32 {
        self.world.overlay.shoulder_rotation
    }

    pub fn get_overlay_head_bob_x(&self) -> f32 {
        self.world.overlay.head_bob_x
    }

    pub fn get_overlay_head_bob_y(&self) -> f32 {
        self.world.overlay.head_bob_y
    }

    pub fn get_overlay_arm_swing_l(&self) -> f32 {
        self.world.overlay.arm_swing_l
    }

    pub fn get_overlay_arm_swing_r(&self) -> f32 {
        self.world.overlay.arm_swing_r
    }

    pub fn get_overlay_leg_lift_l(&self) -> f32 {
        self.world.overlay.leg_lift_l
    }

    pub fn get_overlay_leg_lift_r(&self) -> f32 {
        self.world.overlay.leg_lift_r
    }

    pub fn get_overlay_torso_twist(&self) -> f32 {
        self.world.overlay.torso_twist
    }

    pub fn get_overlay_breathing_intensity(&self) -> f32 {
        self.world.overlay.breathing_intensity
    }

    pub fn get_overlay_fatigue_factor(&self) -> f32 {
        self.world.overlay.fatigue_factor
    }

    pub fn get_overlay_momentum_x(&self) -> f32 {
        self.world.overlay.momentum_x
    }

    pub fn get_overlay_momentum_y(&self) -> f32 {
        self.world.overlay.momentum_y
    }

    pub fn get_overlay_cloth_sway(&self) -> f32 {
        self.world.overlay.cloth_sway
    }

    pub fn get_overlay_hair_bounce(&self) -> f32 {
        self.world.overlay.hair_bounce
    }

    pub fn get_overlay_equipment_jiggle(&self) -> f32 {
        self.world.overlay.equipment_jiggle
    }

    pub fn get_overlay_wind_response(&self) -> f32 {
        self.world.overlay.wind_response
    }

    pub fn get_overlay_ground_adapt(&self) -> f32 {
        self.world.overlay.ground_adapt
    }

    pub fn get_overlay_temperature_shiver(&self) -> f32 {
        self.world.overlay.temperature_shiver
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_world_is_idle() {
        let sim = SimWorld::new();
        assert_eq!(sim.get_hp(), 1.0);
        assert_eq!(sim.get_time_seconds(), 0.0);
    }

    #[test]
    fn step_advances_clock() {
        let mut sim = SimWorld::new();
        sim.init_run(1, 1.0);
        sim.step(1.0 / 60.0);
        assert!(sim.get_time_seconds() > 0.0);
    }

    #[test]
    fn reset_run_restores_base_weapon_damage() {
        let mut sim = SimWorld::new();
        sim.init_run(1, 5.0);
        assert!(sim.world.player.weapon_damage > 5.0);
        sim.reset_run(2);
        assert_eq!(sim.world.player.weapon_damage, 1.0);
        assert!(sim.get_room_count() > 0);
    }

    #[test]
    fn handle_incoming_attack_rejects_out_of_arc() {
        let mut sim = SimWorld::new();
        sim.init_run(1, 1.0);
        let x = sim.get_x();
        let y = sim.get_y();
        let result = sim.handle_incoming_attack(x - 1.0, y, 1.0, 0.0);
        assert_eq!(result, -1);
    }

    #[test]
    fn handle_incoming_attack_hits_in_range_and_arc() {
        let mut sim = SimWorld::new();
        sim.init_run(1, 1.0);
        let x = sim.get_x();
        let y = sim.get_y();
        let result = sim.handle_incoming_attack(x - 0.03, y, 1.0, 0.0);
        assert_eq!(result, 0);
    }

    #[test]
    fn commit_choice_applies_payload_then_rejects_repeat() {
        let mut sim = SimWorld::new();
        sim.init_run(1, 1.0);
        sim.world.choices.offers[0] = Some(9); // Damage(0.1)
        let before = sim.world.player.attack_damage_mult;
        assert_eq!(sim.commit_choice(9), 1);
        assert!(sim.world.player.attack_damage_mult > before);
        sim.world.choices.offers[0] = Some(9);
        assert_eq!(sim.commit_choice(9), 0);
    }

    #[test]
    fn escape_risk_requires_stamina() {
        let mut sim = SimWorld::new();
        sim.init_run(1, 1.0);
        sim.world.risk.active = true;
        sim.world.player.stamina = 0.0;
        assert_eq!(sim.escape_risk(), 0);
        sim.world.player.stamina = 1.0;
        assert_eq!(sim.escape_risk(), 1);
        assert!(!sim.world.risk.active);
    }

    #[test]
    fn out_of_range_getters_are_benign() {
        let sim = SimWorld::new();
        assert_eq!(sim.get_enemy_x(999), 0.0);
        assert_eq!(sim.get_hazard_type(999), 0);
        assert_eq!(sim.get_enemy_anim(999, 0), 0.0);
    }

    #[test]
    fn force_phase_transition_rejects_unknown_id() {
        let mut sim = SimWorld::new();
        assert_eq!(sim.force_phase_transition(99), 0);
        assert_eq!(sim.force_phase_transition(2), 1);
        assert_eq!(sim.get_phase(), 2);
    }

    #[test]
    fn spawn_and_clear_enemies() {
        let mut sim = SimWorld::new();
        sim.init_run(1, 1.0);
        let before = sim.get_enemy_count();
        assert!(before > 0);
        sim.clear_enemies();
        assert_eq!(sim.get_enemy_count(), 0);
        let spawned = sim.spawn_wolves(3);
        assert_eq!(spawned, 3);
        assert_eq!(sim.get_enemy_count(), 3);
    }

    #[test]
    fn scenario_perfect_parry_restores_stamina() {
        let mut sim = SimWorld::new();
        sim.init_run(5, 0.0);
        sim.world.player.stamina = 0.2;

        let fx = sim.world.player.fx;
        let fy = sim.world.player.fy;
        assert_eq!(sim.set_blocking(true, fx, fy), 1);

        sim.step(1.0 / 60.0);

        let px = sim.world.player.x;
        let py = sim.world.player.y;
        let result = sim.handle_incoming_attack(px - 0.04, py, 1.0, 0.0);
        assert_eq!(result, 2);
        assert_eq!(sim.world.player.stamina, sim.world.player.max_stamina);
        assert!(sim.get_can_counter());
    }

    #[test]
    fn scenario_roll_grants_iframes_then_expires() {
        let mut sim = SimWorld::new();
        sim.init_run(6, 0.0);

        let px = sim.world.player.x;
        let py = sim.world.player.y;
        assert_eq!(sim.on_roll_start(), 1);
        assert_eq!(sim.handle_incoming_attack(px - 0.03, py, 1.0, 0.0), -1);

        // ROLL_IFRAME_DURATION is 0.30s; 20 ticks at 1/60s is ~0.33s, past it.
        for _ in 0..20 {
            sim.step(1.0 / 60.0);
        }
        let px = sim.world.player.x;
        let py = sim.world.player.y;
        assert_eq!(sim.handle_incoming_attack(px - 0.03, py, 1.0, 0.0), 0);
    }
}
