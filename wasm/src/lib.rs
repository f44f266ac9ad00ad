//! wasm-bindgen bridge for the simulation core. Keep this file minimal
//! and delegating: all simulation logic lives in the `roguecore` crate.

use roguecore::SimWorld;
use wasm_bindgen::prelude::*;

/// Installs a panic hook that prints Rust panics to the JS console
/// instead of an opaque "unreachable" trap, and routes `log` calls
/// through `console.log`. Call once on startup.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Warn);
}

#[wasm_bindgen]
pub struct Sim {
    inner: SimWorld,
}

#[wasm_bindgen]
impl Sim {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Sim {
        Sim { inner: SimWorld::new() }
    }

    pub fn init_run(&mut self, seed: u32, start_weapon: f32) {
        self.inner.init_run(seed as u64, start_weapon);
    }

    pub fn reset_run(&mut self, seed: u32) {
        self.inner.reset_run(seed as u64);
    }

    pub fn start(&mut self) {
        self.inner.start();
    }

    pub fn step(&mut self, dt: f32) {
        self.inner.step(dt);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn set_player_input(&mut self, ix: f32, iy: f32, rolling: bool, jumping: bool, light: bool, heavy: bool, block: bool, special: bool) {
        self.inner.set_player_input(ix, iy, rolling, jumping, light, heavy, block, special);
    }

    pub fn on_light_attack(&mut self) -> i32 {
        self.inner.on_light_attack()
    }

    pub fn on_heavy_attack(&mut self) -> i32 {
        self.inner.on_heavy_attack()
    }

    pub fn on_special_attack(&mut self) -> i32 {
        self.inner.on_special_attack()
    }

    pub fn on_roll_start(&mut self) -> i32 {
        self.inner.on_roll_start()
    }

    pub fn set_blocking(&mut self, on: bool, face_x: f32, face_y: f32) -> i32 {
        self.inner.set_blocking(on, face_x, face_y)
    }

    pub fn on_parry(&mut self) -> i32 {
        self.inner.on_parry()
    }

    pub fn handle_incoming_attack(&mut self, attacker_x: f32, attacker_y: f32, dir_x: f32, dir_y: f32) -> i32 {
        self.inner.handle_incoming_attack(attacker_x, attacker_y, dir_x, dir_y)
    }

    pub fn set_wind(&mut self, wx: f32, wy: f32) {
        self.inner.set_wind(wx, wy);
    }

    pub fn post_sound(&mut self, x: f32, y: f32, intensity: f32) {
        self.inner.post_sound(x, y, intensity);
    }

    pub fn post_danger(&mut self, x: f32, y: f32, r: f32, strength: f32, ttl: f32) {
        self.inner.post_danger(x, y, r, strength, ttl);
    }

    pub fn set_den(&mut self, x: f32, y: f32, r: f32) {
        self.inner.set_den(x, y, r);
    }

    pub fn clear_enemies(&mut self) {
        self.inner.clear_enemies();
    }

    pub fn spawn_wolves(&mut self, n: u32) -> u32 {
        self.inner.spawn_wolves(n)
    }

    pub fn force_phase_transition(&mut self, phase_id: u32) -> i32 {
        self.inner.force_phase_transition(phase_id)
    }

    pub fn commit_choice(&mut self, id: u32) -> i32 {
        self.inner.commit_choice(id)
    }

    pub fn escape_risk(&mut self) -> i32 {
        self.inner.escape_risk()
    }

    pub fn exit_cashout(&mut self) -> i32 {
        self.inner.exit_cashout()
    }

    pub fn buy_shop_item(&mut self, i: u32) -> i32 {
        self.inner.buy_shop_item(i)
    }

    pub fn buy_heal(&mut self) -> i32 {
        self.inner.buy_heal()
    }

    pub fn reroll_shop(&mut self) -> i32 {
        self.inner.reroll_shop()
    }

    pub fn use_forge_option(&mut self, i: u32) -> i32 {
        self.inner.use_forge_option(i)
    }

    pub fn apply_burning(&mut self, duration: f32, intensity: f32) -> i32 {
        self.inner.apply_burning(duration, intensity)
    }

    pub fn apply_stun(&mut self, duration: f32, intensity: f32) -> i32 {
        self.inner.apply_stun(duration, intensity)
    }

    pub fn apply_slow(&mut self, duration: f32, intensity: f32) -> i32 {
        self.inner.apply_slow(duration, intensity)
    }

    pub fn apply_damage_boost(&mut self, duration: f32, intensity: f32) -> i32 {
        self.inner.apply_damage_boost(duration, intensity)
    }

    pub fn remove_status_effect(&mut self, kind: u32) {
        self.inner.remove_status_effect(kind);
    }

    pub fn get_x(&self) -> f32 {
        self.inner.get_x()
    }

    pub fn get_y(&self) -> f32 {
        self.inner.get_y()
    }

    pub fn get_vel_x(&self) -> f32 {
        self.inner.get_vel_x()
    }

    pub fn get_vel_y(&self) -> f32 {
        self.inner.get_vel_y()
    }

    pub fn get_hp(&self) -> f32 {
        self.inner.get_hp()
    }

    pub fn get_stamina(&self) -> f32 {
        self.inner.get_stamina()
    }

    pub fn get_player_anim_state(&self) -> u32 {
        self.inner.get_player_anim_state()
    }

    pub fn get_is_grounded(&self) -> bool {
        self.inner.get_is_grounded()
    }

    pub fn get_jump_count(&self) -> u32 {
        self.inner.get_jump_count()
    }

    pub fn get_is_wall_sliding(&self) -> bool {
        self.inner.get_is_wall_sliding()
    }

    pub fn get_is_rolling(&self) -> bool {
        self.inner.get_is_rolling()
    }

    pub fn get_is_invulnerable(&self) -> bool {
        self.inner.get_is_invulnerable()
    }

    pub fn get_is_stunned(&self) -> bool {
        self.inner.get_is_stunned()
    }

    pub fn get_stun_remaining(&self) -> f32 {
        self.inner.get_stun_remaining()
    }

    pub fn get_block_state(&self) -> bool {
        self.inner.get_block_state()
    }

    pub fn get_combo_count(&self) -> u32 {
        self.inner.get_combo_count()
    }

    pub fn get_can_counter(&self) -> bool {
        self.inner.get_can_counter()
    }

    pub fn get_has_hyperarmor(&self) -> bool {
        self.inner.get_has_hyperarmor()
    }

    pub fn get_armor_value(&self) -> f32 {
        self.inner.get_armor_value()
    }

    pub fn get_near_wall(&self) -> bool {
        self.inner.get_near_wall()
    }

    pub fn get_wall_distance(&self) -> f32 {
        self.inner.get_wall_distance()
    }

    pub fn get_near_ledge(&self) -> bool {
        self.inner.get_near_ledge()
    }

    pub fn get_ledge_distance(&self) -> f32 {
        self.inner.get_ledge_distance()
    }

    pub fn get_roll_state(&self) -> u32 {
        self.inner.get_roll_state()
    }

    pub fn get_roll_time(&self) -> f32 {
        self.inner.get_roll_time()
    }

    pub fn get_speed(&self) -> f32 {
        self.inner.get_speed()
    }

    pub fn get_time_seconds(&self) -> f32 {
        self.inner.get_time_seconds()
    }

    pub fn get_phase(&self) -> u32 {
        self.inner.get_phase()
    }

    pub fn get_room_count(&self) -> u32 {
        self.inner.get_room_count()
    }

    pub fn get_current_biome(&self) -> u32 {
        self.inner.get_current_biome()
    }

    pub fn get_attack_windup_sec(&self, attack_type: u32) -> f32 {
        self.inner.get_attack_windup_sec(attack_type)
    }

    pub fn get_attack_active_sec(&self, attack_type: u32) -> f32 {
        self.inner.get_attack_active_sec(attack_type)
    }

    pub fn get_attack_recovery_sec(&self, attack_type: u32) -> f32 {
        self.inner.get_attack_recovery_sec(attack_type)
    }

    pub fn get_attack_cooldown(&self) -> f32 {
        self.inner.get_attack_cooldown()
    }

    pub fn get_roll_duration(&self) -> f32 {
        self.inner.get_roll_duration()
    }

    pub fn get_roll_cooldown(&self) -> f32 {
        self.inner.get_roll_cooldown()
    }

    pub fn get_parry_window(&self) -> f32 {
        self.inner.get_parry_window()
    }

    pub fn get_enemy_count(&self) -> u32 {
        self.inner.get_enemy_count()
    }

    pub fn get_enemy_x(&self, i: u32) -> f32 {
        self.inner.get_enemy_x(i)
    }

    pub fn get_enemy_y(&self, i: u32) -> f32 {
        self.inner.get_enemy_y(i)
    }

    pub fn get_enemy_type(&self, i: u32) -> u32 {
        self.inner.get_enemy_type(i)
    }

    pub fn get_enemy_state(&self, i: u32) -> u32 {
        self.inner.get_enemy_state(i)
    }

    pub fn get_enemy_role(&self, i: u32) -> u32 {
        self.inner.get_enemy_role(i)
    }

    pub fn get_enemy_fatigue(&self, i: u32) -> f32 {
        self.inner.get_enemy_fatigue(i)
    }

    pub fn get_enemy_health(&self, i: u32) -> f32 {
        self.inner.get_enemy_health(i)
    }

    pub fn get_pack_morale(&self) -> f32 {
        self.inner.get_pack_morale()
    }

    pub fn get_pack_plan(&self) -> u32 {
        self.inner.get_pack_plan()
    }

    pub fn get_player_latched(&self) -> bool {
        self.inner.get_player_latched()
    }

    pub fn get_enemy_anim(&self, i: u32, field: u32) -> f32 {
        self.inner.get_enemy_anim(i, field)
    }

    pub fn get_obstacle_count(&self) -> u32 {
        self.inner.get_obstacle_count()
    }

    pub fn get_obstacle_x(&self, i: u32) -> f32 {
        self.inner.get_obstacle_x(i)
    }

    pub fn get_obstacle_y(&self, i: u32) -> f32 {
        self.inner.get_obstacle_y(i)
    }

    pub fn get_obstacle_r(&self, i: u32) -> f32 {
        self.inner.get_obstacle_r(i)
    }

    pub fn get_landmark_count(&self) -> u32 {
        self.inner.get_landmark_count()
    }

    pub fn get_landmark_x(&self, i: u32) -> f32 {
        self.inner.get_landmark_x(i)
    }

    pub fn get_landmark_y(&self, i: u32) -> f32 {
        self.inner.get_landmark_y(i)
    }

    pub fn get_exit_count(&self) -> u32 {
        self.inner.get_exit_count()
    }

    pub fn get_exit_x(&self, i: u32) -> f32 {
        self.inner.get_exit_x(i)
    }

    pub fn get_exit_y(&self, i: u32) -> f32 {
        self.inner.get_exit_y(i)
    }

    pub fn get_hazard_count(&self) -> u32 {
        self.inner.get_hazard_count()
    }

    pub fn get_hazard_x(&self, i: u32) -> f32 {
        self.inner.get_hazard_x(i)
    }

    pub fn get_hazard_y(&self, i: u32) -> f32 {
        self.inner.get_hazard_y(i)
    }

    pub fn get_hazard_type(&self, i: u32) -> u32 {
        self.inner.get_hazard_type(i)
    }

    pub fn get_hazard_radius(&self, i: u32) -> f32 {
        self.inner.get_hazard_radius(i)
    }

    pub fn get_hazard_active(&self, i: u32) -> bool {
        self.inner.get_hazard_active(i)
    }

    pub fn get_danger_zone_count(&self) -> u32 {
        self.inner.get_danger_zone_count()
    }

    pub fn get_danger_zone_x(&self, i: u32) -> f32 {
        self.inner.get_danger_zone_x(i)
    }

    pub fn get_danger_zone_y(&self, i: u32) -> f32 {
        self.inner.get_danger_zone_y(i)
    }

    pub fn get_danger_zone_radius(&self, i: u32) -> f32 {
        self.inner.get_danger_zone_radius(i)
    }

    pub fn get_danger_zone_strength(&self, i: u32) -> f32 {
        self.inner.get_danger_zone_strength(i)
    }

    pub fn is_player_trapped(&self) -> bool {
        self.inner.is_player_trapped()
    }

    pub fn is_player_burning(&self) -> bool {
        self.inner.is_player_burning()
    }

    pub fn is_player_poisoned(&self) -> bool {
        self.inner.is_player_poisoned()
    }

    pub fn is_player_slowed(&self) -> bool {
        self.inner.is_player_slowed()
    }

    pub fn get_choice_count(&self) -> u32 {
        self.inner.get_choice_count()
    }

    pub fn get_choice_id(&self, i: u32) -> u32 {
        self.inner.get_choice_id(i)
    }

    pub fn get_choice_type(&self, i: u32) -> u32 {
        self.inner.get_choice_type(i)
    }

    pub fn get_choice_rarity(&self, i: u32) -> u32 {
        self.inner.get_choice_rarity(i)
    }

    pub fn get_choice_tags(&self, i: u32) -> u32 {
        self.inner.get_choice_tags(i)
    }

    pub fn get_gold(&self) -> u32 {
        self.inner.get_gold()
    }

    pub fn get_essence(&self) -> u32 {
        self.inner.get_essence()
    }

    pub fn get_shop_item_count(&self) -> u32 {
        self.inner.get_shop_item_count()
    }

    pub fn get_shop_item_type(&self, i: u32) -> u32 {
        self.inner.get_shop_item_type(i)
    }

    pub fn get_shop_item_cost_gold(&self, i: u32) -> u32 {
        self.inner.get_shop_item_cost_gold(i)
    }

    pub fn get_shop_item_cost_essence(&self, i: u32) -> u32 {
        self.inner.get_shop_item_cost_essence(i)
    }

    pub fn get_curse_count(&self) -> u32 {
        self.inner.get_curse_count()
    }

    pub fn get_curse_type(&self, i: u32) -> u32 {
        self.inner.get_curse_type(i)
    }

    pub fn get_curse_intensity(&self, i: u32) -> f32 {
        self.inner.get_curse_intensity(i)
    }

    pub fn get_risk_multiplier(&self) -> f32 {
        self.inner.get_risk_multiplier()
    }

    pub fn get_timed_challenge_progress(&self) -> f32 {
        self.inner.get_timed_challenge_progress()
    }

    pub fn get_timed_challenge_target(&self) -> u32 {
        self.inner.get_timed_challenge_target()
    }

    pub fn get_timed_challenge_remaining(&self) -> f32 {
        self.inner.get_timed_challenge_remaining()
    }

    pub fn get_elite_active(&self) -> bool {
        self.inner.get_elite_active()
    }

    pub fn get_escalation_level(&self) -> f32 {
        self.inner.get_escalation_level()
    }

    pub fn get_miniboss_active(&self) -> bool {
        self.inner.get_miniboss_active()
    }

    pub fn get_miniboss_x(&self) -> f32 {
        self.inner.get_miniboss_x()
    }

    pub fn get_miniboss_y(&self) -> f32 {
        self.inner.get_miniboss_y()
    }

    pub fn get_miniboss_health(&self) -> f32 {
        self.inner.get_miniboss_health()
    }

    pub fn damage_miniboss(&mut self, d: f32) {
        self.inner.damage_miniboss(d);
    }

    pub fn get_overlay_scale_x(&self) -> f32 {
        self.inner.get_overlay_scale_x()
    }

    pub fn get_overlay_scale_y(&self) -> f32 {
        self.inner.get_overlay_scale_y()
    }

    pub fn get_overlay_rotation(&self) -> f32 {
        self.inner.get_overlay_rotation()
    }

    pub fn get_overlay_offset_x(&self) -> f32 {
        self.inner.get_overlay_offset_x()
    }

    pub fn get_overlay_offset_y(&self) -> f32 {
        self.inner.get_overlay_offset_y()
    }

    pub fn get_overlay_pelvis_y(&self) -> f32 {
        self.inner.get_overlay_pelvis_y()
    }

    pub fn get_overlay_spine_curve(&self) -> f32 {
        self.inner.get_overlay_spine_curve()
    }

    pub fn get_overlay_shoulder_rotation(&self) -> f32 {
        self.inner.get_overlay_shoulder_rotation()
    }

    pub fn get_overlay_head_bob_x(&self) -> f32 {
        self.inner.get_overlay_head_bob_x()
    }

    pub fn get_overlay_head_bob_y(&self) -> f32 {
        self.inner.get_overlay_head_bob_y()
    }

    pub fn get_overlay_arm_swing_l(&self) -> f32 {
        self.inner.get_overlay_arm_swing_l()
    }

    pub fn get_overlay_arm_swing_r(&self) -> f32 {
        self.inner.get_overlay_arm_swing_r()
    }

    pub fn get_overlay_leg_lift_l(&self) -> f32 {
        self.inner.get_overlay_leg_lift_l()
    }

    pub fn get_overlay_leg_lift_r(&self) -> f32 {
        self.inner.get_overlay_leg_lift_r()
    }

    pub fn get_overlay_torso_twist(&self) -> f32 {
        self.inner.get_overlay_torso_twist()
    }

    pub fn get_overlay_breathing_intensity(&self) -> f32 {
        self.inner.get_overlay_breathing_intensity()
    }

    pub fn get_overlay_fatigue_factor(&self) -> f32 {
        self.inner.get_overlay_fatigue_factor()
    }

    pub fn get_overlay_momentum_x(&self) -> f32 {
        self.inner.get_overlay_momentum_x()
    }

    pub fn get_overlay_momentum_y(&self) -> f32 {
        self.inner.get_overlay_momentum_y()
    }

    pub fn get_overlay_cloth_sway(&self) -> f32 {
        self.inner.get_overlay_cloth_sway()
    }

    pub fn get_overlay_hair_bounce(&self) -> f32 {
        self.inner.get_overlay_hair_bounce()
    }

    pub fn get_overlay_equipment_jiggle(&self) -> f32 {
        self.inner.get_overlay_equipment_jiggle()
    }

    pub fn get_overlay_wind_response(&self) -> f32 {
        self.inner.get_overlay_wind_response()
    }

    pub fn get_overlay_ground_adapt(&self) -> f32 {
        self.inner.get_overlay_ground_adapt()
    }

    pub fn get_overlay_temperature_shiver(&self) -> f32 {
        self.inner.get_overlay_temperature_shiver()
    }
}

impl Default for Sim {
    fn default() -> Self {
        Sim::new()
    }
}
