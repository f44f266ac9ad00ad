//! The six literal end-to-end scenarios from spec §8.

//! Scenarios 3 (perfect parry) and 4 (roll i-frames) live as internal unit
//! tests in `src/api.rs`: they need `SimWorld`'s private `world` field to
//! drain stamina directly, which an external integration test crate cannot
//! reach through the public getter/setter surface alone.

use roguecore::grids::obstacles::bfs_reaches_center;
use roguecore::math::{dot, normalize};
use roguecore::run::choices::{generate_choices, ChoiceState, Rarity};
use roguecore::wolf::Wolf;
use roguecore::World;

const SPAWN_CORNERS: [(f32, f32); 4] = [(0.06, 0.06), (0.94, 0.06), (0.06, 0.94), (0.94, 0.94)];

#[test]
fn scenario_1_spawn_corner_determinism() {
    let mut world = World::default();
    world.init_run(1, 0.0);

    let spawn = (world.player.x, world.player.y);
    assert!(SPAWN_CORNERS.iter().any(|c| (c.0 - spawn.0).abs() < 1e-5 && (c.1 - spawn.1).abs() < 1e-5));
    assert!(world.obstacle_count >= 1);
    assert!(bfs_reaches_center(&world.obstacles, spawn));
}

#[test]
fn scenario_2_light_attack_damages_wolf() {
    let mut world = World::default();
    world.init_run(42, 0.0);
    world.clear_enemies();

    let mut wolf = Wolf::default();
    wolf.active = true;
    wolf.x = world.player.x + 0.03;
    wolf.y = world.player.y;
    wolf.health = 1.0;
    world.wolves.push(wolf);

    world.player.fx = 1.0;
    world.player.fy = 0.0;
    world.input.light = true;
    world.step(0.01);
    world.input.light = false;

    // Windup (0.05s) + active (0.08s) = 0.13s; run enough 0.01s ticks to
    // clear the whole swing.
    for _ in 0..25 {
        world.step(0.01);
    }

    let health = world.wolves[0].health;
    let damage = 1.0 - health;
    assert!(damage > 0.0, "wolf took no damage");
    // base = 0.20 * attack_damage_mult(1.0) * weapon_damage(1.0) * wolf_damage_mult(1.0),
    // doubled on a crit roll (5% chance).
    assert!((damage - 0.20).abs() < 1e-4 || (damage - 0.40).abs() < 1e-4, "unexpected damage: {damage}");
}

#[test]
fn scenario_5_choice_pity_timer_forces_rare() {
    let mut state = ChoiceState::default();
    state.rounds_since_rare = 2;
    let mut rng = roguecore::rng::Rng::new(1);
    generate_choices(&mut state, 0, &mut rng);

    let pool = roguecore::run::choices::catalogue();
    let has_rare_or_better = state.offers.iter().flatten().any(|id| {
        pool.iter().find(|c| c.id == *id).map(|c| matches!(c.rarity, Rarity::Rare | Rarity::Legendary)).unwrap_or(false)
    });
    assert!(has_rare_or_better, "pity timer did not force a rare-or-better offer");
}

#[test]
fn scenario_6_scent_gradient_points_at_player() {
    let mut world = World::default();
    world.init_run(9, 0.0);
    world.clear_enemies();
    world.player.x = 0.8;
    world.player.y = 0.8;
    world.wind = (0.0, 0.0);

    for _ in 0..30 {
        world.step(0.1);
    }

    let (gx, gy) = world.scent.gradient_at(0.2, 0.2);
    let (dx, dy) = normalize(0.8 - 0.2, 0.8 - 0.2);
    assert!(dot(gx, gy, dx, dy) > 0.0, "scent gradient does not point toward the player");
}
