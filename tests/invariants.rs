//! Universal invariants that must hold at every tick regardless of seed
//! or input sequence (spec §8).

use roguecore::World;

fn assert_invariants(world: &World, tick: u32) {
    assert!(world.player.hp >= 0.0 && world.player.hp <= 1.0, "hp out of range at tick {tick}");
    assert!(world.player.stamina >= 0.0 && world.player.stamina <= world.player.max_stamina, "stamina out of range at tick {tick}");
    assert!((0.0..=1.0).contains(&world.player.x), "player.x out of [0,1] at tick {tick}");
    assert!((0.0..=1.0).contains(&world.player.y), "player.y out of [0,1] at tick {tick}");

    let facing_len = (world.player.fx * world.player.fx + world.player.fy * world.player.fy).sqrt();
    let is_fallback = (world.player.fx - 1.0).abs() < 1e-6 && world.player.fy.abs() < 1e-6;
    assert!(is_fallback || (facing_len - 1.0).abs() < 1e-5, "facing not unit length at tick {tick}: {facing_len}");

    for (i, wolf) in world.wolves.iter().enumerate() {
        if !wolf.active {
            continue;
        }
        assert!((0.0..=1.0).contains(&wolf.x), "wolf {i} x out of range at tick {tick}");
        assert!((0.0..=1.0).contains(&wolf.y), "wolf {i} y out of range at tick {tick}");
        assert!(wolf.health >= 0.0, "wolf {i} health negative at tick {tick}");
    }

    assert_ne!(world.rng.state(), 0, "rng state hit zero at tick {tick}");
    assert!(world.scent.all_in_range(), "scent field left [0,1] at tick {tick}");
}

#[test]
fn invariants_hold_across_a_long_run() {
    let mut world = World::default();
    world.init_run(1234, 0.1);
    for i in 0..600u32 {
        world.input.ix = ((i % 13) as f32 - 6.0) / 6.0;
        world.input.iy = ((i % 17) as f32 - 8.0) / 8.0;
        world.input.light = i % 9 == 0;
        world.input.heavy = i % 25 == 0;
        world.input.block = i % 31 == 0;
        world.input.rolling = i % 19 == 0;
        world.step(1.0 / 60.0);
        assert_invariants(&world, i);
    }
}

#[test]
fn no_two_discs_overlap_after_resolution() {
    // Matches world.rs's PLAYER_RADIUS/WOLF_RADIUS, which are private to
    // the crate; mirrored here as literals since tests/ is an external crate.
    const PLAYER_RADIUS: f32 = 0.018;
    const WOLF_RADIUS: f32 = 0.02;
    let min_dist = PLAYER_RADIUS + WOLF_RADIUS;

    let mut world = World::default();
    world.init_run(5, 0.0);
    for i in 0..200u32 {
        world.input.ix = 1.0;
        world.step(1.0 / 60.0);
        for wolf in world.wolves.iter().filter(|w| w.active) {
            let dx = world.player.x - wolf.x;
            let dy = world.player.y - wolf.y;
            let dist = (dx * dx + dy * dy).sqrt();
            assert!(dist >= min_dist - 1e-3, "player/wolf overlap by more than 1e-3 at tick {i}: dist={dist}");
        }
    }
}
