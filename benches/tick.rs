//! Per-tick performance benchmark (spec §9's perf non-goal still gets a
//! throughput number to watch). Reimplements the teacher's
//! `step_profiled`/stress-test suite as a `criterion` benchmark instead of
//! an in-test timer.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use roguecore::World;

fn drive_n_ticks(world: &mut World, n: u32) {
    for i in 0..n {
        world.input.ix = ((i % 7) as f32 - 3.0) / 3.0;
        world.input.iy = ((i % 5) as f32 - 2.0) / 2.0;
        world.input.light = i % 11 == 0;
        world.step(1.0 / 60.0);
    }
}

fn bench_single_tick(c: &mut Criterion) {
    let mut world = World::default();
    world.init_run(1, 0.2);
    c.bench_function("single step(1/60) with 5 wolves", |b| {
        b.iter(|| {
            world.step(black_box(1.0 / 60.0));
        });
    });
}

fn bench_full_pack(c: &mut Criterion) {
    let mut world = World::default();
    world.init_run(2, 0.2);
    world.clear_enemies();
    world.spawn_wolves(16); // MAX_ENEMIES
    c.bench_function("single step(1/60) with 16 wolves", |b| {
        b.iter(|| {
            world.step(black_box(1.0 / 60.0));
        });
    });
}

fn bench_one_second_of_ticks(c: &mut Criterion) {
    c.bench_function("60 ticks (1s at 60Hz) from a fresh run", |b| {
        b.iter(|| {
            let mut world = World::default();
            world.init_run(black_box(3), 0.2);
            drive_n_ticks(&mut world, 60);
            black_box(world.player.x);
        });
    });
}

criterion_group!(benches, bench_single_tick, bench_full_pack, bench_one_second_of_ticks);
criterion_main!(benches);
