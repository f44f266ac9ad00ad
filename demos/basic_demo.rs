//! Basic demonstration of the simulation core.
//!
//! Run with: cargo run --example basic_demo

use roguecore::SimWorld;

fn main() {
    println!("=== Roguecore Simulation Demo ===\n");

    let mut sim = SimWorld::new();
    sim.init_run(42, 0.2);
    sim.start();

    println!("Spawned {} wolves in biome {}", sim.get_enemy_count(), sim.get_current_biome());

    println!("\n--- Running for 300 ticks (5s at 60 ticks/sec) ---\n");
    for tick in 0..300u32 {
        sim.set_player_input(1.0, 0.0, false, false, false, false, false, false);
        sim.step(1.0 / 60.0);

        if (tick + 1) % 60 == 0 {
            println!(
                "t={:.2}s phase={} hp={:.2} stamina={:.2} pos=({:.3}, {:.3}) enemies={}",
                sim.get_time_seconds(),
                sim.get_phase(),
                sim.get_hp(),
                sim.get_stamina(),
                sim.get_x(),
                sim.get_y(),
                sim.get_enemy_count(),
            );
        }
    }

    println!("\n--- Attempting a light attack ---\n");
    let result = sim.on_light_attack();
    println!("on_light_attack() -> {}", result);

    for _ in 0..30 {
        sim.step(1.0 / 60.0);
    }

    println!("\nFinal hp={:.2} combo={}", sim.get_hp(), sim.get_combo_count());
}
