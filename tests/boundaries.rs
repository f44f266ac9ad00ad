//! Boundary conditions at exact threshold values (spec §8): obstacle
//! boundary zero overlap, attack range/arc inclusive edges, parry window
//! inclusive edge, roll stamina threshold edge.

use roguecore::math::resolve_disc_overlap;
use roguecore::player::combat::{handle_incoming_attack, hit_test};
use roguecore::player::kinematics::{try_start_roll, RollState};

const ATTACK_RANGE: f32 = 0.055;
const ATTACK_ARC_COS_THRESHOLD: f32 = 0.34;
const PARRY_WINDOW: f32 = 0.12;
const ROLL_STAMINA_COST: f32 = 0.50;

#[test]
fn discs_exactly_touching_have_zero_overlap() {
    // Two discs whose centers sit exactly `ar + br` apart are touching, not
    // overlapping: resolve_disc_overlap must be a no-op.
    let (dx1, dy1, dx2, dy2) = resolve_disc_overlap(0.0, 0.0, 0.018, 0.038, 0.0, 0.02);
    assert_eq!((dx1, dy1, dx2, dy2), (0.0, 0.0, 0.0, 0.0));
}

#[test]
fn attack_at_exact_range_is_a_hit() {
    assert!(hit_test((0.0, 0.0), (1.0, 0.0), (ATTACK_RANGE, 0.0), 1.0));
}

#[test]
fn attack_just_past_range_misses() {
    assert!(!hit_test((0.0, 0.0), (1.0, 0.0), (ATTACK_RANGE + 1e-3, 0.0), 1.0));
}

#[test]
fn attack_at_exact_arc_cos_threshold_is_a_hit() {
    // Build a target at the arc boundary: cos(angle) == ATTACK_ARC_COS_THRESHOLD.
    let cos = ATTACK_ARC_COS_THRESHOLD;
    let sin = (1.0 - cos * cos).sqrt();
    let target = (ATTACK_RANGE * cos, ATTACK_RANGE * sin);
    assert!(hit_test((0.0, 0.0), (1.0, 0.0), target, 1.0));
}

#[test]
fn attack_just_outside_arc_misses() {
    let cos = ATTACK_ARC_COS_THRESHOLD - 0.01;
    let sin = (1.0 - cos * cos).sqrt();
    let target = (ATTACK_RANGE * cos, ATTACK_RANGE * sin);
    assert!(!hit_test((0.0, 0.0), (1.0, 0.0), target, 1.0));
}

#[test]
fn parry_at_exactly_the_window_edge_succeeds() {
    let result = handle_incoming_attack(
        (-0.04, 0.0),
        (0.0, 0.0),
        false,
        false,
        true,
        (1.0, 0.0),
        0.0,
        PARRY_WINDOW,
    );
    assert_eq!(result, 2);
}

#[test]
fn parry_just_past_the_window_is_a_plain_block() {
    let result = handle_incoming_attack(
        (-0.04, 0.0),
        (0.0, 0.0),
        false,
        false,
        true,
        (1.0, 0.0),
        0.0,
        PARRY_WINDOW + 1e-3,
    );
    assert_eq!(result, 1);
}

#[test]
fn roll_succeeds_at_exactly_half_stamina() {
    let mut roll = RollState::default();
    let mut stamina = ROLL_STAMINA_COST;
    assert!(try_start_roll(&mut roll, &mut stamina, (1.0, 0.0), 5.0));
}

#[test]
fn roll_fails_a_hair_below_half_stamina() {
    let mut roll = RollState::default();
    let mut stamina = ROLL_STAMINA_COST - 0.0001;
    assert!(!try_start_roll(&mut roll, &mut stamina, (1.0, 0.0), 5.0));
}
