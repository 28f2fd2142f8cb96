//! Integration test: formula properties
//!
//! Exercises the public formula API end to end: clamping, criticals, damage,
//! rewards, drops and level curves. Sweeps use a seeded ChaCha RNG so every
//! failure is reproducible.

use habit_balance::core::constants::{TASK_VALUE_CEILING, TASK_VALUE_FLOOR};
use habit_balance::core::{
    boss_damage, clamp_task_value, critical_chance, critical_multiplier, drop_rate, experience,
    gold, tavern_damage, LevelCurve,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Values spanning well past both clamp bounds, plus the non-finite specials.
fn sample_values(n: usize) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let mut values: Vec<f64> = (0..n).map(|_| rng.gen_range(-500.0..500.0)).collect();
    values.extend([
        0.0,
        -0.0,
        TASK_VALUE_FLOOR,
        TASK_VALUE_CEILING,
        f64::NAN,
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::MAX,
        f64::MIN,
    ]);
    values
}

// =============================================================================
// Task value clamping
// =============================================================================

#[test]
fn test_clamp_is_idempotent() {
    for v in sample_values(500) {
        let once = clamp_task_value(v);
        assert_eq!(clamp_task_value(once), once, "clamp not idempotent for {v}");
        assert!((TASK_VALUE_FLOOR..=TASK_VALUE_CEILING).contains(&once));
    }
}

#[test]
fn test_clamp_special_values() {
    assert_eq!(clamp_task_value(f64::NAN), 0.0);
    // Non-finite input is normalised to zero before clamping
    assert_eq!(clamp_task_value(f64::INFINITY), 0.0);
    assert_eq!(clamp_task_value(f64::NEG_INFINITY), 0.0);
    assert_eq!(clamp_task_value(TASK_VALUE_FLOOR - 100.0), TASK_VALUE_FLOOR);
    assert_eq!(clamp_task_value(f64::MAX), TASK_VALUE_CEILING);
}

// =============================================================================
// Critical hits
// =============================================================================

#[test]
fn test_critical_chance_bounds() {
    for a in [0.0, -1.0, -1000.0, f64::NAN] {
        assert_eq!(critical_chance(a), 0.05, "chance({a})");
    }
    assert!(approx(critical_chance(100.0), 0.3));
    for a in [280.0, 2800.0, 10_000.0, f64::MAX] {
        assert_eq!(critical_chance(a), 0.75, "chance({a})");
    }
}

#[test]
fn test_critical_chance_monotone() {
    let mut previous = critical_chance(0.0);
    for a in 1..400 {
        let chance = critical_chance(a as f64);
        assert!(chance >= previous);
        assert!(chance <= 0.75);
        previous = chance;
    }
}

#[test]
fn test_critical_multiplier_linear() {
    assert_eq!(critical_multiplier(0.0), 1.5);
    assert!(approx(critical_multiplier(80.0), 1.9));
    assert!(approx(critical_multiplier(200.0), 2.5));
    assert_eq!(critical_multiplier(-50.0), 1.5);
}

// =============================================================================
// Damage
// =============================================================================

#[test]
fn test_tavern_damage_floor() {
    for v in sample_values(200) {
        let damage = tavern_damage(v);
        assert!(damage >= 0.1, "tavern_damage({v}) = {damage}");
        if clamp_task_value(v) >= 0.0 {
            assert_eq!(damage, 0.1);
        }
    }
    assert!(approx(tavern_damage(-4.0), 1.0));
    assert!(approx(tavern_damage(-100.0), 11.82));
}

#[test]
fn test_boss_damage_never_negative() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for v in sample_values(200) {
        let strength = rng.gen_range(-100.0..500.0);
        let defense = rng.gen_range(-100.0..5000.0);
        let damage = boss_damage(v, strength, defense);
        assert!(damage >= 0.0 && damage.is_finite());
    }
}

#[test]
fn test_boss_damage_examples() {
    assert_eq!(boss_damage(-5.0, 10.0, 0.0), 0.0);
    assert!(approx(boss_damage(10.0, 50.0, 0.0), 12.5));
    assert!(approx(boss_damage(10.0, 50.0, 100.0), 11.5));
    assert_eq!(boss_damage(1.0, 0.0, 10_000.0), 0.0);
}

// =============================================================================
// Rewards
// =============================================================================

#[test]
fn test_rewards_zero_for_non_positive_values() {
    for v in sample_values(300) {
        if clamp_task_value(v) > 0.0 {
            continue;
        }
        for critical in [false, true] {
            assert_eq!(experience(v, 50.0, critical), 0.0, "experience({v})");
            assert_eq!(gold(v, 50.0, critical), 0.0, "gold({v})");
        }
    }
}

#[test]
fn test_reward_examples() {
    assert!(approx(experience(10.0, 50.0, false), 9.0));
    assert!(approx(experience(10.0, 50.0, true), 15.75));
    assert!(approx(gold(10.0, 40.0, false), 5.6));
    assert!(approx(gold(10.0, 40.0, true), 9.52));
}

#[test]
fn test_rewards_are_rounded_to_cents() {
    for v in sample_values(300) {
        for reward in [experience(v, 33.0, true), gold(v, 17.0, false)] {
            let cents = reward * 100.0;
            assert!((cents - cents.round()).abs() < 1e-6, "{reward} not rounded");
        }
    }
}

// =============================================================================
// Drops
// =============================================================================

#[test]
fn test_drop_rate_examples_and_cap() {
    assert_eq!(drop_rate(0.0, 0.0), 0.3);
    assert!(approx(drop_rate(5.0, 10.0), 0.433));
    assert_eq!(drop_rate(100.0, 500.0), 0.9);
    assert_eq!(drop_rate(-20.0, 0.0), 0.3);
}

#[test]
fn test_drop_rate_monotone_in_value() {
    let mut previous = drop_rate(0.0, 20.0);
    for step in 1..=100 {
        let rate = drop_rate(step as f64 * 0.25, 20.0);
        assert!(rate >= previous);
        assert!((0.3..=0.9).contains(&rate));
        previous = rate;
    }
}

// =============================================================================
// Level curves
// =============================================================================

#[test]
fn test_level_curves_strictly_increasing() {
    for curve in LevelCurve::all() {
        // Whole exponential domain (1..=285), and well past it for quadratic
        let top = curve.max_level().min(400);
        for level in 1..top {
            assert!(
                curve.xp_to_next(level + 1) > curve.xp_to_next(level),
                "{curve} not increasing at level {level}"
            );
        }
    }
}

#[test]
fn test_level_curves_clamp_past_their_domain() {
    for curve in LevelCurve::all() {
        let top = curve.max_level();
        assert!(curve.xp_to_next(top) < u64::MAX);
        assert_eq!(curve.xp_to_next(top.saturating_add(1)), curve.xp_to_next(top));
    }
    assert_eq!(LevelCurve::Exponential.max_level(), 285);
}

#[test]
fn test_level_curve_level_zero_counts_as_one() {
    for curve in LevelCurve::all() {
        assert_eq!(curve.xp_to_next(0), curve.xp_to_next(1));
        assert!(curve.xp_to_next(0) > 0);
    }
}
