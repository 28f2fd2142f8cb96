//! Monte Carlo runner.
//!
//! Rolls task values, failures, criticals and drops, feeds them through the
//! formula engine and applies the resulting deltas to a fresh character.

use super::config::SimConfig;
use super::report::SimReport;
use crate::character::user::UserSnapshot;
use crate::core::critical::critical_chance;
use crate::core::outcome::{resolve_completion, resolve_failure};
use crate::core::task::{Monster, Task, TaskType};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

/// Statistics for one simulated character.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunStats {
    pub final_level: u32,
    pub experience_earned: f64,
    pub gold_earned: f64,
    pub damage_taken: f64,
    pub boss_damage_dealt: f64,
    pub completions: u32,
    pub failures: u32,
    pub criticals: u32,
    pub drops: u32,
    pub deaths: u32,
    pub longest_streak: u32,
}

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    tracing::info!(
        runs = config.num_runs,
        tasks = config.tasks_per_run,
        model = %config.reward_model,
        curve = %config.curve,
        "Starting simulation"
    );

    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let stats = simulate_single_run(config, &mut rng);

        if config.verbosity >= 2 {
            tracing::debug!(
                "Run {}/{} - Level {}, XP {:.1}, Gold {:.1}, Deaths {}",
                run_idx + 1,
                config.num_runs,
                stats.final_level,
                stats.experience_earned,
                stats.gold_earned,
                stats.deaths
            );
        }
        all_runs.push(stats);
    }

    let report = SimReport::from_runs(all_runs);
    tracing::info!(avg_level = report.avg_final_level, "Simulation finished");
    report
}

/// Simulate one character resolving `tasks_per_run` tasks.
pub fn simulate_single_run(config: &SimConfig, rng: &mut impl Rng) -> RunStats {
    let mut user = UserSnapshot::new(config.curve);
    let mut stats = RunStats::default();
    let (min_value, max_value) = config.task_value_range();
    let crit_chance = critical_chance(config.stats.strength());
    let boss = config.boss_defense.map(|defense| Monster::new("Simulated Boss", defense));
    let mut streak = 0u32;

    for _ in 0..config.tasks_per_run {
        let value = if max_value > min_value {
            rng.gen_range(min_value..=max_value)
        } else {
            min_value
        };
        let task = Task::new(value, TaskType::Habit, config.priority).with_streak(streak);

        let delta = if rng.gen::<f64>() < config.failure_rate {
            stats.failures += 1;
            streak = 0;
            resolve_failure(&task)
        } else {
            let is_critical = rng.gen::<f64>() < crit_chance;
            let delta = resolve_completion(
                &config.reward_model,
                &task,
                &config.stats,
                boss.as_ref(),
                is_critical,
            );

            stats.completions += 1;
            streak += 1;
            stats.longest_streak = stats.longest_streak.max(streak);
            if is_critical {
                stats.criticals += 1;
            }
            if rng.gen::<f64>() < delta.drop_chance {
                stats.drops += 1;
            }
            delta
        };

        stats.experience_earned += delta.experience;
        stats.gold_earned += delta.gold;
        stats.damage_taken += delta.damage_taken;
        stats.boss_damage_dealt += delta.boss_damage;
        user.apply(&delta);

        if !user.is_alive() {
            stats.deaths += 1;
            user.heal(user.max_hp);
        }
    }

    stats.final_level = user.level;
    stats
}
