//! Simulation report generation.

use super::runner::RunStats;
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub generated_at: String,

    // Progression
    pub avg_final_level: f64,
    pub max_final_level: u32,
    pub level_distribution: BTreeMap<u32, u32>,

    // Economy
    pub avg_experience_earned: f64,
    pub avg_gold_earned: f64,

    // Combat
    pub avg_damage_taken: f64,
    pub avg_boss_damage_dealt: f64,
    pub avg_deaths: f64,

    // Rates observed across all completions
    pub completion_rate: f64,
    pub critical_rate: f64,
    pub drop_rate: f64,
    pub avg_longest_streak: f64,

    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

fn mean(runs: &[RunStats], f: impl Fn(&RunStats) -> f64) -> f64 {
    if runs.is_empty() {
        return 0.0;
    }
    runs.iter().map(f).sum::<f64>() / runs.len() as f64
}

fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let total = |f: fn(&RunStats) -> u32| runs.iter().map(|r| f(r) as u64).sum::<u64>();

        let completions = total(|r| r.completions);
        let failures = total(|r| r.failures);
        let criticals = total(|r| r.criticals);
        let drops = total(|r| r.drops);

        let mut level_distribution = BTreeMap::new();
        for run in &runs {
            *level_distribution.entry(run.final_level).or_insert(0) += 1;
        }

        Self {
            num_runs: runs.len() as u32,
            generated_at: chrono::Utc::now().to_rfc3339(),
            avg_final_level: mean(&runs, |r| r.final_level as f64),
            max_final_level: runs.iter().map(|r| r.final_level).max().unwrap_or(0),
            level_distribution,
            avg_experience_earned: mean(&runs, |r| r.experience_earned),
            avg_gold_earned: mean(&runs, |r| r.gold_earned),
            avg_damage_taken: mean(&runs, |r| r.damage_taken),
            avg_boss_damage_dealt: mean(&runs, |r| r.boss_damage_dealt),
            avg_deaths: mean(&runs, |r| r.deaths as f64),
            completion_rate: ratio(completions, completions + failures),
            critical_rate: ratio(criticals, completions),
            drop_rate: ratio(drops, completions),
            avg_longest_streak: mean(&runs, |r| r.longest_streak as f64),
            run_stats: runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!("Runs: {}\n\n", self.num_runs));

        report.push_str("── PROGRESSION ──────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Final Level:     {:.1}\n", self.avg_final_level));
        report.push_str(&format!("  Max Final Level:     {}\n", self.max_final_level));
        report.push_str(&format!("  Avg Longest Streak:  {:.1}\n\n", self.avg_longest_streak));

        report.push_str("── ECONOMY ──────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg XP Earned:       {:.1}\n", self.avg_experience_earned));
        report.push_str(&format!("  Avg Gold Earned:     {:.1}\n\n", self.avg_gold_earned));

        report.push_str("── COMBAT ───────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Damage Taken:    {:.1}\n", self.avg_damage_taken));
        report.push_str(&format!("  Avg Boss Damage:     {:.1}\n", self.avg_boss_damage_dealt));
        report.push_str(&format!("  Avg Deaths:          {:.2}\n\n", self.avg_deaths));

        report.push_str("── RATES ────────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Completion Rate:     {:.1}%\n", self.completion_rate * 100.0));
        report.push_str(&format!("  Critical Rate:       {:.1}%\n", self.critical_rate * 100.0));
        report.push_str(&format!("  Drop Rate:           {:.1}%\n", self.drop_rate * 100.0));

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Level distribution as a bar chart.
    pub fn level_curve_text(&self) -> String {
        let mut text = String::from("── FINAL LEVELS ─────────────────────────────────────────────────\n");
        for (level, count) in &self.level_distribution {
            let pct = if self.num_runs > 0 {
                *count as f64 / self.num_runs as f64 * 100.0
            } else {
                0.0
            };
            let bar = "█".repeat((pct / 2.0) as usize);
            text.push_str(&format!("  Level {:3}: {:>5.1}% {}\n", level, pct, bar));
        }
        text
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(level: u32, completions: u32, criticals: u32, drops: u32) -> RunStats {
        RunStats {
            final_level: level,
            completions,
            failures: 10 - completions,
            criticals,
            drops,
            gold_earned: 10.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_from_runs_aggregates() {
        let report = SimReport::from_runs(vec![run(2, 8, 2, 4), run(4, 2, 0, 1)]);
        assert_eq!(report.num_runs, 2);
        assert_eq!(report.avg_final_level, 3.0);
        assert_eq!(report.max_final_level, 4);
        assert_eq!(report.completion_rate, 0.5);
        assert_eq!(report.critical_rate, 0.2);
        assert_eq!(report.drop_rate, 0.5);
        assert_eq!(report.avg_gold_earned, 10.0);
        assert_eq!(report.level_distribution.get(&2), Some(&1));
    }

    #[test]
    fn test_empty_report() {
        let report = SimReport::from_runs(Vec::new());
        assert_eq!(report.avg_final_level, 0.0);
        assert_eq!(report.critical_rate, 0.0);
        assert!(report.to_text().contains("SIMULATION REPORT"));
    }

    #[test]
    fn test_json_skips_run_stats() {
        let report = SimReport::from_runs(vec![run(2, 5, 1, 1)]);
        let json: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
        assert!(json.get("run_stats").is_none());
        assert_eq!(json["num_runs"], 1);
    }
}
