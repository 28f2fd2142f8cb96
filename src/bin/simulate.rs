//! Balance simulator CLI.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                        # Default: 1000 characters, 365 tasks each
//!   cargo run --bin simulate -- -n 100 -t 90        # 100 characters, 90 tasks each
//!   cargo run --bin simulate -- --model weighted    # Priority/streak weighted rewards
//!   cargo run --bin simulate -- --seed 42           # Reproducible run

use habit_balance::character::{AttributeType, StatBlock};
use habit_balance::core::progression::LevelCurve;
use habit_balance::core::task::TaskPriority;
use habit_balance::simulator::{run_simulation, SimConfig};
use std::env;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

fn main() {
    let args: Vec<String> = env::args().collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("Run 'simulate --help' for usage.");
            std::process::exit(2);
        }
    };
    let config = &options.config;

    let rust_log = env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref(), config.verbosity >= 2))
        .with_writer(std::io::stderr)
        .init();

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              HABIT BALANCE SIMULATOR                          ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Tasks per Run:  {}", config.tasks_per_run);
    println!("  Failure Rate:   {:.0}%", config.failure_rate * 100.0);
    println!(
        "  Task Values:    {:.2} to {:.2}",
        config.task_value_range().0,
        config.task_value_range().1
    );
    println!("  Reward Model:   {}", config.reward_model);
    println!("  Level Curve:    {}", config.curve);
    println!("  Stats:          {}", stats_line(&config.stats));
    if let Some(defense) = config.boss_defense {
        println!("  Boss Defense:   {}", defense);
    }
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();

    if options.show_xp_table {
        print_xp_table();
    }

    println!("Running simulation...");
    println!();

    let report = run_simulation(config);

    println!("{}", report.to_text());

    if options.show_level_curve {
        println!("{}", report.level_curve_text());
    }

    if options.write_json {
        let json = report.to_json();
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, json) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(e) => {
                eprintln!("Failed to write JSON report {}: {}", filename, e);
                std::process::exit(1);
            }
        }
    }
}

/// `RUST_LOG` wins when set and valid; otherwise `warn`, or `debug` with `-v`.
fn log_filter(rust_log: Option<&str>, verbose: bool) -> EnvFilter {
    let default = if verbose { "debug" } else { "warn" };
    rust_log
        .and_then(|spec| EnvFilter::try_new(spec).ok())
        .unwrap_or_else(|| EnvFilter::new(default))
}

struct Options {
    config: SimConfig,
    show_level_curve: bool,
    show_xp_table: bool,
    write_json: bool,
}

fn value_after<T: FromStr>(args: &[String], i: &mut usize, flag: &str) -> Result<T, String> {
    *i += 1;
    let raw = args
        .get(*i)
        .ok_or_else(|| format!("{flag} needs a value"))?;
    raw.parse()
        .map_err(|_| format!("invalid value for {flag}: {raw}"))
}

/// Parse `str,int,con,per`.
fn parse_stats(raw: &str) -> Result<StatBlock, String> {
    let values: Vec<f64> = raw
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|_| format!("invalid stats: {raw}"))?;

    let attributes = AttributeType::all();
    if values.len() != attributes.len() {
        return Err(format!("--stats expects str,int,con,per, got: {raw}"));
    }

    let mut stats = StatBlock::default();
    for (attr, value) in attributes.into_iter().zip(values) {
        stats.set(attr, value);
    }
    Ok(stats)
}

fn stats_line(stats: &StatBlock) -> String {
    AttributeType::all()
        .iter()
        .map(|attr| format!("{} {}", attr.abbrev(), stats.get(*attr)))
        .collect::<Vec<_>>()
        .join("  ")
}

fn parse_priority(raw: &str) -> Result<TaskPriority, String> {
    match raw.to_ascii_lowercase().as_str() {
        "trivial" => Ok(TaskPriority::Trivial),
        "easy" => Ok(TaskPriority::Easy),
        "medium" => Ok(TaskPriority::Medium),
        "hard" => Ok(TaskPriority::Hard),
        other => Err(format!("unknown priority: {other}")),
    }
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        config: SimConfig::default(),
        show_level_curve: false,
        show_xp_table: false,
        write_json: false,
    };

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        let config = &mut options.config;
        match flag {
            "-n" | "--runs" => config.num_runs = value_after(args, &mut i, flag)?,
            "-t" | "--tasks" => config.tasks_per_run = value_after(args, &mut i, flag)?,
            "-s" | "--seed" => config.seed = Some(value_after(args, &mut i, flag)?),
            "-f" | "--fail" => {
                let rate: f64 = value_after(args, &mut i, flag)?;
                config.failure_rate = rate.clamp(0.0, 1.0);
            }
            "--min" => config.min_task_value = value_after(args, &mut i, flag)?,
            "--max" => config.max_task_value = value_after(args, &mut i, flag)?,
            "-m" | "--model" => config.reward_model = value_after(args, &mut i, flag)?,
            "-c" | "--curve" => config.curve = value_after(args, &mut i, flag)?,
            "-p" | "--priority" => {
                let raw: String = value_after(args, &mut i, flag)?;
                config.priority = parse_priority(&raw)?;
            }
            "--stats" => {
                let raw: String = value_after(args, &mut i, flag)?;
                config.stats = parse_stats(&raw)?;
            }
            "--boss" => config.boss_defense = Some(value_after(args, &mut i, flag)?),
            "--quick" => {
                let quick = SimConfig::quick();
                config.num_runs = quick.num_runs;
                config.tasks_per_run = quick.tasks_per_run;
            }
            "--level-curve" => options.show_level_curve = true,
            "--xp-table" => options.show_xp_table = true,
            "--json" => options.write_json = true,
            "-v" | "--verbose" => config.verbosity = 2,
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => return Err(format!("Unknown argument: {other}")),
        }
        i += 1;
    }

    Ok(options)
}

fn print_xp_table() {
    println!("── XP TO NEXT LEVEL ─────────────────────────────────────────────");
    println!("  Level   Quadratic   Exponential");
    for level in [1, 2, 3, 5, 10, 15, 20, 30, 50] {
        println!(
            "  {:5}   {:9}   {:11}",
            level,
            LevelCurve::Quadratic.xp_to_next(level),
            LevelCurve::Exponential.xp_to_next(level)
        );
    }
    println!();
}

fn print_help() {
    println!("Habit Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>        Number of simulated characters (default: 1000)");
    println!("    -t, --tasks <T>       Tasks per character (default: 365)");
    println!("    -s, --seed <S>        Random seed for reproducibility");
    println!("    -f, --fail <R>        Failure rate 0-1 (default: 0.2)");
    println!("    --min <V>, --max <V>  Task value range (default: -10 to 10)");
    println!("    -m, --model <M>       Reward model: simple | weighted (default: simple)");
    println!("    -c, --curve <C>       Level curve: quadratic | exponential (default: exponential)");
    println!("    -p, --priority <P>    trivial | easy | medium | hard (default: easy)");
    println!("    --stats <S,I,C,P>     Attribute scores (default: 10,10,10,10)");
    println!("    --boss <D>            Fight a boss with defense D on every completion");
    println!("    --quick               Quick test (100 characters, 90 tasks)");
    println!("    --level-curve         Show final level distribution");
    println!("    --xp-table            Show XP requirements for both curves");
    println!("    -v, --verbose         Per-run debug logging (RUST_LOG overrides)");
    println!("    --json                Save JSON report");
    println!("    -h, --help            Show this help");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Emit one line per level through a subscriber using `filter`; return the output.
    fn logged_with(filter: EnvFilter) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!("per-run line");
            tracing::info!("Starting simulation");
            tracing::warn!("corrupt document");
        });

        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("simulate")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_rust_log_debug_shows_debug_and_info() {
        let output = logged_with(log_filter(Some("debug"), false));
        assert!(output.contains("per-run line"));
        assert!(output.contains("Starting simulation"));
    }

    #[test]
    fn test_verbose_flag_enables_debug_without_rust_log() {
        let output = logged_with(log_filter(None, true));
        assert!(output.contains("per-run line"));
        assert!(output.contains("Starting simulation"));
    }

    #[test]
    fn test_default_filter_is_warn() {
        let output = logged_with(log_filter(None, false));
        assert!(!output.contains("per-run line"));
        assert!(!output.contains("Starting simulation"));
        assert!(output.contains("corrupt document"));
    }

    #[test]
    fn test_invalid_rust_log_falls_back_to_default() {
        let output = logged_with(log_filter(Some("habit_balance=notalevel"), true));
        assert!(output.contains("per-run line"));
    }

    #[test]
    fn test_quick_keeps_earlier_flags() {
        let options = parse_args(&args(&["--seed", "42", "--model", "weighted", "--quick"])).unwrap();
        assert_eq!(options.config.seed, Some(42));
        assert_eq!(
            options.config.reward_model,
            habit_balance::core::RewardModel::TaskPriorityWeighted
        );
        assert_eq!(options.config.num_runs, SimConfig::quick().num_runs);
        assert_eq!(options.config.tasks_per_run, SimConfig::quick().tasks_per_run);
    }

    #[test]
    fn test_verbose_flag_sets_verbosity() {
        let options = parse_args(&args(&["-v"])).unwrap();
        assert_eq!(options.config.verbosity, 2);
    }

    #[test]
    fn test_parse_stats_in_attribute_order() {
        let stats = parse_stats("1, 2,3,-4").unwrap();
        assert_eq!(stats, StatBlock::new(1.0, 2.0, 3.0, 0.0));
        assert_eq!(stats_line(&stats), "STR 1  INT 2  CON 3  PER 0");
        assert!(parse_stats("1,2,3").is_err());
        assert!(parse_stats("1,2,x,4").is_err());
    }

    #[test]
    fn test_unknown_flag_is_an_error() {
        assert!(parse_args(&args(&["--bogus"])).is_err());
    }
}
