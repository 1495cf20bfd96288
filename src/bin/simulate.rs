//! Battle balance simulator CLI.
//!
//! Run Monte Carlo simulations to analyze class balance.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                      # 1000 warriors, 20 battles each
//!   cargo run --bin simulate -- -c mage -b 50     # 1000 mages, 50 battles each
//!   cargo run --bin simulate -- --seed 42 --json  # Reproducible run, JSON report

use clap::Parser;
use skirmish::simulator::{run_simulation, SimConfig};
use skirmish::CharacterClass;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "simulate", version, about = "Skirmish balance simulator")]
struct Arguments {
    /// Number of heroes to simulate
    #[arg(short = 'n', long = "runs", default_value_t = 1000)]
    runs: u32,

    /// Battles each hero fights
    #[arg(short = 'b', long = "battles", default_value_t = 20)]
    battles: u32,

    /// Hero class: warrior, mage or archer
    #[arg(short = 'c', long = "class", default_value = "warrior", value_parser = parse_class)]
    class: CharacterClass,

    /// Seed for a reproducible run
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Also write the report as JSON
    #[arg(long)]
    json: bool,

    /// Log every finished run
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn parse_class(name: &str) -> Result<CharacterClass, String> {
    CharacterClass::from_name(name).ok_or_else(|| format!("unknown class '{}'", name))
}

fn main() -> std::io::Result<()> {
    let arguments = Arguments::parse();

    let default_level = if arguments.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = SimConfig {
        num_runs: arguments.runs,
        battles_per_run: arguments.battles,
        class: arguments.class,
        seed: arguments.seed,
    };

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              SKIRMISH BALANCE SIMULATOR                       ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Class:          {}", config.class.name());
    println!("  Runs:           {}", config.num_runs);
    println!("  Battles/run:    {}", config.battles_per_run);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    if arguments.json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, report.to_json())?;
        println!("JSON report saved to: {}", filename);
    }

    Ok(())
}
