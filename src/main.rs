use std::path::PathBuf;

use clap::Parser;
use impact_physics::config::loader::{load_constants, load_scenario};
use impact_physics::*;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "impact-sim")]
#[command(version, about = "Asteroid impact effects calculator", long_about = None)]
struct Cli {
    /// Scenario YAML files; the built-in Bennu scenarios run when omitted
    scenarios: Vec<PathBuf>,

    /// YAML file overriding the empirical constants
    #[arg(short, long)]
    constants: Option<PathBuf>,

    /// Evaluate every scenario this many years into its mission
    #[arg(short, long)]
    elapsed_years: Option<f64>,

    /// Print outcomes as JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Logging verbosity level
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let constants = match &cli.constants {
        Some(path) => load_constants(path)?,
        None => PhysicsConstants::default(),
    };
    let engine = PhysicsEngine::new(constants)?;

    let mut scenarios = if cli.scenarios.is_empty() {
        info!("no scenario files given, running built-in Bennu scenarios");
        vec![Scenario::bennu_ocean(), Scenario::bennu_land()]
    } else {
        cli.scenarios
            .iter()
            .map(load_scenario)
            .collect::<Result<Vec<_>, _>>()?
    };

    if let Some(elapsed_years) = cli.elapsed_years {
        scenarios = scenarios
            .into_iter()
            .map(|scenario| scenario.with_elapsed_years(elapsed_years))
            .collect();
    }

    let batch = ScenarioBatch::run(&engine, &scenarios);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&batch.outcomes())?);
    } else {
        let mut report = ImpactReport::new();
        for (name, outcome) in &batch.completed {
            report.collect_data(name, outcome);
        }
        report.display_data();
    }

    batch.ensure_complete()?;

    Ok(())
}
