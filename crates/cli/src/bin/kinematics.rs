use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use kinematics_calculator::config::{ScenarioConfig, load_scenario};
use kinematics_calculator::export;
use kinematics_calculator::update::DistanceModel;
use kinematics_calculator::{IntervalReport, run_interval};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Update velocity, distance, and fuel for one constant-acceleration interval"
)]
struct Cli {
    /// Scenario file (.toml, or YAML otherwise); flags below override its values
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Initial velocity in km/h
    #[arg(long, allow_negative_numbers = true)]
    velocity_kmh: Option<f64>,

    /// Constant acceleration in m/s²
    #[arg(long, allow_negative_numbers = true)]
    acceleration_m_s2: Option<f64>,

    /// Interval duration in seconds
    #[arg(long, allow_negative_numbers = true)]
    duration_s: Option<f64>,

    /// Distance already travelled in km
    #[arg(long, allow_negative_numbers = true)]
    initial_distance_km: Option<f64>,

    /// Remaining fuel in kg
    #[arg(long, allow_negative_numbers = true)]
    fuel_kg: Option<f64>,

    /// Fuel burn rate in kg/s
    #[arg(long, allow_negative_numbers = true)]
    burn_rate_kg_s: Option<f64>,

    /// Distance integration model
    #[arg(long, value_enum)]
    distance_model: Option<DistanceModelArg>,

    /// Also write the report as JSON to this path (`-` for stdout)
    #[arg(long)]
    json: Option<PathBuf>,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum DistanceModelArg {
    Linear,
    ConstantAcceleration,
}

impl From<DistanceModelArg> for DistanceModel {
    fn from(arg: DistanceModelArg) -> Self {
        match arg {
            DistanceModelArg::Linear => DistanceModel::Linear,
            DistanceModelArg::ConstantAcceleration => DistanceModel::ConstantAcceleration,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let scenario = resolve_scenario(&cli)?;
    tracing::debug!(?scenario, "resolved scenario");

    let report = run_interval(&scenario)?;

    match cli.json.as_deref() {
        Some(path) if path == std::path::Path::new("-") => export::write_report(path, &report)?,
        Some(path) => {
            export::write_report(path, &report)?;
            print_report(&report);
        }
        None => print_report(&report),
    }
    Ok(())
}

fn resolve_scenario(cli: &Cli) -> anyhow::Result<ScenarioConfig> {
    let mut scenario = match &cli.scenario {
        Some(path) => load_scenario(path)?,
        None => ScenarioConfig::default(),
    };

    let overrides = [
        (cli.velocity_kmh, &mut scenario.velocity_kmh),
        (cli.acceleration_m_s2, &mut scenario.acceleration_m_s2),
        (cli.duration_s, &mut scenario.duration_s),
        (cli.initial_distance_km, &mut scenario.initial_distance_km),
        (cli.fuel_kg, &mut scenario.remaining_fuel_kg),
        (cli.burn_rate_kg_s, &mut scenario.burn_rate_kg_s),
    ];
    for (value, slot) in overrides {
        if let Some(value) = value {
            *slot = value;
        }
    }
    if let Some(model) = cli.distance_model {
        scenario.distance_model = model.into();
    }
    Ok(scenario)
}

fn print_report(report: &IntervalReport) {
    println!("New Velocity   : {:.2} km/h", report.velocity_kmh);
    println!("New Distance   : {:.2} km", report.distance_km);
    println!("Remaining Fuel : {:.2} kg", report.remaining_fuel_kg);
    if let Some(seconds) = report.burn_time_remaining_s {
        println!("Burn remaining : {:.0} s", seconds);
    }
}
