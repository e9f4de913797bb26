use gravsim::{build_simulation, ScenarioConfig};
use gravsim::{bench_forces, bench_step_curve};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "gravsim.yaml")]
    file_name: String,

    /// Ticks to run
    #[arg(long, default_value_t = 600)]
    ticks: u64,

    /// Seconds per tick (a 60 fps frame by default)
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f64,

    /// Log a summary every this many ticks
    #[arg(long, default_value_t = 60)]
    report_every: u64,

    /// Run the timing benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

// a path as given, otherwise a file in the crate's scenarios/ directory
fn scenario_path(file_name: &str) -> PathBuf {
    let direct = PathBuf::from(file_name);
    if direct.exists() {
        return direct;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    if args.bench {
        bench_forces();
        bench_step_curve()?;
        return Ok(());
    }

    let path = scenario_path(&args.file_name);
    let scenario_cfg = ScenarioConfig::from_path(&path)
        .with_context(|| format!("failed to load scenario {}", path.display()))?;
    let mut sim = build_simulation(&scenario_cfg)?;

    let report_every = args.report_every.max(1);
    for _ in 0..args.ticks {
        let report = sim.step(args.dt);
        if report.advanced && report.tick % report_every == 0 {
            info!(
                tick = report.tick,
                particles = report.particles,
                splits = report.splits,
                total_mass = sim.total_mass(),
                kinetic_energy = sim.kinetic_energy(),
                "progress"
            );
        }
    }

    println!("id,x,y,radius");
    for view in sim.snapshot() {
        println!("{},{:.4},{:.4},{}", view.id.0, view.position.x, view.position.y, view.radius);
    }

    Ok(())
}
