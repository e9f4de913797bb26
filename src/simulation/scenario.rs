//! Build fully-initialized simulations from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a ready-to-step
//! `Simulation` containing:
//! - engine settings (`Engine`)
//! - validated parameters (`Parameters`)
//! - the random initial population, if one is configured
//! - the explicitly listed particles, appended after the population

use tracing::info;

use crate::configuration::config::{ParticleConfig, ScenarioConfig};
use crate::error::Result;
use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::sim::Simulation;

pub fn build_simulation(cfg: &ScenarioConfig) -> Result<Simulation> {
    let engine = Engine::from(&cfg.engine);
    let parameters = Parameters::from(&cfg.parameters);
    let mut sim = Simulation::new(engine, parameters)?;

    if let Some(pop) = &cfg.population {
        sim.populate(pop.count, pop.mass_min, pop.mass_max)?;
    }

    for pc in &cfg.particles {
        let ParticleConfig { x, v, m } = pc;
        sim.create_moving_particle(x[0], x[1], *m, v[0], v[1])?;
    }

    info!(particles = sim.len(), total_mass = sim.total_mass(), "scenario built");
    Ok(sim)
}
