use std::time::Instant;

use crate::configuration::config::{ForceLaw, SplitPolicy};
use crate::error::Result;
use crate::simulation::engine::Engine;
use crate::simulation::forces::ForceSet;
use crate::simulation::params::Parameters;
use crate::simulation::sim::Simulation;
use crate::simulation::states::{NVec2, ParticleSet};

/// Time one force pass under each law for growing `n`
pub fn bench_forces() {
    let ns = [200, 400, 800, 1600, 3200];
    let params = Parameters::default();

    for n in ns {
        let set = make_particle_set(n, &params);
        let mut out = vec![NVec2::zeros(); n];

        let unit = ForceSet::gravity(ForceLaw::UnitMass, params.G, params.min_distance);
        let product = ForceSet::gravity(ForceLaw::MassProduct, params.G, params.min_distance);

        // Warm up
        unit.accumulate_forces(set.as_slice(), &mut out);
        product.accumulate_forces(set.as_slice(), &mut out);

        let t0 = Instant::now();
        unit.accumulate_forces(set.as_slice(), &mut out);
        let dt_unit = t0.elapsed().as_secs_f64();

        let t1 = Instant::now();
        product.accumulate_forces(set.as_slice(), &mut out);
        let dt_product = t1.elapsed().as_secs_f64();

        println!("N = {n:5}, unit_mass = {:8.6} s, mass_product = {:8.6} s", dt_unit, dt_product);
    }
}

/// Milliseconds per full `Simulation::step` for a range of n
/// Paste output directly into a spreadsheet to graph
pub fn bench_step_curve() -> Result<()> {
    println!("N,step_ms");

    for n in (200..=3200).step_by(200) {
        // Small n: average over a few steps to smooth noise
        let steps = if n <= 800 { 5 } else { 1 };

        let mut sim = make_simulation(n)?;

        let t0 = Instant::now();
        for _ in 0..steps {
            sim.step(1.0 / 60.0);
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", n, ms);
    }
    Ok(())
}

/// Deterministic layout spread over the default field, no rand needed
fn layout(i: usize, params: &Parameters) -> NVec2 {
    let i_f = i as f64;
    NVec2::new(
        (0.5 + 0.45 * (i_f * 0.37).sin()) * params.width,
        (0.5 + 0.45 * (i_f * 0.13).cos()) * params.height,
    )
}

fn make_particle_set(n: usize, params: &Parameters) -> ParticleSet {
    let mut set = ParticleSet::new();
    for i in 0..n {
        set.insert(layout(i, params), NVec2::zeros(), 1.0 + (i % 5) as f64, params.particle_radius);
    }
    set
}

/// Splitting off so `n` stays fixed across the timed steps
fn make_simulation(n: usize) -> Result<Simulation> {
    let params = Parameters { seed: Some(42), ..Parameters::default() };
    let engine = Engine { split_policy: SplitPolicy::Disabled, ..Engine::default() };
    let mut sim = Simulation::new(engine, params.clone())?;
    for i in 0..n {
        let x = layout(i, &params);
        sim.create_particle(x.x, x.y, 1.0 + (i % 5) as f64)?;
    }
    Ok(sim)
}
