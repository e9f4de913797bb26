//! The per-tick orchestrator
//!
//! One call to [`Simulation::step`] walks the whole cycle
//!
//! `Idle -> ComputingForces -> Integrating -> ReflectingBoundaries -> DetectingCollisions -> Resolving -> Idle`
//!
//! Forces come from the particle set as it stood when the tick began. Splits
//! are planned from the post-integration set and applied at the very end,
//! so no pass ever iterates over a collection that is changing under it.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use tracing::{debug, info, trace};

use crate::error::{Error, Result};
use crate::simulation::boundary::BoundaryReflector;
use crate::simulation::collisions::detect_contacts;
use crate::simulation::engine::Engine;
use crate::simulation::forces::ForceSet;
use crate::simulation::integrator::{integrator_for, Integrator};
use crate::simulation::math::distance;
use crate::simulation::params::Parameters;
use crate::simulation::splitter::{SplitPlan, Splitter};
use crate::simulation::states::{NVec2, Particle, ParticleId, ParticleSet, ParticleView};

/// Largest population a single `populate` call will seed
pub const MAX_POPULATION: usize = 1_000_000;

/// Stages of a tick, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepPhase {
    Idle,
    ComputingForces,
    Integrating,
    ReflectingBoundaries,
    DetectingCollisions,
    Resolving,
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    pub tick: u64, // tick counter after this step
    pub advanced: bool, // false when dt was rejected and nothing moved
    pub contacts: usize, // touching pairs found
    pub reflections: usize, // particles that bounced off an edge
    pub splits: usize, // parents replaced by fragments
    pub refused_splits: usize, // qualifying parents kept alive by the fragment mass floor
    pub particles: usize, // live particles after the tick
}

/// A running simulation: validated configuration plus the live particle set
pub struct Simulation {
    engine: Engine,
    parameters: Parameters,
    particles: ParticleSet,
    forces: ForceSet,
    integrator: Box<dyn Integrator + Send + Sync>,
    boundary: BoundaryReflector,
    splitter: Splitter,
    rng: ChaChaRng,
    tick: u64,
}

impl Simulation {
    /// Build an empty simulation.
    ///
    /// Errors:
    /// - `Error::InvalidConfig` if `parameters` fails validation.
    pub fn new(engine: Engine, parameters: Parameters) -> Result<Self> {
        parameters.validate()?;

        let rng = match parameters.seed {
            Some(s) => ChaChaRng::seed_from_u64(s),
            None => ChaChaRng::from_rng(&mut rand::rng()),
        };

        info!(
            force_law = ?engine.force_law,
            split_policy = ?engine.split_policy,
            boundary = ?engine.boundary,
            fragment_velocity = ?engine.fragment_velocity,
            width = parameters.width,
            height = parameters.height,
            seed = ?parameters.seed,
            "simulation created"
        );

        Ok(Self {
            forces: ForceSet::gravity(engine.force_law, parameters.G, parameters.min_distance),
            integrator: integrator_for(engine.force_law),
            boundary: BoundaryReflector::new(&parameters, engine.boundary),
            splitter: Splitter::new(&parameters, engine.split_policy).with_velocity(engine.fragment_velocity),
            particles: ParticleSet::new(),
            engine,
            parameters,
            rng,
            tick: 0,
        })
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    // particle management ==================================================================

    /// Add a particle at rest
    pub fn create_particle(&mut self, x: f64, y: f64, mass: f64) -> Result<ParticleId> {
        self.create_moving_particle(x, y, mass, 0.0, 0.0)
    }

    /// Add a particle with an initial velocity.
    ///
    /// Errors:
    /// - `Error::InvalidParticle` if `mass` is not finite and > 0, or any coordinate is not finite.
    pub fn create_moving_particle(&mut self, x: f64, y: f64, mass: f64, vx: f64, vy: f64) -> Result<ParticleId> {
        if !mass.is_finite() || mass <= 0.0 {
            return Err(Error::InvalidParticle(format!("mass must be finite and > 0, got {mass}")));
        }
        if ![x, y].iter().all(|c| c.is_finite()) {
            return Err(Error::InvalidParticle("position must be finite".into()));
        }
        if ![vx, vy].iter().all(|c| c.is_finite()) {
            return Err(Error::InvalidParticle("velocity must be finite".into()));
        }
        let id = self.particles.insert(
            NVec2::new(x, y),
            NVec2::new(vx, vy),
            mass,
            self.parameters.particle_radius,
        );
        Ok(id)
    }

    /// Remove a particle; `None` if the handle is not live
    pub fn remove_particle(&mut self, id: ParticleId) -> Option<Particle> {
        self.particles.remove(id)
    }

    /// First particle whose center lies within one radius of `(x, y)`
    pub fn particle_at(&self, x: f64, y: f64) -> Option<ParticleId> {
        let point = NVec2::new(x, y);
        self.particles
            .iter()
            .find(|p| distance(&p.x, &point) <= p.radius)
            .map(|p| p.id)
    }

    /// Teleport a particle, keeping its velocity.
    ///
    /// Errors:
    /// - `Error::UnknownParticle` if `id` is not live.
    /// - `Error::InvalidParticle` if the target is not finite.
    pub fn move_particle(&mut self, id: ParticleId, x: f64, y: f64) -> Result<()> {
        if !x.is_finite() || !y.is_finite() {
            return Err(Error::InvalidParticle("position must be finite".into()));
        }
        let p = self.particles.get_mut(id).ok_or(Error::UnknownParticle(id))?;
        p.x = NVec2::new(x, y);
        Ok(())
    }

    /// Stop every particle in place
    pub fn freeze(&mut self) {
        for p in self.particles.iter_mut() {
            p.v = NVec2::zeros();
        }
    }

    /// Seed `count` particles at random.
    ///
    /// Positions are uniform over the field inset by one radius, velocity
    /// components uniform in `[-base_speed, base_speed]`, mass uniform in
    /// `[mass_min, mass_max]`.
    ///
    /// Errors:
    /// - `Error::InvalidConfig` for a bad mass range, a field narrower than one particle,
    ///   or a `count` above [`MAX_POPULATION`].
    pub fn populate(&mut self, count: usize, mass_min: f64, mass_max: f64) -> Result<Vec<ParticleId>> {
        if count > MAX_POPULATION {
            return Err(Error::InvalidConfig(format!(
                "population count must be at most {MAX_POPULATION}, got {count}"
            )));
        }
        if !mass_min.is_finite() || !mass_max.is_finite() || mass_min <= 0.0 || mass_max < mass_min {
            return Err(Error::InvalidConfig(format!(
                "population mass range must satisfy 0 < min <= max, got [{mass_min}, {mass_max}]"
            )));
        }
        let r = self.parameters.particle_radius;
        let (w, h) = (self.parameters.width, self.parameters.height);
        if w < 2.0 * r || h < 2.0 * r {
            return Err(Error::InvalidConfig(
                "field is too small to place particles inside it".into(),
            ));
        }
        let s = self.parameters.base_speed;

        let mut ids = Vec::with_capacity(count);
        for _ in 0..count {
            let x = NVec2::new(self.rng.random_range(r..=w - r), self.rng.random_range(r..=h - r));
            let v = NVec2::new(self.rng.random_range(-s..=s), self.rng.random_range(-s..=s));
            let m = self.rng.random_range(mass_min..=mass_max);
            ids.push(self.particles.insert(x, v, m, r));
        }
        info!(count, total = self.particles.len(), "population seeded");
        Ok(ids)
    }

    // stepping ============================================================================

    /// Advance the simulation by one tick
    ///
    /// A non-positive or non-finite `dt` leaves everything untouched. In
    /// unit-mass mode any positive `dt` advances exactly one tick unit.
    pub fn step(&mut self, dt: f64) -> StepReport {
        if !(dt > 0.0 && dt.is_finite()) {
            debug!(dt, "rejected dt, tick skipped");
            return StepReport {
                tick: self.tick,
                particles: self.particles.len(),
                ..StepReport::default()
            };
        }

        self.tick += 1;
        let mut report = StepReport {
            tick: self.tick,
            advanced: true,
            ..StepReport::default()
        };

        // Forces from the tick-start state
        trace!(tick = self.tick, phase = ?StepPhase::ComputingForces);
        let mut forces = vec![NVec2::zeros(); self.particles.len()];
        self.forces.accumulate_forces(self.particles.as_slice(), &mut forces);

        trace!(tick = self.tick, phase = ?StepPhase::Integrating);
        for (p, f) in self.particles.iter_mut().zip(forces.iter()) {
            self.integrator.integrate(p, *f, dt);
        }

        trace!(tick = self.tick, phase = ?StepPhase::ReflectingBoundaries);
        for p in self.particles.iter_mut() {
            if self.boundary.reflect(p) {
                report.reflections += 1;
            }
        }

        trace!(tick = self.tick, phase = ?StepPhase::DetectingCollisions);
        let contacts = detect_contacts(self.particles.as_slice(), self.parameters.contact_distance());
        report.contacts = contacts.len();

        trace!(tick = self.tick, phase = ?StepPhase::Resolving);
        let plan = self.splitter.plan(self.particles.as_slice(), &contacts);
        report.refused_splits = plan.refused.len();
        report.splits = self.apply_splits(&plan);
        report.particles = self.particles.len();

        trace!(tick = self.tick, phase = ?StepPhase::Idle);
        debug!(
            tick = report.tick,
            contacts = report.contacts,
            reflections = report.reflections,
            splits = report.splits,
            refused = report.refused_splits,
            particles = report.particles,
            "tick complete"
        );
        report
    }

    /// Replace each planned parent by its two fragments; returns the number of parents split
    fn apply_splits(&mut self, plan: &SplitPlan) -> usize {
        for id in &plan.refused {
            debug!(particle = ?id, "split refused, fragments would fall below the mass floor");
        }
        if plan.parents.is_empty() {
            return 0;
        }

        let mut fragments = Vec::with_capacity(plan.parents.len() * 2);
        for id in &plan.parents {
            if let Some(parent) = self.particles.get(*id) {
                fragments.extend(self.splitter.fragments(parent, &mut self.rng));
            }
        }

        self.particles.remove_all(&plan.parents);
        let radius = self.parameters.particle_radius;
        for f in fragments {
            self.particles.insert(f.x, f.v, f.m, radius);
        }
        plan.parents.len()
    }

    // views ===============================================================================

    /// Render view of every live particle, in set order
    pub fn snapshot(&self) -> Vec<ParticleView> {
        self.particles
            .iter()
            .map(|p| ParticleView { id: p.id, position: p.x, radius: p.radius })
            .collect()
    }

    pub fn particle(&self, id: ParticleId) -> Option<&Particle> {
        self.particles.get(id)
    }

    pub fn particles(&self) -> &[Particle] {
        self.particles.as_slice()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Ticks actually advanced so far
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn total_mass(&self) -> f64 {
        self.particles.iter().map(|p| p.m).sum()
    }

    pub fn total_momentum(&self) -> NVec2 {
        self.particles
            .iter()
            .map(|p| p.momentum())
            .fold(NVec2::zeros(), |acc, m| acc + m)
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.particles.iter().map(|p| p.kinetic_energy()).sum()
    }
}
