//! Per-particle time integrators
//!
//! Two schemes share the [`Integrator`] contract. Which one a simulation uses
//! follows from its force law and is fixed at construction:
//! - `unit_mass`    -> [`VelocityImpulse`]
//! - `mass_product` -> [`AccelerationStep`]

use crate::configuration::config::ForceLaw;
use super::states::{NVec2, Particle};

/// Advance one particle given the force accumulated on it this tick
pub trait Integrator {
    fn integrate(&self, p: &mut Particle, force: NVec2, dt: f64);
}

/// The force is already an impulse: v += F, x += v
/// One tick is one unit of simulated time, so `dt` is not read
#[derive(Debug, Clone, Copy, Default)]
pub struct VelocityImpulse;

impl Integrator for VelocityImpulse {
    fn integrate(&self, p: &mut Particle, force: NVec2, _dt: f64) {
        p.v += force;
        p.x += p.v;
    }
}

/// Semi-implicit Euler on a = F / m
#[derive(Debug, Clone, Copy, Default)]
pub struct AccelerationStep;

impl Integrator for AccelerationStep {
    fn integrate(&self, p: &mut Particle, force: NVec2, dt: f64) {
        // a = F / m
        let a = force / p.m;

        // Kick: v_n+1 = v_n + dt * a
        p.v += dt * a;

        // Drift with the updated velocity: x_n+1 = x_n + dt * v_n+1
        p.x += dt * p.v;
    }
}

/// Integrator paired with `law`
pub fn integrator_for(law: ForceLaw) -> Box<dyn Integrator + Send + Sync> {
    match law {
        ForceLaw::UnitMass => Box::new(VelocityImpulse),
        ForceLaw::MassProduct => Box::new(AccelerationStep),
    }
}
