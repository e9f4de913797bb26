//! Force contributors for the particle engine
//!
//! Defines the `Force` trait, the `ForceSet` that sums terms, and the two
//! gravity laws of the simulation: unit-mass (`G / r²`) and mass-product
//! (`G m1 m2 / r²`). Both are evaluated exactly over every unordered pair.

use crate::configuration::config::ForceLaw;
use crate::simulation::math::{guard_distance, inverse_square};
use crate::simulation::states::{NVec2, Particle};

/// Collection of force terms
/// Each term implements [`Force`] and their contributions are summed
/// into a single force vector per particle
pub struct ForceSet {
    terms: Vec<Box<dyn Force + Send + Sync>>,
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Force set holding the gravity term for `law`
    #[allow(non_snake_case)]
    pub fn gravity(law: ForceLaw, G: f64, min_distance: f64) -> Self {
        match law {
            ForceLaw::UnitMass => Self::new().with(UnitMassGravity { G, min_distance }),
            ForceLaw::MassProduct => Self::new().with(MassProductGravity { G, min_distance }),
        }
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Force + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total forces for all particles in `particles`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_forces(&self, particles: &[Particle], out: &mut [NVec2]) {
        // Zero buffer
        for f in out.iter_mut() {
            *f = NVec2::zeros();
        }
        for term in &self.terms {
            term.force(particles, out);
        }
    }
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Force source operating on a particle slice
/// Implementations add their contribution into `out[i]` for each particle
pub trait Force {
    fn force(&self, particles: &[Particle], out: &mut [NVec2]);
}

/// `G / r²` per pair, independent of mass
///
/// The result is used directly as a velocity impulse by the integrator
#[allow(non_snake_case)]
pub struct UnitMassGravity {
    pub G: f64, // gravitational constant
    pub min_distance: f64, // separation floor
}

impl Force for UnitMassGravity {
    fn force(&self, particles: &[Particle], out: &mut [NVec2]) {
        accumulate_pairs(particles, out, self.min_distance, |a, b| {
            law_strength(ForceLaw::UnitMass, self.G, a.m, b.m)
        });
    }
}

/// Newtonian `G m1 m2 / r²` per pair
#[allow(non_snake_case)]
pub struct MassProductGravity {
    pub G: f64, // gravitational constant
    pub min_distance: f64, // separation floor
}

impl Force for MassProductGravity {
    fn force(&self, particles: &[Particle], out: &mut [NVec2]) {
        accumulate_pairs(particles, out, self.min_distance, |a, b| {
            law_strength(ForceLaw::MassProduct, self.G, a.m, b.m)
        });
    }
}

/// Numerator of the inverse-square law for a pair with masses `m1`, `m2`
#[allow(non_snake_case)]
pub fn law_strength(law: ForceLaw, G: f64, m1: f64, m2: f64) -> f64 {
    match law {
        ForceLaw::UnitMass => G,
        ForceLaw::MassProduct => G * m1 * m2,
    }
}

/// Force on particle `a` exerted by particle `b` under `law`
#[allow(non_snake_case)]
pub fn force_between(law: ForceLaw, G: f64, min_distance: f64, a: &Particle, b: &Particle) -> NVec2 {
    pair_force(law_strength(law, G, a.m, b.m), &a.x, &b.x, min_distance)
}

/// Scalar magnitude of the law at separation `r`, after the distance floor
#[allow(non_snake_case)]
pub fn force_magnitude(law: ForceLaw, G: f64, m1: f64, m2: f64, r: f64, min_distance: f64) -> f64 {
    inverse_square(law_strength(law, G, m1, m2), r, min_distance)
}

/// Force at `xi` pulling toward `xj` for a law of the given `strength`
///
/// The separation is floored at `min_distance` both in the magnitude and in
/// the per-axis scaling, so coincident points get an exact zero vector.
fn pair_force(strength: f64, xi: &NVec2, xj: &NVec2, min_distance: f64) -> NVec2 {
    // displacement from i to j: i is pulled along +r
    let r = xj - xi;
    let dist = guard_distance(r.norm(), min_distance);
    let magnitude = inverse_square(strength, dist, min_distance);
    r * (magnitude / dist)
}

fn accumulate_pairs<F>(particles: &[Particle], out: &mut [NVec2], min_distance: f64, strength: F)
where
    F: Fn(&Particle, &Particle) -> f64,
{
    let n = particles.len();
    if n < 2 {
        return;
    }

    // Each unordered pair (i, j) with i < j once; self-pairs never occur
    for i in 0..n {
        let pi = &particles[i];
        for j in (i + 1)..n {
            let pj = &particles[j];
            let f = pair_force(strength(pi, pj), &pi.x, &pj.x, min_distance);

            // equal and opposite
            out[i] += f;
            out[j] -= f;
        }
    }
}
