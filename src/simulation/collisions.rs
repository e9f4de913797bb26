//! Contact detection between particles
//!
//! Two particles touch when their centers are at most the contact distance
//! apart (twice the fixed particle radius, whatever their masses). Every
//! unordered pair is checked, O(N²).

use crate::simulation::math::distance;
use crate::simulation::states::{Particle, ParticleId};

/// A detected contact between two particles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// First particle, earlier in set order
    pub a: ParticleId,
    /// Second particle, later in set order
    pub b: ParticleId,
    /// Center separation when detected
    pub separation: f64,
}

/// True when `a` and `b` are within `contact_distance` of each other
pub fn in_contact(a: &Particle, b: &Particle, contact_distance: f64) -> bool {
    distance(&a.x, &b.x) <= contact_distance
}

/// All contacts among `particles`, in pair order `(0,1), (0,2), .., (1,2), ..`
pub fn detect_contacts(particles: &[Particle], contact_distance: f64) -> Vec<Contact> {
    let n = particles.len();

    (0..n)
        .flat_map(|i| {
            ((i + 1)..n).filter_map(move |j| {
                let (a, b) = (&particles[i], &particles[j]);
                let separation = distance(&a.x, &b.x);
                (separation <= contact_distance).then_some(Contact {
                    a: a.id,
                    b: b.id,
                    separation,
                })
            })
        })
        .collect()
}
