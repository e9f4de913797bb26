//! Core state types for the particle simulation.
//!
//! Defines the particle, its opaque handle, and the particle set:
//! - `Particle` / `ParticleSet` using `NVec2`
//! - `ParticleView` as the read-only render view
//!
//! Particles are identified by `ParticleId` only. Two fragments of the same
//! parent can be bit-for-bit identical in every physical field and still be
//! different particles.

use std::collections::HashSet;

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// Opaque particle handle, never reused within one simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticleId(pub u64);

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub id: ParticleId,
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub m: f64, // mass
    pub radius: f64, // contact/visual radius
}

impl Particle {
    pub fn momentum(&self) -> NVec2 {
        self.v * self.m
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.m * self.v.norm_squared()
    }
}

/// What the display surface needs to draw a particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleView {
    pub id: ParticleId,
    pub position: NVec2,
    pub radius: f64,
}

/// Live particles in insertion order plus the handle counter
#[derive(Debug, Clone, Default)]
pub struct ParticleSet {
    particles: Vec<Particle>,
    next_id: u64,
}

impl ParticleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a particle and return its freshly allocated handle
    pub fn insert(&mut self, x: NVec2, v: NVec2, m: f64, radius: f64) -> ParticleId {
        let id = ParticleId(self.next_id);
        self.next_id += 1;
        self.particles.push(Particle { id, x, v, m, radius });
        id
    }

    /// Remove a particle by handle, keeping the order of the others
    pub fn remove(&mut self, id: ParticleId) -> Option<Particle> {
        self.particles
            .iter()
            .position(|p| p.id == id)
            .map(|idx| self.particles.remove(idx))
    }

    /// Drop every particle whose handle is in `ids` in a single pass
    pub fn remove_all(&mut self, ids: &[ParticleId]) {
        if ids.is_empty() {
            return;
        }
        let doomed: HashSet<ParticleId> = ids.iter().copied().collect();
        self.particles.retain(|p| !doomed.contains(&p.id));
    }

    pub fn get(&self, id: ParticleId) -> Option<&Particle> {
        self.particles.iter().find(|p| p.id == id)
    }

    pub fn get_mut(&mut self, id: ParticleId) -> Option<&mut Particle> {
        self.particles.iter_mut().find(|p| p.id == id)
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Particle> {
        self.particles.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
