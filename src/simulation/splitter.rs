//! Collision splitting
//!
//! A qualifying particle in contact is replaced by two fragments of half its
//! mass, placed at its position and sent off with independently sampled
//! velocities. Fragment velocities do not derive from the parent's momentum.
//!
//! Splitting runs in two stages so the particle set is never mutated while it
//! is being read: [`Splitter::plan`] decides which particles split from the
//! contact list, and the orchestrator applies the plan at tick end.

use std::collections::{HashMap, HashSet};
use std::f64::consts::TAU;

use rand::Rng;

use crate::configuration::config::{FragmentVelocity, SplitPolicy};
use crate::simulation::collisions::Contact;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, Particle, ParticleId};

/// State of a fragment before it receives a handle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fragment {
    pub x: NVec2,
    pub v: NVec2,
    pub m: f64,
}

/// Outcome of checking one tick's contacts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SplitPlan {
    /// Particles to replace by fragments, each listed once
    pub parents: Vec<ParticleId>,
    /// Particles that qualified but whose fragments would fall below the mass floor
    pub refused: Vec<ParticleId>,
}

#[derive(Debug, Clone, Copy)]
pub struct Splitter {
    pub policy: SplitPolicy,
    pub threshold: f64,
    pub base_speed: f64,
    pub min_fragment_mass: f64,
    pub velocity: FragmentVelocity,
}

impl Splitter {
    pub fn new(params: &Parameters, policy: SplitPolicy) -> Self {
        Self {
            policy,
            threshold: params.split_threshold,
            base_speed: params.base_speed,
            min_fragment_mass: params.min_fragment_mass,
            velocity: FragmentVelocity::default(),
        }
    }

    /// Use `velocity` to draw fragment velocities
    pub fn with_velocity(mut self, velocity: FragmentVelocity) -> Self {
        self.velocity = velocity;
        self
    }

    /// Mass at or above the split threshold
    pub fn qualifies(&self, m: f64) -> bool {
        m >= self.threshold
    }

    /// Particles in `contact` that split under the active policy
    pub fn splitting_members(&self, contact: &Contact, ma: f64, mb: f64) -> Vec<ParticleId> {
        match self.policy {
            SplitPolicy::Disabled => Vec::new(),
            SplitPolicy::BothAboveThreshold => {
                if self.qualifies(ma) && self.qualifies(mb) {
                    vec![contact.a, contact.b]
                } else {
                    Vec::new()
                }
            }
            SplitPolicy::EitherAboveThreshold => {
                let mut out = Vec::with_capacity(2);
                if self.qualifies(ma) {
                    out.push(contact.a);
                }
                if self.qualifies(mb) {
                    out.push(contact.b);
                }
                out
            }
        }
    }

    /// Decide which particles split this tick
    ///
    /// A particle in several qualifying contacts still splits only once.
    pub fn plan(&self, particles: &[Particle], contacts: &[Contact]) -> SplitPlan {
        let mut plan = SplitPlan::default();
        if self.policy == SplitPolicy::Disabled || contacts.is_empty() {
            return plan;
        }

        let mass: HashMap<ParticleId, f64> = particles.iter().map(|p| (p.id, p.m)).collect();
        let mut seen: HashSet<ParticleId> = HashSet::new();

        for contact in contacts {
            let (Some(&ma), Some(&mb)) = (mass.get(&contact.a), mass.get(&contact.b)) else {
                continue;
            };
            for id in self.splitting_members(contact, ma, mb) {
                if !seen.insert(id) {
                    continue;
                }
                if self.fragment_mass_ok(mass[&id]) {
                    plan.parents.push(id);
                } else {
                    plan.refused.push(id);
                }
            }
        }
        plan
    }

    /// Half of `m` is still a usable mass
    pub fn fragment_mass_ok(&self, m: f64) -> bool {
        let half = m / 2.0;
        half.is_finite() && half >= self.min_fragment_mass
    }

    /// The two fragments replacing `parent`
    pub fn fragments<R: Rng>(&self, parent: &Particle, rng: &mut R) -> [Fragment; 2] {
        let m = parent.m / 2.0;
        [
            Fragment { x: parent.x, v: self.fragment_velocity(rng), m },
            Fragment { x: parent.x, v: self.fragment_velocity(rng), m },
        ]
    }

    /// One fragment velocity under the configured model
    pub fn fragment_velocity<R: Rng>(&self, rng: &mut R) -> NVec2 {
        let s = self.base_speed;
        match self.velocity {
            FragmentVelocity::AngleAndSpeed => {
                let angle: f64 = rng.random_range(0.0..TAU);
                let speed = rng.random_range(0.5_f64..=1.5) * s;
                NVec2::new(speed * angle.cos(), speed * angle.sin())
            }
            FragmentVelocity::UniformComponents => {
                NVec2::new(rng.random_range(-s..=s), rng.random_range(-s..=s))
            }
        }
    }
}
