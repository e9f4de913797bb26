//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – force law, split policy and boundary handling
//! - [`ParametersConfig`] – field size and physical constants
//! - [`PopulationConfig`] – optional random initial population
//! - [`ParticleConfig`]   – explicitly placed particles
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario matching these types:
//!
//! ```yaml
//! engine:
//!   force_law: "unit_mass"               # or "mass_product"
//!   split_policy: "both_above_threshold" # "either_above_threshold" | "disabled"
//!   boundary: "reflect"                  # "reflect_and_clamp" | "open"
//!   fragment_velocity: "angle_and_speed" # or "uniform_components"
//!
//! parameters:
//!   width: 1500.0
//!   height: 1100.0
//!   G: 0.4                  # gravitational constant
//!   particle_radius: 5.0    # contact distance is twice this
//!   split_threshold: 10.0   # minimum mass for a colliding particle to split
//!   bounce_damping: 0.8     # in (0, 1]
//!   base_speed: 5.0         # fragment / seeded speed scale
//!   seed: 42                # omit for a nondeterministic run
//!
//! population:
//!   count: 250
//!   mass_min: 1.0
//!   mass_max: 5.0
//!
//! particles:
//!   - x: [ 700.0, 550.0 ]
//!     v: [   0.0,   0.0 ]
//!     m: 20.0
//! ```
//!
//! Every section is optional; missing values fall back to the defaults below.
//! Unknown keys are rejected, so a misspelled name is an error rather than a
//! silent default.
//! The scenario builder maps this into the validated runtime types.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// Which force law the engine uses
/// `force_law: "unit_mass"` or `force_law: "mass_product"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ForceLaw {
    #[default]
    #[serde(rename = "unit_mass")] // F = G / r^2, applied directly as a velocity impulse each tick
    UnitMass,

    #[serde(rename = "mass_product")] // F = G m1 m2 / r^2, divided by mass and scaled by dt
    MassProduct,
}

/// When a contact between two particles splits them
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitPolicy {
    #[default]
    #[serde(rename = "both_above_threshold")] // both masses >= threshold, then both split
    BothAboveThreshold,

    #[serde(rename = "either_above_threshold")] // each particle >= threshold splits on its own
    EitherAboveThreshold,

    #[serde(rename = "disabled")] // contacts never split anything
    Disabled,
}

/// How a fragment's velocity is drawn when its parent splits
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FragmentVelocity {
    #[default]
    #[serde(rename = "angle_and_speed")] // uniform direction, speed in [0.5, 1.5] x base_speed
    AngleAndSpeed,

    #[serde(rename = "uniform_components")] // vx and vy each uniform in [-base_speed, base_speed]
    UniformComponents,
}

/// How the field edges treat particles
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryMode {
    #[default]
    #[serde(rename = "reflect")] // damped velocity flip, position untouched
    Reflect,

    #[serde(rename = "reflect_and_clamp")] // damped velocity flip, position pulled back onto the edge
    ReflectAndClamp,

    #[serde(rename = "open")] // no edges
    Open,
}

/// High-level engine configuration
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub force_law: ForceLaw, // force law and the integrator paired with it
    pub split_policy: SplitPolicy, // split trigger
    pub boundary: BoundaryMode, // edge handling
    pub fragment_velocity: FragmentVelocity, // velocity model for split fragments
}

/// Field size and physical constants for a scenario
#[derive(Deserialize, Debug, Clone)]
#[serde(default, deny_unknown_fields)]
#[allow(non_snake_case)]
pub struct ParametersConfig {
    pub width: f64,             // field width
    pub height: f64,            // field height
    pub G: f64,                 // gravitational constant
    pub particle_radius: f64,   // radius of every particle
    pub split_threshold: f64,   // mass at or above which a colliding particle may split
    pub bounce_damping: f64,    // fraction of speed kept on a bounce
    pub base_speed: f64,        // speed scale for fragments and seeded particles
    pub min_distance: f64,      // separation floor for the inverse-square law
    pub min_fragment_mass: f64, // splits that would go below this are refused
    pub seed: Option<u64>,      // deterministic seed to make runs reproducable
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            width: 1500.0,
            height: 1100.0,
            G: 0.4,
            particle_radius: 5.0,
            split_threshold: 10.0,
            bounce_damping: 0.8,
            base_speed: 5.0,
            min_distance: 1.0,
            min_fragment_mass: 1.0e-6,
            seed: None,
        }
    }
}

/// Random initial population
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct PopulationConfig {
    pub count: usize, // number of particles to seed
    #[serde(default = "default_mass_min")]
    pub mass_min: f64, // lower bound of the uniform mass draw
    #[serde(default = "default_mass_max")]
    pub mass_max: f64, // upper bound of the uniform mass draw
}

fn default_mass_min() -> f64 {
    1.0
}

fn default_mass_max() -> f64 {
    5.0
}

/// Configuration for a single explicitly placed particle
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct ParticleConfig {
    pub x: [f64; 2], // initial position
    #[serde(default)]
    pub v: [f64; 2], // initial velocity, at rest if omitted
    pub m: f64,      // mass
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default, deny_unknown_fields)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // engine-level configuration
    pub parameters: ParametersConfig, // field size and constants
    pub population: Option<PopulationConfig>, // random seeding, if any
    pub particles: Vec<ParticleConfig>, // explicit particles, added after the population
}

impl ScenarioConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }
}
