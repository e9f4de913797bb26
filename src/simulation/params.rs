//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds the immutable runtime settings:
//! - field size (`width`, `height`),
//! - gravitational constant `G` and the distance floor of the force law,
//! - particle radius, split threshold and fragment mass floor,
//! - bounce damping, base speed and random seed
//!
//! Values are checked once by [`Parameters::validate`] when a `Simulation`
//! is built; the tick loop never re-validates them.

use crate::configuration::config::ParametersConfig;
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
#[allow(non_snake_case)]
pub struct Parameters {
    pub width: f64, // field width
    pub height: f64, // field height
    pub G: f64, // gravitational constant
    pub particle_radius: f64, // radius of every particle
    pub split_threshold: f64, // split trigger mass
    pub bounce_damping: f64, // speed kept on a bounce
    pub base_speed: f64, // fragment / seeding speed scale
    pub min_distance: f64, // distance floor for the force law
    pub min_fragment_mass: f64, // lightest fragment a split may produce
    pub seed: Option<u64>, // deterministic seed
}

impl Default for Parameters {
    fn default() -> Self {
        Self::from(&ParametersConfig::default())
    }
}

impl From<&ParametersConfig> for Parameters {
    fn from(cfg: &ParametersConfig) -> Self {
        Self {
            width: cfg.width,
            height: cfg.height,
            G: cfg.G,
            particle_radius: cfg.particle_radius,
            split_threshold: cfg.split_threshold,
            bounce_damping: cfg.bounce_damping,
            base_speed: cfg.base_speed,
            min_distance: cfg.min_distance,
            min_fragment_mass: cfg.min_fragment_mass,
            seed: cfg.seed,
        }
    }
}

impl Parameters {
    /// Separation at or below which two particles are in contact
    pub fn contact_distance(&self) -> f64 {
        2.0 * self.particle_radius
    }

    /// Reject settings the tick loop cannot run with.
    ///
    /// Errors:
    /// - `Error::InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        positive("width", self.width)?;
        positive("height", self.height)?;
        non_negative("G", self.G)?;
        positive("particle_radius", self.particle_radius)?;
        positive("split_threshold", self.split_threshold)?;
        non_negative("base_speed", self.base_speed)?;
        positive("min_distance", self.min_distance)?;
        positive("min_fragment_mass", self.min_fragment_mass)?;
        if !(self.bounce_damping > 0.0 && self.bounce_damping <= 1.0) {
            return Err(Error::InvalidConfig(format!(
                "bounce_damping must lie in (0, 1], got {}",
                self.bounce_damping
            )));
        }
        Ok(())
    }
}

fn positive(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::InvalidConfig(format!(
            "{name} must be finite and > 0, got {value}"
        )));
    }
    Ok(())
}

fn non_negative(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::InvalidConfig(format!(
            "{name} must be finite and >= 0, got {value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(Parameters::default().validate().is_ok());
        assert_eq!(Parameters::default().contact_distance(), 10.0);
    }

    #[test]
    fn damping_outside_unit_interval_rejected() {
        for d in [0.0, -0.5, 1.5, f64::NAN] {
            let p = Parameters { bounce_damping: d, ..Parameters::default() };
            let msg = p.validate().unwrap_err().to_string();
            assert!(msg.contains("bounce_damping"), "{msg}");
        }
        let full = Parameters { bounce_damping: 1.0, ..Parameters::default() };
        assert!(full.validate().is_ok());
    }

    #[test]
    fn non_positive_radius_rejected() {
        let p = Parameters { particle_radius: 0.0, ..Parameters::default() };
        assert!(p.validate().unwrap_err().to_string().contains("particle_radius"));
    }
}
