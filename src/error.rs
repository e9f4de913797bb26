use thiserror::Error;

use crate::simulation::states::ParticleId;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the simulation core and the scenario loader.
///
/// Tick-time conditions (coincident particles, particles drifting out of the
/// field) are normal behavior and never surface here.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration rejected at construction time.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A particle could not be created with the given state.
    #[error("invalid particle: {0}")]
    InvalidParticle(String),

    /// The handle does not name a live particle.
    #[error("unknown particle {0:?}")]
    UnknownParticle(ParticleId),

    /// Reading a scenario file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A scenario file is not valid YAML for [`crate::ScenarioConfig`].
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_is_informative() {
        let e = Error::InvalidConfig("bounce_damping must lie in (0, 1]".to_string());
        let msg = format!("{e}");
        assert!(msg.contains("invalid configuration"));
        assert!(msg.contains("bounce_damping"));
    }

    #[test]
    fn unknown_particle_names_the_handle() {
        let msg = Error::UnknownParticle(ParticleId(7)).to_string();
        assert!(msg.contains('7'));
    }
}
