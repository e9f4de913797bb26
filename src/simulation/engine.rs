//! High-level runtime engine settings
//!
//! Selects the force law (and with it the integrator), the split policy, the
//! fragment velocity model and the boundary handling of a `Simulation`

use crate::configuration::config::{BoundaryMode, EngineConfig, ForceLaw, FragmentVelocity, SplitPolicy};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Engine {
    pub force_law: ForceLaw, // unit_mass or mass_product
    pub split_policy: SplitPolicy, // both, either or disabled
    pub boundary: BoundaryMode, // reflect, reflect_and_clamp or open
    pub fragment_velocity: FragmentVelocity, // polar draw or per-component draw
}

impl From<&EngineConfig> for Engine {
    fn from(cfg: &EngineConfig) -> Self {
        Self {
            force_law: cfg.force_law,
            split_policy: cfg.split_policy,
            boundary: cfg.boundary,
            fragment_velocity: cfg.fragment_velocity,
        }
    }
}
