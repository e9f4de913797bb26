pub mod simulation;
pub mod configuration;
pub mod benchmark;
pub mod error;

pub use simulation::states::{Particle, ParticleId, ParticleSet, ParticleView, NVec2};
pub use simulation::forces::{Force, ForceSet, UnitMassGravity, MassProductGravity, force_between, force_magnitude, law_strength};
pub use simulation::integrator::{Integrator, VelocityImpulse, AccelerationStep, integrator_for};
pub use simulation::boundary::BoundaryReflector;
pub use simulation::collisions::{Contact, detect_contacts, in_contact};
pub use simulation::splitter::{Fragment, SplitPlan, Splitter};
pub use simulation::engine::Engine;
pub use simulation::params::Parameters;
pub use simulation::sim::{Simulation, StepPhase, StepReport, MAX_POPULATION};
pub use simulation::scenario::build_simulation;

pub use configuration::config::{ForceLaw, SplitPolicy, FragmentVelocity, BoundaryMode, EngineConfig, ParametersConfig, PopulationConfig, ParticleConfig, ScenarioConfig};

pub use error::{Error, Result};

pub use benchmark::benchmark::{bench_forces, bench_step_curve};
