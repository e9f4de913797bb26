pub mod math;
pub mod states;
pub mod params;
pub mod engine;
pub mod forces;
pub mod integrator;
pub mod boundary;
pub mod collisions;
pub mod splitter;
pub mod sim;
pub mod scenario;
