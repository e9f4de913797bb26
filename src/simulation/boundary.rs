//! Rectangular field edges
//!
//! A particle past an edge has the matching velocity component flipped and
//! damped. Its position is left alone unless clamping was asked for, so a
//! fast particle can sit outside the field for a tick or two before the
//! reflected velocity carries it back in.

use crate::configuration::config::BoundaryMode;
use crate::simulation::params::Parameters;
use crate::simulation::states::Particle;

#[derive(Debug, Clone, Copy)]
pub struct BoundaryReflector {
    pub width: f64,
    pub height: f64,
    pub damping: f64,
    pub mode: BoundaryMode,
}

impl BoundaryReflector {
    pub fn new(params: &Parameters, mode: BoundaryMode) -> Self {
        Self {
            width: params.width,
            height: params.height,
            damping: params.bounce_damping,
            mode,
        }
    }

    /// Apply the edges to one particle; returns true if any axis bounced
    pub fn reflect(&self, p: &mut Particle) -> bool {
        if self.mode == BoundaryMode::Open {
            return false;
        }

        let mut bounced = false;
        if p.x.x < 0.0 || p.x.x > self.width {
            p.v.x *= -self.damping;
            bounced = true;
        }
        if p.x.y < 0.0 || p.x.y > self.height {
            p.v.y *= -self.damping;
            bounced = true;
        }

        if bounced && self.mode == BoundaryMode::ReflectAndClamp {
            p.x.x = p.x.x.clamp(0.0, self.width);
            p.x.y = p.x.y.clamp(0.0, self.height);
        }
        bounced
    }
}
