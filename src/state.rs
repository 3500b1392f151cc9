use nalgebra::Vector3;

// ---------------------------------------------------------------------------
// Particle kinematic state
// ---------------------------------------------------------------------------

/// Kinematic state of a single particle at one point in time.
///
/// Owned by the caller; every stepper advances it in place by one
/// timestep. The integrators never allocate or retain one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleState {
    pub pos: Vector3<f64>,    // m
    pub vel: Vector3<f64>,    // m/s
}

// ---------------------------------------------------------------------------
// Stage derivative
// ---------------------------------------------------------------------------

/// One stage evaluation of the derivative function: the instantaneous
/// rate of change of a [`ParticleState`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeltaState {
    pub vel: Vector3<f64>,    // dpos/dt
    pub accel: Vector3<f64>,  // dvel/dt
}

impl Default for DeltaState {
    /// Additive identity. Multi-stage methods pass this as the
    /// "no previous stage" placeholder for their first stage.
    fn default() -> Self {
        Self {
            vel: Vector3::zeros(),
            accel: Vector3::zeros(),
        }
    }
}
