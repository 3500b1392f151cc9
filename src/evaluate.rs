use nalgebra::Vector3;

use crate::state::{DeltaState, ParticleState};
use crate::tableau::ButcherTableau;

// ---------------------------------------------------------------------------
// Evaluator adapters: acceleration model -> derivative evaluator
// ---------------------------------------------------------------------------
//
// The steppers never reconstruct intermediate states themselves; that
// contract belongs to the evaluator. These adapters build the canonical
// evaluators for second-order particle motion from a plain acceleration
// model `accel(pos, vel, t) -> Vector3`, so a host only has to describe
// its forces.

/// Fixed-stage evaluator for [`euler_step`](crate::stepper::euler_step)
/// and friends.
///
/// Shifts the state `offset` seconds along the previous stage before
/// differentiating: `pos + offset * prev.vel`, `vel + offset * prev.accel`,
/// evaluated at `time + offset`.
pub fn from_accel<A>(accel: A) -> impl FnMut(&ParticleState, f64, f64, &DeltaState) -> DeltaState
where
    A: Fn(&Vector3<f64>, &Vector3<f64>, f64) -> Vector3<f64>,
{
    move |state, time, offset, prev| {
        let pos = state.pos + offset * prev.vel;
        let vel = state.vel + offset * prev.accel;
        DeltaState {
            vel,
            accel: accel(&pos, &vel, time + offset),
        }
    }
}

/// Generic-form evaluator for
/// [`explicit_rk_step`](crate::runge_kutta::explicit_rk_step).
///
/// Builds the stage-`i` intermediate state from the tableau coupling
/// row and all earlier stage deltas:
/// `pos + dt * sum(a[i][j] * ks[j].vel)` for `j < i`, evaluated at
/// `time + c[i] * dt`.
pub fn from_accel_tableau<const S: usize, A>(
    accel: A,
) -> impl FnMut(&ParticleState, f64, f64, &[DeltaState], &ButcherTableau<S>, usize) -> DeltaState
where
    A: Fn(&Vector3<f64>, &Vector3<f64>, f64) -> Vector3<f64>,
{
    move |state, time, dt, ks, tableau, i| {
        let mut pos = state.pos;
        let mut vel = state.vel;
        for j in 0..i {
            pos += dt * tableau.a[i][j] * ks[j].vel;
            vel += dt * tableau.a[i][j] * ks[j].accel;
        }
        DeltaState {
            vel,
            accel: accel(&pos, &vel, time + tableau.c[i] * dt),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
