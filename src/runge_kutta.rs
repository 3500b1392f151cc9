use nalgebra::Vector3;

use crate::state::{DeltaState, ParticleState};
use crate::tableau::ButcherTableau;

// ---------------------------------------------------------------------------
// Generic explicit Runge-Kutta stepper
// ---------------------------------------------------------------------------

/// Advance `state` in place by one step of the `S`-stage explicit
/// Runge-Kutta method described by `tableau`.
///
/// Stages are computed in increasing order, so the evaluator for stage
/// `i` sees `ks[0..i]` already filled (later entries still hold the
/// additive identity). The evaluator is trusted to read
/// `tableau.a[i][..i]` and those earlier deltas to build its own
/// intermediate state:
///
/// ```text
/// evaluate(state, time, dt, ks, tableau, i) -> DeltaState
/// ```
///
/// `evaluate::from_accel_tableau` builds the canonical such closure
/// from a plain acceleration model. The stage deltas are then combined
/// with the `b` weights in a plain left-to-right sum and applied as
/// `pos += dt * sum(b[i] * ks[i].vel)`, same for `vel` with `accel`.
///
/// Supplying the [`ButcherTableau::RALSTON`] or [`ButcherTableau::RK4`]
/// coefficients reproduces the dedicated steppers up to floating-point
/// rounding.
pub fn explicit_rk_step<const S: usize, F>(
    state: &mut ParticleState,
    time: f64,
    dt: f64,
    tableau: &ButcherTableau<S>,
    mut evaluate: F,
) where
    F: FnMut(&ParticleState, f64, f64, &[DeltaState], &ButcherTableau<S>, usize) -> DeltaState,
{
    let mut ks = [DeltaState::default(); S];
    for i in 0..S {
        ks[i] = evaluate(state, time, dt, &ks, tableau, i);
    }

    let mut dpos = Vector3::zeros();
    let mut dvel = Vector3::zeros();
    for i in 0..S {
        dpos += tableau.b[i] * ks[i].vel;
        dvel += tableau.b[i] * ks[i].accel;
    }

    state.pos += dt * dpos;
    state.vel += dt * dvel;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
