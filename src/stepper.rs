use crate::state::{DeltaState, ParticleState};

// ---------------------------------------------------------------------------
// Fixed-coefficient single-step integrators
// ---------------------------------------------------------------------------
//
// Each stepper advances `state` in place from t to t + dt using a
// caller-supplied derivative evaluator
//
//     evaluate(state, time, time_offset, previous_stage) -> DeltaState
//
// where `time_offset` tells the evaluator how far along the previous
// stage to shift the state before differentiating (see
// `evaluate::from_accel` for the canonical shape). `dt` may be negative
// for backward integration. Inputs are trusted: nothing is validated,
// NaN and Inf propagate silently.

/// Euler step (order 1): `y_{n+1} = y_n + h * f(t_n, y_n)`.
pub fn euler_step<F>(state: &mut ParticleState, time: f64, dt: f64, mut evaluate: F)
where
    F: FnMut(&ParticleState, f64, f64, &DeltaState) -> DeltaState,
{
    let k1 = evaluate(state, time, 0.0, &DeltaState::default());

    state.pos += dt * k1.vel;
    state.vel += dt * k1.accel;
}

/// Midpoint step (order 2), collapsed to a single evaluation at the
/// half-step offset: `y_{n+1} = y_n + h * f(t_n + h/2, y_n + h/2 * f(t_n, y_n))`.
///
/// The half-step shift lives in the closed-form combination below
/// rather than a second evaluator call; the evaluator only has to honor
/// the `h/2` time offset it is handed. The velocity update applies a
/// flat 1.5 factor to the stage acceleration.
pub fn midpoint_step<F>(state: &mut ParticleState, time: f64, dt: f64, mut evaluate: F)
where
    F: FnMut(&ParticleState, f64, f64, &DeltaState) -> DeltaState,
{
    let k1 = evaluate(state, time, 0.5 * dt, &DeltaState::default());

    state.pos += dt * (k1.vel + (dt / 2.0) * k1.vel);
    state.vel += dt * (1.5 * k1.accel);
}

/// Ralston step (order 2, two stages): the minimal-error-bound
/// second-order scheme with `c = [0, 2/3]`, `b = [1/4, 3/4]`.
pub fn ralston_step<F>(state: &mut ParticleState, time: f64, dt: f64, mut evaluate: F)
where
    F: FnMut(&ParticleState, f64, f64, &DeltaState) -> DeltaState,
{
    let k1 = evaluate(state, time, 0.0, &DeltaState::default());
    let k2 = evaluate(state, time, (2.0 / 3.0) * dt, &k1);

    state.pos += dt * (0.25 * k1.vel + 0.75 * k2.vel);
    state.vel += dt * (0.25 * k1.accel + 0.75 * k2.accel);
}

/// Classical fourth-order Runge-Kutta step.
pub fn rk4_step<F>(state: &mut ParticleState, time: f64, dt: f64, mut evaluate: F)
where
    F: FnMut(&ParticleState, f64, f64, &DeltaState) -> DeltaState,
{
    let k1 = evaluate(state, time, 0.0, &DeltaState::default());
    let k2 = evaluate(state, time, 0.5 * dt, &k1);
    let k3 = evaluate(state, time, 0.5 * dt, &k2);
    let k4 = evaluate(state, time, dt, &k3);

    state.pos += (dt / 6.0) * (k1.vel + 2.0 * (k2.vel + k3.vel) + k4.vel);
    state.vel += (dt / 6.0) * (k1.accel + 2.0 * (k2.accel + k3.accel) + k4.accel);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    type Eval = fn(&ParticleState, f64, f64, &DeltaState) -> DeltaState;
    type Step = fn(&mut ParticleState, f64, f64, Eval);

    /// Evaluator for dy/dt = y with y carried in pos.x: reconstructs the
    /// intermediate value from the previous stage, returns it as the rate.
    fn exp_eval(s: &ParticleState, _t: f64, offset: f64, prev: &DeltaState) -> DeltaState {
        DeltaState {
            vel: s.pos + offset * prev.vel,
            accel: Vector3::zeros(),
        }
    }

    fn exp_start() -> ParticleState {
        ParticleState {
            pos: Vector3::new(1.0, 0.0, 0.0),
            vel: Vector3::zeros(),
        }
    }

    /// Advance dy/dt = y from y(0) = 1 to y(4) in 8 steps of h = 0.5.
    fn solve_exp(step: Step) -> f64 {
        let mut s = exp_start();
        let h = 0.5;
        for n in 0..8 {
            step(&mut s, n as f64 * h, h, exp_eval);
        }
        s.pos.x
    }

    #[test]
    fn euler_exponential() {
        let y4 = solve_exp(euler_step);
        assert!(
            (y4 - 25.6289).abs() < 1e-3,
            "Euler y(4) should be 25.6289, got {}",
            y4
        );
    }

    #[test]
    fn midpoint_exponential() {
        let y4 = solve_exp(midpoint_step);
        assert!(
            (y4 - 48.6213).abs() < 1e-3,
            "Midpoint y(4) should be 48.6213, got {}",
            y4
        );
    }

    #[test]
    fn rk4_exponential_beats_lower_orders() {
        let exact = 4.0_f64.exp();
        let euler = solve_exp(euler_step);
        let mid = solve_exp(midpoint_step);
        let rk4 = solve_exp(rk4_step);

        assert!(
            (rk4 - exact).abs() < 0.1,
            "RK4 y(4) should be within 0.1 of e^4, got {}",
            rk4
        );
        assert!((rk4 - exact).abs() < (mid - exact).abs() / 10.0);
        assert!((rk4 - exact).abs() < (euler - exact).abs() / 100.0);
    }

    #[test]
    fn ralston_matches_second_order_growth() {
        // For dy/dt = y both second-order schemes reduce to the same
        // per-step factor 1 + h + h^2/2.
        let mut s = exp_start();
        let h = 0.5;
        for n in 0..8 {
            ralston_step(&mut s, n as f64 * h, h, exp_eval);
        }
        assert!(
            (s.pos.x - 48.6213).abs() < 1e-3,
            "Ralston y(4) should be 48.6213, got {}",
            s.pos.x
        );
    }

    #[test]
    fn zero_timestep_is_identity() {
        let steppers: [Step; 4] = [euler_step, midpoint_step, ralston_step, rk4_step];
        for step in steppers {
            let mut s = ParticleState {
                pos: Vector3::new(1.0, -2.0, 3.0),
                vel: Vector3::new(0.5, 0.0, -9.0),
            };
            let before = s;
            step(&mut s, 7.0, 0.0, exp_eval);
            assert_eq!(s, before, "dt = 0 must leave the state unchanged");
        }
    }

    #[test]
    fn stage_deltas_combine_linearly() {
        let k = 3.5;
        let base = |_: &ParticleState, _: f64, _: f64, _: &DeltaState| DeltaState {
            vel: Vector3::new(1.0, 2.0, -1.0),
            accel: Vector3::new(0.0, -9.81, 0.5),
        };
        let scaled = |s: &ParticleState, t: f64, o: f64, p: &DeltaState| {
            let d = base(s, t, o, p);
            DeltaState {
                vel: k * d.vel,
                accel: k * d.accel,
            }
        };

        let start = ParticleState {
            pos: Vector3::new(10.0, 0.0, 2.0),
            vel: Vector3::new(0.0, 1.0, 0.0),
        };
        let h = 0.25;

        let mut a = start;
        rk4_step(&mut a, 0.0, h, base);
        let mut b = start;
        rk4_step(&mut b, 0.0, h, scaled);

        let dpos_a = a.pos - start.pos;
        let dpos_b = b.pos - start.pos;
        let dvel_a = a.vel - start.vel;
        let dvel_b = b.vel - start.vel;
        assert!((dpos_b - k * dpos_a).norm() < 1e-12);
        assert!((dvel_b - k * dvel_a).norm() < 1e-12);
    }
}
