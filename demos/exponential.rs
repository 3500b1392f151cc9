//! The classic dy/dt = y accuracy comparison: integrate y(0) = 1 to
//! t = 4 with h = 0.5 and compare each method against e^4.

use nalgebra::Vector3;
use particle_integrators::{
    euler_step, explicit_rk_step, midpoint_step, ralston_step, rk4_step, ButcherTableau,
    DeltaState, ParticleState,
};

fn exp_eval(s: &ParticleState, _t: f64, offset: f64, prev: &DeltaState) -> DeltaState {
    DeltaState {
        vel: s.pos + offset * prev.vel,
        accel: Vector3::zeros(),
    }
}

fn solve(name: &str, step: fn(&mut ParticleState, f64, f64, fn(&ParticleState, f64, f64, &DeltaState) -> DeltaState)) {
    let mut s = ParticleState {
        pos: Vector3::new(1.0, 0.0, 0.0),
        vel: Vector3::zeros(),
    };
    let h = 0.5;
    for n in 0..8 {
        step(&mut s, n as f64 * h, h, exp_eval);
    }
    let exact = 4.0_f64.exp();
    println!(
        "{:<10} y(4) = {:>9.4}   error = {:>8.4}",
        name,
        s.pos.x,
        (s.pos.x - exact).abs()
    );
}

fn main() {
    println!("=== dy/dt = y, y(0) = 1, h = 0.5, exact y(4) = {:.5} ===\n", 4.0_f64.exp());

    solve("Euler", euler_step);
    solve("Midpoint", midpoint_step);
    solve("Ralston", ralston_step);
    solve("RK4", rk4_step);

    // Same problem through the tableau-driven stepper
    let mut s = ParticleState {
        pos: Vector3::new(1.0, 0.0, 0.0),
        vel: Vector3::zeros(),
    };
    let h = 0.5;
    for n in 0..8 {
        explicit_rk_step(
            &mut s,
            n as f64 * h,
            h,
            &ButcherTableau::RK4,
            |s: &ParticleState, _t, dt, ks: &[DeltaState], tb: &ButcherTableau<4>, i| {
                let mut y = s.pos;
                for j in 0..i {
                    y += dt * tb.a[i][j] * ks[j].vel;
                }
                DeltaState {
                    vel: y,
                    accel: Vector3::zeros(),
                }
            },
        );
    }
    let exact = 4.0_f64.exp();
    println!(
        "{:<10} y(4) = {:>9.4}   error = {:>8.4}",
        "RK4 (tab)",
        s.pos.x,
        (s.pos.x - exact).abs()
    );
}
