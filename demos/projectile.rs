//! Ballistic flight under constant gravity, integrated with RK4 through
//! the acceleration-model adapters and checked against the closed form.

use nalgebra::Vector3;
use particle_integrators::evaluate::from_accel;
use particle_integrators::{rk4_step, ParticleState};

const G: Vector3<f64> = Vector3::new(0.0, 0.0, -9.81);

fn main() {
    println!("=== Projectile: 50 m/s at 53 deg, flat ground ===\n");

    let start = ParticleState {
        pos: Vector3::new(0.0, 0.0, 0.0),
        vel: Vector3::new(30.0, 0.0, 40.0),
    };

    let gravity = |_p: &Vector3<f64>, _v: &Vector3<f64>, _t: f64| G;

    let dt = 0.05;
    let mut s = start;
    let mut t = 0.0;
    let mut apex = 0.0_f64;

    while s.pos.z >= 0.0 {
        rk4_step(&mut s, t, dt, from_accel(gravity));
        t += dt;
        apex = apex.max(s.pos.z);
    }

    // Closed form: t_flight = 2 v_z / g, apex = v_z^2 / 2g, range = v_x t_flight
    let v = start.vel;
    let t_flight = 2.0 * v.z / 9.81;
    println!("Flight time: {:>7.2} s   (exact {:.2})", t, t_flight);
    println!("Apex:        {:>7.1} m   (exact {:.1})", apex, v.z * v.z / (2.0 * 9.81));
    println!("Range:       {:>7.1} m   (exact {:.1})", s.pos.x, v.x * t_flight);
    println!();
    println!("Note: RK4 is exact for constant acceleration; the residual");
    println!("error above comes from landing between timesteps.");
}
