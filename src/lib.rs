//! Explicit single-step integrators for particle motion.
//!
//! Given a [`ParticleState`], a caller-supplied derivative evaluator,
//! and a timestep, each stepper advances the state in place by one
//! step: [`euler_step`], [`midpoint_step`], [`ralston_step`],
//! [`rk4_step`], plus [`explicit_rk_step`] driven by an arbitrary
//! [`ButcherTableau`]. The [`evaluate`] adapters build the evaluator
//! closures from a plain acceleration model.
//!
//! Everything is synchronous and stateless; inputs are trusted and
//! never validated (NaN in, NaN out). Adaptive step control and
//! implicit methods are out of scope.

pub mod evaluate;
pub mod runge_kutta;
pub mod state;
pub mod stepper;
pub mod tableau;

pub use runge_kutta::explicit_rk_step;
pub use state::{DeltaState, ParticleState};
pub use stepper::{euler_step, midpoint_step, ralston_step, rk4_step};
pub use tableau::ButcherTableau;
