// ---------------------------------------------------------------------------
// Butcher tableau: coefficients of an explicit Runge-Kutta method
// ---------------------------------------------------------------------------

/// Coefficient triple `(a, b, c)` defining an `S`-stage explicit
/// Runge-Kutta method.
///
/// `a` is the stage-coupling matrix — strictly lower triangular for an
/// explicit scheme, so stage `i` may only reference stages `0..i`.
/// `b` holds the combination weights (summing to 1), `c` the stage time
/// offsets as fractions of the step. None of this is validated at
/// runtime; a malformed tableau produces garbage results, not an error.
#[derive(Debug, Clone, Copy)]
pub struct ButcherTableau<const S: usize> {
    pub a: [[f64; S]; S],
    pub b: [f64; S],
    pub c: [f64; S],
}

impl<const S: usize> ButcherTableau<S> {
    /// Number of stages.
    pub const fn stages(&self) -> usize {
        S
    }
}

impl ButcherTableau<1> {
    /// Forward Euler (order 1).
    pub const EULER: Self = Self {
        a: [[0.]],
        b: [1.],
        c: [0.],
    };
}

impl ButcherTableau<2> {
    /// Textbook explicit midpoint method (order 2).
    pub const MIDPOINT: Self = Self {
        a: [[0., 0.], [0.5, 0.]],
        b: [0., 1.],
        c: [0., 0.5],
    };

    /// Ralston's minimal-error-bound second-order method.
    pub const RALSTON: Self = Self {
        a: [[0., 0.], [2. / 3., 0.]],
        b: [0.25, 0.75],
        c: [0., 2. / 3.],
    };
}

impl ButcherTableau<4> {
    /// Classical fourth-order Runge-Kutta.
    pub const RK4: Self = Self {
        a: [
            [0., 0., 0., 0.],
            [0.5, 0., 0., 0.],
            [0., 0.5, 0., 0.],
            [0., 0., 1., 0.],
        ],
        b: [1. / 6., 1. / 3., 1. / 3., 1. / 6.],
        c: [0., 0.5, 0.5, 1.],
    };
}
