//! Bracketed root finding (Brent's method with bisection fallback).
//!
//! The objective is fallible so ephemeris errors pass straight through; the
//! caller's error type absorbs [`SolverError`] via `From`.

/// Root search failures.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SolverError {
    /// The objective has the same sign at both ends of the interval.
    #[error("No sign change in [{lower}, {upper}]")]
    NoSignChange {
        /// Lower end of the last interval tried.
        lower: f64,
        /// Upper end of the last interval tried.
        upper: f64,
    },
    /// The iteration budget ran out before the interval shrank to tolerance.
    #[error("Root search did not converge after {iterations} iterations")]
    NotConverged {
        /// Iterations spent.
        iterations: u32,
    },
}

/// Convergence settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootOptions {
    /// Absolute tolerance on the root.
    pub tolerance: f64,
    /// Maximum objective evaluations after the initial two.
    pub max_iterations: u32,
}

impl Default for RootOptions {
    fn default() -> Self {
        Self {
            tolerance: 1e-9,
            max_iterations: 100,
        }
    }
}

/// Find a root of `f` in `[lower, upper]`.
///
/// `f(lower)` and `f(upper)` must differ in sign (or one must be zero).
pub fn brent<F, E>(mut f: F, lower: f64, upper: f64, options: RootOptions) -> Result<f64, E>
where
    F: FnMut(f64) -> Result<f64, E>,
    E: From<SolverError>,
{
    let mut a = lower;
    let mut b = upper;
    let mut fa = f(a)?;
    let mut fb = f(b)?;

    if fa == 0.0 {
        return Ok(a);
    }
    if fb == 0.0 {
        return Ok(b);
    }
    if fa.signum() == fb.signum() {
        return Err(SolverError::NoSignChange { lower, upper }.into());
    }

    let mut c = b;
    let mut fc = fb;
    let mut d = b - a;
    let mut e = d;

    for _ in 0..options.max_iterations {
        if fb.signum() == fc.signum() {
            c = a;
            fc = fa;
            d = b - a;
            e = d;
        }
        if fc.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }

        let tol = 2.0 * f64::EPSILON * b.abs() + 0.5 * options.tolerance;
        let midpoint = 0.5 * (c - b);
        if midpoint.abs() <= tol || fb == 0.0 {
            return Ok(b);
        }

        if e.abs() >= tol && fa.abs() > fb.abs() {
            // Inverse quadratic interpolation, or secant when only two points differ.
            let s = fb / fa;
            let (mut p, mut q) = if a == c {
                (2.0 * midpoint * s, 1.0 - s)
            } else {
                let q = fa / fc;
                let r = fb / fc;
                (
                    s * (2.0 * midpoint * q * (q - r) - (b - a) * (r - 1.0)),
                    (q - 1.0) * (r - 1.0) * (s - 1.0),
                )
            };
            if p > 0.0 {
                q = -q;
            }
            p = p.abs();

            let bound = (3.0 * midpoint * q - (tol * q).abs()).min((e * q).abs());
            if 2.0 * p < bound {
                e = d;
                d = p / q;
            } else {
                d = midpoint;
                e = d;
            }
        } else {
            d = midpoint;
            e = d;
        }

        a = b;
        fa = fb;
        b += if d.abs() > tol { d } else { tol.copysign(midpoint) };
        fb = f(b)?;
    }

    tracing::error!(
        iterations = options.max_iterations,
        lower,
        upper,
        "root search did not converge"
    );
    Err(SolverError::NotConverged {
        iterations: options.max_iterations,
    }
    .into())
}
