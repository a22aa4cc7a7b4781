use log::{debug, warn};
use shunting::MathError;

/// Safety cap on iterations when stopping by tolerance.
pub const TOLERANCE_ITERATION_LIMIT: usize = 100;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StopCriterion {
    /// Run exactly this many iterations.
    Iterations(usize),
    /// Run until the relative approximate error is at most this value.
    Tolerance(f64),
}

impl StopCriterion {
    fn keep_going(&self, iteration: usize, error: f64) -> bool {
        match *self {
            StopCriterion::Iterations(n) => iteration < n,
            StopCriterion::Tolerance(eps) => error > eps && iteration < TOLERANCE_ITERATION_LIMIT,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SecantConfig {
    pub x1: f64,
    pub x2: f64,
    pub stop: StopCriterion,
}

/// One row of the iteration table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Iteration {
    pub n: usize,
    pub x1: f64,
    pub fx1: f64,
    pub x2: f64,
    pub fx2: f64,
    pub x3: f64,
    pub fx3: f64,
    pub error: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SecantReport {
    pub rows: Vec<Iteration>,
    pub root: f64,
    pub error: f64,
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SecantError {
    #[error(transparent)]
    Eval(#[from] MathError),
    #[error("cannot continue due to f(x2) == f(x1) in iteration {iteration}")]
    Stalled { iteration: usize, rows: Vec<Iteration> },
    #[error("cannot continue in iteration {iteration}, next estimate x3 = {x3} is not finite")]
    NonFinite { iteration: usize, x3: f64, rows: Vec<Iteration> },
    #[error("convergence not achieved or no iterations were performed")]
    NoIterations,
}

impl SecantError {
    /// Rows completed before the method gave up.
    pub fn rows(&self) -> &[Iteration] {
        match self {
            SecantError::Stalled { rows, .. } | SecantError::NonFinite { rows, .. } => rows,
            _ => &[],
        }
    }
}

/// Next estimate `x2 - f(x2)(x2 - x1) / (f(x2) - f(x1))`, NaN when the
/// secant is flat.
pub fn secant_step(x1: f64, fx1: f64, x2: f64, fx2: f64) -> f64 {
    if fx2 == fx1 {
        return f64::NAN;
    }
    x2 - (fx2 * (x2 - x1)) / (fx2 - fx1)
}

pub fn secant(
    f: impl Fn(f64) -> Result<f64, MathError>,
    config: &SecantConfig,
) -> Result<SecantReport, SecantError> {
    let (mut x1, mut x2) = (config.x1, config.x2);
    let mut error = f64::MAX;
    let mut rows: Vec<Iteration> = Vec::new();

    while config.stop.keep_going(rows.len(), error) {
        let n = rows.len();
        let (fx1, fx2) = (f(x1)?, f(x2)?);
        let x3 = secant_step(x1, fx1, x2, fx2);
        if fx1 == fx2 {
            warn!("secant stalled at iteration {}: f({})=f({})={}", n, x1, x2, fx2);
            return Err(SecantError::Stalled { iteration: n, rows });
        }
        if !x3.is_finite() {
            warn!("secant diverged at iteration {}: f({})={}, f({})={}, x3={}", n, x1, fx1, x2, fx2, x3);
            return Err(SecantError::NonFinite { iteration: n, x3, rows });
        }
        let fx3 = f(x3)?;
        error = ((x3 - x2) / x3).abs();
        debug!("iteration {}: x3={} f(x3)={} error={}", n, x3, fx3, error);
        rows.push(Iteration { n, x1, fx1, x2, fx2, x3, fx3, error });
        (x1, x2) = (x2, x3);
    }

    match rows.last() {
        Some(last) => Ok(SecantReport { root: last.x3, error, rows }),
        None => Err(SecantError::NoIterations),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerance_is_capped() {
        let stop = StopCriterion::Tolerance(1.0e-3);
        assert!(stop.keep_going(0, f64::MAX));
        assert!(stop.keep_going(99, 1.0));
        assert!(!stop.keep_going(100, 1.0));
        assert!(!stop.keep_going(5, 1.0e-4));
        assert!(!stop.keep_going(5, f64::NAN));
    }

    #[test]
    fn iterations_ignore_error() {
        let stop = StopCriterion::Iterations(3);
        assert!(stop.keep_going(2, 0.0));
        assert!(!stop.keep_going(3, f64::MAX));
        assert!(!StopCriterion::Iterations(0).keep_going(0, f64::MAX));
    }

    #[test]
    fn flat_secant() {
        assert!(secant_step(0.0, 1.0, 1.0, 1.0).is_nan());
        assert_eq!(secant_step(0.0, -1.0, 2.0, 1.0), 1.0);
    }
}
