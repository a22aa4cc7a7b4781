use crate::subscript::{label, LabelStyle};

/// Partial result `p_k` after folding in the coefficient of degree `k`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HornerStep {
    pub degree: usize,
    pub value: f64,
}

impl HornerStep {
    pub fn label(&self, style: LabelStyle) -> String {
        label("p", self.degree as i64, style)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HornerTrace {
    pub steps: Vec<HornerStep>,
}

impl HornerTrace {
    /// `p_0`, the value of the polynomial. No coefficients is the zero
    /// polynomial.
    pub fn result(&self) -> f64 {
        self.steps.last().map_or(0.0, |step| step.value)
    }
}

/// Evaluate `a_n x^n + ... + a_0` with `coeffs` given highest degree first,
/// keeping every intermediate `p_k`.
pub fn horner(coeffs: &[f64], x: f64) -> HornerTrace {
    let mut steps = Vec::with_capacity(coeffs.len());
    let mut acc = None;
    for (i, &a) in coeffs.iter().enumerate() {
        let value = match acc {
            None => a,
            Some(p) => p * x + a,
        };
        acc = Some(value);
        steps.push(HornerStep { degree: coeffs.len() - 1 - i, value });
    }
    HornerTrace { steps }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cubic() {
        // 2x^3 - 6x^2 + 2x - 1 at x = 3
        let trace = horner(&[2.0, -6.0, 2.0, -1.0], 3.0);
        let values = trace.steps.iter().map(|s| (s.degree, s.value)).collect::<Vec<_>>();
        assert_eq!(values, vec![(3, 2.0), (2, 0.0), (1, 2.0), (0, 5.0)]);
        assert_eq!(trace.result(), 5.0);
    }

    #[test]
    fn constant_and_empty() {
        assert_eq!(horner(&[4.5], 100.0).result(), 4.5);
        assert_eq!(horner(&[], 1.0).result(), 0.0);
        assert!(horner(&[], 1.0).steps.is_empty());
    }

    #[test]
    fn step_labels() {
        let trace = horner(&[1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0], 2.0);
        assert_eq!(trace.steps[0].label(LabelStyle::Unicode), "p₁₁");
        assert_eq!(trace.steps[11].label(LabelStyle::Ascii), "p0_");
        assert_eq!(trace.result(), 2048.0);
    }
}
