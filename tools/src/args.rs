use anyhow::{Context, anyhow, bail};
use numerica::StopCriterion;

pub fn parse_number(what: &str, value: &str) -> anyhow::Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .with_context(|| format!("{} must be a number, got {:?}", what, value))
}

/// `iters=N` runs N iterations, `eps=E` runs until the error is at most E.
pub fn parse_stop(value: &str) -> anyhow::Result<StopCriterion> {
    let (kind, amount) = value
        .split_once('=')
        .ok_or_else(|| anyhow!("stop criterion must be iters=N or eps=E, got {:?}", value))?;
    match kind.trim() {
        "iters" | "n" => {
            let n = amount
                .trim()
                .parse::<usize>()
                .with_context(|| format!("bad iteration count {:?}", amount))?;
            Ok(StopCriterion::Iterations(n))
        }
        "eps" => Ok(StopCriterion::Tolerance(parse_number("eps", amount)?)),
        other => bail!("unknown stop criterion {:?}, use iters=N or eps=E", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_criteria() {
        assert_eq!(parse_stop("iters=10").unwrap(), StopCriterion::Iterations(10));
        assert_eq!(parse_stop("n=3").unwrap(), StopCriterion::Iterations(3));
        assert_eq!(parse_stop("eps=1e-6").unwrap(), StopCriterion::Tolerance(1.0e-6));
        assert_eq!(parse_stop(" eps = 0.5 ").unwrap(), StopCriterion::Tolerance(0.5));
        assert!(parse_stop("iters=-1").is_err());
        assert!(parse_stop("10").is_err());
        assert!(parse_stop("tol=1").is_err());
    }

    #[test]
    fn numbers() {
        assert_eq!(parse_number("x1", " 2.5").unwrap(), 2.5);
        let err = parse_number("x1", "two").unwrap_err();
        assert_eq!(err.to_string(), "x1 must be a number, got \"two\"");
    }
}
