use crate::secant::{Iteration, SecantReport, StopCriterion};

const W_ITER: usize = 3;
const W_VAL: usize = 10;
const W_ERR: usize = 12;

// chars in every table line
const WIDTH: usize = 1 + W_ITER + 6 * (W_VAL + 2) + W_ERR + 4;

fn separator() -> String {
    let mut line = format!("|{}", "-".repeat(W_ITER + 1));
    for _ in 0..6 {
        line.push_str(&format!("+{}", "-".repeat(W_VAL + 1)));
    }
    line.push_str(&format!("+{}|", "-".repeat(W_ERR + 1)));
    line
}

pub fn header() -> String {
    let mut line = format!("|{:>w$}", "N", w = W_ITER);
    for name in ["X1", "F(X1)", "X2", "F(X2)", "X3", "F(X3)"] {
        line.push_str(&format!(" |{:>w$}", name, w = W_VAL));
    }
    line.push_str(&format!(" |{:>w$} |", "|(X3-X2)/X3|", w = W_ERR));
    format!("{}\n{}", line, separator())
}

pub fn row(it: &Iteration) -> String {
    let mut line = format!("|{:>w$}", it.n, w = W_ITER);
    for value in [it.x1, it.fx1, it.x2, it.fx2, it.x3, it.fx3] {
        line.push_str(&format!(" |{:>w$.6}", value, w = W_VAL));
    }
    line.push_str(&format!(" |{:>w$.6} |", it.error, w = W_ERR));
    line
}

/// Header, one line per iteration and a closing rule.
pub fn iteration_table(rows: &[Iteration]) -> String {
    let mut table = header();
    for it in rows {
        table.push('\n');
        table.push_str(&row(it));
    }
    table.push('\n');
    table.push_str(&"-".repeat(WIDTH));
    table
}

pub fn summary(report: &SecantReport, stop: &StopCriterion) -> String {
    let mut text = format!(
        "The Root found after {} iterations.\nThe approximate root is: {:.6}\n",
        report.rows.len(),
        report.root
    );
    match stop {
        StopCriterion::Tolerance(eps) => text.push_str(&format!(
            "Final relative approximate error is: {:.6} (Target EPS: {:.6}).",
            report.error, eps
        )),
        StopCriterion::Iterations(_) => text.push_str(&format!(
            "Final relative approximate error is: {:.6}.",
            report.error
        )),
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Iteration {
        Iteration {
            n: 0,
            x1: 0.0,
            fx1: -10.0,
            x2: 1.0,
            fx2: -13.0,
            x3: -10.0 / 3.0,
            fx3: 130.0 / 9.0,
            error: 1.3,
        }
    }

    #[test]
    fn columns_line_up() {
        let head = header();
        let mut lines = head.lines();
        let titles = lines.next().unwrap();
        let rule = lines.next().unwrap();
        let data = row(&sample());
        assert_eq!(titles.chars().count(), rule.chars().count());
        assert_eq!(titles.chars().count(), data.chars().count());
        assert_eq!(data.len(), WIDTH);
    }

    #[test]
    fn row_values() {
        assert_eq!(
            row(&sample()),
            "|  0 |  0.000000 |-10.000000 |  1.000000 |-13.000000 | -3.333333 | 14.444444 |    1.300000 |"
        );
    }

    #[test]
    fn table_and_summary() {
        let report = SecantReport { rows: vec![sample()], root: sample().x3, error: 1.3 };
        let table = iteration_table(&report.rows);
        assert_eq!(table.lines().count(), 4);
        assert_eq!(table.lines().last().unwrap(), "-".repeat(WIDTH));
        assert_eq!(
            summary(&report, &StopCriterion::Iterations(1)),
            "The Root found after 1 iterations.\nThe approximate root is: -3.333333\n\
             Final relative approximate error is: 1.300000."
        );
        assert!(summary(&report, &StopCriterion::Tolerance(0.5)).ends_with("(Target EPS: 0.500000)."));
    }
}
