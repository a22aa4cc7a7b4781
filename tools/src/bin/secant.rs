use anyhow::{Context, bail};
use numerica::{SecantConfig, SecantError, StopCriterion, table};
use shunting::{Expression, ShuntingParser};
use toxtools::{args, logger, prompt::Prompter};

fn ask_config(p: &mut Prompter) -> anyhow::Result<(Expression, SecantConfig)> {
    println!("Enter your function f(x):");
    println!("Supported: +, -, *, /, ^, sin(), cos(), and variable 'x'");
    println!("Example: x^2 + 3*x - 5  or  sin(x) - x/2");
    let expr = p.line("\nf(x) = ")?.context("input closed")?;
    let x1 = p.ask("Enter initial estimate x1: ")?;
    let x2 = p.ask("Enter initial estimate x2: ")?;

    println!("\nChoose the stopping criterion:");
    println!("1. Use a specific number of iterations (N).");
    println!("2. Use an error tolerance (EPS).");
    let stop = match p.ask::<u32>("Enter choice (1 or 2): ")? {
        1 => StopCriterion::Iterations(p.ask("Enter the maximum number of iterations (N): ")?),
        2 => StopCriterion::Tolerance(p.ask("Enter the error tolerance (EPS): ")?),
        other => bail!("invalid choice {}", other),
    };
    Ok((Expression::new(expr.trim()), SecantConfig { x1, x2, stop }))
}

fn config_from_args(argv: &[String]) -> anyhow::Result<(Expression, SecantConfig)> {
    let [expr, x1, x2, stop] = argv else {
        bail!("usage: secant [EXPR X1 X2 iters=N|eps=E]");
    };
    let config = SecantConfig {
        x1: args::parse_number("x1", x1)?,
        x2: args::parse_number("x2", x2)?,
        stop: args::parse_stop(stop)?,
    };
    Ok((Expression::new(expr.as_str()), config))
}

fn main() -> anyhow::Result<()> {
    logger::init()?;
    println!("### Secant Method Solver ###");

    let argv = std::env::args().skip(1).collect::<Vec<String>>();
    let (expr, config) = if argv.is_empty() {
        ask_config(&mut Prompter::new()?)?
    } else {
        config_from_args(&argv)?
    };

    let parsed = ShuntingParser::parse_str(expr.as_str())
        .with_context(|| format!("invalid function {:?}", expr.as_str()))?;
    println!("\nYour function is: f(x) = {}", expr);
    println!("Read as: f(x) = {}", parsed);
    println!("---");

    println!("\n--- Iteration Table ---");
    match numerica::secant(|x| expr.eval(x), &config) {
        Ok(report) => {
            println!("{}", table::iteration_table(&report.rows));
            println!("\n{}", table::summary(&report, &config.stop));
            Ok(())
        }
        Err(e @ (SecantError::Stalled { .. } | SecantError::NonFinite { .. })) => {
            println!("{}", table::iteration_table(e.rows()));
            println!("\n--- Secant Method Failed ---");
            println!("{}.", e);
            std::process::exit(1);
        }
        Err(SecantError::NoIterations) => {
            println!("\nThe convergence not achieved or no iterations were performed.");
            Ok(())
        }
        Err(e @ SecantError::Eval(_)) => Err(e).context("evaluating f(x)"),
    }
}
