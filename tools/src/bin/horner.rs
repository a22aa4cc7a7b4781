use numerica::subscript::{LabelStyle, label};
use toxtools::{args, logger, prompt::Prompter};

fn ask_polynomial(p: &mut Prompter, style: LabelStyle) -> anyhow::Result<(Vec<f64>, f64)> {
    let degree: usize = p.ask("Please enter polynomial degree: ")?;
    println!("\nEnter coefficients (highest degree first):\n");
    let mut coeffs = Vec::with_capacity(degree + 1);
    for i in (0..=degree).rev() {
        coeffs.push(p.ask(&format!("Enter {}: ", label("a", i as i64, style)))?);
    }
    let x = p.ask("\nEnter x value: ")?;
    Ok((coeffs, x))
}

fn main() -> anyhow::Result<()> {
    logger::init()?;
    let mut argv = std::env::args().skip(1).collect::<Vec<String>>();
    let style = match argv.first().map(String::as_str) {
        Some("--ascii") => {
            argv.remove(0);
            LabelStyle::Ascii
        }
        _ => LabelStyle::Unicode,
    };

    // horner [--ascii] X A_N .. A_0
    let (coeffs, x) = match argv.split_first() {
        None => ask_polynomial(&mut Prompter::new()?, style)?,
        Some((x, coeffs)) => (
            coeffs
                .iter()
                .map(|a| args::parse_number("coefficient", a))
                .collect::<anyhow::Result<Vec<_>>>()?,
            args::parse_number("x", x)?,
        ),
    };

    println!("\n--- Horner's Method Steps ---");
    let trace = numerica::horner(&coeffs, x);
    for step in trace.steps.iter() {
        println!("{}: {}", step.label(style), step.value);
    }
    println!("\nFinal Result = {}", trace.result());
    Ok(())
}
