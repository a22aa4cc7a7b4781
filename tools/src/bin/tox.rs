mod repl {
    use log::debug;
    use shunting::{Expression, ShuntingParser};

    pub fn evalexpr(input: &str, x: f64) {
        match ShuntingParser::parse_str(input) {
            Err(e) => println!("Parse error: {}", e),
            Ok(rpn) => match rpn.eval(x) {
                Err(e) => println!("Eval error: {}", e),
                Ok(result) => println!("f({}) = {} = {}", x, rpn, result),
            },
        };
    }

    // 'x = <expr>' moves the evaluation point, anything else is f(x)
    pub fn parse_statement(x: &mut f64, input: &str) {
        if let Some((var, rhs)) = input.split_once('=') {
            let var = var.trim();
            if !var.is_empty() && var.chars().all(|c| c.is_ascii_alphabetic()) {
                match Expression::new(rhs).eval(*x) {
                    Err(e) => println!("Error: {}", e),
                    Ok(value) => {
                        debug!("{} = {}", var, value);
                        *x = value;
                    }
                }
                return;
            }
        }
        match Expression::new(input).eval(*x) {
            Err(e) => println!("Error: {}", e),
            Ok(result) => println!("{}", result),
        };
    }
}

fn main() -> anyhow::Result<()> {
    toxtools::logger::init()?;
    let argv = std::env::args().skip(1).collect::<Vec<String>>();
    if let [expr, x] = argv.as_slice() {
        repl::evalexpr(expr, toxtools::args::parse_number("x", x)?);
        return Ok(());
    } else if !argv.is_empty() {
        anyhow::bail!("usage: tox [EXPR X]");
    }

    let mut p = toxtools::prompt::Prompter::new()?;
    let histpath = dirs::home_dir().map(|h| h.join(".tox_history"));
    if let Some(path) = &histpath {
        if p.editor().load_history(path).is_err() {
            println!("No history yet");
        }
    }
    let mut x = 0.0;
    while let Some(input) = p.line(&format!("[x={}] >> ", x))? {
        if input.trim().is_empty() {
            continue;
        }
        repl::parse_statement(&mut x, &input);
    }
    if let Some(path) = &histpath {
        if let Err(e) = p.editor().save_history(path) {
            println!("Can't save history: {}", e);
        }
    }
    Ok(())
}
