use crate::parser::ShuntingParser;
use crate::rpneval::EvalErr;
use lexers::{tokenize, LexError};
use log::trace;
use std::fmt;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum MathError {
    #[error("lexical error: {0}")]
    Lex(#[from] LexError),
    #[error("evaluation error: {0}")]
    Eval(#[from] EvalErr),
}

/// Tokenize, convert and evaluate `expr` with its variable bound to `x`.
/// Nothing is kept between calls.
pub fn evaluate(expr: &str, x: f64) -> Result<f64, MathError> {
    let tokens = tokenize(expr)?;
    trace!("tokens {:?}", tokens);
    let rpn = ShuntingParser::parse(tokens);
    trace!("rpn {:?}", rpn);
    let result = rpn.eval(x)?;
    trace!("f({}) = {}", x, result);
    Ok(result)
}

/// An `f(x)` expression owned by whoever evaluates it. Each `eval` goes
/// through the whole pipeline again, there's no compiled state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expression(String);

impl Expression {
    pub fn new(expr: impl Into<String>) -> Self {
        Expression(expr.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn eval(&self, x: f64) -> Result<f64, MathError> {
        evaluate(&self.0, x)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Expression {
    fn from(expr: &str) -> Self {
        Expression::new(expr)
    }
}
