pub use lexers::{LexError, MathToken};

pub use parser::{precedence, Assoc, RPNExpr, ShuntingParser};

pub mod parser;

pub use self::rpneval::EvalErr;

mod rpnprint;
mod rpneval;
#[cfg(test)]
mod rpneval_test;

mod expression;
pub use expression::{evaluate, Expression, MathError};
