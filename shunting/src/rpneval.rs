use crate::parser::RPNExpr;
use lexers::MathToken;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum EvalErr {
    #[error("operator or function is missing operands")]
    StackUnderflow,
    #[error("expression left {0} values, expected exactly 1")]
    ResultArity(usize),
    #[error("bad number literal {0:?}")]
    BadNumber(String),
    #[error("unknown function {0:?}")]
    UnknownFunction(String),
    #[error("unknown operator {0:?}")]
    BadOperator(String),
    #[error("unexpected token {0:?} in postfix expression")]
    BadToken(String),
}

impl RPNExpr {
    /// Run the postfix sequence on a value stack. Every variable, whatever
    /// its name, is bound to `x`.
    pub fn eval(&self, x: f64) -> Result<f64, EvalErr> {
        let mut operands = Vec::new();

        for token in self.0.iter() {
            match *token {
                MathToken::Number(ref num) => match Self::parse_number(num) {
                    Some(value) => operands.push(value),
                    None => return Err(EvalErr::BadNumber(num.clone())),
                },
                MathToken::Variable(_) => operands.push(x),
                MathToken::Op(ref op) => {
                    let r = operands.pop().ok_or(EvalErr::StackUnderflow)?;
                    let l = operands.pop().ok_or(EvalErr::StackUnderflow)?;
                    match &op[..] {
                        "+" => operands.push(l + r),
                        "-" => operands.push(l - r),
                        "*" => operands.push(l * r),
                        "/" => operands.push(l / r),
                        "^" => operands.push(l.powf(r)),
                        _ => return Err(EvalErr::BadOperator(op.clone())),
                    }
                }
                MathToken::Function(ref fname) => {
                    let arg = operands.pop().ok_or(EvalErr::StackUnderflow)?;
                    operands.push(Self::eval_fn(fname, arg)?);
                }
                MathToken::OParen | MathToken::CParen => {
                    return Err(EvalErr::BadToken(token.text().to_string()))
                }
            }
        }
        match operands[..] {
            [result] => Ok(result),
            _ => Err(EvalErr::ResultArity(operands.len())),
        }
    }

    // Longest prefix of the literal that reads as a number, so '1.2.3' is 1.2
    // and '3.' is 3. Only a run without digits ('.') is rejected.
    fn parse_number(num: &str) -> Option<f64> {
        num.char_indices()
            .map(|(i, c)| i + c.len_utf8())
            .rev()
            .find_map(|end| num[..end].parse::<f64>().ok())
    }

    fn eval_fn(fname: &str, arg: f64) -> Result<f64, EvalErr> {
        match fname {
            "sin" => Ok(arg.sin()),
            "cos" => Ok(arg.cos()),
            _ => Err(EvalErr::UnknownFunction(fname.to_string())),
        }
    }
}
