use lexers::{tokenize, LexError, MathToken};

#[derive(PartialEq, Debug)]
pub enum Assoc {
    Left,
    Right,
    None,
}

pub fn precedence(mt: &MathToken) -> (usize, Assoc) {
    // Functions sit at the bottom of operator comparisons, they only leave
    // the stack once their argument group closes (or on the final drain).
    match *mt {
        MathToken::Op(ref o) if o == "+" => (1, Assoc::Left),
        MathToken::Op(ref o) if o == "-" => (1, Assoc::Left),
        MathToken::Op(ref o) if o == "*" => (2, Assoc::Left),
        MathToken::Op(ref o) if o == "/" => (2, Assoc::Left),
        MathToken::Op(ref o) if o == "^" => (3, Assoc::Right),
        MathToken::Function(_) => (0, Assoc::Left),
        _ => (99, Assoc::None),
    }
}

/// A postfix token sequence as produced by [`ShuntingParser`].
#[derive(PartialEq, Debug, Clone)]
pub struct RPNExpr(pub Vec<MathToken>);

impl std::ops::Deref for RPNExpr {
    type Target = [MathToken];
    fn deref(&self) -> &[MathToken] {
        &self.0
    }
}

pub struct ShuntingParser;

impl ShuntingParser {
    pub fn parse_str(expr: &str) -> Result<RPNExpr, LexError> {
        Ok(Self::parse(tokenize(expr)?))
    }

    /// Infix to postfix. Never fails: a ')' without its '(' drains the
    /// stack and is dropped, an unclosed '(' vanishes at the end.
    pub fn parse(tokens: impl IntoIterator<Item = MathToken>) -> RPNExpr {
        let mut out = Vec::new();
        let mut stack = Vec::new();

        for token in tokens {
            match token {
                MathToken::Number(_) => out.push(token),
                MathToken::Variable(_) => out.push(token),
                MathToken::Function(_) => stack.push(token),
                MathToken::OParen => stack.push(token),
                MathToken::CParen => {
                    while let Some(top) = stack.pop() {
                        if top == MathToken::OParen {
                            break;
                        }
                        out.push(top);
                    }
                    // end of grouping: check if this is a function call
                    if let Some(MathToken::Function(_)) = stack.last() {
                        out.extend(stack.pop());
                    }
                }
                MathToken::Op(_) => {
                    let (prec_rhs, assoc_rhs) = precedence(&token);
                    while let Some(top) = stack.last() {
                        if !matches!(top, MathToken::Op(_) | MathToken::Function(_)) {
                            break;
                        }
                        let (prec_lhs, _) = precedence(top);
                        if prec_lhs > prec_rhs || (prec_lhs == prec_rhs && assoc_rhs == Assoc::Left) {
                            out.extend(stack.pop());
                        } else {
                            break;
                        }
                    }
                    stack.push(token);
                }
            }
        }
        while let Some(top) = stack.pop() {
            match top {
                MathToken::OParen => (),
                token => out.push(token),
            }
        }
        RPNExpr(out)
    }
}
