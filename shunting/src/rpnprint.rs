use crate::parser::{precedence, Assoc, RPNExpr};
use lexers::MathToken;
use std::fmt;

#[derive(Debug, Clone)]
enum AST<'a> {
    Leaf(&'a MathToken),
    Node(&'a MathToken, Vec<AST<'a>>),
}

impl RPNExpr {
    // None if the sequence doesn't reduce to a single tree
    fn build_ast(&self) -> Option<AST<'_>> {
        let mut ops = Vec::new();
        for token in self.0.iter() {
            let arity = match *token {
                MathToken::Number(_) | MathToken::Variable(_) => {
                    ops.push(AST::Leaf(token));
                    continue;
                }
                MathToken::Function(_) => 1,
                MathToken::Op(_) => 2,
                MathToken::OParen | MathToken::CParen => return None,
            };
            let n = ops.len().checked_sub(arity)?;
            let operands = ops.split_off(n);
            ops.push(AST::Node(token, operands));
        }
        match ops.len() {
            1 => ops.pop(),
            _ => None,
        }
    }
}

impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn printer(root: &AST) -> (String, (usize, Assoc)) {
            match root {
                AST::Leaf(token) => (token.to_string(), (99, Assoc::None)),
                AST::Node(token, args) => match **token {
                    MathToken::Op(ref op) => {
                        let (lhs, rhs) = (printer(&args[0]), printer(&args[1]));
                        let (prec, assoc) = precedence(token);

                        let lh = if prec > (lhs.1).0
                            || (prec == (lhs.1).0 && assoc != Assoc::Left)
                        {
                            format!("({})", lhs.0)
                        } else {
                            lhs.0
                        };
                        let rh = if prec > (rhs.1).0
                            || (prec == (rhs.1).0 && assoc != Assoc::Right)
                        {
                            format!("({})", rhs.0)
                        } else {
                            rhs.0
                        };
                        (format!("{} {} {}", lh, op, rh), (prec, assoc))
                    }
                    // function calls always carry their own parens
                    _ => (format!("{}({})", token, printer(&args[0]).0), (99, Assoc::None)),
                },
            }
        }

        match self.build_ast() {
            Some(ast) => write!(f, "{}", printer(&ast).0),
            None => {
                let postfix = self.0.iter().map(|t| t.text()).collect::<Vec<_>>();
                write!(f, "{}", postfix.join(" "))
            }
        }
    }
}
