#![deny(warnings)]

use crate::scanner::Scanner;
use std::fmt;

#[derive(Clone, PartialEq, Debug)]
pub enum MathToken {
    Number(String),
    Variable(String),
    Function(String),
    Op(String),
    OParen, CParen,
}

impl MathToken {
    pub fn text(&self) -> &str {
        match self {
            MathToken::Number(s) | MathToken::Variable(s) |
            MathToken::Function(s) | MathToken::Op(s) => s,
            MathToken::OParen => "(",
            MathToken::CParen => ")",
        }
    }

    // tokens that can be the left factor of an implicit product. Function
    // is left out so 'sin(' stays a call
    fn closes_operand(&self) -> bool {
        matches!(self, MathToken::Number(_) | MathToken::Variable(_) | MathToken::CParen)
    }

    // tokens that can be the right factor of an implicit product
    fn opens_operand(&self) -> bool {
        matches!(self, MathToken::Number(_) | MathToken::Variable(_) |
                       MathToken::Function(_) | MathToken::OParen)
    }
}

impl fmt::Display for MathToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}

#[derive(Clone, PartialEq, Eq, Debug, thiserror::Error)]
pub enum LexError {
    #[error("invalid character {ch:?} at position {pos}")]
    InvalidChar { ch: char, pos: usize },
}

/// Splits an `f(x)` expression into tokens, synthesizing a `*` between
/// adjacent operands (`2x`, `2(x+1)`, `(x+1)x`, `2sin(x)`).
/// Stops after yielding the first error.
pub struct MathTokenizer<I: Iterator<Item=char>> {
    src: Scanner<I>,
    prev: Option<MathToken>,
    pending: Option<MathToken>,
    failed: bool,
}

impl<I: Iterator<Item=char>> MathTokenizer<I> {
    pub fn new(source: I) -> Self {
        MathTokenizer{src: Scanner::new(source), prev: None, pending: None, failed: false}
    }

    fn get_token(&mut self) -> Option<Result<MathToken, LexError>> {
        self.src.skip_ws();
        if let Some(num) = self.src.scan_number() {
            Some(Ok(MathToken::Number(num)))
        } else if let Some(id) = self.src.scan_identifier() {
            if id == "sin" || id == "cos" {
                Some(Ok(MathToken::Function(id)))
            } else {
                Some(Ok(MathToken::Variable(id)))
            }
        } else if let Some(op) = self.src.scan_math_op() {
            Some(Ok(MathToken::Op(op)))
        } else {
            let pos = self.src.offset();
            let token = match self.src.next()? {
                '(' => Ok(MathToken::OParen),
                ')' => Ok(MathToken::CParen),
                ch => Err(LexError::InvalidChar{ch, pos}),
            };
            self.src.ignore();
            Some(token)
        }
    }
}

impl<I: Iterator<Item=char>> Iterator for MathTokenizer<I> {
    type Item = Result<MathToken, LexError>;
    fn next(&mut self) -> Option<Self::Item> {
        if let Some(token) = self.pending.take() {
            self.prev = Some(token.clone());
            return Some(Ok(token));
        }
        if self.failed {
            return None;
        }
        let token = match self.get_token()? {
            Ok(token) => token,
            Err(e) => {
                self.failed = true;
                return Some(Err(e));
            }
        };
        let implicit_mul = self.prev.as_ref().map_or(false, MathToken::closes_operand)
            && token.opens_operand();
        let token = if implicit_mul {
            self.pending = Some(token);
            MathToken::Op(format!("*"))
        } else {
            token
        };
        self.prev = Some(token.clone());
        Some(Ok(token))
    }
}

pub fn tokenize(expr: &str) -> Result<Vec<MathToken>, LexError> {
    MathTokenizer::new(expr.chars()).collect()
}
