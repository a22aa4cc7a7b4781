#![deny(warnings)]

use crate::scanner::Scanner;

// only plain spaces separate tokens, tabs and newlines are invalid input
static WHITE: &[char] = &[' '];
static OPS: &[char] = &['+', '-', '*', '/', '^'];

impl<I: Iterator<Item=char>> Scanner<I> {
    pub fn extract_string(&mut self) -> String {
        self.extract().into_iter().collect()
    }

    /// Discard whitespace ahead of the next token, returns if any was skipped.
    pub fn skip_ws(&mut self) -> bool {
        let skipped = self.skip_all(WHITE);
        self.ignore();
        skipped
    }

    // scan a run of [0-9.]+, no validation of the literal happens here,
    // '1.2.3' is a single (bad) number that fails when evaluated
    pub fn scan_number(&mut self) -> Option<String> {
        if self.skip_matching(|c| c.is_ascii_digit() || *c == '.') {
            Some(self.extract_string())
        } else {
            None
        }
    }

    // scan [a-zA-Z]+
    pub fn scan_identifier(&mut self) -> Option<String> {
        if self.skip_matching(|c| c.is_ascii_alphabetic()) {
            Some(self.extract_string())
        } else {
            None
        }
    }

    pub fn scan_math_op(&mut self) -> Option<String> {
        self.accept_any(OPS)?;
        Some(self.extract_string())
    }
}

///////////////////////////////////////////////////////////////////////////////
