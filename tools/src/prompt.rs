use anyhow::{Context, anyhow};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::fmt::Display;
use std::str::FromStr;

/// Line based questions for the interactive front-ends.
pub struct Prompter {
    rl: DefaultEditor,
}

impl Prompter {
    pub fn new() -> anyhow::Result<Self> {
        let rl = DefaultEditor::new().map_err(|e| anyhow!("can't start line editor: {}", e))?;
        Ok(Prompter { rl })
    }

    /// None once input is closed (Ctrl-D / Ctrl-C).
    pub fn line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        match self.rl.readline(prompt) {
            Ok(line) => {
                self.remember(&line);
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(anyhow!("readline failed: {}", e)),
        }
    }

    /// Adds `line` to history. Blank and repeated lines are skipped, and a
    /// history failure never stops the prompt.
    pub fn remember(&mut self, line: &str) -> bool {
        match self.rl.add_history_entry(line) {
            Ok(added) => added,
            Err(e) => {
                log::debug!("history entry {:?} not added: {}", line, e);
                false
            }
        }
    }

    /// Ask until the answer parses.
    pub fn ask<T>(&mut self, prompt: &str) -> anyhow::Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        loop {
            let line = self.line(prompt)?.context("input closed")?;
            match line.trim().parse::<T>() {
                Ok(value) => return Ok(value),
                Err(e) => println!("Invalid input {:?}: {}", line.trim(), e),
            }
        }
    }

    pub fn editor(&mut self) -> &mut DefaultEditor {
        &mut self.rl
    }
}
