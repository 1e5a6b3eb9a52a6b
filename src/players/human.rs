use super::*;
use crate::console;
use crate::console::Console;

/// Interactive player: asks for a call each round and re-prompts until
/// the answer names a move exactly.
#[derive(Debug)]
pub struct Human<C> {
    console: C,
}

impl<C> Human<C>
where
    C: Console,
{
    pub fn new(console: C) -> Self {
        Self { console }
    }
    pub fn console(&self) -> &C {
        &self.console
    }
    /// Validation applied to each typed call.
    pub fn parse(input: &str) -> Result<Move, String> {
        Move::try_from(input).map_err(|e| e.to_string())
    }
}

impl<C> Player for Human<C>
where
    C: Console,
{
    fn decide(&mut self) -> anyhow::Result<Move> {
        console::until(
            &mut self.console,
            "Enter Rock, Paper, or Scissors",
            Self::parse,
        )
    }
}
