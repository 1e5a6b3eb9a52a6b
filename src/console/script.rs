use super::Console;
use std::collections::VecDeque;

/// Console fed from a fixed list of lines.
///
/// Records each prompt shown and each warning issued, so callers can see
/// how many times a question was asked.
#[derive(Debug, Default, Clone)]
pub struct Script {
    lines: VecDeque<String>,
    prompts: Vec<String>,
    warnings: Vec<String>,
}

impl Script {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
            warnings: Vec::new(),
        }
    }
    /// Prompts shown so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
    /// Rejection messages issued so far, in order.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
    /// Lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl Console for Script {
    fn read(&mut self, prompt: &str) -> anyhow::Result<String> {
        self.prompts.push(prompt.to_owned());
        self.lines
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("script exhausted at prompt {:?}", prompt))
    }
    fn warn(&mut self, message: &str) -> anyhow::Result<()> {
        self.warnings.push(message.to_owned());
        Ok(())
    }
}
