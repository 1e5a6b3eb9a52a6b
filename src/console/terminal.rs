use super::Console;
use dialoguer::Input;
use dialoguer::console::Term;
use dialoguer::console::style;

/// Interactive console backed by `dialoguer`.
#[derive(Debug, Default)]
pub struct Terminal;

impl Terminal {
    /// Warning text, coloured only when stderr is a terminal.
    fn paint(message: &str) -> String {
        style(message).red().for_stderr().to_string()
    }
}

impl Console for Terminal {
    fn read(&mut self, prompt: &str) -> anyhow::Result<String> {
        Ok(Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?)
    }
    fn warn(&mut self, message: &str) -> anyhow::Result<()> {
        Term::stderr().write_line(&Self::paint(message))?;
        Ok(())
    }
}
