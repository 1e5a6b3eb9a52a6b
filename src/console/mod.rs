//! Line-oriented input for prompts, and the retry loop that validates it.
//!
//! ## Implementations
//!
//! - [`Terminal`] - Interactive prompts via `dialoguer` (requires `cli` feature)
//! - [`Stream`] - Any buffered reader, for piped or redirected stdin
//! - [`Script`] - Fixed list of lines, recording prompts and warnings
mod script;
mod stream;
#[cfg(feature = "cli")]
mod terminal;

pub use script::*;
pub use stream::*;
#[cfg(feature = "cli")]
pub use terminal::*;

/// Source of user-typed lines.
pub trait Console {
    /// Shows `prompt` and reads one line.
    /// Fails once input is exhausted rather than blocking forever.
    fn read(&mut self, prompt: &str) -> anyhow::Result<String>;
    /// Reports why the last line was rejected, before the prompt repeats.
    fn warn(&mut self, message: &str) -> anyhow::Result<()>;
}

impl<C> Console for &mut C
where
    C: Console + ?Sized,
{
    fn read(&mut self, prompt: &str) -> anyhow::Result<String> {
        (**self).read(prompt)
    }
    fn warn(&mut self, message: &str) -> anyhow::Result<()> {
        (**self).warn(message)
    }
}

impl<C> Console for Box<C>
where
    C: Console + ?Sized,
{
    fn read(&mut self, prompt: &str) -> anyhow::Result<String> {
        (**self).read(prompt)
    }
    fn warn(&mut self, message: &str) -> anyhow::Result<()> {
        (**self).warn(message)
    }
}

/// Prompts until `parse` accepts the trimmed line.
///
/// Every rejection is reported through [`Console::warn`] and the prompt
/// repeats. Only an input error ends the loop early.
pub fn until<C, T, F>(console: &mut C, prompt: &str, parse: F) -> anyhow::Result<T>
where
    C: Console + ?Sized,
    F: Fn(&str) -> Result<T, String>,
{
    loop {
        let line = console.read(prompt)?;
        match parse(line.trim()) {
            Ok(value) => return Ok(value),
            Err(reason) => {
                log::debug!("rejected {:?} for {:?}: {}", line, prompt, reason);
                console.warn(&reason)?;
            }
        }
    }
}
