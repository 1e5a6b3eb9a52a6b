use crate::Count;
use crate::console;
use crate::console::Console;

/// Who is playing and for how long. Fixed once the session starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    name: String,
    rounds: Count,
}

impl Config {
    /// Builds a config from already-known values, applying the same
    /// validation as prompted input.
    pub fn new(name: &str, rounds: Count) -> anyhow::Result<Self> {
        let name = Self::parse_name(name.trim()).map_err(anyhow::Error::msg)?;
        let rounds = Self::check_rounds(rounds).map_err(anyhow::Error::msg)?;
        Ok(Self { name, rounds })
    }

    /// Prompts for whichever of the name and round count is missing.
    /// A provided value that would be rejected at the prompt is asked for
    /// again instead.
    pub fn prompt<C>(
        console: &mut C,
        name: Option<String>,
        rounds: Option<Count>,
    ) -> anyhow::Result<Self>
    where
        C: Console + ?Sized,
    {
        let name = name.filter(|n| Self::parse_name(n.trim()).is_ok());
        let rounds = rounds.filter(|r| Self::check_rounds(*r).is_ok());
        let name = match name {
            Some(name) => name,
            None => console::until(console, "Enter your name", Self::parse_name)?,
        };
        let rounds = match rounds {
            Some(rounds) => rounds,
            None => console::until(
                console,
                "How many rounds should we play?",
                Self::parse_rounds,
            )?,
        };
        Self::new(&name, rounds)
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn rounds(&self) -> Count {
        self.rounds
    }

    /// Any non-blank name.
    pub fn parse_name(input: &str) -> Result<String, String> {
        match input.is_empty() {
            true => Err(String::from("Enter a name")),
            false => Ok(input.to_owned()),
        }
    }
    /// A positive whole number that fits the round counter.
    pub fn parse_rounds(input: &str) -> Result<Count, String> {
        let n = input
            .parse::<i64>()
            .map_err(|_| String::from("Enter a whole number of rounds"))?;
        if n <= 0 {
            return Err(String::from("Play at least one round"));
        }
        Count::try_from(n)
            .map_err(|_| format!("Play at most {} rounds", Count::MAX))
            .and_then(Self::check_rounds)
    }
    fn check_rounds(rounds: Count) -> Result<Count, String> {
        match rounds {
            0 => Err(String::from("Play at least one round")),
            n => Ok(n),
        }
    }
}
