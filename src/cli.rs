//! Command-line arguments and wiring for the `roshambo` binary.
use crate::Count;
use crate::console::*;
use crate::players::*;
use crate::session::*;
use clap::Parser;
use std::io::IsTerminal;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Player name; prompted for when absent
    #[arg(long)]
    pub name: Option<String>,
    /// Number of rounds; prompted for when absent
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub rounds: Option<Count>,
    /// Seed the computer's random calls for a reproducible game
    #[arg(long)]
    pub seed: Option<u64>,
    /// Seat a second random player in your place and watch
    #[arg(long)]
    pub watch: bool,
    /// Raise diagnostic logging on stderr (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }

    /// Sets up the game from flags and prompts, then plays it to the end
    /// on stdout.
    pub fn run(self) -> anyhow::Result<()> {
        let console: Box<dyn Console> = match std::io::stdin().is_terminal() {
            true => Box::new(Terminal),
            false => Box::new(Stream::stdio()),
        };
        self.play(console, &mut std::io::stdout().lock())
    }

    fn play<C, W>(self, mut console: C, out: &mut W) -> anyhow::Result<()>
    where
        C: Console + 'static,
        W: std::io::Write,
    {
        writeln!(out, "Let's play Rock-Paper-Scissors")?;
        let config = Config::prompt(&mut console, self.name, self.rounds)?;
        let computer = match self.seed {
            Some(seed) => Fish::seeded(seed),
            None => Fish::default(),
        };
        let player: Box<dyn Player> = match self.watch {
            true => Box::new(match self.seed {
                Some(seed) => Fish::seeded(seed.wrapping_add(1)),
                None => Fish::default(),
            }),
            false => Box::new(Human::new(console)),
        };
        Session::new(config, player, computer).play(out)?;
        Ok(())
    }
}
