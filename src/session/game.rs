use super::Config;
use crate::BANNER;
use crate::COMPUTER;
use crate::Count;
use crate::RULE;
use crate::gameplay::*;
use crate::players::Player;
use colored::Colorize;
use std::io::Write;

/// One game: a config, a running tally, and the two seats.
///
/// `P` calls for the named player, `C` for the computer. The session owns
/// all mutable game state; [`Session::play`] consumes it, so a tally is
/// never reused across games.
#[derive(Debug)]
pub struct Session<P, C> {
    config: Config,
    tally: Tally,
    player: P,
    computer: C,
}

impl<P, C> Session<P, C>
where
    P: Player,
    C: Player,
{
    pub fn new(config: Config, player: P, computer: C) -> Self {
        Self {
            config,
            tally: Tally::default(),
            player,
            computer,
        }
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    /// Plays every round, writing the transcript to `out`, and returns
    /// the final tally.
    pub fn play<W>(mut self, out: &mut W) -> anyhow::Result<Tally>
    where
        W: Write,
    {
        log::info!(
            "{} vs {} for {} round(s)",
            self.config.name(),
            COMPUTER,
            self.config.rounds()
        );
        writeln!(out, "Hello {}", self.config.name())?;
        for index in 1..=self.config.rounds() {
            let round = self.round(index)?;
            self.report(out, &round)?;
        }
        self.summary(out)?;
        log::info!("verdict {:?} after {:?}", self.tally.verdict(), self.tally);
        Ok(self.tally)
    }

    /// Collects both calls, resolves them and records the outcome.
    /// The player calls first; the computer never sees the player's call.
    pub fn round(&mut self, index: Count) -> anyhow::Result<Round> {
        let player = self.player.decide()?;
        let computer = self.computer.decide()?;
        let round = Round::new(index, player, computer);
        self.tally.record(round.outcome);
        self.player.notify(&round);
        self.computer.notify(&round);
        log::debug!(
            "round {}: {} vs {} -> {:?}",
            index,
            player,
            computer,
            round.outcome
        );
        Ok(round)
    }
}

impl<P, C> Session<P, C> {
    fn report<W>(&self, out: &mut W, round: &Round) -> anyhow::Result<()>
    where
        W: Write,
    {
        let name = self.config.name();
        writeln!(out, "Round {}", round.index)?;
        writeln!(out, "{}", RULE)?;
        writeln!(out, "{} called {}.", name, round.player)?;
        writeln!(out, "{} called {}.", COMPUTER, round.computer)?;
        match round.outcome {
            Outcome::PlayerWin => writeln!(out, "{}", format!("{} won!", name).green())?,
            Outcome::ComputerWin => writeln!(out, "{}", format!("{} won!", COMPUTER).red())?,
            Outcome::Draw => writeln!(out, "{}", "Draw!".yellow())?,
        }
        writeln!(out, "{}", RULE)?;
        Ok(())
    }

    fn summary<W>(&self, out: &mut W) -> anyhow::Result<()>
    where
        W: Write,
    {
        let name = self.config.name();
        writeln!(out, "{}", BANNER)?;
        writeln!(out, "FINAL SCORE")?;
        writeln!(out, "{}", BANNER)?;
        writeln!(out, "{} won: {}", name, self.tally.player())?;
        writeln!(out, "{} won: {}", COMPUTER, self.tally.computer())?;
        writeln!(out, "No Scores: {}", self.tally.draws())?;
        match self.tally.verdict() {
            Verdict::Player => writeln!(out, "{}", format!("{} wins!", name).green().bold())?,
            Verdict::Computer => writeln!(out, "{}", format!("{} wins!", COMPUTER).red().bold())?,
            Verdict::Draw => writeln!(out, "{}", "It's a draw!".yellow().bold())?,
        }
        Ok(())
    }
}
