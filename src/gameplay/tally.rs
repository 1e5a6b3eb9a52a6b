use super::*;
use crate::Count;

/// Running score: player wins, computer wins and draws.
///
/// Starts at zero and only ever grows, one increment per round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    player: Count,
    computer: Count,
    draws: Count,
}

impl Tally {
    /// Increments the counter matching the outcome.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::PlayerWin => self.player += 1,
            Outcome::ComputerWin => self.computer += 1,
            Outcome::Draw => self.draws += 1,
        }
    }
    pub fn player(&self) -> Count {
        self.player
    }
    pub fn computer(&self) -> Count {
        self.computer
    }
    pub fn draws(&self) -> Count {
        self.draws
    }
    /// Rounds recorded so far.
    pub fn rounds(&self) -> Count {
        self.player + self.computer + self.draws
    }
    pub fn verdict(&self) -> Verdict {
        Verdict::from(self)
    }
}

impl FromIterator<Outcome> for Tally {
    fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
        let mut tally = Self::default();
        iter.into_iter().for_each(|o| tally.record(o));
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let tally = Tally::default();
        assert_eq!(tally.rounds(), 0);
        assert_eq!(tally.verdict(), Verdict::Draw);
    }
    #[test]
    fn records_one_counter_per_round() {
        let tally = [Outcome::Draw, Outcome::ComputerWin, Outcome::ComputerWin]
            .into_iter()
            .collect::<Tally>();
        assert_eq!(tally.player(), 0);
        assert_eq!(tally.computer(), 2);
        assert_eq!(tally.draws(), 1);
        assert_eq!(tally.rounds(), 3);
    }
}
