use super::*;
use crate::Count;

/// One resolved round: both calls and who took it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub index: Count,
    pub player: Move,
    pub computer: Move,
    pub outcome: Outcome,
}

impl Round {
    /// Resolves the calls of round `index` (1-based).
    pub fn new(index: Count, player: Move, computer: Move) -> Self {
        Self {
            index,
            player,
            computer,
            outcome: Outcome::resolve(player, computer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_on_construction() {
        let round = Round::new(1, Move::Rock, Move::Scissors);
        assert_eq!(round.outcome, Outcome::PlayerWin);
        let round = Round::new(2, Move::Rock, Move::Paper);
        assert_eq!(round.outcome, Outcome::ComputerWin);
    }
}
