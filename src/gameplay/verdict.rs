use super::Tally;
use std::cmp::Ordering;

/// Overall winner, decided on wins alone. Draws never break a tie.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Verdict {
    Player,
    Computer,
    Draw,
}

impl From<&Tally> for Verdict {
    fn from(tally: &Tally) -> Self {
        match tally.player().cmp(&tally.computer()) {
            Ordering::Greater => Self::Player,
            Ordering::Less => Self::Computer,
            Ordering::Equal => Self::Draw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::Outcome;

    fn verdict(outcomes: &[Outcome]) -> Verdict {
        outcomes.iter().copied().collect::<Tally>().verdict()
    }

    #[test]
    fn more_player_wins() {
        assert_eq!(verdict(&[Outcome::PlayerWin]), Verdict::Player);
        assert_eq!(
            verdict(&[Outcome::ComputerWin, Outcome::PlayerWin, Outcome::PlayerWin]),
            Verdict::Player
        );
    }
    #[test]
    fn more_computer_wins() {
        assert_eq!(
            verdict(&[Outcome::Draw, Outcome::ComputerWin, Outcome::ComputerWin]),
            Verdict::Computer
        );
    }
    #[test]
    fn equal_wins_is_a_draw() {
        assert_eq!(
            verdict(&[Outcome::PlayerWin, Outcome::ComputerWin]),
            Verdict::Draw
        );
        assert_eq!(
            verdict(&[Outcome::Draw, Outcome::Draw, Outcome::Draw]),
            Verdict::Draw
        );
        assert_eq!(
            verdict(&[Outcome::PlayerWin, Outcome::Draw, Outcome::ComputerWin, Outcome::Draw]),
            Verdict::Draw
        );
    }
}
