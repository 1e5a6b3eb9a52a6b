use super::Move;

/// Result of a single round, from the player's point of view.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Outcome {
    PlayerWin,
    ComputerWin,
    Draw,
}

impl Outcome {
    /// Applies the beats-relation to the player's and the computer's calls.
    pub fn resolve(player: Move, computer: Move) -> Self {
        if player == computer {
            Self::Draw
        } else if player.beats() == computer {
            Self::PlayerWin
        } else {
            Self::ComputerWin
        }
    }
}

impl From<(Move, Move)> for Outcome {
    fn from((player, computer): (Move, Move)) -> Self {
        Self::resolve(player, computer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Move::*;
    use Outcome::*;

    #[rustfmt::skip]
    const TABLE: [(Move, Move, Outcome); 9] = [
        (Rock,     Rock,     Draw),
        (Rock,     Paper,    ComputerWin),
        (Rock,     Scissors, PlayerWin),
        (Paper,    Rock,     PlayerWin),
        (Paper,    Paper,    Draw),
        (Paper,    Scissors, ComputerWin),
        (Scissors, Rock,     ComputerWin),
        (Scissors, Paper,    PlayerWin),
        (Scissors, Scissors, Draw),
    ];

    #[test]
    fn every_pairing_resolves_as_documented() {
        for (player, computer, outcome) in TABLE {
            assert_eq!(
                Outcome::resolve(player, computer),
                outcome,
                "{} vs {}",
                player,
                computer
            );
        }
    }
    #[test]
    fn swapping_seats_swaps_the_winner() {
        for (player, computer, _) in TABLE {
            let forward = Outcome::from((player, computer));
            let reverse = Outcome::from((computer, player));
            match forward {
                Draw => assert_eq!(reverse, Draw),
                PlayerWin => assert_eq!(reverse, ComputerWin),
                ComputerWin => assert_eq!(reverse, PlayerWin),
            }
        }
    }
}
