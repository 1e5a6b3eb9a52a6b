use crate::Arbitrary;

/// One of the three hand shapes a player can call.
///
/// The beats-relation is cyclic: Rock beats Scissors, Scissors beats
/// Paper, Paper beats Rock.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    /// Every move, in canonical order.
    pub const fn all() -> [Self; 3] {
        [Self::Rock, Self::Paper, Self::Scissors]
    }
    /// The move this one defeats.
    pub const fn beats(&self) -> Self {
        match self {
            Self::Rock => Self::Scissors,
            Self::Paper => Self::Rock,
            Self::Scissors => Self::Paper,
        }
    }
    /// Canonical name, as the player must type it.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Rock => "Rock",
            Self::Paper => "Paper",
            Self::Scissors => "Scissors",
        }
    }
}

impl Arbitrary for Move {
    fn random<R>(rng: &mut R) -> Self
    where
        R: rand::Rng + ?Sized,
    {
        Self::all()[rng.random_range(0..3)]
    }
}

/// Exact, case-sensitive match against the canonical names.
impl TryFrom<&str> for Move {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::all()
            .into_iter()
            .find(|m| m.label() == s)
            .ok_or_else(|| anyhow::anyhow!("Enter one of Rock, Paper, or Scissors"))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_names() {
        for m in Move::all() {
            assert_eq!(Move::try_from(m.label()).unwrap(), m);
        }
    }
    #[test]
    fn rejects_other_spellings() {
        for s in ["rock", "PAPER", "scissor", "R", "", " Rock", "Rock ", "Lizard"] {
            assert!(Move::try_from(s).is_err(), "{:?} should be rejected", s);
        }
    }
    #[test]
    fn beats_is_a_cycle() {
        for m in Move::all() {
            assert_ne!(m.beats(), m);
            assert_eq!(m.beats().beats().beats(), m);
        }
    }
    #[test]
    fn random_covers_every_move() {
        use rand::SeedableRng;
        let ref mut rng = rand::rngs::SmallRng::seed_from_u64(11);
        let seen = (0..256)
            .map(|_| Move::random(rng))
            .collect::<std::collections::BTreeSet<_>>();
        assert_eq!(seen.len(), 3);
    }
    #[test]
    fn random_follows_the_seed() {
        use rand::SeedableRng;
        let draw = |seed| {
            let ref mut rng = rand::rngs::SmallRng::seed_from_u64(seed);
            (0..32).map(|_| Move::random(rng)).collect::<Vec<_>>()
        };
        assert_eq!(draw(3), draw(3));
    }
}
