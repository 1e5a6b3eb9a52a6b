use super::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use crate::Arbitrary;

/// Computer player that calls uniformly at random.
#[derive(Debug, Clone)]
pub struct Fish {
    rng: SmallRng,
}

impl Fish {
    /// Fixed seed, for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for Fish {
    fn default() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }
}

impl Player for Fish {
    fn decide(&mut self) -> anyhow::Result<Move> {
        Ok(Move::random(&mut self.rng))
    }
}
