//! Move sources that can take either seat.
//!
//! ## Implementations
//!
//! - [`Fish`] - Uniform random player, the computer opponent
//! - [`Puppet`] - Replays a fixed sequence of moves
//! - [`Human`] - Interactive player reading calls from a [`Console`](crate::console::Console)
mod fish;
mod human;
mod puppet;

pub use fish::*;
pub use human::*;
pub use puppet::*;

use crate::gameplay::*;

/// Anything that can call a move each round.
///
/// The session does not care whether calls come from a random number
/// generator, a script or a person at the keyboard.
pub trait Player {
    /// Call a move for the coming round.
    fn decide(&mut self) -> anyhow::Result<Move>;
    /// Receive the resolved round once both calls are in.
    /// Not required for decision-making.
    fn notify(&mut self, _: &Round) {}
}

impl<P> Player for Box<P>
where
    P: Player + ?Sized,
{
    fn decide(&mut self) -> anyhow::Result<Move> {
        (**self).decide()
    }
    fn notify(&mut self, round: &Round) {
        (**self).notify(round)
    }
}
