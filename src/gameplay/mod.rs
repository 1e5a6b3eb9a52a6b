mod moves;
mod outcome;
mod round;
mod tally;
mod verdict;

pub use moves::*;
pub use outcome::*;
pub use round::*;
pub use tally::*;
pub use verdict::*;
