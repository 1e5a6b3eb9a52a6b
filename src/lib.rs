//! Terminal Rock-Paper-Scissors.
//!
//! A [`session::Session`] pits two [`players::Player`]s against each other
//! for a fixed number of rounds, tallying wins and draws and declaring a
//! winner at the end. The interactive binary seats a [`players::Human`]
//! against a random [`players::Fish`].
#[cfg(feature = "cli")]
pub mod cli;
pub mod console;
pub mod gameplay;
pub mod players;
pub mod session;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Round counters and round indices.
pub type Count = u32;

// ============================================================================
// TRAITS
// ============================================================================
/// Uniform draw of a value from a caller-supplied generator.
pub trait Arbitrary {
    /// Draw one instance; seeding `rng` makes the draw reproducible.
    fn random<R>(rng: &mut R) -> Self
    where
        R: rand::Rng + ?Sized;
}

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Display name of the computer's seat.
pub const COMPUTER: &str = "Computer";
/// Rule printed above and below each round.
pub const RULE: &str = "--------";
/// Rule printed around the final score heading.
pub const BANNER: &str = "-----------";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging on stderr.
/// Keeps diagnostics out of the game transcript on stdout.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term])?;
    Ok(())
}
