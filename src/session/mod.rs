mod config;
mod game;

pub use config::*;
pub use game::*;
