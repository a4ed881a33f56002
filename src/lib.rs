//! Terminal Rock-Paper-Scissors-Lizard-Spock.
//!
//! One human against one robot, first to five points, rematches until
//! the human walks away.

pub mod gameplay;
pub mod moves;
pub mod players;

/// Points accumulated toward game point.
pub type Score = u8;

/// Cumulative score that ends a game.
pub const GAME_POINT: Score = 5;

/// Random instance generation for robot play and testing.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

/// Initialize terminal logging on stderr, leaving stdout to the game
/// transcript. Nothing is ever written to disk.
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
