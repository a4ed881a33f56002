pub mod engine;
pub use engine::*;

pub mod player;
pub use player::*;

pub mod seat;
pub use seat::*;
