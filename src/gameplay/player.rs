/// Capability contract shared by both sides of the table: a player can
/// introduce itself once and throw a move each round. All bookkeeping
/// (scores, tallies) lives on the [`Seat`](super::Seat), not here.
pub trait Player: Debug {
    /// Establish the display name. Called once, at seat creation.
    fn name(&self) -> String;
    /// Choose a move for the current round.
    fn throw(&self) -> Move;
}

use crate::moves::Move;
use std::fmt::Debug;
