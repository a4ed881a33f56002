/// Names the robot introduces itself by, picked at random per session.
pub const NAMES: [&str; 4] = ["R2D2", "C3PO", "Wally", "BB4"];

#[derive(Debug, Default)]
pub struct Robot;

impl Player for Robot {
    fn name(&self) -> String {
        let ref mut rng = rand::rng();
        NAMES
            .choose(rng)
            .copied()
            .expect("four names to choose from")
            .to_string()
    }

    fn throw(&self) -> Move {
        Move::random()
    }
}

use crate::Arbitrary;
use crate::gameplay::Player;
use crate::moves::Move;
use rand::seq::IndexedRandom;
