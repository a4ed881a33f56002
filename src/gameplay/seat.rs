/// One side of the table: an actor plus everything we remember about it.
/// The name is fixed at creation; scores and the move tally accumulate
/// until [`Seat::reset`] wipes them at the end of a game.
#[derive(Debug)]
pub struct Seat {
    pub name: String,
    pub actor: Rc<dyn Player>,
    pub score: Score,
    pub round: Score,
    pub tally: Vec<(Move, u32)>,
    pub last: Option<Move>,
}

impl Seat {
    pub fn new(actor: Rc<dyn Player>) -> Seat {
        Seat {
            name: actor.name(),
            actor,
            score: 0,
            round: 0,
            tally: Vec::new(),
            last: None,
        }
    }

    /// Ask the actor for a move, remember it, and bump its tally count.
    /// First-ever choices append to the tally, so report order is
    /// first-chosen order.
    pub fn choose(&mut self) -> Move {
        let choice = self.actor.throw();
        self.last = Some(choice);
        match self.tally.iter_mut().find(|(m, _)| *m == choice) {
            Some((_, n)) => *n += 1,
            None => self.tally.push((choice, 1)),
        }
        choice
    }

    pub fn record_win(&mut self) {
        self.score += 1;
        self.round += 1;
    }

    pub fn has_won(&self) -> bool {
        self.score == crate::GAME_POINT
    }

    /// Back to a blank slate between games. The name survives.
    pub fn reset(&mut self) {
        self.score = 0;
        self.round = 0;
        self.tally.clear();
    }

    /// One `move = count` line per move ever chosen, first-chosen order.
    pub fn history(&self) -> String {
        std::iter::once(format!("Moves so far for {}:", self.name))
            .chain(self.tally.iter().map(|(m, n)| format!("{} = {}", m, n)))
            .collect::<Vec<String>>()
            .join("\n")
    }
}

impl Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

use super::player::Player;
use crate::Score;
use crate::moves::Move;
use std::fmt::Display;
use std::rc::Rc;
