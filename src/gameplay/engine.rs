pub struct Engine {
    human: Seat,
    robot: Seat,
    n_games: u32,
}

impl Engine {
    /// Seat a prompt-driven human against a random robot. Both actors
    /// introduce themselves here, before the welcome banner runs.
    pub fn new() -> Self {
        Self::with(Rc::new(Human), Rc::new(Robot))
    }

    pub fn with(human: Rc<dyn Player>, robot: Rc<dyn Player>) -> Self {
        Self {
            human: Seat::new(human),
            robot: Seat::new(robot),
            n_games: 0,
        }
    }

    /// Session loop: games until the human declines a rematch.
    pub fn play(&mut self) {
        loop {
            self.welcome();
            while self.has_rounds() {
                self.play_round();
            }
            self.end_game();
            if !self.rematch() {
                break;
            }
        }
        self.goodbye();
    }

    fn has_rounds(&self) -> bool {
        !self.human.has_won() && !self.robot.has_won()
    }

    fn play_round(&mut self) {
        let human = self.human.choose();
        let robot = self.robot.choose();
        Self::clear();
        println!("{} chose {} {}", self.human, human, human.glyph());
        println!("{} chose {} {}\n", self.robot, robot, robot.glyph());
        self.settle(human, robot);
        println!("\nRound score so far:");
        println!("{} = {}", self.human, self.human.round);
        println!("{} = {}\n", self.robot, self.robot.round);
        println!("{}", self.human.history());
        println!("{}", self.robot.history());
    }

    fn settle(&mut self, human: Move, robot: Move) {
        log::debug!("{} vs {}", human, robot);
        if human.beats(&robot) {
            println!("{}", format!("{} won this round!", self.human).green());
            self.human.record_win();
        } else if robot.beats(&human) {
            println!("{}", format!("{} won this round!", self.robot).red());
            self.robot.record_win();
        } else {
            println!("{}", "It's a tie!".yellow());
        }
    }

    fn end_game(&mut self) {
        Self::clear();
        if self.human.has_won() {
            let congrats = format!(
                "Congrats {}, you won the game! \u{1F483} \u{1F57A}",
                self.human
            );
            println!("{}\n", congrats.green());
            println!("Quick happy celebratory dance... \u{1F929} \u{1F973} \u{1F60E}\n");
        } else {
            let consolation = format!("Aww... {} won the game! \u{1F63F}", self.robot);
            println!("{}\n", consolation.red());
            println!("You did your best though... \u{1F62C}\n");
        }
        println!("Final score:");
        println!(
            "{} {} and {} {}!\n",
            self.human, self.human.score, self.robot, self.robot.score
        );
        self.n_games += 1;
        log::info!("game {} over", self.n_games);
        self.human.reset();
        self.robot.reset();
    }

    fn rematch(&self) -> bool {
        let answer: String = Input::new()
            .with_prompt("Would you like to play again? (Please enter Y or N)")
            .validate_with(|i: &String| -> Result<(), &str> {
                match i.to_lowercase().as_str() {
                    "y" | "n" => Ok(()),
                    _ => Err("Sorry, must be Y or N..."),
                }
            })
            .report(false)
            .interact()
            .unwrap();
        answer.to_lowercase() == "y"
    }

    fn welcome(&self) {
        Self::clear();
        let legend = Move::ALL
            .iter()
            .map(|m| m.glyph())
            .collect::<Vec<&str>>()
            .join("  ");
        Self::center("Welcome to the Rock, Paper, Scissors, Lizard, Spock game!");
        Self::center(&format!("({})", legend));
        Self::center("");
        Self::center(&format!(
            "The first one to {} points wins the game.",
            crate::GAME_POINT
        ));
        Self::center("----------------------------------------");
        Self::center("You earn a point each time you win a round.");
        Self::center("");
        Self::center(&format!("Good luck {}!", self.human));
    }

    fn goodbye(&self) {
        Self::clear();
        println!("Thanks for playing {}.\n", self.human);
        println!("Please come play again soon!\n");
        println!("And have a wonderful rest of your day!\n");
        log::info!("session over after {} games", self.n_games);
    }

    fn center(text: &str) {
        println!("{:^74}", text);
    }

    fn clear() {
        Term::stdout().clear_screen().ok();
    }
}

use super::player::Player;
use super::seat::Seat;
use crate::moves::Move;
use crate::players::{Human, Robot};
use colored::Colorize;
use dialoguer::Input;
use dialoguer::console::Term;
use std::rc::Rc;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Fixed(Move);
    impl Player for Fixed {
        fn name(&self) -> String {
            String::from("Fixed")
        }
        fn throw(&self) -> Move {
            self.0
        }
    }

    fn engine(human: Move, robot: Move) -> Engine {
        Engine::with(Rc::new(Fixed(human)), Rc::new(Fixed(robot)))
    }

    #[test]
    fn human_wins_rock_vs_scissors() {
        let mut engine = engine(Move::Rock, Move::Scissors);
        engine.play_round();
        assert!(engine.human.score == 1);
        assert!(engine.human.round == 1);
        assert!(engine.robot.score == 0);
        assert!(engine.robot.round == 0);
    }

    #[test]
    fn robot_wins_rock_vs_paper() {
        let mut engine = engine(Move::Rock, Move::Paper);
        engine.play_round();
        assert!(engine.human.score == 0);
        assert!(engine.robot.score == 1);
    }

    #[test]
    fn tie_scores_nothing() {
        let mut engine = engine(Move::Rock, Move::Rock);
        engine.play_round();
        assert!(engine.human.score == 0);
        assert!(engine.robot.score == 0);
        assert!(engine.human.tally == vec![(Move::Rock, 1)]);
        assert!(engine.robot.tally == vec![(Move::Rock, 1)]);
    }

    #[test]
    fn game_stops_at_game_point() {
        let mut engine = engine(Move::Spock, Move::Scissors);
        while engine.has_rounds() {
            engine.play_round();
        }
        assert!(engine.human.score == crate::GAME_POINT);
        assert!(engine.robot.score == 0);
        assert!(engine.human.tally == vec![(Move::Spock, crate::GAME_POINT as u32)]);
    }

    #[test]
    fn end_game_resets_both_seats() {
        let mut engine = engine(Move::Lizard, Move::Paper);
        while engine.has_rounds() {
            engine.play_round();
        }
        engine.end_game();
        assert!(engine.n_games == 1);
        assert!(engine.human.score == 0);
        assert!(engine.robot.score == 0);
        assert!(engine.human.tally.is_empty());
        assert!(engine.robot.tally.is_empty());
        assert!(engine.has_rounds());
    }
}
