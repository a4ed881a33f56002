#[derive(Debug, Default)]
pub struct Human;

impl Player for Human {
    fn name(&self) -> String {
        Term::stdout().clear_screen().ok();
        println!("Hello there...");
        Input::new()
            .with_prompt("What's your name?")
            .validate_with(|n: &String| -> Result<(), &str> {
                match !n.is_empty() && n.chars().all(|c| c.is_ascii_alphabetic()) {
                    true => Ok(()),
                    false => Err("Sorry, must enter a name..."),
                }
            })
            .report(false)
            .interact()
            .unwrap()
    }

    fn throw(&self) -> Move {
        let legend = Move::ALL
            .iter()
            .map(|m| format!("{}/{} {}", m, m.token(), m.glyph()))
            .collect::<Vec<String>>()
            .join(", ");
        let choice: String = Input::new()
            .with_prompt(format!("Please choose {}", legend))
            .validate_with(|i: &String| -> Result<(), &str> {
                match Move::try_from(Move::translate(i)) {
                    Ok(_) => Ok(()),
                    Err(_) => Err("Sorry, invalid choice."),
                }
            })
            .report(false)
            .interact()
            .unwrap();
        Move::try_from(Move::translate(&choice)).expect("validated at the prompt")
    }
}

use crate::gameplay::Player;
use crate::moves::Move;
use dialoguer::Input;
use dialoguer::console::Term;
