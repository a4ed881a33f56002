#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Move {
    #[default]
    Rock = 0,
    Paper = 1,
    Scissors = 2,
    Lizard = 3,
    Spock = 4,
}

impl Move {
    pub const ALL: [Self; 5] = [
        Self::Rock,
        Self::Paper,
        Self::Scissors,
        Self::Lizard,
        Self::Spock,
    ];

    /// Expand a shorthand token to its canonical name. Anything that is
    /// not a shorthand token passes through unchanged.
    pub fn translate(token: &str) -> &str {
        match token {
            "r" => "rock",
            "p" => "paper",
            "s" => "scissors",
            "l" => "lizard",
            "sp" => "spock",
            other => other,
        }
    }

    /// Each move defeats exactly two others. Ties are never a win.
    pub const fn beats(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::Rock, Self::Lizard)
                | (Self::Rock, Self::Scissors)
                | (Self::Paper, Self::Rock)
                | (Self::Paper, Self::Spock)
                | (Self::Scissors, Self::Lizard)
                | (Self::Scissors, Self::Paper)
                | (Self::Lizard, Self::Spock)
                | (Self::Lizard, Self::Paper)
                | (Self::Spock, Self::Rock)
                | (Self::Spock, Self::Scissors)
        )
    }

    /// The shorthand token this move answers to at the move prompt.
    pub const fn token(&self) -> &'static str {
        match self {
            Self::Rock => "r",
            Self::Paper => "p",
            Self::Scissors => "s",
            Self::Lizard => "l",
            Self::Spock => "sp",
        }
    }

    pub const fn glyph(&self) -> &'static str {
        match self {
            Self::Rock => "\u{1FAA8}",
            Self::Paper => "\u{1F4C4}",
            Self::Scissors => "\u{2702}",
            Self::Lizard => "\u{1F98E}",
            Self::Spock => "\u{1F596}",
        }
    }
}

impl TryFrom<&str> for Move {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "rock" => Ok(Self::Rock),
            "paper" => Ok(Self::Paper),
            "scissors" => Ok(Self::Scissors),
            "lizard" => Ok(Self::Lizard),
            "spock" => Ok(Self::Spock),
            _ => Err(format!("invalid move: {}", s)),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Rock => write!(f, "rock"),
            Self::Paper => write!(f, "paper"),
            Self::Scissors => write!(f, "scissors"),
            Self::Lizard => write!(f, "lizard"),
            Self::Spock => write!(f, "spock"),
        }
    }
}

impl crate::Arbitrary for Move {
    fn random() -> Self {
        use rand::seq::IndexedRandom;
        let ref mut rng = rand::rng();
        Self::ALL
            .choose(rng)
            .copied()
            .expect("five moves to choose from")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn antisymmetric() {
        for a in Move::ALL {
            for b in Move::ALL {
                if a == b {
                    assert!(!a.beats(&b));
                } else {
                    assert!(a.beats(&b) != b.beats(&a));
                }
            }
        }
    }

    #[test]
    fn balanced_tournament() {
        for a in Move::ALL {
            let wins = Move::ALL.iter().filter(|b| a.beats(b)).count();
            let losses = Move::ALL.iter().filter(|b| b.beats(&a)).count();
            assert!(wins == 2);
            assert!(losses == 2);
        }
    }

    #[test]
    fn shorthand() {
        assert!(Move::translate("r") == "rock");
        assert!(Move::translate("p") == "paper");
        assert!(Move::translate("s") == "scissors");
        assert!(Move::translate("l") == "lizard");
        assert!(Move::translate("sp") == "spock");
    }

    #[test]
    fn tokens_round_trip() {
        for m in Move::ALL {
            assert!(Move::try_from(Move::translate(m.token())) == Ok(m));
        }
    }

    #[test]
    fn passthrough() {
        assert!(Move::translate("rock") == "rock");
        assert!(Move::translate("spock") == "spock");
        assert!(Move::translate("xyzzy") == "xyzzy");
        assert!(Move::translate("") == "");
    }

    #[test]
    fn canonical_names() {
        for m in Move::ALL {
            assert!(Move::try_from(m.to_string().as_str()) == Ok(m));
        }
    }

    #[test]
    fn uncanonical_names() {
        assert!(Move::try_from("r").is_err());
        assert!(Move::try_from("Rock").is_err());
        assert!(Move::try_from("stone").is_err());
        assert!(Move::try_from("").is_err());
    }
}
