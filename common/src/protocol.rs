use crate::models::Direction;

/// One turn's worth of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move { direction: Direction },
    Quit,
}

impl Command {
    /// Parses a single-letter command, ignoring case and surrounding whitespace.
    /// Returns `None` for anything that is not one of `u`, `d`, `l`, `r`, `q`.
    pub fn parse(input: &str) -> Option<Self> {
        let direction = match input.trim().to_ascii_lowercase().as_str() {
            "u" => Direction::Up,
            "d" => Direction::Down,
            "l" => Direction::Left,
            "r" => Direction::Right,
            "q" => return Some(Self::Quit),
            _ => return None,
        };

        Some(Self::Move { direction })
    }
}

/// Result of trying to move the player one tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    OutOfBounds,
    Hazard,
    Win,
    Moved,
}

impl MoveOutcome {
    pub fn is_loss(self) -> bool {
        matches!(self, Self::OutOfBounds | Self::Hazard)
    }

    /// How the game ends after this outcome, if it does
    pub fn game_end(self) -> Option<GameEnd> {
        match self {
            Self::OutOfBounds => Some(GameEnd::Lost {
                cause: LossCause::OutOfBounds,
            }),
            Self::Hazard => Some(GameEnd::Lost {
                cause: LossCause::Hazard,
            }),
            Self::Win => Some(GameEnd::Won),
            Self::Moved => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LossCause {
    OutOfBounds,
    Hazard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    Won,
    Lost { cause: LossCause },
    Quit,
}

impl GameEnd {
    /// The two lines shown once the game is over
    pub fn messages(self) -> [&'static str; 2] {
        match self {
            Self::Won => ["✨ WE HAVE A WINNER!! ✨", "✨ CONGRATULATIONS!! ✨"],
            Self::Lost { .. } => [" ❗ ⚠️  GAME OVER  ⚠️ ❗ ", "Thank you for playing!"],
            Self::Quit => ["Bye Bye 👋", "See you soon!!"],
        }
    }
}

pub const MOVE_QUESTION: &str = "Where would you like to move?";
pub const OPTIONS_PROMPT: &str =
    "Options: U/u = UP\tD/d = DOWN\tL/l=LEFT\tR/r=RIGHT\tQ/q=QUIT\n\t>>";
pub const INVALID_OPTION: &str = "That is not a valid option. Do try again.";
