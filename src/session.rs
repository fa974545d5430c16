use hatfinder_common::protocol::{Command, GameEnd, INVALID_OPTION, MOVE_QUESTION, OPTIONS_PROMPT};
use tracing::{debug, info};

use crate::{
    Result,
    console::{LineReader, Screen},
    logic::GameField,
};

/// Drives one game: owns the field for its whole lifetime and talks to the player
/// through `console`.
pub struct Session<C> {
    field: GameField,
    console: C,
}

impl<C: LineReader + Screen> Session<C> {
    pub fn new(field: GameField, console: C) -> Self {
        Self { field, console }
    }

    #[cfg(test)]
    pub(crate) fn field(&self) -> &GameField {
        &self.field
    }

    #[cfg(test)]
    pub(crate) fn console(&self) -> &C {
        &self.console
    }

    /// Plays turns until the player wins, loses or quits, then shows the closing
    /// message pair.
    pub fn run(&mut self) -> Result<GameEnd> {
        info!(
            "Starting {}x{} game on {} difficulty",
            self.field.width(),
            self.field.height(),
            self.field.difficulty()
        );

        let end = self.play()?;

        info!("Game finished: {:?}", end);
        self.console.clear()?;
        self.console.write_lines(&end.messages())?;
        Ok(end)
    }

    fn play(&mut self) -> Result<GameEnd> {
        let mut rejected = false;

        loop {
            self.show_board(rejected)?;

            let Some(input) = self.console.read_line(OPTIONS_PROMPT)? else {
                info!("Input closed, leaving the game");
                return Ok(GameEnd::Quit);
            };

            rejected = false;
            match Command::parse(&input) {
                None => {
                    debug!("Rejected input {:?}", input);
                    rejected = true;
                }
                Some(Command::Quit) => return Ok(GameEnd::Quit),
                Some(Command::Move { direction }) => {
                    let outcome = self.field.try_move_player(direction)?;
                    if let Some(end) = outcome.game_end() {
                        return Ok(end);
                    }
                }
            }
        }
    }

    fn show_board(&mut self, rejected: bool) -> Result<()> {
        let board = self.field.render();

        self.console.clear()?;
        self.console.write_lines(&[board.as_str()])?;
        if rejected {
            self.console.write_lines(&[INVALID_OPTION])?;
        }
        self.console.write_lines(&[MOVE_QUESTION])?;
        Ok(())
    }
}
