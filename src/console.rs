use anyhow::{Context, Result};
use std::io::BufRead;
use tracing::{info, warn};

use crate::commands::{self, Action};
use crate::game::Game;
use crate::output::{Message, QuizOutput};


/// Feeds input lines to the game until `!quit`, end of input or a failed read.
/// A bad line is reported and skipped. Leaving by any route goes through
/// `Game::quit` so an unfinished quiz is announced as discarded.
pub fn run<R: BufRead, O: QuizOutput>(mut input: R, game: &mut Game<O>, output: &O) -> Result<()> {
    let mut buffer = Vec::new();
    loop {
        buffer.clear();
        let read = match input.read_until(b'\n', &mut buffer) {
            Ok(read) => read,
            Err(e) => {
                game.quit();
                return Err(e).context("Could not read input");
            }
        };
        if read == 0 {
            info!("End of input");
            game.quit();
            return Ok(());
        }

        let result = std::str::from_utf8(&buffer)
            .context("Input was not valid UTF-8 and was ignored")
            .and_then(commands::parse)
            .and_then(|action| {
                let quitting = action == Action::Quit;
                game.handle(action)?;
                Ok(quitting)
            });
        match result {
            Ok(true) => return Ok(()),
            Ok(false) => (),
            Err(e) => {
                warn!("{:#}", e);
                output.say(&Message::ActionFailed(format!("{:#}", e)));
            }
        }
    }
}
