use anyhow::Result;
use std::env;
use std::io;

mod commands;
mod config;
mod console;
mod game;
mod logging;
mod output;

use crate::game::Game;
use crate::output::terminal::TerminalOutput;

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let log_filter =
        env::var("QUIZ_LOG").unwrap_or_else(|_| logging::DEFAULT_LOG_FILTER.to_owned());
    logging::init_tracing(&log_filter);

    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("{}", config::USAGE);
        return Ok(());
    }
    let settings = match config::load_settings(|key| env::var(key).ok(), args.into_iter()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}", config::USAGE);
            return Err(e);
        }
    };

    let output = TerminalOutput::new(io::stdout());
    let mut game = Game::new(settings, output.clone());

    let stdin = io::stdin();
    console::run(stdin.lock(), &mut game, &output)?;

    Ok(())
}
