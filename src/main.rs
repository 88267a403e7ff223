use std::env;
use std::path::PathBuf;
use std::process;

use anyhow::Result;
use log::info;

use tui_hangman::error::{ConfigError, EXIT_FAILURE};
use tui_hangman::game::{Game, MAX_GUESSES};
use tui_hangman::term::{CrosstermKeyboard, CrosstermSurface};

/// Validate `<guesses> <word file>`. The guess count is clamped to
/// [`MAX_GUESSES`]; the artwork has no more reveal steps than that.
fn parse_args(program: &str, args: &[String]) -> Result<(usize, PathBuf), ConfigError> {
    if args.len() != 2 {
        return Err(ConfigError::WrongArgumentCount(program.to_string()));
    }

    let guesses: usize = args[0]
        .parse()
        .map_err(|_| ConfigError::GuessesNotNumeric)?;

    if args[1].is_empty() {
        return Err(ConfigError::InvalidFilename);
    }

    Ok((guesses.min(MAX_GUESSES), PathBuf::from(&args[1])))
}

fn run() -> Result<i32> {
    let mut argv = env::args();
    let program = argv.next().unwrap_or_else(|| "tui-hangman".to_string());
    let args: Vec<String> = argv.collect();

    let (guesses, word_file) = parse_args(&program, &args)?;
    info!(
        "starting with {guesses} guesses, word file {}",
        word_file.display()
    );

    let surface = Box::new(CrosstermSurface::new());
    let keyboard = Box::new(CrosstermKeyboard::new());
    let mut game = Game::new(surface, keyboard, &word_file, guesses)?;
    game.run()
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let code = match run() {
        Ok(code) => code,
        Err(err) => {
            let code = err
                .downcast_ref::<ConfigError>()
                .map(ConfigError::exit_code)
                .unwrap_or(EXIT_FAILURE);
            eprintln!("tui-hangman: {err:#}");
            code
        }
    };

    process::exit(code);
}
