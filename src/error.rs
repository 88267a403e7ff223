//! Startup error taxonomy and process exit codes.
//!
//! Configuration errors are fatal: they are reported on stderr and the
//! process exits with the matching code before the terminal is touched.

use thiserror::Error;

pub const EXIT_OK: i32 = 0;
/// Unhandled failure inside the render/input cycle.
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_NUM_ARGS: i32 = 2;
pub const EXIT_NOT_A_NUMBER: i32 = 3;
pub const EXIT_INVALID_FILENAME: i32 = 4;
pub const EXIT_FILE_MISSING: i32 = 5;
pub const EXIT_NO_WORDS: i32 = 6;

/// A fatal configuration problem detected at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("wrong number of arguments: usage: {0} <guesses> <word file>")]
    WrongArgumentCount(String),

    #[error("number of guesses is not a number")]
    GuessesNotNumeric,

    #[error("invalid or no file name specified")]
    InvalidFilename,

    #[error("file \"{0}\" could not be opened")]
    FileMissing(String),

    #[error("the word file contains no words")]
    NoWords,
}

impl ConfigError {
    pub fn exit_code(&self) -> i32 {
        match self {
            ConfigError::WrongArgumentCount(_) => EXIT_NUM_ARGS,
            ConfigError::GuessesNotNumeric => EXIT_NOT_A_NUMBER,
            ConfigError::InvalidFilename => EXIT_INVALID_FILENAME,
            ConfigError::FileMissing(_) => EXIT_FILE_MISSING,
            ConfigError::NoWords => EXIT_NO_WORDS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_stable() {
        assert_eq!(
            ConfigError::WrongArgumentCount("hangman".into()).exit_code(),
            2
        );
        assert_eq!(ConfigError::GuessesNotNumeric.exit_code(), 3);
        assert_eq!(ConfigError::InvalidFilename.exit_code(), 4);
        assert_eq!(ConfigError::FileMissing("words.txt".into()).exit_code(), 5);
        assert_eq!(ConfigError::NoWords.exit_code(), 6);
    }

    #[test]
    fn messages_name_the_offending_file() {
        let err = ConfigError::FileMissing("words.txt".into());
        assert_eq!(err.to_string(), "file \"words.txt\" could not be opened");
    }
}
