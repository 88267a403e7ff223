//! Word list loading.

use std::fs;
use std::path::Path;

use crate::error::ConfigError;

/// Load the newline-delimited word list, folding every word to
/// uppercase. Blank lines are skipped; an unreadable file or an empty
/// list is a fatal configuration error.
pub fn load(path: &Path) -> Result<Vec<String>, ConfigError> {
    let contents = fs::read_to_string(path)
        .map_err(|_| ConfigError::FileMissing(path.display().to_string()))?;

    let words: Vec<String> = contents
        .lines()
        .map(|line| line.trim().to_uppercase())
        .filter(|word| !word.is_empty())
        .collect();

    if words.is_empty() {
        return Err(ConfigError::NoWords);
    }

    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(contents: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!(
            "wordlist-{}-{}.txt",
            std::process::id(),
            contents.len()
        ));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn words_are_uppercased_and_blanks_skipped() {
        let path = temp_file("apple\n\nBanana\n  cherry  \n");
        let words = load(&path).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(words, vec!["APPLE", "BANANA", "CHERRY"]);
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = load(Path::new("/no/such/wordlist.txt")).unwrap_err();
        assert!(matches!(err, ConfigError::FileMissing(_)));
    }

    #[test]
    fn empty_file_is_a_config_error() {
        let path = temp_file("\n\n  \n");
        let err = load(&path).unwrap_err();
        fs::remove_file(&path).ok();
        assert!(matches!(err, ConfigError::NoWords));
    }
}
