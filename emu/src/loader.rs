use arch::{word, Word};

use crate::{error::Error, model::State};

/// Parse the persisted format. Blank lines are skipped silently, malformed
/// lines are skipped and reported.
pub fn parse(text: &str) -> (Vec<Word>, Vec<Error>) {
    let mut words = vec![];
    let mut errors = vec![];
    for (idx, line) in text.lines().enumerate() {
        match word::parse_line(line) {
            Ok(Some(word)) => words.push(word),
            Ok(None) => {}
            Err(err) => errors.push(Error::ParseWord(idx, line.trim().to_string(), err)),
        }
    }
    (words, errors)
}

/// Parse `text` into `state`. Every returned error is a warning: whatever
/// could be loaded has been.
pub fn load(state: &mut State, text: &str) -> Vec<Error> {
    let (words, mut errors) = parse(text);
    let discarded = state.load(&words);
    if discarded > 0 {
        errors.push(Error::MemoryOverflow(discarded, state.memory().len()));
    }
    errors
}

pub fn read(path: &str) -> Result<String, Error> {
    std::fs::read_to_string(path).map_err(|err| Error::FileOpen(path.to_string(), err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_words() {
        let (words, errors) = parse("65538\n25165824\n\n-1\n");
        assert_eq!(words, vec![65538, 25165824, -1]);
        assert!(errors.is_empty());
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let (words, errors) = parse("1\nabc\n2\n3.0\n  4  ");
        assert_eq!(words, vec![1, 2, 4]);
        assert_eq!(errors.len(), 2);
        assert!(matches!(&errors[0], Error::ParseWord(1, text, _) if text == "abc"));
        assert!(matches!(&errors[1], Error::ParseWord(3, text, _) if text == "3.0"));
        assert_eq!(errors[0].to_string(), "Invalid number format at line 2: `abc`");
    }

    #[test]
    fn overflow_is_a_warning() {
        let mut state = State::new(2);
        let errors = load(&mut state, "7\n8\n9\nx\n10\n");
        assert_eq!(state.memory(), &[7, 8]);
        assert_eq!(state.loaded(), 2);
        assert_eq!(errors.len(), 2);
        assert!(matches!(errors[0], Error::ParseWord(3, _, _)));
        assert!(matches!(errors[1], Error::MemoryOverflow(2, 2)));
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            read("/nonexistent/sc32/main.mc"),
            Err(Error::FileOpen(path, _)) if path == "/nonexistent/sc32/main.mc"
        ));
    }
}
