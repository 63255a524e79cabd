use std::num::ParseIntError;

/// One machine word, as stored in memory and in the persisted format.
pub type Word = i32;

/// Opcode field of a word. Negative or greater than 7 for words that are not
/// instructions.
pub fn opcode(word: Word) -> i32 {
    word >> 22
}

/// Persisted format: one decimal word per line.
pub fn to_text(words: &[Word]) -> String {
    words.iter().map(|w| format!("{w}\n")).collect()
}

/// Parse one line of the persisted format. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Result<Option<Word>, ParseIntError> {
    match line.trim() {
        "" => Ok(None),
        s => s.parse().map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_round_trip() {
        let words = [0, 65538, 25165824, -1, i32::MIN, i32::MAX];
        let text = to_text(&words);
        assert_eq!(text.lines().count(), words.len());
        let back: Vec<Word> = text
            .lines()
            .filter_map(|l| parse_line(l).unwrap())
            .collect();
        assert_eq!(back, words);
    }

    #[test]
    fn parse_line_cases() {
        assert_eq!(parse_line("  42 "), Ok(Some(42)));
        assert_eq!(parse_line("-7"), Ok(Some(-7)));
        assert_eq!(parse_line("   "), Ok(None));
        assert!(parse_line("0x10").is_err());
        assert!(parse_line("4294967296").is_err());
    }

    #[test]
    fn opcode_field() {
        assert_eq!(opcode(6 << 22), 6);
        assert_eq!(opcode(65538), 0);
        assert_eq!(opcode(-1), -1);
        assert_eq!(opcode(8 << 22), 8);
    }
}
