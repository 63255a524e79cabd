//! Two-pass assembler for SC32.
//!
//! Pass 1 ([`Labels::collect`]) walks the source once and binds every label to
//! the address of its line. Pass 2 ([`encode`]) walks it again, resolves
//! operands against that table and emits one word per non-blank line. The
//! first error aborts the whole assembly and is returned together with the
//! index of the offending line.

pub mod error;
pub mod label;
pub mod msg;
pub mod parser;
pub mod util;

use arch::Word;

pub use error::Error;
pub use label::Labels;
pub use parser::Line;

/// Pass 2.
pub fn encode<S: AsRef<str>>(lines: &[S], labels: &Labels) -> Result<Vec<Word>, (usize, Error)> {
    let mut words = vec![];
    for (idx, raw) in lines.iter().enumerate() {
        let Some(line) = Line::parse(raw.as_ref()) else {
            continue;
        };
        let word = line
            .stmt()
            .and_then(|stmt| stmt.resolve(labels, words.len()))
            .map_err(|err| (idx, err))?;
        words.push(word);
    }
    Ok(words)
}

pub fn assemble<S: AsRef<str>>(lines: &[S]) -> Result<Vec<Word>, (usize, Error)> {
    let labels = Labels::collect(lines)?;
    encode(lines, &labels)
}
