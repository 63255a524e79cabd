use thiserror::Error;

use crate::word::Word;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown mnemonic: `{0}`")]
    UnknownMnemonic(String),

    #[error("Unknown opcode {} in word {}", .0 >> 22, .0)]
    UnknownOpcode(Word),

    #[error("Cannot decode `{0}` as a {1}-bit field")]
    BadBits(String, u32),
}
