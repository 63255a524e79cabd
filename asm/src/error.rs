use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Label and the line index of its first definition.
    #[error("Duplicate label: `{0}`")]
    DuplicateLabel(String, usize),

    #[error("Invalid opcode: `{0}`")]
    InvalidOpcode(String),

    #[error("Label `{0}` is not followed by an operation")]
    MissingOperation(String),

    #[error("More argument required for `{0}`")]
    MissingArgument(String),

    #[error("Cannot parse `{0}` as register (0-7)")]
    InvalidRegister(String),

    #[error("Undefined label or invalid literal: `{0}`")]
    UndefinedSymbolOrBadLiteral(String),

    #[error("Offset out of range (-32768 to 32767): {0}")]
    OffsetOutOfRange(i64),

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),
}
