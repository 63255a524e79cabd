//! SC32: an 8-opcode, 32-bit-word register machine.
//!
//! This crate holds everything the assembler and the emulator agree on: the
//! mnemonic table, the register file size, the bit layout of each instruction
//! shape and the text format machine code is persisted in.

pub mod bits;
pub mod error;
pub mod inst;
pub mod op;
pub mod reg;
pub mod word;

pub use error::Error;
pub use word::Word;
