use std::io;

use thiserror::Error;

/// Failures that end the interpreter.
///
/// User mistakes (bad `cd` target, unknown program) are never represented
/// here: those are reported on stderr and the loop keeps going.
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Memory allocation failed")]
    LineAlloc,
    #[error("Reallocation failed")]
    LineGrow,
    #[error("Allocation failed")]
    TokenAlloc,
    #[error("tokens realloc failed")]
    TokenGrow,
    #[error("could not read input: {0}")]
    Io(#[from] io::Error),
}

impl ShellError {
    /// Process exit code reported for this failure.
    #[inline]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::LineAlloc | Self::Io(_) => 1,
            Self::LineGrow  => 2,
            Self::TokenAlloc => 3,
            Self::TokenGrow => 4,
        }
    }
}
