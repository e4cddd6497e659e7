use std::ffi::{CString, NulError};

use crate::config::{TOK_BUFSIZE, TOK_DELIM};
use crate::error::ShellError;

/// Tokens of one input line, borrowed from it.
///
/// Every token is a non-empty run of non-delimiter characters, kept in line
/// order. A trailing `&` token is not part of `args`; it only sets
/// `background`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Program<'a> {
    pub args: Vec::<&'a str>,
    pub background: bool,
}

impl<'a> Program<'a> {
    /// Splits `line` on runs of [`TOK_DELIM`] characters.
    ///
    /// The token buffer starts at [`TOK_BUFSIZE`] entries and grows by the
    /// same step whenever it fills up.
    pub fn parse(line: &'a str) -> Result::<Self, ShellError> {
        let mut args = Vec::new();
        args.try_reserve_exact(TOK_BUFSIZE).map_err(|_| ShellError::TokenAlloc)?;

        for token in line.split(TOK_DELIM).filter(|t| !t.is_empty()) {
            if args.len() >= args.capacity() {
                args.try_reserve_exact(TOK_BUFSIZE).map_err(|_| ShellError::TokenGrow)?;
            }
            args.push(token);
        }

        let background = args.last() == Some(&"&");
        if background {
            _ = args.pop();
        }

        Ok(Self { args, background })
    }

    #[inline(always)]
    pub fn name(&self) -> Option::<&'a str> {
        self.args.first().copied()
    }

    #[inline(always)]
    pub fn nth_arg(&self, n: usize) -> Option::<&'a str> {
        self.args.get(n + 1).copied()
    }

    /// NUL-terminated copies of every token, program name first.
    #[inline]
    pub fn to_argv(&self) -> Result::<Vec::<CString>, NulError> {
        self.args.iter().map(|arg| CString::new(*arg)).collect()
    }
}
