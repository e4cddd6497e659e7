use std::env;

pub const LOG_ENV: &str = "MINSH_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Initial line buffer capacity, also the step it grows by.
pub const LINE_BUFSIZE: usize = 1024;
/// Initial token buffer capacity, also the step it grows by.
pub const TOK_BUFSIZE: usize = 64;

/// Space, tab, carriage return, newline and bell.
pub const TOK_DELIM: &[char] = &[' ', '\t', '\r', '\n', '\x07'];

#[derive(Clone, Debug)]
pub struct Config {
    pub log_filter: String,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
            color: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(env::var(LOG_ENV).ok(), env::var_os("NO_COLOR").is_some())
    }

    #[inline]
    fn from_vars(log_filter: Option::<String>, no_color: bool) -> Self {
        let log_filter = log_filter
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_owned());
        Self { log_filter, color: !no_color }
    }
}
