use std::io::{BufRead, ErrorKind};

use crate::config::LINE_BUFSIZE;
use crate::error::ShellError;

/// Reads one line at a time from a byte stream, byte by byte.
pub struct LineReader<R> {
    inner: R,
    eof: bool,
}

impl<R: BufRead> LineReader<R> {
    #[inline(always)]
    pub fn new(inner: R) -> Self {
        Self { inner, eof: false }
    }

    /// Whether the last `read_line` hit the end of the stream.
    #[inline(always)]
    pub fn is_eof(&self) -> bool {
        self.eof
    }

    /// Returns everything up to (excluding) the next `\n`, or up to the end of
    /// the stream. End of stream with nothing read gives an empty string.
    ///
    /// The buffer starts at [`LINE_BUFSIZE`] bytes and grows by the same step
    /// whenever it fills up.
    pub fn read_line(&mut self) -> Result::<String, ShellError> {
        let mut buffer = Vec::<u8>::new();
        buffer.try_reserve_exact(LINE_BUFSIZE).map_err(|_| ShellError::LineAlloc)?;

        loop {
            let Some(c) = self.next_byte()? else {
                self.eof = true;
                break
            };
            if c == b'\n' {
                break
            }

            if buffer.len() >= buffer.capacity() {
                buffer.try_reserve_exact(LINE_BUFSIZE).map_err(|_| ShellError::LineGrow)?;
            }
            buffer.push(c);
        }

        Ok(match String::from_utf8(buffer) {
            Ok(line) => line,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned()
        })
    }

    fn next_byte(&mut self) -> Result::<Option::<u8>, ShellError> {
        loop {
            let available = match self.inner.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into())
            };
            let Some(&c) = available.first() else {
                return Ok(None)
            };
            self.inner.consume(1);
            return Ok(Some(c))
        }
    }
}
