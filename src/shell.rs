use std::io::{BufRead, Write};

use crate::builtin::{self, Io, Status};
use crate::command::Command;
use crate::env::Env;
use crate::error::ShellError;
use crate::program::Program;
use crate::reader::LineReader;

/// Runs a built-in if the first token names one, otherwise launches it.
pub fn execute(program: &Program, env: &mut Env, io: &mut Io) -> Status {
    let Some(name) = program.name() else {
        return Status::Continue
    };

    if let Some(builtin) = builtin::lookup(name) {
        log::debug!("built-in `{name}`");
        return (builtin.run)(program, env, io)
    }

    _ = io.out.flush();
    let exit = Command::launch(program, io.err);
    log::debug!("`{name}` {exit}");
    Status::Continue
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Running,
    Terminated,
}

pub struct Shell<R, W, E> {
    pub env: Env,
    reader: LineReader<R>,
    out: W,
    err: E,
}

impl<R: BufRead, W: Write, E: Write> Shell<R, W, E> {
    pub fn new(env: Env, input: R, out: W, err: E) -> Self {
        Self { env, reader: LineReader::new(input), out, err }
    }

    /// Prompt, read, tokenize, dispatch; until `exit` or end of input.
    ///
    /// The line read at end of input is dispatched like any other, then the
    /// loop stops instead of prompting again on an exhausted stream.
    pub fn run(&mut self) -> Result::<(), ShellError> {
        let mut state = State::Running;
        while state == State::Running {
            state = self.step()?;
        }
        Ok(())
    }

    fn step(&mut self) -> Result::<State, ShellError> {
        _ = write!(self.out, "{}", self.env.prompt());
        _ = self.out.flush();

        let line = self.reader.read_line()?;
        let program = Program::parse(&line)?;

        let mut io = Io { out: &mut self.out, err: &mut self.err };
        let status = execute(&program, &mut self.env, &mut io);
        _ = self.out.flush();

        Ok(match status {
            Status::Exit => State::Terminated,
            Status::Continue if self.reader.is_eof() => {
                log::debug!("end of input");
                State::Terminated
            }
            Status::Continue => State::Running
        })
    }
}
