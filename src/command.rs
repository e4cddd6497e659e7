use std::fmt::{self, Display};
use std::io::{self, Write};

use nix::errno::Errno;
use nix::sys::signal::Signal;
use nix::sys::wait::{waitpid, WaitPidFlag, WaitStatus};
use nix::unistd::{execvp, fork, ForkResult, Pid};

use crate::program::Program;

/// How a launched child ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exit {
    Exited(i32),
    Signaled(Signal),
    /// Nothing was launched (empty program, argument with a NUL byte, failed
    /// fork) or the child could not be waited for.
    Unknown,
}

impl Display for Exit {
    fn fmt(&self, f: &mut fmt::Formatter::<'_>) -> fmt::Result {
        match self {
            Self::Exited(code) => write!(f, "exited with {code}"),
            Self::Signaled(sig) => write!(f, "killed by {sig}"),
            Self::Unknown => f.write_str("status unknown")
        }
    }
}

/// Status the child reports when its program image can't be replaced.
const EXEC_FAILED: i32 = 1;

pub struct Command;

impl Command {
    /// Runs `program` in a new process and blocks until it exits or is
    /// killed. Failures to start are written to `err`; the exit status never
    /// reaches the caller's control flow.
    pub fn launch(program: &Program, err: &mut dyn Write) -> Exit {
        let Some(name) = program.name() else {
            return Exit::Unknown
        };

        let argv = match program.to_argv() {
            Ok(argv) => argv,
            Err(e) => {
                _ = writeln!(err, "minsh: {name}: {e}");
                return Exit::Unknown
            }
        };

        if program.background {
            log::warn!("background execution is not supported, running `{name}` in the foreground");
        }

        // Built before forking so the child doesn't allocate.
        let prefix = format!("minsh: {name}: ");

        match unsafe { fork() } {
            Ok(ForkResult::Child) => {
                let e = match execvp(&argv[0], &argv) {
                    Ok(never) => match never {},
                    Err(e) => e
                };
                unsafe {
                    write_stderr(prefix.as_bytes());
                    write_stderr(e.desc().as_bytes());
                    write_stderr(b"\n");
                    libc::_exit(EXEC_FAILED)
                }
            }
            Ok(ForkResult::Parent { child }) => {
                log::debug!("launched `{name}` as pid {child}");
                let exit = wait_for(child, err);
                log::debug!("pid {child} ({name}) {exit}");
                exit
            }
            Err(e) => {
                _ = writeln!(err, "minsh: {}", io::Error::from(e));
                Exit::Unknown
            }
        }
    }
}

/// Waits for `child` to exit or be killed; stopping it doesn't end the wait.
fn wait_for(child: Pid, err: &mut dyn Write) -> Exit {
    loop {
        match waitpid(child, Some(WaitPidFlag::WUNTRACED)) {
            Ok(WaitStatus::Exited(_, code)) => return Exit::Exited(code),
            Ok(WaitStatus::Signaled(_, sig, _)) => return Exit::Signaled(sig),
            Ok(status) => log::trace!("pid {child} changed state: {status:?}"),
            Err(Errno::EINTR) => continue,
            Err(e) => {
                _ = writeln!(err, "minsh: {}", io::Error::from(e));
                return Exit::Unknown
            }
        }
    }
}

#[inline(always)]
unsafe fn write_stderr(bytes: &[u8]) {
    _ = libc::write(libc::STDERR_FILENO, bytes.as_ptr().cast(), bytes.len());
}
