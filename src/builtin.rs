use std::io::Write;
use std::path::Path;

use crate::env::Env;
use crate::program::Program;

/// What the loop does after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Continue,
    Exit,
}

/// Streams built-ins and the launcher report to.
pub struct Io<'a> {
    pub out: &'a mut dyn Write,
    pub err: &'a mut dyn Write,
}

pub type Handler = fn(&Program, &mut Env, &mut Io) -> Status;

pub struct Builtin {
    pub name: &'static str,
    pub run: Handler,
}

/// Scanned in order; names are unique.
pub static BUILTINS: &[Builtin] = &[
    Builtin { name: "cd",   run: cd },
    Builtin { name: "help", run: help },
    Builtin { name: "exit", run: exit },
    Builtin { name: "cls",  run: cls },
];

/// Exact, case-sensitive lookup.
#[inline]
pub fn lookup(name: &str) -> Option::<&'static Builtin> {
    BUILTINS.iter().find(|b| b.name == name)
}

fn cd(program: &Program, env: &mut Env, io: &mut Io) -> Status {
    let Some(dir) = program.nth_arg(0) else {
        _ = writeln!(io.err, "minsh: expected argument to \"cd\"");
        return Status::Continue
    };
    if let Err(e) = env.cwd.change(Path::new(dir)) {
        _ = writeln!(io.err, "minsh: cd: {dir}: {e}");
    }
    Status::Continue
}

fn help(_: &Program, _: &mut Env, io: &mut Io) -> Status {
    _ = writeln!(io.out, "minsh, a minimal command interpreter.");
    _ = writeln!(io.out, "Type program names and arguments, and hit enter.");
    _ = writeln!(io.out, "The following are built in:");
    for builtin in BUILTINS {
        _ = writeln!(io.out, "    {}", builtin.name);
    }
    _ = writeln!(io.out, "Use the man command for information on other programs.");
    Status::Continue
}

#[inline(always)]
fn exit(_: &Program, _: &mut Env, _: &mut Io) -> Status {
    Status::Exit
}

fn cls(_: &Program, _: &mut Env, io: &mut Io) -> Status {
    _ = write!(io.out, "\x1bc");
    _ = io.out.flush();
    Status::Continue
}
