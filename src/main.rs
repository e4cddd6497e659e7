use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;

mod env;
mod error;
mod shell;
mod config;
mod reader;
mod program;
mod builtin;
mod command;

use env::{Env, ProcessDir};
use shell::Shell;
use config::Config;

fn main() -> anyhow::Result::<ExitCode> {
    let config = Config::from_env();
    env_logger::Builder::new()
        .parse_filters(&config.log_filter)
        .init();

    let env = Env::new(Box::new(ProcessDir), config.color);
    let mut shell = Shell::new(env, io::stdin().lock(), io::stdout(), io::stderr());

    let code = match shell.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("interpreter aborted: {e:?}");
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    };

    io::stdout().flush().context("could not flush stdout")?;
    Ok(code)
}
