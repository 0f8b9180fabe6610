//! `maven-home` CLI entrypoint.
//!
//! Prints the directory of the Maven installation found on this machine, or
//! explains how to point the tool at one.

use clap::Parser;
use maven_home::cli::Cli;
use maven_home::environment::SystemEnvironment;
use maven_home::error::Result;
use maven_home::locate::{run_locate, write_stderr_line};
use std::io::Write;

fn main() {
    let cli = Cli::parse();
    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();
    let run_result = run(&cli, &mut stdout, &mut stderr);
    let exit_code = exit_code_for_run_result(run_result, &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run(cli: &Cli, stdout: &mut dyn Write, stderr: &mut dyn Write) -> Result<()> {
    let env = SystemEnvironment;
    run_locate(cli, &env, stdout, stderr)
}

fn exit_code_for_run_result(result: Result<()>, stderr: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            write_stderr_line(stderr, &err);
            err.exit_code()
        }
    }
}
