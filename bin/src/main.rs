use std::{
    io::{stdin, stdout, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser as _;

use interpreter::Interpreter;
use parser::Parser;
use report::Diagnostics;
use scanner::Scanner;

#[derive(clap::Parser)]
struct Args {
    file: Option<PathBuf>,
}

// sysexits.h
const STATIC_ERROR: u8 = 65;
const RUNTIME_ERROR: u8 = 70;

fn run_file(path: PathBuf) -> anyhow::Result<ExitCode> {
    Ok(run(&std::fs::read_to_string(path)?))
}

fn run_prompt() -> anyhow::Result<ExitCode> {
    loop {
        print!("> ");
        stdout().flush()?;
        let mut line = String::new();
        if stdin().read_line(&mut line)? == 0 {
            return Ok(ExitCode::SUCCESS);
        }
        // The prompt keeps going whatever the line did
        let _ = run(&line);
    }
}

/// Runs a source through the whole pipeline, diagnostics to stderr and
/// program output to stdout. Nothing is evaluated unless the source
/// scanned and parsed cleanly.
fn run(source: &str) -> ExitCode {
    let mut diagnostics = Diagnostics::default();
    let tokens = Scanner::new(source).scan_tokens(&mut diagnostics);
    let statements = Parser::new(&tokens, &mut diagnostics).parse();
    if !diagnostics.is_empty() {
        eprintln!("{}", diagnostics);
        return ExitCode::from(STATIC_ERROR);
    }

    match Interpreter::new(&mut stdout()).run(&statements, &mut diagnostics) {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => {
            eprintln!("{}", diagnostics);
            ExitCode::from(RUNTIME_ERROR)
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();
    let args = Args::parse();

    match args.file {
        Some(file) => run_file(file),
        None => run_prompt(),
    }
}
