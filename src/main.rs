//! CLI tool that scans Lox source and prints the resulting tokens.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

use lox_scanner::config::{Command, USAGE};
use lox_scanner::{StderrReporter, dump, scan, source};

// sysexits.h codes.
const EX_USAGE: u8 = 64;
const EX_DATAERR: u8 = 65;
const EX_NOINPUT: u8 = 66;

fn main() -> ExitCode {
    let command = match Command::from_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!();
            eprintln!("{USAGE}");
            return ExitCode::from(EX_USAGE);
        }
    };

    match command {
        Command::Help => {
            eprintln!("{USAGE}");
            ExitCode::SUCCESS
        }
        Command::File(path) => run_file(&path),
        Command::Repl => run_prompt(),
    }
}

fn run_file(path: &Path) -> ExitCode {
    let source = match source::read_file(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Could not read file \"{}\": {e}", path.display());
            return ExitCode::from(EX_NOINPUT);
        }
    };

    let mut reporter = StderrReporter::new();
    let tokens = scan(&source, &mut reporter);
    print!("{}", dump(&tokens, &source));

    if reporter.had_error() {
        eprintln!(
            "{}: {} lexical error(s)",
            path.display(),
            reporter.count()
        );
        ExitCode::from(EX_DATAERR)
    } else {
        ExitCode::SUCCESS
    }
}

fn run_prompt() -> ExitCode {
    println!("Welcome to the Lox scanner REPL!");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut buf = Vec::new();

    for n in 1.. {
        print!("{n}> ");
        if let Err(e) = io::stdout().flush() {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }

        match input.read_until(b'\n', &mut buf) {
            Ok(0) => {
                println!();
                break;
            }
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
        }

        // Each line is scanned on its own, with line numbers restarting at 1.
        let line = source::decode(std::mem::take(&mut buf));
        let tokens = scan(&line, &mut StderrReporter::new());
        print!("{}", dump(&tokens, &line));
    }

    ExitCode::SUCCESS
}
