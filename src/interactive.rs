//! Line-oriented interactive mode: one command per line until `quit` or EOF.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use crate::cli::{Command, Line};
use crate::runner::Runner;

const PROMPT: &str = "dtcalc> ";

const HELP: &str = "\
Commands:
  calc <DD-MM-YYYY> <DAYS> [--kind consecutive|business]
  diff <DD-MM-YYYY> <DD-MM-YYYY> [--report]
  until <DD-MM-YYYY>
  help
  quit | exit";

/// What a single input line asks for.
#[derive(Debug, PartialEq, Eq)]
enum Entry {
    Blank,
    Help,
    Quit,
    Run(Command),
    Invalid(String),
}

fn parse_entry(line: &str) -> Entry {
    let trimmed = line.trim();
    match trimmed {
        "" => Entry::Blank,
        "help" | "?" => Entry::Help,
        "quit" | "exit" | "q" => Entry::Quit,
        _ => match Line::try_parse_from(trimmed.split_whitespace()) {
            Ok(Line {
                command: Command::Iter,
            }) => Entry::Invalid("Already in interactive mode.".to_string()),
            Ok(parsed) => Entry::Run(parsed.command),
            Err(e) => Entry::Invalid(e.to_string().trim_end().to_string()),
        },
    }
}

/// Reads commands from `input` and writes replies to `output` until told to stop.
pub fn run<R: BufRead, W: Write>(runner: &Runner<'_>, input: R, mut output: W) -> Result<()> {
    info!("entering interactive mode");
    writeln!(output, "Interactive mode. Type 'help' for commands, 'quit' to leave.")?;
    write!(output, "{PROMPT}")?;
    output.flush()?;

    for line in input.lines() {
        let line = line.context("failed to read from stdin")?;
        match parse_entry(&line) {
            Entry::Blank => {}
            Entry::Help => writeln!(output, "{HELP}")?,
            Entry::Quit => break,
            Entry::Run(command) => match runner.execute(&command) {
                Ok(reply) => writeln!(output, "{reply}")?,
                Err(e) => writeln!(output, "Error: {e:#}")?,
            },
            Entry::Invalid(message) => {
                debug!(line = %line, "rejected input line");
                writeln!(output, "{message}")?;
            }
        }
        write!(output, "{PROMPT}")?;
        output.flush()?;
    }

    writeln!(output)?;
    info!("leaving interactive mode");
    Ok(())
}
