mod cli;
mod config;
mod interactive;
mod logging;
mod runner;

use std::io;
use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::Settings;
use crate::runner::Runner;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    let runner = Runner::new(&settings);

    match cli.command {
        Command::Iter => interactive::run(&runner, io::stdin().lock(), io::stdout().lock()),
        command => {
            println!("{}", runner.execute(&command)?);
            Ok(())
        }
    }
}
