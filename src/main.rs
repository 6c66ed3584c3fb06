use anyhow::Result;
use colored::*;
use std::io::IsTerminal;

use blinky::cli::build_cli;
use blinky::commands;

fn main() {
    blinky::init_logging();

    if let Err(e) = run() {
        eprintln!("{} {:#}", "✗ Error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut cli = build_cli();
    let matches = cli.clone().get_matches();

    if let Some(shell) = matches.get_one::<String>("completions") {
        return commands::completions(shell, &mut cli);
    }

    // Colors only make sense on a terminal
    if matches.get_flag("no-color") || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    commands::watch(&matches)
}
