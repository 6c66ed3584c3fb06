use anyhow::{bail, Result};
use clap::Command;
use clap_complete::{generate, Shell};
use std::io::{self, Write};

/// Print shell completions for `shell` to stdout
pub fn execute(shell: &str, cli: &mut Command) -> Result<()> {
    write_completions(shell, cli, &mut io::stdout())
}

pub fn write_completions(shell: &str, cli: &mut Command, out: &mut dyn Write) -> Result<()> {
    let shell = match shell.to_lowercase().as_str() {
        "bash" => Shell::Bash,
        "zsh" => Shell::Zsh,
        "fish" => Shell::Fish,
        "powershell" => Shell::PowerShell,
        "elvish" => Shell::Elvish,
        other => bail!(
            "Unsupported shell: {} (supported: bash, zsh, fish, powershell, elvish)",
            other
        ),
    };

    generate(shell, cli, "blinky", out);
    Ok(())
}
