use anyhow::{anyhow, Result};
use clap::Command;
use clap_complete::{generate, shells};
use std::io::Write;
use std::str::FromStr;

/// Shells `weft completions` can generate scripts for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

impl Shell {
    pub const NAMES: &'static str = "bash, zsh, fish, powershell";
}

impl FromStr for Shell {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bash" => Ok(Shell::Bash),
            "zsh" => Ok(Shell::Zsh),
            "fish" => Ok(Shell::Fish),
            "powershell" | "pwsh" => Ok(Shell::PowerShell),
            _ => Err(anyhow!(
                "Unsupported shell: {s}. Supported shells: {}",
                Shell::NAMES
            )),
        }
    }
}

/// Write a completion script for `cmd` to `out`
///
/// # Example
///
/// ```
/// use clap::Command;
/// use weft::completions::{generate_completions, Shell};
///
/// let mut cmd = Command::new("weft").subcommand(Command::new("convert"));
/// let mut script = Vec::new();
/// generate_completions(&mut cmd, "bash".parse().unwrap(), &mut script);
/// assert!(String::from_utf8(script).unwrap().contains("convert"));
/// ```
pub fn generate_completions(cmd: &mut Command, shell: Shell, out: &mut dyn Write) {
    let bin_name = cmd.get_name().to_string();

    match shell {
        Shell::Bash => generate(shells::Bash, cmd, bin_name, out),
        Shell::Zsh => generate(shells::Zsh, cmd, bin_name, out),
        Shell::Fish => generate(shells::Fish, cmd, bin_name, out),
        Shell::PowerShell => generate(shells::PowerShell, cmd, bin_name, out),
    }
}
