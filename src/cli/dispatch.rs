use anyhow::Result;
use clap::CommandFactory;
use std::io;
use std::str::FromStr;
use weft::commands::convert::ConvertRequest;
use weft::commands::{convert, detect, platforms};
use weft::completions::{generate_completions, Shell};

use super::types::{Cli, Commands};

pub fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Convert {
            template,
            targets,
            out_dir,
            strict,
            quiet,
            dry_run,
            config,
        } => convert::execute(ConvertRequest {
            template,
            targets,
            out_dir,
            strict,
            quiet,
            dry_run,
            config,
        }),
        Commands::Detect { template, json } => detect::execute(&template, json),
        Commands::Platforms => platforms::execute(),
        Commands::Completions { shell } => {
            let shell = Shell::from_str(&shell)?;
            let mut cmd = Cli::command();
            generate_completions(&mut cmd, shell, &mut io::stdout());
            Ok(())
        }
    }
}
