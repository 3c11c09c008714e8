use std::io;

use anyhow::Result;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};

use super::BiggerCli;

impl BiggerCli {
  pub fn completion(&self, CompletionArgs { shell }: &CompletionArgs) -> Result<()> {
    generate(*shell, &mut BiggerCli::command(), "bigger", &mut io::stdout());
    Ok(())
  }
}

#[derive(Debug, Args)]
pub struct CompletionArgs {
  #[arg(value_enum)]
  pub shell: Shell,
}
