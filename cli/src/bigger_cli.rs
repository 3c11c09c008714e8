mod add;
mod completion;
mod demo;
mod normalize;
mod repl;

use std::time::Instant;

use anyhow::Result;
use bigger_bigint::capacity;
use clap::{Parser, Subcommand};

use crate::{Capacity, Stats};

pub use add::AddArgs;
pub use completion::CompletionArgs;
pub use normalize::NormalizeArgs;

#[derive(Debug, Parser)]
#[command(
  name = "bigger",
  version,
  about = "Fixed-capacity big integer addition",
  propagate_version = true
)]
pub struct BiggerCli {
  /// Maximum size of every value, in base-10^9 words.
  #[arg(
    long,
    env = "BIGGER_CAPACITY",
    value_enum,
    default_value_t = Capacity::Standard,
    global = true
  )]
  pub capacity: Capacity,
  /// Print sizes and timing to stderr.
  #[arg(long, global = true)]
  pub stats: bool,
  #[command(subcommand)]
  pub command: BiggerCommand,
}

#[derive(Debug, Subcommand)]
pub enum BiggerCommand {
  #[command(about = "Add decimal integers and print their sum")]
  Add(AddArgs),
  #[command(about = "Print decimal integers in canonical form")]
  Normalize(NormalizeArgs),
  #[command(about = "Add the two built-in example integers, showing the working")]
  Demo,
  #[command(about = "Keep a running total of the integers entered")]
  Repl,
  #[command(about = "Print shell completions")]
  Completion(CompletionArgs),
}

impl BiggerCli {
  pub fn execute(&self) -> Result<()> {
    match self.capacity {
      Capacity::Small => self.dispatch::<{ capacity::SMALL }>(),
      Capacity::Standard => self.dispatch::<{ capacity::STANDARD }>(),
      Capacity::Large => self.dispatch::<{ capacity::LARGE }>(),
    }
  }

  fn dispatch<const MAX_WORDS: usize>(&self) -> Result<()> {
    match &self.command {
      BiggerCommand::Add(args) => self.add::<MAX_WORDS>(args),
      BiggerCommand::Normalize(args) => self.normalize::<MAX_WORDS>(args),
      BiggerCommand::Demo => self.demo::<MAX_WORDS>(),
      BiggerCommand::Repl => self.repl::<MAX_WORDS>(),
      BiggerCommand::Completion(args) => self.completion(args),
    }
  }

  fn report(&self, mut stats: Stats, start: Instant) {
    if self.stats {
      stats.time = start.elapsed();
      eprintln!("{stats}");
    }
  }
}
