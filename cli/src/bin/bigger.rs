use std::process::exit;

use bigger_cli::BiggerCli;
use clap::Parser;

fn main() {
  if let Err(err) = BiggerCli::parse().execute() {
    eprintln!("error: {err:#}");
    exit(1);
  }
}
