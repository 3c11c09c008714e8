mod bigger_cli;
mod common;
mod stats;

pub use bigger_cli::*;
pub use common::*;
pub use stats::*;
