use anyhow::Result;

use super::{AddArgs, BiggerCli};

const DEMO_OPERANDS: [&str; 2] = [
  "1234567890123456712312389012345678901234567890",
  "9876543210987654321123123098765432109876543210",
];

impl BiggerCli {
  pub fn demo<const MAX_WORDS: usize>(&self) -> Result<()> {
    let values = DEMO_OPERANDS.map(String::from).to_vec();
    self.add::<MAX_WORDS>(&AddArgs { verbose: true, values })
  }
}
