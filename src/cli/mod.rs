//! Command-line interface: `bank-api serve` and `bank-api migrate`.

pub mod args;

pub use args::{Cli, Commands};
