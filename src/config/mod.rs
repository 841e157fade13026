//! Runtime configuration.
//!
//! `Config` is read from the environment once at startup; `constants`
//! holds the defaults and fixed protocol values.

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
