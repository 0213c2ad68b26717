//! Configuration management for clap
//!
//! Settings are layered with figment: the embedded defaults, then an
//! optional file passed with `--config`, then the command line. No
//! environment variables and no discovered config files take part.

mod core;

pub use self::core::{ClapConfig, ConfigOverrides};

#[cfg(test)]
mod tests;
