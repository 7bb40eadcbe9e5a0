pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::process::ProcessExecutor;
pub use config::{defaults::DefaultChecks, toml_config::TomlConfig};
pub use core::runner::CheckRunner;
pub use domain::model::{CheckCommand, CheckOutcome, RunReport};
pub use domain::ports::{CheckSource, CommandExecutor};
pub use utils::error::{Result, RunnerError};
