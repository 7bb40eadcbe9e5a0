pub mod runner;

pub use crate::domain::model::{CheckCommand, CheckOutcome, RunReport};
pub use crate::domain::ports::CommandExecutor;
pub use crate::utils::error::Result;
