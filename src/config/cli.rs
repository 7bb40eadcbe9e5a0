use crate::config::defaults::{DefaultChecks, DEFAULT_PACKAGE};
use crate::config::toml_config::TomlConfig;
use crate::core::CheckCommand;
use crate::domain::ports::CheckSource;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "run-checks")]
#[command(about = "Run lint, manifest, docs and test checks in order, stopping at the first failure")]
pub struct CliConfig {
    /// TOML file with [[checks]] entries replacing the default checks
    #[arg(short, long)]
    pub config: Option<String>,

    /// Package passed to the docstring checker
    #[arg(long, default_value = DEFAULT_PACKAGE)]
    pub package: String,

    /// Directory the checks run in (overrides runner.working_directory)
    #[arg(long)]
    pub workdir: Option<String>,

    /// List the checks without running them
    #[arg(long)]
    pub dry_run: bool,

    /// Print a JSON run summary after the checks finish
    #[arg(long)]
    pub summary: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 決定要執行的指令與工作目錄：有設定檔就用設定檔，否則用預設的四個檢查
    pub fn resolve(&self) -> Result<(Vec<CheckCommand>, Option<PathBuf>)> {
        let (checks, config_dir) = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading checks from: {}", path);
                let config = TomlConfig::from_file(path)?;
                config.validate()?;
                (config.checks(), config.working_directory())
            }
            None => {
                let defaults = DefaultChecks::new(&self.package);
                (defaults.checks(), defaults.working_directory())
            }
        };

        let working_dir = self.workdir.as_ref().map(PathBuf::from).or(config_dir);
        Ok((checks, working_dir))
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("package", &self.package)?;
        if let Some(path) = &self.config {
            validation::validate_path("config", path)?;
        }
        if let Some(dir) = &self.workdir {
            validation::validate_path("workdir", dir)?;
        }
        Ok(())
    }
}
