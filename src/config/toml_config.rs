use crate::core::CheckCommand;
use crate::domain::ports::CheckSource;
use crate::utils::error::{Result, RunnerError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub runner: RunnerConfig,
    #[serde(default)]
    pub checks: Vec<CheckCommand>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunnerConfig {
    pub working_directory: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置。相對的工作目錄以設定檔所在目錄為基準
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RunnerError::IoError)?;
        let mut config = Self::from_toml_str(&content)?;

        if let (Some(dir), Some(base)) = (&config.runner.working_directory, path.as_ref().parent()) {
            if Path::new(dir).is_relative() && !base.as_os_str().is_empty() {
                config.runner.working_directory = Some(base.join(dir).to_string_lossy().into_owned());
            }
        }

        Ok(config)
    }

    /// 從 TOML 字串解析配置。`${VAR}` 在解析後才替換，
    /// 變數值中的引號或反斜線不會影響 TOML 語法
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut config: Self =
            toml::from_str(content).map_err(|e| RunnerError::ConfigValidationError {
                field: "toml_parsing".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;

        config.substitute_env_vars()?;
        Ok(config)
    }

    /// 替換環境變數 (例如 ${PACKAGE})，找不到的變數保持原樣
    fn substitute_env_vars(&mut self) -> Result<()> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RunnerError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let expand = |value: &str| -> String {
            re.replace_all(value, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
        };

        self.runner.working_directory = self.runner.working_directory.as_deref().map(|dir| expand(dir));
        for check in &mut self.checks {
            check.name = expand(&check.name);
            check.program = expand(&check.program);
            for arg in &mut check.args {
                *arg = expand(arg);
            }
        }

        Ok(())
    }
}

impl CheckSource for TomlConfig {
    fn checks(&self) -> Vec<CheckCommand> {
        self.checks.clone()
    }

    fn working_directory(&self) -> Option<PathBuf> {
        self.runner.working_directory.as_ref().map(PathBuf::from)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(dir) = &self.runner.working_directory {
            validation::validate_path("runner.working_directory", dir)?;
        }

        validation::validate_non_empty_list("checks", &self.checks)?;
        for check in &self.checks {
            validation::validate_non_empty_string("checks.name", &check.name)?;
            validation::validate_non_empty_string(&format!("checks.{}.program", check.name), &check.program)?;
        }
        validation::validate_unique_names("checks.name", self.checks.iter().map(|c| c.name.as_str()))
    }
}
