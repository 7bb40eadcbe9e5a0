use crate::core::CheckCommand;
use crate::domain::ports::CheckSource;
use std::path::PathBuf;

pub const DEFAULT_PACKAGE: &str = "invenio_logging";
pub const DOCS_SOURCE_DIR: &str = "docs";
pub const DOCS_OUTPUT_DIR: &str = "docs/_build/html";

/// 預設的四個檢查：docstring 風格、manifest、文件建置、測試
#[derive(Debug, Clone)]
pub struct DefaultChecks {
    package: String,
}

impl DefaultChecks {
    pub fn new(package: &str) -> Self {
        Self {
            package: package.to_string(),
        }
    }
}

impl Default for DefaultChecks {
    fn default() -> Self {
        Self::new(DEFAULT_PACKAGE)
    }
}

impl CheckSource for DefaultChecks {
    fn checks(&self) -> Vec<CheckCommand> {
        vec![
            CheckCommand::new("lint", "pydocstyle", [self.package.as_str(), "tests", "docs"]),
            CheckCommand::new("manifest", "check-manifest", Vec::<String>::new()),
            // -q 安靜輸出，-n 嚴格參照檢查，-N 不上色，-W 警告視為錯誤
            CheckCommand::new("docs", "sphinx-build", ["-qnNW", DOCS_SOURCE_DIR, DOCS_OUTPUT_DIR]),
            CheckCommand::new("tests", "python", ["setup.py", "test"]),
        ]
    }

    /// 預設檢查在目前目錄執行
    fn working_directory(&self) -> Option<PathBuf> {
        None
    }
}
