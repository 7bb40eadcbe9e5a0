use crate::domain::model::CheckCommand;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// 執行單一指令直到結束，回傳其結束碼
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    async fn execute(&self, command: &CheckCommand) -> Result<i32>;
}

/// 提供要執行的指令清單與工作目錄
pub trait CheckSource {
    fn checks(&self) -> Vec<CheckCommand>;
    fn working_directory(&self) -> Option<PathBuf>;
}
