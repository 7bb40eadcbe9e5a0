use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 一個要執行的外部檢查指令
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckCommand {
    pub name: String,
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl CheckCommand {
    pub fn new<I, S>(name: &str, program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.to_string(),
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// 以 shell 的樣子顯示指令，用於日誌
    pub fn display(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}

/// 單一指令的執行結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub name: String,
    pub exit_code: i32,
    pub duration: Duration,
}

impl CheckOutcome {
    pub fn succeeded(&self) -> bool {
        self.exit_code == 0
    }
}

/// 一次完整執行的報告。`outcomes` 只包含實際執行過的指令
#[derive(Debug, Clone)]
pub struct RunReport {
    pub outcomes: Vec<CheckOutcome>,
    pub started_at: DateTime<Utc>,
    pub total_checks: usize,
}

impl RunReport {
    pub fn new(total_checks: usize) -> Self {
        Self {
            outcomes: Vec::new(),
            started_at: Utc::now(),
            total_checks,
        }
    }

    /// 第一個失敗的指令；runner 在失敗後立即停止，所以它一定是最後一筆
    pub fn failed(&self) -> Option<&CheckOutcome> {
        self.outcomes.last().filter(|outcome| !outcome.succeeded())
    }

    pub fn passed(&self) -> bool {
        self.failed().is_none() && self.outcomes.len() == self.total_checks
    }

    pub fn exit_code(&self) -> i32 {
        self.failed().map(|outcome| outcome.exit_code).unwrap_or(0)
    }

    pub fn total_duration(&self) -> Duration {
        self.outcomes.iter().map(|o| o.duration).sum()
    }

    /// 取得執行摘要
    pub fn summary(&self) -> serde_json::Value {
        let executed: Vec<&str> = self.outcomes.iter().map(|o| o.name.as_str()).collect();

        serde_json::json!({
            "started_at": self.started_at.to_rfc3339(),
            "total_checks": self.total_checks,
            "executed_checks": executed,
            "total_duration_ms": self.total_duration().as_millis() as u64,
            "failed_check": self.failed().map(|o| o.name.clone()),
            "exit_code": self.exit_code(),
        })
    }
}
