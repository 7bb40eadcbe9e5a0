use crate::core::{CheckCommand, CheckOutcome, CommandExecutor, RunReport};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::time::Instant;

/// 依序執行檢查指令，遇到第一個失敗就停止
pub struct CheckRunner<E: CommandExecutor> {
    executor: E,
    commands: Vec<CheckCommand>,
}

impl<E: CommandExecutor> CheckRunner<E> {
    pub fn new(executor: E, commands: Vec<CheckCommand>) -> Self {
        Self { executor, commands }
    }

    /// 執行所有指令。非零結束碼不是 `Err`，而是記錄在報告中；
    /// 只有執行器本身的錯誤（例如無法啟動程式）才會回傳 `Err`
    pub async fn run(&self) -> Result<RunReport> {
        self.validate()?;

        let mut report = RunReport::new(self.commands.len());
        tracing::info!("🚀 Running {} checks", self.commands.len());

        for (index, command) in self.commands.iter().enumerate() {
            tracing::info!(
                "▶️ [{}/{}] {}: {}",
                index + 1,
                self.commands.len(),
                command.name,
                command.display()
            );

            let start_time = Instant::now();
            let exit_code = self.executor.execute(command).await?;
            let outcome = CheckOutcome {
                name: command.name.clone(),
                exit_code,
                duration: start_time.elapsed(),
            };

            if outcome.succeeded() {
                tracing::info!("✅ {} passed ({:?})", outcome.name, outcome.duration);
                report.outcomes.push(outcome);
                continue;
            }

            tracing::error!(
                "❌ {} failed with exit code {} ({:?})",
                outcome.name,
                outcome.exit_code,
                outcome.duration
            );
            let skipped = self.commands.len() - index - 1;
            if skipped > 0 {
                tracing::debug!("⏭️ Skipping {} remaining checks", skipped);
            }
            report.outcomes.push(outcome);
            return Ok(report);
        }

        tracing::info!(
            "✅ All {} checks passed ({:?})",
            report.outcomes.len(),
            report.total_duration()
        );
        Ok(report)
    }

    /// 只列出將會執行的指令，不呼叫執行器
    pub fn dry_run(&self) -> Vec<String> {
        self.commands
            .iter()
            .enumerate()
            .map(|(index, command)| format!("{}. {}: {}", index + 1, command.name, command.display()))
            .collect()
    }
}

impl<E: CommandExecutor> Validate for CheckRunner<E> {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_list("checks", &self.commands)?;
        for command in &self.commands {
            validation::validate_non_empty_string("checks.name", &command.name)?;
            validation::validate_non_empty_string(
                &format!("checks.{}.program", command.name),
                &command.program,
            )?;
        }
        validation::validate_unique_names(
            "checks.name",
            self.commands.iter().map(|c| c.name.as_str()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::RunnerError;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    /// 依程式名稱回傳預設結束碼，並記錄每次呼叫
    #[derive(Clone, Default)]
    struct MockExecutor {
        exit_codes: HashMap<String, i32>,
        invocations: Arc<Mutex<Vec<String>>>,
    }

    impl MockExecutor {
        fn new() -> Self {
            Self::default()
        }

        fn with_exit_code(mut self, program: &str, code: i32) -> Self {
            self.exit_codes.insert(program.to_string(), code);
            self
        }

        fn invocations(&self) -> Vec<String> {
            self.invocations.lock().unwrap().clone()
        }

        fn count(&self, program: &str) -> usize {
            self.invocations().iter().filter(|p| *p == program).count()
        }
    }

    #[async_trait::async_trait]
    impl CommandExecutor for MockExecutor {
        async fn execute(&self, command: &CheckCommand) -> Result<i32> {
            self.invocations.lock().unwrap().push(command.program.clone());
            if command.program == "missing-tool" {
                return Err(RunnerError::SpawnError {
                    command: command.display(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
                });
            }
            Ok(self.exit_codes.get(&command.program).copied().unwrap_or(0))
        }
    }

    fn four_checks() -> Vec<CheckCommand> {
        vec![
            CheckCommand::new("lint", "pydocstyle", ["invenio_logging"]),
            CheckCommand::new("manifest", "check-manifest", Vec::<String>::new()),
            CheckCommand::new("docs", "sphinx-build", ["-qnNW", "docs", "docs/_build/html"]),
            CheckCommand::new("tests", "python", ["setup.py", "test"]),
        ]
    }

    #[tokio::test]
    async fn test_all_checks_pass() {
        let executor = MockExecutor::new();
        let runner = CheckRunner::new(executor.clone(), four_checks());

        let report = runner.run().await.unwrap();

        assert!(report.passed());
        assert_eq!(report.exit_code(), 0);
        assert_eq!(report.outcomes.len(), 4);
        assert_eq!(
            executor.invocations(),
            vec!["pydocstyle", "check-manifest", "sphinx-build", "python"]
        );
    }

    #[tokio::test]
    async fn test_lint_failure_stops_everything_after_it() {
        let executor = MockExecutor::new().with_exit_code("pydocstyle", 1);
        let runner = CheckRunner::new(executor.clone(), four_checks());

        let report = runner.run().await.unwrap();

        assert_eq!(report.exit_code(), 1);
        assert_eq!(report.failed().unwrap().name, "lint");
        assert_eq!(executor.count("pydocstyle"), 1);
        assert_eq!(executor.count("check-manifest"), 0);
        assert_eq!(executor.count("sphinx-build"), 0);
        assert_eq!(executor.count("python"), 0);
    }

    #[tokio::test]
    async fn test_docs_failure_propagates_its_exit_code() {
        let executor = MockExecutor::new().with_exit_code("sphinx-build", 2);
        let runner = CheckRunner::new(executor.clone(), four_checks());

        let report = runner.run().await.unwrap();

        assert_eq!(report.exit_code(), 2);
        assert_eq!(executor.count("pydocstyle"), 1);
        assert_eq!(executor.count("check-manifest"), 1);
        assert_eq!(executor.count("sphinx-build"), 1);
        assert_eq!(executor.count("python"), 0);

        let executed: Vec<&str> = report.outcomes.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(executed, vec!["lint", "manifest", "docs"]);
    }

    #[tokio::test]
    async fn test_failure_at_each_position() {
        let programs = ["pydocstyle", "check-manifest", "sphinx-build", "python"];

        for (k, failing) in programs.iter().enumerate() {
            let code = 10 + k as i32;
            let executor = MockExecutor::new().with_exit_code(failing, code);
            let runner = CheckRunner::new(executor.clone(), four_checks());

            let report = runner.run().await.unwrap();

            assert_eq!(report.exit_code(), code);
            assert_eq!(executor.invocations(), programs[..=k].to_vec());
        }
    }

    #[tokio::test]
    async fn test_spawn_error_stops_the_run() {
        let executor = MockExecutor::new();
        let checks = vec![
            CheckCommand::new("lint", "missing-tool", Vec::<String>::new()),
            CheckCommand::new("tests", "python", ["setup.py", "test"]),
        ];
        let runner = CheckRunner::new(executor.clone(), checks);

        let err = runner.run().await.unwrap_err();

        assert_eq!(err.exit_code(), 127);
        assert_eq!(executor.count("python"), 0);
    }

    #[tokio::test]
    async fn test_empty_check_list_is_rejected() {
        let executor = MockExecutor::new();
        let runner = CheckRunner::new(executor.clone(), Vec::new());

        assert!(runner.run().await.is_err());
        assert!(executor.invocations().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_names_are_rejected() {
        let executor = MockExecutor::new();
        let checks = vec![
            CheckCommand::new("lint", "pydocstyle", Vec::<String>::new()),
            CheckCommand::new("lint", "flake8", Vec::<String>::new()),
        ];
        let runner = CheckRunner::new(executor.clone(), checks);

        assert!(runner.run().await.is_err());
        assert!(executor.invocations().is_empty());
    }

    #[test]
    fn test_dry_run_does_not_execute() {
        let executor = MockExecutor::new();
        let runner = CheckRunner::new(executor.clone(), four_checks());

        let plan = runner.dry_run();

        assert_eq!(plan.len(), 4);
        assert_eq!(plan[0], "1. lint: pydocstyle invenio_logging");
        assert_eq!(plan[2], "3. docs: sphinx-build -qnNW docs docs/_build/html");
        assert!(executor.invocations().is_empty());
    }
}
