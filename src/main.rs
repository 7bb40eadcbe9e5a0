use clap::Parser;
use run_checks::utils::{logger, validation::Validate};
use run_checks::{CheckRunner, CliConfig, ProcessExecutor, RunnerError};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    let code = match run(&config).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("❌ {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            e.exit_code()
        }
    };

    std::process::exit(code);
}

async fn run(config: &CliConfig) -> Result<i32, RunnerError> {
    config.validate()?;

    let (checks, working_dir) = config.resolve()?;
    if let Some(dir) = &working_dir {
        tracing::info!("📂 Working directory: {}", dir.display());
    }

    let runner = CheckRunner::new(ProcessExecutor::new(working_dir), checks);

    if config.dry_run {
        runner.validate()?;
        tracing::info!("🔍 DRY RUN MODE - no checks will be executed");
        for line in runner.dry_run() {
            println!("{}", line);
        }
        return Ok(0);
    }

    let report = runner.run().await?;

    if config.summary {
        println!("{}", serde_json::to_string_pretty(&report.summary())?);
    }

    Ok(report.exit_code())
}
