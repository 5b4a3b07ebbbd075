use clap::Parser;
use doc_convert_smoke::utils::{logger, validation::Validate};
use doc_convert_smoke::{
    CliConfig, ConfigProvider, LocalStorage, PlanConfig, Result, SmokeRunner, UploadOutcome,
};
use std::path::Path;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting convert-smoke");
    if config.verbose {
        tracing::debug!(
            "docs_dir={}, output_path={}",
            config.docs_dir.display(),
            config.output_path
        );
    }

    let result = match &config.plan {
        Some(path) => match load_plan(path, &config) {
            Ok(plan) => execute(plan).await,
            Err(e) => Err(e),
        },
        None => execute(config.clone()).await,
    };

    match result {
        Ok(outcomes) => {
            tracing::info!("✅ All {} uploads completed", outcomes.len());
            for outcome in &outcomes {
                eprintln!(
                    "  - {}: HTTP {} {} -> {} ({} bytes, {:?})",
                    outcome.job,
                    outcome.status,
                    outcome.content_type.as_deref().unwrap_or("-"),
                    outcome.output_path.display(),
                    outcome.bytes_written,
                    outcome.duration
                );
            }
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Smoke test failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            std::process::exit(e.severity().exit_code());
        }
    }
}

fn load_plan(path: &Path, cli: &CliConfig) -> Result<PlanConfig> {
    tracing::info!("📋 Loading plan from {}", path.display());
    let mut plan = PlanConfig::from_file(path)?;
    plan.merge_cli(cli);
    Ok(plan)
}

async fn execute<C: ConfigProvider + Validate>(config: C) -> Result<Vec<UploadOutcome>> {
    config.validate()?;

    tracing::info!(
        "🎯 Target {} ({} uploads, output in {})",
        config.base_url(),
        config.jobs().len(),
        config.output_path()
    );

    let storage = LocalStorage::new(config.output_path().to_string());
    let runner = SmokeRunner::new(storage, config)?;
    runner.run().await
}
