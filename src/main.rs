use addon_kit::utils::error::ErrorSeverity;
use addon_kit::utils::logger;
use addon_kit::{CliConfig, SmokeRunner};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            // 日誌尚未初始化，直接輸出到 stderr
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(match e.severity() {
                ErrorSeverity::Critical => 3,
                _ => 1,
            });
        }
    };

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting addon-kit smoke run");
    tracing::debug!("Resolved config: {:?}", config);
    if config.offline {
        tracing::info!("🔌 Offline mode, network steps will be skipped");
    }

    let runner = SmokeRunner::new(config)?;
    let report = runner.run().await;

    let failed: Vec<_> = report.failed().map(|s| s.name.as_str()).collect();
    if failed.is_empty() {
        tracing::info!("✅ All {} steps finished as expected", report.steps.len());
        Ok(())
    } else {
        tracing::error!("❌ {} step(s) failed: {}", failed.len(), failed.join(", "));
        eprintln!("❌ {} step(s) failed: {}", failed.len(), failed.join(", "));
        std::process::exit(2);
    }
}
