use crate::core::client::Client;
use crate::core::env::get_user_from_env;
use crate::core::fetch::{fetch_text_blocking, preview, HttpFetcher};
use crate::core::quadratic::solve_quadratic;
use crate::core::sleepy::sleep_with_ticker;
use crate::core::time::get_time_and_nfl;
use crate::domain::model::{SmokeReport, StepOutcome, StepStatus};
use crate::domain::ports::{ConfigProvider, PageFetcher};
use crate::utils::error::{AddonError, Result};
use std::sync::Arc;

pub const STEP_USER: &str = "get_user_from_env";
pub const STEP_GRAB_BLOCKING: &str = "grab_virajm_site";
pub const STEP_GRAB_ASYNC: &str = "grab_virajm_site_async";
pub const STEP_TIME: &str = "get_time_and_nfl";
pub const STEP_SOLVE: &str = "solve_quadratic";
pub const STEP_SOLVE_FAIL: &str = "solve_quadratic_no_real_roots";
pub const STEP_SLEEPY: &str = "sleepy";
pub const STEP_CLIENT_VALUE: &str = "client_get_value";
pub const STEP_CLIENT_FETCH: &str = "client_get_tensorzero_website";

/// Calls every addon function once, in order, and prints each result.
pub struct SmokeRunner<C: ConfigProvider> {
    config: C,
    fetcher: Arc<dyn PageFetcher>,
}

impl<C: ConfigProvider> SmokeRunner<C> {
    pub fn new(config: C) -> Result<Self> {
        let fetcher = HttpFetcher::new(config.http_timeout())?;
        Ok(Self::with_fetcher(config, Arc::new(fetcher)))
    }

    pub fn with_fetcher(config: C, fetcher: Arc<dyn PageFetcher>) -> Self {
        Self { config, fetcher }
    }

    pub async fn run(&self) -> SmokeReport {
        let mut report = SmokeReport::default();
        let offline = self.config.offline();
        let chars = self.config.preview_chars();

        let user = get_user_from_env();
        self.record(&mut report, STEP_USER, StepStatus::Passed, user);

        if offline {
            self.skip(&mut report, STEP_GRAB_BLOCKING);
            self.skip(&mut report, STEP_GRAB_ASYNC);
        } else {
            let outcome = self.grab_blocking().await.map(|body| preview(&body, chars));
            self.record_result(&mut report, STEP_GRAB_BLOCKING, outcome);

            let outcome = self
                .fetcher
                .fetch_text(self.config.site_url())
                .await
                .map(|body| preview(&body, chars));
            self.record_result(&mut report, STEP_GRAB_ASYNC, outcome);
        }

        let outcome = serde_json::to_string(&get_time_and_nfl()).map_err(AddonError::from);
        self.record_result(&mut report, STEP_TIME, outcome);

        let outcome = solve_quadratic(self.config.solvable())
            .map(|roots| format!("root1={} root2={}", roots.root1, roots.root2));
        self.record_result(&mut report, STEP_SOLVE, outcome);

        match solve_quadratic(self.config.unsolvable()) {
            Err(e @ AddonError::NoRealRootsError { .. }) => {
                tracing::info!("Caught expected error: {}", e);
                self.record(&mut report, STEP_SOLVE_FAIL, StepStatus::ExpectedFailure, e.to_string());
            }
            Err(e) => self.record_result(&mut report, STEP_SOLVE_FAIL, Err(e)),
            Ok(roots) => self.record(
                &mut report,
                STEP_SOLVE_FAIL,
                StepStatus::Failed,
                format!("expected no real roots, got {} and {}", roots.root1, roots.root2),
            ),
        }

        let outcome = sleep_with_ticker(self.config.sleep_duration(), self.config.tick_interval())
            .await
            .and_then(|tick| {
                if tick.ticks == 0 {
                    return Err(AddonError::ValidationError {
                        message: "timer never fired while sleeping".to_string(),
                    });
                }
                Ok(format!("{} ({} ticks)", tick.message, tick.ticks))
            });
        self.record_result(&mut report, STEP_SLEEPY, outcome);

        match Client::with_fetcher(
            self.config.client_name(),
            self.config.tensorzero_url(),
            self.fetcher.clone(),
        ) {
            Ok(client) => {
                self.record(&mut report, STEP_CLIENT_VALUE, StepStatus::Passed, client.get_value());

                if offline {
                    self.skip(&mut report, STEP_CLIENT_FETCH);
                } else {
                    let outcome = client
                        .get_tensorzero_website()
                        .await
                        .map(|body| preview(&body, chars));
                    self.record_result(&mut report, STEP_CLIENT_FETCH, outcome);
                }
            }
            Err(e) => {
                self.record_result(&mut report, STEP_CLIENT_VALUE, Err(e));
                self.skip(&mut report, STEP_CLIENT_FETCH);
            }
        }

        report
    }

    async fn grab_blocking(&self) -> Result<String> {
        // reqwest 的 blocking client 不能在 runtime 執行緒上使用
        let url = self.config.site_url().to_string();
        let timeout = self.config.http_timeout();
        tokio::task::spawn_blocking(move || fetch_text_blocking(&url, timeout)).await?
    }

    fn record_result(&self, report: &mut SmokeReport, name: &str, outcome: Result<String>) {
        match outcome {
            Ok(detail) => self.record(report, name, StepStatus::Passed, detail),
            Err(e) => {
                tracing::error!("❌ {} failed: {}", name, e);
                tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
                let detail = if e.is_retryable() {
                    tracing::warn!("🔁 {} may succeed if retried", name);
                    format!("{} (retryable)", e)
                } else {
                    e.to_string()
                };
                self.record(report, name, StepStatus::Failed, detail);
            }
        }
    }

    fn skip(&self, report: &mut SmokeReport, name: &str) {
        self.record(report, name, StepStatus::Skipped, "offline".to_string());
    }

    fn record(&self, report: &mut SmokeReport, name: &str, status: StepStatus, detail: String) {
        let marker = match status {
            StepStatus::Passed => "✅",
            StepStatus::ExpectedFailure => "☑️",
            StepStatus::Skipped => "⏭️",
            StepStatus::Failed => "❌",
        };
        println!("{} {}: {}", marker, name, detail);

        report.steps.push(StepOutcome {
            name: name.to_string(),
            status,
            detail,
        });
    }
}
