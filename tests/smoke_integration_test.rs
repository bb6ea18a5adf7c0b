use addon_kit::core::smoke::{
    STEP_CLIENT_FETCH, STEP_CLIENT_VALUE, STEP_GRAB_ASYNC, STEP_GRAB_BLOCKING, STEP_SLEEPY,
    STEP_SOLVE, STEP_SOLVE_FAIL, STEP_TIME, STEP_USER,
};
use addon_kit::{AddonConfig, CliConfig, SmokeRunner, StepStatus};
use anyhow::Result;
use httpmock::prelude::*;
use std::time::Duration;
use tempfile::TempDir;

fn fast_config() -> AddonConfig {
    AddonConfig {
        sleep_duration: Duration::from_millis(200),
        tick_interval: Duration::from_millis(20),
        http_timeout: Duration::from_secs(5),
        ..AddonConfig::default()
    }
}

#[tokio::test]
async fn test_offline_run_skips_network_steps() -> Result<()> {
    let config = AddonConfig {
        offline: true,
        ..fast_config()
    };

    let report = SmokeRunner::new(config)?.run().await;

    assert!(report.is_success());
    assert_eq!(report.steps.len(), 9);
    for name in [STEP_GRAB_BLOCKING, STEP_GRAB_ASYNC, STEP_CLIENT_FETCH] {
        assert_eq!(report.step(name).unwrap().status, StepStatus::Skipped);
    }
    assert_eq!(report.step(STEP_USER).unwrap().status, StepStatus::Passed);
    assert_eq!(report.step(STEP_TIME).unwrap().status, StepStatus::Passed);
    assert_eq!(report.step(STEP_SOLVE).unwrap().status, StepStatus::Passed);
    assert_eq!(
        report.step(STEP_SOLVE_FAIL).unwrap().status,
        StepStatus::ExpectedFailure
    );
    assert!(report.step(STEP_SOLVE_FAIL).unwrap().detail.contains("No real roots"));
    assert_eq!(report.step(STEP_CLIENT_VALUE).unwrap().detail, "hello");

    let sleepy = report.step(STEP_SLEEPY).unwrap();
    assert_eq!(sleepy.status, StepStatus::Passed);
    assert!(sleepy.detail.starts_with("Slept for 200 ms"));

    Ok(())
}

#[tokio::test]
async fn test_full_run_against_mock_server() -> Result<()> {
    let server = MockServer::start_async().await;
    let site = server
        .mock_async(|when, then| {
            when.method(GET).path("/site");
            then.status(200).body("x".repeat(500));
        })
        .await;
    let tensorzero = server
        .mock_async(|when, then| {
            when.method(GET).path("/tz");
            then.status(200).body("tensorzero home");
        })
        .await;

    let config = AddonConfig {
        site_url: server.url("/site"),
        tensorzero_url: server.url("/tz"),
        preview_chars: 10,
        ..fast_config()
    };

    let report = SmokeRunner::new(config)?.run().await;

    assert!(report.is_success(), "failed steps: {:?}", report.failed().collect::<Vec<_>>());
    site.assert_hits_async(2).await;
    tensorzero.assert_async().await;

    assert_eq!(report.step(STEP_GRAB_BLOCKING).unwrap().detail, "xxxxxxxxxx…");
    assert_eq!(report.step(STEP_GRAB_ASYNC).unwrap().detail, "xxxxxxxxxx…");
    assert_eq!(report.step(STEP_CLIENT_FETCH).unwrap().detail, "tensorzero…");

    Ok(())
}

#[tokio::test]
async fn test_network_failure_does_not_abort_run() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/site");
            then.status(500);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/tz");
            then.status(200).body("ok");
        })
        .await;

    let config = AddonConfig {
        site_url: server.url("/site"),
        tensorzero_url: server.url("/tz"),
        ..fast_config()
    };

    let report = SmokeRunner::new(config)?.run().await;

    assert!(!report.is_success());
    let failed: Vec<&str> = report.failed().map(|s| s.name.as_str()).collect();
    assert_eq!(failed, vec![STEP_GRAB_BLOCKING, STEP_GRAB_ASYNC]);
    for name in [STEP_GRAB_BLOCKING, STEP_GRAB_ASYNC] {
        let detail = &report.step(name).unwrap().detail;
        assert!(detail.contains("HTTP 500"), "{}", detail);
        assert!(detail.ends_with("(retryable)"), "{}", detail);
    }
    assert_eq!(report.step(STEP_CLIENT_FETCH).unwrap().status, StepStatus::Passed);

    Ok(())
}

#[tokio::test]
async fn test_client_error_is_not_marked_retryable() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/site");
            then.status(200).body("ok");
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/tz");
            then.status(404);
        })
        .await;

    let config = AddonConfig {
        site_url: server.url("/site"),
        tensorzero_url: server.url("/tz"),
        ..fast_config()
    };

    let report = SmokeRunner::new(config)?.run().await;

    let step = report.step(STEP_CLIENT_FETCH).unwrap();
    assert_eq!(step.status, StepStatus::Failed);
    assert!(step.detail.contains("HTTP 404"));
    assert!(!step.detail.contains("retryable"));

    Ok(())
}

#[tokio::test]
async fn test_solvable_unsolvable_swap_is_reported() -> Result<()> {
    let config = AddonConfig {
        offline: true,
        unsolvable: addon_kit::Coefficients::new(1.0, -3.0, 2.0),
        ..fast_config()
    };

    let report = SmokeRunner::new(config)?.run().await;

    let step = report.step(STEP_SOLVE_FAIL).unwrap();
    assert_eq!(step.status, StepStatus::Failed);
    assert!(step.detail.contains("expected no real roots"));

    Ok(())
}

#[tokio::test]
async fn test_cli_flags_override_config_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("addon.toml");
    tokio::fs::write(
        &config_path,
        r#"
[client]
name = "from-file"

[timing]
sleep_ms = 300
tick_ms = 30

[output]
offline = true
"#,
    )
    .await?;

    let cli = CliConfig {
        config: Some(config_path),
        client_name: Some("from-flag".to_string()),
        ..CliConfig::default()
    };
    let config = cli.resolve()?;

    assert_eq!(config.client_name, "from-flag");
    assert_eq!(config.sleep_duration, Duration::from_millis(300));
    assert!(config.offline);

    let report = SmokeRunner::new(config)?.run().await;
    assert!(report.is_success());
    assert_eq!(report.step(STEP_CLIENT_VALUE).unwrap().detail, "from-flag");

    Ok(())
}

#[test]
fn test_missing_config_file_is_io_error() {
    let cli = CliConfig {
        config: Some("/definitely/not/here/addon.toml".into()),
        ..CliConfig::default()
    };
    let err = cli.resolve().unwrap_err();
    assert!(matches!(err, addon_kit::AddonError::IoError(_)));
}
