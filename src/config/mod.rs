#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::client::TENSORZERO_SITE;
use crate::core::fetch::{DEFAULT_TIMEOUT, VIRAJM_SITE};
use crate::core::sleepy::{DEFAULT_SLEEP, DEFAULT_TICK};
use crate::domain::model::Coefficients;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{AddonError, Result};
use crate::utils::validation::{
    validate_finite, validate_non_empty_string, validate_positive_number, validate_range,
    validate_url, Validate,
};
use std::time::Duration;

pub const DEFAULT_PREVIEW_CHARS: usize = 200;
pub const MAX_PREVIEW_CHARS: usize = 100_000;

/// Fully resolved settings for a smoke run.
#[derive(Debug, Clone, PartialEq)]
pub struct AddonConfig {
    pub site_url: String,
    pub tensorzero_url: String,
    pub client_name: String,
    pub http_timeout: Duration,
    pub sleep_duration: Duration,
    pub tick_interval: Duration,
    pub solvable: Coefficients,
    pub unsolvable: Coefficients,
    pub preview_chars: usize,
    pub offline: bool,
    pub verbose: bool,
    pub log_json: bool,
}

impl Default for AddonConfig {
    fn default() -> Self {
        Self {
            site_url: VIRAJM_SITE.to_string(),
            tensorzero_url: TENSORZERO_SITE.to_string(),
            client_name: "hello".to_string(),
            http_timeout: DEFAULT_TIMEOUT,
            sleep_duration: DEFAULT_SLEEP,
            tick_interval: DEFAULT_TICK,
            solvable: Coefficients::new(2.0, 6.0, 1.0),
            unsolvable: Coefficients::new(2.0, 1.0, 1.0),
            preview_chars: DEFAULT_PREVIEW_CHARS,
            offline: false,
            verbose: false,
            log_json: false,
        }
    }
}

/// Milliseconds in `d`, saturating at `u64::MAX`.
pub fn duration_millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

fn validate_coefficients(field_name: &str, k: &Coefficients) -> Result<()> {
    validate_finite(&format!("{}.a", field_name), k.a)?;
    validate_finite(&format!("{}.b", field_name), k.b)?;
    validate_finite(&format!("{}.c", field_name), k.c)?;
    Ok(())
}

impl Validate for AddonConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoints.site", &self.site_url)?;
        validate_url("endpoints.tensorzero", &self.tensorzero_url)?;
        validate_non_empty_string("client.name", &self.client_name)?;
        validate_positive_number("timing.http_timeout_ms", duration_millis(self.http_timeout), 1)?;
        validate_positive_number("timing.tick_ms", duration_millis(self.tick_interval), 1)?;
        validate_range("preview_chars", self.preview_chars, 0, MAX_PREVIEW_CHARS)?;
        validate_coefficients("quadratic.solvable", &self.solvable)?;
        validate_coefficients("quadratic.unsolvable", &self.unsolvable)?;

        if self.tick_interval >= self.sleep_duration {
            return Err(AddonError::ConfigValidationError {
                field: "timing.tick_ms".to_string(),
                message: format!(
                    "tick interval ({:?}) must be shorter than the sleep ({:?}) to show progress",
                    self.tick_interval, self.sleep_duration
                ),
            });
        }

        Ok(())
    }
}

impl ConfigProvider for AddonConfig {
    fn site_url(&self) -> &str {
        &self.site_url
    }

    fn tensorzero_url(&self) -> &str {
        &self.tensorzero_url
    }

    fn client_name(&self) -> &str {
        &self.client_name
    }

    fn http_timeout(&self) -> Duration {
        self.http_timeout
    }

    fn sleep_duration(&self) -> Duration {
        self.sleep_duration
    }

    fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    fn solvable(&self) -> Coefficients {
        self.solvable
    }

    fn unsolvable(&self) -> Coefficients {
        self.unsolvable
    }

    fn preview_chars(&self) -> usize {
        self.preview_chars
    }

    fn offline(&self) -> bool {
        self.offline
    }
}
