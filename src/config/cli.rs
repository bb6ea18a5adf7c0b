use crate::config::toml_config::TomlConfig;
use crate::config::AddonConfig;
use crate::domain::model::Coefficients;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Flags left unset fall back to the config file, then to built-in defaults.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "addon-kit")]
#[command(about = "Smoke-run every addon-kit function and print the results")]
pub struct CliConfig {
    #[arg(long, help = "TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Page fetched by the blocking and async grab steps")]
    pub site_url: Option<String>,

    #[arg(long, help = "Page fetched by Client::get_tensorzero_website")]
    pub tensorzero_url: Option<String>,

    #[arg(long, help = "Name passed to Client::new")]
    pub client_name: Option<String>,

    #[arg(long, help = "How long sleepy waits, in milliseconds")]
    pub sleep_ms: Option<u64>,

    #[arg(long, help = "Counter interval while sleepy runs, in milliseconds")]
    pub tick_ms: Option<u64>,

    #[arg(long, help = "HTTP timeout, in milliseconds")]
    pub http_timeout_ms: Option<u64>,

    #[arg(long, value_parser = parse_coefficients, help = "Coefficients a,b,c expected to solve")]
    pub solvable: Option<Coefficients>,

    #[arg(long, value_parser = parse_coefficients, help = "Coefficients a,b,c expected to fail")]
    pub unsolvable: Option<Coefficients>,

    #[arg(long, help = "Characters of each fetched page to print")]
    pub preview_chars: Option<usize>,

    #[arg(long, help = "Skip the network steps")]
    pub offline: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

pub fn parse_coefficients(s: &str) -> std::result::Result<Coefficients, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("expected 'a,b,c', got '{}'", s));
    }

    let mut values = [0.0f64; 3];
    for (slot, part) in values.iter_mut().zip(&parts) {
        *slot = part
            .parse::<f64>()
            .map_err(|e| format!("invalid coefficient '{}': {}", part, e))?;
    }

    Ok(Coefficients::new(values[0], values[1], values[2]))
}

impl CliConfig {
    /// Merges defaults, the optional config file and these flags, then validates.
    pub fn resolve(&self) -> Result<AddonConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading config file {}", path.display());
                TomlConfig::from_file(path)?.into_addon_config()
            }
            None => AddonConfig::default(),
        };

        self.apply_to(&mut config);
        config.validate()?;
        Ok(config)
    }

    fn apply_to(&self, config: &mut AddonConfig) {
        if let Some(url) = &self.site_url {
            config.site_url = url.clone();
        }
        if let Some(url) = &self.tensorzero_url {
            config.tensorzero_url = url.clone();
        }
        if let Some(name) = &self.client_name {
            config.client_name = name.clone();
        }
        if let Some(ms) = self.sleep_ms {
            config.sleep_duration = Duration::from_millis(ms);
        }
        if let Some(ms) = self.tick_ms {
            config.tick_interval = Duration::from_millis(ms);
        }
        if let Some(ms) = self.http_timeout_ms {
            config.http_timeout = Duration::from_millis(ms);
        }
        if let Some(k) = self.solvable {
            config.solvable = k;
        }
        if let Some(k) = self.unsolvable {
            config.unsolvable = k;
        }
        if let Some(chars) = self.preview_chars {
            config.preview_chars = chars;
        }
        // 布林旗標只能開啟，不能把檔案裡的 true 關掉
        config.offline |= self.offline;
        config.verbose |= self.verbose;
        config.log_json |= self.log_json;
    }
}
