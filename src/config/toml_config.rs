use crate::config::AddonConfig;
use crate::domain::model::Coefficients;
use crate::utils::error::{AddonError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub endpoints: Option<EndpointsConfig>,
    pub client: Option<ClientConfig>,
    pub timing: Option<TimingConfig>,
    pub quadratic: Option<QuadraticConfig>,
    pub output: Option<OutputConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EndpointsConfig {
    pub site: Option<String>,
    pub tensorzero: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimingConfig {
    pub sleep_ms: Option<u64>,
    pub tick_ms: Option<u64>,
    pub http_timeout_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuadraticConfig {
    pub solvable: Option<Coefficients>,
    pub unsolvable: Option<Coefficients>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub preview_chars: Option<usize>,
    pub offline: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AddonError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AddonError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SITE_URL})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AddonError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 把檔案中有設定的欄位覆蓋到 `config`
    pub fn apply_to(&self, config: &mut AddonConfig) {
        if let Some(endpoints) = &self.endpoints {
            if let Some(site) = &endpoints.site {
                config.site_url = site.clone();
            }
            if let Some(tensorzero) = &endpoints.tensorzero {
                config.tensorzero_url = tensorzero.clone();
            }
        }

        if let Some(name) = self.client.as_ref().and_then(|c| c.name.as_ref()) {
            config.client_name = name.clone();
        }

        if let Some(timing) = &self.timing {
            if let Some(ms) = timing.sleep_ms {
                config.sleep_duration = Duration::from_millis(ms);
            }
            if let Some(ms) = timing.tick_ms {
                config.tick_interval = Duration::from_millis(ms);
            }
            if let Some(ms) = timing.http_timeout_ms {
                config.http_timeout = Duration::from_millis(ms);
            }
        }

        if let Some(quadratic) = &self.quadratic {
            if let Some(k) = quadratic.solvable {
                config.solvable = k;
            }
            if let Some(k) = quadratic.unsolvable {
                config.unsolvable = k;
            }
        }

        if let Some(output) = &self.output {
            if let Some(chars) = output.preview_chars {
                config.preview_chars = chars;
            }
            if let Some(offline) = output.offline {
                config.offline = offline;
            }
        }

        if let Some(logging) = &self.logging {
            if let Some(verbose) = logging.verbose {
                config.verbose = verbose;
            }
            if let Some(json) = logging.json {
                config.log_json = json;
            }
        }
    }

    pub fn into_addon_config(&self) -> AddonConfig {
        let mut config = AddonConfig::default();
        self.apply_to(&mut config);
        config
    }
}
