pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;
pub use crate::config::{toml_config::TomlConfig, AddonConfig};

pub use crate::core::client::Client;
pub use crate::core::env::get_user_from_env;
pub use crate::core::fetch::{grab_virajm_site, grab_virajm_site_async, HttpFetcher};
pub use crate::core::quadratic::solve_quadratic;
pub use crate::core::sleepy::{sleep_with_ticker, sleepy};
pub use crate::core::smoke::SmokeRunner;
pub use crate::core::time::get_time_and_nfl;
pub use crate::domain::model::{Coefficients, Roots, SmokeReport, StepStatus, TimeAndNfl};
pub use crate::utils::error::{AddonError, Result};
