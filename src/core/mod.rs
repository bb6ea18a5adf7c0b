pub mod client;
pub mod env;
pub mod fetch;
pub mod quadratic;
pub mod sleepy;
pub mod smoke;
pub mod time;

pub use crate::domain::model::{Coefficients, Roots, SmokeReport, StepStatus, TimeAndNfl};
pub use crate::domain::ports::{ConfigProvider, PageFetcher};
pub use crate::utils::error::Result;
