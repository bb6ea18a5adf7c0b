use crate::domain::model::Coefficients;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_text(&self, url: &str) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn site_url(&self) -> &str;
    fn tensorzero_url(&self) -> &str;
    fn client_name(&self) -> &str;
    fn http_timeout(&self) -> Duration;
    fn sleep_duration(&self) -> Duration;
    fn tick_interval(&self) -> Duration;
    fn solvable(&self) -> Coefficients;
    fn unsolvable(&self) -> Coefficients;
    fn preview_chars(&self) -> usize;
    fn offline(&self) -> bool;
}
