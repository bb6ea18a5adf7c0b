use crate::domain::model::TickReport;
use crate::utils::error::{AddonError, Result};
use std::time::Duration;
use tokio::time::{self, Instant, MissedTickBehavior};

pub const DEFAULT_SLEEP: Duration = Duration::from_secs(2);
pub const DEFAULT_TICK: Duration = Duration::from_millis(250);

/// Waits on the runtime timer, then reports how long it slept.
pub async fn sleepy(duration: Duration) -> String {
    time::sleep(duration).await;
    format!("Slept for {} ms", duration.as_millis())
}

/// Runs [`sleepy`] while an interval counter ticks alongside it.
///
/// The first tick lands one `tick` after the start. The interval is dropped
/// as soon as the sleep resolves, so no tick is counted after that point.
pub async fn sleep_with_ticker(sleep: Duration, tick: Duration) -> Result<TickReport> {
    if tick.is_zero() {
        return Err(AddonError::ValidationError {
            message: "tick interval must be greater than zero".to_string(),
        });
    }

    let start = Instant::now();
    let mut interval = time::interval_at(start + tick, tick);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let sleeper = sleepy(sleep);
    tokio::pin!(sleeper);

    let mut ticks: u64 = 0;
    let message = loop {
        tokio::select! {
            biased;
            message = &mut sleeper => break message,
            _ = interval.tick() => {
                ticks += 1;
                tracing::info!("⏱️ tick {} while sleeping", ticks);
            }
        }
    };

    Ok(TickReport {
        message,
        ticks,
        elapsed: start.elapsed(),
    })
}
