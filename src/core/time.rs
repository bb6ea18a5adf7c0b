use crate::domain::model::{NflSnapshot, TimeAndNfl};
use chrono::{DateTime, Utc};

pub fn nfl_snapshot() -> NflSnapshot {
    NflSnapshot {
        league: "National Football League".to_string(),
        conferences: vec!["AFC".to_string(), "NFC".to_string()],
        teams: 32,
    }
}

/// Current UTC time bundled with the NFL snapshot.
pub fn get_time_and_nfl() -> TimeAndNfl {
    time_and_nfl_at(Utc::now())
}

pub fn time_and_nfl_at(now: DateTime<Utc>) -> TimeAndNfl {
    TimeAndNfl {
        timestamp: now,
        unix_millis: now.timestamp_millis(),
        nfl: nfl_snapshot(),
    }
}
