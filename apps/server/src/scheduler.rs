//! Background scheduler for the daily story scan.
//!
//! Fires once a day at the configured UTC time and runs the same
//! reconciliation pass the `/notify` endpoint triggers.

use std::sync::Arc;

use chrono::{DateTime, Duration as ChronoDuration, NaiveTime, Utc};
use tracing::{info, warn};

use crate::main_lib::AppState;

/// Starts the background daily scan scheduler.
pub fn start_daily_scan_scheduler(state: Arc<AppState>, at: NaiveTime) {
    tokio::spawn(async move {
        info!("Story scan scheduler started (daily at {} UTC)", at.format("%H:%M"));

        let mut next = next_run_after(Utc::now(), at);
        loop {
            info!("Next story scan at {}", next);
            let wait = (next - Utc::now()).to_std().unwrap_or_default();
            tokio::time::sleep(wait).await;

            run_scheduled_scan(&state).await;

            // A pass that overruns its slot skips to the next day rather than firing twice.
            next = next_run_after(next.max(Utc::now()), at);
        }
    });
}

/// First instant strictly after `now` whose UTC wall-clock time is `at`.
pub fn next_run_after(now: DateTime<Utc>, at: NaiveTime) -> DateTime<Utc> {
    let today = now.date_naive().and_time(at).and_utc();
    if today > now {
        today
    } else {
        today + ChronoDuration::days(1)
    }
}

/// Runs a single scheduled scan.
async fn run_scheduled_scan(state: &Arc<AppState>) {
    info!("Running scheduled story scan...");

    match state.story_service.run_pass().await {
        Ok(summary) => {
            info!(
                "Scheduled story scan completed: {} notifications sent",
                summary.notifications
            );
        }
        Err(e) => {
            warn!("Scheduled story scan failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn six_pm() -> NaiveTime {
        NaiveTime::from_hms_opt(18, 0, 0).unwrap()
    }

    #[test]
    fn test_next_run_later_today() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 9, 15, 0).unwrap();
        assert_eq!(
            next_run_after(now, six_pm()),
            Utc.with_ymd_and_hms(2024, 3, 10, 18, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_next_run_rolls_to_tomorrow_once_passed() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 19, 0, 0).unwrap();
        assert_eq!(
            next_run_after(now, six_pm()),
            Utc.with_ymd_and_hms(2024, 3, 11, 18, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_next_run_at_exact_slot_is_tomorrow() {
        let now = Utc.with_ymd_and_hms(2024, 12, 31, 18, 0, 0).unwrap();
        assert_eq!(
            next_run_after(now, six_pm()),
            Utc.with_ymd_and_hms(2025, 1, 1, 18, 0, 0).unwrap()
        );
    }
}
