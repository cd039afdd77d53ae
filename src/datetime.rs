use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::config::TIMEZONE;

pub fn now_local() -> DateTime<Tz> {
    Utc::now().with_timezone(&TIMEZONE)
}

/// The instant `offset` after local midnight on the same day as `now`.
pub fn today_at(now: DateTime<Tz>, offset: Duration) -> DateTime<Tz> {
    let naive = now.date_naive().and_time(NaiveTime::default()) + offset;
    let tz = now.timezone();

    tz.from_local_datetime(&naive)
        .earliest()
        .unwrap_or_else(|| tz.from_utc_datetime(&naive))
}

/// Renders a duration as `1h 02m 03s`, `2m 03s` or `3s`, truncated to whole seconds.
pub fn format_countdown(duration: Duration) -> String {
    let total = duration.num_seconds().max(0);
    let hours = total / 3600;
    let minutes = total % 3600 / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{hours}h {minutes:02}m {seconds:02}s")
    } else if minutes > 0 {
        format!("{minutes}m {seconds:02}s")
    } else {
        format!("{seconds}s")
    }
}
