use chrono_tz::Tz;

/// Base URL of the Live-at-Five API, overridable at build time.
pub const API_URL: &str = match option_env!("LIVEATFIVE_API_URL") {
    Some(url) => url,
    None => "http://127.0.0.1:8080",
};

/// Timezone the goal and pad times are expressed in.
pub const TIMEZONE: Tz = chrono_tz::America::Los_Angeles;

pub const GOAL_HOUR: i64 = 17;
pub const GOAL_MINUTE: i64 = 0;
pub const PAD_MINUTES: i64 = 15;

pub const LIVE_POLL_INTERVAL_MS: u64 = 60_000;
/// Shorter than a second so the countdown never skips or repeats a second.
pub const CLOCK_TICK_INTERVAL_MS: u64 = 250;

pub const STREAMER: &str = "itswill";
pub const RECORD_SINCE: &str = "January 1st, 2023";
