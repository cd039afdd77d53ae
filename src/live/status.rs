use std::fmt;

use chrono::{DateTime, Datelike, Duration, Weekday};
use chrono_tz::Tz;

use crate::config::{GOAL_HOUR, GOAL_MINUTE, PAD_MINUTES};
use crate::datetime::{format_countdown, today_at};
use crate::types::LiveStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiveState {
    Live,
    WasLive,
    MondayLull,
    BeforeGoal { remaining: Duration },
    BeforeGoalWithPad { remaining: Duration },
    Late { elapsed: Duration },
}

pub fn goal_time(now: DateTime<Tz>) -> DateTime<Tz> {
    today_at(
        now,
        Duration::hours(GOAL_HOUR) + Duration::minutes(GOAL_MINUTE),
    )
}

pub fn pad_time(now: DateTime<Tz>) -> DateTime<Tz> {
    goal_time(now) + Duration::minutes(PAD_MINUTES)
}

/// Picks what the banner should say given the last polled status and the local time.
pub fn select_state(status: LiveStatus, now: DateTime<Tz>) -> LiveState {
    if status.live {
        return LiveState::Live;
    }
    if status.was_live {
        return LiveState::WasLive;
    }
    if now.weekday() == Weekday::Mon {
        return LiveState::MondayLull;
    }

    let goal = goal_time(now);
    let pad = pad_time(now);

    if goal > now {
        LiveState::BeforeGoal {
            remaining: goal - now,
        }
    } else if pad > now {
        LiveState::BeforeGoalWithPad {
            remaining: pad - now,
        }
    } else {
        LiveState::Late {
            elapsed: now - pad,
        }
    }
}

impl fmt::Display for LiveState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Live => f.write_str("He's live right now. Go watch."),
            Self::WasLive => f.write_str("Stream is over."),
            Self::MondayLull => f.write_str("It's Monday. Chances of a stream are low."),
            Self::BeforeGoal { remaining } => {
                write!(f, "He should be live in {}.", format_countdown(*remaining))
            }
            Self::BeforeGoalWithPad { remaining } => write!(
                f,
                "Respect the {PAD_MINUTES} minute buffer. We still have {} left before he's late.",
                format_countdown(*remaining)
            ),
            Self::Late { elapsed } => {
                write!(f, "He should've been live {} ago...", format_countdown(*elapsed))
            }
        }
    }
}
