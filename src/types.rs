use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Error};
use chrono::Weekday;
use serde::{Deserialize, Deserializer, Serialize};

/// How a stream's start time compares to the goal. Encoded on the wire as
/// `0` (late), `1` (on time) or `2` (early); anything else reads as late.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub enum Punctuality {
    Late,
    OnTime,
    Early,
}

impl From<i64> for Punctuality {
    fn from(code: i64) -> Self {
        match code {
            2 => Self::Early,
            1 => Self::OnTime,
            _ => Self::Late,
        }
    }
}

impl From<Punctuality> for u8 {
    fn from(punctuality: Punctuality) -> Self {
        match punctuality {
            Punctuality::Late => 0,
            Punctuality::OnTime => 1,
            Punctuality::Early => 2,
        }
    }
}

impl Punctuality {
    /// Lowercase wording used in streak sentences.
    pub fn streak_word(self) -> &'static str {
        match self {
            Self::Late => "late",
            Self::OnTime => "on time",
            Self::Early => "early",
        }
    }

    /// Label used by the history list, padded with non-breaking spaces so
    /// every label has the same width.
    pub fn list_label(self) -> &'static str {
        match self {
            Self::Late => "LATE\u{a0}\u{a0}\u{a0}",
            Self::OnTime => "ON TIME",
            Self::Early => "EARLY\u{a0}\u{a0}",
        }
    }

    pub fn table_label(self) -> &'static str {
        match self {
            Self::Late => "LATE",
            Self::OnTime => "ON-TIME",
            Self::Early => "EARLY",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Streak {
    pub length: u32,
    pub status: Punctuality,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSummary {
    #[serde(rename = "on-time", alias = "on_time")]
    pub on_time: u32,
    pub early: u32,
    pub total: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub streak: Option<u32>,
    #[serde(
        rename = "streak-status",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub streak_status: Option<Punctuality>,
}

impl RecordSummary {
    pub fn late(&self) -> u32 {
        self.total
            .saturating_sub(self.on_time)
            .saturating_sub(self.early)
    }

    /// The current streak, only when the API reported both its length and status.
    pub fn streak(&self) -> Option<Streak> {
        Some(Streak {
            length: self.streak?,
            status: self.streak_status?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamRecord {
    #[serde(rename = "on-time", alias = "on_time")]
    pub status: Punctuality,
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    // Keyed by ISO date, so iteration order is chronological
    pub streams: BTreeMap<String, StreamRecord>,
}

impl History {
    /// Oldest stream first.
    pub fn by_date(&self) -> impl Iterator<Item = (&String, &StreamRecord)> {
        self.streams.iter()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveStatus {
    #[serde(deserialize_with = "deserialize_flag")]
    pub live: bool,
    #[serde(rename = "waslive", deserialize_with = "deserialize_flag")]
    pub was_live: bool,
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(flag) => flag,
        Flag::Int(flag) => flag == 1,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AverageTime {
    pub average: String,
}

/// Restricts the record, history and average time to a single weekday.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WeekdayFilter {
    #[default]
    All,
    Day(Weekday),
}

impl WeekdayFilter {
    pub const OPTIONS: [Self; 8] = [
        Self::All,
        Self::Day(Weekday::Mon),
        Self::Day(Weekday::Tue),
        Self::Day(Weekday::Wed),
        Self::Day(Weekday::Thu),
        Self::Day(Weekday::Fri),
        Self::Day(Weekday::Sat),
        Self::Day(Weekday::Sun),
    ];

    /// Value sent as the `weekday` query parameter, Monday being `0`.
    pub fn query_value(self) -> Option<u32> {
        match self {
            Self::All => None,
            Self::Day(weekday) => Some(weekday.num_days_from_monday()),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All days",
            Self::Day(Weekday::Mon) => "Monday",
            Self::Day(Weekday::Tue) => "Tuesday",
            Self::Day(Weekday::Wed) => "Wednesday",
            Self::Day(Weekday::Thu) => "Thursday",
            Self::Day(Weekday::Fri) => "Friday",
            Self::Day(Weekday::Sat) => "Saturday",
            Self::Day(Weekday::Sun) => "Sunday",
        }
    }
}

/// Formats as the `<option>` value understood by [`FromStr`].
impl fmt::Display for WeekdayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.query_value() {
            Some(value) => write!(f, "{value}"),
            None => f.write_str("all"),
        }
    }
}

impl FromStr for WeekdayFilter {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value == "all" {
            return Ok(Self::All);
        }

        let index = value
            .parse::<u8>()
            .map_err(|err| anyhow!("invalid weekday {value:?}: {err}"))?;
        let weekday =
            Weekday::try_from(index).map_err(|_| anyhow!("weekday out of range: {index}"))?;

        Ok(Self::Day(weekday))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_late_is_total_minus_on_time_and_early() {
        let record: RecordSummary =
            serde_json::from_str(r#"{"on-time": 40, "early": 12, "total": 70}"#).unwrap();
        assert_eq!(record.late(), 18);
        assert_eq!(record.streak(), None);
    }

    #[test]
    fn record_reads_streak_when_present() {
        let record: RecordSummary = serde_json::from_str(
            r#"{"on-time": 3, "early": 1, "total": 5, "streak": 2, "streak-status": 1}"#,
        )
        .unwrap();
        assert_eq!(
            record.streak(),
            Some(Streak {
                length: 2,
                status: Punctuality::OnTime
            })
        );
    }

    #[test]
    fn record_accepts_underscore_spelling() {
        let record: RecordSummary =
            serde_json::from_str(r#"{"on_time": 1, "early": 0, "total": 1}"#).unwrap();
        assert_eq!(record.on_time, 1);
    }

    #[test]
    fn status_codes_map_to_one_label_each() {
        let cases = [
            (0_i64, "LATE", "LATE", "late"),
            (1, "ON-TIME", "ON TIME", "on time"),
            (2, "EARLY", "EARLY", "early"),
        ];
        for (code, table, list, word) in cases {
            let punctuality = Punctuality::from(code);
            assert_eq!(punctuality.table_label(), table);
            assert_eq!(punctuality.list_label().trim_end_matches('\u{a0}'), list);
            assert_eq!(punctuality.streak_word(), word);
            assert_eq!(i64::from(u8::from(punctuality)), code);
        }
        assert_eq!(Punctuality::from(7_i64), Punctuality::Late);
    }

    #[test]
    fn list_labels_share_one_width() {
        for code in 0..3_i64 {
            assert_eq!(Punctuality::from(code).list_label().chars().count(), 7);
        }
    }

    #[test]
    fn history_accepts_both_status_spellings_and_orders_by_date() {
        let history: History = serde_json::from_str(
            r#"{"streams": {
                "2023-03-02": {"on_time": 2, "time": "16:30:00"},
                "2023-01-15": {"on-time": 0, "time": "17:40:12", "offset": 40.2},
                "2023-02-01": {"on-time": 1, "time": "17:01:00"}
            }}"#,
        )
        .unwrap();

        let dates = history
            .by_date()
            .map(|(date, _)| date.as_str())
            .collect::<Vec<_>>();
        assert_eq!(dates, ["2023-01-15", "2023-02-01", "2023-03-02"]);
        assert_eq!(history.streams["2023-03-02"].status, Punctuality::Early);
        assert_eq!(history.streams["2023-01-15"].offset, Some(40.2));
        assert_eq!(history.streams["2023-02-01"].offset, None);
    }

    #[test]
    fn history_keeps_sorted_backend_order() {
        let history: History = serde_json::from_str(
            r#"{"streams": {
                "2023-01-02": {"on-time": 1, "time": "17:00:00"},
                "2023-01-03": {"on-time": 0, "time": "17:20:00"}
            }}"#,
        )
        .unwrap();

        let dates = history
            .by_date()
            .map(|(date, _)| date.as_str())
            .collect::<Vec<_>>();
        assert_eq!(dates, ["2023-01-02", "2023-01-03"]);
    }

    #[test]
    fn out_of_range_status_codes_decode_as_late() {
        let history: History = serde_json::from_str(
            r#"{"streams": {
                "2023-01-02": {"on-time": -1, "time": "17:00:00"},
                "2023-01-03": {"on_time": 256, "time": "17:20:00"}
            }}"#,
        )
        .unwrap();
        assert!(history
            .by_date()
            .all(|(_, record)| record.status == Punctuality::Late));

        let record: RecordSummary = serde_json::from_str(
            r#"{"on-time": 1, "early": 0, "total": 2, "streak": 1, "streak-status": -3}"#,
        )
        .unwrap();
        assert_eq!(record.streak_status, Some(Punctuality::Late));
    }

    #[test]
    fn live_status_reads_integer_and_boolean_flags() {
        let status: LiveStatus = serde_json::from_str(r#"{"live": 1, "waslive": 0}"#).unwrap();
        assert_eq!(
            status,
            LiveStatus {
                live: true,
                was_live: false
            }
        );

        let status: LiveStatus =
            serde_json::from_str(r#"{"live": false, "waslive": true}"#).unwrap();
        assert!(status.was_live);
        assert!(!status.live);
    }

    #[test]
    fn weekday_filter_round_trips_through_option_values() {
        for filter in WeekdayFilter::OPTIONS {
            assert_eq!(filter.to_string().parse::<WeekdayFilter>().unwrap(), filter);
        }
        assert_eq!(
            "4".parse::<WeekdayFilter>().unwrap(),
            WeekdayFilter::Day(Weekday::Fri)
        );
        assert!("7".parse::<WeekdayFilter>().is_err());
        assert!("friday".parse::<WeekdayFilter>().is_err());
    }
}
