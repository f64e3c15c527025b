// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time conversion and formatting.

use chrono::{Duration, FixedOffset, NaiveDate, NaiveTime, ParseError, Timelike};

const TIME_FORMAT: &str = "%H:%M";
const TIME_FORMAT_SECONDS: &str = "%H:%M:%S";
const MILLIS_PER_MINUTE: i64 = 60 * 1000;

/// Parse a time of day written as `HH:mm` (or `HH:mm:ss`).
pub fn parse_time_of_day(raw: &str) -> Result<NaiveTime, ParseError> {
    NaiveTime::parse_from_str(raw, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(raw, TIME_FORMAT_SECONDS))
}

/// Epoch milliseconds of `date` at 00:00 local time in `offset`.
///
/// `None` when shifting to UTC leaves chrono's date range, which only
/// happens at the extreme ends of it.
pub fn local_midnight_epoch_millis(date: NaiveDate, offset: FixedOffset) -> Option<i64> {
    date.and_time(NaiveTime::MIN)
        .checked_sub_signed(Duration::seconds(i64::from(offset.local_minus_utc())))
        .map(|utc| utc.and_utc().timestamp_millis())
}

/// Offset of a time of day from midnight, whole minutes only.
pub fn minutes_into_day_millis(time: NaiveTime) -> i64 {
    i64::from(time.hour() * 60 + time.minute()) * MILLIS_PER_MINUTE
}

/// Serde adapter writing `NaiveTime` as `HH:mm`.
pub mod hh_mm {
    use super::{parse_time_of_day, TIME_FORMAT};
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(TIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_time_of_day(&raw).map_err(de::Error::custom)
    }

    /// Same as the parent module, for optional fields.
    pub mod option {
        use super::{parse_time_of_day, TIME_FORMAT};
        use chrono::NaiveTime;
        use serde::{de, Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            time: &Option<NaiveTime>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match time {
                Some(t) => serializer.serialize_some(&t.format(TIME_FORMAT).to_string()),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<NaiveTime>, D::Error> {
            Option::<String>::deserialize(deserializer)?
                .map(|raw| parse_time_of_day(&raw).map_err(de::Error::custom))
                .transpose()
        }
    }
}
