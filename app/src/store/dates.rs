//! Serde helpers for calendar dates.
//!
//! Dates are written as `YYYY-MM-DD`. On input, RFC 3339 timestamps such as
//! `2023-05-01T00:00:00Z` are accepted too and truncated to their date.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serializer};

const FORMAT: &str = "%Y-%m-%d";

pub fn parse(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    let date = value.get(..10).unwrap_or(value);
    NaiveDate::parse_from_str(date, FORMAT)
}

/// `May 1, 2023`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

pub mod date {
    use super::*;

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(date.format(FORMAT).to_string().as_str())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: String = Deserialize::deserialize(deserializer)?;
        parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Missing, `null` or `"null"` mean no date.
pub mod optional_date {
    use super::*;

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => super::date::serialize(date, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: Option<String> = Deserialize::deserialize(deserializer)?;
        match s.as_deref() {
            None | Some("null") => Ok(None),
            Some(s) => parse(s).map(Some).map_err(serde::de::Error::custom),
        }
    }
}
