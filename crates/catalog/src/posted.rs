//! Parsing of the `Posted` field.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Minute precision with an explicit zone, which RFC 3339 does not allow.
const OFFSET_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M%:z", "%Y-%m-%dT%H:%M%z"];

/// Posting instant of a product, parsed once at the boundary.
///
/// Values that cannot be parsed are kept verbatim rather than rejected: an
/// unparseable posting date is a display concern, never a reason to drop a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostedAt {
    At(DateTime<Utc>),
    Unparseable(String),
}

impl PostedAt {
    /// Parse RFC 3339, `YYYY-MM-DDTHH:MM` with `Z` or a `±hh[:]mm` offset, a bare
    /// `YYYY-MM-DD` (UTC midnight), or a naive `YYYY-MM-DDTHH:MM[:SS[.fff]]` (read as UTC).
    pub fn parse(raw: &str) -> Self {
        let s = raw.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Self::At(dt.with_timezone(&Utc));
        }

        for fmt in OFFSET_DATETIME_FORMATS {
            if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
                return Self::At(dt.with_timezone(&Utc));
            }
        }

        if let Some(utc) = s.strip_suffix(['Z', 'z']) {
            if let Ok(naive) = NaiveDateTime::parse_from_str(utc, "%Y-%m-%dT%H:%M") {
                return Self::At(naive.and_utc());
            }
        }

        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
                return Self::At(midnight.and_utc());
            }
        }

        for fmt in NAIVE_DATETIME_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
                return Self::At(naive.and_utc());
            }
        }

        Self::Unparseable(raw.to_string())
    }

    pub fn instant(&self) -> Option<DateTime<Utc>> {
        match self {
            PostedAt::At(at) => Some(*at),
            PostedAt::Unparseable(_) => None,
        }
    }

    pub fn is_parsed(&self) -> bool {
        self.instant().is_some()
    }
}

impl Default for PostedAt {
    fn default() -> Self {
        Self::Unparseable(String::new())
    }
}

impl From<DateTime<Utc>> for PostedAt {
    fn from(value: DateTime<Utc>) -> Self {
        Self::At(value)
    }
}
