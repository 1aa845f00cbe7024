use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Naive date-time layouts accepted after RFC 3339, read as UTC.
const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Registration deadline of a hackathon listing
///
/// A deadline is either unknown (`Tba`), a parsed instant, or a value that was
/// present in the listing but could not be read as a date. The last case is kept
/// apart from `Tba` so that it can be displayed as such, but every filter treats
/// it the same way as a missing deadline.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Deadline {
    /// No deadline announced yet
    #[default]
    Tba,
    /// Registration closes at this instant
    At(DateTime<Utc>),
    /// Present but unparseable; holds the raw text
    Invalid(String),
}

impl Deadline {
    /// Parse a deadline from listing text
    ///
    /// Accepts RFC 3339 (`2026-03-01T10:00:00Z`), a bare date (`2026-03-01`,
    /// midnight UTC) and naive date-times with either `T` or a space separator.
    /// An empty string means no deadline.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Deadline::Tba;
        }
        match parse_instant(raw) {
            Some(instant) => Deadline::At(instant),
            None => Deadline::Invalid(raw.to_string()),
        }
    }

    /// The deadline instant, if it is known and valid
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        match self {
            Deadline::At(instant) => Some(*instant),
            Deadline::Tba | Deadline::Invalid(_) => None,
        }
    }

    /// Fractional days from `now` until the deadline (negative once passed)
    ///
    /// Resolution is one millisecond. Returns `None` for `Tba` and `Invalid`.
    pub fn days_left(&self, now: DateTime<Utc>) -> Option<f64> {
        let instant = self.instant()?;
        Some((instant - now).num_milliseconds() as f64 / MILLIS_PER_DAY)
    }

    /// Canonical text used when comparing deadlines of two listings
    ///
    /// Parsed deadlines compare by instant, so "2026-03-01" and
    /// "2026-03-01T00:00:00Z" give the same key. Unparseable ones keep their raw text.
    pub fn key_text(&self) -> String {
        match self {
            Deadline::Tba => String::new(),
            Deadline::At(instant) => instant.to_rfc3339(),
            Deadline::Invalid(raw) => raw.clone(),
        }
    }
}

fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}

/// Deserialize a deadline from either a TOML string or a native TOML date/date-time
///
/// Never fails on content: values that are not dates become `Deadline::Invalid`.
pub(crate) fn deserialize_deadline<'de, D>(deserializer: D) -> Result<Deadline, D::Error>
where
    D: Deserializer<'de>,
{
    let value = toml::Value::deserialize(deserializer)?;
    Ok(match value {
        toml::Value::String(text) => Deadline::parse(&text),
        toml::Value::Datetime(datetime) => Deadline::parse(&datetime.to_string()),
        other => Deadline::Invalid(other.to_string()),
    })
}
