//! Date normalization for heterogeneous date markers
//!
//! Historical data mixes concrete calendar instants with free-text era strings
//! like `"10900 BCE"` or `"33 CE"`. Everything downstream (sorting, overlap,
//! date-conflict checks) works on a [`NormalizedDate`] produced here.
//!
//! Era strings use the astronomical-year convention without the BCE offset:
//! `"N BCE"` becomes January 1 of year `-N`, not `-(N-1)`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Milliseconds in the 365-day year used for year differences
pub const MILLIS_PER_YEAR: f64 = 1000.0 * 60.0 * 60.0 * 24.0 * 365.0;

/// Upper bound of [`DateRange::confidence`], a percentage
pub const MAX_CONFIDENCE: u8 = 100;

/// A start or end marker of a date range
///
/// Deserializes untagged: an RFC 3339 timestamp becomes [`DateMarker::Calendar`],
/// any other string stays [`DateMarker::Text`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateMarker {
    /// A concrete calendar instant
    Calendar(DateTime<Utc>),

    /// A free-text date or era string (e.g., "2580 BCE", "1947-07-08")
    Text(String),
}

impl From<DateTime<Utc>> for DateMarker {
    fn from(value: DateTime<Utc>) -> Self {
        DateMarker::Calendar(value)
    }
}

impl From<&str> for DateMarker {
    fn from(value: &str) -> Self {
        DateMarker::Text(value.to_string())
    }
}

impl From<String> for DateMarker {
    fn from(value: String) -> Self {
        DateMarker::Text(value)
    }
}

impl fmt::Display for DateMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateMarker::Calendar(instant) => write!(f, "{}", instant.format("%Y-%m-%d")),
            DateMarker::Text(text) => write!(f, "{}", text),
        }
    }
}

/// The dated extent of an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    /// Start marker
    pub start: DateMarker,

    /// Optional end marker
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateMarker>,

    /// Whether the dates are approximate
    #[serde(default)]
    pub approximate: bool,

    /// Confidence in the dating, as a percentage [0, 100]
    #[serde(default = "default_confidence")]
    pub confidence: u8,
}

fn default_confidence() -> u8 {
    MAX_CONFIDENCE
}

impl DateRange {
    /// Create an exact, fully confident range starting at `start`
    pub fn new(start: impl Into<DateMarker>) -> Self {
        Self {
            start: start.into(),
            end: None,
            approximate: false,
            confidence: MAX_CONFIDENCE,
        }
    }

    /// Set the end marker
    pub fn with_end(mut self, end: impl Into<DateMarker>) -> Self {
        self.end = Some(end.into());
        self
    }

    /// Mark the range approximate with the given confidence
    ///
    /// Values above [`MAX_CONFIDENCE`] are clamped.
    pub fn approximate(mut self, confidence: u8) -> Self {
        self.approximate = true;
        self.confidence = confidence.min(MAX_CONFIDENCE);
        self
    }

    /// Normalized start instant
    pub fn normalized_start(&self) -> NormalizedDate {
        normalize(&self.start)
    }

    /// Normalized end instant; a missing end equals the start
    pub fn normalized_end(&self) -> NormalizedDate {
        match &self.end {
            Some(end) => normalize(end),
            None => self.normalized_start(),
        }
    }
}

/// A comparable point in time, or the marker of an unparseable date
///
/// Comparisons involving [`NormalizedDate::Invalid`] are never true: the
/// invalid value is neither before, after, nor equal to anything, itself
/// included. Use [`NormalizedDate::sort_key`] for a total display order.
#[derive(Debug, Clone, Copy)]
pub enum NormalizedDate {
    /// A valid UTC instant
    Valid(DateTime<Utc>),

    /// The input could not be parsed
    Invalid,
}

impl NormalizedDate {
    /// Whether the date parsed
    pub fn is_valid(&self) -> bool {
        matches!(self, NormalizedDate::Valid(_))
    }

    /// The instant, if valid
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            NormalizedDate::Valid(instant) => Some(*instant),
            NormalizedDate::Invalid => None,
        }
    }

    /// Milliseconds since the Unix epoch, if valid
    pub fn timestamp_millis(&self) -> Option<i64> {
        self.as_datetime().map(|instant| instant.timestamp_millis())
    }

    /// Total order key for display sorting
    ///
    /// Invalid dates sort as the Unix epoch.
    pub fn sort_key(&self) -> i64 {
        self.timestamp_millis().unwrap_or(0)
    }
}

impl PartialEq for NormalizedDate {
    fn eq(&self, other: &Self) -> bool {
        matches!(self.partial_cmp(other), Some(Ordering::Equal))
    }
}

impl PartialOrd for NormalizedDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (NormalizedDate::Valid(a), NormalizedDate::Valid(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

/// Normalize a date marker into a comparable instant
///
/// # Examples
///
/// ```
/// use ourstory_domain::{normalize, DateMarker};
/// use chrono::Datelike;
///
/// let date = normalize(&DateMarker::from("9600 BCE"));
/// assert_eq!(date.as_datetime().unwrap().year(), -9600);
/// ```
pub fn normalize(marker: &DateMarker) -> NormalizedDate {
    match marker {
        DateMarker::Calendar(instant) => NormalizedDate::Valid(*instant),
        DateMarker::Text(text) => normalize_str(text),
    }
}

/// Normalize a free-text date string
///
/// - Contains `BCE`: digits (and minus signs) are read as a year count `N`,
///   producing January 1 of year `-N`
/// - Contains `CE`: digits are read as year `N`, producing January 1 of `N`
/// - Otherwise: generic calendar parsing, or [`NormalizedDate::Invalid`]
pub fn normalize_str(text: &str) -> NormalizedDate {
    if text.contains("BCE") {
        let digits: String = text
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '-')
            .collect();
        return match leading_integer(&digits).and_then(|year| year.checked_neg()) {
            Some(year) => january_first(year),
            None => NormalizedDate::Invalid,
        };
    }

    if text.contains("CE") {
        let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
        return match leading_integer(&digits) {
            Some(year) => january_first(year),
            None => NormalizedDate::Invalid,
        };
    }

    parse_calendar(text.trim())
}

/// Absolute distance between two dates in 365-day years
///
/// Returns `None` when either date is invalid.
pub fn years_between(a: &NormalizedDate, b: &NormalizedDate) -> Option<f64> {
    let (a, b) = (a.as_datetime()?, b.as_datetime()?);
    let millis = (a - b).num_milliseconds();
    Some(millis.unsigned_abs() as f64 / MILLIS_PER_YEAR)
}

/// Read an optionally signed integer prefix, stopping at the first non-digit
fn leading_integer(s: &str) -> Option<i32> {
    let (negative, rest) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let digits: &str = rest
        .find(|c: char| !c.is_ascii_digit())
        .map_or(rest, |end| &rest[..end]);
    if digits.is_empty() {
        return None;
    }
    let value: i32 = digits.parse().ok()?;
    if negative {
        value.checked_neg()
    } else {
        Some(value)
    }
}

fn january_first(year: i32) -> NormalizedDate {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| NormalizedDate::Valid(midnight.and_utc()))
        .unwrap_or(NormalizedDate::Invalid)
}

fn midnight(date: NaiveDate) -> NormalizedDate {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| NormalizedDate::Valid(dt.and_utc()))
        .unwrap_or(NormalizedDate::Invalid)
}

/// Generic calendar parsing for strings without an era marker
fn parse_calendar(text: &str) -> NormalizedDate {
    if text.is_empty() {
        return NormalizedDate::Invalid;
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return NormalizedDate::Valid(instant.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return NormalizedDate::Valid(naive.and_utc());
    }

    for format in ["%Y-%m-%d", "%B %d, %Y", "%d %B %Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return midnight(date);
        }
    }

    // Month precision: "1947-07" or "July 1947"
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{}-01", text), "%Y-%m-%d") {
        return midnight(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("1 {}", text), "%d %B %Y") {
        return midnight(date);
    }

    // Bare year
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    if !unsigned.is_empty() && unsigned.chars().all(|c| c.is_ascii_digit()) {
        if let Ok(year) = text.parse::<i32>() {
            return january_first(year);
        }
    }

    NormalizedDate::Invalid
}
