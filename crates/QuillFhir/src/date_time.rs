use std::fmt;
use std::sync::Arc;

use chrono::{DateTime as ChronoDateTime, NaiveDate, NaiveTime, Utc};
use serde_json::Value;

use crate::element::PrimitiveValue;
use crate::error::DecodeErrorKind;

/// Precision levels for FHIR Date values.
///
/// FHIR dates support partial precision, allowing year-only, year-month,
/// or full dates. This enum tracks which components are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatePrecision {
    /// Year only (YYYY)
    Year,
    /// Year and month (YYYY-MM)
    YearMonth,
    /// Full date (YYYY-MM-DD)
    Full,
}

/// Precision levels for FHIR Time values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimePrecision {
    /// Hour only (HH)
    Hour,
    /// Hour and minute (HH:MM)
    HourMinute,
    /// Hour, minute, and second (HH:MM:SS)
    HourMinuteSecond,
    /// Full time with sub-second precision (HH:MM:SS.sss)
    Millisecond,
}

/// Precision levels for FHIR DateTime values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DateTimePrecision {
    /// Year only (YYYY)
    Year,
    /// Year and month (YYYY-MM)
    YearMonth,
    /// Date only (YYYY-MM-DD)
    Date,
    /// Date with hour (YYYY-MM-DDTHH)
    DateHour,
    /// Date with hour and minute (YYYY-MM-DDTHH:MM)
    DateHourMinute,
    /// Date with time to seconds (YYYY-MM-DDTHH:MM:SS)
    DateHourMinuteSecond,
    /// Full datetime with sub-second precision (YYYY-MM-DDTHH:MM:SS.sss)
    Full,
}

/// Precision-aware FHIR Date type.
///
/// Keeps the original text so that `"2012"` is written back as `"2012"`
/// rather than as a padded full date.
///
/// # FHIR Date Formats
/// - `YYYY` - Year only
/// - `YYYY-MM` - Year and month
/// - `YYYY-MM-DD` - Full date
///
/// # Examples
/// ```rust
/// use quill_fhir::{DatePrecision, PrecisionDate};
///
/// let date = PrecisionDate::parse("2012-07").unwrap();
/// assert_eq!(date.precision(), DatePrecision::YearMonth);
/// assert_eq!(date.month(), Some(7));
/// assert_eq!(date.original_string(), "2012-07");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrecisionDate {
    year: i32,
    month: Option<u32>,
    day: Option<u32>,
    precision: DatePrecision,
    original_string: Arc<str>,
}

impl PrecisionDate {
    pub fn from_year(year: i32) -> Self {
        Self {
            year,
            month: None,
            day: None,
            precision: DatePrecision::Year,
            original_string: Arc::from(format!("{:04}", year)),
        }
    }

    pub fn from_year_month(year: i32, month: u32) -> Self {
        Self {
            year,
            month: Some(month),
            day: None,
            precision: DatePrecision::YearMonth,
            original_string: Arc::from(format!("{:04}-{:02}", year, month)),
        }
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Self {
        Self {
            year,
            month: Some(month),
            day: Some(day),
            precision: DatePrecision::Full,
            original_string: Arc::from(format!("{:04}-{:02}-{:02}", year, month, day)),
        }
    }

    /// Parses `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
    pub fn parse(s: &str) -> Option<Self> {
        let parts: Vec<&str> = s.split('-').collect();
        let year = parse_digits::<i32>(parts.first()?, 4)?;
        let (month, day, precision) = match parts.len() {
            1 => (None, None, DatePrecision::Year),
            2 => (Some(parse_digits::<u32>(parts[1], 2)?), None, DatePrecision::YearMonth),
            3 => (
                Some(parse_digits::<u32>(parts[1], 2)?),
                Some(parse_digits::<u32>(parts[2], 2)?),
                DatePrecision::Full,
            ),
            _ => return None,
        };
        if month.is_some_and(|month| !(1..=12).contains(&month))
            || day.is_some_and(|day| !(1..=31).contains(&day))
        {
            return None;
        }
        Some(Self {
            year,
            month,
            day,
            precision,
            original_string: Arc::from(s),
        })
    }

    pub fn precision(&self) -> DatePrecision {
        self.precision
    }

    pub fn original_string(&self) -> &str {
        &self.original_string
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> Option<u32> {
        self.month
    }

    pub fn day(&self) -> Option<u32> {
        self.day
    }

    /// Converts to a chrono date, filling missing components with 1.
    ///
    /// Returns `None` for dates that parse but do not exist, e.g. `2023-02-30`.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month.unwrap_or(1), self.day.unwrap_or(1))
    }
}

// Fixed-width run of ASCII digits.
fn parse_digits<T: std::str::FromStr>(s: &str, width: usize) -> Option<T> {
    if s.len() != width || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Precision-aware FHIR Time type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrecisionTime {
    hour: u32,
    minute: Option<u32>,
    second: Option<u32>,
    millisecond: Option<u32>,
    precision: TimePrecision,
    original_string: Arc<str>,
}

impl PrecisionTime {
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour,
            minute: Some(minute),
            second: Some(second),
            millisecond: None,
            precision: TimePrecision::HourMinuteSecond,
            original_string: Arc::from(format!("{:02}:{:02}:{:02}", hour, minute, second)),
        }
    }

    /// Parses `HH`, `HH:MM`, `HH:MM:SS` or `HH:MM:SS.fff`. Time zones are
    /// not allowed on a FHIR time.
    pub fn parse(s: &str) -> Option<Self> {
        if s.contains('+') || s.contains('-') || s.ends_with('Z') {
            return None;
        }

        let parts: Vec<&str> = s.split(':').collect();
        let hour = parse_digits::<u32>(parts.first()?, 2)?;
        let minute = match parts.get(1) {
            Some(minute) => Some(parse_digits::<u32>(minute, 2)?),
            None => None,
        };
        let (second, millisecond) = match parts.get(2) {
            Some(seconds) => match seconds.split_once('.') {
                Some((whole, fraction)) => {
                    if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
                        return None;
                    }
                    // Milliseconds: pad short fractions, truncate long ones.
                    let millis = format!("{:0<3}", &fraction[..fraction.len().min(3)]);
                    (Some(parse_digits::<u32>(whole, 2)?), Some(millis.parse().ok()?))
                }
                None => (Some(parse_digits::<u32>(seconds, 2)?), None),
            },
            None => (None, None),
        };
        if parts.len() > 3
            || hour > 23
            || minute.is_some_and(|minute| minute > 59)
            || second.is_some_and(|second| second > 59)
        {
            return None;
        }

        let precision = match (minute, second, millisecond) {
            (None, _, _) => TimePrecision::Hour,
            (Some(_), None, _) => TimePrecision::HourMinute,
            (Some(_), Some(_), None) => TimePrecision::HourMinuteSecond,
            (Some(_), Some(_), Some(_)) => TimePrecision::Millisecond,
        };
        Some(Self {
            hour,
            minute,
            second,
            millisecond,
            precision,
            original_string: Arc::from(s),
        })
    }

    pub fn precision(&self) -> TimePrecision {
        self.precision
    }

    pub fn original_string(&self) -> &str {
        &self.original_string
    }

    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        NaiveTime::from_hms_milli_opt(
            self.hour,
            self.minute.unwrap_or(0),
            self.second.unwrap_or(0),
            self.millisecond.unwrap_or(0),
        )
    }
}

/// Precision-aware FHIR DateTime type with an optional time-zone offset.
///
/// # Examples
/// ```rust
/// use quill_fhir::{DateTimePrecision, PrecisionDateTime};
///
/// let dt = PrecisionDateTime::parse("2015-02-07T13:28:17-05:00").unwrap();
/// assert_eq!(dt.precision(), DateTimePrecision::DateHourMinuteSecond);
/// assert_eq!(dt.timezone_offset(), Some(-300));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrecisionDateTime {
    date: PrecisionDate,
    time: Option<PrecisionTime>,
    timezone_offset: Option<i32>,
    precision: DateTimePrecision,
    original_string: Arc<str>,
}

impl PrecisionDateTime {
    pub fn from_date(year: i32, month: u32, day: u32) -> Self {
        Self::from_precision_date(PrecisionDate::from_ymd(year, month, day))
    }

    pub fn from_precision_date(date: PrecisionDate) -> Self {
        let precision = match date.precision {
            DatePrecision::Year => DateTimePrecision::Year,
            DatePrecision::YearMonth => DateTimePrecision::YearMonth,
            DatePrecision::Full => DateTimePrecision::Date,
        };
        Self {
            original_string: date.original_string.clone(),
            date,
            time: None,
            timezone_offset: None,
            precision,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let Some((date_part, time_and_tz)) = s.split_once('T') else {
            let date = PrecisionDate::parse(s)?;
            return Some(Self::from_precision_date(date));
        };
        let date = PrecisionDate::parse(date_part)?;
        if date.precision != DatePrecision::Full {
            return None;
        }

        let (time_part, timezone_offset) = if let Some(stripped) = time_and_tz.strip_suffix('Z')
        {
            (stripped, Some(0))
        } else if let Some(plus_pos) = time_and_tz.rfind('+') {
            let offset = Self::parse_timezone_offset(&time_and_tz[plus_pos + 1..])?;
            (&time_and_tz[..plus_pos], Some(offset))
        } else if let Some(minus_pos) = time_and_tz.rfind('-') {
            let offset = Self::parse_timezone_offset(&time_and_tz[minus_pos + 1..])?;
            (&time_and_tz[..minus_pos], Some(-offset))
        } else {
            (time_and_tz, None)
        };

        let time = PrecisionTime::parse(time_part)?;
        let precision = match time.precision {
            TimePrecision::Hour => DateTimePrecision::DateHour,
            TimePrecision::HourMinute => DateTimePrecision::DateHourMinute,
            TimePrecision::HourMinuteSecond => DateTimePrecision::DateHourMinuteSecond,
            TimePrecision::Millisecond => DateTimePrecision::Full,
        };
        Some(Self {
            date,
            time: Some(time),
            timezone_offset,
            precision,
            original_string: Arc::from(s),
        })
    }

    // Offset in minutes from `HH:MM` or `HH`.
    fn parse_timezone_offset(s: &str) -> Option<i32> {
        match s.split_once(':') {
            Some((hours, minutes)) => Some(
                parse_digits::<i32>(hours, 2)? * 60 + parse_digits::<i32>(minutes, 2)?,
            ),
            None => Some(parse_digits::<i32>(s, 2)? * 60),
        }
    }

    pub fn precision(&self) -> DateTimePrecision {
        self.precision
    }

    pub fn original_string(&self) -> &str {
        &self.original_string
    }

    pub fn date(&self) -> &PrecisionDate {
        &self.date
    }

    pub fn time(&self) -> Option<&PrecisionTime> {
        self.time.as_ref()
    }

    /// Offset from UTC in minutes, when the value carried one.
    pub fn timezone_offset(&self) -> Option<i32> {
        self.timezone_offset
    }

    /// Converts to a UTC chrono timestamp. Missing components are filled
    /// with their lowest value and a missing offset is taken as UTC.
    pub fn to_chrono_datetime(&self) -> Option<ChronoDateTime<Utc>> {
        let naive_date = self.date.to_naive_date()?;
        let naive_time = match &self.time {
            Some(time) => time.to_naive_time()?,
            None => NaiveTime::MIN,
        };
        let naive = naive_date.and_time(naive_time)
            - chrono::Duration::minutes(i64::from(self.timezone_offset.unwrap_or(0)));
        Some(ChronoDateTime::<Utc>::from_naive_utc_and_offset(naive, Utc))
    }
}

/// FHIR instant. Any valid datetime is accepted; many producers omit the
/// seconds or the offset that R4 asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrecisionInstant {
    inner: PrecisionDateTime,
}

impl PrecisionInstant {
    pub fn parse(s: &str) -> Option<Self> {
        PrecisionDateTime::parse(s).map(|inner| Self { inner })
    }

    pub fn original_string(&self) -> &str {
        self.inner.original_string()
    }

    pub fn as_datetime(&self) -> &PrecisionDateTime {
        &self.inner
    }

    pub fn to_chrono_datetime(&self) -> Option<ChronoDateTime<Utc>> {
        self.inner.to_chrono_datetime()
    }
}

impl fmt::Display for PrecisionDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original_string)
    }
}

impl fmt::Display for PrecisionTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original_string)
    }
}

impl fmt::Display for PrecisionDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original_string)
    }
}

impl fmt::Display for PrecisionInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

// === JSON value conversion ===

fn parse_temporal<T>(
    value: &Value,
    expected: &'static str,
    parse: impl FnOnce(&str) -> Option<T>,
) -> Result<T, DecodeErrorKind> {
    match value {
        Value::String(text) => parse(text).ok_or_else(|| DecodeErrorKind::InvalidValue {
            expected,
            value: text.clone(),
        }),
        other => Err(DecodeErrorKind::InvalidType {
            expected,
            found: crate::codec::json_kind(other),
        }),
    }
}

macro_rules! temporal_primitive {
    ($ty:ty, $expected:literal) => {
        impl PrimitiveValue for $ty {
            fn from_json_value(value: &Value) -> Result<Self, DecodeErrorKind> {
                parse_temporal(value, $expected, <$ty>::parse)
            }

            fn to_json_value(&self) -> Value {
                Value::String(self.original_string().to_owned())
            }
        }
    };
}

temporal_primitive!(PrecisionDate, "date");
temporal_primitive!(PrecisionTime, "time");
temporal_primitive!(PrecisionDateTime, "dateTime");
temporal_primitive!(PrecisionInstant, "instant");

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use serde_json::json;

    #[test]
    fn test_date_precisions() {
        assert_eq!(PrecisionDate::parse("2012").unwrap().precision(), DatePrecision::Year);
        assert_eq!(
            PrecisionDate::parse("2012-07").unwrap().precision(),
            DatePrecision::YearMonth
        );
        let full = PrecisionDate::parse("2012-07-14").unwrap();
        assert_eq!(full.precision(), DatePrecision::Full);
        assert_eq!(full.day(), Some(14));
    }

    #[test]
    fn test_date_rejects_malformed() {
        for input in ["", "12", "2012-7", "2012-13", "2012-07-32", "2012-07-14-01", "abcd"] {
            assert!(PrecisionDate::parse(input).is_none(), "{input} should not parse");
        }
    }

    #[test]
    fn test_nonexistent_date_has_no_chrono_value() {
        let date = PrecisionDate::parse("2023-02-30").unwrap();
        assert!(date.to_naive_date().is_none());
    }

    #[test]
    fn test_time_precisions() {
        assert_eq!(PrecisionTime::parse("09").unwrap().precision(), TimePrecision::Hour);
        assert_eq!(
            PrecisionTime::parse("09:30:15.5").unwrap().precision(),
            TimePrecision::Millisecond
        );
        assert!(PrecisionTime::parse("24:00").is_none());
        assert!(PrecisionTime::parse("09:30Z").is_none());
    }

    #[test]
    fn test_datetime_offsets_convert_to_utc() {
        let dt = PrecisionDateTime::parse("2015-02-07T13:28:17-05:00").unwrap();
        let utc = dt.to_chrono_datetime().unwrap();
        assert_eq!(utc.hour(), 18);
        assert_eq!(utc.day(), 7);

        let zulu = PrecisionDateTime::parse("2015-02-07T13:28:17.239Z").unwrap();
        assert_eq!(zulu.precision(), DateTimePrecision::Full);
        assert_eq!(zulu.timezone_offset(), Some(0));
    }

    #[test]
    fn test_datetime_date_only() {
        let dt = PrecisionDateTime::parse("2015-02").unwrap();
        assert_eq!(dt.precision(), DateTimePrecision::YearMonth);
        assert!(dt.time().is_none());
        assert!(PrecisionDateTime::parse("2015-02T10:00").is_none());
    }

    #[test]
    fn test_json_keeps_original_text() {
        let value = json!("2015-02-07T13:28:17+01:00");
        let dt = PrecisionDateTime::from_json_value(&value).unwrap();
        assert_eq!(dt.to_json_value(), value);
    }

    #[test]
    fn test_json_errors() {
        assert_eq!(
            PrecisionDate::from_json_value(&json!("not-a-date")),
            Err(DecodeErrorKind::InvalidValue {
                expected: "date",
                value: "not-a-date".to_string()
            })
        );
        assert_eq!(
            PrecisionInstant::from_json_value(&json!(12)),
            Err(DecodeErrorKind::InvalidType {
                expected: "instant",
                found: "number"
            })
        );
    }
}
