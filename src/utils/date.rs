//! Calendar dates for content metadata.
//!
//! Dates carry no timezone. They are only used for ordering and range
//! filtering, so a date is simply `(year, month, day)` with a derived `Ord`.

use std::fmt;

use anyhow::{Result, bail};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// A calendar date without time or timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContentDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl ContentDate {
    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// First day of the given year.
    pub const fn year_start(year: u16) -> Self {
        Self::from_ymd(year, 1, 1)
    }

    /// Last day of the given year.
    pub const fn year_end(year: u16) -> Self {
        Self::from_ymd(year, 12, 31)
    }

    /// Parse from "YYYY-MM-DD" or an RFC 3339 timestamp.
    ///
    /// The time part (`THH:MM[:SS[.fff]]` plus an optional `Z` or `±HH:MM`
    /// offset) is validated and dropped. The calendar date is kept as
    /// written; offsets do not shift it.
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.trim().as_bytes();

        // Minimum: "YYYY-MM-DD" (10 chars)
        if bytes.len() < 10 {
            return None;
        }

        let year = parse_u16(&bytes[0..4])?;
        if bytes[4] != b'-' {
            return None;
        }
        let month = parse_u8(&bytes[5..7])?;
        if bytes[7] != b'-' {
            return None;
        }
        let day = parse_u8(&bytes[8..10])?;

        if bytes.len() != 10 {
            if !matches!(bytes[10], b'T' | b't') {
                return None;
            }
            parse_time(&bytes[11..])?;
        }

        let date = Self::from_ymd(year, month, day);
        date.validate().ok()?;
        Some(date)
    }

    /// Parse a range bound: either a full date or a bare "YYYY".
    ///
    /// A bare year expands to its first day for a lower bound and to its
    /// last day for an upper bound, so both bounds stay inclusive.
    pub fn parse_bound(s: &str, upper: bool) -> Option<Self> {
        let s = s.trim();
        if s.len() == 4 {
            let year = parse_u16(s.as_bytes())?;
            return Some(if upper {
                Self::year_end(year)
            } else {
                Self::year_start(year)
            });
        }
        Self::parse(s)
    }

    pub fn validate(&self) -> Result<()> {
        let Self { year, month, day } = *self;

        if !(1..=12).contains(&month) {
            bail!("month is invalid: {month}");
        }

        let max_days = Self::days_in_month(year, month);
        if day == 0 || day > max_days {
            bail!("day is invalid: {day}");
        }

        Ok(())
    }

    #[inline]
    fn is_leap_year(year: u16) -> bool {
        year.is_multiple_of(4) && (!year.is_multiple_of(100) || year.is_multiple_of(400))
    }

    #[inline]
    fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }
}

impl fmt::Display for ContentDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl Serialize for ContentDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ContentDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).ok_or_else(|| de::Error::custom(format!("invalid date `{s}`")))
    }
}

/// Deserialize a year given either as an integer or as a quoted string.
pub fn deserialize_year<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u16, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Year {
        Number(u16),
        Text(String),
    }

    match Year::deserialize(deserializer)? {
        Year::Number(year) => Ok(year),
        Year::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid year `{text}`"))),
    }
}

/// Check `HH:MM[:SS[.fff]][Z|±HH:MM]`.
fn parse_time(bytes: &[u8]) -> Option<()> {
    if bytes.len() < 5 || bytes[2] != b':' {
        return None;
    }
    let hour = parse_u8(&bytes[0..2])?;
    let minute = parse_u8(&bytes[3..5])?;
    if hour > 23 || minute > 59 {
        return None;
    }
    let mut rest = &bytes[5..];

    if let [b':', s1, s2, tail @ ..] = rest {
        // 60 allows a leap second
        if parse_u8(&[*s1, *s2])? > 60 {
            return None;
        }
        rest = tail;
        if let [b'.', tail @ ..] = rest {
            let digits = tail.iter().take_while(|b| b.is_ascii_digit()).count();
            if digits == 0 {
                return None;
            }
            rest = &tail[digits..];
        }
    }

    match rest {
        [] | [b'Z' | b'z'] => Some(()),
        [b'+' | b'-', h1, h2, b':', m1, m2] => {
            let hours = parse_u8(&[*h1, *h2])?;
            let minutes = parse_u8(&[*m1, *m2])?;
            (hours <= 23 && minutes <= 59).then_some(())
        }
        _ => None,
    }
}

/// Parse 2-digit ASCII number
#[inline]
fn parse_u8(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = bytes[0].wrapping_sub(b'0');
    let d2 = bytes[1].wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}

/// Parse 4-digit ASCII number
#[inline]
fn parse_u16(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 4 {
        return None;
    }
    let mut result = 0u16;
    for &b in bytes {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        result = result * 10 + d as u16;
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_only() {
        let date = ContentDate::parse("2024-06-15").unwrap();
        assert_eq!(date, ContentDate::from_ymd(2024, 6, 15));
    }

    #[test]
    fn test_parse_rfc3339_drops_time() {
        let date = ContentDate::parse("2024-06-15T14:30:45Z").unwrap();
        assert_eq!(date, ContentDate::from_ymd(2024, 6, 15));
    }

    #[test]
    fn test_parse_timestamp_variants() {
        let expected = Some(ContentDate::from_ymd(2024, 1, 15));
        assert_eq!(ContentDate::parse("2024-01-15T10:00:00.000Z"), expected);
        assert_eq!(ContentDate::parse("2024-01-15T10:00:00+02:00"), expected);
        assert_eq!(ContentDate::parse("2024-01-15T23:30:00.123456-05:00"), expected);
        assert_eq!(ContentDate::parse("2024-01-15T10:00"), expected);
        assert_eq!(ContentDate::parse("2024-01-15T10:00:00"), expected);
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        assert!(ContentDate::parse("2024/06/15").is_none());
        assert!(ContentDate::parse("2024-6-15").is_none());
        assert!(ContentDate::parse("2024-06-15 extra").is_none());
        assert!(ContentDate::parse("2024-06-15T24:00:00Z").is_none());
        assert!(ContentDate::parse("2024-06-15T10:00:00.Z").is_none());
        assert!(ContentDate::parse("2024-06-15T10:00:00+0200").is_none());
        assert!(ContentDate::parse("2024-06-15T").is_none());
        assert!(ContentDate::parse("").is_none());
    }

    #[test]
    fn test_validate_invalid_day() {
        assert!(ContentDate::from_ymd(2024, 6, 0).validate().is_err());
        assert!(ContentDate::from_ymd(2024, 1, 32).validate().is_err());
        assert!(ContentDate::from_ymd(2024, 4, 31).validate().is_err());
        assert!(ContentDate::from_ymd(2024, 13, 1).validate().is_err());
    }

    #[test]
    fn test_validate_leap_year() {
        assert!(ContentDate::from_ymd(2024, 2, 29).validate().is_ok());
        assert!(ContentDate::from_ymd(2000, 2, 29).validate().is_ok()); // divisible by 400
        assert!(ContentDate::from_ymd(2023, 2, 29).validate().is_err());
        assert!(ContentDate::from_ymd(1900, 2, 29).validate().is_err()); // divisible by 100 but not 400
    }

    #[test]
    fn test_ordering_is_chronological() {
        let a = ContentDate::from_ymd(2023, 12, 31);
        let b = ContentDate::from_ymd(2024, 1, 1);
        let c = ContentDate::from_ymd(2024, 1, 2);
        assert!(a < b && b < c);
    }

    #[test]
    fn test_parse_bound_bare_year() {
        assert_eq!(
            ContentDate::parse_bound("2023", false),
            Some(ContentDate::from_ymd(2023, 1, 1))
        );
        assert_eq!(
            ContentDate::parse_bound("2023", true),
            Some(ContentDate::from_ymd(2023, 12, 31))
        );
        assert_eq!(
            ContentDate::parse_bound("2023-05-04", true),
            Some(ContentDate::from_ymd(2023, 5, 4))
        );
        assert_eq!(ContentDate::parse_bound("20x3", false), None);
    }

    #[test]
    fn test_display_is_iso() {
        assert_eq!(ContentDate::from_ymd(2024, 3, 7).to_string(), "2024-03-07");
    }

    #[test]
    fn test_serde_as_string() {
        let date: ContentDate = serde_yaml::from_str("2024-01-15").unwrap();
        assert_eq!(date, ContentDate::from_ymd(2024, 1, 15));
        assert_eq!(serde_json::to_string(&date).unwrap(), "\"2024-01-15\"");
        assert!(serde_yaml::from_str::<ContentDate>("2024-02-30").is_err());
    }

    #[test]
    fn test_deserialize_year_number_or_string() {
        #[derive(Deserialize)]
        struct Holder {
            #[serde(deserialize_with = "deserialize_year")]
            year: u16,
        }

        let number: Holder = serde_yaml::from_str("year: 2023").unwrap();
        assert_eq!(number.year, 2023);
        let text: Holder = serde_yaml::from_str("year: \"2021\"").unwrap();
        assert_eq!(text.year, 2021);
        assert!(serde_yaml::from_str::<Holder>("year: soon").is_err());
    }
}
