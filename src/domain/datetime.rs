//! FIX date-time grammar.
//!
//! Accepted forms, all culture-invariant and interpreted as UTC:
//! - `UTCTimestamp`: `YYYYMMDD-HH:MM:SS[.f]` with a 1-9 digit fraction
//! - `UTCDateOnly` / `LocalMktDate`: `YYYYMMDD`
//! - `TZTimestamp`: `YYYYMMDD-HH:MM[:SS[.f]]` followed by `Z` or `±HH[:MM]`
//!
//! Equality and ordering consider only the instant, so `20240102-10:00:00`
//! equals `20240102-12:00:00+02`.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};

use crate::domain::error::ParseError;
use crate::domain::grammar::Cursor;

/// Shape of the text a [`FixDateTime`] was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateTimeForm {
    Timestamp { fraction_digits: u8 },
    DateOnly,
    TzTimestamp { seconds: bool, fraction_digits: u8 },
}

#[derive(Debug, Clone, Copy)]
pub struct FixDateTime {
    instant: NaiveDateTime,
    form: DateTimeForm,
}

impl FixDateTime {
    pub fn new(instant: NaiveDateTime, form: DateTimeForm) -> Self {
        Self { instant, form }
    }

    /// UTC instant.
    pub fn instant(&self) -> NaiveDateTime {
        self.instant
    }

    pub fn form(&self) -> DateTimeForm {
        self.form
    }

    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut cursor = Cursor::new(input);
        let date = parse_date(&mut cursor)?;

        if cursor.at_end() {
            return Ok(Self::new(
                date.and_time(NaiveTime::MIN),
                DateTimeForm::DateOnly,
            ));
        }

        cursor.expect_char('-')?;
        let hour = cursor.fixed_digits(2, "hour")?;
        cursor.expect_char(':')?;
        let minute = cursor.fixed_digits(2, "minute")?;

        let mut second = 0;
        let mut seconds = false;
        if cursor.consume(':') {
            second = cursor.fixed_digits(2, "second")?;
            seconds = true;
        }

        let mut nanos = 0;
        let mut fraction_digits = 0u8;
        if seconds && cursor.consume('.') {
            let digits = cursor.digit_run(1, 9, "fractional seconds")?;
            fraction_digits = digits.len() as u8;
            nanos = scale_fraction(digits);
        }

        let time_pos = cursor.pos();
        let offset_minutes = parse_zone(&mut cursor)?;
        cursor.expect_end()?;

        if offset_minutes.is_none() && !seconds {
            return Err(ParseError::new("expected ':SS' seconds", time_pos));
        }

        let time = NaiveTime::from_hms_nano_opt(hour, minute, second, nanos)
            .filter(|_| second < 60)
            .ok_or_else(|| {
                ParseError::new(format!("invalid time {hour:02}:{minute:02}:{second:02}"), 9)
            })?;
        let local = date.and_time(time);

        match offset_minutes {
            None => Ok(Self::new(
                local,
                DateTimeForm::Timestamp { fraction_digits },
            )),
            Some(offset) => {
                // The UTC instant must still print as a four-digit year.
                let instant = local
                    .checked_sub_signed(TimeDelta::minutes(offset))
                    .filter(|utc| (0..=9999).contains(&utc.year()))
                    .ok_or_else(|| ParseError::new("timestamp out of range", time_pos))?;
                Ok(Self::new(
                    instant,
                    DateTimeForm::TzTimestamp {
                        seconds,
                        fraction_digits,
                    },
                ))
            }
        }
    }
}

fn parse_date(cursor: &mut Cursor<'_>) -> Result<NaiveDate, ParseError> {
    let year = cursor.fixed_digits(4, "year")?;
    let month = cursor.fixed_digits(2, "month")?;
    let day = cursor.fixed_digits(2, "day")?;
    NaiveDate::from_ymd_opt(year as i32, month, day).ok_or_else(|| {
        ParseError::new(format!("invalid date {year:04}{month:02}{day:02}"), 0)
    })
}

/// Minutes east of UTC, or `None` when no zone designator is present.
fn parse_zone(cursor: &mut Cursor<'_>) -> Result<Option<i64>, ParseError> {
    let sign = match cursor.peek() {
        None => return Ok(None),
        Some('Z') => {
            cursor.advance();
            return Ok(Some(0));
        }
        Some('+') => 1,
        Some('-') => -1,
        Some(ch) => {
            return Err(ParseError::new(
                format!("expected zone designator, found '{ch}'"),
                cursor.pos(),
            ));
        }
    };
    cursor.advance();

    let start = cursor.pos();
    let hours = cursor.fixed_digits(2, "zone hour")?;
    let minutes = if cursor.consume(':') {
        cursor.fixed_digits(2, "zone minute")?
    } else {
        0
    };
    if hours > 14 || minutes > 59 {
        return Err(ParseError::new(
            format!("zone offset {hours:02}:{minutes:02} out of range"),
            start,
        ));
    }
    Ok(Some(sign * i64::from(hours * 60 + minutes)))
}

fn scale_fraction(digits: &str) -> u32 {
    let mut nanos: u32 = 0;
    for ch in digits.chars() {
        nanos = nanos * 10 + ch.to_digit(10).unwrap_or(0);
    }
    nanos * 10u32.pow(9 - digits.len() as u32)
}

impl FromStr for FixDateTime {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl PartialEq for FixDateTime {
    fn eq(&self, other: &Self) -> bool {
        self.instant == other.instant
    }
}

impl Eq for FixDateTime {}

impl PartialOrd for FixDateTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FixDateTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.instant.cmp(&other.instant)
    }
}

impl fmt::Display for FixDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = &self.instant;
        write!(f, "{:04}{:02}{:02}", t.year(), t.month(), t.day())?;

        let (seconds, fraction_digits, zulu) = match self.form {
            DateTimeForm::DateOnly => return Ok(()),
            DateTimeForm::Timestamp { fraction_digits } => (true, fraction_digits, false),
            DateTimeForm::TzTimestamp {
                seconds,
                fraction_digits,
            } => (seconds, fraction_digits, true),
        };

        write!(f, "-{:02}:{:02}", t.hour(), t.minute())?;
        if seconds {
            write!(f, ":{:02}", t.second())?;
        }
        if fraction_digits > 0 {
            let digits = u32::from(fraction_digits);
            let fraction = t.nanosecond() / 10u32.pow(9 - digits);
            write!(f, ".{:0width$}", fraction, width = digits as usize)?;
        }
        if zulu {
            f.write_str("Z")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, ns: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_nano_opt(h, mi, s, ns)
            .unwrap()
    }

    #[test]
    fn utc_timestamp_seconds() {
        let dt = FixDateTime::parse("20240315-14:30:05").unwrap();
        assert_eq!(dt.instant(), utc(2024, 3, 15, 14, 30, 5, 0));
        assert_eq!(dt.form(), DateTimeForm::Timestamp { fraction_digits: 0 });
    }

    #[test]
    fn utc_timestamp_millis_and_nanos() {
        let ms = FixDateTime::parse("20240315-14:30:05.123").unwrap();
        assert_eq!(ms.instant(), utc(2024, 3, 15, 14, 30, 5, 123_000_000));

        let ns = FixDateTime::parse("20240315-14:30:05.000000007").unwrap();
        assert_eq!(ns.instant(), utc(2024, 3, 15, 14, 30, 5, 7));
    }

    #[test]
    fn date_only_is_midnight() {
        let dt = FixDateTime::parse("20231231").unwrap();
        assert_eq!(dt.instant(), utc(2023, 12, 31, 0, 0, 0, 0));
        assert_eq!(dt.form(), DateTimeForm::DateOnly);
        assert_eq!(dt.to_string(), "20231231");
    }

    #[test]
    fn tz_timestamp_normalised_to_utc() {
        let east = FixDateTime::parse("20240102-12:00:00+02").unwrap();
        let plain = FixDateTime::parse("20240102-10:00:00").unwrap();
        assert_eq!(east, plain);

        let west = FixDateTime::parse("20240101-23:30-05:30").unwrap();
        assert_eq!(west.instant(), utc(2024, 1, 2, 5, 0, 0, 0));
        assert_eq!(west.to_string(), "20240102-05:00Z");
    }

    #[test]
    fn zone_shift_stays_within_four_digit_years() {
        for text in ["99991231-23:00-05", "00000101-01:00+02"] {
            let err = FixDateTime::parse(text).unwrap_err();
            assert_eq!(err.message, "timestamp out of range");
            assert_eq!(err.position, 14);
        }
        let last = FixDateTime::parse("99991231-18:59-05").unwrap();
        assert_eq!(last.to_string(), "99991231-23:59Z");
        let first = FixDateTime::parse("00000101-02:00+02").unwrap();
        assert_eq!(first.to_string(), "00000101-00:00Z");
    }

    #[test]
    fn display_preserves_precision() {
        for text in [
            "20240315-14:30:05",
            "20240315-14:30:05.120",
            "20240315-14:30:05.000001",
            "20240315-14:30:05Z",
        ] {
            assert_eq!(FixDateTime::parse(text).unwrap().to_string(), text);
        }
    }

    #[test]
    fn rejects_invalid_dates_and_times() {
        assert!(FixDateTime::parse("20240230").is_err());
        assert!(FixDateTime::parse("20241301").is_err());
        assert!(FixDateTime::parse("20240101-24:00:00").is_err());
        assert!(FixDateTime::parse("20240101-23:59:60").is_err());
        assert!(FixDateTime::parse("20240101-23:59").is_err());
        assert!(FixDateTime::parse("20240101-23:59:59.").is_err());
        assert!(FixDateTime::parse("20240101-23:59:59+15").is_err());
    }

    #[test]
    fn rejects_other_cultures_and_noise() {
        assert!(FixDateTime::parse("2024-01-01").is_err());
        assert!(FixDateTime::parse("01/02/2024").is_err());
        assert!(FixDateTime::parse("20240101 10:00:00").is_err());
        assert!(FixDateTime::parse("20240101-10:00:00x").is_err());
        assert!(FixDateTime::parse("").is_err());
    }

    #[test]
    fn ordering_follows_instant() {
        let early = FixDateTime::parse("20240101-09:00:00").unwrap();
        let late = FixDateTime::parse("20240101").unwrap();
        assert!(late < early);
    }
}
