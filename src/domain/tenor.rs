//! FIX Tenor grammar: a unit letter followed by an offset (`D5`, `W2`, `M3`, `Y10`).

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::domain::error::ParseError;
use crate::domain::grammar::Cursor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TenorUnit {
    Day,
    Week,
    Month,
    Year,
}

impl TenorUnit {
    fn letter(self) -> char {
        match self {
            TenorUnit::Day => 'D',
            TenorUnit::Week => 'W',
            TenorUnit::Month => 'M',
            TenorUnit::Year => 'Y',
        }
    }

    fn approx_days(self) -> u64 {
        match self {
            TenorUnit::Day => 1,
            TenorUnit::Week => 7,
            TenorUnit::Month => 30,
            TenorUnit::Year => 365,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tenor {
    unit: TenorUnit,
    offset: u32,
}

impl Tenor {
    pub fn unit(&self) -> TenorUnit {
        self.unit
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Length in days using 30-day months and 365-day years.
    pub fn approx_days(&self) -> u64 {
        self.unit.approx_days() * u64::from(self.offset)
    }

    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut cursor = Cursor::new(input);
        let unit = match cursor.advance() {
            Some('D') => TenorUnit::Day,
            Some('W') => TenorUnit::Week,
            Some('M') => TenorUnit::Month,
            Some('Y') => TenorUnit::Year,
            Some(ch) => {
                return Err(ParseError::new(
                    format!("expected tenor unit (D, W, M, Y), found '{ch}'"),
                    0,
                ));
            }
            None => return Err(ParseError::new("expected tenor unit", 0)),
        };

        let digits = cursor.digit_run(1, 9, "tenor offset")?;
        cursor.expect_end()?;

        let offset: u32 = digits
            .parse()
            .map_err(|_| ParseError::new(format!("invalid tenor offset: {digits}"), 1))?;
        if offset == 0 {
            return Err(ParseError::new("tenor offset must be positive", 1));
        }
        Ok(Self { unit, offset })
    }
}

impl Ord for Tenor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.approx_days()
            .cmp(&other.approx_days())
            .then(self.unit.cmp(&other.unit))
            .then(self.offset.cmp(&other.offset))
    }
}

impl PartialOrd for Tenor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Tenor {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Tenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.unit.letter(), self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_unit() {
        assert_eq!(Tenor::parse("D5").unwrap().unit(), TenorUnit::Day);
        assert_eq!(Tenor::parse("W2").unwrap().unit(), TenorUnit::Week);
        assert_eq!(Tenor::parse("M3").unwrap().unit(), TenorUnit::Month);
        let y = Tenor::parse("Y10").unwrap();
        assert_eq!((y.unit(), y.offset()), (TenorUnit::Year, 10));
    }

    #[test]
    fn rejects_malformed() {
        assert!(Tenor::parse("").is_err());
        assert!(Tenor::parse("D").is_err());
        assert!(Tenor::parse("D0").is_err());
        assert!(Tenor::parse("d5").is_err());
        assert!(Tenor::parse("5D").is_err());
        assert!(Tenor::parse("M3 ").is_err());
        assert!(Tenor::parse("M-3").is_err());
        assert!(Tenor::parse("X1").is_err());
    }

    #[test]
    fn orders_by_length() {
        let d10 = Tenor::parse("D10").unwrap();
        let w1 = Tenor::parse("W1").unwrap();
        let w2 = Tenor::parse("W2").unwrap();
        let m1 = Tenor::parse("M1").unwrap();
        let y1 = Tenor::parse("Y1").unwrap();
        let m12 = Tenor::parse("M12").unwrap();
        assert!(w1 < d10);
        assert!(d10 < w2);
        assert!(w2 < m1);
        assert!(m12 < y1);
    }

    #[test]
    fn equal_length_different_units_are_distinct() {
        let d7 = Tenor::parse("D7").unwrap();
        let w1 = Tenor::parse("W1").unwrap();
        assert_ne!(d7, w1);
        assert!(d7 < w1);
    }

    #[test]
    fn display_reproduces_text() {
        assert_eq!(Tenor::parse("M18").unwrap().to_string(), "M18");
    }
}
