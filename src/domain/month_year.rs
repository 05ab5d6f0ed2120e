//! FIX MonthYear grammar: `YYYYMM`, `YYYYMMDD` or `YYYYMMwN`.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::domain::error::ParseError;
use crate::domain::grammar::Cursor;

/// Optional refinement of a month: a calendar day or a week of the month.
///
/// Within the same month a plain month orders first, then days, then weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MonthDetail {
    Day(u8),
    Week(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthYear {
    year: u16,
    month: u8,
    detail: Option<MonthDetail>,
}

impl MonthYear {
    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn detail(&self) -> Option<MonthDetail> {
        self.detail
    }

    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut cursor = Cursor::new(input);
        let year = cursor.fixed_digits(4, "year")?;
        let month_pos = cursor.pos();
        let month = cursor.fixed_digits(2, "month")?;
        if !(1..=12).contains(&month) {
            return Err(ParseError::new(
                format!("month {month:02} out of range"),
                month_pos,
            ));
        }

        let detail = if cursor.at_end() {
            None
        } else if cursor.consume('w') {
            let week_pos = cursor.pos();
            let week = cursor.fixed_digits(1, "week")?;
            if !(1..=5).contains(&week) {
                return Err(ParseError::new(
                    format!("week {week} out of range"),
                    week_pos,
                ));
            }
            Some(MonthDetail::Week(week as u8))
        } else {
            let day_pos = cursor.pos();
            let day = cursor.fixed_digits(2, "day")?;
            if NaiveDate::from_ymd_opt(year as i32, month, day).is_none() {
                return Err(ParseError::new(
                    format!("day {day:02} does not exist in {year:04}{month:02}"),
                    day_pos,
                ));
            }
            Some(MonthDetail::Day(day as u8))
        };
        cursor.expect_end()?;

        Ok(Self {
            year: year as u16,
            month: month as u8,
            detail,
        })
    }
}

impl FromStr for MonthYear {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for MonthYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{:02}", self.year, self.month)?;
        match self.detail {
            None => Ok(()),
            Some(MonthDetail::Day(day)) => write!(f, "{day:02}"),
            Some(MonthDetail::Week(week)) => write!(f, "w{week}"),
        }
    }
}
