//! cite_date - A small ISO 8601 calendar date parser
//!
//! Accepts the reduced-precision forms `YYYY`, `YYYY-MM` and `YYYY-MM-DD`,
//! optionally followed by a time of day and zone designator, as found in
//! HTML `article:published_time` metadata.

use std::fmt;
use std::str::FromStr;

use winnow::combinator::{alt, eof, opt, preceded};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::{take, take_while};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A calendar date with optional month, day and time components.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Date {
    pub year: i32,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub time: Option<Time>,
}

/// Time of day. Seconds default to zero when omitted; fractional seconds are dropped.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Time {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub offset: Option<Offset>,
}

/// Zone designator following a time.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Offset {
    /// `Z`
    Utc,
    /// Signed offset from UTC in minutes.
    Minutes(i32),
}

/// How much of the date was given.
#[derive(Debug, PartialEq, Eq, Clone, Copy, PartialOrd, Ord)]
pub enum Precision {
    Year,
    Month,
    Day,
}

impl Date {
    pub fn precision(&self) -> Precision {
        match (self.month, self.day) {
            (Some(_), Some(_)) => Precision::Day,
            (Some(_), None) => Precision::Month,
            _ => Precision::Year,
        }
    }
}

/// Error returned when a string is not an ISO 8601 calendar date.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ParseDateError {
    input: String,
}

impl fmt::Display for ParseDateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not an ISO 8601 date: {:?}", self.input)
    }
}

impl std::error::Error for ParseDateError {}

impl FromStr for Date {
    type Err = ParseDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut input = s.trim();
        parse(&mut input).map_err(|_| ParseDateError {
            input: s.to_string(),
        })
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.year)?;
        if let Some(m) = self.month {
            write!(f, "-{:02}", m)?;
            if let Some(d) = self.day {
                write!(f, "-{:02}", d)?;
            }
        }
        if let Some(t) = self.time {
            write!(f, "T{}", t)?;
        }
        Ok(())
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)?;
        if let Some(offset) = self.offset {
            write!(f, "{}", offset)?;
        }
        Ok(())
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Offset::Utc => write!(f, "Z"),
            Offset::Minutes(m) => {
                let sign = if *m < 0 { '-' } else { '+' };
                let abs = m.abs();
                write!(f, "{}{:02}:{:02}", sign, abs / 60, abs % 60)
            }
        }
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a month, or `None` for a month outside 1..=12.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if is_leap_year(year) => Some(29),
        2 => Some(28),
        _ => None,
    }
}

fn backtrack<T>() -> Result<T, ErrMode<ContextError>> {
    Err(ErrMode::Backtrack(ContextError::default()))
}

fn two_digits(input: &mut &str) -> Result<u32, ErrMode<ContextError>> {
    let s = take(2_usize).parse_next(input)?;
    if !s.chars().all(|c| c.is_ascii_digit()) {
        return backtrack();
    }
    s.parse::<u32>()
        .map_err(|_| ErrMode::Backtrack(ContextError::default()))
}

fn parse_year(input: &mut &str) -> Result<i32, ErrMode<ContextError>> {
    let s = take(4_usize).parse_next(input)?;
    if !s.chars().all(|c| c.is_ascii_digit()) {
        return backtrack();
    }
    s.parse::<i32>()
        .map_err(|_| ErrMode::Backtrack(ContextError::default()))
}

fn parse_month(input: &mut &str) -> Result<u32, ErrMode<ContextError>> {
    let month = two_digits.parse_next(input)?;
    if (1..=12).contains(&month) {
        Ok(month)
    } else {
        backtrack()
    }
}

fn parse_offset(input: &mut &str) -> Result<Offset, ErrMode<ContextError>> {
    if input.starts_with('Z') || input.starts_with('z') {
        let _ = alt(('Z', 'z')).parse_next(input)?;
        return Ok(Offset::Utc);
    }
    let sign = alt(('+', '-')).parse_next(input)?;
    let hours = two_digits.parse_next(input)?;
    let _ = opt(':').parse_next(input)?;
    let minutes = two_digits.parse_next(input)?;
    if hours > 23 || minutes > 59 {
        return backtrack();
    }
    let total = (hours * 60 + minutes) as i32;
    Ok(Offset::Minutes(if sign == '-' { -total } else { total }))
}

fn parse_time(input: &mut &str) -> Result<Time, ErrMode<ContextError>> {
    let hour = two_digits.parse_next(input)?;
    let _ = ':'.parse_next(input)?;
    let minute = two_digits.parse_next(input)?;
    let second = opt(preceded(':', two_digits)).parse_next(input)?;
    // Fractional seconds carry no information at citation precision.
    let _ = opt(preceded(
        alt(('.', ',')),
        take_while(1.., |c: char| c.is_ascii_digit()),
    ))
    .parse_next(input)?;
    let offset = opt(parse_offset).parse_next(input)?;

    if hour > 24 || minute > 59 || second.unwrap_or(0) > 60 {
        return backtrack();
    }

    Ok(Time {
        hour,
        minute,
        second: second.unwrap_or(0),
        offset,
    })
}

/// Parses a date prefix, leaving any unconsumed input in place.
pub fn parse_date(input: &mut &str) -> Result<Date, ErrMode<ContextError>> {
    let year = parse_year.parse_next(input)?;
    let month = opt(preceded('-', parse_month)).parse_next(input)?;

    let day = match month {
        Some(m) => {
            let day = opt(preceded('-', two_digits)).parse_next(input)?;
            if let Some(d) = day {
                let max = days_in_month(year, m).unwrap_or(0);
                if d == 0 || d > max {
                    return backtrack();
                }
            }
            day
        }
        None => None,
    };

    let time = if day.is_some() {
        opt(preceded(alt(('T', 't', ' ')), parse_time)).parse_next(input)?
    } else {
        None
    };

    Ok(Date {
        year,
        month,
        day,
        time,
    })
}

/// Main entry point: the whole input must be a single date.
pub fn parse(input: &mut &str) -> Result<Date, ErrMode<ContextError>> {
    let date = parse_date.parse_next(input)?;
    let _ = eof.parse_next(input)?;
    Ok(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        let mut input = "2023-05-14";
        let res = parse_date(&mut input).unwrap();
        assert_eq!(res.year, 2023);
        assert_eq!(res.month, Some(5));
        assert_eq!(res.day, Some(14));
        assert_eq!(res.precision(), Precision::Day);
    }

    #[test]
    fn test_reduced_precision() {
        let date: Date = "2021-10".parse().unwrap();
        assert_eq!(date.month, Some(10));
        assert_eq!(date.day, None);
        assert_eq!(date.precision(), Precision::Month);

        let date: Date = "1962".parse().unwrap();
        assert_eq!(date.year, 1962);
        assert_eq!(date.precision(), Precision::Year);
    }

    #[test]
    fn test_published_time_metadata() {
        let date: Date = "2023-05-14T09:30:00+02:00".parse().unwrap();
        assert_eq!(date.day, Some(14));
        let time = date.time.unwrap();
        assert_eq!(time.hour, 9);
        assert_eq!(time.offset, Some(Offset::Minutes(120)));

        let date: Date = "2023-05-14T09:30:00.123Z".parse().unwrap();
        assert_eq!(date.time.unwrap().offset, Some(Offset::Utc));
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!("2023-13-01".parse::<Date>().is_err());
        assert!("2023-00".parse::<Date>().is_err());
        assert!("2023-04-31".parse::<Date>().is_err());
        assert!("2023-02-29".parse::<Date>().is_err());
        assert!("2024-02-29".parse::<Date>().is_ok());
    }

    #[test]
    fn test_rejects_garbage() {
        assert!("yesterday".parse::<Date>().is_err());
        assert!("May 14, 2023".parse::<Date>().is_err());
        assert!("2023-05-14 and more".parse::<Date>().is_err());
        assert!("".parse::<Date>().is_err());
    }

    #[test]
    fn test_round_trip() {
        let cases = vec![
            "2023-05-14",
            "2023-05",
            "1962",
            "2023-05-14T09:30:00Z",
            "2023-05-14T09:30:00-05:00",
        ];
        for case in cases {
            let date: Date = case.parse().unwrap();
            assert_eq!(date.to_string(), case);
        }
    }
}
