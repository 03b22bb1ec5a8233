//! `dd-MM-yyyy` date text helpers.

use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// chrono pattern for the day-first text format used at the edges.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Date text parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateParseError {
    Empty,
    Invalid(String),
}

impl Display for DateParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "date must not be empty"),
            Self::Invalid(value) => {
                write!(f, "invalid date `{value}`; expected dd-MM-yyyy")
            }
        }
    }
}

impl Error for DateParseError {}

/// Parses `dd-MM-yyyy` text (surrounding whitespace ignored).
pub fn parse_date(input: &str) -> Result<NaiveDate, DateParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DateParseError::Empty);
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| DateParseError::Invalid(trimmed.to_string()))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::{format_date, parse_date, DateParseError};
    use chrono::NaiveDate;

    #[test]
    fn parse_accepts_day_first_format() {
        let parsed = parse_date(" 02-03-2024 ").expect("valid date should parse");
        assert_eq!(parsed, NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
        assert_eq!(format_date(parsed), "02-03-2024");
    }

    #[test]
    fn parse_rejects_empty_and_iso_input() {
        assert_eq!(parse_date("   "), Err(DateParseError::Empty));
        assert_eq!(
            parse_date("2024-03-02"),
            Err(DateParseError::Invalid("2024-03-02".to_string()))
        );
    }

    #[test]
    fn parse_rejects_impossible_calendar_day() {
        assert!(matches!(
            parse_date("31-02-2024"),
            Err(DateParseError::Invalid(_))
        ));
    }
}
