//! Compact lesson codes.
//!
//! The upstream service encodes a course meeting as a five-digit string
//! `DSSEE`: weekday (1..=7) followed by the two-digit start and end
//! periods of a 12-period day, e.g. `10304` for Monday, periods 3-4.
//! Meetings span a two-period block, so the grid works in six slots per
//! day: slot = (start + 1) / 2.

use crate::error::SchemaError;
use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lesson {
    day: u8,
    start: u8,
    end: u8,
}

impl Lesson {
    /// Parses a five-digit lesson code.
    pub fn parse(record: &'static str, code: &str) -> Result<Self, SchemaError> {
        let invalid = || SchemaError::Lesson {
            record,
            code: code.to_string(),
        };

        if code.len() != 5 || !code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let day: u8 = code[0..1].parse().map_err(|_| invalid())?;
        let start: u8 = code[1..3].parse().map_err(|_| invalid())?;
        let end: u8 = code[3..5].parse().map_err(|_| invalid())?;

        if !(1..=7).contains(&day) || !(1..=12).contains(&start) || end < start || end > 12 {
            return Err(invalid());
        }

        Ok(Self { day, start, end })
    }

    /// Weekday, 1 = Monday through 7 = Sunday.
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Starting period within the 12-period day.
    pub fn start_period(&self) -> u8 {
        self.start
    }

    /// Ending period within the 12-period day.
    pub fn end_period(&self) -> u8 {
        self.end
    }

    /// Grid slot within the six-slot half-day scheme.
    pub fn slot(&self) -> u8 {
        (self.start + 1) / 2
    }

    /// The wire form of the code.
    pub fn code(&self) -> String {
        format!("{}{:02}{:02}", self.day, self.start, self.end)
    }
}

impl fmt::Display for Lesson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl Serialize for Lesson {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.code())
    }
}
