mod consts;
mod constraint;
mod picker;
mod prelude;
mod select;
mod store;
mod text;
mod types;

pub use consts::*;
pub use constraint::{ConstraintResult, Correction, Rule, evaluate};
pub use picker::{DatePicker, PickerOptions, View};
pub use select::{SelectError, Selection, select, splice};
pub use store::DateStore;
pub use text::{DisplayFormat, TextField, format_date, matches_pattern};
pub use types::{Slot, days_in_month, is_leap_year, is_long_month, month_name};

use crate::prelude::*;
use std::fmt;
use std::str::FromStr;

/// A date encoded as the fixed-width digit string `CCYY-MM-DD`.
///
/// The value is only checked for shape: ten characters, ASCII digits
/// everywhere except the two separators. Calendar validity is the job of
/// [`evaluate`]. There is no "unset" state; positions the user has not
/// picked yet simply keep their previous digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateDigits([u8; DATE_LEN]);

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date length: {_0} (expected {})", DATE_LEN)]
    InvalidLength(usize),
    #[display(fmt = "Expected '{}' at position {position}, found '{found}'", DATE_SEPARATOR)]
    MissingSeparator { position: usize, found: char },
    #[display(fmt = "Expected a digit at position {position}, found '{found}'")]
    InvalidDigit { position: usize, found: char },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl DateDigits {
    /// The string form, always exactly ten ASCII characters
    pub fn as_str(&self) -> &str {
        // Only ASCII digits and separators are ever stored
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// The characters covered by `slot`
    pub fn slot_text(&self, slot: Slot) -> &str {
        &self.as_str()[slot.span()]
    }

    /// Numeric value of the digit at character `position`
    #[inline]
    pub const fn digit(&self, position: usize) -> u8 {
        self.0[position] - b'0'
    }

    /// Overwrites the digit at character `position`.
    ///
    /// Separator positions and values above 9 are ignored.
    pub(crate) fn put_digit(&mut self, position: usize, value: u8) {
        if value <= 9 && !SEPARATOR_POSITIONS.contains(&position) && position < DATE_LEN {
            self.0[position] = b'0' + value;
        }
    }

    pub(crate) fn put_day(&mut self, day: u8) {
        self.put_digit(8, day / 10);
        self.put_digit(9, day % 10);
    }

    pub fn century(&self) -> u8 {
        self.digit(0) * 10 + self.digit(1)
    }

    pub fn year(&self) -> u16 {
        (0..4).fold(0, |acc, i| acc * 10 + u16::from(self.digit(i)))
    }

    pub fn month(&self) -> u8 {
        self.digit(5) * 10 + self.digit(6)
    }

    pub fn day(&self) -> u8 {
        self.digit(8) * 10 + self.digit(9)
    }

    #[inline]
    pub const fn day_tens(&self) -> u8 {
        self.digit(8)
    }

    #[inline]
    pub const fn day_unit(&self) -> u8 {
        self.digit(9)
    }

    /// Whether (year, month, day) names a real Gregorian calendar date
    pub fn is_calendar_valid(&self) -> bool {
        let day = self.day();
        day >= 1 && day <= days_in_month(self.year(), self.month())
    }

    /// Index of the candidate of `slot` that matches this value, if any.
    ///
    /// This is the "active" mark of a slot group: at most one candidate per
    /// slot is selected at a time.
    pub fn active_candidate(&self, slot: Slot) -> Option<usize> {
        match slot {
            Slot::Month => usize::from(self.month())
                .checked_sub(1)
                .filter(|i| *i < slot.candidates().len()),
            _ => slot.index_of(self.slot_text(slot)),
        }
    }
}

impl fmt::Display for DateDigits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateDigits {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let count = trimmed.chars().count();
        if count != DATE_LEN {
            return Err(ParseError::InvalidLength(count));
        }

        let mut bytes = [0u8; DATE_LEN];
        for (position, found) in trimmed.chars().enumerate() {
            if SEPARATOR_POSITIONS.contains(&position) {
                if found != DATE_SEPARATOR {
                    return Err(ParseError::MissingSeparator { position, found });
                }
            } else if !found.is_ascii_digit() {
                return Err(ParseError::InvalidDigit { position, found });
            }
            // Every accepted character is ASCII at this point
            bytes[position] = found as u8;
        }

        Ok(Self(bytes))
    }
}

impl TryFrom<&str> for DateDigits {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl serde::Serialize for DateDigits {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for DateDigits {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
pub(crate) fn date(s: &str) -> DateDigits {
    s.parse().unwrap()
}
