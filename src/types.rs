use crate::consts::{
    CENTURIES, CENTURY_CYCLE, DAY_TENS, DAYS_IN_MONTH, DIGITS, FEBRUARY, FEBRUARY_DAYS_LEAP,
    GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, LONG_MONTHS, MONTH_NAMES,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// One positional digit group of a `CCYY-MM-DD` value.
///
/// Each slot owns a fixed domain of candidates, in the order the picker
/// shows them (see [`Slot::candidates`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Slot {
    #[display(fmt = "century")]
    Century,
    #[display(fmt = "decade")]
    Decade,
    #[display(fmt = "year-unit")]
    YearUnit,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day-tens")]
    DayTens,
    #[display(fmt = "day-unit")]
    DayUnit,
}

impl Slot {
    /// All slots, most significant first
    pub const ALL: [Self; 6] = [
        Self::Century,
        Self::Decade,
        Self::YearUnit,
        Self::Month,
        Self::DayTens,
        Self::DayUnit,
    ];

    /// Display values offered for this slot
    pub const fn candidates(self) -> &'static [&'static str] {
        match self {
            Self::Century => &CENTURIES,
            Self::Decade | Self::YearUnit | Self::DayUnit => &DIGITS,
            Self::Month => &MONTH_NAMES,
            Self::DayTens => &DAY_TENS,
        }
    }

    /// Position of `value` within the slot's candidates
    pub fn index_of(self, value: &str) -> Option<usize> {
        self.candidates().iter().position(|c| *c == value)
    }

    /// Character positions of the date string this slot writes to
    pub const fn span(self) -> Range<usize> {
        match self {
            Self::Century => 0..2,
            Self::Decade => 2..3,
            Self::YearUnit => 3..4,
            Self::Month => 5..7,
            Self::DayTens => 8..9,
            Self::DayUnit => 9..10,
        }
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in `month` of `year`, or 0 for a month outside `1..=12`
pub const fn days_in_month(year: u16, month: u8) -> u8 {
    if month == 0 || month as usize >= DAYS_IN_MONTH.len() {
        0
    } else if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

pub fn is_long_month(month: u8) -> bool {
    LONG_MONTHS.contains(&month)
}

/// Name of a 1-indexed month
pub fn month_name(month: u8) -> Option<&'static str> {
    MONTH_NAMES.get(usize::from(month).checked_sub(1)?).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_candidates() {
        assert_eq!(Slot::Century.candidates(), &["19", "20", "21"]);
        assert_eq!(Slot::DayTens.candidates(), &["0", "1", "2", "3"]);
        assert_eq!(Slot::Month.candidates().len(), 12);
        for slot in [Slot::Decade, Slot::YearUnit, Slot::DayUnit] {
            assert_eq!(slot.candidates().len(), 10, "{slot} should offer ten digits");
        }
    }

    #[test]
    fn test_slot_index_of() {
        assert_eq!(Slot::Month.index_of("April"), Some(3));
        assert_eq!(Slot::Century.index_of("21"), Some(2));
        assert_eq!(Slot::Century.index_of("18"), None);
        assert_eq!(Slot::DayTens.index_of("4"), None);
        assert_eq!(Slot::Month.index_of("april"), None);
    }

    #[test]
    fn test_slot_span_widths() {
        for slot in Slot::ALL {
            let expected = match slot {
                Slot::Century | Slot::Month => 2,
                _ => 1,
            };
            assert_eq!(slot.span().len(), expected, "{slot} has the wrong width");
        }
        assert_eq!(Slot::Month.span(), 5..7);
        assert_eq!(Slot::DayUnit.span(), 9..10);
    }

    #[test]
    fn test_slot_display_and_serde() {
        assert_eq!(Slot::YearUnit.to_string(), "year-unit");
        assert_eq!(serde_json::to_string(&Slot::DayTens).unwrap(), "\"day-tens\"");
        let parsed: Slot = serde_json::from_str("\"century\"").unwrap();
        assert_eq!(parsed, Slot::Century);
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year: u16,
            is_leap: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 2024,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2023,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 1900,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2100,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2000,
                is_leap: true,
                description: "divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description,
            );
        }
    }

    #[test]
    fn test_days_in_month() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12 {
            assert_eq!(
                days_in_month(2023, month),
                expected[month as usize],
                "Month {month} has incorrect day count"
            );
        }
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2024, 0), 0);
        assert_eq!(days_in_month(2024, 13), 0);
    }

    #[test]
    fn test_long_months_match_day_counts() {
        for month in 1..=12 {
            assert_eq!(is_long_month(month), days_in_month(2023, month) == 31);
        }
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1), Some("January"));
        assert_eq!(month_name(12), Some("December"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
    }
}
