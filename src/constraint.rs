//! Candidate constraints of the day slots.
//!
//! The rules form a fixed table evaluated in [`Rule::ORDER`]. Each rule may
//! disable candidates and rewrite the working date; a rule only ever
//! disables, so a later rule can never re-enable what an earlier one
//! disabled. Corrections are applied immediately, so each rule sees the
//! date as left by the rules before it.

use crate::consts::{DAY_TENS, DIGITS, FEBRUARY, FEBRUARY_DAYS};
use crate::prelude::*;
use crate::types::{is_leap_year, is_long_month};
use crate::{DateDigits, Slot};

/// A rule of the constraint table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Rule {
    /// February never reaches day 30, and only reaches day 29 in leap years
    #[display(fmt = "february")]
    February,
    /// Days 30 and 31 depend on the month being short or long
    #[display(fmt = "month-length")]
    MonthLength,
    /// There is no day 00
    #[display(fmt = "zero-day")]
    ZeroDay,
}

impl Rule {
    /// Evaluation order of the rule table
    pub const ORDER: [Self; 3] = [Self::February, Self::MonthLength, Self::ZeroDay];

    fn apply(self, result: &mut ConstraintResult) {
        let date = result.date;
        match self {
            Self::February => {
                if date.month() != FEBRUARY {
                    return;
                }
                result.day_tens[3] = false;

                if date.day_tens() == 3 {
                    result.correct(self, Slot::DayTens, FEBRUARY_DAYS / 10);
                    result.correct(self, Slot::DayUnit, FEBRUARY_DAYS % 10);
                }

                if !is_leap_year(date.year()) && result.date.day_tens() == 2 {
                    result.day_unit[9] = false;
                    if result.date.day_unit() == 9 {
                        result.correct(self, Slot::DayUnit, FEBRUARY_DAYS % 10);
                    }
                }
            }
            Self::MonthLength => {
                if date.day_tens() != 3 {
                    return;
                }
                let last_unit = u8::from(is_long_month(date.month()));
                for enabled in &mut result.day_unit[usize::from(last_unit) + 1..] {
                    *enabled = false;
                }
                if date.day_unit() > last_unit {
                    result.correct(self, Slot::DayUnit, last_unit);
                }
            }
            Self::ZeroDay => {
                if date.day_tens() != 0 {
                    return;
                }
                result.day_unit[0] = false;
                if date.day_unit() == 0 {
                    result.correct(self, Slot::DayUnit, 1);
                }
            }
        }
    }
}

/// A digit rewritten by a rule because the date it belonged to no longer exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Correction {
    pub rule:  Rule,
    pub slot:  Slot,
    pub value: u8,
}

/// Outcome of evaluating the rule table against one date.
///
/// Slots other than the day slots have no constraints: every candidate of
/// theirs is always enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintResult {
    date:        DateDigits,
    day_tens:    [bool; DAY_TENS.len()],
    day_unit:    [bool; DIGITS.len()],
    corrections: Vec<Correction>,
}

impl ConstraintResult {
    fn new(date: DateDigits) -> Self {
        Self {
            date,
            day_tens: [true; DAY_TENS.len()],
            day_unit: [true; DIGITS.len()],
            corrections: Vec::new(),
        }
    }

    fn correct(&mut self, rule: Rule, slot: Slot, value: u8) {
        let before = self.date;
        self.date.put_digit(slot.span().start, value);
        #[cfg(feature = "log")]
        log::debug!("{rule} rule corrected {slot} to {value}: {before} -> {}", self.date);
        if before != self.date {
            self.corrections.push(Correction { rule, slot, value });
        }
    }

    /// The date with every correction applied
    #[inline]
    pub const fn date(&self) -> DateDigits {
        self.date
    }

    /// Corrections in the order they were applied
    pub fn corrections(&self) -> &[Correction] {
        &self.corrections
    }

    pub fn is_corrected(&self) -> bool {
        !self.corrections.is_empty()
    }

    /// Whether the candidate at `index` of `slot` can currently be chosen
    pub fn is_enabled(&self, slot: Slot, index: usize) -> bool {
        let flags: &[bool] = match slot {
            Slot::DayTens => &self.day_tens,
            Slot::DayUnit => &self.day_unit,
            _ => return index < slot.candidates().len(),
        };
        flags.get(index).copied().unwrap_or(false)
    }

    /// Display values of `slot` that are currently disabled
    pub fn disabled(&self, slot: Slot) -> impl Iterator<Item = &'static str> + '_ {
        slot.candidates()
            .iter()
            .enumerate()
            .filter(move |(index, _)| !self.is_enabled(slot, *index))
            .map(|(_, candidate)| *candidate)
    }
}

/// Runs the rule table against `date`.
///
/// Pure and deterministic: the same date always yields the same flags and
/// corrections. The flags describe the corrected date, not the input.
pub fn evaluate(date: DateDigits) -> ConstraintResult {
    let mut result = ConstraintResult::new(date);
    for rule in Rule::ORDER {
        rule.apply(&mut result);
    }
    result
}
