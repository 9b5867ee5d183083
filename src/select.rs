use crate::consts::CENTURIES;
use crate::constraint::{ConstraintResult, evaluate};
use crate::{DateDigits, DateStore, Slot};

/// Error type for slot selection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    /// The value is not one of the slot's candidates.
    #[error("Unknown {slot} candidate: {value:?}")]
    UnknownCandidate { slot: Slot, value: String },
}

/// The outcome of choosing one candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub slot:        Slot,
    /// Index of the chosen candidate within the slot
    pub index:       usize,
    /// Constraints of the date that was written to the store
    pub constraints: ConstraintResult,
    /// Whether the store value changed
    pub changed:     bool,
}

/// Writes the candidate `value` of `slot` into the matching positions of `date`.
///
/// No constraint is checked: the result may name a date that does not exist.
///
/// # Errors
/// Returns `SelectError::UnknownCandidate` if `value` is not offered by `slot`.
pub fn splice(date: DateDigits, slot: Slot, value: &str) -> Result<DateDigits, SelectError> {
    let index = candidate_index(slot, value)?;
    Ok(splice_index(date, slot, index))
}

fn candidate_index(slot: Slot, value: &str) -> Result<usize, SelectError> {
    slot.index_of(value)
        .ok_or_else(|| SelectError::UnknownCandidate {
            slot,
            value: value.to_owned(),
        })
}

fn splice_index(mut date: DateDigits, slot: Slot, index: usize) -> DateDigits {
    let start = slot.span().start;
    match slot {
        Slot::Century => {
            for (offset, byte) in CENTURIES[index].bytes().enumerate() {
                date.put_digit(start + offset, byte - b'0');
            }
        }
        Slot::Month => {
            // Candidates are month names in calendar order
            let month = index + 1;
            date.put_digit(start, (month / 10) as u8);
            date.put_digit(start + 1, (month % 10) as u8);
        }
        // Digit candidates are listed in numeric order from 0
        Slot::Decade | Slot::YearUnit | Slot::DayTens | Slot::DayUnit => {
            date.put_digit(start, index as u8);
        }
    }

    #[cfg(feature = "log")]
    log::trace!("spliced {slot} candidate #{index}: {date}");
    date
}

/// Handles one "slot value chosen" event.
///
/// The chosen value is spliced into the current date, the rule table is run
/// against the result, and the corrected date is written to the store.
/// Choosing the value that is already active leaves a valid date unchanged.
///
/// # Errors
/// Returns `SelectError::UnknownCandidate` if `value` is not offered by
/// `slot`; the store is left untouched.
pub fn select(store: &mut DateStore, slot: Slot, value: &str) -> Result<Selection, SelectError> {
    let index = candidate_index(slot, value)?;
    let candidate = splice_index(store.get(), slot, index);
    let constraints = evaluate(candidate);
    let changed = store.set(constraints.date());

    Ok(Selection {
        slot,
        index,
        constraints,
        changed,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::{HashSet, VecDeque};

    use super::*;
    use crate::date;

    fn select_on(start: &str, slot: Slot, value: &str) -> DateDigits {
        let mut store = DateStore::new(date(start));
        select(&mut store, slot, value).unwrap();
        store.get()
    }

    #[test]
    fn test_splice_positions() {
        let d = date("2023-01-31");
        assert_eq!(splice(d, Slot::Century, "19").unwrap().as_str(), "1923-01-31");
        assert_eq!(splice(d, Slot::Decade, "9").unwrap().as_str(), "2093-01-31");
        assert_eq!(splice(d, Slot::YearUnit, "0").unwrap().as_str(), "2020-01-31");
        assert_eq!(splice(d, Slot::Month, "November").unwrap().as_str(), "2023-11-31");
        assert_eq!(splice(d, Slot::DayTens, "0").unwrap().as_str(), "2023-01-01");
        assert_eq!(splice(d, Slot::DayUnit, "7").unwrap().as_str(), "2023-01-37");
    }

    #[test]
    fn test_splice_unknown_candidate() {
        let err = splice(date("2023-01-31"), Slot::Month, "Smarch").unwrap_err();
        assert_eq!(
            err,
            SelectError::UnknownCandidate {
                slot:  Slot::Month,
                value: "Smarch".to_owned(),
            }
        );
        assert_eq!(err.to_string(), "Unknown month candidate: \"Smarch\"");
    }

    #[test]
    fn test_select_unknown_candidate_leaves_store() {
        let mut store = DateStore::new(date("2023-01-31"));
        assert!(select(&mut store, Slot::Century, "22").is_err());
        assert_eq!(store.get(), date("2023-01-31"));
    }

    #[test]
    fn test_short_month_correction() {
        let mut store = DateStore::new(date("2023-01-31"));
        let selection = select(&mut store, Slot::Month, "April").unwrap();
        assert_eq!(store.get().as_str(), "2023-04-30");
        assert!(selection.changed);
        assert_eq!(selection.index, 3);
        assert_eq!(selection.constraints.corrections().len(), 1);
        assert_eq!(selection.constraints.corrections()[0].value, 0);
    }

    #[test]
    fn test_long_month_keeps_thirty() {
        let mut store = DateStore::new(date("2023-04-30"));
        let selection = select(&mut store, Slot::Month, "July").unwrap();
        assert_eq!(store.get().as_str(), "2023-07-30");
        assert!(!selection.constraints.is_corrected());
        assert!(selection.constraints.is_enabled(Slot::DayUnit, 0));
        assert!(selection.constraints.is_enabled(Slot::DayUnit, 1));
        assert!(!selection.constraints.is_enabled(Slot::DayUnit, 2));
    }

    #[test]
    fn test_day_tens_three_caps_unit() {
        assert_eq!(select_on("2023-01-19", Slot::DayTens, "3").as_str(), "2023-01-31");
        assert_eq!(select_on("2023-06-19", Slot::DayTens, "3").as_str(), "2023-06-30");
    }

    #[test]
    fn test_february_selection() {
        assert_eq!(select_on("2023-01-31", Slot::Month, "February").as_str(), "2023-02-28");
        assert_eq!(select_on("2024-01-31", Slot::Month, "February").as_str(), "2024-02-28");
        assert_eq!(select_on("2024-02-19", Slot::DayTens, "2").as_str(), "2024-02-29");
        assert_eq!(select_on("2023-02-19", Slot::DayTens, "2").as_str(), "2023-02-28");
        // Day-tens 3 is disabled for February; choosing it anyway clamps
        assert_eq!(select_on("2024-02-15", Slot::DayTens, "3").as_str(), "2024-02-28");
    }

    #[test]
    fn test_year_change_under_february_29() {
        assert_eq!(select_on("2024-02-29", Slot::YearUnit, "3").as_str(), "2023-02-28");
        assert_eq!(select_on("2000-02-29", Slot::Century, "19").as_str(), "1900-02-28");
        assert_eq!(select_on("2000-02-29", Slot::Century, "21").as_str(), "2100-02-28");
        assert_eq!(select_on("2096-02-29", Slot::Century, "19").as_str(), "1996-02-29");
    }

    #[test]
    fn test_zero_day_selection() {
        assert_eq!(select_on("2023-05-10", Slot::DayTens, "0").as_str(), "2023-05-01");
        assert_eq!(select_on("2023-05-05", Slot::DayUnit, "0").as_str(), "2023-05-01");
    }

    #[test]
    fn test_reselecting_active_value_is_idempotent() {
        for start in ["2023-01-31", "2024-02-29", "1900-02-28", "2199-12-01"] {
            let d = date(start);
            for slot in Slot::ALL {
                let Some(index) = d.active_candidate(slot) else {
                    panic!("{start} has no active {slot}");
                };
                let mut store = DateStore::new(d);
                let selection = select(&mut store, slot, slot.candidates()[index]).unwrap();
                assert!(!selection.changed, "{slot} on {start}");
                assert_eq!(store.get(), d);
            }
        }
    }

    /// Walks every date reachable from a valid start through slot
    /// selections and checks each one is a real calendar date.
    #[test]
    fn test_every_reachable_date_is_valid() {
        let start = date("2023-01-31");
        let mut seen = HashSet::from([start]);
        let mut queue = VecDeque::from([start]);

        while let Some(current) = queue.pop_front() {
            assert!(current.is_calendar_valid(), "{current} is not a real date");
            for slot in Slot::ALL {
                for value in slot.candidates() {
                    let mut store = DateStore::new(current);
                    select(&mut store, slot, value).unwrap();
                    if seen.insert(store.get()) {
                        queue.push_back(store.get());
                    }
                }
            }
        }

        // Every day of 1900..=2199 is reachable
        let expected: usize = (1900..=2199)
            .flat_map(|year| (1..=12).map(move |month| crate::days_in_month(year, month)))
            .map(usize::from)
            .sum();
        assert_eq!(seen.len(), expected);
    }
}
