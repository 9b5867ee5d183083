use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::consts::{DATE_PATTERN, INVALID_FORMAT_MESSAGE};
use crate::types::month_name;
use crate::{DateDigits, DateStore};

#[allow(clippy::expect_used)]
static DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    // ASCII digits only, so a match always parses as `DateDigits`
    RegexBuilder::new(DATE_PATTERN)
        .unicode(false)
        .build()
        .expect("DATE_PATTERN is a valid regex")
});

/// Whether `text` has the exact shape the text field accepts.
///
/// The check is purely lexical: "2021-02-29" and "2023-04-31" match even
/// though neither date exists.
pub fn matches_pattern(text: &str) -> bool {
    DATE_REGEX.is_match(text)
}

/// How a date is rendered for display
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DisplayFormat {
    /// `YYYY-MM-DD`
    #[default]
    Iso,
    /// `Month DD, YYYY`
    Long,
    /// `MM-DD-YYYY`
    MonthFirst,
}

/// Renders `date` in the given format.
///
/// A date whose month is outside `01..=12` has no long form and falls back
/// to ISO.
pub fn format_date(date: DateDigits, format: DisplayFormat) -> String {
    let s = date.as_str();
    let (year, month, day) = (&s[0..4], &s[5..7], &s[8..10]);
    match format {
        DisplayFormat::Iso => s.to_owned(),
        DisplayFormat::Long => match month_name(date.month()) {
            Some(name) => format!("{name} {day}, {year}"),
            None => {
                #[cfg(feature = "log")]
                log::warn!("No month name for {date}, rendering it as ISO");
                s.to_owned()
            }
        },
        DisplayFormat::MonthFirst => format!("{month}-{day}-{year}"),
    }
}

/// The free-text mirror of a picker's value.
///
/// Keeps whatever the user typed, even when it is not a date, and only
/// writes through to the store when the text matches [`DATE_PATTERN`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    raw:   String,
    error: Option<&'static str>,
}

impl TextField {
    pub fn new(value: DateDigits) -> Self {
        Self {
            raw:   value.to_string(),
            error: None,
        }
    }

    /// The text as last typed or synced
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Inline error message, set while the text does not match the pattern
    pub const fn error(&self) -> Option<&'static str> {
        self.error
    }

    /// Handles one edit of the text.
    ///
    /// Returns `true` if the text was accepted and written to the store.
    /// Rejected text is kept for display and the store is left unchanged.
    pub fn input(&mut self, text: &str, store: &mut DateStore) -> bool {
        text.clone_into(&mut self.raw);

        let parsed = matches_pattern(text)
            .then(|| text.parse::<DateDigits>().ok())
            .flatten();
        match parsed {
            Some(date) => {
                self.error = None;
                store.set(date);
                true
            }
            None => {
                #[cfg(feature = "log")]
                log::debug!("Rejected date text {text:?}");
                self.error = Some(INVALID_FORMAT_MESSAGE);
                false
            }
        }
    }

    /// Mirrors a store value written through the picker
    pub fn sync(&mut self, value: DateDigits) {
        self.raw = value.to_string();
        self.error = None;
    }
}
