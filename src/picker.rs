//! The picker control: one date store, its text mirror, the current
//! candidate constraints, and the bits of UI state that go with them.

use serde::{Deserialize, Serialize};

use crate::consts::{COLUMN_CAPTIONS, DEFAULT_NAME, DEFAULT_WRAPPER_SIZE};
use crate::constraint::{ConstraintResult, evaluate};
use crate::select::{SelectError, Selection, select};
use crate::text::{DisplayFormat, TextField, format_date};
use crate::{DateDigits, DateStore, ParseError, Slot};

/// Configuration of a [`DatePicker`].
///
/// Every field has a default, so any subset of keys deserializes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PickerOptions {
    /// Field identifier (Default: "date")
    pub name:              String,
    /// Optional caption shown above the field
    pub label:             Option<String>,
    /// Echo the value as long-form text under the field (Default: false)
    pub display_date_text: bool,
    pub wrapper_height:    String,
    pub wrapper_width:     String,
    /// Show the Year/Month/Day column captions (Default: true)
    pub show_column_index: bool,
    /// Extra class applied to the text input
    pub input_class_name:  String,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            name:              DEFAULT_NAME.to_owned(),
            label:             None,
            display_date_text: false,
            wrapper_height:    DEFAULT_WRAPPER_SIZE.to_owned(),
            wrapper_width:     DEFAULT_WRAPPER_SIZE.to_owned(),
            show_column_index: true,
            input_class_name:  String::new(),
        }
    }
}

impl PickerOptions {
    #[inline]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[inline]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[inline]
    pub const fn display_date_text(mut self, display_date_text: bool) -> Self {
        self.display_date_text = display_date_text;
        self
    }

    /// Wrapper size as CSS lengths (Default: "auto" for both)
    #[inline]
    pub fn wrapper_size(mut self, height: impl Into<String>, width: impl Into<String>) -> Self {
        self.wrapper_height = height.into();
        self.wrapper_width = width.into();
        self
    }

    #[inline]
    pub const fn show_column_index(mut self, show_column_index: bool) -> Self {
        self.show_column_index = show_column_index;
        self
    }

    #[inline]
    pub fn input_class_name(mut self, input_class_name: impl Into<String>) -> Self {
        self.input_class_name = input_class_name.into();
        self
    }
}

/// Which column group is shown on narrow screens
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum View {
    #[default]
    Year,
    Month,
    Day,
}

impl View {
    /// The following view, staying on `Day` at the end
    pub const fn next(self) -> Self {
        match self {
            Self::Year => Self::Month,
            Self::Month | Self::Day => Self::Day,
        }
    }

    /// The preceding view, staying on `Year` at the start
    pub const fn prev(self) -> Self {
        match self {
            Self::Year | Self::Month => Self::Year,
            Self::Day => Self::Month,
        }
    }

    /// Slots shown in this view
    pub const fn slots(self) -> &'static [Slot] {
        match self {
            Self::Year => &[Slot::Century, Slot::Decade, Slot::YearUnit],
            Self::Month => &[Slot::Month],
            Self::Day => &[Slot::DayTens, Slot::DayUnit],
        }
    }
}

/// A digit-by-digit date picker with a free-text mirror.
///
/// Digit choices always leave a real calendar date in the store. The text
/// path only checks the shape of what is typed.
#[derive(Debug)]
pub struct DatePicker {
    options:     PickerOptions,
    store:       DateStore,
    text:        TextField,
    constraints: ConstraintResult,
    view:        View,
    open:        bool,
}

impl DatePicker {
    /// Creates a picker holding `value`.
    ///
    /// # Errors
    /// Returns `ParseError` if `value` is not shaped like `YYYY-MM-DD`.
    pub fn new(options: PickerOptions, value: &str) -> Result<Self, ParseError> {
        Ok(Self::with_store(options, DateStore::new(value.parse()?)))
    }

    /// Creates a picker around an existing store, e.g. one with a change
    /// callback attached.
    pub fn with_store(options: PickerOptions, store: DateStore) -> Self {
        let value = store.get();
        Self {
            options,
            store,
            text: TextField::new(value),
            constraints: evaluate(value),
            view: View::default(),
            open: false,
        }
    }

    pub const fn options(&self) -> &PickerOptions {
        &self.options
    }

    #[inline]
    pub const fn value(&self) -> DateDigits {
        self.store.get()
    }

    pub const fn constraints(&self) -> &ConstraintResult {
        &self.constraints
    }

    pub const fn text(&self) -> &TextField {
        &self.text
    }

    /// Chooses a candidate of `slot`, correcting the day if needed.
    ///
    /// # Errors
    /// Returns `SelectError::UnknownCandidate` if `value` is not offered by `slot`.
    pub fn choose(&mut self, slot: Slot, value: &str) -> Result<Selection, SelectError> {
        let selection = select(&mut self.store, slot, value)?;
        self.constraints = selection.constraints.clone();
        self.text.sync(self.store.get());
        Ok(selection)
    }

    /// Handles an edit of the text field.
    ///
    /// Matching text is written to the store as is; the candidate flags are
    /// refreshed but no correction is applied to the stored value.
    pub fn input_text(&mut self, text: &str) -> bool {
        let accepted = self.text.input(text, &mut self.store);
        if accepted {
            self.constraints = evaluate(self.store.get());
        }
        accepted
    }

    /// Replaces the value from outside, e.g. on a form reset
    pub fn reset(&mut self, value: DateDigits) {
        self.store.set(value);
        self.text.sync(value);
        self.constraints = evaluate(value);
    }

    /// Whether the candidate at `index` of `slot` can be chosen
    pub fn is_enabled(&self, slot: Slot, index: usize) -> bool {
        self.constraints.is_enabled(slot, index)
    }

    /// Whether the candidate at `index` of `slot` carries the selected mark
    pub fn is_active(&self, slot: Slot, index: usize) -> bool {
        self.value().active_candidate(slot) == Some(index)
    }

    pub fn error(&self) -> Option<&'static str> {
        self.text.error()
    }

    /// Long-form echo of the value, if enabled in the options
    pub fn display_text(&self) -> Option<String> {
        self.options
            .display_date_text
            .then(|| format_date(self.value(), DisplayFormat::Long))
    }

    /// Captions of the year, month and day columns, if enabled in the options
    pub fn column_captions(&self) -> Option<[&'static str; 3]> {
        self.options.show_column_index.then_some(COLUMN_CAPTIONS)
    }

    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Opens or closes the picker surface
    pub const fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub const fn view(&self) -> View {
        self.view
    }

    pub const fn next_view(&mut self) {
        self.view = self.view.next();
    }

    pub const fn prev_view(&mut self) {
        self.view = self.view.prev();
    }
}
