use std::fmt;

use crate::DateDigits;

type ChangeCallback = Box<dyn FnMut(&DateDigits)>;

/// Holds the canonical date value of one picker.
///
/// [`DateStore::set`] is the only way the value changes. No validation
/// happens here: anything that parsed as a [`DateDigits`] is accepted.
pub struct DateStore {
    value:     DateDigits,
    on_change: Option<ChangeCallback>,
}

impl DateStore {
    pub const fn new(value: DateDigits) -> Self {
        Self {
            value,
            on_change: None,
        }
    }

    /// Registers a callback invoked each time `set` changes the value
    pub fn with_on_change(mut self, on_change: impl FnMut(&DateDigits) + 'static) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }

    #[inline]
    pub const fn get(&self) -> DateDigits {
        self.value
    }

    /// Replaces the value.
    ///
    /// Returns `true` if the value changed, in which case the change
    /// callback has been notified.
    pub fn set(&mut self, next: DateDigits) -> bool {
        if next == self.value {
            return false;
        }

        self.value = next;
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(&next);
        }
        true
    }
}

impl fmt::Debug for DateStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateStore")
            .field("value", &self.value)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}
