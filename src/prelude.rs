//! Prelude module for digit_date crate.
//!
//! Re-exports the derive_more macros used by the slot and rule enums.

#[allow(unused_imports)]
pub use derive_more::Display;
