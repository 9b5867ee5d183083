/// Length of a date value, separators included
pub const DATE_LEN: usize = 10;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Byte positions of the two separators in `CCYY-MM-DD`
pub const SEPARATOR_POSITIONS: [usize; 2] = [4, 7];

/// Centuries the picker offers
pub const CENTURIES: [&str; 3] = ["19", "20", "21"];

/// Candidates for the decade, year-unit and day-unit slots
pub const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// Candidates for the day-tens slot
pub const DAY_TENS: [&str; 4] = ["0", "1", "2", "3"];

/// Month names, in calendar order
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Months with 31 days
pub const LONG_MONTHS: [u8; 7] = [1, 3, 5, 7, 8, 10, 12];

/// Days in February for non-leap years
pub const FEBRUARY_DAYS: u8 = 28;
/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Pattern the free-text field must match before it is written to the store
pub const DATE_PATTERN: &str = r"^(19|20|21)\d{2}-(0[1-9]|1[012])-(0[1-9]|[12]\d|3[01])$";

/// Message shown next to the text field when it does not match [`DATE_PATTERN`]
pub const INVALID_FORMAT_MESSAGE: &str = "Invalid date format";

/// Captions of the year, month and day columns
pub const COLUMN_CAPTIONS: [&str; 3] = ["Year", "Month", "Day"];

/// Default field name of the control
pub const DEFAULT_NAME: &str = "date";
/// Default wrapper height and width
pub const DEFAULT_WRAPPER_SIZE: &str = "auto";
