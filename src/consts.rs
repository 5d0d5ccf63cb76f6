/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Largest ISO week number any year can have
pub const MAX_WEEK: u8 = 53;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in a common year
pub const DAYS_IN_COMMON_YEAR: u16 = 365;
/// Days in a leap year
pub const DAYS_IN_LEAP_YEAR: u16 = 366;

/// Days in an ISO week
pub const DAYS_IN_WEEK: i64 = 7;

/// ISO day-of-week number for Monday (weeks run Monday = 1 .. Sunday = 7)
pub const ISO_MONDAY: u8 = 1;
/// ISO day-of-week number for Thursday. A week belongs to the year that
/// contains its Thursday; this anchors the whole week-numbering scheme.
pub const ISO_THURSDAY: u8 = 4;

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

/// Days elapsed before the first of each month in a common year
/// (index 0 unused, months are 1-indexed)
pub const DAYS_BEFORE_MONTH: [u16; 13] =
    [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// ISO 8601 week designator, as in `2022-W49`
pub const WEEK_DESIGNATOR: char = 'W';
/// Range separator emitted by `Display`, as in `2022-10-01__2022-12-31`
pub const RANGE_SEPARATOR: &str = "__";
/// Single-underscore range separator, accepted on parse only
pub const RANGE_SEPARATOR_SHORT: char = '_';
