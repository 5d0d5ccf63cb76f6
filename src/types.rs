use crate::CalendarError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_BEFORE_MONTH, DAYS_IN_COMMON_YEAR, DAYS_IN_LEAP_YEAR, DAYS_IN_MONTH,
    FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_MONTH, MAX_WEEK, MAX_YEAR,
};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU8;
use std::num::NonZeroU16;

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, CalendarError> {
        let non_zero =
            NonZeroU16::new(value).ok_or(CalendarError::InvalidYear(i64::from(value)))?;
        if value > MAX_YEAR {
            return Err(CalendarError::InvalidYear(i64::from(value)));
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = CalendarError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, CalendarError> {
        let non_zero = NonZeroU8::new(value).ok_or(CalendarError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(CalendarError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

/// A day-of-month value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating it against the real length of the given
    /// month, including leap-year February.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` if the value is 0 or past the
    /// end of the month.
    pub fn new(value: u8, year: u16, month: u8) -> Result<Self, CalendarError> {
        let non_zero = NonZeroU8::new(value).ok_or(CalendarError::InvalidDate {
            year,
            month,
            day: value,
        })?;

        let max_day = days_in_month(year, month);
        if value > max_day {
            return Err(CalendarError::InvalidDate {
                year,
                month,
                day: value,
            });
        }

        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Can't validate against a month length without year/month context,
        // so only the absolute bounds are checked here.
        if value == 0 || value > 31 {
            return Err(CalendarError::InvalidDate {
                year: 0,
                month: 0,
                day: value,
            });
        }
        let non_zero = NonZeroU8::new(value).ok_or(CalendarError::InvalidDate {
            year: 0,
            month: 0,
            day: value,
        })?;
        Ok(Self(non_zero))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

/// An ISO week number guaranteed to be valid for a given ISO week-year
/// (1..=52 or 1..=53 depending on the year).
/// Uses `NonZeroU8` internally, so 0 is not a valid week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Week(NonZeroU8);

impl Week {
    /// Creates a new Week, validating it against the number of ISO weeks in
    /// the given week-year.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidWeek` if the value is 0 or past the
    /// last week of the year.
    pub fn new(value: u8, iso_year: u16) -> Result<Self, CalendarError> {
        let max_week = crate::week::weeks_in_iso_year(iso_year);
        let non_zero = NonZeroU8::new(value).ok_or(CalendarError::InvalidWeek {
            year: iso_year,
            week: value,
            max_week,
        })?;
        if value > max_week {
            return Err(CalendarError::InvalidWeek {
                year: iso_year,
                week: value,
                max_week,
            });
        }
        Ok(Self(non_zero))
    }

    /// Returns the week number as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Week {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Can't validate against a week-year without context, so only the
        // absolute bounds are checked here.
        if value == 0 || value > MAX_WEEK {
            return Err(CalendarError::InvalidWeek {
                year: 0,
                week: value,
                max_week: MAX_WEEK,
            });
        }
        let non_zero = NonZeroU8::new(value).ok_or(CalendarError::InvalidWeek {
            year: 0,
            week: value,
            max_week: MAX_WEEK,
        })?;
        Ok(Self(non_zero))
    }
}

impl From<Week> for u8 {
    fn from(week: Week) -> Self {
        week.0.get()
    }
}

// --- calendar math helpers ---

/// Gregorian leap-year rule: divisible by 4, except centuries not
/// divisible by 400.
pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

pub const fn days_in_year(year: u16) -> u16 {
    if is_leap_year(year) {
        DAYS_IN_LEAP_YEAR
    } else {
        DAYS_IN_COMMON_YEAR
    }
}

/// Ordinal day within the year, 1..=366.
pub const fn day_of_year(year: u16, month: u8, day: u8) -> u16 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    let leap_shift = if month > FEBRUARY && is_leap_year(year) {
        1
    } else {
        0
    };
    DAYS_BEFORE_MONTH[month as usize] + day as u16 + leap_shift
}

/// Number of days since the Unix epoch (1970-01-01 is day 0) for a
/// proleptic Gregorian date. Negative before the epoch.
///
/// This is the standard days-from-civil computation over 400-year eras;
/// it underpins day arithmetic, weekday lookup, and range stepping.
pub(crate) const fn day_number_from_ymd(year: i64, month: u8, day: u8) -> i64 {
    let y = year - if month <= FEBRUARY { 1 } else { 0 };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = month as i64 + if month > FEBRUARY { -3 } else { 9 };
    let doy = (153 * mp + 2) / 5 + day as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146097 + doe - 719_468
}

/// Inverse of [`day_number_from_ymd`]: `(year, month, day)` for a day
/// number relative to the Unix epoch.
pub(crate) const fn ymd_from_day_number(days: i64) -> (i64, u8, u8) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
    (y + if month <= FEBRUARY { 1 } else { 0 }, month, day)
}

/// ISO day-of-week (Monday = 1 .. Sunday = 7) for a day number.
/// 1970-01-01 (day 0) was a Thursday.
pub(crate) const fn iso_weekday_number(day_number: i64) -> u8 {
    ((day_number + 3).rem_euclid(7) + 1) as u8
}

/// Parses a u16 from ASCII digits only. Sign prefixes and anything else
/// `str::parse` would tolerate are an `InvalidFormat` error carrying the
/// offending token.
pub(crate) fn parse_u16(s: &str) -> Result<u16, CalendarError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CalendarError::InvalidFormat(s.to_owned()));
    }
    s.parse::<u16>()
        .map_err(|_| CalendarError::InvalidFormat(s.to_owned()))
}

/// Parses a u8 from ASCII digits only, as [`parse_u16`].
pub(crate) fn parse_u8(s: &str) -> Result<u8, CalendarError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CalendarError::InvalidFormat(s.to_owned()));
    }
    s.parse::<u8>()
        .map_err(|_| CalendarError::InvalidFormat(s.to_owned()))
}
