//! Calendar days, ISO 8601 weeks, ranges between them, and Easter-derived
//! holidays.
//!
//! The crate is built around four value types: [`CalendarDate`] (a single
//! Gregorian day), [`CalendarWeek`] (an ISO 8601 week), and the eagerly
//! materialized [`DateRange`] / [`WeekRange`] sequences between two
//! endpoints. All of them are immutable, ordered, and round-trip through
//! their canonical string forms.

mod consts;
mod holidays;
mod prelude;
mod range;
mod types;
mod week;

pub use consts::*;
pub use holidays::{Holiday, easter_sunday};
pub use range::{DateRange, RangeError, WeekRange};
pub use types::{Day, Month, Week, Year, day_of_year, days_in_month, days_in_year, is_leap_year};
pub use week::{CalendarWeek, weeks_in_iso_year};

use crate::prelude::*;
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, Weekday};
use std::cmp::Ordering;
use std::str::FromStr;
use types::{day_number_from_ymd, iso_weekday_number, parse_u8, parse_u16, ymd_from_day_number};

/// A single day in the proleptic Gregorian calendar, years 1..=9999.
///
/// Always denotes a real date: construction validates the
/// (year, month, day) triple against the actual month length, including
/// leap-year February. Ordering uses the `(year, day_of_year)` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDate {
    year: Year,
    month: Month,
    day: Day,
}

/// Error type for calendar-validity and parse failures.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum CalendarError {
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(i64),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDate { year: u16, month: u8, day: u8 },
    #[display(fmt = "Invalid week {week} for ISO year {year} (must be 1-{max_week})")]
    InvalidWeek { year: u16, week: u8, max_week: u8 },
    #[display(fmt = "Invalid quarter: {} (must be 1-4)", "_0")]
    InvalidQuarter(u8),
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for CalendarError {}

/// Where a date lies relative to a reference "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tense {
    Past,
    Today,
    Future,
}

impl CalendarDate {
    /// Creates a date from raw (year, month, day) components.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear`, `InvalidMonth`, or
    /// `InvalidDate` if the triple does not denote a real Gregorian date.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, CalendarError> {
        let year_t = Year::new(year)?;
        let month_t = Month::new(month)?;
        let day_t = Day::new(day, year, month)?;
        Ok(Self {
            year: year_t,
            month: month_t,
            day: day_t,
        })
    }

    /// Today's date according to the local system clock.
    pub fn today() -> Self {
        Self::try_from(Local::now().date_naive())
            .expect("the current date is within the supported year range")
    }

    /// Returns the year (1..=9999)
    #[inline]
    pub const fn year(self) -> u16 {
        self.year.get()
    }

    /// Returns the month (1..=12)
    #[inline]
    pub const fn month(self) -> u8 {
        self.month.get()
    }

    /// Returns the day of month (1..=31)
    #[inline]
    pub const fn day(self) -> u8 {
        self.day.get()
    }

    /// Ordinal day within the year, 1..=366.
    pub const fn day_of_year(self) -> u16 {
        types::day_of_year(self.year(), self.month(), self.day())
    }

    /// Day of the week, ISO convention (weeks start on Monday).
    pub fn day_of_week(self) -> Weekday {
        match iso_weekday_number(self.day_number()) {
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            6 => Weekday::Sat,
            _ => Weekday::Sun,
        }
    }

    /// Returns a new date `n` days later (earlier for negative `n`).
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` if the result falls outside
    /// years 1..=9999.
    pub fn add_days(self, n: i64) -> Result<Self, CalendarError> {
        Self::from_day_number(self.day_number() + n)
    }

    /// The instant at 00:00:00.000 of this day.
    pub fn start_of_day(self) -> NaiveDateTime {
        NaiveDate::from(self)
            .and_hms_milli_opt(0, 0, 0, 0)
            .expect("midnight is a valid time of day")
    }

    /// The instant at 23:59:59.999 of this day.
    pub fn end_of_day(self) -> NaiveDateTime {
        NaiveDate::from(self)
            .and_hms_milli_opt(23, 59, 59, 999)
            .expect("23:59:59.999 is a valid time of day")
    }

    /// Classifies this date against an explicit reference date.
    ///
    /// The clock is a parameter so the classification stays pure; use
    /// [`CalendarDate::tense`] for the local-clock convenience form.
    pub fn tense_at(self, today: Self) -> Tense {
        match self.cmp(&today) {
            Ordering::Less => Tense::Past,
            Ordering::Equal => Tense::Today,
            Ordering::Greater => Tense::Future,
        }
    }

    /// Classifies this date against the local system clock. Never cached;
    /// every call reads the clock anew.
    pub fn tense(self) -> Tense {
        self.tense_at(Self::today())
    }

    /// Quarter of the year this date falls in, 1..=4.
    pub const fn quarter(self) -> u8 {
        (self.month() + 2) / 3
    }

    /// First day of the given quarter.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidQuarter` for quarters outside 1..=4,
    /// or `InvalidYear` for an out-of-range year.
    pub fn start_of_quarter(year: u16, quarter: u8) -> Result<Self, CalendarError> {
        if !(1..=4).contains(&quarter) {
            return Err(CalendarError::InvalidQuarter(quarter));
        }
        Self::from_ymd(year, 3 * quarter - 2, MIN_DAY)
    }

    /// Last day of the given quarter.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidQuarter` for quarters outside 1..=4,
    /// or `InvalidYear` for an out-of-range year.
    pub fn end_of_quarter(year: u16, quarter: u8) -> Result<Self, CalendarError> {
        if !(1..=4).contains(&quarter) {
            return Err(CalendarError::InvalidQuarter(quarter));
        }
        let month = 3 * quarter;
        Self::from_ymd(year, month, days_in_month(year, month))
    }

    /// Days since 1970-01-01; the monotone image of the
    /// `(year, day_of_year)` ordinal key used for comparisons and stepping.
    pub(crate) fn day_number(self) -> i64 {
        day_number_from_ymd(i64::from(self.year()), self.month(), self.day())
    }

    pub(crate) fn from_day_number(days: i64) -> Result<Self, CalendarError> {
        let (year, month, day) = ymd_from_day_number(days);
        if !(1..=i64::from(MAX_YEAR)).contains(&year) {
            return Err(CalendarError::InvalidYear(year));
        }
        // Bounds checked above, so the narrowing cast is lossless.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let year = year as u16;
        Self::from_ymd(year, month, day)
    }
}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year(), self.day_of_year()).cmp(&(other.year(), other.day_of_year()))
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    /// Parses the `YYYY-MM-DD` form: 4-digit year, zero-padded month and
    /// day. Unpadded components and sign prefixes are format errors.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CalendarError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        if parts.len() != 3 || parts[0].len() != 4 || parts[1].len() != 2 || parts[2].len() != 2 {
            return Err(CalendarError::InvalidFormat(trimmed.to_owned()));
        }

        let year = parse_u16(parts[0])?;
        let month = parse_u8(parts[1])?;
        let day = parse_u8(parts[2])?;

        Self::from_ymd(year, month, day)
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        Self::from_ymd_opt(
            i32::from(date.year()),
            u32::from(date.month()),
            u32::from(date.day()),
        )
        .expect("CalendarDate always holds a real Gregorian date")
    }
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = CalendarError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        let year = date.year();
        if !(1..=i32::from(MAX_YEAR)).contains(&year) {
            return Err(CalendarError::InvalidYear(i64::from(year)));
        }
        // Bounds checked above; chrono months/days always fit in u8.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (year, month, day) = (year as u16, date.month() as u8, date.day() as u8);
        Self::from_ymd(year, month, day)
    }
}

impl TryFrom<NaiveDateTime> for CalendarDate {
    type Error = CalendarError;

    /// Truncates an instant to its date part.
    fn try_from(instant: NaiveDateTime) -> Result<Self, Self::Error> {
        Self::try_from(instant.date())
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
