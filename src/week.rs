//! ISO 8601 weeks and the week-numbering algorithms.
//!
//! A week belongs to the year that contains its Thursday, so a date near
//! Dec 31 / Jan 1 can carry a week-year that differs from its calendar
//! year in either direction. Everything in this module is derived from
//! that one rule.

use crate::consts::{
    DATE_SEPARATOR, DAYS_IN_WEEK, DECEMBER, ISO_MONDAY, ISO_THURSDAY, JANUARY, WEEK_DESIGNATOR,
};
use crate::prelude::*;
use crate::types::{
    Week, Year, day_number_from_ymd, day_of_year, iso_weekday_number, parse_u8, parse_u16,
    ymd_from_day_number,
};
use crate::{CalendarDate, CalendarError};
use std::cmp::Ordering;
use std::str::FromStr;

/// One ISO 8601 week, identified by week-year and week number.
///
/// The week-year is not the Gregorian year of the week's days: week 1 of
/// 2023 starts on 2023-01-02, but week 1 of 2024 starts on 2024-01-01 and
/// week 1 of 2015 started on 2014-12-29.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{:04}-W{:02}", "year.get()", "week.get()")]
pub struct CalendarWeek {
    year: Year,
    week: Week,
}

/// ISO week-year and week number for a day number. The Thursday of the
/// same week decides both.
fn iso_week_of_day_number(day_number: i64) -> (i64, u8) {
    let dow = iso_weekday_number(day_number);
    let thursday = day_number + i64::from(ISO_THURSDAY) - i64::from(dow);
    let (year, month, day) = ymd_from_day_number(thursday);
    // Thursdays reachable from a supported date stay within years
    // 0..=10000, which the u16-based day-of-year helper can represent.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let doy = day_of_year(year as u16, month, day);
    #[allow(clippy::cast_possible_truncation)]
    let week = doy.div_ceil(7) as u8;
    (year, week)
}

/// Number of ISO weeks (52 or 53) in the given week-year.
pub fn weeks_in_iso_year(year: u16) -> u8 {
    // December 28 always falls in the last week of its ISO year.
    iso_week_of_day_number(day_number_from_ymd(i64::from(year), DECEMBER, 28)).1
}

impl CalendarDate {
    /// ISO 8601 week number of this date, 1..=53.
    ///
    /// Week 1 is the week containing the year's first Thursday, so this
    /// can disagree with naive day-of-year bucketing at year boundaries:
    /// 2023-01-01 is in week 52 (of 2022) and 2024-12-31 in week 1
    /// (of 2025).
    pub fn iso_week_number(self) -> u8 {
        iso_week_of_day_number(self.day_number()).1
    }

    /// ISO week-year of this date: the calendar year of the Thursday in
    /// the same week. Late-December dates in week 1 belong to the next
    /// week-year; early-January dates in week 52/53 to the previous one.
    pub fn iso_week_year(self) -> u16 {
        let (year, _) = iso_week_of_day_number(self.day_number());
        // The week-year of a date in 1..=9999 never leaves that range:
        // Jan 1 of year 1 is a Monday and Dec 31 of year 9999 a Friday,
        // so the deciding Thursday stays inside the supported years.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let year = year as u16;
        year
    }

    /// The ISO week containing this date.
    pub fn week(self) -> CalendarWeek {
        CalendarWeek::for_date(self)
    }
}

impl CalendarWeek {
    /// Creates a week from raw (week-year, week number) components.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` or `InvalidWeek` if the pair
    /// is out of range for that year (1..=52 or 1..=53).
    pub fn from_parts(iso_year: u16, iso_week: u8) -> Result<Self, CalendarError> {
        let year = Year::new(iso_year)?;
        let week = Week::new(iso_week, iso_year)?;
        Ok(Self { year, week })
    }

    /// The week containing the given date.
    pub fn for_date(date: CalendarDate) -> Self {
        let (year, week) = iso_week_of_day_number(date.day_number());
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let year = year as u16;
        Self::from_parts(year, week).expect("every supported date maps to a valid ISO week")
    }

    /// The week containing the given (year, month, day) date.
    ///
    /// # Errors
    /// Returns a `CalendarError` if the triple is not a real date.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, CalendarError> {
        Ok(Self::for_date(CalendarDate::from_ymd(year, month, day)?))
    }

    /// Returns the ISO week-year
    #[inline]
    pub const fn year(self) -> u16 {
        self.year.get()
    }

    /// Returns the ISO week number (1..=53)
    #[inline]
    pub const fn week(self) -> u8 {
        self.week.get()
    }

    /// The Monday this week starts on.
    ///
    /// Computed from January 4 of the week-year, which by definition lies
    /// in week 1: step back to that week's Monday, then forward
    /// `(week - 1) * 7` days.
    pub fn first_day(self) -> CalendarDate {
        let jan4 = day_number_from_ymd(i64::from(self.year()), JANUARY, 4);
        let monday = jan4 - i64::from(iso_weekday_number(jan4) - ISO_MONDAY)
            + i64::from(self.week() - 1) * DAYS_IN_WEEK;
        CalendarDate::from_day_number(monday)
            .expect("the Monday of a representable ISO week is a representable date")
    }

    /// The Sunday this week ends on, six days after [`first_day`].
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` only for the very last week of
    /// year 9999, whose Sunday would fall in year 10000.
    ///
    /// [`first_day`]: CalendarWeek::first_day
    pub fn last_day(self) -> Result<CalendarDate, CalendarError> {
        self.first_day().add_days(DAYS_IN_WEEK - 1)
    }

    /// The week starting seven days after this one.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` when stepping past year 9999.
    pub fn next_week(self) -> Result<Self, CalendarError> {
        Ok(Self::for_date(self.first_day().add_days(DAYS_IN_WEEK)?))
    }

    /// The week starting seven days before this one.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` when stepping before year 1.
    pub fn previous_week(self) -> Result<Self, CalendarError> {
        Ok(Self::for_date(self.first_day().add_days(-DAYS_IN_WEEK)?))
    }
}

impl PartialOrd for CalendarWeek {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarWeek {
    fn cmp(&self, other: &Self) -> Ordering {
        // (week-year, week) order coincides with the order of the weeks'
        // Monday start days.
        (self.year(), self.week()).cmp(&(other.year(), other.week()))
    }
}

/// Splits a week token into year and week digits. Accepted shapes:
/// `2022-W49`, `2022W49`, `2022-49`, and `202249`.
fn split_week_token(s: &str) -> Option<(&str, &str)> {
    if let Some((year, week)) = s.split_once(WEEK_DESIGNATOR) {
        return Some((year.strip_suffix(DATE_SEPARATOR).unwrap_or(year), week));
    }
    if let Some(pair) = s.split_once(DATE_SEPARATOR) {
        return Some(pair);
    }
    if s.len() > 4 && s.bytes().all(|b| b.is_ascii_digit()) {
        return Some(s.split_at(4));
    }
    None
}

impl FromStr for CalendarWeek {
    type Err = CalendarError;

    /// Parses `YYYY-Www`, `YYYYWww`, `YYYY-ww`, or `YYYYww` (week numbers
    /// may be one or two digits).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CalendarError::EmptyInput);
        }

        let (year_part, week_part) = split_week_token(trimmed)
            .ok_or_else(|| CalendarError::InvalidFormat(trimmed.to_owned()))?;
        if year_part.len() != 4 || week_part.is_empty() || week_part.len() > 2 {
            return Err(CalendarError::InvalidFormat(trimmed.to_owned()));
        }

        let year = parse_u16(year_part)?;
        let week = parse_u8(week_part)?;

        Self::from_parts(year, week)
    }
}

impl serde::Serialize for CalendarWeek {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarWeek {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
