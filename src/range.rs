use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    CalendarDate, CalendarError, CalendarWeek, RANGE_SEPARATOR, RANGE_SEPARATOR_SHORT, prelude::*,
};

/// Error type for range construction and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// An endpoint is not a real calendar date or ISO week.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// The text does not match the range grammar.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),

    /// Empty or whitespace-only input.
    #[error("Empty range string")]
    EmptyInput,
}

/// Splits range text on the separator: `__` as emitted, or a single `_`.
fn split_range(s: &str) -> Result<(&str, &str), RangeError> {
    if let Some(pair) = s.split_once(RANGE_SEPARATOR) {
        return Ok(pair);
    }
    s.split_once(RANGE_SEPARATOR_SHORT)
        .ok_or_else(|| RangeError::InvalidFormat(s.to_owned()))
}

/// Parses one endpoint. Grammar-level failures surface as
/// `RangeError::InvalidFormat` for the whole input; calendar-validity
/// failures (a well-formed but unreal date or week) propagate unchanged.
fn parse_endpoint<T>(token: &str, whole: &str) -> Result<T, RangeError>
where
    T: FromStr<Err = CalendarError>,
{
    token.trim().parse::<T>().map_err(|err| match err {
        CalendarError::InvalidFormat(_) | CalendarError::EmptyInput => {
            RangeError::InvalidFormat(whole.to_owned())
        }
        other => RangeError::Calendar(other),
    })
}

/// Every day from `start` to `end` inclusive, materialized eagerly at
/// construction in traversal order.
///
/// When `end` precedes `start` the range is a reverse range: the days run
/// backwards and [`is_reverse`] reports `true`. Either way the first
/// element equals `start` and the last equals `end`, and the sequence is
/// never mutated afterwards.
///
/// Dereferences to the backing slice, so the days are indexable directly.
///
/// [`is_reverse`]: DateRange::is_reverse
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Deref)]
#[display(fmt = "{start}__{end}")]
pub struct DateRange {
    start: CalendarDate,
    end: CalendarDate,
    #[deref(forward)]
    days: Vec<CalendarDate>,
    reverse: bool,
}

impl DateRange {
    /// Creates the range and walks every day between the endpoints,
    /// one step at a time, in O(span) time and space.
    pub fn new(start: CalendarDate, end: CalendarDate) -> Self {
        let reverse = end < start;
        let step = if reverse { -1 } else { 1 };

        let first = start.day_number();
        let last = end.day_number();
        let span = first.abs_diff(last);
        let mut days = Vec::with_capacity(usize::try_from(span).unwrap_or(0) + 1);

        let mut cursor = first;
        loop {
            days.push(
                CalendarDate::from_day_number(cursor)
                    .expect("every day between two valid dates is a valid date"),
            );
            if cursor == last {
                break;
            }
            cursor += step;
        }

        Self {
            start,
            end,
            days,
            reverse,
        }
    }

    /// Parses like [`FromStr`], except that empty or whitespace-only input
    /// means "no range" rather than an error.
    ///
    /// # Errors
    /// Same as the `FromStr` impl for non-blank input.
    pub fn parse_opt(s: &str) -> Result<Option<Self>, RangeError> {
        if s.trim().is_empty() {
            return Ok(None);
        }
        s.parse().map(Some)
    }

    /// Returns the first endpoint in traversal order
    pub const fn start(&self) -> CalendarDate {
        self.start
    }

    /// Returns the last endpoint in traversal order
    pub const fn end(&self) -> CalendarDate {
        self.end
    }

    /// True when `end` precedes `start` and the days run backwards
    pub const fn is_reverse(&self) -> bool {
        self.reverse
    }

    /// The materialized days, in traversal order.
    pub fn days(&self) -> &[CalendarDate] {
        &self.days
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CalendarDate> {
        self.days.iter()
    }
}

impl<'a> IntoIterator for &'a DateRange {
    type Item = &'a CalendarDate;
    type IntoIter = std::slice::Iter<'a, CalendarDate>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}

impl FromStr for DateRange {
    type Err = RangeError;

    /// Parses `YYYY-MM-DD__YYYY-MM-DD`, accepting a single `_` join too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(RangeError::EmptyInput);
        }

        let (start_token, end_token) = split_range(trimmed)?;
        let start = parse_endpoint::<CalendarDate>(start_token, trimmed)?;
        let end = parse_endpoint::<CalendarDate>(end_token, trimmed)?;

        Ok(Self::new(start, end))
    }
}

impl Serialize for DateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Every ISO week from `start` to `end` inclusive, materialized eagerly
/// at construction in traversal order.
///
/// Comparison between the endpoints is keyed on each week's Monday, so a
/// range whose `end` week starts before its `start` week is a reverse
/// range, mirroring [`DateRange`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Deref)]
#[display(fmt = "{start}__{end}")]
pub struct WeekRange {
    start: CalendarWeek,
    end: CalendarWeek,
    #[deref(forward)]
    weeks: Vec<CalendarWeek>,
    reverse: bool,
}

impl WeekRange {
    /// Creates the range and walks week by week between the endpoints.
    pub fn new(start: CalendarWeek, end: CalendarWeek) -> Self {
        let reverse = end < start;

        let mut weeks = vec![start];
        let mut cursor = start;
        while cursor != end {
            cursor = if reverse {
                cursor.previous_week()
            } else {
                cursor.next_week()
            }
            .expect("every week between two valid weeks is a valid week");
            weeks.push(cursor);
        }

        Self {
            start,
            end,
            weeks,
            reverse,
        }
    }

    /// Parses like [`FromStr`], except that empty or whitespace-only input
    /// means "no range" rather than an error.
    ///
    /// # Errors
    /// Same as the `FromStr` impl for non-blank input.
    pub fn parse_opt(s: &str) -> Result<Option<Self>, RangeError> {
        if s.trim().is_empty() {
            return Ok(None);
        }
        s.parse().map(Some)
    }

    /// Returns the first endpoint in traversal order
    pub const fn start(&self) -> CalendarWeek {
        self.start
    }

    /// Returns the last endpoint in traversal order
    pub const fn end(&self) -> CalendarWeek {
        self.end
    }

    /// True when `end` starts before `start` and the weeks run backwards
    pub const fn is_reverse(&self) -> bool {
        self.reverse
    }

    /// The materialized weeks, in traversal order.
    pub fn weeks(&self) -> &[CalendarWeek] {
        &self.weeks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CalendarWeek> {
        self.weeks.iter()
    }
}

impl<'a> IntoIterator for &'a WeekRange {
    type Item = &'a CalendarWeek;
    type IntoIter = std::slice::Iter<'a, CalendarWeek>;

    fn into_iter(self) -> Self::IntoIter {
        self.weeks.iter()
    }
}

impl FromStr for WeekRange {
    type Err = RangeError;

    /// Parses two week tokens joined by `__` or `_`; each endpoint accepts
    /// the `YYYY-Www`, `YYYYWww`, `YYYY-ww`, and `YYYYww` forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(RangeError::EmptyInput);
        }

        let (start_token, end_token) = split_range(trimmed)?;
        let start = parse_endpoint::<CalendarWeek>(start_token, trimmed)?;
        let end = parse_endpoint::<CalendarWeek>(end_token, trimmed)?;

        Ok(Self::new(start, end))
    }
}

impl Serialize for WeekRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for WeekRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, week};

    #[test]
    fn forward_date_range() {
        let range = DateRange::new(date(2022, 10, 1), date(2022, 12, 31));

        assert_eq!(range.len(), 92);
        assert!(!range.is_reverse());
        assert_eq!(range.days()[0], range.start());
        assert_eq!(range.days()[91], range.end());
        assert_eq!(range[31], date(2022, 11, 1));
    }

    #[test]
    fn reverse_date_range() {
        let range = DateRange::new(date(2022, 12, 31), date(2022, 10, 1));

        assert_eq!(range.len(), 92);
        assert!(range.is_reverse());
        assert_eq!(range.start(), date(2022, 12, 31));
        assert_eq!(range.end(), date(2022, 10, 1));
        assert_eq!(range.days()[0], date(2022, 12, 31));
        assert_eq!(range.days()[91], date(2022, 10, 1));

        let forward = DateRange::new(date(2022, 10, 1), date(2022, 12, 31));
        let mut reversed: Vec<_> = range.iter().copied().collect();
        reversed.reverse();
        assert_eq!(reversed, forward.days());
    }

    #[test]
    fn single_day_range() {
        let range = DateRange::new(date(2023, 6, 15), date(2023, 6, 15));
        assert_eq!(range.days(), [date(2023, 6, 15)]);
        assert!(!range.is_reverse());
    }

    #[test]
    fn date_range_crosses_year_boundary() {
        let range = DateRange::new(date(2022, 12, 30), date(2023, 1, 2));
        assert_eq!(
            range.days(),
            [
                date(2022, 12, 30),
                date(2022, 12, 31),
                date(2023, 1, 1),
                date(2023, 1, 2)
            ]
        );
    }

    #[test]
    fn date_range_display() {
        let range = DateRange::new(date(2022, 10, 1), date(2022, 12, 31));
        assert_eq!(range.to_string(), "2022-10-01__2022-12-31");
    }

    #[test]
    fn date_range_parse_both_separators() {
        let double = "2022-10-01__2022-12-31".parse::<DateRange>().unwrap();
        let single = "2022-10-01_2022-12-31".parse::<DateRange>().unwrap();
        assert_eq!(double, single);
        assert_eq!(double.len(), 92);
    }

    #[test]
    fn date_range_parse_reverse_round_trip() {
        let s = "2022-12-31__2022-10-01";
        let range = s.parse::<DateRange>().unwrap();
        assert!(range.is_reverse());
        assert_eq!(range.to_string(), s);
    }

    #[test]
    fn date_range_string_round_trip() {
        for (a, b) in [
            (date(2022, 10, 1), date(2022, 12, 31)),
            (date(2022, 12, 31), date(2022, 10, 1)),
            (date(2023, 6, 15), date(2023, 6, 15)),
        ] {
            let range = DateRange::new(a, b);
            let reparsed = range.to_string().parse::<DateRange>().unwrap();
            assert_eq!(reparsed, range);
            assert_eq!(reparsed.to_string(), range.to_string());
        }
    }

    #[test]
    fn date_range_parse_failures() {
        assert!(matches!(
            "".parse::<DateRange>(),
            Err(RangeError::EmptyInput)
        ));
        assert!(matches!(
            "  ".parse::<DateRange>(),
            Err(RangeError::EmptyInput)
        ));
        assert!(matches!(
            "not-a-range".parse::<DateRange>(),
            Err(RangeError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2022-10-01".parse::<DateRange>(),
            Err(RangeError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2022-10-01__gibberish".parse::<DateRange>(),
            Err(RangeError::InvalidFormat(_))
        ));
    }

    #[test]
    fn date_range_parse_invalid_date_is_a_hard_failure() {
        // Well-formed per the grammar, but not a real date: this must not
        // degrade into a format error.
        assert!(matches!(
            "2023-02-30__2023-03-05".parse::<DateRange>(),
            Err(RangeError::Calendar(CalendarError::InvalidDate {
                year: 2023,
                month: 2,
                day: 30
            }))
        ));
    }

    #[test]
    fn date_range_parse_opt() {
        assert_eq!(DateRange::parse_opt("").unwrap(), None);
        assert_eq!(DateRange::parse_opt("   ").unwrap(), None);
        assert!(matches!(
            DateRange::parse_opt("not-a-range"),
            Err(RangeError::InvalidFormat(_))
        ));
        let range = DateRange::parse_opt("2022-10-01__2022-12-31")
            .unwrap()
            .unwrap();
        assert_eq!(range.len(), 92);
    }

    #[test]
    fn date_range_serde() {
        let range = DateRange::new(date(2022, 10, 1), date(2022, 12, 31));
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(json, r#""2022-10-01__2022-12-31""#);

        let parsed: DateRange = serde_json::from_str(&json).unwrap();
        assert_eq!(range, parsed);
    }

    #[test]
    fn forward_week_range() {
        let range = WeekRange::new(week(2022, 49), week(2023, 1));

        assert_eq!(
            range.weeks(),
            [
                week(2022, 49),
                week(2022, 50),
                week(2022, 51),
                week(2022, 52),
                week(2023, 1)
            ]
        );
        assert!(!range.is_reverse());
    }

    #[test]
    fn reverse_week_range() {
        let range = WeekRange::new(week(2023, 1), week(2022, 49));

        assert_eq!(range.len(), 5);
        assert!(range.is_reverse());
        assert_eq!(range.weeks()[0], week(2023, 1));
        assert_eq!(range.weeks()[4], week(2022, 49));
    }

    #[test]
    fn week_range_across_53_week_year() {
        let range = WeekRange::new(week(2020, 52), week(2021, 1));
        assert_eq!(
            range.weeks(),
            [week(2020, 52), week(2020, 53), week(2021, 1)]
        );
    }

    #[test]
    fn week_range_display() {
        let range = WeekRange::new(week(2022, 49), week(2023, 1));
        assert_eq!(range.to_string(), "2022-W49__2023-W01");
    }

    #[test]
    fn week_range_parse_endpoint_forms() {
        let canonical = "2022-W49__2023-W01".parse::<WeekRange>().unwrap();
        for s in [
            "2022-W49_2023-W01",
            "2022W49__2023W1",
            "2022-49__2023-1",
            "202249__20231",
        ] {
            assert_eq!(s.parse::<WeekRange>().unwrap(), canonical, "{s}");
        }
    }

    #[test]
    fn week_range_string_round_trip() {
        for (a, b) in [
            (week(2022, 49), week(2023, 1)),
            (week(2023, 1), week(2022, 49)),
            (week(2020, 53), week(2020, 53)),
        ] {
            let range = WeekRange::new(a, b);
            let reparsed = range.to_string().parse::<WeekRange>().unwrap();
            assert_eq!(reparsed, range);
            assert_eq!(reparsed.to_string(), range.to_string());
        }
    }

    #[test]
    fn week_range_parse_failures() {
        assert!(matches!(
            "".parse::<WeekRange>(),
            Err(RangeError::EmptyInput)
        ));
        assert!(matches!(
            "2022-W49".parse::<WeekRange>(),
            Err(RangeError::InvalidFormat(_))
        ));
        // Well-formed but week 60 does not exist: hard failure
        assert!(matches!(
            "2022-W60__2023-W01".parse::<WeekRange>(),
            Err(RangeError::Calendar(CalendarError::InvalidWeek { .. }))
        ));
    }

    #[test]
    fn week_range_parse_opt() {
        assert_eq!(WeekRange::parse_opt(" ").unwrap(), None);
        let range = WeekRange::parse_opt("2022-W49__2023-W01")
            .unwrap()
            .unwrap();
        assert_eq!(range.len(), 5);
    }

    #[test]
    fn week_range_serde() {
        let range = WeekRange::new(week(2022, 49), week(2023, 1));
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(json, r#""2022-W49__2023-W01""#);

        let parsed: WeekRange = serde_json::from_str(&json).unwrap();
        assert_eq!(range, parsed);
    }
}
