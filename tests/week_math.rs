//! Black-box tests for ISO 8601 week math across year boundaries.

use calrange::{CalendarDate, CalendarWeek, weeks_in_iso_year};

fn date(year: u16, month: u8, day: u8) -> CalendarDate {
    CalendarDate::from_ymd(year, month, day).unwrap()
}

#[test]
fn week_year_differs_from_calendar_year_at_boundaries() {
    // January days that belong to the previous ISO week-year
    assert_eq!(CalendarWeek::for_date(date(2023, 1, 1)).to_string(), "2022-W52");
    assert_eq!(CalendarWeek::for_date(date(2016, 1, 1)).to_string(), "2015-W53");

    // December days that belong to the next ISO week-year
    assert_eq!(CalendarWeek::for_date(date(2024, 12, 31)).to_string(), "2025-W01");

    // And one that stays put
    assert_eq!(CalendarWeek::for_date(date(2020, 12, 31)).to_string(), "2020-W53");
}

#[test]
fn week_one_always_contains_january_fourth() {
    for year in 1990..=2030 {
        let week = CalendarWeek::for_date(date(year, 1, 4));
        assert_eq!(week.year(), year, "year {year}");
        assert_eq!(week.week(), 1, "year {year}");
    }
}

#[test]
fn every_week_spans_monday_through_sunday() {
    let week = CalendarWeek::from_parts(2022, 49).unwrap();
    let monday = week.first_day();
    let sunday = week.last_day().unwrap();

    assert_eq!(monday, date(2022, 12, 5));
    assert_eq!(monday.day_of_week(), chrono::Weekday::Mon);
    assert_eq!(sunday, date(2022, 12, 11));
    assert_eq!(sunday.day_of_week(), chrono::Weekday::Sun);
    assert_eq!(monday.add_days(6).unwrap(), sunday);
}

#[test]
fn navigation_agrees_with_week_count() {
    // 2020 has 53 weeks, so W53 precedes 2021-W01
    let last = CalendarWeek::from_parts(2020, 53).unwrap();
    assert_eq!(weeks_in_iso_year(2020), 53);
    assert_eq!(last.next_week().unwrap().to_string(), "2021-W01");
    assert_eq!(
        CalendarWeek::from_parts(2021, 1).unwrap().previous_week().unwrap(),
        last
    );

    // 2021 has only 52
    assert_eq!(weeks_in_iso_year(2021), 52);
    assert!(CalendarWeek::from_parts(2021, 53).is_err());
}

#[test]
fn every_day_of_a_week_maps_back_to_it() {
    let week = CalendarWeek::from_parts(2015, 1).unwrap();
    let mut day = week.first_day();
    for _ in 0..7 {
        assert_eq!(CalendarWeek::for_date(day), week, "{day}");
        day = day.add_days(1).unwrap();
    }
    assert_ne!(CalendarWeek::for_date(day), week);
}

#[test]
fn quarters_partition_the_year() {
    let mut day = date(2023, 1, 1);
    let mut seen = [0_u32; 4];
    for _ in 0..365 {
        seen[usize::from(day.quarter()) - 1] += 1;
        day = day.add_days(1).unwrap();
    }
    assert_eq!(seen, [90, 91, 92, 92]);

    let q4 = date(2023, 11, 15);
    assert_eq!(
        CalendarDate::start_of_quarter(q4.year(), q4.quarter()).unwrap(),
        date(2023, 10, 1)
    );
    assert_eq!(
        CalendarDate::end_of_quarter(q4.year(), q4.quarter()).unwrap(),
        date(2023, 12, 31)
    );
}
