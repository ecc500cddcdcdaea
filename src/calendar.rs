use crate::models::{DaySlot, TemporalBucket, WeekWindow};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Resolves the Monday-aligned window containing `reference`, shifted by
/// `offset` whole weeks. Pure: same inputs always give the same window.
pub fn resolve_window(reference: NaiveDate, offset: i64) -> WeekWindow {
    let monday = week_start(reference) + Duration::weeks(offset);
    let sunday = monday + Duration::days(6);
    WeekWindow {
        // Calendar year of the Monday, not the ISO week-year; a window
        // spanning the year boundary keeps the Monday's year.
        year: monday.year(),
        week_number: monday.iso_week().week(),
        monday,
        sunday,
    }
}

fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayClass {
    pub tracked: bool,
    pub bucket: TemporalBucket,
}

/// Sundays are never tracked; every other day is. The bucket compares the
/// calendar day only, ignoring time of day.
pub fn classify_day(date: NaiveDate, today: NaiveDate) -> DayClass {
    let bucket = match date.cmp(&today) {
        std::cmp::Ordering::Less => TemporalBucket::Past,
        std::cmp::Ordering::Equal => TemporalBucket::Today,
        std::cmp::Ordering::Greater => TemporalBucket::Future,
    };
    DayClass {
        tracked: date.weekday() != Weekday::Sun,
        bucket,
    }
}

pub fn build_day_slots(window: &WeekWindow, today: NaiveDate) -> Vec<DaySlot> {
    (0..7)
        .map(|day_offset| {
            let date = window.monday + Duration::days(day_offset);
            let class = classify_day(date, today);
            DaySlot {
                date,
                weekday: short_day_name(date),
                bucket: class.bucket,
                tracked: class.tracked,
                is_today: class.bucket == TemporalBucket::Today,
            }
        })
        .collect()
}

pub fn short_day_name(date: NaiveDate) -> String {
    date.format("%a").to_string()
}
