// This is a part of datepattern.
// See README.md and LICENSE.txt for details.

//! ISO 8601 calendar math over a [`DateValue`].
//!
//! ISO 8601 weeks start on Monday, and the first week of a year is the one
//! containing that year's first Thursday. Every week therefore belongs to the
//! year (and month) its Thursday falls in, which is how the week numbers below
//! are computed: shift the date to the Thursday of its week, then count from
//! there.
//!
//! All functions assume a valid proleptic Gregorian date and never fail.

use crate::date::DateValue;

/// Offsets of Sakamoto's day of week congruence, indexed by zero-based month.
const SAKAMOTO_OFFSETS: [i64; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

/// Days from 0000-03-01 to 1970-01-01.
const DAYS_TO_UNIX_EPOCH: i64 = 719_468;

/// Days in a 400-year Gregorian cycle.
const DAYS_IN_ERA: i64 = 146_097;

/// Returns true for leap years of the proleptic Gregorian calendar.
#[inline]
pub const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in the month (1--12) of the year.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Days since 1970-01-01 of the given civil date.
pub(crate) fn days_from_civil(year: i32, month: u32, day: u32) -> i64 {
    // ref: http://howardhinnant.github.io/date_algorithms.html
    let year = i64::from(year) - i64::from(month <= 2);
    let month = i64::from(month);
    let era = year.div_euclid(400);
    let year_of_era = year.rem_euclid(400);
    let month_from_march = if month > 2 { month - 3 } else { month + 9 };
    let day_of_year = (153 * month_from_march + 2) / 5 + i64::from(day) - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * DAYS_IN_ERA + day_of_era - DAYS_TO_UNIX_EPOCH
}

/// The civil date `(year, month, day)` of the given day since 1970-01-01.
pub(crate) fn civil_from_days(days: i64) -> (i32, u32, u32) {
    let days = days + DAYS_TO_UNIX_EPOCH;
    let era = days.div_euclid(DAYS_IN_ERA);
    let day_of_era = days.rem_euclid(DAYS_IN_ERA);
    let year_of_era =
        (day_of_era - day_of_era / 1_460 + day_of_era / 36_524 - day_of_era / (DAYS_IN_ERA - 1))
            / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let month_from_march = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * month_from_march + 2) / 5 + 1;
    let month = if month_from_march < 10 { month_from_march + 3 } else { month_from_march - 9 };
    let year = year_of_era + era * 400 + i64::from(month <= 2);
    (year as i32, month as u32, day as u32)
}

/// A bare calendar date, used for the day shifting the week rules need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Ymd {
    year: i32,
    month: u32,
    day: u32,
}

impl Ymd {
    fn of<D: DateValue + ?Sized>(date: &D) -> Ymd {
        Ymd { year: date.full_year(), month: date.month_index() + 1, day: date.day_of_month() }
    }

    fn epoch_days(self) -> i64 {
        days_from_civil(self.year, self.month, self.day)
    }

    fn add_days(self, days: i64) -> Ymd {
        let (year, month, day) = civil_from_days(self.epoch_days() + days);
        Ymd { year, month, day }
    }

    /// Sakamoto's congruence, 1 = Monday through 7 = Sunday.
    fn weekday(self) -> u32 {
        let year = if self.month < 3 { i64::from(self.year) - 1 } else { i64::from(self.year) };
        let sunday_based = (year + year.div_euclid(4) - year.div_euclid(100)
            + year.div_euclid(400)
            + SAKAMOTO_OFFSETS[self.month as usize - 1]
            + i64::from(self.day))
        .rem_euclid(7);
        if sunday_based == 0 {
            7
        } else {
            sunday_based as u32
        }
    }

    fn ordinal(self) -> u32 {
        (self.epoch_days() - days_from_civil(self.year, 1, 1)) as u32 + 1
    }

    /// The Thursday of the ISO week containing this date.
    fn thursday(self) -> Ymd {
        self.add_days(4 - i64::from(self.weekday()))
    }
}

/// `ceil(n / 7)` for the positive day differences below.
#[inline]
fn weeks_ceil(days: i64) -> u32 {
    (days + 6).div_euclid(7) as u32
}

/// ISO 8601 day of week, 1 = Monday through 7 = Sunday.
pub fn day_of_week<D: DateValue + ?Sized>(date: &D) -> u32 {
    Ymd::of(date).weekday()
}

/// The occurrence of this weekday within the month: 1 for days 1--7, 2 for
/// days 8--14 and so on.
pub fn day_of_week_in_month<D: DateValue + ?Sized>(date: &D) -> u32 {
    (date.day_of_month() + 6) / 7
}

/// Day of the year (1--366).
///
/// Counted in calendar days from January 1st, so the time of day never
/// shifts the result.
pub fn day_of_year<D: DateValue + ?Sized>(date: &D) -> u32 {
    Ymd::of(date).ordinal()
}

/// The ISO 8601 week-based year: the calendar year of the week's Thursday.
///
/// It differs from the calendar year for up to three days around New Year.
pub fn week_based_year<D: DateValue + ?Sized>(date: &D) -> i32 {
    Ymd::of(date).thursday().year
}

/// Week of the month (1--6), where week 1 is the one containing the month's
/// first Thursday.
///
/// Like the week-based year, the month is the one of the week's Thursday, so
/// the first days of a month can belong to the last week of the previous one.
pub fn week_of_month<D: DateValue + ?Sized>(date: &D) -> u32 {
    let thursday = Ymd::of(date).thursday();
    let day4 = Ymd { day: 4, ..thursday };
    weeks_ceil(i64::from(thursday.day) - 4 + i64::from(day4.weekday()))
}

/// ISO 8601 week of the year (1--53).
///
/// December 29th to 31st may report week 1 of the next year, and January 1st
/// to 3rd may report week 52 or 53 of the previous year.
pub fn week_of_year<D: DateValue + ?Sized>(date: &D) -> u32 {
    let thursday = Ymd::of(date).thursday();
    // January 4th is always in week 1
    let jan4 = Ymd { year: thursday.year, month: 1, day: 4 };
    weeks_ceil(i64::from(thursday.ordinal()) - 4 + i64::from(jan4.weekday()))
}
