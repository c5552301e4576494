// This is a part of datepattern.
// See README.md and LICENSE.txt for details.

//! The date value consumed by compiled patterns.

use core::fmt;

use crate::calendar;

/// Read-only calendar and clock accessors of a single instant in some local time.
///
/// The formatting pipeline only ever reads through this trait, so any date
/// type can be formatted by implementing it. Implementations are expected to
/// describe a valid proleptic Gregorian date; nothing here validates them.
pub trait DateValue {
    /// Day of the month (1--31).
    fn day_of_month(&self) -> u32;

    /// Zero-based month (0--11).
    fn month_index(&self) -> u32;

    /// Full proleptic Gregorian year. May be zero or negative.
    fn full_year(&self) -> i32;

    /// Hour of the day (0--23).
    fn hours(&self) -> u32;

    /// Minute of the hour (0--59).
    fn minutes(&self) -> u32;

    /// Second of the minute (0--59).
    fn seconds(&self) -> u32;

    /// Millisecond of the second (0--999).
    fn milliseconds(&self) -> u32;

    /// Minutes the local time lags UTC, i.e. positive west of Greenwich.
    ///
    /// `UTC+02:00` is `-120` and `UTC-05:00` is `300`.
    fn timezone_offset_minutes(&self) -> i32;

    /// Milliseconds since 1970-01-01 00:00:00 UTC.
    fn instant(&self) -> i64;
}

impl<T: DateValue + ?Sized> DateValue for &T {
    fn day_of_month(&self) -> u32 {
        (**self).day_of_month()
    }

    fn month_index(&self) -> u32 {
        (**self).month_index()
    }

    fn full_year(&self) -> i32 {
        (**self).full_year()
    }

    fn hours(&self) -> u32 {
        (**self).hours()
    }

    fn minutes(&self) -> u32 {
        (**self).minutes()
    }

    fn seconds(&self) -> u32 {
        (**self).seconds()
    }

    fn milliseconds(&self) -> u32 {
        (**self).milliseconds()
    }

    fn timezone_offset_minutes(&self) -> i32 {
        (**self).timezone_offset_minutes()
    }

    fn instant(&self) -> i64 {
        (**self).instant()
    }
}

/// A plain local date and time with a fixed UTC offset.
///
/// This is the simplest [`DateValue`]: every component is stored as given and
/// checked once on construction.
///
/// ```
/// use datepattern::CivilDateTime;
///
/// let dt = CivilDateTime::from_ymd_opt(2018, 12, 31)
///     .and_then(|d| d.and_hms_milli_opt(23, 59, 1, 250))
///     .unwrap()
///     .with_offset_minutes(-60);
/// assert_eq!(dt.to_string(), "2018-12-31 23:59:01.250 +01:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CivilDateTime {
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    millisecond: u16,
    offset_minutes: i32,
}

impl CivilDateTime {
    /// Makes a new value at midnight of the given date, with a zero offset.
    ///
    /// Returns `None` on an out-of-range month or day.
    pub fn from_ymd_opt(year: i32, month: u32, day: u32) -> Option<CivilDateTime> {
        if !(1..=12).contains(&month) || day < 1 || day > calendar::days_in_month(year, month) {
            return None;
        }
        Some(CivilDateTime {
            year,
            month: month as u8,
            day: day as u8,
            hour: 0,
            minute: 0,
            second: 0,
            millisecond: 0,
            offset_minutes: 0,
        })
    }

    /// Replaces the time of day.
    ///
    /// Returns `None` on an out-of-range component.
    pub fn and_hms_milli_opt(self, hour: u32, min: u32, sec: u32, milli: u32) -> Option<CivilDateTime> {
        if hour >= 24 || min >= 60 || sec >= 60 || milli >= 1_000 {
            return None;
        }
        Some(CivilDateTime {
            hour: hour as u8,
            minute: min as u8,
            second: sec as u8,
            millisecond: milli as u16,
            ..self
        })
    }

    /// Replaces the UTC offset, in minutes positive west of Greenwich.
    #[must_use]
    pub fn with_offset_minutes(self, offset_minutes: i32) -> CivilDateTime {
        CivilDateTime { offset_minutes, ..self }
    }

    /// The month (1--12).
    #[inline]
    pub const fn month(&self) -> u32 {
        self.month as u32
    }
}

impl DateValue for CivilDateTime {
    #[inline]
    fn day_of_month(&self) -> u32 {
        u32::from(self.day)
    }

    #[inline]
    fn month_index(&self) -> u32 {
        u32::from(self.month) - 1
    }

    #[inline]
    fn full_year(&self) -> i32 {
        self.year
    }

    #[inline]
    fn hours(&self) -> u32 {
        u32::from(self.hour)
    }

    #[inline]
    fn minutes(&self) -> u32 {
        u32::from(self.minute)
    }

    #[inline]
    fn seconds(&self) -> u32 {
        u32::from(self.second)
    }

    #[inline]
    fn milliseconds(&self) -> u32 {
        u32::from(self.millisecond)
    }

    #[inline]
    fn timezone_offset_minutes(&self) -> i32 {
        self.offset_minutes
    }

    /// Saturates at `i64::MIN` and `i64::MAX` for years beyond about 292
    /// million years from 1970.
    fn instant(&self) -> i64 {
        let days = calendar::days_from_civil(self.year, self.month(), u32::from(self.day));
        let local = i128::from(days) * 86_400_000
            + i128::from(self.hour) * 3_600_000
            + i128::from(self.minute) * 60_000
            + i128::from(self.second) * 1_000
            + i128::from(self.millisecond);
        let utc = local + i128::from(self.offset_minutes) * 60_000;
        i64::try_from(utc).unwrap_or(if utc < 0 { i64::MIN } else { i64::MAX })
    }
}

impl fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}.{:03} ",
            self.year, self.month, self.day, self.hour, self.minute, self.second, self.millisecond
        )?;
        let (sign, off) = if self.offset_minutes > 0 {
            ('-', self.offset_minutes)
        } else {
            ('+', -self.offset_minutes)
        };
        write!(f, "{}{:02}:{:02}", sign, off / 60, off % 60)
    }
}

#[cfg(feature = "chrono")]
mod with_chrono {
    use chrono::{DateTime, Datelike, NaiveDateTime, Offset, TimeZone, Timelike};

    use super::DateValue;

    impl DateValue for NaiveDateTime {
        fn day_of_month(&self) -> u32 {
            self.day()
        }

        fn month_index(&self) -> u32 {
            self.month0()
        }

        fn full_year(&self) -> i32 {
            self.year()
        }

        fn hours(&self) -> u32 {
            self.hour()
        }

        fn minutes(&self) -> u32 {
            self.minute()
        }

        fn seconds(&self) -> u32 {
            self.second()
        }

        fn milliseconds(&self) -> u32 {
            // leap seconds carry an extra 1_000_000_000 nanoseconds
            (self.nanosecond() / 1_000_000) % 1_000
        }

        fn timezone_offset_minutes(&self) -> i32 {
            0
        }

        fn instant(&self) -> i64 {
            self.and_utc().timestamp_millis()
        }
    }

    impl<Tz: TimeZone> DateValue for DateTime<Tz> {
        fn day_of_month(&self) -> u32 {
            self.day()
        }

        fn month_index(&self) -> u32 {
            self.month0()
        }

        fn full_year(&self) -> i32 {
            self.year()
        }

        fn hours(&self) -> u32 {
            self.hour()
        }

        fn minutes(&self) -> u32 {
            self.minute()
        }

        fn seconds(&self) -> u32 {
            self.second()
        }

        fn milliseconds(&self) -> u32 {
            (self.nanosecond() / 1_000_000) % 1_000
        }

        fn timezone_offset_minutes(&self) -> i32 {
            -(self.offset().fix().local_minus_utc() / 60)
        }

        fn instant(&self) -> i64 {
            self.timestamp_millis()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CivilDateTime, DateValue};

    #[test]
    fn test_from_ymd_opt() {
        assert!(CivilDateTime::from_ymd_opt(2020, 2, 29).is_some());
        assert!(CivilDateTime::from_ymd_opt(2019, 2, 29).is_none());
        assert!(CivilDateTime::from_ymd_opt(2019, 0, 1).is_none());
        assert!(CivilDateTime::from_ymd_opt(2019, 13, 1).is_none());
        assert!(CivilDateTime::from_ymd_opt(2019, 4, 31).is_none());
        assert!(CivilDateTime::from_ymd_opt(2019, 4, 0).is_none());
        assert!(CivilDateTime::from_ymd_opt(-44, 3, 15).is_some());
    }

    #[test]
    fn test_and_hms_milli_opt() {
        let d = CivilDateTime::from_ymd_opt(2018, 11, 1).unwrap();
        let dt = d.and_hms_milli_opt(13, 5, 9, 7).unwrap();
        assert_eq!(dt.hours(), 13);
        assert_eq!(dt.minutes(), 5);
        assert_eq!(dt.seconds(), 9);
        assert_eq!(dt.milliseconds(), 7);
        assert_eq!(dt.month_index(), 10);
        assert!(d.and_hms_milli_opt(24, 0, 0, 0).is_none());
        assert!(d.and_hms_milli_opt(0, 60, 0, 0).is_none());
        assert!(d.and_hms_milli_opt(0, 0, 60, 0).is_none());
        assert!(d.and_hms_milli_opt(0, 0, 0, 1_000).is_none());
    }

    #[test]
    fn test_instant() {
        let epoch = CivilDateTime::from_ymd_opt(1970, 1, 1).unwrap();
        assert_eq!(epoch.instant(), 0);
        // 2009-02-13 23:31:30 UTC
        let dt = CivilDateTime::from_ymd_opt(2009, 2, 13)
            .and_then(|d| d.and_hms_milli_opt(23, 31, 30, 0))
            .unwrap();
        assert_eq!(dt.instant(), 1_234_567_890_000);
        // the same instant seen from UTC+01:00
        let dt = CivilDateTime::from_ymd_opt(2009, 2, 14)
            .and_then(|d| d.and_hms_milli_opt(0, 31, 30, 0))
            .unwrap()
            .with_offset_minutes(-60);
        assert_eq!(dt.instant(), 1_234_567_890_000);
        let before = CivilDateTime::from_ymd_opt(1969, 12, 31)
            .and_then(|d| d.and_hms_milli_opt(23, 59, 59, 999))
            .unwrap();
        assert_eq!(before.instant(), -1);
    }

    #[test]
    fn test_instant_saturates() {
        let far = CivilDateTime::from_ymd_opt(292_000_000, 1, 1).unwrap();
        assert!(far.instant() > 0 && far.instant() < i64::MAX);
        let early = CivilDateTime::from_ymd_opt(-292_000_000, 1, 1).unwrap();
        assert!(early.instant() < 0 && early.instant() > i64::MIN);

        assert_eq!(CivilDateTime::from_ymd_opt(300_000_000, 1, 1).unwrap().instant(), i64::MAX);
        assert_eq!(CivilDateTime::from_ymd_opt(-300_000_000, 1, 1).unwrap().instant(), i64::MIN);
        let last = CivilDateTime::from_ymd_opt(i32::MAX, 12, 31)
            .and_then(|d| d.and_hms_milli_opt(23, 59, 59, 999))
            .unwrap()
            .with_offset_minutes(i32::MAX);
        assert_eq!(last.instant(), i64::MAX);
        let first = CivilDateTime::from_ymd_opt(i32::MIN, 1, 1).unwrap().with_offset_minutes(i32::MIN);
        assert_eq!(first.instant(), i64::MIN);
    }

    #[test]
    fn test_display() {
        let dt = CivilDateTime::from_ymd_opt(2010, 8, 31)
            .and_then(|d| d.and_hms_milli_opt(7, 8, 9, 10))
            .unwrap()
            .with_offset_minutes(330);
        assert_eq!(dt.to_string(), "2010-08-31 07:08:09.010 -05:30");
    }
}
