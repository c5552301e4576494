// This is a part of datepattern.
// See README.md and LICENSE.txt for details.

//! Formatting nodes, the executable units of a compiled pattern.

use core::fmt;

use crate::calendar;
use crate::date::DateValue;
use crate::error::FormatResult;
use crate::locale::LocaleMessages;

/// One step of a compiled pattern: writes a fragment for a date value.
///
/// Nodes hold no mutable state, so one node can serve any number of
/// concurrent renderings.
pub trait Node: fmt::Debug + Send + Sync {
    /// Appends the fragment for `value` to `w`.
    ///
    /// Only nodes that look up names in `messages` can fail.
    fn format(
        &self,
        w: &mut String,
        value: &dyn DateValue,
        messages: &LocaleMessages,
    ) -> FormatResult<()>;

    /// Returns the fragment for `value` as a new string.
    fn render(&self, value: &dyn DateValue, messages: &LocaleMessages) -> FormatResult<String> {
        let mut result = String::new();
        self.format(&mut result, value, messages)?;
        Ok(result)
    }
}

/// Left-pads the decimal form of `v` with zeroes up to `width` characters.
///
/// Longer numbers are never truncated.
fn write_padded(w: &mut String, v: i64, width: usize) {
    let digits = v.to_string();
    for _ in digits.len()..width {
        w.push('0');
    }
    w.push_str(&digits);
}

/// Text printed as is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Literal(String);

impl Literal {
    /// Makes a node printing `text`.
    pub fn new(text: impl Into<String>) -> Literal {
        Literal(text.into())
    }

    /// The printed text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Node for Literal {
    fn format(&self, w: &mut String, _: &dyn DateValue, _: &LocaleMessages) -> FormatResult<()> {
        w.push_str(&self.0);
        Ok(())
    }
}

/// Numeric fields printed by [`PaddedNumber`].
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum Numeric {
    /// Month (1--12).
    Month,
    /// ISO 8601 week of the year (1--53).
    WeekOfYear,
    /// Week of the month (1--6), week 1 containing the month's first Thursday.
    WeekOfMonth,
    /// Day of the year (1--366).
    DayOfYear,
    /// Day of the month (1--31).
    Day,
    /// Occurrence of the weekday within the month (1--5).
    WeekdayInMonth,
    /// ISO 8601 weekday, Monday = 1 through Sunday = 7.
    IsoWeekday,
    /// Hour in the 24-hour clock (0--23).
    Hour,
    /// Hour in the 24-hour clock counted from 1 (1--24), midnight being 24.
    Hour1To24,
    /// Hour in the 12-hour clock counted from 0 (0--11).
    Hour0To11,
    /// Hour in the 12-hour clock (1--12), noon and midnight being 12.
    Hour1To12,
    /// Minute (0--59).
    Minute,
    /// Second (0--59).
    Second,
    /// Millisecond (0--999).
    Millisecond,
}

impl Numeric {
    /// The value of the field for a date.
    pub fn value(self, d: &dyn DateValue) -> i64 {
        use self::Numeric::*;

        let v = match self {
            Month => d.month_index() + 1,
            WeekOfYear => calendar::week_of_year(d),
            WeekOfMonth => calendar::week_of_month(d),
            DayOfYear => calendar::day_of_year(d),
            Day => d.day_of_month(),
            WeekdayInMonth => calendar::day_of_week_in_month(d),
            IsoWeekday => calendar::day_of_week(d),
            Hour => d.hours(),
            Hour1To24 => match d.hours() {
                0 => 24,
                h => h,
            },
            Hour0To11 => d.hours() % 12,
            Hour1To12 => match d.hours() % 12 {
                0 => 12,
                h => h,
            },
            Minute => d.minutes(),
            Second => d.seconds(),
            Millisecond => d.milliseconds(),
        };
        i64::from(v)
    }
}

/// A numeric field, zero-padded to a minimal width.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct PaddedNumber {
    field: Numeric,
    width: usize,
}

impl PaddedNumber {
    /// Makes a node printing `field` with at least `width` digits.
    pub const fn new(field: Numeric, width: usize) -> PaddedNumber {
        PaddedNumber { field, width }
    }
}

impl Node for PaddedNumber {
    fn format(&self, w: &mut String, value: &dyn DateValue, _: &LocaleMessages) -> FormatResult<()> {
        write_padded(w, self.field.value(value), self.width);
        Ok(())
    }
}

/// Which year a [`YearNumber`] prints.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum YearField {
    /// The proleptic Gregorian year.
    Calendar,
    /// The ISO 8601 week-based year.
    WeekBased,
}

/// A year, either in full or as its last two digits.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct YearNumber {
    field: YearField,
    two_digits: bool,
}

impl YearNumber {
    /// Makes a node printing the full year.
    pub const fn full(field: YearField) -> YearNumber {
        YearNumber { field, two_digits: false }
    }

    /// Makes a node printing the year modulo 100, zero-padded to two digits.
    pub const fn two_digits(field: YearField) -> YearNumber {
        YearNumber { field, two_digits: true }
    }
}

impl Node for YearNumber {
    fn format(&self, w: &mut String, value: &dyn DateValue, _: &LocaleMessages) -> FormatResult<()> {
        let year = i64::from(match self.field {
            YearField::Calendar => value.full_year(),
            YearField::WeekBased => calendar::week_based_year(value),
        });
        if self.two_digits {
            write_padded(w, year.rem_euclid(100), 2);
        } else {
            write_padded(w, year, 0);
        }
        Ok(())
    }
}

/// Texts that need no locale messages.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum Fixed {
    /// `BC` for negative years, `AD` otherwise.
    Era,
    /// `AM` before noon, `PM` from noon.
    AmPm,
}

/// A [`Fixed`] text.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct FixedText(pub Fixed);

impl Node for FixedText {
    fn format(&self, w: &mut String, value: &dyn DateValue, _: &LocaleMessages) -> FormatResult<()> {
        w.push_str(match self.0 {
            Fixed::Era if value.full_year() < 0 => "BC",
            Fixed::Era => "AD",
            Fixed::AmPm if value.hours() < 12 => "AM",
            Fixed::AmPm => "PM",
        });
        Ok(())
    }
}

/// Fields printed by name.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum NameField {
    /// The month, looked up as `months.<style>.<1..12>`.
    Month,
    /// The weekday, looked up as `weekdays.<style>.<1..7>` with Monday = 1.
    Weekday,
}

/// Length of a name.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum NameStyle {
    /// Abbreviated, like `Jul` or `Tue`.
    Short,
    /// Full, like `July` or `Tuesday`.
    Full,
}

/// A month or weekday name from the locale messages.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Name {
    field: NameField,
    style: NameStyle,
}

impl Name {
    /// Makes a node printing the `style` name of `field`.
    pub const fn new(field: NameField, style: NameStyle) -> Name {
        Name { field, style }
    }

    /// The message key holding the name for a date.
    pub fn key(&self, value: &dyn DateValue) -> String {
        let (group, number) = match self.field {
            NameField::Month => ("months", value.month_index() + 1),
            NameField::Weekday => ("weekdays", calendar::day_of_week(value)),
        };
        let style = match self.style {
            NameStyle::Short => "short",
            NameStyle::Full => "full",
        };
        format!("{}.{}.{}", group, style, number)
    }
}

impl Node for Name {
    fn format(
        &self,
        w: &mut String,
        value: &dyn DateValue,
        messages: &LocaleMessages,
    ) -> FormatResult<()> {
        w.push_str(messages.lookup(&self.key(value))?);
        Ok(())
    }
}

/// Amount of detail in a UTC offset.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum OffsetPrecision {
    /// Whole hours; remaining minutes are dropped.
    Hours,
    /// Hours and minutes.
    Minutes,
}

/// How a [`ZoneOffset`] prints the UTC offset.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct OffsetFormat {
    /// Printed fields.
    pub precision: OffsetPrecision,
    /// Separate hours and minutes with a colon.
    pub colons: bool,
    /// Prefix with `GMT`, and print only `GMT` for a zero offset.
    pub gmt: bool,
}

impl OffsetFormat {
    /// `GMT` or `GMT-08:00`.
    pub const GENERAL: OffsetFormat =
        OffsetFormat { precision: OffsetPrecision::Minutes, colons: true, gmt: true };
    /// `-0800`.
    pub const RFC822: OffsetFormat =
        OffsetFormat { precision: OffsetPrecision::Minutes, colons: false, gmt: false };
    /// `-08`.
    pub const ISO_HOURS: OffsetFormat =
        OffsetFormat { precision: OffsetPrecision::Hours, colons: false, gmt: false };
    /// `-0800`.
    pub const ISO_BASIC: OffsetFormat =
        OffsetFormat { precision: OffsetPrecision::Minutes, colons: false, gmt: false };
    /// `-08:00`.
    pub const ISO_EXTENDED: OffsetFormat =
        OffsetFormat { precision: OffsetPrecision::Minutes, colons: true, gmt: false };

    /// Writes an offset given in minutes positive west of UTC.
    fn format(&self, w: &mut String, offset_minutes: i32) {
        if self.gmt {
            w.push_str("GMT");
            if offset_minutes == 0 {
                return;
            }
        }
        // west of UTC is behind it
        w.push(if offset_minutes > 0 { '-' } else { '+' });
        let off = i64::from(offset_minutes).abs();
        write_padded(w, off / 60, 2);
        if self.precision == OffsetPrecision::Minutes {
            if self.colons {
                w.push(':');
            }
            write_padded(w, off % 60, 2);
        }
    }
}

/// The fixed UTC offset of the date value.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ZoneOffset(pub OffsetFormat);

impl Node for ZoneOffset {
    fn format(&self, w: &mut String, value: &dyn DateValue, _: &LocaleMessages) -> FormatResult<()> {
        self.0.format(w, value.timezone_offset_minutes());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{
        Fixed, FixedText, Literal, Name, NameField, NameStyle, Node, Numeric, OffsetFormat,
        PaddedNumber, YearField, YearNumber, ZoneOffset,
    };
    use crate::error::FormatErrorKind;
    use crate::{CivilDateTime, LocaleMessages};

    fn at(y: i32, m: u32, d: u32, hh: u32, mm: u32) -> CivilDateTime {
        CivilDateTime::from_ymd_opt(y, m, d).and_then(|d| d.and_hms_milli_opt(hh, mm, 7, 42)).unwrap()
    }

    fn render(node: &dyn Node, value: &CivilDateTime) -> String {
        node.render(value, &LocaleMessages::english()).unwrap()
    }

    #[test]
    fn test_padded_number() {
        let dt = at(2018, 3, 4, 5, 6);
        assert_eq!(render(&PaddedNumber::new(Numeric::Day, 1), &dt), "4");
        assert_eq!(render(&PaddedNumber::new(Numeric::Day, 2), &dt), "04");
        assert_eq!(render(&PaddedNumber::new(Numeric::Day, 5), &dt), "00004");
        assert_eq!(render(&PaddedNumber::new(Numeric::DayOfYear, 1), &dt), "63");
        assert_eq!(render(&PaddedNumber::new(Numeric::Millisecond, 3), &dt), "042");
        assert_eq!(render(&PaddedNumber::new(Numeric::Millisecond, 1), &dt), "42");
    }

    #[test]
    fn test_padding_law() {
        let dt = at(2018, 12, 31, 23, 59);
        let fields = [Numeric::Month, Numeric::Day, Numeric::DayOfYear, Numeric::Hour, Numeric::Minute];
        for field in fields {
            let natural = render(&PaddedNumber::new(field, 0), &dt).len();
            for width in natural..natural + 4 {
                assert_eq!(render(&PaddedNumber::new(field, width), &dt).len(), width);
            }
        }
    }

    #[test]
    fn test_hours() {
        let cases = [(0, 0, 24, 0, 12), (1, 1, 1, 1, 1), (11, 11, 11, 11, 11), (12, 12, 12, 0, 12), (23, 23, 23, 11, 11)];
        for (hour, h24, k, kk, h12) in cases {
            let dt = at(2018, 1, 1, hour, 0);
            assert_eq!(Numeric::Hour.value(&dt), h24);
            assert_eq!(Numeric::Hour1To24.value(&dt), k);
            assert_eq!(Numeric::Hour0To11.value(&dt), kk);
            assert_eq!(Numeric::Hour1To12.value(&dt), h12);
        }
    }

    #[test]
    fn test_year_number() {
        let full = YearNumber::full(YearField::Calendar);
        let short = YearNumber::two_digits(YearField::Calendar);
        assert_eq!(render(&full, &at(2018, 12, 31, 0, 0)), "2018");
        assert_eq!(render(&short, &at(2018, 12, 31, 0, 0)), "18");
        assert_eq!(render(&short, &at(2005, 6, 1, 0, 0)), "05");
        assert_eq!(render(&full, &at(33, 6, 1, 0, 0)), "33");
        assert_eq!(render(&short, &at(-1, 6, 1, 0, 0)), "99");
        assert_eq!(render(&full, &at(-1, 6, 1, 0, 0)), "-1");

        let week_based = YearNumber::full(YearField::WeekBased);
        assert_eq!(render(&week_based, &at(2018, 12, 31, 0, 0)), "2019");
        assert_eq!(render(&YearNumber::two_digits(YearField::WeekBased), &at(2016, 1, 2, 0, 0)), "15");
    }

    #[test]
    fn test_fixed_text() {
        assert_eq!(render(&FixedText(Fixed::Era), &at(2018, 1, 1, 0, 0)), "AD");
        assert_eq!(render(&FixedText(Fixed::Era), &at(0, 1, 1, 0, 0)), "AD");
        assert_eq!(render(&FixedText(Fixed::Era), &at(-43, 1, 1, 0, 0)), "BC");
        assert_eq!(render(&FixedText(Fixed::AmPm), &at(2018, 1, 1, 0, 0)), "AM");
        assert_eq!(render(&FixedText(Fixed::AmPm), &at(2018, 1, 1, 11, 59)), "AM");
        assert_eq!(render(&FixedText(Fixed::AmPm), &at(2018, 1, 1, 12, 0)), "PM");
    }

    #[test]
    fn test_names() {
        let dt = at(2010, 8, 31, 0, 0);
        assert_eq!(render(&Name::new(NameField::Month, NameStyle::Short), &dt), "Aug");
        assert_eq!(render(&Name::new(NameField::Month, NameStyle::Full), &dt), "August");
        assert_eq!(render(&Name::new(NameField::Weekday, NameStyle::Short), &dt), "Tue");
        assert_eq!(render(&Name::new(NameField::Weekday, NameStyle::Full), &dt), "Tuesday");
        assert_eq!(Name::new(NameField::Weekday, NameStyle::Full).key(&dt), "weekdays.full.2");
    }

    #[test]
    fn test_missing_name() {
        let node = Name::new(NameField::Month, NameStyle::Full);
        let err = node.render(&at(2010, 8, 31, 0, 0), &LocaleMessages::new()).unwrap_err();
        assert_eq!(err.kind(), &FormatErrorKind::MissingMessage("months.full.8".into()));
    }

    #[test]
    fn test_zone_offset() {
        let utc = at(2018, 1, 1, 0, 0);
        let west = utc.with_offset_minutes(480);
        let east = utc.with_offset_minutes(-330);

        let general = ZoneOffset(OffsetFormat::GENERAL);
        assert_eq!(render(&general, &utc), "GMT");
        assert_eq!(render(&general, &west), "GMT-08:00");
        assert_eq!(render(&general, &east), "GMT+05:30");

        let rfc822 = ZoneOffset(OffsetFormat::RFC822);
        assert_eq!(render(&rfc822, &utc), "+0000");
        assert_eq!(render(&rfc822, &west), "-0800");
        assert_eq!(render(&rfc822, &east), "+0530");

        assert_eq!(render(&ZoneOffset(OffsetFormat::ISO_HOURS), &east), "+05");
        assert_eq!(render(&ZoneOffset(OffsetFormat::ISO_BASIC), &west), "-0800");
        assert_eq!(render(&ZoneOffset(OffsetFormat::ISO_EXTENDED), &east), "+05:30");
        assert_eq!(render(&ZoneOffset(OffsetFormat::ISO_EXTENDED), &utc), "+00:00");
    }

    #[test]
    fn test_literal() {
        let node = Literal::new("o'clock");
        assert_eq!(node.as_str(), "o'clock");
        assert_eq!(render(&node, &at(2018, 1, 1, 0, 0)), "o'clock");
    }
}
