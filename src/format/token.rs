// This is a part of datepattern.
// See README.md and LICENSE.txt for details.

//! The catalog of pattern letters.

use std::sync::Arc;

use super::node::{
    Fixed, FixedText, Name, NameField, NameStyle, Node, Numeric, OffsetFormat, PaddedNumber,
    YearField, YearNumber, ZoneOffset,
};

/// A pattern letter with a formatting meaning.
///
/// Each token maps the number of times its letter is repeated to the node
/// printing it. The mapping is pure, so the same letter run always compiles
/// to an equivalent node.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum Token {
    /// `G`: era designator.
    Era,
    /// `y`: year.
    Year,
    /// `Y`: ISO 8601 week-based year.
    WeekYear,
    /// `M`: month, as number or name.
    Month,
    /// `w`: ISO 8601 week of year.
    WeekOfYear,
    /// `W`: week of month.
    WeekOfMonth,
    /// `D`: day of year.
    DayOfYear,
    /// `d`: day of month.
    Day,
    /// `F`: occurrence of the weekday in the month.
    WeekdayInMonth,
    /// `E`: weekday name.
    WeekdayName,
    /// `u`: ISO 8601 weekday number.
    IsoWeekday,
    /// `a`: AM/PM marker.
    AmPm,
    /// `H`: hour (0--23).
    Hour,
    /// `k`: hour (1--24).
    Hour1To24,
    /// `K`: hour (0--11).
    Hour0To11,
    /// `h`: hour (1--12).
    Hour1To12,
    /// `m`: minute.
    Minute,
    /// `s`: second.
    Second,
    /// `S`: millisecond.
    Millisecond,
    /// `z`: general time zone, `GMT-08:00`.
    GeneralZone,
    /// `Z`: RFC 822 time zone, `-0800`.
    Rfc822Zone,
    /// `X`: ISO 8601 time zone.
    IsoZone,
}

impl Token {
    /// Every token, in catalog order.
    pub const ALL: [Token; 22] = [
        Token::Era,
        Token::Year,
        Token::WeekYear,
        Token::Month,
        Token::WeekOfYear,
        Token::WeekOfMonth,
        Token::DayOfYear,
        Token::Day,
        Token::WeekdayInMonth,
        Token::WeekdayName,
        Token::IsoWeekday,
        Token::AmPm,
        Token::Hour,
        Token::Hour1To24,
        Token::Hour0To11,
        Token::Hour1To12,
        Token::Minute,
        Token::Second,
        Token::Millisecond,
        Token::GeneralZone,
        Token::Rfc822Zone,
        Token::IsoZone,
    ];

    /// The pattern letter of the token.
    pub const fn letter(self) -> char {
        match self {
            Token::Era => 'G',
            Token::Year => 'y',
            Token::WeekYear => 'Y',
            Token::Month => 'M',
            Token::WeekOfYear => 'w',
            Token::WeekOfMonth => 'W',
            Token::DayOfYear => 'D',
            Token::Day => 'd',
            Token::WeekdayInMonth => 'F',
            Token::WeekdayName => 'E',
            Token::IsoWeekday => 'u',
            Token::AmPm => 'a',
            Token::Hour => 'H',
            Token::Hour1To24 => 'k',
            Token::Hour0To11 => 'K',
            Token::Hour1To12 => 'h',
            Token::Minute => 'm',
            Token::Second => 's',
            Token::Millisecond => 'S',
            Token::GeneralZone => 'z',
            Token::Rfc822Zone => 'Z',
            Token::IsoZone => 'X',
        }
    }

    /// The token of a pattern letter, if any.
    pub fn from_letter(letter: char) -> Option<Token> {
        Token::ALL.into_iter().find(|token| token.letter() == letter)
    }

    /// The node printing this token repeated `count` times.
    pub fn node(self, count: usize) -> Arc<dyn Node> {
        let padded = |field| -> Arc<dyn Node> { Arc::new(PaddedNumber::new(field, count)) };
        let year = |field| -> Arc<dyn Node> {
            if count < 3 {
                Arc::new(YearNumber::two_digits(field))
            } else {
                Arc::new(YearNumber::full(field))
            }
        };

        match self {
            Token::Era => Arc::new(FixedText(Fixed::Era)),
            Token::Year => year(YearField::Calendar),
            Token::WeekYear => year(YearField::WeekBased),
            Token::Month => match count {
                0 | 1 => Arc::new(PaddedNumber::new(Numeric::Month, 1)),
                2 => Arc::new(PaddedNumber::new(Numeric::Month, 2)),
                3 => Arc::new(Name::new(NameField::Month, NameStyle::Short)),
                _ => Arc::new(Name::new(NameField::Month, NameStyle::Full)),
            },
            Token::WeekOfYear => padded(Numeric::WeekOfYear),
            Token::WeekOfMonth => padded(Numeric::WeekOfMonth),
            Token::DayOfYear => padded(Numeric::DayOfYear),
            Token::Day => padded(Numeric::Day),
            Token::WeekdayInMonth => padded(Numeric::WeekdayInMonth),
            Token::WeekdayName if count < 4 => {
                Arc::new(Name::new(NameField::Weekday, NameStyle::Short))
            }
            Token::WeekdayName => Arc::new(Name::new(NameField::Weekday, NameStyle::Full)),
            Token::IsoWeekday => padded(Numeric::IsoWeekday),
            Token::AmPm => Arc::new(FixedText(Fixed::AmPm)),
            Token::Hour => padded(Numeric::Hour),
            Token::Hour1To24 => padded(Numeric::Hour1To24),
            Token::Hour0To11 => padded(Numeric::Hour0To11),
            Token::Hour1To12 => padded(Numeric::Hour1To12),
            Token::Minute => padded(Numeric::Minute),
            Token::Second => padded(Numeric::Second),
            Token::Millisecond => padded(Numeric::Millisecond),
            Token::GeneralZone => Arc::new(ZoneOffset(OffsetFormat::GENERAL)),
            Token::Rfc822Zone => Arc::new(ZoneOffset(OffsetFormat::RFC822)),
            Token::IsoZone => Arc::new(ZoneOffset(match count {
                0 | 1 => OffsetFormat::ISO_HOURS,
                2 => OffsetFormat::ISO_BASIC,
                _ => OffsetFormat::ISO_EXTENDED,
            })),
        }
    }
}
