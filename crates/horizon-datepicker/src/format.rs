//! Input formats and the fixed-width digit masks they are parsed against.
//!
//! A text input only ever stores raw digits. The format decides which
//! digit layouts (masks) the buffer may match, how a committed value is
//! written back into the buffer, and which separators the placeholder shows.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{DatePickerError, Result};

/// Character used for not-yet-typed positions in the placeholder.
pub const PLACEHOLDER_CHAR: char = 'X';

/// Separators kept at fixed positions in the placeholder.
const SEPARATORS: [char; 3] = [' ', '-', ':'];

/// A recognized input format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DateFormat {
    /// `YYYY-MM-DD`
    #[cfg_attr(feature = "serde", serde(rename = "YYYY-MM-DD"))]
    Date,
    /// `HH:mm`
    #[cfg_attr(feature = "serde", serde(rename = "HH:mm"))]
    Time,
    /// `YYYY-MM-DD HH:mm`
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "YYYY-MM-DD HH:mm"))]
    DateTime,
}

impl DateFormat {
    /// The display pattern, e.g. `YYYY-MM-DD HH:mm`.
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::Date => "YYYY-MM-DD",
            Self::Time => "HH:mm",
            Self::DateTime => "YYYY-MM-DD HH:mm",
        }
    }

    const fn chrono_input_pattern(self) -> &'static str {
        match self {
            Self::Date => "%Y%m%d",
            Self::Time => "%H%M",
            Self::DateTime => "%Y%m%d%H%M",
        }
    }

    /// Whether the format includes a calendar date.
    pub const fn has_date(self) -> bool {
        matches!(self, Self::Date | Self::DateTime)
    }

    /// The placeholder: every letter of the pattern replaced by `X`.
    pub fn placeholder(self) -> String {
        self.pattern()
            .chars()
            .map(|c| if c.is_ascii_alphabetic() { PLACEHOLDER_CHAR } else { c })
            .collect()
    }

    /// Write `value` as the raw digits an input buffer holds.
    pub fn to_input(self, value: NaiveDateTime) -> String {
        value.format(self.chrono_input_pattern()).to_string()
    }

    /// Overlay typed digits onto the placeholder.
    ///
    /// Separators stay at their fixed positions however many digits have
    /// been typed; untyped positions keep the placeholder character.
    pub fn overlay(self, digits: &str) -> String {
        let mut typed = digits.chars();
        self.placeholder()
            .chars()
            .map(|c| {
                if SEPARATORS.contains(&c) {
                    c
                } else {
                    typed.next().unwrap_or(c)
                }
            })
            .collect()
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pattern())
    }
}

impl FromStr for DateFormat {
    type Err = DatePickerError;

    fn from_str(s: &str) -> Result<Self> {
        [Self::Date, Self::Time, Self::DateTime]
            .into_iter()
            .find(|format| format.pattern() == s)
            .ok_or_else(|| DatePickerError::UnknownFormat(s.to_string()))
    }
}

/// One numeric field of a mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Year,
    Month,
    Day,
    Hour,
    Minute,
}

impl Field {
    const fn width(self) -> usize {
        match self {
            Self::Year => 4,
            Self::Month | Self::Day | Self::Hour | Self::Minute => 2,
        }
    }
}

/// A fixed-width digit layout such as `YYYYMMDD`.
///
/// Parsing is strict: the buffer must have exactly the mask's width, contain
/// only ASCII digits, and describe a date and time that exist. Fields the
/// mask omits default to January, the 1st and 00:00; masks without a year
/// take their date from the supplied base date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mask {
    name: &'static str,
    fields: &'static [Field],
}

impl Mask {
    /// `YYYYMMDDHHmm`
    pub const DATE_HOUR_MINUTE: Mask = Mask {
        name: "YYYYMMDDHHmm",
        fields: &[Field::Year, Field::Month, Field::Day, Field::Hour, Field::Minute],
    };
    /// `YYYYMMDDHH`
    pub const DATE_HOUR: Mask = Mask {
        name: "YYYYMMDDHH",
        fields: &[Field::Year, Field::Month, Field::Day, Field::Hour],
    };
    /// `YYYYMMDD`
    pub const DATE: Mask = Mask {
        name: "YYYYMMDD",
        fields: &[Field::Year, Field::Month, Field::Day],
    };
    /// `YYYYMM`
    pub const YEAR_MONTH: Mask = Mask {
        name: "YYYYMM",
        fields: &[Field::Year, Field::Month],
    };
    /// `YYYY`
    pub const YEAR: Mask = Mask {
        name: "YYYY",
        fields: &[Field::Year],
    };
    /// `HHmm`
    pub const HOUR_MINUTE: Mask = Mask {
        name: "HHmm",
        fields: &[Field::Hour, Field::Minute],
    };
    /// `HH`
    pub const HOUR: Mask = Mask {
        name: "HH",
        fields: &[Field::Hour],
    };

    /// The mask's layout, e.g. `YYYYMM`.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Number of digits the mask consumes.
    pub fn width(&self) -> usize {
        self.fields.iter().map(|f| f.width()).sum()
    }

    /// Strictly parse `digits`, taking the date from `base` if the mask has no year.
    pub fn parse(&self, digits: &str, base: NaiveDate) -> Option<NaiveDateTime> {
        if digits.len() != self.width() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let mut year = None;
        let (mut month, mut day, mut hour, mut minute) = (1, 1, 0, 0);
        let mut rest = digits;
        for field in self.fields {
            let (head, tail) = rest.split_at(field.width());
            rest = tail;
            let value: u32 = head.parse().ok()?;
            match field {
                Field::Year => year = Some(i32::try_from(value).ok()?),
                Field::Month => month = value,
                Field::Day => day = value,
                Field::Hour => hour = value,
                Field::Minute => minute = value,
            }
        }

        let date = match year {
            Some(year) => NaiveDate::from_ymd_opt(year, month, day)?,
            None => base,
        };
        let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
        Some(date.and_time(time))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 1, 1).unwrap()
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("YYYY-MM-DD".parse::<DateFormat>(), Ok(DateFormat::Date));
        assert_eq!("HH:mm".parse::<DateFormat>(), Ok(DateFormat::Time));
        assert_eq!("YYYY-MM-DD HH:mm".parse::<DateFormat>(), Ok(DateFormat::DateTime));
        assert_eq!(
            "DD/MM/YYYY".parse::<DateFormat>(),
            Err(DatePickerError::UnknownFormat("DD/MM/YYYY".to_string()))
        );
    }

    #[test]
    fn test_placeholder_and_overlay() {
        assert_eq!(DateFormat::DateTime.placeholder(), "XXXX-XX-XX XX:XX");
        assert_eq!(DateFormat::DateTime.overlay(""), "XXXX-XX-XX XX:XX");
        assert_eq!(DateFormat::DateTime.overlay("202101"), "2021-01-XX XX:XX");
        assert_eq!(DateFormat::Date.overlay("20210107"), "2021-01-07");
        assert_eq!(DateFormat::Time.overlay("03"), "03:XX");
    }

    #[test]
    fn test_display_round_trip() {
        let value = NaiveDate::from_ymd_opt(2021, 1, 7)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(DateFormat::Date.overlay(&DateFormat::Date.to_input(value)), "2021-01-07");
        assert_eq!(DateFormat::DateTime.to_input(value), "202101070000");
        assert_eq!(DateFormat::Time.to_input(value), "0000");
    }

    #[test]
    fn test_mask_is_strict() {
        assert!(Mask::DATE.parse("20210107", base()).is_some());
        assert!(Mask::DATE.parse("2021017", base()).is_none());
        assert!(Mask::DATE.parse("202101071", base()).is_none());
        assert!(Mask::DATE.parse("20210230", base()).is_none());
        assert!(Mask::DATE.parse("2021a107", base()).is_none());
        assert!(Mask::HOUR_MINUTE.parse("2400", base()).is_none());
        assert!(Mask::HOUR_MINUTE.parse("2360", base()).is_none());
    }

    #[test]
    fn test_mask_defaults() {
        let parsed = Mask::YEAR.parse("1999", base()).unwrap();
        assert_eq!(parsed.to_string(), "1999-01-01 00:00:00");

        let parsed = Mask::HOUR.parse("13", base()).unwrap();
        assert_eq!(parsed.to_string(), "2021-01-01 13:00:00");
    }

    #[test]
    fn test_mask_widths() {
        assert_eq!(Mask::DATE_HOUR_MINUTE.width(), 12);
        assert_eq!(Mask::DATE_HOUR.width(), 10);
        assert_eq!(Mask::YEAR_MONTH.width(), 6);
        assert_eq!(Mask::HOUR_MINUTE.name(), "HHmm");
    }
}
