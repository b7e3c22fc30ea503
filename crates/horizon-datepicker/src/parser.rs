//! Incremental interpretation of typed digits.
//!
//! The parser maps a raw digit buffer to candidate timestamps under a
//! [`DateFormat`]. Each format tries its masks in descending specificity;
//! some masks only count as *partial* matches (a prefix of the full format
//! that already names a real date, such as a lone year) and are only tried
//! when the caller allows partial input.
//!
//! | Format     | Complete masks             | Partial masks                  |
//! |------------|----------------------------|--------------------------------|
//! | `Date`     | `YYYYMMDD`                 | `YYYYMM`, `YYYY`               |
//! | `Time`     | `HHmm` on the base date    | `HH` on the base date          |
//! | `DateTime` | `YYYYMMDDHHmm`, `YYYYMMDD`, `HHmm` on the base date | `YYYYMMDDHH`, `YYYYMM`, `YYYY`, `HH` on the base date |
//!
//! Time input never stands alone: it is always placed on a base date (the
//! currently selected date, or today). A `DateTime` buffer that names no
//! date falls back to that base date, so retyping only the time of an
//! already picked date works.

use chrono::{NaiveDate, NaiveDateTime};

use crate::format::{DateFormat, Mask};

/// How far a buffer is from a usable value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStatus {
    /// Nothing typed yet.
    Empty,
    /// Something typed, but no mask matches a real date/time.
    Invalid,
    /// Only a shorter mask matches (e.g. year only).
    Partial,
    /// A complete mask matches.
    Complete,
}

/// A successful match of one mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// The parsed timestamp.
    pub value: NaiveDateTime,
    /// The mask that matched.
    pub mask: Mask,
    /// Whether the mask is a complete tier for the format.
    pub complete: bool,
}

/// Parser for one input format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputParser {
    format: DateFormat,
}

impl InputParser {
    /// Create a parser for `format`.
    pub const fn new(format: DateFormat) -> Self {
        Self { format }
    }

    /// The format this parser reads.
    pub const fn format(&self) -> DateFormat {
        self.format
    }

    /// Masks in the order they are tried, with their completeness.
    fn tiers(&self) -> &'static [(Mask, bool)] {
        match self.format {
            DateFormat::Date => &[(Mask::DATE, true), (Mask::YEAR_MONTH, false), (Mask::YEAR, false)],
            DateFormat::Time => &[(Mask::HOUR_MINUTE, true), (Mask::HOUR, false)],
            DateFormat::DateTime => &[
                (Mask::DATE_HOUR_MINUTE, true),
                (Mask::DATE_HOUR, false),
                (Mask::DATE, true),
                (Mask::YEAR_MONTH, false),
                (Mask::YEAR, false),
                (Mask::HOUR_MINUTE, true),
                (Mask::HOUR, false),
            ],
        }
    }

    /// Every mask that matches `digits`, in trial order.
    ///
    /// `base` supplies the date for time-only masks.
    pub fn candidates(&self, digits: &str, base: NaiveDate, allow_partial: bool) -> Vec<Candidate> {
        self.tiers()
            .iter()
            .filter(|(_, complete)| allow_partial || *complete)
            .filter_map(|&(mask, complete)| {
                mask.parse(digits, base).map(|value| Candidate {
                    value,
                    mask,
                    complete,
                })
            })
            .collect()
    }

    /// The first matching candidate's value.
    pub fn best(&self, digits: &str, base: NaiveDate, allow_partial: bool) -> Option<NaiveDateTime> {
        self.candidates(digits, base, allow_partial)
            .first()
            .map(|c| c.value)
    }

    /// The value of a complete match, if any.
    pub fn complete(&self, digits: &str, base: NaiveDate) -> Option<NaiveDateTime> {
        self.best(digits, base, false)
    }

    /// Classify `digits`.
    pub fn status(&self, digits: &str, base: NaiveDate) -> ParseStatus {
        if digits.is_empty() {
            return ParseStatus::Empty;
        }
        match self.candidates(digits, base, true).first() {
            Some(c) if c.complete => ParseStatus::Complete,
            Some(_) => ParseStatus::Partial,
            None => ParseStatus::Invalid,
        }
    }

    /// Whether `digits` is exactly a real calendar date (`YYYYMMDD`).
    ///
    /// Always `false` for time-only formats.
    pub fn is_complete_date(&self, digits: &str) -> bool {
        self.format.has_date() && Mask::DATE.parse(digits, NaiveDate::MIN).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 1, 1).unwrap()
    }

    #[test]
    fn test_date_completes_only_on_last_digit() {
        let parser = InputParser::new(DateFormat::Date);
        let typed = "20210107";

        for len in 1..typed.len() {
            let prefix = &typed[..len];
            assert!(parser.complete(prefix, base()).is_none(), "{prefix} completed early");
        }
        let value = parser.complete(typed, base()).unwrap();
        assert_eq!(value.to_string(), "2021-01-07 00:00:00");
    }

    #[test]
    fn test_date_statuses() {
        let parser = InputParser::new(DateFormat::Date);
        assert_eq!(parser.status("", base()), ParseStatus::Empty);
        assert_eq!(parser.status("20", base()), ParseStatus::Invalid);
        assert_eq!(parser.status("2021", base()), ParseStatus::Partial);
        assert_eq!(parser.status("20211", base()), ParseStatus::Invalid);
        assert_eq!(parser.status("202113", base()), ParseStatus::Invalid);
        assert_eq!(parser.status("202112", base()), ParseStatus::Partial);
        assert_eq!(parser.status("20211231", base()), ParseStatus::Complete);
        assert_eq!(parser.status("20210231", base()), ParseStatus::Invalid);
    }

    #[test]
    fn test_time_composes_with_base_date() {
        let parser = InputParser::new(DateFormat::Time);
        let value = parser.complete("0930", base()).unwrap();
        assert_eq!(value.to_string(), "2021-01-01 09:30:00");

        assert_eq!(parser.status("09", base()), ParseStatus::Partial);
        assert_eq!(parser.status("093", base()), ParseStatus::Invalid);
        assert_eq!(parser.status("03000", base()), ParseStatus::Invalid);
        assert_eq!(parser.status("2500", base()), ParseStatus::Invalid);
    }

    #[test]
    fn test_date_time_tiers() {
        let parser = InputParser::new(DateFormat::DateTime);

        // A full date is already a complete value at midnight.
        let value = parser.complete("20210107", base()).unwrap();
        assert_eq!(value.to_string(), "2021-01-07 00:00:00");

        // Date plus hour is only partial.
        assert!(parser.complete("2021010713", base()).is_none());
        let value = parser.best("2021010713", base(), true).unwrap();
        assert_eq!(value.to_string(), "2021-01-07 13:00:00");

        let value = parser.complete("202101071345", base()).unwrap();
        assert_eq!(value.to_string(), "2021-01-07 13:45:00");
    }

    #[test]
    fn test_date_time_falls_back_to_time_on_base_date() {
        let parser = InputParser::new(DateFormat::DateTime);
        let picked = NaiveDate::from_ymd_opt(2021, 1, 7).unwrap();

        let value = parser.complete("1345", picked).unwrap();
        assert_eq!(value.to_string(), "2021-01-07 13:45:00");

        // A lone hour only counts with partial input allowed.
        assert!(parser.complete("13", picked).is_none());
        let value = parser.best("13", picked, true).unwrap();
        assert_eq!(value.to_string(), "2021-01-07 13:00:00");

        // Date masks are tried first.
        let value = parser.best("2021", picked, true).unwrap();
        assert_eq!(value.to_string(), "2021-01-01 00:00:00");
        assert_eq!(parser.status("1999", picked), ParseStatus::Partial);
    }

    #[test]
    fn test_partial_candidates_only_when_allowed() {
        let parser = InputParser::new(DateFormat::DateTime);
        assert!(parser.candidates("1999", base(), false).is_empty());

        let candidates = parser.candidates("1999", base(), true);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].mask, Mask::YEAR);
        assert!(!candidates[0].complete);
    }

    #[test]
    fn test_is_complete_date() {
        assert!(InputParser::new(DateFormat::DateTime).is_complete_date("20210107"));
        assert!(!InputParser::new(DateFormat::DateTime).is_complete_date("2021010712"));
        assert!(!InputParser::new(DateFormat::Time).is_complete_date("20210107"));
    }
}
