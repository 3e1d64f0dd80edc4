//! The name, date and time spellings an attribution byline may use.
//!
//! Every format contributes one named capture group to a shape's pattern.
//! Formats of one kind are joined into a single alternation, so exactly one
//! group per kind takes part in a match; [`matched`] recovers which.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use regex::{Captures, Match};

/// A name on its own, never starting or ending with whitespace.
const NAME: &str = r#"(?:[^<>,"\s]|[^<>,"\s][^<>,"\n]*[^<>,"\s])"#;
const ADDRESS: &str = r"[^<>@\s]+@[^<>@\s]*";
const WEEKDAY: &str = "(?:Mon|Tue|Wed|Thu|Fri|Sat|Sun)";
const MONTH: &str = "(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)";

pub trait Format: Copy + 'static {
    /// Pattern for this format, containing the capture group [`Format::group_name`].
    fn pattern(self) -> String;

    fn group_name(self) -> &'static str;
}

/// Joins `formats` into one non-capturing alternation, in order.
pub fn alternation<F: Format>(formats: &[F]) -> String {
    let parts: Vec<String> = formats.iter().map(|f| f.pattern()).collect();
    format!("(?:{})", parts.join("|"))
}

/// The format whose group took part in the match, with the captured text.
pub fn matched<'t, F: Format>(caps: &Captures<'t>, formats: &[F]) -> Option<(F, Match<'t>)> {
    formats
        .iter()
        .find_map(|&format| caps.name(format.group_name()).map(|m| (format, m)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameFormat {
    /// `"Jane Doe <jane@example.com>" <jane@example.com>`
    QuotedNameDuplicateAddress,
    /// `"Jane Doe" <jane@example.com>`
    QuotedNameAddress,
    /// `Jane Doe <jane@example.com>`
    NameAddress,
    /// `<jane@example.com>`, captured as the name.
    Address,
    /// `"Jane Doe"`
    QuotedName,
    /// `Jane Doe`
    Name,
}

impl NameFormat {
    pub const ALL: &[NameFormat] = &[
        NameFormat::QuotedNameDuplicateAddress,
        NameFormat::QuotedNameAddress,
        NameFormat::NameAddress,
        NameFormat::Address,
        NameFormat::QuotedName,
        NameFormat::Name,
    ];

    /// Formats carrying an address; the only ones a bare `<name> wrote:`
    /// byline accepts.
    pub const WITH_ADDRESS: &[NameFormat] = &[
        NameFormat::QuotedNameDuplicateAddress,
        NameFormat::QuotedNameAddress,
        NameFormat::NameAddress,
        NameFormat::Address,
    ];
}

impl Format for NameFormat {
    fn pattern(self) -> String {
        let group = self.group_name();
        match self {
            NameFormat::QuotedNameDuplicateAddress => {
                format!(r#""(?P<{group}>{NAME})\s+<{ADDRESS}>"\s+<{ADDRESS}>"#)
            }
            NameFormat::QuotedNameAddress => format!(r#""(?P<{group}>{NAME})"\s+<{ADDRESS}>"#),
            NameFormat::NameAddress => format!(r"(?P<{group}>{NAME})\s+<{ADDRESS}>"),
            NameFormat::Address => format!(r"<(?P<{group}>{ADDRESS})>"),
            NameFormat::QuotedName => format!(r#""(?P<{group}>{NAME})""#),
            NameFormat::Name => format!(r"(?P<{group}>{NAME})"),
        }
    }

    fn group_name(self) -> &'static str {
        match self {
            NameFormat::QuotedNameDuplicateAddress => "name_quoted_dup_addr",
            NameFormat::QuotedNameAddress => "name_quoted_addr",
            NameFormat::NameAddress => "name_addr",
            NameFormat::Address => "name_only_addr",
            NameFormat::QuotedName => "name_quoted",
            NameFormat::Name => "name_bare",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// `Mon, 2 Jan 2006`
    DayMonthYearWeekday,
    /// `Mon, Jan 2, 2006`
    MonthDayYearWeekday,
    /// `2 Jan 2006`
    DayMonthYear,
    /// `Jan 2, 2006`
    MonthDayYear,
    /// `Mon, 2006-01-02`
    IsoWeekday,
    /// `2006-01-02`
    Iso,
    /// `Mon, 01/02/06`
    PaddedNumericWeekday,
    /// `Mon, 1/2/06`
    NumericWeekday,
    /// `01/02/06`
    PaddedNumeric,
    /// `1/2/06`
    Numeric,
}

impl DateFormat {
    pub const ALL: &[DateFormat] = &[
        DateFormat::DayMonthYearWeekday,
        DateFormat::MonthDayYearWeekday,
        DateFormat::DayMonthYear,
        DateFormat::MonthDayYear,
        DateFormat::IsoWeekday,
        DateFormat::Iso,
        DateFormat::PaddedNumericWeekday,
        DateFormat::NumericWeekday,
        DateFormat::PaddedNumeric,
        DateFormat::Numeric,
    ];

    fn has_weekday(self) -> bool {
        matches!(
            self,
            DateFormat::DayMonthYearWeekday
                | DateFormat::MonthDayYearWeekday
                | DateFormat::IsoWeekday
                | DateFormat::PaddedNumericWeekday
                | DateFormat::NumericWeekday
        )
    }

    fn date_pattern(self) -> String {
        match self {
            DateFormat::DayMonthYearWeekday | DateFormat::DayMonthYear => {
                format!(r"\d{{1,2}} {MONTH} \d{{4}}")
            }
            DateFormat::MonthDayYearWeekday | DateFormat::MonthDayYear => {
                format!(r"{MONTH} \d{{1,2}}, \d{{4}}")
            }
            DateFormat::IsoWeekday | DateFormat::Iso => r"\d{4}-\d{2}-\d{2}".to_string(),
            DateFormat::PaddedNumericWeekday | DateFormat::PaddedNumeric => {
                r"\d{2}/\d{2}/\d{2}".to_string()
            }
            DateFormat::NumericWeekday | DateFormat::Numeric => {
                r"\d{1,2}/\d{1,2}/\d{2}".to_string()
            }
        }
    }

    fn chrono_format(self) -> &'static str {
        match self {
            DateFormat::DayMonthYearWeekday | DateFormat::DayMonthYear => "%d %b %Y",
            DateFormat::MonthDayYearWeekday | DateFormat::MonthDayYear => "%b %d, %Y",
            DateFormat::IsoWeekday | DateFormat::Iso => "%Y-%m-%d",
            DateFormat::PaddedNumericWeekday
            | DateFormat::NumericWeekday
            | DateFormat::PaddedNumeric
            | DateFormat::Numeric => "%m/%d/%y",
        }
    }

    /// Parses text captured by this format. The weekday is only checked by
    /// the pattern, never against the date.
    pub fn parse(self, s: &str) -> Option<NaiveDate> {
        let s = if self.has_weekday() {
            s.split_once(", ")?.1
        } else {
            s
        };
        NaiveDate::parse_from_str(s, self.chrono_format()).ok()
    }
}

impl Format for DateFormat {
    fn pattern(self) -> String {
        let group = self.group_name();
        let date = self.date_pattern();
        if self.has_weekday() {
            format!("(?P<{group}>{WEEKDAY}, {date})")
        } else {
            format!("(?P<{group}>{date})")
        }
    }

    fn group_name(self) -> &'static str {
        match self {
            DateFormat::DayMonthYearWeekday => "date_dmy_wd",
            DateFormat::MonthDayYearWeekday => "date_mdy_wd",
            DateFormat::DayMonthYear => "date_dmy",
            DateFormat::MonthDayYear => "date_mdy",
            DateFormat::IsoWeekday => "date_iso_wd",
            DateFormat::Iso => "date_iso",
            DateFormat::PaddedNumericWeekday => "date_padded_wd",
            DateFormat::NumericWeekday => "date_numeric_wd",
            DateFormat::PaddedNumeric => "date_padded",
            DateFormat::Numeric => "date_numeric",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFormat {
    /// `15:04:05 -0700 (MST)`
    ZonedWithName,
    /// `15:04:05 -0700`
    Zoned,
    /// `3:04 PM`
    Clock12,
    /// `15:04`
    Clock24,
}

impl TimeFormat {
    pub const ALL: &[TimeFormat] = &[
        TimeFormat::ZonedWithName,
        TimeFormat::Zoned,
        TimeFormat::Clock12,
        TimeFormat::Clock24,
    ];

    /// Parses text captured by this format into a time of day and, for zoned
    /// formats, its UTC offset. A zone name in parentheses is ignored.
    pub fn parse(self, s: &str) -> Option<(NaiveTime, Option<FixedOffset>)> {
        match self {
            TimeFormat::ZonedWithName | TimeFormat::Zoned => {
                let s = s.split(" (").next()?;
                // chrono only reads an offset as part of a full timestamp
                let zoned = DateTime::parse_from_str(
                    &format!("1970-01-01 {s}"),
                    "%Y-%m-%d %H:%M:%S %z",
                )
                .ok()?;
                Some((zoned.time(), Some(*zoned.offset())))
            }
            TimeFormat::Clock12 => NaiveTime::parse_from_str(s, "%I:%M %p")
                .ok()
                .map(|time| (time, None)),
            TimeFormat::Clock24 => NaiveTime::parse_from_str(s, "%H:%M")
                .ok()
                .map(|time| (time, None)),
        }
    }
}

impl Format for TimeFormat {
    fn pattern(self) -> String {
        let group = self.group_name();
        match self {
            TimeFormat::ZonedWithName => {
                format!(r"(?P<{group}>\d{{2}}:\d{{2}}:\d{{2}} [+-]\d{{4}} \([A-Z]{{2,5}}\))")
            }
            TimeFormat::Zoned => format!(r"(?P<{group}>\d{{2}}:\d{{2}}:\d{{2}} [+-]\d{{4}})"),
            TimeFormat::Clock12 => format!(r"(?P<{group}>\d{{1,2}}:\d{{2}} (?:AM|PM))"),
            TimeFormat::Clock24 => format!(r"(?P<{group}>\d{{1,2}}:\d{{2}})"),
        }
    }

    fn group_name(self) -> &'static str {
        match self {
            TimeFormat::ZonedWithName => "time_zoned_name",
            TimeFormat::Zoned => "time_zoned",
            TimeFormat::Clock12 => "time_12h",
            TimeFormat::Clock24 => "time_24h",
        }
    }
}
