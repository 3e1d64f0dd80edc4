//! Attribution bylines: `On <date>, <name> wrote:` and its variants.

pub mod formats;

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime, TimeZone};
use html_escape::encode_text;
use regex::Regex;
use serde::Serialize;

use super::{BLANKS, Block, BlockMatch};
use formats::{DateFormat, NameFormat, TimeFormat, alternation, matched};

/// Address of the list the message was posted to.
const GROUP_ADDRESS: &str = r"[^\s@]+@(?:yahoogroups\.com|y?\.{3})";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribution {
    pub name: String,
    pub date: Option<NaiveDate>,
    /// Time of day, in UTC when `has_time_zone` is set.
    pub time: Option<NaiveTime>,
    pub has_time_zone: bool,
}

impl Attribution {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            date: None,
            time: None,
            has_time_zone: false,
        }
    }

    /// The byline sentence, escaped.
    pub fn byline(&self) -> String {
        let name = encode_text(&self.name);
        match (self.date, self.time) {
            (Some(date), Some(time)) => {
                let zone = if self.has_time_zone {
                    "UTC"
                } else {
                    "<em>(local time)</em>"
                };
                format!(
                    "On {} at {} {}, {} said:",
                    date.format("%-d %B %Y"),
                    time.format("%H:%M"),
                    zone,
                    name
                )
            }
            (Some(date), None) => format!("On {}, {} said:", date.format("%-d %B %Y"), name),
            _ => format!("{name} said:"),
        }
    }

    pub fn to_html(&self) -> String {
        format!(
            "<div class=\"inline-quote-attribution\">\n  {}\n</div>",
            self.byline()
        )
    }
}

/// One piece of a byline shape.
#[derive(Clone, Copy)]
enum Part {
    Lit(&'static str),
    Name(&'static [NameFormat]),
    Date,
    Time,
}

/// Byline shapes, tried in order. Every shape ends with `wrote:` and at
/// least one whitespace character.
const SHAPES: &[&[Part]] = &[
    &[
        Part::Lit(r"(?m)^"),
        Part::Lit(BLANKS),
        Part::Lit(r"(?:-{2,3}\s+)?On\s+"),
        Part::Date,
        Part::Lit(r"\s+(?:at\s+)?"),
        Part::Time,
        Part::Lit(r",?\s+"),
        Part::Name(NameFormat::ALL),
        Part::Lit(r"\s+wrote:\s+"),
    ],
    &[
        Part::Lit(r"(?m)^"),
        Part::Lit(BLANKS),
        Part::Lit(r"(?:-{2,3}\s+)?On\s+"),
        Part::Date,
        Part::Lit(r",?\s+"),
        Part::Name(NameFormat::ALL),
        Part::Lit(r"\s+wrote:\s+"),
    ],
    &[
        Part::Lit(r"(?m)^"),
        Part::Lit(BLANKS),
        Part::Lit(r"(?:-{2,3}\s+)?In\s+"),
        Part::Lit(GROUP_ADDRESS),
        Part::Lit(r",\s+"),
        Part::Name(NameFormat::ALL),
        Part::Lit(r"\s+wrote:\s+"),
    ],
    &[
        Part::Lit(r"(?m)^"),
        Part::Lit(BLANKS),
        Part::Lit(r"-{2,3}\s+"),
        Part::Name(NameFormat::ALL),
        Part::Lit(r"\s+wrote:\s+"),
    ],
    &[
        Part::Lit(r"(?m)^"),
        Part::Lit(BLANKS),
        Part::Name(NameFormat::WITH_ADDRESS),
        Part::Lit(BLANKS),
        Part::Lit(r"wrote:\s+"),
    ],
];

struct Shape {
    regex: Regex,
    names: &'static [NameFormat],
    has_date: bool,
    has_time: bool,
}

impl Shape {
    fn compile(parts: &[Part]) -> Self {
        let mut pattern = String::new();
        let mut names: &'static [NameFormat] = &[];
        let mut has_date = false;
        let mut has_time = false;

        for part in parts {
            match *part {
                Part::Lit(lit) => pattern.push_str(lit),
                Part::Name(formats) => {
                    names = formats;
                    pattern.push_str(&alternation(formats));
                }
                Part::Date => {
                    has_date = true;
                    pattern.push_str(&alternation(DateFormat::ALL));
                }
                Part::Time => {
                    has_time = true;
                    pattern.push_str(&alternation(TimeFormat::ALL));
                }
            }
        }

        Self {
            regex: Regex::new(&pattern).expect("attribution shape pattern is valid"),
            names,
            has_date,
            has_time,
        }
    }

    /// Matches this shape. A date or time that fits its pattern but not the
    /// calendar rejects the whole shape.
    fn find<'t>(&self, text: &'t str) -> Option<BlockMatch<'t>> {
        let caps = self.regex.captures(text)?;
        let whole = caps.get(0)?;
        let (_, name) = matched(&caps, self.names)?;
        let mut attribution = Attribution::named(name.as_str());

        if self.has_date {
            let (format, date) = matched(&caps, DateFormat::ALL)?;
            let Some(parsed) = format.parse(date.as_str()) else {
                log::debug!("unparseable attribution date {:?}", date.as_str());
                return None;
            };
            attribution.date = Some(parsed);
        }

        if self.has_time {
            let (format, time) = matched(&caps, TimeFormat::ALL)?;
            let Some((clock, offset)) = format.parse(time.as_str()) else {
                log::debug!("unparseable attribution time {:?}", time.as_str());
                return None;
            };

            match (attribution.date, offset) {
                (Some(date), Some(offset)) => {
                    let utc = offset
                        .from_local_datetime(&date.and_time(clock))
                        .single()?
                        .naive_utc();
                    attribution.date = Some(utc.date());
                    attribution.time = Some(utc.time());
                    attribution.has_time_zone = true;
                }
                _ => attribution.time = Some(clock),
            }
        }

        Some(BlockMatch::new(
            text,
            whole.range(),
            Block::Attribution(attribution),
        ))
    }
}

static COMPILED: LazyLock<Vec<Shape>> =
    LazyLock::new(|| SHAPES.iter().map(|parts| Shape::compile(parts)).collect());

pub(super) fn find(text: &str) -> Option<BlockMatch<'_>> {
    COMPILED.iter().find_map(|shape| shape.find(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn attribution(text: &str) -> Attribution {
        match find(text).map(|found| found.block) {
            Some(Block::Attribution(attribution)) => attribution,
            other => panic!("expected an attribution in {text:?}, got {other:?}"),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    fn time(h: u32, m: u32, s: u32) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(h, m, s)
    }

    #[test]
    fn group_byline_with_quoted_name_and_address() {
        let text = "--- In group@yahoogroups.com, \"Jane Doe\" <jane@x.com> wrote:\n";
        let found = find(text).unwrap();

        assert_eq!(found.before, "");
        assert_eq!(found.after, "");
        assert_eq!(found.block, Block::Attribution(Attribution::named("Jane Doe")));
    }

    #[rstest]
    #[case("--- In group@y..., Jane wrote:\n", "Jane")]
    #[case("In list@..., <jane@x.com> wrote:\n", "jane@x.com")]
    #[case("-- Jane Doe wrote:\n", "Jane Doe")]
    #[case("\"Jane\" <jane@x.com> wrote:\n", "Jane")]
    #[case("Jane Doe <jane@x.com>wrote:\n", "Jane Doe")]
    #[case("\"Jane <jane@x.com>\" <jane@x.com> wrote:\n", "Jane")]
    fn undated_bylines(#[case] text: &str, #[case] name: &str) {
        assert_eq!(attribution(text), Attribution::named(name));
    }

    #[test]
    fn bare_name_needs_a_leading_dash() {
        assert!(find("Jane Doe wrote:\n").is_none());
    }

    #[test]
    fn requires_whitespace_after_wrote() {
        assert!(find("-- Jane wrote:").is_none());
    }

    #[test]
    fn dated_byline() {
        assert_eq!(
            attribution("On Mon, 2 Jan 2006, Jane Doe <jane@x.com> wrote:\n"),
            Attribution {
                date: date(2006, 1, 2),
                ..Attribution::named("Jane Doe")
            }
        );
    }

    #[test]
    fn dated_byline_with_local_time() {
        assert_eq!(
            attribution("On 1/2/06 at 3:04 PM, Jane wrote:\n"),
            Attribution {
                date: date(2006, 1, 2),
                time: time(15, 4, 0),
                ..Attribution::named("Jane")
            }
        );
    }

    #[test]
    fn zoned_time_is_normalised_to_utc() {
        assert_eq!(
            attribution("On Mon, 2 Jan 2006 20:04:05 -0700 (MST), Jane wrote:\n"),
            Attribution {
                date: date(2006, 1, 3),
                time: time(3, 4, 5),
                has_time_zone: true,
                ..Attribution::named("Jane")
            }
        );
    }

    #[test]
    fn byline_may_wrap_before_wrote() {
        let found = find("Before.\nOn 2006-01-02, \"Jane\"\nwrote:\nAfter.\n").unwrap();

        assert_eq!(found.before, "Before.\n");
        assert_eq!(found.after, "After.\n");
    }

    #[test]
    fn impossible_date_rejects_dated_shapes() {
        assert!(find("On 13/45/06, Jane wrote:\n").is_none());
        assert!(find("On 2006-01-02 at 25:00, Jane wrote:\n").is_none());
    }

    #[test]
    fn impossible_date_falls_through_to_next_shape() {
        // The dated shape rejects 13/45/06; the dash shape still matches.
        let found = attribution("-- On 13/45/06 Jane wrote:\n");

        assert_eq!(found, Attribution::named("On 13/45/06 Jane"));
    }

    #[test]
    fn byline_markup() {
        let zoned = Attribution {
            date: date(2006, 1, 2),
            time: time(15, 4, 0),
            has_time_zone: true,
            ..Attribution::named("Jane & co")
        };
        let local = Attribution {
            has_time_zone: false,
            ..zoned.clone()
        };
        let dated = Attribution {
            time: None,
            ..zoned.clone()
        };

        assert_eq!(zoned.byline(), "On 2 January 2006 at 15:04 UTC, Jane &amp; co said:");
        assert_eq!(
            local.byline(),
            "On 2 January 2006 at 15:04 <em>(local time)</em>, Jane &amp; co said:"
        );
        assert_eq!(dated.byline(), "On 2 January 2006, Jane &amp; co said:");
        assert_eq!(Attribution::named("Jane").byline(), "Jane said:");
        assert_eq!(
            Attribution::named("Jane").to_html(),
            "<div class=\"inline-quote-attribution\">\n  Jane said:\n</div>"
        );
    }
}
