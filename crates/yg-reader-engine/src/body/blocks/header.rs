use std::sync::LazyLock;

use html_escape::encode_text;
use regex::Regex;
use serde::Serialize;

use super::{BLANKS, Block, BlockMatch};

const FIELD_NAMES: &str = "From|Reply-To|To|Subject|Date|Sent|Message";

/// A `-----Original Message-----` line.
static BANNER: LazyLock<String> =
    LazyLock::new(|| format!("{BLANKS}-+ ?Original Message ?-+{BLANKS}"));

/// A first field at the start of the text (optionally after a banner or a
/// blank line), or after a blank or banner line inside it.
static HEADER_START: LazyLock<Regex> = LazyLock::new(|| {
    let banner = BANNER.as_str();
    Regex::new(&format!(
        r"(?:^{banner}\n|^{BLANKS}\n?|\n{BLANKS}(?:{banner})?\n){BLANKS}(?P<field>{FIELD_NAMES}): +(?P<value>\S)"
    ))
    .expect("header start pattern is valid")
});

static FIELD_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^{BLANKS}(?P<field>{FIELD_NAMES}): +(?P<value>\S.*)"))
        .expect("header field pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldName {
    From,
    #[serde(rename = "Reply-To")]
    ReplyTo,
    To,
    Subject,
    Date,
    Sent,
    Message,
}

impl FieldName {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::From => "From",
            FieldName::ReplyTo => "Reply-To",
            FieldName::To => "To",
            FieldName::Subject => "Subject",
            FieldName::Date => "Date",
            FieldName::Sent => "Sent",
            FieldName::Message => "Message",
        }
    }

    /// Case-sensitive, as header labels are matched.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "From" => Some(FieldName::From),
            "Reply-To" => Some(FieldName::ReplyTo),
            "To" => Some(FieldName::To),
            "Subject" => Some(FieldName::Subject),
            "Date" => Some(FieldName::Date),
            "Sent" => Some(FieldName::Sent),
            "Message" => Some(FieldName::Message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub name: FieldName,
    pub value: String,
}

impl Field {
    pub fn new(name: FieldName, value: &str) -> Self {
        Self {
            name,
            value: value.trim().to_string(),
        }
    }
}

/// Header fields of a message quoted inline, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MessageHeader {
    pub fields: Vec<Field>,
}

impl MessageHeader {
    pub fn to_html(&self) -> String {
        let mut html = String::from("<div class=\"inline-message-header\">\n");
        html.push_str("  <dl class=\"field-list\">\n");
        for field in &self.fields {
            html.push_str(&format!("    <dt>{}</dt>\n", field.name.as_str()));
            html.push_str(&format!("    <dd>{}</dd>\n", encode_text(&field.value)));
        }
        html.push_str("  </dl>\n");
        html.push_str("</div>");
        html
    }

    fn continue_last(&mut self, line: &str) {
        if let Some(last) = self.fields.last_mut() {
            last.value.push(' ');
            last.value.push_str(line.trim());
        }
    }
}

/// Finds a header and consumes its fields.
///
/// Field lines are consumed until a blank line (consumed too) or a line
/// that is neither a field nor an indented continuation (left in `after`).
pub(super) fn find(text: &str) -> Option<BlockMatch<'_>> {
    let caps = HEADER_START.captures(text)?;
    let start = caps.get(0)?.start();
    let name = FieldName::parse(caps.name("field")?.as_str())?;
    let value_start = caps.name("value")?.start();

    let first_end = line_end(text, value_start);
    let mut header = MessageHeader {
        fields: vec![Field::new(name, &text[value_start..first_end])],
    };

    let mut end = next_line(text, first_end);
    while end < text.len() {
        let line_stop = line_end(text, end);
        let line = &text[end..line_stop];

        if line.trim().is_empty() {
            end = next_line(text, line_stop);
            break;
        }

        if let Some(field) = FIELD_LINE.captures(line) {
            let Some(name) = field.name("field").and_then(|m| FieldName::parse(m.as_str()))
            else {
                break;
            };
            let value = field.name("value").map_or("", |m| m.as_str());
            header.fields.push(Field::new(name, value));
        } else if line.starts_with([' ', '\t']) {
            header.continue_last(line);
        } else {
            break;
        }

        end = next_line(text, line_stop);
    }

    Some(BlockMatch::new(
        text,
        start..end,
        Block::MessageHeader(header),
    ))
}

/// Byte index of the newline ending the line that contains `from`.
fn line_end(text: &str, from: usize) -> usize {
    text[from..].find('\n').map_or(text.len(), |i| from + i)
}

fn next_line(text: &str, line_end: usize) -> usize {
    (line_end + 1).min(text.len())
}
