use std::io::BufRead;

use serde::Serialize;
use yg_reader_config::BodyFormat;

use super::{
    BodyError,
    kinds::{Quote, Signature, Stuffing},
};

/// What a single classified line contributes to the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LineKind {
    /// Nothing left after stripping quote markers and stuffing.
    Empty,
    /// A `-- ` signature delimiter.
    Signature,
    /// A line of text in a legacy body.
    Content,
    /// A line of text in a flowed body that continues on the next line.
    Flowed,
    /// A line of text in a flowed body that ends its paragraph.
    Fixed,
}

impl LineKind {
    /// Whether the line carries paragraph text.
    pub fn has_content(self) -> bool {
        matches!(self, LineKind::Content | LineKind::Flowed | LineKind::Fixed)
    }
}

/// Classification of a single physical line containing only local facts.
///
/// Each line is classified independently; the tokenizer supplies context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    pub kind: LineKind,
    /// Number of quote markers stripped from the start of the line.
    pub quote_depth: usize,
    /// Text after stripping quote markers, one stuffing space and, for flowed
    /// lines, the trailing flow space.
    pub content: String,
}

impl Line {
    fn new(kind: LineKind, quote_depth: usize, content: &str) -> Self {
        Self {
            kind,
            quote_depth,
            content: content.to_string(),
        }
    }
}

/// Classifies raw body lines for the tokenizing phase.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineClassifier {
    format: BodyFormat,
}

impl LineClassifier {
    pub fn new(format: BodyFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> BodyFormat {
        self.format
    }

    /// Classifies a line into a [`Line`]. Never rejects input.
    ///
    /// A trailing `\n` or `\r\n` is ignored.
    pub fn classify(&self, raw: &str) -> Line {
        let line = raw.strip_suffix('\n').unwrap_or(raw);
        let line = line.strip_suffix('\r').unwrap_or(line);

        if Signature::is_delimiter(line) {
            return Line::new(LineKind::Signature, 0, "");
        }

        let (quote_depth, idx) = Quote::strip_prefixes(line);
        let remainder = Stuffing::unstuff(&line[idx..]);

        // A stuffed line is only a signature delimiter when it is also quoted.
        if quote_depth > 0 && Signature::is_delimiter(remainder) {
            return Line::new(LineKind::Signature, quote_depth, "");
        }

        match self.format {
            BodyFormat::Legacy if remainder.trim().is_empty() => {
                Line::new(LineKind::Empty, quote_depth, "")
            }
            BodyFormat::Legacy => Line::new(LineKind::Content, quote_depth, remainder),
            BodyFormat::Flowed if remainder.is_empty() => {
                Line::new(LineKind::Empty, quote_depth, "")
            }
            BodyFormat::Flowed => match Stuffing::flowed(remainder) {
                Some(content) => Line::new(LineKind::Flowed, quote_depth, content),
                None => Line::new(LineKind::Fixed, quote_depth, remainder),
            },
        }
    }

    /// Classifies every line of an in-memory body (LF or CRLF terminated).
    pub fn classify_text(&self, text: &str) -> Vec<Line> {
        text.lines().map(|line| self.classify(line)).collect()
    }
}

/// Reads and classifies every line of a body.
pub fn read_lines<R: BufRead>(
    reader: R,
    classifier: &LineClassifier,
) -> Result<Vec<Line>, BodyError> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        lines.push(classifier.classify(&line?));
    }
    Ok(lines)
}
