//! Non-prose blocks embedded in paragraph text.
//!
//! Each kind knows how to find itself in a span of text and how to render
//! itself. The set is closed: [`BlockKind::PRIORITY`] lists every kind in the
//! order the extractor tries them.

pub mod attribution;
mod divider;
mod hard_break;
pub mod header;

use std::ops::Range;

use serde::Serialize;

pub use attribution::Attribution;
pub use header::{Field, FieldName, MessageHeader};

/// Whitespace that stays on one line.
const BLANKS: &str = r"[\t ]*";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Block {
    /// A rule of repeated `-`, `_` or `#`.
    Divider,
    /// The header block of a message quoted inline.
    MessageHeader(MessageHeader),
    /// The byline introducing a quoted reply.
    Attribution(Attribution),
    /// One or more literal `<br>` markers. Renders as nothing.
    HardBreak,
}

impl Block {
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Divider => BlockKind::Divider,
            Block::MessageHeader(_) => BlockKind::MessageHeader,
            Block::Attribution(_) => BlockKind::Attribution,
            Block::HardBreak => BlockKind::HardBreak,
        }
    }

    /// Markup for this block, without a trailing newline.
    pub fn to_html(&self) -> String {
        match self {
            Block::Divider => "<hr>".to_string(),
            Block::MessageHeader(header) => header.to_html(),
            Block::Attribution(attribution) => attribution.to_html(),
            Block::HardBreak => String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    HardBreak,
    Divider,
    MessageHeader,
    Attribution,
}

impl BlockKind {
    /// Matchers run in this order; the first to match anywhere wins.
    pub const PRIORITY: [BlockKind; 4] = [
        BlockKind::HardBreak,
        BlockKind::Divider,
        BlockKind::MessageHeader,
        BlockKind::Attribution,
    ];

    /// Finds the first occurrence of this kind of block in `text`.
    pub fn find(self, text: &str) -> Option<BlockMatch<'_>> {
        match self {
            BlockKind::HardBreak => hard_break::find(text),
            BlockKind::Divider => divider::find(text),
            BlockKind::MessageHeader => header::find(text),
            BlockKind::Attribution => attribution::find(text),
        }
    }
}

/// A block found in a span of text, with the text either side of it.
///
/// The matched range is never empty, so `before` and `after` are always
/// strictly shorter than the searched text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockMatch<'a> {
    pub before: &'a str,
    pub block: Block,
    pub after: &'a str,
}

impl<'a> BlockMatch<'a> {
    fn new(text: &'a str, range: Range<usize>, block: Block) -> Self {
        debug_assert!(!range.is_empty());
        Self {
            before: &text[..range.start],
            block,
            after: &text[range.end..],
        }
    }
}

/// Tries every kind in priority order and returns the first match.
pub fn find_first(text: &str) -> Option<BlockMatch<'_>> {
    BlockKind::PRIORITY.iter().find_map(|kind| {
        let found = kind.find(text)?;
        log::debug!("{:?} block at byte {}", kind, found.before.len());
        Some(found)
    })
}
