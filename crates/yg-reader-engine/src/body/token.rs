use serde::Serialize;

use super::blocks::Block;

/// How a token affects nesting when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagType {
    /// Rendered, then increases the indent.
    Open,
    /// Decreases the indent, then rendered.
    Close,
    /// Rendered at the current indent.
    SelfClosing,
}

/// An element of the structural token stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Token {
    StartParagraph,
    EndParagraph,
    StartQuote,
    EndQuote,
    SignatureMarker,
    /// Paragraph text. One token per line out of the tokenizer; one token per
    /// paragraph, lines joined by `\n`, out of the extractor.
    Text(String),
    Block(Block),
}

impl Token {
    pub fn tag_type(&self) -> TagType {
        match self {
            Token::StartParagraph | Token::StartQuote => TagType::Open,
            Token::EndParagraph | Token::EndQuote => TagType::Close,
            Token::SignatureMarker | Token::Text(_) | Token::Block(_) => TagType::SelfClosing,
        }
    }
}
