//! # Message Body Parsing
//!
//! Turns the decoded text of one archived message into structured tokens and
//! HTML.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): each line becomes a `Line` holding
//!    local facts only (quote depth, kind, unstuffed content).
//! 2. **Tokenizing** (`tokenizer`): a `Tokenizer` walks the lines and emits
//!    paragraph, quote and signature tokens.
//! 3. **Block Extraction** (`extract`): the text of each paragraph is split
//!    around the `blocks` it contains (hard breaks, dividers, quoted message
//!    headers, attribution bylines).
//! 4. **Rendering** (`render`): a `Renderer` writes the tokens as indented
//!    HTML.
//!
//! ## Modules
//!
//! - **`kinds`**: quote markers, signature delimiter and space-stuffing rules
//! - **`search`**: prose-only projection of the tokens for the search index
//! - **`invariants`**: structural checks used by tests (`test-support` feature)
//!
//! ## Key Invariants
//!
//! - Every stage is total; only reading the input can fail
//! - Quote and paragraph tokens are balanced once a body is finished
//! - A paragraph in the final stream always holds non-blank text

pub mod blocks;
pub mod classify;
pub mod extract;
#[cfg(any(test, feature = "test-support"))]
pub mod invariants;
pub mod kinds;
pub mod render;
pub mod search;
pub mod token;
pub mod tokenizer;

use std::io::BufRead;

use thiserror::Error;
use yg_reader_config::{BodyFormat, Config};

pub use blocks::{Attribution, Block, BlockKind, Field, FieldName, MessageHeader};
pub use classify::{Line, LineClassifier, LineKind};
pub use render::Renderer;
pub use token::{TagType, Token};
pub use tokenizer::{Tokenizer, TokenizerState};

#[derive(Debug, Error)]
pub enum BodyError {
    #[error("Failed to read message body: {0}")]
    Io(#[from] std::io::Error),
}

/// How to read and render a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyOptions {
    pub format: BodyFormat,
    pub indent_width: usize,
    /// Characters kept by [`Body::summary`].
    pub summary_len: usize,
}

impl Default for BodyOptions {
    fn default() -> Self {
        Self {
            format: BodyFormat::default(),
            indent_width: render::DEFAULT_INDENT_WIDTH,
            summary_len: search::DEFAULT_SUMMARY_LEN,
        }
    }
}

impl From<&Config> for BodyOptions {
    fn from(config: &Config) -> Self {
        Self {
            format: config.body.format,
            indent_width: config.render.indent_width,
            summary_len: config.search.summary_len,
        }
    }
}

/// A parsed message body: the final token stream, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Body {
    tokens: Vec<Token>,
    indent_width: usize,
    summary_len: usize,
}

impl Body {
    pub fn parse(text: &str, options: &BodyOptions) -> Self {
        let lines = LineClassifier::new(options.format).classify_text(text);
        Self::from_lines(&lines, options)
    }

    pub fn read<R: BufRead>(reader: R, options: &BodyOptions) -> Result<Self, BodyError> {
        let lines = classify::read_lines(reader, &LineClassifier::new(options.format))?;
        Ok(Self::from_lines(&lines, options))
    }

    pub fn from_lines(lines: &[Line], options: &BodyOptions) -> Self {
        let raw = tokenizer::tokenize(lines);
        log::debug!("{} lines tokenized into {} raw tokens", lines.len(), raw.len());
        Self {
            tokens: extract::extract_blocks(raw),
            indent_width: options.indent_width,
            summary_len: options.summary_len,
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    pub fn to_html(&self) -> String {
        Renderer::new(self.indent_width).render(&self.tokens)
    }

    pub fn prose_text(&self) -> String {
        search::prose_text(&self.tokens)
    }

    /// Prose text cut to the configured summary length.
    pub fn summary(&self) -> String {
        search::summary(&self.prose_text(), self.summary_len)
    }
}

/// Parses and renders a body in one go.
pub fn to_html(text: &str, options: &BodyOptions) -> String {
    Body::parse(text, options).to_html()
}
