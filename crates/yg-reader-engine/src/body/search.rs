//! Plain-text projection of a body for the search index.

use super::token::Token;

pub const DEFAULT_SUMMARY_LEN: usize = 400;

/// Text the author wrote themselves: every paragraph outside a quote, one
/// per line. Blocks and quoted paragraphs contribute nothing.
pub fn prose_text(tokens: &[Token]) -> String {
    let mut out = String::new();
    let mut quote_level = 0usize;

    for token in tokens {
        match token {
            Token::StartQuote => quote_level += 1,
            Token::EndQuote => quote_level = quote_level.saturating_sub(1),
            Token::Text(text) if quote_level == 0 => out.push_str(text.trim()),
            Token::EndParagraph if quote_level == 0 => out.push('\n'),
            _ => {}
        }
    }

    out
}

/// The first `len` characters of `text`.
pub fn summary(text: &str, len: usize) -> String {
    match text.char_indices().nth(len) {
        Some((end, _)) => text[..end].to_string(),
        None => text.to_string(),
    }
}
