//! Structural checks over a token stream, for tests.
//!
//! Only built for this crate's own tests or with the `test-support` feature.

use super::token::Token;

/// Panics unless quotes and paragraphs are balanced, properly nested, and
/// every paragraph holds text.
///
/// Signature markers and blocks must sit outside paragraphs.
pub fn check(tokens: &[Token]) {
    let mut quotes = 0usize;
    let mut paragraph: Option<bool> = None;

    for (i, token) in tokens.iter().enumerate() {
        match token {
            Token::StartQuote => {
                assert!(paragraph.is_none(), "quote opened inside a paragraph at {i}");
                quotes += 1;
            }
            Token::EndQuote => {
                assert!(paragraph.is_none(), "quote closed inside a paragraph at {i}");
                assert!(quotes > 0, "quote closed below depth 0 at {i}");
                quotes -= 1;
            }
            Token::StartParagraph => {
                assert!(paragraph.is_none(), "nested paragraph at {i}");
                paragraph = Some(false);
            }
            Token::EndParagraph => {
                let has_text = paragraph.take();
                assert!(has_text.is_some(), "paragraph closed without opening at {i}");
                assert_eq!(has_text, Some(true), "empty paragraph ending at {i}");
            }
            Token::Text(text) => {
                assert!(paragraph.is_some(), "text outside a paragraph at {i}");
                if !text.trim().is_empty() {
                    paragraph = Some(true);
                }
            }
            Token::SignatureMarker | Token::Block(_) => {
                assert!(paragraph.is_none(), "{token:?} inside a paragraph at {i}");
            }
        }
    }

    assert!(paragraph.is_none(), "paragraph left open");
    assert_eq!(quotes, 0, "quotes left open");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::Token::{EndParagraph, EndQuote, SignatureMarker, StartParagraph, StartQuote};

    #[test]
    fn balanced_stream_passes() {
        check(&[
            StartQuote,
            StartParagraph,
            Token::Text("x".into()),
            EndParagraph,
            EndQuote,
            SignatureMarker,
        ]);
    }

    #[test]
    #[should_panic(expected = "below depth 0")]
    fn negative_nesting_fails() {
        check(&[EndQuote, StartQuote]);
    }

    #[test]
    #[should_panic(expected = "quotes left open")]
    fn unclosed_quote_fails() {
        check(&[StartQuote]);
    }

    #[test]
    #[should_panic(expected = "inside a paragraph")]
    fn signature_inside_paragraph_fails() {
        check(&[StartParagraph, Token::Text("x".into()), SignatureMarker, EndParagraph]);
    }

    #[test]
    #[should_panic(expected = "empty paragraph")]
    fn blank_paragraph_fails() {
        check(&[StartParagraph, Token::Text("  ".into()), EndParagraph]);
    }
}
