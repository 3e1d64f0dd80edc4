use std::borrow::Cow;

use html_escape::encode_text;

use super::token::{TagType, Token};

pub const DEFAULT_INDENT_WIDTH: usize = 2;

/// Writes a token stream as indented HTML.
///
/// Open tokens are written and then indent; close tokens dedent and are
/// then written. Every line of a fragment gets the current indent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    indent_width: usize,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(DEFAULT_INDENT_WIDTH)
    }
}

impl Renderer {
    pub fn new(indent_width: usize) -> Self {
        Self { indent_width }
    }

    pub fn render(&self, tokens: &[Token]) -> String {
        let mut out = String::new();
        let mut level = 0usize;

        for token in tokens {
            match token.tag_type() {
                TagType::Open => {
                    self.write(&mut out, &token.to_html(), level);
                    level += 1;
                }
                TagType::Close => {
                    level = level.saturating_sub(1);
                    self.write(&mut out, &token.to_html(), level);
                }
                TagType::SelfClosing => self.write(&mut out, &token.to_html(), level),
            }
        }

        out
    }

    fn write(&self, out: &mut String, fragment: &str, level: usize) {
        let indent = " ".repeat(level * self.indent_width);
        for line in fragment.lines() {
            if !line.is_empty() {
                out.push_str(&indent);
            }
            out.push_str(line);
            out.push('\n');
        }
    }
}

impl Token {
    /// This token's own markup, unindented.
    pub fn to_html(&self) -> Cow<'_, str> {
        match self {
            Token::StartParagraph => Cow::Borrowed("<p>"),
            Token::EndParagraph => Cow::Borrowed("</p>"),
            Token::StartQuote => Cow::Borrowed("<blockquote>"),
            Token::EndQuote => Cow::Borrowed("</blockquote>"),
            Token::SignatureMarker => Cow::Borrowed("<hr>"),
            Token::Text(text) => encode_text(text.trim()),
            Token::Block(block) => Cow::Owned(block.to_html()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::Token::{EndParagraph, EndQuote, SignatureMarker, StartParagraph, StartQuote};
    use crate::body::blocks::Block;

    fn text(content: &str) -> Token {
        Token::Text(content.to_string())
    }

    #[test]
    fn nested_quote_indentation() {
        let tokens = vec![
            StartQuote,
            StartQuote,
            StartParagraph,
            text("deep"),
            EndParagraph,
            EndQuote,
            EndQuote,
        ];

        assert_eq!(
            Renderer::default().render(&tokens),
            "<blockquote>\n  <blockquote>\n    <p>\n      deep\n    </p>\n  </blockquote>\n</blockquote>\n"
        );
    }

    #[test]
    fn multiline_text_indents_every_line() {
        let tokens = vec![StartParagraph, text("one\ntwo"), EndParagraph];

        assert_eq!(
            Renderer::default().render(&tokens),
            "<p>\n  one\n  two\n</p>\n"
        );
    }

    #[test]
    fn text_is_trimmed_and_escaped() {
        let tokens = vec![StartParagraph, text("  a < b & \"c\"  "), EndParagraph];

        assert_eq!(
            Renderer::default().render(&tokens),
            "<p>\n  a &lt; b &amp; \"c\"\n</p>\n"
        );
    }

    #[test]
    fn hard_break_renders_nothing() {
        let tokens = vec![Token::Block(Block::HardBreak), SignatureMarker];

        assert_eq!(Renderer::default().render(&tokens), "<hr>\n");
    }

    #[test]
    fn custom_indent_width() {
        let tokens = vec![StartQuote, Token::Block(Block::Divider), EndQuote];

        assert_eq!(
            Renderer::new(4).render(&tokens),
            "<blockquote>\n    <hr>\n</blockquote>\n"
        );
    }

    #[test]
    fn unbalanced_close_does_not_underflow() {
        let tokens = vec![EndQuote, StartParagraph, text("x"), EndParagraph];

        assert_eq!(
            Renderer::default().render(&tokens),
            "</blockquote>\n<p>\n  x\n</p>\n"
        );
    }

    #[test]
    fn rendering_is_repeatable() {
        let tokens = vec![StartQuote, StartParagraph, text("x"), EndParagraph, EndQuote];
        let renderer = Renderer::default();

        assert_eq!(renderer.render(&tokens), renderer.render(&tokens));
    }
}
