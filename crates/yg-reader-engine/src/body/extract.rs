use super::{blocks, token::Token};

/// Replaces every paragraph of the raw token stream with the blocks and
/// paragraphs found in its text.
///
/// Tokens outside paragraphs pass through unchanged.
pub fn extract_blocks(tokens: Vec<Token>) -> Vec<Token> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut paragraph: Option<String> = None;

    for token in tokens {
        match token {
            Token::StartParagraph => paragraph = Some(String::new()),
            Token::Text(text) => match paragraph.as_mut() {
                Some(buf) => {
                    buf.push_str(&text);
                    buf.push('\n');
                }
                None => out.push(Token::Text(text)),
            },
            Token::EndParagraph => {
                if let Some(text) = paragraph.take() {
                    push_blocks(&text, &mut out);
                }
            }
            other => out.push(other),
        }
    }

    // Unterminated paragraph
    if let Some(text) = paragraph {
        push_blocks(&text, &mut out);
    }

    out
}

/// Splits one paragraph's text around the blocks it contains.
///
/// Text with no block becomes a single paragraph, or nothing when blank.
pub fn find_blocks(text: &str) -> Vec<Token> {
    let mut out = Vec::new();
    push_blocks(text, &mut out);
    out
}

fn push_blocks(text: &str, out: &mut Vec<Token>) {
    let mut rest = text;
    // `before` holds no block of the winning kind or any kind ahead of it,
    // so recursion depth is bounded by the number of kinds.
    while let Some(found) = blocks::find_first(rest) {
        push_blocks(found.before, out);
        out.push(Token::Block(found.block));
        rest = found.after;
    }

    if !rest.trim().is_empty() {
        out.extend([
            Token::StartParagraph,
            Token::Text(rest.trim().to_string()),
            Token::EndParagraph,
        ]);
    }
}
