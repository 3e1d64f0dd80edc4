use super::{
    classify::{Line, LineKind},
    token::Token,
};

/// State carried between lines by the tokenizer.
///
/// `step` is a pure transition, so each rule can be exercised in isolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizerState {
    quote_depth: usize,
    previous: LineKind,
    in_paragraph: bool,
}

impl Default for TokenizerState {
    fn default() -> Self {
        Self {
            quote_depth: 0,
            previous: LineKind::Empty,
            in_paragraph: false,
        }
    }
}

impl TokenizerState {
    /// Depth of the quote block currently open.
    pub fn quote_depth(&self) -> usize {
        self.quote_depth
    }

    pub fn in_paragraph(&self) -> bool {
        self.in_paragraph
    }

    /// Consumes one line, returning the next state and the tokens it emits.
    ///
    /// Rules, in priority order:
    /// 1. A signature closes any open paragraph and emits a marker. It never
    ///    opens or closes a quote level.
    /// 2. A deeper line closes the paragraph and opens one quote per level.
    /// 3. A shallower line closes the paragraph and one quote per level,
    ///    unless the previous line was flowed and this one has content. That
    ///    line continues the open quote block at the current depth.
    /// 4. A blank line closes the open paragraph.
    /// 5. Content opens a paragraph if none is open, then emits its text.
    ///    A fixed line closes the paragraph it ends.
    pub fn step(mut self, line: &Line) -> (Self, Vec<Token>) {
        let mut tokens = Vec::new();
        let depth_before = self.quote_depth;

        if line.kind == LineKind::Signature {
            self.close_paragraph(&mut tokens);
            tokens.push(Token::SignatureMarker);
        } else if line.quote_depth > self.quote_depth {
            self.close_paragraph(&mut tokens);
            for _ in self.quote_depth..line.quote_depth {
                tokens.push(Token::StartQuote);
            }
            self.quote_depth = line.quote_depth;
            self.push_line(line, &mut tokens);
        } else if line.quote_depth < self.quote_depth && !self.continues_flowed_quote(line) {
            self.close_paragraph(&mut tokens);
            for _ in line.quote_depth..self.quote_depth {
                tokens.push(Token::EndQuote);
            }
            self.quote_depth = line.quote_depth;
            self.push_line(line, &mut tokens);
        } else {
            self.push_line(line, &mut tokens);
        }

        log::trace!(
            "{:?} line at depth {}: quote depth {} -> {}, {} tokens",
            line.kind,
            line.quote_depth,
            depth_before,
            self.quote_depth,
            tokens.len()
        );

        self.previous = line.kind;
        (self, tokens)
    }

    /// Closes everything still open at end of input.
    pub fn finish(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        self.close_paragraph(&mut tokens);
        for _ in 0..self.quote_depth {
            tokens.push(Token::EndQuote);
        }
        tokens
    }

    fn continues_flowed_quote(&self, line: &Line) -> bool {
        self.previous == LineKind::Flowed && line.kind.has_content()
    }

    fn push_line(&mut self, line: &Line, tokens: &mut Vec<Token>) {
        if !line.kind.has_content() {
            self.close_paragraph(tokens);
            return;
        }

        if !self.in_paragraph {
            tokens.push(Token::StartParagraph);
            self.in_paragraph = true;
        }
        tokens.push(Token::Text(line.content.clone()));

        if line.kind == LineKind::Fixed {
            self.close_paragraph(tokens);
        }
    }

    fn close_paragraph(&mut self, tokens: &mut Vec<Token>) {
        if self.in_paragraph {
            tokens.push(Token::EndParagraph);
            self.in_paragraph = false;
        }
    }
}

/// Builds the raw token stream of a body one line at a time.
pub struct Tokenizer {
    state: TokenizerState,
    out: Vec<Token>,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            state: TokenizerState::default(),
            out: vec![],
        }
    }

    pub fn push(&mut self, line: &Line) {
        let (state, tokens) = self.state.step(line);
        self.state = state;
        self.out.extend(tokens);
    }

    pub fn finish(mut self) -> Vec<Token> {
        // EOF flush
        self.out.extend(self.state.finish());
        self.out
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Tokenizes a complete body.
pub fn tokenize(lines: &[Line]) -> Vec<Token> {
    let mut tokenizer = Tokenizer::new();
    for line in lines {
        tokenizer.push(line);
    }
    tokenizer.finish()
}
