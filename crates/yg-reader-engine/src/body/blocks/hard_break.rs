use std::sync::LazyLock;

use regex::Regex;

use super::{Block, BlockMatch};

static HARD_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:<br>\s*)+").expect("hard break pattern is valid"));

pub(super) fn find(text: &str) -> Option<BlockMatch<'_>> {
    let found = HARD_BREAK.find(text)?;
    Some(BlockMatch::new(text, found.range(), Block::HardBreak))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consecutive_breaks_are_one_block() {
        let found = find("first<br>\n<br>  second\n").unwrap();

        assert_eq!(found.before, "first");
        assert_eq!(found.after, "second\n");
    }

    #[test]
    fn break_must_be_lowercase_literal() {
        assert!(find("first<BR>second").is_none());
        assert!(find("first<br/>second").is_none());
    }
}
