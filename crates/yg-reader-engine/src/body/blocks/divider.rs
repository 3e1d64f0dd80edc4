use std::sync::LazyLock;

use regex::Regex;

use super::{BLANKS, Block, BlockMatch};

static DIVIDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?m)^{BLANKS}(?:-{{2,}}|_{{2,}}|#{{2,}}){BLANKS}$"))
        .expect("divider pattern is valid")
});

/// Finds a line made only of a rule. The line's newline stays in `after`.
pub(super) fn find(text: &str) -> Option<BlockMatch<'_>> {
    let found = DIVIDER.find(text)?;
    Some(BlockMatch::new(text, found.range(), Block::Divider))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("----------")]
    #[case("--")]
    #[case("  ____  ")]
    #[case("\t#####")]
    fn whole_line_rules(#[case] line: &str) {
        let found = find(line).unwrap();

        assert_eq!(found.before, "");
        assert_eq!(found.after, "");
    }

    #[rstest]
    #[case("-")]
    #[case("-_-_")]
    #[case("-- not a rule")]
    #[case("text ----------")]
    fn not_rules(#[case] line: &str) {
        assert!(find(line).is_none());
    }

    #[test]
    fn rule_inside_paragraph_splits_it() {
        let found = find("above\n-----\nbelow\n").unwrap();

        assert_eq!(found.before, "above\n");
        assert_eq!(found.after, "\nbelow\n");
    }
}
