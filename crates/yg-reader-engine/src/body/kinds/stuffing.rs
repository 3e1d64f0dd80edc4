/// Space-stuffing and flow markers (RFC 3676 sections 4.2 and 4.4).
pub struct Stuffing;

impl Stuffing {
    /// Character inserted by producers in front of lines that could be
    /// misread as quoted, and the character that marks a flowed line.
    pub const SPACE: char = ' ';

    /// Removes exactly one leading stuffing space, if present.
    pub fn unstuff(s: &str) -> &str {
        s.strip_prefix(Self::SPACE).unwrap_or(s)
    }

    /// Returns the content of a flowed line without its trailing space, or
    /// `None` if the line is fixed.
    pub fn flowed(s: &str) -> Option<&str> {
        s.strip_suffix(Self::SPACE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unstuff_removes_one_space() {
        assert_eq!(Stuffing::unstuff(" foo"), "foo");
        assert_eq!(Stuffing::unstuff("  foo"), " foo");
        assert_eq!(Stuffing::unstuff("foo"), "foo");
    }

    #[test]
    fn flowed_strips_one_trailing_space() {
        assert_eq!(Stuffing::flowed("foo "), Some("foo"));
        assert_eq!(Stuffing::flowed("foo  "), Some("foo "));
        assert_eq!(Stuffing::flowed("foo"), None);
    }
}
