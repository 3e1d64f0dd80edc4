/// Quote markers with owned delimiter constant.
///
/// All knowledge of how a reply marks its nesting lives here, not in the
/// classifier.
pub struct Quote;

impl Quote {
    /// The quote marker character.
    pub const MARKER: u8 = b'>';

    /// Strips quote markers from the start of a line, returning
    /// `(depth, byte_offset)`.
    ///
    /// Markers must start at the first byte. Consecutive markers nest, and so
    /// does a marker separated from the previous one by exactly one space:
    /// RFC 3676 reads `> >` as a quoted literal `>`, but archived list
    /// software wrote it for every second-level reply.
    ///
    /// # Returns
    /// - `depth`: Number of markers found (0 if the line is not quoted)
    /// - `byte_offset`: Index into `s` where the line continues after the markers
    pub fn strip_prefixes(s: &str) -> (usize, usize) {
        let b = s.as_bytes();
        if b.first() != Some(&Self::MARKER) {
            return (0, 0);
        }

        let mut i = 1usize;
        let mut depth = 1usize;

        loop {
            if i < b.len() && b[i] == Self::MARKER {
                i += 1;
                depth += 1;
            } else if i + 1 < b.len() && b[i] == b' ' && b[i + 1] == Self::MARKER {
                i += 2;
                depth += 1;
            } else {
                break;
            }
        }
        (depth, i)
    }
}
