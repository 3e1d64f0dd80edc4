/// Signature delimiter with owned constant.
pub struct Signature;

impl Signature {
    /// The usenet signature delimiter: two dashes and exactly one trailing space.
    pub const DELIMITER: &'static str = "-- ";

    pub fn is_delimiter(s: &str) -> bool {
        s == Self::DELIMITER
    }
}
