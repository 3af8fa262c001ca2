/// Character classification consumed by the conversion routines.
///
/// The boundary and capitalization logic only ever asks these questions, so a
/// different implementation (e.g. one with Unicode case folding) can be swapped
/// in through [`Converter`](crate::Converter) without touching the algorithms.
pub trait Classify {
    /// Whether `ch` is a lowercase letter.
    fn is_lower(&self, ch: char) -> bool;

    /// Whether `ch` is an uppercase letter.
    fn is_upper(&self, ch: char) -> bool;

    /// Whether `ch` is a decimal digit.
    fn is_digit(&self, ch: char) -> bool;

    /// Whether `ch` is whitespace.
    fn is_space(&self, ch: char) -> bool;

    /// Whether `ch` is punctuation.
    fn is_punct(&self, ch: char) -> bool;

    /// Uppercase `ch`, or return it unchanged if it has no uppercase form.
    fn to_upper(&self, ch: char) -> char;

    /// Lowercase `ch`, or return it unchanged if it has no lowercase form.
    fn to_lower(&self, ch: char) -> char;

    /// Whether `ch` separates words outright (whitespace or punctuation).
    fn is_separator(&self, ch: char) -> bool {
        self.is_space(ch) || self.is_punct(ch)
    }

    /// Whether the letter case flips between `current` and `next`.
    fn case_changes(&self, current: char, next: char) -> bool {
        (self.is_upper(current) && self.is_lower(next))
            || (self.is_lower(current) && self.is_upper(next))
    }
}

/// Single-byte ASCII classification.
///
/// Anything outside the ASCII range belongs to no class and folds to itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ascii;

impl Classify for Ascii {
    #[inline]
    fn is_lower(&self, ch: char) -> bool {
        ch.is_ascii_lowercase()
    }

    #[inline]
    fn is_upper(&self, ch: char) -> bool {
        ch.is_ascii_uppercase()
    }

    #[inline]
    fn is_digit(&self, ch: char) -> bool {
        ch.is_ascii_digit()
    }

    #[inline]
    fn is_space(&self, ch: char) -> bool {
        // `char::is_ascii_whitespace` leaves out the vertical tab.
        matches!(ch, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
    }

    #[inline]
    fn is_punct(&self, ch: char) -> bool {
        ch.is_ascii_punctuation()
    }

    #[inline]
    fn to_upper(&self, ch: char) -> char {
        ch.to_ascii_uppercase()
    }

    #[inline]
    fn to_lower(&self, ch: char) -> char {
        ch.to_ascii_lowercase()
    }
}
