//! This library converts identifier-like text between naming conventions. Every conversion is a
//! single pass over the input that returns a new `String`; nothing is shared between calls.
//! - [`to_camel_case`] and [`to_lower_camel_case`]: drop separators and mark word starts with
//!   capital letters.
//! - [`to_snake_case`], [`to_kebab_case`], [`to_delimited`] and their screaming variants: join
//!   words with a delimiter byte and fold the case of every letter.
//! - [`Case`]: the same conversions picked by name, e.g. from a `rename_all` attribute.
//!
//! Letters, digits, whitespace and punctuation are classified with single-byte ASCII semantics.
//! Other characters are copied unchanged by the delimited conversions and dropped by the camel
//! conversions.
//!
//! ```
//! assert_eq!(strcase::to_camel_case("test_case"), "TestCase");
//! assert_eq!(strcase::to_snake_case("JSONData"), "json_data");
//! assert_eq!(strcase::to_screaming_kebab_case("userID"), "USER-ID");
//! ```

#[macro_use]
mod tracing_macros;

mod ascii;
pub use ascii::{Ascii, Classify};

mod camel;
mod delimited;

mod case;
pub use case::{Case, ParseCaseError};

mod converter;
pub use converter::Converter;

mod ext;
pub use ext::StrCase;

const ASCII: Converter = Converter::ascii();

/// Convert `s` to CamelCase.
///
/// Whitespace, punctuation and digits start a new word; existing uppercase letters are kept.
///
/// ```
/// assert_eq!(strcase::to_camel_case("numbers2and55with000"), "Numbers2And55With000");
/// ```
pub fn to_camel_case(s: &str) -> String {
    ASCII.to_camel_case(s)
}

/// Convert `s` to lowerCamelCase.
pub fn to_lower_camel_case(s: &str) -> String {
    ASCII.to_lower_camel_case(s)
}

/// Convert `s` to snake_case.
pub fn to_snake_case(s: &str) -> String {
    ASCII.to_snake_case(s)
}

/// Convert `s` to SCREAMING_SNAKE_CASE.
pub fn to_screaming_snake_case(s: &str) -> String {
    ASCII.to_screaming_snake_case(s)
}

/// Convert `s` to kebab-case.
pub fn to_kebab_case(s: &str) -> String {
    ASCII.to_kebab_case(s)
}

/// Convert `s` to SCREAMING-KEBAB-CASE.
pub fn to_screaming_kebab_case(s: &str) -> String {
    ASCII.to_screaming_kebab_case(s)
}

/// Convert `s` to lowercase words joined by `delimiter`, e.g. `delimited.snake.case` for `b'.'`.
pub fn to_delimited(s: &str, delimiter: u8) -> String {
    ASCII.to_delimited(s, delimiter)
}

/// Convert `s` to words joined by `delimiter`, uppercased if `screaming` is set.
///
/// See [`Converter::to_screaming_delimited`] for the boundary rules. `s` is not trimmed.
///
/// ```
/// assert_eq!(strcase::to_screaming_delimited("fooBar", b'.', true), "FOO.BAR");
/// assert_eq!(strcase::to_screaming_delimited("fooBar", b'.', false), "foo.bar");
/// ```
pub fn to_screaming_delimited(s: &str, delimiter: u8, screaming: bool) -> String {
    ASCII.to_screaming_delimited(s, delimiter, screaming)
}
