use crate::ascii::{Ascii, Classify};

/// Runs the case conversions with a particular [`Classify`] implementation.
///
/// The free functions at the crate root use [`Converter::ascii`]. Build one
/// with [`Converter::new`] to drive the same algorithms with another
/// classifier.
///
/// ```
/// use strcase::Converter;
///
/// let converter = Converter::ascii();
/// assert_eq!(converter.to_snake_case("userID"), "user_id");
/// assert_eq!(converter.to_camel_case("user_id"), "UserId");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Converter<C = Ascii> {
    pub(crate) class: C,
}

impl Converter<Ascii> {
    /// A converter with single-byte ASCII classification.
    pub const fn ascii() -> Self {
        Self { class: Ascii }
    }
}

impl<C: Classify> Converter<C> {
    /// Create a converter around `class`.
    pub const fn new(class: C) -> Self {
        Self { class }
    }

    /// The classifier this converter consults.
    pub const fn classifier(&self) -> &C {
        &self.class
    }
}
