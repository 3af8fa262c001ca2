use std::{fmt, str::FromStr};

use crate::converter::Converter;

/// A naming convention that text can be converted to.
///
/// Parses from the spellings commonly used for rename rules:
///
/// ```
/// use strcase::Case;
///
/// let case: Case = "SCREAMING-KEBAB-CASE".parse().unwrap();
/// assert_eq!(case, Case::ScreamingKebab);
/// assert_eq!(case.convert("userID"), "USER-ID");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Case {
    /// `CamelCase`, also known as PascalCase.
    Camel,
    /// `lowerCamelCase`.
    LowerCamel,
    /// `snake_case`.
    Snake,
    /// `SCREAMING_SNAKE_CASE`.
    ScreamingSnake,
    /// `kebab-case`.
    Kebab,
    /// `SCREAMING-KEBAB-CASE`.
    ScreamingKebab,
    /// Words joined by an arbitrary delimiter byte, e.g. `dotted.case`.
    Delimited {
        /// The byte placed between words.
        delimiter: u8,
        /// Fold to uppercase instead of lowercase.
        screaming: bool,
    },
}

impl Case {
    /// Every case that has a name, in declaration order.
    pub const NAMED: [Case; 6] = [
        Case::Camel,
        Case::LowerCamel,
        Case::Snake,
        Case::ScreamingSnake,
        Case::Kebab,
        Case::ScreamingKebab,
    ];

    /// Convert `s` to this case.
    ///
    /// `Delimited` trims `s` like [`to_delimited`](crate::to_delimited) does,
    /// whether or not it is screaming.
    pub fn convert(&self, s: &str) -> String {
        let converter = Converter::ascii();
        let out = match *self {
            Self::Camel => converter.to_camel_case(s),
            Self::LowerCamel => converter.to_lower_camel_case(s),
            Self::Snake => converter.to_snake_case(s),
            Self::ScreamingSnake => converter.to_screaming_snake_case(s),
            Self::Kebab => converter.to_kebab_case(s),
            Self::ScreamingKebab => converter.to_screaming_kebab_case(s),
            Self::Delimited {
                delimiter,
                screaming,
            } => converter.to_screaming_delimited(s.trim(), delimiter, screaming),
        };

        trace!(case = %self, input = s, output = %out, "converted");

        out
    }

    /// The conventional spelling of this case, or `None` for [`Case::Delimited`].
    pub const fn name(&self) -> Option<&'static str> {
        match self {
            Self::Camel => Some("PascalCase"),
            Self::LowerCamel => Some("camelCase"),
            Self::Snake => Some("snake_case"),
            Self::ScreamingSnake => Some("SCREAMING_SNAKE_CASE"),
            Self::Kebab => Some("kebab-case"),
            Self::ScreamingKebab => Some("SCREAMING-KEBAB-CASE"),
            Self::Delimited { .. } => None,
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self, self.name()) {
            (
                Self::Delimited {
                    delimiter,
                    screaming,
                },
                _,
            ) => {
                let style = if *screaming { "SCREAMING" } else { "lower" };
                write!(f, "{style} delimited by {:?}", char::from(*delimiter))
            }
            (_, name) => f.write_str(name.unwrap_or_default()),
        }
    }
}

impl FromStr for Case {
    type Err = ParseCaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PascalCase" | "UpperCamelCase" | "CamelCase" => Ok(Self::Camel),
            "camelCase" | "lowerCamelCase" => Ok(Self::LowerCamel),
            "snake_case" => Ok(Self::Snake),
            "SCREAMING_SNAKE_CASE" => Ok(Self::ScreamingSnake),
            "kebab-case" => Ok(Self::Kebab),
            "SCREAMING-KEBAB-CASE" => Ok(Self::ScreamingKebab),
            other => Err(ParseCaseError {
                name: other.to_owned(),
            }),
        }
    }
}

/// The error returned when parsing an unknown case name.
#[derive(Clone, PartialEq, Eq)]
pub struct ParseCaseError {
    name: String,
}

impl ParseCaseError {
    /// The text that failed to parse.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::error::Error for ParseCaseError {}

impl fmt::Display for ParseCaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown case '{}'. Use one of PascalCase, camelCase, snake_case, \
             SCREAMING_SNAKE_CASE, kebab-case or SCREAMING-KEBAB-CASE",
            self.name
        )
    }
}

impl fmt::Debug for ParseCaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
