use crate::{Case, converter::Converter};

/// Case conversions as methods on string slices.
///
/// ```
/// use strcase::StrCase as _;
///
/// assert_eq!("JSONData".to_snake_case(), "json_data");
/// assert_eq!("any kind".to_camel_case(), "AnyKind");
/// ```
pub trait StrCase {
    /// See [`to_camel_case`](crate::to_camel_case).
    fn to_camel_case(&self) -> String;

    /// See [`to_lower_camel_case`](crate::to_lower_camel_case).
    fn to_lower_camel_case(&self) -> String;

    /// See [`to_snake_case`](crate::to_snake_case).
    fn to_snake_case(&self) -> String;

    /// See [`to_screaming_snake_case`](crate::to_screaming_snake_case).
    fn to_screaming_snake_case(&self) -> String;

    /// See [`to_kebab_case`](crate::to_kebab_case).
    fn to_kebab_case(&self) -> String;

    /// See [`to_screaming_kebab_case`](crate::to_screaming_kebab_case).
    fn to_screaming_kebab_case(&self) -> String;

    /// See [`to_delimited`](crate::to_delimited).
    fn to_delimited(&self, delimiter: u8) -> String;

    /// See [`to_screaming_delimited`](crate::to_screaming_delimited).
    fn to_screaming_delimited(&self, delimiter: u8, screaming: bool) -> String;

    /// See [`Case::convert`].
    fn to_case(&self, case: Case) -> String;
}

impl StrCase for str {
    fn to_camel_case(&self) -> String {
        Converter::ascii().to_camel_case(self)
    }

    fn to_lower_camel_case(&self) -> String {
        Converter::ascii().to_lower_camel_case(self)
    }

    fn to_snake_case(&self) -> String {
        Converter::ascii().to_snake_case(self)
    }

    fn to_screaming_snake_case(&self) -> String {
        Converter::ascii().to_screaming_snake_case(self)
    }

    fn to_kebab_case(&self) -> String {
        Converter::ascii().to_kebab_case(self)
    }

    fn to_screaming_kebab_case(&self) -> String {
        Converter::ascii().to_screaming_kebab_case(self)
    }

    fn to_delimited(&self, delimiter: u8) -> String {
        Converter::ascii().to_delimited(self, delimiter)
    }

    fn to_screaming_delimited(&self, delimiter: u8, screaming: bool) -> String {
        Converter::ascii().to_screaming_delimited(self, delimiter, screaming)
    }

    fn to_case(&self, case: Case) -> String {
        case.convert(self)
    }
}
