use proc_macro::TokenStream;
use syn::{Item, parse_macro_input};

use crate::expand::CaseNamesAttr;

mod expand;

/// This macro derives case-converted names for the variants of a fieldless enum or the fields of a
/// struct.
///
/// # Explanation
///
/// - `#[case_names(rename_all = "kebab-case")]` picks a named style. Any spelling accepted by
///   `strcase::Case` works.
/// - `#[case_names(delimiter = ".", screaming)]` joins words with a custom ASCII delimiter instead.
///   `screaming` is optional.
/// - `#[case(rename = "...")]` on a variant or field overrides the derived name.
/// - `#[case(skip)]` on a struct field leaves it out of `FIELD_NAMES`.
///
/// On enums this generates `NAMES`, `name()`, `from_name()` and a `Display` impl. On structs it
/// generates `FIELD_NAMES`.
///
/// ```
/// #[strcase_derive::case_names(rename_all = "SCREAMING_SNAKE_CASE")]
/// #[derive(Debug, PartialEq)]
/// enum Level {
///     Warn,
///     FatalError,
/// }
///
/// assert_eq!(Level::FatalError.name(), "FATAL_ERROR");
/// assert_eq!(Level::from_name("WARN"), Some(Level::Warn));
/// ```
#[proc_macro_attribute]
pub fn case_names(attr: TokenStream, item: TokenStream) -> TokenStream {
    // NOTE: We use `proc_macro_attribute` here because the `#[case]` helper attributes have to be
    // stripped from the item. Derive macros are additive.
    let mut input = parse_macro_input!(item as Item);

    let attributes: CaseNamesAttr = match syn::parse(attr) {
        Ok(v) => v,
        Err(e) => {
            return e.to_compile_error().into();
        }
    };

    expand::expand(attributes, &mut input)
        .unwrap_or_else(|err| err.into_compile_error())
        .into()
}
