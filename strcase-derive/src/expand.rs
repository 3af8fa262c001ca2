use std::collections::HashSet;

use darling::{FromField, FromMeta, FromVariant};
use proc_macro2::{Span, TokenStream};
use quote::quote;
use strcase::Case;
use syn::{Fields, Ident, Item, ItemEnum, ItemStruct, LitStr, Result, ext::IdentExt as _};

/// The name of the helper attribute on variants and fields.
const CASE_ATTR_NAME: &str = "case";

#[derive(FromMeta, Debug)]
#[darling(derive_syn_parse)]
pub(super) struct CaseNamesAttr {
    /// The named style to convert identifiers to, e.g. `"snake_case"`.
    rename_all: Option<LitStr>,
    /// A single ASCII character to join words with. Mutually exclusive with `rename_all`.
    delimiter: Option<LitStr>,
    /// Uppercase the delimited output.
    #[darling(default)]
    screaming: bool,
}

impl CaseNamesAttr {
    /// Resolve the attribute arguments to a conversion style.
    fn case(&self) -> Result<Case> {
        match (&self.rename_all, &self.delimiter) {
            (Some(rename_all), None) => {
                if self.screaming {
                    return Err(syn::Error::new_spanned(
                        rename_all,
                        "`screaming` only applies to `delimiter`. Pick a SCREAMING style instead",
                    ));
                }

                rename_all
                    .value()
                    .parse::<Case>()
                    .map_err(|e| syn::Error::new_spanned(rename_all, e.to_string()))
            }
            (None, Some(delimiter)) => match delimiter.value().as_bytes() {
                [byte] if byte.is_ascii() => Ok(Case::Delimited {
                    delimiter: *byte,
                    screaming: self.screaming,
                }),
                _ => Err(syn::Error::new_spanned(
                    delimiter,
                    "Expected a single ASCII character as delimiter",
                )),
            },
            (Some(_), Some(delimiter)) => Err(syn::Error::new_spanned(
                delimiter,
                "Use either `rename_all` or `delimiter`, not both",
            )),
            (None, None) => Err(syn::Error::new(
                Span::call_site(),
                "Expected `rename_all = \"...\"` or `delimiter = \"...\"`",
            )),
        }
    }
}

#[derive(FromVariant)]
#[darling(attributes(case))]
struct CaseVariant {
    /// The identifier of the variant.
    ident: Ident,
    /// The name override to use for the variant.
    rename: Option<String>,
}

#[derive(FromField)]
#[darling(attributes(case))]
struct CaseField {
    /// The identifier of the field.
    ident: Option<Ident>,
    /// The name override to use for the field.
    rename: Option<String>,
    /// Leave the field out of the generated names.
    #[darling(default)]
    skip: bool,
}

/// Collects the derived name of every variant or field and rejects collisions.
struct NameSet {
    case: Case,
    seen: HashSet<String>,
    names: Vec<String>,
}

impl NameSet {
    fn new(case: Case, capacity: usize) -> Self {
        Self {
            case,
            seen: HashSet::with_capacity(capacity),
            names: Vec::with_capacity(capacity),
        }
    }

    /// Push the name for `ident`, or `rename` if given.
    fn push(&mut self, ident: &Ident, rename: Option<String>) -> Result<()> {
        let name = rename.unwrap_or_else(|| self.case.convert(&ident.unraw().to_string()));

        if !self.seen.insert(name.clone()) {
            return Err(syn::Error::new_spanned(
                ident,
                format!("Duplicate name '{}' ({})", name, self.case),
            ));
        }

        self.names.push(name);
        Ok(())
    }
}

/// Strip the `#[case]` helper attributes from an item.
fn strip_case_attrs(attrs: &mut Vec<syn::Attribute>) {
    attrs.retain(|attr| !attr.path().is_ident(CASE_ATTR_NAME));
}

fn expand_enum(case: Case, input: &mut ItemEnum) -> Result<TokenStream> {
    let mut idents = Vec::with_capacity(input.variants.len());
    let mut names = NameSet::new(case, input.variants.len());

    for variant in input.variants.iter_mut() {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                &variant.fields,
                "Only unit variants are supported",
            ));
        }

        let case_variant = CaseVariant::from_variant(variant)?;
        names.push(&case_variant.ident, case_variant.rename)?;
        idents.push(case_variant.ident);

        strip_case_attrs(&mut variant.attrs);
    }

    let names = names.names;
    let vis = &input.vis;
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        #input

        impl #impl_generics #ident #ty_generics #where_clause {
            /// The name of every variant, in declaration order.
            #vis const NAMES: &'static [&'static str] = &[#(#names),*];

            /// The name of this variant.
            #vis const fn name(&self) -> &'static str {
                match *self {
                    #(Self::#idents => #names,)*
                }
            }

            /// Look up a variant by its name.
            #vis fn from_name(name: &str) -> ::core::option::Option<Self> {
                match name {
                    #(#names => ::core::option::Option::Some(Self::#idents),)*
                    _ => ::core::option::Option::None,
                }
            }
        }

        impl #impl_generics ::core::fmt::Display for #ident #ty_generics #where_clause {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.name())
            }
        }
    })
}

fn expand_struct(case: Case, input: &mut ItemStruct) -> Result<TokenStream> {
    let Fields::Named(fields) = &mut input.fields else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Only structs with named fields are supported",
        ));
    };

    let mut names = NameSet::new(case, fields.named.len());

    for field in fields.named.iter_mut() {
        let case_field = CaseField::from_field(field)?;
        strip_case_attrs(&mut field.attrs);

        if case_field.skip {
            continue;
        }

        let ident = case_field
            .ident
            .ok_or_else(|| syn::Error::new_spanned(&*field, "Expected an identifier"))?;
        names.push(&ident, case_field.rename)?;
    }

    let names = names.names;
    let vis = &input.vis;
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        #input

        impl #impl_generics #ident #ty_generics #where_clause {
            /// The name of every field, in declaration order.
            #vis const FIELD_NAMES: &'static [&'static str] = &[#(#names),*];
        }
    })
}

pub(super) fn expand(case_names_attr: CaseNamesAttr, input: &mut Item) -> Result<TokenStream> {
    let case = case_names_attr.case()?;

    match input {
        Item::Enum(item) => expand_enum(case, item),
        Item::Struct(item) => expand_struct(case, item),
        other => Err(syn::Error::new_spanned(
            other,
            "#[case_names] can only be used on enums and structs",
        )),
    }
}

#[cfg(test)]
mod tests {
    use quote::quote;

    use super::*;

    fn expand_tokens(attr: TokenStream, item: TokenStream) -> Result<TokenStream> {
        let attr: CaseNamesAttr = syn::parse2(attr)?;
        let mut item: Item = syn::parse2(item)?;
        expand(attr, &mut item)
    }

    fn expand_err(attr: TokenStream, item: TokenStream) -> String {
        match expand_tokens(attr, item) {
            Ok(tokens) => panic!("expected an error, got {tokens}"),
            Err(e) => e.to_string(),
        }
    }

    #[test]
    fn test_resolve_case() {
        let attr: CaseNamesAttr = syn::parse2(quote!(rename_all = "kebab-case")).unwrap();
        assert_eq!(attr.case().unwrap(), Case::Kebab);

        let attr: CaseNamesAttr = syn::parse2(quote!(delimiter = ".", screaming)).unwrap();
        assert_eq!(
            attr.case().unwrap(),
            Case::Delimited {
                delimiter: b'.',
                screaming: true
            }
        );
    }

    #[test]
    fn test_attribute_errors() {
        let item = quote!(
            enum E {
                A,
            }
        );

        let err = expand_err(quote!(), item.clone());
        assert!(err.contains("Expected `rename_all"), "{err}");

        let err = expand_err(quote!(rename_all = "Title Case"), item.clone());
        assert!(err.contains("Unknown case 'Title Case'"), "{err}");

        let err = expand_err(
            quote!(rename_all = "snake_case", delimiter = "."),
            item.clone(),
        );
        assert!(err.contains("not both"), "{err}");

        let err = expand_err(quote!(delimiter = "::"), item.clone());
        assert!(err.contains("single ASCII character"), "{err}");

        let err = expand_err(quote!(rename_all = "snake_case", screaming), item);
        assert!(err.contains("`screaming` only applies"), "{err}");
    }

    #[test]
    fn test_item_errors() {
        let attr = quote!(rename_all = "snake_case");

        let err = expand_err(attr.clone(), quote!(enum E { A(u8) }));
        assert!(err.contains("Only unit variants"), "{err}");

        let err = expand_err(attr.clone(), quote!(struct S(u8);));
        assert!(err.contains("named fields"), "{err}");

        let err = expand_err(attr.clone(), quote!(fn f() {}));
        assert!(err.contains("enums and structs"), "{err}");

        let err = expand_err(attr, quote!(enum E { FooBar, Foo_Bar }));
        assert!(err.contains("Duplicate name 'foo_bar'"), "{err}");
    }

    #[test]
    fn test_helper_attributes_are_stripped() {
        let tokens = expand_tokens(
            quote!(rename_all = "camelCase"),
            quote!(
                struct S {
                    #[case(rename = "ID")]
                    id: u64,
                    #[case(skip)]
                    cache: (),
                }
            ),
        )
        .unwrap();

        let output = tokens.to_string();
        assert!(!output.contains("# [case"), "{output}");
        assert!(output.contains("\"ID\""), "{output}");
        assert!(!output.contains("\"cache\""), "{output}");
    }
}
