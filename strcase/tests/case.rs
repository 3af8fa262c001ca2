use strcase::{Case, StrCase as _};

#[test]
fn test_parse_case_names() {
    let names = [
        ("PascalCase", Case::Camel),
        ("UpperCamelCase", Case::Camel),
        ("CamelCase", Case::Camel),
        ("camelCase", Case::LowerCamel),
        ("lowerCamelCase", Case::LowerCamel),
        ("snake_case", Case::Snake),
        ("SCREAMING_SNAKE_CASE", Case::ScreamingSnake),
        ("kebab-case", Case::Kebab),
        ("SCREAMING-KEBAB-CASE", Case::ScreamingKebab),
    ];

    for (name, expected) in names {
        assert_eq!(name.parse::<Case>().unwrap(), expected, "name: {name}");
    }
}

#[test]
fn test_unknown_case_name() {
    let err = "Snake_Case".parse::<Case>().unwrap_err();
    assert_eq!(err.name(), "Snake_Case");
    assert!(err.to_string().starts_with("Unknown case 'Snake_Case'"));

    assert!("".parse::<Case>().is_err());
}

#[test]
fn test_display_parses_back() {
    for case in Case::NAMED {
        let name = case.to_string();
        assert_eq!(Some(name.as_str()), case.name());
        assert_eq!(name.parse::<Case>().unwrap(), case);
    }
}

#[test]
fn test_display_delimited() {
    let dotted = Case::Delimited {
        delimiter: b'.',
        screaming: false,
    };
    assert_eq!(dotted.name(), None);
    assert_eq!(dotted.to_string(), "lower delimited by '.'");

    let screaming = Case::Delimited {
        delimiter: b'/',
        screaming: true,
    };
    assert_eq!(screaming.to_string(), "SCREAMING delimited by '/'");
}

#[test]
fn test_convert() {
    let input = "AnyKind of_string";
    let expected = [
        "AnyKindOfString",
        "anyKindOfString",
        "any_kind_of_string",
        "ANY_KIND_OF_STRING",
        "any-kind-of-string",
        "ANY-KIND-OF-STRING",
    ];

    for (case, expected) in Case::NAMED.into_iter().zip(expected) {
        assert_eq!(case.convert(input), expected, "case: {case}");
        assert_eq!(input.to_case(case), expected, "case: {case}");
    }
}

#[test]
fn test_convert_delimited_trims() {
    let screaming_dotted = Case::Delimited {
        delimiter: b'.',
        screaming: true,
    };
    assert_eq!(screaming_dotted.convert("  userID "), "USER.ID");

    let dotted = Case::Delimited {
        delimiter: b'.',
        screaming: false,
    };
    assert_eq!(dotted.convert("  JSONData "), "json.data");
}

#[test]
fn test_str_extension() {
    assert_eq!("test_case".to_camel_case(), "TestCase");
    assert_eq!("AnyKind of_string".to_lower_camel_case(), "anyKindOfString");
    assert_eq!("JSONData".to_snake_case(), "json_data");
    assert_eq!("userID".to_screaming_snake_case(), "USER_ID");
    assert_eq!("userID".to_kebab_case(), "user-id");
    assert_eq!("userID".to_screaming_kebab_case(), "USER-ID");
    assert_eq!("numbers2and55with000".to_delimited(b'@'), "numbers2and55with000");
    assert_eq!(" fooBar".to_screaming_delimited(b'.', true), ".FOO.BAR");

    let owned = String::from("HTTPServer");
    assert_eq!(owned.to_snake_case(), "http_server");
}
