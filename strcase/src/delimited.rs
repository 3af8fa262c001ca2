use crate::{ascii::Classify, converter::Converter};

const UNDERSCORE: u8 = b'_';
const HYPHEN: u8 = b'-';

impl<C: Classify> Converter<C> {
    /// Convert `s` to snake_case. Surrounding whitespace is trimmed.
    pub fn to_snake_case(&self, s: &str) -> String {
        self.to_delimited(s, UNDERSCORE)
    }

    /// Convert `s` to SCREAMING_SNAKE_CASE. Surrounding whitespace is trimmed.
    pub fn to_screaming_snake_case(&self, s: &str) -> String {
        self.to_screaming_delimited(s.trim(), UNDERSCORE, true)
    }

    /// Convert `s` to kebab-case. Surrounding whitespace is trimmed.
    pub fn to_kebab_case(&self, s: &str) -> String {
        self.to_delimited(s, HYPHEN)
    }

    /// Convert `s` to SCREAMING-KEBAB-CASE. Surrounding whitespace is trimmed.
    pub fn to_screaming_kebab_case(&self, s: &str) -> String {
        self.to_screaming_delimited(s.trim(), HYPHEN, true)
    }

    /// Convert `s` to lowercase words joined by `delimiter`. Surrounding
    /// whitespace is trimmed.
    pub fn to_delimited(&self, s: &str, delimiter: u8) -> String {
        self.to_screaming_delimited(s.trim(), delimiter, false)
    }

    /// Split `s` into words joined by `delimiter`, folded to uppercase when
    /// `screaming` is set and to lowercase otherwise.
    ///
    /// Unlike the other delimited conversions this does not trim `s`, so
    /// surrounding whitespace turns into leading or trailing delimiters.
    ///
    /// Word boundaries are found with a two-character lookahead:
    /// - every run of whitespace or punctuation becomes a single delimiter;
    /// - a lowercase letter followed by an uppercase one ends a word
    ///   (`fooBar` → `foo.bar`);
    /// - an uppercase letter followed by a lowercase one starts a word, which
    ///   splits an acronym before its last letter (`JSONData` → `json.data`).
    ///
    /// Digits and non-ASCII characters never start a word and are copied as is.
    /// A `delimiter` above `0x7F` is emitted as the Latin-1 character it names.
    pub fn to_screaming_delimited(&self, s: &str, delimiter: u8, screaming: bool) -> String {
        let delimited = self.insert_delimiters(s, char::from(delimiter));
        self.fold(&delimited, screaming)
    }

    fn insert_delimiters(&self, s: &str, delimiter: char) -> String {
        let class = &self.class;
        let mut out = String::with_capacity(s.len() * 2);

        // Set after a character that continues a word, cleared after a delimiter.
        let mut in_word = true;
        // Set while a run of separators has already produced its delimiter.
        let mut in_gap = false;

        let mut chars = s.chars().peekable();
        let mut first = true;
        while let Some(ch) = chars.next() {
            let case_change = chars
                .peek()
                .is_some_and(|&next| class.case_changes(ch, next));

            if !first && in_word && case_change {
                if class.is_lower(ch) {
                    out.push(ch);
                    out.push(delimiter);
                    in_word = false;
                } else {
                    out.push(delimiter);
                    out.push(ch);
                    in_word = true;
                }
                in_gap = false;
            } else if class.is_separator(ch) {
                if !in_gap {
                    out.push(delimiter);
                    in_gap = true;
                }
                in_word = false;
            } else {
                out.push(ch);
                in_word = true;
                in_gap = false;
            }

            first = false;
        }

        out
    }

    fn fold(&self, s: &str, screaming: bool) -> String {
        let class = &self.class;
        s.chars()
            .map(|ch| match screaming {
                true if class.is_lower(ch) => class.to_upper(ch),
                false if class.is_upper(ch) => class.to_lower(ch),
                _ => ch,
            })
            .collect()
    }
}
