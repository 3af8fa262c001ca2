use crate::{ascii::Classify, converter::Converter};

impl<C: Classify> Converter<C> {
    /// Convert `s` to CamelCase (also known as PascalCase).
    pub fn to_camel_case(&self, s: &str) -> String {
        if s.is_empty() {
            return String::new();
        }

        self.camelize(s, true)
    }

    /// Convert `s` to lowerCamelCase.
    ///
    /// Only the first character of `s` is lowercased up front. Uppercase
    /// letters after it are kept, so `"ID"` becomes `"iD"`.
    pub fn to_lower_camel_case(&self, s: &str) -> String {
        let mut chars = s.chars();
        match chars.next() {
            None => String::new(),
            Some(first) if self.class.is_upper(first) => {
                let mut lowered = String::with_capacity(s.len());
                lowered.push(self.class.to_lower(first));
                lowered.push_str(chars.as_str());
                self.camelize(&lowered, false)
            }
            Some(_) => self.camelize(s, false),
        }
    }

    /// Drop separators from the trimmed `s` and uppercase each lowercase letter
    /// that starts a word. A word starts after whitespace, punctuation or a
    /// digit, and at the very beginning when `capitalize_first` is set.
    /// Characters outside the known classes are dropped.
    fn camelize(&self, s: &str, capitalize_first: bool) -> String {
        let class = &self.class;
        let mut out = String::with_capacity(s.len());
        let mut capitalize_next = capitalize_first;

        for ch in s.trim().chars() {
            if class.is_lower(ch) {
                out.push(if capitalize_next {
                    class.to_upper(ch)
                } else {
                    ch
                });
            } else if class.is_upper(ch) {
                out.push(ch);
            } else if class.is_digit(ch) {
                out.push(ch);
                capitalize_next = true;
                continue;
            } else if class.is_separator(ch) {
                capitalize_next = true;
                continue;
            } else {
                continue;
            }

            capitalize_next = false;
        }

        out
    }
}
