use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// User interface language.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
}

impl Language {
    /// ISO 639-1 code, e.g. `"en"`.
    pub fn code(&self) -> &'static str {
        self.into()
    }

    fn thousands_separator(&self) -> char {
        match self {
            Self::En => ',',
            Self::Es => '.',
        }
    }
}

/// Render a whole number for display, with the language's digit grouping.
pub fn display_number(n: usize, language: Language) -> String {
    let digits = n.to_string();
    let separator = language.thousands_separator();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::En.code(), "en");
        assert_eq!(Language::from_str("es").ok(), Some(Language::Es));
        assert!(Language::from_str("xx").is_err());
    }

    #[test]
    fn test_display_number() {
        assert_eq!(display_number(2, Language::En), "2");
        assert_eq!(display_number(999, Language::En), "999");
        assert_eq!(display_number(1000, Language::En), "1,000");
        assert_eq!(display_number(1234567, Language::Es), "1.234.567");
    }
}
