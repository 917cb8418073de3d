use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
    Te,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Hi, Language::Te];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Te => "te",
        }
    }

    /// BCP 47 tag used for date formatting.
    pub fn locale(&self) -> &'static str {
        match self {
            Language::En => "en-IN",
            Language::Hi => "hi-IN",
            Language::Te => "te-IN",
        }
    }

    /// Short label shown on the header's language switcher.
    pub fn switcher_label(&self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Hi => "हिं",
            Language::Te => "తె",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "hi" => Ok(Language::Hi),
            "te" => Ok(Language::Te),
            other => Err(format!("unsupported language '{}', expected en, hi or te", other)),
        }
    }
}

/// A static text available in every supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Localized {
    pub en: &'static str,
    pub hi: &'static str,
    pub te: &'static str,
}

impl Localized {
    pub const fn new(en: &'static str, hi: &'static str, te: &'static str) -> Self {
        Self { en, hi, te }
    }

    /// Falls back to English when a variant was left blank.
    pub fn get(&self, lang: Language) -> &'static str {
        let text = match lang {
            Language::En => self.en,
            Language::Hi => self.hi,
            Language::Te => self.te,
        };
        if text.is_empty() {
            self.en
        } else {
            text
        }
    }

    pub fn is_complete(&self) -> bool {
        Language::ALL.iter().all(|lang| {
            let text = match lang {
                Language::En => self.en,
                Language::Hi => self.hi,
                Language::Te => self.te,
            };
            !text.trim().is_empty()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!("EN".parse::<Language>().unwrap(), Language::En);
        assert_eq!(" hi".parse::<Language>().unwrap(), Language::Hi);
        assert_eq!("te".parse::<Language>().unwrap(), Language::Te);
        assert!("ta".parse::<Language>().is_err());
    }

    #[test]
    fn serializes_as_code() {
        let json = serde_json::to_string(&Language::Hi).unwrap();
        assert_eq!(json, "\"hi\"");
        let lang: Language = serde_json::from_str("\"te\"").unwrap();
        assert_eq!(lang, Language::Te);
    }

    #[test]
    fn localized_falls_back_to_english() {
        let text = Localized::new("Jobs", "", "ఉద్యోగాలు");
        assert_eq!(text.get(Language::Hi), "Jobs");
        assert_eq!(text.get(Language::Te), "ఉద్యోగాలు");
        assert!(!text.is_complete());
    }
}
