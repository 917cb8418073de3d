use serde::Serialize;

use crate::i18n::header::{self, HeaderStrings};
use crate::models::language::Language;

#[derive(Debug, Serialize)]
pub struct LanguageOption {
    pub code: &'static str,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Serialize)]
pub struct HeaderView {
    pub text: &'static HeaderStrings,
    pub languages: Vec<LanguageOption>,
    pub mobile_menu_open: bool,
}

pub fn build(lang: Language, mobile_menu_open: bool) -> HeaderView {
    let languages = Language::ALL
        .iter()
        .map(|l| LanguageOption {
            code: l.code(),
            label: l.switcher_label(),
            active: *l == lang,
        })
        .collect();

    HeaderView {
        text: header::strings(lang),
        languages,
        mobile_menu_open,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_exactly_the_current_language() {
        let view = build(Language::Te, false);
        let active: Vec<_> = view
            .languages
            .iter()
            .filter(|o| o.active)
            .map(|o| o.code)
            .collect();
        assert_eq!(active, ["te"]);
        assert_eq!(view.languages[1].label, "हिं");
    }
}
