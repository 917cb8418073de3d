use serde::Serialize;

use crate::data::navigation::{NAV_ITEMS, OTHER_ITEMS};
use crate::models::category::NavItem;
use crate::models::language::Language;

#[derive(Debug, Serialize)]
pub struct NavEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Option<&'static str>,
    pub count: Option<&'static str>,
    pub active: bool,
}

#[derive(Debug, Serialize)]
pub struct NavigationView {
    pub items: Vec<NavEntry>,
    pub other_items: Vec<NavEntry>,
    pub dropdown_open: bool,
    /// Label on the collapsed mobile dropdown: the active job category, or
    /// Home when the active key is not one of them.
    pub active_label: &'static str,
}

fn entry(item: &NavItem, lang: Language, active_category: &str) -> NavEntry {
    NavEntry {
        key: item.key,
        label: item.label.get(lang),
        color: item.color,
        count: item.count,
        active: item.key == active_category,
    }
}

pub fn build(lang: Language, active_category: &str, dropdown_open: bool) -> NavigationView {
    let active_label = NAV_ITEMS
        .iter()
        .find(|i| i.key == active_category)
        .unwrap_or(&NAV_ITEMS[0])
        .label
        .get(lang);

    NavigationView {
        items: NAV_ITEMS
            .iter()
            .map(|i| entry(i, lang, active_category))
            .collect(),
        other_items: OTHER_ITEMS
            .iter()
            .map(|i| entry(i, lang, active_category))
            .collect(),
        dropdown_open,
        active_label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlights_the_active_category() {
        let view = build(Language::En, "railway", false);
        let active: Vec<_> = view.items.iter().filter(|e| e.active).map(|e| e.key).collect();
        assert_eq!(active, ["railway"]);
        assert_eq!(view.active_label, "Railway Jobs");
    }

    #[test]
    fn dropdown_label_falls_back_to_home() {
        let view = build(Language::Hi, "admit-card", true);
        assert_eq!(view.active_label, "होम");
        assert!(view.dropdown_open);
        assert!(view.items.iter().all(|e| !e.active));
    }
}
