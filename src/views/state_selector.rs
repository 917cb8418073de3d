use std::cmp::Reverse;

use serde::Serialize;

use crate::data::regions::{self, INDIAN_STATES};
use crate::i18n::state_selector::{self, StateSelectorStrings};
use crate::models::language::Language;
use crate::models::page::ALL_STATES;

#[derive(Debug, Serialize)]
pub struct StateEntry {
    pub code: &'static str,
    pub name: &'static str,
    pub jobs: u32,
    pub is_trending: bool,
    pub selected: bool,
}

#[derive(Debug, Serialize)]
pub struct StateSelectorView {
    pub text: &'static StateSelectorStrings,
    pub all_selected: bool,
    pub total_jobs: u32,
    pub trending_count: usize,
    pub state_count: usize,
    pub states: Vec<StateEntry>,
}

/// Trending states first, then by job count, largest first.
pub fn build(lang: Language, selected: &str) -> StateSelectorView {
    let mut states: Vec<StateEntry> = INDIAN_STATES
        .iter()
        .map(|s| StateEntry {
            code: s.code,
            name: s.name.get(lang),
            jobs: s.jobs,
            is_trending: s.is_trending,
            selected: s.code == selected,
        })
        .collect();
    states.sort_by_key(|s| (Reverse(s.is_trending), Reverse(s.jobs)));

    StateSelectorView {
        text: state_selector::strings(lang),
        all_selected: selected == ALL_STATES,
        total_jobs: regions::total_jobs(),
        trending_count: states.iter().filter(|s| s.is_trending).count(),
        state_count: states.len(),
        states,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trending_block_leads_sorted_by_jobs() {
        let view = build(Language::En, ALL_STATES);
        let leading: Vec<_> = view.states.iter().take(7).map(|s| s.code).collect();
        assert_eq!(leading, ["UP", "MH", "BR", "RJ", "DL", "KA", "TS"]);
        assert!(view.states[7..].iter().all(|s| !s.is_trending));
        assert_eq!(view.states[7].code, "TN");
        assert!(view.states[7..].windows(2).all(|w| w[0].jobs >= w[1].jobs));
    }

    #[test]
    fn totals_and_counts() {
        let view = build(Language::En, ALL_STATES);
        assert_eq!(view.total_jobs, 8083);
        assert_eq!(view.trending_count, 7);
        assert_eq!(view.state_count, 28);
        assert!(view.all_selected);
    }

    #[test]
    fn marks_selected_state() {
        let view = build(Language::Te, "KA");
        assert!(!view.all_selected);
        let selected: Vec<_> = view.states.iter().filter(|s| s.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name, "కర్ణాటక");
    }
}
