// Menu active-state derivation.
//
// Pure function of the active filter: every control is recomputed from
// scratch on each navigation, no incremental diffing.

use serde::Serialize;

use crate::model::FILTER_ALL;

/// One menu control with its computed active flag.
#[derive(Debug, Clone, Serialize)]
pub struct MenuEntry {
    pub category: String,
    pub active: bool,
}

/// Whether a category control is active for the given filter.
///
/// Active on a case-insensitive exact match, or when the filter contains
/// the category as a case-insensitive substring. The `"all"` sentinel only
/// matches exactly, so it never lights up for a named collection.
pub fn is_active(category: &str, active_filter: &str) -> bool {
    let cat = category.to_lowercase();
    let filter = active_filter.to_lowercase();
    cat == filter || (filter.contains(&cat) && category != FILTER_ALL)
}

/// Compute the full menu state for one navigation.
pub fn menu_entries(categories: &[String], active_filter: &str) -> Vec<MenuEntry> {
    categories
        .iter()
        .map(|category| MenuEntry {
            category: category.clone(),
            active: is_active(category, active_filter),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Vec<String> {
        ["all", "Gastronomy", "Exterior"]
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn exact_match_is_case_insensitive() {
        assert!(is_active("Gastronomy", "gastronomy"));
        assert!(is_active("all", "ALL"));
    }

    #[test]
    fn substring_match_lights_the_contained_category() {
        let entries = menu_entries(&categories(), "Gastronomy Editorial");
        let active: Vec<&str> = entries
            .iter()
            .filter(|e| e.active)
            .map(|e| e.category.as_str())
            .collect();
        assert_eq!(active, vec!["Gastronomy"]);
    }

    #[test]
    fn all_sentinel_never_matches_by_substring() {
        // "Overall" contains "all" but must not activate the sentinel.
        assert!(!is_active("all", "Overall"));
    }

    #[test]
    fn unrelated_filter_deactivates_everything() {
        let entries = menu_entries(&categories(), "Portrait");
        assert!(entries.iter().all(|e| !e.active));
    }
}
