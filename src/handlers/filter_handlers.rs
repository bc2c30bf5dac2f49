use explore_core::CriterionKind;
use std::io::{self, Write};

use crate::operations::{validate_criterion, validate_language};
use crate::state::AppState;
use crate::ui::{set_status, update_ui_from_state, StatusLevel};

/// Replace the search text and re-render
pub fn handle_search(out: &mut impl Write, state: &mut AppState, text: &str) -> io::Result<()> {
    state.set_search_text(text);
    update_ui_from_state(out, state)
}

/// Toggle a continent or timezone and re-render.
/// Unknown values are rejected with a warning and leave the criteria as they were.
pub fn handle_toggle(
    out: &mut impl Write,
    state: &mut AppState,
    kind: CriterionKind,
    value: &str,
) -> io::Result<()> {
    match validate_criterion(kind, value) {
        Ok(value) => {
            state.toggle_criterion(kind, &value);
            update_ui_from_state(out, state)
        }
        Err(e) => set_status(out, e.to_string(), StatusLevel::Warning),
    }
}

/// Clear continents and timezones and re-render
pub fn handle_reset(out: &mut impl Write, state: &mut AppState) -> io::Result<()> {
    state.reset_criteria();
    set_status(out, "Filters cleared", StatusLevel::Info)?;
    update_ui_from_state(out, state)
}

/// Record the language label; the list is not affected
pub fn handle_language(out: &mut impl Write, state: &mut AppState, value: &str) -> io::Result<()> {
    match validate_language(value) {
        Ok(language) => {
            state.select_language(&language);
            set_status(out, format!("Language set to {}", language), StatusLevel::Success)
        }
        Err(e) => set_status(out, e.to_string(), StatusLevel::Warning),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use explore_core::{Catalog, RawCountry};
    use serde_json::json;

    fn state() -> AppState {
        let raws: Vec<RawCountry> = serde_json::from_value(json!([
            {"name": {"common": "Kenya"}, "cca3": "KEN", "continents": ["Africa"], "timezones": ["UTC+03:00"]},
            {"name": {"common": "Norway"}, "cca3": "NOR", "continents": ["Europe"], "timezones": ["UTC+01:00"]}
        ]))
        .unwrap();
        let mut state = AppState::new();
        state.catalog = Catalog::from_raw(raws);
        state
    }

    #[test]
    fn test_toggle_canonicalizes_value() {
        let mut state = state();
        let mut out = Vec::new();

        handle_toggle(&mut out, &mut state, CriterionKind::Continent, "africa").unwrap();
        assert!(state.selection.is_selected(CriterionKind::Continent, "Africa"));
        assert_eq!(state.visible_count(), 1);

        handle_toggle(&mut out, &mut state, CriterionKind::Continent, "AFRICA").unwrap();
        assert!(state.selection.criteria.continents.is_empty());
    }

    #[test]
    fn test_toggle_rejects_unknown_value() {
        let mut state = state();
        let mut out = Vec::new();

        handle_toggle(&mut out, &mut state, CriterionKind::Timezone, "Mars Time").unwrap();
        assert!(state.selection.criteria.timezones.is_empty());
        assert!(String::from_utf8(out).unwrap().contains("not one of the available choices"));
    }

    #[test]
    fn test_reset_keeps_search() {
        let mut state = state();
        let mut out = Vec::new();

        handle_search(&mut out, &mut state, "or").unwrap();
        handle_toggle(&mut out, &mut state, CriterionKind::Timezone, "UTC+01:00").unwrap();
        handle_reset(&mut out, &mut state).unwrap();

        assert_eq!(state.selection.criteria.search_text, "or");
        assert!(state.selection.criteria.timezones.is_empty());
        assert_eq!(state.visible_count(), 1);
    }

    #[test]
    fn test_language_does_not_filter() {
        let mut state = state();
        let mut out = Vec::new();

        handle_language(&mut out, &mut state, "deutsch").unwrap();
        assert_eq!(state.selection.language.as_deref(), Some("Deutsch"));
        assert_eq!(state.visible_count(), 2);
    }
}
