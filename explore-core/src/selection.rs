use crate::models::{FilterCriteria, SelectionState};
use std::collections::BTreeSet;

/// Which criteria set a toggle applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CriterionKind {
    Continent,
    Timezone,
}

impl CriterionKind {
    pub fn label(self) -> &'static str {
        match self {
            CriterionKind::Continent => "Continent",
            CriterionKind::Timezone => "Time zone",
        }
    }
}

/// Return a new set with `value` removed if present, added otherwise
pub fn toggle(set: &BTreeSet<String>, value: &str) -> BTreeSet<String> {
    let mut next = set.clone();
    if !next.remove(value) {
        next.insert(value.to_string());
    }
    next
}

impl FilterCriteria {
    /// Criteria with one continent or timezone toggled
    pub fn toggled(&self, kind: CriterionKind, value: &str) -> FilterCriteria {
        let mut next = self.clone();
        match kind {
            CriterionKind::Continent => next.continents = toggle(&self.continents, value),
            CriterionKind::Timezone => next.timezones = toggle(&self.timezones, value),
        }
        next
    }

    /// Criteria with both sets cleared; the search text is kept
    pub fn reset(&self) -> FilterCriteria {
        FilterCriteria {
            search_text: self.search_text.clone(),
            ..FilterCriteria::default()
        }
    }

    pub fn with_search_text(&self, text: impl Into<String>) -> FilterCriteria {
        FilterCriteria {
            search_text: text.into(),
            ..self.clone()
        }
    }

    pub fn values(&self, kind: CriterionKind) -> &BTreeSet<String> {
        match kind {
            CriterionKind::Continent => &self.continents,
            CriterionKind::Timezone => &self.timezones,
        }
    }
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the criteria with one value toggled and return the new criteria
    pub fn toggle_criterion(&mut self, kind: CriterionKind, value: &str) -> FilterCriteria {
        self.criteria = self.criteria.toggled(kind, value);
        self.criteria.clone()
    }

    /// Clear continents and timezones; language and search text are untouched
    pub fn reset_criteria(&mut self) -> FilterCriteria {
        self.criteria = self.criteria.reset();
        self.criteria.clone()
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) -> FilterCriteria {
        self.criteria = self.criteria.with_search_text(text);
        self.criteria.clone()
    }

    /// Last write wins. Informational only, nothing is filtered by language.
    pub fn select_language(&mut self, language: impl Into<String>) {
        self.language = Some(language.into());
    }

    pub fn is_selected(&self, kind: CriterionKind, value: &str) -> bool {
        self.criteria.values(kind).contains(value)
    }
}
