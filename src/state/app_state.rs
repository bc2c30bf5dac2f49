use explore_core::*;
use std::borrow::Cow;
use std::path::PathBuf;

/// Application state management - Domain state only
/// Holds the baseline catalog and the user's current selection; every
/// change replaces the selection's criteria with a new value.
#[derive(Debug)]
pub struct AppState {
    /// Baseline sections derived from the last load
    pub catalog: Catalog,
    /// Language label and active filter criteria
    pub selection: SelectionState,
    /// Path the catalog was loaded from
    pub current_file: Option<PathBuf>,
    /// Country code shown in the detail view
    pub selected_country: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            catalog: Catalog::empty(),
            selection: SelectionState::new(),
            current_file: None,
            selected_country: None,
        }
    }

    /// Load a country list from file.
    /// On failure the catalog is left empty and the error is returned for
    /// reporting; the selection is kept either way.
    pub fn load_from_file(&mut self, path: PathBuf) -> Result<usize, LoadError> {
        self.current_file = Some(path.clone());
        self.selected_country = None;

        let (catalog, error) = Catalog::from_source(load_countries(&path));
        self.catalog = catalog;

        match error {
            Some(err) => Err(err),
            None => Ok(self.catalog.len()),
        }
    }

    /// Sections visible under the current criteria
    pub fn visible_sections(&self) -> Cow<'_, [Section]> {
        self.catalog.sections(&self.selection.criteria)
    }

    pub fn visible_count(&self) -> usize {
        self.visible_sections()
            .iter()
            .map(|section| section.entries.len())
            .sum()
    }

    pub fn set_search_text(&mut self, text: &str) -> FilterCriteria {
        self.selection.set_search_text(text)
    }

    pub fn toggle_criterion(&mut self, kind: CriterionKind, value: &str) -> FilterCriteria {
        self.selection.toggle_criterion(kind, value)
    }

    pub fn reset_criteria(&mut self) -> FilterCriteria {
        self.selection.reset_criteria()
    }

    pub fn select_language(&mut self, language: &str) {
        self.selection.select_language(language);
    }

    /// Select a country for the detail view by its code
    pub fn select_country(&mut self, code: &str) -> Option<&CountryRecord> {
        let record = self.catalog.find_by_code(code)?;
        self.selected_country = Some(record.country_code.clone());
        Some(record)
    }

    /// Header line with file name and visible count
    pub fn get_title(&self) -> String {
        let file_name = self
            .current_file
            .as_ref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or("no data");

        format!(
            "&explore. - {} ({} of {} countries)",
            file_name,
            self.visible_count(),
            self.catalog.len()
        )
    }
}
