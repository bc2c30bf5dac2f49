use crate::models::{CountryRecord, FilterCriteria, Section};
use std::borrow::Cow;

/// Filter the baseline for display.
/// With no active criteria the baseline is handed back as-is, without copying,
/// since this runs on every keystroke.
pub fn get_sections<'a>(baseline: &'a [Section], criteria: &FilterCriteria) -> Cow<'a, [Section]> {
    if has_filters(criteria) {
        Cow::Owned(apply_filters(baseline, criteria))
    } else {
        Cow::Borrowed(baseline)
    }
}

/// Apply criteria to every section, dropping sections left empty.
/// Section and entry order are preserved; nothing is re-sorted.
pub fn apply_filters(sections: &[Section], criteria: &FilterCriteria) -> Vec<Section> {
    let search = criteria.search_text.to_lowercase();

    sections
        .iter()
        .filter_map(|section| {
            let entries: Vec<CountryRecord> = section
                .entries
                .iter()
                .filter(|record| matches_lowered(record, criteria, &search))
                .cloned()
                .collect();

            if entries.is_empty() {
                None
            } else {
                Some(Section {
                    title: section.title.clone(),
                    entries,
                })
            }
        })
        .collect()
}

/// Check if a record matches the given criteria
/// AND logic between search text, continents and timezones
pub fn matches_filters(record: &CountryRecord, criteria: &FilterCriteria) -> bool {
    matches_lowered(record, criteria, &criteria.search_text.to_lowercase())
}

fn matches_lowered(record: &CountryRecord, criteria: &FilterCriteria, search: &str) -> bool {
    // Case-insensitive substring on the common name
    if !search.is_empty() && !record.common_name.to_lowercase().contains(search) {
        return false;
    }

    // Only the primary continent counts
    if !criteria.continents.is_empty() {
        let matches_continent = record
            .continents
            .first()
            .is_some_and(|continent| criteria.continents.contains(continent));

        if !matches_continent {
            return false;
        }
    }

    // Any of the record's timezones may match (OR within timezones)
    if !criteria.timezones.is_empty() {
        let matches_timezone = record
            .timezones
            .iter()
            .any(|tz| criteria.timezones.contains(tz));

        if !matches_timezone {
            return false;
        }
    }

    true
}

/// Check if any criterion is active
pub fn has_filters(criteria: &FilterCriteria) -> bool {
    !criteria.search_text.is_empty()
        || !criteria.continents.is_empty()
        || !criteria.timezones.is_empty()
}
