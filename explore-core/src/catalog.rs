use crate::error::LoadError;
use crate::filtering::get_sections;
use crate::grouping::group_into_sections;
use crate::models::{CountryRecord, FilterCriteria, RawCountry, Section};
use crate::normalize::normalize_all;
use crate::validation::validate_records;
use std::borrow::Cow;

/// The baseline sectioned dataset, derived once per load.
/// Every view is computed from it; it is never modified in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    baseline: Vec<Section>,
}

impl Catalog {
    /// A catalog with no countries, used when the source is unavailable
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<CountryRecord>) -> Self {
        if let Err(findings) = validate_records(&records) {
            for finding in &findings {
                log::warn!("{}", finding);
            }
        }

        Self {
            baseline: group_into_sections(records),
        }
    }

    pub fn from_raw(raws: Vec<RawCountry>) -> Self {
        Self::from_records(normalize_all(raws))
    }

    /// Build from the outcome of a load.
    /// A failed load becomes an empty catalog; the error is handed back so
    /// the caller can report it.
    pub fn from_source(source: Result<Vec<RawCountry>, LoadError>) -> (Self, Option<LoadError>) {
        match source {
            Ok(raws) => (Self::from_raw(raws), None),
            Err(err) => {
                log::warn!("country source unavailable: {}", err);
                (Self::empty(), Some(err))
            }
        }
    }

    /// Sections visible under the given criteria
    pub fn sections(&self, criteria: &FilterCriteria) -> Cow<'_, [Section]> {
        get_sections(&self.baseline, criteria)
    }

    pub fn baseline(&self) -> &[Section] {
        &self.baseline
    }

    /// Look up a country by its three-letter code, ignoring case
    pub fn find_by_code(&self, code: &str) -> Option<&CountryRecord> {
        self.records()
            .find(|record| record.country_code.eq_ignore_ascii_case(code.trim()))
    }

    pub fn records(&self) -> impl Iterator<Item = &CountryRecord> {
        self.baseline.iter().flat_map(|section| section.entries.iter())
    }

    /// Number of countries in the baseline
    pub fn len(&self) -> usize {
        self.baseline.iter().map(|section| section.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.baseline.is_empty()
    }
}
