// Public modules
pub mod catalog;
pub mod detail;
pub mod error;
pub mod filtering;
pub mod grouping;
pub mod io;
pub mod models;
pub mod normalize;
pub mod options;
pub mod schema_validation;
pub mod selection;
pub mod sorting;
pub mod validation;

#[cfg(test)]
mod test_support;

// Re-export commonly used types for convenience
pub use catalog::Catalog;
pub use detail::{detail_fields, format_population, list_subtitle, DetailField, PLACEHOLDER};
pub use error::LoadError;
pub use filtering::{apply_filters, get_sections, has_filters, matches_filters};
pub use grouping::{group_into_sections, section_title, sorted_section_titles};
pub use io::{load_countries, load_records, parse_countries};
pub use models::{
    CountryRecord, Currency, FilterCriteria, RawCountry, Section, SelectionState,
};
pub use normalize::{dialing_code, normalize_all, normalize_record};
pub use options::{CONTINENTS, LANGUAGES, TIMEZONES};
pub use schema_validation::{source_schema, validate_against_schema};
pub use selection::{toggle, CriterionKind};
pub use sorting::{collation_key, compare_names, sort_records};
pub use validation::validate_records;
