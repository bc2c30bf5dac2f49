use crate::models::CountryRecord;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Sort records by common name, locale-aware and case-insensitive.
/// Stable: records that collate equally keep their input order.
pub fn sort_records(records: &mut [CountryRecord]) {
    records.sort_by_cached_key(|record| collation_key(&record.common_name));
}

/// Compare two names the way a reader expects them alphabetized:
/// accents and case are ignored, so "Åland Islands" sorts next to "Albania"
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a).cmp(&collation_key(b))
}

/// Build the collation key for a name
/// - Unicode normalization (NFD) so accented letters split into base + mark
/// - Drop the combining marks
/// - Case fold through uppercase, so "ß" becomes "ss"
pub fn collation_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_uppercase)
        .flat_map(char::to_lowercase)
        .collect()
}
