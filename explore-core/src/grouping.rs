use crate::models::{CountryRecord, Section};
use crate::sorting::{collation_key, sort_records};
use std::collections::HashMap;

/// Sort records by name and partition them into sections keyed by the
/// uppercased first character of the common name.
/// Every record lands in exactly one section.
pub fn group_into_sections(mut records: Vec<CountryRecord>) -> Vec<Section> {
    sort_records(&mut records);

    let mut groups: HashMap<String, Vec<CountryRecord>> = HashMap::new();
    for record in records {
        groups
            .entry(section_title(&record.common_name))
            .or_default()
            .push(record);
    }

    sorted_section_titles(&groups)
        .into_iter()
        .filter_map(|title| {
            groups
                .remove(&title)
                .map(|entries| Section { title, entries })
        })
        .collect()
}

/// Uppercased first character; non-letters are kept verbatim.
/// A letter whose uppercase form is more than one character ("ß") keeps
/// its original form so the title stays a single character.
pub fn section_title(name: &str) -> String {
    let Some(first) = name.chars().next() else {
        return String::new();
    };

    let mut upper = first.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single.to_string(),
        _ => first.to_string(),
    }
}

/// Get section titles in display order.
/// Titles that collate equally ("A" and "Å") are ordered by code point so
/// the result has no ties.
pub fn sorted_section_titles(groups: &HashMap<String, Vec<CountryRecord>>) -> Vec<String> {
    let mut titles: Vec<String> = groups.keys().cloned().collect();
    titles.sort_by(|a, b| {
        collation_key(a)
            .cmp(&collation_key(b))
            .then_with(|| a.cmp(b))
    });
    titles
}
