use colored::Colorize;
use explore_core::{
    detail_fields, list_subtitle, CountryRecord, CriterionKind, Section, SelectionState,
    CONTINENTS, LANGUAGES, TIMEZONES,
};

/// Format sections as a lettered list, one row per country
pub fn format_sections(sections: &[Section]) -> String {
    let mut lines = Vec::new();

    for section in sections {
        lines.push(section.title.bold().to_string());
        for record in &section.entries {
            lines.push(format!(
                "  {:<40} {} {}",
                record.common_name,
                record.country_code.dimmed(),
                list_subtitle(record)
            ));
        }
    }

    lines.join("\n")
}

/// Format the detail view of one country
pub fn format_detail(record: &CountryRecord) -> String {
    let mut lines = vec![record.common_name.bold().to_string()];

    if !record.official_name.is_empty() && record.official_name != record.common_name {
        lines.push(record.official_name.italic().to_string());
    }
    if !record.flag_image_url.is_empty() {
        lines.push(format!("Flag: {}", record.flag_image_url.dimmed()));
    }
    lines.push(String::new());

    lines.extend(
        detail_fields(record)
            .into_iter()
            .map(|field| format!("{}: {}", field.label.dimmed(), field.value)),
    );

    lines.join("\n")
}

/// Summarize the active criteria, e.g. `Search: "ma"; Continent: Africa OR Asia`
pub fn format_active_filters(selection: &SelectionState) -> String {
    let criteria = &selection.criteria;
    let mut filter_parts = Vec::new();

    if !criteria.search_text.is_empty() {
        filter_parts.push(format!("Search: \"{}\"", criteria.search_text));
    }
    for kind in [CriterionKind::Continent, CriterionKind::Timezone] {
        let values = criteria.values(kind);
        if !values.is_empty() {
            let joined: Vec<&str> = values.iter().map(String::as_str).collect();
            filter_parts.push(format!("{}: {}", kind.label(), joined.join(" OR ")));
        }
    }
    if let Some(language) = &selection.language {
        filter_parts.push(format!("Language: {}", language));
    }

    filter_parts.join("; ")
}

/// Format the picker choices with the current selection marked
pub fn format_options(selection: &SelectionState) -> String {
    let mut lines = Vec::new();

    let groups = [
        (CriterionKind::Continent, CONTINENTS),
        (CriterionKind::Timezone, TIMEZONES),
    ];
    for (kind, choices) in groups {
        lines.push(kind.label().bold().to_string());
        for choice in choices {
            let marker = if selection.is_selected(kind, choice) { "[x]" } else { "[ ]" };
            lines.push(format!("  {} {}", marker, choice));
        }
    }

    lines.push("Languages".bold().to_string());
    for language in LANGUAGES {
        let marker = if selection.language.as_deref() == Some(*language) { "(*)" } else { "( )" };
        lines.push(format!("  {} {}", marker, language));
    }

    lines.join("\n")
}
