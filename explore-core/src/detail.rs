use crate::models::CountryRecord;
use std::collections::HashMap;

/// Shown wherever a value is absent or empty
pub const PLACEHOLDER: &str = "N/A";

/// One labelled line of the country detail view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
}

/// Build the detail fields for a country, in display order
pub fn detail_fields(record: &CountryRecord) -> Vec<DetailField> {
    let languages = values_in_code_order(&record.languages, |name| name.as_str());
    let currencies = values_in_code_order(&record.currencies, |currency| currency.name.as_str());

    vec![
        field("Population", format_population(record.population)),
        field("Region", record.region.clone()),
        field("Capital", record.capital.clone().unwrap_or_default()),
        field("Languages", languages.join(", ")),
        field("Currency", currencies.join(", ")),
        field("Time zone", record.timezones.first().cloned().unwrap_or_default()),
        field("Dialing code", record.dialing_code.clone()),
        field("Driving side", record.driving_side.clone().unwrap_or_default()),
    ]
}

/// Second line of a list row: the capital
pub fn list_subtitle(record: &CountryRecord) -> &str {
    record
        .capital
        .as_deref()
        .filter(|c| !c.is_empty())
        .unwrap_or(PLACEHOLDER)
}

/// Group digits in threes: 67391582 -> "67,391,582"
pub fn format_population(population: u64) -> String {
    let digits = population.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

fn field(label: &'static str, value: String) -> DetailField {
    let value = if value.trim().is_empty() {
        PLACEHOLDER.to_string()
    } else {
        value
    };
    DetailField { label, value }
}

fn values_in_code_order<'a, V>(
    map: &'a HashMap<String, V>,
    display: impl Fn(&'a V) -> &'a str,
) -> Vec<&'a str> {
    let mut codes: Vec<&String> = map.keys().collect();
    codes.sort();
    codes
        .into_iter()
        .filter_map(|code| map.get(code).map(&display))
        .filter(|value| !value.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Currency;
    use crate::test_support::record;
    use pretty_assertions::assert_eq;

    fn value<'a>(fields: &'a [DetailField], label: &str) -> &'a str {
        fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
            .unwrap()
    }

    #[test]
    fn test_format_population() {
        assert_eq!(format_population(0), "0");
        assert_eq!(format_population(999), "999");
        assert_eq!(format_population(1000), "1,000");
        assert_eq!(format_population(67391582), "67,391,582");
        assert_eq!(format_population(1402112000), "1,402,112,000");
    }

    #[test]
    fn test_absent_values_use_placeholder() {
        let fields = detail_fields(&record("Heard Island"));

        let labels: Vec<_> = fields.iter().map(|f| f.label).collect();
        assert_eq!(
            labels,
            [
                "Population",
                "Region",
                "Capital",
                "Languages",
                "Currency",
                "Time zone",
                "Dialing code",
                "Driving side"
            ]
        );
        assert_eq!(value(&fields, "Population"), "0");
        for field in &fields[1..] {
            assert_eq!(field.value, PLACEHOLDER, "{}", field.label);
        }
    }

    #[test]
    fn test_full_detail() {
        let mut switzerland = record("Switzerland");
        switzerland.population = 8654622;
        switzerland.region = "Europe".to_string();
        switzerland.capital = Some("Bern".to_string());
        switzerland.languages = HashMap::from([
            ("roh".to_string(), "Romansh".to_string()),
            ("fra".to_string(), "French".to_string()),
            ("gsw".to_string(), "Swiss German".to_string()),
            ("ita".to_string(), "Italian".to_string()),
        ]);
        switzerland.currencies = HashMap::from([(
            "CHF".to_string(),
            Currency {
                name: "Swiss franc".to_string(),
                symbol: "Fr.".to_string(),
            },
        )]);
        switzerland.timezones = vec!["UTC+01:00".to_string()];
        switzerland.dialing_code = "+41".to_string();
        switzerland.driving_side = Some("right".to_string());

        let fields = detail_fields(&switzerland);
        assert_eq!(value(&fields, "Population"), "8,654,622");
        assert_eq!(value(&fields, "Capital"), "Bern");
        assert_eq!(
            value(&fields, "Languages"),
            "French, Swiss German, Italian, Romansh"
        );
        assert_eq!(value(&fields, "Currency"), "Swiss franc");
        assert_eq!(value(&fields, "Time zone"), "UTC+01:00");
        assert_eq!(value(&fields, "Dialing code"), "+41");
        assert_eq!(value(&fields, "Driving side"), "right");
    }

    #[test]
    fn test_list_subtitle() {
        let mut peru = record("Peru");
        assert_eq!(list_subtitle(&peru), PLACEHOLDER);

        peru.capital = Some("Lima".to_string());
        assert_eq!(list_subtitle(&peru), "Lima");
    }
}
