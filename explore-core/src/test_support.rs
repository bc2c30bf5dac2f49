use crate::grouping::group_into_sections;
use crate::models::{CountryRecord, Section};
use std::collections::HashMap;

/// A record with only a name; the code is the first three letters uppercased
pub fn record(name: &str) -> CountryRecord {
    CountryRecord {
        common_name: name.to_string(),
        official_name: String::new(),
        country_code: name.chars().take(3).collect::<String>().to_uppercase(),
        capital: None,
        population: 0,
        region: String::new(),
        continents: Vec::new(),
        flag_image_url: String::new(),
        languages: HashMap::new(),
        currencies: HashMap::new(),
        timezones: Vec::new(),
        dialing_code: String::new(),
        driving_side: None,
    }
}

pub fn country(name: &str, continents: &[&str], timezones: &[&str]) -> CountryRecord {
    CountryRecord {
        continents: continents.iter().map(|c| c.to_string()).collect(),
        timezones: timezones.iter().map(|t| t.to_string()).collect(),
        ..record(name)
    }
}

/// A small baseline covering several continents, timezones and sections
pub fn sample_baseline() -> Vec<Section> {
    group_into_sections(vec![
        country("Canada", &["North America"], &["UTC-05:00", "UTC-04:00"]),
        country("France", &["Europe"], &["UTC+01:00"]),
        country("Chile", &["South America"], &["UTC-04:00", "UTC-06:00"]),
        country("Finland", &["Europe"], &["UTC+02:00"]),
        country("Egypt", &["Africa"], &["UTC+02:00"]),
        country("Russia", &["Europe", "Asia"], &["UTC+03:00", "UTC+12:00"]),
        country("Antarctica", &[], &[]),
        country("Turkey", &["Asia", "Europe"], &["UTC+03:00"]),
    ])
}
