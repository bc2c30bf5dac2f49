use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeSet, HashMap};

/// One country object as delivered by the countries endpoint.
///
/// Every field is optional and tolerant of type mismatches: a value of the
/// wrong JSON type deserializes to `None` instead of failing the record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawCountry {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<RawName>,
    #[serde(default, deserialize_with = "lenient")]
    pub cca3: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub capital: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub population: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub region: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub continents: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub flags: Option<RawFlags>,
    #[serde(default, deserialize_with = "lenient")]
    pub languages: Option<HashMap<String, String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub currencies: Option<HashMap<String, RawCurrency>>,
    #[serde(default, deserialize_with = "lenient")]
    pub timezones: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub idd: Option<RawIdd>,
    #[serde(default, deserialize_with = "lenient")]
    pub car: Option<RawCar>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawName {
    #[serde(default, deserialize_with = "lenient")]
    pub common: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub official: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawFlags {
    #[serde(default, deserialize_with = "lenient")]
    pub png: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub svg: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawCurrency {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub symbol: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawIdd {
    #[serde(default, deserialize_with = "lenient")]
    pub root: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub suffixes: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawCar {
    #[serde(default, deserialize_with = "lenient")]
    pub side: Option<String>,
}

/// Deserialize into `T`, mapping any shape mismatch (including `null`) to `None`
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Normalized country record; every field is defined
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub common_name: String,
    pub official_name: String,
    pub country_code: String,
    pub capital: Option<String>,
    pub population: u64,
    pub region: String,
    pub continents: Vec<String>,
    pub flag_image_url: String,
    pub languages: HashMap<String, String>,
    pub currencies: HashMap<String, Currency>,
    pub timezones: Vec<String>,
    pub dialing_code: String,
    pub driving_side: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub name: String,
    pub symbol: String,
}

/// A letter-keyed group of records, sorted by common name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: String,
    pub entries: Vec<CountryRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search_text: String,
    pub continents: BTreeSet<String>,
    pub timezones: BTreeSet<String>,
}

/// What the user has picked: an informational language label plus the
/// criteria that drive the filter engine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub language: Option<String>,
    pub criteria: FilterCriteria,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mismatched_field_types_become_absent() {
        let raw: RawCountry = serde_json::from_value(json!({
            "name": {"common": "Chile", "official": 7},
            "population": "lots",
            "capital": "Santiago",
            "timezones": ["UTC-04:00", "UTC-06:00"],
            "idd": {"root": "+5", "suffixes": null}
        }))
        .unwrap();

        let name = raw.name.unwrap();
        assert_eq!(name.common.as_deref(), Some("Chile"));
        assert!(name.official.is_none());
        assert!(raw.population.is_none());
        assert!(raw.capital.is_none());
        assert_eq!(raw.timezones.unwrap().len(), 2);
        assert!(raw.idd.unwrap().suffixes.is_none());
    }

    #[test]
    fn test_unknown_fields_are_kept() {
        let raw: RawCountry = serde_json::from_value(json!({
            "name": {"common": "Peru"},
            "landlocked": false
        }))
        .unwrap();

        assert_eq!(raw.extra.get("landlocked"), Some(&json!(false)));
    }

    #[test]
    fn test_empty_object_deserializes() {
        let raw: RawCountry = serde_json::from_value(json!({})).unwrap();
        assert!(raw.name.is_none());
        assert!(raw.extra.is_empty());
    }
}
