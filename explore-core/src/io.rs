use crate::error::LoadError;
use crate::models::{CountryRecord, RawCountry};
use crate::normalize::normalize_all;
use crate::schema_validation::{source_schema, validate_against_schema};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Parse a country list document.
/// Elements that are not JSON objects are skipped like any malformed record.
pub fn parse_countries(json: &str) -> Result<Vec<RawCountry>, LoadError> {
    let document: Value = serde_json::from_str(json)?;
    validate_against_schema(&source_schema(), &document).map_err(LoadError::NonConforming)?;

    let Value::Array(elements) = document else {
        return Ok(Vec::new());
    };

    let total = elements.len();
    let countries: Vec<RawCountry> = elements
        .into_iter()
        .filter_map(|element| serde_json::from_value(element).ok())
        .collect();

    if countries.len() < total {
        log::debug!("skipped {} non-object elements", total - countries.len());
    }

    Ok(countries)
}

/// Load raw country records from a JSON file
pub fn load_countries<P: AsRef<Path>>(path: P) -> Result<Vec<RawCountry>, LoadError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let countries = parse_countries(&contents)?;
    log::info!("read {} country records from {}", countries.len(), path.display());
    Ok(countries)
}

/// Load and normalize country records from a JSON file
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<CountryRecord>, LoadError> {
    load_countries(path).map(normalize_all)
}
