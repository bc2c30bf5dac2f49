use crate::models::CountryRecord;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Check dataset-level invariants of normalized records.
/// Returns Ok(()) if clean, or Err(Vec<String>) with one message per finding.
/// Findings are diagnostics only; the dataset stays usable either way.
pub fn validate_records(records: &[CountryRecord]) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    let mut codes = HashSet::new();

    for (idx, record) in records.iter().enumerate() {
        let record_ref = format!("Record #{} ('{}')", idx + 1, record.common_name);

        if record.country_code.trim().is_empty() {
            errors.push(format!("{}: country code is missing", record_ref));
        } else if !codes.insert(record.country_code.as_str()) {
            errors.push(format!(
                "{}: duplicate country code '{}'",
                record_ref, record.country_code
            ));
        }

        validate_timezones(record, &record_ref, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// "UTC" or "UTC±HH:MM"
fn timezone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^UTC(?:[+-]\d{2}:\d{2})?$").unwrap())
}

pub fn validate_timezones(record: &CountryRecord, record_ref: &str, errors: &mut Vec<String>) {
    for timezone in &record.timezones {
        if !timezone_pattern().is_match(timezone) {
            errors.push(format!(
                "{}: unexpected timezone label '{}'",
                record_ref, timezone
            ));
        }
    }
}
