use crate::models::{CountryRecord, Currency, RawCountry, RawIdd};

/// Normalize raw records, silently dropping the ones without a common name.
/// Relative order of the kept records is preserved.
pub fn normalize_all(raws: Vec<RawCountry>) -> Vec<CountryRecord> {
    let total = raws.len();
    let records: Vec<CountryRecord> = raws.into_iter().filter_map(normalize_record).collect();

    if records.len() < total {
        log::debug!(
            "dropped {} of {} records without a common name",
            total - records.len(),
            total
        );
    }

    records
}

/// Turn one raw record into a fully defined `CountryRecord`.
/// Returns `None` only when `name.common` is missing or empty.
/// Whitespace-only names are kept as they are.
pub fn normalize_record(raw: RawCountry) -> Option<CountryRecord> {
    let name = raw.name.unwrap_or_default();
    let common_name = name.common.filter(|n| !n.is_empty())?;

    let flags = raw.flags.unwrap_or_default();
    let flag_image_url = flags.png.or(flags.svg).unwrap_or_default();

    let currencies = raw
        .currencies
        .unwrap_or_default()
        .into_iter()
        .map(|(code, currency)| {
            (
                code,
                Currency {
                    name: currency.name.unwrap_or_default(),
                    symbol: currency.symbol.unwrap_or_default(),
                },
            )
        })
        .collect();

    Some(CountryRecord {
        common_name,
        official_name: name.official.unwrap_or_default(),
        country_code: raw.cca3.unwrap_or_default(),
        capital: raw.capital.and_then(|c| c.into_iter().next()),
        population: raw.population.unwrap_or(0),
        region: raw.region.unwrap_or_default(),
        continents: raw.continents.unwrap_or_default(),
        flag_image_url,
        languages: raw.languages.unwrap_or_default(),
        currencies,
        timezones: raw.timezones.unwrap_or_default(),
        dialing_code: dialing_code(raw.idd.as_ref()),
        driving_side: raw.car.and_then(|car| car.side),
    })
}

/// Root followed by the first suffix, e.g. "+3" + "3" = "+33"
pub fn dialing_code(idd: Option<&RawIdd>) -> String {
    let Some(idd) = idd else {
        return String::new();
    };

    let root = idd.root.as_deref().unwrap_or("");
    let suffix = idd
        .suffixes
        .as_ref()
        .and_then(|s| s.first())
        .map(String::as_str)
        .unwrap_or("");

    format!("{}{}", root, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawCountry {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_full_record() {
        let record = normalize_record(raw(json!({
            "name": {"common": "France", "official": "French Republic"},
            "cca3": "FRA",
            "capital": ["Paris"],
            "population": 67391582,
            "region": "Europe",
            "continents": ["Europe"],
            "flags": {"png": "https://flagcdn.com/w320/fr.png", "svg": "https://flagcdn.com/fr.svg"},
            "languages": {"fra": "French"},
            "currencies": {"EUR": {"name": "Euro", "symbol": "€"}},
            "timezones": ["UTC-10:00", "UTC+01:00"],
            "idd": {"root": "+3", "suffixes": ["3"]},
            "car": {"side": "right"}
        })))
        .unwrap();

        assert_eq!(record.common_name, "France");
        assert_eq!(record.official_name, "French Republic");
        assert_eq!(record.country_code, "FRA");
        assert_eq!(record.capital.as_deref(), Some("Paris"));
        assert_eq!(record.population, 67391582);
        assert_eq!(record.flag_image_url, "https://flagcdn.com/w320/fr.png");
        assert_eq!(record.languages.get("fra").map(String::as_str), Some("French"));
        assert_eq!(
            record.currencies.get("EUR"),
            Some(&Currency {
                name: "Euro".to_string(),
                symbol: "€".to_string()
            })
        );
        assert_eq!(record.timezones, ["UTC-10:00", "UTC+01:00"]);
        assert_eq!(record.dialing_code, "+33");
        assert_eq!(record.driving_side.as_deref(), Some("right"));
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let record = normalize_record(raw(json!({"name": {"common": "Bouvet Island"}}))).unwrap();

        assert_eq!(record.official_name, "");
        assert_eq!(record.country_code, "");
        assert!(record.capital.is_none());
        assert_eq!(record.population, 0);
        assert!(record.continents.is_empty());
        assert!(record.languages.is_empty());
        assert!(record.currencies.is_empty());
        assert!(record.timezones.is_empty());
        assert_eq!(record.dialing_code, "");
        assert!(record.driving_side.is_none());
    }

    #[test]
    fn test_record_without_common_name_is_dropped() {
        assert!(normalize_record(raw(json!({"name": {}, "cca3": "XXX"}))).is_none());
        assert!(normalize_record(raw(json!({"cca3": "XXX"}))).is_none());
        assert!(normalize_record(raw(json!({"name": {"common": ""}}))).is_none());
    }

    #[test]
    fn test_whitespace_name_is_kept() {
        let records = normalize_all(vec![
            raw(json!({"name": {"common": "   "}})),
            raw(json!({"name": {"common": "Chad"}})),
        ]);

        let names: Vec<_> = records.iter().map(|r| r.common_name.as_str()).collect();
        assert_eq!(names, ["   ", "Chad"]);
    }

    #[test]
    fn test_normalize_all_keeps_order() {
        let records = normalize_all(vec![
            raw(json!({"name": {"common": "Togo"}})),
            raw(json!({"name": {}})),
            raw(json!({"name": {"common": "Benin"}})),
        ]);

        let names: Vec<_> = records.iter().map(|r| r.common_name.as_str()).collect();
        assert_eq!(names, ["Togo", "Benin"]);
    }

    #[test]
    fn test_dialing_code_variants() {
        let idd = |v| serde_json::from_value::<RawIdd>(v).unwrap();

        assert_eq!(dialing_code(None), "");
        assert_eq!(dialing_code(Some(&idd(json!({"root": "+1"})))), "+1");
        assert_eq!(
            dialing_code(Some(&idd(json!({"root": "+1", "suffixes": ["242", "246"]})))),
            "+1242"
        );
        assert_eq!(dialing_code(Some(&idd(json!({"suffixes": ["7"]})))), "7");
        assert_eq!(dialing_code(Some(&idd(json!({"root": "+7", "suffixes": []})))), "+7");
    }

    #[test]
    fn test_svg_flag_used_when_png_missing() {
        let record = normalize_record(raw(json!({
            "name": {"common": "Nepal"},
            "flags": {"svg": "https://flagcdn.com/np.svg"}
        })))
        .unwrap();

        assert_eq!(record.flag_image_url, "https://flagcdn.com/np.svg");
    }
}
