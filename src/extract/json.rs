//! JSON rendering of property records.

use crate::common::Result;
use crate::extract::record::ParagraphProperties;

/// Render records as a JSON array of objects keyed by field name.
///
/// Numbers and booleans keep their JSON types; fields without a value are
/// `null`. An empty slice gives an empty string.
pub fn to_json(records: &[ParagraphProperties], pretty: bool) -> Result<String> {
    if records.is_empty() {
        return Ok(String::new());
    }
    let json = if pretty {
        serde_json::to_string_pretty(records)?
    } else {
        serde_json::to_string(records)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::record::tests::sample;
    use crate::extract::record::{FIELD_COUNT, FIELD_NAMES};

    #[test]
    fn test_empty_input() {
        assert_eq!(to_json(&[], true).unwrap(), "");
    }

    #[test]
    fn test_records_keep_field_set() {
        let json = to_json(&[sample(), sample()], false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let records = value.as_array().unwrap();
        assert_eq!(records.len(), 2);

        let first = records[0].as_object().unwrap();
        assert_eq!(first.len(), FIELD_COUNT);
        assert!(FIELD_NAMES.iter().all(|name| first.contains_key(*name)));
        assert_eq!(first["ParaContent"], "it`s");
        assert_eq!(first["ParaLineSpace"], 1.15);
    }

    #[test]
    fn test_pretty_output_is_indented() {
        let json = to_json(&[sample()], true).unwrap();
        assert!(json.starts_with("[\n  {\n    \"ParaID\": 1,"));
    }
}
