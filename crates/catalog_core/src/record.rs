//! Wire shapes of the species API.
//!
//! The API omits and nulls fields freely and sends some of them either as a
//! scalar or as a sequence, so loose fields stay `serde_json::Value` here and
//! are only interpreted by [`crate::normalize_detail`].

use serde::Deserialize;
use serde_json::Value;

/// `GET /species-list` body.
///
/// Counters are kept loose: the API has been seen sending them as numbers,
/// numeric strings or `null`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct RawListResponse {
    pub data: Value,
    pub last_page: Value,
    /// Index of the last item delivered so far.
    pub to: Value,
    pub total: Value,
}

impl RawListResponse {
    /// Object entries of `data`; anything else in the collection is dropped.
    pub fn summaries(&self) -> Vec<RawPlantSummary> {
        self.data
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter(|item| item.is_object())
                    .filter_map(|item| serde_json::from_value(item.clone()).ok())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn last_page(&self) -> Option<u64> {
        count(&self.last_page)
    }

    pub fn to(&self) -> Option<u64> {
        count(&self.to)
    }

    pub fn total(&self) -> Option<u64> {
        count(&self.total)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct RawPlantSummary {
    pub id: Value,
    pub common_name: Value,
    pub scientific_name: Value,
    pub default_image: Value,
}

/// Non-negative whole number from a number or numeric string.
pub fn count(value: &Value) -> Option<u64> {
    match value {
        Value::Number(number) => number.as_u64().or_else(|| {
            number
                .as_f64()
                .filter(|float| float.is_finite() && *float >= 0.0)
                .map(|float| float as u64)
        }),
        Value::String(text) => {
            let text = text.trim();
            text.parse::<u64>().ok().or_else(|| {
                text.parse::<f64>()
                    .ok()
                    .filter(|float| float.is_finite() && *float >= 0.0)
                    .map(|float| float as u64)
            })
        }
        _ => None,
    }
}

/// `GET /species/details/{id}` body.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct RawPlantDetail {
    pub id: Value,
    pub common_name: Value,
    pub scientific_name: Value,
    pub description: Value,
    pub cycle: Value,
    #[serde(rename = "type")]
    pub plant_type: Value,
    pub hardiness: Value,
    pub growth_rate: Value,
    pub watering: Value,
    pub sunlight: Value,
    pub care_level: Value,
    pub dimension: Value,
    pub dimensions: Value,
    pub attracts: Value,
    pub propagation: Value,
    pub pruning_month: Value,
    pub pruning_count: Value,
    pub soil: Value,
    pub pest_susceptibility: Value,
    pub disease_susceptibility: Value,
    pub poisonous_to_humans: Value,
    pub poisonous_to_pets: Value,
    pub edible_leaf: Value,
    pub edible_fruit: Value,
    pub default_image: Value,
}

pub fn decode_list(body: Value) -> Result<RawListResponse, serde_json::Error> {
    serde_json::from_value(body)
}

/// Decodes a detail body; `null` and `{}` mean the plant was not found.
pub fn decode_detail(body: Value) -> Result<Option<RawPlantDetail>, serde_json::Error> {
    match body {
        Value::Null => Ok(None),
        Value::Object(ref fields) if fields.is_empty() => Ok(None),
        other => serde_json::from_value(other).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_tolerates_missing_and_null_counters() {
        let raw = decode_list(json!({ "data": [], "to": null })).unwrap();
        assert!(raw.summaries().is_empty());
        assert_eq!(raw.to(), None);
        assert_eq!(raw.total(), None);
        assert_eq!(raw.last_page(), None);
    }

    #[test]
    fn counters_accept_numeric_strings_and_floats() {
        let raw = decode_list(json!({ "last_page": "3", "to": 20.0, "total": " 60 " })).unwrap();
        assert_eq!(raw.last_page(), Some(3));
        assert_eq!(raw.to(), Some(20));
        assert_eq!(raw.total(), Some(60));
        assert_eq!(count(&json!(-1)), None);
        assert_eq!(count(&json!("many")), None);
    }

    #[test]
    fn non_object_items_are_dropped() {
        let raw = decode_list(json!({ "data": [{ "id": 1 }, null, 7, { "id": null }] })).unwrap();
        let summaries = raw.summaries();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[1].id, Value::Null);
    }

    #[test]
    fn data_that_is_not_a_list_yields_no_items() {
        let raw = decode_list(json!({ "data": "nothing" })).unwrap();
        assert!(raw.summaries().is_empty());
    }

    #[test]
    fn detail_empty_payloads_are_not_found() {
        assert!(decode_detail(Value::Null).unwrap().is_none());
        assert!(decode_detail(json!({})).unwrap().is_none());
        assert!(decode_detail(json!("nope")).is_err());
    }

    #[test]
    fn detail_keeps_loose_fields_untouched() {
        let raw = decode_detail(json!({ "id": 7, "type": "tree", "sunlight": "full sun" }))
            .unwrap()
            .unwrap();
        assert_eq!(raw.plant_type, json!("tree"));
        assert_eq!(raw.sunlight, json!("full sun"));
        assert_eq!(raw.watering, Value::Null);
    }
}
