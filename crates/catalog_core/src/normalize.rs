//! Field normalization: sparse species records to fully-defaulted view-models.
//!
//! Every absence shape the API produces (`null`, missing key, blank string,
//! empty sequence) collapses into [`Field::Absent`], so renderers never need
//! their own presence checks.

use serde_json::Value;

use crate::record::{RawPlantDetail, RawPlantSummary};
use crate::{PlantId, PlantSummary};

pub const UNKNOWN_SCIENTIFIC_NAME: &str = "Unknown scientific name";
pub const UNNAMED_PLANT: &str = "Unnamed";
const CARE_SUBJECT_FALLBACK: &str = "This plant";

/// A normalized optional value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field<T> {
    Present(T),
    Absent,
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Absent
    }
}

impl<T> Field<T> {
    pub fn is_present(&self) -> bool {
        matches!(self, Field::Present(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Field::Present(value) => Some(value),
            Field::Absent => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Field::Present(value) => Some(value),
            Field::Absent => None,
        }
    }
}

impl<T> From<Option<T>> for Field<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Field::Present(value),
            None => Field::Absent,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HardinessRange {
    pub min: String,
    pub max: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PruningCount {
    pub amount: String,
    pub interval: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PruningSchedule {
    pub months: Vec<String>,
    pub count: Option<PruningCount>,
}

impl PruningSchedule {
    /// "1 yearly", or "regularly" when the API gives no count.
    pub fn frequency(&self) -> String {
        match &self.count {
            Some(count) => format!("{} {}", count.amount, count.interval),
            None => "regularly".to_string(),
        }
    }
}

/// Safety and edibility notes, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    PoisonousToHumans,
    PoisonousToPets,
    EdibleLeaf,
    EdibleFruit,
}

impl Advisory {
    pub fn is_warning(self) -> bool {
        matches!(self, Advisory::PoisonousToHumans | Advisory::PoisonousToPets)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantView {
    pub id: PlantId,
    pub common_name: Field<String>,
    pub scientific_name: String,
    pub image_url: Field<String>,
    pub description: Field<String>,
    pub cycle: Field<String>,
    pub plant_type: Field<String>,
    pub hardiness: Field<HardinessRange>,
    pub growth_rate: Field<String>,
    pub watering: Field<String>,
    pub sunlight: Field<Vec<String>>,
    pub care_level: Field<String>,
    pub dimension: Field<String>,
    pub attracts: Field<Vec<String>>,
    pub propagation: Field<Vec<String>>,
    pub pruning: Field<PruningSchedule>,
    pub soil: Field<Vec<String>>,
    pub pest_susceptibility: Field<Vec<String>>,
    pub disease_susceptibility: Field<Vec<String>>,
    pub advisories: Vec<Advisory>,
}

impl PlantView {
    pub fn title(&self) -> &str {
        self.common_name
            .value()
            .map(String::as_str)
            .unwrap_or(UNNAMED_PLANT)
    }

    /// Subject used in care sentences ("This plant should be watered ...").
    pub fn care_subject(&self) -> &str {
        self.common_name
            .value()
            .map(String::as_str)
            .unwrap_or(CARE_SUBJECT_FALLBACK)
    }

    pub fn has_advisory(&self, advisory: Advisory) -> bool {
        self.advisories.contains(&advisory)
    }

    pub fn warnings(&self) -> impl Iterator<Item = Advisory> + '_ {
        self.advisories
            .iter()
            .copied()
            .filter(|advisory| advisory.is_warning())
    }
}

/// Whether a raw value carries anything worth showing.
pub fn present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(text) => !text.trim().is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Bool(_) | Value::Number(_) | Value::Object(_) => true,
    }
}

/// Display string of a present scalar; sequences and objects have none.
pub fn display_scalar(value: &Value) -> Option<String> {
    if !present(value) {
        return None;
    }
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

/// First element of a sequence, or the scalar itself.
pub fn first_display(value: &Value) -> Option<String> {
    match value {
        Value::Array(items) => items.first().and_then(display_scalar),
        other => display_scalar(other),
    }
}

/// Present elements of a sequence; a lone scalar counts as a one-element list.
pub fn display_list(value: &Value) -> Field<Vec<String>> {
    let items: Vec<String> = match value {
        Value::Array(items) => items.iter().filter_map(display_scalar).collect(),
        other => display_scalar(other).into_iter().collect(),
    };
    if items.is_empty() {
        Field::Absent
    } else {
        Field::Present(items)
    }
}

/// Flags arrive as `0`/`1`; `true` is accepted as well.
pub fn is_flag_set(value: &Value) -> bool {
    match value {
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64() == Some(1.0),
        _ => false,
    }
}

fn scalar(value: &Value) -> Field<String> {
    display_scalar(value).into()
}

fn nested(value: &Value, key: &str) -> Field<String> {
    value.get(key).map_or(Field::Absent, scalar)
}

fn hardiness(value: &Value) -> Field<HardinessRange> {
    match (nested(value, "min"), nested(value, "max")) {
        (Field::Present(min), Field::Present(max)) => Field::Present(HardinessRange { min, max }),
        _ => Field::Absent,
    }
}

fn pruning(months: &Value, count: &Value) -> Field<PruningSchedule> {
    let Field::Present(months) = display_list(months) else {
        return Field::Absent;
    };
    let count = match (nested(count, "amount"), nested(count, "interval")) {
        (Field::Present(amount), Field::Present(interval)) => {
            Some(PruningCount { amount, interval })
        }
        _ => None,
    };
    Field::Present(PruningSchedule { months, count })
}

fn dimension(legacy: &Value, structured: &Value) -> Field<String> {
    if let Field::Present(text) = scalar(legacy) {
        return Field::Present(text);
    }
    let structured = match structured {
        Value::Array(items) => items.first().unwrap_or(&Value::Null),
        other => other,
    };
    match (
        nested(structured, "min_value"),
        nested(structured, "max_value"),
    ) {
        (Field::Present(min), Field::Present(max)) => {
            let unit = nested(structured, "unit").into_option().unwrap_or_default();
            Field::Present(format!("{min} - {max} {unit}").trim_end().to_string())
        }
        _ => Field::Absent,
    }
}

fn advisories(raw: &RawPlantDetail) -> Vec<Advisory> {
    [
        (&raw.poisonous_to_humans, Advisory::PoisonousToHumans),
        (&raw.poisonous_to_pets, Advisory::PoisonousToPets),
        (&raw.edible_leaf, Advisory::EdibleLeaf),
        (&raw.edible_fruit, Advisory::EdibleFruit),
    ]
    .into_iter()
    .filter(|(value, _)| is_flag_set(value))
    .map(|(_, advisory)| advisory)
    .collect()
}

fn record_id(value: &Value) -> Option<PlantId> {
    match value {
        Value::Number(number) => number.as_u64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// Builds the detail view-model. `requested_id` stands in when the record
/// carries no usable identifier.
pub fn normalize_detail(raw: &RawPlantDetail, requested_id: PlantId) -> PlantView {
    PlantView {
        id: record_id(&raw.id).unwrap_or(requested_id),
        common_name: scalar(&raw.common_name),
        scientific_name: first_display(&raw.scientific_name)
            .unwrap_or_else(|| UNKNOWN_SCIENTIFIC_NAME.to_string()),
        image_url: nested(&raw.default_image, "original_url"),
        description: scalar(&raw.description),
        cycle: scalar(&raw.cycle),
        plant_type: scalar(&raw.plant_type),
        hardiness: hardiness(&raw.hardiness),
        growth_rate: scalar(&raw.growth_rate),
        watering: scalar(&raw.watering),
        sunlight: display_list(&raw.sunlight),
        care_level: scalar(&raw.care_level),
        dimension: dimension(&raw.dimension, &raw.dimensions),
        attracts: display_list(&raw.attracts),
        propagation: display_list(&raw.propagation),
        pruning: pruning(&raw.pruning_month, &raw.pruning_count),
        soil: display_list(&raw.soil),
        pest_susceptibility: display_list(&raw.pest_susceptibility),
        disease_susceptibility: display_list(&raw.disease_susceptibility),
        advisories: advisories(raw),
    }
}

/// `None` when the entry has no usable id, since it could not be opened.
pub fn normalize_summary(raw: &RawPlantSummary) -> Option<PlantSummary> {
    Some(PlantSummary {
        id: record_id(&raw.id)?,
        common_name: display_scalar(&raw.common_name).unwrap_or_else(|| UNNAMED_PLANT.to_string()),
        scientific_name: first_display(&raw.scientific_name)
            .unwrap_or_else(|| UNKNOWN_SCIENTIFIC_NAME.to_string()),
        thumbnail_url: nested(&raw.default_image, "thumbnail").into_option(),
    })
}
