use std::collections::BTreeMap;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::scenario::{DayConfig, Scenario};
use crate::services::catalog_json::{
    CatalogJsonError, RevenueItemRecord, revenue_item_from_record, revenue_item_to_record,
};

#[derive(Error, Debug)]
pub enum ScenarioJsonError {
    #[error("failed to read scenario file: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse scenario json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("missing scenario id")]
    MissingScenarioId,
    #[error("missing day name")]
    MissingDayName,
    #[error("duplicate day name: {0}")]
    DuplicateDayName(String),
    #[error("negative duration for day {0}")]
    NegativeDuration(String),
    #[error(transparent)]
    Item(#[from] CatalogJsonError),
}

#[derive(Serialize, Deserialize)]
struct ScenarioRecord {
    id: String,
    name: String,
    description: Option<String>,
    days: Vec<DayRecord>,
    #[serde(default)]
    global_modules: BTreeMap<String, String>,
    #[serde(default)]
    global_parameters: BTreeMap<String, f64>,
    #[serde(default)]
    revenue_items: Vec<RevenueItemRecord>,
}

#[derive(Serialize, Deserialize)]
struct DayRecord {
    name: String,
    enabled: Option<bool>,
    duration_hours: f64,
    #[serde(default)]
    visitor_composition: BTreeMap<String, u32>,
    #[serde(default)]
    selected_modules: BTreeMap<String, String>,
    #[serde(default)]
    day_specific_revenue: Vec<RevenueItemRecord>,
}

pub fn load_scenario_from_json_file(path: &str) -> Result<Scenario, ScenarioJsonError> {
    let contents = std::fs::read_to_string(path)?;
    deserialize_scenario_from_json_str(&contents)
}

pub fn deserialize_scenario_from_json_str(input: &str) -> Result<Scenario, ScenarioJsonError> {
    let record: ScenarioRecord = serde_json::from_str(input)?;
    if record.id.trim().is_empty() {
        return Err(ScenarioJsonError::MissingScenarioId);
    }

    let mut days = Vec::with_capacity(record.days.len());
    for day in record.days {
        if day.name.trim().is_empty() {
            return Err(ScenarioJsonError::MissingDayName);
        }
        if days.iter().any(|existing: &DayConfig| existing.name == day.name) {
            return Err(ScenarioJsonError::DuplicateDayName(day.name));
        }
        if day.duration_hours < 0.0 {
            return Err(ScenarioJsonError::NegativeDuration(day.name));
        }
        days.push(DayConfig {
            name: day.name,
            enabled: day.enabled.unwrap_or(true),
            duration_hours: day.duration_hours,
            visitor_composition: day.visitor_composition,
            selected_modules: day.selected_modules,
            day_specific_revenue: day
                .day_specific_revenue
                .into_iter()
                .map(revenue_item_from_record)
                .collect::<Result<_, _>>()?,
        });
    }

    Ok(Scenario {
        id: record.id,
        name: record.name,
        description: record.description,
        days,
        global_modules: record.global_modules,
        global_parameters: record.global_parameters,
        revenue_items: record
            .revenue_items
            .into_iter()
            .map(revenue_item_from_record)
            .collect::<Result<_, _>>()?,
    })
}

/// Writes a scenario back in its persisted shape. Reloading the output and
/// recalculating against the same catalog reproduces the identical result.
pub fn serialize_scenario_to_json<W: Write>(
    writer: &mut W,
    scenario: &Scenario,
) -> io::Result<()> {
    let record = scenario_to_record(scenario);
    let json = serde_json::to_string_pretty(&record)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    writer.write_all(json.as_bytes())
}

fn scenario_to_record(scenario: &Scenario) -> ScenarioRecord {
    ScenarioRecord {
        id: scenario.id.clone(),
        name: scenario.name.clone(),
        description: scenario.description.clone(),
        days: scenario.days.iter().map(day_to_record).collect(),
        global_modules: scenario.global_modules.clone(),
        global_parameters: scenario.global_parameters.clone(),
        revenue_items: scenario
            .revenue_items
            .iter()
            .map(revenue_item_to_record)
            .collect(),
    }
}

fn day_to_record(day: &DayConfig) -> DayRecord {
    DayRecord {
        name: day.name.clone(),
        enabled: Some(day.enabled),
        duration_hours: day.duration_hours,
        visitor_composition: day.visitor_composition.clone(),
        selected_modules: day.selected_modules.clone(),
        day_specific_revenue: day
            .day_specific_revenue
            .iter()
            .map(revenue_item_to_record)
            .collect(),
    }
}
