use std::collections::BTreeMap;

use crate::domain::items::RevenueItem;

#[derive(Debug, Clone, PartialEq)]
pub struct DayConfig {
    /// Display and grouping key, unique within a scenario.
    pub name: String,
    pub enabled: bool,
    pub duration_hours: f64,
    /// persona_id to headcount.
    pub visitor_composition: BTreeMap<String, u32>,
    /// module_id to variant_id. Only daily/both modules are consulted.
    pub selected_modules: BTreeMap<String, String>,
    pub day_specific_revenue: Vec<RevenueItem>,
}

impl DayConfig {
    pub fn total_visitors(&self) -> u32 {
        self.visitor_composition.values().sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub days: Vec<DayConfig>,
    /// module_id to variant_id. Only global/both modules are consulted.
    pub global_modules: BTreeMap<String, String>,
    /// Named override values referenced by cost item multiplier keys.
    pub global_parameters: BTreeMap<String, f64>,
    /// Event-wide revenue items, e.g. sponsoring.
    pub revenue_items: Vec<RevenueItem>,
}
