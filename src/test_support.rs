use std::collections::BTreeMap;

use crate::domain::master_data::{Persona, Product};
use crate::domain::module::{Module, ModuleScope, ModuleVariant};
use crate::domain::scenario::{DayConfig, Scenario};

fn display_name(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

pub fn build_module(id: &str, scope: ModuleScope) -> Module {
    Module {
        id: id.to_string(),
        name: display_name(id),
        scope,
        variants: vec![ModuleVariant {
            id: "standard".to_string(),
            name: "Standard".to_string(),
            description: None,
            cost_items: Vec::new(),
            revenue_items: Vec::new(),
        }],
    }
}

pub fn build_product(id: &str, sales_price: f64, purchase_price: f64) -> Product {
    Product {
        id: id.to_string(),
        name: display_name(id),
        sales_price,
        purchase_price,
        unit: "unit".to_string(),
    }
}

pub fn build_persona(
    id: &str,
    consumption: &[(&str, f64)],
    adoption_rates: &[(&str, f64)],
) -> Persona {
    Persona {
        id: id.to_string(),
        name: display_name(id),
        description: None,
        consumption: consumption
            .iter()
            .map(|(product_id, quantity)| ((*product_id).to_string(), *quantity))
            .collect(),
        module_adoption_rates: adoption_rates
            .iter()
            .map(|(module_id, rate)| ((*module_id).to_string(), *rate))
            .collect(),
    }
}

pub fn build_day(name: &str, duration_hours: f64, composition: &[(&str, u32)]) -> DayConfig {
    DayConfig {
        name: name.to_string(),
        enabled: true,
        duration_hours,
        visitor_composition: composition
            .iter()
            .map(|(persona_id, count)| ((*persona_id).to_string(), *count))
            .collect(),
        selected_modules: BTreeMap::new(),
        day_specific_revenue: Vec::new(),
    }
}

pub fn build_scenario(days: Vec<DayConfig>) -> Scenario {
    Scenario {
        id: "test".to_string(),
        name: "Test scenario".to_string(),
        description: None,
        days,
        global_modules: BTreeMap::new(),
        global_parameters: BTreeMap::new(),
        revenue_items: Vec::new(),
    }
}
