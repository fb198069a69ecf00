use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub sales_price: f64,
    pub purchase_price: f64,
    pub unit: String,
}

/// A visitor archetype: what it consumes per day and how strongly it
/// adopts each module.
#[derive(Debug, Clone, PartialEq)]
pub struct Persona {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// product_id to units consumed per visitor per day.
    pub consumption: BTreeMap<String, f64>,
    /// module_id to adoption rate in [0, 1]. Full adoption when unlisted.
    pub module_adoption_rates: BTreeMap<String, f64>,
}

impl Persona {
    pub fn adoption_rate(&self, module_id: &str) -> f64 {
        self.module_adoption_rates
            .get(module_id)
            .copied()
            .unwrap_or(1.0)
    }
}
