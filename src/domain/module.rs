use crate::domain::items::{CostItem, RevenueItem};

/// Whether a module contributes once per event, once per active day, or
/// is eligible in either context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleScope {
    Global,
    Daily,
    Both,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModuleVariant {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub cost_items: Vec<CostItem>,
    pub revenue_items: Vec<RevenueItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    pub id: String,
    pub name: String,
    pub scope: ModuleScope,
    pub variants: Vec<ModuleVariant>,
}

impl Module {
    pub fn variant(&self, variant_id: &str) -> Option<&ModuleVariant> {
        self.variants.iter().find(|v| v.id == variant_id)
    }
}
