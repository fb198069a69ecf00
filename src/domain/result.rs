use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CostLineItem {
    pub name: String,
    pub item_type: String,
    pub unit_amount: Option<f64>,
    pub total: f64,
    pub description: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CostBreakdownEntry {
    pub module: String,
    pub variant: String,
    pub cost: f64,
    pub items: Vec<CostLineItem>,
    /// "Global" or the contributing day's name.
    pub scope: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RevenueBreakdownEntry {
    pub name: String,
    pub revenue_type: String,
    pub total: f64,
    pub category: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CalculationResult {
    pub scenario_name: String,
    pub total_cost: f64,
    pub total_revenue: f64,
    pub profit: f64,
    pub total_visitors: u32,
    pub cost_per_visitor: f64,
    pub revenue_per_visitor: f64,
    pub breakdown: Vec<CostBreakdownEntry>,
    pub revenue_breakdown: Vec<RevenueBreakdownEntry>,
}
