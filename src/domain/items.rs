#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostType {
    Fixed,
    PerVisitor,
    PerHour,
}

impl CostType {
    pub fn label(&self) -> &'static str {
        match self {
            CostType::Fixed => "fixed",
            CostType::PerVisitor => "per_visitor",
            CostType::PerHour => "per_hour",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevenueType {
    Fixed,
    PerVisitor,
    PerUnitSold,
}

impl RevenueType {
    pub fn label(&self) -> &'static str {
        match self {
            RevenueType::Fixed => "fixed",
            RevenueType::PerVisitor => "per_visitor",
            RevenueType::PerUnitSold => "per_unit_sold",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CostItem {
    pub name: String,
    pub amount: f64,
    pub cost_type: CostType,
    pub description: Option<String>,
    /// Names a scenario global parameter to use instead of elapsed hours
    /// for per-hour items.
    pub multiplier_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevenueItem {
    pub name: String,
    pub amount: f64,
    pub revenue_type: RevenueType,
    pub description: Option<String>,
}
