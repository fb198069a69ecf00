use std::collections::BTreeMap;

use crate::domain::items::{CostItem, CostType, RevenueItem, RevenueType};
use crate::domain::module::{Module, ModuleScope};
use crate::domain::result::{
    CalculationResult, CostBreakdownEntry, CostLineItem, RevenueBreakdownEntry,
};
use crate::domain::scenario::{DayConfig, Scenario};
use crate::services::catalog::Catalog;

/// Computes the full cost/revenue projection for one scenario.
///
/// The aggregation order is fixed: global modules, daily modules, scenario
/// revenue items, day-specific revenue, consumption. Totals accumulate in
/// that same order, so the scalar totals always equal the sums over the
/// breakdown lists.
///
/// References to ids missing from the catalog (modules, variants, personas,
/// products) contribute zero and are skipped without error. This is
/// deliberate: callers recalculate partial or stale scenarios on every edit
/// and expect a result, not a failure.
pub fn calculate_scenario(scenario: &Scenario, catalog: &Catalog) -> CalculationResult {
    let active_days: Vec<&DayConfig> = scenario.days.iter().filter(|day| day.enabled).collect();

    let total_visitors: u32 = active_days.iter().map(|day| day.total_visitors()).sum();
    let total_hours: f64 = active_days.iter().map(|day| day.duration_hours).sum();

    let mut total_visitor_composition: BTreeMap<String, u32> = BTreeMap::new();
    for day in &active_days {
        for (persona_id, count) in &day.visitor_composition {
            *total_visitor_composition
                .entry(persona_id.clone())
                .or_insert(0) += count;
        }
    }

    let mut total_cost = 0.0;
    let mut total_revenue = 0.0;
    let mut breakdown = Vec::new();
    let mut revenue_breakdown = Vec::new();

    // Global modules, over the composition summed across active days.
    for (module_id, variant_id) in &scenario.global_modules {
        let Some(module) = catalog.module(module_id) else {
            continue;
        };
        if module.scope == ModuleScope::Daily {
            continue;
        }
        let Some(variant) = module.variant(variant_id) else {
            continue;
        };

        let weighted = weighted_visitors(
            catalog,
            module,
            &total_visitor_composition,
            total_visitors,
        );

        let (cost, items) = evaluate_cost_items(
            &variant.cost_items,
            weighted,
            total_hours,
            &scenario.global_parameters,
        );
        total_cost += cost;
        breakdown.push(CostBreakdownEntry {
            module: module.name.clone(),
            variant: variant.name.clone(),
            cost,
            items,
            scope: "Global".to_string(),
        });

        let (revenue, revenue_items) =
            evaluate_module_revenue(module, &variant.revenue_items, weighted, "Global");
        total_revenue += revenue;
        revenue_breakdown.extend(revenue_items);
    }

    // Daily modules, per active day over that day's composition.
    for day in &active_days {
        for (module_id, variant_id) in &day.selected_modules {
            let Some(module) = catalog.module(module_id) else {
                continue;
            };
            if module.scope == ModuleScope::Global {
                continue;
            }
            let Some(variant) = module.variant(variant_id) else {
                continue;
            };

            let weighted = weighted_visitors(
                catalog,
                module,
                &day.visitor_composition,
                day.total_visitors(),
            );

            let (cost, items) = evaluate_cost_items(
                &variant.cost_items,
                weighted,
                day.duration_hours,
                &scenario.global_parameters,
            );
            total_cost += cost;
            breakdown.push(CostBreakdownEntry {
                module: format!("{} ({})", module.name, day.name),
                variant: variant.name.clone(),
                cost,
                items,
                scope: day.name.clone(),
            });

            let (revenue, revenue_items) =
                evaluate_module_revenue(module, &variant.revenue_items, weighted, &day.name);
            total_revenue += revenue;
            revenue_breakdown.extend(revenue_items);
        }
    }

    // Event-wide revenue items, scaled by the raw visitor total.
    for item in &scenario.revenue_items {
        let total = evaluate_plain_revenue(item, total_visitors);
        total_revenue += total;
        revenue_breakdown.push(RevenueBreakdownEntry {
            name: item.name.clone(),
            revenue_type: item.revenue_type.label().to_string(),
            total,
            category: "Global".to_string(),
        });
    }

    // Day-specific revenue and consumption.
    for day in &active_days {
        let day_visitors = day.total_visitors();

        for item in &day.day_specific_revenue {
            let total = evaluate_plain_revenue(item, day_visitors);
            total_revenue += total;
            revenue_breakdown.push(RevenueBreakdownEntry {
                name: format!("{} ({})", item.name, day.name),
                revenue_type: item.revenue_type.label().to_string(),
                total,
                category: "Tickets/Entry".to_string(),
            });
        }

        let (consumption_revenue, consumption_cost) = day_consumption(catalog, day);
        total_revenue += consumption_revenue;
        total_cost += consumption_cost;

        if consumption_revenue > 0.0 {
            revenue_breakdown.push(RevenueBreakdownEntry {
                name: format!("Consumption sales ({})", day.name),
                revenue_type: "consumption".to_string(),
                total: consumption_revenue,
                category: format!("Consumption-{}", day.name),
            });
        }
        if consumption_cost > 0.0 {
            breakdown.push(CostBreakdownEntry {
                module: format!("Cost of goods ({})", day.name),
                variant: "Consumption-based".to_string(),
                cost: consumption_cost,
                items: vec![CostLineItem {
                    name: "Product purchases".to_string(),
                    item_type: "variable".to_string(),
                    unit_amount: None,
                    total: consumption_cost,
                    description: None,
                }],
                scope: day.name.clone(),
            });
        }
    }

    CalculationResult {
        scenario_name: scenario.name.clone(),
        total_cost,
        total_revenue,
        profit: total_revenue - total_cost,
        total_visitors,
        cost_per_visitor: per_visitor(total_cost, total_visitors),
        revenue_per_visitor: per_visitor(total_revenue, total_visitors),
        breakdown,
        revenue_breakdown,
    }
}

/// Adoption-weighted visitor count for one module. Personas missing from
/// the catalog count at full adoption; an empty composition falls back to
/// the raw visitor count so modules stay computable without a persona
/// breakdown.
fn weighted_visitors(
    catalog: &Catalog,
    module: &Module,
    composition: &BTreeMap<String, u32>,
    fallback_visitors: u32,
) -> f64 {
    if composition.is_empty() {
        return f64::from(fallback_visitors);
    }
    composition
        .iter()
        .map(|(persona_id, count)| {
            let rate = catalog
                .persona(persona_id)
                .map(|persona| persona.adoption_rate(&module.id))
                .unwrap_or(1.0);
            f64::from(*count) * rate
        })
        .sum()
}

fn evaluate_cost_items(
    items: &[CostItem],
    weighted_visitors: f64,
    context_hours: f64,
    parameters: &BTreeMap<String, f64>,
) -> (f64, Vec<CostLineItem>) {
    items.iter().fold(
        (0.0, Vec::with_capacity(items.len())),
        |(sum, mut lines), item| {
            let total = match item.cost_type {
                CostType::Fixed => item.amount,
                CostType::PerVisitor => item.amount * weighted_visitors,
                CostType::PerHour => {
                    let multiplier = item
                        .multiplier_key
                        .as_deref()
                        .and_then(|key| parameters.get(key).copied())
                        .unwrap_or(context_hours);
                    item.amount * multiplier
                }
            };
            lines.push(CostLineItem {
                name: item.name.clone(),
                item_type: item.cost_type.label().to_string(),
                unit_amount: Some(item.amount),
                total,
                description: item.description.clone(),
            });
            (sum + total, lines)
        },
    )
}

/// Module-level revenue. Only fixed and per-visitor items produce revenue
/// here; per-unit-sold is carried through at zero.
fn evaluate_module_revenue(
    module: &Module,
    items: &[RevenueItem],
    weighted_visitors: f64,
    context_name: &str,
) -> (f64, Vec<RevenueBreakdownEntry>) {
    items.iter().fold(
        (0.0, Vec::with_capacity(items.len())),
        |(sum, mut lines), item| {
            let total = match item.revenue_type {
                RevenueType::Fixed => item.amount,
                RevenueType::PerVisitor => item.amount * weighted_visitors,
                RevenueType::PerUnitSold => 0.0,
            };
            lines.push(RevenueBreakdownEntry {
                name: format!("{} ({})", item.name, context_name),
                revenue_type: item.revenue_type.label().to_string(),
                total,
                category: format!("Module: {}", module.name),
            });
            (sum + total, lines)
        },
    )
}

fn evaluate_plain_revenue(item: &RevenueItem, visitors: u32) -> f64 {
    match item.revenue_type {
        RevenueType::Fixed => item.amount,
        RevenueType::PerVisitor => item.amount * f64::from(visitors),
        RevenueType::PerUnitSold => 0.0,
    }
}

fn day_consumption(catalog: &Catalog, day: &DayConfig) -> (f64, f64) {
    let mut revenue = 0.0;
    let mut cost = 0.0;
    for (persona_id, count) in &day.visitor_composition {
        let Some(persona) = catalog.persona(persona_id) else {
            continue;
        };
        for (product_id, quantity) in &persona.consumption {
            let Some(product) = catalog.product(product_id) else {
                continue;
            };
            let units = quantity * f64::from(*count);
            revenue += units * product.sales_price;
            cost += units * product.purchase_price;
        }
    }
    (revenue, cost)
}

fn per_visitor(total: f64, visitors: u32) -> f64 {
    if visitors > 0 {
        total / f64::from(visitors)
    } else {
        0.0
    }
}
