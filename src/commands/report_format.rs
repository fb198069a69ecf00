use crate::domain::result::CalculationResult;

pub fn format_calculation_report(result: &CalculationResult) -> String {
    let margin = if result.total_revenue > 0.0 {
        result.profit / result.total_revenue * 100.0
    } else {
        0.0
    };

    let mut lines = Vec::new();
    lines.push(format!("Calculation Report: {}", result.scenario_name));
    lines.push(format!("Revenue:  {}", format_currency(result.total_revenue)));
    lines.push(format!("Cost:     {}", format_currency(result.total_cost)));
    lines.push(format!("Profit:   {}", format_currency(result.profit)));
    lines.push(format!("Margin:   {margin:.1}%"));
    lines.push(String::new());
    lines.push(format!("Visitors: {}", result.total_visitors));
    lines.push(format!(
        "Cost per visitor:    {}",
        format_currency(result.cost_per_visitor)
    ));
    lines.push(format!(
        "Revenue per visitor: {}",
        format_currency(result.revenue_per_visitor)
    ));
    lines.push(String::new());
    lines.push("Revenue breakdown:".to_string());
    lines.push("Name | Type | Total | Category".to_string());
    lines.push("-----|------|-------|---------".to_string());
    for entry in &result.revenue_breakdown {
        lines.push(format!(
            "{} | {} | {} | {}",
            entry.name,
            entry.revenue_type,
            format_currency(entry.total),
            entry.category
        ));
    }
    lines.push(String::new());
    lines.push("Cost breakdown:".to_string());
    lines.push("Module | Variant | Scope | Cost".to_string());
    lines.push("-------|---------|-------|-----".to_string());
    for entry in &result.breakdown {
        lines.push(format!(
            "{} | {} | {} | {}",
            entry.module,
            entry.variant,
            entry.scope,
            format_currency(entry.cost)
        ));
    }

    lines.join("\n")
}

/// Renders an amount as e.g. "1,234.56 €".
fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let text = format!("{:.2}", amount.abs());
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (position, digit) in integer.chars().enumerate() {
        if position > 0 && (integer.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped}.{fraction} €")
}
