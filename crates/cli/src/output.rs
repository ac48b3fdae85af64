//! Plain-text rendering.

use craftledger_calculator::{
    CostBreakdown, calculate_markups, calculate_profit_percentage, format_currency,
    format_percentage, yarn_type,
};
use craftledger_products::ProductGroup;

pub fn breakdown(costs: &CostBreakdown) -> String {
    let profit = |amount: f64| {
        format!(
            "{} ({})",
            format_currency(amount),
            format_percentage(calculate_profit_percentage(amount, costs.sale_price))
        )
    };

    let mut lines = vec![
        format!("yarn (normal)  {}", format_currency(costs.yarn_cost_normal)),
        format!("yarn (promo)   {}", format_currency(costs.yarn_cost_promo)),
        format!("filling        {}", format_currency(costs.filling_cost)),
        format!("labor          {}", format_currency(costs.labor_cost)),
        format!("extras         {}", format_currency(costs.extras_cost)),
        format!("total (normal) {}", format_currency(costs.total_normal)),
        format!("total (promo)  {}", format_currency(costs.total_promo)),
        format!("sale price     {}", format_currency(costs.sale_price)),
        format!("profit (normal) {}", profit(costs.profit_normal)),
        format!("profit (promo)  {}", profit(costs.profit_promo)),
        "suggested prices:".to_string(),
    ];
    lines.extend(
        calculate_markups(costs.total_normal)
            .iter()
            .map(|(percent, price)| format!("  +{percent:<3}% {}", format_currency(price))),
    );
    to_text(lines)
}

pub fn group(group: &ProductGroup) -> String {
    let yarn = yarn_type(&group.yarn_type).map_or(group.yarn_type.as_str(), |y| y.name);

    let header = format!(
        "{} | {} | {} | cost {} / {} | profit {} | stock {}",
        group.name,
        yarn,
        format_currency(group.sale_price),
        format_currency(group.total_normal),
        format_currency(group.total_promo),
        format_currency(group.profit_normal),
        group.total_stock(),
    );
    let variants = group
        .variants
        .iter()
        .map(|v| format!("  {}  {} | {} ({})", v.id, v.color.join(", "), v.hook, v.stock));
    to_text(std::iter::once(header).chain(variants))
}

// One line per entry, each newline-terminated.
fn to_text(lines: impl IntoIterator<Item = String>) -> String {
    lines.into_iter().map(|line| line + "\n").collect()
}
