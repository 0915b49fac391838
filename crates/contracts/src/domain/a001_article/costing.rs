//! Derived costing values. Everything here is recomputed from the current
//! lines and sales rate; nothing is cached or persisted.

use super::aggregate::RateLine;

/// Groups shown when no rate-category catalog has been loaded.
pub const DEFAULT_RATE_CATEGORIES: [&str; 4] = ["fabric", "work", "accessory", "labor"];

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CostSummary {
    pub total_cost: f64,
    pub sales_rate: f64,
    /// `sales_rate - total_cost` when the sales rate is positive, else 0.
    pub profit: f64,
    /// Percent of the sales rate kept as profit; 0 when the sales rate is 0.
    pub margin_percent: f64,
}

impl CostSummary {
    pub fn compute(lines: &[RateLine], sales_rate: f64) -> Self {
        Self::from_total(total_cost(lines), sales_rate)
    }

    /// For rows where the server already summed the lines.
    pub fn from_total(total_cost: f64, sales_rate: f64) -> Self {
        let profit = if sales_rate > 0.0 {
            sales_rate - total_cost
        } else {
            0.0
        };
        let margin_percent = if sales_rate != 0.0 && sales_rate.is_finite() {
            (sales_rate - total_cost) / sales_rate * 100.0
        } else {
            0.0
        };
        Self {
            total_cost,
            sales_rate,
            profit,
            margin_percent,
        }
    }

    pub fn is_loss(&self) -> bool {
        self.margin_percent < 0.0
    }

    /// Margin rounded to one decimal place, as displayed.
    pub fn margin_rounded(&self) -> f64 {
        (self.margin_percent * 10.0).round() / 10.0
    }
}

pub fn total_cost(lines: &[RateLine]) -> f64 {
    lines
        .iter()
        .map(|line| if line.price.is_finite() { line.price } else { 0.0 })
        .sum()
}

/// Lines of one rate category with their subtotal.
#[derive(Debug, Clone, PartialEq)]
pub struct CostGroup {
    pub category: String,
    pub lines: Vec<RateLine>,
    pub subtotal: f64,
}

/// Groups lines by rate category.
///
/// Groups follow `known` (the catalog's category order, or the defaults
/// when the catalog is empty) and are emitted even when empty. Categories
/// that appear on lines but not in `known` are appended in first-seen
/// order, so no line is ever hidden from the breakdown.
pub fn group_by_category(lines: &[RateLine], known: &[String]) -> Vec<CostGroup> {
    let mut order: Vec<String> = if known.is_empty() {
        DEFAULT_RATE_CATEGORIES.iter().map(|c| c.to_string()).collect()
    } else {
        known.to_vec()
    };
    for line in lines {
        if !order.iter().any(|c| c == &line.category) {
            order.push(line.category.clone());
        }
    }

    order
        .into_iter()
        .map(|category| {
            let group_lines: Vec<RateLine> = lines
                .iter()
                .filter(|l| l.category == category)
                .cloned()
                .collect();
            let subtotal = total_cost(&group_lines);
            CostGroup {
                category,
                lines: group_lines,
                subtotal,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(category: &str, price: f64) -> RateLine {
        RateLine {
            category: category.into(),
            title: format!("{category} item"),
            price,
        }
    }

    #[test]
    fn test_summary_of_two_lines() {
        let lines = vec![line("fabric", 100.0), line("labor", 250.5)];
        let summary = CostSummary::compute(&lines, 500.0);
        assert_eq!(summary.total_cost, 350.5);
        assert_eq!(summary.profit, 149.5);
        assert!((summary.margin_percent - 29.9).abs() < 1e-9);
        assert_eq!(summary.margin_rounded(), 29.9);
        assert!(!summary.is_loss());
    }

    #[test]
    fn test_zero_sales_rate_has_no_profit_or_margin() {
        let lines = vec![line("fabric", 900.0)];
        let summary = CostSummary::compute(&lines, 0.0);
        assert_eq!(summary.total_cost, 900.0);
        assert_eq!(summary.profit, 0.0);
        assert_eq!(summary.margin_percent, 0.0);
        assert!(summary.margin_percent.is_finite());
    }

    #[test]
    fn test_loss_is_flagged() {
        let summary = CostSummary::from_total(1200.0, 1000.0);
        assert_eq!(summary.profit, -200.0);
        assert_eq!(summary.margin_rounded(), -20.0);
        assert!(summary.is_loss());
    }

    #[test]
    fn test_empty_lines_cost_nothing() {
        assert_eq!(total_cost(&[]), 0.0);
        let summary = CostSummary::compute(&[], 250.0);
        assert_eq!(summary.profit, 250.0);
        assert_eq!(summary.margin_percent, 100.0);
    }

    #[test]
    fn test_grouping_uses_defaults_without_catalog() {
        let lines = vec![line("labor", 50.0), line("fabric", 10.0), line("fabric", 5.0)];
        let groups = group_by_category(&lines, &[]);
        let names: Vec<&str> = groups.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(names, DEFAULT_RATE_CATEGORIES.to_vec());
        assert_eq!(groups[0].lines.len(), 2);
        assert_eq!(groups[0].subtotal, 15.0);
        assert!(groups[1].lines.is_empty());
        assert_eq!(groups[3].subtotal, 50.0);
    }

    #[test]
    fn test_grouping_appends_categories_missing_from_catalog() {
        let known = vec!["fabric".to_string(), "dyeing".to_string()];
        let lines = vec![line("packing", 20.0), line("fabric", 10.0), line("packing", 5.0)];
        let groups = group_by_category(&lines, &known);
        let names: Vec<&str> = groups.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(names, vec!["fabric", "dyeing", "packing"]);
        assert_eq!(groups[2].subtotal, 25.0);
        let grouped: usize = groups.iter().map(|g| g.lines.len()).sum();
        assert_eq!(grouped, lines.len());
    }
}
