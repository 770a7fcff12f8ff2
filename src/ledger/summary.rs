use std::fmt;

use super::ledger::Ledger;

/// Snapshot of the financial state: income, per-category totals in category
/// insertion order, total expenses, and the resulting balance.
///
/// Rendering via `Display` produces the console report. The spending
/// breakdown section is shown only when income is positive.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub income: f64,
    pub categories: Vec<CategorySummary>,
    pub total_expenses: f64,
    pub balance: f64,
}

/// Per-category slice of the summary.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    pub name: String,
    pub total: f64,
    /// Share of total expenses, in percent. Zero when there are no expenses.
    pub percentage: f64,
}

impl Summary {
    pub fn for_ledger(ledger: &Ledger) -> Self {
        let total_expenses = ledger.total_expenses();
        let categories = ledger
            .expenses
            .iter()
            .map(|category| {
                let total = category.total();
                let percentage = if total_expenses > 0.0 {
                    total / total_expenses * 100.0
                } else {
                    0.0
                };
                CategorySummary {
                    name: category.name.clone(),
                    total,
                    percentage,
                }
            })
            .collect();
        Self {
            income: ledger.income,
            categories,
            total_expenses,
            balance: ledger.income - total_expenses,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---- Financial Summary ----")?;
        writeln!(f, "Total Income: ${:.2}", self.income)?;
        writeln!(f, "Total Expenses:")?;
        for category in &self.categories {
            writeln!(f, "  - {}: ${:.2}", category.name, category.total)?;
        }
        writeln!(f, "Balance: ${:.2}", self.balance)?;
        if self.income > 0.0 {
            writeln!(f)?;
            writeln!(f, "Spending Breakdown:")?;
            for category in &self.categories {
                writeln!(f, "  - {}: {:.2}%", category.name, category.percentage)?;
            }
        }
        write!(f, "---------------------------")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.add_income(1000.0).unwrap();
        ledger.add_expense("Food", "Groceries", 150.0).unwrap();
        ledger.add_expense("Food", "Dining", 50.0).unwrap();
        ledger
    }

    #[test]
    fn summary_totals_match_ledger_state() {
        let summary = sample_ledger().summary();
        assert_eq!(summary.income, 1000.0);
        assert_eq!(summary.total_expenses, 200.0);
        assert_eq!(summary.balance, 800.0);
        assert_eq!(summary.categories.len(), 1);
        assert_eq!(summary.categories[0].total, 200.0);
        assert_eq!(summary.categories[0].percentage, 100.0);
    }

    #[test]
    fn summary_splits_percentages_across_categories() {
        let mut ledger = sample_ledger();
        ledger.add_expense("Rent", "May rent", 600.0).unwrap();
        let summary = ledger.summary();
        assert_eq!(summary.categories[0].percentage, 25.0);
        assert_eq!(summary.categories[1].percentage, 75.0);
    }

    #[test]
    fn report_renders_income_expenses_and_breakdown() {
        let report = sample_ledger().summary().to_string();
        let expected = "---- Financial Summary ----\n\
                        Total Income: $1000.00\n\
                        Total Expenses:\n\
                        \x20 - Food: $200.00\n\
                        Balance: $800.00\n\
                        \n\
                        Spending Breakdown:\n\
                        \x20 - Food: 100.00%\n\
                        ---------------------------";
        assert_eq!(report, expected);
    }

    #[test]
    fn breakdown_is_hidden_when_income_is_zero() {
        let mut ledger = Ledger::new();
        ledger.add_expense("Food", "Groceries", 150.0).unwrap();
        let report = ledger.summary().to_string();
        assert!(!report.contains("Spending Breakdown"));
        assert!(report.contains("Balance: $-150.00"));
    }

    #[test]
    fn summary_is_idempotent_for_unchanged_state() {
        let ledger = sample_ledger();
        assert_eq!(ledger.summary(), ledger.summary());
        assert_eq!(ledger.summary().to_string(), ledger.summary().to_string());
    }

    #[test]
    fn percentage_is_zero_without_expenses() {
        let mut ledger = Ledger::new();
        ledger.add_income(100.0).unwrap();
        let summary = ledger.summary();
        assert!(summary.categories.is_empty());
        assert_eq!(summary.total_expenses, 0.0);
        assert_eq!(summary.balance, 100.0);
    }
}
