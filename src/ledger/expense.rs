use serde::{Deserialize, Serialize};

/// A single recorded expense. Immutable once appended to a category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseRecord {
    pub description: String,
    pub amount: f64,
}

impl ExpenseRecord {
    pub fn new(description: impl Into<String>, amount: f64) -> Self {
        Self {
            description: description.into(),
            amount,
        }
    }
}

/// A named category together with its expense records, in entry order.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryExpenses {
    pub name: String,
    pub records: Vec<ExpenseRecord>,
}

impl CategoryExpenses {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: Vec::new(),
        }
    }

    /// Sum of all recorded amounts in this category.
    pub fn total(&self) -> f64 {
        self.records.iter().map(|record| record.amount).sum()
    }
}
