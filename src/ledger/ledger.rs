use serde::{Deserialize, Serialize};

use crate::errors::{BudgetError, Result};

use super::{
    expense::{CategoryExpenses, ExpenseRecord},
    summary::Summary,
};

/// In-memory financial state: a running income total plus categorized
/// expense records. Categories keep first-insertion order, and serialize
/// as a JSON object mapping category name to its records.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Ledger {
    #[serde(default)]
    pub income: f64,
    #[serde(default, with = "expense_map")]
    pub expenses: Vec<CategoryExpenses>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a positive amount to the running income total.
    ///
    /// The income source label is deliberately not stored; only the numeric
    /// effect persists.
    pub fn add_income(&mut self, amount: f64) -> Result<()> {
        ensure_positive(amount)?;
        self.income += amount;
        Ok(())
    }

    /// Appends an expense record under `category`, creating the category on
    /// first use at the end of the ordered collection.
    pub fn add_expense(
        &mut self,
        category: &str,
        description: impl Into<String>,
        amount: f64,
    ) -> Result<()> {
        ensure_positive(amount)?;
        let index = match self
            .expenses
            .iter()
            .position(|existing| existing.name == category)
        {
            Some(index) => index,
            None => {
                self.expenses.push(CategoryExpenses::new(category));
                self.expenses.len() - 1
            }
        };
        self.expenses[index]
            .records
            .push(ExpenseRecord::new(description, amount));
        Ok(())
    }

    /// Sum of all recorded amounts across all categories.
    pub fn total_expenses(&self) -> f64 {
        self.expenses.iter().map(CategoryExpenses::total).sum()
    }

    /// Income minus total expenses.
    pub fn balance(&self) -> f64 {
        self.income - self.total_expenses()
    }

    /// Computes the financial summary report. Pure read; calling it twice on
    /// unchanged state yields identical output.
    pub fn summary(&self) -> Summary {
        Summary::for_ledger(self)
    }
}

/// Parses raw user input as a positive decimal amount.
///
/// This is the single validation gate between free-form console input and
/// ledger mutation: callers parse first, then mutate.
pub fn parse_amount(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    let amount: f64 = trimmed
        .parse()
        .map_err(|_| BudgetError::InvalidAmount(format!("`{trimmed}` is not a number")))?;
    ensure_positive(amount)?;
    Ok(amount)
}

fn ensure_positive(amount: f64) -> Result<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(BudgetError::InvalidAmount(
            "amount must be a positive number".into(),
        ));
    }
    Ok(())
}

mod expense_map {
    use std::fmt;

    use serde::{
        de::{MapAccess, Visitor},
        ser::SerializeMap,
        Deserializer, Serializer,
    };

    use crate::ledger::expense::{CategoryExpenses, ExpenseRecord};

    pub fn serialize<S>(categories: &[CategoryExpenses], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(categories.len()))?;
        for category in categories {
            map.serialize_entry(&category.name, &category.records)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<CategoryExpenses>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ExpenseMapVisitor;

        impl<'de> Visitor<'de> for ExpenseMapVisitor {
            type Value = Vec<CategoryExpenses>;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of category names to expense records")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut categories = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, records)) =
                    access.next_entry::<String, Vec<ExpenseRecord>>()?
                {
                    categories.push(CategoryExpenses { name, records });
                }
                Ok(categories)
            }
        }

        deserializer.deserialize_map(ExpenseMapVisitor)
    }
}
