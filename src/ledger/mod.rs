//! Ledger domain model, amount validation, and summary computation.

pub mod expense;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod summary;

pub use expense::{CategoryExpenses, ExpenseRecord};
pub use ledger::{parse_amount, Ledger};
pub use summary::{CategorySummary, Summary};
