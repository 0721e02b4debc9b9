//! A snapshot of a session's transactions and their aggregates, ready for display.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
    amount::Amount,
    category::{Category, TransactionType},
    tracker::aggregation::{Summary, expenses, summary, total_by_category, total_by_type},
    transaction::Transaction,
};

/// Everything the tracker page shows, computed from the transactions at one
/// point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackerView {
    /// All transactions in the order they were added.
    pub transactions: Vec<Transaction>,
    /// Totals by category over both income and expenses.
    pub category_totals: BTreeMap<Category, Amount>,
    /// Total income, total expenses and the balance.
    pub summary: Summary,
    /// Totals by category over expenses only.
    pub expense_totals_by_category: BTreeMap<Category, Amount>,
    /// Totals by transaction type.
    pub totals_by_type: BTreeMap<TransactionType, Amount>,
}

impl TrackerView {
    /// Compute the view of `transactions`.
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        Self {
            transactions: transactions.to_vec(),
            category_totals: total_by_category(transactions),
            summary: summary(transactions),
            expense_totals_by_category: total_by_category(expenses(transactions)),
            totals_by_type: total_by_type(transactions),
        }
    }

    /// Whether there are no transactions to show.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
