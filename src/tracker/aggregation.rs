//! Transaction aggregation for the summary tables and charts.
//!
//! Every function here is pure and is called fresh on each render, so the
//! results always reflect the current contents of the store. Totals are
//! exact sums of [Amount]s and do not depend on transaction order.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
    amount::Amount,
    category::{Category, TransactionType},
    transaction::Transaction,
};

/// The income, expense and balance totals of a set of transactions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// The sum of all income.
    pub income: Amount,
    /// The sum of all expenses.
    pub expense: Amount,
    /// Income minus expenses, may be negative.
    pub balance: Amount,
}

/// Sums transaction amounts by category.
///
/// Categories without transactions are left out rather than set to zero.
/// The sidebar summary passes all transactions, the expense chart passes
/// only [expenses].
pub fn total_by_category<'a>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
) -> BTreeMap<Category, Amount> {
    let mut totals = BTreeMap::new();

    for transaction in transactions {
        *totals.entry(transaction.category()).or_insert(Amount::ZERO) += transaction.amount();
    }

    totals
}

/// Sums transaction amounts by transaction type, leaving out types without transactions.
pub fn total_by_type(transactions: &[Transaction]) -> BTreeMap<TransactionType, Amount> {
    let mut totals = BTreeMap::new();

    for transaction in transactions {
        *totals
            .entry(transaction.transaction_type())
            .or_insert(Amount::ZERO) += transaction.amount();
    }

    totals
}

/// The transactions of `transaction_type`, in their original order.
pub fn of_type(
    transactions: &[Transaction],
    transaction_type: TransactionType,
) -> impl Iterator<Item = &Transaction> {
    transactions
        .iter()
        .filter(move |transaction| transaction.transaction_type() == transaction_type)
}

/// The expense transactions, in their original order.
pub fn expenses(transactions: &[Transaction]) -> impl Iterator<Item = &Transaction> {
    of_type(transactions, TransactionType::Expense)
}

/// Calculates total income, total expenses and the balance.
///
/// Returns all zeros for an empty slice.
pub fn summary(transactions: &[Transaction]) -> Summary {
    let income: Amount = of_type(transactions, TransactionType::Income)
        .map(Transaction::amount)
        .sum();
    let expense: Amount = expenses(transactions).map(Transaction::amount).sum();

    Summary {
        income,
        expense,
        balance: income - expense,
    }
}
