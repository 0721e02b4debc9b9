//! The in-memory, append-only store of transactions for a single session.

use crate::transaction::Transaction;

/// An ordered, append-only collection of transactions.
///
/// Every session owns its own store. Transactions are kept in the order they
/// were added, which is the order they are displayed in.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `transaction` to the end of the store.
    ///
    /// [Transaction::new] has already checked the amount and category, so
    /// appending cannot fail.
    pub fn append(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    /// All transactions in the order they were added.
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The number of transactions in the store.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether the store has no transactions.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
