//! Defines the core data model for transactions and the validation error for invalid ones.

use std::fmt::Display;

use serde::Serialize;
use time::Date;

use crate::{
    amount::Amount,
    category::{Category, TransactionType},
};

// ============================================================================
// MODELS
// ============================================================================

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// A `Transaction` can only be created through [Transaction::new], which
/// checks that the amount is positive and at most [Amount::MAXIMUM] and that
/// the category belongs to the transaction type. Transactions cannot be modified once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    date: Date,
    #[serde(rename = "type")]
    transaction_type: TransactionType,
    amount: Amount,
    category: Category,
    description: String,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// # Errors
    /// Returns a [ValidationError] if:
    /// - `amount` is zero, negative or greater than [Amount::MAXIMUM],
    /// - or `category` is not one of the categories allowed for `transaction_type`.
    pub fn new(
        date: Date,
        transaction_type: TransactionType,
        amount: Amount,
        category: Category,
        description: &str,
    ) -> Result<Self, ValidationError> {
        if !amount.is_positive() {
            return Err(ValidationError::new(
                Field::Amount,
                format!("{amount} is not greater than zero"),
            ));
        }

        if amount > Amount::MAXIMUM {
            return Err(ValidationError::new(
                Field::Amount,
                format!("{amount} is greater than the maximum of {}", Amount::MAXIMUM),
            ));
        }

        if !category.belongs_to(transaction_type) {
            return Err(ValidationError::new(
                Field::Category,
                format!("{category} is not a category for {transaction_type}"),
            ));
        }

        Ok(Self {
            date,
            transaction_type,
            amount,
            category,
            description: description.to_owned(),
        })
    }

    /// When the transaction happened.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Whether money was earned or spent.
    pub fn transaction_type(&self) -> TransactionType {
        self.transaction_type
    }

    /// The amount of money earned or spent, always greater than zero.
    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// The category the transaction is filed under.
    pub fn category(&self) -> Category {
        self.category
    }

    /// A text description of what the transaction was for, may be empty.
    pub fn description(&self) -> &str {
        &self.description
    }
}

// ============================================================================
// ERRORS
// ============================================================================

/// The user-submitted fields that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// The date of the transaction.
    Date,
    /// The amount of the transaction.
    Amount,
    /// The category of the transaction.
    Category,
}

impl Field {
    /// The field name as shown to the user.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Date => "Date",
            Field::Amount => "Amount",
            Field::Category => "Category",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A submitted transaction was rejected.
///
/// The error names the first field that failed and why. Nothing is added to
/// the transaction store when this error occurs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {field}: {reason}")]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: Field,
    /// Why the field is invalid.
    pub reason: String,
}

impl ValidationError {
    /// Create a validation error for `field`.
    pub fn new(field: Field, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{
        amount::Amount,
        category::{Category, TransactionType},
        transaction::{Field, Transaction},
    };

    #[test]
    fn new_keeps_fields_verbatim() {
        let transaction = Transaction::new(
            date!(2024 - 01 - 02),
            TransactionType::Expense,
            Amount::from_units(200),
            Category::Food,
            "lunch",
        )
        .unwrap();

        assert_eq!(transaction.date(), date!(2024 - 01 - 02));
        assert_eq!(transaction.transaction_type(), TransactionType::Expense);
        assert_eq!(transaction.amount(), Amount::from_units(200));
        assert_eq!(transaction.category(), Category::Food);
        assert_eq!(transaction.description(), "lunch");
    }

    #[test]
    fn new_rejects_zero_and_negative_amounts() {
        for cents in [0, -1, -5000] {
            let result = Transaction::new(
                date!(2024 - 01 - 01),
                TransactionType::Income,
                Amount::from_cents(cents),
                Category::Salary,
                "",
            );

            let error = result.expect_err("want amount to be rejected");
            assert_eq!(error.field, Field::Amount);
        }
    }

    #[test]
    fn new_accepts_maximum_amount_and_rejects_more() {
        let maximum = Transaction::new(
            date!(2024 - 01 - 01),
            TransactionType::Income,
            Amount::MAXIMUM,
            Category::Salary,
            "",
        );
        assert!(maximum.is_ok());

        let error = Transaction::new(
            date!(2024 - 01 - 01),
            TransactionType::Income,
            Amount::MAXIMUM + Amount::from_cents(1),
            Category::Salary,
            "",
        )
        .expect_err("want amount over the maximum to be rejected");
        assert_eq!(error.field, Field::Amount);
    }

    #[test]
    fn new_rejects_category_of_other_type() {
        let cases = [
            (TransactionType::Income, Category::Food),
            (TransactionType::Income, Category::OtherExpense),
            (TransactionType::Expense, Category::Salary),
            (TransactionType::Expense, Category::OtherIncome),
        ];

        for (transaction_type, category) in cases {
            let result = Transaction::new(
                date!(2024 - 01 - 01),
                transaction_type,
                Amount::from_units(10),
                category,
                "",
            );

            let error = result.expect_err("want category to be rejected");
            assert_eq!(error.field, Field::Category);
        }
    }

    #[test]
    fn serializes_type_and_date_as_strings() {
        let transaction = Transaction::new(
            date!(2024 - 01 - 01),
            TransactionType::Income,
            Amount::from_units(5000),
            Category::Salary,
            "",
        )
        .unwrap();

        let json = serde_json::to_value(&transaction).unwrap();

        assert_eq!(json["date"], "2024-01-01");
        assert_eq!(json["type"], "income");
        assert_eq!(json["amount"], 5000.0);
        assert_eq!(json["category"], "salary");
        assert_eq!(json["description"], "");
    }
}
