//! Transaction types and the categories that belong to each type.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Whether money was earned or spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money earned.
    Income,
    /// Money spent.
    Expense,
}

impl TransactionType {
    /// All transaction types in display order.
    pub const ALL: [TransactionType; 2] = [TransactionType::Income, TransactionType::Expense];

    /// The human readable name of the type.
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Income => "Income",
            TransactionType::Expense => "Expense",
        }
    }

    /// The value used for this type in forms and query strings.
    pub fn id(self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A label for a transaction, scoped to either income or expenses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Regular pay.
    Salary,
    /// One-off pay on top of a salary.
    Bonus,
    /// Income that fits no other category.
    OtherIncome,
    /// Groceries and eating out.
    Food,
    /// Public transport, fuel, taxis.
    Transport,
    /// Rent, mortgage payments, repairs.
    Housing,
    /// Entertainment.
    Entertainment,
    /// Shopping.
    Shopping,
    /// Power, water, internet, phone.
    Utilities,
    /// Medical and health costs.
    Health,
    /// Expenses that fit no other category.
    OtherExpense,
}

const INCOME_CATEGORIES: [Category; 3] =
    [Category::Salary, Category::Bonus, Category::OtherIncome];

const EXPENSE_CATEGORIES: [Category; 8] = [
    Category::Food,
    Category::Transport,
    Category::Housing,
    Category::Entertainment,
    Category::Shopping,
    Category::Utilities,
    Category::Health,
    Category::OtherExpense,
];

/// The categories a transaction of `transaction_type` may be filed under.
///
/// Both form validation and the category options offered by the form use this
/// lookup, so the two cannot disagree.
pub fn allowed_categories(transaction_type: TransactionType) -> &'static [Category] {
    match transaction_type {
        TransactionType::Income => &INCOME_CATEGORIES,
        TransactionType::Expense => &EXPENSE_CATEGORIES,
    }
}

impl Category {
    /// Whether this category may be used for a transaction of `transaction_type`.
    pub fn belongs_to(self, transaction_type: TransactionType) -> bool {
        allowed_categories(transaction_type).contains(&self)
    }

    /// The human readable name of the category.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Salary => "Salary",
            Category::Bonus => "Bonus",
            Category::OtherIncome => "Other Income",
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Housing => "Housing",
            Category::Entertainment => "Entertainment",
            Category::Shopping => "Shopping",
            Category::Utilities => "Utilities",
            Category::Health => "Health",
            Category::OtherExpense => "Other Expense",
        }
    }

    /// The value used for this category in forms, e.g. "other_income".
    pub fn id(self) -> &'static str {
        match self {
            Category::Salary => "salary",
            Category::Bonus => "bonus",
            Category::OtherIncome => "other_income",
            Category::Food => "food",
            Category::Transport => "transport",
            Category::Housing => "housing",
            Category::Entertainment => "entertainment",
            Category::Shopping => "shopping",
            Category::Utilities => "utilities",
            Category::Health => "health",
            Category::OtherExpense => "other_expense",
        }
    }

    /// Look up a category by its form value (see [Category::id]).
    pub fn from_id(id: &str) -> Option<Category> {
        TransactionType::ALL
            .iter()
            .flat_map(|&transaction_type| allowed_categories(transaction_type))
            .copied()
            .find(|category| category.id() == id)
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
