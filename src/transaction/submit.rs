//! Validates submitted transaction forms and adds them to a session's store.

use serde::Deserialize;
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    amount::Amount,
    category::{Category, TransactionType, allowed_categories},
    transaction::{Field, Transaction, TransactionStore, ValidationError},
};

/// Dates are submitted as ISO 8601 calendar dates, e.g. "2024-01-31".
const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

/// The raw user input for a new transaction, exactly as it was submitted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransactionSubmission {
    /// Whether the transaction is income or an expense.
    #[serde(rename = "type_")]
    pub transaction_type: TransactionType,
    /// The date as `YYYY-MM-DD`, today's date is used if empty or missing.
    #[serde(default)]
    pub date: Option<String>,
    /// The amount as a decimal number.
    pub amount: String,
    /// The category ID, see [Category::id].
    pub category: String,
    /// Optional text describing the transaction.
    #[serde(default)]
    pub description: Option<String>,
}

/// The rules a submission is checked against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubmissionPolicy {
    /// The smallest amount that will be accepted.
    pub minimum_amount: Amount,
    /// The date to use when the submission does not specify one.
    pub today: Date,
}

/// Validate `submission` and, if it is valid, append it to `store`.
///
/// Fields are checked in the order date, amount, category and the first
/// invalid field is reported.
///
/// # Errors
/// Returns a [ValidationError] if:
/// - the date is not a valid `YYYY-MM-DD` calendar date,
/// - the amount is not a number, is less than [SubmissionPolicy::minimum_amount]
///   or is greater than [Amount::MAXIMUM],
/// - or the category is unknown or not allowed for the transaction type.
///
/// The store is not modified when an error is returned.
pub fn submit(
    store: &mut TransactionStore,
    submission: &TransactionSubmission,
    policy: &SubmissionPolicy,
) -> Result<Transaction, ValidationError> {
    let date = parse_date(submission.date.as_deref(), policy.today)?;
    let amount = parse_amount(&submission.amount, policy.minimum_amount)?;
    let category = parse_category(&submission.category, submission.transaction_type)?;
    let description = submission.description.as_deref().unwrap_or_default();

    let transaction = Transaction::new(
        date,
        submission.transaction_type,
        amount,
        category,
        description,
    )?;

    store.append(transaction.clone());

    Ok(transaction)
}

fn parse_date(text: Option<&str>, today: Date) -> Result<Date, ValidationError> {
    match text.map(str::trim) {
        None | Some("") => Ok(today),
        Some(text) => Date::parse(text, DATE_FORMAT).map_err(|_| {
            ValidationError::new(
                Field::Date,
                format!("\"{text}\" is not a valid date, expected YYYY-MM-DD"),
            )
        }),
    }
}

fn parse_amount(text: &str, minimum_amount: Amount) -> Result<Amount, ValidationError> {
    let amount: Amount = text
        .parse()
        .map_err(|error| ValidationError::new(Field::Amount, format!("{error}")))?;

    if amount < minimum_amount {
        return Err(ValidationError::new(
            Field::Amount,
            format!("must be at least {minimum_amount}, got {amount}"),
        ));
    }

    if amount > Amount::MAXIMUM {
        return Err(ValidationError::new(
            Field::Amount,
            format!("must be at most {}, got {amount}", Amount::MAXIMUM),
        ));
    }

    Ok(amount)
}

fn parse_category(
    id: &str,
    transaction_type: TransactionType,
) -> Result<Category, ValidationError> {
    let category = Category::from_id(id.trim()).ok_or_else(|| {
        ValidationError::new(Field::Category, format!("\"{id}\" is not a category"))
    })?;

    if !allowed_categories(transaction_type).contains(&category) {
        return Err(ValidationError::new(
            Field::Category,
            format!("{category} is not a category for {transaction_type}"),
        ));
    }

    Ok(category)
}
