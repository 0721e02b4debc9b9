//! Transaction management for the expense tracker.
//!
//! This module contains everything related to recording transactions:
//! - The `Transaction` model and its validation error
//! - The per-session `TransactionStore`
//! - The form controller that validates submissions and appends them to a store
//! - The form markup and the route handlers for submitting it

mod category_options_endpoint;
mod core;
mod create_endpoint;
mod form;
mod store;
mod submit;

pub use category_options_endpoint::get_category_options;
pub use core::{Field, Transaction, ValidationError};
pub use create_endpoint::create_transaction_endpoint;
pub use form::{TransactionFormDefaults, category_options, transaction_form};
pub use store::TransactionStore;
pub use submit::{SubmissionPolicy, TransactionSubmission, submit};
