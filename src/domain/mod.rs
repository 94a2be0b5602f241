//! Payment-request data model.
//!
//! These are plain value types: assigning a field never fails, and all
//! constraint checking lives in the application layer's `Validator`.

pub mod bank_account;
pub mod builder;
pub mod direct_debit;
pub mod payment_option;
pub mod request;
pub mod standing_order;
pub mod violation;
