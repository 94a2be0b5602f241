//! Adapters between the payment-request model and the outside world.

pub mod csv;
pub mod json;
