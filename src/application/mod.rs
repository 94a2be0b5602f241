//! Application layer: checking payment requests before they are encoded.
//!
//! `Validator` is the stateless rule set applied to a single request.
//! `BatchValidator` fans a batch of independent requests out to `tokio` tasks
//! that share one validator.

pub mod batch;
pub mod validator;
