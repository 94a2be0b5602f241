use super::validator::Validator;
use crate::domain::request::PaymentRequest;
use crate::domain::violation::Violation;
use crate::error::{PayBySquareError, Result};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

/// Outcome of validating one request of a batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    /// Position of the request in the input.
    pub request: usize,
    pub summary: String,
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Validates independent requests concurrently.
///
/// Each request is moved into its own task; all tasks share one `Validator`.
/// Reports are returned in input order regardless of completion order.
#[derive(Clone)]
pub struct BatchValidator {
    validator: Arc<Validator>,
}

impl BatchValidator {
    pub fn new(validator: Validator) -> Self {
        Self {
            validator: Arc::new(validator),
        }
    }

    pub async fn validate_all(&self, requests: Vec<PaymentRequest>) -> Result<Vec<ValidationReport>> {
        self.validate_indexed(requests.into_iter().enumerate()).await
    }

    /// Like [`validate_all`](Self::validate_all), but with caller-chosen
    /// positions, e.g. when unreadable entries of the input were skipped.
    pub async fn validate_indexed(
        &self,
        requests: impl IntoIterator<Item = (usize, PaymentRequest)>,
    ) -> Result<Vec<ValidationReport>> {
        let handles: Vec<_> = requests
            .into_iter()
            .map(|(index, request)| {
                let validator = Arc::clone(&self.validator);
                tokio::spawn(async move {
                    ValidationReport {
                        request: index,
                        summary: request.to_string(),
                        violations: validator.validate(&request),
                    }
                })
            })
            .collect();

        let mut reports = Vec::with_capacity(handles.len());
        for handle in handles {
            let report = handle
                .await
                .map_err(|e| PayBySquareError::TaskError(e.to_string()))?;
            if !report.is_valid() {
                warn!(
                    request = report.request,
                    violations = report.violations.len(),
                    "Payment request is not ready for encoding"
                );
            }
            reports.push(report);
        }

        let invalid = reports.iter().filter(|r| !r.is_valid()).count();
        info!(total = reports.len(), invalid, "Batch validation finished");
        Ok(reports)
    }
}
