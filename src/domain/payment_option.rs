use serde::{Deserialize, Serialize};
use std::fmt;

/// A payment-type tag listed in `paymentOptions`.
///
/// Tags are normalized once when they enter the model; anything that does not
/// match a known tag is kept verbatim so the validator can report it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentOption {
    PaymentOrder,
    StandingOrder,
    DirectDebit,
    Unrecognized(String),
}

impl PaymentOption {
    /// Bit assigned to the tag in the encoded payment-options field.
    pub fn flag(&self) -> u8 {
        match self {
            PaymentOption::PaymentOrder => 1,
            PaymentOption::StandingOrder => 2,
            PaymentOption::DirectDebit => 4,
            PaymentOption::Unrecognized(_) => 0,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PaymentOption::PaymentOrder => "paymentorder",
            PaymentOption::StandingOrder => "standingorder",
            PaymentOption::DirectDebit => "directdebit",
            PaymentOption::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, PaymentOption::Unrecognized(_))
    }
}

impl From<&str> for PaymentOption {
    fn from(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "paymentorder" => PaymentOption::PaymentOrder,
            "standingorder" => PaymentOption::StandingOrder,
            "directdebit" => PaymentOption::DirectDebit,
            _ => PaymentOption::Unrecognized(raw.to_string()),
        }
    }
}

impl From<String> for PaymentOption {
    fn from(raw: String) -> Self {
        Self::from(raw.as_str())
    }
}

impl From<PaymentOption> for String {
    fn from(option: PaymentOption) -> Self {
        option.as_str().to_string()
    }
}

impl fmt::Display for PaymentOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
