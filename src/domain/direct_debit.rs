use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Collection scheme of the mandate; unset defaults to other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DirectDebitScheme {
    Sepa,
    #[default]
    Other,
    Unrecognized(String),
}

impl DirectDebitScheme {
    pub fn code(&self) -> Option<u8> {
        match self {
            DirectDebitScheme::Other => Some(0),
            DirectDebitScheme::Sepa => Some(1),
            DirectDebitScheme::Unrecognized(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            DirectDebitScheme::Sepa => "sepa",
            DirectDebitScheme::Other => "other",
            DirectDebitScheme::Unrecognized(raw) => raw,
        }
    }
}

impl From<&str> for DirectDebitScheme {
    fn from(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "sepa" => DirectDebitScheme::Sepa,
            "other" => DirectDebitScheme::Other,
            _ => DirectDebitScheme::Unrecognized(raw.to_string()),
        }
    }
}

impl From<String> for DirectDebitScheme {
    fn from(raw: String) -> Self {
        Self::from(raw.as_str())
    }
}

impl From<DirectDebitScheme> for String {
    fn from(scheme: DirectDebitScheme) -> Self {
        scheme.as_str().to_string()
    }
}

impl fmt::Display for DirectDebitScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the mandate allows a single collection or repeated ones.
///
/// `one-off` is accepted on input and stored as `oneoff`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DirectDebitType {
    OneOff,
    Recurrent,
    Unrecognized(String),
}

impl DirectDebitType {
    pub fn code(&self) -> Option<u8> {
        match self {
            DirectDebitType::OneOff => Some(0),
            DirectDebitType::Recurrent => Some(1),
            DirectDebitType::Unrecognized(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            DirectDebitType::OneOff => "oneoff",
            DirectDebitType::Recurrent => "recurrent",
            DirectDebitType::Unrecognized(raw) => raw,
        }
    }
}

impl From<&str> for DirectDebitType {
    fn from(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "oneoff" | "one-off" => DirectDebitType::OneOff,
            "recurrent" => DirectDebitType::Recurrent,
            _ => DirectDebitType::Unrecognized(raw.to_string()),
        }
    }
}

impl From<String> for DirectDebitType {
    fn from(raw: String) -> Self {
        Self::from(raw.as_str())
    }
}

impl From<DirectDebitType> for String {
    fn from(r#type: DirectDebitType) -> Self {
        r#type.as_str().to_string()
    }
}

impl fmt::Display for DirectDebitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mandate description for an inkaso / SEPA direct-debit collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DirectDebit {
    pub scheme: DirectDebitScheme,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<DirectDebitType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable_symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specific_symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub originators_reference_information: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mandate_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creditor_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_id: Option<String>,
    /// Ceiling on the amount the creditor may collect.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_amount: Option<Decimal>,
    /// Mandate expiry (`YYYY-MM-DD`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_till_date: Option<String>,
}

impl DirectDebit {
    pub fn new(r#type: DirectDebitType) -> Self {
        Self {
            r#type: Some(r#type),
            ..Self::default()
        }
    }

    pub fn scheme(mut self, scheme: DirectDebitScheme) -> Self {
        self.scheme = scheme;
        self
    }

    pub fn mandate_id(mut self, mandate_id: impl Into<String>) -> Self {
        self.mandate_id = Some(mandate_id.into());
        self
    }

    pub fn creditor_id(mut self, creditor_id: impl Into<String>) -> Self {
        self.creditor_id = Some(creditor_id.into());
        self
    }

    pub fn max_amount(mut self, max_amount: Decimal) -> Self {
        self.max_amount = Some(max_amount);
        self
    }

    pub fn valid_till_date(mut self, valid_till_date: impl Into<String>) -> Self {
        self.valid_till_date = Some(valid_till_date.into());
        self
    }
}
