use serde::{Deserialize, Serialize};

/// One receiving account, identified by IBAN with an optional SWIFT/BIC.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BankAccount {
    pub iban: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swift: Option<String>,
}

impl BankAccount {
    pub fn new(iban: impl Into<String>) -> Self {
        Self {
            iban: iban.into(),
            swift: None,
        }
    }

    pub fn with_swift(mut self, swift: impl Into<String>) -> Self {
        self.swift = Some(swift.into());
        self
    }
}
