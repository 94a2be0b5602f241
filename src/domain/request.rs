use super::bank_account::BankAccount;
use super::direct_debit::DirectDebit;
use super::payment_option::PaymentOption;
use super::standing_order::StandingOrder;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

pub const DEFAULT_CURRENCY: &str = "EUR";
pub const DEFAULT_QR_SIZE: i32 = 300;

/// A payment instruction waiting to be encoded into a payment code.
///
/// Fields are plain storage: nothing is checked on assignment, so a request may
/// be incomplete or invalid while it is being filled in. Run it through
/// [`Validator`](crate::application::validator::Validator) before handing it to
/// an encoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swift: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable_symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constant_symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specific_symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub originators_reference_information: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beneficiary_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beneficiary_address1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beneficiary_address2: Option<String>,
    /// Payment types in encoding priority order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub payment_options: Vec<PaymentOption>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bank_accounts: Vec<BankAccount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standing_order: Option<StandingOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direct_debit: Option<DirectDebit>,
    pub with_frame: bool,
    pub qr_size: i32,
}

impl Default for PaymentRequest {
    fn default() -> Self {
        Self {
            amount: None,
            currency: DEFAULT_CURRENCY.to_string(),
            iban: None,
            swift: None,
            invoice_id: None,
            date: None,
            payment_due_date: None,
            variable_symbol: None,
            constant_symbol: None,
            specific_symbol: None,
            originators_reference_information: None,
            note: None,
            beneficiary_name: None,
            beneficiary_address1: None,
            beneficiary_address2: None,
            payment_options: Vec::new(),
            bank_accounts: Vec::new(),
            standing_order: None,
            direct_debit: None,
            with_frame: true,
            qr_size: DEFAULT_QR_SIZE,
        }
    }
}

impl PaymentRequest {
    pub fn new(amount: Decimal, iban: impl Into<String>, beneficiary_name: impl Into<String>) -> Self {
        Self {
            amount: Some(amount),
            iban: Some(iban.into()),
            beneficiary_name: Some(beneficiary_name.into()),
            ..Self::default()
        }
    }

    pub fn has_option(&self, option: &PaymentOption) -> bool {
        self.payment_options.contains(option)
    }

    /// Bitwise sum of the recognized payment options.
    pub fn payment_options_mask(&self) -> u8 {
        self.payment_options
            .iter()
            .fold(0, |mask, option| mask | option.flag())
    }

    /// Accounts an encoder should pack: `bank_accounts` when any are listed,
    /// otherwise the single `iban`/`swift` pair.
    pub fn effective_accounts(&self) -> Cow<'_, [BankAccount]> {
        if !self.bank_accounts.is_empty() {
            return Cow::Borrowed(&self.bank_accounts);
        }
        match present(&self.iban) {
            Some(iban) => Cow::Owned(vec![BankAccount {
                iban: iban.to_string(),
                swift: present(&self.swift).map(str::to_string),
            }]),
            None => Cow::Borrowed(&[]),
        }
    }

    /// `payment_due_date` if set, otherwise `date`.
    pub fn effective_due_date(&self) -> Option<&str> {
        present(&self.payment_due_date).or_else(|| present(&self.date))
    }

    fn primary_iban(&self) -> Option<&str> {
        present(&self.iban).or_else(|| self.bank_accounts.first().map(|a| a.iban.as_str()))
    }
}

/// Treats an empty string the same as an unset field.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl fmt::Display for PaymentRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let amount = self
            .amount
            .map(|a| a.to_string())
            .unwrap_or_else(|| "none".to_string());
        write!(
            f,
            "PaymentRequest{{amount={}, currency='{}', iban='{}', beneficiaryName='{}', variableSymbol='{}'}}",
            amount,
            self.currency,
            self.primary_iban().unwrap_or("none"),
            present(&self.beneficiary_name).unwrap_or("none"),
            present(&self.variable_symbol).unwrap_or("none"),
        )
    }
}
