//! Fluent construction of [`PaymentRequest`] values.

use super::bank_account::BankAccount;
use super::direct_debit::DirectDebit;
use super::payment_option::PaymentOption;
use super::request::PaymentRequest;
use super::standing_order::StandingOrder;
use rust_decimal::Decimal;

/// Builder for [`PaymentRequest`].
///
/// Every setter replaces the stored value and nothing is checked until the
/// finished request is validated, so `build` cannot fail.
#[derive(Debug, Clone, Default)]
pub struct PaymentRequestBuilder {
    request: PaymentRequest,
}

impl PaymentRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn amount(mut self, amount: Decimal) -> Self {
        self.request.amount = Some(amount);
        self
    }

    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.request.currency = currency.into();
        self
    }

    pub fn iban(mut self, iban: impl Into<String>) -> Self {
        self.request.iban = Some(iban.into());
        self
    }

    pub fn swift(mut self, swift: impl Into<String>) -> Self {
        self.request.swift = Some(swift.into());
        self
    }

    pub fn invoice_id(mut self, invoice_id: impl Into<String>) -> Self {
        self.request.invoice_id = Some(invoice_id.into());
        self
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.request.date = Some(date.into());
        self
    }

    pub fn payment_due_date(mut self, payment_due_date: impl Into<String>) -> Self {
        self.request.payment_due_date = Some(payment_due_date.into());
        self
    }

    pub fn variable_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.request.variable_symbol = Some(symbol.into());
        self
    }

    pub fn constant_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.request.constant_symbol = Some(symbol.into());
        self
    }

    pub fn specific_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.request.specific_symbol = Some(symbol.into());
        self
    }

    pub fn originators_reference_information(mut self, reference: impl Into<String>) -> Self {
        self.request.originators_reference_information = Some(reference.into());
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.request.note = Some(note.into());
        self
    }

    pub fn beneficiary_name(mut self, name: impl Into<String>) -> Self {
        self.request.beneficiary_name = Some(name.into());
        self
    }

    pub fn beneficiary_address1(mut self, address: impl Into<String>) -> Self {
        self.request.beneficiary_address1 = Some(address.into());
        self
    }

    pub fn beneficiary_address2(mut self, address: impl Into<String>) -> Self {
        self.request.beneficiary_address2 = Some(address.into());
        self
    }

    /// Appends a payment option; call order is encoding priority.
    pub fn payment_option(mut self, option: impl Into<PaymentOption>) -> Self {
        self.request.payment_options.push(option.into());
        self
    }

    pub fn bank_account(mut self, account: BankAccount) -> Self {
        self.request.bank_accounts.push(account);
        self
    }

    pub fn standing_order(mut self, standing_order: StandingOrder) -> Self {
        self.request.standing_order = Some(standing_order);
        self
    }

    pub fn direct_debit(mut self, direct_debit: DirectDebit) -> Self {
        self.request.direct_debit = Some(direct_debit);
        self
    }

    pub fn with_frame(mut self, with_frame: bool) -> Self {
        self.request.with_frame = with_frame;
        self
    }

    pub fn qr_size(mut self, qr_size: i32) -> Self {
        self.request.qr_size = qr_size;
        self
    }

    pub fn build(self) -> PaymentRequest {
        self.request
    }
}

impl PaymentRequest {
    pub fn builder() -> PaymentRequestBuilder {
        PaymentRequestBuilder::new()
    }
}
