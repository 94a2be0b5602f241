use crate::domain::bank_account::BankAccount;
use crate::domain::direct_debit::{DirectDebit, DirectDebitScheme, DirectDebitType};
use crate::domain::payment_option::PaymentOption;
use crate::domain::request::{PaymentRequest, present};
use crate::domain::standing_order::StandingOrder;
use crate::domain::violation::{Violation, ViolationKind};
use crate::error::Result;
use chrono::NaiveDate;
use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::BTreeSet;
use tracing::debug;

pub const MAX_BANK_ACCOUNTS: usize = 6;
pub const MIN_AMOUNT: Decimal = dec!(0.01);
pub const QR_SIZE_RANGE: std::ops::RangeInclusive<i32> = 100..=1000;

const IBAN_PATTERN: &str = r"^[A-Z]{2}[0-9]{2}[A-Z0-9]+$";
const SWIFT_PATTERN: &str = r"^[A-Z]{6}[A-Z0-9]{2}([A-Z0-9]{3})?$";
const CURRENCY_PATTERN: &str = r"^[A-Z]{3}$";
const DIGITS_PATTERN: &str = r"^[0-9]+$";
const DATE_PATTERN: &str = r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Character class a text field has to satisfy on top of its length bound.
#[derive(Debug, Clone, Copy)]
enum Charset {
    Any,
    Digits,
    Iban,
    Swift,
}

/// One row of a rule table: where a text field lives and what it must satisfy.
struct TextRule<T> {
    path: &'static str,
    label: &'static str,
    value: fn(&T) -> &Option<String>,
    max_len: usize,
    charset: Charset,
}

const ACCOUNT_TEXT_RULES: &[TextRule<PaymentRequest>] = &[
    TextRule {
        path: "iban",
        label: "IBAN",
        value: |r| &r.iban,
        max_len: 34,
        charset: Charset::Iban,
    },
    TextRule {
        path: "swift",
        label: "SWIFT",
        value: |r| &r.swift,
        max_len: 11,
        charset: Charset::Swift,
    },
];

const INVOICE_TEXT_RULE: TextRule<PaymentRequest> = TextRule {
    path: "invoiceId",
    label: "Invoice ID",
    value: |r| &r.invoice_id,
    max_len: 10,
    charset: Charset::Any,
};

const REFERENCE_TEXT_RULES: &[TextRule<PaymentRequest>] = &[
    TextRule {
        path: "variableSymbol",
        label: "Variable symbol",
        value: |r| &r.variable_symbol,
        max_len: 10,
        charset: Charset::Digits,
    },
    TextRule {
        path: "constantSymbol",
        label: "Constant symbol",
        value: |r| &r.constant_symbol,
        max_len: 4,
        charset: Charset::Digits,
    },
    TextRule {
        path: "specificSymbol",
        label: "Specific symbol",
        value: |r| &r.specific_symbol,
        max_len: 10,
        charset: Charset::Digits,
    },
    TextRule {
        path: "originatorsReferenceInformation",
        label: "Originators reference",
        value: |r| &r.originators_reference_information,
        max_len: 35,
        charset: Charset::Any,
    },
    TextRule {
        path: "note",
        label: "Note",
        value: |r| &r.note,
        max_len: 140,
        charset: Charset::Any,
    },
    TextRule {
        path: "beneficiaryName",
        label: "Beneficiary name",
        value: |r| &r.beneficiary_name,
        max_len: 70,
        charset: Charset::Any,
    },
    TextRule {
        path: "beneficiaryAddress1",
        label: "Beneficiary address 1",
        value: |r| &r.beneficiary_address1,
        max_len: 70,
        charset: Charset::Any,
    },
    TextRule {
        path: "beneficiaryAddress2",
        label: "Beneficiary address 2",
        value: |r| &r.beneficiary_address2,
        max_len: 70,
        charset: Charset::Any,
    },
];

const DIRECT_DEBIT_TEXT_RULES: &[TextRule<DirectDebit>] = &[
    TextRule {
        path: "variableSymbol",
        label: "Variable symbol",
        value: |d| &d.variable_symbol,
        max_len: 10,
        charset: Charset::Digits,
    },
    TextRule {
        path: "specificSymbol",
        label: "Specific symbol",
        value: |d| &d.specific_symbol,
        max_len: 10,
        charset: Charset::Digits,
    },
    TextRule {
        path: "originatorsReferenceInformation",
        label: "Originators reference",
        value: |d| &d.originators_reference_information,
        max_len: 35,
        charset: Charset::Any,
    },
    TextRule {
        path: "mandateId",
        label: "Mandate ID",
        value: |d| &d.mandate_id,
        max_len: 35,
        charset: Charset::Any,
    },
    TextRule {
        path: "creditorId",
        label: "Creditor ID",
        value: |d| &d.creditor_id,
        max_len: 35,
        charset: Charset::Any,
    },
    TextRule {
        path: "contractId",
        label: "Contract ID",
        value: |d| &d.contract_id,
        max_len: 35,
        charset: Charset::Any,
    },
];

/// Checks a [`PaymentRequest`] against every field rule and cross-field
/// invariant, collecting all violations instead of stopping at the first.
///
/// The validator holds only compiled patterns, so a single instance can be
/// shared between threads and used on any number of requests.
///
/// Violations come out in a fixed order: top-level fields in declaration
/// order, then each entry of `bankAccounts`, then the standing order, then the
/// direct debit.
#[derive(Debug, Clone)]
pub struct Validator {
    iban: Regex,
    swift: Regex,
    currency: Regex,
    digits: Regex,
    date: Regex,
}

impl Validator {
    pub fn new() -> Result<Self> {
        Ok(Self {
            iban: Regex::new(IBAN_PATTERN)?,
            swift: Regex::new(SWIFT_PATTERN)?,
            currency: Regex::new(CURRENCY_PATTERN)?,
            digits: Regex::new(DIGITS_PATTERN)?,
            date: Regex::new(DATE_PATTERN)?,
        })
    }

    /// Returns every violation found in `request`; empty means the request is
    /// ready for encoding.
    pub fn validate(&self, request: &PaymentRequest) -> Vec<Violation> {
        let mut violations = Vec::new();

        self.check_request(request, &mut violations);
        for (index, account) in request.bank_accounts.iter().enumerate() {
            self.check_bank_account(&format!("bankAccounts[{index}]"), account, &mut violations);
        }
        if let Some(standing_order) = &request.standing_order {
            self.check_standing_order(standing_order, &mut violations);
        }
        if let Some(direct_debit) = &request.direct_debit {
            self.check_direct_debit(direct_debit, &mut violations);
        }

        debug!(
            %request,
            violations = violations.len(),
            "Validated payment request"
        );
        violations
    }

    pub fn is_valid(&self, request: &PaymentRequest) -> bool {
        self.validate(request).is_empty()
    }

    fn check_request(&self, request: &PaymentRequest, out: &mut Vec<Violation>) {
        let transfer = request.has_option(&PaymentOption::PaymentOrder)
            || (request.standing_order.is_none() && request.direct_debit.is_none());
        match request.amount {
            None if transfer => out.push(Violation::new(
                "amount",
                ViolationKind::Structural,
                "amount-required",
                "Amount is mandatory",
            )),
            None => {}
            Some(amount) => check_min_amount("amount", "Amount", amount, out),
        }

        if !self.currency.is_match(&request.currency) {
            out.push(Violation::new(
                "currency",
                ViolationKind::Format,
                "currency-format",
                format!(
                    "Currency must be a valid ISO 4217 code, got '{}'",
                    request.currency
                ),
            ));
        }

        for rule in ACCOUNT_TEXT_RULES {
            self.check_text("", rule, request, out);
        }
        if present(&request.iban).is_none() && request.bank_accounts.is_empty() {
            out.push(Violation::new(
                "iban",
                ViolationKind::Structural,
                "account-required",
                "Either iban or at least one bank account is required",
            ));
        }

        self.check_text("", &INVOICE_TEXT_RULE, request, out);

        let date = self.check_date("date", &request.date, out);
        let due_date = self.check_date("paymentDueDate", &request.payment_due_date, out);
        if let (Some(date), Some(due_date)) = (date, due_date)
            && due_date < date
        {
            out.push(Violation::new(
                "paymentDueDate",
                ViolationKind::Structural,
                "due-date-order",
                format!("Payment due date {due_date} precedes payment date {date}"),
            ));
        }

        for rule in REFERENCE_TEXT_RULES {
            self.check_text("", rule, request, out);
        }

        for (index, option) in request
            .payment_options
            .iter()
            .enumerate()
            .filter(|(_, option)| !option.is_recognized())
        {
            out.push(Violation::new(
                format!("paymentOptions[{index}]"),
                ViolationKind::Enum,
                "payment-option",
                format!(
                    "Unknown payment option '{option}', expected paymentorder, standingorder or directdebit"
                ),
            ));
        }

        if request.bank_accounts.len() > MAX_BANK_ACCOUNTS {
            out.push(Violation::new(
                "bankAccounts",
                ViolationKind::Length,
                "max-bank-accounts",
                format!(
                    "Maximum {MAX_BANK_ACCOUNTS} bank accounts allowed, got {}",
                    request.bank_accounts.len()
                ),
            ));
        }

        if request.standing_order.is_some() && !request.has_option(&PaymentOption::StandingOrder) {
            out.push(Violation::new(
                "standingOrder",
                ViolationKind::Structural,
                "standing-order-tag",
                "Standing order is set but paymentOptions does not list standingorder",
            ));
        }
        if request.direct_debit.is_some() && !request.has_option(&PaymentOption::DirectDebit) {
            out.push(Violation::new(
                "directDebit",
                ViolationKind::Structural,
                "direct-debit-tag",
                "Direct debit is set but paymentOptions does not list directdebit",
            ));
        }

        if !QR_SIZE_RANGE.contains(&request.qr_size) {
            out.push(Violation::new(
                "qrSize",
                ViolationKind::Range,
                "qr-size",
                format!(
                    "QR size must be between {} and {}, got {}",
                    QR_SIZE_RANGE.start(),
                    QR_SIZE_RANGE.end(),
                    request.qr_size
                ),
            ));
        }
    }

    fn check_bank_account(&self, path: &str, account: &BankAccount, out: &mut Vec<Violation>) {
        if account.iban.is_empty() {
            out.push(Violation::new(
                format!("{path}.iban"),
                ViolationKind::Structural,
                "iban-required",
                "IBAN is mandatory",
            ));
        } else {
            self.check_value(&format!("{path}.iban"), "IBAN", &account.iban, 34, Charset::Iban, out);
        }
        if let Some(swift) = present(&account.swift) {
            self.check_value(&format!("{path}.swift"), "SWIFT", swift, 11, Charset::Swift, out);
        }
    }

    fn check_standing_order(&self, order: &StandingOrder, out: &mut Vec<Violation>) {
        if let Some(day) = order.day
            && !(1..=31).contains(&day)
        {
            out.push(Violation::new(
                "standingOrder.day",
                ViolationKind::Range,
                "day-range",
                format!("Day must be between 1 and 31, got {day}"),
            ));
        }

        let mut seen = BTreeSet::new();
        let mut duplicates = BTreeSet::new();
        for (index, month) in order.month.iter().enumerate() {
            if !(1..=12).contains(month) {
                out.push(Violation::new(
                    format!("standingOrder.month[{index}]"),
                    ViolationKind::Range,
                    "month-range",
                    format!("Month must be between 1 and 12, got {month}"),
                ));
            }
            if !seen.insert(*month) {
                duplicates.insert(*month);
            }
        }
        if !duplicates.is_empty() {
            let listed: Vec<String> = duplicates.iter().map(i32::to_string).collect();
            out.push(Violation::new(
                "standingOrder.month",
                ViolationKind::Structural,
                "duplicate-month",
                format!("Months listed more than once: {}", listed.join(", ")),
            ));
        }

        if let Some(periodicity) = &order.periodicity
            && !periodicity.is_recognized()
        {
            out.push(Violation::new(
                "standingOrder.periodicity",
                ViolationKind::Enum,
                "periodicity",
                format!(
                    "Unknown periodicity '{periodicity}', expected one of daily, weekly, biweekly, monthly, bimonthly, quarterly, semiannual, annual"
                ),
            ));
        }

        self.check_date("standingOrder.lastDate", &order.last_date, out);
    }

    fn check_direct_debit(&self, debit: &DirectDebit, out: &mut Vec<Violation>) {
        if let DirectDebitScheme::Unrecognized(raw) = &debit.scheme {
            out.push(Violation::new(
                "directDebit.scheme",
                ViolationKind::Enum,
                "scheme",
                format!("Unknown direct debit scheme '{raw}', expected sepa or other"),
            ));
        }
        if let Some(DirectDebitType::Unrecognized(raw)) = &debit.r#type {
            out.push(Violation::new(
                "directDebit.type",
                ViolationKind::Enum,
                "debit-type",
                format!("Unknown direct debit type '{raw}', expected oneoff or recurrent"),
            ));
        }

        for rule in DIRECT_DEBIT_TEXT_RULES {
            self.check_text("directDebit.", rule, debit, out);
        }

        if let Some(max_amount) = debit.max_amount {
            check_min_amount("directDebit.maxAmount", "Max amount", max_amount, out);
        }

        self.check_date("directDebit.validTillDate", &debit.valid_till_date, out);
    }

    fn check_text<T>(&self, prefix: &str, rule: &TextRule<T>, target: &T, out: &mut Vec<Violation>) {
        if let Some(value) = present((rule.value)(target)) {
            let path = format!("{prefix}{}", rule.path);
            self.check_value(&path, rule.label, value, rule.max_len, rule.charset, out);
        }
    }

    fn check_value(
        &self,
        path: &str,
        label: &str,
        value: &str,
        max_len: usize,
        charset: Charset,
        out: &mut Vec<Violation>,
    ) {
        let len = value.chars().count();
        if len > max_len {
            out.push(Violation::new(
                path,
                ViolationKind::Length,
                "max-length",
                format!("{label} must not exceed {max_len} characters, got {len}"),
            ));
        }

        let (pattern, rule, message) = match charset {
            Charset::Any => return,
            Charset::Digits => (
                &self.digits,
                "digits-only",
                format!("{label} must contain only digits"),
            ),
            Charset::Iban => (&self.iban, "iban-format", format!("Invalid {label} format")),
            Charset::Swift => (
                &self.swift,
                "swift-format",
                format!("Invalid {label}/BIC format"),
            ),
        };
        if !pattern.is_match(value) {
            out.push(Violation::new(path, ViolationKind::Format, rule, message));
        }
    }

    /// Reports a malformed date and returns the parsed value when it is well formed.
    fn check_date(
        &self,
        path: &str,
        value: &Option<String>,
        out: &mut Vec<Violation>,
    ) -> Option<NaiveDate> {
        let raw = present(value)?;
        let parsed = self
            .date
            .is_match(raw)
            .then(|| NaiveDate::parse_from_str(raw, DATE_FORMAT).ok())
            .flatten();
        if parsed.is_none() {
            out.push(Violation::new(
                path,
                ViolationKind::Format,
                "date-format",
                format!("Expected a calendar date in YYYY-MM-DD form, got '{raw}'"),
            ));
        }
        parsed
    }
}

fn check_min_amount(path: &str, label: &str, amount: Decimal, out: &mut Vec<Violation>) {
    if amount < MIN_AMOUNT {
        out.push(Violation::new(
            path,
            ViolationKind::Range,
            "min-amount",
            format!("{label} must be at least {MIN_AMOUNT}, got {amount}"),
        ));
    }
}
