mod common;

use common::valid_request;
use paybysquare::domain::bank_account::BankAccount;
use paybysquare::domain::direct_debit::{DirectDebit, DirectDebitScheme, DirectDebitType};
use paybysquare::domain::payment_option::PaymentOption;
use paybysquare::domain::request::PaymentRequest;
use paybysquare::domain::standing_order::{Periodicity, StandingOrder};
use rust_decimal_macros::dec;

fn full_request() -> PaymentRequest {
    let mut request = valid_request();
    request.payment_options = vec![
        PaymentOption::StandingOrder,
        PaymentOption::DirectDebit,
        PaymentOption::PaymentOrder,
    ];
    request.bank_accounts = vec![
        BankAccount::new("SK3112000000198742637541").with_swift("TATRSKBX"),
        BankAccount::new("CZ6508000000192000145399"),
    ];
    request.standing_order = Some(
        StandingOrder::new(Periodicity::Bimonthly)
            .day(15)
            .months([2, 4, 6])
            .last_date("2025-12-31"),
    );
    request.direct_debit = Some(
        DirectDebit::new(DirectDebitType::from("one-off"))
            .scheme(DirectDebitScheme::Sepa)
            .mandate_id("M-2024-001")
            .creditor_id("SK12ZZZ70000000001")
            .max_amount(dec!(120.00))
            .valid_till_date("2026-01-31"),
    );
    request.with_frame = false;
    request.qr_size = 512;
    request
}

#[test]
fn test_json_round_trip_is_field_for_field_equal() {
    let request = full_request();
    let json = serde_json::to_string(&request).unwrap();
    let restored: PaymentRequest = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, request);
}

#[test]
fn test_round_trip_keeps_unrecognized_tokens() {
    let mut request = full_request();
    request.payment_options.push(PaymentOption::from("cheque"));
    if let Some(order) = request.standing_order.as_mut() {
        order.periodicity = Some(Periodicity::from("hourly"));
    }
    let json = serde_json::to_string(&request).unwrap();
    let restored: PaymentRequest = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, request);
}

#[test]
fn test_external_field_names() {
    let json = serde_json::to_value(full_request()).unwrap();
    assert_eq!(json["beneficiaryAddress1"], "Hlavna 1");
    assert_eq!(json["paymentDueDate"], "2024-06-15");
    assert_eq!(json["standingOrder"]["periodicity"], "B");
    assert_eq!(json["standingOrder"]["lastDate"], "2025-12-31");
    assert_eq!(json["directDebit"]["type"], "oneoff");
    assert_eq!(json["directDebit"]["scheme"], "sepa");
    assert_eq!(json["withFrame"], false);
    assert_eq!(json["qrSize"], 512);
    assert!(json.get("specificSymbol").is_none());
}

#[test]
fn test_encoder_facing_helpers() {
    let request = full_request();
    assert_eq!(request.payment_options_mask(), 7);
    assert_eq!(request.effective_accounts().len(), 2);
    assert_eq!(request.effective_due_date(), Some("2024-06-15"));

    let order = request.standing_order.as_ref().unwrap();
    assert_eq!(order.month_mask(), 0b10_1010);
    assert_eq!(order.periodicity.as_ref().unwrap().code(), Some('B'));

    let debit = request.direct_debit.as_ref().unwrap();
    assert_eq!(debit.scheme.code(), Some(1));
    assert_eq!(debit.r#type.as_ref().unwrap().code(), Some(0));
}
