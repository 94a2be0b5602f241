#![allow(dead_code)]

use paybysquare::domain::request::PaymentRequest;
use rust_decimal_macros::dec;
use std::fs::File;
use std::io::Error;
use std::path::Path;

pub fn valid_request() -> PaymentRequest {
    PaymentRequest::builder()
        .amount(dec!(49.90))
        .iban("SK3112000000198742637541")
        .swift("TATRSKBX")
        .beneficiary_name("Jan Novak")
        .beneficiary_address1("Hlavna 1")
        .beneficiary_address2("811 01 Bratislava")
        .variable_symbol("1234567890")
        .constant_symbol("0308")
        .invoice_id("FA-2024-01")
        .date("2024-06-01")
        .payment_due_date("2024-06-15")
        .note("Invoice 2024/01")
        .payment_option("paymentorder")
        .build()
}

pub fn generate_requests_json(path: &Path, rows: usize) -> Result<(), Error> {
    let requests: Vec<PaymentRequest> = (1..=rows)
        .map(|i| {
            let mut request = valid_request();
            request.variable_symbol = Some(i.to_string());
            request
        })
        .collect();
    let file = File::create(path)?;
    serde_json::to_writer(file, &requests)?;
    Ok(())
}
