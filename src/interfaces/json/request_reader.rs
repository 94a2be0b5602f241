use crate::domain::request::PaymentRequest;
use crate::error::{PayBySquareError, Result};
use serde_json::Value;
use std::io::Read;

/// Reads payment requests from a JSON source.
///
/// The document is either a single request object or an array of them. Each
/// entry is decoded on its own, so one malformed request does not hide the
/// others.
pub struct RequestReader<R: Read> {
    source: R,
}

impl<R: Read> RequestReader<R> {
    /// Creates a new `RequestReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Parses the document and returns an iterator decoding one request per entry.
    ///
    /// Fails only when the source is not JSON at all.
    pub fn requests(self) -> Result<impl Iterator<Item = Result<PaymentRequest>>> {
        let document: Value = serde_json::from_reader(self.source)?;
        let entries = match document {
            Value::Array(entries) => entries,
            single => vec![single],
        };
        Ok(entries
            .into_iter()
            .map(|entry| serde_json::from_value(entry).map_err(PayBySquareError::from)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::direct_debit::DirectDebitType;
    use crate::domain::payment_option::PaymentOption;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reader_single_object() {
        let data = r#"{"amount": 12.5, "iban": "SK3112000000198742637541", "beneficiaryName": "Jan Novak"}"#;
        let reader = RequestReader::new(data.as_bytes());
        let results: Vec<Result<PaymentRequest>> = reader.requests().unwrap().collect();

        assert_eq!(results.len(), 1);
        let request = results[0].as_ref().unwrap();
        assert_eq!(request.amount, Some(dec!(12.5)));
        assert_eq!(request.beneficiary_name.as_deref(), Some("Jan Novak"));
    }

    #[test]
    fn test_reader_array_with_nested_structures() {
        let data = r#"[
            {"amount": "1.00", "iban": "SK3112000000198742637541"},
            {
                "paymentOptions": ["directdebit"],
                "bankAccounts": [{"iban": "CZ6508000000192000145399", "swift": "GIBACZPX"}],
                "directDebit": {"type": "one-off", "mandateId": "M-1"}
            }
        ]"#;
        let reader = RequestReader::new(data.as_bytes());
        let results: Vec<Result<PaymentRequest>> = reader.requests().unwrap().collect();

        assert_eq!(results.len(), 2);
        let second = results[1].as_ref().unwrap();
        assert_eq!(second.payment_options, vec![PaymentOption::DirectDebit]);
        assert_eq!(second.bank_accounts[0].swift.as_deref(), Some("GIBACZPX"));
        assert_eq!(
            second.direct_debit.as_ref().unwrap().r#type,
            Some(DirectDebitType::OneOff)
        );
    }

    #[test]
    fn test_reader_malformed_entry() {
        let data = r#"[{"amount": "lots"}, {"amount": 2}]"#;
        let reader = RequestReader::new(data.as_bytes());
        let results: Vec<Result<PaymentRequest>> = reader.requests().unwrap().collect();

        assert!(results[0].is_err());
        assert!(results[1].is_ok());
    }

    #[test]
    fn test_reader_rejects_non_json() {
        let reader = RequestReader::new("amount=1".as_bytes());
        assert!(matches!(
            reader.requests().err(),
            Some(PayBySquareError::JsonError(_))
        ));
    }
}
