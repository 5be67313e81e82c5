//! Tests for Payment domain models.

#[cfg(test)]
mod tests {
    use crate::errors::{Error, ValidationError};
    use crate::payments::payments_model::*;
    use crate::payments::{PaymentError, BANKS, BRANCHES};
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    // ============================================================================
    // RentMonth Tests
    // ============================================================================

    #[test]
    fn test_rent_month_serialization() {
        let january = serde_json::to_string(&RentMonth::January).unwrap();
        assert_eq!(january, r#""January""#);

        let december = serde_json::to_string(&RentMonth::December).unwrap();
        assert_eq!(december, r#""December""#);
    }

    #[test]
    fn test_rent_month_deserialization() {
        let month: RentMonth = serde_json::from_str(r#""September""#).unwrap();
        assert_eq!(month, RentMonth::September);
    }

    #[test]
    fn test_rent_month_all_in_calendar_order() {
        assert_eq!(RentMonth::ALL.len(), 12);
        assert_eq!(RentMonth::ALL[0], RentMonth::January);
        assert_eq!(RentMonth::ALL[11], RentMonth::December);

        let labels: Vec<&str> = RentMonth::ALL.iter().map(|m| m.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December"
            ]
        );
    }

    #[test]
    fn test_rent_month_display() {
        assert_eq!(RentMonth::March.to_string(), "March");
    }

    // ============================================================================
    // PaymentMethod Tests
    // ============================================================================

    #[test]
    fn test_payment_method_serialization() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Cash).unwrap(),
            r#""Cash""#
        );
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Bank).unwrap(),
            r#""Bank""#
        );
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Mfs).unwrap(),
            r#""MFS""#
        );
    }

    #[test]
    fn test_payment_method_deserialization() {
        let method: PaymentMethod = serde_json::from_str(r#""MFS""#).unwrap();
        assert_eq!(method, PaymentMethod::Mfs);
    }

    // ============================================================================
    // Receipt Number Tests
    // ============================================================================

    #[test]
    fn test_derive_receipt_number_takes_millis_tail() {
        let at = Utc.timestamp_millis_opt(1705314600123).unwrap();
        assert_eq!(derive_receipt_number(at), "REC-600123");
    }

    #[test]
    fn test_derive_receipt_number_short_epoch() {
        let at = Utc.timestamp_millis_opt(123).unwrap();
        assert_eq!(derive_receipt_number(at), "REC-123");
    }

    #[test]
    fn test_derive_receipt_number_is_deterministic() {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        assert_eq!(derive_receipt_number(at), derive_receipt_number(at));
    }

    // ============================================================================
    // Settlement Phrase Tests
    // ============================================================================

    fn create_test_payment(method: PaymentMethod) -> Payment {
        Payment {
            id: "payment-1".to_string(),
            user_id: "tenant-1".to_string(),
            tenant_name: "Karim".to_string(),
            flat_number: "A-2".to_string(),
            mobile_number: "01712345678".to_string(),
            rent_month: RentMonth::January,
            rent_amount: dec!(5000),
            payment_date: Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
            receipt_number: "REC-123456".to_string(),
            payment_method: method,
            bank_name: None,
            account_number: None,
            branch: None,
            mfs_number: None,
        }
    }

    #[test]
    fn test_settlement_phrase_cash() {
        let payment = create_test_payment(PaymentMethod::Cash);
        assert_eq!(payment.settlement_phrase(), "in Cash");
    }

    #[test]
    fn test_settlement_phrase_bank() {
        let mut payment = create_test_payment(PaymentMethod::Bank);
        payment.bank_name = Some(BANKS[0].to_string());
        payment.branch = Some(BRANCHES[0].to_string());
        assert_eq!(
            payment.settlement_phrase(),
            "via Sonali Bank Plc (Madaripur)"
        );
    }

    #[test]
    fn test_settlement_phrase_bank_defaults_missing_fields() {
        let payment = create_test_payment(PaymentMethod::Bank);
        assert_eq!(payment.settlement_phrase(), "via Bank (main branch)");
    }

    #[test]
    fn test_settlement_phrase_mfs() {
        let mut payment = create_test_payment(PaymentMethod::Mfs);
        payment.mfs_number = Some("01911111111".to_string());
        assert_eq!(payment.settlement_phrase(), "via MFS (01911111111)");
    }

    // ============================================================================
    // NewPayment Validation Tests
    // ============================================================================

    fn create_new_payment() -> NewPayment {
        NewPayment {
            user_id: "tenant-1".to_string(),
            tenant_name: "Karim".to_string(),
            flat_number: "A-2".to_string(),
            mobile_number: "01712345678".to_string(),
            rent_month: RentMonth::January,
            rent_amount: dec!(5000),
            payment_method: PaymentMethod::Cash,
            bank_name: None,
            account_number: None,
            branch: None,
            mfs_number: None,
        }
    }

    #[test]
    fn test_new_payment_validate_ok() {
        assert!(create_new_payment().validate().is_ok());
    }

    #[test]
    fn test_new_payment_validate_rejects_missing_tenant() {
        let mut new_payment = create_new_payment();
        new_payment.user_id = "  ".to_string();
        assert!(matches!(
            new_payment.validate(),
            Err(Error::Payment(PaymentError::MissingTenant))
        ));
    }

    #[test]
    fn test_new_payment_validate_rejects_blank_denormalized_fields() {
        let mut new_payment = create_new_payment();
        new_payment.tenant_name = "".to_string();
        assert!(matches!(
            new_payment.validate(),
            Err(Error::Validation(ValidationError::MissingField(_)))
        ));

        let mut new_payment = create_new_payment();
        new_payment.flat_number = "".to_string();
        assert!(matches!(
            new_payment.validate(),
            Err(Error::Validation(ValidationError::MissingField(_)))
        ));
    }

    #[test]
    fn test_new_payment_validate_rejects_negative_amount() {
        let mut new_payment = create_new_payment();
        new_payment.rent_amount = dec!(-1);
        assert!(matches!(
            new_payment.validate(),
            Err(Error::Validation(ValidationError::InvalidInput(_)))
        ));
    }

    #[test]
    fn test_new_payment_validate_accepts_zero_amount() {
        let mut new_payment = create_new_payment();
        new_payment.rent_amount = Decimal::ZERO;
        assert!(new_payment.validate().is_ok());
    }

    #[test]
    fn test_new_payment_into_payment_stamps_fields() {
        let at = Utc.timestamp_millis_opt(1705314600123).unwrap();
        let payment = create_new_payment().into_payment("payment-9".to_string(), at);

        assert_eq!(payment.id, "payment-9");
        assert_eq!(payment.payment_date, at);
        assert_eq!(payment.receipt_number, "REC-600123");
        assert_eq!(payment.user_id, "tenant-1");
        assert_eq!(payment.rent_amount, dec!(5000));
    }

    // ============================================================================
    // Serialization Shape Tests
    // ============================================================================

    #[test]
    fn test_payment_serializes_camel_case() {
        let mut payment = create_test_payment(PaymentMethod::Mfs);
        payment.mfs_number = Some("01911111111".to_string());
        let value = serde_json::to_value(&payment).unwrap();

        assert_eq!(value["userId"], "tenant-1");
        assert_eq!(value["tenantName"], "Karim");
        assert_eq!(value["flatNumber"], "A-2");
        assert_eq!(value["rentMonth"], "January");
        assert_eq!(value["paymentMethod"], "MFS");
        assert_eq!(value["receiptNumber"], "REC-123456");
        assert_eq!(value["mfsNumber"], "01911111111");
        // Amounts are stored as plain JSON numbers.
        assert_eq!(value["rentAmount"], serde_json::json!(5000.0));
        assert!(value["paymentDate"].is_string());
    }

    #[test]
    fn test_payment_round_trip() {
        let mut payment = create_test_payment(PaymentMethod::Bank);
        payment.bank_name = Some("IFIC Bank Plc".to_string());
        payment.account_number = Some("0012345".to_string());
        payment.branch = Some("Shibchar".to_string());

        let json = serde_json::to_string(&payment).unwrap();
        let back: Payment = serde_json::from_str(&json).unwrap();

        assert_eq!(back.id, payment.id);
        assert_eq!(back.rent_month, payment.rent_month);
        assert_eq!(back.payment_method, payment.payment_method);
        assert_eq!(back.rent_amount, payment.rent_amount);
        assert_eq!(back.bank_name, payment.bank_name);
    }

    // ============================================================================
    // Aggregation Tests
    // ============================================================================

    #[test]
    fn test_total_amount_sums_records() {
        let mut first = create_test_payment(PaymentMethod::Cash);
        first.rent_amount = dec!(5000);
        let mut second = create_test_payment(PaymentMethod::Cash);
        second.rent_amount = dec!(7250.50);

        assert_eq!(total_amount(&[first, second]), dec!(12250.50));
    }

    #[test]
    fn test_total_amount_empty_ledger_is_zero() {
        assert_eq!(total_amount(&[]), Decimal::ZERO);
    }
}
