//! Endpoint catalogue shared by both API versions.
//!
//! v1.0 and v1.1 expose the same operations over the same signing and
//! transport path; they only disagree on where a handful of body fields
//! live. Each operation therefore has a single body builder parameterized
//! by [`ApiVersion`] instead of one implementation per version.
//!
//! Bodies are `serde_json::Value` maps built in the field order the
//! upstream expects; `serde_json`'s `preserve_order` feature keeps that
//! order through serialization, which matters because the service
//! signature hashes the payload bytes.

use crate::constants::*;
use serde_json::{json, Value};
use snapsign_core::{Error, Result};

/// API version selecting the endpoint prefix and body shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiVersion {
    /// Legacy body layout.
    V1_0,
    /// Current body layout.
    #[default]
    V1_1,
}

impl ApiVersion {
    /// URL prefix for this version, e.g. `/v1.1`.
    pub fn prefix(&self) -> &'static str {
        match self {
            ApiVersion::V1_0 => "/v1.0",
            ApiVersion::V1_1 => "/v1.1",
        }
    }
}

/// Amount with an explicit currency, e.g. `12500.00 IDR`.
#[derive(Debug, Clone, PartialEq)]
pub struct Money {
    /// Amount value; serialized with exactly two decimals.
    pub value: f64,
    /// ISO currency code, e.g. `IDR`.
    pub currency: String,
}

impl Money {
    /// Create an amount in the given currency.
    pub fn new(value: f64, currency: impl Into<String>) -> Self {
        Self {
            value,
            currency: currency.into(),
        }
    }

    /// Create an IDR amount.
    pub fn idr(value: f64) -> Self {
        Self::new(value, "IDR")
    }

    fn to_value(&self) -> Value {
        json!({
            "value": format_amount(self.value),
            "currency": self.currency,
        })
    }
}

/// Amounts go on the wire as strings with exactly two decimals.
pub(crate) fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}

pub(crate) fn validate_limit(limit: f64) -> Result<()> {
    if limit <= 0.0 {
        return Err(Error::argument_invalid("limit should be greater than 0"));
    }
    Ok(())
}

pub(crate) fn validate_refund(refund_type: &str, refund_amount: &Money) -> Result<()> {
    if refund_type != REFUND_TYPE_FULL && refund_type != REFUND_TYPE_PARTIAL {
        return Err(Error::argument_invalid(
            "refundType should be full or partial",
        ));
    }
    if refund_amount.currency.is_empty() {
        return Err(Error::argument_invalid(
            "refundAmount should carry both value and currency",
        ));
    }
    Ok(())
}

/// Map an OTP reason code to its fixed human-readable message.
///
/// Unknown codes fail fast, before any network call.
pub(crate) fn otp_reason_message(otp_reason_code: &str) -> Result<&'static str> {
    match otp_reason_code {
        OTP_CODE_CARD_REGISTRATION_SET_LIMIT => Ok("Card Registration Set Limit"),
        OTP_CODE_ACCOUNT_UNBINDING => Ok("Account Unbinding"),
        OTP_CODE_FORCE_DEBIT => Ok("Force Debit"),
        OTP_CODE_DIRECT_DEBIT => Ok("Direct Debit"),
        _ => Err(Error::argument_invalid(
            "otpReasonCode should be 02, 09, 53, or 54",
        )),
    }
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn account_binding_body(
    version: ApiVersion,
    merchant_id: &str,
    partner_reference_no: &str,
    bank_account_no: &str,
    bank_card_no: &str,
    limit: f64,
    email: &str,
    cust_id_merchant: &str,
) -> Value {
    let limit = format_amount(limit);
    match version {
        ApiVersion::V1_1 => json!({
            "partnerReferenceNo": partner_reference_no,
            "merchantId": merchant_id,
            "additionalInfo": {
                "custIdMerchant": cust_id_merchant,
                "bankAccountNo": bank_account_no,
                "bankCardNo": bank_card_no,
                "limit": limit,
            },
            "additionalData": {
                "email": email,
            },
        }),
        ApiVersion::V1_0 => json!({
            "partnerReferenceNo": partner_reference_no,
            "merchantId": merchant_id,
            "additionalData": {
                "bankAccountNo": bank_account_no,
                "bankCardNo": bank_card_no,
                "limit": limit,
                "email": email,
            },
            "additionalInfo": {
                "custIdMerchant": cust_id_merchant,
            },
        }),
    }
}

pub(crate) fn account_unbinding_body(
    version: ApiVersion,
    merchant_id: &str,
    partner_reference_no: &str,
    bank_card_token: &str,
    charge_token: &str,
    otp: &str,
    cust_id_merchant: &str,
) -> Value {
    match version {
        ApiVersion::V1_1 => json!({
            "merchantId": merchant_id,
            "partnerReferenceNo": partner_reference_no,
            "additionalInfo": {
                "otp": otp,
                "bankCardToken": bank_card_token,
                "chargeToken": charge_token,
                "custIdMerchant": cust_id_merchant,
            },
        }),
        ApiVersion::V1_0 => json!({
            "partnerReferenceNo": partner_reference_no,
            "merchantId": merchant_id,
            "chargeToken": charge_token,
            "otp": otp,
            "bankCardToken": bank_card_token,
            "additionalInfo": {
                "custIdMerchant": cust_id_merchant,
            },
        }),
    }
}

pub(crate) fn balance_inquiry_body(
    version: ApiVersion,
    partner_reference_no: &str,
    amount: f64,
    bank_card_token: &str,
    account_no: &str,
) -> Value {
    let amount = format_amount(amount);
    match version {
        ApiVersion::V1_1 => json!({
            "partnerReferenceNo": partner_reference_no,
            "additionalInfo": {
                "amount": amount,
            },
            "bankCardToken": bank_card_token,
        }),
        // v1.0 carries an explicit top-level accountNo.
        ApiVersion::V1_0 => json!({
            "partnerReferenceNo": partner_reference_no,
            "accountNo": account_no,
            "additionalInfo": {
                "amount": amount,
            },
            "bankCardToken": bank_card_token,
        }),
    }
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn debit_body(
    version: ApiVersion,
    merchant_id: &str,
    partner_reference_no: &str,
    bank_card_token: &str,
    charge_token: &str,
    otp: &str,
    amount: &Money,
    remark: &str,
    transaction_date: &str,
) -> Value {
    match version {
        ApiVersion::V1_1 => json!({
            "merchantId": merchant_id,
            "partnerReferenceNo": partner_reference_no,
            "bankCardToken": bank_card_token,
            "chargeToken": charge_token,
            "otp": otp,
            "amount": amount.to_value(),
            "additionalInfo": {
                "remark": remark,
                "transactionDate": transaction_date,
            },
        }),
        ApiVersion::V1_0 => json!({
            "merchantId": merchant_id,
            "partnerReferenceNo": partner_reference_no,
            "bankCardToken": bank_card_token,
            "chargeToken": charge_token,
            "otp": otp,
            "amount": amount.to_value(),
            "remark": remark,
            "additionalInfo": {},
        }),
    }
}

pub(crate) fn debit_refund_body(
    merchant_id: &str,
    original_partner_reference_no: &str,
    partner_refund_no: &str,
    refund_amount: &Money,
    reason: &str,
    refund_type: &str,
) -> Value {
    json!({
        "merchantId": merchant_id,
        "originalPartnerReferenceNo": original_partner_reference_no,
        "partnerRefundNo": partner_refund_no,
        "refundAmount": refund_amount.to_value(),
        "reason": reason,
        "additionalInfo": {
            "type": refund_type,
        },
    })
}

pub(crate) fn debit_status_body(
    merchant_id: &str,
    original_partner_reference_no: &str,
    transaction_date: &str,
    service_code: &str,
    amount: &Money,
) -> Value {
    json!({
        "merchantId": merchant_id,
        "originalPartnerReferenceNo": original_partner_reference_no,
        "transactionDate": transaction_date,
        "serviceCode": service_code,
        "amount": amount.to_value(),
        "additionalInfo": {},
    })
}

pub(crate) fn limit_inquiry_body(
    account_no: &str,
    partner_reference_no: &str,
    bank_card_token: &str,
    amount: f64,
) -> Value {
    json!({
        "accountNo": account_no,
        "partnerReferenceNo": partner_reference_no,
        "bankCardToken": bank_card_token,
        "additionalInfo": {
            "amount": format_amount(amount),
        },
    })
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn otp_body(
    version: ApiVersion,
    merchant_id: &str,
    partner_reference_no: &str,
    journey_id: &str,
    bank_card_token: &str,
    otp_reason_code: &str,
    otp_reason_message: &str,
    additional_info: &Value,
    external_store_id: &str,
) -> Value {
    // The journey identifier key changed casing between versions.
    let journey_key = match version {
        ApiVersion::V1_1 => "journeyId",
        ApiVersion::V1_0 => "journeyID",
    };
    json!({
        "merchantId": merchant_id,
        "partnerReferenceNo": partner_reference_no,
        journey_key: journey_id,
        "bankCardToken": bank_card_token,
        "otpReasonCode": otp_reason_code,
        "otpReasonMessage": otp_reason_message,
        "additionalInfo": additional_info,
        "externalStoreId": external_store_id,
    })
}

pub(crate) fn verify_otp_body(
    merchant_id: &str,
    original_partner_reference_no: &str,
    original_reference_no: &str,
    charge_token: &str,
    otp: &str,
) -> Value {
    json!({
        "merchantId": merchant_id,
        "originalPartnerReferenceNo": original_partner_reference_no,
        "originalReferenceNo": original_reference_no,
        "chargeToken": charge_token,
        "otp": otp,
        "additionalInfo": {},
    })
}

pub(crate) fn set_limit_body(
    merchant_id: &str,
    partner_reference_no: &str,
    bank_card_token: &str,
    limit: f64,
    charge_token: &str,
    otp: &str,
) -> Value {
    json!({
        "partnerReferenceNo": partner_reference_no,
        "bankCardToken": bank_card_token,
        "limit": format_amount(limit),
        "otp": otp,
        "additionalInfo": {
            "chargeToken": charge_token,
            "merchantId": merchant_id,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use snapsign_core::ErrorKind;
    use test_case::test_case;

    #[test_case(0.0; "zero")]
    #[test_case(-5.0; "negative")]
    fn test_limit_rejected(limit: f64) {
        let err = validate_limit(limit).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentInvalid);
    }

    #[test]
    fn test_limit_accepted() {
        assert!(validate_limit(1.0).is_ok());
    }

    #[test_case("full")]
    #[test_case("partial")]
    fn test_refund_type_accepted(refund_type: &str) {
        assert!(validate_refund(refund_type, &Money::idr(10.0)).is_ok());
    }

    #[test]
    fn test_refund_type_rejected() {
        let err = validate_refund("bogus", &Money::idr(10.0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentInvalid);
    }

    #[test]
    fn test_refund_amount_needs_currency() {
        let err = validate_refund("full", &Money::new(10.0, "")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentInvalid);
    }

    #[test_case("02", "Card Registration Set Limit")]
    #[test_case("09", "Account Unbinding")]
    #[test_case("53", "Force Debit")]
    #[test_case("54", "Direct Debit")]
    fn test_otp_reason_codes(code: &str, message: &str) {
        assert_eq!(otp_reason_message(code).unwrap(), message);
    }

    #[test]
    fn test_otp_reason_code_unknown() {
        let err = otp_reason_message("99").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentInvalid);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(250000.0), "250000.00");
        assert_eq!(format_amount(0.5), "0.50");
    }

    #[test]
    fn test_account_binding_field_placement_differs_per_version() {
        let body = |version| {
            account_binding_body(
                version,
                "M1",
                "ref-1",
                "1234555557",
                "92345678902998",
                250000.0,
                "user@example.com",
                "cust-1",
            )
        };

        let v1_1 = body(ApiVersion::V1_1);
        assert_eq!(v1_1["additionalInfo"]["limit"], "250000.00");
        assert_eq!(v1_1["additionalData"]["email"], "user@example.com");
        assert!(v1_1["additionalInfo"].get("email").is_none());

        let v1_0 = body(ApiVersion::V1_0);
        assert_eq!(v1_0["additionalData"]["limit"], "250000.00");
        assert_eq!(v1_0["additionalData"]["email"], "user@example.com");
        assert_eq!(v1_0["additionalInfo"]["custIdMerchant"], "cust-1");
        assert!(v1_0["additionalInfo"].get("limit").is_none());
    }

    #[test]
    fn test_account_unbinding_v1_0_hoists_fields() {
        let v1_0 = account_unbinding_body(ApiVersion::V1_0, "M1", "ref-1", "card", "charge", "123456", "cust-1");
        assert_eq!(v1_0["otp"], "123456");
        assert_eq!(v1_0["bankCardToken"], "card");

        let v1_1 = account_unbinding_body(ApiVersion::V1_1, "M1", "ref-1", "card", "charge", "123456", "cust-1");
        assert!(v1_1.get("otp").is_none());
        assert_eq!(v1_1["additionalInfo"]["otp"], "123456");
    }

    #[test]
    fn test_balance_inquiry_v1_0_adds_account_no() {
        let v1_0 = balance_inquiry_body(ApiVersion::V1_0, "ref-1", 125.5, "card", "1234555557");
        assert_eq!(v1_0["accountNo"], "1234555557");
        assert_eq!(v1_0["additionalInfo"]["amount"], "125.50");

        let v1_1 = balance_inquiry_body(ApiVersion::V1_1, "ref-1", 125.5, "card", "1234555557");
        assert!(v1_1.get("accountNo").is_none());
    }

    #[test]
    fn test_debit_remark_moves_per_version() {
        let v1_1 = debit_body(
            ApiVersion::V1_1,
            "M1",
            "ref-1",
            "card",
            "charge",
            "123456",
            &Money::idr(10000.0),
            "lunch",
            "2024-01-01T00:00:00+07:00",
        );
        assert_eq!(v1_1["additionalInfo"]["remark"], "lunch");
        assert_eq!(
            v1_1["additionalInfo"]["transactionDate"],
            "2024-01-01T00:00:00+07:00"
        );
        assert_eq!(v1_1["amount"]["value"], "10000.00");

        let v1_0 = debit_body(
            ApiVersion::V1_0,
            "M1",
            "ref-1",
            "card",
            "charge",
            "123456",
            &Money::idr(10000.0),
            "lunch",
            "2024-01-01T00:00:00+07:00",
        );
        assert_eq!(v1_0["remark"], "lunch");
        assert_eq!(v1_0["additionalInfo"], json!({}));
    }

    #[test]
    fn test_otp_journey_key_casing() {
        let info = json!({ "expiredOtp": "" });
        let v1_1 = otp_body(
            ApiVersion::V1_1,
            "M1",
            "ref-1",
            "journey-1",
            "card",
            "54",
            "Direct Debit",
            &info,
            "store-1",
        );
        assert_eq!(v1_1["journeyId"], "journey-1");
        assert!(v1_1.get("journeyID").is_none());

        let v1_0 = otp_body(
            ApiVersion::V1_0,
            "M1",
            "ref-1",
            "journey-1",
            "card",
            "54",
            "Direct Debit",
            &info,
            "store-1",
        );
        assert_eq!(v1_0["journeyID"], "journey-1");
        assert!(v1_0.get("journeyId").is_none());
    }

    #[test]
    fn test_empty_object_bodies_serialize_as_braces() {
        let body = verify_otp_body("M1", "ref-1", "orig-1", "charge", "123456");
        assert_eq!(body["additionalInfo"].to_string(), "{}");
    }

    #[test]
    fn test_set_limit_nests_charge_token() {
        let body = set_limit_body("M1", "ref-1", "card", 500000.0, "charge", "123456");
        assert_eq!(body["limit"], "500000.00");
        assert_eq!(body["additionalInfo"]["chargeToken"], "charge");
        assert_eq!(body["additionalInfo"]["merchantId"], "M1");
    }

    #[test]
    fn test_body_serialization_preserves_insertion_order() {
        let body = limit_inquiry_body("123", "ref-1", "card", 1.0);
        let wire = serde_json::to_string(&body).unwrap();
        let account_no = wire.find("accountNo").unwrap();
        let partner = wire.find("partnerReferenceNo").unwrap();
        let card = wire.find("bankCardToken").unwrap();
        assert!(account_no < partner && partner < card);
    }
}
