// Env values used by the Autopay credential providers.
pub const AUTOPAY_MERCHANT_ID: &str = "AUTOPAY_MERCHANT_ID";
pub const AUTOPAY_CLIENT_ID: &str = "AUTOPAY_CLIENT_ID";
pub const AUTOPAY_CLIENT_SECRET: &str = "AUTOPAY_CLIENT_SECRET";
pub const AUTOPAY_PRIVATE_KEY: &str = "AUTOPAY_PRIVATE_KEY";

/// Fixed device identifier sent on every request, token and service alike.
pub const DEVICE_ID: &str = "snapsign-autopay/0.1.0";

/// Token endpoint. Not version prefixed and not service signed.
pub const URL_ACCESS_TOKEN_B2B: &str = "/access-token/b2b";

// Service endpoints, relative to the version prefix.
pub const URL_ACCOUNT_BINDING: &str = "/account-binding";
pub const URL_ACCOUNT_UNBINDING: &str = "/account-unbinding";
pub const URL_BALANCE_INQUIRY: &str = "/balance-inquiry";
pub const URL_DEBIT: &str = "/debit";
pub const URL_DEBIT_REFUND: &str = "/debit-refund";
pub const URL_DEBIT_STATUS: &str = "/debit-status";
pub const URL_LIMIT_INQUIRY: &str = "/limit-inquiry";
pub const URL_OTP: &str = "/otp";
pub const URL_OTP_VERIFY: &str = "/otp-verify";
pub const URL_SET_LIMIT: &str = "/set-limit";

/// OTP reason code for card registration and set limit.
pub const OTP_CODE_CARD_REGISTRATION_SET_LIMIT: &str = "02";
/// OTP reason code for account unbinding.
pub const OTP_CODE_ACCOUNT_UNBINDING: &str = "09";
/// OTP reason code for force debit.
pub const OTP_CODE_FORCE_DEBIT: &str = "53";
/// OTP reason code for direct debit.
pub const OTP_CODE_DIRECT_DEBIT: &str = "54";

/// Service code marking a debit in status queries.
pub const SERVICE_CODE_DEBIT: &str = "54";
/// Service code marking a refund in status queries.
pub const SERVICE_CODE_REFUND: &str = "58";

/// Refund the full original amount.
pub const REFUND_TYPE_FULL: &str = "full";
/// Refund part of the original amount.
pub const REFUND_TYPE_PARTIAL: &str = "partial";
