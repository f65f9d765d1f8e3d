//! Internal error codes for the service tier
//!
//! Codes are stable symbolic tags: they serialize by name, never by
//! ordinal, so reordering variants cannot break persisted or logged
//! values. Each code carries a static message template (positional
//! `{0}`, `{1}` placeholders) and an optional registry of field names
//! used when a template is instantiated with concrete values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Internal service error code
///
/// This vocabulary is internal-only; the web boundary maps it into
/// the external `WebErrorCode` vocabulary before anything reaches a
/// client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceErrorCode {
    /// Caller lacks permission for the operation
    AccessDenied,
    /// Account is disabled
    AccountDisabled,
    /// Malformed or otherwise unusable request
    BadRequest,
    /// Captcha was not validated
    CaptchaInvalid,
    /// Request body is not multipart
    ContentIsNotMultipart,
    /// Credit card declined by the processor
    CreditCardDeclined,
    /// Credit card is expired
    CreditCardExpired,
    /// Credit card number failed validation
    CreditCardInvalid,
    /// Supplied current password does not match
    CurrentPasswordIsNotCorrect,
    /// Object already exists
    Duplicate,
    /// Duplicate records within a single request
    DuplicateRecords,
    /// Email address has not been confirmed
    EmailAddressNotConfirmed,
    /// Email address failed validation
    EmailNotValid,
    /// An operation against an external system failed
    ExternalOperationFailed,
    /// An external system reported an error
    ExternalServiceError,
    /// Uploaded file could not be processed
    FailedToProcessFile,
    /// Resource could not be stored
    FailedToStoreResource,
    /// A field value failed validation
    FieldIsInvalid,
    /// A required field was not set
    FieldNotSet,
    /// An import is already in progress
    ImportInProgress,
    /// Accept-Encoding header is unusable
    InvalidAcceptEncodingHeader,
    /// Credentials did not match
    InvalidCredentials,
    /// Requested item does not exist
    NotFound,
    /// Operation is not implemented
    NotImplemented,
    /// Payment declined
    PaymentDeclined,
    /// Payment provider failure
    PaymentProvider,
    /// Unclassified error
    Unknown,
    /// User is already registered
    UserAlreadyRegistered,
    /// Id field was absent
    MissingIdField,
}

impl ServiceErrorCode {
    /// Every code, in declaration order
    ///
    /// Drives catalog construction and the mapping-coverage tests.
    pub const ALL: &'static [ServiceErrorCode] = &[
        Self::AccessDenied,
        Self::AccountDisabled,
        Self::BadRequest,
        Self::CaptchaInvalid,
        Self::ContentIsNotMultipart,
        Self::CreditCardDeclined,
        Self::CreditCardExpired,
        Self::CreditCardInvalid,
        Self::CurrentPasswordIsNotCorrect,
        Self::Duplicate,
        Self::DuplicateRecords,
        Self::EmailAddressNotConfirmed,
        Self::EmailNotValid,
        Self::ExternalOperationFailed,
        Self::ExternalServiceError,
        Self::FailedToProcessFile,
        Self::FailedToStoreResource,
        Self::FieldIsInvalid,
        Self::FieldNotSet,
        Self::ImportInProgress,
        Self::InvalidAcceptEncodingHeader,
        Self::InvalidCredentials,
        Self::NotFound,
        Self::NotImplemented,
        Self::PaymentDeclined,
        Self::PaymentProvider,
        Self::Unknown,
        Self::UserAlreadyRegistered,
        Self::MissingIdField,
    ];

    /// Message template for this code
    ///
    /// Placeholders are positional (`{0}`, `{1}`) and substituted at
    /// instantiation time.
    pub fn message_template(&self) -> &'static str {
        match self {
            Self::AccessDenied => "Access denied",
            Self::AccountDisabled => "Account is disabled",
            Self::BadRequest => "Bad request",
            Self::CaptchaInvalid => "Captcha was not validated",
            Self::ContentIsNotMultipart => "Request content is not multipart",
            Self::CreditCardDeclined => "Credit Card Declined",
            Self::CreditCardExpired => "Credit Card Expired",
            Self::CreditCardInvalid => "Credit Card Invalid",
            Self::CurrentPasswordIsNotCorrect => "Current password is not correct",
            Self::Duplicate => "Object already exists",
            Self::DuplicateRecords => "Duplicate records exist in request",
            Self::EmailAddressNotConfirmed => "Email address is not confirmed",
            Self::EmailNotValid => "The email address is not valid",
            Self::ExternalOperationFailed => "External operation failed",
            Self::ExternalServiceError => "External service reported an error",
            Self::FailedToProcessFile => "Failed to process file. Error message: {0}",
            Self::FailedToStoreResource => "Failed to store resource with key = {0}",
            Self::FieldIsInvalid => "The field: {0} is invalid with value: {1}",
            Self::FieldNotSet => "A required field was not set",
            Self::ImportInProgress => "An import is already in progress",
            Self::InvalidAcceptEncodingHeader => {
                "Invalid Accept-Encoding header. Should contain gzip or deflate"
            }
            Self::InvalidCredentials => "Invalid credentials",
            Self::NotFound => "The requested item was not found: {0}",
            Self::NotImplemented => "Not implemented",
            Self::PaymentDeclined => "Payment declined",
            Self::PaymentProvider => "Payment provider failure",
            Self::Unknown => "Unknown error",
            Self::UserAlreadyRegistered => "User already registered",
            Self::MissingIdField => "The Id field cannot be NULL.",
        }
    }

    /// Registered field names for this code
    ///
    /// Names are zipped against the values supplied at instantiation,
    /// shortest-wins. Codes without registered names keep an empty
    /// field map even when values are supplied.
    pub fn field_names(&self) -> &'static [&'static str] {
        match self {
            Self::FailedToStoreResource => &["resource_key"],
            Self::FieldIsInvalid => &["field_name", "value"],
            _ => &[],
        }
    }

    /// Stable string name, identical to the serde representation
    pub fn name(&self) -> &'static str {
        match self {
            Self::AccessDenied => "access_denied",
            Self::AccountDisabled => "account_disabled",
            Self::BadRequest => "bad_request",
            Self::CaptchaInvalid => "captcha_invalid",
            Self::ContentIsNotMultipart => "content_is_not_multipart",
            Self::CreditCardDeclined => "credit_card_declined",
            Self::CreditCardExpired => "credit_card_expired",
            Self::CreditCardInvalid => "credit_card_invalid",
            Self::CurrentPasswordIsNotCorrect => "current_password_is_not_correct",
            Self::Duplicate => "duplicate",
            Self::DuplicateRecords => "duplicate_records",
            Self::EmailAddressNotConfirmed => "email_address_not_confirmed",
            Self::EmailNotValid => "email_not_valid",
            Self::ExternalOperationFailed => "external_operation_failed",
            Self::ExternalServiceError => "external_service_error",
            Self::FailedToProcessFile => "failed_to_process_file",
            Self::FailedToStoreResource => "failed_to_store_resource",
            Self::FieldIsInvalid => "field_is_invalid",
            Self::FieldNotSet => "field_not_set",
            Self::ImportInProgress => "import_in_progress",
            Self::InvalidAcceptEncodingHeader => "invalid_accept_encoding_header",
            Self::InvalidCredentials => "invalid_credentials",
            Self::NotFound => "not_found",
            Self::NotImplemented => "not_implemented",
            Self::PaymentDeclined => "payment_declined",
            Self::PaymentProvider => "payment_provider",
            Self::Unknown => "unknown",
            Self::UserAlreadyRegistered => "user_already_registered",
            Self::MissingIdField => "missing_id_field",
        }
    }
}

impl fmt::Display for ServiceErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
