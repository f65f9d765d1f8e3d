//! Client-facing error codes and their static tables
//!
//! Each code carries a fixed HTTP status, a client-safe default
//! message, and a flag controlling whether the mapped service message
//! replaces the default. The internal→external mapping table lives
//! here too; it is partial on purpose, and an unmapped internal code
//! surfaces as a fault at the boundary rather than falling through to
//! a generic error.

use http::StatusCode;
use serde::{Deserialize, Serialize};
use service_result::ServiceErrorCode;
use std::fmt;

/// External (client-facing) error code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WebErrorCode {
    /// Caller lacks permission
    AccessDenied,
    /// Account disabled
    AccountDisabled,
    /// Generic bad request
    BadRequest,
    /// Captcha was not validated
    CaptchaInvalid,
    /// Body is not multipart
    ContentIsNotMultipart,
    /// Credit card declined
    CreditCardDeclined,
    /// Credit card expired
    CreditCardExpired,
    /// Credit card invalid
    CreditCardInvalid,
    /// Current password mismatch
    CurrentPasswordIsNotCorrect,
    /// Object already exists
    Duplicate,
    /// Duplicate records in request
    DuplicateRecords,
    /// Email address not confirmed
    EmailAddressNotConfirmed,
    /// Email address invalid
    EmailNotValid,
    /// External operation failed
    ExternalOperationFailed,
    /// External service error
    ExternalServiceError,
    /// Uploaded file could not be processed
    FailedToProcessFile,
    /// Resource could not be stored
    FailedToStoreResource,
    /// Field value invalid
    FieldIsInvalid,
    /// Required field not set
    FieldNotSet,
    /// Import already in progress
    ImportInProgress,
    /// Accept-Encoding header unusable
    InvalidAcceptEncodingHeader,
    /// Credentials did not match
    InvalidCredentials,
    /// Requested item does not exist
    NotFound,
    /// Not implemented
    NotImplemented,
    /// Payment declined
    PaymentDeclined,
    /// Payment provider error
    PaymentProvider,
    /// Unclassified server-side error
    Unknown,
}

impl WebErrorCode {
    /// Fixed HTTP status for this code
    ///
    /// The status is transport metadata: derived here, never carried
    /// in a serialized body.
    pub fn http_status(&self) -> StatusCode {
        match self {
            // 401 Unauthorized
            Self::AccountDisabled | Self::InvalidCredentials => StatusCode::UNAUTHORIZED,

            // 403 Forbidden
            Self::AccessDenied
            | Self::CurrentPasswordIsNotCorrect
            | Self::EmailAddressNotConfirmed => StatusCode::FORBIDDEN,

            // 404 Not Found
            Self::NotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::CaptchaInvalid
            | Self::CreditCardDeclined
            | Self::CreditCardExpired
            | Self::CreditCardInvalid
            | Self::PaymentDeclined => StatusCode::CONFLICT,

            // 500 Internal Server Error
            Self::ExternalOperationFailed
            | Self::FailedToStoreResource
            | Self::PaymentProvider
            | Self::Unknown => StatusCode::INTERNAL_SERVER_ERROR,

            // 501 Not Implemented
            Self::NotImplemented => StatusCode::NOT_IMPLEMENTED,

            // 400 Bad Request (validation and business errors)
            Self::BadRequest
            | Self::ContentIsNotMultipart
            | Self::Duplicate
            | Self::DuplicateRecords
            | Self::EmailNotValid
            | Self::ExternalServiceError
            | Self::FailedToProcessFile
            | Self::FieldIsInvalid
            | Self::FieldNotSet
            | Self::ImportInProgress
            | Self::InvalidAcceptEncodingHeader => StatusCode::BAD_REQUEST,
        }
    }

    /// Client-safe default message (may be empty)
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::AccessDenied => "",
            Self::AccountDisabled => "Account Disabled",
            Self::BadRequest => "",
            Self::CaptchaInvalid => "Captcha was not validated",
            Self::ContentIsNotMultipart => "",
            Self::CreditCardDeclined => "Credit Card Declined",
            Self::CreditCardExpired => "Credit Card Expired",
            Self::CreditCardInvalid => "Credit Card Invalid",
            Self::CurrentPasswordIsNotCorrect => "Current password is not correct",
            Self::Duplicate => "Object already exists",
            Self::DuplicateRecords => "Duplicate records in request",
            Self::EmailAddressNotConfirmed => "Email address is not confirmed",
            Self::EmailNotValid => "The email address is not valid",
            Self::ExternalOperationFailed => "",
            Self::ExternalServiceError => "",
            Self::FailedToProcessFile => "Failed To Process Uploaded File",
            Self::FailedToStoreResource => "Failed to store resource",
            Self::FieldIsInvalid => "Field invalid",
            Self::FieldNotSet => "Field not Set",
            Self::ImportInProgress => "Import already in progress",
            Self::InvalidAcceptEncodingHeader => "",
            Self::InvalidCredentials => "Invalid credentials",
            Self::NotFound => "Not Found",
            Self::NotImplemented => "",
            Self::PaymentDeclined => "Payment Declined",
            Self::PaymentProvider => "Payment Provider Error",
            Self::Unknown => "",
        }
    }

    /// Whether a mapped service error's message and fields replace
    /// the default message
    ///
    /// One-directional: the external code and status are never
    /// replaced by the service error's content.
    pub fn uses_service_message(&self) -> bool {
        matches!(
            self,
            Self::FailedToProcessFile
                | Self::FieldIsInvalid
                | Self::FieldNotSet
                | Self::ImportInProgress
                | Self::NotFound
                | Self::PaymentProvider
        )
    }

    /// The internal→external mapping table
    ///
    /// Partial on purpose: internal codes without an entry must never
    /// reach a client, and the test suite asserts the exact unmapped
    /// set so a catalog addition cannot silently widen the gap.
    pub fn from_service(code: ServiceErrorCode) -> Option<WebErrorCode> {
        match code {
            ServiceErrorCode::AccessDenied => Some(Self::AccessDenied),
            ServiceErrorCode::AccountDisabled => Some(Self::AccountDisabled),
            ServiceErrorCode::CreditCardDeclined => Some(Self::CreditCardDeclined),
            ServiceErrorCode::CreditCardExpired => Some(Self::CreditCardExpired),
            ServiceErrorCode::CreditCardInvalid => Some(Self::CreditCardInvalid),
            ServiceErrorCode::CurrentPasswordIsNotCorrect => {
                Some(Self::CurrentPasswordIsNotCorrect)
            }
            ServiceErrorCode::Duplicate => Some(Self::Duplicate),
            ServiceErrorCode::DuplicateRecords => Some(Self::DuplicateRecords),
            ServiceErrorCode::EmailAddressNotConfirmed => Some(Self::EmailAddressNotConfirmed),
            ServiceErrorCode::FailedToProcessFile => Some(Self::FailedToProcessFile),
            ServiceErrorCode::FailedToStoreResource => Some(Self::FailedToStoreResource),
            ServiceErrorCode::FieldIsInvalid => Some(Self::FieldIsInvalid),
            ServiceErrorCode::ImportInProgress => Some(Self::ImportInProgress),
            ServiceErrorCode::InvalidAcceptEncodingHeader => {
                Some(Self::InvalidAcceptEncodingHeader)
            }
            ServiceErrorCode::NotFound => Some(Self::NotFound),
            ServiceErrorCode::PaymentDeclined => Some(Self::PaymentDeclined),
            ServiceErrorCode::Unknown => Some(Self::Unknown),
            _ => None,
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
        }
    }
}

impl fmt::Display for WebErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
