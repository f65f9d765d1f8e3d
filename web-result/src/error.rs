//! Client-facing error values and the service→web mapper
//!
//! A `WebError` is what a client is allowed to see: an external code,
//! a client-safe message, and (when the code opts in) the field map of
//! the originating service error. The mapper is the only way a
//! `ServiceError` becomes a `WebError`.

use crate::codes::WebErrorCode;
use serde::{Deserialize, Serialize};
use service_result::{FieldMap, ServiceError, ServiceErrorCode};
use thiserror::Error;

/// A service error code reached the boundary without a web mapping
///
/// This is a configuration fault, not a domain error: it means the
/// mapping table in [`WebErrorCode::from_service`] is out of date.
/// Callers must treat it as unrecoverable (propagate or abort), never
/// convert it into a domain error value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("service error code {0} is not mapped to a web error")]
pub struct UnmappedCode(pub ServiceErrorCode);

/// Client-facing error
///
/// The HTTP status is derived from the code and never serialized;
/// the body carries only the symbolic code, message, and field map.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("{code}: {message}")]
pub struct WebError {
    /// External error code
    pub code: WebErrorCode,
    /// Client-safe message
    pub message: String,
    /// Ordered field map (empty unless the code carries service fields)
    #[serde(default, skip_serializing_if = "FieldMap::is_empty")]
    pub message_fields: FieldMap,
}

impl WebError {
    /// Canonical external template for `code`
    pub fn template(code: WebErrorCode) -> WebError {
        WebError {
            code,
            message: code.default_message().to_owned(),
            message_fields: FieldMap::new(),
        }
    }

    /// Ad-hoc 400 with a custom client-safe message
    pub fn bad_request(message: impl Into<String>) -> WebError {
        WebError {
            code: WebErrorCode::BadRequest,
            message: message.into(),
            message_fields: FieldMap::new(),
        }
    }

    /// Map a service error into its client-facing representation
    ///
    /// Fails fast with [`UnmappedCode`] when the internal code has no
    /// entry in the mapping table; there is no generic-error fallback,
    /// since that would hide a table maintenance bug. For codes with
    /// [`uses_service_message`](WebErrorCode::uses_service_message)
    /// the service message and fields are carried onto the external
    /// code and status; otherwise the canonical template comes back
    /// unchanged and the service content is discarded.
    pub fn from_service(error: &ServiceError) -> Result<WebError, UnmappedCode> {
        let code = WebErrorCode::from_service(error.code).ok_or(UnmappedCode(error.code))?;
        let mut web = WebError::template(code);
        if code.uses_service_message() {
            web.message = error.message.clone();
            web.message_fields = error.message_fields.clone();
        }
        Ok(web)
    }

    /// HTTP status for this error, derived from the code
    pub fn http_status(&self) -> http::StatusCode {
        self.code.http_status()
    }
}
