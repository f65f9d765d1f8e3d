//! Response envelope for the web boundary
//!
//! Bundles a payload with zero or more client-facing errors and
//! derives the HTTP status to serve. The status is recomputed on
//! every read, so the value behaves as a view: callers that mutate
//! the error list or the override must finish before reading.

use crate::error::{UnmappedCode, WebError};
use axum::Json;
use axum::response::IntoResponse;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use service_result::{ServiceError, ServiceResult};

/// Result of a web service call, as served to the client
///
/// Serialized shape is `payload` plus an `errors` array; the HTTP
/// status and the override are transport metadata and never part of
/// the body. Single-owner, built once per request/response cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebServiceResult<T> {
    /// The data returned by the call, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<T>,
    /// Errors encountered by the call, in occurrence order
    pub errors: Vec<WebError>,
    /// When set, served instead of the computed status
    #[serde(skip)]
    pub status_override: Option<StatusCode>,
}

impl<T> WebServiceResult<T> {
    /// Successful result carrying `payload`
    pub fn success(payload: T) -> Self {
        Self {
            payload: Some(payload),
            errors: Vec::new(),
            status_override: None,
        }
    }

    /// Failed result with a single client-facing error
    pub fn from_web_error(error: WebError) -> Self {
        Self {
            payload: None,
            errors: vec![error],
            status_override: None,
        }
    }

    /// Failed result mapped from a single service error
    pub fn from_service_error(error: &ServiceError) -> Result<Self, UnmappedCode> {
        Ok(Self::from_web_error(WebError::from_service(error)?))
    }

    /// Adapt a service result, mapping each error in order
    ///
    /// The payload passes through untouched; any unmapped internal
    /// code aborts the adaptation as a configuration fault.
    pub fn from_service_result(result: ServiceResult<T>) -> Result<Self, UnmappedCode> {
        let (payload, service_errors) = result.into_parts();
        let errors = service_errors
            .iter()
            .map(WebError::from_service)
            .collect::<Result<Vec<_>, UnmappedCode>>()?;
        Ok(Self {
            payload,
            errors,
            status_override: None,
        })
    }

    /// Set an explicit status, overriding the computed one
    pub fn with_status_override(mut self, status: StatusCode) -> Self {
        self.status_override = Some(status);
        self
    }

    /// HTTP status to serve, recomputed on every call
    ///
    /// Override if set, else 200 when there are no errors, else the
    /// status of the first error.
    pub fn http_status(&self) -> StatusCode {
        self.status_override.unwrap_or_else(|| {
            self.errors
                .first()
                .map_or(StatusCode::OK, WebError::http_status)
        })
    }

    /// Numeric form of [`http_status`](Self::http_status)
    pub fn status_code(&self) -> u16 {
        self.http_status().as_u16()
    }
}

impl<T: Serialize> IntoResponse for WebServiceResult<T> {
    fn into_response(self) -> axum::response::Response {
        let status = self.http_status();
        if status.is_server_error() {
            tracing::error!(
                status = %status,
                errors = self.errors.len(),
                "serving server error response"
            );
        }
        (status, Json(self)).into_response()
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> axum::response::Response {
        WebServiceResult::<()>::from_web_error(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::WebErrorCode;
    use service_result::ServiceErrorCode;

    #[test]
    fn test_success_is_ok_regardless_of_payload() {
        assert_eq!(WebServiceResult::success(42).http_status(), StatusCode::OK);
        assert_eq!(
            WebServiceResult::success(String::new()).http_status(),
            StatusCode::OK
        );
        let empty: WebServiceResult<()> = WebServiceResult {
            payload: None,
            errors: Vec::new(),
            status_override: None,
        };
        assert_eq!(empty.http_status(), StatusCode::OK);
    }

    #[test]
    fn test_status_comes_from_first_error() {
        let mut result = WebServiceResult::<()>::from_web_error(WebError::template(
            WebErrorCode::NotFound,
        ));
        result
            .errors
            .push(WebError::template(WebErrorCode::Unknown));

        // 404 from the first error, even though a later error is 500
        assert_eq!(result.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(result.status_code(), 404);
    }

    #[test]
    fn test_override_wins_with_zero_and_many_errors() {
        let result =
            WebServiceResult::success("ok").with_status_override(StatusCode::ACCEPTED);
        assert_eq!(result.http_status(), StatusCode::ACCEPTED);

        let mut result = WebServiceResult::<()>::from_web_error(WebError::template(
            WebErrorCode::NotFound,
        ));
        result
            .errors
            .push(WebError::template(WebErrorCode::Unknown));
        let result = result.with_status_override(StatusCode::IM_A_TEAPOT);
        assert_eq!(result.http_status(), StatusCode::IM_A_TEAPOT);
    }

    #[test]
    fn test_status_is_a_view_not_a_snapshot() {
        let mut result = WebServiceResult::success(1);
        assert_eq!(result.http_status(), StatusCode::OK);

        result
            .errors
            .push(WebError::template(WebErrorCode::AccessDenied));
        assert_eq!(result.http_status(), StatusCode::FORBIDDEN);

        result.status_override = Some(StatusCode::OK);
        assert_eq!(result.http_status(), StatusCode::OK);
    }

    #[test]
    fn test_from_service_result_maps_errors_in_order() {
        let mut service: ServiceResult<u64> = ServiceResult::empty();
        service
            .add_error(
                ServiceError::template(ServiceErrorCode::NotFound),
                vec!["order 7".into()],
            )
            .add_error(ServiceError::template(ServiceErrorCode::Unknown), vec![]);

        let web = WebServiceResult::from_service_result(service).unwrap();
        let codes: Vec<WebErrorCode> = web.errors.iter().map(|err| err.code).collect();
        assert_eq!(codes, [WebErrorCode::NotFound, WebErrorCode::Unknown]);
        assert_eq!(web.http_status(), StatusCode::NOT_FOUND);
        // NotFound opts into the service message
        assert_eq!(web.errors[0].message, "The requested item was not found: order 7");
    }

    #[test]
    fn test_from_service_result_passes_payload_through() {
        let service = ServiceResult::success("hello".to_owned());
        let web = WebServiceResult::from_service_result(service).unwrap();
        assert_eq!(web.payload.as_deref(), Some("hello"));
        assert!(web.errors.is_empty());
    }

    #[test]
    fn test_from_service_result_fails_on_unmapped_code() {
        let service: ServiceResult<()> = ServiceResult::failure(
            ServiceError::template(ServiceErrorCode::MissingIdField),
            vec![],
        );
        let err = WebServiceResult::from_service_result(service).unwrap_err();
        assert_eq!(err, UnmappedCode(ServiceErrorCode::MissingIdField));
    }

    #[test]
    fn test_from_service_error() {
        let web = WebServiceResult::<()>::from_service_error(ServiceError::template(
            ServiceErrorCode::AccessDenied,
        ))
        .unwrap();
        assert!(web.payload.is_none());
        assert_eq!(web.errors.len(), 1);
        assert_eq!(web.http_status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_serialized_shape_and_round_trip() {
        let service: ServiceResult<u32> = ServiceResult::failure(
            ServiceError::template(ServiceErrorCode::FieldIsInvalid),
            vec!["qty".into(), (-1).into()],
        );
        let web = WebServiceResult::from_service_result(service)
            .unwrap()
            .with_status_override(StatusCode::IM_A_TEAPOT);

        let json = serde_json::to_value(&web).unwrap();
        // Status and override are transport metadata, not body
        assert_eq!(
            json,
            serde_json::json!({
                "errors": [{
                    "code": "field_is_invalid",
                    "message": "The field: qty is invalid with value: -1",
                    "message_fields": {"field_name": "qty", "value": -1}
                }]
            })
        );

        let back: WebServiceResult<u32> =
            serde_json::from_str(&json.to_string()).unwrap();
        assert_eq!(back.errors, web.errors);
        let keys: Vec<&str> = back.errors[0]
            .message_fields
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["field_name", "value"]);
        // The skipped override deserializes to None, so the computed
        // status falls back to the first error
        assert_eq!(back.http_status(), StatusCode::BAD_REQUEST);
    }
}
