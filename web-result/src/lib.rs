//! Web-boundary result and error model
//!
//! The external half of the cross-layer error propagation model:
//! - [`WebErrorCode`]: client-facing error vocabulary with a fixed
//!   HTTP status table
//! - [`WebError`]: client-safe error values, produced from internal
//!   [`ServiceError`](service_result::ServiceError)s via a partial
//!   mapping table
//! - [`WebServiceResult`]: response envelope with a derived HTTP
//!   status and axum integration
//!
//! Internal error vocabulary never leaks: an internal code with no
//! registered mapping is a configuration fault ([`UnmappedCode`]),
//! not something to paper over with a generic error.
//!
//! # Example
//!
//! ```
//! use service_result::{ServiceError, ServiceErrorCode, ServiceResult};
//! use web_result::WebServiceResult;
//!
//! let service: ServiceResult<u64> = ServiceResult::failure(
//!     ServiceError::template(ServiceErrorCode::NotFound),
//!     vec!["order 42".into()],
//! );
//!
//! let web = WebServiceResult::from_service_result(service).unwrap();
//! assert_eq!(web.status_code(), 404);
//! ```

mod codes;
mod error;
mod result;

pub use codes::WebErrorCode;
pub use error::{UnmappedCode, WebError};
pub use result::WebServiceResult;
