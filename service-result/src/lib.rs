//! Service-tier result and error model
//!
//! This crate provides the internal half of the cross-layer error
//! propagation model:
//! - [`ServiceErrorCode`]: closed set of internal failure conditions
//! - [`ServiceError`]: immutable, parameterized error templates with a
//!   process-wide catalog
//! - [`FieldValue`] / [`FieldMap`]: ordered, closed-kind field bags
//! - [`ServiceResult`]: success-or-errors accumulator for service calls
//!
//! Internal errors never cross the web boundary directly; the
//! `web-result` crate translates them into the client-facing
//! vocabulary.
//!
//! # Example
//!
//! ```
//! use service_result::{ServiceError, ServiceErrorCode, ServiceResult};
//!
//! fn rename_user(name: &str) -> ServiceResult<u64> {
//!     if name.is_empty() {
//!         return ServiceResult::failure(
//!             ServiceError::template(ServiceErrorCode::FieldIsInvalid),
//!             vec!["name".into(), name.into()],
//!         );
//!     }
//!     ServiceResult::success(42)
//! }
//!
//! let result = rename_user("");
//! assert!(result.has_error_code(ServiceErrorCode::FieldIsInvalid));
//! ```

mod codes;
mod error;
mod fields;
mod result;

pub use codes::ServiceErrorCode;
pub use error::ServiceError;
pub use fields::{FieldMap, FieldValue};
pub use result::ServiceResult;
