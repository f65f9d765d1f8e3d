//! Success-or-errors accumulator for service operations
//!
//! A `ServiceResult` is a single-owner, per-request value: one call
//! chain constructs and mutates it, then either reads it or adapts it
//! at the web boundary. Nothing here blocks or performs I/O, so no
//! internal synchronization is needed as long as that ownership
//! discipline holds.

use crate::codes::ServiceErrorCode;
use crate::error::ServiceError;
use crate::fields::FieldValue;

/// Result of a service-tier operation
///
/// Conceptually either a success (payload set, no errors) or a
/// failure (one or more errors). Exclusivity is deliberately not
/// enforced: a payload and errors may coexist after mutation, and
/// callers that care must check [`has_errors`](Self::has_errors)
/// before trusting the payload.
#[derive(Debug, Clone, Default)]
pub struct ServiceResult<T> {
    /// The produced value, if the operation got far enough to make one
    pub payload: Option<T>,
    errors: Vec<ServiceError>,
}

impl<T> ServiceResult<T> {
    /// Create a successful result carrying `payload`
    pub fn success(payload: T) -> Self {
        Self {
            payload: Some(payload),
            errors: Vec::new(),
        }
    }

    /// Create a result with no payload and no errors
    ///
    /// Used as an accumulator before the outcome is known.
    pub fn empty() -> Self {
        Self {
            payload: None,
            errors: Vec::new(),
        }
    }

    /// Create a failed result with a single instantiated error
    pub fn failure(template: &ServiceError, values: Vec<FieldValue>) -> Self {
        let mut result = Self::empty();
        result.add_error(template, values);
        result
    }

    /// Append an instantiation of `template`, preserving insertion order
    ///
    /// Duplicate codes are allowed and preserved; nothing is deduped.
    pub fn add_error(&mut self, template: &ServiceError, values: Vec<FieldValue>) -> &mut Self {
        self.errors.push(template.create_from(values));
        self
    }

    /// Append already-built errors, preserving their order
    pub fn add_errors<I>(&mut self, errors: I) -> &mut Self
    where
        I: IntoIterator<Item = ServiceError>,
    {
        self.errors.extend(errors);
        self
    }

    /// True if at least one error has been recorded
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// True if no errors have been recorded
    pub fn has_no_errors(&self) -> bool {
        !self.has_errors()
    }

    /// True if any recorded error carries `code`
    pub fn has_error_code(&self, code: ServiceErrorCode) -> bool {
        self.errors.iter().any(|err| err.code == code)
    }

    /// Keep only the errors matching `filter`, preserving relative order
    pub fn filter_errors<F>(&mut self, filter: F)
    where
        F: FnMut(&ServiceError) -> bool,
    {
        self.errors.retain(filter);
    }

    /// `"{code}: {message}"` of the first error, if any
    pub fn first_error_text(&self) -> Option<String> {
        self.errors.first().map(ServiceError::to_string)
    }

    /// Fresh result carrying only this result's errors
    ///
    /// The payload is dropped, which lets a failure propagate upward
    /// across payload types.
    pub fn as_error_result<U>(&self) -> ServiceResult<U> {
        ServiceResult {
            payload: None,
            errors: self.errors.clone(),
        }
    }

    /// The recorded errors, in insertion order
    pub fn errors(&self) -> &[ServiceError] {
        &self.errors
    }

    /// Consume the result, yielding payload and errors
    pub fn into_parts(self) -> (Option<T>, Vec<ServiceError>) {
        (self.payload, self.errors)
    }
}
