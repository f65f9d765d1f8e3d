//! Service error templates and the process-wide catalog
//!
//! Every [`ServiceErrorCode`] has exactly one canonical template in
//! the catalog, built once and read-only afterwards. Instantiating a
//! template with concrete values produces a new value; the singleton
//! is never mutated.

use crate::codes::ServiceErrorCode;
use crate::fields::{FieldMap, FieldValue};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

/// Canonical template catalog, one entry per code
///
/// A duplicate key here is a programming error and aborts at first
/// access rather than surfacing as a runtime error path.
static CATALOG: LazyLock<IndexMap<ServiceErrorCode, ServiceError>> = LazyLock::new(|| {
    let mut catalog = IndexMap::with_capacity(ServiceErrorCode::ALL.len());
    for &code in ServiceErrorCode::ALL {
        let previous = catalog.insert(
            code,
            ServiceError {
                code,
                message: code.message_template().to_owned(),
                message_fields: FieldMap::new(),
            },
        );
        assert!(
            previous.is_none(),
            "duplicate error code in catalog: {code}"
        );
    }
    catalog
});

/// Internal service error
///
/// Either a catalog template (message still contains `{0}`-style
/// placeholders, fields empty) or an instantiated value produced by
/// [`ServiceError::create_from`]. Immutable once built.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("{code}: {message}")]
pub struct ServiceError {
    /// The internal code identifying the failure condition
    pub code: ServiceErrorCode,
    /// Human-readable message, internal vocabulary
    pub message: String,
    /// Ordered field map, populated on instantiation
    #[serde(default, skip_serializing_if = "FieldMap::is_empty")]
    pub message_fields: FieldMap,
}

impl ServiceError {
    /// Look up the canonical template for `code`
    pub fn template(code: ServiceErrorCode) -> &'static ServiceError {
        &CATALOG[&code]
    }

    /// Instantiate this template with concrete values
    ///
    /// With no values the template comes back unchanged. Otherwise the
    /// message has its positional placeholders substituted in argument
    /// order, and the field map zips the code's registered field names
    /// against the values, shortest-wins: extra values are dropped,
    /// extra names are omitted, and codes with no registered names
    /// keep an empty map.
    pub fn create_from(&self, values: Vec<FieldValue>) -> ServiceError {
        if values.is_empty() {
            return self.clone();
        }

        let message = render(&self.message, &values);
        let message_fields = self
            .code
            .field_names()
            .iter()
            .zip(values.iter())
            .map(|(name, value)| ((*name).to_owned(), value.clone()))
            .collect();

        ServiceError {
            code: self.code,
            message,
            message_fields,
        }
    }
}

/// Substitute positional `{0}`, `{1}`, ... placeholders
///
/// Placeholders without a matching value, and braces that do not form
/// a positional placeholder, are left literal.
fn render(template: &str, values: &[FieldValue]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        let Some(close) = tail.find('}') else {
            out.push_str(tail);
            return out;
        };
        match tail[1..close].parse::<usize>() {
            Ok(index) if index < values.len() => {
                out.push_str(&values[index].to_string());
            }
            _ => out.push_str(&tail[..=close]),
        }
        rest = &tail[close + 1..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_returns_singleton() {
        let a = ServiceError::template(ServiceErrorCode::NotFound);
        let b = ServiceError::template(ServiceErrorCode::NotFound);
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.code, ServiceErrorCode::NotFound);
        assert_eq!(a.message, "The requested item was not found: {0}");
        assert!(a.message_fields.is_empty());
    }

    #[test]
    fn test_catalog_covers_every_code() {
        for &code in ServiceErrorCode::ALL {
            assert_eq!(ServiceError::template(code).code, code);
        }
    }

    #[test]
    fn test_create_from_no_values_equals_template() {
        let template = ServiceError::template(ServiceErrorCode::FieldIsInvalid);
        let instance = template.create_from(vec![]);
        assert_eq!(&instance, template);
    }

    #[test]
    fn test_create_from_zips_registered_names() {
        let template = ServiceError::template(ServiceErrorCode::FieldIsInvalid);
        let instance = template.create_from(vec!["email".into(), "not-an-address".into()]);

        assert_eq!(instance.code, ServiceErrorCode::FieldIsInvalid);
        assert_eq!(
            instance.message,
            "The field: email is invalid with value: not-an-address"
        );
        let entries: Vec<(&str, String)> = instance
            .message_fields
            .iter()
            .map(|(k, v)| (k.as_str(), v.to_string()))
            .collect();
        assert_eq!(
            entries,
            [
                ("field_name", "email".to_owned()),
                ("value", "not-an-address".to_owned())
            ]
        );
    }

    #[test]
    fn test_create_from_drops_extra_values() {
        let template = ServiceError::template(ServiceErrorCode::FailedToStoreResource);
        let instance = template.create_from(vec!["images/1.png".into(), "spurious".into()]);

        assert_eq!(instance.message_fields.len(), 1);
        assert_eq!(
            instance.message_fields.get("resource_key").unwrap(),
            &FieldValue::from("images/1.png")
        );
        assert_eq!(
            instance.message,
            "Failed to store resource with key = images/1.png"
        );
    }

    #[test]
    fn test_create_from_without_registered_names_keeps_fields_empty() {
        let template = ServiceError::template(ServiceErrorCode::NotFound);
        let instance = template.create_from(vec!["order 42".into()]);

        assert_eq!(instance.message, "The requested item was not found: order 42");
        assert!(instance.message_fields.is_empty());
    }

    #[test]
    fn test_render_leaves_unmatched_placeholders_literal() {
        let template = ServiceError::template(ServiceErrorCode::FieldIsInvalid);
        let instance = template.create_from(vec!["email".into()]);
        assert_eq!(
            instance.message,
            "The field: email is invalid with value: {1}"
        );
    }

    #[test]
    fn test_render_ignores_non_positional_braces() {
        assert_eq!(
            render("literal {braces} and {0}", &["x".into()]),
            "literal {braces} and x"
        );
        assert_eq!(render("dangling {0", &["x".into()]), "dangling {0");
    }

    #[test]
    fn test_display() {
        let err = ServiceError::template(ServiceErrorCode::AccessDenied);
        assert_eq!(err.to_string(), "access_denied: Access denied");
    }

    #[test]
    fn test_serialize_skips_empty_fields() {
        let template = ServiceError::template(ServiceErrorCode::Duplicate);
        let json = serde_json::to_string(template).unwrap();
        assert_eq!(
            json,
            r#"{"code":"duplicate","message":"Object already exists"}"#
        );
    }

    #[test]
    fn test_serde_round_trip_preserves_field_order() {
        let template = ServiceError::template(ServiceErrorCode::FieldIsInvalid);
        let instance = template.create_from(vec!["qty".into(), (-3).into()]);

        let json = serde_json::to_string(&instance).unwrap();
        let back: ServiceError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, instance);
        let keys: Vec<&str> = back.message_fields.keys().map(String::as_str).collect();
        assert_eq!(keys, ["field_name", "value"]);
    }
}
