//! Message-code resolution
//!
//! This module turns an error code plus the identity of what was rejected
//! into an ordered list of catalog lookup keys, most specific first. A
//! catalog may define a message at any tier (exact object+field, field name
//! alone, value type alone, or a bare default) and the most specific
//! definition wins at render time.
//!
//! Copyright (c) 2025 Veto Team
//! Licensed under the Apache-2.0 license

/// Strategy for deriving candidate message codes for a violation.
///
/// Implementations must be pure: no side effects, and identical inputs must
/// always produce element-wise identical output.
pub trait CodeResolver {
    /// Candidate codes for an object-level (global) violation.
    fn resolve_object_codes(&self, error_code: &str, object_name: &str) -> Vec<String>;

    /// Candidate codes for a field-level violation.
    ///
    /// `field_type` is the value-shape name of the rejected field when it is
    /// known (see [`value_type_name`]); `None` skips the type tier.
    fn resolve_field_codes(
        &self,
        error_code: &str,
        object_name: &str,
        field: &str,
        field_type: Option<&str>,
    ) -> Vec<String>;
}

/// Default code resolver producing the standard fallback chain.
///
/// Object violations resolve to two codes:
///
/// 1. `code.objectName`
/// 2. `code`
///
/// Field violations resolve to up to four, deduplicated in order of first
/// occurrence:
///
/// 1. `code.objectName.field`
/// 2. `code.field`
/// 3. `code.fieldType` (only when the type is known)
/// 4. `code`
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCodeResolver;

impl CodeResolver for DefaultCodeResolver {
    fn resolve_object_codes(&self, error_code: &str, object_name: &str) -> Vec<String> {
        vec![
            format!("{}.{}", error_code, object_name),
            error_code.to_string(),
        ]
    }

    fn resolve_field_codes(
        &self,
        error_code: &str,
        object_name: &str,
        field: &str,
        field_type: Option<&str>,
    ) -> Vec<String> {
        let mut codes = Vec::with_capacity(4);
        push_unique(
            &mut codes,
            format!("{}.{}.{}", error_code, object_name, field),
        );
        push_unique(&mut codes, format!("{}.{}", error_code, field));
        if let Some(ty) = field_type {
            push_unique(&mut codes, format!("{}.{}", error_code, ty));
        }
        push_unique(&mut codes, error_code.to_string());
        codes
    }
}

fn push_unique(codes: &mut Vec<String>, code: String) {
    if !codes.contains(&code) {
        codes.push(code);
    }
}

/// Value-shape name used for the type tier of field codes.
///
/// Absent and null fields have no known type and return `None`.
pub fn value_type_name(value: &serde_json::Value) -> Option<&'static str> {
    use serde_json::Value;

    match value {
        Value::Null => None,
        Value::Bool(_) => Some("Boolean"),
        Value::Number(n) if n.is_f64() => Some("Float"),
        Value::Number(_) => Some("Integer"),
        Value::String(_) => Some("String"),
        Value::Array(_) => Some("Array"),
        Value::Object(_) => Some("Object"),
    }
}
