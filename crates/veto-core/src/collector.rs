//! Violation accumulation for a single validation pass
//!
//! An [`ErrorCollector`] is bound to one object name and one read-only
//! snapshot of the candidate under validation. Rules record failures through
//! `reject_field`/`reject_global`; nothing is ever deduplicated, merged, or
//! removed, and insertion order is evaluation order.
//!
//! Copyright (c) 2025 Veto Team
//! Licensed under the Apache-2.0 license

use crate::codes::{value_type_name, CodeResolver, DefaultCodeResolver};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Whether a violation is tied to one field or to the object as a whole
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationScope {
    Field,
    Global,
}

/// One recorded rule failure
///
/// Created exclusively by an [`ErrorCollector`] and immutable afterwards.
/// The candidate code list is computed at the moment of rejection and frozen
/// into the violation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// Field or Global
    pub scope: ViolationScope,

    /// Rejected field name; present iff `scope` is Field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,

    /// The originally submitted value, preserved for re-display.
    /// `None` means the field was absent (or null), not that it was empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected_value: Option<Value>,

    /// Candidate catalog keys, most specific first
    pub codes: Vec<String>,

    /// Positional arguments for `{0}`, `{1}`, ... template placeholders
    pub arguments: Vec<Value>,

    /// Literal fallback text when no code resolves
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_message: Option<String>,
}

impl Violation {
    /// The most specific candidate code.
    pub fn primary_code(&self) -> &str {
        self.codes.first().map(String::as_str).unwrap_or_default()
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "field '{}' rejected: {}", field, self.primary_code()),
            None => write!(f, "object rejected: {}", self.primary_code()),
        }
    }
}

/// Append-only accumulator of violations for one validation pass
///
/// One collector serves exactly one candidate object; a caller running
/// several validations allocates a fresh collector per pass.
pub struct ErrorCollector {
    object_name: String,
    target: Value,
    violations: Vec<Violation>,
    declared_types: HashMap<String, String>,
    resolver: Box<dyn CodeResolver>,
}

impl ErrorCollector {
    /// Create a collector bound to an already-snapshotted target.
    pub fn new<N: Into<String>>(object_name: N, target: Value) -> Self {
        Self {
            object_name: object_name.into(),
            target,
            violations: Vec::new(),
            declared_types: HashMap::new(),
            resolver: Box::new(DefaultCodeResolver),
        }
    }

    /// Create a collector by snapshotting any serializable candidate.
    pub fn for_target<N, T>(object_name: N, target: &T) -> Result<Self>
    where
        N: Into<String>,
        T: Serialize,
    {
        let object_name = object_name.into();
        let snapshot =
            serde_json::to_value(target).map_err(|source| Error::TargetSnapshot {
                object_name: object_name.clone(),
                source,
            })?;
        Ok(Self::new(object_name, snapshot))
    }

    /// Replace the code resolver used for subsequent rejections.
    pub fn with_resolver(mut self, resolver: Box<dyn CodeResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    /// Declare the static type of a field for the type tier of its codes.
    ///
    /// A declared type wins over the shape of the submitted value and keeps
    /// the type tier present even when the field arrives absent or null.
    pub fn with_field_type<F, T>(mut self, field: F, field_type: T) -> Self
    where
        F: Into<String>,
        T: Into<String>,
    {
        self.declared_types.insert(field.into(), field_type.into());
        self
    }

    /// Record a field-level violation.
    ///
    /// The current value of `field` is read from the target snapshot and
    /// preserved on the violation; a missing or null field is recorded as
    /// absent. The type tier of the candidate codes comes from the declared
    /// field type when one was registered, otherwise from the value-shape
    /// name of the submitted value when known.
    pub fn reject_field(
        &mut self,
        field: &str,
        error_code: &str,
        arguments: Vec<Value>,
        default_message: Option<&str>,
    ) {
        let rejected_value = self
            .target
            .get(field)
            .filter(|v| !v.is_null())
            .cloned();
        let field_type = self
            .declared_types
            .get(field)
            .map(String::as_str)
            .or_else(|| rejected_value.as_ref().and_then(value_type_name));
        let codes =
            self.resolver
                .resolve_field_codes(error_code, &self.object_name, field, field_type);

        debug!(
            object = %self.object_name,
            field,
            code = error_code,
            "recording field violation"
        );

        self.violations.push(Violation {
            scope: ViolationScope::Field,
            field: Some(field.to_string()),
            rejected_value,
            codes,
            arguments,
            default_message: default_message.map(str::to_string),
        });
    }

    /// Record an object-level violation not tied to any single field.
    pub fn reject_global(
        &mut self,
        error_code: &str,
        arguments: Vec<Value>,
        default_message: Option<&str>,
    ) {
        let codes = self
            .resolver
            .resolve_object_codes(error_code, &self.object_name);

        debug!(
            object = %self.object_name,
            code = error_code,
            "recording global violation"
        );

        self.violations.push(Violation {
            scope: ViolationScope::Global,
            field: None,
            rejected_value: None,
            codes,
            arguments,
            default_message: default_message.map(str::to_string),
        });
    }

    /// True iff at least one violation was recorded.
    pub fn has_errors(&self) -> bool {
        !self.violations.is_empty()
    }

    /// Number of recorded violations.
    pub fn error_count(&self) -> usize {
        self.violations.len()
    }

    /// All violations in insertion order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// True iff `field` has at least one violation.
    pub fn has_field_errors(&self, field: &str) -> bool {
        self.violations
            .iter()
            .any(|v| v.field.as_deref() == Some(field))
    }

    /// Violations for `field`, in insertion order.
    pub fn field_errors(&self, field: &str) -> Vec<&Violation> {
        self.violations
            .iter()
            .filter(|v| v.field.as_deref() == Some(field))
            .collect()
    }

    /// Object-level violations, in insertion order.
    pub fn global_errors(&self) -> Vec<&Violation> {
        self.violations
            .iter()
            .filter(|v| v.scope == ViolationScope::Global)
            .collect()
    }

    /// Name of the object under validation.
    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    /// Read-only snapshot of the candidate, for re-display.
    pub fn target(&self) -> &Value {
        &self.target
    }
}

impl fmt::Display for ErrorCollector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} violation(s) on '{}'",
            self.violations.len(),
            self.object_name
        )?;
        for violation in &self.violations {
            write!(f, "\n  - {}", violation)?;
        }
        Ok(())
    }
}

impl fmt::Debug for ErrorCollector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorCollector")
            .field("object_name", &self.object_name)
            .field("target", &self.target)
            .field("violations", &self.violations)
            .finish()
    }
}
