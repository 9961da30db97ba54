//! Validator trait and checked execution
//!
//! A validator owns a fixed rule sequence for one kind of candidate object.
//! Rules run top-to-bottom unconditionally; an earlier failure never
//! suppresses a later rule, so one pass reports everything wrong at once.
//!
//! Copyright (c) 2025 Veto Team
//! Licensed under the Apache-2.0 license

use crate::collector::ErrorCollector;
use crate::error::{Error, Result};
use tracing::debug;

/// A named rule set for one kind of candidate object.
///
/// Implementations are orchestrated, not self-dispatching: the caller picks
/// the validator, checks [`supports`](Validator::supports), and hands it a
/// collector it owns. Rules are free to call `reject_field`/`reject_global`
/// any number of times and must have no other side effects.
pub trait Validator {
    /// The candidate type this rule set inspects.
    type Target;

    /// Identifies this validator in wiring errors.
    fn name(&self) -> &str;

    /// Whether this rule set applies to candidates of `kind`.
    fn supports(&self, kind: &str) -> bool;

    /// Run every rule against `target`, recording failures into `errors`.
    ///
    /// Rule failures are data, not errors: this method never fails, and the
    /// caller branches on `errors.has_errors()` afterwards.
    fn validate(&self, target: &Self::Target, errors: &mut ErrorCollector);
}

/// Checked entry point for running a validator.
///
/// Fails fast with [`Error::UnsupportedTarget`] when `kind` is not supported,
/// without running any rule. An unsupported kind is a wiring bug in the
/// caller, never a property of user input.
pub fn run_validator<V: Validator>(
    validator: &V,
    kind: &str,
    target: &V::Target,
    errors: &mut ErrorCollector,
) -> Result<()> {
    if !validator.supports(kind) {
        return Err(Error::UnsupportedTarget {
            validator: validator.name().to_string(),
            kind: kind.to_string(),
        });
    }

    validator.validate(target, errors);
    debug!(
        validator = validator.name(),
        kind,
        violations = errors.error_count(),
        "validation pass complete"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct AlwaysRejects;

    impl Validator for AlwaysRejects {
        type Target = ();

        fn name(&self) -> &str {
            "alwaysRejects"
        }

        fn supports(&self, kind: &str) -> bool {
            kind == "unit"
        }

        fn validate(&self, _target: &Self::Target, errors: &mut ErrorCollector) {
            errors.reject_global("broken", vec![], None);
        }
    }

    #[test]
    fn test_run_validator_records_into_collector() {
        let mut errors = ErrorCollector::new("unit", json!({}));
        run_validator(&AlwaysRejects, "unit", &(), &mut errors).unwrap();
        assert!(errors.has_errors());
        assert_eq!(errors.global_errors().len(), 1);
    }

    #[test]
    fn test_unsupported_kind_fails_fast() {
        let mut errors = ErrorCollector::new("unit", json!({}));
        let result = run_validator(&AlwaysRejects, "order", &(), &mut errors);

        match result {
            Err(Error::UnsupportedTarget { validator, kind }) => {
                assert_eq!(validator, "alwaysRejects");
                assert_eq!(kind, "order");
            }
            other => panic!("expected UnsupportedTarget, got {:?}", other.map(|_| ())),
        }
        // No rule ran.
        assert!(!errors.has_errors());
    }
}
