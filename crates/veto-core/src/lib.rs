//! Veto Core - rule-based validation with error accumulation
//!
//! This crate provides the validation half of veto: a code resolver that
//! turns error codes into ordered catalog lookup keys, an append-only
//! collector of field and object violations, and a validator trait for
//! running a fixed rule set against a candidate object.
//!
//! # Main Components
//!
//! - **Code Resolution**: deterministic, most-specific-first lookup keys
//! - **Error Collection**: per-pass accumulation with rejected-value capture
//! - **Validators**: rule sets selected explicitly by the caller
//!
//! # Example
//!
//! ```
//! use veto_core::{run_validator, ErrorCollector, Item, ItemValidator, ITEM_KIND};
//!
//! let item = Item::new(Some("Book"), Some(100), Some(1));
//! let mut errors = ErrorCollector::for_target(ITEM_KIND, &item).unwrap();
//! run_validator(&ItemValidator, ITEM_KIND, &item, &mut errors).unwrap();
//!
//! assert!(errors.has_errors());
//! assert_eq!(errors.global_errors().len(), 1);
//! ```

pub mod codes;
pub mod collector;
pub mod error;
pub mod item;
pub mod validator;

// Re-export main types for convenience
pub use codes::{value_type_name, CodeResolver, DefaultCodeResolver};
pub use collector::{ErrorCollector, Violation, ViolationScope};
pub use error::{Error, Result};
pub use item::{Item, ItemValidator, ITEM_KIND};
pub use validator::{run_validator, Validator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
