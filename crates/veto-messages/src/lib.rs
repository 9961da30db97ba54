//! Veto Messages - localized rendering for validation violations
//!
//! This crate turns the candidate code lists recorded by `veto-core` into
//! display strings: a locale-aware key-to-template catalog plus a renderer
//! that walks the codes most-specific-first and substitutes positional
//! arguments into the winning template.
//!
//! # Example
//!
//! ```
//! use veto_messages::{render, MessageCatalog};
//! use serde_json::json;
//!
//! let catalog = MessageCatalog::new().with_message("", "range", "must be between {0} and {1}");
//! let codes = vec!["range.item.price".to_string(), "range".to_string()];
//!
//! let rendered = render(&codes, &[json!(1000), json!(1000000)], None, "", &catalog);
//! assert_eq!(rendered.text, "must be between 1000 and 1000000");
//! ```

pub mod catalog;
pub mod render;

// Re-export main types for convenience
pub use catalog::{CatalogError, MessageCatalog, DEFAULT_LOCALE};
pub use render::{render, render_violation, MessageSource, Rendered};
