//! Error types for the veto core library
//!
//! Rule failures are never surfaced through this enum; they accumulate as
//! data in the [`ErrorCollector`](crate::collector::ErrorCollector). The
//! variants here cover wiring bugs and snapshot failures only.

use thiserror::Error;

/// Main error type for veto-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// A validator was run against an object kind it does not support
    #[error("validator '{validator}' does not support object kind '{kind}'")]
    UnsupportedTarget { validator: String, kind: String },

    /// The candidate object could not be snapshotted for validation
    #[error("failed to snapshot target '{object_name}' for validation")]
    TargetSnapshot {
        object_name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;
