//! Operation error types for the list engine
//!
//! Every [`OperationError`] is an expected, recoverable condition. The engine
//! reports it to the caller and records it as a notification; the list is left
//! exactly as it was before the call.

use thiserror::Error;

/// Why a list operation could not be applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OperationError {
    /// Structural operation attempted on an empty list
    #[error("List is empty")]
    EmptyList,

    /// Insert-after-key or delete-by-key referenced a value not in the list
    #[error("Key {key} not found in the list")]
    KeyNotFound { key: i64 },

    /// Search miss
    #[error("Value {value} not found in the list")]
    ValueNotFound { value: i64 },
}
