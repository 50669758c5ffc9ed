//! Error types for store construction, dispatch, and view bindings.

use thiserror::Error;

/// Errors surfaced by the store and the view-binding layer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Dispatched action has an unusable type string.
    #[error("Invalid action: {reason}")]
    InvalidAction { reason: String },

    /// Slice name is not registered with this store.
    #[error("Unknown slice '{name}'")]
    UnknownSlice { name: String },

    /// Two slices registered under the same name.
    #[error("Duplicate slice name '{name}'")]
    DuplicateSliceName { name: String },

    /// Two mutators declared under the same name within a slice.
    #[error("Duplicate mutator '{mutator}' in slice '{slice}'")]
    DuplicateMutator { slice: String, mutator: String },

    /// Dispatch invoked while another dispatch or a notification pass is
    /// in progress.
    #[error("Dispatch already in progress")]
    ReentrantDispatch,

    /// View operation attempted with no ambient store in scope.
    #[error("No store provided in the current scope")]
    NoStoreInScope,
}
