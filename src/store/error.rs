//! Call-time errors raised by store operations.

use thiserror::Error;

/// Errors that can occur when calling into a live store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The dispatched action is not a structured record
    #[error("Actions must be records, got {found}")]
    ActionNotRecord { found: &'static str },

    /// `dispatch` was called from inside the store's own reducer
    #[error("Reducers may not dispatch actions")]
    DispatchInReducer,

    /// The reducer returned a value that is not a structured record
    #[error("Reducers must return records, got {found}")]
    StateNotRecord { found: &'static str },

    /// `dispatch` was called while `with_state` was borrowing the state
    #[error("Cannot dispatch while the state is being read")]
    DispatchWhileReading,

    /// `subscribe` was called from inside the store's own reducer
    #[error("Cannot subscribe while the reducer is executing")]
    SubscribeInReducer,

    /// The state could not be decoded into the requested type
    #[error("State does not match the requested type: {0}")]
    Decode(#[from] serde_json::Error),
}
