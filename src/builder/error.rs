//! Build errors for the store factory.

use thiserror::Error;

/// Errors that can occur when constructing a store.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("Reducer not specified. Call .reducer(fn) before .build()")]
    MissingReducer,

    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Initial state must be a record, got {found}")]
    InitialStateNotRecord { found: &'static str },
}
