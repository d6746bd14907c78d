//! Store factory and builder API.
//!
//! `create_store` covers the common case of a reducer plus an initial
//! state. `StoreBuilder` exposes the same construction with optional
//! settings, and the `record!` macro removes the boilerplate of declaring
//! record types.

pub mod error;
pub mod macros;
pub mod store;

pub use error::BuildError;
pub use store::StoreBuilder;

use crate::core::Record;
use crate::store::Store;

/// Create a store from a reducer and an initial state.
///
/// Fails with [`BuildError::InitialStateNotRecord`] if the initial state is
/// not a structured record. The store takes ownership of `initial_state`.
///
/// # Example
///
/// ```
/// use reduxo::create_store;
/// use serde_json::{json, Value};
///
/// let store = create_store(|state: &Value, _action: &Value| state.clone(), json!({"foo": true}))
///     .unwrap();
/// assert_eq!(store.get_state()["foo"], json!(true));
///
/// let err = create_store(|state: &Value, _action: &Value| state.clone(), json!(42));
/// assert!(err.is_err());
/// ```
pub fn create_store<S, A, R>(reducer: R, initial_state: S) -> Result<Store<S, A>, BuildError>
where
    S: Record,
    A: Record,
    R: Fn(&S, &A) -> S + Send + Sync + 'static,
{
    StoreBuilder::new()
        .reducer(reducer)
        .initial(initial_state)
        .build()
}
