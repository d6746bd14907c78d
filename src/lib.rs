//! Reduxo: a minimal unidirectional state container
//!
//! A store holds exactly one state value. The only way to change it is to
//! dispatch an action: the store runs a pure reducer over the current state
//! and the action, replaces its state with the result, and synchronously
//! notifies every subscribed listener.
//!
//! # Core Concepts
//!
//! - **Record**: shape contract for state and actions via the `Record` trait
//! - **Store**: state register, dispatch pipeline and listener registry
//! - **Subscription**: capability that removes exactly one registration
//!
//! # Example
//!
//! ```rust
//! use reduxo::{create_store, json::merge};
//! use serde_json::{json, Value};
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! fn reducer(state: &Value, action: &Value) -> Value {
//!     if action["type"] == "change" {
//!         merge(state, &action["body"])
//!     } else {
//!         state.clone()
//!     }
//! }
//!
//! let store = create_store(reducer, json!({"foo": "bar"})).unwrap();
//!
//! let calls = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&calls);
//! let subscription = store
//!     .subscribe(move || {
//!         counter.fetch_add(1, Ordering::SeqCst);
//!     })
//!     .unwrap();
//!
//! store.dispatch(json!({"type": "change", "body": {"foo": "baz"}})).unwrap();
//! assert_eq!(store.get_state()["foo"], "baz");
//! assert_eq!(calls.load(Ordering::SeqCst), 1);
//!
//! subscription.unsubscribe();
//! store.dispatch(json!({})).unwrap();
//! assert_eq!(calls.load(Ordering::SeqCst), 1);
//! ```

pub mod builder;
pub mod core;
pub mod json;
pub mod store;

// Re-export commonly used types
pub use builder::{create_store, BuildError, StoreBuilder};
pub use crate::core::Record;
pub use json::JsonStore;
pub use store::{ListenerId, Reducer, Store, StoreError, Subscription};
